//! Category based logging.
//!
//! A [`Logger`] is installed once with [`set_logger`], after which the `log_*` macros write to it.
//! While no logger is installed the macros don't do anything, so libraries can log unconditionally.

use core::{
    fmt::{Display, Arguments},
    sync::atomic::{AtomicU8, self},
    time::Duration,
};
use std::{
    fmt::Write as _,
    io::{self, Write as _},
    time::Instant,
};
use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};

static LOGGER : RwLock<Option<&'static Logger>> = parking_lot::const_rwlock(None);
static START : Lazy<Instant> = Lazy::new(Instant::now);

/// Install the global logger.
pub fn set_logger(logger: &'static Logger) {
    Lazy::force(&START);
    *LOGGER.write() = Some(logger);
}

/// Remove the global logger, returning the previously installed one.
pub fn take_logger() -> Option<&'static Logger> {
    LOGGER.write().take()
}

pub fn get_logger() -> Option<&'static Logger> {
    *LOGGER.read()
}

/// Time since the global logger was first installed.
pub fn elapsed() -> Duration {
    START.elapsed()
}

/// Severity of a log message, from most to least severe
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum LogLevel {
    /// Unrecoverable
    Severe,
    Error,
    Warning,
    Info,
    Verbose,
    /// Messages only useful when debugging, logged together with their location
    Debug,
}

impl LogLevel {
    fn tag(self, colored: bool) -> &'static str {
        match (self, colored) {
            (LogLevel::Severe , true) => "\x1B[1m\x1B[41m\x1B[30m[SEVERE ]\x1B[0m",
            (LogLevel::Error  , true) =>                "\x1B[91m[ERROR  ]\x1B[0m",
            (LogLevel::Warning, true) =>                "\x1B[93m[WARNING]\x1B[0m",
            (LogLevel::Info   , true) =>                "\x1B[37m[INFO   ]\x1B[0m",
            (LogLevel::Verbose, true) =>                "\x1B[90m[VERBOSE]\x1B[0m",
            (LogLevel::Debug  , true) =>                "\x1B[94m[DEBUG  ]\x1B[0m",
            (LogLevel::Severe , false) => "[SEVERE ]",
            (LogLevel::Error  , false) => "[ERROR  ]",
            (LogLevel::Warning, false) => "[WARNING]",
            (LogLevel::Info   , false) => "[INFO   ]",
            (LogLevel::Verbose, false) => "[VERBOSE]",
            (LogLevel::Debug  , false) => "[DEBUG  ]",
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag(true))
    }
}

/// Category a message is logged under, shown as `[name]` or `[name(sub)]`
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LogCategory {
    name : &'static str,
    sub  : Option<&'static str>,
}

impl LogCategory {
    pub const fn new(name: &'static str) -> Self {
        Self { name, sub: None }
    }

    pub const fn new_with_sub(name: &'static str, sub: &'static str) -> Self {
        Self { name, sub: Some(sub) }
    }
}

impl Display for LogCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)?;
        if let Some(sub) = self.sub {
            write!(f, "({sub})")?;
        }
        Ok(())
    }
}

/// Where and when a message was logged
#[derive(Clone, Copy, Debug)]
pub struct LogLocation {
    pub file      : &'static str,
    pub line      : u32,
    pub function  : &'static str,
    pub timestamp : Duration,
}

impl LogLocation {
    pub const fn new(file: &'static str, line: u32, function: &'static str, timestamp: Duration) -> Self {
        Self { file, line, function, timestamp }
    }

    /// Only the more severe levels and debug messages show their source location
    fn shows_source(level: LogLevel) -> bool {
        matches!(level, LogLevel::Severe | LogLevel::Error | LogLevel::Debug)
    }
}

/// Name of the function passed in, used by the `log_*` macros that record a location.
pub fn get_func_name<F>(_: F) -> &'static str {
    core::any::type_name::<F>()
}

#[macro_export]
macro_rules! log_location {
    () => {
        $crate::LogLocation::new(file!(), line!(), "", $crate::elapsed())
    };
    ($func: expr) => {
        $crate::LogLocation::new(file!(), line!(), $crate::get_func_name($func), $crate::elapsed())
    };
}

type BoxedWriter = Box<dyn io::Write + Send>;

struct LoggerState {
    writers:        [Option<BoxedWriter>; Self::MAX_WRITERS],
    cache:          String,
    always_flush:   bool,
    log_to_console: bool,
    use_colors:     bool,
}

impl LoggerState {
    const MAX_WRITERS: usize = 8;
    const CACHE_FLUSH_LIMIT: usize = 4 * 1024;

    const fn new() -> Self {
        const NONE: Option<BoxedWriter> = None;

        Self {
            writers: [NONE; Self::MAX_WRITERS],
            cache: String::new(),
            always_flush: false,
            log_to_console: true,
            use_colors: true,
        }
    }

    fn write_message(&mut self, message: &str) {
        self.cache.push_str(message);
        self.flush_when_needed();
    }

    fn format_message(&mut self, fmt_args: Arguments) {
        _ = self.cache.write_fmt(fmt_args);
        self.flush_when_needed();
    }

    fn flush_when_needed(&mut self) {
        if self.always_flush || self.cache.len() > Self::CACHE_FLUSH_LIMIT {
            self.flush();
        }
    }

    fn flush(&mut self) {
        if self.cache.is_empty() {
            return;
        }

        if self.log_to_console {
            let mut stderr = io::stderr().lock();
            _ = stderr.write_all(self.cache.as_bytes());
            _ = stderr.flush();
        }

        for writer in self.writers.iter_mut().flatten() {
            _ = writer.write_all(self.cache.as_bytes());
            _ = writer.flush();
        }
        self.cache.clear();
    }
}

/// Logger
///
/// Supports up to 8 writers next to the console, e.g. a file or an external tool
pub struct Logger {
    state: Mutex<LoggerState>,
    max_log_level: AtomicU8,
}

impl Logger {
    pub const fn new() -> Self {
        Self {
            state: parking_lot::const_mutex(LoggerState::new()),
            max_log_level: AtomicU8::new(LogLevel::Debug as u8),
        }
    }

    /// Set the maximum log level (severe == lowest, debug == highest)
    pub fn set_max_level(&self, level: LogLevel) {
        self.max_log_level.store(level as u8, atomic::Ordering::Relaxed)
    }

    /// Check if a message at `level` will be written
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level as u8 <= self.max_log_level.load(atomic::Ordering::Relaxed)
    }

    /// Set whether the logger should flush after each write
    pub fn set_always_flush(&self, always_flush: bool) {
        self.state.lock().always_flush = always_flush;
    }

    /// Set whether the logger should log it's output to console
    pub fn set_log_to_console(&self, log_to_console: bool) {
        let mut state = self.state.lock();

        // Pending messages still go to the console setting they were logged with
        state.flush();
        state.log_to_console = log_to_console;
    }

    /// Set whether the level tags are written with ANSI colors
    pub fn set_use_colors(&self, use_colors: bool) {
        self.state.lock().use_colors = use_colors;
    }

    /// Add a writer that receives everything the logger flushes.
    ///
    /// Returns the slot of the writer, to pass to [`Logger::remove_writer`], or gives the writer back when all slots are taken.
    pub fn add_writer(&self, writer: BoxedWriter) -> Result<usize, BoxedWriter> {
        let mut state = self.state.lock();
        match state.writers.iter().position(Option::is_none) {
            Some(slot) => {
                state.writers[slot] = Some(writer);
                Ok(slot)
            },
            None => Err(writer),
        }
    }

    pub fn remove_writer(&self, slot: usize) -> Option<BoxedWriter> {
        self.state.lock().writers.get_mut(slot)?.take()
    }

    /// Log a message
    pub fn log(&self, category: LogCategory, level: LogLevel, loc: LogLocation, text: &str) {
        self.log_fmt(category, level, loc, format_args!("{text}"));
    }

    pub fn log_fmt(&self, category: LogCategory, level: LogLevel, loc: LogLocation, format: Arguments) {
        if !self.is_enabled(level) {
            return;
        }

        let timestamp = loc.timestamp.as_secs_f64();
        let mut state = self.state.lock();
        let tag = level.tag(state.use_colors);
        if LogLocation::shows_source(level) {
            state.format_message(format_args!("[{timestamp:>10.4}] {tag} [{category}] ({}:{}: {}): ", loc.file, loc.line, loc.function));
        } else {
            state.format_message(format_args!("[{timestamp:>10.4}] {tag} [{category}]: "));
        }
        state.format_message(format);
        state.write_message("\n");
    }

    pub fn flush(&self) {
        self.state.lock().flush()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.flush();
    }
}

#[macro_export]
macro_rules! log {
    ($category:expr, $level:expr, $func:expr, $($arg:tt)+) => {
        if let Some(logger) = $crate::get_logger() {
            logger.log_fmt($category, $level, $crate::log_location!($func), format_args!($($arg)+));
        }
    };
}

#[macro_export]
macro_rules! log_severe {
    ($category:expr, $func:expr, $($arg:tt)+) => {
        $crate::log!($category, $crate::LogLevel::Severe, $func, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_error {
    ($category:expr, $func:expr, $($arg:tt)+) => {
        $crate::log!($category, $crate::LogLevel::Error, $func, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_warning {
    ($category:expr, $($arg:tt)+) => {
        if let Some(logger) = $crate::get_logger() {
            logger.log_fmt($category, $crate::LogLevel::Warning, $crate::log_location!(), format_args!($($arg)+));
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($category:expr, $($arg:tt)+) => {
        if let Some(logger) = $crate::get_logger() {
            logger.log_fmt($category, $crate::LogLevel::Info, $crate::log_location!(), format_args!($($arg)+));
        }
    };
}

#[macro_export]
macro_rules! log_verbose {
    ($category:expr, $($arg:tt)+) => {
        if let Some(logger) = $crate::get_logger() {
            logger.log_fmt($category, $crate::LogLevel::Verbose, $crate::log_location!(), format_args!($($arg)+));
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($category:expr, $func:expr, $($arg:tt)+) => {
        $crate::log!($category, $crate::LogLevel::Debug, $func, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    fn quiet_logger(buffer: &SharedBuffer) -> Logger {
        let logger = Logger::new();
        logger.set_log_to_console(false);
        logger.set_use_colors(false);
        assert!(logger.add_writer(Box::new(buffer.clone())).is_ok());
        logger
    }

    #[test]
    fn writes_category_and_level() {
        let buffer = SharedBuffer::default();
        let logger = quiet_logger(&buffer);

        let category = LogCategory::new_with_sub("Unicode", "tables");
        logger.log(category, LogLevel::Info, log_location!(), "loaded");
        logger.flush();

        let contents = buffer.contents();
        assert!(contents.contains("[INFO   ] [Unicode(tables)]: loaded\n"), "{contents}");
    }

    #[test]
    fn error_includes_location() {
        let buffer = SharedBuffer::default();
        let logger = quiet_logger(&buffer);

        logger.log_fmt(LogCategory::new("cat"), LogLevel::Error, log_location!(error_includes_location), format_args!("code {}", 3));
        logger.flush();

        let contents = buffer.contents();
        assert!(contents.contains("[ERROR  ] [cat] ("), "{contents}");
        assert!(contents.contains("error_includes_location): code 3"), "{contents}");
    }

    #[test]
    fn max_level_filters() {
        let buffer = SharedBuffer::default();
        let logger = quiet_logger(&buffer);
        logger.set_max_level(LogLevel::Warning);

        assert!(logger.is_enabled(LogLevel::Severe));
        assert!(!logger.is_enabled(LogLevel::Info));

        logger.log(LogCategory::new("cat"), LogLevel::Verbose, log_location!(), "hidden");
        logger.log(LogCategory::new("cat"), LogLevel::Warning, log_location!(), "shown");
        logger.flush();

        let contents = buffer.contents();
        assert!(!contents.contains("hidden"));
        assert!(contents.contains("shown"));
    }

    #[test]
    fn writer_slots() {
        let logger = Logger::new();
        logger.set_log_to_console(false);

        for i in 0..LoggerState::MAX_WRITERS {
            assert_eq!(logger.add_writer(Box::new(io::sink())).ok(), Some(i));
        }
        assert!(logger.add_writer(Box::new(io::sink())).is_err());

        assert!(logger.remove_writer(3).is_some());
        assert!(logger.remove_writer(3).is_none());
        assert!(logger.remove_writer(LoggerState::MAX_WRITERS).is_none());
        assert_eq!(logger.add_writer(Box::new(io::sink())).ok(), Some(3));
    }

    #[test]
    fn no_output_before_flush() {
        let buffer = SharedBuffer::default();
        let logger = quiet_logger(&buffer);

        logger.log(LogCategory::new("cat"), LogLevel::Info, log_location!(), "cached");
        assert!(buffer.contents().is_empty());

        logger.set_always_flush(true);
        logger.log(LogCategory::new("cat"), LogLevel::Info, log_location!(), "direct");
        assert!(buffer.contents().contains("direct"));
    }
}
