use std::{io, sync::Arc};

use parking_lot::Mutex;
use ucd::{*, logging::{Logger, LogLevel}};

static LOGGER: Logger = Logger::new();

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

#[test]
fn verify_logs_to_global_logger() {
    let buffer = SharedBuffer::default();
    LOGGER.set_log_to_console(false);
    LOGGER.set_use_colors(false);
    LOGGER.set_max_level(LogLevel::Verbose);
    assert!(LOGGER.add_writer(Box::new(buffer.clone())).is_ok());
    logging::set_logger(&LOGGER);

    assert_eq!(verify_tables(), Ok(()));
    LOGGER.flush();

    let contents = String::from_utf8_lossy(&buffer.0.lock()).into_owned();
    assert!(contents.contains("[VERBOSE] [Unicode]: Verified 6 range tables (Unicode 14.0.0)"), "{contents}");
}

#[test]
fn classify_text() {
    let text = "Aa1 ,\u{0661}\u{4E00}\u{1F600}";
    let categories: Vec<&str> = text.chars().map(|ch| category_to_string(lookup_category(ch as u32))).collect();
    assert_eq!(categories, ["Lu", "Ll", "Nd", "Zs", "Po", "Nd", "Lo", "So"]);

    let scripts: Vec<&str> = text.chars().map(|ch| script_to_string(lookup_script(ch as u32))).collect();
    assert_eq!(scripts, ["Latn", "Latn", "Zyyy", "Zyyy", "Zyyy", "Arab", "Hani", "Zyyy"]);

    let upper: String = text.chars()
        .filter_map(|ch| char::from_u32(to_upper(ch as u32)))
        .collect();
    assert_eq!(upper, "AA1 ,\u{0661}\u{4E00}\u{1F600}");
}

#[test]
fn unicode_version() {
    assert_eq!(UNICODE_VERSION, (14, 0, 0));
}

#[test]
fn parse_names() {
    assert_eq!("Lu".parse::<Category>(), Ok(Category::UppercaseLetter));
    assert_eq!("Z".parse::<CategoryGroup>(), Ok(CategoryGroup::Separator));
    assert_eq!("Cyrl".parse::<Script>(), Ok(Script::Cyrillic));
    assert_eq!(Property::parse("White_Space|Dash"), Some(Property::WhiteSpace | Property::Dash));
    assert!("Latin".parse::<Script>().is_err());
}
