//! Unicode codepoint classification.
//!
//! Re-exports the lookup functions of [`ucd_info`], and the logger used to report on the unicode tables.

pub use ucd_info::*;
pub use ucd_logging as logging;
