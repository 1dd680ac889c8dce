use thiserror::Error;

use crate::range::CodepointRange;

/// Problem found in a range table.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum TableError {
	#[error("entry {index} starts after it ends: {range:?}")]
	InvertedRange { index: usize, range: CodepointRange },
	#[error("entry {index} goes past U+10FFFF: {range:?}")]
	OutOfBounds { index: usize, range: CodepointRange },
	#[error("entry {index} ({range:?}) does not start after the previous entry ({previous:?})")]
	Unordered { index: usize, range: CodepointRange, previous: CodepointRange },
	#[error("entry {index} ({range:?}) maps to a value that isn't a codepoint")]
	InvalidMapping { index: usize, range: CodepointRange },
}

/// A range table failed verification.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
#[error("malformed {table} table")]
pub struct VerifyError {
	pub table: &'static str,
	pub source: TableError,
}

/// A string that isn't the name of any member.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
#[error("unknown {kind} '{name}'")]
pub struct ParseNameError {
	pub kind: &'static str,
	pub name: String,
}
