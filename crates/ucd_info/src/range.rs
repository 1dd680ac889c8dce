//! Range tables: sorted, non-overlapping codepoint ranges, each carrying a value.
//!
//! Codepoints that fall in a gap between ranges have no value in the table, callers decide on the default.

use core::{cmp::Ordering, fmt};

use crate::error::TableError;

/// Highest valid unicode codepoint.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// Inclusive range of codepoints
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodepointRange {
	pub first: u32,
	pub last: u32,
}

impl CodepointRange {
	pub const fn new(first: u32, last: u32) -> Self {
		Self { first, last }
	}

	pub const fn single(codepoint: u32) -> Self {
		Self { first: codepoint, last: codepoint }
	}

	pub const fn contains(&self, codepoint: u32) -> bool {
		self.first <= codepoint && codepoint <= self.last
	}

	/// Order the range relative to a codepoint, a range containing the codepoint is `Equal`.
	pub const fn cmp_codepoint(&self, codepoint: u32) -> Ordering {
		if self.last < codepoint {
			Ordering::Less
		} else if self.first > codepoint {
			Ordering::Greater
		} else {
			Ordering::Equal
		}
	}
}

impl fmt::Debug for CodepointRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.first == self.last {
			write!(f, "{:#06X}", self.first)
		} else {
			write!(f, "{:#06X}..={:#06X}", self.first, self.last)
		}
	}
}

/// Find the entry containing `codepoint`.
pub fn lookup_entry<T>(codepoint: u32, table: &[(CodepointRange, T)]) -> Option<&(CodepointRange, T)> {
	match table.binary_search_by(|(range, _)| range.cmp_codepoint(codepoint)) {
		Ok(idx) => Some(&table[idx]),
		Err(_) => None,
	}
}

/// Get the value of the range containing `codepoint`, or `None` if no range contains it.
pub fn lookup<T: Copy>(codepoint: u32, table: &[(CodepointRange, T)]) -> Option<T> {
	lookup_entry(codepoint, table).map(|(_, value)| *value)
}

/// Get the value of the range containing `codepoint`, or `default` if no range contains it.
pub fn lookup_or<T: Copy>(codepoint: u32, table: &[(CodepointRange, T)], default: T) -> T {
	lookup(codepoint, table).unwrap_or(default)
}

/// Check that a table is valid for lookups: ranges are in order, don't overlap and stay within the codepoint range.
pub fn verify<T>(table: &[(CodepointRange, T)]) -> Result<(), TableError> {
	let mut previous: Option<CodepointRange> = None;
	for (index, (range, _)) in table.iter().enumerate() {
		let range = *range;
		if range.first > range.last {
			return Err(TableError::InvertedRange { index, range });
		}
		if range.last > MAX_CODEPOINT {
			return Err(TableError::OutOfBounds { index, range });
		}
		if let Some(previous) = previous {
			if range.first <= previous.last {
				return Err(TableError::Unordered { index, range, previous });
			}
		}
		previous = Some(range);
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	const TABLE: [(CodepointRange, char); 4] = [
		(CodepointRange::new(0x10, 0x1F), 'a'),
		(CodepointRange::single(0x20), 'b'),
		(CodepointRange::new(0x30, 0x3F), 'c'),
		(CodepointRange::new(0x41, 0x41), 'd'),
	];

	#[test]
	fn boundaries_resolve_to_their_range() {
		assert_eq!(lookup(0x10, &TABLE), Some('a'));
		assert_eq!(lookup(0x1F, &TABLE), Some('a'));
		assert_eq!(lookup(0x20, &TABLE), Some('b'));
		assert_eq!(lookup(0x30, &TABLE), Some('c'));
		assert_eq!(lookup(0x3F, &TABLE), Some('c'));
		assert_eq!(lookup(0x41, &TABLE), Some('d'));
	}

	#[test]
	fn gaps_and_outside() {
		assert_eq!(lookup(0x00, &TABLE), None);
		assert_eq!(lookup(0x0F, &TABLE), None);
		assert_eq!(lookup(0x21, &TABLE), None);
		assert_eq!(lookup(0x2F, &TABLE), None);
		assert_eq!(lookup(0x40, &TABLE), None);
		assert_eq!(lookup(0x42, &TABLE), None);
		assert_eq!(lookup(u32::MAX, &TABLE), None);
		assert_eq!(lookup_or(0x40, &TABLE, 'z'), 'z');
	}

	#[test]
	fn lookup_or_prefers_table_value() {
		assert_eq!(lookup_or(0x35, &TABLE, 'z'), 'c');
		assert_eq!(lookup_or(0x20, &TABLE, 'z'), 'b');
		assert_eq!(lookup_or(0x21, &TABLE, 'z'), 'z');
	}

	#[test]
	fn empty_table() {
		let empty: [(CodepointRange, u8); 0] = [];
		assert_eq!(lookup(0, &empty), None);
		assert_eq!(lookup(MAX_CODEPOINT, &empty), None);
		assert_eq!(lookup_or(0x41, &empty, 7), 7);
		assert!(verify(&empty).is_ok());
	}

	#[test]
	fn entry_contains_codepoint() {
		let (range, value) = lookup_entry(0x35, &TABLE).unwrap();
		assert!(range.contains(0x35));
		assert_eq!(*range, CodepointRange::new(0x30, 0x3F));
		assert_eq!(*value, 'c');
	}

	#[test]
	fn verify_detects_bad_tables() {
		assert_eq!(verify(&TABLE), Ok(()));

		let inverted = [(CodepointRange::new(0x10, 0x0F), ())];
		assert_eq!(verify(&inverted), Err(TableError::InvertedRange { index: 0, range: inverted[0].0 }));

		let overlapping = [(CodepointRange::new(0x10, 0x20), ()), (CodepointRange::new(0x20, 0x30), ())];
		assert_eq!(verify(&overlapping), Err(TableError::Unordered { index: 1, range: overlapping[1].0, previous: overlapping[0].0 }));

		let unsorted = [(CodepointRange::new(0x30, 0x40), ()), (CodepointRange::new(0x10, 0x20), ())];
		assert!(matches!(verify(&unsorted), Err(TableError::Unordered { index: 1, .. })));

		let too_high = [(CodepointRange::new(0x10FFFE, 0x110000), ())];
		assert!(matches!(verify(&too_high), Err(TableError::OutOfBounds { index: 0, .. })));
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", CodepointRange::new(0x41, 0x5A)), "0x0041..=0x005A");
		assert_eq!(format!("{:?}", CodepointRange::single(0x1F600)), "0x1F600");
	}
}
