use crate::{
	error::TableError,
	range::{self, CodepointRange, MAX_CODEPOINT},
	unicode,
};

/// Simple case mapping for all codepoints in a range.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum CaseMapping {
	/// Every codepoint maps to `codepoint + delta`.
	Delta(i32),
	/// Every other codepoint, starting at the first of the range, maps to `codepoint + delta`, the rest map to themselves.
	Alternate(i32),
}

impl CaseMapping {
	fn apply(self, range: CodepointRange, codepoint: u32) -> Option<u32> {
		match self {
			CaseMapping::Delta(delta) => codepoint.checked_add_signed(delta),
			CaseMapping::Alternate(delta) => if (codepoint - range.first) % 2 == 0 {
				codepoint.checked_add_signed(delta)
			} else {
				Some(codepoint)
			},
		}
	}
}

fn map_case(codepoint: u32, table: &[(CodepointRange, CaseMapping)]) -> u32 {
	match range::lookup_entry(codepoint, table) {
		Some((range, mapping)) => mapping.apply(*range, codepoint).unwrap_or(codepoint),
		None => codepoint,
	}
}

/// Check that every mapping in a case table results in a codepoint.
pub(crate) fn verify_mappings(table: &[(CodepointRange, CaseMapping)]) -> Result<(), TableError> {
	for (index, (range, mapping)) in table.iter().enumerate() {
		let valid = |codepoint| matches!(mapping.apply(*range, codepoint), Some(mapped) if mapped <= MAX_CODEPOINT);
		if !valid(range.first) || !valid(range.last) {
			return Err(TableError::InvalidMapping { index, range: *range });
		}
	}
	Ok(())
}

/// Get the simple uppercase mapping of a codepoint, or the codepoint itself when it has none.
pub fn to_upper(codepoint: u32) -> u32 {
	map_case(codepoint, &unicode::TO_UPPER)
}

/// Get the simple lowercase mapping of a codepoint, or the codepoint itself when it has none.
pub fn to_lower(codepoint: u32) -> u32 {
	map_case(codepoint, &unicode::TO_LOWER)
}

/// Get the simple titlecase mapping of a codepoint, or the codepoint itself when it has none.
pub fn to_title(codepoint: u32) -> u32 {
	map_case(codepoint, &unicode::TO_TITLE)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn delta_and_alternate() {
		let table = [
			(CodepointRange::new(0x61, 0x7A), CaseMapping::Delta(-32)),
			(CodepointRange::new(0x101, 0x105), CaseMapping::Alternate(-1)),
		];
		assert_eq!(map_case(0x61, &table), 0x41);
		assert_eq!(map_case(0x7A, &table), 0x5A);
		assert_eq!(map_case(0x7B, &table), 0x7B);
		assert_eq!(map_case(0x101, &table), 0x100);
		assert_eq!(map_case(0x102, &table), 0x102);
		assert_eq!(map_case(0x103, &table), 0x102);
		assert_eq!(map_case(0x105, &table), 0x104);
		assert!(verify_mappings(&table).is_ok());
	}

	#[test]
	fn invalid_mapping() {
		let table = [(CodepointRange::new(0x10, 0x20), CaseMapping::Delta(-0x11))];
		assert_eq!(verify_mappings(&table), Err(TableError::InvalidMapping { index: 0, range: table[0].0 }));

		let table = [(CodepointRange::new(0x10FF00, 0x10FF10), CaseMapping::Delta(0x100))];
		assert!(verify_mappings(&table).is_err());
	}

	#[test]
	fn latin() {
		assert_eq!(to_upper('a' as u32), 'A' as u32);
		assert_eq!(to_upper('A' as u32), 'A' as u32);
		assert_eq!(to_lower('A' as u32), 'a' as u32);
		assert_eq!(to_title('z' as u32), 'Z' as u32);
		assert_eq!(to_upper('1' as u32), '1' as u32);
	}

	#[test]
	fn titlecase_digraphs() {
		// DŽ, Dž, dž
		assert_eq!(to_upper(0x01C5), 0x01C4);
		assert_eq!(to_lower(0x01C5), 0x01C6);
		assert_eq!(to_title(0x01C5), 0x01C5);
		assert_eq!(to_title(0x01C4), 0x01C5);
		assert_eq!(to_title(0x01C6), 0x01C5);
	}

	#[test]
	fn only_simple_mappings() {
		// ß uppercases to "SS", which has no simple mapping
		assert_eq!(to_upper(0x00DF), 0x00DF);
		// İ lowercases to "i̇", the simple mapping is just i
		assert_eq!(to_lower(0x0130), 0x0069);
		assert_eq!(to_upper(0x0130), 0x0130);
	}

	#[test]
	fn outside_basic_plane() {
		assert_eq!(to_lower(0x10400), 0x10428);
		assert_eq!(to_upper(0x10428), 0x10400);
		assert_eq!(to_upper(0x1E922), 0x1E900);
		assert_eq!(to_upper(0x1F600), 0x1F600);
		assert_eq!(to_upper(0x110000), 0x110000);
		assert_eq!(to_lower(u32::MAX), u32::MAX);
	}
}
