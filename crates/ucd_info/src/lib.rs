//! Library to classify unicode codepoints: general category, script, boolean properties and simple case mappings.
//!
//! All data is stored in static range tables generated from the Unicode Character Database, so queries never allocate
//! and can be made from any number of threads at once.
//!
//! Official info:
//! https://www.unicode.org/reports/tr44/
//! https://www.unicode.org/reports/tr24/
//!
//! # Codepoints outside of the unicode range
//!
//! Values above `U+10FFFF` are not codepoints, but are accepted by every function. They get category `Ii`,
//! group `I`, script `Zzzz`, no properties, and map to themselves for every case mapping.

use core::str::FromStr;

use static_assertions::assert_eq_size;
use ucd_logging::{log_error, log_verbose, LogCategory};

pub use ucd_base::{EnumCountT, EnumFromIndexT, EnumFromNameT, EnumNameT};

mod unicode;

mod range;
pub use range::{CodepointRange, MAX_CODEPOINT};

mod error;
pub use error::*;

mod category;
pub use category::*;

mod script;
pub use script::*;

mod property;
pub use property::*;

mod casing;
pub use casing::{to_lower, to_title, to_upper};

mod ctype;
pub use ctype::*;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(test)]
mod tests;

assert_eq_size!(Category, u8);
assert_eq_size!(CategoryGroup, u8);
assert_eq_size!(Script, u8);
assert_eq_size!(Property, u64);

const LOG_CAT : LogCategory = LogCategory::new("Unicode");

/// Version of the Unicode Character Database the tables were generated from, as (major, minor, update).
pub const UNICODE_VERSION: (u8, u8, u8) = unicode::UNICODE_VERSION;

//==============================================================
// Lookups
//==============================================================

/// Get the general category of a codepoint.
///
/// Unassigned codepoints are `Cn`, values past `U+10FFFF` are `Ii`.
pub fn lookup_category(codepoint: u32) -> Category {
	if codepoint > MAX_CODEPOINT {
		return Category::Invalid;
	}
	range::lookup_or(codepoint, &unicode::CATEGORIES, Category::Unassigned)
}

/// Get the group of a general category.
pub const fn category_group_for_category(category: Category) -> CategoryGroup {
	category.group()
}

/// Get the general category group of a codepoint.
pub fn lookup_category_group(codepoint: u32) -> CategoryGroup {
	lookup_category(codepoint).group()
}

/// Get the script of a codepoint, or `Unknown` if the codepoint doesn't belong to a script.
pub fn lookup_script(codepoint: u32) -> Script {
	range::lookup_or(codepoint, &unicode::SCRIPTS, Script::Unknown)
}

/// Get the properties of a codepoint.
///
/// `category` needs to be the category of the codepoint (see [`lookup_category`]), it is used to add the properties shared by every
/// codepoint of the category. Use `.bits()` to get the stable `u64` representation.
pub fn properties(codepoint: u32, category: Category) -> Property {
	if codepoint > MAX_CODEPOINT {
		return Property::None;
	}
	range::lookup_or(codepoint, &unicode::PROPERTIES, Property::None) | category.implied_properties()
}

/// Everything known about a codepoint.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodepointInfo {
	pub codepoint: u32,
	pub category: Category,
	pub group: CategoryGroup,
	pub script: Script,
	pub properties: Property,
}

/// Look up the category, group, script and properties of a codepoint at once.
pub fn classify(codepoint: u32) -> CodepointInfo {
	let category = lookup_category(codepoint);
	CodepointInfo {
		codepoint,
		category,
		group: category.group(),
		script: lookup_script(codepoint),
		properties: properties(codepoint, category),
	}
}

//==============================================================
// String conversion
//==============================================================

/// Get the 2-letter abbreviation of a category, e.g. `Lu`.
pub fn category_to_string(category: Category) -> &'static str {
	category.name()
}

/// Get the 1-letter abbreviation of a category group, e.g. `L`.
pub fn category_group_to_string(group: CategoryGroup) -> &'static str {
	group.name()
}

/// Get the 4-letter ISO 15924 code of a script, e.g. `Latn`.
pub fn script_to_string(script: Script) -> &'static str {
	script.name()
}

/// Get the abbreviation of a raw category value, or `--` if the value isn't a category.
pub fn category_to_string_raw(value: u8) -> &'static str {
	Category::name_from_idx(value as usize)
}

/// Get the abbreviation of a raw category group value, or `-` if the value isn't a category group.
pub fn category_group_to_string_raw(value: u8) -> &'static str {
	CategoryGroup::name_from_idx(value as usize)
}

/// Get the ISO 15924 code of a raw script value, or `----` if the value isn't a script.
pub fn script_to_string_raw(value: u8) -> &'static str {
	Script::name_from_idx(value as usize)
}

fn parse_name<T: EnumFromNameT>(kind: &'static str, s: &str) -> Result<T, ParseNameError> {
	T::parse(s).ok_or_else(|| ParseNameError { kind, name: s.to_string() })
}

impl FromStr for Category {
	type Err = ParseNameError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_name("category", s)
	}
}

impl FromStr for CategoryGroup {
	type Err = ParseNameError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_name("category group", s)
	}
}

impl FromStr for Script {
	type Err = ParseNameError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_name("script", s)
	}
}

//==============================================================
// Diagnostics
//==============================================================

/// Check that all range tables are sorted, don't overlap, and stay within the codepoint range.
///
/// Lookups assume this holds, this is meant for tests and for checking regenerated tables.
pub fn verify_tables() -> Result<(), VerifyError> {
	let results = [
		("category", range::verify(&unicode::CATEGORIES)),
		("script", range::verify(&unicode::SCRIPTS)),
		("property", range::verify(&unicode::PROPERTIES)),
		("uppercase", range::verify(&unicode::TO_UPPER).and_then(|_| casing::verify_mappings(&unicode::TO_UPPER))),
		("lowercase", range::verify(&unicode::TO_LOWER).and_then(|_| casing::verify_mappings(&unicode::TO_LOWER))),
		("titlecase", range::verify(&unicode::TO_TITLE).and_then(|_| casing::verify_mappings(&unicode::TO_TITLE))),
	];
	let count = results.len();

	for (table, result) in results {
		if let Err(source) = result {
			log_error!(LOG_CAT, verify_tables, "Malformed {table} table: {source}");
			return Err(VerifyError { table, source });
		}
	}

	let (major, minor, update) = UNICODE_VERSION;
	log_verbose!(LOG_CAT, "Verified {count} range tables (Unicode {major}.{minor}.{update})");
	Ok(())
}
