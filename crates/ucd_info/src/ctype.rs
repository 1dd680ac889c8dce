//! Character class predicates, the unicode counterparts of the C `<ctype.h>` functions.
//!
//! Each predicate does a single category lookup and at most one property lookup.

use crate::{
	category::{Category, CategoryGroup},
	lookup_category,
	properties,
	property::Property,
};

const ALPHABETIC_PROPERTIES: Property = Property::OtherAlphabetic
	.bitor(Property::OtherLowercase)
	.bitor(Property::OtherUppercase);

fn is_alpha_impl(codepoint: u32, category: Category) -> bool {
	match category {
		Category::UppercaseLetter |
		Category::LowercaseLetter |
		Category::TitlecaseLetter |
		Category::ModifierLetter |
		Category::OtherLetter |
		Category::LetterNumber => true,
		_ => properties(codepoint, category).intersects(ALPHABETIC_PROPERTIES),
	}
}

fn is_space_impl(codepoint: u32, category: Category) -> bool {
	category.group() == CategoryGroup::Separator || properties(codepoint, category).contains(Property::WhiteSpace)
}

fn is_graph_impl(codepoint: u32, category: Category) -> bool {
	match category {
		Category::Control |
		Category::Surrogate |
		Category::Unassigned |
		Category::Invalid => false,
		_ => !is_space_impl(codepoint, category),
	}
}

/// Is the codepoint alphabetic or a decimal digit?
pub fn is_alnum(codepoint: u32) -> bool {
	let category = lookup_category(codepoint);
	category == Category::DecimalNumber || is_alpha_impl(codepoint, category)
}

/// Is the codepoint alphabetic?
///
/// True for letters (`L*`), letter numbers (`Nl`) and codepoints with `Other_Alphabetic`, `Other_Lowercase` or `Other_Uppercase`,
/// which matches the derived `Alphabetic` property.
pub fn is_alpha(codepoint: u32) -> bool {
	is_alpha_impl(codepoint, lookup_category(codepoint))
}

/// Is the codepoint a horizontal space, i.e. a space separator (`Zs`) or a tab?
pub fn is_blank(codepoint: u32) -> bool {
	codepoint == 0x09 || lookup_category(codepoint) == Category::SpaceSeparator
}

/// Is the codepoint a control character (`Cc`)?
pub fn is_cntrl(codepoint: u32) -> bool {
	lookup_category(codepoint) == Category::Control
}

/// Is the codepoint a decimal digit (`Nd`) in any script?
pub fn is_digit(codepoint: u32) -> bool {
	lookup_category(codepoint) == Category::DecimalNumber
}

/// Is the codepoint visible?
///
/// Everything except whitespace, control characters, surrogates and unassigned codepoints.
pub fn is_graph(codepoint: u32) -> bool {
	is_graph_impl(codepoint, lookup_category(codepoint))
}

/// Is the codepoint lowercase (`Ll` or `Other_Lowercase`)?
pub fn is_lower(codepoint: u32) -> bool {
	let category = lookup_category(codepoint);
	category == Category::LowercaseLetter || properties(codepoint, category).contains(Property::OtherLowercase)
}

/// Is the codepoint printable, i.e. visible or a blank that isn't a control character?
pub fn is_print(codepoint: u32) -> bool {
	let category = lookup_category(codepoint);
	category == Category::SpaceSeparator || is_graph_impl(codepoint, category)
}

/// Is the codepoint punctuation or a symbol, that isn't alphabetic?
pub fn is_punct(codepoint: u32) -> bool {
	let category = lookup_category(codepoint);
	matches!(category.group(), CategoryGroup::Punctuation | CategoryGroup::Symbol) && !is_alpha_impl(codepoint, category)
}

/// Is the codepoint whitespace, i.e. a separator (`Z*`) or `White_Space`?
pub fn is_space(codepoint: u32) -> bool {
	is_space_impl(codepoint, lookup_category(codepoint))
}

/// Is the codepoint uppercase (`Lu` or `Other_Uppercase`)?
pub fn is_upper(codepoint: u32) -> bool {
	let category = lookup_category(codepoint);
	category == Category::UppercaseLetter || properties(codepoint, category).contains(Property::OtherUppercase)
}

/// Is the codepoint a hexadecimal digit, i.e. a decimal digit (`Nd`) or `Hex_Digit`?
pub fn is_xdigit(codepoint: u32) -> bool {
	let category = lookup_category(codepoint);
	category == Category::DecimalNumber || properties(codepoint, category).contains(Property::HexDigit)
}
