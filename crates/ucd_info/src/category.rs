use ucd_macros::{EnumCount, EnumFromIndex, EnumFromName, EnumName};

use crate::{property::Property, unicode};

/// Unicode general category.
///
/// The string form of a category is its 2-letter abbreviation, e.g. `Lu`.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, EnumCount, EnumFromIndex, EnumFromName, EnumName)]
#[name_placeholder("--")]
pub enum Category {
	/// Cc: A C0 or C1 control code.
	#[parse_name("Cc")]
	Control,
	/// Cf: A format control character.
	#[parse_name("Cf")]
	Format,
	/// Cn: A reserved unassigned codepoint or a noncharacter.
	#[parse_name("Cn")]
	Unassigned,
	/// Co: A private-use character.
	#[parse_name("Co")]
	PrivateUse,
	/// Cs: A surrogate codepoint.
	#[parse_name("Cs")]
	Surrogate,
	/// Ii: Not a unicode category, used for values outside of the codepoint range.
	#[parse_name("Ii")]
	Invalid,
	/// Ll: A lowercase letter.
	#[parse_name("Ll")]
	LowercaseLetter,
	/// Lm: A modifier letter.
	#[parse_name("Lm")]
	ModifierLetter,
	/// Lo: Other letters, including syllables and ideographs.
	#[parse_name("Lo")]
	OtherLetter,
	/// Lt: A digraph encoded as a single character, with first part uppercase.
	#[parse_name("Lt")]
	TitlecaseLetter,
	/// Lu: An uppercase letter.
	#[parse_name("Lu")]
	UppercaseLetter,
	/// Mc: A spacing combining mark (positive advance width).
	#[parse_name("Mc")]
	SpacingMark,
	/// Me: An enclosing combining mark.
	#[parse_name("Me")]
	EnclosingMark,
	/// Mn: A nonspacing combining mark (zero advance width).
	#[parse_name("Mn")]
	NonspacingMark,
	/// Nd: A decimal digit.
	#[parse_name("Nd")]
	DecimalNumber,
	/// Nl: A letterlike numeric character.
	#[parse_name("Nl")]
	LetterNumber,
	/// No: A numeric character of other type.
	#[parse_name("No")]
	OtherNumber,
	/// Pc: A connecting punctuation mark, like a tie.
	#[parse_name("Pc")]
	ConnectorPunctuation,
	/// Pd: A dash or hyphen punctuation mark.
	#[parse_name("Pd")]
	DashPunctuation,
	/// Pe: A closing punctuation mark (of a pair).
	#[parse_name("Pe")]
	ClosePunctuation,
	/// Pf: A final quotation mark.
	#[parse_name("Pf")]
	FinalPunctuation,
	/// Pi: An initial quotation mark.
	#[parse_name("Pi")]
	InitialPunctuation,
	/// Po: A punctuation mark of other type.
	#[parse_name("Po")]
	OtherPunctuation,
	/// Ps: An opening punctuation mark (of a pair).
	#[parse_name("Ps")]
	OpenPunctuation,
	/// Sc: A currency sign.
	#[parse_name("Sc")]
	CurrencySymbol,
	/// Sk: A non-letterlike modifier symbol.
	#[parse_name("Sk")]
	ModifierSymbol,
	/// Sm: A symbol of mathematical use.
	#[parse_name("Sm")]
	MathSymbol,
	/// So: A symbol of other type.
	#[parse_name("So")]
	OtherSymbol,
	/// Zl: U+2028 LINE SEPARATOR only.
	#[parse_name("Zl")]
	LineSeparator,
	/// Zp: U+2029 PARAGRAPH SEPARATOR only.
	#[parse_name("Zp")]
	ParagraphSeparator,
	/// Zs: A space character (of various non-zero widths).
	#[parse_name("Zs")]
	SpaceSeparator,
}

impl Category {
	/// Get the group the category belongs to.
	pub const fn group(self) -> CategoryGroup {
		match self {
			Category::Control |
			Category::Format |
			Category::Unassigned |
			Category::PrivateUse |
			Category::Surrogate => CategoryGroup::Other,
			Category::Invalid => CategoryGroup::Invalid,
			Category::LowercaseLetter |
			Category::ModifierLetter |
			Category::OtherLetter |
			Category::TitlecaseLetter |
			Category::UppercaseLetter => CategoryGroup::Letter,
			Category::SpacingMark |
			Category::EnclosingMark |
			Category::NonspacingMark => CategoryGroup::Mark,
			Category::DecimalNumber |
			Category::LetterNumber |
			Category::OtherNumber => CategoryGroup::Number,
			Category::ConnectorPunctuation |
			Category::DashPunctuation |
			Category::ClosePunctuation |
			Category::FinalPunctuation |
			Category::InitialPunctuation |
			Category::OtherPunctuation |
			Category::OpenPunctuation => CategoryGroup::Punctuation,
			Category::CurrencySymbol |
			Category::ModifierSymbol |
			Category::MathSymbol |
			Category::OtherSymbol => CategoryGroup::Symbol,
			Category::LineSeparator |
			Category::ParagraphSeparator |
			Category::SpaceSeparator => CategoryGroup::Separator,
		}
	}

	/// Get the properties that every codepoint in this category has, e.g. `Zs` implies `White_Space`.
	pub fn implied_properties(self) -> Property {
		unicode::CATEGORY_PROPERTIES[self as usize]
	}
}

/// Unicode general category group, the first letter of a `Category`.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, EnumCount, EnumFromIndex, EnumFromName, EnumName)]
#[name_placeholder("-")]
pub enum CategoryGroup {
	/// C: Control, format, unassigned, private use and surrogate codepoints.
	#[parse_name("C")]
	Other,
	/// I: Values outside of the codepoint range.
	#[parse_name("I")]
	Invalid,
	#[parse_name("L")]
	Letter,
	#[parse_name("M")]
	Mark,
	#[parse_name("N")]
	Number,
	#[parse_name("P")]
	Punctuation,
	#[parse_name("S")]
	Symbol,
	#[parse_name("Z")]
	Separator,
}

#[cfg(test)]
mod tests {
	use ucd_base::{EnumCountT, EnumFromIndexT, EnumNameT};
	use super::*;

	#[test]
	fn group_matches_name_prefix() {
		for idx in 0..Category::COUNT {
			let category = Category::from_idx(idx).unwrap();
			let prefix = &category.name()[..1];
			assert_eq!(category.group().name(), prefix, "{category:?}");
		}
	}

	#[test]
	fn every_group_is_used() {
		for idx in 0..CategoryGroup::COUNT {
			let group = CategoryGroup::from_idx(idx).unwrap();
			let used = (0..Category::COUNT).any(|idx| Category::from_idx(idx).unwrap().group() == group);
			assert!(used, "{group:?}");
		}
	}

	#[test]
	fn implied_properties() {
		assert!(Category::SpaceSeparator.implied_properties().contains(Property::WhiteSpace));
		assert!(Category::LineSeparator.implied_properties().contains(Property::WhiteSpace | Property::PatternWhiteSpace));
		assert!(Category::DashPunctuation.implied_properties().contains(Property::Dash));
		assert!(Category::Invalid.implied_properties().is_none());
		assert!(Category::Unassigned.implied_properties().is_none());
		assert!(Category::UppercaseLetter.implied_properties().is_none());
	}
}
