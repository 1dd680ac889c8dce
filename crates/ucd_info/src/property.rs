use ucd_macros::flags;

/// Boolean unicode properties of a codepoint.
///
/// The bit of each property is fixed, so the raw bits can be stored and read back by later versions.
/// The string form of a property is its name in the Unicode Character Database, e.g. `White_Space`.
#[flags(u64, parse_from_name)]
pub enum Property {
	/// Spaces, separators and a few control characters that are treated as whitespace.
	#[parse_name("White_Space")]
	WhiteSpace = 0x0000_0000_0000_0001,
	/// Format control characters with a specific function in the bidirectional algorithm.
	#[parse_name("Bidi_Control")]
	BidiControl = 0x0000_0000_0000_0002,
	/// Format control characters with a specific function in cursive joining and ligation.
	#[parse_name("Join_Control")]
	JoinControl = 0x0000_0000_0000_0004,
	/// Punctuation characters explicitly called out as dashes.
	#[parse_name("Dash")]
	Dash = 0x0000_0000_0000_0008,
	#[parse_name("Hyphen")]
	Hyphen = 0x0000_0000_0000_0010,
	#[parse_name("Quotation_Mark")]
	QuotationMark = 0x0000_0000_0000_0020,
	/// Punctuation characters that generally mark the end of textual units.
	#[parse_name("Terminal_Punctuation")]
	TerminalPunctuation = 0x0000_0000_0000_0040,
	/// Math characters that aren't `Sm`, contributes to `Math`.
	#[parse_name("Other_Math")]
	OtherMath = 0x0000_0000_0000_0080,
	/// Characters commonly used for hexadecimal numbers, including the fullwidth forms.
	#[parse_name("Hex_Digit")]
	HexDigit = 0x0000_0000_0000_0100,
	#[parse_name("ASCII_Hex_Digit")]
	AsciiHexDigit = 0x0000_0000_0000_0200,
	/// Contributes to `Alphabetic`, together with the letter categories.
	#[parse_name("Other_Alphabetic")]
	OtherAlphabetic = 0x0000_0000_0000_0400,
	#[parse_name("Ideographic")]
	Ideographic = 0x0000_0000_0000_0800,
	/// Characters that linguistically modify the meaning of another character.
	#[parse_name("Diacritic")]
	Diacritic = 0x0000_0000_0000_1000,
	/// Characters whose principal function is to extend the value of a preceding alphabetic character.
	#[parse_name("Extender")]
	Extender = 0x0000_0000_0000_2000,
	/// Contributes to `Lowercase`, together with `Ll`.
	#[parse_name("Other_Lowercase")]
	OtherLowercase = 0x0000_0000_0000_4000,
	/// Contributes to `Uppercase`, together with `Lu`.
	#[parse_name("Other_Uppercase")]
	OtherUppercase = 0x0000_0000_0000_8000,
	/// Codepoints permanently reserved for internal use.
	#[parse_name("Noncharacter_Code_Point")]
	NoncharacterCodePoint = 0x0000_0000_0001_0000,
	#[parse_name("Other_Grapheme_Extend")]
	OtherGraphemeExtend = 0x0000_0000_0002_0000,
	#[parse_name("IDS_Binary_Operator")]
	IdsBinaryOperator = 0x0000_0000_0004_0000,
	#[parse_name("IDS_Trinary_Operator")]
	IdsTrinaryOperator = 0x0000_0000_0008_0000,
	#[parse_name("Radical")]
	Radical = 0x0000_0000_0010_0000,
	#[parse_name("Unified_Ideograph")]
	UnifiedIdeograph = 0x0000_0000_0020_0000,
	#[parse_name("Other_Default_Ignorable_Code_Point")]
	OtherDefaultIgnorableCodePoint = 0x0000_0000_0040_0000,
	/// Characters whose use is strongly discouraged.
	#[parse_name("Deprecated")]
	Deprecated = 0x0000_0000_0080_0000,
	/// Characters with a dot that disappears when an accent is placed over it, e.g. `i`.
	#[parse_name("Soft_Dotted")]
	SoftDotted = 0x0000_0000_0100_0000,
	#[parse_name("Logical_Order_Exception")]
	LogicalOrderException = 0x0000_0000_0200_0000,
	#[parse_name("Other_ID_Start")]
	OtherIdStart = 0x0000_0000_0400_0000,
	#[parse_name("Other_ID_Continue")]
	OtherIdContinue = 0x0000_0000_0800_0000,
	#[parse_name("Sentence_Terminal")]
	SentenceTerminal = 0x0000_0000_1000_0000,
	#[parse_name("Variation_Selector")]
	VariationSelector = 0x0000_0000_2000_0000,
	/// Whitespace that is stable across versions, for use in pattern syntaxes.
	#[parse_name("Pattern_White_Space")]
	PatternWhiteSpace = 0x0000_0000_4000_0000,
	#[parse_name("Pattern_Syntax")]
	PatternSyntax = 0x0000_0000_8000_0000,
	#[parse_name("Prepended_Concatenation_Mark")]
	PrependedConcatenationMark = 0x0000_0001_0000_0000,
	#[parse_name("Emoji")]
	Emoji = 0x0000_0002_0000_0000,
	/// Characters that have emoji presentation by default.
	#[parse_name("Emoji_Presentation")]
	EmojiPresentation = 0x0000_0004_0000_0000,
	#[parse_name("Emoji_Modifier")]
	EmojiModifier = 0x0000_0008_0000_0000,
	#[parse_name("Emoji_Modifier_Base")]
	EmojiModifierBase = 0x0000_0010_0000_0000,
	#[parse_name("Regional_Indicator")]
	RegionalIndicator = 0x0000_0020_0000_0000,
	#[parse_name("Emoji_Component")]
	EmojiComponent = 0x0000_0040_0000_0000,
	#[parse_name("Extended_Pictographic")]
	ExtendedPictographic = 0x0000_0080_0000_0000,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bits_are_stable() {
		assert_eq!(Property::WhiteSpace.bits(), 0x1);
		assert_eq!(Property::Hyphen.bits(), 0x10);
		assert_eq!(Property::HexDigit.bits(), 0x100);
		assert_eq!(Property::NoncharacterCodePoint.bits(), 0x1_0000);
		assert_eq!(Property::PrependedConcatenationMark.bits(), 0x1_0000_0000);
		assert_eq!(Property::ExtendedPictographic.bits(), 0x80_0000_0000);
		assert_eq!(Property::all().bits(), 0xFF_FFFF_FFFF);
		assert_eq!(Property::FLAGS.len(), 40);
	}

	#[test]
	fn parse_names() {
		assert_eq!(Property::parse("White_Space"), Some(Property::WhiteSpace));
		assert_eq!(Property::parse("Dash | Hyphen"), Some(Property::Dash | Property::Hyphen));
		assert_eq!(Property::parse("IDS_Binary_Operator"), Some(Property::IdsBinaryOperator));
		assert_eq!(Property::parse("WhiteSpace"), None);
		assert_eq!(Property::parse(""), None);
	}

	#[test]
	fn display_uses_names() {
		assert_eq!((Property::Emoji | Property::WhiteSpace).to_string(), "White_Space | Emoji");
		assert_eq!(Property::None.to_string(), "");
		assert_eq!(format!("{:?}", Property::Emoji | Property::Dash), "Dash | Emoji");
		assert_eq!(format!("{:?}", Property::None), "None");
	}

	#[test]
	fn iter_set_flags() {
		let flags = Property::Radical | Property::AsciiHexDigit;
		let names: Vec<_> = flags.iter().map(|(name, _)| name).collect();
		assert_eq!(names, ["ASCII_Hex_Digit", "Radical"]);
		assert_eq!(Property::from_bits_truncate(u64::MAX), Property::all());
	}
}
