use ucd_macros::{EnumCount, EnumFromIndex, EnumFromName, EnumName};

/// Unicode script, identified by its ISO 15924 code.
///
/// Members are ordered by code. Besides the scripts of the Unicode Character Database, the enum contains the
/// ISO 15924 codes that Unicode doesn't assign to any codepoint (e.g. `Hans`, `Jpan`, `Zxxx`), so those codes can still
/// be parsed and named. A lookup never returns them.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, EnumCount, EnumFromIndex, EnumFromName, EnumName)]
#[name_placeholder("----")]
pub enum Script {
	#[parse_name("Adlm")]
	Adlam,
	#[parse_name("Afak")]
	Afaka,
	#[parse_name("Aghb")]
	CaucasianAlbanian,
	#[parse_name("Ahom")]
	Ahom,
	#[parse_name("Arab")]
	Arabic,
	#[parse_name("Armi")]
	ImperialAramaic,
	#[parse_name("Armn")]
	Armenian,
	#[parse_name("Avst")]
	Avestan,
	#[parse_name("Bali")]
	Balinese,
	#[parse_name("Bamu")]
	Bamum,
	#[parse_name("Bass")]
	BassaVah,
	#[parse_name("Batk")]
	Batak,
	#[parse_name("Beng")]
	Bengali,
	#[parse_name("Bhks")]
	Bhaiksuki,
	#[parse_name("Blis")]
	Blissymbols,
	#[parse_name("Bopo")]
	Bopomofo,
	#[parse_name("Brah")]
	Brahmi,
	#[parse_name("Brai")]
	Braille,
	#[parse_name("Bugi")]
	Buginese,
	#[parse_name("Buhd")]
	Buhid,
	#[parse_name("Cakm")]
	Chakma,
	#[parse_name("Cans")]
	CanadianAboriginal,
	#[parse_name("Cari")]
	Carian,
	#[parse_name("Cham")]
	Cham,
	#[parse_name("Cher")]
	Cherokee,
	#[parse_name("Chrs")]
	Chorasmian,
	#[parse_name("Cirt")]
	Cirth,
	#[parse_name("Copt")]
	Coptic,
	#[parse_name("Cpmn")]
	CyproMinoan,
	#[parse_name("Cprt")]
	Cypriot,
	#[parse_name("Cyrl")]
	Cyrillic,
	#[parse_name("Cyrs")]
	CyrillicOldChurchSlavonic,
	#[parse_name("Deva")]
	Devanagari,
	#[parse_name("Diak")]
	DivesAkuru,
	#[parse_name("Dogr")]
	Dogra,
	#[parse_name("Dsrt")]
	Deseret,
	#[parse_name("Dupl")]
	Duployan,
	#[parse_name("Egyd")]
	EgyptianDemotic,
	#[parse_name("Egyh")]
	EgyptianHieratic,
	#[parse_name("Egyp")]
	EgyptianHieroglyphs,
	#[parse_name("Elba")]
	Elbasan,
	#[parse_name("Elym")]
	Elymaic,
	#[parse_name("Ethi")]
	Ethiopic,
	#[parse_name("Geok")]
	Khutsuri,
	#[parse_name("Geor")]
	Georgian,
	#[parse_name("Glag")]
	Glagolitic,
	#[parse_name("Gong")]
	GunjalaGondi,
	#[parse_name("Gonm")]
	MasaramGondi,
	#[parse_name("Goth")]
	Gothic,
	#[parse_name("Gran")]
	Grantha,
	#[parse_name("Grek")]
	Greek,
	#[parse_name("Gujr")]
	Gujarati,
	#[parse_name("Guru")]
	Gurmukhi,
	#[parse_name("Hang")]
	Hangul,
	#[parse_name("Hani")]
	Han,
	#[parse_name("Hano")]
	Hanunoo,
	#[parse_name("Hans")]
	HanSimplified,
	#[parse_name("Hant")]
	HanTraditional,
	#[parse_name("Hatr")]
	Hatran,
	#[parse_name("Hebr")]
	Hebrew,
	#[parse_name("Hira")]
	Hiragana,
	#[parse_name("Hluw")]
	AnatolianHieroglyphs,
	#[parse_name("Hmng")]
	PahawhHmong,
	#[parse_name("Hmnp")]
	NyiakengPuachueHmong,
	#[parse_name("Hrkt")]
	KatakanaOrHiragana,
	#[parse_name("Hung")]
	OldHungarian,
	#[parse_name("Inds")]
	Indus,
	#[parse_name("Ital")]
	OldItalic,
	#[parse_name("Java")]
	Javanese,
	#[parse_name("Jpan")]
	Japanese,
	#[parse_name("Jurc")]
	Jurchen,
	#[parse_name("Kali")]
	KayahLi,
	#[parse_name("Kana")]
	Katakana,
	#[parse_name("Khar")]
	Kharoshthi,
	#[parse_name("Khmr")]
	Khmer,
	#[parse_name("Khoj")]
	Khojki,
	#[parse_name("Kits")]
	KhitanSmallScript,
	#[parse_name("Knda")]
	Kannada,
	#[parse_name("Kore")]
	Korean,
	#[parse_name("Kpel")]
	Kpelle,
	#[parse_name("Kthi")]
	Kaithi,
	#[parse_name("Lana")]
	TaiTham,
	#[parse_name("Laoo")]
	Lao,
	#[parse_name("Latf")]
	LatinFraktur,
	#[parse_name("Latg")]
	LatinGaelic,
	#[parse_name("Latn")]
	Latin,
	#[parse_name("Lepc")]
	Lepcha,
	#[parse_name("Limb")]
	Limbu,
	#[parse_name("Lina")]
	LinearA,
	#[parse_name("Linb")]
	LinearB,
	#[parse_name("Lisu")]
	Lisu,
	#[parse_name("Loma")]
	Loma,
	#[parse_name("Lyci")]
	Lycian,
	#[parse_name("Lydi")]
	Lydian,
	#[parse_name("Mahj")]
	Mahajani,
	#[parse_name("Maka")]
	Makasar,
	#[parse_name("Mand")]
	Mandaic,
	#[parse_name("Mani")]
	Manichaean,
	#[parse_name("Marc")]
	Marchen,
	#[parse_name("Maya")]
	MayanHieroglyphs,
	#[parse_name("Medf")]
	Medefaidrin,
	#[parse_name("Mend")]
	MendeKikakui,
	#[parse_name("Merc")]
	MeroiticCursive,
	#[parse_name("Mero")]
	MeroiticHieroglyphs,
	#[parse_name("Mlym")]
	Malayalam,
	#[parse_name("Modi")]
	Modi,
	#[parse_name("Mong")]
	Mongolian,
	#[parse_name("Moon")]
	Moon,
	#[parse_name("Mroo")]
	Mro,
	#[parse_name("Mtei")]
	MeeteiMayek,
	#[parse_name("Mult")]
	Multani,
	#[parse_name("Mymr")]
	Myanmar,
	#[parse_name("Nand")]
	Nandinagari,
	#[parse_name("Narb")]
	OldNorthArabian,
	#[parse_name("Nbat")]
	Nabataean,
	#[parse_name("Newa")]
	Newa,
	#[parse_name("Nkgb")]
	NaxiGeba,
	#[parse_name("Nkoo")]
	Nko,
	#[parse_name("Nshu")]
	Nushu,
	#[parse_name("Ogam")]
	Ogham,
	#[parse_name("Olck")]
	OlChiki,
	#[parse_name("Orkh")]
	OldTurkic,
	#[parse_name("Orya")]
	Oriya,
	#[parse_name("Osge")]
	Osage,
	#[parse_name("Osma")]
	Osmanya,
	#[parse_name("Ougr")]
	OldUyghur,
	#[parse_name("Palm")]
	Palmyrene,
	#[parse_name("Pauc")]
	PauCinHau,
	#[parse_name("Perm")]
	OldPermic,
	#[parse_name("Phag")]
	PhagsPa,
	#[parse_name("Phli")]
	InscriptionalPahlavi,
	#[parse_name("Phlp")]
	PsalterPahlavi,
	#[parse_name("Phlv")]
	BookPahlavi,
	#[parse_name("Phnx")]
	Phoenician,
	#[parse_name("Plrd")]
	Miao,
	#[parse_name("Prti")]
	InscriptionalParthian,
	#[parse_name("Qaak")]
	Klingon,
	#[parse_name("Rjng")]
	Rejang,
	#[parse_name("Rohg")]
	HanifiRohingya,
	#[parse_name("Roro")]
	Rongorongo,
	#[parse_name("Runr")]
	Runic,
	#[parse_name("Samr")]
	Samaritan,
	#[parse_name("Sara")]
	Sarati,
	#[parse_name("Sarb")]
	OldSouthArabian,
	#[parse_name("Saur")]
	Saurashtra,
	#[parse_name("Sgnw")]
	SignWriting,
	#[parse_name("Shaw")]
	Shavian,
	#[parse_name("Shrd")]
	Sharada,
	#[parse_name("Sidd")]
	Siddham,
	#[parse_name("Sind")]
	Khudawadi,
	#[parse_name("Sinh")]
	Sinhala,
	#[parse_name("Sogd")]
	Sogdian,
	#[parse_name("Sogo")]
	OldSogdian,
	#[parse_name("Sora")]
	SoraSompeng,
	#[parse_name("Soyo")]
	Soyombo,
	#[parse_name("Sund")]
	Sundanese,
	#[parse_name("Sylo")]
	SylotiNagri,
	#[parse_name("Syrc")]
	Syriac,
	#[parse_name("Syre")]
	SyriacEstrangelo,
	#[parse_name("Syrj")]
	SyriacWestern,
	#[parse_name("Syrn")]
	SyriacEastern,
	#[parse_name("Tagb")]
	Tagbanwa,
	#[parse_name("Takr")]
	Takri,
	#[parse_name("Tale")]
	TaiLe,
	#[parse_name("Talu")]
	NewTaiLue,
	#[parse_name("Taml")]
	Tamil,
	#[parse_name("Tang")]
	Tangut,
	#[parse_name("Tavt")]
	TaiViet,
	#[parse_name("Telu")]
	Telugu,
	#[parse_name("Teng")]
	Tengwar,
	#[parse_name("Tfng")]
	Tifinagh,
	#[parse_name("Tglg")]
	Tagalog,
	#[parse_name("Thaa")]
	Thaana,
	#[parse_name("Thai")]
	Thai,
	#[parse_name("Tibt")]
	Tibetan,
	#[parse_name("Tirh")]
	Tirhuta,
	#[parse_name("Tnsa")]
	Tangsa,
	#[parse_name("Toto")]
	Toto,
	#[parse_name("Ugar")]
	Ugaritic,
	#[parse_name("Vaii")]
	Vai,
	#[parse_name("Visp")]
	VisibleSpeech,
	#[parse_name("Vith")]
	Vithkuqi,
	#[parse_name("Wara")]
	WarangCiti,
	#[parse_name("Wcho")]
	Wancho,
	#[parse_name("Wole")]
	Woleai,
	#[parse_name("Xpeo")]
	OldPersian,
	#[parse_name("Xsux")]
	Cuneiform,
	#[parse_name("Yezi")]
	Yezidi,
	#[parse_name("Yiii")]
	Yi,
	#[parse_name("Zanb")]
	ZanabazarSquare,
	/// Marks that inherit the script of the character they are applied to.
	#[parse_name("Zinh")]
	Inherited,
	#[parse_name("Zmth")]
	MathematicalNotation,
	#[parse_name("Zsym")]
	Symbols,
	#[parse_name("Zxxx")]
	Unwritten,
	/// Characters used in multiple scripts, e.g. punctuation and digits.
	#[parse_name("Zyyy")]
	Common,
	/// Unassigned, private use and surrogate codepoints, and values that aren't codepoints.
	#[parse_name("Zzzz")]
	Unknown,
}
