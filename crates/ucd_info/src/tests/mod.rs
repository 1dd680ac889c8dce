use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{*, range::lookup, unicode};

fn linear_lookup<T: Copy>(codepoint: u32, table: &[(CodepointRange, T)]) -> Option<T> {
	table.iter().find(|(range, _)| range.contains(codepoint)).map(|(_, value)| *value)
}

fn cross_check<T: Copy + PartialEq + core::fmt::Debug>(name: &str, table: &[(CodepointRange, T)]) {
	for (range, value) in table {
		assert_eq!(lookup(range.first, table), Some(*value), "{name}: first of {range:?}");
		assert_eq!(lookup(range.last, table), Some(*value), "{name}: last of {range:?}");
		for codepoint in [range.first.wrapping_sub(1), range.last + 1] {
			assert_eq!(lookup(codepoint, table), linear_lookup(codepoint, table), "{name}: {codepoint:#X} next to {range:?}");
		}
	}

	let mut rng = StdRng::seed_from_u64(0x0055_4344);
	for _ in 0..20_000 {
		let codepoint = rng.gen_range(0..=MAX_CODEPOINT + 0x100);
		assert_eq!(lookup(codepoint, table), linear_lookup(codepoint, table), "{name}: {codepoint:#X}");
	}
}

#[test]
fn binary_search_matches_linear_scan() {
	cross_check("category", &unicode::CATEGORIES);
	cross_check("script", &unicode::SCRIPTS);
	cross_check("property", &unicode::PROPERTIES);
	cross_check("uppercase", &unicode::TO_UPPER);
	cross_check("lowercase", &unicode::TO_LOWER);
	cross_check("titlecase", &unicode::TO_TITLE);
}

#[test]
fn tables_are_valid() {
	assert_eq!(verify_tables(), Ok(()));
}

#[test]
fn tables_omit_defaults() {
	assert!(unicode::CATEGORIES.iter().all(|(_, category)| *category != Category::Unassigned && *category != Category::Invalid));
	assert!(unicode::SCRIPTS.iter().all(|(_, script)| *script != Script::Unknown));
	assert!(unicode::PROPERTIES.iter().all(|(_, props)| props.is_any()));
}

//==============================================================

#[test]
fn category_scenarios() {
	assert_eq!(lookup_category(0x0041), Category::UppercaseLetter);
	assert_eq!(lookup_category_group(0x0041), CategoryGroup::Letter);
	assert_eq!(category_group_for_category(Category::UppercaseLetter), CategoryGroup::Letter);

	assert_eq!(lookup_category(0x0000), Category::Control);
	assert_eq!(lookup_category(0x0020), Category::SpaceSeparator);
	assert_eq!(lookup_category(0x0661), Category::DecimalNumber);
	assert_eq!(lookup_category(0x01C5), Category::TitlecaseLetter);
	assert_eq!(lookup_category(0x2028), Category::LineSeparator);
	assert_eq!(lookup_category(0x4E00), Category::OtherLetter);
	assert_eq!(lookup_category(0xD800), Category::Surrogate);
	assert_eq!(lookup_category(0xDFFF), Category::Surrogate);
	assert_eq!(lookup_category(0xE000), Category::PrivateUse);
	assert_eq!(lookup_category(0x1F600), Category::OtherSymbol);
	assert_eq!(lookup_category(0xE0001), Category::Format);
	assert_eq!(lookup_category(0x10FFFD), Category::PrivateUse);
}

#[test]
fn unassigned_codepoints() {
	for codepoint in [0x0378, 0x50000, 0xFFFF, 0x10FFFF] {
		assert_eq!(lookup_category(codepoint), Category::Unassigned, "{codepoint:#X}");
		assert_eq!(lookup_category_group(codepoint), CategoryGroup::Other, "{codepoint:#X}");
		assert_eq!(lookup_script(codepoint), Script::Unknown, "{codepoint:#X}");
	}
	assert_eq!(properties(0x50000, Category::Unassigned), Property::None);
	assert_eq!(properties(0x0378, Category::Unassigned), Property::None);
	assert_eq!(properties(0xFFFF, Category::Unassigned), Property::NoncharacterCodePoint);
}

#[test]
fn invalid_codepoints() {
	for codepoint in [0x110000, 0x7FFF_FFFF, u32::MAX] {
		assert_eq!(lookup_category(codepoint), Category::Invalid);
		assert_eq!(lookup_category_group(codepoint), CategoryGroup::Invalid);
		assert_eq!(lookup_script(codepoint), Script::Unknown);
		assert_eq!(properties(codepoint, Category::Invalid), Property::None);
		assert_eq!(properties(codepoint, Category::SpaceSeparator), Property::None);
		assert_eq!(to_upper(codepoint), codepoint);
		assert_eq!(to_lower(codepoint), codepoint);
		assert_eq!(to_title(codepoint), codepoint);
		check_predicates(codepoint, &[]);
	}
}

#[test]
fn group_paths_agree() {
	let mut rng = StdRng::seed_from_u64(7);
	for _ in 0..10_000 {
		let codepoint = rng.gen_range(0..=0x11_0000);
		assert_eq!(lookup_category(codepoint).group(), lookup_category_group(codepoint));
	}
	for (range, category) in &unicode::CATEGORIES {
		assert_eq!(lookup_category_group(range.first), category.group());
	}
}

#[test]
fn queries_are_idempotent() {
	for codepoint in [0x41, 0x0661, 0x1F600, 0x10FFFF, 0x110000] {
		assert_eq!(classify(codepoint), classify(codepoint));
		assert_eq!(to_title(codepoint), to_title(codepoint));
	}
}

#[test]
fn script_scenarios() {
	assert_eq!(lookup_script(0x0041), Script::Latin);
	assert_eq!(lookup_script(0x0030), Script::Common);
	assert_eq!(lookup_script(0x0300), Script::Inherited);
	assert_eq!(lookup_script(0x0391), Script::Greek);
	assert_eq!(lookup_script(0x0410), Script::Cyrillic);
	assert_eq!(lookup_script(0x0661), Script::Arabic);
	assert_eq!(lookup_script(0x1680), Script::Ogham);
	assert_eq!(lookup_script(0x3042), Script::Hiragana);
	assert_eq!(lookup_script(0x4E00), Script::Han);
	assert_eq!(lookup_script(0xAC00), Script::Hangul);
	assert_eq!(lookup_script(0x10400), Script::Deseret);
	assert_eq!(lookup_script(0x1E900), Script::Adlam);
	assert_eq!(lookup_script(0xD800), Script::Unknown);
	assert_eq!(lookup_script(0xE000), Script::Unknown);
}

#[test]
fn property_scenarios() {
	assert!(properties(0x0020, Category::SpaceSeparator).contains(Property::WhiteSpace));
	assert_eq!(properties(0x0020, Category::SpaceSeparator), Property::WhiteSpace | Property::PatternWhiteSpace);
	assert_eq!(properties(0x0041, Category::UppercaseLetter), Property::HexDigit | Property::AsciiHexDigit);
	assert_eq!(properties(0x0030, Category::DecimalNumber), Property::HexDigit | Property::AsciiHexDigit | Property::Emoji | Property::EmojiComponent);
	assert_eq!(properties(0x200D, Category::Format), Property::JoinControl | Property::EmojiComponent);
	assert_eq!(properties(0x00AD, Category::Format), Property::Hyphen);
	assert_eq!(properties(0x1F600, Category::OtherSymbol), Property::Emoji | Property::EmojiPresentation | Property::ExtendedPictographic);
	assert_eq!(properties(0x4E00, Category::OtherLetter), Property::Ideographic | Property::UnifiedIdeograph);
	assert_eq!(properties(0x0345, Category::NonspacingMark), Property::OtherAlphabetic | Property::Diacritic | Property::OtherLowercase);

	// Implied by the category, not stored per codepoint
	assert!(properties(0x2028, Category::LineSeparator).contains(Property::WhiteSpace | Property::PatternWhiteSpace));
	assert!(properties(0x2014, Category::DashPunctuation).contains(Property::Dash));
	assert!(properties(0x00AB, Category::InitialPunctuation).contains(Property::PatternSyntax));
	assert_eq!(properties(0x0085, Category::Control).bits(), 0x4000_0001);
}

#[test]
fn properties_with_looked_up_category() {
	assert_eq!(classify(0x3000).properties, Property::WhiteSpace);
	assert_eq!(classify(0x1F1E6).properties, Property::Emoji | Property::EmojiPresentation | Property::RegionalIndicator | Property::EmojiComponent);
	assert_eq!(classify(0xFFFE).properties, Property::NoncharacterCodePoint);
	assert_eq!(classify(0xE0001).properties, Property::Deprecated);
}

#[test]
fn classify_combines_lookups() {
	let info = classify(0x0661);
	assert_eq!(info, CodepointInfo {
		codepoint: 0x0661,
		category: Category::DecimalNumber,
		group: CategoryGroup::Number,
		script: Script::Arabic,
		properties: Property::None,
	});
}

//==============================================================

fn check_predicates(codepoint: u32, expected: &[&str]) {
	let predicates: [(&str, fn(u32) -> bool); 12] = [
		("alnum", is_alnum),
		("alpha", is_alpha),
		("blank", is_blank),
		("cntrl", is_cntrl),
		("digit", is_digit),
		("graph", is_graph),
		("lower", is_lower),
		("print", is_print),
		("punct", is_punct),
		("space", is_space),
		("upper", is_upper),
		("xdigit", is_xdigit),
	];

	let matching: Vec<&str> = predicates.iter()
		.filter(|(_, predicate)| predicate(codepoint))
		.map(|(name, _)| *name)
		.collect();
	assert_eq!(matching, expected, "U+{codepoint:04X}");
}

#[test]
fn predicates_ascii() {
	check_predicates(0x0000, &["cntrl"]);
	check_predicates(0x0009, &["blank", "cntrl", "space"]);
	check_predicates(0x000A, &["cntrl", "space"]);
	check_predicates(0x0020, &["blank", "print", "space"]);
	check_predicates(0x0024, &["graph", "print", "punct"]);
	check_predicates(0x002B, &["graph", "print", "punct"]);
	check_predicates(0x0039, &["alnum", "digit", "graph", "print", "xdigit"]);
	check_predicates(0x0041, &["alnum", "alpha", "graph", "print", "upper", "xdigit"]);
	check_predicates(0x005F, &["graph", "print", "punct"]);
	check_predicates(0x0061, &["alnum", "alpha", "graph", "lower", "print", "xdigit"]);
}

#[test]
fn predicates_unicode() {
	check_predicates(0x0085, &["cntrl", "space"]);
	check_predicates(0x00AA, &["alnum", "alpha", "graph", "lower", "print"]);
	check_predicates(0x00AD, &["graph", "print"]);
	check_predicates(0x00B2, &["graph", "print"]);
	check_predicates(0x0345, &["alnum", "alpha", "graph", "lower", "print"]);
	check_predicates(0x0661, &["alnum", "digit", "graph", "print", "xdigit"]);
	check_predicates(0x1680, &["blank", "print", "space"]);
	check_predicates(0x2028, &["space"]);
	check_predicates(0x2170, &["alnum", "alpha", "graph", "lower", "print"]);
	check_predicates(0x24B6, &["alnum", "alpha", "graph", "print", "upper"]);
	check_predicates(0xFF21, &["alnum", "alpha", "graph", "print", "upper", "xdigit"]);
	check_predicates(0x1D400, &["alnum", "alpha", "graph", "print", "upper"]);
	check_predicates(0x1F600, &["graph", "print", "punct"]);
}

#[test]
fn predicates_other() {
	check_predicates(0xD800, &[]);
	check_predicates(0xE000, &["graph", "print"]);
	check_predicates(0xFFFE, &[]);
	check_predicates(0x50000, &[]);
	check_predicates(0xE0001, &["graph", "print"]);
}

#[test]
fn digit_scenarios() {
	assert!(is_digit(0x0039));
	assert!(is_digit(0x0661));
	assert!(!is_alpha(0x0661));
	assert!(!is_digit(0x00B2));
}

#[test]
fn predicate_relations() {
	let mut rng = StdRng::seed_from_u64(0x5EED);
	for _ in 0..5_000 {
		let codepoint = rng.gen_range(0..=MAX_CODEPOINT);
		assert_eq!(is_alnum(codepoint), is_alpha(codepoint) || is_digit(codepoint), "U+{codepoint:04X}");
		assert_eq!(is_print(codepoint), (is_graph(codepoint) || is_blank(codepoint)) && !is_cntrl(codepoint), "U+{codepoint:04X}");
		if is_upper(codepoint) || is_lower(codepoint) {
			assert!(is_alpha(codepoint), "U+{codepoint:04X}");
		}
		if is_digit(codepoint) {
			assert!(is_xdigit(codepoint), "U+{codepoint:04X}");
		}
		if is_space(codepoint) {
			assert!(!is_graph(codepoint), "U+{codepoint:04X}");
		}
	}
}

//==============================================================

#[test]
fn case_scenarios() {
	assert_eq!(to_upper(0x0061), 0x0041);
	assert_eq!(to_upper(0x0041), 0x0041);
	assert_eq!(to_lower(0x0041), 0x0061);
	assert_eq!(to_lower(0x1E9E), 0x00DF);
	assert_eq!(to_lower(0x03A3), 0x03C3);
	assert_eq!(to_upper(0x03C2), 0x03A3);
	assert_eq!(to_upper(0x0345), 0x0399);
	assert_eq!(to_lower(0x24B6), 0x24D0);
	assert_eq!(to_upper(0x2170), 0x2160);
	assert_eq!(to_lower(0xFF21), 0xFF41);
}

#[test]
fn codepoints_without_mapping_map_to_themselves() {
	let mut rng = StdRng::seed_from_u64(42);
	for _ in 0..5_000 {
		let codepoint = rng.gen_range(0..=MAX_CODEPOINT);
		if linear_lookup(codepoint, &unicode::TO_UPPER).is_none() {
			assert_eq!(to_upper(codepoint), codepoint);
		}
		if linear_lookup(codepoint, &unicode::TO_LOWER).is_none() {
			assert_eq!(to_lower(codepoint), codepoint);
		}
		if linear_lookup(codepoint, &unicode::TO_TITLE).is_none() {
			assert_eq!(to_title(codepoint), codepoint);
		}
	}
}

//==============================================================

#[test]
fn names_round_trip() {
	for idx in 0..Category::COUNT {
		let category = Category::from_idx(idx).unwrap();
		let name = category_to_string(category);
		assert_eq!(name.len(), 2);
		assert_eq!(Category::parse(name), Some(category));
		assert_eq!(name.parse::<Category>(), Ok(category));
		assert_ne!(category_group_to_string(category_group_for_category(category)), "-");
	}
	for idx in 0..CategoryGroup::COUNT {
		let group = CategoryGroup::from_idx(idx).unwrap();
		assert_eq!(CategoryGroup::parse(category_group_to_string(group)), Some(group));
	}
	for idx in 0..Script::COUNT {
		let script = Script::from_idx(idx).unwrap();
		let name = script_to_string(script);
		assert_eq!(name.len(), 4);
		assert_eq!(Script::parse(name), Some(script));
	}
}

#[test]
fn names_follow_ordinal() {
	for (idx, name) in Category::NAMES.iter().enumerate() {
		assert_eq!(Category::from_idx(idx).unwrap().name(), *name);
		assert_eq!(Category::from_idx(idx).unwrap() as usize, idx);
	}
	for (idx, name) in CategoryGroup::NAMES.iter().enumerate() {
		assert_eq!(CategoryGroup::from_idx(idx).unwrap().name(), *name);
	}
	for (idx, name) in Script::NAMES.iter().enumerate() {
		assert_eq!(Script::from_idx(idx).unwrap().name(), *name);
	}
	assert_eq!(Category::NAMES.len(), Category::COUNT);
	assert_eq!(Script::NAMES.len(), Script::COUNT);
}

#[test]
fn names_are_unique() {
	let mut names: Vec<_> = Script::NAMES.to_vec();
	names.sort_unstable();
	names.dedup();
	assert_eq!(names.len(), Script::COUNT);
	assert!(Script::NAMES.windows(2).all(|pair| pair[0] < pair[1]), "scripts are ordered by code");
}

#[test]
fn string_scenarios() {
	assert_eq!(category_to_string(Category::UppercaseLetter), "Lu");
	assert_eq!(category_to_string(Category::Invalid), "Ii");
	assert_eq!(category_group_to_string(CategoryGroup::Separator), "Z");
	assert_eq!(script_to_string(Script::Latin), "Latn");
	assert_eq!(script_to_string(Script::Unknown), "Zzzz");
	assert_eq!(script_to_string(Script::HanSimplified), "Hans");
	assert_eq!(Script::Common.to_string(), "Zyyy");
	assert_eq!(format!("{:>4}|", CategoryGroup::Letter), "   L|");
}

#[test]
fn out_of_range_values_use_placeholder() {
	assert_eq!(category_to_string_raw(Category::SpaceSeparator as u8), "Zs");
	assert_eq!(category_to_string_raw(Category::COUNT as u8), "--");
	assert_eq!(category_to_string_raw(u8::MAX), "--");
	assert_eq!(category_group_to_string_raw(CategoryGroup::Separator as u8), "Z");
	assert_eq!(category_group_to_string_raw(8), "-");
	assert_eq!(script_to_string_raw(Script::Unknown as u8), "Zzzz");
	assert_eq!(script_to_string_raw(Script::COUNT as u8), "----");
	assert_eq!(script_to_string_raw(u8::MAX), "----");
}

#[test]
fn unknown_names() {
	assert_eq!(Category::parse("lu"), None);
	assert_eq!(Script::parse("Latin"), None);
	assert_eq!(CategoryGroup::parse("-"), None);
	let err = "Qqqq".parse::<Script>().unwrap_err();
	assert_eq!(err.to_string(), "unknown script 'Qqqq'");
}
