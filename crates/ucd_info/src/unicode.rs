// This file is generated from the Unicode Character Database 14.0.0, and should not be edited manually.

use ucd_base::EnumCountT;

use crate::{
	casing::CaseMapping,
	category::Category,
	property::Property,
	range::CodepointRange,
	script::Script,
};

pub(crate) const UNICODE_VERSION: (u8, u8, u8) = (14, 0, 0);

pub(crate) static CATEGORIES: [(CodepointRange, Category); 3270] = [
	(CodepointRange::new(0x0000, 0x001F), Category::Control),
	(CodepointRange::new(0x0020, 0x0020), Category::SpaceSeparator),
	(CodepointRange::new(0x0021, 0x0023), Category::OtherPunctuation),
	(CodepointRange::new(0x0024, 0x0024), Category::CurrencySymbol),
	(CodepointRange::new(0x0025, 0x0027), Category::OtherPunctuation),
	(CodepointRange::new(0x0028, 0x0028), Category::OpenPunctuation),
	(CodepointRange::new(0x0029, 0x0029), Category::ClosePunctuation),
	(CodepointRange::new(0x002A, 0x002A), Category::OtherPunctuation),
	(CodepointRange::new(0x002B, 0x002B), Category::MathSymbol),
	(CodepointRange::new(0x002C, 0x002C), Category::OtherPunctuation),
	(CodepointRange::new(0x002D, 0x002D), Category::DashPunctuation),
	(CodepointRange::new(0x002E, 0x002F), Category::OtherPunctuation),
	(CodepointRange::new(0x0030, 0x0039), Category::DecimalNumber),
	(CodepointRange::new(0x003A, 0x003B), Category::OtherPunctuation),
	(CodepointRange::new(0x003C, 0x003E), Category::MathSymbol),
	(CodepointRange::new(0x003F, 0x0040), Category::OtherPunctuation),
	(CodepointRange::new(0x0041, 0x005A), Category::UppercaseLetter),
	(CodepointRange::new(0x005B, 0x005B), Category::OpenPunctuation),
	(CodepointRange::new(0x005C, 0x005C), Category::OtherPunctuation),
	(CodepointRange::new(0x005D, 0x005D), Category::ClosePunctuation),
	(CodepointRange::new(0x005E, 0x005E), Category::ModifierSymbol),
	(CodepointRange::new(0x005F, 0x005F), Category::ConnectorPunctuation),
	(CodepointRange::new(0x0060, 0x0060), Category::ModifierSymbol),
	(CodepointRange::new(0x0061, 0x007A), Category::LowercaseLetter),
	(CodepointRange::new(0x007B, 0x007B), Category::OpenPunctuation),
	(CodepointRange::new(0x007C, 0x007C), Category::MathSymbol),
	(CodepointRange::new(0x007D, 0x007D), Category::ClosePunctuation),
	(CodepointRange::new(0x007E, 0x007E), Category::MathSymbol),
	(CodepointRange::new(0x007F, 0x009F), Category::Control),
	(CodepointRange::new(0x00A0, 0x00A0), Category::SpaceSeparator),
	(CodepointRange::new(0x00A1, 0x00A1), Category::OtherPunctuation),
	(CodepointRange::new(0x00A2, 0x00A5), Category::CurrencySymbol),
	(CodepointRange::new(0x00A6, 0x00A6), Category::OtherSymbol),
	(CodepointRange::new(0x00A7, 0x00A7), Category::OtherPunctuation),
	(CodepointRange::new(0x00A8, 0x00A8), Category::ModifierSymbol),
	(CodepointRange::new(0x00A9, 0x00A9), Category::OtherSymbol),
	(CodepointRange::new(0x00AA, 0x00AA), Category::OtherLetter),
	(CodepointRange::new(0x00AB, 0x00AB), Category::InitialPunctuation),
	(CodepointRange::new(0x00AC, 0x00AC), Category::MathSymbol),
	(CodepointRange::new(0x00AD, 0x00AD), Category::Format),
	(CodepointRange::new(0x00AE, 0x00AE), Category::OtherSymbol),
	(CodepointRange::new(0x00AF, 0x00AF), Category::ModifierSymbol),
	(CodepointRange::new(0x00B0, 0x00B0), Category::OtherSymbol),
	(CodepointRange::new(0x00B1, 0x00B1), Category::MathSymbol),
	(CodepointRange::new(0x00B2, 0x00B3), Category::OtherNumber),
	(CodepointRange::new(0x00B4, 0x00B4), Category::ModifierSymbol),
	(CodepointRange::new(0x00B5, 0x00B5), Category::LowercaseLetter),
	(CodepointRange::new(0x00B6, 0x00B7), Category::OtherPunctuation),
	(CodepointRange::new(0x00B8, 0x00B8), Category::ModifierSymbol),
	(CodepointRange::new(0x00B9, 0x00B9), Category::OtherNumber),
	(CodepointRange::new(0x00BA, 0x00BA), Category::OtherLetter),
	(CodepointRange::new(0x00BB, 0x00BB), Category::FinalPunctuation),
	(CodepointRange::new(0x00BC, 0x00BE), Category::OtherNumber),
	(CodepointRange::new(0x00BF, 0x00BF), Category::OtherPunctuation),
	(CodepointRange::new(0x00C0, 0x00D6), Category::UppercaseLetter),
	(CodepointRange::new(0x00D7, 0x00D7), Category::MathSymbol),
	(CodepointRange::new(0x00D8, 0x00DE), Category::UppercaseLetter),
	(CodepointRange::new(0x00DF, 0x00F6), Category::LowercaseLetter),
	(CodepointRange::new(0x00F7, 0x00F7), Category::MathSymbol),
	(CodepointRange::new(0x00F8, 0x00FF), Category::LowercaseLetter),
	(CodepointRange::new(0x0100, 0x0100), Category::UppercaseLetter),
	(CodepointRange::new(0x0101, 0x0101), Category::LowercaseLetter),
	(CodepointRange::new(0x0102, 0x0102), Category::UppercaseLetter),
	(CodepointRange::new(0x0103, 0x0103), Category::LowercaseLetter),
	(CodepointRange::new(0x0104, 0x0104), Category::UppercaseLetter),
	(CodepointRange::new(0x0105, 0x0105), Category::LowercaseLetter),
	(CodepointRange::new(0x0106, 0x0106), Category::UppercaseLetter),
	(CodepointRange::new(0x0107, 0x0107), Category::LowercaseLetter),
	(CodepointRange::new(0x0108, 0x0108), Category::UppercaseLetter),
	(CodepointRange::new(0x0109, 0x0109), Category::LowercaseLetter),
	(CodepointRange::new(0x010A, 0x010A), Category::UppercaseLetter),
	(CodepointRange::new(0x010B, 0x010B), Category::LowercaseLetter),
	(CodepointRange::new(0x010C, 0x010C), Category::UppercaseLetter),
	(CodepointRange::new(0x010D, 0x010D), Category::LowercaseLetter),
	(CodepointRange::new(0x010E, 0x010E), Category::UppercaseLetter),
	(CodepointRange::new(0x010F, 0x010F), Category::LowercaseLetter),
	(CodepointRange::new(0x0110, 0x0110), Category::UppercaseLetter),
	(CodepointRange::new(0x0111, 0x0111), Category::LowercaseLetter),
	(CodepointRange::new(0x0112, 0x0112), Category::UppercaseLetter),
	(CodepointRange::new(0x0113, 0x0113), Category::LowercaseLetter),
	(CodepointRange::new(0x0114, 0x0114), Category::UppercaseLetter),
	(CodepointRange::new(0x0115, 0x0115), Category::LowercaseLetter),
	(CodepointRange::new(0x0116, 0x0116), Category::UppercaseLetter),
	(CodepointRange::new(0x0117, 0x0117), Category::LowercaseLetter),
	(CodepointRange::new(0x0118, 0x0118), Category::UppercaseLetter),
	(CodepointRange::new(0x0119, 0x0119), Category::LowercaseLetter),
	(CodepointRange::new(0x011A, 0x011A), Category::UppercaseLetter),
	(CodepointRange::new(0x011B, 0x011B), Category::LowercaseLetter),
	(CodepointRange::new(0x011C, 0x011C), Category::UppercaseLetter),
	(CodepointRange::new(0x011D, 0x011D), Category::LowercaseLetter),
	(CodepointRange::new(0x011E, 0x011E), Category::UppercaseLetter),
	(CodepointRange::new(0x011F, 0x011F), Category::LowercaseLetter),
	(CodepointRange::new(0x0120, 0x0120), Category::UppercaseLetter),
	(CodepointRange::new(0x0121, 0x0121), Category::LowercaseLetter),
	(CodepointRange::new(0x0122, 0x0122), Category::UppercaseLetter),
	(CodepointRange::new(0x0123, 0x0123), Category::LowercaseLetter),
	(CodepointRange::new(0x0124, 0x0124), Category::UppercaseLetter),
	(CodepointRange::new(0x0125, 0x0125), Category::LowercaseLetter),
	(CodepointRange::new(0x0126, 0x0126), Category::UppercaseLetter),
	(CodepointRange::new(0x0127, 0x0127), Category::LowercaseLetter),
	(CodepointRange::new(0x0128, 0x0128), Category::UppercaseLetter),
	(CodepointRange::new(0x0129, 0x0129), Category::LowercaseLetter),
	(CodepointRange::new(0x012A, 0x012A), Category::UppercaseLetter),
	(CodepointRange::new(0x012B, 0x012B), Category::LowercaseLetter),
	(CodepointRange::new(0x012C, 0x012C), Category::UppercaseLetter),
	(CodepointRange::new(0x012D, 0x012D), Category::LowercaseLetter),
	(CodepointRange::new(0x012E, 0x012E), Category::UppercaseLetter),
	(CodepointRange::new(0x012F, 0x012F), Category::LowercaseLetter),
	(CodepointRange::new(0x0130, 0x0130), Category::UppercaseLetter),
	(CodepointRange::new(0x0131, 0x0131), Category::LowercaseLetter),
	(CodepointRange::new(0x0132, 0x0132), Category::UppercaseLetter),
	(CodepointRange::new(0x0133, 0x0133), Category::LowercaseLetter),
	(CodepointRange::new(0x0134, 0x0134), Category::UppercaseLetter),
	(CodepointRange::new(0x0135, 0x0135), Category::LowercaseLetter),
	(CodepointRange::new(0x0136, 0x0136), Category::UppercaseLetter),
	(CodepointRange::new(0x0137, 0x0138), Category::LowercaseLetter),
	(CodepointRange::new(0x0139, 0x0139), Category::UppercaseLetter),
	(CodepointRange::new(0x013A, 0x013A), Category::LowercaseLetter),
	(CodepointRange::new(0x013B, 0x013B), Category::UppercaseLetter),
	(CodepointRange::new(0x013C, 0x013C), Category::LowercaseLetter),
	(CodepointRange::new(0x013D, 0x013D), Category::UppercaseLetter),
	(CodepointRange::new(0x013E, 0x013E), Category::LowercaseLetter),
	(CodepointRange::new(0x013F, 0x013F), Category::UppercaseLetter),
	(CodepointRange::new(0x0140, 0x0140), Category::LowercaseLetter),
	(CodepointRange::new(0x0141, 0x0141), Category::UppercaseLetter),
	(CodepointRange::new(0x0142, 0x0142), Category::LowercaseLetter),
	(CodepointRange::new(0x0143, 0x0143), Category::UppercaseLetter),
	(CodepointRange::new(0x0144, 0x0144), Category::LowercaseLetter),
	(CodepointRange::new(0x0145, 0x0145), Category::UppercaseLetter),
	(CodepointRange::new(0x0146, 0x0146), Category::LowercaseLetter),
	(CodepointRange::new(0x0147, 0x0147), Category::UppercaseLetter),
	(CodepointRange::new(0x0148, 0x0149), Category::LowercaseLetter),
	(CodepointRange::new(0x014A, 0x014A), Category::UppercaseLetter),
	(CodepointRange::new(0x014B, 0x014B), Category::LowercaseLetter),
	(CodepointRange::new(0x014C, 0x014C), Category::UppercaseLetter),
	(CodepointRange::new(0x014D, 0x014D), Category::LowercaseLetter),
	(CodepointRange::new(0x014E, 0x014E), Category::UppercaseLetter),
	(CodepointRange::new(0x014F, 0x014F), Category::LowercaseLetter),
	(CodepointRange::new(0x0150, 0x0150), Category::UppercaseLetter),
	(CodepointRange::new(0x0151, 0x0151), Category::LowercaseLetter),
	(CodepointRange::new(0x0152, 0x0152), Category::UppercaseLetter),
	(CodepointRange::new(0x0153, 0x0153), Category::LowercaseLetter),
	(CodepointRange::new(0x0154, 0x0154), Category::UppercaseLetter),
	(CodepointRange::new(0x0155, 0x0155), Category::LowercaseLetter),
	(CodepointRange::new(0x0156, 0x0156), Category::UppercaseLetter),
	(CodepointRange::new(0x0157, 0x0157), Category::LowercaseLetter),
	(CodepointRange::new(0x0158, 0x0158), Category::UppercaseLetter),
	(CodepointRange::new(0x0159, 0x0159), Category::LowercaseLetter),
	(CodepointRange::new(0x015A, 0x015A), Category::UppercaseLetter),
	(CodepointRange::new(0x015B, 0x015B), Category::LowercaseLetter),
	(CodepointRange::new(0x015C, 0x015C), Category::UppercaseLetter),
	(CodepointRange::new(0x015D, 0x015D), Category::LowercaseLetter),
	(CodepointRange::new(0x015E, 0x015E), Category::UppercaseLetter),
	(CodepointRange::new(0x015F, 0x015F), Category::LowercaseLetter),
	(CodepointRange::new(0x0160, 0x0160), Category::UppercaseLetter),
	(CodepointRange::new(0x0161, 0x0161), Category::LowercaseLetter),
	(CodepointRange::new(0x0162, 0x0162), Category::UppercaseLetter),
	(CodepointRange::new(0x0163, 0x0163), Category::LowercaseLetter),
	(CodepointRange::new(0x0164, 0x0164), Category::UppercaseLetter),
	(CodepointRange::new(0x0165, 0x0165), Category::LowercaseLetter),
	(CodepointRange::new(0x0166, 0x0166), Category::UppercaseLetter),
	(CodepointRange::new(0x0167, 0x0167), Category::LowercaseLetter),
	(CodepointRange::new(0x0168, 0x0168), Category::UppercaseLetter),
	(CodepointRange::new(0x0169, 0x0169), Category::LowercaseLetter),
	(CodepointRange::new(0x016A, 0x016A), Category::UppercaseLetter),
	(CodepointRange::new(0x016B, 0x016B), Category::LowercaseLetter),
	(CodepointRange::new(0x016C, 0x016C), Category::UppercaseLetter),
	(CodepointRange::new(0x016D, 0x016D), Category::LowercaseLetter),
	(CodepointRange::new(0x016E, 0x016E), Category::UppercaseLetter),
	(CodepointRange::new(0x016F, 0x016F), Category::LowercaseLetter),
	(CodepointRange::new(0x0170, 0x0170), Category::UppercaseLetter),
	(CodepointRange::new(0x0171, 0x0171), Category::LowercaseLetter),
	(CodepointRange::new(0x0172, 0x0172), Category::UppercaseLetter),
	(CodepointRange::new(0x0173, 0x0173), Category::LowercaseLetter),
	(CodepointRange::new(0x0174, 0x0174), Category::UppercaseLetter),
	(CodepointRange::new(0x0175, 0x0175), Category::LowercaseLetter),
	(CodepointRange::new(0x0176, 0x0176), Category::UppercaseLetter),
	(CodepointRange::new(0x0177, 0x0177), Category::LowercaseLetter),
	(CodepointRange::new(0x0178, 0x0179), Category::UppercaseLetter),
	(CodepointRange::new(0x017A, 0x017A), Category::LowercaseLetter),
	(CodepointRange::new(0x017B, 0x017B), Category::UppercaseLetter),
	(CodepointRange::new(0x017C, 0x017C), Category::LowercaseLetter),
	(CodepointRange::new(0x017D, 0x017D), Category::UppercaseLetter),
	(CodepointRange::new(0x017E, 0x0180), Category::LowercaseLetter),
	(CodepointRange::new(0x0181, 0x0182), Category::UppercaseLetter),
	(CodepointRange::new(0x0183, 0x0183), Category::LowercaseLetter),
	(CodepointRange::new(0x0184, 0x0184), Category::UppercaseLetter),
	(CodepointRange::new(0x0185, 0x0185), Category::LowercaseLetter),
	(CodepointRange::new(0x0186, 0x0187), Category::UppercaseLetter),
	(CodepointRange::new(0x0188, 0x0188), Category::LowercaseLetter),
	(CodepointRange::new(0x0189, 0x018B), Category::UppercaseLetter),
	(CodepointRange::new(0x018C, 0x018D), Category::LowercaseLetter),
	(CodepointRange::new(0x018E, 0x0191), Category::UppercaseLetter),
	(CodepointRange::new(0x0192, 0x0192), Category::LowercaseLetter),
	(CodepointRange::new(0x0193, 0x0194), Category::UppercaseLetter),
	(CodepointRange::new(0x0195, 0x0195), Category::LowercaseLetter),
	(CodepointRange::new(0x0196, 0x0198), Category::UppercaseLetter),
	(CodepointRange::new(0x0199, 0x019B), Category::LowercaseLetter),
	(CodepointRange::new(0x019C, 0x019D), Category::UppercaseLetter),
	(CodepointRange::new(0x019E, 0x019E), Category::LowercaseLetter),
	(CodepointRange::new(0x019F, 0x01A0), Category::UppercaseLetter),
	(CodepointRange::new(0x01A1, 0x01A1), Category::LowercaseLetter),
	(CodepointRange::new(0x01A2, 0x01A2), Category::UppercaseLetter),
	(CodepointRange::new(0x01A3, 0x01A3), Category::LowercaseLetter),
	(CodepointRange::new(0x01A4, 0x01A4), Category::UppercaseLetter),
	(CodepointRange::new(0x01A5, 0x01A5), Category::LowercaseLetter),
	(CodepointRange::new(0x01A6, 0x01A7), Category::UppercaseLetter),
	(CodepointRange::new(0x01A8, 0x01A8), Category::LowercaseLetter),
	(CodepointRange::new(0x01A9, 0x01A9), Category::UppercaseLetter),
	(CodepointRange::new(0x01AA, 0x01AB), Category::LowercaseLetter),
	(CodepointRange::new(0x01AC, 0x01AC), Category::UppercaseLetter),
	(CodepointRange::new(0x01AD, 0x01AD), Category::LowercaseLetter),
	(CodepointRange::new(0x01AE, 0x01AF), Category::UppercaseLetter),
	(CodepointRange::new(0x01B0, 0x01B0), Category::LowercaseLetter),
	(CodepointRange::new(0x01B1, 0x01B3), Category::UppercaseLetter),
	(CodepointRange::new(0x01B4, 0x01B4), Category::LowercaseLetter),
	(CodepointRange::new(0x01B5, 0x01B5), Category::UppercaseLetter),
	(CodepointRange::new(0x01B6, 0x01B6), Category::LowercaseLetter),
	(CodepointRange::new(0x01B7, 0x01B8), Category::UppercaseLetter),
	(CodepointRange::new(0x01B9, 0x01BA), Category::LowercaseLetter),
	(CodepointRange::new(0x01BB, 0x01BB), Category::OtherLetter),
	(CodepointRange::new(0x01BC, 0x01BC), Category::UppercaseLetter),
	(CodepointRange::new(0x01BD, 0x01BF), Category::LowercaseLetter),
	(CodepointRange::new(0x01C0, 0x01C3), Category::OtherLetter),
	(CodepointRange::new(0x01C4, 0x01C4), Category::UppercaseLetter),
	(CodepointRange::new(0x01C5, 0x01C5), Category::TitlecaseLetter),
	(CodepointRange::new(0x01C6, 0x01C6), Category::LowercaseLetter),
	(CodepointRange::new(0x01C7, 0x01C7), Category::UppercaseLetter),
	(CodepointRange::new(0x01C8, 0x01C8), Category::TitlecaseLetter),
	(CodepointRange::new(0x01C9, 0x01C9), Category::LowercaseLetter),
	(CodepointRange::new(0x01CA, 0x01CA), Category::UppercaseLetter),
	(CodepointRange::new(0x01CB, 0x01CB), Category::TitlecaseLetter),
	(CodepointRange::new(0x01CC, 0x01CC), Category::LowercaseLetter),
	(CodepointRange::new(0x01CD, 0x01CD), Category::UppercaseLetter),
	(CodepointRange::new(0x01CE, 0x01CE), Category::LowercaseLetter),
	(CodepointRange::new(0x01CF, 0x01CF), Category::UppercaseLetter),
	(CodepointRange::new(0x01D0, 0x01D0), Category::LowercaseLetter),
	(CodepointRange::new(0x01D1, 0x01D1), Category::UppercaseLetter),
	(CodepointRange::new(0x01D2, 0x01D2), Category::LowercaseLetter),
	(CodepointRange::new(0x01D3, 0x01D3), Category::UppercaseLetter),
	(CodepointRange::new(0x01D4, 0x01D4), Category::LowercaseLetter),
	(CodepointRange::new(0x01D5, 0x01D5), Category::UppercaseLetter),
	(CodepointRange::new(0x01D6, 0x01D6), Category::LowercaseLetter),
	(CodepointRange::new(0x01D7, 0x01D7), Category::UppercaseLetter),
	(CodepointRange::new(0x01D8, 0x01D8), Category::LowercaseLetter),
	(CodepointRange::new(0x01D9, 0x01D9), Category::UppercaseLetter),
	(CodepointRange::new(0x01DA, 0x01DA), Category::LowercaseLetter),
	(CodepointRange::new(0x01DB, 0x01DB), Category::UppercaseLetter),
	(CodepointRange::new(0x01DC, 0x01DD), Category::LowercaseLetter),
	(CodepointRange::new(0x01DE, 0x01DE), Category::UppercaseLetter),
	(CodepointRange::new(0x01DF, 0x01DF), Category::LowercaseLetter),
	(CodepointRange::new(0x01E0, 0x01E0), Category::UppercaseLetter),
	(CodepointRange::new(0x01E1, 0x01E1), Category::LowercaseLetter),
	(CodepointRange::new(0x01E2, 0x01E2), Category::UppercaseLetter),
	(CodepointRange::new(0x01E3, 0x01E3), Category::LowercaseLetter),
	(CodepointRange::new(0x01E4, 0x01E4), Category::UppercaseLetter),
	(CodepointRange::new(0x01E5, 0x01E5), Category::LowercaseLetter),
	(CodepointRange::new(0x01E6, 0x01E6), Category::UppercaseLetter),
	(CodepointRange::new(0x01E7, 0x01E7), Category::LowercaseLetter),
	(CodepointRange::new(0x01E8, 0x01E8), Category::UppercaseLetter),
	(CodepointRange::new(0x01E9, 0x01E9), Category::LowercaseLetter),
	(CodepointRange::new(0x01EA, 0x01EA), Category::UppercaseLetter),
	(CodepointRange::new(0x01EB, 0x01EB), Category::LowercaseLetter),
	(CodepointRange::new(0x01EC, 0x01EC), Category::UppercaseLetter),
	(CodepointRange::new(0x01ED, 0x01ED), Category::LowercaseLetter),
	(CodepointRange::new(0x01EE, 0x01EE), Category::UppercaseLetter),
	(CodepointRange::new(0x01EF, 0x01F0), Category::LowercaseLetter),
	(CodepointRange::new(0x01F1, 0x01F1), Category::UppercaseLetter),
	(CodepointRange::new(0x01F2, 0x01F2), Category::TitlecaseLetter),
	(CodepointRange::new(0x01F3, 0x01F3), Category::LowercaseLetter),
	(CodepointRange::new(0x01F4, 0x01F4), Category::UppercaseLetter),
	(CodepointRange::new(0x01F5, 0x01F5), Category::LowercaseLetter),
	(CodepointRange::new(0x01F6, 0x01F8), Category::UppercaseLetter),
	(CodepointRange::new(0x01F9, 0x01F9), Category::LowercaseLetter),
	(CodepointRange::new(0x01FA, 0x01FA), Category::UppercaseLetter),
	(CodepointRange::new(0x01FB, 0x01FB), Category::LowercaseLetter),
	(CodepointRange::new(0x01FC, 0x01FC), Category::UppercaseLetter),
	(CodepointRange::new(0x01FD, 0x01FD), Category::LowercaseLetter),
	(CodepointRange::new(0x01FE, 0x01FE), Category::UppercaseLetter),
	(CodepointRange::new(0x01FF, 0x01FF), Category::LowercaseLetter),
	(CodepointRange::new(0x0200, 0x0200), Category::UppercaseLetter),
	(CodepointRange::new(0x0201, 0x0201), Category::LowercaseLetter),
	(CodepointRange::new(0x0202, 0x0202), Category::UppercaseLetter),
	(CodepointRange::new(0x0203, 0x0203), Category::LowercaseLetter),
	(CodepointRange::new(0x0204, 0x0204), Category::UppercaseLetter),
	(CodepointRange::new(0x0205, 0x0205), Category::LowercaseLetter),
	(CodepointRange::new(0x0206, 0x0206), Category::UppercaseLetter),
	(CodepointRange::new(0x0207, 0x0207), Category::LowercaseLetter),
	(CodepointRange::new(0x0208, 0x0208), Category::UppercaseLetter),
	(CodepointRange::new(0x0209, 0x0209), Category::LowercaseLetter),
	(CodepointRange::new(0x020A, 0x020A), Category::UppercaseLetter),
	(CodepointRange::new(0x020B, 0x020B), Category::LowercaseLetter),
	(CodepointRange::new(0x020C, 0x020C), Category::UppercaseLetter),
	(CodepointRange::new(0x020D, 0x020D), Category::LowercaseLetter),
	(CodepointRange::new(0x020E, 0x020E), Category::UppercaseLetter),
	(CodepointRange::new(0x020F, 0x020F), Category::LowercaseLetter),
	(CodepointRange::new(0x0210, 0x0210), Category::UppercaseLetter),
	(CodepointRange::new(0x0211, 0x0211), Category::LowercaseLetter),
	(CodepointRange::new(0x0212, 0x0212), Category::UppercaseLetter),
	(CodepointRange::new(0x0213, 0x0213), Category::LowercaseLetter),
	(CodepointRange::new(0x0214, 0x0214), Category::UppercaseLetter),
	(CodepointRange::new(0x0215, 0x0215), Category::LowercaseLetter),
	(CodepointRange::new(0x0216, 0x0216), Category::UppercaseLetter),
	(CodepointRange::new(0x0217, 0x0217), Category::LowercaseLetter),
	(CodepointRange::new(0x0218, 0x0218), Category::UppercaseLetter),
	(CodepointRange::new(0x0219, 0x0219), Category::LowercaseLetter),
	(CodepointRange::new(0x021A, 0x021A), Category::UppercaseLetter),
	(CodepointRange::new(0x021B, 0x021B), Category::LowercaseLetter),
	(CodepointRange::new(0x021C, 0x021C), Category::UppercaseLetter),
	(CodepointRange::new(0x021D, 0x021D), Category::LowercaseLetter),
	(CodepointRange::new(0x021E, 0x021E), Category::UppercaseLetter),
	(CodepointRange::new(0x021F, 0x021F), Category::LowercaseLetter),
	(CodepointRange::new(0x0220, 0x0220), Category::UppercaseLetter),
	(CodepointRange::new(0x0221, 0x0221), Category::LowercaseLetter),
	(CodepointRange::new(0x0222, 0x0222), Category::UppercaseLetter),
	(CodepointRange::new(0x0223, 0x0223), Category::LowercaseLetter),
	(CodepointRange::new(0x0224, 0x0224), Category::UppercaseLetter),
	(CodepointRange::new(0x0225, 0x0225), Category::LowercaseLetter),
	(CodepointRange::new(0x0226, 0x0226), Category::UppercaseLetter),
	(CodepointRange::new(0x0227, 0x0227), Category::LowercaseLetter),
	(CodepointRange::new(0x0228, 0x0228), Category::UppercaseLetter),
	(CodepointRange::new(0x0229, 0x0229), Category::LowercaseLetter),
	(CodepointRange::new(0x022A, 0x022A), Category::UppercaseLetter),
	(CodepointRange::new(0x022B, 0x022B), Category::LowercaseLetter),
	(CodepointRange::new(0x022C, 0x022C), Category::UppercaseLetter),
	(CodepointRange::new(0x022D, 0x022D), Category::LowercaseLetter),
	(CodepointRange::new(0x022E, 0x022E), Category::UppercaseLetter),
	(CodepointRange::new(0x022F, 0x022F), Category::LowercaseLetter),
	(CodepointRange::new(0x0230, 0x0230), Category::UppercaseLetter),
	(CodepointRange::new(0x0231, 0x0231), Category::LowercaseLetter),
	(CodepointRange::new(0x0232, 0x0232), Category::UppercaseLetter),
	(CodepointRange::new(0x0233, 0x0239), Category::LowercaseLetter),
	(CodepointRange::new(0x023A, 0x023B), Category::UppercaseLetter),
	(CodepointRange::new(0x023C, 0x023C), Category::LowercaseLetter),
	(CodepointRange::new(0x023D, 0x023E), Category::UppercaseLetter),
	(CodepointRange::new(0x023F, 0x0240), Category::LowercaseLetter),
	(CodepointRange::new(0x0241, 0x0241), Category::UppercaseLetter),
	(CodepointRange::new(0x0242, 0x0242), Category::LowercaseLetter),
	(CodepointRange::new(0x0243, 0x0246), Category::UppercaseLetter),
	(CodepointRange::new(0x0247, 0x0247), Category::LowercaseLetter),
	(CodepointRange::new(0x0248, 0x0248), Category::UppercaseLetter),
	(CodepointRange::new(0x0249, 0x0249), Category::LowercaseLetter),
	(CodepointRange::new(0x024A, 0x024A), Category::UppercaseLetter),
	(CodepointRange::new(0x024B, 0x024B), Category::LowercaseLetter),
	(CodepointRange::new(0x024C, 0x024C), Category::UppercaseLetter),
	(CodepointRange::new(0x024D, 0x024D), Category::LowercaseLetter),
	(CodepointRange::new(0x024E, 0x024E), Category::UppercaseLetter),
	(CodepointRange::new(0x024F, 0x0293), Category::LowercaseLetter),
	(CodepointRange::new(0x0294, 0x0294), Category::OtherLetter),
	(CodepointRange::new(0x0295, 0x02AF), Category::LowercaseLetter),
	(CodepointRange::new(0x02B0, 0x02C1), Category::ModifierLetter),
	(CodepointRange::new(0x02C2, 0x02C5), Category::ModifierSymbol),
	(CodepointRange::new(0x02C6, 0x02D1), Category::ModifierLetter),
	(CodepointRange::new(0x02D2, 0x02DF), Category::ModifierSymbol),
	(CodepointRange::new(0x02E0, 0x02E4), Category::ModifierLetter),
	(CodepointRange::new(0x02E5, 0x02EB), Category::ModifierSymbol),
	(CodepointRange::new(0x02EC, 0x02EC), Category::ModifierLetter),
	(CodepointRange::new(0x02ED, 0x02ED), Category::ModifierSymbol),
	(CodepointRange::new(0x02EE, 0x02EE), Category::ModifierLetter),
	(CodepointRange::new(0x02EF, 0x02FF), Category::ModifierSymbol),
	(CodepointRange::new(0x0300, 0x036F), Category::NonspacingMark),
	(CodepointRange::new(0x0370, 0x0370), Category::UppercaseLetter),
	(CodepointRange::new(0x0371, 0x0371), Category::LowercaseLetter),
	(CodepointRange::new(0x0372, 0x0372), Category::UppercaseLetter),
	(CodepointRange::new(0x0373, 0x0373), Category::LowercaseLetter),
	(CodepointRange::new(0x0374, 0x0374), Category::ModifierLetter),
	(CodepointRange::new(0x0375, 0x0375), Category::ModifierSymbol),
	(CodepointRange::new(0x0376, 0x0376), Category::UppercaseLetter),
	(CodepointRange::new(0x0377, 0x0377), Category::LowercaseLetter),
	(CodepointRange::new(0x037A, 0x037A), Category::ModifierLetter),
	(CodepointRange::new(0x037B, 0x037D), Category::LowercaseLetter),
	(CodepointRange::new(0x037E, 0x037E), Category::OtherPunctuation),
	(CodepointRange::new(0x037F, 0x037F), Category::UppercaseLetter),
	(CodepointRange::new(0x0384, 0x0385), Category::ModifierSymbol),
	(CodepointRange::new(0x0386, 0x0386), Category::UppercaseLetter),
	(CodepointRange::new(0x0387, 0x0387), Category::OtherPunctuation),
	(CodepointRange::new(0x0388, 0x038A), Category::UppercaseLetter),
	(CodepointRange::new(0x038C, 0x038C), Category::UppercaseLetter),
	(CodepointRange::new(0x038E, 0x038F), Category::UppercaseLetter),
	(CodepointRange::new(0x0390, 0x0390), Category::LowercaseLetter),
	(CodepointRange::new(0x0391, 0x03A1), Category::UppercaseLetter),
	(CodepointRange::new(0x03A3, 0x03AB), Category::UppercaseLetter),
	(CodepointRange::new(0x03AC, 0x03CE), Category::LowercaseLetter),
	(CodepointRange::new(0x03CF, 0x03CF), Category::UppercaseLetter),
	(CodepointRange::new(0x03D0, 0x03D1), Category::LowercaseLetter),
	(CodepointRange::new(0x03D2, 0x03D4), Category::UppercaseLetter),
	(CodepointRange::new(0x03D5, 0x03D7), Category::LowercaseLetter),
	(CodepointRange::new(0x03D8, 0x03D8), Category::UppercaseLetter),
	(CodepointRange::new(0x03D9, 0x03D9), Category::LowercaseLetter),
	(CodepointRange::new(0x03DA, 0x03DA), Category::UppercaseLetter),
	(CodepointRange::new(0x03DB, 0x03DB), Category::LowercaseLetter),
	(CodepointRange::new(0x03DC, 0x03DC), Category::UppercaseLetter),
	(CodepointRange::new(0x03DD, 0x03DD), Category::LowercaseLetter),
	(CodepointRange::new(0x03DE, 0x03DE), Category::UppercaseLetter),
	(CodepointRange::new(0x03DF, 0x03DF), Category::LowercaseLetter),
	(CodepointRange::new(0x03E0, 0x03E0), Category::UppercaseLetter),
	(CodepointRange::new(0x03E1, 0x03E1), Category::LowercaseLetter),
	(CodepointRange::new(0x03E2, 0x03E2), Category::UppercaseLetter),
	(CodepointRange::new(0x03E3, 0x03E3), Category::LowercaseLetter),
	(CodepointRange::new(0x03E4, 0x03E4), Category::UppercaseLetter),
	(CodepointRange::new(0x03E5, 0x03E5), Category::LowercaseLetter),
	(CodepointRange::new(0x03E6, 0x03E6), Category::UppercaseLetter),
	(CodepointRange::new(0x03E7, 0x03E7), Category::LowercaseLetter),
	(CodepointRange::new(0x03E8, 0x03E8), Category::UppercaseLetter),
	(CodepointRange::new(0x03E9, 0x03E9), Category::LowercaseLetter),
	(CodepointRange::new(0x03EA, 0x03EA), Category::UppercaseLetter),
	(CodepointRange::new(0x03EB, 0x03EB), Category::LowercaseLetter),
	(CodepointRange::new(0x03EC, 0x03EC), Category::UppercaseLetter),
	(CodepointRange::new(0x03ED, 0x03ED), Category::LowercaseLetter),
	(CodepointRange::new(0x03EE, 0x03EE), Category::UppercaseLetter),
	(CodepointRange::new(0x03EF, 0x03F3), Category::LowercaseLetter),
	(CodepointRange::new(0x03F4, 0x03F4), Category::UppercaseLetter),
	(CodepointRange::new(0x03F5, 0x03F5), Category::LowercaseLetter),
	(CodepointRange::new(0x03F6, 0x03F6), Category::MathSymbol),
	(CodepointRange::new(0x03F7, 0x03F7), Category::UppercaseLetter),
	(CodepointRange::new(0x03F8, 0x03F8), Category::LowercaseLetter),
	(CodepointRange::new(0x03F9, 0x03FA), Category::UppercaseLetter),
	(CodepointRange::new(0x03FB, 0x03FC), Category::LowercaseLetter),
	(CodepointRange::new(0x03FD, 0x042F), Category::UppercaseLetter),
	(CodepointRange::new(0x0430, 0x045F), Category::LowercaseLetter),
	(CodepointRange::new(0x0460, 0x0460), Category::UppercaseLetter),
	(CodepointRange::new(0x0461, 0x0461), Category::LowercaseLetter),
	(CodepointRange::new(0x0462, 0x0462), Category::UppercaseLetter),
	(CodepointRange::new(0x0463, 0x0463), Category::LowercaseLetter),
	(CodepointRange::new(0x0464, 0x0464), Category::UppercaseLetter),
	(CodepointRange::new(0x0465, 0x0465), Category::LowercaseLetter),
	(CodepointRange::new(0x0466, 0x0466), Category::UppercaseLetter),
	(CodepointRange::new(0x0467, 0x0467), Category::LowercaseLetter),
	(CodepointRange::new(0x0468, 0x0468), Category::UppercaseLetter),
	(CodepointRange::new(0x0469, 0x0469), Category::LowercaseLetter),
	(CodepointRange::new(0x046A, 0x046A), Category::UppercaseLetter),
	(CodepointRange::new(0x046B, 0x046B), Category::LowercaseLetter),
	(CodepointRange::new(0x046C, 0x046C), Category::UppercaseLetter),
	(CodepointRange::new(0x046D, 0x046D), Category::LowercaseLetter),
	(CodepointRange::new(0x046E, 0x046E), Category::UppercaseLetter),
	(CodepointRange::new(0x046F, 0x046F), Category::LowercaseLetter),
	(CodepointRange::new(0x0470, 0x0470), Category::UppercaseLetter),
	(CodepointRange::new(0x0471, 0x0471), Category::LowercaseLetter),
	(CodepointRange::new(0x0472, 0x0472), Category::UppercaseLetter),
	(CodepointRange::new(0x0473, 0x0473), Category::LowercaseLetter),
	(CodepointRange::new(0x0474, 0x0474), Category::UppercaseLetter),
	(CodepointRange::new(0x0475, 0x0475), Category::LowercaseLetter),
	(CodepointRange::new(0x0476, 0x0476), Category::UppercaseLetter),
	(CodepointRange::new(0x0477, 0x0477), Category::LowercaseLetter),
	(CodepointRange::new(0x0478, 0x0478), Category::UppercaseLetter),
	(CodepointRange::new(0x0479, 0x0479), Category::LowercaseLetter),
	(CodepointRange::new(0x047A, 0x047A), Category::UppercaseLetter),
	(CodepointRange::new(0x047B, 0x047B), Category::LowercaseLetter),
	(CodepointRange::new(0x047C, 0x047C), Category::UppercaseLetter),
	(CodepointRange::new(0x047D, 0x047D), Category::LowercaseLetter),
	(CodepointRange::new(0x047E, 0x047E), Category::UppercaseLetter),
	(CodepointRange::new(0x047F, 0x047F), Category::LowercaseLetter),
	(CodepointRange::new(0x0480, 0x0480), Category::UppercaseLetter),
	(CodepointRange::new(0x0481, 0x0481), Category::LowercaseLetter),
	(CodepointRange::new(0x0482, 0x0482), Category::OtherSymbol),
	(CodepointRange::new(0x0483, 0x0487), Category::NonspacingMark),
	(CodepointRange::new(0x0488, 0x0489), Category::EnclosingMark),
	(CodepointRange::new(0x048A, 0x048A), Category::UppercaseLetter),
	(CodepointRange::new(0x048B, 0x048B), Category::LowercaseLetter),
	(CodepointRange::new(0x048C, 0x048C), Category::UppercaseLetter),
	(CodepointRange::new(0x048D, 0x048D), Category::LowercaseLetter),
	(CodepointRange::new(0x048E, 0x048E), Category::UppercaseLetter),
	(CodepointRange::new(0x048F, 0x048F), Category::LowercaseLetter),
	(CodepointRange::new(0x0490, 0x0490), Category::UppercaseLetter),
	(CodepointRange::new(0x0491, 0x0491), Category::LowercaseLetter),
	(CodepointRange::new(0x0492, 0x0492), Category::UppercaseLetter),
	(CodepointRange::new(0x0493, 0x0493), Category::LowercaseLetter),
	(CodepointRange::new(0x0494, 0x0494), Category::UppercaseLetter),
	(CodepointRange::new(0x0495, 0x0495), Category::LowercaseLetter),
	(CodepointRange::new(0x0496, 0x0496), Category::UppercaseLetter),
	(CodepointRange::new(0x0497, 0x0497), Category::LowercaseLetter),
	(CodepointRange::new(0x0498, 0x0498), Category::UppercaseLetter),
	(CodepointRange::new(0x0499, 0x0499), Category::LowercaseLetter),
	(CodepointRange::new(0x049A, 0x049A), Category::UppercaseLetter),
	(CodepointRange::new(0x049B, 0x049B), Category::LowercaseLetter),
	(CodepointRange::new(0x049C, 0x049C), Category::UppercaseLetter),
	(CodepointRange::new(0x049D, 0x049D), Category::LowercaseLetter),
	(CodepointRange::new(0x049E, 0x049E), Category::UppercaseLetter),
	(CodepointRange::new(0x049F, 0x049F), Category::LowercaseLetter),
	(CodepointRange::new(0x04A0, 0x04A0), Category::UppercaseLetter),
	(CodepointRange::new(0x04A1, 0x04A1), Category::LowercaseLetter),
	(CodepointRange::new(0x04A2, 0x04A2), Category::UppercaseLetter),
	(CodepointRange::new(0x04A3, 0x04A3), Category::LowercaseLetter),
	(CodepointRange::new(0x04A4, 0x04A4), Category::UppercaseLetter),
	(CodepointRange::new(0x04A5, 0x04A5), Category::LowercaseLetter),
	(CodepointRange::new(0x04A6, 0x04A6), Category::UppercaseLetter),
	(CodepointRange::new(0x04A7, 0x04A7), Category::LowercaseLetter),
	(CodepointRange::new(0x04A8, 0x04A8), Category::UppercaseLetter),
	(CodepointRange::new(0x04A9, 0x04A9), Category::LowercaseLetter),
	(CodepointRange::new(0x04AA, 0x04AA), Category::UppercaseLetter),
	(CodepointRange::new(0x04AB, 0x04AB), Category::LowercaseLetter),
	(CodepointRange::new(0x04AC, 0x04AC), Category::UppercaseLetter),
	(CodepointRange::new(0x04AD, 0x04AD), Category::LowercaseLetter),
	(CodepointRange::new(0x04AE, 0x04AE), Category::UppercaseLetter),
	(CodepointRange::new(0x04AF, 0x04AF), Category::LowercaseLetter),
	(CodepointRange::new(0x04B0, 0x04B0), Category::UppercaseLetter),
	(CodepointRange::new(0x04B1, 0x04B1), Category::LowercaseLetter),
	(CodepointRange::new(0x04B2, 0x04B2), Category::UppercaseLetter),
	(CodepointRange::new(0x04B3, 0x04B3), Category::LowercaseLetter),
	(CodepointRange::new(0x04B4, 0x04B4), Category::UppercaseLetter),
	(CodepointRange::new(0x04B5, 0x04B5), Category::LowercaseLetter),
	(CodepointRange::new(0x04B6, 0x04B6), Category::UppercaseLetter),
	(CodepointRange::new(0x04B7, 0x04B7), Category::LowercaseLetter),
	(CodepointRange::new(0x04B8, 0x04B8), Category::UppercaseLetter),
	(CodepointRange::new(0x04B9, 0x04B9), Category::LowercaseLetter),
	(CodepointRange::new(0x04BA, 0x04BA), Category::UppercaseLetter),
	(CodepointRange::new(0x04BB, 0x04BB), Category::LowercaseLetter),
	(CodepointRange::new(0x04BC, 0x04BC), Category::UppercaseLetter),
	(CodepointRange::new(0x04BD, 0x04BD), Category::LowercaseLetter),
	(CodepointRange::new(0x04BE, 0x04BE), Category::UppercaseLetter),
	(CodepointRange::new(0x04BF, 0x04BF), Category::LowercaseLetter),
	(CodepointRange::new(0x04C0, 0x04C1), Category::UppercaseLetter),
	(CodepointRange::new(0x04C2, 0x04C2), Category::LowercaseLetter),
	(CodepointRange::new(0x04C3, 0x04C3), Category::UppercaseLetter),
	(CodepointRange::new(0x04C4, 0x04C4), Category::LowercaseLetter),
	(CodepointRange::new(0x04C5, 0x04C5), Category::UppercaseLetter),
	(CodepointRange::new(0x04C6, 0x04C6), Category::LowercaseLetter),
	(CodepointRange::new(0x04C7, 0x04C7), Category::UppercaseLetter),
	(CodepointRange::new(0x04C8, 0x04C8), Category::LowercaseLetter),
	(CodepointRange::new(0x04C9, 0x04C9), Category::UppercaseLetter),
	(CodepointRange::new(0x04CA, 0x04CA), Category::LowercaseLetter),
	(CodepointRange::new(0x04CB, 0x04CB), Category::UppercaseLetter),
	(CodepointRange::new(0x04CC, 0x04CC), Category::LowercaseLetter),
	(CodepointRange::new(0x04CD, 0x04CD), Category::UppercaseLetter),
	(CodepointRange::new(0x04CE, 0x04CF), Category::LowercaseLetter),
	(CodepointRange::new(0x04D0, 0x04D0), Category::UppercaseLetter),
	(CodepointRange::new(0x04D1, 0x04D1), Category::LowercaseLetter),
	(CodepointRange::new(0x04D2, 0x04D2), Category::UppercaseLetter),
	(CodepointRange::new(0x04D3, 0x04D3), Category::LowercaseLetter),
	(CodepointRange::new(0x04D4, 0x04D4), Category::UppercaseLetter),
	(CodepointRange::new(0x04D5, 0x04D5), Category::LowercaseLetter),
	(CodepointRange::new(0x04D6, 0x04D6), Category::UppercaseLetter),
	(CodepointRange::new(0x04D7, 0x04D7), Category::LowercaseLetter),
	(CodepointRange::new(0x04D8, 0x04D8), Category::UppercaseLetter),
	(CodepointRange::new(0x04D9, 0x04D9), Category::LowercaseLetter),
	(CodepointRange::new(0x04DA, 0x04DA), Category::UppercaseLetter),
	(CodepointRange::new(0x04DB, 0x04DB), Category::LowercaseLetter),
	(CodepointRange::new(0x04DC, 0x04DC), Category::UppercaseLetter),
	(CodepointRange::new(0x04DD, 0x04DD), Category::LowercaseLetter),
	(CodepointRange::new(0x04DE, 0x04DE), Category::UppercaseLetter),
	(CodepointRange::new(0x04DF, 0x04DF), Category::LowercaseLetter),
	(CodepointRange::new(0x04E0, 0x04E0), Category::UppercaseLetter),
	(CodepointRange::new(0x04E1, 0x04E1), Category::LowercaseLetter),
	(CodepointRange::new(0x04E2, 0x04E2), Category::UppercaseLetter),
	(CodepointRange::new(0x04E3, 0x04E3), Category::LowercaseLetter),
	(CodepointRange::new(0x04E4, 0x04E4), Category::UppercaseLetter),
	(CodepointRange::new(0x04E5, 0x04E5), Category::LowercaseLetter),
	(CodepointRange::new(0x04E6, 0x04E6), Category::UppercaseLetter),
	(CodepointRange::new(0x04E7, 0x04E7), Category::LowercaseLetter),
	(CodepointRange::new(0x04E8, 0x04E8), Category::UppercaseLetter),
	(CodepointRange::new(0x04E9, 0x04E9), Category::LowercaseLetter),
	(CodepointRange::new(0x04EA, 0x04EA), Category::UppercaseLetter),
	(CodepointRange::new(0x04EB, 0x04EB), Category::LowercaseLetter),
	(CodepointRange::new(0x04EC, 0x04EC), Category::UppercaseLetter),
	(CodepointRange::new(0x04ED, 0x04ED), Category::LowercaseLetter),
	(CodepointRange::new(0x04EE, 0x04EE), Category::UppercaseLetter),
	(CodepointRange::new(0x04EF, 0x04EF), Category::LowercaseLetter),
	(CodepointRange::new(0x04F0, 0x04F0), Category::UppercaseLetter),
	(CodepointRange::new(0x04F1, 0x04F1), Category::LowercaseLetter),
	(CodepointRange::new(0x04F2, 0x04F2), Category::UppercaseLetter),
	(CodepointRange::new(0x04F3, 0x04F3), Category::LowercaseLetter),
	(CodepointRange::new(0x04F4, 0x04F4), Category::UppercaseLetter),
	(CodepointRange::new(0x04F5, 0x04F5), Category::LowercaseLetter),
	(CodepointRange::new(0x04F6, 0x04F6), Category::UppercaseLetter),
	(CodepointRange::new(0x04F7, 0x04F7), Category::LowercaseLetter),
	(CodepointRange::new(0x04F8, 0x04F8), Category::UppercaseLetter),
	(CodepointRange::new(0x04F9, 0x04F9), Category::LowercaseLetter),
	(CodepointRange::new(0x04FA, 0x04FA), Category::UppercaseLetter),
	(CodepointRange::new(0x04FB, 0x04FB), Category::LowercaseLetter),
	(CodepointRange::new(0x04FC, 0x04FC), Category::UppercaseLetter),
	(CodepointRange::new(0x04FD, 0x04FD), Category::LowercaseLetter),
	(CodepointRange::new(0x04FE, 0x04FE), Category::UppercaseLetter),
	(CodepointRange::new(0x04FF, 0x04FF), Category::LowercaseLetter),
	(CodepointRange::new(0x0500, 0x0500), Category::UppercaseLetter),
	(CodepointRange::new(0x0501, 0x0501), Category::LowercaseLetter),
	(CodepointRange::new(0x0502, 0x0502), Category::UppercaseLetter),
	(CodepointRange::new(0x0503, 0x0503), Category::LowercaseLetter),
	(CodepointRange::new(0x0504, 0x0504), Category::UppercaseLetter),
	(CodepointRange::new(0x0505, 0x0505), Category::LowercaseLetter),
	(CodepointRange::new(0x0506, 0x0506), Category::UppercaseLetter),
	(CodepointRange::new(0x0507, 0x0507), Category::LowercaseLetter),
	(CodepointRange::new(0x0508, 0x0508), Category::UppercaseLetter),
	(CodepointRange::new(0x0509, 0x0509), Category::LowercaseLetter),
	(CodepointRange::new(0x050A, 0x050A), Category::UppercaseLetter),
	(CodepointRange::new(0x050B, 0x050B), Category::LowercaseLetter),
	(CodepointRange::new(0x050C, 0x050C), Category::UppercaseLetter),
	(CodepointRange::new(0x050D, 0x050D), Category::LowercaseLetter),
	(CodepointRange::new(0x050E, 0x050E), Category::UppercaseLetter),
	(CodepointRange::new(0x050F, 0x050F), Category::LowercaseLetter),
	(CodepointRange::new(0x0510, 0x0510), Category::UppercaseLetter),
	(CodepointRange::new(0x0511, 0x0511), Category::LowercaseLetter),
	(CodepointRange::new(0x0512, 0x0512), Category::UppercaseLetter),
	(CodepointRange::new(0x0513, 0x0513), Category::LowercaseLetter),
	(CodepointRange::new(0x0514, 0x0514), Category::UppercaseLetter),
	(CodepointRange::new(0x0515, 0x0515), Category::LowercaseLetter),
	(CodepointRange::new(0x0516, 0x0516), Category::UppercaseLetter),
	(CodepointRange::new(0x0517, 0x0517), Category::LowercaseLetter),
	(CodepointRange::new(0x0518, 0x0518), Category::UppercaseLetter),
	(CodepointRange::new(0x0519, 0x0519), Category::LowercaseLetter),
	(CodepointRange::new(0x051A, 0x051A), Category::UppercaseLetter),
	(CodepointRange::new(0x051B, 0x051B), Category::LowercaseLetter),
	(CodepointRange::new(0x051C, 0x051C), Category::UppercaseLetter),
	(CodepointRange::new(0x051D, 0x051D), Category::LowercaseLetter),
	(CodepointRange::new(0x051E, 0x051E), Category::UppercaseLetter),
	(CodepointRange::new(0x051F, 0x051F), Category::LowercaseLetter),
	(CodepointRange::new(0x0520, 0x0520), Category::UppercaseLetter),
	(CodepointRange::new(0x0521, 0x0521), Category::LowercaseLetter),
	(CodepointRange::new(0x0522, 0x0522), Category::UppercaseLetter),
	(CodepointRange::new(0x0523, 0x0523), Category::LowercaseLetter),
	(CodepointRange::new(0x0524, 0x0524), Category::UppercaseLetter),
	(CodepointRange::new(0x0525, 0x0525), Category::LowercaseLetter),
	(CodepointRange::new(0x0526, 0x0526), Category::UppercaseLetter),
	(CodepointRange::new(0x0527, 0x0527), Category::LowercaseLetter),
	(CodepointRange::new(0x0528, 0x0528), Category::UppercaseLetter),
	(CodepointRange::new(0x0529, 0x0529), Category::LowercaseLetter),
	(CodepointRange::new(0x052A, 0x052A), Category::UppercaseLetter),
	(CodepointRange::new(0x052B, 0x052B), Category::LowercaseLetter),
	(CodepointRange::new(0x052C, 0x052C), Category::UppercaseLetter),
	(CodepointRange::new(0x052D, 0x052D), Category::LowercaseLetter),
	(CodepointRange::new(0x052E, 0x052E), Category::UppercaseLetter),
	(CodepointRange::new(0x052F, 0x052F), Category::LowercaseLetter),
	(CodepointRange::new(0x0531, 0x0556), Category::UppercaseLetter),
	(CodepointRange::new(0x0559, 0x0559), Category::ModifierLetter),
	(CodepointRange::new(0x055A, 0x055F), Category::OtherPunctuation),
	(CodepointRange::new(0x0560, 0x0588), Category::LowercaseLetter),
	(CodepointRange::new(0x0589, 0x0589), Category::OtherPunctuation),
	(CodepointRange::new(0x058A, 0x058A), Category::DashPunctuation),
	(CodepointRange::new(0x058D, 0x058E), Category::OtherSymbol),
	(CodepointRange::new(0x058F, 0x058F), Category::CurrencySymbol),
	(CodepointRange::new(0x0591, 0x05BD), Category::NonspacingMark),
	(CodepointRange::new(0x05BE, 0x05BE), Category::DashPunctuation),
	(CodepointRange::new(0x05BF, 0x05BF), Category::NonspacingMark),
	(CodepointRange::new(0x05C0, 0x05C0), Category::OtherPunctuation),
	(CodepointRange::new(0x05C1, 0x05C2), Category::NonspacingMark),
	(CodepointRange::new(0x05C3, 0x05C3), Category::OtherPunctuation),
	(CodepointRange::new(0x05C4, 0x05C5), Category::NonspacingMark),
	(CodepointRange::new(0x05C6, 0x05C6), Category::OtherPunctuation),
	(CodepointRange::new(0x05C7, 0x05C7), Category::NonspacingMark),
	(CodepointRange::new(0x05D0, 0x05EA), Category::OtherLetter),
	(CodepointRange::new(0x05EF, 0x05F2), Category::OtherLetter),
	(CodepointRange::new(0x05F3, 0x05F4), Category::OtherPunctuation),
	(CodepointRange::new(0x0600, 0x0605), Category::Format),
	(CodepointRange::new(0x0606, 0x0608), Category::MathSymbol),
	(CodepointRange::new(0x0609, 0x060A), Category::OtherPunctuation),
	(CodepointRange::new(0x060B, 0x060B), Category::CurrencySymbol),
	(CodepointRange::new(0x060C, 0x060D), Category::OtherPunctuation),
	(CodepointRange::new(0x060E, 0x060F), Category::OtherSymbol),
	(CodepointRange::new(0x0610, 0x061A), Category::NonspacingMark),
	(CodepointRange::new(0x061B, 0x061B), Category::OtherPunctuation),
	(CodepointRange::new(0x061C, 0x061C), Category::Format),
	(CodepointRange::new(0x061D, 0x061F), Category::OtherPunctuation),
	(CodepointRange::new(0x0620, 0x063F), Category::OtherLetter),
	(CodepointRange::new(0x0640, 0x0640), Category::ModifierLetter),
	(CodepointRange::new(0x0641, 0x064A), Category::OtherLetter),
	(CodepointRange::new(0x064B, 0x065F), Category::NonspacingMark),
	(CodepointRange::new(0x0660, 0x0669), Category::DecimalNumber),
	(CodepointRange::new(0x066A, 0x066D), Category::OtherPunctuation),
	(CodepointRange::new(0x066E, 0x066F), Category::OtherLetter),
	(CodepointRange::new(0x0670, 0x0670), Category::NonspacingMark),
	(CodepointRange::new(0x0671, 0x06D3), Category::OtherLetter),
	(CodepointRange::new(0x06D4, 0x06D4), Category::OtherPunctuation),
	(CodepointRange::new(0x06D5, 0x06D5), Category::OtherLetter),
	(CodepointRange::new(0x06D6, 0x06DC), Category::NonspacingMark),
	(CodepointRange::new(0x06DD, 0x06DD), Category::Format),
	(CodepointRange::new(0x06DE, 0x06DE), Category::OtherSymbol),
	(CodepointRange::new(0x06DF, 0x06E4), Category::NonspacingMark),
	(CodepointRange::new(0x06E5, 0x06E6), Category::ModifierLetter),
	(CodepointRange::new(0x06E7, 0x06E8), Category::NonspacingMark),
	(CodepointRange::new(0x06E9, 0x06E9), Category::OtherSymbol),
	(CodepointRange::new(0x06EA, 0x06ED), Category::NonspacingMark),
	(CodepointRange::new(0x06EE, 0x06EF), Category::OtherLetter),
	(CodepointRange::new(0x06F0, 0x06F9), Category::DecimalNumber),
	(CodepointRange::new(0x06FA, 0x06FC), Category::OtherLetter),
	(CodepointRange::new(0x06FD, 0x06FE), Category::OtherSymbol),
	(CodepointRange::new(0x06FF, 0x06FF), Category::OtherLetter),
	(CodepointRange::new(0x0700, 0x070D), Category::OtherPunctuation),
	(CodepointRange::new(0x070F, 0x070F), Category::Format),
	(CodepointRange::new(0x0710, 0x0710), Category::OtherLetter),
	(CodepointRange::new(0x0711, 0x0711), Category::NonspacingMark),
	(CodepointRange::new(0x0712, 0x072F), Category::OtherLetter),
	(CodepointRange::new(0x0730, 0x074A), Category::NonspacingMark),
	(CodepointRange::new(0x074D, 0x07A5), Category::OtherLetter),
	(CodepointRange::new(0x07A6, 0x07B0), Category::NonspacingMark),
	(CodepointRange::new(0x07B1, 0x07B1), Category::OtherLetter),
	(CodepointRange::new(0x07C0, 0x07C9), Category::DecimalNumber),
	(CodepointRange::new(0x07CA, 0x07EA), Category::OtherLetter),
	(CodepointRange::new(0x07EB, 0x07F3), Category::NonspacingMark),
	(CodepointRange::new(0x07F4, 0x07F5), Category::ModifierLetter),
	(CodepointRange::new(0x07F6, 0x07F6), Category::OtherSymbol),
	(CodepointRange::new(0x07F7, 0x07F9), Category::OtherPunctuation),
	(CodepointRange::new(0x07FA, 0x07FA), Category::ModifierLetter),
	(CodepointRange::new(0x07FD, 0x07FD), Category::NonspacingMark),
	(CodepointRange::new(0x07FE, 0x07FF), Category::CurrencySymbol),
	(CodepointRange::new(0x0800, 0x0815), Category::OtherLetter),
	(CodepointRange::new(0x0816, 0x0819), Category::NonspacingMark),
	(CodepointRange::new(0x081A, 0x081A), Category::ModifierLetter),
	(CodepointRange::new(0x081B, 0x0823), Category::NonspacingMark),
	(CodepointRange::new(0x0824, 0x0824), Category::ModifierLetter),
	(CodepointRange::new(0x0825, 0x0827), Category::NonspacingMark),
	(CodepointRange::new(0x0828, 0x0828), Category::ModifierLetter),
	(CodepointRange::new(0x0829, 0x082D), Category::NonspacingMark),
	(CodepointRange::new(0x0830, 0x083E), Category::OtherPunctuation),
	(CodepointRange::new(0x0840, 0x0858), Category::OtherLetter),
	(CodepointRange::new(0x0859, 0x085B), Category::NonspacingMark),
	(CodepointRange::new(0x085E, 0x085E), Category::OtherPunctuation),
	(CodepointRange::new(0x0860, 0x086A), Category::OtherLetter),
	(CodepointRange::new(0x0870, 0x0887), Category::OtherLetter),
	(CodepointRange::new(0x0888, 0x0888), Category::ModifierSymbol),
	(CodepointRange::new(0x0889, 0x088E), Category::OtherLetter),
	(CodepointRange::new(0x0890, 0x0891), Category::Format),
	(CodepointRange::new(0x0898, 0x089F), Category::NonspacingMark),
	(CodepointRange::new(0x08A0, 0x08C8), Category::OtherLetter),
	(CodepointRange::new(0x08C9, 0x08C9), Category::ModifierLetter),
	(CodepointRange::new(0x08CA, 0x08E1), Category::NonspacingMark),
	(CodepointRange::new(0x08E2, 0x08E2), Category::Format),
	(CodepointRange::new(0x08E3, 0x0902), Category::NonspacingMark),
	(CodepointRange::new(0x0903, 0x0903), Category::SpacingMark),
	(CodepointRange::new(0x0904, 0x0939), Category::OtherLetter),
	(CodepointRange::new(0x093A, 0x093A), Category::NonspacingMark),
	(CodepointRange::new(0x093B, 0x093B), Category::SpacingMark),
	(CodepointRange::new(0x093C, 0x093C), Category::NonspacingMark),
	(CodepointRange::new(0x093D, 0x093D), Category::OtherLetter),
	(CodepointRange::new(0x093E, 0x0940), Category::SpacingMark),
	(CodepointRange::new(0x0941, 0x0948), Category::NonspacingMark),
	(CodepointRange::new(0x0949, 0x094C), Category::SpacingMark),
	(CodepointRange::new(0x094D, 0x094D), Category::NonspacingMark),
	(CodepointRange::new(0x094E, 0x094F), Category::SpacingMark),
	(CodepointRange::new(0x0950, 0x0950), Category::OtherLetter),
	(CodepointRange::new(0x0951, 0x0957), Category::NonspacingMark),
	(CodepointRange::new(0x0958, 0x0961), Category::OtherLetter),
	(CodepointRange::new(0x0962, 0x0963), Category::NonspacingMark),
	(CodepointRange::new(0x0964, 0x0965), Category::OtherPunctuation),
	(CodepointRange::new(0x0966, 0x096F), Category::DecimalNumber),
	(CodepointRange::new(0x0970, 0x0970), Category::OtherPunctuation),
	(CodepointRange::new(0x0971, 0x0971), Category::ModifierLetter),
	(CodepointRange::new(0x0972, 0x0980), Category::OtherLetter),
	(CodepointRange::new(0x0981, 0x0981), Category::NonspacingMark),
	(CodepointRange::new(0x0982, 0x0983), Category::SpacingMark),
	(CodepointRange::new(0x0985, 0x098C), Category::OtherLetter),
	(CodepointRange::new(0x098F, 0x0990), Category::OtherLetter),
	(CodepointRange::new(0x0993, 0x09A8), Category::OtherLetter),
	(CodepointRange::new(0x09AA, 0x09B0), Category::OtherLetter),
	(CodepointRange::new(0x09B2, 0x09B2), Category::OtherLetter),
	(CodepointRange::new(0x09B6, 0x09B9), Category::OtherLetter),
	(CodepointRange::new(0x09BC, 0x09BC), Category::NonspacingMark),
	(CodepointRange::new(0x09BD, 0x09BD), Category::OtherLetter),
	(CodepointRange::new(0x09BE, 0x09C0), Category::SpacingMark),
	(CodepointRange::new(0x09C1, 0x09C4), Category::NonspacingMark),
	(CodepointRange::new(0x09C7, 0x09C8), Category::SpacingMark),
	(CodepointRange::new(0x09CB, 0x09CC), Category::SpacingMark),
	(CodepointRange::new(0x09CD, 0x09CD), Category::NonspacingMark),
	(CodepointRange::new(0x09CE, 0x09CE), Category::OtherLetter),
	(CodepointRange::new(0x09D7, 0x09D7), Category::SpacingMark),
	(CodepointRange::new(0x09DC, 0x09DD), Category::OtherLetter),
	(CodepointRange::new(0x09DF, 0x09E1), Category::OtherLetter),
	(CodepointRange::new(0x09E2, 0x09E3), Category::NonspacingMark),
	(CodepointRange::new(0x09E6, 0x09EF), Category::DecimalNumber),
	(CodepointRange::new(0x09F0, 0x09F1), Category::OtherLetter),
	(CodepointRange::new(0x09F2, 0x09F3), Category::CurrencySymbol),
	(CodepointRange::new(0x09F4, 0x09F9), Category::OtherNumber),
	(CodepointRange::new(0x09FA, 0x09FA), Category::OtherSymbol),
	(CodepointRange::new(0x09FB, 0x09FB), Category::CurrencySymbol),
	(CodepointRange::new(0x09FC, 0x09FC), Category::OtherLetter),
	(CodepointRange::new(0x09FD, 0x09FD), Category::OtherPunctuation),
	(CodepointRange::new(0x09FE, 0x09FE), Category::NonspacingMark),
	(CodepointRange::new(0x0A01, 0x0A02), Category::NonspacingMark),
	(CodepointRange::new(0x0A03, 0x0A03), Category::SpacingMark),
	(CodepointRange::new(0x0A05, 0x0A0A), Category::OtherLetter),
	(CodepointRange::new(0x0A0F, 0x0A10), Category::OtherLetter),
	(CodepointRange::new(0x0A13, 0x0A28), Category::OtherLetter),
	(CodepointRange::new(0x0A2A, 0x0A30), Category::OtherLetter),
	(CodepointRange::new(0x0A32, 0x0A33), Category::OtherLetter),
	(CodepointRange::new(0x0A35, 0x0A36), Category::OtherLetter),
	(CodepointRange::new(0x0A38, 0x0A39), Category::OtherLetter),
	(CodepointRange::new(0x0A3C, 0x0A3C), Category::NonspacingMark),
	(CodepointRange::new(0x0A3E, 0x0A40), Category::SpacingMark),
	(CodepointRange::new(0x0A41, 0x0A42), Category::NonspacingMark),
	(CodepointRange::new(0x0A47, 0x0A48), Category::NonspacingMark),
	(CodepointRange::new(0x0A4B, 0x0A4D), Category::NonspacingMark),
	(CodepointRange::new(0x0A51, 0x0A51), Category::NonspacingMark),
	(CodepointRange::new(0x0A59, 0x0A5C), Category::OtherLetter),
	(CodepointRange::new(0x0A5E, 0x0A5E), Category::OtherLetter),
	(CodepointRange::new(0x0A66, 0x0A6F), Category::DecimalNumber),
	(CodepointRange::new(0x0A70, 0x0A71), Category::NonspacingMark),
	(CodepointRange::new(0x0A72, 0x0A74), Category::OtherLetter),
	(CodepointRange::new(0x0A75, 0x0A75), Category::NonspacingMark),
	(CodepointRange::new(0x0A76, 0x0A76), Category::OtherPunctuation),
	(CodepointRange::new(0x0A81, 0x0A82), Category::NonspacingMark),
	(CodepointRange::new(0x0A83, 0x0A83), Category::SpacingMark),
	(CodepointRange::new(0x0A85, 0x0A8D), Category::OtherLetter),
	(CodepointRange::new(0x0A8F, 0x0A91), Category::OtherLetter),
	(CodepointRange::new(0x0A93, 0x0AA8), Category::OtherLetter),
	(CodepointRange::new(0x0AAA, 0x0AB0), Category::OtherLetter),
	(CodepointRange::new(0x0AB2, 0x0AB3), Category::OtherLetter),
	(CodepointRange::new(0x0AB5, 0x0AB9), Category::OtherLetter),
	(CodepointRange::new(0x0ABC, 0x0ABC), Category::NonspacingMark),
	(CodepointRange::new(0x0ABD, 0x0ABD), Category::OtherLetter),
	(CodepointRange::new(0x0ABE, 0x0AC0), Category::SpacingMark),
	(CodepointRange::new(0x0AC1, 0x0AC5), Category::NonspacingMark),
	(CodepointRange::new(0x0AC7, 0x0AC8), Category::NonspacingMark),
	(CodepointRange::new(0x0AC9, 0x0AC9), Category::SpacingMark),
	(CodepointRange::new(0x0ACB, 0x0ACC), Category::SpacingMark),
	(CodepointRange::new(0x0ACD, 0x0ACD), Category::NonspacingMark),
	(CodepointRange::new(0x0AD0, 0x0AD0), Category::OtherLetter),
	(CodepointRange::new(0x0AE0, 0x0AE1), Category::OtherLetter),
	(CodepointRange::new(0x0AE2, 0x0AE3), Category::NonspacingMark),
	(CodepointRange::new(0x0AE6, 0x0AEF), Category::DecimalNumber),
	(CodepointRange::new(0x0AF0, 0x0AF0), Category::OtherPunctuation),
	(CodepointRange::new(0x0AF1, 0x0AF1), Category::CurrencySymbol),
	(CodepointRange::new(0x0AF9, 0x0AF9), Category::OtherLetter),
	(CodepointRange::new(0x0AFA, 0x0AFF), Category::NonspacingMark),
	(CodepointRange::new(0x0B01, 0x0B01), Category::NonspacingMark),
	(CodepointRange::new(0x0B02, 0x0B03), Category::SpacingMark),
	(CodepointRange::new(0x0B05, 0x0B0C), Category::OtherLetter),
	(CodepointRange::new(0x0B0F, 0x0B10), Category::OtherLetter),
	(CodepointRange::new(0x0B13, 0x0B28), Category::OtherLetter),
	(CodepointRange::new(0x0B2A, 0x0B30), Category::OtherLetter),
	(CodepointRange::new(0x0B32, 0x0B33), Category::OtherLetter),
	(CodepointRange::new(0x0B35, 0x0B39), Category::OtherLetter),
	(CodepointRange::new(0x0B3C, 0x0B3C), Category::NonspacingMark),
	(CodepointRange::new(0x0B3D, 0x0B3D), Category::OtherLetter),
	(CodepointRange::new(0x0B3E, 0x0B3E), Category::SpacingMark),
	(CodepointRange::new(0x0B3F, 0x0B3F), Category::NonspacingMark),
	(CodepointRange::new(0x0B40, 0x0B40), Category::SpacingMark),
	(CodepointRange::new(0x0B41, 0x0B44), Category::NonspacingMark),
	(CodepointRange::new(0x0B47, 0x0B48), Category::SpacingMark),
	(CodepointRange::new(0x0B4B, 0x0B4C), Category::SpacingMark),
	(CodepointRange::new(0x0B4D, 0x0B4D), Category::NonspacingMark),
	(CodepointRange::new(0x0B55, 0x0B56), Category::NonspacingMark),
	(CodepointRange::new(0x0B57, 0x0B57), Category::SpacingMark),
	(CodepointRange::new(0x0B5C, 0x0B5D), Category::OtherLetter),
	(CodepointRange::new(0x0B5F, 0x0B61), Category::OtherLetter),
	(CodepointRange::new(0x0B62, 0x0B63), Category::NonspacingMark),
	(CodepointRange::new(0x0B66, 0x0B6F), Category::DecimalNumber),
	(CodepointRange::new(0x0B70, 0x0B70), Category::OtherSymbol),
	(CodepointRange::new(0x0B71, 0x0B71), Category::OtherLetter),
	(CodepointRange::new(0x0B72, 0x0B77), Category::OtherNumber),
	(CodepointRange::new(0x0B82, 0x0B82), Category::NonspacingMark),
	(CodepointRange::new(0x0B83, 0x0B83), Category::OtherLetter),
	(CodepointRange::new(0x0B85, 0x0B8A), Category::OtherLetter),
	(CodepointRange::new(0x0B8E, 0x0B90), Category::OtherLetter),
	(CodepointRange::new(0x0B92, 0x0B95), Category::OtherLetter),
	(CodepointRange::new(0x0B99, 0x0B9A), Category::OtherLetter),
	(CodepointRange::new(0x0B9C, 0x0B9C), Category::OtherLetter),
	(CodepointRange::new(0x0B9E, 0x0B9F), Category::OtherLetter),
	(CodepointRange::new(0x0BA3, 0x0BA4), Category::OtherLetter),
	(CodepointRange::new(0x0BA8, 0x0BAA), Category::OtherLetter),
	(CodepointRange::new(0x0BAE, 0x0BB9), Category::OtherLetter),
	(CodepointRange::new(0x0BBE, 0x0BBF), Category::SpacingMark),
	(CodepointRange::new(0x0BC0, 0x0BC0), Category::NonspacingMark),
	(CodepointRange::new(0x0BC1, 0x0BC2), Category::SpacingMark),
	(CodepointRange::new(0x0BC6, 0x0BC8), Category::SpacingMark),
	(CodepointRange::new(0x0BCA, 0x0BCC), Category::SpacingMark),
	(CodepointRange::new(0x0BCD, 0x0BCD), Category::NonspacingMark),
	(CodepointRange::new(0x0BD0, 0x0BD0), Category::OtherLetter),
	(CodepointRange::new(0x0BD7, 0x0BD7), Category::SpacingMark),
	(CodepointRange::new(0x0BE6, 0x0BEF), Category::DecimalNumber),
	(CodepointRange::new(0x0BF0, 0x0BF2), Category::OtherNumber),
	(CodepointRange::new(0x0BF3, 0x0BF8), Category::OtherSymbol),
	(CodepointRange::new(0x0BF9, 0x0BF9), Category::CurrencySymbol),
	(CodepointRange::new(0x0BFA, 0x0BFA), Category::OtherSymbol),
	(CodepointRange::new(0x0C00, 0x0C00), Category::NonspacingMark),
	(CodepointRange::new(0x0C01, 0x0C03), Category::SpacingMark),
	(CodepointRange::new(0x0C04, 0x0C04), Category::NonspacingMark),
	(CodepointRange::new(0x0C05, 0x0C0C), Category::OtherLetter),
	(CodepointRange::new(0x0C0E, 0x0C10), Category::OtherLetter),
	(CodepointRange::new(0x0C12, 0x0C28), Category::OtherLetter),
	(CodepointRange::new(0x0C2A, 0x0C39), Category::OtherLetter),
	(CodepointRange::new(0x0C3C, 0x0C3C), Category::NonspacingMark),
	(CodepointRange::new(0x0C3D, 0x0C3D), Category::OtherLetter),
	(CodepointRange::new(0x0C3E, 0x0C40), Category::NonspacingMark),
	(CodepointRange::new(0x0C41, 0x0C44), Category::SpacingMark),
	(CodepointRange::new(0x0C46, 0x0C48), Category::NonspacingMark),
	(CodepointRange::new(0x0C4A, 0x0C4D), Category::NonspacingMark),
	(CodepointRange::new(0x0C55, 0x0C56), Category::NonspacingMark),
	(CodepointRange::new(0x0C58, 0x0C5A), Category::OtherLetter),
	(CodepointRange::new(0x0C5D, 0x0C5D), Category::OtherLetter),
	(CodepointRange::new(0x0C60, 0x0C61), Category::OtherLetter),
	(CodepointRange::new(0x0C62, 0x0C63), Category::NonspacingMark),
	(CodepointRange::new(0x0C66, 0x0C6F), Category::DecimalNumber),
	(CodepointRange::new(0x0C77, 0x0C77), Category::OtherPunctuation),
	(CodepointRange::new(0x0C78, 0x0C7E), Category::OtherNumber),
	(CodepointRange::new(0x0C7F, 0x0C7F), Category::OtherSymbol),
	(CodepointRange::new(0x0C80, 0x0C80), Category::OtherLetter),
	(CodepointRange::new(0x0C81, 0x0C81), Category::NonspacingMark),
	(CodepointRange::new(0x0C82, 0x0C83), Category::SpacingMark),
	(CodepointRange::new(0x0C84, 0x0C84), Category::OtherPunctuation),
	(CodepointRange::new(0x0C85, 0x0C8C), Category::OtherLetter),
	(CodepointRange::new(0x0C8E, 0x0C90), Category::OtherLetter),
	(CodepointRange::new(0x0C92, 0x0CA8), Category::OtherLetter),
	(CodepointRange::new(0x0CAA, 0x0CB3), Category::OtherLetter),
	(CodepointRange::new(0x0CB5, 0x0CB9), Category::OtherLetter),
	(CodepointRange::new(0x0CBC, 0x0CBC), Category::NonspacingMark),
	(CodepointRange::new(0x0CBD, 0x0CBD), Category::OtherLetter),
	(CodepointRange::new(0x0CBE, 0x0CBE), Category::SpacingMark),
	(CodepointRange::new(0x0CBF, 0x0CBF), Category::NonspacingMark),
	(CodepointRange::new(0x0CC0, 0x0CC4), Category::SpacingMark),
	(CodepointRange::new(0x0CC6, 0x0CC6), Category::NonspacingMark),
	(CodepointRange::new(0x0CC7, 0x0CC8), Category::SpacingMark),
	(CodepointRange::new(0x0CCA, 0x0CCB), Category::SpacingMark),
	(CodepointRange::new(0x0CCC, 0x0CCD), Category::NonspacingMark),
	(CodepointRange::new(0x0CD5, 0x0CD6), Category::SpacingMark),
	(CodepointRange::new(0x0CDD, 0x0CDE), Category::OtherLetter),
	(CodepointRange::new(0x0CE0, 0x0CE1), Category::OtherLetter),
	(CodepointRange::new(0x0CE2, 0x0CE3), Category::NonspacingMark),
	(CodepointRange::new(0x0CE6, 0x0CEF), Category::DecimalNumber),
	(CodepointRange::new(0x0CF1, 0x0CF2), Category::OtherLetter),
	(CodepointRange::new(0x0D00, 0x0D01), Category::NonspacingMark),
	(CodepointRange::new(0x0D02, 0x0D03), Category::SpacingMark),
	(CodepointRange::new(0x0D04, 0x0D0C), Category::OtherLetter),
	(CodepointRange::new(0x0D0E, 0x0D10), Category::OtherLetter),
	(CodepointRange::new(0x0D12, 0x0D3A), Category::OtherLetter),
	(CodepointRange::new(0x0D3B, 0x0D3C), Category::NonspacingMark),
	(CodepointRange::new(0x0D3D, 0x0D3D), Category::OtherLetter),
	(CodepointRange::new(0x0D3E, 0x0D40), Category::SpacingMark),
	(CodepointRange::new(0x0D41, 0x0D44), Category::NonspacingMark),
	(CodepointRange::new(0x0D46, 0x0D48), Category::SpacingMark),
	(CodepointRange::new(0x0D4A, 0x0D4C), Category::SpacingMark),
	(CodepointRange::new(0x0D4D, 0x0D4D), Category::NonspacingMark),
	(CodepointRange::new(0x0D4E, 0x0D4E), Category::OtherLetter),
	(CodepointRange::new(0x0D4F, 0x0D4F), Category::OtherSymbol),
	(CodepointRange::new(0x0D54, 0x0D56), Category::OtherLetter),
	(CodepointRange::new(0x0D57, 0x0D57), Category::SpacingMark),
	(CodepointRange::new(0x0D58, 0x0D5E), Category::OtherNumber),
	(CodepointRange::new(0x0D5F, 0x0D61), Category::OtherLetter),
	(CodepointRange::new(0x0D62, 0x0D63), Category::NonspacingMark),
	(CodepointRange::new(0x0D66, 0x0D6F), Category::DecimalNumber),
	(CodepointRange::new(0x0D70, 0x0D78), Category::OtherNumber),
	(CodepointRange::new(0x0D79, 0x0D79), Category::OtherSymbol),
	(CodepointRange::new(0x0D7A, 0x0D7F), Category::OtherLetter),
	(CodepointRange::new(0x0D81, 0x0D81), Category::NonspacingMark),
	(CodepointRange::new(0x0D82, 0x0D83), Category::SpacingMark),
	(CodepointRange::new(0x0D85, 0x0D96), Category::OtherLetter),
	(CodepointRange::new(0x0D9A, 0x0DB1), Category::OtherLetter),
	(CodepointRange::new(0x0DB3, 0x0DBB), Category::OtherLetter),
	(CodepointRange::new(0x0DBD, 0x0DBD), Category::OtherLetter),
	(CodepointRange::new(0x0DC0, 0x0DC6), Category::OtherLetter),
	(CodepointRange::new(0x0DCA, 0x0DCA), Category::NonspacingMark),
	(CodepointRange::new(0x0DCF, 0x0DD1), Category::SpacingMark),
	(CodepointRange::new(0x0DD2, 0x0DD4), Category::NonspacingMark),
	(CodepointRange::new(0x0DD6, 0x0DD6), Category::NonspacingMark),
	(CodepointRange::new(0x0DD8, 0x0DDF), Category::SpacingMark),
	(CodepointRange::new(0x0DE6, 0x0DEF), Category::DecimalNumber),
	(CodepointRange::new(0x0DF2, 0x0DF3), Category::SpacingMark),
	(CodepointRange::new(0x0DF4, 0x0DF4), Category::OtherPunctuation),
	(CodepointRange::new(0x0E01, 0x0E30), Category::OtherLetter),
	(CodepointRange::new(0x0E31, 0x0E31), Category::NonspacingMark),
	(CodepointRange::new(0x0E32, 0x0E33), Category::OtherLetter),
	(CodepointRange::new(0x0E34, 0x0E3A), Category::NonspacingMark),
	(CodepointRange::new(0x0E3F, 0x0E3F), Category::CurrencySymbol),
	(CodepointRange::new(0x0E40, 0x0E45), Category::OtherLetter),
	(CodepointRange::new(0x0E46, 0x0E46), Category::ModifierLetter),
	(CodepointRange::new(0x0E47, 0x0E4E), Category::NonspacingMark),
	(CodepointRange::new(0x0E4F, 0x0E4F), Category::OtherPunctuation),
	(CodepointRange::new(0x0E50, 0x0E59), Category::DecimalNumber),
	(CodepointRange::new(0x0E5A, 0x0E5B), Category::OtherPunctuation),
	(CodepointRange::new(0x0E81, 0x0E82), Category::OtherLetter),
	(CodepointRange::new(0x0E84, 0x0E84), Category::OtherLetter),
	(CodepointRange::new(0x0E86, 0x0E8A), Category::OtherLetter),
	(CodepointRange::new(0x0E8C, 0x0EA3), Category::OtherLetter),
	(CodepointRange::new(0x0EA5, 0x0EA5), Category::OtherLetter),
	(CodepointRange::new(0x0EA7, 0x0EB0), Category::OtherLetter),
	(CodepointRange::new(0x0EB1, 0x0EB1), Category::NonspacingMark),
	(CodepointRange::new(0x0EB2, 0x0EB3), Category::OtherLetter),
	(CodepointRange::new(0x0EB4, 0x0EBC), Category::NonspacingMark),
	(CodepointRange::new(0x0EBD, 0x0EBD), Category::OtherLetter),
	(CodepointRange::new(0x0EC0, 0x0EC4), Category::OtherLetter),
	(CodepointRange::new(0x0EC6, 0x0EC6), Category::ModifierLetter),
	(CodepointRange::new(0x0EC8, 0x0ECD), Category::NonspacingMark),
	(CodepointRange::new(0x0ED0, 0x0ED9), Category::DecimalNumber),
	(CodepointRange::new(0x0EDC, 0x0EDF), Category::OtherLetter),
	(CodepointRange::new(0x0F00, 0x0F00), Category::OtherLetter),
	(CodepointRange::new(0x0F01, 0x0F03), Category::OtherSymbol),
	(CodepointRange::new(0x0F04, 0x0F12), Category::OtherPunctuation),
	(CodepointRange::new(0x0F13, 0x0F13), Category::OtherSymbol),
	(CodepointRange::new(0x0F14, 0x0F14), Category::OtherPunctuation),
	(CodepointRange::new(0x0F15, 0x0F17), Category::OtherSymbol),
	(CodepointRange::new(0x0F18, 0x0F19), Category::NonspacingMark),
	(CodepointRange::new(0x0F1A, 0x0F1F), Category::OtherSymbol),
	(CodepointRange::new(0x0F20, 0x0F29), Category::DecimalNumber),
	(CodepointRange::new(0x0F2A, 0x0F33), Category::OtherNumber),
	(CodepointRange::new(0x0F34, 0x0F34), Category::OtherSymbol),
	(CodepointRange::new(0x0F35, 0x0F35), Category::NonspacingMark),
	(CodepointRange::new(0x0F36, 0x0F36), Category::OtherSymbol),
	(CodepointRange::new(0x0F37, 0x0F37), Category::NonspacingMark),
	(CodepointRange::new(0x0F38, 0x0F38), Category::OtherSymbol),
	(CodepointRange::new(0x0F39, 0x0F39), Category::NonspacingMark),
	(CodepointRange::new(0x0F3A, 0x0F3A), Category::OpenPunctuation),
	(CodepointRange::new(0x0F3B, 0x0F3B), Category::ClosePunctuation),
	(CodepointRange::new(0x0F3C, 0x0F3C), Category::OpenPunctuation),
	(CodepointRange::new(0x0F3D, 0x0F3D), Category::ClosePunctuation),
	(CodepointRange::new(0x0F3E, 0x0F3F), Category::SpacingMark),
	(CodepointRange::new(0x0F40, 0x0F47), Category::OtherLetter),
	(CodepointRange::new(0x0F49, 0x0F6C), Category::OtherLetter),
	(CodepointRange::new(0x0F71, 0x0F7E), Category::NonspacingMark),
	(CodepointRange::new(0x0F7F, 0x0F7F), Category::SpacingMark),
	(CodepointRange::new(0x0F80, 0x0F84), Category::NonspacingMark),
	(CodepointRange::new(0x0F85, 0x0F85), Category::OtherPunctuation),
	(CodepointRange::new(0x0F86, 0x0F87), Category::NonspacingMark),
	(CodepointRange::new(0x0F88, 0x0F8C), Category::OtherLetter),
	(CodepointRange::new(0x0F8D, 0x0F97), Category::NonspacingMark),
	(CodepointRange::new(0x0F99, 0x0FBC), Category::NonspacingMark),
	(CodepointRange::new(0x0FBE, 0x0FC5), Category::OtherSymbol),
	(CodepointRange::new(0x0FC6, 0x0FC6), Category::NonspacingMark),
	(CodepointRange::new(0x0FC7, 0x0FCC), Category::OtherSymbol),
	(CodepointRange::new(0x0FCE, 0x0FCF), Category::OtherSymbol),
	(CodepointRange::new(0x0FD0, 0x0FD4), Category::OtherPunctuation),
	(CodepointRange::new(0x0FD5, 0x0FD8), Category::OtherSymbol),
	(CodepointRange::new(0x0FD9, 0x0FDA), Category::OtherPunctuation),
	(CodepointRange::new(0x1000, 0x102A), Category::OtherLetter),
	(CodepointRange::new(0x102B, 0x102C), Category::SpacingMark),
	(CodepointRange::new(0x102D, 0x1030), Category::NonspacingMark),
	(CodepointRange::new(0x1031, 0x1031), Category::SpacingMark),
	(CodepointRange::new(0x1032, 0x1037), Category::NonspacingMark),
	(CodepointRange::new(0x1038, 0x1038), Category::SpacingMark),
	(CodepointRange::new(0x1039, 0x103A), Category::NonspacingMark),
	(CodepointRange::new(0x103B, 0x103C), Category::SpacingMark),
	(CodepointRange::new(0x103D, 0x103E), Category::NonspacingMark),
	(CodepointRange::new(0x103F, 0x103F), Category::OtherLetter),
	(CodepointRange::new(0x1040, 0x1049), Category::DecimalNumber),
	(CodepointRange::new(0x104A, 0x104F), Category::OtherPunctuation),
	(CodepointRange::new(0x1050, 0x1055), Category::OtherLetter),
	(CodepointRange::new(0x1056, 0x1057), Category::SpacingMark),
	(CodepointRange::new(0x1058, 0x1059), Category::NonspacingMark),
	(CodepointRange::new(0x105A, 0x105D), Category::OtherLetter),
	(CodepointRange::new(0x105E, 0x1060), Category::NonspacingMark),
	(CodepointRange::new(0x1061, 0x1061), Category::OtherLetter),
	(CodepointRange::new(0x1062, 0x1064), Category::SpacingMark),
	(CodepointRange::new(0x1065, 0x1066), Category::OtherLetter),
	(CodepointRange::new(0x1067, 0x106D), Category::SpacingMark),
	(CodepointRange::new(0x106E, 0x1070), Category::OtherLetter),
	(CodepointRange::new(0x1071, 0x1074), Category::NonspacingMark),
	(CodepointRange::new(0x1075, 0x1081), Category::OtherLetter),
	(CodepointRange::new(0x1082, 0x1082), Category::NonspacingMark),
	(CodepointRange::new(0x1083, 0x1084), Category::SpacingMark),
	(CodepointRange::new(0x1085, 0x1086), Category::NonspacingMark),
	(CodepointRange::new(0x1087, 0x108C), Category::SpacingMark),
	(CodepointRange::new(0x108D, 0x108D), Category::NonspacingMark),
	(CodepointRange::new(0x108E, 0x108E), Category::OtherLetter),
	(CodepointRange::new(0x108F, 0x108F), Category::SpacingMark),
	(CodepointRange::new(0x1090, 0x1099), Category::DecimalNumber),
	(CodepointRange::new(0x109A, 0x109C), Category::SpacingMark),
	(CodepointRange::new(0x109D, 0x109D), Category::NonspacingMark),
	(CodepointRange::new(0x109E, 0x109F), Category::OtherSymbol),
	(CodepointRange::new(0x10A0, 0x10C5), Category::UppercaseLetter),
	(CodepointRange::new(0x10C7, 0x10C7), Category::UppercaseLetter),
	(CodepointRange::new(0x10CD, 0x10CD), Category::UppercaseLetter),
	(CodepointRange::new(0x10D0, 0x10FA), Category::LowercaseLetter),
	(CodepointRange::new(0x10FB, 0x10FB), Category::OtherPunctuation),
	(CodepointRange::new(0x10FC, 0x10FC), Category::ModifierLetter),
	(CodepointRange::new(0x10FD, 0x10FF), Category::LowercaseLetter),
	(CodepointRange::new(0x1100, 0x1248), Category::OtherLetter),
	(CodepointRange::new(0x124A, 0x124D), Category::OtherLetter),
	(CodepointRange::new(0x1250, 0x1256), Category::OtherLetter),
	(CodepointRange::new(0x1258, 0x1258), Category::OtherLetter),
	(CodepointRange::new(0x125A, 0x125D), Category::OtherLetter),
	(CodepointRange::new(0x1260, 0x1288), Category::OtherLetter),
	(CodepointRange::new(0x128A, 0x128D), Category::OtherLetter),
	(CodepointRange::new(0x1290, 0x12B0), Category::OtherLetter),
	(CodepointRange::new(0x12B2, 0x12B5), Category::OtherLetter),
	(CodepointRange::new(0x12B8, 0x12BE), Category::OtherLetter),
	(CodepointRange::new(0x12C0, 0x12C0), Category::OtherLetter),
	(CodepointRange::new(0x12C2, 0x12C5), Category::OtherLetter),
	(CodepointRange::new(0x12C8, 0x12D6), Category::OtherLetter),
	(CodepointRange::new(0x12D8, 0x1310), Category::OtherLetter),
	(CodepointRange::new(0x1312, 0x1315), Category::OtherLetter),
	(CodepointRange::new(0x1318, 0x135A), Category::OtherLetter),
	(CodepointRange::new(0x135D, 0x135F), Category::NonspacingMark),
	(CodepointRange::new(0x1360, 0x1368), Category::OtherPunctuation),
	(CodepointRange::new(0x1369, 0x137C), Category::OtherNumber),
	(CodepointRange::new(0x1380, 0x138F), Category::OtherLetter),
	(CodepointRange::new(0x1390, 0x1399), Category::OtherSymbol),
	(CodepointRange::new(0x13A0, 0x13F5), Category::UppercaseLetter),
	(CodepointRange::new(0x13F8, 0x13FD), Category::LowercaseLetter),
	(CodepointRange::new(0x1400, 0x1400), Category::DashPunctuation),
	(CodepointRange::new(0x1401, 0x166C), Category::OtherLetter),
	(CodepointRange::new(0x166D, 0x166D), Category::OtherSymbol),
	(CodepointRange::new(0x166E, 0x166E), Category::OtherPunctuation),
	(CodepointRange::new(0x166F, 0x167F), Category::OtherLetter),
	(CodepointRange::new(0x1680, 0x1680), Category::SpaceSeparator),
	(CodepointRange::new(0x1681, 0x169A), Category::OtherLetter),
	(CodepointRange::new(0x169B, 0x169B), Category::OpenPunctuation),
	(CodepointRange::new(0x169C, 0x169C), Category::ClosePunctuation),
	(CodepointRange::new(0x16A0, 0x16EA), Category::OtherLetter),
	(CodepointRange::new(0x16EB, 0x16ED), Category::OtherPunctuation),
	(CodepointRange::new(0x16EE, 0x16F0), Category::LetterNumber),
	(CodepointRange::new(0x16F1, 0x16F8), Category::OtherLetter),
	(CodepointRange::new(0x1700, 0x1711), Category::OtherLetter),
	(CodepointRange::new(0x1712, 0x1714), Category::NonspacingMark),
	(CodepointRange::new(0x1715, 0x1715), Category::SpacingMark),
	(CodepointRange::new(0x171F, 0x1731), Category::OtherLetter),
	(CodepointRange::new(0x1732, 0x1733), Category::NonspacingMark),
	(CodepointRange::new(0x1734, 0x1734), Category::SpacingMark),
	(CodepointRange::new(0x1735, 0x1736), Category::OtherPunctuation),
	(CodepointRange::new(0x1740, 0x1751), Category::OtherLetter),
	(CodepointRange::new(0x1752, 0x1753), Category::NonspacingMark),
	(CodepointRange::new(0x1760, 0x176C), Category::OtherLetter),
	(CodepointRange::new(0x176E, 0x1770), Category::OtherLetter),
	(CodepointRange::new(0x1772, 0x1773), Category::NonspacingMark),
	(CodepointRange::new(0x1780, 0x17B3), Category::OtherLetter),
	(CodepointRange::new(0x17B4, 0x17B5), Category::NonspacingMark),
	(CodepointRange::new(0x17B6, 0x17B6), Category::SpacingMark),
	(CodepointRange::new(0x17B7, 0x17BD), Category::NonspacingMark),
	(CodepointRange::new(0x17BE, 0x17C5), Category::SpacingMark),
	(CodepointRange::new(0x17C6, 0x17C6), Category::NonspacingMark),
	(CodepointRange::new(0x17C7, 0x17C8), Category::SpacingMark),
	(CodepointRange::new(0x17C9, 0x17D3), Category::NonspacingMark),
	(CodepointRange::new(0x17D4, 0x17D6), Category::OtherPunctuation),
	(CodepointRange::new(0x17D7, 0x17D7), Category::ModifierLetter),
	(CodepointRange::new(0x17D8, 0x17DA), Category::OtherPunctuation),
	(CodepointRange::new(0x17DB, 0x17DB), Category::CurrencySymbol),
	(CodepointRange::new(0x17DC, 0x17DC), Category::OtherLetter),
	(CodepointRange::new(0x17DD, 0x17DD), Category::NonspacingMark),
	(CodepointRange::new(0x17E0, 0x17E9), Category::DecimalNumber),
	(CodepointRange::new(0x17F0, 0x17F9), Category::OtherNumber),
	(CodepointRange::new(0x1800, 0x1805), Category::OtherPunctuation),
	(CodepointRange::new(0x1806, 0x1806), Category::DashPunctuation),
	(CodepointRange::new(0x1807, 0x180A), Category::OtherPunctuation),
	(CodepointRange::new(0x180B, 0x180D), Category::NonspacingMark),
	(CodepointRange::new(0x180E, 0x180E), Category::Format),
	(CodepointRange::new(0x180F, 0x180F), Category::NonspacingMark),
	(CodepointRange::new(0x1810, 0x1819), Category::DecimalNumber),
	(CodepointRange::new(0x1820, 0x1842), Category::OtherLetter),
	(CodepointRange::new(0x1843, 0x1843), Category::ModifierLetter),
	(CodepointRange::new(0x1844, 0x1878), Category::OtherLetter),
	(CodepointRange::new(0x1880, 0x1884), Category::OtherLetter),
	(CodepointRange::new(0x1885, 0x1886), Category::NonspacingMark),
	(CodepointRange::new(0x1887, 0x18A8), Category::OtherLetter),
	(CodepointRange::new(0x18A9, 0x18A9), Category::NonspacingMark),
	(CodepointRange::new(0x18AA, 0x18AA), Category::OtherLetter),
	(CodepointRange::new(0x18B0, 0x18F5), Category::OtherLetter),
	(CodepointRange::new(0x1900, 0x191E), Category::OtherLetter),
	(CodepointRange::new(0x1920, 0x1922), Category::NonspacingMark),
	(CodepointRange::new(0x1923, 0x1926), Category::SpacingMark),
	(CodepointRange::new(0x1927, 0x1928), Category::NonspacingMark),
	(CodepointRange::new(0x1929, 0x192B), Category::SpacingMark),
	(CodepointRange::new(0x1930, 0x1931), Category::SpacingMark),
	(CodepointRange::new(0x1932, 0x1932), Category::NonspacingMark),
	(CodepointRange::new(0x1933, 0x1938), Category::SpacingMark),
	(CodepointRange::new(0x1939, 0x193B), Category::NonspacingMark),
	(CodepointRange::new(0x1940, 0x1940), Category::OtherSymbol),
	(CodepointRange::new(0x1944, 0x1945), Category::OtherPunctuation),
	(CodepointRange::new(0x1946, 0x194F), Category::DecimalNumber),
	(CodepointRange::new(0x1950, 0x196D), Category::OtherLetter),
	(CodepointRange::new(0x1970, 0x1974), Category::OtherLetter),
	(CodepointRange::new(0x1980, 0x19AB), Category::OtherLetter),
	(CodepointRange::new(0x19B0, 0x19C9), Category::OtherLetter),
	(CodepointRange::new(0x19D0, 0x19D9), Category::DecimalNumber),
	(CodepointRange::new(0x19DA, 0x19DA), Category::OtherNumber),
	(CodepointRange::new(0x19DE, 0x19FF), Category::OtherSymbol),
	(CodepointRange::new(0x1A00, 0x1A16), Category::OtherLetter),
	(CodepointRange::new(0x1A17, 0x1A18), Category::NonspacingMark),
	(CodepointRange::new(0x1A19, 0x1A1A), Category::SpacingMark),
	(CodepointRange::new(0x1A1B, 0x1A1B), Category::NonspacingMark),
	(CodepointRange::new(0x1A1E, 0x1A1F), Category::OtherPunctuation),
	(CodepointRange::new(0x1A20, 0x1A54), Category::OtherLetter),
	(CodepointRange::new(0x1A55, 0x1A55), Category::SpacingMark),
	(CodepointRange::new(0x1A56, 0x1A56), Category::NonspacingMark),
	(CodepointRange::new(0x1A57, 0x1A57), Category::SpacingMark),
	(CodepointRange::new(0x1A58, 0x1A5E), Category::NonspacingMark),
	(CodepointRange::new(0x1A60, 0x1A60), Category::NonspacingMark),
	(CodepointRange::new(0x1A61, 0x1A61), Category::SpacingMark),
	(CodepointRange::new(0x1A62, 0x1A62), Category::NonspacingMark),
	(CodepointRange::new(0x1A63, 0x1A64), Category::SpacingMark),
	(CodepointRange::new(0x1A65, 0x1A6C), Category::NonspacingMark),
	(CodepointRange::new(0x1A6D, 0x1A72), Category::SpacingMark),
	(CodepointRange::new(0x1A73, 0x1A7C), Category::NonspacingMark),
	(CodepointRange::new(0x1A7F, 0x1A7F), Category::NonspacingMark),
	(CodepointRange::new(0x1A80, 0x1A89), Category::DecimalNumber),
	(CodepointRange::new(0x1A90, 0x1A99), Category::DecimalNumber),
	(CodepointRange::new(0x1AA0, 0x1AA6), Category::OtherPunctuation),
	(CodepointRange::new(0x1AA7, 0x1AA7), Category::ModifierLetter),
	(CodepointRange::new(0x1AA8, 0x1AAD), Category::OtherPunctuation),
	(CodepointRange::new(0x1AB0, 0x1ABD), Category::NonspacingMark),
	(CodepointRange::new(0x1ABE, 0x1ABE), Category::EnclosingMark),
	(CodepointRange::new(0x1ABF, 0x1ACE), Category::NonspacingMark),
	(CodepointRange::new(0x1B00, 0x1B03), Category::NonspacingMark),
	(CodepointRange::new(0x1B04, 0x1B04), Category::SpacingMark),
	(CodepointRange::new(0x1B05, 0x1B33), Category::OtherLetter),
	(CodepointRange::new(0x1B34, 0x1B34), Category::NonspacingMark),
	(CodepointRange::new(0x1B35, 0x1B35), Category::SpacingMark),
	(CodepointRange::new(0x1B36, 0x1B3A), Category::NonspacingMark),
	(CodepointRange::new(0x1B3B, 0x1B3B), Category::SpacingMark),
	(CodepointRange::new(0x1B3C, 0x1B3C), Category::NonspacingMark),
	(CodepointRange::new(0x1B3D, 0x1B41), Category::SpacingMark),
	(CodepointRange::new(0x1B42, 0x1B42), Category::NonspacingMark),
	(CodepointRange::new(0x1B43, 0x1B44), Category::SpacingMark),
	(CodepointRange::new(0x1B45, 0x1B4C), Category::OtherLetter),
	(CodepointRange::new(0x1B50, 0x1B59), Category::DecimalNumber),
	(CodepointRange::new(0x1B5A, 0x1B60), Category::OtherPunctuation),
	(CodepointRange::new(0x1B61, 0x1B6A), Category::OtherSymbol),
	(CodepointRange::new(0x1B6B, 0x1B73), Category::NonspacingMark),
	(CodepointRange::new(0x1B74, 0x1B7C), Category::OtherSymbol),
	(CodepointRange::new(0x1B7D, 0x1B7E), Category::OtherPunctuation),
	(CodepointRange::new(0x1B80, 0x1B81), Category::NonspacingMark),
	(CodepointRange::new(0x1B82, 0x1B82), Category::SpacingMark),
	(CodepointRange::new(0x1B83, 0x1BA0), Category::OtherLetter),
	(CodepointRange::new(0x1BA1, 0x1BA1), Category::SpacingMark),
	(CodepointRange::new(0x1BA2, 0x1BA5), Category::NonspacingMark),
	(CodepointRange::new(0x1BA6, 0x1BA7), Category::SpacingMark),
	(CodepointRange::new(0x1BA8, 0x1BA9), Category::NonspacingMark),
	(CodepointRange::new(0x1BAA, 0x1BAA), Category::SpacingMark),
	(CodepointRange::new(0x1BAB, 0x1BAD), Category::NonspacingMark),
	(CodepointRange::new(0x1BAE, 0x1BAF), Category::OtherLetter),
	(CodepointRange::new(0x1BB0, 0x1BB9), Category::DecimalNumber),
	(CodepointRange::new(0x1BBA, 0x1BE5), Category::OtherLetter),
	(CodepointRange::new(0x1BE6, 0x1BE6), Category::NonspacingMark),
	(CodepointRange::new(0x1BE7, 0x1BE7), Category::SpacingMark),
	(CodepointRange::new(0x1BE8, 0x1BE9), Category::NonspacingMark),
	(CodepointRange::new(0x1BEA, 0x1BEC), Category::SpacingMark),
	(CodepointRange::new(0x1BED, 0x1BED), Category::NonspacingMark),
	(CodepointRange::new(0x1BEE, 0x1BEE), Category::SpacingMark),
	(CodepointRange::new(0x1BEF, 0x1BF1), Category::NonspacingMark),
	(CodepointRange::new(0x1BF2, 0x1BF3), Category::SpacingMark),
	(CodepointRange::new(0x1BFC, 0x1BFF), Category::OtherPunctuation),
	(CodepointRange::new(0x1C00, 0x1C23), Category::OtherLetter),
	(CodepointRange::new(0x1C24, 0x1C2B), Category::SpacingMark),
	(CodepointRange::new(0x1C2C, 0x1C33), Category::NonspacingMark),
	(CodepointRange::new(0x1C34, 0x1C35), Category::SpacingMark),
	(CodepointRange::new(0x1C36, 0x1C37), Category::NonspacingMark),
	(CodepointRange::new(0x1C3B, 0x1C3F), Category::OtherPunctuation),
	(CodepointRange::new(0x1C40, 0x1C49), Category::DecimalNumber),
	(CodepointRange::new(0x1C4D, 0x1C4F), Category::OtherLetter),
	(CodepointRange::new(0x1C50, 0x1C59), Category::DecimalNumber),
	(CodepointRange::new(0x1C5A, 0x1C77), Category::OtherLetter),
	(CodepointRange::new(0x1C78, 0x1C7D), Category::ModifierLetter),
	(CodepointRange::new(0x1C7E, 0x1C7F), Category::OtherPunctuation),
	(CodepointRange::new(0x1C80, 0x1C88), Category::LowercaseLetter),
	(CodepointRange::new(0x1C90, 0x1CBA), Category::UppercaseLetter),
	(CodepointRange::new(0x1CBD, 0x1CBF), Category::UppercaseLetter),
	(CodepointRange::new(0x1CC0, 0x1CC7), Category::OtherPunctuation),
	(CodepointRange::new(0x1CD0, 0x1CD2), Category::NonspacingMark),
	(CodepointRange::new(0x1CD3, 0x1CD3), Category::OtherPunctuation),
	(CodepointRange::new(0x1CD4, 0x1CE0), Category::NonspacingMark),
	(CodepointRange::new(0x1CE1, 0x1CE1), Category::SpacingMark),
	(CodepointRange::new(0x1CE2, 0x1CE8), Category::NonspacingMark),
	(CodepointRange::new(0x1CE9, 0x1CEC), Category::OtherLetter),
	(CodepointRange::new(0x1CED, 0x1CED), Category::NonspacingMark),
	(CodepointRange::new(0x1CEE, 0x1CF3), Category::OtherLetter),
	(CodepointRange::new(0x1CF4, 0x1CF4), Category::NonspacingMark),
	(CodepointRange::new(0x1CF5, 0x1CF6), Category::OtherLetter),
	(CodepointRange::new(0x1CF7, 0x1CF7), Category::SpacingMark),
	(CodepointRange::new(0x1CF8, 0x1CF9), Category::NonspacingMark),
	(CodepointRange::new(0x1CFA, 0x1CFA), Category::OtherLetter),
	(CodepointRange::new(0x1D00, 0x1D2B), Category::LowercaseLetter),
	(CodepointRange::new(0x1D2C, 0x1D6A), Category::ModifierLetter),
	(CodepointRange::new(0x1D6B, 0x1D77), Category::LowercaseLetter),
	(CodepointRange::new(0x1D78, 0x1D78), Category::ModifierLetter),
	(CodepointRange::new(0x1D79, 0x1D9A), Category::LowercaseLetter),
	(CodepointRange::new(0x1D9B, 0x1DBF), Category::ModifierLetter),
	(CodepointRange::new(0x1DC0, 0x1DFF), Category::NonspacingMark),
	(CodepointRange::new(0x1E00, 0x1E00), Category::UppercaseLetter),
	(CodepointRange::new(0x1E01, 0x1E01), Category::LowercaseLetter),
	(CodepointRange::new(0x1E02, 0x1E02), Category::UppercaseLetter),
	(CodepointRange::new(0x1E03, 0x1E03), Category::LowercaseLetter),
	(CodepointRange::new(0x1E04, 0x1E04), Category::UppercaseLetter),
	(CodepointRange::new(0x1E05, 0x1E05), Category::LowercaseLetter),
	(CodepointRange::new(0x1E06, 0x1E06), Category::UppercaseLetter),
	(CodepointRange::new(0x1E07, 0x1E07), Category::LowercaseLetter),
	(CodepointRange::new(0x1E08, 0x1E08), Category::UppercaseLetter),
	(CodepointRange::new(0x1E09, 0x1E09), Category::LowercaseLetter),
	(CodepointRange::new(0x1E0A, 0x1E0A), Category::UppercaseLetter),
	(CodepointRange::new(0x1E0B, 0x1E0B), Category::LowercaseLetter),
	(CodepointRange::new(0x1E0C, 0x1E0C), Category::UppercaseLetter),
	(CodepointRange::new(0x1E0D, 0x1E0D), Category::LowercaseLetter),
	(CodepointRange::new(0x1E0E, 0x1E0E), Category::UppercaseLetter),
	(CodepointRange::new(0x1E0F, 0x1E0F), Category::LowercaseLetter),
	(CodepointRange::new(0x1E10, 0x1E10), Category::UppercaseLetter),
	(CodepointRange::new(0x1E11, 0x1E11), Category::LowercaseLetter),
	(CodepointRange::new(0x1E12, 0x1E12), Category::UppercaseLetter),
	(CodepointRange::new(0x1E13, 0x1E13), Category::LowercaseLetter),
	(CodepointRange::new(0x1E14, 0x1E14), Category::UppercaseLetter),
	(CodepointRange::new(0x1E15, 0x1E15), Category::LowercaseLetter),
	(CodepointRange::new(0x1E16, 0x1E16), Category::UppercaseLetter),
	(CodepointRange::new(0x1E17, 0x1E17), Category::LowercaseLetter),
	(CodepointRange::new(0x1E18, 0x1E18), Category::UppercaseLetter),
	(CodepointRange::new(0x1E19, 0x1E19), Category::LowercaseLetter),
	(CodepointRange::new(0x1E1A, 0x1E1A), Category::UppercaseLetter),
	(CodepointRange::new(0x1E1B, 0x1E1B), Category::LowercaseLetter),
	(CodepointRange::new(0x1E1C, 0x1E1C), Category::UppercaseLetter),
	(CodepointRange::new(0x1E1D, 0x1E1D), Category::LowercaseLetter),
	(CodepointRange::new(0x1E1E, 0x1E1E), Category::UppercaseLetter),
	(CodepointRange::new(0x1E1F, 0x1E1F), Category::LowercaseLetter),
	(CodepointRange::new(0x1E20, 0x1E20), Category::UppercaseLetter),
	(CodepointRange::new(0x1E21, 0x1E21), Category::LowercaseLetter),
	(CodepointRange::new(0x1E22, 0x1E22), Category::UppercaseLetter),
	(CodepointRange::new(0x1E23, 0x1E23), Category::LowercaseLetter),
	(CodepointRange::new(0x1E24, 0x1E24), Category::UppercaseLetter),
	(CodepointRange::new(0x1E25, 0x1E25), Category::LowercaseLetter),
	(CodepointRange::new(0x1E26, 0x1E26), Category::UppercaseLetter),
	(CodepointRange::new(0x1E27, 0x1E27), Category::LowercaseLetter),
	(CodepointRange::new(0x1E28, 0x1E28), Category::UppercaseLetter),
	(CodepointRange::new(0x1E29, 0x1E29), Category::LowercaseLetter),
	(CodepointRange::new(0x1E2A, 0x1E2A), Category::UppercaseLetter),
	(CodepointRange::new(0x1E2B, 0x1E2B), Category::LowercaseLetter),
	(CodepointRange::new(0x1E2C, 0x1E2C), Category::UppercaseLetter),
	(CodepointRange::new(0x1E2D, 0x1E2D), Category::LowercaseLetter),
	(CodepointRange::new(0x1E2E, 0x1E2E), Category::UppercaseLetter),
	(CodepointRange::new(0x1E2F, 0x1E2F), Category::LowercaseLetter),
	(CodepointRange::new(0x1E30, 0x1E30), Category::UppercaseLetter),
	(CodepointRange::new(0x1E31, 0x1E31), Category::LowercaseLetter),
	(CodepointRange::new(0x1E32, 0x1E32), Category::UppercaseLetter),
	(CodepointRange::new(0x1E33, 0x1E33), Category::LowercaseLetter),
	(CodepointRange::new(0x1E34, 0x1E34), Category::UppercaseLetter),
	(CodepointRange::new(0x1E35, 0x1E35), Category::LowercaseLetter),
	(CodepointRange::new(0x1E36, 0x1E36), Category::UppercaseLetter),
	(CodepointRange::new(0x1E37, 0x1E37), Category::LowercaseLetter),
	(CodepointRange::new(0x1E38, 0x1E38), Category::UppercaseLetter),
	(CodepointRange::new(0x1E39, 0x1E39), Category::LowercaseLetter),
	(CodepointRange::new(0x1E3A, 0x1E3A), Category::UppercaseLetter),
	(CodepointRange::new(0x1E3B, 0x1E3B), Category::LowercaseLetter),
	(CodepointRange::new(0x1E3C, 0x1E3C), Category::UppercaseLetter),
	(CodepointRange::new(0x1E3D, 0x1E3D), Category::LowercaseLetter),
	(CodepointRange::new(0x1E3E, 0x1E3E), Category::UppercaseLetter),
	(CodepointRange::new(0x1E3F, 0x1E3F), Category::LowercaseLetter),
	(CodepointRange::new(0x1E40, 0x1E40), Category::UppercaseLetter),
	(CodepointRange::new(0x1E41, 0x1E41), Category::LowercaseLetter),
	(CodepointRange::new(0x1E42, 0x1E42), Category::UppercaseLetter),
	(CodepointRange::new(0x1E43, 0x1E43), Category::LowercaseLetter),
	(CodepointRange::new(0x1E44, 0x1E44), Category::UppercaseLetter),
	(CodepointRange::new(0x1E45, 0x1E45), Category::LowercaseLetter),
	(CodepointRange::new(0x1E46, 0x1E46), Category::UppercaseLetter),
	(CodepointRange::new(0x1E47, 0x1E47), Category::LowercaseLetter),
	(CodepointRange::new(0x1E48, 0x1E48), Category::UppercaseLetter),
	(CodepointRange::new(0x1E49, 0x1E49), Category::LowercaseLetter),
	(CodepointRange::new(0x1E4A, 0x1E4A), Category::UppercaseLetter),
	(CodepointRange::new(0x1E4B, 0x1E4B), Category::LowercaseLetter),
	(CodepointRange::new(0x1E4C, 0x1E4C), Category::UppercaseLetter),
	(CodepointRange::new(0x1E4D, 0x1E4D), Category::LowercaseLetter),
	(CodepointRange::new(0x1E4E, 0x1E4E), Category::UppercaseLetter),
	(CodepointRange::new(0x1E4F, 0x1E4F), Category::LowercaseLetter),
	(CodepointRange::new(0x1E50, 0x1E50), Category::UppercaseLetter),
	(CodepointRange::new(0x1E51, 0x1E51), Category::LowercaseLetter),
	(CodepointRange::new(0x1E52, 0x1E52), Category::UppercaseLetter),
	(CodepointRange::new(0x1E53, 0x1E53), Category::LowercaseLetter),
	(CodepointRange::new(0x1E54, 0x1E54), Category::UppercaseLetter),
	(CodepointRange::new(0x1E55, 0x1E55), Category::LowercaseLetter),
	(CodepointRange::new(0x1E56, 0x1E56), Category::UppercaseLetter),
	(CodepointRange::new(0x1E57, 0x1E57), Category::LowercaseLetter),
	(CodepointRange::new(0x1E58, 0x1E58), Category::UppercaseLetter),
	(CodepointRange::new(0x1E59, 0x1E59), Category::LowercaseLetter),
	(CodepointRange::new(0x1E5A, 0x1E5A), Category::UppercaseLetter),
	(CodepointRange::new(0x1E5B, 0x1E5B), Category::LowercaseLetter),
	(CodepointRange::new(0x1E5C, 0x1E5C), Category::UppercaseLetter),
	(CodepointRange::new(0x1E5D, 0x1E5D), Category::LowercaseLetter),
	(CodepointRange::new(0x1E5E, 0x1E5E), Category::UppercaseLetter),
	(CodepointRange::new(0x1E5F, 0x1E5F), Category::LowercaseLetter),
	(CodepointRange::new(0x1E60, 0x1E60), Category::UppercaseLetter),
	(CodepointRange::new(0x1E61, 0x1E61), Category::LowercaseLetter),
	(CodepointRange::new(0x1E62, 0x1E62), Category::UppercaseLetter),
	(CodepointRange::new(0x1E63, 0x1E63), Category::LowercaseLetter),
	(CodepointRange::new(0x1E64, 0x1E64), Category::UppercaseLetter),
	(CodepointRange::new(0x1E65, 0x1E65), Category::LowercaseLetter),
	(CodepointRange::new(0x1E66, 0x1E66), Category::UppercaseLetter),
	(CodepointRange::new(0x1E67, 0x1E67), Category::LowercaseLetter),
	(CodepointRange::new(0x1E68, 0x1E68), Category::UppercaseLetter),
	(CodepointRange::new(0x1E69, 0x1E69), Category::LowercaseLetter),
	(CodepointRange::new(0x1E6A, 0x1E6A), Category::UppercaseLetter),
	(CodepointRange::new(0x1E6B, 0x1E6B), Category::LowercaseLetter),
	(CodepointRange::new(0x1E6C, 0x1E6C), Category::UppercaseLetter),
	(CodepointRange::new(0x1E6D, 0x1E6D), Category::LowercaseLetter),
	(CodepointRange::new(0x1E6E, 0x1E6E), Category::UppercaseLetter),
	(CodepointRange::new(0x1E6F, 0x1E6F), Category::LowercaseLetter),
	(CodepointRange::new(0x1E70, 0x1E70), Category::UppercaseLetter),
	(CodepointRange::new(0x1E71, 0x1E71), Category::LowercaseLetter),
	(CodepointRange::new(0x1E72, 0x1E72), Category::UppercaseLetter),
	(CodepointRange::new(0x1E73, 0x1E73), Category::LowercaseLetter),
	(CodepointRange::new(0x1E74, 0x1E74), Category::UppercaseLetter),
	(CodepointRange::new(0x1E75, 0x1E75), Category::LowercaseLetter),
	(CodepointRange::new(0x1E76, 0x1E76), Category::UppercaseLetter),
	(CodepointRange::new(0x1E77, 0x1E77), Category::LowercaseLetter),
	(CodepointRange::new(0x1E78, 0x1E78), Category::UppercaseLetter),
	(CodepointRange::new(0x1E79, 0x1E79), Category::LowercaseLetter),
	(CodepointRange::new(0x1E7A, 0x1E7A), Category::UppercaseLetter),
	(CodepointRange::new(0x1E7B, 0x1E7B), Category::LowercaseLetter),
	(CodepointRange::new(0x1E7C, 0x1E7C), Category::UppercaseLetter),
	(CodepointRange::new(0x1E7D, 0x1E7D), Category::LowercaseLetter),
	(CodepointRange::new(0x1E7E, 0x1E7E), Category::UppercaseLetter),
	(CodepointRange::new(0x1E7F, 0x1E7F), Category::LowercaseLetter),
	(CodepointRange::new(0x1E80, 0x1E80), Category::UppercaseLetter),
	(CodepointRange::new(0x1E81, 0x1E81), Category::LowercaseLetter),
	(CodepointRange::new(0x1E82, 0x1E82), Category::UppercaseLetter),
	(CodepointRange::new(0x1E83, 0x1E83), Category::LowercaseLetter),
	(CodepointRange::new(0x1E84, 0x1E84), Category::UppercaseLetter),
	(CodepointRange::new(0x1E85, 0x1E85), Category::LowercaseLetter),
	(CodepointRange::new(0x1E86, 0x1E86), Category::UppercaseLetter),
	(CodepointRange::new(0x1E87, 0x1E87), Category::LowercaseLetter),
	(CodepointRange::new(0x1E88, 0x1E88), Category::UppercaseLetter),
	(CodepointRange::new(0x1E89, 0x1E89), Category::LowercaseLetter),
	(CodepointRange::new(0x1E8A, 0x1E8A), Category::UppercaseLetter),
	(CodepointRange::new(0x1E8B, 0x1E8B), Category::LowercaseLetter),
	(CodepointRange::new(0x1E8C, 0x1E8C), Category::UppercaseLetter),
	(CodepointRange::new(0x1E8D, 0x1E8D), Category::LowercaseLetter),
	(CodepointRange::new(0x1E8E, 0x1E8E), Category::UppercaseLetter),
	(CodepointRange::new(0x1E8F, 0x1E8F), Category::LowercaseLetter),
	(CodepointRange::new(0x1E90, 0x1E90), Category::UppercaseLetter),
	(CodepointRange::new(0x1E91, 0x1E91), Category::LowercaseLetter),
	(CodepointRange::new(0x1E92, 0x1E92), Category::UppercaseLetter),
	(CodepointRange::new(0x1E93, 0x1E93), Category::LowercaseLetter),
	(CodepointRange::new(0x1E94, 0x1E94), Category::UppercaseLetter),
	(CodepointRange::new(0x1E95, 0x1E9D), Category::LowercaseLetter),
	(CodepointRange::new(0x1E9E, 0x1E9E), Category::UppercaseLetter),
	(CodepointRange::new(0x1E9F, 0x1E9F), Category::LowercaseLetter),
	(CodepointRange::new(0x1EA0, 0x1EA0), Category::UppercaseLetter),
	(CodepointRange::new(0x1EA1, 0x1EA1), Category::LowercaseLetter),
	(CodepointRange::new(0x1EA2, 0x1EA2), Category::UppercaseLetter),
	(CodepointRange::new(0x1EA3, 0x1EA3), Category::LowercaseLetter),
	(CodepointRange::new(0x1EA4, 0x1EA4), Category::UppercaseLetter),
	(CodepointRange::new(0x1EA5, 0x1EA5), Category::LowercaseLetter),
	(CodepointRange::new(0x1EA6, 0x1EA6), Category::UppercaseLetter),
	(CodepointRange::new(0x1EA7, 0x1EA7), Category::LowercaseLetter),
	(CodepointRange::new(0x1EA8, 0x1EA8), Category::UppercaseLetter),
	(CodepointRange::new(0x1EA9, 0x1EA9), Category::LowercaseLetter),
	(CodepointRange::new(0x1EAA, 0x1EAA), Category::UppercaseLetter),
	(CodepointRange::new(0x1EAB, 0x1EAB), Category::LowercaseLetter),
	(CodepointRange::new(0x1EAC, 0x1EAC), Category::UppercaseLetter),
	(CodepointRange::new(0x1EAD, 0x1EAD), Category::LowercaseLetter),
	(CodepointRange::new(0x1EAE, 0x1EAE), Category::UppercaseLetter),
	(CodepointRange::new(0x1EAF, 0x1EAF), Category::LowercaseLetter),
	(CodepointRange::new(0x1EB0, 0x1EB0), Category::UppercaseLetter),
	(CodepointRange::new(0x1EB1, 0x1EB1), Category::LowercaseLetter),
	(CodepointRange::new(0x1EB2, 0x1EB2), Category::UppercaseLetter),
	(CodepointRange::new(0x1EB3, 0x1EB3), Category::LowercaseLetter),
	(CodepointRange::new(0x1EB4, 0x1EB4), Category::UppercaseLetter),
	(CodepointRange::new(0x1EB5, 0x1EB5), Category::LowercaseLetter),
	(CodepointRange::new(0x1EB6, 0x1EB6), Category::UppercaseLetter),
	(CodepointRange::new(0x1EB7, 0x1EB7), Category::LowercaseLetter),
	(CodepointRange::new(0x1EB8, 0x1EB8), Category::UppercaseLetter),
	(CodepointRange::new(0x1EB9, 0x1EB9), Category::LowercaseLetter),
	(CodepointRange::new(0x1EBA, 0x1EBA), Category::UppercaseLetter),
	(CodepointRange::new(0x1EBB, 0x1EBB), Category::LowercaseLetter),
	(CodepointRange::new(0x1EBC, 0x1EBC), Category::UppercaseLetter),
	(CodepointRange::new(0x1EBD, 0x1EBD), Category::LowercaseLetter),
	(CodepointRange::new(0x1EBE, 0x1EBE), Category::UppercaseLetter),
	(CodepointRange::new(0x1EBF, 0x1EBF), Category::LowercaseLetter),
	(CodepointRange::new(0x1EC0, 0x1EC0), Category::UppercaseLetter),
	(CodepointRange::new(0x1EC1, 0x1EC1), Category::LowercaseLetter),
	(CodepointRange::new(0x1EC2, 0x1EC2), Category::UppercaseLetter),
	(CodepointRange::new(0x1EC3, 0x1EC3), Category::LowercaseLetter),
	(CodepointRange::new(0x1EC4, 0x1EC4), Category::UppercaseLetter),
	(CodepointRange::new(0x1EC5, 0x1EC5), Category::LowercaseLetter),
	(CodepointRange::new(0x1EC6, 0x1EC6), Category::UppercaseLetter),
	(CodepointRange::new(0x1EC7, 0x1EC7), Category::LowercaseLetter),
	(CodepointRange::new(0x1EC8, 0x1EC8), Category::UppercaseLetter),
	(CodepointRange::new(0x1EC9, 0x1EC9), Category::LowercaseLetter),
	(CodepointRange::new(0x1ECA, 0x1ECA), Category::UppercaseLetter),
	(CodepointRange::new(0x1ECB, 0x1ECB), Category::LowercaseLetter),
	(CodepointRange::new(0x1ECC, 0x1ECC), Category::UppercaseLetter),
	(CodepointRange::new(0x1ECD, 0x1ECD), Category::LowercaseLetter),
	(CodepointRange::new(0x1ECE, 0x1ECE), Category::UppercaseLetter),
	(CodepointRange::new(0x1ECF, 0x1ECF), Category::LowercaseLetter),
	(CodepointRange::new(0x1ED0, 0x1ED0), Category::UppercaseLetter),
	(CodepointRange::new(0x1ED1, 0x1ED1), Category::LowercaseLetter),
	(CodepointRange::new(0x1ED2, 0x1ED2), Category::UppercaseLetter),
	(CodepointRange::new(0x1ED3, 0x1ED3), Category::LowercaseLetter),
	(CodepointRange::new(0x1ED4, 0x1ED4), Category::UppercaseLetter),
	(CodepointRange::new(0x1ED5, 0x1ED5), Category::LowercaseLetter),
	(CodepointRange::new(0x1ED6, 0x1ED6), Category::UppercaseLetter),
	(CodepointRange::new(0x1ED7, 0x1ED7), Category::LowercaseLetter),
	(CodepointRange::new(0x1ED8, 0x1ED8), Category::UppercaseLetter),
	(CodepointRange::new(0x1ED9, 0x1ED9), Category::LowercaseLetter),
	(CodepointRange::new(0x1EDA, 0x1EDA), Category::UppercaseLetter),
	(CodepointRange::new(0x1EDB, 0x1EDB), Category::LowercaseLetter),
	(CodepointRange::new(0x1EDC, 0x1EDC), Category::UppercaseLetter),
	(CodepointRange::new(0x1EDD, 0x1EDD), Category::LowercaseLetter),
	(CodepointRange::new(0x1EDE, 0x1EDE), Category::UppercaseLetter),
	(CodepointRange::new(0x1EDF, 0x1EDF), Category::LowercaseLetter),
	(CodepointRange::new(0x1EE0, 0x1EE0), Category::UppercaseLetter),
	(CodepointRange::new(0x1EE1, 0x1EE1), Category::LowercaseLetter),
	(CodepointRange::new(0x1EE2, 0x1EE2), Category::UppercaseLetter),
	(CodepointRange::new(0x1EE3, 0x1EE3), Category::LowercaseLetter),
	(CodepointRange::new(0x1EE4, 0x1EE4), Category::UppercaseLetter),
	(CodepointRange::new(0x1EE5, 0x1EE5), Category::LowercaseLetter),
	(CodepointRange::new(0x1EE6, 0x1EE6), Category::UppercaseLetter),
	(CodepointRange::new(0x1EE7, 0x1EE7), Category::LowercaseLetter),
	(CodepointRange::new(0x1EE8, 0x1EE8), Category::UppercaseLetter),
	(CodepointRange::new(0x1EE9, 0x1EE9), Category::LowercaseLetter),
	(CodepointRange::new(0x1EEA, 0x1EEA), Category::UppercaseLetter),
	(CodepointRange::new(0x1EEB, 0x1EEB), Category::LowercaseLetter),
	(CodepointRange::new(0x1EEC, 0x1EEC), Category::UppercaseLetter),
	(CodepointRange::new(0x1EED, 0x1EED), Category::LowercaseLetter),
	(CodepointRange::new(0x1EEE, 0x1EEE), Category::UppercaseLetter),
	(CodepointRange::new(0x1EEF, 0x1EEF), Category::LowercaseLetter),
	(CodepointRange::new(0x1EF0, 0x1EF0), Category::UppercaseLetter),
	(CodepointRange::new(0x1EF1, 0x1EF1), Category::LowercaseLetter),
	(CodepointRange::new(0x1EF2, 0x1EF2), Category::UppercaseLetter),
	(CodepointRange::new(0x1EF3, 0x1EF3), Category::LowercaseLetter),
	(CodepointRange::new(0x1EF4, 0x1EF4), Category::UppercaseLetter),
	(CodepointRange::new(0x1EF5, 0x1EF5), Category::LowercaseLetter),
	(CodepointRange::new(0x1EF6, 0x1EF6), Category::UppercaseLetter),
	(CodepointRange::new(0x1EF7, 0x1EF7), Category::LowercaseLetter),
	(CodepointRange::new(0x1EF8, 0x1EF8), Category::UppercaseLetter),
	(CodepointRange::new(0x1EF9, 0x1EF9), Category::LowercaseLetter),
	(CodepointRange::new(0x1EFA, 0x1EFA), Category::UppercaseLetter),
	(CodepointRange::new(0x1EFB, 0x1EFB), Category::LowercaseLetter),
	(CodepointRange::new(0x1EFC, 0x1EFC), Category::UppercaseLetter),
	(CodepointRange::new(0x1EFD, 0x1EFD), Category::LowercaseLetter),
	(CodepointRange::new(0x1EFE, 0x1EFE), Category::UppercaseLetter),
	(CodepointRange::new(0x1EFF, 0x1F07), Category::LowercaseLetter),
	(CodepointRange::new(0x1F08, 0x1F0F), Category::UppercaseLetter),
	(CodepointRange::new(0x1F10, 0x1F15), Category::LowercaseLetter),
	(CodepointRange::new(0x1F18, 0x1F1D), Category::UppercaseLetter),
	(CodepointRange::new(0x1F20, 0x1F27), Category::LowercaseLetter),
	(CodepointRange::new(0x1F28, 0x1F2F), Category::UppercaseLetter),
	(CodepointRange::new(0x1F30, 0x1F37), Category::LowercaseLetter),
	(CodepointRange::new(0x1F38, 0x1F3F), Category::UppercaseLetter),
	(CodepointRange::new(0x1F40, 0x1F45), Category::LowercaseLetter),
	(CodepointRange::new(0x1F48, 0x1F4D), Category::UppercaseLetter),
	(CodepointRange::new(0x1F50, 0x1F57), Category::LowercaseLetter),
	(CodepointRange::new(0x1F59, 0x1F59), Category::UppercaseLetter),
	(CodepointRange::new(0x1F5B, 0x1F5B), Category::UppercaseLetter),
	(CodepointRange::new(0x1F5D, 0x1F5D), Category::UppercaseLetter),
	(CodepointRange::new(0x1F5F, 0x1F5F), Category::UppercaseLetter),
	(CodepointRange::new(0x1F60, 0x1F67), Category::LowercaseLetter),
	(CodepointRange::new(0x1F68, 0x1F6F), Category::UppercaseLetter),
	(CodepointRange::new(0x1F70, 0x1F7D), Category::LowercaseLetter),
	(CodepointRange::new(0x1F80, 0x1F87), Category::LowercaseLetter),
	(CodepointRange::new(0x1F88, 0x1F8F), Category::TitlecaseLetter),
	(CodepointRange::new(0x1F90, 0x1F97), Category::LowercaseLetter),
	(CodepointRange::new(0x1F98, 0x1F9F), Category::TitlecaseLetter),
	(CodepointRange::new(0x1FA0, 0x1FA7), Category::LowercaseLetter),
	(CodepointRange::new(0x1FA8, 0x1FAF), Category::TitlecaseLetter),
	(CodepointRange::new(0x1FB0, 0x1FB4), Category::LowercaseLetter),
	(CodepointRange::new(0x1FB6, 0x1FB7), Category::LowercaseLetter),
	(CodepointRange::new(0x1FB8, 0x1FBB), Category::UppercaseLetter),
	(CodepointRange::new(0x1FBC, 0x1FBC), Category::TitlecaseLetter),
	(CodepointRange::new(0x1FBD, 0x1FBD), Category::ModifierSymbol),
	(CodepointRange::new(0x1FBE, 0x1FBE), Category::LowercaseLetter),
	(CodepointRange::new(0x1FBF, 0x1FC1), Category::ModifierSymbol),
	(CodepointRange::new(0x1FC2, 0x1FC4), Category::LowercaseLetter),
	(CodepointRange::new(0x1FC6, 0x1FC7), Category::LowercaseLetter),
	(CodepointRange::new(0x1FC8, 0x1FCB), Category::UppercaseLetter),
	(CodepointRange::new(0x1FCC, 0x1FCC), Category::TitlecaseLetter),
	(CodepointRange::new(0x1FCD, 0x1FCF), Category::ModifierSymbol),
	(CodepointRange::new(0x1FD0, 0x1FD3), Category::LowercaseLetter),
	(CodepointRange::new(0x1FD6, 0x1FD7), Category::LowercaseLetter),
	(CodepointRange::new(0x1FD8, 0x1FDB), Category::UppercaseLetter),
	(CodepointRange::new(0x1FDD, 0x1FDF), Category::ModifierSymbol),
	(CodepointRange::new(0x1FE0, 0x1FE7), Category::LowercaseLetter),
	(CodepointRange::new(0x1FE8, 0x1FEC), Category::UppercaseLetter),
	(CodepointRange::new(0x1FED, 0x1FEF), Category::ModifierSymbol),
	(CodepointRange::new(0x1FF2, 0x1FF4), Category::LowercaseLetter),
	(CodepointRange::new(0x1FF6, 0x1FF7), Category::LowercaseLetter),
	(CodepointRange::new(0x1FF8, 0x1FFB), Category::UppercaseLetter),
	(CodepointRange::new(0x1FFC, 0x1FFC), Category::TitlecaseLetter),
	(CodepointRange::new(0x1FFD, 0x1FFE), Category::ModifierSymbol),
	(CodepointRange::new(0x2000, 0x200A), Category::SpaceSeparator),
	(CodepointRange::new(0x200B, 0x200F), Category::Format),
	(CodepointRange::new(0x2010, 0x2015), Category::DashPunctuation),
	(CodepointRange::new(0x2016, 0x2017), Category::OtherPunctuation),
	(CodepointRange::new(0x2018, 0x2018), Category::InitialPunctuation),
	(CodepointRange::new(0x2019, 0x2019), Category::FinalPunctuation),
	(CodepointRange::new(0x201A, 0x201A), Category::OpenPunctuation),
	(CodepointRange::new(0x201B, 0x201C), Category::InitialPunctuation),
	(CodepointRange::new(0x201D, 0x201D), Category::FinalPunctuation),
	(CodepointRange::new(0x201E, 0x201E), Category::OpenPunctuation),
	(CodepointRange::new(0x201F, 0x201F), Category::InitialPunctuation),
	(CodepointRange::new(0x2020, 0x2027), Category::OtherPunctuation),
	(CodepointRange::new(0x2028, 0x2028), Category::LineSeparator),
	(CodepointRange::new(0x2029, 0x2029), Category::ParagraphSeparator),
	(CodepointRange::new(0x202A, 0x202E), Category::Format),
	(CodepointRange::new(0x202F, 0x202F), Category::SpaceSeparator),
	(CodepointRange::new(0x2030, 0x2038), Category::OtherPunctuation),
	(CodepointRange::new(0x2039, 0x2039), Category::InitialPunctuation),
	(CodepointRange::new(0x203A, 0x203A), Category::FinalPunctuation),
	(CodepointRange::new(0x203B, 0x203E), Category::OtherPunctuation),
	(CodepointRange::new(0x203F, 0x2040), Category::ConnectorPunctuation),
	(CodepointRange::new(0x2041, 0x2043), Category::OtherPunctuation),
	(CodepointRange::new(0x2044, 0x2044), Category::MathSymbol),
	(CodepointRange::new(0x2045, 0x2045), Category::OpenPunctuation),
	(CodepointRange::new(0x2046, 0x2046), Category::ClosePunctuation),
	(CodepointRange::new(0x2047, 0x2051), Category::OtherPunctuation),
	(CodepointRange::new(0x2052, 0x2052), Category::MathSymbol),
	(CodepointRange::new(0x2053, 0x2053), Category::OtherPunctuation),
	(CodepointRange::new(0x2054, 0x2054), Category::ConnectorPunctuation),
	(CodepointRange::new(0x2055, 0x205E), Category::OtherPunctuation),
	(CodepointRange::new(0x205F, 0x205F), Category::SpaceSeparator),
	(CodepointRange::new(0x2060, 0x2064), Category::Format),
	(CodepointRange::new(0x2066, 0x206F), Category::Format),
	(CodepointRange::new(0x2070, 0x2070), Category::OtherNumber),
	(CodepointRange::new(0x2071, 0x2071), Category::ModifierLetter),
	(CodepointRange::new(0x2074, 0x2079), Category::OtherNumber),
	(CodepointRange::new(0x207A, 0x207C), Category::MathSymbol),
	(CodepointRange::new(0x207D, 0x207D), Category::OpenPunctuation),
	(CodepointRange::new(0x207E, 0x207E), Category::ClosePunctuation),
	(CodepointRange::new(0x207F, 0x207F), Category::ModifierLetter),
	(CodepointRange::new(0x2080, 0x2089), Category::OtherNumber),
	(CodepointRange::new(0x208A, 0x208C), Category::MathSymbol),
	(CodepointRange::new(0x208D, 0x208D), Category::OpenPunctuation),
	(CodepointRange::new(0x208E, 0x208E), Category::ClosePunctuation),
	(CodepointRange::new(0x2090, 0x209C), Category::ModifierLetter),
	(CodepointRange::new(0x20A0, 0x20C0), Category::CurrencySymbol),
	(CodepointRange::new(0x20D0, 0x20DC), Category::NonspacingMark),
	(CodepointRange::new(0x20DD, 0x20E0), Category::EnclosingMark),
	(CodepointRange::new(0x20E1, 0x20E1), Category::NonspacingMark),
	(CodepointRange::new(0x20E2, 0x20E4), Category::EnclosingMark),
	(CodepointRange::new(0x20E5, 0x20F0), Category::NonspacingMark),
	(CodepointRange::new(0x2100, 0x2101), Category::OtherSymbol),
	(CodepointRange::new(0x2102, 0x2102), Category::UppercaseLetter),
	(CodepointRange::new(0x2103, 0x2106), Category::OtherSymbol),
	(CodepointRange::new(0x2107, 0x2107), Category::UppercaseLetter),
	(CodepointRange::new(0x2108, 0x2109), Category::OtherSymbol),
	(CodepointRange::new(0x210A, 0x210A), Category::LowercaseLetter),
	(CodepointRange::new(0x210B, 0x210D), Category::UppercaseLetter),
	(CodepointRange::new(0x210E, 0x210F), Category::LowercaseLetter),
	(CodepointRange::new(0x2110, 0x2112), Category::UppercaseLetter),
	(CodepointRange::new(0x2113, 0x2113), Category::LowercaseLetter),
	(CodepointRange::new(0x2114, 0x2114), Category::OtherSymbol),
	(CodepointRange::new(0x2115, 0x2115), Category::UppercaseLetter),
	(CodepointRange::new(0x2116, 0x2117), Category::OtherSymbol),
	(CodepointRange::new(0x2118, 0x2118), Category::MathSymbol),
	(CodepointRange::new(0x2119, 0x211D), Category::UppercaseLetter),
	(CodepointRange::new(0x211E, 0x2123), Category::OtherSymbol),
	(CodepointRange::new(0x2124, 0x2124), Category::UppercaseLetter),
	(CodepointRange::new(0x2125, 0x2125), Category::OtherSymbol),
	(CodepointRange::new(0x2126, 0x2126), Category::UppercaseLetter),
	(CodepointRange::new(0x2127, 0x2127), Category::OtherSymbol),
	(CodepointRange::new(0x2128, 0x2128), Category::UppercaseLetter),
	(CodepointRange::new(0x2129, 0x2129), Category::OtherSymbol),
	(CodepointRange::new(0x212A, 0x212D), Category::UppercaseLetter),
	(CodepointRange::new(0x212E, 0x212E), Category::OtherSymbol),
	(CodepointRange::new(0x212F, 0x212F), Category::LowercaseLetter),
	(CodepointRange::new(0x2130, 0x2133), Category::UppercaseLetter),
	(CodepointRange::new(0x2134, 0x2134), Category::LowercaseLetter),
	(CodepointRange::new(0x2135, 0x2138), Category::OtherLetter),
	(CodepointRange::new(0x2139, 0x2139), Category::LowercaseLetter),
	(CodepointRange::new(0x213A, 0x213B), Category::OtherSymbol),
	(CodepointRange::new(0x213C, 0x213D), Category::LowercaseLetter),
	(CodepointRange::new(0x213E, 0x213F), Category::UppercaseLetter),
	(CodepointRange::new(0x2140, 0x2144), Category::MathSymbol),
	(CodepointRange::new(0x2145, 0x2145), Category::UppercaseLetter),
	(CodepointRange::new(0x2146, 0x2149), Category::LowercaseLetter),
	(CodepointRange::new(0x214A, 0x214A), Category::OtherSymbol),
	(CodepointRange::new(0x214B, 0x214B), Category::MathSymbol),
	(CodepointRange::new(0x214C, 0x214D), Category::OtherSymbol),
	(CodepointRange::new(0x214E, 0x214E), Category::LowercaseLetter),
	(CodepointRange::new(0x214F, 0x214F), Category::OtherSymbol),
	(CodepointRange::new(0x2150, 0x215F), Category::OtherNumber),
	(CodepointRange::new(0x2160, 0x2182), Category::LetterNumber),
	(CodepointRange::new(0x2183, 0x2183), Category::UppercaseLetter),
	(CodepointRange::new(0x2184, 0x2184), Category::LowercaseLetter),
	(CodepointRange::new(0x2185, 0x2188), Category::LetterNumber),
	(CodepointRange::new(0x2189, 0x2189), Category::OtherNumber),
	(CodepointRange::new(0x218A, 0x218B), Category::OtherSymbol),
	(CodepointRange::new(0x2190, 0x2194), Category::MathSymbol),
	(CodepointRange::new(0x2195, 0x2199), Category::OtherSymbol),
	(CodepointRange::new(0x219A, 0x219B), Category::MathSymbol),
	(CodepointRange::new(0x219C, 0x219F), Category::OtherSymbol),
	(CodepointRange::new(0x21A0, 0x21A0), Category::MathSymbol),
	(CodepointRange::new(0x21A1, 0x21A2), Category::OtherSymbol),
	(CodepointRange::new(0x21A3, 0x21A3), Category::MathSymbol),
	(CodepointRange::new(0x21A4, 0x21A5), Category::OtherSymbol),
	(CodepointRange::new(0x21A6, 0x21A6), Category::MathSymbol),
	(CodepointRange::new(0x21A7, 0x21AD), Category::OtherSymbol),
	(CodepointRange::new(0x21AE, 0x21AE), Category::MathSymbol),
	(CodepointRange::new(0x21AF, 0x21CD), Category::OtherSymbol),
	(CodepointRange::new(0x21CE, 0x21CF), Category::MathSymbol),
	(CodepointRange::new(0x21D0, 0x21D1), Category::OtherSymbol),
	(CodepointRange::new(0x21D2, 0x21D2), Category::MathSymbol),
	(CodepointRange::new(0x21D3, 0x21D3), Category::OtherSymbol),
	(CodepointRange::new(0x21D4, 0x21D4), Category::MathSymbol),
	(CodepointRange::new(0x21D5, 0x21F3), Category::OtherSymbol),
	(CodepointRange::new(0x21F4, 0x22FF), Category::MathSymbol),
	(CodepointRange::new(0x2300, 0x2307), Category::OtherSymbol),
	(CodepointRange::new(0x2308, 0x2308), Category::OpenPunctuation),
	(CodepointRange::new(0x2309, 0x2309), Category::ClosePunctuation),
	(CodepointRange::new(0x230A, 0x230A), Category::OpenPunctuation),
	(CodepointRange::new(0x230B, 0x230B), Category::ClosePunctuation),
	(CodepointRange::new(0x230C, 0x231F), Category::OtherSymbol),
	(CodepointRange::new(0x2320, 0x2321), Category::MathSymbol),
	(CodepointRange::new(0x2322, 0x2328), Category::OtherSymbol),
	(CodepointRange::new(0x2329, 0x2329), Category::OpenPunctuation),
	(CodepointRange::new(0x232A, 0x232A), Category::ClosePunctuation),
	(CodepointRange::new(0x232B, 0x237B), Category::OtherSymbol),
	(CodepointRange::new(0x237C, 0x237C), Category::MathSymbol),
	(CodepointRange::new(0x237D, 0x239A), Category::OtherSymbol),
	(CodepointRange::new(0x239B, 0x23B3), Category::MathSymbol),
	(CodepointRange::new(0x23B4, 0x23DB), Category::OtherSymbol),
	(CodepointRange::new(0x23DC, 0x23E1), Category::MathSymbol),
	(CodepointRange::new(0x23E2, 0x2426), Category::OtherSymbol),
	(CodepointRange::new(0x2440, 0x244A), Category::OtherSymbol),
	(CodepointRange::new(0x2460, 0x249B), Category::OtherNumber),
	(CodepointRange::new(0x249C, 0x24E9), Category::OtherSymbol),
	(CodepointRange::new(0x24EA, 0x24FF), Category::OtherNumber),
	(CodepointRange::new(0x2500, 0x25B6), Category::OtherSymbol),
	(CodepointRange::new(0x25B7, 0x25B7), Category::MathSymbol),
	(CodepointRange::new(0x25B8, 0x25C0), Category::OtherSymbol),
	(CodepointRange::new(0x25C1, 0x25C1), Category::MathSymbol),
	(CodepointRange::new(0x25C2, 0x25F7), Category::OtherSymbol),
	(CodepointRange::new(0x25F8, 0x25FF), Category::MathSymbol),
	(CodepointRange::new(0x2600, 0x266E), Category::OtherSymbol),
	(CodepointRange::new(0x266F, 0x266F), Category::MathSymbol),
	(CodepointRange::new(0x2670, 0x2767), Category::OtherSymbol),
	(CodepointRange::new(0x2768, 0x2768), Category::OpenPunctuation),
	(CodepointRange::new(0x2769, 0x2769), Category::ClosePunctuation),
	(CodepointRange::new(0x276A, 0x276A), Category::OpenPunctuation),
	(CodepointRange::new(0x276B, 0x276B), Category::ClosePunctuation),
	(CodepointRange::new(0x276C, 0x276C), Category::OpenPunctuation),
	(CodepointRange::new(0x276D, 0x276D), Category::ClosePunctuation),
	(CodepointRange::new(0x276E, 0x276E), Category::OpenPunctuation),
	(CodepointRange::new(0x276F, 0x276F), Category::ClosePunctuation),
	(CodepointRange::new(0x2770, 0x2770), Category::OpenPunctuation),
	(CodepointRange::new(0x2771, 0x2771), Category::ClosePunctuation),
	(CodepointRange::new(0x2772, 0x2772), Category::OpenPunctuation),
	(CodepointRange::new(0x2773, 0x2773), Category::ClosePunctuation),
	(CodepointRange::new(0x2774, 0x2774), Category::OpenPunctuation),
	(CodepointRange::new(0x2775, 0x2775), Category::ClosePunctuation),
	(CodepointRange::new(0x2776, 0x2793), Category::OtherNumber),
	(CodepointRange::new(0x2794, 0x27BF), Category::OtherSymbol),
	(CodepointRange::new(0x27C0, 0x27C4), Category::MathSymbol),
	(CodepointRange::new(0x27C5, 0x27C5), Category::OpenPunctuation),
	(CodepointRange::new(0x27C6, 0x27C6), Category::ClosePunctuation),
	(CodepointRange::new(0x27C7, 0x27E5), Category::MathSymbol),
	(CodepointRange::new(0x27E6, 0x27E6), Category::OpenPunctuation),
	(CodepointRange::new(0x27E7, 0x27E7), Category::ClosePunctuation),
	(CodepointRange::new(0x27E8, 0x27E8), Category::OpenPunctuation),
	(CodepointRange::new(0x27E9, 0x27E9), Category::ClosePunctuation),
	(CodepointRange::new(0x27EA, 0x27EA), Category::OpenPunctuation),
	(CodepointRange::new(0x27EB, 0x27EB), Category::ClosePunctuation),
	(CodepointRange::new(0x27EC, 0x27EC), Category::OpenPunctuation),
	(CodepointRange::new(0x27ED, 0x27ED), Category::ClosePunctuation),
	(CodepointRange::new(0x27EE, 0x27EE), Category::OpenPunctuation),
	(CodepointRange::new(0x27EF, 0x27EF), Category::ClosePunctuation),
	(CodepointRange::new(0x27F0, 0x27FF), Category::MathSymbol),
	(CodepointRange::new(0x2800, 0x28FF), Category::OtherSymbol),
	(CodepointRange::new(0x2900, 0x2982), Category::MathSymbol),
	(CodepointRange::new(0x2983, 0x2983), Category::OpenPunctuation),
	(CodepointRange::new(0x2984, 0x2984), Category::ClosePunctuation),
	(CodepointRange::new(0x2985, 0x2985), Category::OpenPunctuation),
	(CodepointRange::new(0x2986, 0x2986), Category::ClosePunctuation),
	(CodepointRange::new(0x2987, 0x2987), Category::OpenPunctuation),
	(CodepointRange::new(0x2988, 0x2988), Category::ClosePunctuation),
	(CodepointRange::new(0x2989, 0x2989), Category::OpenPunctuation),
	(CodepointRange::new(0x298A, 0x298A), Category::ClosePunctuation),
	(CodepointRange::new(0x298B, 0x298B), Category::OpenPunctuation),
	(CodepointRange::new(0x298C, 0x298C), Category::ClosePunctuation),
	(CodepointRange::new(0x298D, 0x298D), Category::OpenPunctuation),
	(CodepointRange::new(0x298E, 0x298E), Category::ClosePunctuation),
	(CodepointRange::new(0x298F, 0x298F), Category::OpenPunctuation),
	(CodepointRange::new(0x2990, 0x2990), Category::ClosePunctuation),
	(CodepointRange::new(0x2991, 0x2991), Category::OpenPunctuation),
	(CodepointRange::new(0x2992, 0x2992), Category::ClosePunctuation),
	(CodepointRange::new(0x2993, 0x2993), Category::OpenPunctuation),
	(CodepointRange::new(0x2994, 0x2994), Category::ClosePunctuation),
	(CodepointRange::new(0x2995, 0x2995), Category::OpenPunctuation),
	(CodepointRange::new(0x2996, 0x2996), Category::ClosePunctuation),
	(CodepointRange::new(0x2997, 0x2997), Category::OpenPunctuation),
	(CodepointRange::new(0x2998, 0x2998), Category::ClosePunctuation),
	(CodepointRange::new(0x2999, 0x29D7), Category::MathSymbol),
	(CodepointRange::new(0x29D8, 0x29D8), Category::OpenPunctuation),
	(CodepointRange::new(0x29D9, 0x29D9), Category::ClosePunctuation),
	(CodepointRange::new(0x29DA, 0x29DA), Category::OpenPunctuation),
	(CodepointRange::new(0x29DB, 0x29DB), Category::ClosePunctuation),
	(CodepointRange::new(0x29DC, 0x29FB), Category::MathSymbol),
	(CodepointRange::new(0x29FC, 0x29FC), Category::OpenPunctuation),
	(CodepointRange::new(0x29FD, 0x29FD), Category::ClosePunctuation),
	(CodepointRange::new(0x29FE, 0x2AFF), Category::MathSymbol),
	(CodepointRange::new(0x2B00, 0x2B2F), Category::OtherSymbol),
	(CodepointRange::new(0x2B30, 0x2B44), Category::MathSymbol),
	(CodepointRange::new(0x2B45, 0x2B46), Category::OtherSymbol),
	(CodepointRange::new(0x2B47, 0x2B4C), Category::MathSymbol),
	(CodepointRange::new(0x2B4D, 0x2B73), Category::OtherSymbol),
	(CodepointRange::new(0x2B76, 0x2B95), Category::OtherSymbol),
	(CodepointRange::new(0x2B97, 0x2BFF), Category::OtherSymbol),
	(CodepointRange::new(0x2C00, 0x2C2F), Category::UppercaseLetter),
	(CodepointRange::new(0x2C30, 0x2C5F), Category::LowercaseLetter),
	(CodepointRange::new(0x2C60, 0x2C60), Category::UppercaseLetter),
	(CodepointRange::new(0x2C61, 0x2C61), Category::LowercaseLetter),
	(CodepointRange::new(0x2C62, 0x2C64), Category::UppercaseLetter),
	(CodepointRange::new(0x2C65, 0x2C66), Category::LowercaseLetter),
	(CodepointRange::new(0x2C67, 0x2C67), Category::UppercaseLetter),
	(CodepointRange::new(0x2C68, 0x2C68), Category::LowercaseLetter),
	(CodepointRange::new(0x2C69, 0x2C69), Category::UppercaseLetter),
	(CodepointRange::new(0x2C6A, 0x2C6A), Category::LowercaseLetter),
	(CodepointRange::new(0x2C6B, 0x2C6B), Category::UppercaseLetter),
	(CodepointRange::new(0x2C6C, 0x2C6C), Category::LowercaseLetter),
	(CodepointRange::new(0x2C6D, 0x2C70), Category::UppercaseLetter),
	(CodepointRange::new(0x2C71, 0x2C71), Category::LowercaseLetter),
	(CodepointRange::new(0x2C72, 0x2C72), Category::UppercaseLetter),
	(CodepointRange::new(0x2C73, 0x2C74), Category::LowercaseLetter),
	(CodepointRange::new(0x2C75, 0x2C75), Category::UppercaseLetter),
	(CodepointRange::new(0x2C76, 0x2C7B), Category::LowercaseLetter),
	(CodepointRange::new(0x2C7C, 0x2C7D), Category::ModifierLetter),
	(CodepointRange::new(0x2C7E, 0x2C80), Category::UppercaseLetter),
	(CodepointRange::new(0x2C81, 0x2C81), Category::LowercaseLetter),
	(CodepointRange::new(0x2C82, 0x2C82), Category::UppercaseLetter),
	(CodepointRange::new(0x2C83, 0x2C83), Category::LowercaseLetter),
	(CodepointRange::new(0x2C84, 0x2C84), Category::UppercaseLetter),
	(CodepointRange::new(0x2C85, 0x2C85), Category::LowercaseLetter),
	(CodepointRange::new(0x2C86, 0x2C86), Category::UppercaseLetter),
	(CodepointRange::new(0x2C87, 0x2C87), Category::LowercaseLetter),
	(CodepointRange::new(0x2C88, 0x2C88), Category::UppercaseLetter),
	(CodepointRange::new(0x2C89, 0x2C89), Category::LowercaseLetter),
	(CodepointRange::new(0x2C8A, 0x2C8A), Category::UppercaseLetter),
	(CodepointRange::new(0x2C8B, 0x2C8B), Category::LowercaseLetter),
	(CodepointRange::new(0x2C8C, 0x2C8C), Category::UppercaseLetter),
	(CodepointRange::new(0x2C8D, 0x2C8D), Category::LowercaseLetter),
	(CodepointRange::new(0x2C8E, 0x2C8E), Category::UppercaseLetter),
	(CodepointRange::new(0x2C8F, 0x2C8F), Category::LowercaseLetter),
	(CodepointRange::new(0x2C90, 0x2C90), Category::UppercaseLetter),
	(CodepointRange::new(0x2C91, 0x2C91), Category::LowercaseLetter),
	(CodepointRange::new(0x2C92, 0x2C92), Category::UppercaseLetter),
	(CodepointRange::new(0x2C93, 0x2C93), Category::LowercaseLetter),
	(CodepointRange::new(0x2C94, 0x2C94), Category::UppercaseLetter),
	(CodepointRange::new(0x2C95, 0x2C95), Category::LowercaseLetter),
	(CodepointRange::new(0x2C96, 0x2C96), Category::UppercaseLetter),
	(CodepointRange::new(0x2C97, 0x2C97), Category::LowercaseLetter),
	(CodepointRange::new(0x2C98, 0x2C98), Category::UppercaseLetter),
	(CodepointRange::new(0x2C99, 0x2C99), Category::LowercaseLetter),
	(CodepointRange::new(0x2C9A, 0x2C9A), Category::UppercaseLetter),
	(CodepointRange::new(0x2C9B, 0x2C9B), Category::LowercaseLetter),
	(CodepointRange::new(0x2C9C, 0x2C9C), Category::UppercaseLetter),
	(CodepointRange::new(0x2C9D, 0x2C9D), Category::LowercaseLetter),
	(CodepointRange::new(0x2C9E, 0x2C9E), Category::UppercaseLetter),
	(CodepointRange::new(0x2C9F, 0x2C9F), Category::LowercaseLetter),
	(CodepointRange::new(0x2CA0, 0x2CA0), Category::UppercaseLetter),
	(CodepointRange::new(0x2CA1, 0x2CA1), Category::LowercaseLetter),
	(CodepointRange::new(0x2CA2, 0x2CA2), Category::UppercaseLetter),
	(CodepointRange::new(0x2CA3, 0x2CA3), Category::LowercaseLetter),
	(CodepointRange::new(0x2CA4, 0x2CA4), Category::UppercaseLetter),
	(CodepointRange::new(0x2CA5, 0x2CA5), Category::LowercaseLetter),
	(CodepointRange::new(0x2CA6, 0x2CA6), Category::UppercaseLetter),
	(CodepointRange::new(0x2CA7, 0x2CA7), Category::LowercaseLetter),
	(CodepointRange::new(0x2CA8, 0x2CA8), Category::UppercaseLetter),
	(CodepointRange::new(0x2CA9, 0x2CA9), Category::LowercaseLetter),
	(CodepointRange::new(0x2CAA, 0x2CAA), Category::UppercaseLetter),
	(CodepointRange::new(0x2CAB, 0x2CAB), Category::LowercaseLetter),
	(CodepointRange::new(0x2CAC, 0x2CAC), Category::UppercaseLetter),
	(CodepointRange::new(0x2CAD, 0x2CAD), Category::LowercaseLetter),
	(CodepointRange::new(0x2CAE, 0x2CAE), Category::UppercaseLetter),
	(CodepointRange::new(0x2CAF, 0x2CAF), Category::LowercaseLetter),
	(CodepointRange::new(0x2CB0, 0x2CB0), Category::UppercaseLetter),
	(CodepointRange::new(0x2CB1, 0x2CB1), Category::LowercaseLetter),
	(CodepointRange::new(0x2CB2, 0x2CB2), Category::UppercaseLetter),
	(CodepointRange::new(0x2CB3, 0x2CB3), Category::LowercaseLetter),
	(CodepointRange::new(0x2CB4, 0x2CB4), Category::UppercaseLetter),
	(CodepointRange::new(0x2CB5, 0x2CB5), Category::LowercaseLetter),
	(CodepointRange::new(0x2CB6, 0x2CB6), Category::UppercaseLetter),
	(CodepointRange::new(0x2CB7, 0x2CB7), Category::LowercaseLetter),
	(CodepointRange::new(0x2CB8, 0x2CB8), Category::UppercaseLetter),
	(CodepointRange::new(0x2CB9, 0x2CB9), Category::LowercaseLetter),
	(CodepointRange::new(0x2CBA, 0x2CBA), Category::UppercaseLetter),
	(CodepointRange::new(0x2CBB, 0x2CBB), Category::LowercaseLetter),
	(CodepointRange::new(0x2CBC, 0x2CBC), Category::UppercaseLetter),
	(CodepointRange::new(0x2CBD, 0x2CBD), Category::LowercaseLetter),
	(CodepointRange::new(0x2CBE, 0x2CBE), Category::UppercaseLetter),
	(CodepointRange::new(0x2CBF, 0x2CBF), Category::LowercaseLetter),
	(CodepointRange::new(0x2CC0, 0x2CC0), Category::UppercaseLetter),
	(CodepointRange::new(0x2CC1, 0x2CC1), Category::LowercaseLetter),
	(CodepointRange::new(0x2CC2, 0x2CC2), Category::UppercaseLetter),
	(CodepointRange::new(0x2CC3, 0x2CC3), Category::LowercaseLetter),
	(CodepointRange::new(0x2CC4, 0x2CC4), Category::UppercaseLetter),
	(CodepointRange::new(0x2CC5, 0x2CC5), Category::LowercaseLetter),
	(CodepointRange::new(0x2CC6, 0x2CC6), Category::UppercaseLetter),
	(CodepointRange::new(0x2CC7, 0x2CC7), Category::LowercaseLetter),
	(CodepointRange::new(0x2CC8, 0x2CC8), Category::UppercaseLetter),
	(CodepointRange::new(0x2CC9, 0x2CC9), Category::LowercaseLetter),
	(CodepointRange::new(0x2CCA, 0x2CCA), Category::UppercaseLetter),
	(CodepointRange::new(0x2CCB, 0x2CCB), Category::LowercaseLetter),
	(CodepointRange::new(0x2CCC, 0x2CCC), Category::UppercaseLetter),
	(CodepointRange::new(0x2CCD, 0x2CCD), Category::LowercaseLetter),
	(CodepointRange::new(0x2CCE, 0x2CCE), Category::UppercaseLetter),
	(CodepointRange::new(0x2CCF, 0x2CCF), Category::LowercaseLetter),
	(CodepointRange::new(0x2CD0, 0x2CD0), Category::UppercaseLetter),
	(CodepointRange::new(0x2CD1, 0x2CD1), Category::LowercaseLetter),
	(CodepointRange::new(0x2CD2, 0x2CD2), Category::UppercaseLetter),
	(CodepointRange::new(0x2CD3, 0x2CD3), Category::LowercaseLetter),
	(CodepointRange::new(0x2CD4, 0x2CD4), Category::UppercaseLetter),
	(CodepointRange::new(0x2CD5, 0x2CD5), Category::LowercaseLetter),
	(CodepointRange::new(0x2CD6, 0x2CD6), Category::UppercaseLetter),
	(CodepointRange::new(0x2CD7, 0x2CD7), Category::LowercaseLetter),
	(CodepointRange::new(0x2CD8, 0x2CD8), Category::UppercaseLetter),
	(CodepointRange::new(0x2CD9, 0x2CD9), Category::LowercaseLetter),
	(CodepointRange::new(0x2CDA, 0x2CDA), Category::UppercaseLetter),
	(CodepointRange::new(0x2CDB, 0x2CDB), Category::LowercaseLetter),
	(CodepointRange::new(0x2CDC, 0x2CDC), Category::UppercaseLetter),
	(CodepointRange::new(0x2CDD, 0x2CDD), Category::LowercaseLetter),
	(CodepointRange::new(0x2CDE, 0x2CDE), Category::UppercaseLetter),
	(CodepointRange::new(0x2CDF, 0x2CDF), Category::LowercaseLetter),
	(CodepointRange::new(0x2CE0, 0x2CE0), Category::UppercaseLetter),
	(CodepointRange::new(0x2CE1, 0x2CE1), Category::LowercaseLetter),
	(CodepointRange::new(0x2CE2, 0x2CE2), Category::UppercaseLetter),
	(CodepointRange::new(0x2CE3, 0x2CE4), Category::LowercaseLetter),
	(CodepointRange::new(0x2CE5, 0x2CEA), Category::OtherSymbol),
	(CodepointRange::new(0x2CEB, 0x2CEB), Category::UppercaseLetter),
	(CodepointRange::new(0x2CEC, 0x2CEC), Category::LowercaseLetter),
	(CodepointRange::new(0x2CED, 0x2CED), Category::UppercaseLetter),
	(CodepointRange::new(0x2CEE, 0x2CEE), Category::LowercaseLetter),
	(CodepointRange::new(0x2CEF, 0x2CF1), Category::NonspacingMark),
	(CodepointRange::new(0x2CF2, 0x2CF2), Category::UppercaseLetter),
	(CodepointRange::new(0x2CF3, 0x2CF3), Category::LowercaseLetter),
	(CodepointRange::new(0x2CF9, 0x2CFC), Category::OtherPunctuation),
	(CodepointRange::new(0x2CFD, 0x2CFD), Category::OtherNumber),
	(CodepointRange::new(0x2CFE, 0x2CFF), Category::OtherPunctuation),
	(CodepointRange::new(0x2D00, 0x2D25), Category::LowercaseLetter),
	(CodepointRange::new(0x2D27, 0x2D27), Category::LowercaseLetter),
	(CodepointRange::new(0x2D2D, 0x2D2D), Category::LowercaseLetter),
	(CodepointRange::new(0x2D30, 0x2D67), Category::OtherLetter),
	(CodepointRange::new(0x2D6F, 0x2D6F), Category::ModifierLetter),
	(CodepointRange::new(0x2D70, 0x2D70), Category::OtherPunctuation),
	(CodepointRange::new(0x2D7F, 0x2D7F), Category::NonspacingMark),
	(CodepointRange::new(0x2D80, 0x2D96), Category::OtherLetter),
	(CodepointRange::new(0x2DA0, 0x2DA6), Category::OtherLetter),
	(CodepointRange::new(0x2DA8, 0x2DAE), Category::OtherLetter),
	(CodepointRange::new(0x2DB0, 0x2DB6), Category::OtherLetter),
	(CodepointRange::new(0x2DB8, 0x2DBE), Category::OtherLetter),
	(CodepointRange::new(0x2DC0, 0x2DC6), Category::OtherLetter),
	(CodepointRange::new(0x2DC8, 0x2DCE), Category::OtherLetter),
	(CodepointRange::new(0x2DD0, 0x2DD6), Category::OtherLetter),
	(CodepointRange::new(0x2DD8, 0x2DDE), Category::OtherLetter),
	(CodepointRange::new(0x2DE0, 0x2DFF), Category::NonspacingMark),
	(CodepointRange::new(0x2E00, 0x2E01), Category::OtherPunctuation),
	(CodepointRange::new(0x2E02, 0x2E02), Category::InitialPunctuation),
	(CodepointRange::new(0x2E03, 0x2E03), Category::FinalPunctuation),
	(CodepointRange::new(0x2E04, 0x2E04), Category::InitialPunctuation),
	(CodepointRange::new(0x2E05, 0x2E05), Category::FinalPunctuation),
	(CodepointRange::new(0x2E06, 0x2E08), Category::OtherPunctuation),
	(CodepointRange::new(0x2E09, 0x2E09), Category::InitialPunctuation),
	(CodepointRange::new(0x2E0A, 0x2E0A), Category::FinalPunctuation),
	(CodepointRange::new(0x2E0B, 0x2E0B), Category::OtherPunctuation),
	(CodepointRange::new(0x2E0C, 0x2E0C), Category::InitialPunctuation),
	(CodepointRange::new(0x2E0D, 0x2E0D), Category::FinalPunctuation),
	(CodepointRange::new(0x2E0E, 0x2E16), Category::OtherPunctuation),
	(CodepointRange::new(0x2E17, 0x2E17), Category::DashPunctuation),
	(CodepointRange::new(0x2E18, 0x2E19), Category::OtherPunctuation),
	(CodepointRange::new(0x2E1A, 0x2E1A), Category::DashPunctuation),
	(CodepointRange::new(0x2E1B, 0x2E1B), Category::OtherPunctuation),
	(CodepointRange::new(0x2E1C, 0x2E1C), Category::InitialPunctuation),
	(CodepointRange::new(0x2E1D, 0x2E1D), Category::FinalPunctuation),
	(CodepointRange::new(0x2E1E, 0x2E1F), Category::OtherPunctuation),
	(CodepointRange::new(0x2E20, 0x2E20), Category::InitialPunctuation),
	(CodepointRange::new(0x2E21, 0x2E21), Category::FinalPunctuation),
	(CodepointRange::new(0x2E22, 0x2E22), Category::OpenPunctuation),
	(CodepointRange::new(0x2E23, 0x2E23), Category::ClosePunctuation),
	(CodepointRange::new(0x2E24, 0x2E24), Category::OpenPunctuation),
	(CodepointRange::new(0x2E25, 0x2E25), Category::ClosePunctuation),
	(CodepointRange::new(0x2E26, 0x2E26), Category::OpenPunctuation),
	(CodepointRange::new(0x2E27, 0x2E27), Category::ClosePunctuation),
	(CodepointRange::new(0x2E28, 0x2E28), Category::OpenPunctuation),
	(CodepointRange::new(0x2E29, 0x2E29), Category::ClosePunctuation),
	(CodepointRange::new(0x2E2A, 0x2E2E), Category::OtherPunctuation),
	(CodepointRange::new(0x2E2F, 0x2E2F), Category::ModifierLetter),
	(CodepointRange::new(0x2E30, 0x2E39), Category::OtherPunctuation),
	(CodepointRange::new(0x2E3A, 0x2E3B), Category::DashPunctuation),
	(CodepointRange::new(0x2E3C, 0x2E3F), Category::OtherPunctuation),
	(CodepointRange::new(0x2E40, 0x2E40), Category::DashPunctuation),
	(CodepointRange::new(0x2E41, 0x2E41), Category::OtherPunctuation),
	(CodepointRange::new(0x2E42, 0x2E42), Category::OpenPunctuation),
	(CodepointRange::new(0x2E43, 0x2E4F), Category::OtherPunctuation),
	(CodepointRange::new(0x2E50, 0x2E51), Category::OtherSymbol),
	(CodepointRange::new(0x2E52, 0x2E54), Category::OtherPunctuation),
	(CodepointRange::new(0x2E55, 0x2E55), Category::OpenPunctuation),
	(CodepointRange::new(0x2E56, 0x2E56), Category::ClosePunctuation),
	(CodepointRange::new(0x2E57, 0x2E57), Category::OpenPunctuation),
	(CodepointRange::new(0x2E58, 0x2E58), Category::ClosePunctuation),
	(CodepointRange::new(0x2E59, 0x2E59), Category::OpenPunctuation),
	(CodepointRange::new(0x2E5A, 0x2E5A), Category::ClosePunctuation),
	(CodepointRange::new(0x2E5B, 0x2E5B), Category::OpenPunctuation),
	(CodepointRange::new(0x2E5C, 0x2E5C), Category::ClosePunctuation),
	(CodepointRange::new(0x2E5D, 0x2E5D), Category::DashPunctuation),
	(CodepointRange::new(0x2E80, 0x2E99), Category::OtherSymbol),
	(CodepointRange::new(0x2E9B, 0x2EF3), Category::OtherSymbol),
	(CodepointRange::new(0x2F00, 0x2FD5), Category::OtherSymbol),
	(CodepointRange::new(0x2FF0, 0x2FFB), Category::OtherSymbol),
	(CodepointRange::new(0x3000, 0x3000), Category::SpaceSeparator),
	(CodepointRange::new(0x3001, 0x3003), Category::OtherPunctuation),
	(CodepointRange::new(0x3004, 0x3004), Category::OtherSymbol),
	(CodepointRange::new(0x3005, 0x3005), Category::ModifierLetter),
	(CodepointRange::new(0x3006, 0x3006), Category::OtherLetter),
	(CodepointRange::new(0x3007, 0x3007), Category::LetterNumber),
	(CodepointRange::new(0x3008, 0x3008), Category::OpenPunctuation),
	(CodepointRange::new(0x3009, 0x3009), Category::ClosePunctuation),
	(CodepointRange::new(0x300A, 0x300A), Category::OpenPunctuation),
	(CodepointRange::new(0x300B, 0x300B), Category::ClosePunctuation),
	(CodepointRange::new(0x300C, 0x300C), Category::OpenPunctuation),
	(CodepointRange::new(0x300D, 0x300D), Category::ClosePunctuation),
	(CodepointRange::new(0x300E, 0x300E), Category::OpenPunctuation),
	(CodepointRange::new(0x300F, 0x300F), Category::ClosePunctuation),
	(CodepointRange::new(0x3010, 0x3010), Category::OpenPunctuation),
	(CodepointRange::new(0x3011, 0x3011), Category::ClosePunctuation),
	(CodepointRange::new(0x3012, 0x3013), Category::OtherSymbol),
	(CodepointRange::new(0x3014, 0x3014), Category::OpenPunctuation),
	(CodepointRange::new(0x3015, 0x3015), Category::ClosePunctuation),
	(CodepointRange::new(0x3016, 0x3016), Category::OpenPunctuation),
	(CodepointRange::new(0x3017, 0x3017), Category::ClosePunctuation),
	(CodepointRange::new(0x3018, 0x3018), Category::OpenPunctuation),
	(CodepointRange::new(0x3019, 0x3019), Category::ClosePunctuation),
	(CodepointRange::new(0x301A, 0x301A), Category::OpenPunctuation),
	(CodepointRange::new(0x301B, 0x301B), Category::ClosePunctuation),
	(CodepointRange::new(0x301C, 0x301C), Category::DashPunctuation),
	(CodepointRange::new(0x301D, 0x301D), Category::OpenPunctuation),
	(CodepointRange::new(0x301E, 0x301F), Category::ClosePunctuation),
	(CodepointRange::new(0x3020, 0x3020), Category::OtherSymbol),
	(CodepointRange::new(0x3021, 0x3029), Category::LetterNumber),
	(CodepointRange::new(0x302A, 0x302D), Category::NonspacingMark),
	(CodepointRange::new(0x302E, 0x302F), Category::SpacingMark),
	(CodepointRange::new(0x3030, 0x3030), Category::DashPunctuation),
	(CodepointRange::new(0x3031, 0x3035), Category::ModifierLetter),
	(CodepointRange::new(0x3036, 0x3037), Category::OtherSymbol),
	(CodepointRange::new(0x3038, 0x303A), Category::LetterNumber),
	(CodepointRange::new(0x303B, 0x303B), Category::ModifierLetter),
	(CodepointRange::new(0x303C, 0x303C), Category::OtherLetter),
	(CodepointRange::new(0x303D, 0x303D), Category::OtherPunctuation),
	(CodepointRange::new(0x303E, 0x303F), Category::OtherSymbol),
	(CodepointRange::new(0x3041, 0x3096), Category::OtherLetter),
	(CodepointRange::new(0x3099, 0x309A), Category::NonspacingMark),
	(CodepointRange::new(0x309B, 0x309C), Category::ModifierSymbol),
	(CodepointRange::new(0x309D, 0x309E), Category::ModifierLetter),
	(CodepointRange::new(0x309F, 0x309F), Category::OtherLetter),
	(CodepointRange::new(0x30A0, 0x30A0), Category::DashPunctuation),
	(CodepointRange::new(0x30A1, 0x30FA), Category::OtherLetter),
	(CodepointRange::new(0x30FB, 0x30FB), Category::OtherPunctuation),
	(CodepointRange::new(0x30FC, 0x30FE), Category::ModifierLetter),
	(CodepointRange::new(0x30FF, 0x30FF), Category::OtherLetter),
	(CodepointRange::new(0x3105, 0x312F), Category::OtherLetter),
	(CodepointRange::new(0x3131, 0x318E), Category::OtherLetter),
	(CodepointRange::new(0x3190, 0x3191), Category::OtherSymbol),
	(CodepointRange::new(0x3192, 0x3195), Category::OtherNumber),
	(CodepointRange::new(0x3196, 0x319F), Category::OtherSymbol),
	(CodepointRange::new(0x31A0, 0x31BF), Category::OtherLetter),
	(CodepointRange::new(0x31C0, 0x31E3), Category::OtherSymbol),
	(CodepointRange::new(0x31F0, 0x31FF), Category::OtherLetter),
	(CodepointRange::new(0x3200, 0x321E), Category::OtherSymbol),
	(CodepointRange::new(0x3220, 0x3229), Category::OtherNumber),
	(CodepointRange::new(0x322A, 0x3247), Category::OtherSymbol),
	(CodepointRange::new(0x3248, 0x324F), Category::OtherNumber),
	(CodepointRange::new(0x3250, 0x3250), Category::OtherSymbol),
	(CodepointRange::new(0x3251, 0x325F), Category::OtherNumber),
	(CodepointRange::new(0x3260, 0x327F), Category::OtherSymbol),
	(CodepointRange::new(0x3280, 0x3289), Category::OtherNumber),
	(CodepointRange::new(0x328A, 0x32B0), Category::OtherSymbol),
	(CodepointRange::new(0x32B1, 0x32BF), Category::OtherNumber),
	(CodepointRange::new(0x32C0, 0x33FF), Category::OtherSymbol),
	(CodepointRange::new(0x3400, 0x4DBF), Category::OtherLetter),
	(CodepointRange::new(0x4DC0, 0x4DFF), Category::OtherSymbol),
	(CodepointRange::new(0x4E00, 0xA014), Category::OtherLetter),
	(CodepointRange::new(0xA015, 0xA015), Category::ModifierLetter),
	(CodepointRange::new(0xA016, 0xA48C), Category::OtherLetter),
	(CodepointRange::new(0xA490, 0xA4C6), Category::OtherSymbol),
	(CodepointRange::new(0xA4D0, 0xA4F7), Category::OtherLetter),
	(CodepointRange::new(0xA4F8, 0xA4FD), Category::ModifierLetter),
	(CodepointRange::new(0xA4FE, 0xA4FF), Category::OtherPunctuation),
	(CodepointRange::new(0xA500, 0xA60B), Category::OtherLetter),
	(CodepointRange::new(0xA60C, 0xA60C), Category::ModifierLetter),
	(CodepointRange::new(0xA60D, 0xA60F), Category::OtherPunctuation),
	(CodepointRange::new(0xA610, 0xA61F), Category::OtherLetter),
	(CodepointRange::new(0xA620, 0xA629), Category::DecimalNumber),
	(CodepointRange::new(0xA62A, 0xA62B), Category::OtherLetter),
	(CodepointRange::new(0xA640, 0xA640), Category::UppercaseLetter),
	(CodepointRange::new(0xA641, 0xA641), Category::LowercaseLetter),
	(CodepointRange::new(0xA642, 0xA642), Category::UppercaseLetter),
	(CodepointRange::new(0xA643, 0xA643), Category::LowercaseLetter),
	(CodepointRange::new(0xA644, 0xA644), Category::UppercaseLetter),
	(CodepointRange::new(0xA645, 0xA645), Category::LowercaseLetter),
	(CodepointRange::new(0xA646, 0xA646), Category::UppercaseLetter),
	(CodepointRange::new(0xA647, 0xA647), Category::LowercaseLetter),
	(CodepointRange::new(0xA648, 0xA648), Category::UppercaseLetter),
	(CodepointRange::new(0xA649, 0xA649), Category::LowercaseLetter),
	(CodepointRange::new(0xA64A, 0xA64A), Category::UppercaseLetter),
	(CodepointRange::new(0xA64B, 0xA64B), Category::LowercaseLetter),
	(CodepointRange::new(0xA64C, 0xA64C), Category::UppercaseLetter),
	(CodepointRange::new(0xA64D, 0xA64D), Category::LowercaseLetter),
	(CodepointRange::new(0xA64E, 0xA64E), Category::UppercaseLetter),
	(CodepointRange::new(0xA64F, 0xA64F), Category::LowercaseLetter),
	(CodepointRange::new(0xA650, 0xA650), Category::UppercaseLetter),
	(CodepointRange::new(0xA651, 0xA651), Category::LowercaseLetter),
	(CodepointRange::new(0xA652, 0xA652), Category::UppercaseLetter),
	(CodepointRange::new(0xA653, 0xA653), Category::LowercaseLetter),
	(CodepointRange::new(0xA654, 0xA654), Category::UppercaseLetter),
	(CodepointRange::new(0xA655, 0xA655), Category::LowercaseLetter),
	(CodepointRange::new(0xA656, 0xA656), Category::UppercaseLetter),
	(CodepointRange::new(0xA657, 0xA657), Category::LowercaseLetter),
	(CodepointRange::new(0xA658, 0xA658), Category::UppercaseLetter),
	(CodepointRange::new(0xA659, 0xA659), Category::LowercaseLetter),
	(CodepointRange::new(0xA65A, 0xA65A), Category::UppercaseLetter),
	(CodepointRange::new(0xA65B, 0xA65B), Category::LowercaseLetter),
	(CodepointRange::new(0xA65C, 0xA65C), Category::UppercaseLetter),
	(CodepointRange::new(0xA65D, 0xA65D), Category::LowercaseLetter),
	(CodepointRange::new(0xA65E, 0xA65E), Category::UppercaseLetter),
	(CodepointRange::new(0xA65F, 0xA65F), Category::LowercaseLetter),
	(CodepointRange::new(0xA660, 0xA660), Category::UppercaseLetter),
	(CodepointRange::new(0xA661, 0xA661), Category::LowercaseLetter),
	(CodepointRange::new(0xA662, 0xA662), Category::UppercaseLetter),
	(CodepointRange::new(0xA663, 0xA663), Category::LowercaseLetter),
	(CodepointRange::new(0xA664, 0xA664), Category::UppercaseLetter),
	(CodepointRange::new(0xA665, 0xA665), Category::LowercaseLetter),
	(CodepointRange::new(0xA666, 0xA666), Category::UppercaseLetter),
	(CodepointRange::new(0xA667, 0xA667), Category::LowercaseLetter),
	(CodepointRange::new(0xA668, 0xA668), Category::UppercaseLetter),
	(CodepointRange::new(0xA669, 0xA669), Category::LowercaseLetter),
	(CodepointRange::new(0xA66A, 0xA66A), Category::UppercaseLetter),
	(CodepointRange::new(0xA66B, 0xA66B), Category::LowercaseLetter),
	(CodepointRange::new(0xA66C, 0xA66C), Category::UppercaseLetter),
	(CodepointRange::new(0xA66D, 0xA66D), Category::LowercaseLetter),
	(CodepointRange::new(0xA66E, 0xA66E), Category::OtherLetter),
	(CodepointRange::new(0xA66F, 0xA66F), Category::NonspacingMark),
	(CodepointRange::new(0xA670, 0xA672), Category::EnclosingMark),
	(CodepointRange::new(0xA673, 0xA673), Category::OtherPunctuation),
	(CodepointRange::new(0xA674, 0xA67D), Category::NonspacingMark),
	(CodepointRange::new(0xA67E, 0xA67E), Category::OtherPunctuation),
	(CodepointRange::new(0xA67F, 0xA67F), Category::ModifierLetter),
	(CodepointRange::new(0xA680, 0xA680), Category::UppercaseLetter),
	(CodepointRange::new(0xA681, 0xA681), Category::LowercaseLetter),
	(CodepointRange::new(0xA682, 0xA682), Category::UppercaseLetter),
	(CodepointRange::new(0xA683, 0xA683), Category::LowercaseLetter),
	(CodepointRange::new(0xA684, 0xA684), Category::UppercaseLetter),
	(CodepointRange::new(0xA685, 0xA685), Category::LowercaseLetter),
	(CodepointRange::new(0xA686, 0xA686), Category::UppercaseLetter),
	(CodepointRange::new(0xA687, 0xA687), Category::LowercaseLetter),
	(CodepointRange::new(0xA688, 0xA688), Category::UppercaseLetter),
	(CodepointRange::new(0xA689, 0xA689), Category::LowercaseLetter),
	(CodepointRange::new(0xA68A, 0xA68A), Category::UppercaseLetter),
	(CodepointRange::new(0xA68B, 0xA68B), Category::LowercaseLetter),
	(CodepointRange::new(0xA68C, 0xA68C), Category::UppercaseLetter),
	(CodepointRange::new(0xA68D, 0xA68D), Category::LowercaseLetter),
	(CodepointRange::new(0xA68E, 0xA68E), Category::UppercaseLetter),
	(CodepointRange::new(0xA68F, 0xA68F), Category::LowercaseLetter),
	(CodepointRange::new(0xA690, 0xA690), Category::UppercaseLetter),
	(CodepointRange::new(0xA691, 0xA691), Category::LowercaseLetter),
	(CodepointRange::new(0xA692, 0xA692), Category::UppercaseLetter),
	(CodepointRange::new(0xA693, 0xA693), Category::LowercaseLetter),
	(CodepointRange::new(0xA694, 0xA694), Category::UppercaseLetter),
	(CodepointRange::new(0xA695, 0xA695), Category::LowercaseLetter),
	(CodepointRange::new(0xA696, 0xA696), Category::UppercaseLetter),
	(CodepointRange::new(0xA697, 0xA697), Category::LowercaseLetter),
	(CodepointRange::new(0xA698, 0xA698), Category::UppercaseLetter),
	(CodepointRange::new(0xA699, 0xA699), Category::LowercaseLetter),
	(CodepointRange::new(0xA69A, 0xA69A), Category::UppercaseLetter),
	(CodepointRange::new(0xA69B, 0xA69B), Category::LowercaseLetter),
	(CodepointRange::new(0xA69C, 0xA69D), Category::ModifierLetter),
	(CodepointRange::new(0xA69E, 0xA69F), Category::NonspacingMark),
	(CodepointRange::new(0xA6A0, 0xA6E5), Category::OtherLetter),
	(CodepointRange::new(0xA6E6, 0xA6EF), Category::LetterNumber),
	(CodepointRange::new(0xA6F0, 0xA6F1), Category::NonspacingMark),
	(CodepointRange::new(0xA6F2, 0xA6F7), Category::OtherPunctuation),
	(CodepointRange::new(0xA700, 0xA716), Category::ModifierSymbol),
	(CodepointRange::new(0xA717, 0xA71F), Category::ModifierLetter),
	(CodepointRange::new(0xA720, 0xA721), Category::ModifierSymbol),
	(CodepointRange::new(0xA722, 0xA722), Category::UppercaseLetter),
	(CodepointRange::new(0xA723, 0xA723), Category::LowercaseLetter),
	(CodepointRange::new(0xA724, 0xA724), Category::UppercaseLetter),
	(CodepointRange::new(0xA725, 0xA725), Category::LowercaseLetter),
	(CodepointRange::new(0xA726, 0xA726), Category::UppercaseLetter),
	(CodepointRange::new(0xA727, 0xA727), Category::LowercaseLetter),
	(CodepointRange::new(0xA728, 0xA728), Category::UppercaseLetter),
	(CodepointRange::new(0xA729, 0xA729), Category::LowercaseLetter),
	(CodepointRange::new(0xA72A, 0xA72A), Category::UppercaseLetter),
	(CodepointRange::new(0xA72B, 0xA72B), Category::LowercaseLetter),
	(CodepointRange::new(0xA72C, 0xA72C), Category::UppercaseLetter),
	(CodepointRange::new(0xA72D, 0xA72D), Category::LowercaseLetter),
	(CodepointRange::new(0xA72E, 0xA72E), Category::UppercaseLetter),
	(CodepointRange::new(0xA72F, 0xA731), Category::LowercaseLetter),
	(CodepointRange::new(0xA732, 0xA732), Category::UppercaseLetter),
	(CodepointRange::new(0xA733, 0xA733), Category::LowercaseLetter),
	(CodepointRange::new(0xA734, 0xA734), Category::UppercaseLetter),
	(CodepointRange::new(0xA735, 0xA735), Category::LowercaseLetter),
	(CodepointRange::new(0xA736, 0xA736), Category::UppercaseLetter),
	(CodepointRange::new(0xA737, 0xA737), Category::LowercaseLetter),
	(CodepointRange::new(0xA738, 0xA738), Category::UppercaseLetter),
	(CodepointRange::new(0xA739, 0xA739), Category::LowercaseLetter),
	(CodepointRange::new(0xA73A, 0xA73A), Category::UppercaseLetter),
	(CodepointRange::new(0xA73B, 0xA73B), Category::LowercaseLetter),
	(CodepointRange::new(0xA73C, 0xA73C), Category::UppercaseLetter),
	(CodepointRange::new(0xA73D, 0xA73D), Category::LowercaseLetter),
	(CodepointRange::new(0xA73E, 0xA73E), Category::UppercaseLetter),
	(CodepointRange::new(0xA73F, 0xA73F), Category::LowercaseLetter),
	(CodepointRange::new(0xA740, 0xA740), Category::UppercaseLetter),
	(CodepointRange::new(0xA741, 0xA741), Category::LowercaseLetter),
	(CodepointRange::new(0xA742, 0xA742), Category::UppercaseLetter),
	(CodepointRange::new(0xA743, 0xA743), Category::LowercaseLetter),
	(CodepointRange::new(0xA744, 0xA744), Category::UppercaseLetter),
	(CodepointRange::new(0xA745, 0xA745), Category::LowercaseLetter),
	(CodepointRange::new(0xA746, 0xA746), Category::UppercaseLetter),
	(CodepointRange::new(0xA747, 0xA747), Category::LowercaseLetter),
	(CodepointRange::new(0xA748, 0xA748), Category::UppercaseLetter),
	(CodepointRange::new(0xA749, 0xA749), Category::LowercaseLetter),
	(CodepointRange::new(0xA74A, 0xA74A), Category::UppercaseLetter),
	(CodepointRange::new(0xA74B, 0xA74B), Category::LowercaseLetter),
	(CodepointRange::new(0xA74C, 0xA74C), Category::UppercaseLetter),
	(CodepointRange::new(0xA74D, 0xA74D), Category::LowercaseLetter),
	(CodepointRange::new(0xA74E, 0xA74E), Category::UppercaseLetter),
	(CodepointRange::new(0xA74F, 0xA74F), Category::LowercaseLetter),
	(CodepointRange::new(0xA750, 0xA750), Category::UppercaseLetter),
	(CodepointRange::new(0xA751, 0xA751), Category::LowercaseLetter),
	(CodepointRange::new(0xA752, 0xA752), Category::UppercaseLetter),
	(CodepointRange::new(0xA753, 0xA753), Category::LowercaseLetter),
	(CodepointRange::new(0xA754, 0xA754), Category::UppercaseLetter),
	(CodepointRange::new(0xA755, 0xA755), Category::LowercaseLetter),
	(CodepointRange::new(0xA756, 0xA756), Category::UppercaseLetter),
	(CodepointRange::new(0xA757, 0xA757), Category::LowercaseLetter),
	(CodepointRange::new(0xA758, 0xA758), Category::UppercaseLetter),
	(CodepointRange::new(0xA759, 0xA759), Category::LowercaseLetter),
	(CodepointRange::new(0xA75A, 0xA75A), Category::UppercaseLetter),
	(CodepointRange::new(0xA75B, 0xA75B), Category::LowercaseLetter),
	(CodepointRange::new(0xA75C, 0xA75C), Category::UppercaseLetter),
	(CodepointRange::new(0xA75D, 0xA75D), Category::LowercaseLetter),
	(CodepointRange::new(0xA75E, 0xA75E), Category::UppercaseLetter),
	(CodepointRange::new(0xA75F, 0xA75F), Category::LowercaseLetter),
	(CodepointRange::new(0xA760, 0xA760), Category::UppercaseLetter),
	(CodepointRange::new(0xA761, 0xA761), Category::LowercaseLetter),
	(CodepointRange::new(0xA762, 0xA762), Category::UppercaseLetter),
	(CodepointRange::new(0xA763, 0xA763), Category::LowercaseLetter),
	(CodepointRange::new(0xA764, 0xA764), Category::UppercaseLetter),
	(CodepointRange::new(0xA765, 0xA765), Category::LowercaseLetter),
	(CodepointRange::new(0xA766, 0xA766), Category::UppercaseLetter),
	(CodepointRange::new(0xA767, 0xA767), Category::LowercaseLetter),
	(CodepointRange::new(0xA768, 0xA768), Category::UppercaseLetter),
	(CodepointRange::new(0xA769, 0xA769), Category::LowercaseLetter),
	(CodepointRange::new(0xA76A, 0xA76A), Category::UppercaseLetter),
	(CodepointRange::new(0xA76B, 0xA76B), Category::LowercaseLetter),
	(CodepointRange::new(0xA76C, 0xA76C), Category::UppercaseLetter),
	(CodepointRange::new(0xA76D, 0xA76D), Category::LowercaseLetter),
	(CodepointRange::new(0xA76E, 0xA76E), Category::UppercaseLetter),
	(CodepointRange::new(0xA76F, 0xA76F), Category::LowercaseLetter),
	(CodepointRange::new(0xA770, 0xA770), Category::ModifierLetter),
	(CodepointRange::new(0xA771, 0xA778), Category::LowercaseLetter),
	(CodepointRange::new(0xA779, 0xA779), Category::UppercaseLetter),
	(CodepointRange::new(0xA77A, 0xA77A), Category::LowercaseLetter),
	(CodepointRange::new(0xA77B, 0xA77B), Category::UppercaseLetter),
	(CodepointRange::new(0xA77C, 0xA77C), Category::LowercaseLetter),
	(CodepointRange::new(0xA77D, 0xA77E), Category::UppercaseLetter),
	(CodepointRange::new(0xA77F, 0xA77F), Category::LowercaseLetter),
	(CodepointRange::new(0xA780, 0xA780), Category::UppercaseLetter),
	(CodepointRange::new(0xA781, 0xA781), Category::LowercaseLetter),
	(CodepointRange::new(0xA782, 0xA782), Category::UppercaseLetter),
	(CodepointRange::new(0xA783, 0xA783), Category::LowercaseLetter),
	(CodepointRange::new(0xA784, 0xA784), Category::UppercaseLetter),
	(CodepointRange::new(0xA785, 0xA785), Category::LowercaseLetter),
	(CodepointRange::new(0xA786, 0xA786), Category::UppercaseLetter),
	(CodepointRange::new(0xA787, 0xA787), Category::LowercaseLetter),
	(CodepointRange::new(0xA788, 0xA788), Category::ModifierLetter),
	(CodepointRange::new(0xA789, 0xA78A), Category::ModifierSymbol),
	(CodepointRange::new(0xA78B, 0xA78B), Category::UppercaseLetter),
	(CodepointRange::new(0xA78C, 0xA78C), Category::LowercaseLetter),
	(CodepointRange::new(0xA78D, 0xA78D), Category::UppercaseLetter),
	(CodepointRange::new(0xA78E, 0xA78E), Category::LowercaseLetter),
	(CodepointRange::new(0xA78F, 0xA78F), Category::OtherLetter),
	(CodepointRange::new(0xA790, 0xA790), Category::UppercaseLetter),
	(CodepointRange::new(0xA791, 0xA791), Category::LowercaseLetter),
	(CodepointRange::new(0xA792, 0xA792), Category::UppercaseLetter),
	(CodepointRange::new(0xA793, 0xA795), Category::LowercaseLetter),
	(CodepointRange::new(0xA796, 0xA796), Category::UppercaseLetter),
	(CodepointRange::new(0xA797, 0xA797), Category::LowercaseLetter),
	(CodepointRange::new(0xA798, 0xA798), Category::UppercaseLetter),
	(CodepointRange::new(0xA799, 0xA799), Category::LowercaseLetter),
	(CodepointRange::new(0xA79A, 0xA79A), Category::UppercaseLetter),
	(CodepointRange::new(0xA79B, 0xA79B), Category::LowercaseLetter),
	(CodepointRange::new(0xA79C, 0xA79C), Category::UppercaseLetter),
	(CodepointRange::new(0xA79D, 0xA79D), Category::LowercaseLetter),
	(CodepointRange::new(0xA79E, 0xA79E), Category::UppercaseLetter),
	(CodepointRange::new(0xA79F, 0xA79F), Category::LowercaseLetter),
	(CodepointRange::new(0xA7A0, 0xA7A0), Category::UppercaseLetter),
	(CodepointRange::new(0xA7A1, 0xA7A1), Category::LowercaseLetter),
	(CodepointRange::new(0xA7A2, 0xA7A2), Category::UppercaseLetter),
	(CodepointRange::new(0xA7A3, 0xA7A3), Category::LowercaseLetter),
	(CodepointRange::new(0xA7A4, 0xA7A4), Category::UppercaseLetter),
	(CodepointRange::new(0xA7A5, 0xA7A5), Category::LowercaseLetter),
	(CodepointRange::new(0xA7A6, 0xA7A6), Category::UppercaseLetter),
	(CodepointRange::new(0xA7A7, 0xA7A7), Category::LowercaseLetter),
	(CodepointRange::new(0xA7A8, 0xA7A8), Category::UppercaseLetter),
	(CodepointRange::new(0xA7A9, 0xA7A9), Category::LowercaseLetter),
	(CodepointRange::new(0xA7AA, 0xA7AE), Category::UppercaseLetter),
	(CodepointRange::new(0xA7AF, 0xA7AF), Category::LowercaseLetter),
	(CodepointRange::new(0xA7B0, 0xA7B4), Category::UppercaseLetter),
	(CodepointRange::new(0xA7B5, 0xA7B5), Category::LowercaseLetter),
	(CodepointRange::new(0xA7B6, 0xA7B6), Category::UppercaseLetter),
	(CodepointRange::new(0xA7B7, 0xA7B7), Category::LowercaseLetter),
	(CodepointRange::new(0xA7B8, 0xA7B8), Category::UppercaseLetter),
	(CodepointRange::new(0xA7B9, 0xA7B9), Category::LowercaseLetter),
	(CodepointRange::new(0xA7BA, 0xA7BA), Category::UppercaseLetter),
	(CodepointRange::new(0xA7BB, 0xA7BB), Category::LowercaseLetter),
	(CodepointRange::new(0xA7BC, 0xA7BC), Category::UppercaseLetter),
	(CodepointRange::new(0xA7BD, 0xA7BD), Category::LowercaseLetter),
	(CodepointRange::new(0xA7BE, 0xA7BE), Category::UppercaseLetter),
	(CodepointRange::new(0xA7BF, 0xA7BF), Category::LowercaseLetter),
	(CodepointRange::new(0xA7C0, 0xA7C0), Category::UppercaseLetter),
	(CodepointRange::new(0xA7C1, 0xA7C1), Category::LowercaseLetter),
	(CodepointRange::new(0xA7C2, 0xA7C2), Category::UppercaseLetter),
	(CodepointRange::new(0xA7C3, 0xA7C3), Category::LowercaseLetter),
	(CodepointRange::new(0xA7C4, 0xA7C7), Category::UppercaseLetter),
	(CodepointRange::new(0xA7C8, 0xA7C8), Category::LowercaseLetter),
	(CodepointRange::new(0xA7C9, 0xA7C9), Category::UppercaseLetter),
	(CodepointRange::new(0xA7CA, 0xA7CA), Category::LowercaseLetter),
	(CodepointRange::new(0xA7D0, 0xA7D0), Category::UppercaseLetter),
	(CodepointRange::new(0xA7D1, 0xA7D1), Category::LowercaseLetter),
	(CodepointRange::new(0xA7D3, 0xA7D3), Category::LowercaseLetter),
	(CodepointRange::new(0xA7D5, 0xA7D5), Category::LowercaseLetter),
	(CodepointRange::new(0xA7D6, 0xA7D6), Category::UppercaseLetter),
	(CodepointRange::new(0xA7D7, 0xA7D7), Category::LowercaseLetter),
	(CodepointRange::new(0xA7D8, 0xA7D8), Category::UppercaseLetter),
	(CodepointRange::new(0xA7D9, 0xA7D9), Category::LowercaseLetter),
	(CodepointRange::new(0xA7F2, 0xA7F4), Category::ModifierLetter),
	(CodepointRange::new(0xA7F5, 0xA7F5), Category::UppercaseLetter),
	(CodepointRange::new(0xA7F6, 0xA7F6), Category::LowercaseLetter),
	(CodepointRange::new(0xA7F7, 0xA7F7), Category::OtherLetter),
	(CodepointRange::new(0xA7F8, 0xA7F9), Category::ModifierLetter),
	(CodepointRange::new(0xA7FA, 0xA7FA), Category::LowercaseLetter),
	(CodepointRange::new(0xA7FB, 0xA801), Category::OtherLetter),
	(CodepointRange::new(0xA802, 0xA802), Category::NonspacingMark),
	(CodepointRange::new(0xA803, 0xA805), Category::OtherLetter),
	(CodepointRange::new(0xA806, 0xA806), Category::NonspacingMark),
	(CodepointRange::new(0xA807, 0xA80A), Category::OtherLetter),
	(CodepointRange::new(0xA80B, 0xA80B), Category::NonspacingMark),
	(CodepointRange::new(0xA80C, 0xA822), Category::OtherLetter),
	(CodepointRange::new(0xA823, 0xA824), Category::SpacingMark),
	(CodepointRange::new(0xA825, 0xA826), Category::NonspacingMark),
	(CodepointRange::new(0xA827, 0xA827), Category::SpacingMark),
	(CodepointRange::new(0xA828, 0xA82B), Category::OtherSymbol),
	(CodepointRange::new(0xA82C, 0xA82C), Category::NonspacingMark),
	(CodepointRange::new(0xA830, 0xA835), Category::OtherNumber),
	(CodepointRange::new(0xA836, 0xA837), Category::OtherSymbol),
	(CodepointRange::new(0xA838, 0xA838), Category::CurrencySymbol),
	(CodepointRange::new(0xA839, 0xA839), Category::OtherSymbol),
	(CodepointRange::new(0xA840, 0xA873), Category::OtherLetter),
	(CodepointRange::new(0xA874, 0xA877), Category::OtherPunctuation),
	(CodepointRange::new(0xA880, 0xA881), Category::SpacingMark),
	(CodepointRange::new(0xA882, 0xA8B3), Category::OtherLetter),
	(CodepointRange::new(0xA8B4, 0xA8C3), Category::SpacingMark),
	(CodepointRange::new(0xA8C4, 0xA8C5), Category::NonspacingMark),
	(CodepointRange::new(0xA8CE, 0xA8CF), Category::OtherPunctuation),
	(CodepointRange::new(0xA8D0, 0xA8D9), Category::DecimalNumber),
	(CodepointRange::new(0xA8E0, 0xA8F1), Category::NonspacingMark),
	(CodepointRange::new(0xA8F2, 0xA8F7), Category::OtherLetter),
	(CodepointRange::new(0xA8F8, 0xA8FA), Category::OtherPunctuation),
	(CodepointRange::new(0xA8FB, 0xA8FB), Category::OtherLetter),
	(CodepointRange::new(0xA8FC, 0xA8FC), Category::OtherPunctuation),
	(CodepointRange::new(0xA8FD, 0xA8FE), Category::OtherLetter),
	(CodepointRange::new(0xA8FF, 0xA8FF), Category::NonspacingMark),
	(CodepointRange::new(0xA900, 0xA909), Category::DecimalNumber),
	(CodepointRange::new(0xA90A, 0xA925), Category::OtherLetter),
	(CodepointRange::new(0xA926, 0xA92D), Category::NonspacingMark),
	(CodepointRange::new(0xA92E, 0xA92F), Category::OtherPunctuation),
	(CodepointRange::new(0xA930, 0xA946), Category::OtherLetter),
	(CodepointRange::new(0xA947, 0xA951), Category::NonspacingMark),
	(CodepointRange::new(0xA952, 0xA953), Category::SpacingMark),
	(CodepointRange::new(0xA95F, 0xA95F), Category::OtherPunctuation),
	(CodepointRange::new(0xA960, 0xA97C), Category::OtherLetter),
	(CodepointRange::new(0xA980, 0xA982), Category::NonspacingMark),
	(CodepointRange::new(0xA983, 0xA983), Category::SpacingMark),
	(CodepointRange::new(0xA984, 0xA9B2), Category::OtherLetter),
	(CodepointRange::new(0xA9B3, 0xA9B3), Category::NonspacingMark),
	(CodepointRange::new(0xA9B4, 0xA9B5), Category::SpacingMark),
	(CodepointRange::new(0xA9B6, 0xA9B9), Category::NonspacingMark),
	(CodepointRange::new(0xA9BA, 0xA9BB), Category::SpacingMark),
	(CodepointRange::new(0xA9BC, 0xA9BD), Category::NonspacingMark),
	(CodepointRange::new(0xA9BE, 0xA9C0), Category::SpacingMark),
	(CodepointRange::new(0xA9C1, 0xA9CD), Category::OtherPunctuation),
	(CodepointRange::new(0xA9CF, 0xA9CF), Category::ModifierLetter),
	(CodepointRange::new(0xA9D0, 0xA9D9), Category::DecimalNumber),
	(CodepointRange::new(0xA9DE, 0xA9DF), Category::OtherPunctuation),
	(CodepointRange::new(0xA9E0, 0xA9E4), Category::OtherLetter),
	(CodepointRange::new(0xA9E5, 0xA9E5), Category::NonspacingMark),
	(CodepointRange::new(0xA9E6, 0xA9E6), Category::ModifierLetter),
	(CodepointRange::new(0xA9E7, 0xA9EF), Category::OtherLetter),
	(CodepointRange::new(0xA9F0, 0xA9F9), Category::DecimalNumber),
	(CodepointRange::new(0xA9FA, 0xA9FE), Category::OtherLetter),
	(CodepointRange::new(0xAA00, 0xAA28), Category::OtherLetter),
	(CodepointRange::new(0xAA29, 0xAA2E), Category::NonspacingMark),
	(CodepointRange::new(0xAA2F, 0xAA30), Category::SpacingMark),
	(CodepointRange::new(0xAA31, 0xAA32), Category::NonspacingMark),
	(CodepointRange::new(0xAA33, 0xAA34), Category::SpacingMark),
	(CodepointRange::new(0xAA35, 0xAA36), Category::NonspacingMark),
	(CodepointRange::new(0xAA40, 0xAA42), Category::OtherLetter),
	(CodepointRange::new(0xAA43, 0xAA43), Category::NonspacingMark),
	(CodepointRange::new(0xAA44, 0xAA4B), Category::OtherLetter),
	(CodepointRange::new(0xAA4C, 0xAA4C), Category::NonspacingMark),
	(CodepointRange::new(0xAA4D, 0xAA4D), Category::SpacingMark),
	(CodepointRange::new(0xAA50, 0xAA59), Category::DecimalNumber),
	(CodepointRange::new(0xAA5C, 0xAA5F), Category::OtherPunctuation),
	(CodepointRange::new(0xAA60, 0xAA6F), Category::OtherLetter),
	(CodepointRange::new(0xAA70, 0xAA70), Category::ModifierLetter),
	(CodepointRange::new(0xAA71, 0xAA76), Category::OtherLetter),
	(CodepointRange::new(0xAA77, 0xAA79), Category::OtherSymbol),
	(CodepointRange::new(0xAA7A, 0xAA7A), Category::OtherLetter),
	(CodepointRange::new(0xAA7B, 0xAA7B), Category::SpacingMark),
	(CodepointRange::new(0xAA7C, 0xAA7C), Category::NonspacingMark),
	(CodepointRange::new(0xAA7D, 0xAA7D), Category::SpacingMark),
	(CodepointRange::new(0xAA7E, 0xAAAF), Category::OtherLetter),
	(CodepointRange::new(0xAAB0, 0xAAB0), Category::NonspacingMark),
	(CodepointRange::new(0xAAB1, 0xAAB1), Category::OtherLetter),
	(CodepointRange::new(0xAAB2, 0xAAB4), Category::NonspacingMark),
	(CodepointRange::new(0xAAB5, 0xAAB6), Category::OtherLetter),
	(CodepointRange::new(0xAAB7, 0xAAB8), Category::NonspacingMark),
	(CodepointRange::new(0xAAB9, 0xAABD), Category::OtherLetter),
	(CodepointRange::new(0xAABE, 0xAABF), Category::NonspacingMark),
	(CodepointRange::new(0xAAC0, 0xAAC0), Category::OtherLetter),
	(CodepointRange::new(0xAAC1, 0xAAC1), Category::NonspacingMark),
	(CodepointRange::new(0xAAC2, 0xAAC2), Category::OtherLetter),
	(CodepointRange::new(0xAADB, 0xAADC), Category::OtherLetter),
	(CodepointRange::new(0xAADD, 0xAADD), Category::ModifierLetter),
	(CodepointRange::new(0xAADE, 0xAADF), Category::OtherPunctuation),
	(CodepointRange::new(0xAAE0, 0xAAEA), Category::OtherLetter),
	(CodepointRange::new(0xAAEB, 0xAAEB), Category::SpacingMark),
	(CodepointRange::new(0xAAEC, 0xAAED), Category::NonspacingMark),
	(CodepointRange::new(0xAAEE, 0xAAEF), Category::SpacingMark),
	(CodepointRange::new(0xAAF0, 0xAAF1), Category::OtherPunctuation),
	(CodepointRange::new(0xAAF2, 0xAAF2), Category::OtherLetter),
	(CodepointRange::new(0xAAF3, 0xAAF4), Category::ModifierLetter),
	(CodepointRange::new(0xAAF5, 0xAAF5), Category::SpacingMark),
	(CodepointRange::new(0xAAF6, 0xAAF6), Category::NonspacingMark),
	(CodepointRange::new(0xAB01, 0xAB06), Category::OtherLetter),
	(CodepointRange::new(0xAB09, 0xAB0E), Category::OtherLetter),
	(CodepointRange::new(0xAB11, 0xAB16), Category::OtherLetter),
	(CodepointRange::new(0xAB20, 0xAB26), Category::OtherLetter),
	(CodepointRange::new(0xAB28, 0xAB2E), Category::OtherLetter),
	(CodepointRange::new(0xAB30, 0xAB5A), Category::LowercaseLetter),
	(CodepointRange::new(0xAB5B, 0xAB5B), Category::ModifierSymbol),
	(CodepointRange::new(0xAB5C, 0xAB5F), Category::ModifierLetter),
	(CodepointRange::new(0xAB60, 0xAB68), Category::LowercaseLetter),
	(CodepointRange::new(0xAB69, 0xAB69), Category::ModifierLetter),
	(CodepointRange::new(0xAB6A, 0xAB6B), Category::ModifierSymbol),
	(CodepointRange::new(0xAB70, 0xABBF), Category::LowercaseLetter),
	(CodepointRange::new(0xABC0, 0xABE2), Category::OtherLetter),
	(CodepointRange::new(0xABE3, 0xABE4), Category::SpacingMark),
	(CodepointRange::new(0xABE5, 0xABE5), Category::NonspacingMark),
	(CodepointRange::new(0xABE6, 0xABE7), Category::SpacingMark),
	(CodepointRange::new(0xABE8, 0xABE8), Category::NonspacingMark),
	(CodepointRange::new(0xABE9, 0xABEA), Category::SpacingMark),
	(CodepointRange::new(0xABEB, 0xABEB), Category::OtherPunctuation),
	(CodepointRange::new(0xABEC, 0xABEC), Category::SpacingMark),
	(CodepointRange::new(0xABED, 0xABED), Category::NonspacingMark),
	(CodepointRange::new(0xABF0, 0xABF9), Category::DecimalNumber),
	(CodepointRange::new(0xAC00, 0xD7A3), Category::OtherLetter),
	(CodepointRange::new(0xD7B0, 0xD7C6), Category::OtherLetter),
	(CodepointRange::new(0xD7CB, 0xD7FB), Category::OtherLetter),
	(CodepointRange::new(0xD800, 0xDFFF), Category::Surrogate),
	(CodepointRange::new(0xE000, 0xF8FF), Category::PrivateUse),
	(CodepointRange::new(0xF900, 0xFA6D), Category::OtherLetter),
	(CodepointRange::new(0xFA70, 0xFAD9), Category::OtherLetter),
	(CodepointRange::new(0xFB00, 0xFB06), Category::LowercaseLetter),
	(CodepointRange::new(0xFB13, 0xFB17), Category::LowercaseLetter),
	(CodepointRange::new(0xFB1D, 0xFB1D), Category::OtherLetter),
	(CodepointRange::new(0xFB1E, 0xFB1E), Category::NonspacingMark),
	(CodepointRange::new(0xFB1F, 0xFB28), Category::OtherLetter),
	(CodepointRange::new(0xFB29, 0xFB29), Category::MathSymbol),
	(CodepointRange::new(0xFB2A, 0xFB36), Category::OtherLetter),
	(CodepointRange::new(0xFB38, 0xFB3C), Category::OtherLetter),
	(CodepointRange::new(0xFB3E, 0xFB3E), Category::OtherLetter),
	(CodepointRange::new(0xFB40, 0xFB41), Category::OtherLetter),
	(CodepointRange::new(0xFB43, 0xFB44), Category::OtherLetter),
	(CodepointRange::new(0xFB46, 0xFBB1), Category::OtherLetter),
	(CodepointRange::new(0xFBB2, 0xFBC2), Category::ModifierSymbol),
	(CodepointRange::new(0xFBD3, 0xFD3D), Category::OtherLetter),
	(CodepointRange::new(0xFD3E, 0xFD3E), Category::ClosePunctuation),
	(CodepointRange::new(0xFD3F, 0xFD3F), Category::OpenPunctuation),
	(CodepointRange::new(0xFD40, 0xFD4F), Category::OtherSymbol),
	(CodepointRange::new(0xFD50, 0xFD8F), Category::OtherLetter),
	(CodepointRange::new(0xFD92, 0xFDC7), Category::OtherLetter),
	(CodepointRange::new(0xFDCF, 0xFDCF), Category::OtherSymbol),
	(CodepointRange::new(0xFDF0, 0xFDFB), Category::OtherLetter),
	(CodepointRange::new(0xFDFC, 0xFDFC), Category::CurrencySymbol),
	(CodepointRange::new(0xFDFD, 0xFDFF), Category::OtherSymbol),
	(CodepointRange::new(0xFE00, 0xFE0F), Category::NonspacingMark),
	(CodepointRange::new(0xFE10, 0xFE16), Category::OtherPunctuation),
	(CodepointRange::new(0xFE17, 0xFE17), Category::OpenPunctuation),
	(CodepointRange::new(0xFE18, 0xFE18), Category::ClosePunctuation),
	(CodepointRange::new(0xFE19, 0xFE19), Category::OtherPunctuation),
	(CodepointRange::new(0xFE20, 0xFE2F), Category::NonspacingMark),
	(CodepointRange::new(0xFE30, 0xFE30), Category::OtherPunctuation),
	(CodepointRange::new(0xFE31, 0xFE32), Category::DashPunctuation),
	(CodepointRange::new(0xFE33, 0xFE34), Category::ConnectorPunctuation),
	(CodepointRange::new(0xFE35, 0xFE35), Category::OpenPunctuation),
	(CodepointRange::new(0xFE36, 0xFE36), Category::ClosePunctuation),
	(CodepointRange::new(0xFE37, 0xFE37), Category::OpenPunctuation),
	(CodepointRange::new(0xFE38, 0xFE38), Category::ClosePunctuation),
	(CodepointRange::new(0xFE39, 0xFE39), Category::OpenPunctuation),
	(CodepointRange::new(0xFE3A, 0xFE3A), Category::ClosePunctuation),
	(CodepointRange::new(0xFE3B, 0xFE3B), Category::OpenPunctuation),
	(CodepointRange::new(0xFE3C, 0xFE3C), Category::ClosePunctuation),
	(CodepointRange::new(0xFE3D, 0xFE3D), Category::OpenPunctuation),
	(CodepointRange::new(0xFE3E, 0xFE3E), Category::ClosePunctuation),
	(CodepointRange::new(0xFE3F, 0xFE3F), Category::OpenPunctuation),
	(CodepointRange::new(0xFE40, 0xFE40), Category::ClosePunctuation),
	(CodepointRange::new(0xFE41, 0xFE41), Category::OpenPunctuation),
	(CodepointRange::new(0xFE42, 0xFE42), Category::ClosePunctuation),
	(CodepointRange::new(0xFE43, 0xFE43), Category::OpenPunctuation),
	(CodepointRange::new(0xFE44, 0xFE44), Category::ClosePunctuation),
	(CodepointRange::new(0xFE45, 0xFE46), Category::OtherPunctuation),
	(CodepointRange::new(0xFE47, 0xFE47), Category::OpenPunctuation),
	(CodepointRange::new(0xFE48, 0xFE48), Category::ClosePunctuation),
	(CodepointRange::new(0xFE49, 0xFE4C), Category::OtherPunctuation),
	(CodepointRange::new(0xFE4D, 0xFE4F), Category::ConnectorPunctuation),
	(CodepointRange::new(0xFE50, 0xFE52), Category::OtherPunctuation),
	(CodepointRange::new(0xFE54, 0xFE57), Category::OtherPunctuation),
	(CodepointRange::new(0xFE58, 0xFE58), Category::DashPunctuation),
	(CodepointRange::new(0xFE59, 0xFE59), Category::OpenPunctuation),
	(CodepointRange::new(0xFE5A, 0xFE5A), Category::ClosePunctuation),
	(CodepointRange::new(0xFE5B, 0xFE5B), Category::OpenPunctuation),
	(CodepointRange::new(0xFE5C, 0xFE5C), Category::ClosePunctuation),
	(CodepointRange::new(0xFE5D, 0xFE5D), Category::OpenPunctuation),
	(CodepointRange::new(0xFE5E, 0xFE5E), Category::ClosePunctuation),
	(CodepointRange::new(0xFE5F, 0xFE61), Category::OtherPunctuation),
	(CodepointRange::new(0xFE62, 0xFE62), Category::MathSymbol),
	(CodepointRange::new(0xFE63, 0xFE63), Category::DashPunctuation),
	(CodepointRange::new(0xFE64, 0xFE66), Category::MathSymbol),
	(CodepointRange::new(0xFE68, 0xFE68), Category::OtherPunctuation),
	(CodepointRange::new(0xFE69, 0xFE69), Category::CurrencySymbol),
	(CodepointRange::new(0xFE6A, 0xFE6B), Category::OtherPunctuation),
	(CodepointRange::new(0xFE70, 0xFE74), Category::OtherLetter),
	(CodepointRange::new(0xFE76, 0xFEFC), Category::OtherLetter),
	(CodepointRange::new(0xFEFF, 0xFEFF), Category::Format),
	(CodepointRange::new(0xFF01, 0xFF03), Category::OtherPunctuation),
	(CodepointRange::new(0xFF04, 0xFF04), Category::CurrencySymbol),
	(CodepointRange::new(0xFF05, 0xFF07), Category::OtherPunctuation),
	(CodepointRange::new(0xFF08, 0xFF08), Category::OpenPunctuation),
	(CodepointRange::new(0xFF09, 0xFF09), Category::ClosePunctuation),
	(CodepointRange::new(0xFF0A, 0xFF0A), Category::OtherPunctuation),
	(CodepointRange::new(0xFF0B, 0xFF0B), Category::MathSymbol),
	(CodepointRange::new(0xFF0C, 0xFF0C), Category::OtherPunctuation),
	(CodepointRange::new(0xFF0D, 0xFF0D), Category::DashPunctuation),
	(CodepointRange::new(0xFF0E, 0xFF0F), Category::OtherPunctuation),
	(CodepointRange::new(0xFF10, 0xFF19), Category::DecimalNumber),
	(CodepointRange::new(0xFF1A, 0xFF1B), Category::OtherPunctuation),
	(CodepointRange::new(0xFF1C, 0xFF1E), Category::MathSymbol),
	(CodepointRange::new(0xFF1F, 0xFF20), Category::OtherPunctuation),
	(CodepointRange::new(0xFF21, 0xFF3A), Category::UppercaseLetter),
	(CodepointRange::new(0xFF3B, 0xFF3B), Category::OpenPunctuation),
	(CodepointRange::new(0xFF3C, 0xFF3C), Category::OtherPunctuation),
	(CodepointRange::new(0xFF3D, 0xFF3D), Category::ClosePunctuation),
	(CodepointRange::new(0xFF3E, 0xFF3E), Category::ModifierSymbol),
	(CodepointRange::new(0xFF3F, 0xFF3F), Category::ConnectorPunctuation),
	(CodepointRange::new(0xFF40, 0xFF40), Category::ModifierSymbol),
	(CodepointRange::new(0xFF41, 0xFF5A), Category::LowercaseLetter),
	(CodepointRange::new(0xFF5B, 0xFF5B), Category::OpenPunctuation),
	(CodepointRange::new(0xFF5C, 0xFF5C), Category::MathSymbol),
	(CodepointRange::new(0xFF5D, 0xFF5D), Category::ClosePunctuation),
	(CodepointRange::new(0xFF5E, 0xFF5E), Category::MathSymbol),
	(CodepointRange::new(0xFF5F, 0xFF5F), Category::OpenPunctuation),
	(CodepointRange::new(0xFF60, 0xFF60), Category::ClosePunctuation),
	(CodepointRange::new(0xFF61, 0xFF61), Category::OtherPunctuation),
	(CodepointRange::new(0xFF62, 0xFF62), Category::OpenPunctuation),
	(CodepointRange::new(0xFF63, 0xFF63), Category::ClosePunctuation),
	(CodepointRange::new(0xFF64, 0xFF65), Category::OtherPunctuation),
	(CodepointRange::new(0xFF66, 0xFF6F), Category::OtherLetter),
	(CodepointRange::new(0xFF70, 0xFF70), Category::ModifierLetter),
	(CodepointRange::new(0xFF71, 0xFF9D), Category::OtherLetter),
	(CodepointRange::new(0xFF9E, 0xFF9F), Category::ModifierLetter),
	(CodepointRange::new(0xFFA0, 0xFFBE), Category::OtherLetter),
	(CodepointRange::new(0xFFC2, 0xFFC7), Category::OtherLetter),
	(CodepointRange::new(0xFFCA, 0xFFCF), Category::OtherLetter),
	(CodepointRange::new(0xFFD2, 0xFFD7), Category::OtherLetter),
	(CodepointRange::new(0xFFDA, 0xFFDC), Category::OtherLetter),
	(CodepointRange::new(0xFFE0, 0xFFE1), Category::CurrencySymbol),
	(CodepointRange::new(0xFFE2, 0xFFE2), Category::MathSymbol),
	(CodepointRange::new(0xFFE3, 0xFFE3), Category::ModifierSymbol),
	(CodepointRange::new(0xFFE4, 0xFFE4), Category::OtherSymbol),
	(CodepointRange::new(0xFFE5, 0xFFE6), Category::CurrencySymbol),
	(CodepointRange::new(0xFFE8, 0xFFE8), Category::OtherSymbol),
	(CodepointRange::new(0xFFE9, 0xFFEC), Category::MathSymbol),
	(CodepointRange::new(0xFFED, 0xFFEE), Category::OtherSymbol),
	(CodepointRange::new(0xFFF9, 0xFFFB), Category::Format),
	(CodepointRange::new(0xFFFC, 0xFFFD), Category::OtherSymbol),
	(CodepointRange::new(0x10000, 0x1000B), Category::OtherLetter),
	(CodepointRange::new(0x1000D, 0x10026), Category::OtherLetter),
	(CodepointRange::new(0x10028, 0x1003A), Category::OtherLetter),
	(CodepointRange::new(0x1003C, 0x1003D), Category::OtherLetter),
	(CodepointRange::new(0x1003F, 0x1004D), Category::OtherLetter),
	(CodepointRange::new(0x10050, 0x1005D), Category::OtherLetter),
	(CodepointRange::new(0x10080, 0x100FA), Category::OtherLetter),
	(CodepointRange::new(0x10100, 0x10102), Category::OtherPunctuation),
	(CodepointRange::new(0x10107, 0x10133), Category::OtherNumber),
	(CodepointRange::new(0x10137, 0x1013F), Category::OtherSymbol),
	(CodepointRange::new(0x10140, 0x10174), Category::LetterNumber),
	(CodepointRange::new(0x10175, 0x10178), Category::OtherNumber),
	(CodepointRange::new(0x10179, 0x10189), Category::OtherSymbol),
	(CodepointRange::new(0x1018A, 0x1018B), Category::OtherNumber),
	(CodepointRange::new(0x1018C, 0x1018E), Category::OtherSymbol),
	(CodepointRange::new(0x10190, 0x1019C), Category::OtherSymbol),
	(CodepointRange::new(0x101A0, 0x101A0), Category::OtherSymbol),
	(CodepointRange::new(0x101D0, 0x101FC), Category::OtherSymbol),
	(CodepointRange::new(0x101FD, 0x101FD), Category::NonspacingMark),
	(CodepointRange::new(0x10280, 0x1029C), Category::OtherLetter),
	(CodepointRange::new(0x102A0, 0x102D0), Category::OtherLetter),
	(CodepointRange::new(0x102E0, 0x102E0), Category::NonspacingMark),
	(CodepointRange::new(0x102E1, 0x102FB), Category::OtherNumber),
	(CodepointRange::new(0x10300, 0x1031F), Category::OtherLetter),
	(CodepointRange::new(0x10320, 0x10323), Category::OtherNumber),
	(CodepointRange::new(0x1032D, 0x10340), Category::OtherLetter),
	(CodepointRange::new(0x10341, 0x10341), Category::LetterNumber),
	(CodepointRange::new(0x10342, 0x10349), Category::OtherLetter),
	(CodepointRange::new(0x1034A, 0x1034A), Category::LetterNumber),
	(CodepointRange::new(0x10350, 0x10375), Category::OtherLetter),
	(CodepointRange::new(0x10376, 0x1037A), Category::NonspacingMark),
	(CodepointRange::new(0x10380, 0x1039D), Category::OtherLetter),
	(CodepointRange::new(0x1039F, 0x1039F), Category::OtherPunctuation),
	(CodepointRange::new(0x103A0, 0x103C3), Category::OtherLetter),
	(CodepointRange::new(0x103C8, 0x103CF), Category::OtherLetter),
	(CodepointRange::new(0x103D0, 0x103D0), Category::OtherPunctuation),
	(CodepointRange::new(0x103D1, 0x103D5), Category::LetterNumber),
	(CodepointRange::new(0x10400, 0x10427), Category::UppercaseLetter),
	(CodepointRange::new(0x10428, 0x1044F), Category::LowercaseLetter),
	(CodepointRange::new(0x10450, 0x1049D), Category::OtherLetter),
	(CodepointRange::new(0x104A0, 0x104A9), Category::DecimalNumber),
	(CodepointRange::new(0x104B0, 0x104D3), Category::UppercaseLetter),
	(CodepointRange::new(0x104D8, 0x104FB), Category::LowercaseLetter),
	(CodepointRange::new(0x10500, 0x10527), Category::OtherLetter),
	(CodepointRange::new(0x10530, 0x10563), Category::OtherLetter),
	(CodepointRange::new(0x1056F, 0x1056F), Category::OtherPunctuation),
	(CodepointRange::new(0x10570, 0x1057A), Category::UppercaseLetter),
	(CodepointRange::new(0x1057C, 0x1058A), Category::UppercaseLetter),
	(CodepointRange::new(0x1058C, 0x10592), Category::UppercaseLetter),
	(CodepointRange::new(0x10594, 0x10595), Category::UppercaseLetter),
	(CodepointRange::new(0x10597, 0x105A1), Category::LowercaseLetter),
	(CodepointRange::new(0x105A3, 0x105B1), Category::LowercaseLetter),
	(CodepointRange::new(0x105B3, 0x105B9), Category::LowercaseLetter),
	(CodepointRange::new(0x105BB, 0x105BC), Category::LowercaseLetter),
	(CodepointRange::new(0x10600, 0x10736), Category::OtherLetter),
	(CodepointRange::new(0x10740, 0x10755), Category::OtherLetter),
	(CodepointRange::new(0x10760, 0x10767), Category::OtherLetter),
	(CodepointRange::new(0x10780, 0x10785), Category::ModifierLetter),
	(CodepointRange::new(0x10787, 0x107B0), Category::ModifierLetter),
	(CodepointRange::new(0x107B2, 0x107BA), Category::ModifierLetter),
	(CodepointRange::new(0x10800, 0x10805), Category::OtherLetter),
	(CodepointRange::new(0x10808, 0x10808), Category::OtherLetter),
	(CodepointRange::new(0x1080A, 0x10835), Category::OtherLetter),
	(CodepointRange::new(0x10837, 0x10838), Category::OtherLetter),
	(CodepointRange::new(0x1083C, 0x1083C), Category::OtherLetter),
	(CodepointRange::new(0x1083F, 0x10855), Category::OtherLetter),
	(CodepointRange::new(0x10857, 0x10857), Category::OtherPunctuation),
	(CodepointRange::new(0x10858, 0x1085F), Category::OtherNumber),
	(CodepointRange::new(0x10860, 0x10876), Category::OtherLetter),
	(CodepointRange::new(0x10877, 0x10878), Category::OtherSymbol),
	(CodepointRange::new(0x10879, 0x1087F), Category::OtherNumber),
	(CodepointRange::new(0x10880, 0x1089E), Category::OtherLetter),
	(CodepointRange::new(0x108A7, 0x108AF), Category::OtherNumber),
	(CodepointRange::new(0x108E0, 0x108F2), Category::OtherLetter),
	(CodepointRange::new(0x108F4, 0x108F5), Category::OtherLetter),
	(CodepointRange::new(0x108FB, 0x108FF), Category::OtherNumber),
	(CodepointRange::new(0x10900, 0x10915), Category::OtherLetter),
	(CodepointRange::new(0x10916, 0x1091B), Category::OtherNumber),
	(CodepointRange::new(0x1091F, 0x1091F), Category::OtherPunctuation),
	(CodepointRange::new(0x10920, 0x10939), Category::OtherLetter),
	(CodepointRange::new(0x1093F, 0x1093F), Category::OtherPunctuation),
	(CodepointRange::new(0x10980, 0x109B7), Category::OtherLetter),
	(CodepointRange::new(0x109BC, 0x109BD), Category::OtherNumber),
	(CodepointRange::new(0x109BE, 0x109BF), Category::OtherLetter),
	(CodepointRange::new(0x109C0, 0x109CF), Category::OtherNumber),
	(CodepointRange::new(0x109D2, 0x109FF), Category::OtherNumber),
	(CodepointRange::new(0x10A00, 0x10A00), Category::OtherLetter),
	(CodepointRange::new(0x10A01, 0x10A03), Category::NonspacingMark),
	(CodepointRange::new(0x10A05, 0x10A06), Category::NonspacingMark),
	(CodepointRange::new(0x10A0C, 0x10A0F), Category::NonspacingMark),
	(CodepointRange::new(0x10A10, 0x10A13), Category::OtherLetter),
	(CodepointRange::new(0x10A15, 0x10A17), Category::OtherLetter),
	(CodepointRange::new(0x10A19, 0x10A35), Category::OtherLetter),
	(CodepointRange::new(0x10A38, 0x10A3A), Category::NonspacingMark),
	(CodepointRange::new(0x10A3F, 0x10A3F), Category::NonspacingMark),
	(CodepointRange::new(0x10A40, 0x10A48), Category::OtherNumber),
	(CodepointRange::new(0x10A50, 0x10A58), Category::OtherPunctuation),
	(CodepointRange::new(0x10A60, 0x10A7C), Category::OtherLetter),
	(CodepointRange::new(0x10A7D, 0x10A7E), Category::OtherNumber),
	(CodepointRange::new(0x10A7F, 0x10A7F), Category::OtherPunctuation),
	(CodepointRange::new(0x10A80, 0x10A9C), Category::OtherLetter),
	(CodepointRange::new(0x10A9D, 0x10A9F), Category::OtherNumber),
	(CodepointRange::new(0x10AC0, 0x10AC7), Category::OtherLetter),
	(CodepointRange::new(0x10AC8, 0x10AC8), Category::OtherSymbol),
	(CodepointRange::new(0x10AC9, 0x10AE4), Category::OtherLetter),
	(CodepointRange::new(0x10AE5, 0x10AE6), Category::NonspacingMark),
	(CodepointRange::new(0x10AEB, 0x10AEF), Category::OtherNumber),
	(CodepointRange::new(0x10AF0, 0x10AF6), Category::OtherPunctuation),
	(CodepointRange::new(0x10B00, 0x10B35), Category::OtherLetter),
	(CodepointRange::new(0x10B39, 0x10B3F), Category::OtherPunctuation),
	(CodepointRange::new(0x10B40, 0x10B55), Category::OtherLetter),
	(CodepointRange::new(0x10B58, 0x10B5F), Category::OtherNumber),
	(CodepointRange::new(0x10B60, 0x10B72), Category::OtherLetter),
	(CodepointRange::new(0x10B78, 0x10B7F), Category::OtherNumber),
	(CodepointRange::new(0x10B80, 0x10B91), Category::OtherLetter),
	(CodepointRange::new(0x10B99, 0x10B9C), Category::OtherPunctuation),
	(CodepointRange::new(0x10BA9, 0x10BAF), Category::OtherNumber),
	(CodepointRange::new(0x10C00, 0x10C48), Category::OtherLetter),
	(CodepointRange::new(0x10C80, 0x10CB2), Category::UppercaseLetter),
	(CodepointRange::new(0x10CC0, 0x10CF2), Category::LowercaseLetter),
	(CodepointRange::new(0x10CFA, 0x10CFF), Category::OtherNumber),
	(CodepointRange::new(0x10D00, 0x10D23), Category::OtherLetter),
	(CodepointRange::new(0x10D24, 0x10D27), Category::NonspacingMark),
	(CodepointRange::new(0x10D30, 0x10D39), Category::DecimalNumber),
	(CodepointRange::new(0x10E60, 0x10E7E), Category::OtherNumber),
	(CodepointRange::new(0x10E80, 0x10EA9), Category::OtherLetter),
	(CodepointRange::new(0x10EAB, 0x10EAC), Category::NonspacingMark),
	(CodepointRange::new(0x10EAD, 0x10EAD), Category::DashPunctuation),
	(CodepointRange::new(0x10EB0, 0x10EB1), Category::OtherLetter),
	(CodepointRange::new(0x10F00, 0x10F1C), Category::OtherLetter),
	(CodepointRange::new(0x10F1D, 0x10F26), Category::OtherNumber),
	(CodepointRange::new(0x10F27, 0x10F27), Category::OtherLetter),
	(CodepointRange::new(0x10F30, 0x10F45), Category::OtherLetter),
	(CodepointRange::new(0x10F46, 0x10F50), Category::NonspacingMark),
	(CodepointRange::new(0x10F51, 0x10F54), Category::OtherNumber),
	(CodepointRange::new(0x10F55, 0x10F59), Category::OtherPunctuation),
	(CodepointRange::new(0x10F70, 0x10F81), Category::OtherLetter),
	(CodepointRange::new(0x10F82, 0x10F85), Category::NonspacingMark),
	(CodepointRange::new(0x10F86, 0x10F89), Category::OtherPunctuation),
	(CodepointRange::new(0x10FB0, 0x10FC4), Category::OtherLetter),
	(CodepointRange::new(0x10FC5, 0x10FCB), Category::OtherNumber),
	(CodepointRange::new(0x10FE0, 0x10FF6), Category::OtherLetter),
	(CodepointRange::new(0x11000, 0x11000), Category::SpacingMark),
	(CodepointRange::new(0x11001, 0x11001), Category::NonspacingMark),
	(CodepointRange::new(0x11002, 0x11002), Category::SpacingMark),
	(CodepointRange::new(0x11003, 0x11037), Category::OtherLetter),
	(CodepointRange::new(0x11038, 0x11046), Category::NonspacingMark),
	(CodepointRange::new(0x11047, 0x1104D), Category::OtherPunctuation),
	(CodepointRange::new(0x11052, 0x11065), Category::OtherNumber),
	(CodepointRange::new(0x11066, 0x1106F), Category::DecimalNumber),
	(CodepointRange::new(0x11070, 0x11070), Category::NonspacingMark),
	(CodepointRange::new(0x11071, 0x11072), Category::OtherLetter),
	(CodepointRange::new(0x11073, 0x11074), Category::NonspacingMark),
	(CodepointRange::new(0x11075, 0x11075), Category::OtherLetter),
	(CodepointRange::new(0x1107F, 0x11081), Category::NonspacingMark),
	(CodepointRange::new(0x11082, 0x11082), Category::SpacingMark),
	(CodepointRange::new(0x11083, 0x110AF), Category::OtherLetter),
	(CodepointRange::new(0x110B0, 0x110B2), Category::SpacingMark),
	(CodepointRange::new(0x110B3, 0x110B6), Category::NonspacingMark),
	(CodepointRange::new(0x110B7, 0x110B8), Category::SpacingMark),
	(CodepointRange::new(0x110B9, 0x110BA), Category::NonspacingMark),
	(CodepointRange::new(0x110BB, 0x110BC), Category::OtherPunctuation),
	(CodepointRange::new(0x110BD, 0x110BD), Category::Format),
	(CodepointRange::new(0x110BE, 0x110C1), Category::OtherPunctuation),
	(CodepointRange::new(0x110C2, 0x110C2), Category::NonspacingMark),
	(CodepointRange::new(0x110CD, 0x110CD), Category::Format),
	(CodepointRange::new(0x110D0, 0x110E8), Category::OtherLetter),
	(CodepointRange::new(0x110F0, 0x110F9), Category::DecimalNumber),
	(CodepointRange::new(0x11100, 0x11102), Category::NonspacingMark),
	(CodepointRange::new(0x11103, 0x11126), Category::OtherLetter),
	(CodepointRange::new(0x11127, 0x1112B), Category::NonspacingMark),
	(CodepointRange::new(0x1112C, 0x1112C), Category::SpacingMark),
	(CodepointRange::new(0x1112D, 0x11134), Category::NonspacingMark),
	(CodepointRange::new(0x11136, 0x1113F), Category::DecimalNumber),
	(CodepointRange::new(0x11140, 0x11143), Category::OtherPunctuation),
	(CodepointRange::new(0x11144, 0x11144), Category::OtherLetter),
	(CodepointRange::new(0x11145, 0x11146), Category::SpacingMark),
	(CodepointRange::new(0x11147, 0x11147), Category::OtherLetter),
	(CodepointRange::new(0x11150, 0x11172), Category::OtherLetter),
	(CodepointRange::new(0x11173, 0x11173), Category::NonspacingMark),
	(CodepointRange::new(0x11174, 0x11175), Category::OtherPunctuation),
	(CodepointRange::new(0x11176, 0x11176), Category::OtherLetter),
	(CodepointRange::new(0x11180, 0x11181), Category::NonspacingMark),
	(CodepointRange::new(0x11182, 0x11182), Category::SpacingMark),
	(CodepointRange::new(0x11183, 0x111B2), Category::OtherLetter),
	(CodepointRange::new(0x111B3, 0x111B5), Category::SpacingMark),
	(CodepointRange::new(0x111B6, 0x111BE), Category::NonspacingMark),
	(CodepointRange::new(0x111BF, 0x111C0), Category::SpacingMark),
	(CodepointRange::new(0x111C1, 0x111C4), Category::OtherLetter),
	(CodepointRange::new(0x111C5, 0x111C8), Category::OtherPunctuation),
	(CodepointRange::new(0x111C9, 0x111CC), Category::NonspacingMark),
	(CodepointRange::new(0x111CD, 0x111CD), Category::OtherPunctuation),
	(CodepointRange::new(0x111CE, 0x111CE), Category::SpacingMark),
	(CodepointRange::new(0x111CF, 0x111CF), Category::NonspacingMark),
	(CodepointRange::new(0x111D0, 0x111D9), Category::DecimalNumber),
	(CodepointRange::new(0x111DA, 0x111DA), Category::OtherLetter),
	(CodepointRange::new(0x111DB, 0x111DB), Category::OtherPunctuation),
	(CodepointRange::new(0x111DC, 0x111DC), Category::OtherLetter),
	(CodepointRange::new(0x111DD, 0x111DF), Category::OtherPunctuation),
	(CodepointRange::new(0x111E1, 0x111F4), Category::OtherNumber),
	(CodepointRange::new(0x11200, 0x11211), Category::OtherLetter),
	(CodepointRange::new(0x11213, 0x1122B), Category::OtherLetter),
	(CodepointRange::new(0x1122C, 0x1122E), Category::SpacingMark),
	(CodepointRange::new(0x1122F, 0x11231), Category::NonspacingMark),
	(CodepointRange::new(0x11232, 0x11233), Category::SpacingMark),
	(CodepointRange::new(0x11234, 0x11234), Category::NonspacingMark),
	(CodepointRange::new(0x11235, 0x11235), Category::SpacingMark),
	(CodepointRange::new(0x11236, 0x11237), Category::NonspacingMark),
	(CodepointRange::new(0x11238, 0x1123D), Category::OtherPunctuation),
	(CodepointRange::new(0x1123E, 0x1123E), Category::NonspacingMark),
	(CodepointRange::new(0x11280, 0x11286), Category::OtherLetter),
	(CodepointRange::new(0x11288, 0x11288), Category::OtherLetter),
	(CodepointRange::new(0x1128A, 0x1128D), Category::OtherLetter),
	(CodepointRange::new(0x1128F, 0x1129D), Category::OtherLetter),
	(CodepointRange::new(0x1129F, 0x112A8), Category::OtherLetter),
	(CodepointRange::new(0x112A9, 0x112A9), Category::OtherPunctuation),
	(CodepointRange::new(0x112B0, 0x112DE), Category::OtherLetter),
	(CodepointRange::new(0x112DF, 0x112DF), Category::NonspacingMark),
	(CodepointRange::new(0x112E0, 0x112E2), Category::SpacingMark),
	(CodepointRange::new(0x112E3, 0x112EA), Category::NonspacingMark),
	(CodepointRange::new(0x112F0, 0x112F9), Category::DecimalNumber),
	(CodepointRange::new(0x11300, 0x11301), Category::NonspacingMark),
	(CodepointRange::new(0x11302, 0x11303), Category::SpacingMark),
	(CodepointRange::new(0x11305, 0x1130C), Category::OtherLetter),
	(CodepointRange::new(0x1130F, 0x11310), Category::OtherLetter),
	(CodepointRange::new(0x11313, 0x11328), Category::OtherLetter),
	(CodepointRange::new(0x1132A, 0x11330), Category::OtherLetter),
	(CodepointRange::new(0x11332, 0x11333), Category::OtherLetter),
	(CodepointRange::new(0x11335, 0x11339), Category::OtherLetter),
	(CodepointRange::new(0x1133B, 0x1133C), Category::NonspacingMark),
	(CodepointRange::new(0x1133D, 0x1133D), Category::OtherLetter),
	(CodepointRange::new(0x1133E, 0x1133F), Category::SpacingMark),
	(CodepointRange::new(0x11340, 0x11340), Category::NonspacingMark),
	(CodepointRange::new(0x11341, 0x11344), Category::SpacingMark),
	(CodepointRange::new(0x11347, 0x11348), Category::SpacingMark),
	(CodepointRange::new(0x1134B, 0x1134D), Category::SpacingMark),
	(CodepointRange::new(0x11350, 0x11350), Category::OtherLetter),
	(CodepointRange::new(0x11357, 0x11357), Category::SpacingMark),
	(CodepointRange::new(0x1135D, 0x11361), Category::OtherLetter),
	(CodepointRange::new(0x11362, 0x11363), Category::SpacingMark),
	(CodepointRange::new(0x11366, 0x1136C), Category::NonspacingMark),
	(CodepointRange::new(0x11370, 0x11374), Category::NonspacingMark),
	(CodepointRange::new(0x11400, 0x11434), Category::OtherLetter),
	(CodepointRange::new(0x11435, 0x11437), Category::SpacingMark),
	(CodepointRange::new(0x11438, 0x1143F), Category::NonspacingMark),
	(CodepointRange::new(0x11440, 0x11441), Category::SpacingMark),
	(CodepointRange::new(0x11442, 0x11444), Category::NonspacingMark),
	(CodepointRange::new(0x11445, 0x11445), Category::SpacingMark),
	(CodepointRange::new(0x11446, 0x11446), Category::NonspacingMark),
	(CodepointRange::new(0x11447, 0x1144A), Category::OtherLetter),
	(CodepointRange::new(0x1144B, 0x1144F), Category::OtherPunctuation),
	(CodepointRange::new(0x11450, 0x11459), Category::DecimalNumber),
	(CodepointRange::new(0x1145A, 0x1145B), Category::OtherPunctuation),
	(CodepointRange::new(0x1145D, 0x1145D), Category::OtherPunctuation),
	(CodepointRange::new(0x1145E, 0x1145E), Category::NonspacingMark),
	(CodepointRange::new(0x1145F, 0x11461), Category::OtherLetter),
	(CodepointRange::new(0x11480, 0x114AF), Category::OtherLetter),
	(CodepointRange::new(0x114B0, 0x114B2), Category::SpacingMark),
	(CodepointRange::new(0x114B3, 0x114B8), Category::NonspacingMark),
	(CodepointRange::new(0x114B9, 0x114B9), Category::SpacingMark),
	(CodepointRange::new(0x114BA, 0x114BA), Category::NonspacingMark),
	(CodepointRange::new(0x114BB, 0x114BE), Category::SpacingMark),
	(CodepointRange::new(0x114BF, 0x114C0), Category::NonspacingMark),
	(CodepointRange::new(0x114C1, 0x114C1), Category::SpacingMark),
	(CodepointRange::new(0x114C2, 0x114C3), Category::NonspacingMark),
	(CodepointRange::new(0x114C4, 0x114C5), Category::OtherLetter),
	(CodepointRange::new(0x114C6, 0x114C6), Category::OtherPunctuation),
	(CodepointRange::new(0x114C7, 0x114C7), Category::OtherLetter),
	(CodepointRange::new(0x114D0, 0x114D9), Category::DecimalNumber),
	(CodepointRange::new(0x11580, 0x115AE), Category::OtherLetter),
	(CodepointRange::new(0x115AF, 0x115B1), Category::SpacingMark),
	(CodepointRange::new(0x115B2, 0x115B5), Category::NonspacingMark),
	(CodepointRange::new(0x115B8, 0x115BB), Category::SpacingMark),
	(CodepointRange::new(0x115BC, 0x115BD), Category::NonspacingMark),
	(CodepointRange::new(0x115BE, 0x115BE), Category::SpacingMark),
	(CodepointRange::new(0x115BF, 0x115C0), Category::NonspacingMark),
	(CodepointRange::new(0x115C1, 0x115D7), Category::OtherPunctuation),
	(CodepointRange::new(0x115D8, 0x115DB), Category::OtherLetter),
	(CodepointRange::new(0x115DC, 0x115DD), Category::NonspacingMark),
	(CodepointRange::new(0x11600, 0x1162F), Category::OtherLetter),
	(CodepointRange::new(0x11630, 0x11632), Category::SpacingMark),
	(CodepointRange::new(0x11633, 0x1163A), Category::NonspacingMark),
	(CodepointRange::new(0x1163B, 0x1163C), Category::SpacingMark),
	(CodepointRange::new(0x1163D, 0x1163D), Category::NonspacingMark),
	(CodepointRange::new(0x1163E, 0x1163E), Category::SpacingMark),
	(CodepointRange::new(0x1163F, 0x11640), Category::NonspacingMark),
	(CodepointRange::new(0x11641, 0x11643), Category::OtherPunctuation),
	(CodepointRange::new(0x11644, 0x11644), Category::OtherLetter),
	(CodepointRange::new(0x11650, 0x11659), Category::DecimalNumber),
	(CodepointRange::new(0x11660, 0x1166C), Category::OtherPunctuation),
	(CodepointRange::new(0x11680, 0x116AA), Category::OtherLetter),
	(CodepointRange::new(0x116AB, 0x116AB), Category::NonspacingMark),
	(CodepointRange::new(0x116AC, 0x116AC), Category::SpacingMark),
	(CodepointRange::new(0x116AD, 0x116AD), Category::NonspacingMark),
	(CodepointRange::new(0x116AE, 0x116AF), Category::SpacingMark),
	(CodepointRange::new(0x116B0, 0x116B5), Category::NonspacingMark),
	(CodepointRange::new(0x116B6, 0x116B6), Category::SpacingMark),
	(CodepointRange::new(0x116B7, 0x116B7), Category::NonspacingMark),
	(CodepointRange::new(0x116B8, 0x116B8), Category::OtherLetter),
	(CodepointRange::new(0x116B9, 0x116B9), Category::OtherPunctuation),
	(CodepointRange::new(0x116C0, 0x116C9), Category::DecimalNumber),
	(CodepointRange::new(0x11700, 0x1171A), Category::OtherLetter),
	(CodepointRange::new(0x1171D, 0x1171F), Category::NonspacingMark),
	(CodepointRange::new(0x11720, 0x11721), Category::SpacingMark),
	(CodepointRange::new(0x11722, 0x11725), Category::NonspacingMark),
	(CodepointRange::new(0x11726, 0x11726), Category::SpacingMark),
	(CodepointRange::new(0x11727, 0x1172B), Category::NonspacingMark),
	(CodepointRange::new(0x11730, 0x11739), Category::DecimalNumber),
	(CodepointRange::new(0x1173A, 0x1173B), Category::OtherNumber),
	(CodepointRange::new(0x1173C, 0x1173E), Category::OtherPunctuation),
	(CodepointRange::new(0x1173F, 0x1173F), Category::OtherSymbol),
	(CodepointRange::new(0x11740, 0x11746), Category::OtherLetter),
	(CodepointRange::new(0x11800, 0x1182B), Category::OtherLetter),
	(CodepointRange::new(0x1182C, 0x1182E), Category::SpacingMark),
	(CodepointRange::new(0x1182F, 0x11837), Category::NonspacingMark),
	(CodepointRange::new(0x11838, 0x11838), Category::SpacingMark),
	(CodepointRange::new(0x11839, 0x1183A), Category::NonspacingMark),
	(CodepointRange::new(0x1183B, 0x1183B), Category::OtherPunctuation),
	(CodepointRange::new(0x118A0, 0x118BF), Category::UppercaseLetter),
	(CodepointRange::new(0x118C0, 0x118DF), Category::LowercaseLetter),
	(CodepointRange::new(0x118E0, 0x118E9), Category::DecimalNumber),
	(CodepointRange::new(0x118EA, 0x118F2), Category::OtherNumber),
	(CodepointRange::new(0x118FF, 0x11906), Category::OtherLetter),
	(CodepointRange::new(0x11909, 0x11909), Category::OtherLetter),
	(CodepointRange::new(0x1190C, 0x11913), Category::OtherLetter),
	(CodepointRange::new(0x11915, 0x11916), Category::OtherLetter),
	(CodepointRange::new(0x11918, 0x1192F), Category::OtherLetter),
	(CodepointRange::new(0x11930, 0x11935), Category::SpacingMark),
	(CodepointRange::new(0x11937, 0x11938), Category::SpacingMark),
	(CodepointRange::new(0x1193B, 0x1193C), Category::NonspacingMark),
	(CodepointRange::new(0x1193D, 0x1193D), Category::SpacingMark),
	(CodepointRange::new(0x1193E, 0x1193E), Category::NonspacingMark),
	(CodepointRange::new(0x1193F, 0x1193F), Category::OtherLetter),
	(CodepointRange::new(0x11940, 0x11940), Category::SpacingMark),
	(CodepointRange::new(0x11941, 0x11941), Category::OtherLetter),
	(CodepointRange::new(0x11942, 0x11942), Category::SpacingMark),
	(CodepointRange::new(0x11943, 0x11943), Category::NonspacingMark),
	(CodepointRange::new(0x11944, 0x11946), Category::OtherPunctuation),
	(CodepointRange::new(0x11950, 0x11959), Category::DecimalNumber),
	(CodepointRange::new(0x119A0, 0x119A7), Category::OtherLetter),
	(CodepointRange::new(0x119AA, 0x119D0), Category::OtherLetter),
	(CodepointRange::new(0x119D1, 0x119D3), Category::SpacingMark),
	(CodepointRange::new(0x119D4, 0x119D7), Category::NonspacingMark),
	(CodepointRange::new(0x119DA, 0x119DB), Category::NonspacingMark),
	(CodepointRange::new(0x119DC, 0x119DF), Category::SpacingMark),
	(CodepointRange::new(0x119E0, 0x119E0), Category::NonspacingMark),
	(CodepointRange::new(0x119E1, 0x119E1), Category::OtherLetter),
	(CodepointRange::new(0x119E2, 0x119E2), Category::OtherPunctuation),
	(CodepointRange::new(0x119E3, 0x119E3), Category::OtherLetter),
	(CodepointRange::new(0x119E4, 0x119E4), Category::SpacingMark),
	(CodepointRange::new(0x11A00, 0x11A00), Category::OtherLetter),
	(CodepointRange::new(0x11A01, 0x11A0A), Category::NonspacingMark),
	(CodepointRange::new(0x11A0B, 0x11A32), Category::OtherLetter),
	(CodepointRange::new(0x11A33, 0x11A38), Category::NonspacingMark),
	(CodepointRange::new(0x11A39, 0x11A39), Category::SpacingMark),
	(CodepointRange::new(0x11A3A, 0x11A3A), Category::OtherLetter),
	(CodepointRange::new(0x11A3B, 0x11A3E), Category::NonspacingMark),
	(CodepointRange::new(0x11A3F, 0x11A46), Category::OtherPunctuation),
	(CodepointRange::new(0x11A47, 0x11A47), Category::NonspacingMark),
	(CodepointRange::new(0x11A50, 0x11A50), Category::OtherLetter),
	(CodepointRange::new(0x11A51, 0x11A56), Category::NonspacingMark),
	(CodepointRange::new(0x11A57, 0x11A58), Category::SpacingMark),
	(CodepointRange::new(0x11A59, 0x11A5B), Category::NonspacingMark),
	(CodepointRange::new(0x11A5C, 0x11A89), Category::OtherLetter),
	(CodepointRange::new(0x11A8A, 0x11A96), Category::NonspacingMark),
	(CodepointRange::new(0x11A97, 0x11A97), Category::SpacingMark),
	(CodepointRange::new(0x11A98, 0x11A99), Category::NonspacingMark),
	(CodepointRange::new(0x11A9A, 0x11A9C), Category::OtherPunctuation),
	(CodepointRange::new(0x11A9D, 0x11A9D), Category::OtherLetter),
	(CodepointRange::new(0x11A9E, 0x11AA2), Category::OtherPunctuation),
	(CodepointRange::new(0x11AB0, 0x11AF8), Category::OtherLetter),
	(CodepointRange::new(0x11C00, 0x11C08), Category::OtherLetter),
	(CodepointRange::new(0x11C0A, 0x11C2E), Category::OtherLetter),
	(CodepointRange::new(0x11C2F, 0x11C2F), Category::SpacingMark),
	(CodepointRange::new(0x11C30, 0x11C36), Category::NonspacingMark),
	(CodepointRange::new(0x11C38, 0x11C3D), Category::NonspacingMark),
	(CodepointRange::new(0x11C3E, 0x11C3E), Category::SpacingMark),
	(CodepointRange::new(0x11C3F, 0x11C3F), Category::NonspacingMark),
	(CodepointRange::new(0x11C40, 0x11C40), Category::OtherLetter),
	(CodepointRange::new(0x11C41, 0x11C45), Category::OtherPunctuation),
	(CodepointRange::new(0x11C50, 0x11C59), Category::DecimalNumber),
	(CodepointRange::new(0x11C5A, 0x11C6C), Category::OtherNumber),
	(CodepointRange::new(0x11C70, 0x11C71), Category::OtherPunctuation),
	(CodepointRange::new(0x11C72, 0x11C8F), Category::OtherLetter),
	(CodepointRange::new(0x11C92, 0x11CA7), Category::NonspacingMark),
	(CodepointRange::new(0x11CA9, 0x11CA9), Category::SpacingMark),
	(CodepointRange::new(0x11CAA, 0x11CB0), Category::NonspacingMark),
	(CodepointRange::new(0x11CB1, 0x11CB1), Category::SpacingMark),
	(CodepointRange::new(0x11CB2, 0x11CB3), Category::NonspacingMark),
	(CodepointRange::new(0x11CB4, 0x11CB4), Category::SpacingMark),
	(CodepointRange::new(0x11CB5, 0x11CB6), Category::NonspacingMark),
	(CodepointRange::new(0x11D00, 0x11D06), Category::OtherLetter),
	(CodepointRange::new(0x11D08, 0x11D09), Category::OtherLetter),
	(CodepointRange::new(0x11D0B, 0x11D30), Category::OtherLetter),
	(CodepointRange::new(0x11D31, 0x11D36), Category::NonspacingMark),
	(CodepointRange::new(0x11D3A, 0x11D3A), Category::NonspacingMark),
	(CodepointRange::new(0x11D3C, 0x11D3D), Category::NonspacingMark),
	(CodepointRange::new(0x11D3F, 0x11D45), Category::NonspacingMark),
	(CodepointRange::new(0x11D46, 0x11D46), Category::OtherLetter),
	(CodepointRange::new(0x11D47, 0x11D47), Category::NonspacingMark),
	(CodepointRange::new(0x11D50, 0x11D59), Category::DecimalNumber),
	(CodepointRange::new(0x11D60, 0x11D65), Category::OtherLetter),
	(CodepointRange::new(0x11D67, 0x11D68), Category::OtherLetter),
	(CodepointRange::new(0x11D6A, 0x11D89), Category::OtherLetter),
	(CodepointRange::new(0x11D8A, 0x11D8E), Category::SpacingMark),
	(CodepointRange::new(0x11D90, 0x11D91), Category::NonspacingMark),
	(CodepointRange::new(0x11D93, 0x11D94), Category::SpacingMark),
	(CodepointRange::new(0x11D95, 0x11D95), Category::NonspacingMark),
	(CodepointRange::new(0x11D96, 0x11D96), Category::SpacingMark),
	(CodepointRange::new(0x11D97, 0x11D97), Category::NonspacingMark),
	(CodepointRange::new(0x11D98, 0x11D98), Category::OtherLetter),
	(CodepointRange::new(0x11DA0, 0x11DA9), Category::DecimalNumber),
	(CodepointRange::new(0x11EE0, 0x11EF2), Category::OtherLetter),
	(CodepointRange::new(0x11EF3, 0x11EF4), Category::NonspacingMark),
	(CodepointRange::new(0x11EF5, 0x11EF6), Category::SpacingMark),
	(CodepointRange::new(0x11EF7, 0x11EF8), Category::OtherPunctuation),
	(CodepointRange::new(0x11FB0, 0x11FB0), Category::OtherLetter),
	(CodepointRange::new(0x11FC0, 0x11FD4), Category::OtherNumber),
	(CodepointRange::new(0x11FD5, 0x11FDC), Category::OtherSymbol),
	(CodepointRange::new(0x11FDD, 0x11FE0), Category::CurrencySymbol),
	(CodepointRange::new(0x11FE1, 0x11FF1), Category::OtherSymbol),
	(CodepointRange::new(0x11FFF, 0x11FFF), Category::OtherPunctuation),
	(CodepointRange::new(0x12000, 0x12399), Category::OtherLetter),
	(CodepointRange::new(0x12400, 0x1246E), Category::LetterNumber),
	(CodepointRange::new(0x12470, 0x12474), Category::OtherPunctuation),
	(CodepointRange::new(0x12480, 0x12543), Category::OtherLetter),
	(CodepointRange::new(0x12F90, 0x12FF0), Category::OtherLetter),
	(CodepointRange::new(0x12FF1, 0x12FF2), Category::OtherPunctuation),
	(CodepointRange::new(0x13000, 0x1342E), Category::OtherLetter),
	(CodepointRange::new(0x13430, 0x13438), Category::Format),
	(CodepointRange::new(0x14400, 0x14646), Category::OtherLetter),
	(CodepointRange::new(0x16800, 0x16A38), Category::OtherLetter),
	(CodepointRange::new(0x16A40, 0x16A5E), Category::OtherLetter),
	(CodepointRange::new(0x16A60, 0x16A69), Category::DecimalNumber),
	(CodepointRange::new(0x16A6E, 0x16A6F), Category::OtherPunctuation),
	(CodepointRange::new(0x16A70, 0x16ABE), Category::OtherLetter),
	(CodepointRange::new(0x16AC0, 0x16AC9), Category::DecimalNumber),
	(CodepointRange::new(0x16AD0, 0x16AED), Category::OtherLetter),
	(CodepointRange::new(0x16AF0, 0x16AF4), Category::NonspacingMark),
	(CodepointRange::new(0x16AF5, 0x16AF5), Category::OtherPunctuation),
	(CodepointRange::new(0x16B00, 0x16B2F), Category::OtherLetter),
	(CodepointRange::new(0x16B30, 0x16B36), Category::NonspacingMark),
	(CodepointRange::new(0x16B37, 0x16B3B), Category::OtherPunctuation),
	(CodepointRange::new(0x16B3C, 0x16B3F), Category::OtherSymbol),
	(CodepointRange::new(0x16B40, 0x16B43), Category::ModifierLetter),
	(CodepointRange::new(0x16B44, 0x16B44), Category::OtherPunctuation),
	(CodepointRange::new(0x16B45, 0x16B45), Category::OtherSymbol),
	(CodepointRange::new(0x16B50, 0x16B59), Category::DecimalNumber),
	(CodepointRange::new(0x16B5B, 0x16B61), Category::OtherNumber),
	(CodepointRange::new(0x16B63, 0x16B77), Category::OtherLetter),
	(CodepointRange::new(0x16B7D, 0x16B8F), Category::OtherLetter),
	(CodepointRange::new(0x16E40, 0x16E5F), Category::UppercaseLetter),
	(CodepointRange::new(0x16E60, 0x16E7F), Category::LowercaseLetter),
	(CodepointRange::new(0x16E80, 0x16E96), Category::OtherNumber),
	(CodepointRange::new(0x16E97, 0x16E9A), Category::OtherPunctuation),
	(CodepointRange::new(0x16F00, 0x16F4A), Category::OtherLetter),
	(CodepointRange::new(0x16F4F, 0x16F4F), Category::NonspacingMark),
	(CodepointRange::new(0x16F50, 0x16F50), Category::OtherLetter),
	(CodepointRange::new(0x16F51, 0x16F87), Category::SpacingMark),
	(CodepointRange::new(0x16F8F, 0x16F92), Category::NonspacingMark),
	(CodepointRange::new(0x16F93, 0x16F9F), Category::ModifierLetter),
	(CodepointRange::new(0x16FE0, 0x16FE1), Category::ModifierLetter),
	(CodepointRange::new(0x16FE2, 0x16FE2), Category::OtherPunctuation),
	(CodepointRange::new(0x16FE3, 0x16FE3), Category::ModifierLetter),
	(CodepointRange::new(0x16FE4, 0x16FE4), Category::NonspacingMark),
	(CodepointRange::new(0x16FF0, 0x16FF1), Category::SpacingMark),
	(CodepointRange::new(0x17000, 0x187F7), Category::OtherLetter),
	(CodepointRange::new(0x18800, 0x18CD5), Category::OtherLetter),
	(CodepointRange::new(0x18D00, 0x18D08), Category::OtherLetter),
	(CodepointRange::new(0x1AFF0, 0x1AFF3), Category::ModifierLetter),
	(CodepointRange::new(0x1AFF5, 0x1AFFB), Category::ModifierLetter),
	(CodepointRange::new(0x1AFFD, 0x1AFFE), Category::ModifierLetter),
	(CodepointRange::new(0x1B000, 0x1B122), Category::OtherLetter),
	(CodepointRange::new(0x1B150, 0x1B152), Category::OtherLetter),
	(CodepointRange::new(0x1B164, 0x1B167), Category::OtherLetter),
	(CodepointRange::new(0x1B170, 0x1B2FB), Category::OtherLetter),
	(CodepointRange::new(0x1BC00, 0x1BC6A), Category::OtherLetter),
	(CodepointRange::new(0x1BC70, 0x1BC7C), Category::OtherLetter),
	(CodepointRange::new(0x1BC80, 0x1BC88), Category::OtherLetter),
	(CodepointRange::new(0x1BC90, 0x1BC99), Category::OtherLetter),
	(CodepointRange::new(0x1BC9C, 0x1BC9C), Category::OtherSymbol),
	(CodepointRange::new(0x1BC9D, 0x1BC9E), Category::NonspacingMark),
	(CodepointRange::new(0x1BC9F, 0x1BC9F), Category::OtherPunctuation),
	(CodepointRange::new(0x1BCA0, 0x1BCA3), Category::Format),
	(CodepointRange::new(0x1CF00, 0x1CF2D), Category::NonspacingMark),
	(CodepointRange::new(0x1CF30, 0x1CF46), Category::NonspacingMark),
	(CodepointRange::new(0x1CF50, 0x1CFC3), Category::OtherSymbol),
	(CodepointRange::new(0x1D000, 0x1D0F5), Category::OtherSymbol),
	(CodepointRange::new(0x1D100, 0x1D126), Category::OtherSymbol),
	(CodepointRange::new(0x1D129, 0x1D164), Category::OtherSymbol),
	(CodepointRange::new(0x1D165, 0x1D166), Category::SpacingMark),
	(CodepointRange::new(0x1D167, 0x1D169), Category::NonspacingMark),
	(CodepointRange::new(0x1D16A, 0x1D16C), Category::OtherSymbol),
	(CodepointRange::new(0x1D16D, 0x1D172), Category::SpacingMark),
	(CodepointRange::new(0x1D173, 0x1D17A), Category::Format),
	(CodepointRange::new(0x1D17B, 0x1D182), Category::NonspacingMark),
	(CodepointRange::new(0x1D183, 0x1D184), Category::OtherSymbol),
	(CodepointRange::new(0x1D185, 0x1D18B), Category::NonspacingMark),
	(CodepointRange::new(0x1D18C, 0x1D1A9), Category::OtherSymbol),
	(CodepointRange::new(0x1D1AA, 0x1D1AD), Category::NonspacingMark),
	(CodepointRange::new(0x1D1AE, 0x1D1EA), Category::OtherSymbol),
	(CodepointRange::new(0x1D200, 0x1D241), Category::OtherSymbol),
	(CodepointRange::new(0x1D242, 0x1D244), Category::NonspacingMark),
	(CodepointRange::new(0x1D245, 0x1D245), Category::OtherSymbol),
	(CodepointRange::new(0x1D2E0, 0x1D2F3), Category::OtherNumber),
	(CodepointRange::new(0x1D300, 0x1D356), Category::OtherSymbol),
	(CodepointRange::new(0x1D360, 0x1D378), Category::OtherNumber),
	(CodepointRange::new(0x1D400, 0x1D419), Category::UppercaseLetter),
	(CodepointRange::new(0x1D41A, 0x1D433), Category::LowercaseLetter),
	(CodepointRange::new(0x1D434, 0x1D44D), Category::UppercaseLetter),
	(CodepointRange::new(0x1D44E, 0x1D454), Category::LowercaseLetter),
	(CodepointRange::new(0x1D456, 0x1D467), Category::LowercaseLetter),
	(CodepointRange::new(0x1D468, 0x1D481), Category::UppercaseLetter),
	(CodepointRange::new(0x1D482, 0x1D49B), Category::LowercaseLetter),
	(CodepointRange::new(0x1D49C, 0x1D49C), Category::UppercaseLetter),
	(CodepointRange::new(0x1D49E, 0x1D49F), Category::UppercaseLetter),
	(CodepointRange::new(0x1D4A2, 0x1D4A2), Category::UppercaseLetter),
	(CodepointRange::new(0x1D4A5, 0x1D4A6), Category::UppercaseLetter),
	(CodepointRange::new(0x1D4A9, 0x1D4AC), Category::UppercaseLetter),
	(CodepointRange::new(0x1D4AE, 0x1D4B5), Category::UppercaseLetter),
	(CodepointRange::new(0x1D4B6, 0x1D4B9), Category::LowercaseLetter),
	(CodepointRange::new(0x1D4BB, 0x1D4BB), Category::LowercaseLetter),
	(CodepointRange::new(0x1D4BD, 0x1D4C3), Category::LowercaseLetter),
	(CodepointRange::new(0x1D4C5, 0x1D4CF), Category::LowercaseLetter),
	(CodepointRange::new(0x1D4D0, 0x1D4E9), Category::UppercaseLetter),
	(CodepointRange::new(0x1D4EA, 0x1D503), Category::LowercaseLetter),
	(CodepointRange::new(0x1D504, 0x1D505), Category::UppercaseLetter),
	(CodepointRange::new(0x1D507, 0x1D50A), Category::UppercaseLetter),
	(CodepointRange::new(0x1D50D, 0x1D514), Category::UppercaseLetter),
	(CodepointRange::new(0x1D516, 0x1D51C), Category::UppercaseLetter),
	(CodepointRange::new(0x1D51E, 0x1D537), Category::LowercaseLetter),
	(CodepointRange::new(0x1D538, 0x1D539), Category::UppercaseLetter),
	(CodepointRange::new(0x1D53B, 0x1D53E), Category::UppercaseLetter),
	(CodepointRange::new(0x1D540, 0x1D544), Category::UppercaseLetter),
	(CodepointRange::new(0x1D546, 0x1D546), Category::UppercaseLetter),
	(CodepointRange::new(0x1D54A, 0x1D550), Category::UppercaseLetter),
	(CodepointRange::new(0x1D552, 0x1D56B), Category::LowercaseLetter),
	(CodepointRange::new(0x1D56C, 0x1D585), Category::UppercaseLetter),
	(CodepointRange::new(0x1D586, 0x1D59F), Category::LowercaseLetter),
	(CodepointRange::new(0x1D5A0, 0x1D5B9), Category::UppercaseLetter),
	(CodepointRange::new(0x1D5BA, 0x1D5D3), Category::LowercaseLetter),
	(CodepointRange::new(0x1D5D4, 0x1D5ED), Category::UppercaseLetter),
	(CodepointRange::new(0x1D5EE, 0x1D607), Category::LowercaseLetter),
	(CodepointRange::new(0x1D608, 0x1D621), Category::UppercaseLetter),
	(CodepointRange::new(0x1D622, 0x1D63B), Category::LowercaseLetter),
	(CodepointRange::new(0x1D63C, 0x1D655), Category::UppercaseLetter),
	(CodepointRange::new(0x1D656, 0x1D66F), Category::LowercaseLetter),
	(CodepointRange::new(0x1D670, 0x1D689), Category::UppercaseLetter),
	(CodepointRange::new(0x1D68A, 0x1D6A5), Category::LowercaseLetter),
	(CodepointRange::new(0x1D6A8, 0x1D6C0), Category::UppercaseLetter),
	(CodepointRange::new(0x1D6C1, 0x1D6C1), Category::MathSymbol),
	(CodepointRange::new(0x1D6C2, 0x1D6DA), Category::LowercaseLetter),
	(CodepointRange::new(0x1D6DB, 0x1D6DB), Category::MathSymbol),
	(CodepointRange::new(0x1D6DC, 0x1D6E1), Category::LowercaseLetter),
	(CodepointRange::new(0x1D6E2, 0x1D6FA), Category::UppercaseLetter),
	(CodepointRange::new(0x1D6FB, 0x1D6FB), Category::MathSymbol),
	(CodepointRange::new(0x1D6FC, 0x1D714), Category::LowercaseLetter),
	(CodepointRange::new(0x1D715, 0x1D715), Category::MathSymbol),
	(CodepointRange::new(0x1D716, 0x1D71B), Category::LowercaseLetter),
	(CodepointRange::new(0x1D71C, 0x1D734), Category::UppercaseLetter),
	(CodepointRange::new(0x1D735, 0x1D735), Category::MathSymbol),
	(CodepointRange::new(0x1D736, 0x1D74E), Category::LowercaseLetter),
	(CodepointRange::new(0x1D74F, 0x1D74F), Category::MathSymbol),
	(CodepointRange::new(0x1D750, 0x1D755), Category::LowercaseLetter),
	(CodepointRange::new(0x1D756, 0x1D76E), Category::UppercaseLetter),
	(CodepointRange::new(0x1D76F, 0x1D76F), Category::MathSymbol),
	(CodepointRange::new(0x1D770, 0x1D788), Category::LowercaseLetter),
	(CodepointRange::new(0x1D789, 0x1D789), Category::MathSymbol),
	(CodepointRange::new(0x1D78A, 0x1D78F), Category::LowercaseLetter),
	(CodepointRange::new(0x1D790, 0x1D7A8), Category::UppercaseLetter),
	(CodepointRange::new(0x1D7A9, 0x1D7A9), Category::MathSymbol),
	(CodepointRange::new(0x1D7AA, 0x1D7C2), Category::LowercaseLetter),
	(CodepointRange::new(0x1D7C3, 0x1D7C3), Category::MathSymbol),
	(CodepointRange::new(0x1D7C4, 0x1D7C9), Category::LowercaseLetter),
	(CodepointRange::new(0x1D7CA, 0x1D7CA), Category::UppercaseLetter),
	(CodepointRange::new(0x1D7CB, 0x1D7CB), Category::LowercaseLetter),
	(CodepointRange::new(0x1D7CE, 0x1D7FF), Category::DecimalNumber),
	(CodepointRange::new(0x1D800, 0x1D9FF), Category::OtherSymbol),
	(CodepointRange::new(0x1DA00, 0x1DA36), Category::NonspacingMark),
	(CodepointRange::new(0x1DA37, 0x1DA3A), Category::OtherSymbol),
	(CodepointRange::new(0x1DA3B, 0x1DA6C), Category::NonspacingMark),
	(CodepointRange::new(0x1DA6D, 0x1DA74), Category::OtherSymbol),
	(CodepointRange::new(0x1DA75, 0x1DA75), Category::NonspacingMark),
	(CodepointRange::new(0x1DA76, 0x1DA83), Category::OtherSymbol),
	(CodepointRange::new(0x1DA84, 0x1DA84), Category::NonspacingMark),
	(CodepointRange::new(0x1DA85, 0x1DA86), Category::OtherSymbol),
	(CodepointRange::new(0x1DA87, 0x1DA8B), Category::OtherPunctuation),
	(CodepointRange::new(0x1DA9B, 0x1DA9F), Category::NonspacingMark),
	(CodepointRange::new(0x1DAA1, 0x1DAAF), Category::NonspacingMark),
	(CodepointRange::new(0x1DF00, 0x1DF09), Category::LowercaseLetter),
	(CodepointRange::new(0x1DF0A, 0x1DF0A), Category::OtherLetter),
	(CodepointRange::new(0x1DF0B, 0x1DF1E), Category::LowercaseLetter),
	(CodepointRange::new(0x1E000, 0x1E006), Category::NonspacingMark),
	(CodepointRange::new(0x1E008, 0x1E018), Category::NonspacingMark),
	(CodepointRange::new(0x1E01B, 0x1E021), Category::NonspacingMark),
	(CodepointRange::new(0x1E023, 0x1E024), Category::NonspacingMark),
	(CodepointRange::new(0x1E026, 0x1E02A), Category::NonspacingMark),
	(CodepointRange::new(0x1E100, 0x1E12C), Category::OtherLetter),
	(CodepointRange::new(0x1E130, 0x1E136), Category::NonspacingMark),
	(CodepointRange::new(0x1E137, 0x1E13D), Category::ModifierLetter),
	(CodepointRange::new(0x1E140, 0x1E149), Category::DecimalNumber),
	(CodepointRange::new(0x1E14E, 0x1E14E), Category::OtherLetter),
	(CodepointRange::new(0x1E14F, 0x1E14F), Category::OtherSymbol),
	(CodepointRange::new(0x1E290, 0x1E2AD), Category::OtherLetter),
	(CodepointRange::new(0x1E2AE, 0x1E2AE), Category::NonspacingMark),
	(CodepointRange::new(0x1E2C0, 0x1E2EB), Category::OtherLetter),
	(CodepointRange::new(0x1E2EC, 0x1E2EF), Category::NonspacingMark),
	(CodepointRange::new(0x1E2F0, 0x1E2F9), Category::DecimalNumber),
	(CodepointRange::new(0x1E2FF, 0x1E2FF), Category::CurrencySymbol),
	(CodepointRange::new(0x1E7E0, 0x1E7E6), Category::OtherLetter),
	(CodepointRange::new(0x1E7E8, 0x1E7EB), Category::OtherLetter),
	(CodepointRange::new(0x1E7ED, 0x1E7EE), Category::OtherLetter),
	(CodepointRange::new(0x1E7F0, 0x1E7FE), Category::OtherLetter),
	(CodepointRange::new(0x1E800, 0x1E8C4), Category::OtherLetter),
	(CodepointRange::new(0x1E8C7, 0x1E8CF), Category::OtherNumber),
	(CodepointRange::new(0x1E8D0, 0x1E8D6), Category::NonspacingMark),
	(CodepointRange::new(0x1E900, 0x1E921), Category::UppercaseLetter),
	(CodepointRange::new(0x1E922, 0x1E943), Category::LowercaseLetter),
	(CodepointRange::new(0x1E944, 0x1E94A), Category::NonspacingMark),
	(CodepointRange::new(0x1E94B, 0x1E94B), Category::ModifierLetter),
	(CodepointRange::new(0x1E950, 0x1E959), Category::DecimalNumber),
	(CodepointRange::new(0x1E95E, 0x1E95F), Category::OtherPunctuation),
	(CodepointRange::new(0x1EC71, 0x1ECAB), Category::OtherNumber),
	(CodepointRange::new(0x1ECAC, 0x1ECAC), Category::OtherSymbol),
	(CodepointRange::new(0x1ECAD, 0x1ECAF), Category::OtherNumber),
	(CodepointRange::new(0x1ECB0, 0x1ECB0), Category::CurrencySymbol),
	(CodepointRange::new(0x1ECB1, 0x1ECB4), Category::OtherNumber),
	(CodepointRange::new(0x1ED01, 0x1ED2D), Category::OtherNumber),
	(CodepointRange::new(0x1ED2E, 0x1ED2E), Category::OtherSymbol),
	(CodepointRange::new(0x1ED2F, 0x1ED3D), Category::OtherNumber),
	(CodepointRange::new(0x1EE00, 0x1EE03), Category::OtherLetter),
	(CodepointRange::new(0x1EE05, 0x1EE1F), Category::OtherLetter),
	(CodepointRange::new(0x1EE21, 0x1EE22), Category::OtherLetter),
	(CodepointRange::new(0x1EE24, 0x1EE24), Category::OtherLetter),
	(CodepointRange::new(0x1EE27, 0x1EE27), Category::OtherLetter),
	(CodepointRange::new(0x1EE29, 0x1EE32), Category::OtherLetter),
	(CodepointRange::new(0x1EE34, 0x1EE37), Category::OtherLetter),
	(CodepointRange::new(0x1EE39, 0x1EE39), Category::OtherLetter),
	(CodepointRange::new(0x1EE3B, 0x1EE3B), Category::OtherLetter),
	(CodepointRange::new(0x1EE42, 0x1EE42), Category::OtherLetter),
	(CodepointRange::new(0x1EE47, 0x1EE47), Category::OtherLetter),
	(CodepointRange::new(0x1EE49, 0x1EE49), Category::OtherLetter),
	(CodepointRange::new(0x1EE4B, 0x1EE4B), Category::OtherLetter),
	(CodepointRange::new(0x1EE4D, 0x1EE4F), Category::OtherLetter),
	(CodepointRange::new(0x1EE51, 0x1EE52), Category::OtherLetter),
	(CodepointRange::new(0x1EE54, 0x1EE54), Category::OtherLetter),
	(CodepointRange::new(0x1EE57, 0x1EE57), Category::OtherLetter),
	(CodepointRange::new(0x1EE59, 0x1EE59), Category::OtherLetter),
	(CodepointRange::new(0x1EE5B, 0x1EE5B), Category::OtherLetter),
	(CodepointRange::new(0x1EE5D, 0x1EE5D), Category::OtherLetter),
	(CodepointRange::new(0x1EE5F, 0x1EE5F), Category::OtherLetter),
	(CodepointRange::new(0x1EE61, 0x1EE62), Category::OtherLetter),
	(CodepointRange::new(0x1EE64, 0x1EE64), Category::OtherLetter),
	(CodepointRange::new(0x1EE67, 0x1EE6A), Category::OtherLetter),
	(CodepointRange::new(0x1EE6C, 0x1EE72), Category::OtherLetter),
	(CodepointRange::new(0x1EE74, 0x1EE77), Category::OtherLetter),
	(CodepointRange::new(0x1EE79, 0x1EE7C), Category::OtherLetter),
	(CodepointRange::new(0x1EE7E, 0x1EE7E), Category::OtherLetter),
	(CodepointRange::new(0x1EE80, 0x1EE89), Category::OtherLetter),
	(CodepointRange::new(0x1EE8B, 0x1EE9B), Category::OtherLetter),
	(CodepointRange::new(0x1EEA1, 0x1EEA3), Category::OtherLetter),
	(CodepointRange::new(0x1EEA5, 0x1EEA9), Category::OtherLetter),
	(CodepointRange::new(0x1EEAB, 0x1EEBB), Category::OtherLetter),
	(CodepointRange::new(0x1EEF0, 0x1EEF1), Category::MathSymbol),
	(CodepointRange::new(0x1F000, 0x1F02B), Category::OtherSymbol),
	(CodepointRange::new(0x1F030, 0x1F093), Category::OtherSymbol),
	(CodepointRange::new(0x1F0A0, 0x1F0AE), Category::OtherSymbol),
	(CodepointRange::new(0x1F0B1, 0x1F0BF), Category::OtherSymbol),
	(CodepointRange::new(0x1F0C1, 0x1F0CF), Category::OtherSymbol),
	(CodepointRange::new(0x1F0D1, 0x1F0F5), Category::OtherSymbol),
	(CodepointRange::new(0x1F100, 0x1F10C), Category::OtherNumber),
	(CodepointRange::new(0x1F10D, 0x1F1AD), Category::OtherSymbol),
	(CodepointRange::new(0x1F1E6, 0x1F202), Category::OtherSymbol),
	(CodepointRange::new(0x1F210, 0x1F23B), Category::OtherSymbol),
	(CodepointRange::new(0x1F240, 0x1F248), Category::OtherSymbol),
	(CodepointRange::new(0x1F250, 0x1F251), Category::OtherSymbol),
	(CodepointRange::new(0x1F260, 0x1F265), Category::OtherSymbol),
	(CodepointRange::new(0x1F300, 0x1F3FA), Category::OtherSymbol),
	(CodepointRange::new(0x1F3FB, 0x1F3FF), Category::ModifierSymbol),
	(CodepointRange::new(0x1F400, 0x1F6D7), Category::OtherSymbol),
	(CodepointRange::new(0x1F6DD, 0x1F6EC), Category::OtherSymbol),
	(CodepointRange::new(0x1F6F0, 0x1F6FC), Category::OtherSymbol),
	(CodepointRange::new(0x1F700, 0x1F773), Category::OtherSymbol),
	(CodepointRange::new(0x1F780, 0x1F7D8), Category::OtherSymbol),
	(CodepointRange::new(0x1F7E0, 0x1F7EB), Category::OtherSymbol),
	(CodepointRange::new(0x1F7F0, 0x1F7F0), Category::OtherSymbol),
	(CodepointRange::new(0x1F800, 0x1F80B), Category::OtherSymbol),
	(CodepointRange::new(0x1F810, 0x1F847), Category::OtherSymbol),
	(CodepointRange::new(0x1F850, 0x1F859), Category::OtherSymbol),
	(CodepointRange::new(0x1F860, 0x1F887), Category::OtherSymbol),
	(CodepointRange::new(0x1F890, 0x1F8AD), Category::OtherSymbol),
	(CodepointRange::new(0x1F8B0, 0x1F8B1), Category::OtherSymbol),
	(CodepointRange::new(0x1F900, 0x1FA53), Category::OtherSymbol),
	(CodepointRange::new(0x1FA60, 0x1FA6D), Category::OtherSymbol),
	(CodepointRange::new(0x1FA70, 0x1FA74), Category::OtherSymbol),
	(CodepointRange::new(0x1FA78, 0x1FA7C), Category::OtherSymbol),
	(CodepointRange::new(0x1FA80, 0x1FA86), Category::OtherSymbol),
	(CodepointRange::new(0x1FA90, 0x1FAAC), Category::OtherSymbol),
	(CodepointRange::new(0x1FAB0, 0x1FABA), Category::OtherSymbol),
	(CodepointRange::new(0x1FAC0, 0x1FAC5), Category::OtherSymbol),
	(CodepointRange::new(0x1FAD0, 0x1FAD9), Category::OtherSymbol),
	(CodepointRange::new(0x1FAE0, 0x1FAE7), Category::OtherSymbol),
	(CodepointRange::new(0x1FAF0, 0x1FAF6), Category::OtherSymbol),
	(CodepointRange::new(0x1FB00, 0x1FB92), Category::OtherSymbol),
	(CodepointRange::new(0x1FB94, 0x1FBCA), Category::OtherSymbol),
	(CodepointRange::new(0x1FBF0, 0x1FBF9), Category::DecimalNumber),
	(CodepointRange::new(0x20000, 0x2A6DF), Category::OtherLetter),
	(CodepointRange::new(0x2A700, 0x2B738), Category::OtherLetter),
	(CodepointRange::new(0x2B740, 0x2B81D), Category::OtherLetter),
	(CodepointRange::new(0x2B820, 0x2CEA1), Category::OtherLetter),
	(CodepointRange::new(0x2CEB0, 0x2EBE0), Category::OtherLetter),
	(CodepointRange::new(0x2F800, 0x2FA1D), Category::OtherLetter),
	(CodepointRange::new(0x30000, 0x3134A), Category::OtherLetter),
	(CodepointRange::new(0xE0001, 0xE0001), Category::Format),
	(CodepointRange::new(0xE0020, 0xE007F), Category::Format),
	(CodepointRange::new(0xE0100, 0xE01EF), Category::NonspacingMark),
	(CodepointRange::new(0xF0000, 0xFFFFD), Category::PrivateUse),
	(CodepointRange::new(0x100000, 0x10FFFD), Category::PrivateUse),
];

pub(crate) static SCRIPTS: [(CodepointRange, Script); 942] = [
	(CodepointRange::new(0x0000, 0x0040), Script::Common),
	(CodepointRange::new(0x0041, 0x005A), Script::Latin),
	(CodepointRange::new(0x005B, 0x0060), Script::Common),
	(CodepointRange::new(0x0061, 0x007A), Script::Latin),
	(CodepointRange::new(0x007B, 0x00A9), Script::Common),
	(CodepointRange::new(0x00AA, 0x00AA), Script::Latin),
	(CodepointRange::new(0x00AB, 0x00B9), Script::Common),
	(CodepointRange::new(0x00BA, 0x00BA), Script::Latin),
	(CodepointRange::new(0x00BB, 0x00BF), Script::Common),
	(CodepointRange::new(0x00C0, 0x00D6), Script::Latin),
	(CodepointRange::new(0x00D7, 0x00D7), Script::Common),
	(CodepointRange::new(0x00D8, 0x00F6), Script::Latin),
	(CodepointRange::new(0x00F7, 0x00F7), Script::Common),
	(CodepointRange::new(0x00F8, 0x02B8), Script::Latin),
	(CodepointRange::new(0x02B9, 0x02DF), Script::Common),
	(CodepointRange::new(0x02E0, 0x02E4), Script::Latin),
	(CodepointRange::new(0x02E5, 0x02E9), Script::Common),
	(CodepointRange::new(0x02EA, 0x02EB), Script::Bopomofo),
	(CodepointRange::new(0x02EC, 0x02FF), Script::Common),
	(CodepointRange::new(0x0300, 0x036F), Script::Inherited),
	(CodepointRange::new(0x0370, 0x0373), Script::Greek),
	(CodepointRange::new(0x0374, 0x0374), Script::Common),
	(CodepointRange::new(0x0375, 0x0377), Script::Greek),
	(CodepointRange::new(0x037A, 0x037D), Script::Greek),
	(CodepointRange::new(0x037E, 0x037E), Script::Common),
	(CodepointRange::new(0x037F, 0x037F), Script::Greek),
	(CodepointRange::new(0x0384, 0x0384), Script::Greek),
	(CodepointRange::new(0x0385, 0x0385), Script::Common),
	(CodepointRange::new(0x0386, 0x0386), Script::Greek),
	(CodepointRange::new(0x0387, 0x0387), Script::Common),
	(CodepointRange::new(0x0388, 0x038A), Script::Greek),
	(CodepointRange::new(0x038C, 0x038C), Script::Greek),
	(CodepointRange::new(0x038E, 0x03A1), Script::Greek),
	(CodepointRange::new(0x03A3, 0x03E1), Script::Greek),
	(CodepointRange::new(0x03E2, 0x03EF), Script::Coptic),
	(CodepointRange::new(0x03F0, 0x03FF), Script::Greek),
	(CodepointRange::new(0x0400, 0x0484), Script::Cyrillic),
	(CodepointRange::new(0x0485, 0x0486), Script::Inherited),
	(CodepointRange::new(0x0487, 0x052F), Script::Cyrillic),
	(CodepointRange::new(0x0531, 0x0556), Script::Armenian),
	(CodepointRange::new(0x0559, 0x058A), Script::Armenian),
	(CodepointRange::new(0x058D, 0x058F), Script::Armenian),
	(CodepointRange::new(0x0591, 0x05C7), Script::Hebrew),
	(CodepointRange::new(0x05D0, 0x05EA), Script::Hebrew),
	(CodepointRange::new(0x05EF, 0x05F4), Script::Hebrew),
	(CodepointRange::new(0x0600, 0x0604), Script::Arabic),
	(CodepointRange::new(0x0605, 0x0605), Script::Common),
	(CodepointRange::new(0x0606, 0x060B), Script::Arabic),
	(CodepointRange::new(0x060C, 0x060C), Script::Common),
	(CodepointRange::new(0x060D, 0x061A), Script::Arabic),
	(CodepointRange::new(0x061B, 0x061B), Script::Common),
	(CodepointRange::new(0x061C, 0x061E), Script::Arabic),
	(CodepointRange::new(0x061F, 0x061F), Script::Common),
	(CodepointRange::new(0x0620, 0x063F), Script::Arabic),
	(CodepointRange::new(0x0640, 0x0640), Script::Common),
	(CodepointRange::new(0x0641, 0x064A), Script::Arabic),
	(CodepointRange::new(0x064B, 0x0655), Script::Inherited),
	(CodepointRange::new(0x0656, 0x066F), Script::Arabic),
	(CodepointRange::new(0x0670, 0x0670), Script::Inherited),
	(CodepointRange::new(0x0671, 0x06DC), Script::Arabic),
	(CodepointRange::new(0x06DD, 0x06DD), Script::Common),
	(CodepointRange::new(0x06DE, 0x06FF), Script::Arabic),
	(CodepointRange::new(0x0700, 0x070D), Script::Syriac),
	(CodepointRange::new(0x070F, 0x074A), Script::Syriac),
	(CodepointRange::new(0x074D, 0x074F), Script::Syriac),
	(CodepointRange::new(0x0750, 0x077F), Script::Arabic),
	(CodepointRange::new(0x0780, 0x07B1), Script::Thaana),
	(CodepointRange::new(0x07C0, 0x07FA), Script::Nko),
	(CodepointRange::new(0x07FD, 0x07FF), Script::Nko),
	(CodepointRange::new(0x0800, 0x082D), Script::Samaritan),
	(CodepointRange::new(0x0830, 0x083E), Script::Samaritan),
	(CodepointRange::new(0x0840, 0x085B), Script::Mandaic),
	(CodepointRange::new(0x085E, 0x085E), Script::Mandaic),
	(CodepointRange::new(0x0860, 0x086A), Script::Syriac),
	(CodepointRange::new(0x0870, 0x088E), Script::Arabic),
	(CodepointRange::new(0x0890, 0x0891), Script::Arabic),
	(CodepointRange::new(0x0898, 0x08E1), Script::Arabic),
	(CodepointRange::new(0x08E2, 0x08E2), Script::Common),
	(CodepointRange::new(0x08E3, 0x08FF), Script::Arabic),
	(CodepointRange::new(0x0900, 0x0950), Script::Devanagari),
	(CodepointRange::new(0x0951, 0x0954), Script::Inherited),
	(CodepointRange::new(0x0955, 0x0963), Script::Devanagari),
	(CodepointRange::new(0x0964, 0x0965), Script::Common),
	(CodepointRange::new(0x0966, 0x097F), Script::Devanagari),
	(CodepointRange::new(0x0980, 0x0983), Script::Bengali),
	(CodepointRange::new(0x0985, 0x098C), Script::Bengali),
	(CodepointRange::new(0x098F, 0x0990), Script::Bengali),
	(CodepointRange::new(0x0993, 0x09A8), Script::Bengali),
	(CodepointRange::new(0x09AA, 0x09B0), Script::Bengali),
	(CodepointRange::new(0x09B2, 0x09B2), Script::Bengali),
	(CodepointRange::new(0x09B6, 0x09B9), Script::Bengali),
	(CodepointRange::new(0x09BC, 0x09C4), Script::Bengali),
	(CodepointRange::new(0x09C7, 0x09C8), Script::Bengali),
	(CodepointRange::new(0x09CB, 0x09CE), Script::Bengali),
	(CodepointRange::new(0x09D7, 0x09D7), Script::Bengali),
	(CodepointRange::new(0x09DC, 0x09DD), Script::Bengali),
	(CodepointRange::new(0x09DF, 0x09E3), Script::Bengali),
	(CodepointRange::new(0x09E6, 0x09FE), Script::Bengali),
	(CodepointRange::new(0x0A01, 0x0A03), Script::Gurmukhi),
	(CodepointRange::new(0x0A05, 0x0A0A), Script::Gurmukhi),
	(CodepointRange::new(0x0A0F, 0x0A10), Script::Gurmukhi),
	(CodepointRange::new(0x0A13, 0x0A28), Script::Gurmukhi),
	(CodepointRange::new(0x0A2A, 0x0A30), Script::Gurmukhi),
	(CodepointRange::new(0x0A32, 0x0A33), Script::Gurmukhi),
	(CodepointRange::new(0x0A35, 0x0A36), Script::Gurmukhi),
	(CodepointRange::new(0x0A38, 0x0A39), Script::Gurmukhi),
	(CodepointRange::new(0x0A3C, 0x0A3C), Script::Gurmukhi),
	(CodepointRange::new(0x0A3E, 0x0A42), Script::Gurmukhi),
	(CodepointRange::new(0x0A47, 0x0A48), Script::Gurmukhi),
	(CodepointRange::new(0x0A4B, 0x0A4D), Script::Gurmukhi),
	(CodepointRange::new(0x0A51, 0x0A51), Script::Gurmukhi),
	(CodepointRange::new(0x0A59, 0x0A5C), Script::Gurmukhi),
	(CodepointRange::new(0x0A5E, 0x0A5E), Script::Gurmukhi),
	(CodepointRange::new(0x0A66, 0x0A76), Script::Gurmukhi),
	(CodepointRange::new(0x0A81, 0x0A83), Script::Gujarati),
	(CodepointRange::new(0x0A85, 0x0A8D), Script::Gujarati),
	(CodepointRange::new(0x0A8F, 0x0A91), Script::Gujarati),
	(CodepointRange::new(0x0A93, 0x0AA8), Script::Gujarati),
	(CodepointRange::new(0x0AAA, 0x0AB0), Script::Gujarati),
	(CodepointRange::new(0x0AB2, 0x0AB3), Script::Gujarati),
	(CodepointRange::new(0x0AB5, 0x0AB9), Script::Gujarati),
	(CodepointRange::new(0x0ABC, 0x0AC5), Script::Gujarati),
	(CodepointRange::new(0x0AC7, 0x0AC9), Script::Gujarati),
	(CodepointRange::new(0x0ACB, 0x0ACD), Script::Gujarati),
	(CodepointRange::new(0x0AD0, 0x0AD0), Script::Gujarati),
	(CodepointRange::new(0x0AE0, 0x0AE3), Script::Gujarati),
	(CodepointRange::new(0x0AE6, 0x0AF1), Script::Gujarati),
	(CodepointRange::new(0x0AF9, 0x0AFF), Script::Gujarati),
	(CodepointRange::new(0x0B01, 0x0B03), Script::Oriya),
	(CodepointRange::new(0x0B05, 0x0B0C), Script::Oriya),
	(CodepointRange::new(0x0B0F, 0x0B10), Script::Oriya),
	(CodepointRange::new(0x0B13, 0x0B28), Script::Oriya),
	(CodepointRange::new(0x0B2A, 0x0B30), Script::Oriya),
	(CodepointRange::new(0x0B32, 0x0B33), Script::Oriya),
	(CodepointRange::new(0x0B35, 0x0B39), Script::Oriya),
	(CodepointRange::new(0x0B3C, 0x0B44), Script::Oriya),
	(CodepointRange::new(0x0B47, 0x0B48), Script::Oriya),
	(CodepointRange::new(0x0B4B, 0x0B4D), Script::Oriya),
	(CodepointRange::new(0x0B55, 0x0B57), Script::Oriya),
	(CodepointRange::new(0x0B5C, 0x0B5D), Script::Oriya),
	(CodepointRange::new(0x0B5F, 0x0B63), Script::Oriya),
	(CodepointRange::new(0x0B66, 0x0B77), Script::Oriya),
	(CodepointRange::new(0x0B82, 0x0B83), Script::Tamil),
	(CodepointRange::new(0x0B85, 0x0B8A), Script::Tamil),
	(CodepointRange::new(0x0B8E, 0x0B90), Script::Tamil),
	(CodepointRange::new(0x0B92, 0x0B95), Script::Tamil),
	(CodepointRange::new(0x0B99, 0x0B9A), Script::Tamil),
	(CodepointRange::new(0x0B9C, 0x0B9C), Script::Tamil),
	(CodepointRange::new(0x0B9E, 0x0B9F), Script::Tamil),
	(CodepointRange::new(0x0BA3, 0x0BA4), Script::Tamil),
	(CodepointRange::new(0x0BA8, 0x0BAA), Script::Tamil),
	(CodepointRange::new(0x0BAE, 0x0BB9), Script::Tamil),
	(CodepointRange::new(0x0BBE, 0x0BC2), Script::Tamil),
	(CodepointRange::new(0x0BC6, 0x0BC8), Script::Tamil),
	(CodepointRange::new(0x0BCA, 0x0BCD), Script::Tamil),
	(CodepointRange::new(0x0BD0, 0x0BD0), Script::Tamil),
	(CodepointRange::new(0x0BD7, 0x0BD7), Script::Tamil),
	(CodepointRange::new(0x0BE6, 0x0BFA), Script::Tamil),
	(CodepointRange::new(0x0C00, 0x0C0C), Script::Telugu),
	(CodepointRange::new(0x0C0E, 0x0C10), Script::Telugu),
	(CodepointRange::new(0x0C12, 0x0C28), Script::Telugu),
	(CodepointRange::new(0x0C2A, 0x0C39), Script::Telugu),
	(CodepointRange::new(0x0C3C, 0x0C44), Script::Telugu),
	(CodepointRange::new(0x0C46, 0x0C48), Script::Telugu),
	(CodepointRange::new(0x0C4A, 0x0C4D), Script::Telugu),
	(CodepointRange::new(0x0C55, 0x0C56), Script::Telugu),
	(CodepointRange::new(0x0C58, 0x0C5A), Script::Telugu),
	(CodepointRange::new(0x0C5D, 0x0C5D), Script::Telugu),
	(CodepointRange::new(0x0C60, 0x0C63), Script::Telugu),
	(CodepointRange::new(0x0C66, 0x0C6F), Script::Telugu),
	(CodepointRange::new(0x0C77, 0x0C7F), Script::Telugu),
	(CodepointRange::new(0x0C80, 0x0C8C), Script::Kannada),
	(CodepointRange::new(0x0C8E, 0x0C90), Script::Kannada),
	(CodepointRange::new(0x0C92, 0x0CA8), Script::Kannada),
	(CodepointRange::new(0x0CAA, 0x0CB3), Script::Kannada),
	(CodepointRange::new(0x0CB5, 0x0CB9), Script::Kannada),
	(CodepointRange::new(0x0CBC, 0x0CC4), Script::Kannada),
	(CodepointRange::new(0x0CC6, 0x0CC8), Script::Kannada),
	(CodepointRange::new(0x0CCA, 0x0CCD), Script::Kannada),
	(CodepointRange::new(0x0CD5, 0x0CD6), Script::Kannada),
	(CodepointRange::new(0x0CDD, 0x0CDE), Script::Kannada),
	(CodepointRange::new(0x0CE0, 0x0CE3), Script::Kannada),
	(CodepointRange::new(0x0CE6, 0x0CEF), Script::Kannada),
	(CodepointRange::new(0x0CF1, 0x0CF2), Script::Kannada),
	(CodepointRange::new(0x0D00, 0x0D0C), Script::Malayalam),
	(CodepointRange::new(0x0D0E, 0x0D10), Script::Malayalam),
	(CodepointRange::new(0x0D12, 0x0D44), Script::Malayalam),
	(CodepointRange::new(0x0D46, 0x0D48), Script::Malayalam),
	(CodepointRange::new(0x0D4A, 0x0D4F), Script::Malayalam),
	(CodepointRange::new(0x0D54, 0x0D63), Script::Malayalam),
	(CodepointRange::new(0x0D66, 0x0D7F), Script::Malayalam),
	(CodepointRange::new(0x0D81, 0x0D83), Script::Sinhala),
	(CodepointRange::new(0x0D85, 0x0D96), Script::Sinhala),
	(CodepointRange::new(0x0D9A, 0x0DB1), Script::Sinhala),
	(CodepointRange::new(0x0DB3, 0x0DBB), Script::Sinhala),
	(CodepointRange::new(0x0DBD, 0x0DBD), Script::Sinhala),
	(CodepointRange::new(0x0DC0, 0x0DC6), Script::Sinhala),
	(CodepointRange::new(0x0DCA, 0x0DCA), Script::Sinhala),
	(CodepointRange::new(0x0DCF, 0x0DD4), Script::Sinhala),
	(CodepointRange::new(0x0DD6, 0x0DD6), Script::Sinhala),
	(CodepointRange::new(0x0DD8, 0x0DDF), Script::Sinhala),
	(CodepointRange::new(0x0DE6, 0x0DEF), Script::Sinhala),
	(CodepointRange::new(0x0DF2, 0x0DF4), Script::Sinhala),
	(CodepointRange::new(0x0E01, 0x0E3A), Script::Thai),
	(CodepointRange::new(0x0E3F, 0x0E3F), Script::Common),
	(CodepointRange::new(0x0E40, 0x0E5B), Script::Thai),
	(CodepointRange::new(0x0E81, 0x0E82), Script::Lao),
	(CodepointRange::new(0x0E84, 0x0E84), Script::Lao),
	(CodepointRange::new(0x0E86, 0x0E8A), Script::Lao),
	(CodepointRange::new(0x0E8C, 0x0EA3), Script::Lao),
	(CodepointRange::new(0x0EA5, 0x0EA5), Script::Lao),
	(CodepointRange::new(0x0EA7, 0x0EBD), Script::Lao),
	(CodepointRange::new(0x0EC0, 0x0EC4), Script::Lao),
	(CodepointRange::new(0x0EC6, 0x0EC6), Script::Lao),
	(CodepointRange::new(0x0EC8, 0x0ECD), Script::Lao),
	(CodepointRange::new(0x0ED0, 0x0ED9), Script::Lao),
	(CodepointRange::new(0x0EDC, 0x0EDF), Script::Lao),
	(CodepointRange::new(0x0F00, 0x0F47), Script::Tibetan),
	(CodepointRange::new(0x0F49, 0x0F6C), Script::Tibetan),
	(CodepointRange::new(0x0F71, 0x0F97), Script::Tibetan),
	(CodepointRange::new(0x0F99, 0x0FBC), Script::Tibetan),
	(CodepointRange::new(0x0FBE, 0x0FCC), Script::Tibetan),
	(CodepointRange::new(0x0FCE, 0x0FD4), Script::Tibetan),
	(CodepointRange::new(0x0FD5, 0x0FD8), Script::Common),
	(CodepointRange::new(0x0FD9, 0x0FDA), Script::Tibetan),
	(CodepointRange::new(0x1000, 0x109F), Script::Myanmar),
	(CodepointRange::new(0x10A0, 0x10C5), Script::Georgian),
	(CodepointRange::new(0x10C7, 0x10C7), Script::Georgian),
	(CodepointRange::new(0x10CD, 0x10CD), Script::Georgian),
	(CodepointRange::new(0x10D0, 0x10FA), Script::Georgian),
	(CodepointRange::new(0x10FB, 0x10FB), Script::Common),
	(CodepointRange::new(0x10FC, 0x10FF), Script::Georgian),
	(CodepointRange::new(0x1100, 0x11FF), Script::Hangul),
	(CodepointRange::new(0x1200, 0x1248), Script::Ethiopic),
	(CodepointRange::new(0x124A, 0x124D), Script::Ethiopic),
	(CodepointRange::new(0x1250, 0x1256), Script::Ethiopic),
	(CodepointRange::new(0x1258, 0x1258), Script::Ethiopic),
	(CodepointRange::new(0x125A, 0x125D), Script::Ethiopic),
	(CodepointRange::new(0x1260, 0x1288), Script::Ethiopic),
	(CodepointRange::new(0x128A, 0x128D), Script::Ethiopic),
	(CodepointRange::new(0x1290, 0x12B0), Script::Ethiopic),
	(CodepointRange::new(0x12B2, 0x12B5), Script::Ethiopic),
	(CodepointRange::new(0x12B8, 0x12BE), Script::Ethiopic),
	(CodepointRange::new(0x12C0, 0x12C0), Script::Ethiopic),
	(CodepointRange::new(0x12C2, 0x12C5), Script::Ethiopic),
	(CodepointRange::new(0x12C8, 0x12D6), Script::Ethiopic),
	(CodepointRange::new(0x12D8, 0x1310), Script::Ethiopic),
	(CodepointRange::new(0x1312, 0x1315), Script::Ethiopic),
	(CodepointRange::new(0x1318, 0x135A), Script::Ethiopic),
	(CodepointRange::new(0x135D, 0x137C), Script::Ethiopic),
	(CodepointRange::new(0x1380, 0x1399), Script::Ethiopic),
	(CodepointRange::new(0x13A0, 0x13F5), Script::Cherokee),
	(CodepointRange::new(0x13F8, 0x13FD), Script::Cherokee),
	(CodepointRange::new(0x1400, 0x167F), Script::CanadianAboriginal),
	(CodepointRange::new(0x1680, 0x169C), Script::Ogham),
	(CodepointRange::new(0x16A0, 0x16EA), Script::Runic),
	(CodepointRange::new(0x16EB, 0x16ED), Script::Common),
	(CodepointRange::new(0x16EE, 0x16F8), Script::Runic),
	(CodepointRange::new(0x1700, 0x1715), Script::Tagalog),
	(CodepointRange::new(0x171F, 0x171F), Script::Tagalog),
	(CodepointRange::new(0x1720, 0x1734), Script::Hanunoo),
	(CodepointRange::new(0x1735, 0x1736), Script::Common),
	(CodepointRange::new(0x1740, 0x1753), Script::Buhid),
	(CodepointRange::new(0x1760, 0x176C), Script::Tagbanwa),
	(CodepointRange::new(0x176E, 0x1770), Script::Tagbanwa),
	(CodepointRange::new(0x1772, 0x1773), Script::Tagbanwa),
	(CodepointRange::new(0x1780, 0x17DD), Script::Khmer),
	(CodepointRange::new(0x17E0, 0x17E9), Script::Khmer),
	(CodepointRange::new(0x17F0, 0x17F9), Script::Khmer),
	(CodepointRange::new(0x1800, 0x1801), Script::Mongolian),
	(CodepointRange::new(0x1802, 0x1803), Script::Common),
	(CodepointRange::new(0x1804, 0x1804), Script::Mongolian),
	(CodepointRange::new(0x1805, 0x1805), Script::Common),
	(CodepointRange::new(0x1806, 0x1819), Script::Mongolian),
	(CodepointRange::new(0x1820, 0x1878), Script::Mongolian),
	(CodepointRange::new(0x1880, 0x18AA), Script::Mongolian),
	(CodepointRange::new(0x18B0, 0x18F5), Script::CanadianAboriginal),
	(CodepointRange::new(0x1900, 0x191E), Script::Limbu),
	(CodepointRange::new(0x1920, 0x192B), Script::Limbu),
	(CodepointRange::new(0x1930, 0x193B), Script::Limbu),
	(CodepointRange::new(0x1940, 0x1940), Script::Limbu),
	(CodepointRange::new(0x1944, 0x194F), Script::Limbu),
	(CodepointRange::new(0x1950, 0x196D), Script::TaiLe),
	(CodepointRange::new(0x1970, 0x1974), Script::TaiLe),
	(CodepointRange::new(0x1980, 0x19AB), Script::NewTaiLue),
	(CodepointRange::new(0x19B0, 0x19C9), Script::NewTaiLue),
	(CodepointRange::new(0x19D0, 0x19DA), Script::NewTaiLue),
	(CodepointRange::new(0x19DE, 0x19DF), Script::NewTaiLue),
	(CodepointRange::new(0x19E0, 0x19FF), Script::Khmer),
	(CodepointRange::new(0x1A00, 0x1A1B), Script::Buginese),
	(CodepointRange::new(0x1A1E, 0x1A1F), Script::Buginese),
	(CodepointRange::new(0x1A20, 0x1A5E), Script::TaiTham),
	(CodepointRange::new(0x1A60, 0x1A7C), Script::TaiTham),
	(CodepointRange::new(0x1A7F, 0x1A89), Script::TaiTham),
	(CodepointRange::new(0x1A90, 0x1A99), Script::TaiTham),
	(CodepointRange::new(0x1AA0, 0x1AAD), Script::TaiTham),
	(CodepointRange::new(0x1AB0, 0x1ACE), Script::Inherited),
	(CodepointRange::new(0x1B00, 0x1B4C), Script::Balinese),
	(CodepointRange::new(0x1B50, 0x1B7E), Script::Balinese),
	(CodepointRange::new(0x1B80, 0x1BBF), Script::Sundanese),
	(CodepointRange::new(0x1BC0, 0x1BF3), Script::Batak),
	(CodepointRange::new(0x1BFC, 0x1BFF), Script::Batak),
	(CodepointRange::new(0x1C00, 0x1C37), Script::Lepcha),
	(CodepointRange::new(0x1C3B, 0x1C49), Script::Lepcha),
	(CodepointRange::new(0x1C4D, 0x1C4F), Script::Lepcha),
	(CodepointRange::new(0x1C50, 0x1C7F), Script::OlChiki),
	(CodepointRange::new(0x1C80, 0x1C88), Script::Cyrillic),
	(CodepointRange::new(0x1C90, 0x1CBA), Script::Georgian),
	(CodepointRange::new(0x1CBD, 0x1CBF), Script::Georgian),
	(CodepointRange::new(0x1CC0, 0x1CC7), Script::Sundanese),
	(CodepointRange::new(0x1CD0, 0x1CD2), Script::Inherited),
	(CodepointRange::new(0x1CD3, 0x1CD3), Script::Common),
	(CodepointRange::new(0x1CD4, 0x1CE0), Script::Inherited),
	(CodepointRange::new(0x1CE1, 0x1CE1), Script::Common),
	(CodepointRange::new(0x1CE2, 0x1CE8), Script::Inherited),
	(CodepointRange::new(0x1CE9, 0x1CEC), Script::Common),
	(CodepointRange::new(0x1CED, 0x1CED), Script::Inherited),
	(CodepointRange::new(0x1CEE, 0x1CF3), Script::Common),
	(CodepointRange::new(0x1CF4, 0x1CF4), Script::Inherited),
	(CodepointRange::new(0x1CF5, 0x1CF7), Script::Common),
	(CodepointRange::new(0x1CF8, 0x1CF9), Script::Inherited),
	(CodepointRange::new(0x1CFA, 0x1CFA), Script::Common),
	(CodepointRange::new(0x1D00, 0x1D25), Script::Latin),
	(CodepointRange::new(0x1D26, 0x1D2A), Script::Greek),
	(CodepointRange::new(0x1D2B, 0x1D2B), Script::Cyrillic),
	(CodepointRange::new(0x1D2C, 0x1D5C), Script::Latin),
	(CodepointRange::new(0x1D5D, 0x1D61), Script::Greek),
	(CodepointRange::new(0x1D62, 0x1D65), Script::Latin),
	(CodepointRange::new(0x1D66, 0x1D6A), Script::Greek),
	(CodepointRange::new(0x1D6B, 0x1D77), Script::Latin),
	(CodepointRange::new(0x1D78, 0x1D78), Script::Cyrillic),
	(CodepointRange::new(0x1D79, 0x1DBE), Script::Latin),
	(CodepointRange::new(0x1DBF, 0x1DBF), Script::Greek),
	(CodepointRange::new(0x1DC0, 0x1DFF), Script::Inherited),
	(CodepointRange::new(0x1E00, 0x1EFF), Script::Latin),
	(CodepointRange::new(0x1F00, 0x1F15), Script::Greek),
	(CodepointRange::new(0x1F18, 0x1F1D), Script::Greek),
	(CodepointRange::new(0x1F20, 0x1F45), Script::Greek),
	(CodepointRange::new(0x1F48, 0x1F4D), Script::Greek),
	(CodepointRange::new(0x1F50, 0x1F57), Script::Greek),
	(CodepointRange::new(0x1F59, 0x1F59), Script::Greek),
	(CodepointRange::new(0x1F5B, 0x1F5B), Script::Greek),
	(CodepointRange::new(0x1F5D, 0x1F5D), Script::Greek),
	(CodepointRange::new(0x1F5F, 0x1F7D), Script::Greek),
	(CodepointRange::new(0x1F80, 0x1FB4), Script::Greek),
	(CodepointRange::new(0x1FB6, 0x1FC4), Script::Greek),
	(CodepointRange::new(0x1FC6, 0x1FD3), Script::Greek),
	(CodepointRange::new(0x1FD6, 0x1FDB), Script::Greek),
	(CodepointRange::new(0x1FDD, 0x1FEF), Script::Greek),
	(CodepointRange::new(0x1FF2, 0x1FF4), Script::Greek),
	(CodepointRange::new(0x1FF6, 0x1FFE), Script::Greek),
	(CodepointRange::new(0x2000, 0x200B), Script::Common),
	(CodepointRange::new(0x200C, 0x200D), Script::Inherited),
	(CodepointRange::new(0x200E, 0x2064), Script::Common),
	(CodepointRange::new(0x2066, 0x2070), Script::Common),
	(CodepointRange::new(0x2071, 0x2071), Script::Latin),
	(CodepointRange::new(0x2074, 0x207E), Script::Common),
	(CodepointRange::new(0x207F, 0x207F), Script::Latin),
	(CodepointRange::new(0x2080, 0x208E), Script::Common),
	(CodepointRange::new(0x2090, 0x209C), Script::Latin),
	(CodepointRange::new(0x20A0, 0x20C0), Script::Common),
	(CodepointRange::new(0x20D0, 0x20F0), Script::Inherited),
	(CodepointRange::new(0x2100, 0x2125), Script::Common),
	(CodepointRange::new(0x2126, 0x2126), Script::Greek),
	(CodepointRange::new(0x2127, 0x2129), Script::Common),
	(CodepointRange::new(0x212A, 0x212B), Script::Latin),
	(CodepointRange::new(0x212C, 0x2131), Script::Common),
	(CodepointRange::new(0x2132, 0x2132), Script::Latin),
	(CodepointRange::new(0x2133, 0x214D), Script::Common),
	(CodepointRange::new(0x214E, 0x214E), Script::Latin),
	(CodepointRange::new(0x214F, 0x215F), Script::Common),
	(CodepointRange::new(0x2160, 0x2188), Script::Latin),
	(CodepointRange::new(0x2189, 0x218B), Script::Common),
	(CodepointRange::new(0x2190, 0x2426), Script::Common),
	(CodepointRange::new(0x2440, 0x244A), Script::Common),
	(CodepointRange::new(0x2460, 0x27FF), Script::Common),
	(CodepointRange::new(0x2800, 0x28FF), Script::Braille),
	(CodepointRange::new(0x2900, 0x2B73), Script::Common),
	(CodepointRange::new(0x2B76, 0x2B95), Script::Common),
	(CodepointRange::new(0x2B97, 0x2BFF), Script::Common),
	(CodepointRange::new(0x2C00, 0x2C5F), Script::Glagolitic),
	(CodepointRange::new(0x2C60, 0x2C7F), Script::Latin),
	(CodepointRange::new(0x2C80, 0x2CF3), Script::Coptic),
	(CodepointRange::new(0x2CF9, 0x2CFF), Script::Coptic),
	(CodepointRange::new(0x2D00, 0x2D25), Script::Georgian),
	(CodepointRange::new(0x2D27, 0x2D27), Script::Georgian),
	(CodepointRange::new(0x2D2D, 0x2D2D), Script::Georgian),
	(CodepointRange::new(0x2D30, 0x2D67), Script::Tifinagh),
	(CodepointRange::new(0x2D6F, 0x2D70), Script::Tifinagh),
	(CodepointRange::new(0x2D7F, 0x2D7F), Script::Tifinagh),
	(CodepointRange::new(0x2D80, 0x2D96), Script::Ethiopic),
	(CodepointRange::new(0x2DA0, 0x2DA6), Script::Ethiopic),
	(CodepointRange::new(0x2DA8, 0x2DAE), Script::Ethiopic),
	(CodepointRange::new(0x2DB0, 0x2DB6), Script::Ethiopic),
	(CodepointRange::new(0x2DB8, 0x2DBE), Script::Ethiopic),
	(CodepointRange::new(0x2DC0, 0x2DC6), Script::Ethiopic),
	(CodepointRange::new(0x2DC8, 0x2DCE), Script::Ethiopic),
	(CodepointRange::new(0x2DD0, 0x2DD6), Script::Ethiopic),
	(CodepointRange::new(0x2DD8, 0x2DDE), Script::Ethiopic),
	(CodepointRange::new(0x2DE0, 0x2DFF), Script::Cyrillic),
	(CodepointRange::new(0x2E00, 0x2E5D), Script::Common),
	(CodepointRange::new(0x2E80, 0x2E99), Script::Han),
	(CodepointRange::new(0x2E9B, 0x2EF3), Script::Han),
	(CodepointRange::new(0x2F00, 0x2FD5), Script::Han),
	(CodepointRange::new(0x2FF0, 0x2FFB), Script::Common),
	(CodepointRange::new(0x3000, 0x3004), Script::Common),
	(CodepointRange::new(0x3005, 0x3005), Script::Han),
	(CodepointRange::new(0x3006, 0x3006), Script::Common),
	(CodepointRange::new(0x3007, 0x3007), Script::Han),
	(CodepointRange::new(0x3008, 0x3020), Script::Common),
	(CodepointRange::new(0x3021, 0x3029), Script::Han),
	(CodepointRange::new(0x302A, 0x302D), Script::Inherited),
	(CodepointRange::new(0x302E, 0x302F), Script::Hangul),
	(CodepointRange::new(0x3030, 0x3037), Script::Common),
	(CodepointRange::new(0x3038, 0x303B), Script::Han),
	(CodepointRange::new(0x303C, 0x303F), Script::Common),
	(CodepointRange::new(0x3041, 0x3096), Script::Hiragana),
	(CodepointRange::new(0x3099, 0x309A), Script::Inherited),
	(CodepointRange::new(0x309B, 0x309C), Script::Common),
	(CodepointRange::new(0x309D, 0x309F), Script::Hiragana),
	(CodepointRange::new(0x30A0, 0x30A0), Script::Common),
	(CodepointRange::new(0x30A1, 0x30FA), Script::Katakana),
	(CodepointRange::new(0x30FB, 0x30FC), Script::Common),
	(CodepointRange::new(0x30FD, 0x30FF), Script::Katakana),
	(CodepointRange::new(0x3105, 0x312F), Script::Bopomofo),
	(CodepointRange::new(0x3131, 0x318E), Script::Hangul),
	(CodepointRange::new(0x3190, 0x319F), Script::Common),
	(CodepointRange::new(0x31A0, 0x31BF), Script::Bopomofo),
	(CodepointRange::new(0x31C0, 0x31E3), Script::Common),
	(CodepointRange::new(0x31F0, 0x31FF), Script::Katakana),
	(CodepointRange::new(0x3200, 0x321E), Script::Hangul),
	(CodepointRange::new(0x3220, 0x325F), Script::Common),
	(CodepointRange::new(0x3260, 0x327E), Script::Hangul),
	(CodepointRange::new(0x327F, 0x32CF), Script::Common),
	(CodepointRange::new(0x32D0, 0x32FE), Script::Katakana),
	(CodepointRange::new(0x32FF, 0x32FF), Script::Common),
	(CodepointRange::new(0x3300, 0x3357), Script::Katakana),
	(CodepointRange::new(0x3358, 0x33FF), Script::Common),
	(CodepointRange::new(0x3400, 0x4DBF), Script::Han),
	(CodepointRange::new(0x4DC0, 0x4DFF), Script::Common),
	(CodepointRange::new(0x4E00, 0x9FFF), Script::Han),
	(CodepointRange::new(0xA000, 0xA48C), Script::Yi),
	(CodepointRange::new(0xA490, 0xA4C6), Script::Yi),
	(CodepointRange::new(0xA4D0, 0xA4FF), Script::Lisu),
	(CodepointRange::new(0xA500, 0xA62B), Script::Vai),
	(CodepointRange::new(0xA640, 0xA69F), Script::Cyrillic),
	(CodepointRange::new(0xA6A0, 0xA6F7), Script::Bamum),
	(CodepointRange::new(0xA700, 0xA721), Script::Common),
	(CodepointRange::new(0xA722, 0xA787), Script::Latin),
	(CodepointRange::new(0xA788, 0xA78A), Script::Common),
	(CodepointRange::new(0xA78B, 0xA7CA), Script::Latin),
	(CodepointRange::new(0xA7D0, 0xA7D1), Script::Latin),
	(CodepointRange::new(0xA7D3, 0xA7D3), Script::Latin),
	(CodepointRange::new(0xA7D5, 0xA7D9), Script::Latin),
	(CodepointRange::new(0xA7F2, 0xA7FF), Script::Latin),
	(CodepointRange::new(0xA800, 0xA82C), Script::SylotiNagri),
	(CodepointRange::new(0xA830, 0xA839), Script::Common),
	(CodepointRange::new(0xA840, 0xA877), Script::PhagsPa),
	(CodepointRange::new(0xA880, 0xA8C5), Script::Saurashtra),
	(CodepointRange::new(0xA8CE, 0xA8D9), Script::Saurashtra),
	(CodepointRange::new(0xA8E0, 0xA8FF), Script::Devanagari),
	(CodepointRange::new(0xA900, 0xA92D), Script::KayahLi),
	(CodepointRange::new(0xA92E, 0xA92E), Script::Common),
	(CodepointRange::new(0xA92F, 0xA92F), Script::KayahLi),
	(CodepointRange::new(0xA930, 0xA953), Script::Rejang),
	(CodepointRange::new(0xA95F, 0xA95F), Script::Rejang),
	(CodepointRange::new(0xA960, 0xA97C), Script::Hangul),
	(CodepointRange::new(0xA980, 0xA9CD), Script::Javanese),
	(CodepointRange::new(0xA9CF, 0xA9CF), Script::Common),
	(CodepointRange::new(0xA9D0, 0xA9D9), Script::Javanese),
	(CodepointRange::new(0xA9DE, 0xA9DF), Script::Javanese),
	(CodepointRange::new(0xA9E0, 0xA9FE), Script::Myanmar),
	(CodepointRange::new(0xAA00, 0xAA36), Script::Cham),
	(CodepointRange::new(0xAA40, 0xAA4D), Script::Cham),
	(CodepointRange::new(0xAA50, 0xAA59), Script::Cham),
	(CodepointRange::new(0xAA5C, 0xAA5F), Script::Cham),
	(CodepointRange::new(0xAA60, 0xAA7F), Script::Myanmar),
	(CodepointRange::new(0xAA80, 0xAAC2), Script::TaiViet),
	(CodepointRange::new(0xAADB, 0xAADF), Script::TaiViet),
	(CodepointRange::new(0xAAE0, 0xAAF6), Script::MeeteiMayek),
	(CodepointRange::new(0xAB01, 0xAB06), Script::Ethiopic),
	(CodepointRange::new(0xAB09, 0xAB0E), Script::Ethiopic),
	(CodepointRange::new(0xAB11, 0xAB16), Script::Ethiopic),
	(CodepointRange::new(0xAB20, 0xAB26), Script::Ethiopic),
	(CodepointRange::new(0xAB28, 0xAB2E), Script::Ethiopic),
	(CodepointRange::new(0xAB30, 0xAB5A), Script::Latin),
	(CodepointRange::new(0xAB5B, 0xAB5B), Script::Common),
	(CodepointRange::new(0xAB5C, 0xAB64), Script::Latin),
	(CodepointRange::new(0xAB65, 0xAB65), Script::Greek),
	(CodepointRange::new(0xAB66, 0xAB69), Script::Latin),
	(CodepointRange::new(0xAB6A, 0xAB6B), Script::Common),
	(CodepointRange::new(0xAB70, 0xABBF), Script::Cherokee),
	(CodepointRange::new(0xABC0, 0xABED), Script::MeeteiMayek),
	(CodepointRange::new(0xABF0, 0xABF9), Script::MeeteiMayek),
	(CodepointRange::new(0xAC00, 0xD7A3), Script::Hangul),
	(CodepointRange::new(0xD7B0, 0xD7C6), Script::Hangul),
	(CodepointRange::new(0xD7CB, 0xD7FB), Script::Hangul),
	(CodepointRange::new(0xF900, 0xFA6D), Script::Han),
	(CodepointRange::new(0xFA70, 0xFAD9), Script::Han),
	(CodepointRange::new(0xFB00, 0xFB06), Script::Latin),
	(CodepointRange::new(0xFB13, 0xFB17), Script::Armenian),
	(CodepointRange::new(0xFB1D, 0xFB36), Script::Hebrew),
	(CodepointRange::new(0xFB38, 0xFB3C), Script::Hebrew),
	(CodepointRange::new(0xFB3E, 0xFB3E), Script::Hebrew),
	(CodepointRange::new(0xFB40, 0xFB41), Script::Hebrew),
	(CodepointRange::new(0xFB43, 0xFB44), Script::Hebrew),
	(CodepointRange::new(0xFB46, 0xFB4F), Script::Hebrew),
	(CodepointRange::new(0xFB50, 0xFBC2), Script::Arabic),
	(CodepointRange::new(0xFBD3, 0xFD3D), Script::Arabic),
	(CodepointRange::new(0xFD3E, 0xFD3F), Script::Common),
	(CodepointRange::new(0xFD40, 0xFD8F), Script::Arabic),
	(CodepointRange::new(0xFD92, 0xFDC7), Script::Arabic),
	(CodepointRange::new(0xFDCF, 0xFDCF), Script::Arabic),
	(CodepointRange::new(0xFDF0, 0xFDFF), Script::Arabic),
	(CodepointRange::new(0xFE00, 0xFE0F), Script::Inherited),
	(CodepointRange::new(0xFE10, 0xFE19), Script::Common),
	(CodepointRange::new(0xFE20, 0xFE2D), Script::Inherited),
	(CodepointRange::new(0xFE2E, 0xFE2F), Script::Cyrillic),
	(CodepointRange::new(0xFE30, 0xFE52), Script::Common),
	(CodepointRange::new(0xFE54, 0xFE66), Script::Common),
	(CodepointRange::new(0xFE68, 0xFE6B), Script::Common),
	(CodepointRange::new(0xFE70, 0xFE74), Script::Arabic),
	(CodepointRange::new(0xFE76, 0xFEFC), Script::Arabic),
	(CodepointRange::new(0xFEFF, 0xFEFF), Script::Common),
	(CodepointRange::new(0xFF01, 0xFF20), Script::Common),
	(CodepointRange::new(0xFF21, 0xFF3A), Script::Latin),
	(CodepointRange::new(0xFF3B, 0xFF40), Script::Common),
	(CodepointRange::new(0xFF41, 0xFF5A), Script::Latin),
	(CodepointRange::new(0xFF5B, 0xFF65), Script::Common),
	(CodepointRange::new(0xFF66, 0xFF6F), Script::Katakana),
	(CodepointRange::new(0xFF70, 0xFF70), Script::Common),
	(CodepointRange::new(0xFF71, 0xFF9D), Script::Katakana),
	(CodepointRange::new(0xFF9E, 0xFF9F), Script::Common),
	(CodepointRange::new(0xFFA0, 0xFFBE), Script::Hangul),
	(CodepointRange::new(0xFFC2, 0xFFC7), Script::Hangul),
	(CodepointRange::new(0xFFCA, 0xFFCF), Script::Hangul),
	(CodepointRange::new(0xFFD2, 0xFFD7), Script::Hangul),
	(CodepointRange::new(0xFFDA, 0xFFDC), Script::Hangul),
	(CodepointRange::new(0xFFE0, 0xFFE6), Script::Common),
	(CodepointRange::new(0xFFE8, 0xFFEE), Script::Common),
	(CodepointRange::new(0xFFF9, 0xFFFD), Script::Common),
	(CodepointRange::new(0x10000, 0x1000B), Script::LinearB),
	(CodepointRange::new(0x1000D, 0x10026), Script::LinearB),
	(CodepointRange::new(0x10028, 0x1003A), Script::LinearB),
	(CodepointRange::new(0x1003C, 0x1003D), Script::LinearB),
	(CodepointRange::new(0x1003F, 0x1004D), Script::LinearB),
	(CodepointRange::new(0x10050, 0x1005D), Script::LinearB),
	(CodepointRange::new(0x10080, 0x100FA), Script::LinearB),
	(CodepointRange::new(0x10100, 0x10102), Script::Common),
	(CodepointRange::new(0x10107, 0x10133), Script::Common),
	(CodepointRange::new(0x10137, 0x1013F), Script::Common),
	(CodepointRange::new(0x10140, 0x1018E), Script::Greek),
	(CodepointRange::new(0x10190, 0x1019C), Script::Common),
	(CodepointRange::new(0x101A0, 0x101A0), Script::Greek),
	(CodepointRange::new(0x101D0, 0x101FC), Script::Common),
	(CodepointRange::new(0x101FD, 0x101FD), Script::Inherited),
	(CodepointRange::new(0x10280, 0x1029C), Script::Lycian),
	(CodepointRange::new(0x102A0, 0x102D0), Script::Carian),
	(CodepointRange::new(0x102E0, 0x102E0), Script::Inherited),
	(CodepointRange::new(0x102E1, 0x102FB), Script::Common),
	(CodepointRange::new(0x10300, 0x10323), Script::OldItalic),
	(CodepointRange::new(0x1032D, 0x1032F), Script::OldItalic),
	(CodepointRange::new(0x10330, 0x1034A), Script::Gothic),
	(CodepointRange::new(0x10350, 0x1037A), Script::OldPermic),
	(CodepointRange::new(0x10380, 0x1039D), Script::Ugaritic),
	(CodepointRange::new(0x1039F, 0x1039F), Script::Ugaritic),
	(CodepointRange::new(0x103A0, 0x103C3), Script::OldPersian),
	(CodepointRange::new(0x103C8, 0x103D5), Script::OldPersian),
	(CodepointRange::new(0x10400, 0x1044F), Script::Deseret),
	(CodepointRange::new(0x10450, 0x1047F), Script::Shavian),
	(CodepointRange::new(0x10480, 0x1049D), Script::Osmanya),
	(CodepointRange::new(0x104A0, 0x104A9), Script::Osmanya),
	(CodepointRange::new(0x104B0, 0x104D3), Script::Osage),
	(CodepointRange::new(0x104D8, 0x104FB), Script::Osage),
	(CodepointRange::new(0x10500, 0x10527), Script::Elbasan),
	(CodepointRange::new(0x10530, 0x10563), Script::CaucasianAlbanian),
	(CodepointRange::new(0x1056F, 0x1056F), Script::CaucasianAlbanian),
	(CodepointRange::new(0x10570, 0x1057A), Script::Vithkuqi),
	(CodepointRange::new(0x1057C, 0x1058A), Script::Vithkuqi),
	(CodepointRange::new(0x1058C, 0x10592), Script::Vithkuqi),
	(CodepointRange::new(0x10594, 0x10595), Script::Vithkuqi),
	(CodepointRange::new(0x10597, 0x105A1), Script::Vithkuqi),
	(CodepointRange::new(0x105A3, 0x105B1), Script::Vithkuqi),
	(CodepointRange::new(0x105B3, 0x105B9), Script::Vithkuqi),
	(CodepointRange::new(0x105BB, 0x105BC), Script::Vithkuqi),
	(CodepointRange::new(0x10600, 0x10736), Script::LinearA),
	(CodepointRange::new(0x10740, 0x10755), Script::LinearA),
	(CodepointRange::new(0x10760, 0x10767), Script::LinearA),
	(CodepointRange::new(0x10780, 0x10785), Script::Latin),
	(CodepointRange::new(0x10787, 0x107B0), Script::Latin),
	(CodepointRange::new(0x107B2, 0x107BA), Script::Latin),
	(CodepointRange::new(0x10800, 0x10805), Script::Cypriot),
	(CodepointRange::new(0x10808, 0x10808), Script::Cypriot),
	(CodepointRange::new(0x1080A, 0x10835), Script::Cypriot),
	(CodepointRange::new(0x10837, 0x10838), Script::Cypriot),
	(CodepointRange::new(0x1083C, 0x1083C), Script::Cypriot),
	(CodepointRange::new(0x1083F, 0x1083F), Script::Cypriot),
	(CodepointRange::new(0x10840, 0x10855), Script::ImperialAramaic),
	(CodepointRange::new(0x10857, 0x1085F), Script::ImperialAramaic),
	(CodepointRange::new(0x10860, 0x1087F), Script::Palmyrene),
	(CodepointRange::new(0x10880, 0x1089E), Script::Nabataean),
	(CodepointRange::new(0x108A7, 0x108AF), Script::Nabataean),
	(CodepointRange::new(0x108E0, 0x108F2), Script::Hatran),
	(CodepointRange::new(0x108F4, 0x108F5), Script::Hatran),
	(CodepointRange::new(0x108FB, 0x108FF), Script::Hatran),
	(CodepointRange::new(0x10900, 0x1091B), Script::Phoenician),
	(CodepointRange::new(0x1091F, 0x1091F), Script::Phoenician),
	(CodepointRange::new(0x10920, 0x10939), Script::Lydian),
	(CodepointRange::new(0x1093F, 0x1093F), Script::Lydian),
	(CodepointRange::new(0x10980, 0x1099F), Script::MeroiticHieroglyphs),
	(CodepointRange::new(0x109A0, 0x109B7), Script::MeroiticCursive),
	(CodepointRange::new(0x109BC, 0x109CF), Script::MeroiticCursive),
	(CodepointRange::new(0x109D2, 0x109FF), Script::MeroiticCursive),
	(CodepointRange::new(0x10A00, 0x10A03), Script::Kharoshthi),
	(CodepointRange::new(0x10A05, 0x10A06), Script::Kharoshthi),
	(CodepointRange::new(0x10A0C, 0x10A13), Script::Kharoshthi),
	(CodepointRange::new(0x10A15, 0x10A17), Script::Kharoshthi),
	(CodepointRange::new(0x10A19, 0x10A35), Script::Kharoshthi),
	(CodepointRange::new(0x10A38, 0x10A3A), Script::Kharoshthi),
	(CodepointRange::new(0x10A3F, 0x10A48), Script::Kharoshthi),
	(CodepointRange::new(0x10A50, 0x10A58), Script::Kharoshthi),
	(CodepointRange::new(0x10A60, 0x10A7F), Script::OldSouthArabian),
	(CodepointRange::new(0x10A80, 0x10A9F), Script::OldNorthArabian),
	(CodepointRange::new(0x10AC0, 0x10AE6), Script::Manichaean),
	(CodepointRange::new(0x10AEB, 0x10AF6), Script::Manichaean),
	(CodepointRange::new(0x10B00, 0x10B35), Script::Avestan),
	(CodepointRange::new(0x10B39, 0x10B3F), Script::Avestan),
	(CodepointRange::new(0x10B40, 0x10B55), Script::InscriptionalParthian),
	(CodepointRange::new(0x10B58, 0x10B5F), Script::InscriptionalParthian),
	(CodepointRange::new(0x10B60, 0x10B72), Script::InscriptionalPahlavi),
	(CodepointRange::new(0x10B78, 0x10B7F), Script::InscriptionalPahlavi),
	(CodepointRange::new(0x10B80, 0x10B91), Script::PsalterPahlavi),
	(CodepointRange::new(0x10B99, 0x10B9C), Script::PsalterPahlavi),
	(CodepointRange::new(0x10BA9, 0x10BAF), Script::PsalterPahlavi),
	(CodepointRange::new(0x10C00, 0x10C48), Script::OldTurkic),
	(CodepointRange::new(0x10C80, 0x10CB2), Script::OldHungarian),
	(CodepointRange::new(0x10CC0, 0x10CF2), Script::OldHungarian),
	(CodepointRange::new(0x10CFA, 0x10CFF), Script::OldHungarian),
	(CodepointRange::new(0x10D00, 0x10D27), Script::HanifiRohingya),
	(CodepointRange::new(0x10D30, 0x10D39), Script::HanifiRohingya),
	(CodepointRange::new(0x10E60, 0x10E7E), Script::Arabic),
	(CodepointRange::new(0x10E80, 0x10EA9), Script::Yezidi),
	(CodepointRange::new(0x10EAB, 0x10EAD), Script::Yezidi),
	(CodepointRange::new(0x10EB0, 0x10EB1), Script::Yezidi),
	(CodepointRange::new(0x10F00, 0x10F27), Script::OldSogdian),
	(CodepointRange::new(0x10F30, 0x10F59), Script::Sogdian),
	(CodepointRange::new(0x10F70, 0x10F89), Script::OldUyghur),
	(CodepointRange::new(0x10FB0, 0x10FCB), Script::Chorasmian),
	(CodepointRange::new(0x10FE0, 0x10FF6), Script::Elymaic),
	(CodepointRange::new(0x11000, 0x1104D), Script::Brahmi),
	(CodepointRange::new(0x11052, 0x11075), Script::Brahmi),
	(CodepointRange::new(0x1107F, 0x1107F), Script::Brahmi),
	(CodepointRange::new(0x11080, 0x110C2), Script::Kaithi),
	(CodepointRange::new(0x110CD, 0x110CD), Script::Kaithi),
	(CodepointRange::new(0x110D0, 0x110E8), Script::SoraSompeng),
	(CodepointRange::new(0x110F0, 0x110F9), Script::SoraSompeng),
	(CodepointRange::new(0x11100, 0x11134), Script::Chakma),
	(CodepointRange::new(0x11136, 0x11147), Script::Chakma),
	(CodepointRange::new(0x11150, 0x11176), Script::Mahajani),
	(CodepointRange::new(0x11180, 0x111DF), Script::Sharada),
	(CodepointRange::new(0x111E1, 0x111F4), Script::Sinhala),
	(CodepointRange::new(0x11200, 0x11211), Script::Khojki),
	(CodepointRange::new(0x11213, 0x1123E), Script::Khojki),
	(CodepointRange::new(0x11280, 0x11286), Script::Multani),
	(CodepointRange::new(0x11288, 0x11288), Script::Multani),
	(CodepointRange::new(0x1128A, 0x1128D), Script::Multani),
	(CodepointRange::new(0x1128F, 0x1129D), Script::Multani),
	(CodepointRange::new(0x1129F, 0x112A9), Script::Multani),
	(CodepointRange::new(0x112B0, 0x112EA), Script::Khudawadi),
	(CodepointRange::new(0x112F0, 0x112F9), Script::Khudawadi),
	(CodepointRange::new(0x11300, 0x11303), Script::Grantha),
	(CodepointRange::new(0x11305, 0x1130C), Script::Grantha),
	(CodepointRange::new(0x1130F, 0x11310), Script::Grantha),
	(CodepointRange::new(0x11313, 0x11328), Script::Grantha),
	(CodepointRange::new(0x1132A, 0x11330), Script::Grantha),
	(CodepointRange::new(0x11332, 0x11333), Script::Grantha),
	(CodepointRange::new(0x11335, 0x11339), Script::Grantha),
	(CodepointRange::new(0x1133B, 0x1133B), Script::Inherited),
	(CodepointRange::new(0x1133C, 0x11344), Script::Grantha),
	(CodepointRange::new(0x11347, 0x11348), Script::Grantha),
	(CodepointRange::new(0x1134B, 0x1134D), Script::Grantha),
	(CodepointRange::new(0x11350, 0x11350), Script::Grantha),
	(CodepointRange::new(0x11357, 0x11357), Script::Grantha),
	(CodepointRange::new(0x1135D, 0x11363), Script::Grantha),
	(CodepointRange::new(0x11366, 0x1136C), Script::Grantha),
	(CodepointRange::new(0x11370, 0x11374), Script::Grantha),
	(CodepointRange::new(0x11400, 0x1145B), Script::Newa),
	(CodepointRange::new(0x1145D, 0x11461), Script::Newa),
	(CodepointRange::new(0x11480, 0x114C7), Script::Tirhuta),
	(CodepointRange::new(0x114D0, 0x114D9), Script::Tirhuta),
	(CodepointRange::new(0x11580, 0x115B5), Script::Siddham),
	(CodepointRange::new(0x115B8, 0x115DD), Script::Siddham),
	(CodepointRange::new(0x11600, 0x11644), Script::Modi),
	(CodepointRange::new(0x11650, 0x11659), Script::Modi),
	(CodepointRange::new(0x11660, 0x1166C), Script::Mongolian),
	(CodepointRange::new(0x11680, 0x116B9), Script::Takri),
	(CodepointRange::new(0x116C0, 0x116C9), Script::Takri),
	(CodepointRange::new(0x11700, 0x1171A), Script::Ahom),
	(CodepointRange::new(0x1171D, 0x1172B), Script::Ahom),
	(CodepointRange::new(0x11730, 0x11746), Script::Ahom),
	(CodepointRange::new(0x11800, 0x1183B), Script::Dogra),
	(CodepointRange::new(0x118A0, 0x118F2), Script::WarangCiti),
	(CodepointRange::new(0x118FF, 0x118FF), Script::WarangCiti),
	(CodepointRange::new(0x11900, 0x11906), Script::DivesAkuru),
	(CodepointRange::new(0x11909, 0x11909), Script::DivesAkuru),
	(CodepointRange::new(0x1190C, 0x11913), Script::DivesAkuru),
	(CodepointRange::new(0x11915, 0x11916), Script::DivesAkuru),
	(CodepointRange::new(0x11918, 0x11935), Script::DivesAkuru),
	(CodepointRange::new(0x11937, 0x11938), Script::DivesAkuru),
	(CodepointRange::new(0x1193B, 0x11946), Script::DivesAkuru),
	(CodepointRange::new(0x11950, 0x11959), Script::DivesAkuru),
	(CodepointRange::new(0x119A0, 0x119A7), Script::Nandinagari),
	(CodepointRange::new(0x119AA, 0x119D7), Script::Nandinagari),
	(CodepointRange::new(0x119DA, 0x119E4), Script::Nandinagari),
	(CodepointRange::new(0x11A00, 0x11A47), Script::ZanabazarSquare),
	(CodepointRange::new(0x11A50, 0x11AA2), Script::Soyombo),
	(CodepointRange::new(0x11AB0, 0x11ABF), Script::CanadianAboriginal),
	(CodepointRange::new(0x11AC0, 0x11AF8), Script::PauCinHau),
	(CodepointRange::new(0x11C00, 0x11C08), Script::Bhaiksuki),
	(CodepointRange::new(0x11C0A, 0x11C36), Script::Bhaiksuki),
	(CodepointRange::new(0x11C38, 0x11C45), Script::Bhaiksuki),
	(CodepointRange::new(0x11C50, 0x11C6C), Script::Bhaiksuki),
	(CodepointRange::new(0x11C70, 0x11C8F), Script::Marchen),
	(CodepointRange::new(0x11C92, 0x11CA7), Script::Marchen),
	(CodepointRange::new(0x11CA9, 0x11CB6), Script::Marchen),
	(CodepointRange::new(0x11D00, 0x11D06), Script::MasaramGondi),
	(CodepointRange::new(0x11D08, 0x11D09), Script::MasaramGondi),
	(CodepointRange::new(0x11D0B, 0x11D36), Script::MasaramGondi),
	(CodepointRange::new(0x11D3A, 0x11D3A), Script::MasaramGondi),
	(CodepointRange::new(0x11D3C, 0x11D3D), Script::MasaramGondi),
	(CodepointRange::new(0x11D3F, 0x11D47), Script::MasaramGondi),
	(CodepointRange::new(0x11D50, 0x11D59), Script::MasaramGondi),
	(CodepointRange::new(0x11D60, 0x11D65), Script::GunjalaGondi),
	(CodepointRange::new(0x11D67, 0x11D68), Script::GunjalaGondi),
	(CodepointRange::new(0x11D6A, 0x11D8E), Script::GunjalaGondi),
	(CodepointRange::new(0x11D90, 0x11D91), Script::GunjalaGondi),
	(CodepointRange::new(0x11D93, 0x11D98), Script::GunjalaGondi),
	(CodepointRange::new(0x11DA0, 0x11DA9), Script::GunjalaGondi),
	(CodepointRange::new(0x11EE0, 0x11EF8), Script::Makasar),
	(CodepointRange::new(0x11FB0, 0x11FB0), Script::Lisu),
	(CodepointRange::new(0x11FC0, 0x11FF1), Script::Tamil),
	(CodepointRange::new(0x11FFF, 0x11FFF), Script::Tamil),
	(CodepointRange::new(0x12000, 0x12399), Script::Cuneiform),
	(CodepointRange::new(0x12400, 0x1246E), Script::Cuneiform),
	(CodepointRange::new(0x12470, 0x12474), Script::Cuneiform),
	(CodepointRange::new(0x12480, 0x12543), Script::Cuneiform),
	(CodepointRange::new(0x12F90, 0x12FF2), Script::CyproMinoan),
	(CodepointRange::new(0x13000, 0x1342E), Script::EgyptianHieroglyphs),
	(CodepointRange::new(0x13430, 0x13438), Script::EgyptianHieroglyphs),
	(CodepointRange::new(0x14400, 0x14646), Script::AnatolianHieroglyphs),
	(CodepointRange::new(0x16800, 0x16A38), Script::Bamum),
	(CodepointRange::new(0x16A40, 0x16A5E), Script::Mro),
	(CodepointRange::new(0x16A60, 0x16A69), Script::Mro),
	(CodepointRange::new(0x16A6E, 0x16A6F), Script::Mro),
	(CodepointRange::new(0x16A70, 0x16ABE), Script::Tangsa),
	(CodepointRange::new(0x16AC0, 0x16AC9), Script::Tangsa),
	(CodepointRange::new(0x16AD0, 0x16AED), Script::BassaVah),
	(CodepointRange::new(0x16AF0, 0x16AF5), Script::BassaVah),
	(CodepointRange::new(0x16B00, 0x16B45), Script::PahawhHmong),
	(CodepointRange::new(0x16B50, 0x16B59), Script::PahawhHmong),
	(CodepointRange::new(0x16B5B, 0x16B61), Script::PahawhHmong),
	(CodepointRange::new(0x16B63, 0x16B77), Script::PahawhHmong),
	(CodepointRange::new(0x16B7D, 0x16B8F), Script::PahawhHmong),
	(CodepointRange::new(0x16E40, 0x16E9A), Script::Medefaidrin),
	(CodepointRange::new(0x16F00, 0x16F4A), Script::Miao),
	(CodepointRange::new(0x16F4F, 0x16F87), Script::Miao),
	(CodepointRange::new(0x16F8F, 0x16F9F), Script::Miao),
	(CodepointRange::new(0x16FE0, 0x16FE0), Script::Tangut),
	(CodepointRange::new(0x16FE1, 0x16FE1), Script::Nushu),
	(CodepointRange::new(0x16FE2, 0x16FE3), Script::Han),
	(CodepointRange::new(0x16FE4, 0x16FE4), Script::KhitanSmallScript),
	(CodepointRange::new(0x16FF0, 0x16FF1), Script::Han),
	(CodepointRange::new(0x17000, 0x187F7), Script::Tangut),
	(CodepointRange::new(0x18800, 0x18AFF), Script::Tangut),
	(CodepointRange::new(0x18B00, 0x18CD5), Script::KhitanSmallScript),
	(CodepointRange::new(0x18D00, 0x18D08), Script::Tangut),
	(CodepointRange::new(0x1AFF0, 0x1AFF3), Script::Katakana),
	(CodepointRange::new(0x1AFF5, 0x1AFFB), Script::Katakana),
	(CodepointRange::new(0x1AFFD, 0x1AFFE), Script::Katakana),
	(CodepointRange::new(0x1B000, 0x1B000), Script::Katakana),
	(CodepointRange::new(0x1B001, 0x1B11F), Script::Hiragana),
	(CodepointRange::new(0x1B120, 0x1B122), Script::Katakana),
	(CodepointRange::new(0x1B150, 0x1B152), Script::Hiragana),
	(CodepointRange::new(0x1B164, 0x1B167), Script::Katakana),
	(CodepointRange::new(0x1B170, 0x1B2FB), Script::Nushu),
	(CodepointRange::new(0x1BC00, 0x1BC6A), Script::Duployan),
	(CodepointRange::new(0x1BC70, 0x1BC7C), Script::Duployan),
	(CodepointRange::new(0x1BC80, 0x1BC88), Script::Duployan),
	(CodepointRange::new(0x1BC90, 0x1BC99), Script::Duployan),
	(CodepointRange::new(0x1BC9C, 0x1BC9F), Script::Duployan),
	(CodepointRange::new(0x1BCA0, 0x1BCA3), Script::Common),
	(CodepointRange::new(0x1CF00, 0x1CF2D), Script::Inherited),
	(CodepointRange::new(0x1CF30, 0x1CF46), Script::Inherited),
	(CodepointRange::new(0x1CF50, 0x1CFC3), Script::Common),
	(CodepointRange::new(0x1D000, 0x1D0F5), Script::Common),
	(CodepointRange::new(0x1D100, 0x1D126), Script::Common),
	(CodepointRange::new(0x1D129, 0x1D166), Script::Common),
	(CodepointRange::new(0x1D167, 0x1D169), Script::Inherited),
	(CodepointRange::new(0x1D16A, 0x1D17A), Script::Common),
	(CodepointRange::new(0x1D17B, 0x1D182), Script::Inherited),
	(CodepointRange::new(0x1D183, 0x1D184), Script::Common),
	(CodepointRange::new(0x1D185, 0x1D18B), Script::Inherited),
	(CodepointRange::new(0x1D18C, 0x1D1A9), Script::Common),
	(CodepointRange::new(0x1D1AA, 0x1D1AD), Script::Inherited),
	(CodepointRange::new(0x1D1AE, 0x1D1EA), Script::Common),
	(CodepointRange::new(0x1D200, 0x1D245), Script::Greek),
	(CodepointRange::new(0x1D2E0, 0x1D2F3), Script::Common),
	(CodepointRange::new(0x1D300, 0x1D356), Script::Common),
	(CodepointRange::new(0x1D360, 0x1D378), Script::Common),
	(CodepointRange::new(0x1D400, 0x1D454), Script::Common),
	(CodepointRange::new(0x1D456, 0x1D49C), Script::Common),
	(CodepointRange::new(0x1D49E, 0x1D49F), Script::Common),
	(CodepointRange::new(0x1D4A2, 0x1D4A2), Script::Common),
	(CodepointRange::new(0x1D4A5, 0x1D4A6), Script::Common),
	(CodepointRange::new(0x1D4A9, 0x1D4AC), Script::Common),
	(CodepointRange::new(0x1D4AE, 0x1D4B9), Script::Common),
	(CodepointRange::new(0x1D4BB, 0x1D4BB), Script::Common),
	(CodepointRange::new(0x1D4BD, 0x1D4C3), Script::Common),
	(CodepointRange::new(0x1D4C5, 0x1D505), Script::Common),
	(CodepointRange::new(0x1D507, 0x1D50A), Script::Common),
	(CodepointRange::new(0x1D50D, 0x1D514), Script::Common),
	(CodepointRange::new(0x1D516, 0x1D51C), Script::Common),
	(CodepointRange::new(0x1D51E, 0x1D539), Script::Common),
	(CodepointRange::new(0x1D53B, 0x1D53E), Script::Common),
	(CodepointRange::new(0x1D540, 0x1D544), Script::Common),
	(CodepointRange::new(0x1D546, 0x1D546), Script::Common),
	(CodepointRange::new(0x1D54A, 0x1D550), Script::Common),
	(CodepointRange::new(0x1D552, 0x1D6A5), Script::Common),
	(CodepointRange::new(0x1D6A8, 0x1D7CB), Script::Common),
	(CodepointRange::new(0x1D7CE, 0x1D7FF), Script::Common),
	(CodepointRange::new(0x1D800, 0x1DA8B), Script::SignWriting),
	(CodepointRange::new(0x1DA9B, 0x1DA9F), Script::SignWriting),
	(CodepointRange::new(0x1DAA1, 0x1DAAF), Script::SignWriting),
	(CodepointRange::new(0x1DF00, 0x1DF1E), Script::Latin),
	(CodepointRange::new(0x1E000, 0x1E006), Script::Glagolitic),
	(CodepointRange::new(0x1E008, 0x1E018), Script::Glagolitic),
	(CodepointRange::new(0x1E01B, 0x1E021), Script::Glagolitic),
	(CodepointRange::new(0x1E023, 0x1E024), Script::Glagolitic),
	(CodepointRange::new(0x1E026, 0x1E02A), Script::Glagolitic),
	(CodepointRange::new(0x1E100, 0x1E12C), Script::NyiakengPuachueHmong),
	(CodepointRange::new(0x1E130, 0x1E13D), Script::NyiakengPuachueHmong),
	(CodepointRange::new(0x1E140, 0x1E149), Script::NyiakengPuachueHmong),
	(CodepointRange::new(0x1E14E, 0x1E14F), Script::NyiakengPuachueHmong),
	(CodepointRange::new(0x1E290, 0x1E2AE), Script::Toto),
	(CodepointRange::new(0x1E2C0, 0x1E2F9), Script::Wancho),
	(CodepointRange::new(0x1E2FF, 0x1E2FF), Script::Wancho),
	(CodepointRange::new(0x1E7E0, 0x1E7E6), Script::Ethiopic),
	(CodepointRange::new(0x1E7E8, 0x1E7EB), Script::Ethiopic),
	(CodepointRange::new(0x1E7ED, 0x1E7EE), Script::Ethiopic),
	(CodepointRange::new(0x1E7F0, 0x1E7FE), Script::Ethiopic),
	(CodepointRange::new(0x1E800, 0x1E8C4), Script::MendeKikakui),
	(CodepointRange::new(0x1E8C7, 0x1E8D6), Script::MendeKikakui),
	(CodepointRange::new(0x1E900, 0x1E94B), Script::Adlam),
	(CodepointRange::new(0x1E950, 0x1E959), Script::Adlam),
	(CodepointRange::new(0x1E95E, 0x1E95F), Script::Adlam),
	(CodepointRange::new(0x1EC71, 0x1ECB4), Script::Common),
	(CodepointRange::new(0x1ED01, 0x1ED3D), Script::Common),
	(CodepointRange::new(0x1EE00, 0x1EE03), Script::Arabic),
	(CodepointRange::new(0x1EE05, 0x1EE1F), Script::Arabic),
	(CodepointRange::new(0x1EE21, 0x1EE22), Script::Arabic),
	(CodepointRange::new(0x1EE24, 0x1EE24), Script::Arabic),
	(CodepointRange::new(0x1EE27, 0x1EE27), Script::Arabic),
	(CodepointRange::new(0x1EE29, 0x1EE32), Script::Arabic),
	(CodepointRange::new(0x1EE34, 0x1EE37), Script::Arabic),
	(CodepointRange::new(0x1EE39, 0x1EE39), Script::Arabic),
	(CodepointRange::new(0x1EE3B, 0x1EE3B), Script::Arabic),
	(CodepointRange::new(0x1EE42, 0x1EE42), Script::Arabic),
	(CodepointRange::new(0x1EE47, 0x1EE47), Script::Arabic),
	(CodepointRange::new(0x1EE49, 0x1EE49), Script::Arabic),
	(CodepointRange::new(0x1EE4B, 0x1EE4B), Script::Arabic),
	(CodepointRange::new(0x1EE4D, 0x1EE4F), Script::Arabic),
	(CodepointRange::new(0x1EE51, 0x1EE52), Script::Arabic),
	(CodepointRange::new(0x1EE54, 0x1EE54), Script::Arabic),
	(CodepointRange::new(0x1EE57, 0x1EE57), Script::Arabic),
	(CodepointRange::new(0x1EE59, 0x1EE59), Script::Arabic),
	(CodepointRange::new(0x1EE5B, 0x1EE5B), Script::Arabic),
	(CodepointRange::new(0x1EE5D, 0x1EE5D), Script::Arabic),
	(CodepointRange::new(0x1EE5F, 0x1EE5F), Script::Arabic),
	(CodepointRange::new(0x1EE61, 0x1EE62), Script::Arabic),
	(CodepointRange::new(0x1EE64, 0x1EE64), Script::Arabic),
	(CodepointRange::new(0x1EE67, 0x1EE6A), Script::Arabic),
	(CodepointRange::new(0x1EE6C, 0x1EE72), Script::Arabic),
	(CodepointRange::new(0x1EE74, 0x1EE77), Script::Arabic),
	(CodepointRange::new(0x1EE79, 0x1EE7C), Script::Arabic),
	(CodepointRange::new(0x1EE7E, 0x1EE7E), Script::Arabic),
	(CodepointRange::new(0x1EE80, 0x1EE89), Script::Arabic),
	(CodepointRange::new(0x1EE8B, 0x1EE9B), Script::Arabic),
	(CodepointRange::new(0x1EEA1, 0x1EEA3), Script::Arabic),
	(CodepointRange::new(0x1EEA5, 0x1EEA9), Script::Arabic),
	(CodepointRange::new(0x1EEAB, 0x1EEBB), Script::Arabic),
	(CodepointRange::new(0x1EEF0, 0x1EEF1), Script::Arabic),
	(CodepointRange::new(0x1F000, 0x1F02B), Script::Common),
	(CodepointRange::new(0x1F030, 0x1F093), Script::Common),
	(CodepointRange::new(0x1F0A0, 0x1F0AE), Script::Common),
	(CodepointRange::new(0x1F0B1, 0x1F0BF), Script::Common),
	(CodepointRange::new(0x1F0C1, 0x1F0CF), Script::Common),
	(CodepointRange::new(0x1F0D1, 0x1F0F5), Script::Common),
	(CodepointRange::new(0x1F100, 0x1F1AD), Script::Common),
	(CodepointRange::new(0x1F1E6, 0x1F1FF), Script::Common),
	(CodepointRange::new(0x1F200, 0x1F200), Script::Hiragana),
	(CodepointRange::new(0x1F201, 0x1F202), Script::Common),
	(CodepointRange::new(0x1F210, 0x1F23B), Script::Common),
	(CodepointRange::new(0x1F240, 0x1F248), Script::Common),
	(CodepointRange::new(0x1F250, 0x1F251), Script::Common),
	(CodepointRange::new(0x1F260, 0x1F265), Script::Common),
	(CodepointRange::new(0x1F300, 0x1F6D7), Script::Common),
	(CodepointRange::new(0x1F6DD, 0x1F6EC), Script::Common),
	(CodepointRange::new(0x1F6F0, 0x1F6FC), Script::Common),
	(CodepointRange::new(0x1F700, 0x1F773), Script::Common),
	(CodepointRange::new(0x1F780, 0x1F7D8), Script::Common),
	(CodepointRange::new(0x1F7E0, 0x1F7EB), Script::Common),
	(CodepointRange::new(0x1F7F0, 0x1F7F0), Script::Common),
	(CodepointRange::new(0x1F800, 0x1F80B), Script::Common),
	(CodepointRange::new(0x1F810, 0x1F847), Script::Common),
	(CodepointRange::new(0x1F850, 0x1F859), Script::Common),
	(CodepointRange::new(0x1F860, 0x1F887), Script::Common),
	(CodepointRange::new(0x1F890, 0x1F8AD), Script::Common),
	(CodepointRange::new(0x1F8B0, 0x1F8B1), Script::Common),
	(CodepointRange::new(0x1F900, 0x1FA53), Script::Common),
	(CodepointRange::new(0x1FA60, 0x1FA6D), Script::Common),
	(CodepointRange::new(0x1FA70, 0x1FA74), Script::Common),
	(CodepointRange::new(0x1FA78, 0x1FA7C), Script::Common),
	(CodepointRange::new(0x1FA80, 0x1FA86), Script::Common),
	(CodepointRange::new(0x1FA90, 0x1FAAC), Script::Common),
	(CodepointRange::new(0x1FAB0, 0x1FABA), Script::Common),
	(CodepointRange::new(0x1FAC0, 0x1FAC5), Script::Common),
	(CodepointRange::new(0x1FAD0, 0x1FAD9), Script::Common),
	(CodepointRange::new(0x1FAE0, 0x1FAE7), Script::Common),
	(CodepointRange::new(0x1FAF0, 0x1FAF6), Script::Common),
	(CodepointRange::new(0x1FB00, 0x1FB92), Script::Common),
	(CodepointRange::new(0x1FB94, 0x1FBCA), Script::Common),
	(CodepointRange::new(0x1FBF0, 0x1FBF9), Script::Common),
	(CodepointRange::new(0x20000, 0x2A6DF), Script::Han),
	(CodepointRange::new(0x2A700, 0x2B738), Script::Han),
	(CodepointRange::new(0x2B740, 0x2B81D), Script::Han),
	(CodepointRange::new(0x2B820, 0x2CEA1), Script::Han),
	(CodepointRange::new(0x2CEB0, 0x2EBE0), Script::Han),
	(CodepointRange::new(0x2F800, 0x2FA1D), Script::Han),
	(CodepointRange::new(0x30000, 0x3134A), Script::Han),
	(CodepointRange::new(0xE0001, 0xE0001), Script::Common),
	(CodepointRange::new(0xE0020, 0xE007F), Script::Common),
	(CodepointRange::new(0xE0100, 0xE01EF), Script::Inherited),
];

pub(crate) static PROPERTIES: [(CodepointRange, Property); 1450] = [
	(CodepointRange::new(0x0009, 0x000D), Property::from_bits(0x0040000001)),
	(CodepointRange::new(0x0020, 0x0020), Property::from_bits(0x0040000000)),
	(CodepointRange::new(0x0021, 0x0021), Property::from_bits(0x0090000040)),
	(CodepointRange::new(0x0022, 0x0022), Property::from_bits(0x0080000020)),
	(CodepointRange::new(0x0023, 0x0023), Property::from_bits(0x4280000000)),
	(CodepointRange::new(0x0024, 0x0026), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x0027, 0x0027), Property::from_bits(0x0080000020)),
	(CodepointRange::new(0x0028, 0x0029), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x002A, 0x002A), Property::from_bits(0x4280000000)),
	(CodepointRange::new(0x002B, 0x002B), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x002C, 0x002C), Property::from_bits(0x0080000040)),
	(CodepointRange::new(0x002D, 0x002D), Property::from_bits(0x0080000010)),
	(CodepointRange::new(0x002E, 0x002E), Property::from_bits(0x0090000040)),
	(CodepointRange::new(0x002F, 0x002F), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x0030, 0x0039), Property::from_bits(0x4200000300)),
	(CodepointRange::new(0x003A, 0x003B), Property::from_bits(0x0080000040)),
	(CodepointRange::new(0x003C, 0x003E), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x003F, 0x003F), Property::from_bits(0x0090000040)),
	(CodepointRange::new(0x0040, 0x0040), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x0041, 0x0046), Property::from_bits(0x0000000300)),
	(CodepointRange::new(0x005B, 0x005D), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x005E, 0x005E), Property::from_bits(0x0080001080)),
	(CodepointRange::new(0x0060, 0x0060), Property::from_bits(0x0080001000)),
	(CodepointRange::new(0x0061, 0x0066), Property::from_bits(0x0000000300)),
	(CodepointRange::new(0x0069, 0x006A), Property::from_bits(0x0001000000)),
	(CodepointRange::new(0x007B, 0x007E), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x0085, 0x0085), Property::from_bits(0x0040000001)),
	(CodepointRange::new(0x00A1, 0x00A7), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x00A8, 0x00A8), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x00A9, 0x00A9), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x00AA, 0x00AA), Property::from_bits(0x0000004000)),
	(CodepointRange::new(0x00AB, 0x00AB), Property::from_bits(0x0000000020)),
	(CodepointRange::new(0x00AC, 0x00AC), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x00AD, 0x00AD), Property::from_bits(0x0000000010)),
	(CodepointRange::new(0x00AE, 0x00AE), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x00AF, 0x00AF), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x00B0, 0x00B1), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x00B4, 0x00B4), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x00B6, 0x00B6), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x00B7, 0x00B7), Property::from_bits(0x0008003000)),
	(CodepointRange::new(0x00B8, 0x00B8), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x00BA, 0x00BA), Property::from_bits(0x0000004000)),
	(CodepointRange::new(0x00BB, 0x00BB), Property::from_bits(0x0000000020)),
	(CodepointRange::new(0x00BF, 0x00BF), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x00D7, 0x00D7), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x00F7, 0x00F7), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x012F, 0x012F), Property::from_bits(0x0001000000)),
	(CodepointRange::new(0x0149, 0x0149), Property::from_bits(0x0000800000)),
	(CodepointRange::new(0x0249, 0x0249), Property::from_bits(0x0001000000)),
	(CodepointRange::new(0x0268, 0x0268), Property::from_bits(0x0001000000)),
	(CodepointRange::new(0x029D, 0x029D), Property::from_bits(0x0001000000)),
	(CodepointRange::new(0x02B0, 0x02B1), Property::from_bits(0x0000005000)),
	(CodepointRange::new(0x02B2, 0x02B2), Property::from_bits(0x0001005000)),
	(CodepointRange::new(0x02B3, 0x02B8), Property::from_bits(0x0000005000)),
	(CodepointRange::new(0x02B9, 0x02BF), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x02C0, 0x02C1), Property::from_bits(0x0000005000)),
	(CodepointRange::new(0x02C2, 0x02CF), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x02D0, 0x02D1), Property::from_bits(0x0000003000)),
	(CodepointRange::new(0x02D2, 0x02DF), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x02E0, 0x02E4), Property::from_bits(0x0000005000)),
	(CodepointRange::new(0x02E5, 0x0344), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0345, 0x0345), Property::from_bits(0x0000005400)),
	(CodepointRange::new(0x0346, 0x034E), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x034F, 0x034F), Property::from_bits(0x0000400000)),
	(CodepointRange::new(0x0350, 0x0357), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x035D, 0x0362), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0374, 0x0375), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x037A, 0x037A), Property::from_bits(0x0000005000)),
	(CodepointRange::new(0x037E, 0x037E), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x0384, 0x0385), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0387, 0x0387), Property::from_bits(0x0008000040)),
	(CodepointRange::new(0x03D0, 0x03D2), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x03D5, 0x03D5), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x03F0, 0x03F1), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x03F3, 0x03F3), Property::from_bits(0x0001000000)),
	(CodepointRange::new(0x03F4, 0x03F5), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x0456, 0x0456), Property::from_bits(0x0001000000)),
	(CodepointRange::new(0x0458, 0x0458), Property::from_bits(0x0001000000)),
	(CodepointRange::new(0x0483, 0x0487), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0559, 0x0559), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0589, 0x0589), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x058A, 0x058A), Property::from_bits(0x0000000010)),
	(CodepointRange::new(0x0591, 0x05A1), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x05A3, 0x05AF), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x05B0, 0x05BD), Property::from_bits(0x0000001400)),
	(CodepointRange::new(0x05BF, 0x05BF), Property::from_bits(0x0000001400)),
	(CodepointRange::new(0x05C1, 0x05C2), Property::from_bits(0x0000001400)),
	(CodepointRange::new(0x05C3, 0x05C3), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x05C4, 0x05C4), Property::from_bits(0x0000001400)),
	(CodepointRange::new(0x05C5, 0x05C5), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x05C7, 0x05C7), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0600, 0x0605), Property::from_bits(0x0100000000)),
	(CodepointRange::new(0x060C, 0x060C), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x0610, 0x061A), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x061B, 0x061B), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x061C, 0x061C), Property::from_bits(0x0000000002)),
	(CodepointRange::new(0x061D, 0x061F), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x0640, 0x0640), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0x064B, 0x0652), Property::from_bits(0x0000001400)),
	(CodepointRange::new(0x0653, 0x0656), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0657, 0x0657), Property::from_bits(0x0000001400)),
	(CodepointRange::new(0x0658, 0x0658), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0659, 0x065F), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0670, 0x0670), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0673, 0x0673), Property::from_bits(0x0000800000)),
	(CodepointRange::new(0x06D4, 0x06D4), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x06D6, 0x06DC), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x06DD, 0x06DD), Property::from_bits(0x0100000000)),
	(CodepointRange::new(0x06DF, 0x06E0), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x06E1, 0x06E4), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x06E5, 0x06E6), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x06E7, 0x06E8), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x06EA, 0x06EC), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x06ED, 0x06ED), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0700, 0x0702), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x0703, 0x070A), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x070C, 0x070C), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x070F, 0x070F), Property::from_bits(0x0100000000)),
	(CodepointRange::new(0x0711, 0x0711), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0730, 0x073F), Property::from_bits(0x0000001400)),
	(CodepointRange::new(0x0740, 0x074A), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x07A6, 0x07B0), Property::from_bits(0x0000001400)),
	(CodepointRange::new(0x07EB, 0x07F5), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x07F8, 0x07F8), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x07F9, 0x07F9), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x07FA, 0x07FA), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0x0816, 0x0817), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0818, 0x0819), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x081B, 0x0823), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0825, 0x0827), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0829, 0x082C), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0830, 0x0836), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x0837, 0x0837), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x0838, 0x0838), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x0839, 0x0839), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x083A, 0x083C), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x083D, 0x083E), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x085E, 0x085E), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x0890, 0x0891), Property::from_bits(0x0100000000)),
	(CodepointRange::new(0x0898, 0x089F), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x08C9, 0x08D2), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x08D4, 0x08DF), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x08E2, 0x08E2), Property::from_bits(0x0100000000)),
	(CodepointRange::new(0x08E3, 0x08E9), Property::from_bits(0x0000001400)),
	(CodepointRange::new(0x08EA, 0x08EF), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x08F0, 0x08FE), Property::from_bits(0x0000001400)),
	(CodepointRange::new(0x08FF, 0x0903), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x093A, 0x093B), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x093C, 0x093C), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x093E, 0x094C), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x094D, 0x094D), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x094E, 0x094F), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0951, 0x0954), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0955, 0x0957), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0962, 0x0963), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0964, 0x0965), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x0971, 0x0971), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0981, 0x0983), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x09BC, 0x09BC), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x09BE, 0x09BE), Property::from_bits(0x0000020400)),
	(CodepointRange::new(0x09BF, 0x09C4), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x09C7, 0x09C8), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x09CB, 0x09CC), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x09CD, 0x09CD), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x09D7, 0x09D7), Property::from_bits(0x0000020400)),
	(CodepointRange::new(0x09E2, 0x09E3), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0A01, 0x0A03), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0A3C, 0x0A3C), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0A3E, 0x0A42), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0A47, 0x0A48), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0A4B, 0x0A4C), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0A4D, 0x0A4D), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0A51, 0x0A51), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0A70, 0x0A71), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0A75, 0x0A75), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0A81, 0x0A83), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0ABC, 0x0ABC), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0ABE, 0x0AC5), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0AC7, 0x0AC9), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0ACB, 0x0ACC), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0ACD, 0x0ACD), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0AE2, 0x0AE3), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0AFA, 0x0AFC), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0AFD, 0x0AFF), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0B01, 0x0B03), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0B3C, 0x0B3C), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0B3E, 0x0B3E), Property::from_bits(0x0000020400)),
	(CodepointRange::new(0x0B3F, 0x0B44), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0B47, 0x0B48), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0B4B, 0x0B4C), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0B4D, 0x0B4D), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0B55, 0x0B55), Property::from_bits(0x0000003000)),
	(CodepointRange::new(0x0B56, 0x0B56), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0B57, 0x0B57), Property::from_bits(0x0000020400)),
	(CodepointRange::new(0x0B62, 0x0B63), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0B82, 0x0B82), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0BBE, 0x0BBE), Property::from_bits(0x0000020400)),
	(CodepointRange::new(0x0BBF, 0x0BC2), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0BC6, 0x0BC8), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0BCA, 0x0BCC), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0BCD, 0x0BCD), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0BD7, 0x0BD7), Property::from_bits(0x0000020400)),
	(CodepointRange::new(0x0C00, 0x0C03), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0C3C, 0x0C3C), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0C3E, 0x0C44), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0C46, 0x0C48), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0C4A, 0x0C4C), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0C4D, 0x0C4D), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0C55, 0x0C56), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0C62, 0x0C63), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0C81, 0x0C83), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0CBC, 0x0CBC), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0CBE, 0x0CC1), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0CC2, 0x0CC2), Property::from_bits(0x0000020400)),
	(CodepointRange::new(0x0CC3, 0x0CC4), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0CC6, 0x0CC8), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0CCA, 0x0CCC), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0CCD, 0x0CCD), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0CD5, 0x0CD6), Property::from_bits(0x0000020400)),
	(CodepointRange::new(0x0CE2, 0x0CE3), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0D00, 0x0D03), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0D3B, 0x0D3C), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0D3E, 0x0D3E), Property::from_bits(0x0000020400)),
	(CodepointRange::new(0x0D3F, 0x0D44), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0D46, 0x0D48), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0D4A, 0x0D4C), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0D4D, 0x0D4D), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0D57, 0x0D57), Property::from_bits(0x0000020400)),
	(CodepointRange::new(0x0D62, 0x0D63), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0D81, 0x0D83), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0DCA, 0x0DCA), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0DCF, 0x0DCF), Property::from_bits(0x0000020400)),
	(CodepointRange::new(0x0DD0, 0x0DD4), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0DD6, 0x0DD6), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0DD8, 0x0DDE), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0DDF, 0x0DDF), Property::from_bits(0x0000020400)),
	(CodepointRange::new(0x0DF2, 0x0DF3), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0E31, 0x0E31), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0E34, 0x0E3A), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0E40, 0x0E44), Property::from_bits(0x0002000000)),
	(CodepointRange::new(0x0E46, 0x0E46), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0x0E47, 0x0E4C), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0E4D, 0x0E4D), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0E4E, 0x0E4E), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0E5A, 0x0E5B), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x0EB1, 0x0EB1), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0EB4, 0x0EB9), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0EBA, 0x0EBA), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0EBB, 0x0EBC), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0EC0, 0x0EC4), Property::from_bits(0x0002000000)),
	(CodepointRange::new(0x0EC6, 0x0EC6), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0x0EC8, 0x0ECC), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0ECD, 0x0ECD), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0F08, 0x0F08), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x0F0D, 0x0F12), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x0F18, 0x0F19), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0F35, 0x0F35), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0F37, 0x0F37), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0F39, 0x0F39), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0F3E, 0x0F3F), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0F71, 0x0F76), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0F77, 0x0F77), Property::from_bits(0x0000800400)),
	(CodepointRange::new(0x0F78, 0x0F78), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0F79, 0x0F79), Property::from_bits(0x0000800400)),
	(CodepointRange::new(0x0F7A, 0x0F81), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0F82, 0x0F84), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0F86, 0x0F87), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x0F8D, 0x0F97), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0F99, 0x0FBC), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x0FC6, 0x0FC6), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x102B, 0x1036), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1037, 0x1037), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1038, 0x1038), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1039, 0x103A), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x103B, 0x103E), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x104A, 0x104B), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x1056, 0x1059), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x105E, 0x1060), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1062, 0x1062), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1063, 0x1064), Property::from_bits(0x0000001400)),
	(CodepointRange::new(0x1067, 0x1068), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1069, 0x106D), Property::from_bits(0x0000001400)),
	(CodepointRange::new(0x1071, 0x1074), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1082, 0x1086), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1087, 0x108D), Property::from_bits(0x0000001400)),
	(CodepointRange::new(0x108F, 0x108F), Property::from_bits(0x0000001400)),
	(CodepointRange::new(0x109A, 0x109B), Property::from_bits(0x0000001400)),
	(CodepointRange::new(0x109C, 0x109D), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x115F, 0x1160), Property::from_bits(0x0000400000)),
	(CodepointRange::new(0x135D, 0x135F), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1361, 0x1361), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x1362, 0x1362), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x1363, 0x1366), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x1367, 0x1368), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x1369, 0x1371), Property::from_bits(0x0008000000)),
	(CodepointRange::new(0x166E, 0x166E), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x16EB, 0x16ED), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x1712, 0x1713), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1714, 0x1715), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1732, 0x1733), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1735, 0x1736), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x1752, 0x1753), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1772, 0x1773), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x17A3, 0x17A4), Property::from_bits(0x0000800000)),
	(CodepointRange::new(0x17B4, 0x17B5), Property::from_bits(0x0000400000)),
	(CodepointRange::new(0x17B6, 0x17C8), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x17C9, 0x17D3), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x17D4, 0x17D6), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x17DA, 0x17DA), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x17DD, 0x17DD), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1802, 0x1802), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x1803, 0x1803), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x1804, 0x1805), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x1806, 0x1806), Property::from_bits(0x0000000010)),
	(CodepointRange::new(0x1808, 0x1808), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x1809, 0x1809), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x180A, 0x180A), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0x180B, 0x180D), Property::from_bits(0x0020000000)),
	(CodepointRange::new(0x180F, 0x180F), Property::from_bits(0x0020000000)),
	(CodepointRange::new(0x1843, 0x1843), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0x1885, 0x1886), Property::from_bits(0x0004000400)),
	(CodepointRange::new(0x18A9, 0x18A9), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1920, 0x192B), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1930, 0x1938), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1939, 0x193B), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1944, 0x1945), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x19B5, 0x19B7), Property::from_bits(0x0002000000)),
	(CodepointRange::new(0x19BA, 0x19BA), Property::from_bits(0x0002000000)),
	(CodepointRange::new(0x19DA, 0x19DA), Property::from_bits(0x0008000000)),
	(CodepointRange::new(0x1A17, 0x1A1B), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1A55, 0x1A5E), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1A61, 0x1A74), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1A75, 0x1A7C), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1A7F, 0x1A7F), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1AA7, 0x1AA7), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0x1AA8, 0x1AAB), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x1AB0, 0x1ABE), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1ABF, 0x1AC0), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1AC1, 0x1ACB), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1ACC, 0x1ACE), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1B00, 0x1B04), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1B34, 0x1B34), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1B35, 0x1B35), Property::from_bits(0x0000020400)),
	(CodepointRange::new(0x1B36, 0x1B43), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1B44, 0x1B44), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1B5A, 0x1B5B), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x1B5D, 0x1B5D), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x1B5E, 0x1B5F), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x1B6B, 0x1B73), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1B7D, 0x1B7E), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x1B80, 0x1B82), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1BA1, 0x1BA9), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1BAA, 0x1BAB), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1BAC, 0x1BAD), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1BE7, 0x1BF1), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1C24, 0x1C35), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1C36, 0x1C36), Property::from_bits(0x0000003400)),
	(CodepointRange::new(0x1C37, 0x1C37), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1C3B, 0x1C3C), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x1C3D, 0x1C3F), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x1C78, 0x1C7A), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1C7B, 0x1C7B), Property::from_bits(0x0000003000)),
	(CodepointRange::new(0x1C7C, 0x1C7D), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1C7E, 0x1C7F), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x1CD0, 0x1CE8), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1CED, 0x1CED), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1CF4, 0x1CF4), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1CF7, 0x1CF9), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1D2C, 0x1D61), Property::from_bits(0x0000005000)),
	(CodepointRange::new(0x1D62, 0x1D62), Property::from_bits(0x0001005000)),
	(CodepointRange::new(0x1D63, 0x1D6A), Property::from_bits(0x0000005000)),
	(CodepointRange::new(0x1D78, 0x1D78), Property::from_bits(0x0000004000)),
	(CodepointRange::new(0x1D96, 0x1D96), Property::from_bits(0x0001000000)),
	(CodepointRange::new(0x1D9B, 0x1DA3), Property::from_bits(0x0000004000)),
	(CodepointRange::new(0x1DA4, 0x1DA4), Property::from_bits(0x0001004000)),
	(CodepointRange::new(0x1DA5, 0x1DA7), Property::from_bits(0x0000004000)),
	(CodepointRange::new(0x1DA8, 0x1DA8), Property::from_bits(0x0001004000)),
	(CodepointRange::new(0x1DA9, 0x1DBF), Property::from_bits(0x0000004000)),
	(CodepointRange::new(0x1DC4, 0x1DCF), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1DE7, 0x1DF4), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1DF5, 0x1DFF), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1E2D, 0x1E2D), Property::from_bits(0x0001000000)),
	(CodepointRange::new(0x1ECB, 0x1ECB), Property::from_bits(0x0001000000)),
	(CodepointRange::new(0x1FBD, 0x1FBD), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1FBF, 0x1FC1), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1FCD, 0x1FCF), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1FDD, 0x1FDF), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1FED, 0x1FEF), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1FFD, 0x1FFE), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x200C, 0x200C), Property::from_bits(0x0000020004)),
	(CodepointRange::new(0x200D, 0x200D), Property::from_bits(0x4000000004)),
	(CodepointRange::new(0x200E, 0x200F), Property::from_bits(0x0040000002)),
	(CodepointRange::new(0x2010, 0x2011), Property::from_bits(0x0080000010)),
	(CodepointRange::new(0x2012, 0x2015), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2016, 0x2016), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x2017, 0x2017), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2018, 0x2019), Property::from_bits(0x0000000020)),
	(CodepointRange::new(0x201A, 0x201A), Property::from_bits(0x0080000020)),
	(CodepointRange::new(0x201B, 0x201D), Property::from_bits(0x0000000020)),
	(CodepointRange::new(0x201E, 0x201E), Property::from_bits(0x0080000020)),
	(CodepointRange::new(0x201F, 0x201F), Property::from_bits(0x0000000020)),
	(CodepointRange::new(0x2020, 0x2027), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x202A, 0x202E), Property::from_bits(0x0000000002)),
	(CodepointRange::new(0x2030, 0x2031), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2032, 0x2034), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x2035, 0x2038), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2039, 0x203A), Property::from_bits(0x0000000020)),
	(CodepointRange::new(0x203B, 0x203B), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x203C, 0x203C), Property::from_bits(0x8290000040)),
	(CodepointRange::new(0x203D, 0x203D), Property::from_bits(0x0090000040)),
	(CodepointRange::new(0x203E, 0x203E), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2040, 0x2040), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x2041, 0x2046), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2047, 0x2048), Property::from_bits(0x0090000040)),
	(CodepointRange::new(0x2049, 0x2049), Property::from_bits(0x8290000040)),
	(CodepointRange::new(0x204A, 0x2052), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2053, 0x2053), Property::from_bits(0x0080000008)),
	(CodepointRange::new(0x2055, 0x205E), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2061, 0x2064), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x2065, 0x2065), Property::from_bits(0x0000400000)),
	(CodepointRange::new(0x2066, 0x2069), Property::from_bits(0x0000000002)),
	(CodepointRange::new(0x206A, 0x206F), Property::from_bits(0x0000800000)),
	(CodepointRange::new(0x2071, 0x2071), Property::from_bits(0x0001004000)),
	(CodepointRange::new(0x207B, 0x207B), Property::from_bits(0x0000000008)),
	(CodepointRange::new(0x207D, 0x207E), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x207F, 0x207F), Property::from_bits(0x0000004000)),
	(CodepointRange::new(0x208B, 0x208B), Property::from_bits(0x0000000008)),
	(CodepointRange::new(0x208D, 0x208E), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x2090, 0x209C), Property::from_bits(0x0000004000)),
	(CodepointRange::new(0x20D0, 0x20DC), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x20E1, 0x20E1), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x20E3, 0x20E3), Property::from_bits(0x4000000000)),
	(CodepointRange::new(0x20E5, 0x20E6), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x20EB, 0x20EF), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x2102, 0x2102), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x2107, 0x2107), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x210A, 0x2113), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x2115, 0x2115), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x2118, 0x2118), Property::from_bits(0x0004000000)),
	(CodepointRange::new(0x2119, 0x211D), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x2122, 0x2122), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x2124, 0x2124), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x2128, 0x2129), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x212C, 0x212D), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x212E, 0x212E), Property::from_bits(0x0004000000)),
	(CodepointRange::new(0x212F, 0x2131), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x2133, 0x2138), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x2139, 0x2139), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x213C, 0x213F), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x2145, 0x2147), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x2148, 0x2149), Property::from_bits(0x0001000080)),
	(CodepointRange::new(0x2160, 0x216F), Property::from_bits(0x0000008000)),
	(CodepointRange::new(0x2170, 0x217F), Property::from_bits(0x0000004000)),
	(CodepointRange::new(0x2190, 0x2193), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2194, 0x2194), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2195, 0x2199), Property::from_bits(0x8280000080)),
	(CodepointRange::new(0x219A, 0x219B), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x219C, 0x219F), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x21A0, 0x21A0), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x21A1, 0x21A2), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x21A3, 0x21A3), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x21A4, 0x21A5), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x21A6, 0x21A6), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x21A7, 0x21A7), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x21A8, 0x21A8), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x21A9, 0x21AA), Property::from_bits(0x8280000080)),
	(CodepointRange::new(0x21AB, 0x21AD), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x21AE, 0x21AF), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x21B0, 0x21B1), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x21B2, 0x21B5), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x21B6, 0x21B7), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x21B8, 0x21BB), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x21BC, 0x21CD), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x21CE, 0x21CF), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x21D0, 0x21D1), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x21D2, 0x21D2), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x21D3, 0x21D3), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x21D4, 0x21D4), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x21D5, 0x21DB), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x21DC, 0x21DC), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x21DD, 0x21DD), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x21DE, 0x21E3), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x21E4, 0x21E5), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x21E6, 0x2211), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2212, 0x2212), Property::from_bits(0x0080000008)),
	(CodepointRange::new(0x2213, 0x2307), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2308, 0x230B), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x230C, 0x2319), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x231A, 0x231B), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x231C, 0x2327), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2328, 0x2328), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2329, 0x232A), Property::from_bits(0x0080800000)),
	(CodepointRange::new(0x232B, 0x2387), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2388, 0x2388), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x2389, 0x23B3), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x23B4, 0x23B5), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x23B6, 0x23B6), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x23B7, 0x23B7), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x23B8, 0x23CE), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x23CF, 0x23CF), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x23D0, 0x23D0), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x23D1, 0x23E1), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x23E2, 0x23E2), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x23E3, 0x23E8), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x23E9, 0x23EC), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x23ED, 0x23EF), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x23F0, 0x23F0), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x23F1, 0x23F2), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x23F3, 0x23F3), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x23F4, 0x23F7), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x23F8, 0x23FA), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x23FB, 0x245F), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x24B6, 0x24C1), Property::from_bits(0x0000008400)),
	(CodepointRange::new(0x24C2, 0x24C2), Property::from_bits(0x8200008400)),
	(CodepointRange::new(0x24C3, 0x24CF), Property::from_bits(0x0000008400)),
	(CodepointRange::new(0x24D0, 0x24E9), Property::from_bits(0x0000004400)),
	(CodepointRange::new(0x2500, 0x259F), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x25A0, 0x25A1), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x25A2, 0x25A9), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x25AA, 0x25AB), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x25AC, 0x25AD), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x25AE, 0x25B5), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x25B6, 0x25B6), Property::from_bits(0x8280000080)),
	(CodepointRange::new(0x25B7, 0x25BB), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x25BC, 0x25BF), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x25C0, 0x25C0), Property::from_bits(0x8280000080)),
	(CodepointRange::new(0x25C1, 0x25C5), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x25C6, 0x25C7), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x25C8, 0x25C9), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x25CA, 0x25CB), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x25CC, 0x25CE), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x25CF, 0x25D3), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x25D4, 0x25E1), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x25E2, 0x25E2), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x25E3, 0x25E3), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x25E4, 0x25E4), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x25E5, 0x25E6), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x25E7, 0x25EC), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x25ED, 0x25FA), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x25FB, 0x25FC), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x25FD, 0x25FE), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x25FF, 0x25FF), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2600, 0x2604), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2605, 0x2605), Property::from_bits(0x8080000080)),
	(CodepointRange::new(0x2606, 0x2606), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x2607, 0x260D), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x260E, 0x260E), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x260F, 0x2610), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x2611, 0x2611), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2612, 0x2612), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x2613, 0x2613), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2614, 0x2615), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x2616, 0x2617), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x2618, 0x2618), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2619, 0x261C), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x261D, 0x261D), Property::from_bits(0x9280000000)),
	(CodepointRange::new(0x261E, 0x261F), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x2620, 0x2620), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2621, 0x2621), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x2622, 0x2623), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2624, 0x2625), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x2626, 0x2626), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2627, 0x2629), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x262A, 0x262A), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x262B, 0x262D), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x262E, 0x262F), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2630, 0x2637), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x2638, 0x263A), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x263B, 0x263F), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x2640, 0x2640), Property::from_bits(0x8280000080)),
	(CodepointRange::new(0x2641, 0x2641), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x2642, 0x2642), Property::from_bits(0x8280000080)),
	(CodepointRange::new(0x2643, 0x2647), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x2648, 0x2653), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x2654, 0x265E), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x265F, 0x265F), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2660, 0x2660), Property::from_bits(0x8280000080)),
	(CodepointRange::new(0x2661, 0x2662), Property::from_bits(0x8080000080)),
	(CodepointRange::new(0x2663, 0x2663), Property::from_bits(0x8280000080)),
	(CodepointRange::new(0x2664, 0x2664), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x2665, 0x2666), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2667, 0x2667), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x2668, 0x2668), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2669, 0x266C), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x266D, 0x266E), Property::from_bits(0x8080000080)),
	(CodepointRange::new(0x266F, 0x267A), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x267B, 0x267B), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x267C, 0x267D), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x267E, 0x267E), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x267F, 0x267F), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x2680, 0x2685), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x2686, 0x268F), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2690, 0x2691), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x2692, 0x2692), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2693, 0x2693), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x2694, 0x2697), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2698, 0x2698), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x2699, 0x2699), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x269A, 0x269A), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x269B, 0x269C), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x269D, 0x269F), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x26A0, 0x26A0), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x26A1, 0x26A1), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x26A2, 0x26A6), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x26A7, 0x26A7), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x26A8, 0x26A9), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x26AA, 0x26AB), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x26AC, 0x26AF), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x26B0, 0x26B1), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x26B2, 0x26BC), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x26BD, 0x26BE), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x26BF, 0x26C3), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x26C4, 0x26C5), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x26C6, 0x26C7), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x26C8, 0x26C8), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x26C9, 0x26CD), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x26CE, 0x26CE), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x26CF, 0x26CF), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x26D0, 0x26D0), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x26D1, 0x26D1), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x26D2, 0x26D2), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x26D3, 0x26D3), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x26D4, 0x26D4), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x26D5, 0x26E8), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x26E9, 0x26E9), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x26EA, 0x26EA), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x26EB, 0x26EF), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x26F0, 0x26F1), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x26F2, 0x26F3), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x26F4, 0x26F4), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x26F5, 0x26F5), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x26F6, 0x26F6), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x26F7, 0x26F8), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x26F9, 0x26F9), Property::from_bits(0x9280000000)),
	(CodepointRange::new(0x26FA, 0x26FA), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x26FB, 0x26FC), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x26FD, 0x26FD), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x26FE, 0x2701), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x2702, 0x2702), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2703, 0x2704), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x2705, 0x2705), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x2706, 0x2707), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2708, 0x2709), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x270A, 0x270B), Property::from_bits(0x9680000000)),
	(CodepointRange::new(0x270C, 0x270D), Property::from_bits(0x9280000000)),
	(CodepointRange::new(0x270E, 0x270E), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x270F, 0x270F), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2710, 0x2711), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x2712, 0x2712), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2713, 0x2713), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2714, 0x2714), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2715, 0x2715), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2716, 0x2716), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2717, 0x271C), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x271D, 0x271D), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x271E, 0x2720), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2721, 0x2721), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2722, 0x2727), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2728, 0x2728), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x2729, 0x2732), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2733, 0x2734), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2735, 0x2743), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2744, 0x2744), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2745, 0x2746), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2747, 0x2747), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2748, 0x274B), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x274C, 0x274C), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x274D, 0x274D), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x274E, 0x274E), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x274F, 0x2752), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2753, 0x2755), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x2756, 0x2756), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2757, 0x2757), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x2758, 0x2762), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2763, 0x2764), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2765, 0x2767), Property::from_bits(0x8080000000)),
	(CodepointRange::new(0x2768, 0x2775), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2794, 0x2794), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2795, 0x2797), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x2798, 0x27A0), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x27A1, 0x27A1), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x27A2, 0x27AF), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x27B0, 0x27B0), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x27B1, 0x27BE), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x27BF, 0x27BF), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x27C0, 0x27C4), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x27C5, 0x27C6), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x27C7, 0x27E5), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x27E6, 0x27EF), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x27F0, 0x2933), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2934, 0x2935), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2936, 0x2982), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2983, 0x2998), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x2999, 0x29D7), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x29D8, 0x29DB), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x29DC, 0x29FB), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x29FC, 0x29FD), Property::from_bits(0x0080000080)),
	(CodepointRange::new(0x29FE, 0x2B04), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2B05, 0x2B07), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x2B08, 0x2B1A), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2B1B, 0x2B1C), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x2B1D, 0x2B4F), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2B50, 0x2B50), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x2B51, 0x2B54), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2B55, 0x2B55), Property::from_bits(0x8680000000)),
	(CodepointRange::new(0x2B56, 0x2BFF), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2C7C, 0x2C7C), Property::from_bits(0x0001004000)),
	(CodepointRange::new(0x2C7D, 0x2C7D), Property::from_bits(0x0000004000)),
	(CodepointRange::new(0x2CEF, 0x2CF1), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x2DE0, 0x2DFF), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x2E00, 0x2E01), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2E06, 0x2E08), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2E0B, 0x2E0B), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2E0E, 0x2E16), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2E17, 0x2E17), Property::from_bits(0x0080000010)),
	(CodepointRange::new(0x2E18, 0x2E1B), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2E1E, 0x2E1F), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2E22, 0x2E2D), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2E2E, 0x2E2E), Property::from_bits(0x0090000040)),
	(CodepointRange::new(0x2E2F, 0x2E2F), Property::from_bits(0x0080001000)),
	(CodepointRange::new(0x2E30, 0x2E3B), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2E3C, 0x2E3C), Property::from_bits(0x0090000040)),
	(CodepointRange::new(0x2E3D, 0x2E40), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2E41, 0x2E41), Property::from_bits(0x0080000040)),
	(CodepointRange::new(0x2E42, 0x2E42), Property::from_bits(0x0080000020)),
	(CodepointRange::new(0x2E43, 0x2E4B), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2E4C, 0x2E4C), Property::from_bits(0x0080000040)),
	(CodepointRange::new(0x2E4D, 0x2E4D), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2E4E, 0x2E4F), Property::from_bits(0x0080000040)),
	(CodepointRange::new(0x2E50, 0x2E52), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2E53, 0x2E54), Property::from_bits(0x0090000040)),
	(CodepointRange::new(0x2E55, 0x2E7F), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x2E80, 0x2E99), Property::from_bits(0x0000100000)),
	(CodepointRange::new(0x2E9B, 0x2EF3), Property::from_bits(0x0000100000)),
	(CodepointRange::new(0x2F00, 0x2FD5), Property::from_bits(0x0000100000)),
	(CodepointRange::new(0x2FF0, 0x2FF1), Property::from_bits(0x0000040000)),
	(CodepointRange::new(0x2FF2, 0x2FF3), Property::from_bits(0x0000080000)),
	(CodepointRange::new(0x2FF4, 0x2FFB), Property::from_bits(0x0000040000)),
	(CodepointRange::new(0x3001, 0x3001), Property::from_bits(0x0080000040)),
	(CodepointRange::new(0x3002, 0x3002), Property::from_bits(0x0090000040)),
	(CodepointRange::new(0x3003, 0x3003), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x3005, 0x3005), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0x3006, 0x3007), Property::from_bits(0x0000000800)),
	(CodepointRange::new(0x3008, 0x300B), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x300C, 0x300F), Property::from_bits(0x0080000020)),
	(CodepointRange::new(0x3010, 0x301C), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x301D, 0x301F), Property::from_bits(0x0080000020)),
	(CodepointRange::new(0x3020, 0x3020), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0x3021, 0x3029), Property::from_bits(0x0000000800)),
	(CodepointRange::new(0x302A, 0x302D), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x302E, 0x302F), Property::from_bits(0x0000021000)),
	(CodepointRange::new(0x3030, 0x3030), Property::from_bits(0x8280000000)),
	(CodepointRange::new(0x3031, 0x3035), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0x3038, 0x303A), Property::from_bits(0x0000000800)),
	(CodepointRange::new(0x303D, 0x303D), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x3099, 0x309A), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x309B, 0x309C), Property::from_bits(0x0004001000)),
	(CodepointRange::new(0x309D, 0x309E), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0x30FB, 0x30FB), Property::from_bits(0x0000000010)),
	(CodepointRange::new(0x30FC, 0x30FC), Property::from_bits(0x0000003000)),
	(CodepointRange::new(0x30FD, 0x30FE), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0x3164, 0x3164), Property::from_bits(0x0000400000)),
	(CodepointRange::new(0x3297, 0x3297), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x3299, 0x3299), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x3400, 0x4DBF), Property::from_bits(0x0000200800)),
	(CodepointRange::new(0x4E00, 0x9FFF), Property::from_bits(0x0000200800)),
	(CodepointRange::new(0xA015, 0xA015), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0xA4FE, 0xA4FE), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0xA4FF, 0xA4FF), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0xA60C, 0xA60C), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0xA60D, 0xA60D), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0xA60E, 0xA60F), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0xA66F, 0xA66F), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0xA674, 0xA67B), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0xA67C, 0xA67D), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0xA67F, 0xA67F), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0xA69C, 0xA69D), Property::from_bits(0x0000005000)),
	(CodepointRange::new(0xA69E, 0xA69F), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0xA6F0, 0xA6F1), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0xA6F3, 0xA6F3), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0xA6F4, 0xA6F6), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0xA6F7, 0xA6F7), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0xA700, 0xA721), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0xA770, 0xA770), Property::from_bits(0x0000004000)),
	(CodepointRange::new(0xA788, 0xA78A), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0xA7F8, 0xA7F9), Property::from_bits(0x0000005000)),
	(CodepointRange::new(0xA802, 0xA802), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0xA80B, 0xA80B), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0xA823, 0xA827), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0xA876, 0xA877), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0xA880, 0xA881), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0xA8B4, 0xA8C3), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0xA8C4, 0xA8C4), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0xA8C5, 0xA8C5), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0xA8CE, 0xA8CF), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0xA8E0, 0xA8F1), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0xA8FF, 0xA8FF), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0xA926, 0xA92A), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0xA92B, 0xA92E), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0xA92F, 0xA92F), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0xA947, 0xA952), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0xA953, 0xA953), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0xA980, 0xA983), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0xA9B3, 0xA9B3), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0xA9B4, 0xA9BF), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0xA9C0, 0xA9C0), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0xA9C7, 0xA9C7), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0xA9C8, 0xA9C9), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0xA9CF, 0xA9CF), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0xA9E5, 0xA9E5), Property::from_bits(0x0000001400)),
	(CodepointRange::new(0xA9E6, 0xA9E6), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0xAA29, 0xAA36), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0xAA43, 0xAA43), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0xAA4C, 0xAA4D), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0xAA5D, 0xAA5F), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0xAA70, 0xAA70), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0xAA7B, 0xAA7D), Property::from_bits(0x0000001400)),
	(CodepointRange::new(0xAAB0, 0xAAB0), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0xAAB2, 0xAAB4), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0xAAB5, 0xAAB6), Property::from_bits(0x0002000000)),
	(CodepointRange::new(0xAAB7, 0xAAB8), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0xAAB9, 0xAAB9), Property::from_bits(0x0002000000)),
	(CodepointRange::new(0xAABB, 0xAABC), Property::from_bits(0x0002000000)),
	(CodepointRange::new(0xAABE, 0xAABE), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0xAABF, 0xAAC2), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0xAADD, 0xAADD), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0xAADF, 0xAADF), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0xAAEB, 0xAAEF), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0xAAF0, 0xAAF1), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0xAAF3, 0xAAF4), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0xAAF5, 0xAAF5), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0xAAF6, 0xAAF6), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0xAB5B, 0xAB5B), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0xAB5C, 0xAB5F), Property::from_bits(0x0000005000)),
	(CodepointRange::new(0xAB69, 0xAB6B), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0xABE3, 0xABEA), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0xABEB, 0xABEB), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0xABEC, 0xABED), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0xF900, 0xFA0D), Property::from_bits(0x0000000800)),
	(CodepointRange::new(0xFA0E, 0xFA0F), Property::from_bits(0x0000200800)),
	(CodepointRange::new(0xFA10, 0xFA10), Property::from_bits(0x0000000800)),
	(CodepointRange::new(0xFA11, 0xFA11), Property::from_bits(0x0000200800)),
	(CodepointRange::new(0xFA12, 0xFA12), Property::from_bits(0x0000000800)),
	(CodepointRange::new(0xFA13, 0xFA14), Property::from_bits(0x0000200800)),
	(CodepointRange::new(0xFA15, 0xFA1E), Property::from_bits(0x0000000800)),
	(CodepointRange::new(0xFA1F, 0xFA1F), Property::from_bits(0x0000200800)),
	(CodepointRange::new(0xFA20, 0xFA20), Property::from_bits(0x0000000800)),
	(CodepointRange::new(0xFA21, 0xFA21), Property::from_bits(0x0000200800)),
	(CodepointRange::new(0xFA22, 0xFA22), Property::from_bits(0x0000000800)),
	(CodepointRange::new(0xFA23, 0xFA24), Property::from_bits(0x0000200800)),
	(CodepointRange::new(0xFA25, 0xFA26), Property::from_bits(0x0000000800)),
	(CodepointRange::new(0xFA27, 0xFA29), Property::from_bits(0x0000200800)),
	(CodepointRange::new(0xFA2A, 0xFA6D), Property::from_bits(0x0000000800)),
	(CodepointRange::new(0xFA70, 0xFAD9), Property::from_bits(0x0000000800)),
	(CodepointRange::new(0xFB1E, 0xFB1E), Property::from_bits(0x0000001400)),
	(CodepointRange::new(0xFD3E, 0xFD3F), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0xFDD0, 0xFDEF), Property::from_bits(0x0000010000)),
	(CodepointRange::new(0xFE00, 0xFE0E), Property::from_bits(0x0020000000)),
	(CodepointRange::new(0xFE0F, 0xFE0F), Property::from_bits(0x4020000000)),
	(CodepointRange::new(0xFE20, 0xFE2F), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0xFE41, 0xFE44), Property::from_bits(0x0000000020)),
	(CodepointRange::new(0xFE45, 0xFE46), Property::from_bits(0x0080000000)),
	(CodepointRange::new(0xFE50, 0xFE51), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0xFE52, 0xFE52), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0xFE54, 0xFE55), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0xFE56, 0xFE57), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0xFE61, 0xFE61), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0xFE63, 0xFE63), Property::from_bits(0x0000000090)),
	(CodepointRange::new(0xFE68, 0xFE68), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0xFF01, 0xFF01), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0xFF02, 0xFF02), Property::from_bits(0x0000000020)),
	(CodepointRange::new(0xFF07, 0xFF07), Property::from_bits(0x0000000020)),
	(CodepointRange::new(0xFF0C, 0xFF0C), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0xFF0D, 0xFF0D), Property::from_bits(0x0000000010)),
	(CodepointRange::new(0xFF0E, 0xFF0E), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0xFF10, 0xFF19), Property::from_bits(0x0000000100)),
	(CodepointRange::new(0xFF1A, 0xFF1B), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0xFF1F, 0xFF1F), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0xFF21, 0xFF26), Property::from_bits(0x0000000100)),
	(CodepointRange::new(0xFF3C, 0xFF3C), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0xFF3E, 0xFF3E), Property::from_bits(0x0000001080)),
	(CodepointRange::new(0xFF40, 0xFF40), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0xFF41, 0xFF46), Property::from_bits(0x0000000100)),
	(CodepointRange::new(0xFF61, 0xFF61), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0xFF62, 0xFF63), Property::from_bits(0x0000000020)),
	(CodepointRange::new(0xFF64, 0xFF64), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0xFF65, 0xFF65), Property::from_bits(0x0000000010)),
	(CodepointRange::new(0xFF70, 0xFF70), Property::from_bits(0x0000003000)),
	(CodepointRange::new(0xFF9E, 0xFF9F), Property::from_bits(0x0000021000)),
	(CodepointRange::new(0xFFA0, 0xFFA0), Property::from_bits(0x0000400000)),
	(CodepointRange::new(0xFFE3, 0xFFE3), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0xFFF0, 0xFFF8), Property::from_bits(0x0000400000)),
	(CodepointRange::new(0xFFFE, 0xFFFF), Property::from_bits(0x0000010000)),
	(CodepointRange::new(0x102E0, 0x102E0), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x10376, 0x1037A), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1039F, 0x1039F), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x103D0, 0x103D0), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x10780, 0x10780), Property::from_bits(0x0000005000)),
	(CodepointRange::new(0x10781, 0x10782), Property::from_bits(0x0000003000)),
	(CodepointRange::new(0x10783, 0x10785), Property::from_bits(0x0000005000)),
	(CodepointRange::new(0x10787, 0x107B0), Property::from_bits(0x0000005000)),
	(CodepointRange::new(0x107B2, 0x107BA), Property::from_bits(0x0000005000)),
	(CodepointRange::new(0x10857, 0x10857), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x1091F, 0x1091F), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x10A01, 0x10A03), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x10A05, 0x10A06), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x10A0C, 0x10A0F), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x10A56, 0x10A57), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x10AE5, 0x10AE6), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x10AF0, 0x10AF5), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x10B3A, 0x10B3F), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x10B99, 0x10B9C), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x10D22, 0x10D23), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x10D24, 0x10D27), Property::from_bits(0x0000001400)),
	(CodepointRange::new(0x10EAB, 0x10EAC), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x10F46, 0x10F50), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x10F55, 0x10F59), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x10F82, 0x10F85), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x10F86, 0x10F89), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x11000, 0x11002), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11038, 0x11045), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11046, 0x11046), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x11047, 0x11048), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x11049, 0x1104D), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x11070, 0x11070), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x11073, 0x11074), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11082, 0x11082), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x110B0, 0x110B8), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x110B9, 0x110BA), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x110BD, 0x110BD), Property::from_bits(0x0100000000)),
	(CodepointRange::new(0x110BE, 0x110C1), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x110C2, 0x110C2), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x110CD, 0x110CD), Property::from_bits(0x0100000000)),
	(CodepointRange::new(0x11100, 0x11102), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11127, 0x11132), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11133, 0x11134), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x11141, 0x11143), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x11145, 0x11146), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11173, 0x11173), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x11180, 0x11182), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x111B3, 0x111BF), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x111C0, 0x111C0), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x111C5, 0x111C6), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x111CA, 0x111CC), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x111CD, 0x111CD), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x111CE, 0x111CF), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x111DE, 0x111DF), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x1122C, 0x11234), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11235, 0x11236), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x11237, 0x11237), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11238, 0x11239), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x1123A, 0x1123A), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x1123B, 0x1123C), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x1123E, 0x1123E), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x112A9, 0x112A9), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x112DF, 0x112E8), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x112E9, 0x112EA), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x11300, 0x11303), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1133C, 0x1133C), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1133E, 0x1133E), Property::from_bits(0x0000020400)),
	(CodepointRange::new(0x1133F, 0x11344), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11347, 0x11348), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1134B, 0x1134C), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1134D, 0x1134D), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x11357, 0x11357), Property::from_bits(0x0000020400)),
	(CodepointRange::new(0x1135D, 0x1135D), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0x11362, 0x11363), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11366, 0x1136C), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x11370, 0x11374), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x11435, 0x11441), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11442, 0x11442), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x11443, 0x11445), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11446, 0x11446), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1144B, 0x1144C), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x1144D, 0x1144D), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x1145A, 0x1145B), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x114B0, 0x114B0), Property::from_bits(0x0000020400)),
	(CodepointRange::new(0x114B1, 0x114BC), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x114BD, 0x114BD), Property::from_bits(0x0000020400)),
	(CodepointRange::new(0x114BE, 0x114C1), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x114C2, 0x114C3), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x115AF, 0x115AF), Property::from_bits(0x0000020400)),
	(CodepointRange::new(0x115B0, 0x115B5), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x115B8, 0x115BE), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x115BF, 0x115C0), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x115C2, 0x115C3), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x115C4, 0x115C5), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x115C6, 0x115C8), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0x115C9, 0x115D7), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x115DC, 0x115DD), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11630, 0x1163E), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1163F, 0x1163F), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x11640, 0x11640), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11641, 0x11642), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x116AB, 0x116B5), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x116B6, 0x116B7), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1171D, 0x1172A), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1172B, 0x1172B), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1173C, 0x1173E), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x1182C, 0x11838), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11839, 0x1183A), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x11930, 0x11930), Property::from_bits(0x0000020400)),
	(CodepointRange::new(0x11931, 0x11935), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11937, 0x11938), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1193B, 0x1193C), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1193D, 0x1193E), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x11940, 0x11940), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11942, 0x11942), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11943, 0x11943), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x11944, 0x11944), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x11946, 0x11946), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x119D1, 0x119D7), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x119DA, 0x119DF), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x119E0, 0x119E0), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x119E4, 0x119E4), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11A01, 0x11A0A), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11A34, 0x11A34), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x11A35, 0x11A39), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11A3B, 0x11A3E), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11A42, 0x11A43), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x11A47, 0x11A47), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x11A51, 0x11A5B), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11A8A, 0x11A97), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11A98, 0x11A98), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0x11A99, 0x11A99), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x11A9B, 0x11A9C), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x11AA1, 0x11AA2), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x11C2F, 0x11C36), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11C38, 0x11C3E), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11C3F, 0x11C3F), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x11C41, 0x11C42), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x11C43, 0x11C43), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x11C71, 0x11C71), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x11C92, 0x11CA7), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11CA9, 0x11CB6), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11D31, 0x11D36), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11D3A, 0x11D3A), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11D3C, 0x11D3D), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11D3F, 0x11D41), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11D42, 0x11D42), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x11D43, 0x11D43), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11D44, 0x11D45), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x11D47, 0x11D47), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11D8A, 0x11D8E), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11D90, 0x11D91), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11D93, 0x11D96), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11D97, 0x11D97), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x11EF3, 0x11EF6), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x11EF7, 0x11EF8), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x12470, 0x12474), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x16A6E, 0x16A6F), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x16AF0, 0x16AF4), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x16AF5, 0x16AF5), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x16B30, 0x16B36), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x16B37, 0x16B38), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x16B39, 0x16B39), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x16B42, 0x16B43), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0x16B44, 0x16B44), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x16E97, 0x16E97), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x16E98, 0x16E98), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x16F4F, 0x16F4F), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x16F51, 0x16F87), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x16F8F, 0x16F92), Property::from_bits(0x0000001400)),
	(CodepointRange::new(0x16F93, 0x16F9F), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x16FE0, 0x16FE1), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0x16FE3, 0x16FE3), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0x16FE4, 0x16FE4), Property::from_bits(0x0000000800)),
	(CodepointRange::new(0x16FF0, 0x16FF1), Property::from_bits(0x0000001400)),
	(CodepointRange::new(0x17000, 0x187F7), Property::from_bits(0x0000000800)),
	(CodepointRange::new(0x18800, 0x18CD5), Property::from_bits(0x0000000800)),
	(CodepointRange::new(0x18D00, 0x18D08), Property::from_bits(0x0000000800)),
	(CodepointRange::new(0x1AFF0, 0x1AFF3), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1AFF5, 0x1AFFB), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1AFFD, 0x1AFFE), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1B170, 0x1B2FB), Property::from_bits(0x0000000800)),
	(CodepointRange::new(0x1BC9E, 0x1BC9E), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1BC9F, 0x1BC9F), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x1CF00, 0x1CF2D), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1CF30, 0x1CF46), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1D165, 0x1D165), Property::from_bits(0x0000020000)),
	(CodepointRange::new(0x1D167, 0x1D169), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1D16D, 0x1D16D), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1D16E, 0x1D172), Property::from_bits(0x0000021000)),
	(CodepointRange::new(0x1D17B, 0x1D182), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1D185, 0x1D18B), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1D1AA, 0x1D1AD), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1D400, 0x1D421), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D422, 0x1D423), Property::from_bits(0x0001000080)),
	(CodepointRange::new(0x1D424, 0x1D454), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D456, 0x1D457), Property::from_bits(0x0001000080)),
	(CodepointRange::new(0x1D458, 0x1D489), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D48A, 0x1D48B), Property::from_bits(0x0001000080)),
	(CodepointRange::new(0x1D48C, 0x1D49C), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D49E, 0x1D49F), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D4A2, 0x1D4A2), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D4A5, 0x1D4A6), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D4A9, 0x1D4AC), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D4AE, 0x1D4B9), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D4BB, 0x1D4BB), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D4BD, 0x1D4BD), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D4BE, 0x1D4BF), Property::from_bits(0x0001000080)),
	(CodepointRange::new(0x1D4C0, 0x1D4C3), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D4C5, 0x1D4F1), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D4F2, 0x1D4F3), Property::from_bits(0x0001000080)),
	(CodepointRange::new(0x1D4F4, 0x1D505), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D507, 0x1D50A), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D50D, 0x1D514), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D516, 0x1D51C), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D51E, 0x1D525), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D526, 0x1D527), Property::from_bits(0x0001000080)),
	(CodepointRange::new(0x1D528, 0x1D539), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D53B, 0x1D53E), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D540, 0x1D544), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D546, 0x1D546), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D54A, 0x1D550), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D552, 0x1D559), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D55A, 0x1D55B), Property::from_bits(0x0001000080)),
	(CodepointRange::new(0x1D55C, 0x1D58D), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D58E, 0x1D58F), Property::from_bits(0x0001000080)),
	(CodepointRange::new(0x1D590, 0x1D5C1), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D5C2, 0x1D5C3), Property::from_bits(0x0001000080)),
	(CodepointRange::new(0x1D5C4, 0x1D5F5), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D5F6, 0x1D5F7), Property::from_bits(0x0001000080)),
	(CodepointRange::new(0x1D5F8, 0x1D629), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D62A, 0x1D62B), Property::from_bits(0x0001000080)),
	(CodepointRange::new(0x1D62C, 0x1D65D), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D65E, 0x1D65F), Property::from_bits(0x0001000080)),
	(CodepointRange::new(0x1D660, 0x1D691), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D692, 0x1D693), Property::from_bits(0x0001000080)),
	(CodepointRange::new(0x1D694, 0x1D6A5), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D6A8, 0x1D6C0), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D6C2, 0x1D6DA), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D6DC, 0x1D6FA), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D6FC, 0x1D714), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D716, 0x1D734), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D736, 0x1D74E), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D750, 0x1D76E), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D770, 0x1D788), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D78A, 0x1D7A8), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D7AA, 0x1D7C2), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D7C4, 0x1D7CB), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1D7CE, 0x1D7FF), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1DA87, 0x1DA87), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x1DA88, 0x1DA88), Property::from_bits(0x0010000040)),
	(CodepointRange::new(0x1DA89, 0x1DA8A), Property::from_bits(0x0000000040)),
	(CodepointRange::new(0x1DF1A, 0x1DF1A), Property::from_bits(0x0001000000)),
	(CodepointRange::new(0x1E000, 0x1E006), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1E008, 0x1E018), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1E01B, 0x1E021), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1E023, 0x1E024), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1E026, 0x1E02A), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1E130, 0x1E136), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1E13C, 0x1E13D), Property::from_bits(0x0000002000)),
	(CodepointRange::new(0x1E2AE, 0x1E2AE), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1E2EC, 0x1E2EF), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1E8D0, 0x1E8D6), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1E944, 0x1E946), Property::from_bits(0x0000003000)),
	(CodepointRange::new(0x1E947, 0x1E947), Property::from_bits(0x0000000400)),
	(CodepointRange::new(0x1E948, 0x1E94A), Property::from_bits(0x0000001000)),
	(CodepointRange::new(0x1EE00, 0x1EE03), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE05, 0x1EE1F), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE21, 0x1EE22), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE24, 0x1EE24), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE27, 0x1EE27), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE29, 0x1EE32), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE34, 0x1EE37), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE39, 0x1EE39), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE3B, 0x1EE3B), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE42, 0x1EE42), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE47, 0x1EE47), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE49, 0x1EE49), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE4B, 0x1EE4B), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE4D, 0x1EE4F), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE51, 0x1EE52), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE54, 0x1EE54), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE57, 0x1EE57), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE59, 0x1EE59), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE5B, 0x1EE5B), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE5D, 0x1EE5D), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE5F, 0x1EE5F), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE61, 0x1EE62), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE64, 0x1EE64), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE67, 0x1EE6A), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE6C, 0x1EE72), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE74, 0x1EE77), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE79, 0x1EE7C), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE7E, 0x1EE7E), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE80, 0x1EE89), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EE8B, 0x1EE9B), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EEA1, 0x1EEA3), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EEA5, 0x1EEA9), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1EEAB, 0x1EEBB), Property::from_bits(0x0000000080)),
	(CodepointRange::new(0x1F000, 0x1F003), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F004, 0x1F004), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F005, 0x1F0CE), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F0CF, 0x1F0CF), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F0D0, 0x1F0FF), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F10D, 0x1F10F), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F12F, 0x1F12F), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F130, 0x1F149), Property::from_bits(0x0000008400)),
	(CodepointRange::new(0x1F150, 0x1F169), Property::from_bits(0x0000008400)),
	(CodepointRange::new(0x1F16C, 0x1F16F), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F170, 0x1F171), Property::from_bits(0x8200008400)),
	(CodepointRange::new(0x1F172, 0x1F17D), Property::from_bits(0x0000008400)),
	(CodepointRange::new(0x1F17E, 0x1F17F), Property::from_bits(0x8200008400)),
	(CodepointRange::new(0x1F180, 0x1F189), Property::from_bits(0x0000008400)),
	(CodepointRange::new(0x1F18E, 0x1F18E), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F191, 0x1F19A), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F1AD, 0x1F1E5), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F1E6, 0x1F1FF), Property::from_bits(0x6600000000)),
	(CodepointRange::new(0x1F201, 0x1F201), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F202, 0x1F202), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F203, 0x1F20F), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F21A, 0x1F21A), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F22F, 0x1F22F), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F232, 0x1F236), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F237, 0x1F237), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F238, 0x1F23A), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F23C, 0x1F23F), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F249, 0x1F24F), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F250, 0x1F251), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F252, 0x1F2FF), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F300, 0x1F320), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F321, 0x1F321), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F322, 0x1F323), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F324, 0x1F32C), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F32D, 0x1F335), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F336, 0x1F336), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F337, 0x1F37C), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F37D, 0x1F37D), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F37E, 0x1F384), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F385, 0x1F385), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F386, 0x1F393), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F394, 0x1F395), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F396, 0x1F397), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F398, 0x1F398), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F399, 0x1F39B), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F39C, 0x1F39D), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F39E, 0x1F39F), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F3A0, 0x1F3C1), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F3C2, 0x1F3C4), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F3C5, 0x1F3C6), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F3C7, 0x1F3C7), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F3C8, 0x1F3C9), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F3CA, 0x1F3CA), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F3CB, 0x1F3CC), Property::from_bits(0x9200000000)),
	(CodepointRange::new(0x1F3CD, 0x1F3CE), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F3CF, 0x1F3D3), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F3D4, 0x1F3DF), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F3E0, 0x1F3F0), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F3F1, 0x1F3F2), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F3F3, 0x1F3F3), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F3F4, 0x1F3F4), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F3F5, 0x1F3F5), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F3F6, 0x1F3F6), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F3F7, 0x1F3F7), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F3F8, 0x1F3FA), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F3FB, 0x1F3FF), Property::from_bits(0x4E00000000)),
	(CodepointRange::new(0x1F400, 0x1F43E), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F43F, 0x1F43F), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F440, 0x1F440), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F441, 0x1F441), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F442, 0x1F443), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F444, 0x1F445), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F446, 0x1F450), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F451, 0x1F465), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F466, 0x1F478), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F479, 0x1F47B), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F47C, 0x1F47C), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F47D, 0x1F480), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F481, 0x1F483), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F484, 0x1F484), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F485, 0x1F487), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F488, 0x1F48E), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F48F, 0x1F48F), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F490, 0x1F490), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F491, 0x1F491), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F492, 0x1F4A9), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F4AA, 0x1F4AA), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F4AB, 0x1F4FC), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F4FD, 0x1F4FD), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F4FE, 0x1F4FE), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F4FF, 0x1F53D), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F546, 0x1F548), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F549, 0x1F54A), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F54B, 0x1F54E), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F54F, 0x1F54F), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F550, 0x1F567), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F568, 0x1F56E), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F56F, 0x1F570), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F571, 0x1F572), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F573, 0x1F573), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F574, 0x1F575), Property::from_bits(0x9200000000)),
	(CodepointRange::new(0x1F576, 0x1F579), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F57A, 0x1F57A), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F57B, 0x1F586), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F587, 0x1F587), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F588, 0x1F589), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F58A, 0x1F58D), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F58E, 0x1F58F), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F590, 0x1F590), Property::from_bits(0x9200000000)),
	(CodepointRange::new(0x1F591, 0x1F594), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F595, 0x1F596), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F597, 0x1F5A3), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F5A4, 0x1F5A4), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F5A5, 0x1F5A5), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F5A6, 0x1F5A7), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F5A8, 0x1F5A8), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F5A9, 0x1F5B0), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F5B1, 0x1F5B2), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F5B3, 0x1F5BB), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F5BC, 0x1F5BC), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F5BD, 0x1F5C1), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F5C2, 0x1F5C4), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F5C5, 0x1F5D0), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F5D1, 0x1F5D3), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F5D4, 0x1F5DB), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F5DC, 0x1F5DE), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F5DF, 0x1F5E0), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F5E1, 0x1F5E1), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F5E2, 0x1F5E2), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F5E3, 0x1F5E3), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F5E4, 0x1F5E7), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F5E8, 0x1F5E8), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F5E9, 0x1F5EE), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F5EF, 0x1F5EF), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F5F0, 0x1F5F2), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F5F3, 0x1F5F3), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F5F4, 0x1F5F9), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F5FA, 0x1F5FA), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F5FB, 0x1F644), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F645, 0x1F647), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F648, 0x1F64A), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F64B, 0x1F64F), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F680, 0x1F6A2), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F6A3, 0x1F6A3), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F6A4, 0x1F6B3), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F6B4, 0x1F6B6), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F6B7, 0x1F6BF), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F6C0, 0x1F6C0), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F6C1, 0x1F6C5), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F6C6, 0x1F6CA), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F6CB, 0x1F6CB), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F6CC, 0x1F6CC), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F6CD, 0x1F6CF), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F6D0, 0x1F6D2), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F6D3, 0x1F6D4), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F6D5, 0x1F6D7), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F6D8, 0x1F6DC), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F6DD, 0x1F6DF), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F6E0, 0x1F6E5), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F6E6, 0x1F6E8), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F6E9, 0x1F6E9), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F6EA, 0x1F6EA), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F6EB, 0x1F6EC), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F6ED, 0x1F6EF), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F6F0, 0x1F6F0), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F6F1, 0x1F6F2), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F6F3, 0x1F6F3), Property::from_bits(0x8200000000)),
	(CodepointRange::new(0x1F6F4, 0x1F6FC), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F6FD, 0x1F6FF), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F774, 0x1F77F), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F7D5, 0x1F7DF), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F7E0, 0x1F7EB), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F7EC, 0x1F7EF), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F7F0, 0x1F7F0), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F7F1, 0x1F7FF), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F80C, 0x1F80F), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F848, 0x1F84F), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F85A, 0x1F85F), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F888, 0x1F88F), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F8AE, 0x1F8FF), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1F90C, 0x1F90C), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F90D, 0x1F90E), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F90F, 0x1F90F), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F910, 0x1F917), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F918, 0x1F91F), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F920, 0x1F925), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F926, 0x1F926), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F927, 0x1F92F), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F930, 0x1F939), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F93A, 0x1F93A), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F93C, 0x1F93E), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F93F, 0x1F945), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F947, 0x1F976), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F977, 0x1F977), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F978, 0x1F9AF), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F9B0, 0x1F9B3), Property::from_bits(0xC600000000)),
	(CodepointRange::new(0x1F9B4, 0x1F9B4), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F9B5, 0x1F9B6), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F9B7, 0x1F9B7), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F9B8, 0x1F9B9), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F9BA, 0x1F9BA), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F9BB, 0x1F9BB), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F9BC, 0x1F9CC), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F9CD, 0x1F9CF), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F9D0, 0x1F9D0), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1F9D1, 0x1F9DD), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1F9DE, 0x1F9FF), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1FA00, 0x1FA6F), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1FA70, 0x1FA74), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1FA75, 0x1FA77), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1FA78, 0x1FA7C), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1FA7D, 0x1FA7F), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1FA80, 0x1FA86), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1FA87, 0x1FA8F), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1FA90, 0x1FAAC), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1FAAD, 0x1FAAF), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1FAB0, 0x1FABA), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1FABB, 0x1FABF), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1FAC0, 0x1FAC2), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1FAC3, 0x1FAC5), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1FAC6, 0x1FACF), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1FAD0, 0x1FAD9), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1FADA, 0x1FADF), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1FAE0, 0x1FAE7), Property::from_bits(0x8600000000)),
	(CodepointRange::new(0x1FAE8, 0x1FAEF), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1FAF0, 0x1FAF6), Property::from_bits(0x9600000000)),
	(CodepointRange::new(0x1FAF7, 0x1FAFF), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1FC00, 0x1FFFD), Property::from_bits(0x8000000000)),
	(CodepointRange::new(0x1FFFE, 0x1FFFF), Property::from_bits(0x0000010000)),
	(CodepointRange::new(0x20000, 0x2A6DF), Property::from_bits(0x0000200800)),
	(CodepointRange::new(0x2A700, 0x2B738), Property::from_bits(0x0000200800)),
	(CodepointRange::new(0x2B740, 0x2B81D), Property::from_bits(0x0000200800)),
	(CodepointRange::new(0x2B820, 0x2CEA1), Property::from_bits(0x0000200800)),
	(CodepointRange::new(0x2CEB0, 0x2EBE0), Property::from_bits(0x0000200800)),
	(CodepointRange::new(0x2F800, 0x2FA1D), Property::from_bits(0x0000000800)),
	(CodepointRange::new(0x2FFFE, 0x2FFFF), Property::from_bits(0x0000010000)),
	(CodepointRange::new(0x30000, 0x3134A), Property::from_bits(0x0000200800)),
	(CodepointRange::new(0x3FFFE, 0x3FFFF), Property::from_bits(0x0000010000)),
	(CodepointRange::new(0x4FFFE, 0x4FFFF), Property::from_bits(0x0000010000)),
	(CodepointRange::new(0x5FFFE, 0x5FFFF), Property::from_bits(0x0000010000)),
	(CodepointRange::new(0x6FFFE, 0x6FFFF), Property::from_bits(0x0000010000)),
	(CodepointRange::new(0x7FFFE, 0x7FFFF), Property::from_bits(0x0000010000)),
	(CodepointRange::new(0x8FFFE, 0x8FFFF), Property::from_bits(0x0000010000)),
	(CodepointRange::new(0x9FFFE, 0x9FFFF), Property::from_bits(0x0000010000)),
	(CodepointRange::new(0xAFFFE, 0xAFFFF), Property::from_bits(0x0000010000)),
	(CodepointRange::new(0xBFFFE, 0xBFFFF), Property::from_bits(0x0000010000)),
	(CodepointRange::new(0xCFFFE, 0xCFFFF), Property::from_bits(0x0000010000)),
	(CodepointRange::new(0xDFFFE, 0xDFFFF), Property::from_bits(0x0000010000)),
	(CodepointRange::new(0xE0000, 0xE0000), Property::from_bits(0x0000400000)),
	(CodepointRange::new(0xE0001, 0xE0001), Property::from_bits(0x0000800000)),
	(CodepointRange::new(0xE0002, 0xE001F), Property::from_bits(0x0000400000)),
	(CodepointRange::new(0xE0020, 0xE007F), Property::from_bits(0x4000020000)),
	(CodepointRange::new(0xE0080, 0xE00FF), Property::from_bits(0x0000400000)),
	(CodepointRange::new(0xE0100, 0xE01EF), Property::from_bits(0x0020000000)),
	(CodepointRange::new(0xE01F0, 0xE0FFF), Property::from_bits(0x0000400000)),
	(CodepointRange::new(0xEFFFE, 0xEFFFF), Property::from_bits(0x0000010000)),
	(CodepointRange::new(0xFFFFE, 0xFFFFF), Property::from_bits(0x0000010000)),
	(CodepointRange::new(0x10FFFE, 0x10FFFF), Property::from_bits(0x0000010000)),
];

/// Properties shared by every codepoint of a category, indexed by `Category as usize`.
pub(crate) static CATEGORY_PROPERTIES: [Property; Category::COUNT] = [
	Property::from_bits(0x0000000000), // Cc
	Property::from_bits(0x0000000000), // Cf
	Property::from_bits(0x0000000000), // Cn
	Property::from_bits(0x0000000000), // Co
	Property::from_bits(0x0000000000), // Cs
	Property::from_bits(0x0000000000), // Ii
	Property::from_bits(0x0000000000), // Ll
	Property::from_bits(0x0000000000), // Lm
	Property::from_bits(0x0000000000), // Lo
	Property::from_bits(0x0000000000), // Lt
	Property::from_bits(0x0000000000), // Lu
	Property::from_bits(0x0000000000), // Mc
	Property::from_bits(0x0000000000), // Me
	Property::from_bits(0x0000000000), // Mn
	Property::from_bits(0x0000000000), // Nd
	Property::from_bits(0x0000000000), // Nl
	Property::from_bits(0x0000000000), // No
	Property::from_bits(0x0000000000), // Pc
	Property::from_bits(0x0000000008), // Pd
	Property::from_bits(0x0000000000), // Pe
	Property::from_bits(0x0080000000), // Pf
	Property::from_bits(0x0080000000), // Pi
	Property::from_bits(0x0000000000), // Po
	Property::from_bits(0x0000000000), // Ps
	Property::from_bits(0x0000000000), // Sc
	Property::from_bits(0x0000000000), // Sk
	Property::from_bits(0x0000000000), // Sm
	Property::from_bits(0x0000000000), // So
	Property::from_bits(0x0040000001), // Zl
	Property::from_bits(0x0040000001), // Zp
	Property::from_bits(0x0000000001), // Zs
];

pub(crate) static TO_UPPER: [(CodepointRange, CaseMapping); 200] = [
	(CodepointRange::new(0x0061, 0x007A), CaseMapping::Delta(-32)),
	(CodepointRange::new(0x00B5, 0x00B5), CaseMapping::Delta(743)),
	(CodepointRange::new(0x00E0, 0x00F6), CaseMapping::Delta(-32)),
	(CodepointRange::new(0x00F8, 0x00FE), CaseMapping::Delta(-32)),
	(CodepointRange::new(0x00FF, 0x00FF), CaseMapping::Delta(121)),
	(CodepointRange::new(0x0101, 0x012F), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x0131, 0x0131), CaseMapping::Delta(-232)),
	(CodepointRange::new(0x0133, 0x0137), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x013A, 0x0148), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x014B, 0x0177), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x017A, 0x017E), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x017F, 0x017F), CaseMapping::Delta(-300)),
	(CodepointRange::new(0x0180, 0x0180), CaseMapping::Delta(195)),
	(CodepointRange::new(0x0183, 0x0185), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x0188, 0x0188), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x018C, 0x018C), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x0192, 0x0192), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x0195, 0x0195), CaseMapping::Delta(97)),
	(CodepointRange::new(0x0199, 0x0199), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x019A, 0x019A), CaseMapping::Delta(163)),
	(CodepointRange::new(0x019E, 0x019E), CaseMapping::Delta(130)),
	(CodepointRange::new(0x01A1, 0x01A5), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x01A8, 0x01A8), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x01AD, 0x01AD), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x01B0, 0x01B0), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x01B4, 0x01B6), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x01B9, 0x01B9), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x01BD, 0x01BD), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x01BF, 0x01BF), CaseMapping::Delta(56)),
	(CodepointRange::new(0x01C5, 0x01C5), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x01C6, 0x01C6), CaseMapping::Delta(-2)),
	(CodepointRange::new(0x01C8, 0x01C8), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x01C9, 0x01C9), CaseMapping::Delta(-2)),
	(CodepointRange::new(0x01CB, 0x01CB), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x01CC, 0x01CC), CaseMapping::Delta(-2)),
	(CodepointRange::new(0x01CE, 0x01DC), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x01DD, 0x01DD), CaseMapping::Delta(-79)),
	(CodepointRange::new(0x01DF, 0x01EF), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x01F2, 0x01F2), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x01F3, 0x01F3), CaseMapping::Delta(-2)),
	(CodepointRange::new(0x01F5, 0x01F5), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x01F9, 0x021F), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x0223, 0x0233), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x023C, 0x023C), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x023F, 0x0240), CaseMapping::Delta(10815)),
	(CodepointRange::new(0x0242, 0x0242), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x0247, 0x024F), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x0250, 0x0250), CaseMapping::Delta(10783)),
	(CodepointRange::new(0x0251, 0x0251), CaseMapping::Delta(10780)),
	(CodepointRange::new(0x0252, 0x0252), CaseMapping::Delta(10782)),
	(CodepointRange::new(0x0253, 0x0253), CaseMapping::Delta(-210)),
	(CodepointRange::new(0x0254, 0x0254), CaseMapping::Delta(-206)),
	(CodepointRange::new(0x0256, 0x0257), CaseMapping::Delta(-205)),
	(CodepointRange::new(0x0259, 0x0259), CaseMapping::Delta(-202)),
	(CodepointRange::new(0x025B, 0x025B), CaseMapping::Delta(-203)),
	(CodepointRange::new(0x025C, 0x025C), CaseMapping::Delta(42319)),
	(CodepointRange::new(0x0260, 0x0260), CaseMapping::Delta(-205)),
	(CodepointRange::new(0x0261, 0x0261), CaseMapping::Delta(42315)),
	(CodepointRange::new(0x0263, 0x0263), CaseMapping::Delta(-207)),
	(CodepointRange::new(0x0265, 0x0265), CaseMapping::Delta(42280)),
	(CodepointRange::new(0x0266, 0x0266), CaseMapping::Delta(42308)),
	(CodepointRange::new(0x0268, 0x0268), CaseMapping::Delta(-209)),
	(CodepointRange::new(0x0269, 0x0269), CaseMapping::Delta(-211)),
	(CodepointRange::new(0x026A, 0x026A), CaseMapping::Delta(42308)),
	(CodepointRange::new(0x026B, 0x026B), CaseMapping::Delta(10743)),
	(CodepointRange::new(0x026C, 0x026C), CaseMapping::Delta(42305)),
	(CodepointRange::new(0x026F, 0x026F), CaseMapping::Delta(-211)),
	(CodepointRange::new(0x0271, 0x0271), CaseMapping::Delta(10749)),
	(CodepointRange::new(0x0272, 0x0272), CaseMapping::Delta(-213)),
	(CodepointRange::new(0x0275, 0x0275), CaseMapping::Delta(-214)),
	(CodepointRange::new(0x027D, 0x027D), CaseMapping::Delta(10727)),
	(CodepointRange::new(0x0280, 0x0280), CaseMapping::Delta(-218)),
	(CodepointRange::new(0x0282, 0x0282), CaseMapping::Delta(42307)),
	(CodepointRange::new(0x0283, 0x0283), CaseMapping::Delta(-218)),
	(CodepointRange::new(0x0287, 0x0287), CaseMapping::Delta(42282)),
	(CodepointRange::new(0x0288, 0x0288), CaseMapping::Delta(-218)),
	(CodepointRange::new(0x0289, 0x0289), CaseMapping::Delta(-69)),
	(CodepointRange::new(0x028A, 0x028B), CaseMapping::Delta(-217)),
	(CodepointRange::new(0x028C, 0x028C), CaseMapping::Delta(-71)),
	(CodepointRange::new(0x0292, 0x0292), CaseMapping::Delta(-219)),
	(CodepointRange::new(0x029D, 0x029D), CaseMapping::Delta(42261)),
	(CodepointRange::new(0x029E, 0x029E), CaseMapping::Delta(42258)),
	(CodepointRange::new(0x0345, 0x0345), CaseMapping::Delta(84)),
	(CodepointRange::new(0x0371, 0x0373), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x0377, 0x0377), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x037B, 0x037D), CaseMapping::Delta(130)),
	(CodepointRange::new(0x03AC, 0x03AC), CaseMapping::Delta(-38)),
	(CodepointRange::new(0x03AD, 0x03AF), CaseMapping::Delta(-37)),
	(CodepointRange::new(0x03B1, 0x03C1), CaseMapping::Delta(-32)),
	(CodepointRange::new(0x03C2, 0x03C2), CaseMapping::Delta(-31)),
	(CodepointRange::new(0x03C3, 0x03CB), CaseMapping::Delta(-32)),
	(CodepointRange::new(0x03CC, 0x03CC), CaseMapping::Delta(-64)),
	(CodepointRange::new(0x03CD, 0x03CE), CaseMapping::Delta(-63)),
	(CodepointRange::new(0x03D0, 0x03D0), CaseMapping::Delta(-62)),
	(CodepointRange::new(0x03D1, 0x03D1), CaseMapping::Delta(-57)),
	(CodepointRange::new(0x03D5, 0x03D5), CaseMapping::Delta(-47)),
	(CodepointRange::new(0x03D6, 0x03D6), CaseMapping::Delta(-54)),
	(CodepointRange::new(0x03D7, 0x03D7), CaseMapping::Delta(-8)),
	(CodepointRange::new(0x03D9, 0x03EF), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x03F0, 0x03F0), CaseMapping::Delta(-86)),
	(CodepointRange::new(0x03F1, 0x03F1), CaseMapping::Delta(-80)),
	(CodepointRange::new(0x03F2, 0x03F2), CaseMapping::Delta(7)),
	(CodepointRange::new(0x03F3, 0x03F3), CaseMapping::Delta(-116)),
	(CodepointRange::new(0x03F5, 0x03F5), CaseMapping::Delta(-96)),
	(CodepointRange::new(0x03F8, 0x03F8), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x03FB, 0x03FB), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x0430, 0x044F), CaseMapping::Delta(-32)),
	(CodepointRange::new(0x0450, 0x045F), CaseMapping::Delta(-80)),
	(CodepointRange::new(0x0461, 0x0481), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x048B, 0x04BF), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x04C2, 0x04CE), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x04CF, 0x04CF), CaseMapping::Delta(-15)),
	(CodepointRange::new(0x04D1, 0x052F), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x0561, 0x0586), CaseMapping::Delta(-48)),
	(CodepointRange::new(0x10D0, 0x10FA), CaseMapping::Delta(3008)),
	(CodepointRange::new(0x10FD, 0x10FF), CaseMapping::Delta(3008)),
	(CodepointRange::new(0x13F8, 0x13FD), CaseMapping::Delta(-8)),
	(CodepointRange::new(0x1C80, 0x1C80), CaseMapping::Delta(-6254)),
	(CodepointRange::new(0x1C81, 0x1C81), CaseMapping::Delta(-6253)),
	(CodepointRange::new(0x1C82, 0x1C82), CaseMapping::Delta(-6244)),
	(CodepointRange::new(0x1C83, 0x1C84), CaseMapping::Delta(-6242)),
	(CodepointRange::new(0x1C85, 0x1C85), CaseMapping::Delta(-6243)),
	(CodepointRange::new(0x1C86, 0x1C86), CaseMapping::Delta(-6236)),
	(CodepointRange::new(0x1C87, 0x1C87), CaseMapping::Delta(-6181)),
	(CodepointRange::new(0x1C88, 0x1C88), CaseMapping::Delta(35266)),
	(CodepointRange::new(0x1D79, 0x1D79), CaseMapping::Delta(35332)),
	(CodepointRange::new(0x1D7D, 0x1D7D), CaseMapping::Delta(3814)),
	(CodepointRange::new(0x1D8E, 0x1D8E), CaseMapping::Delta(35384)),
	(CodepointRange::new(0x1E01, 0x1E95), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x1E9B, 0x1E9B), CaseMapping::Delta(-59)),
	(CodepointRange::new(0x1EA1, 0x1EFF), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x1F00, 0x1F07), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1F10, 0x1F15), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1F20, 0x1F27), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1F30, 0x1F37), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1F40, 0x1F45), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1F51, 0x1F57), CaseMapping::Alternate(8)),
	(CodepointRange::new(0x1F60, 0x1F67), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1F70, 0x1F71), CaseMapping::Delta(74)),
	(CodepointRange::new(0x1F72, 0x1F75), CaseMapping::Delta(86)),
	(CodepointRange::new(0x1F76, 0x1F77), CaseMapping::Delta(100)),
	(CodepointRange::new(0x1F78, 0x1F79), CaseMapping::Delta(128)),
	(CodepointRange::new(0x1F7A, 0x1F7B), CaseMapping::Delta(112)),
	(CodepointRange::new(0x1F7C, 0x1F7D), CaseMapping::Delta(126)),
	(CodepointRange::new(0x1F80, 0x1F87), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1F90, 0x1F97), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1FA0, 0x1FA7), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1FB0, 0x1FB1), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1FB3, 0x1FB3), CaseMapping::Delta(9)),
	(CodepointRange::new(0x1FBE, 0x1FBE), CaseMapping::Delta(-7205)),
	(CodepointRange::new(0x1FC3, 0x1FC3), CaseMapping::Delta(9)),
	(CodepointRange::new(0x1FD0, 0x1FD1), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1FE0, 0x1FE1), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1FE5, 0x1FE5), CaseMapping::Delta(7)),
	(CodepointRange::new(0x1FF3, 0x1FF3), CaseMapping::Delta(9)),
	(CodepointRange::new(0x214E, 0x214E), CaseMapping::Delta(-28)),
	(CodepointRange::new(0x2170, 0x217F), CaseMapping::Delta(-16)),
	(CodepointRange::new(0x2184, 0x2184), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x24D0, 0x24E9), CaseMapping::Delta(-26)),
	(CodepointRange::new(0x2C30, 0x2C5F), CaseMapping::Delta(-48)),
	(CodepointRange::new(0x2C61, 0x2C61), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x2C65, 0x2C65), CaseMapping::Delta(-10795)),
	(CodepointRange::new(0x2C66, 0x2C66), CaseMapping::Delta(-10792)),
	(CodepointRange::new(0x2C68, 0x2C6C), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x2C73, 0x2C73), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x2C76, 0x2C76), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x2C81, 0x2CE3), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x2CEC, 0x2CEE), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x2CF3, 0x2CF3), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x2D00, 0x2D25), CaseMapping::Delta(-7264)),
	(CodepointRange::new(0x2D27, 0x2D27), CaseMapping::Delta(-7264)),
	(CodepointRange::new(0x2D2D, 0x2D2D), CaseMapping::Delta(-7264)),
	(CodepointRange::new(0xA641, 0xA66D), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0xA681, 0xA69B), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0xA723, 0xA72F), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0xA733, 0xA76F), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0xA77A, 0xA77C), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0xA77F, 0xA787), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0xA78C, 0xA78C), CaseMapping::Delta(-1)),
	(CodepointRange::new(0xA791, 0xA793), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0xA794, 0xA794), CaseMapping::Delta(48)),
	(CodepointRange::new(0xA797, 0xA7A9), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0xA7B5, 0xA7C3), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0xA7C8, 0xA7CA), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0xA7D1, 0xA7D1), CaseMapping::Delta(-1)),
	(CodepointRange::new(0xA7D7, 0xA7D9), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0xA7F6, 0xA7F6), CaseMapping::Delta(-1)),
	(CodepointRange::new(0xAB53, 0xAB53), CaseMapping::Delta(-928)),
	(CodepointRange::new(0xAB70, 0xABBF), CaseMapping::Delta(-38864)),
	(CodepointRange::new(0xFF41, 0xFF5A), CaseMapping::Delta(-32)),
	(CodepointRange::new(0x10428, 0x1044F), CaseMapping::Delta(-40)),
	(CodepointRange::new(0x104D8, 0x104FB), CaseMapping::Delta(-40)),
	(CodepointRange::new(0x10597, 0x105A1), CaseMapping::Delta(-39)),
	(CodepointRange::new(0x105A3, 0x105B1), CaseMapping::Delta(-39)),
	(CodepointRange::new(0x105B3, 0x105B9), CaseMapping::Delta(-39)),
	(CodepointRange::new(0x105BB, 0x105BC), CaseMapping::Delta(-39)),
	(CodepointRange::new(0x10CC0, 0x10CF2), CaseMapping::Delta(-64)),
	(CodepointRange::new(0x118C0, 0x118DF), CaseMapping::Delta(-32)),
	(CodepointRange::new(0x16E60, 0x16E7F), CaseMapping::Delta(-32)),
	(CodepointRange::new(0x1E922, 0x1E943), CaseMapping::Delta(-34)),
];

pub(crate) static TO_LOWER: [(CodepointRange, CaseMapping); 182] = [
	(CodepointRange::new(0x0041, 0x005A), CaseMapping::Delta(32)),
	(CodepointRange::new(0x00C0, 0x00D6), CaseMapping::Delta(32)),
	(CodepointRange::new(0x00D8, 0x00DE), CaseMapping::Delta(32)),
	(CodepointRange::new(0x0100, 0x012E), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x0130, 0x0130), CaseMapping::Delta(-199)),
	(CodepointRange::new(0x0132, 0x0136), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x0139, 0x0147), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x014A, 0x0176), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x0178, 0x0178), CaseMapping::Delta(-121)),
	(CodepointRange::new(0x0179, 0x017D), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x0181, 0x0181), CaseMapping::Delta(210)),
	(CodepointRange::new(0x0182, 0x0184), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x0186, 0x0186), CaseMapping::Delta(206)),
	(CodepointRange::new(0x0187, 0x0187), CaseMapping::Delta(1)),
	(CodepointRange::new(0x0189, 0x018A), CaseMapping::Delta(205)),
	(CodepointRange::new(0x018B, 0x018B), CaseMapping::Delta(1)),
	(CodepointRange::new(0x018E, 0x018E), CaseMapping::Delta(79)),
	(CodepointRange::new(0x018F, 0x018F), CaseMapping::Delta(202)),
	(CodepointRange::new(0x0190, 0x0190), CaseMapping::Delta(203)),
	(CodepointRange::new(0x0191, 0x0191), CaseMapping::Delta(1)),
	(CodepointRange::new(0x0193, 0x0193), CaseMapping::Delta(205)),
	(CodepointRange::new(0x0194, 0x0194), CaseMapping::Delta(207)),
	(CodepointRange::new(0x0196, 0x0196), CaseMapping::Delta(211)),
	(CodepointRange::new(0x0197, 0x0197), CaseMapping::Delta(209)),
	(CodepointRange::new(0x0198, 0x0198), CaseMapping::Delta(1)),
	(CodepointRange::new(0x019C, 0x019C), CaseMapping::Delta(211)),
	(CodepointRange::new(0x019D, 0x019D), CaseMapping::Delta(213)),
	(CodepointRange::new(0x019F, 0x019F), CaseMapping::Delta(214)),
	(CodepointRange::new(0x01A0, 0x01A4), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x01A6, 0x01A6), CaseMapping::Delta(218)),
	(CodepointRange::new(0x01A7, 0x01A7), CaseMapping::Delta(1)),
	(CodepointRange::new(0x01A9, 0x01A9), CaseMapping::Delta(218)),
	(CodepointRange::new(0x01AC, 0x01AC), CaseMapping::Delta(1)),
	(CodepointRange::new(0x01AE, 0x01AE), CaseMapping::Delta(218)),
	(CodepointRange::new(0x01AF, 0x01AF), CaseMapping::Delta(1)),
	(CodepointRange::new(0x01B1, 0x01B2), CaseMapping::Delta(217)),
	(CodepointRange::new(0x01B3, 0x01B5), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x01B7, 0x01B7), CaseMapping::Delta(219)),
	(CodepointRange::new(0x01B8, 0x01B8), CaseMapping::Delta(1)),
	(CodepointRange::new(0x01BC, 0x01BC), CaseMapping::Delta(1)),
	(CodepointRange::new(0x01C4, 0x01C4), CaseMapping::Delta(2)),
	(CodepointRange::new(0x01C5, 0x01C5), CaseMapping::Delta(1)),
	(CodepointRange::new(0x01C7, 0x01C7), CaseMapping::Delta(2)),
	(CodepointRange::new(0x01C8, 0x01C8), CaseMapping::Delta(1)),
	(CodepointRange::new(0x01CA, 0x01CA), CaseMapping::Delta(2)),
	(CodepointRange::new(0x01CB, 0x01DB), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x01DE, 0x01EE), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x01F1, 0x01F1), CaseMapping::Delta(2)),
	(CodepointRange::new(0x01F2, 0x01F4), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x01F6, 0x01F6), CaseMapping::Delta(-97)),
	(CodepointRange::new(0x01F7, 0x01F7), CaseMapping::Delta(-56)),
	(CodepointRange::new(0x01F8, 0x021E), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x0220, 0x0220), CaseMapping::Delta(-130)),
	(CodepointRange::new(0x0222, 0x0232), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x023A, 0x023A), CaseMapping::Delta(10795)),
	(CodepointRange::new(0x023B, 0x023B), CaseMapping::Delta(1)),
	(CodepointRange::new(0x023D, 0x023D), CaseMapping::Delta(-163)),
	(CodepointRange::new(0x023E, 0x023E), CaseMapping::Delta(10792)),
	(CodepointRange::new(0x0241, 0x0241), CaseMapping::Delta(1)),
	(CodepointRange::new(0x0243, 0x0243), CaseMapping::Delta(-195)),
	(CodepointRange::new(0x0244, 0x0244), CaseMapping::Delta(69)),
	(CodepointRange::new(0x0245, 0x0245), CaseMapping::Delta(71)),
	(CodepointRange::new(0x0246, 0x024E), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x0370, 0x0372), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x0376, 0x0376), CaseMapping::Delta(1)),
	(CodepointRange::new(0x037F, 0x037F), CaseMapping::Delta(116)),
	(CodepointRange::new(0x0386, 0x0386), CaseMapping::Delta(38)),
	(CodepointRange::new(0x0388, 0x038A), CaseMapping::Delta(37)),
	(CodepointRange::new(0x038C, 0x038C), CaseMapping::Delta(64)),
	(CodepointRange::new(0x038E, 0x038F), CaseMapping::Delta(63)),
	(CodepointRange::new(0x0391, 0x03A1), CaseMapping::Delta(32)),
	(CodepointRange::new(0x03A3, 0x03AB), CaseMapping::Delta(32)),
	(CodepointRange::new(0x03CF, 0x03CF), CaseMapping::Delta(8)),
	(CodepointRange::new(0x03D8, 0x03EE), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x03F4, 0x03F4), CaseMapping::Delta(-60)),
	(CodepointRange::new(0x03F7, 0x03F7), CaseMapping::Delta(1)),
	(CodepointRange::new(0x03F9, 0x03F9), CaseMapping::Delta(-7)),
	(CodepointRange::new(0x03FA, 0x03FA), CaseMapping::Delta(1)),
	(CodepointRange::new(0x03FD, 0x03FF), CaseMapping::Delta(-130)),
	(CodepointRange::new(0x0400, 0x040F), CaseMapping::Delta(80)),
	(CodepointRange::new(0x0410, 0x042F), CaseMapping::Delta(32)),
	(CodepointRange::new(0x0460, 0x0480), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x048A, 0x04BE), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x04C0, 0x04C0), CaseMapping::Delta(15)),
	(CodepointRange::new(0x04C1, 0x04CD), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x04D0, 0x052E), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x0531, 0x0556), CaseMapping::Delta(48)),
	(CodepointRange::new(0x10A0, 0x10C5), CaseMapping::Delta(7264)),
	(CodepointRange::new(0x10C7, 0x10C7), CaseMapping::Delta(7264)),
	(CodepointRange::new(0x10CD, 0x10CD), CaseMapping::Delta(7264)),
	(CodepointRange::new(0x13A0, 0x13EF), CaseMapping::Delta(38864)),
	(CodepointRange::new(0x13F0, 0x13F5), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1C90, 0x1CBA), CaseMapping::Delta(-3008)),
	(CodepointRange::new(0x1CBD, 0x1CBF), CaseMapping::Delta(-3008)),
	(CodepointRange::new(0x1E00, 0x1E94), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x1E9E, 0x1E9E), CaseMapping::Delta(-7615)),
	(CodepointRange::new(0x1EA0, 0x1EFE), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x1F08, 0x1F0F), CaseMapping::Delta(-8)),
	(CodepointRange::new(0x1F18, 0x1F1D), CaseMapping::Delta(-8)),
	(CodepointRange::new(0x1F28, 0x1F2F), CaseMapping::Delta(-8)),
	(CodepointRange::new(0x1F38, 0x1F3F), CaseMapping::Delta(-8)),
	(CodepointRange::new(0x1F48, 0x1F4D), CaseMapping::Delta(-8)),
	(CodepointRange::new(0x1F59, 0x1F5F), CaseMapping::Alternate(-8)),
	(CodepointRange::new(0x1F68, 0x1F6F), CaseMapping::Delta(-8)),
	(CodepointRange::new(0x1F88, 0x1F8F), CaseMapping::Delta(-8)),
	(CodepointRange::new(0x1F98, 0x1F9F), CaseMapping::Delta(-8)),
	(CodepointRange::new(0x1FA8, 0x1FAF), CaseMapping::Delta(-8)),
	(CodepointRange::new(0x1FB8, 0x1FB9), CaseMapping::Delta(-8)),
	(CodepointRange::new(0x1FBA, 0x1FBB), CaseMapping::Delta(-74)),
	(CodepointRange::new(0x1FBC, 0x1FBC), CaseMapping::Delta(-9)),
	(CodepointRange::new(0x1FC8, 0x1FCB), CaseMapping::Delta(-86)),
	(CodepointRange::new(0x1FCC, 0x1FCC), CaseMapping::Delta(-9)),
	(CodepointRange::new(0x1FD8, 0x1FD9), CaseMapping::Delta(-8)),
	(CodepointRange::new(0x1FDA, 0x1FDB), CaseMapping::Delta(-100)),
	(CodepointRange::new(0x1FE8, 0x1FE9), CaseMapping::Delta(-8)),
	(CodepointRange::new(0x1FEA, 0x1FEB), CaseMapping::Delta(-112)),
	(CodepointRange::new(0x1FEC, 0x1FEC), CaseMapping::Delta(-7)),
	(CodepointRange::new(0x1FF8, 0x1FF9), CaseMapping::Delta(-128)),
	(CodepointRange::new(0x1FFA, 0x1FFB), CaseMapping::Delta(-126)),
	(CodepointRange::new(0x1FFC, 0x1FFC), CaseMapping::Delta(-9)),
	(CodepointRange::new(0x2126, 0x2126), CaseMapping::Delta(-7517)),
	(CodepointRange::new(0x212A, 0x212A), CaseMapping::Delta(-8383)),
	(CodepointRange::new(0x212B, 0x212B), CaseMapping::Delta(-8262)),
	(CodepointRange::new(0x2132, 0x2132), CaseMapping::Delta(28)),
	(CodepointRange::new(0x2160, 0x216F), CaseMapping::Delta(16)),
	(CodepointRange::new(0x2183, 0x2183), CaseMapping::Delta(1)),
	(CodepointRange::new(0x24B6, 0x24CF), CaseMapping::Delta(26)),
	(CodepointRange::new(0x2C00, 0x2C2F), CaseMapping::Delta(48)),
	(CodepointRange::new(0x2C60, 0x2C60), CaseMapping::Delta(1)),
	(CodepointRange::new(0x2C62, 0x2C62), CaseMapping::Delta(-10743)),
	(CodepointRange::new(0x2C63, 0x2C63), CaseMapping::Delta(-3814)),
	(CodepointRange::new(0x2C64, 0x2C64), CaseMapping::Delta(-10727)),
	(CodepointRange::new(0x2C67, 0x2C6B), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x2C6D, 0x2C6D), CaseMapping::Delta(-10780)),
	(CodepointRange::new(0x2C6E, 0x2C6E), CaseMapping::Delta(-10749)),
	(CodepointRange::new(0x2C6F, 0x2C6F), CaseMapping::Delta(-10783)),
	(CodepointRange::new(0x2C70, 0x2C70), CaseMapping::Delta(-10782)),
	(CodepointRange::new(0x2C72, 0x2C72), CaseMapping::Delta(1)),
	(CodepointRange::new(0x2C75, 0x2C75), CaseMapping::Delta(1)),
	(CodepointRange::new(0x2C7E, 0x2C7F), CaseMapping::Delta(-10815)),
	(CodepointRange::new(0x2C80, 0x2CE2), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x2CEB, 0x2CED), CaseMapping::Alternate(1)),
	(CodepointRange::new(0x2CF2, 0x2CF2), CaseMapping::Delta(1)),
	(CodepointRange::new(0xA640, 0xA66C), CaseMapping::Alternate(1)),
	(CodepointRange::new(0xA680, 0xA69A), CaseMapping::Alternate(1)),
	(CodepointRange::new(0xA722, 0xA72E), CaseMapping::Alternate(1)),
	(CodepointRange::new(0xA732, 0xA76E), CaseMapping::Alternate(1)),
	(CodepointRange::new(0xA779, 0xA77B), CaseMapping::Alternate(1)),
	(CodepointRange::new(0xA77D, 0xA77D), CaseMapping::Delta(-35332)),
	(CodepointRange::new(0xA77E, 0xA786), CaseMapping::Alternate(1)),
	(CodepointRange::new(0xA78B, 0xA78B), CaseMapping::Delta(1)),
	(CodepointRange::new(0xA78D, 0xA78D), CaseMapping::Delta(-42280)),
	(CodepointRange::new(0xA790, 0xA792), CaseMapping::Alternate(1)),
	(CodepointRange::new(0xA796, 0xA7A8), CaseMapping::Alternate(1)),
	(CodepointRange::new(0xA7AA, 0xA7AA), CaseMapping::Delta(-42308)),
	(CodepointRange::new(0xA7AB, 0xA7AB), CaseMapping::Delta(-42319)),
	(CodepointRange::new(0xA7AC, 0xA7AC), CaseMapping::Delta(-42315)),
	(CodepointRange::new(0xA7AD, 0xA7AD), CaseMapping::Delta(-42305)),
	(CodepointRange::new(0xA7AE, 0xA7AE), CaseMapping::Delta(-42308)),
	(CodepointRange::new(0xA7B0, 0xA7B0), CaseMapping::Delta(-42258)),
	(CodepointRange::new(0xA7B1, 0xA7B1), CaseMapping::Delta(-42282)),
	(CodepointRange::new(0xA7B2, 0xA7B2), CaseMapping::Delta(-42261)),
	(CodepointRange::new(0xA7B3, 0xA7B3), CaseMapping::Delta(928)),
	(CodepointRange::new(0xA7B4, 0xA7C2), CaseMapping::Alternate(1)),
	(CodepointRange::new(0xA7C4, 0xA7C4), CaseMapping::Delta(-48)),
	(CodepointRange::new(0xA7C5, 0xA7C5), CaseMapping::Delta(-42307)),
	(CodepointRange::new(0xA7C6, 0xA7C6), CaseMapping::Delta(-35384)),
	(CodepointRange::new(0xA7C7, 0xA7C9), CaseMapping::Alternate(1)),
	(CodepointRange::new(0xA7D0, 0xA7D0), CaseMapping::Delta(1)),
	(CodepointRange::new(0xA7D6, 0xA7D8), CaseMapping::Alternate(1)),
	(CodepointRange::new(0xA7F5, 0xA7F5), CaseMapping::Delta(1)),
	(CodepointRange::new(0xFF21, 0xFF3A), CaseMapping::Delta(32)),
	(CodepointRange::new(0x10400, 0x10427), CaseMapping::Delta(40)),
	(CodepointRange::new(0x104B0, 0x104D3), CaseMapping::Delta(40)),
	(CodepointRange::new(0x10570, 0x1057A), CaseMapping::Delta(39)),
	(CodepointRange::new(0x1057C, 0x1058A), CaseMapping::Delta(39)),
	(CodepointRange::new(0x1058C, 0x10592), CaseMapping::Delta(39)),
	(CodepointRange::new(0x10594, 0x10595), CaseMapping::Delta(39)),
	(CodepointRange::new(0x10C80, 0x10CB2), CaseMapping::Delta(64)),
	(CodepointRange::new(0x118A0, 0x118BF), CaseMapping::Delta(32)),
	(CodepointRange::new(0x16E40, 0x16E5F), CaseMapping::Delta(32)),
	(CodepointRange::new(0x1E900, 0x1E921), CaseMapping::Delta(34)),
];

pub(crate) static TO_TITLE: [(CodepointRange, CaseMapping); 196] = [
	(CodepointRange::new(0x0061, 0x007A), CaseMapping::Delta(-32)),
	(CodepointRange::new(0x00B5, 0x00B5), CaseMapping::Delta(743)),
	(CodepointRange::new(0x00E0, 0x00F6), CaseMapping::Delta(-32)),
	(CodepointRange::new(0x00F8, 0x00FE), CaseMapping::Delta(-32)),
	(CodepointRange::new(0x00FF, 0x00FF), CaseMapping::Delta(121)),
	(CodepointRange::new(0x0101, 0x012F), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x0131, 0x0131), CaseMapping::Delta(-232)),
	(CodepointRange::new(0x0133, 0x0137), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x013A, 0x0148), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x014B, 0x0177), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x017A, 0x017E), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x017F, 0x017F), CaseMapping::Delta(-300)),
	(CodepointRange::new(0x0180, 0x0180), CaseMapping::Delta(195)),
	(CodepointRange::new(0x0183, 0x0185), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x0188, 0x0188), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x018C, 0x018C), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x0192, 0x0192), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x0195, 0x0195), CaseMapping::Delta(97)),
	(CodepointRange::new(0x0199, 0x0199), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x019A, 0x019A), CaseMapping::Delta(163)),
	(CodepointRange::new(0x019E, 0x019E), CaseMapping::Delta(130)),
	(CodepointRange::new(0x01A1, 0x01A5), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x01A8, 0x01A8), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x01AD, 0x01AD), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x01B0, 0x01B0), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x01B4, 0x01B6), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x01B9, 0x01B9), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x01BD, 0x01BD), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x01BF, 0x01BF), CaseMapping::Delta(56)),
	(CodepointRange::new(0x01C4, 0x01C4), CaseMapping::Delta(1)),
	(CodepointRange::new(0x01C6, 0x01C6), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x01C7, 0x01C7), CaseMapping::Delta(1)),
	(CodepointRange::new(0x01C9, 0x01C9), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x01CA, 0x01CA), CaseMapping::Delta(1)),
	(CodepointRange::new(0x01CC, 0x01DC), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x01DD, 0x01DD), CaseMapping::Delta(-79)),
	(CodepointRange::new(0x01DF, 0x01EF), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x01F1, 0x01F1), CaseMapping::Delta(1)),
	(CodepointRange::new(0x01F3, 0x01F5), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x01F9, 0x021F), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x0223, 0x0233), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x023C, 0x023C), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x023F, 0x0240), CaseMapping::Delta(10815)),
	(CodepointRange::new(0x0242, 0x0242), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x0247, 0x024F), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x0250, 0x0250), CaseMapping::Delta(10783)),
	(CodepointRange::new(0x0251, 0x0251), CaseMapping::Delta(10780)),
	(CodepointRange::new(0x0252, 0x0252), CaseMapping::Delta(10782)),
	(CodepointRange::new(0x0253, 0x0253), CaseMapping::Delta(-210)),
	(CodepointRange::new(0x0254, 0x0254), CaseMapping::Delta(-206)),
	(CodepointRange::new(0x0256, 0x0257), CaseMapping::Delta(-205)),
	(CodepointRange::new(0x0259, 0x0259), CaseMapping::Delta(-202)),
	(CodepointRange::new(0x025B, 0x025B), CaseMapping::Delta(-203)),
	(CodepointRange::new(0x025C, 0x025C), CaseMapping::Delta(42319)),
	(CodepointRange::new(0x0260, 0x0260), CaseMapping::Delta(-205)),
	(CodepointRange::new(0x0261, 0x0261), CaseMapping::Delta(42315)),
	(CodepointRange::new(0x0263, 0x0263), CaseMapping::Delta(-207)),
	(CodepointRange::new(0x0265, 0x0265), CaseMapping::Delta(42280)),
	(CodepointRange::new(0x0266, 0x0266), CaseMapping::Delta(42308)),
	(CodepointRange::new(0x0268, 0x0268), CaseMapping::Delta(-209)),
	(CodepointRange::new(0x0269, 0x0269), CaseMapping::Delta(-211)),
	(CodepointRange::new(0x026A, 0x026A), CaseMapping::Delta(42308)),
	(CodepointRange::new(0x026B, 0x026B), CaseMapping::Delta(10743)),
	(CodepointRange::new(0x026C, 0x026C), CaseMapping::Delta(42305)),
	(CodepointRange::new(0x026F, 0x026F), CaseMapping::Delta(-211)),
	(CodepointRange::new(0x0271, 0x0271), CaseMapping::Delta(10749)),
	(CodepointRange::new(0x0272, 0x0272), CaseMapping::Delta(-213)),
	(CodepointRange::new(0x0275, 0x0275), CaseMapping::Delta(-214)),
	(CodepointRange::new(0x027D, 0x027D), CaseMapping::Delta(10727)),
	(CodepointRange::new(0x0280, 0x0280), CaseMapping::Delta(-218)),
	(CodepointRange::new(0x0282, 0x0282), CaseMapping::Delta(42307)),
	(CodepointRange::new(0x0283, 0x0283), CaseMapping::Delta(-218)),
	(CodepointRange::new(0x0287, 0x0287), CaseMapping::Delta(42282)),
	(CodepointRange::new(0x0288, 0x0288), CaseMapping::Delta(-218)),
	(CodepointRange::new(0x0289, 0x0289), CaseMapping::Delta(-69)),
	(CodepointRange::new(0x028A, 0x028B), CaseMapping::Delta(-217)),
	(CodepointRange::new(0x028C, 0x028C), CaseMapping::Delta(-71)),
	(CodepointRange::new(0x0292, 0x0292), CaseMapping::Delta(-219)),
	(CodepointRange::new(0x029D, 0x029D), CaseMapping::Delta(42261)),
	(CodepointRange::new(0x029E, 0x029E), CaseMapping::Delta(42258)),
	(CodepointRange::new(0x0345, 0x0345), CaseMapping::Delta(84)),
	(CodepointRange::new(0x0371, 0x0373), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x0377, 0x0377), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x037B, 0x037D), CaseMapping::Delta(130)),
	(CodepointRange::new(0x03AC, 0x03AC), CaseMapping::Delta(-38)),
	(CodepointRange::new(0x03AD, 0x03AF), CaseMapping::Delta(-37)),
	(CodepointRange::new(0x03B1, 0x03C1), CaseMapping::Delta(-32)),
	(CodepointRange::new(0x03C2, 0x03C2), CaseMapping::Delta(-31)),
	(CodepointRange::new(0x03C3, 0x03CB), CaseMapping::Delta(-32)),
	(CodepointRange::new(0x03CC, 0x03CC), CaseMapping::Delta(-64)),
	(CodepointRange::new(0x03CD, 0x03CE), CaseMapping::Delta(-63)),
	(CodepointRange::new(0x03D0, 0x03D0), CaseMapping::Delta(-62)),
	(CodepointRange::new(0x03D1, 0x03D1), CaseMapping::Delta(-57)),
	(CodepointRange::new(0x03D5, 0x03D5), CaseMapping::Delta(-47)),
	(CodepointRange::new(0x03D6, 0x03D6), CaseMapping::Delta(-54)),
	(CodepointRange::new(0x03D7, 0x03D7), CaseMapping::Delta(-8)),
	(CodepointRange::new(0x03D9, 0x03EF), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x03F0, 0x03F0), CaseMapping::Delta(-86)),
	(CodepointRange::new(0x03F1, 0x03F1), CaseMapping::Delta(-80)),
	(CodepointRange::new(0x03F2, 0x03F2), CaseMapping::Delta(7)),
	(CodepointRange::new(0x03F3, 0x03F3), CaseMapping::Delta(-116)),
	(CodepointRange::new(0x03F5, 0x03F5), CaseMapping::Delta(-96)),
	(CodepointRange::new(0x03F8, 0x03F8), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x03FB, 0x03FB), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x0430, 0x044F), CaseMapping::Delta(-32)),
	(CodepointRange::new(0x0450, 0x045F), CaseMapping::Delta(-80)),
	(CodepointRange::new(0x0461, 0x0481), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x048B, 0x04BF), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x04C2, 0x04CE), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x04CF, 0x04CF), CaseMapping::Delta(-15)),
	(CodepointRange::new(0x04D1, 0x052F), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x0561, 0x0586), CaseMapping::Delta(-48)),
	(CodepointRange::new(0x13F8, 0x13FD), CaseMapping::Delta(-8)),
	(CodepointRange::new(0x1C80, 0x1C80), CaseMapping::Delta(-6254)),
	(CodepointRange::new(0x1C81, 0x1C81), CaseMapping::Delta(-6253)),
	(CodepointRange::new(0x1C82, 0x1C82), CaseMapping::Delta(-6244)),
	(CodepointRange::new(0x1C83, 0x1C84), CaseMapping::Delta(-6242)),
	(CodepointRange::new(0x1C85, 0x1C85), CaseMapping::Delta(-6243)),
	(CodepointRange::new(0x1C86, 0x1C86), CaseMapping::Delta(-6236)),
	(CodepointRange::new(0x1C87, 0x1C87), CaseMapping::Delta(-6181)),
	(CodepointRange::new(0x1C88, 0x1C88), CaseMapping::Delta(35266)),
	(CodepointRange::new(0x1D79, 0x1D79), CaseMapping::Delta(35332)),
	(CodepointRange::new(0x1D7D, 0x1D7D), CaseMapping::Delta(3814)),
	(CodepointRange::new(0x1D8E, 0x1D8E), CaseMapping::Delta(35384)),
	(CodepointRange::new(0x1E01, 0x1E95), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x1E9B, 0x1E9B), CaseMapping::Delta(-59)),
	(CodepointRange::new(0x1EA1, 0x1EFF), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x1F00, 0x1F07), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1F10, 0x1F15), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1F20, 0x1F27), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1F30, 0x1F37), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1F40, 0x1F45), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1F51, 0x1F57), CaseMapping::Alternate(8)),
	(CodepointRange::new(0x1F60, 0x1F67), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1F70, 0x1F71), CaseMapping::Delta(74)),
	(CodepointRange::new(0x1F72, 0x1F75), CaseMapping::Delta(86)),
	(CodepointRange::new(0x1F76, 0x1F77), CaseMapping::Delta(100)),
	(CodepointRange::new(0x1F78, 0x1F79), CaseMapping::Delta(128)),
	(CodepointRange::new(0x1F7A, 0x1F7B), CaseMapping::Delta(112)),
	(CodepointRange::new(0x1F7C, 0x1F7D), CaseMapping::Delta(126)),
	(CodepointRange::new(0x1F80, 0x1F87), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1F90, 0x1F97), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1FA0, 0x1FA7), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1FB0, 0x1FB1), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1FB3, 0x1FB3), CaseMapping::Delta(9)),
	(CodepointRange::new(0x1FBE, 0x1FBE), CaseMapping::Delta(-7205)),
	(CodepointRange::new(0x1FC3, 0x1FC3), CaseMapping::Delta(9)),
	(CodepointRange::new(0x1FD0, 0x1FD1), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1FE0, 0x1FE1), CaseMapping::Delta(8)),
	(CodepointRange::new(0x1FE5, 0x1FE5), CaseMapping::Delta(7)),
	(CodepointRange::new(0x1FF3, 0x1FF3), CaseMapping::Delta(9)),
	(CodepointRange::new(0x214E, 0x214E), CaseMapping::Delta(-28)),
	(CodepointRange::new(0x2170, 0x217F), CaseMapping::Delta(-16)),
	(CodepointRange::new(0x2184, 0x2184), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x24D0, 0x24E9), CaseMapping::Delta(-26)),
	(CodepointRange::new(0x2C30, 0x2C5F), CaseMapping::Delta(-48)),
	(CodepointRange::new(0x2C61, 0x2C61), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x2C65, 0x2C65), CaseMapping::Delta(-10795)),
	(CodepointRange::new(0x2C66, 0x2C66), CaseMapping::Delta(-10792)),
	(CodepointRange::new(0x2C68, 0x2C6C), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x2C73, 0x2C73), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x2C76, 0x2C76), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x2C81, 0x2CE3), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x2CEC, 0x2CEE), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0x2CF3, 0x2CF3), CaseMapping::Delta(-1)),
	(CodepointRange::new(0x2D00, 0x2D25), CaseMapping::Delta(-7264)),
	(CodepointRange::new(0x2D27, 0x2D27), CaseMapping::Delta(-7264)),
	(CodepointRange::new(0x2D2D, 0x2D2D), CaseMapping::Delta(-7264)),
	(CodepointRange::new(0xA641, 0xA66D), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0xA681, 0xA69B), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0xA723, 0xA72F), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0xA733, 0xA76F), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0xA77A, 0xA77C), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0xA77F, 0xA787), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0xA78C, 0xA78C), CaseMapping::Delta(-1)),
	(CodepointRange::new(0xA791, 0xA793), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0xA794, 0xA794), CaseMapping::Delta(48)),
	(CodepointRange::new(0xA797, 0xA7A9), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0xA7B5, 0xA7C3), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0xA7C8, 0xA7CA), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0xA7D1, 0xA7D1), CaseMapping::Delta(-1)),
	(CodepointRange::new(0xA7D7, 0xA7D9), CaseMapping::Alternate(-1)),
	(CodepointRange::new(0xA7F6, 0xA7F6), CaseMapping::Delta(-1)),
	(CodepointRange::new(0xAB53, 0xAB53), CaseMapping::Delta(-928)),
	(CodepointRange::new(0xAB70, 0xABBF), CaseMapping::Delta(-38864)),
	(CodepointRange::new(0xFF41, 0xFF5A), CaseMapping::Delta(-32)),
	(CodepointRange::new(0x10428, 0x1044F), CaseMapping::Delta(-40)),
	(CodepointRange::new(0x104D8, 0x104FB), CaseMapping::Delta(-40)),
	(CodepointRange::new(0x10597, 0x105A1), CaseMapping::Delta(-39)),
	(CodepointRange::new(0x105A3, 0x105B1), CaseMapping::Delta(-39)),
	(CodepointRange::new(0x105B3, 0x105B9), CaseMapping::Delta(-39)),
	(CodepointRange::new(0x105BB, 0x105BC), CaseMapping::Delta(-39)),
	(CodepointRange::new(0x10CC0, 0x10CF2), CaseMapping::Delta(-64)),
	(CodepointRange::new(0x118C0, 0x118DF), CaseMapping::Delta(-32)),
	(CodepointRange::new(0x16E60, 0x16E7F), CaseMapping::Delta(-32)),
	(CodepointRange::new(0x1E922, 0x1E943), CaseMapping::Delta(-34)),
];
