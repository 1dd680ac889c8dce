//! Enums are (de)serialized by their string form, which stays the same across versions, unlike their ordinals.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{Category, CategoryGroup, EnumNameT, Property, Script};

macro_rules! serde_by_name {
	($($ty:ty),*) => {
		$(
			impl Serialize for $ty {
				fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
					serializer.serialize_str(self.name())
				}
			}

			impl<'de> Deserialize<'de> for $ty {
				fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
					let name = String::deserialize(deserializer)?;
					name.parse().map_err(de::Error::custom)
				}
			}
		)*
	};
}

serde_by_name!(Category, CategoryGroup, Script);

impl Serialize for Property {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_u64(self.bits())
	}
}

impl<'de> Deserialize<'de> for Property {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		u64::deserialize(deserializer).map(Property::from_bits)
	}
}

#[cfg(test)]
mod tests {
	use crate::{classify, Category, Property, Script};

	#[test]
	fn enums_use_names() {
		assert_eq!(serde_json::to_string(&Category::UppercaseLetter).unwrap(), "\"Lu\"");
		assert_eq!(serde_json::to_string(&Script::Latin).unwrap(), "\"Latn\"");
		assert_eq!(serde_json::from_str::<Script>("\"Grek\"").unwrap(), Script::Greek);
		assert!(serde_json::from_str::<Category>("\"Xx\"").is_err());
	}

	#[test]
	fn properties_use_bits() {
		let props = Property::WhiteSpace | Property::PatternWhiteSpace;
		assert_eq!(serde_json::to_string(&props).unwrap(), "1073741825");
		assert_eq!(serde_json::from_str::<Property>("1073741825").unwrap(), props);
	}

	#[test]
	fn codepoint_info() {
		let json = serde_json::to_string(&classify(0x41)).unwrap();
		assert_eq!(json, r#"{"codepoint":65,"category":"Lu","group":"L","script":"Latn","properties":768}"#);
	}
}
