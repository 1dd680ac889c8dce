//! Procedural macros for the dense enumerations and flag sets used by the ucd crates.

use proc_macro::TokenStream;

mod derive;
mod flags;

/// Turn a fieldless enum into a transparent flag set.
///
/// Arguments: the backing integer type (`u8`..`u128`) and optionally `parse_from_name`,
/// which generates a `parse` function using the `#[parse_name("..")]` of each member.
///
/// Every member needs an explicit single-bit integer discriminant, so bit positions never shift when members are added.
#[proc_macro_attribute]
pub fn flags(args: TokenStream, input: TokenStream) -> TokenStream {
	flags::flags(args.into(), input.into()).into()
}

/// Implement `ucd_base::EnumCountT`.
#[proc_macro_derive(EnumCount)]
pub fn enum_count(item: TokenStream) -> TokenStream {
	derive::enum_count(item.into()).into()
}

/// Implement `ucd_base::EnumFromIndexT`, based on the discriminant of each member.
#[proc_macro_derive(EnumFromIndex)]
pub fn enum_from_index(item: TokenStream) -> TokenStream {
	derive::enum_from_index(item.into()).into()
}

/// Implement `ucd_base::EnumFromNameT`, member names can be overwritten using `#[parse_name("..")]`.
#[proc_macro_derive(EnumFromName, attributes(parse_name))]
pub fn enum_from_name(item: TokenStream) -> TokenStream {
	derive::enum_from_name(item.into()).into()
}

/// Implement `ucd_base::EnumNameT` and `Display`.
///
/// Uses the same `#[parse_name("..")]` as `EnumFromName`, the placeholder is set with `#[name_placeholder("..")]` on the enum.
#[proc_macro_derive(EnumName, attributes(parse_name, name_placeholder))]
pub fn enum_name(item: TokenStream) -> TokenStream {
	derive::enum_name(item.into()).into()
}
