use proc_macro2::*;
use quote::quote;
use syn::{punctuated::Punctuated, *};

/// Arguments are either a base type or a bare option name, both of which parse as a path type
struct CommaSeparatedList {
	list: Punctuated::<TypePath, Token![,]>
}

impl syn::parse::Parse for CommaSeparatedList {
	fn parse(input: parse::ParseStream) -> Result<Self> {
		let list = Punctuated::parse_terminated(input)?;
		Ok(Self { list })
	}
}

const BASE_TYPES: [&str; 5] = ["u8", "u16", "u32", "u64", "u128"];

pub fn flags(args: TokenStream, input: TokenStream) -> TokenStream {
	let input_parsed = match syn::parse2::<DeriveInput>(input) {
		Ok(derived_input) => derived_input,
		Err(err) => return err.to_compile_error(),
	};

	let vis = input_parsed.vis;
	let flag_name = input_parsed.ident;
	let enum_attrs = input_parsed.attrs;

	let body_data = match input_parsed.data {
		Data::Enum(body) => body,
		_ => return quote!( compile_error!("Not an enum"); )
	};

	let args = match parse2::<CommaSeparatedList>(args) {
		Ok(data) => data.list,
		Err(err) => return err.to_compile_error(),
	};

	let mut base_type = None;
	let mut parse_from_name = false;
	for elem in args {
		match elem.path.get_ident().map(|ident| ident.to_string()).as_deref() {
			Some("parse_from_name") => parse_from_name = true,
			Some(name) if BASE_TYPES.contains(&name) && base_type.is_none() => base_type = Some(elem),
			_ => return quote!( compile_error!("Unknown `flags` argument, expected a base type or `parse_from_name`"); ),
		}
	}
	let base_type = match base_type {
		Some(ty) => ty,
		None => return quote!( compile_error!("`flags` requires a base type: u8, u16, u32, u64 or u128"); ),
	};
	let base_bits = match base_type.path.get_ident().map(|ident| ident.to_string()).as_deref() {
		Some("u8") => 8,
		Some("u16") => 16,
		Some("u32") => 32,
		Some("u64") => 64,
		_ => 128,
	};

	let mut idents = Vec::<Ident>::new();
	let mut vals = Vec::<LitInt>::new();
	let mut attrs = Vec::<Vec<Attribute>>::new();
	let mut parse_names = Vec::new();
	let mut used_bits: u128 = 0;

	for it in body_data.variants {
		let ident_name = it.ident.to_string();

		let mut parse_name = None;
		let mut elem_attrs = Vec::new();
		for attr in it.attrs {
			if attr.path().is_ident("parse_name") {
				if parse_name.is_some() {
					let error_msg = format!("Duplicate `parse_name` for member '{ident_name}'");
					return quote!(compile_error!(#error_msg););
				}
				match attr.parse_args::<LitStr>() {
					Ok(lit) => parse_name = Some(lit.value()),
					Err(_) => {
						let error_msg = format!("Expected a string literal as a `parse_name` for member '{ident_name}'");
						return quote!(compile_error!(#error_msg););
					},
				}
				continue;
			}
			elem_attrs.push(attr);
		}

		// Bits are part of the public contract, so they always need to be spelled out
		let lit = match it.discriminant {
			Some((_, Expr::Lit(ExprLit{ lit: Lit::Int(lit), .. }))) => lit,
			_ => {
				let error_msg = format!("Member '{ident_name}' needs an integer literal with a single bit set");
				return quote!(compile_error!(#error_msg););
			}
		};
		let val = match lit.base10_parse::<u128>() {
			Ok(val) => val,
			Err(err) => return err.to_compile_error(),
		};
		if !val.is_power_of_two() || val.trailing_zeros() >= base_bits {
			let error_msg = format!("Member '{ident_name}' needs a single bit that fits in `{}`", quote!(#base_type));
			return quote!(compile_error!(#error_msg););
		}
		if used_bits & val != 0 {
			let error_msg = format!("Member '{ident_name}' reuses a bit of a previous member");
			return quote!(compile_error!(#error_msg););
		}
		used_bits |= val;

		parse_names.push(parse_name.unwrap_or_else(|| ident_name.clone()));
		idents.push(it.ident);
		vals.push(lit);
		attrs.push(elem_attrs);
	}
	let count = idents.len();

	let parse = if parse_from_name {
		quote!{
			/// Parse flags from their names, multiple flags can be combined using `|`.
			#vis fn parse(name: &str) -> Option<Self> {
				let mut flags = Self::None;
				for sub_name in name.split('|').map(|val| val.trim()) {
					let idx = Self::NAMES.iter().position(|name| *name == sub_name)?;
					flags |= Self::FLAGS[idx];
				}
				Some(flags)
			}
		}
	} else {
		quote!{}
	};

	quote!(
		#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
		#(#enum_attrs)*
		#[repr(transparent)]
		#vis struct #flag_name {
			bits : #base_type
		}

		#[allow(non_upper_case_globals)]
		impl #flag_name {
			/// No flag set.
			#vis const None : #flag_name = #flag_name { bits: 0 };

			#(#(#attrs)* #vis const #idents : #flag_name = #flag_name { bits: #vals };)*

			/// All flags, in declaration order.
			#vis const FLAGS : [#flag_name; #count] = [#(#flag_name::#idents,)*];

			/// Names of all flags, matching the order of `FLAGS`.
			#vis const NAMES : [&'static str; #count] = [#(#parse_names,)*];

			/// Every declared flag.
			#vis const fn all() -> Self {
				Self { bits: 0 #( | #vals)* }
			}

			/// Wrap raw bits, bits without a flag are kept.
			#vis const fn from_bits(bits: #base_type) -> Self {
				Self { bits }
			}

			/// Wrap raw bits, bits without a flag are dropped.
			#vis const fn from_bits_truncate(bits: #base_type) -> Self {
				Self { bits: bits & Self::all().bits }
			}

			#vis const fn bits(&self) -> #base_type {
				self.bits
			}

			/// Are all flags in `flags` set?
			#vis const fn contains(&self, flags: #flag_name) -> bool {
				self.bits & flags.bits == flags.bits
			}

			/// Is at least one flag in `flags` set?
			#vis const fn intersects(&self, flags: #flag_name) -> bool {
				self.bits & flags.bits != 0
			}

			#vis const fn is_none(&self) -> bool {
				self.bits == 0
			}

			#vis const fn is_any(&self) -> bool {
				self.bits != 0
			}

			/// `|` usable in const context.
			#vis const fn bitor(self, rhs: Self) -> Self {
				Self { bits: self.bits | rhs.bits }
			}

			/// Iterate over the set flags and their names.
			#vis fn iter(&self) -> impl Iterator<Item = (&'static str, #flag_name)> {
				let flags = *self;
				Self::NAMES.into_iter()
					.zip(Self::FLAGS)
					.filter(move |(_, flag)| flags.contains(*flag))
			}

			#parse
		}

		impl ::core::ops::BitOr for #flag_name {
			type Output = Self;
			fn bitor(self, rhs: Self) -> Self {
				#flag_name::bitor(self, rhs)
			}
		}

		impl ::core::ops::BitOrAssign for #flag_name {
			fn bitor_assign(&mut self, rhs: Self) {
				self.bits |= rhs.bits;
			}
		}

		impl ::core::fmt::Debug for #flag_name {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				const IDENTS : [&str; #count] = [#(stringify!(#idents),)*];

				if self.is_none() {
					return f.write_str("None");
				}

				let mut sep = "";
				for (ident, flag) in IDENTS.into_iter().zip(Self::FLAGS) {
					if self.contains(flag) {
						write!(f, "{sep}{ident}")?;
						sep = " | ";
					}
				}

				let unknown = self.bits & !Self::all().bits;
				if unknown != 0 {
					write!(f, "{sep}{unknown:#x}")?;
				}
				Ok(())
			}
		}

		/// Writes the names of the set flags, separated by `|`
		impl ::core::fmt::Display for #flag_name {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				let mut sep = "";
				for (name, _) in self.iter() {
					write!(f, "{sep}{name}")?;
					sep = " | ";
				}
				Ok(())
			}
		}
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn expand(args: TokenStream) -> String {
		flags(args, quote!(
			pub enum Sample {
				#[parse_name("First_Flag")]
				First = 0x1,
				Second = 0x4,
			}
		)).to_string()
	}

	fn expand_body(body: TokenStream) -> String {
		flags(quote!(u8), body).to_string()
	}

	#[test]
	fn accepted_arguments() {
		let plain = expand(quote!(u64));
		assert!(!plain.contains("compile_error"), "{plain}");
		assert!(plain.contains("struct Sample"), "{plain}");
		assert!(!plain.contains("fn parse"), "{plain}");

		for args in [quote!(u64, parse_from_name), quote!(parse_from_name, u64), quote!(u8, parse_from_name,)] {
			let expanded = expand(args);
			assert!(!expanded.contains("compile_error"), "{expanded}");
			assert!(expanded.contains("fn parse"), "{expanded}");
			assert!(expanded.contains("\"First_Flag\""), "{expanded}");
			assert!(expanded.contains("\"Second\""), "{expanded}");
		}
	}

	#[test]
	fn rejected_arguments() {
		assert!(expand(quote!()).contains("requires a base type"));
		assert!(expand(quote!(parse_from_name)).contains("requires a base type"));
		assert!(expand(quote!(u64, u32)).contains("Unknown `flags` argument"));
		assert!(expand(quote!(i32)).contains("Unknown `flags` argument"));
		assert!(expand(quote!(u64, parse_by_name)).contains("Unknown `flags` argument"));
	}

	#[test]
	fn members_need_single_unique_bits() {
		let multi_bit = expand_body(quote!(enum Sample { A = 0x3 }));
		assert!(multi_bit.contains("single bit"), "{multi_bit}");

		let too_wide = expand_body(quote!(enum Sample { A = 0x100 }));
		assert!(too_wide.contains("single bit"), "{too_wide}");

		let implicit = expand_body(quote!(enum Sample { A }));
		assert!(implicit.contains("integer literal"), "{implicit}");

		let reused = expand_body(quote!(enum Sample { A = 0x2, B = 0x2 }));
		assert!(reused.contains("reuses a bit"), "{reused}");
	}

	#[test]
	fn duplicate_parse_name() {
		let expanded = expand_body(quote!(
			enum Sample {
				#[parse_name("A")]
				#[parse_name("B")]
				A = 0x1,
			}
		));
		assert!(expanded.contains("Duplicate `parse_name`"), "{expanded}");
	}

	#[test]
	fn only_enums() {
		let expanded = flags(quote!(u8), quote!(struct Sample;)).to_string();
		assert!(expanded.contains("Not an enum"), "{expanded}");
	}
}
