use proc_macro2::*;
use quote::quote;
use syn::*;

fn parse_enum(item: TokenStream, derive_name: &str) -> core::result::Result<(Ident, Vec<Attribute>, DataEnum), TokenStream> {
    let input_parsed = match syn::parse2::<DeriveInput>(item) {
        Ok(derived_input) => derived_input,
        Err(err) => return Err(err.to_compile_error()),
    };

    match input_parsed.data {
        Data::Enum(body) => Ok((input_parsed.ident, input_parsed.attrs, body)),
        _ => {
            let msg = format!("{derive_name} can only be derived for an enum");
            Err(quote!( compile_error!(#msg); ))
        }
    }
}

/// Discriminant of each variant, in declaration order
fn variant_indices(body: &DataEnum, derive_name: &str) -> core::result::Result<Vec<usize>, TokenStream> {
    let mut indices = Vec::with_capacity(body.variants.len());
    let mut next = 0;
    for variant in &body.variants {
        let idx = match &variant.discriminant {
            Some((_, Expr::Lit(ExprLit { lit: Lit::Int(int), .. }))) => match int.base10_parse::<usize>() {
                Ok(int) => int,
                Err(err) => {
                    let msg = err.to_string();
                    return Err(quote!( compile_error!(#msg); ));
                },
            },
            Some(_) => {
                let msg = format!("Only integer discriminants are supported by {derive_name}");
                return Err(quote!( compile_error!(#msg); ));
            },
            None => next,
        };

        indices.push(idx);
        next = idx + 1;
    }
    Ok(indices)
}

fn variant_name(variant: &Variant) -> core::result::Result<String, TokenStream> {
    match variant.attrs.iter().find(|attr| attr.path().is_ident("parse_name")) {
        Some(attr) => attr.parse_args::<LitStr>()
            .map(|lit| lit.value())
            .map_err(|err| err.to_compile_error()),
        None => Ok(variant.ident.to_string()),
    }
}

fn variant_names(body: &DataEnum) -> core::result::Result<Vec<String>, TokenStream> {
    body.variants.iter().map(variant_name).collect()
}

pub fn enum_count(item: TokenStream) -> TokenStream {
    let (ident, _, body_data) = match parse_enum(item, "EnumCount") {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };
    let count = body_data.variants.len();

    quote!{
        impl ucd_base::EnumCountT for #ident {
            const COUNT: usize = #count;
        }
    }
}

pub fn enum_from_index(item: TokenStream) -> TokenStream {
    let (ident, _, body_data) = match parse_enum(item, "EnumFromIndex") {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };
    let indices = match variant_indices(&body_data, "EnumFromIndex") {
        Ok(indices) => indices,
        Err(err) => return err,
    };
    let variants = body_data.variants.iter().map(|variant| &variant.ident);

    quote!{
        impl ucd_base::EnumFromIndexT for #ident {
            fn from_idx(idx: usize) -> Option<Self> {
                match idx {
                    #(#indices => Some(Self::#variants),)*
                    _ => None,
                }
            }
        }
    }
}

pub fn enum_from_name(item: TokenStream) -> TokenStream {
    let (ident, _, body_data) = match parse_enum(item, "EnumFromName") {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };
    let names = match variant_names(&body_data) {
        Ok(names) => names,
        Err(err) => return err,
    };
    let members = body_data.variants.iter().map(|variant| &variant.ident);

    quote!{
        impl ucd_base::EnumFromNameT for #ident {
            fn parse(s: &str) -> Option<Self> {
                match s {
                    #(#names => Some(Self::#members),)*
                    _ => None,
                }
            }
        }
    }
}

pub fn enum_name(item: TokenStream) -> TokenStream {
    let (ident, attrs, body_data) = match parse_enum(item, "EnumName") {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };

    let placeholder = match attrs.iter().find(|attr| attr.path().is_ident("name_placeholder")) {
        Some(attr) => match attr.parse_args::<LitStr>() {
            Ok(lit) => lit.value(),
            Err(err) => return err.to_compile_error(),
        },
        None => return quote!( compile_error!("EnumName requires a `#[name_placeholder(\"..\")]` on the enum"); ),
    };

    // The names are stored in a table indexed by discriminant, so there can't be any holes
    let indices = match variant_indices(&body_data, "EnumName") {
        Ok(indices) => indices,
        Err(err) => return err,
    };
    if indices.iter().enumerate().any(|(i, idx)| i != *idx) {
        return quote!( compile_error!("EnumName requires discriminants to be contiguous and start at 0"); );
    }

    let names = match variant_names(&body_data) {
        Ok(names) => names,
        Err(err) => return err,
    };
    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) || *name == placeholder {
            let msg = format!("Duplicate name '{name}'");
            return quote!( compile_error!(#msg); );
        }
    }
    quote!{
        impl ucd_base::EnumNameT for #ident {
            const PLACEHOLDER: &'static str = #placeholder;
            const NAMES: &'static [&'static str] = &[#(#names,)*];

            fn name(&self) -> &'static str {
                Self::NAMES[*self as usize]
            }
        }

        impl core::fmt::Display for #ident {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.pad(ucd_base::EnumNameT::name(self))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_error(expanded: &TokenStream) -> bool {
        expanded.to_string().contains("compile_error")
    }

    #[test]
    fn count_and_index() {
        let item = quote!(enum Sample { A, B = 4, C });
        let count = enum_count(item.clone()).to_string();
        assert!(count.contains("const COUNT : usize = 3usize"), "{count}");

        let from_idx = enum_from_index(item).to_string();
        assert!(from_idx.contains("4usize => Some (Self :: B)"), "{from_idx}");
        assert!(from_idx.contains("5usize => Some (Self :: C)"), "{from_idx}");
    }

    #[test]
    fn from_name_uses_parse_name() {
        let expanded = enum_from_name(quote!(
            enum Sample {
                #[parse_name("Aa")]
                A,
                B,
            }
        )).to_string();
        assert!(expanded.contains("\"Aa\" => Some (Self :: A)"), "{expanded}");
        assert!(expanded.contains("\"B\" => Some (Self :: B)"), "{expanded}");
    }

    #[test]
    fn name_table() {
        let expanded = enum_name(quote!(
            #[name_placeholder("-")]
            enum Sample {
                #[parse_name("a")]
                A,
                #[parse_name("b")]
                B = 1,
            }
        ));
        assert!(!is_error(&expanded), "{expanded}");
        let expanded = expanded.to_string();
        assert!(expanded.contains("PLACEHOLDER"), "{expanded}");
        assert!(expanded.contains("\"-\""), "{expanded}");
        assert!(expanded.contains("\"a\" , \"b\" ,"), "{expanded}");
        assert!(expanded.contains("NAMES"), "{expanded}");
    }

    #[test]
    fn name_requires_contiguous_discriminants() {
        for item in [
            quote!(#[name_placeholder("-")] enum Sample { A = 1, B }),
            quote!(#[name_placeholder("-")] enum Sample { A, B = 3 }),
        ] {
            let expanded = enum_name(item).to_string();
            assert!(expanded.contains("contiguous"), "{expanded}");
        }
    }

    #[test]
    fn name_rejects_duplicates() {
        let duplicate = enum_name(quote!(
            #[name_placeholder("-")]
            enum Sample {
                #[parse_name("x")]
                A,
                #[parse_name("x")]
                B,
            }
        )).to_string();
        assert!(duplicate.contains("Duplicate name"), "{duplicate}");

        let placeholder = enum_name(quote!(
            #[name_placeholder("A")]
            enum Sample { A, B }
        )).to_string();
        assert!(placeholder.contains("Duplicate name"), "{placeholder}");
    }

    #[test]
    fn name_requires_placeholder() {
        let expanded = enum_name(quote!(enum Sample { A })).to_string();
        assert!(expanded.contains("name_placeholder"), "{expanded}");
        assert!(is_error(&enum_name(quote!(#[name_placeholder("-")] struct Sample;))));
    }
}
