//! Derive support for the closed style enumerations.
//!
//! `#[derive(Enumeration)]` implements `layout_style_enums::Enumeration` for a
//! fieldless enum: variant count, ordinal mapping in declaration order, and a
//! CSS-style keyword per variant (kebab-cased variant name unless overridden
//! with `#[keyword = "..."]`).

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Error, Expr, ExprLit, Fields, Lit, Meta, parse_macro_input};

#[proc_macro_derive(Enumeration, attributes(keyword))]
pub fn derive_enumeration(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_enumeration(&input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

fn expand_enumeration(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let enum_name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return Err(Error::new_spanned(
            enum_name,
            "Enumeration can only be derived for enums",
        ));
    };
    if data_enum.variants.is_empty() {
        return Err(Error::new_spanned(
            enum_name,
            "Enumeration requires at least one variant",
        ));
    }

    let mut variant_names = Vec::new();
    let mut keywords = Vec::new();
    for variant in &data_enum.variants {
        // Only support unit variants
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new_spanned(
                variant,
                "Enumeration derive only supports unit variants",
            ));
        }
        let keyword =
            keyword_override(variant)?.unwrap_or_else(|| kebab_case(&variant.ident.to_string()));
        variant_names.push(&variant.ident);
        keywords.push(keyword);
    }

    let count = variant_names.len() as u32;
    let ordinals: Vec<u32> = (0..count).collect();
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::layout_style_enums::Enumeration for #enum_name #type_generics #where_clause {
            const COUNT: u32 = #count;
            const ALL: &'static [Self] = &[#(Self::#variant_names),*];

            #[inline]
            fn ordinal(self) -> u32 {
                match self {
                    #(Self::#variant_names => #ordinals,)*
                }
            }

            #[inline]
            fn from_ordinal(ordinal: u32) -> ::core::option::Option<Self> {
                match ordinal {
                    #(#ordinals => ::core::option::Option::Some(Self::#variant_names),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn keyword(self) -> &'static str {
                match self {
                    #(Self::#variant_names => #keywords,)*
                }
            }
        }

        impl #impl_generics ::core::fmt::Display for #enum_name #type_generics #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(::layout_style_enums::Enumeration::keyword(*self))
            }
        }
    })
}

/// Reads `#[keyword = "..."]` from a variant, if present.
fn keyword_override(variant: &syn::Variant) -> syn::Result<Option<String>> {
    for attr in &variant.attrs {
        if !attr.path().is_ident("keyword") {
            continue;
        }
        let Meta::NameValue(name_value) = &attr.meta else {
            return Err(Error::new_spanned(
                attr,
                "keyword attribute must be in the form #[keyword = \"...\"]",
            ));
        };
        let Expr::Lit(ExprLit {
            lit: Lit::Str(literal),
            ..
        }) = &name_value.value
        else {
            return Err(Error::new_spanned(
                &name_value.value,
                "keyword attribute value must be a string literal",
            ));
        };
        return Ok(Some(literal.value()));
    }
    Ok(None)
}

/// `SpaceBetween` -> `space-between`.
fn kebab_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (index, character) in ident.chars().enumerate() {
        if character.is_ascii_uppercase() {
            if index > 0 {
                out.push('-');
            }
            out.push(character.to_ascii_lowercase());
        } else {
            out.push(character);
        }
    }
    out
}
