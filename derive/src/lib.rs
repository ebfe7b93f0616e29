//! # Fieldcheck Derive
//!
//! `#[derive(Reflect)]` for the `fieldcheck` crate.
//!
//! ```ignore
//! use fieldcheck::Reflect;
//!
//! #[derive(Reflect)]
//! pub struct Signup {
//!     #[validate("min:3")]
//!     pub username: String,
//!     #[validate = "in:free,pro"]
//!     pub plan: String,
//!     // private: a rule here makes validation fail
//!     created_by: String,
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields, Generics};

mod field;

use field::FieldSpec;

/// Derive macro for the `Reflect` trait.
///
/// Only structs with named fields are supported. Each field may carry one
/// `#[validate("kind:arg")]` (or `#[validate = "kind:arg"]`) attribute. Fields
/// with any `pub` visibility are introspectable; a rule on a private field
/// makes validation fail with the unexported-field error.
///
/// Annotated public fields must implement `fieldcheck::AsFieldValue`; other
/// fields may have any type.
#[proc_macro_derive(Reflect, attributes(validate))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "Reflect can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Reflect can only be derived for structs",
            ))
        }
    };

    let specs = fields
        .iter()
        .map(FieldSpec::from_field)
        .collect::<syn::Result<Vec<_>>>()?;
    let descriptors = specs.iter().map(descriptor);

    let name = &input.ident;
    let generics = bounded_generics(&input.generics, &specs);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::fieldcheck::Reflect for #name #ty_generics #where_clause {
            fn shape(&self) -> ::fieldcheck::Shape<'_> {
                ::fieldcheck::Shape::Record(::std::vec![#(#descriptors),*])
            }
        }
    })
}

/// Require `AsFieldValue` for every inspected field type of a generic struct,
/// so a missing impl is reported against the struct rather than the expansion.
fn bounded_generics(generics: &Generics, specs: &[FieldSpec]) -> Generics {
    let mut generics = generics.clone();
    if generics.type_params().next().is_none() {
        return generics;
    }

    let where_clause = generics.make_where_clause();
    for spec in specs.iter().filter(|spec| spec.is_inspected()) {
        let ty = &spec.ty;
        where_clause
            .predicates
            .push(parse_quote!(#ty: ::fieldcheck::AsFieldValue));
    }
    generics
}

fn descriptor(spec: &FieldSpec) -> TokenStream2 {
    let name = &spec.name;
    let ident = &spec.ident;

    match (spec.exported, &spec.rule) {
        (true, Some(rule)) => quote! {
            ::fieldcheck::Field::new(
                #name,
                ::fieldcheck::AsFieldValue::as_field_value(&self.#ident),
            )
            .rule(#rule)
        },
        (true, None) => quote! {
            ::fieldcheck::Field::new(#name, ::fieldcheck::FieldValue::Opaque)
        },
        (false, Some(rule)) => quote! {
            ::fieldcheck::Field::hidden(#name).rule(#rule)
        },
        (false, None) => quote! {
            ::fieldcheck::Field::hidden(#name)
        },
    }
}
