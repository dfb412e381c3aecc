//! `#[derive(SeaOrmResource)]`: implements `core_proc_macros::ApiResource`
//! for a SeaORM model from its `#[sea_orm(table_name = "...")]`.
//!
//! Defaults for a table named `space_event`:
//!
//! | constant | value |
//! |---|---|
//! | `URL` | `/space-events` |
//! | `URL_WITH_ID` | `/space-events/{id}` |
//! | `COLLECTION` | `space_event` |
//! | `TAG` | `Space Events` |
//! | `ENTITY_NAME` | `spaceEvent` |
//!
//! Each can be overridden through `#[sea_orm_resource(...)]`:
//!
//! ```ignore
//! #[derive(Clone, Debug, DeriveEntityModel, SeaOrmResource)]
//! #[sea_orm(table_name = "mission")]
//! #[sea_orm_resource(url = "/v2/missions", tag = "Flight Plans")]
//! pub struct Model {
//!     #[sea_orm(primary_key)]
//!     pub id: i64,
//! }
//! ```

extern crate proc_macro;

use darling::FromDeriveInput;
use pluralizer::pluralize;
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Lit, Meta};

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(sea_orm_resource), forward_attrs(sea_orm))]
struct SeaOrmResourceInput {
    ident: syn::Ident,
    attrs: Vec<syn::Attribute>,
    #[darling(default)]
    collection: Option<String>,
    #[darling(default)]
    url: Option<String>,
    #[darling(default)]
    tag: Option<String>,
    #[darling(default)]
    entity_name: Option<String>,
}

#[proc_macro_derive(SeaOrmResource, attributes(sea_orm_resource))]
pub fn sea_orm_resource_derive(input: TokenStream) -> TokenStream {
    let ast: DeriveInput = parse_macro_input!(input as DeriveInput);
    let receiver = match SeaOrmResourceInput::from_derive_input(&ast) {
        Ok(receiver) => receiver,
        Err(err) => return TokenStream::from(err.write_errors()),
    };

    match impl_sea_orm_resource(receiver) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn capitalize_first_letter(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `space_event` -> `["space", "events"]`
fn plural_words(table_name: &str) -> Vec<String> {
    let mut words: Vec<String> = table_name
        .split('_')
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect();
    if let Some(last) = words.last_mut() {
        *last = pluralize(last, 2, false);
    }
    words
}

fn camel_case(table_name: &str) -> String {
    table_name
        .split('_')
        .filter(|w| !w.is_empty())
        .enumerate()
        .map(|(i, w)| {
            if i == 0 {
                w.to_lowercase()
            } else {
                capitalize_first_letter(&w.to_lowercase())
            }
        })
        .collect()
}

fn extract_table_name(attrs: &[syn::Attribute]) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("sea_orm") {
            continue;
        }
        if let Meta::List(meta_list) = &attr.meta {
            let mut table_name = None;
            let _ = meta_list.parse_nested_meta(|meta| {
                if meta.path.is_ident("table_name") {
                    let lit: Lit = meta.value()?.parse()?;
                    if let Lit::Str(lit_str) = lit {
                        table_name = Some(lit_str.value());
                    }
                } else if meta.input.peek(syn::Token![=]) {
                    let _: Lit = meta.value()?.parse()?;
                }
                Ok(())
            });
            if table_name.is_some() {
                return table_name;
            }
        }
    }
    None
}

fn impl_sea_orm_resource(receiver: SeaOrmResourceInput) -> syn::Result<proc_macro2::TokenStream> {
    let ident = &receiver.ident;

    let table_name = extract_table_name(&receiver.attrs).ok_or_else(|| {
        syn::Error::new_spanned(
            ident,
            "SeaOrmResource requires #[sea_orm(table_name = \"...\")] attribute",
        )
    })?;

    let plural = plural_words(&table_name);

    let collection = receiver.collection.unwrap_or_else(|| table_name.clone());
    let url = receiver
        .url
        .unwrap_or_else(|| format!("/{}", plural.join("-")));
    let tag = receiver.tag.unwrap_or_else(|| {
        plural
            .iter()
            .map(|w| capitalize_first_letter(w))
            .collect::<Vec<_>>()
            .join(" ")
    });
    let entity_name = receiver
        .entity_name
        .unwrap_or_else(|| camel_case(&table_name));
    let url_with_id = format!("{}/{{id}}", url);

    Ok(quote! {
        impl core_proc_macros::ApiResource for #ident {
            const URL: &'static str = #url;
            const URL_WITH_ID: &'static str = #url_with_id;
            const COLLECTION: &'static str = #collection;
            const TAG: &'static str = #tag;
            const ENTITY_NAME: &'static str = #entity_name;
        }
    })
}
