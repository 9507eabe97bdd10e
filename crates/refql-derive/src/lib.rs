//! Derive macro for refql entity definitions.
//!
//! This crate provides the `#[derive(Entity)]` macro for declaring the
//! schema types whose fields the statement builders reference.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Expr, Fields, Ident, Lit, Meta, parse_macro_input};

/// Derives the `Entity` trait for a struct, generating typed field
/// accessors.
///
/// # Attributes
///
/// - `#[entity(name = "EntityName")]` - Specifies the name rendered into
///   statements (optional, defaults to the struct identifier verbatim)
///
/// # Field Attributes
///
/// - `#[field(name = "field_name")]` - Specifies the name rendered for
///   this field (optional, defaults to the Rust field name)
///
/// # Generated Items
///
/// For a struct `Person`, this macro generates:
///
/// - `impl Entity for Person` with `NAME` and `FIELDS`
/// - One associated function per field returning a typed `FieldRef`,
///   e.g. `Person::name() -> FieldRef<String>`
#[proc_macro_derive(Entity, attributes(entity, field))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_entity_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn derive_entity_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let entity_name = get_entity_name(&input.attrs, struct_name)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Entity derive only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Entity derive only supports structs",
            ));
        }
    };

    let mut field_names: Vec<String> = Vec::new();
    let mut accessors: Vec<TokenStream2> = Vec::new();
    for field in fields {
        let field_ident = field.ident.as_ref().unwrap();
        let field_type = &field.ty;
        let rendered_name =
            get_field_name(&field.attrs)?.unwrap_or_else(|| field_ident.to_string());

        field_names.push(rendered_name.clone());
        accessors.push(quote! {
            /// Returns the typed reference to this field.
            #[inline]
            #[must_use]
            pub fn #field_ident() -> ::refql_core::builder::FieldRef<#field_type> {
                ::refql_core::builder::field::<Self, #field_type>(#rendered_name)
            }
        });
    }

    let expanded = quote! {
        impl ::refql_core::schema::Entity for #struct_name {
            const NAME: &'static str = #entity_name;
            const FIELDS: &'static [&'static str] = &[#(#field_names),*];
        }

        impl #struct_name {
            #(#accessors)*
        }
    };

    Ok(expanded)
}

fn get_entity_name(attrs: &[Attribute], struct_name: &Ident) -> syn::Result<String> {
    for attr in attrs {
        if attr.path().is_ident("entity") {
            let mut entity_name = None;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let value: Expr = meta.value()?.parse()?;
                    if let Expr::Lit(lit) = value {
                        if let Lit::Str(s) = lit.lit {
                            entity_name = Some(s.value());
                        }
                    }
                }
                Ok(())
            })?;
            if let Some(name) = entity_name {
                return Ok(name);
            }
        }
    }
    // Entity names render as the identifier verbatim, not snake_case.
    Ok(struct_name.to_string())
}

fn get_field_name(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    for attr in attrs {
        if attr.path().is_ident("field") {
            // Handle empty attribute like #[field]
            if matches!(attr.meta, Meta::Path(_)) {
                continue;
            }

            let mut field_name = None;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let value: Expr = meta.value()?.parse()?;
                    if let Expr::Lit(lit) = value {
                        if let Lit::Str(s) = lit.lit {
                            field_name = Some(s.value());
                        }
                    }
                }
                Ok(())
            })?;
            if let Some(name) = field_name {
                return Ok(Some(name));
            }
        }
    }

    Ok(None)
}
