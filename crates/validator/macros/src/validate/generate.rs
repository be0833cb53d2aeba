//! Code generation for the Validate derive
//!
//! Each annotated field becomes one `.field(..)` call on a schema builder,
//! followed by its `.constraint(..)` calls in attachment order. The schema is
//! built once, on first use, inside a `LazyLock` static.

use std::collections::HashMap;

use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::ext::IdentExt;
use syn::{DeriveInput, Ident};

use super::parse::FieldAttrs;
use crate::shared::validation;

/// Generate the `Validate` implementation for a struct.
///
/// # Errors
///
/// Returns an error if:
/// - Input is not a non-generic struct with named fields
/// - A `#[validate(...)]` attribute is malformed
/// - A field carries the same constraint kind twice
/// - Two fields are reported under the same name
pub(super) fn generate_validate(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let fields = validation::require_named_struct(input)?;
    validation::require_no_generics(input)?;

    let mut names = HashMap::new();
    let mut declarations = Vec::new();

    for field in &fields.named {
        let attrs = FieldAttrs::from_attributes(&field.attrs)?;
        if attrs.attachments.is_empty() {
            continue;
        }
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };

        let (error_name, name_span) = match &attrs.rename {
            Some(rename) => (rename.value(), rename.span()),
            None => (ident.unraw().to_string(), ident.span()),
        };
        if names.insert(error_name.clone(), name_span).is_some() {
            return Err(syn::Error::new(
                name_span,
                format!("field `{error_name}` is declared more than once"),
            ));
        }

        check_duplicate_kinds(&error_name, &attrs)?;
        declarations.push(generate_field(name, ident, &error_name, &attrs));
    }

    Ok(quote! {
        #[automatically_derived]
        impl ::sift_validator::engine::Validate for #name {
            fn schema() -> &'static ::sift_validator::engine::Schema<Self> {
                static SCHEMA: ::std::sync::LazyLock<::sift_validator::engine::Schema<#name>> =
                    ::std::sync::LazyLock::new(|| {
                        ::sift_validator::engine::Schema::builder()
                            #(#declarations)*
                            .build()
                            .unwrap_or_else(|error| {
                                ::std::panic!(
                                    "invalid constraints on `{}`: {}",
                                    ::std::stringify!(#name),
                                    error
                                )
                            })
                    });
                &SCHEMA
            }
        }
    })
}

/// Rejects a kind attached twice to one field, pointing at the second one.
fn check_duplicate_kinds(field: &str, attrs: &FieldAttrs) -> syn::Result<()> {
    let mut seen: HashMap<String, Span> = HashMap::new();

    for attachment in &attrs.attachments {
        let Some(kind) = attachment.item.kind() else {
            continue;
        };
        if seen.insert(kind.clone(), attachment.span).is_some() {
            return Err(syn::Error::new(
                attachment.span,
                format!("constraint `{kind}` is attached more than once to field `{field}`"),
            ));
        }
    }
    Ok(())
}

/// Generate the `.field(..)` call and constraints for one field.
fn generate_field(
    struct_name: &Ident,
    ident: &Ident,
    error_name: &str,
    attrs: &FieldAttrs,
) -> TokenStream {
    let constraints = attrs.attachments.iter().map(|attachment| {
        let constructor = attachment.constructor();
        quote_spanned!(attachment.span=> .constraint(#constructor))
    });

    quote! {
        .field(#error_name, |record: &#struct_name| &record.#ident)
        #(#constraints)*
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand(input: DeriveInput) -> syn::Result<String> {
        generate_validate(&input).map(|tokens| tokens.to_string())
    }

    #[test]
    fn test_generates_one_declaration_per_annotated_field() {
        let output = expand(parse_quote! {
            struct User {
                #[validate(not_empty, alphabetic)]
                name: String,
                internal: u64,
                #[validate(ge = 0)]
                age: i32,
            }
        })
        .unwrap();

        assert!(output.contains("impl :: sift_validator :: engine :: Validate for User"));
        assert!(output.contains("LazyLock"));
        assert!(output.contains(". field (\"name\""));
        assert!(output.contains(". field (\"age\""));
        assert!(!output.contains("internal"));
        assert!(output.contains("greater_than_or_equal (0)"));

        let name_at = output.find("\"name\"").unwrap();
        let age_at = output.find("\"age\"").unwrap();
        assert!(name_at < age_at);
    }

    #[test]
    fn test_rename_and_raw_identifiers() {
        let output = expand(parse_quote! {
            struct Item {
                #[validate(rename = "itemType", not_empty)]
                kind: String,
                #[validate(not_empty)]
                r#type: String,
            }
        })
        .unwrap();
        assert!(output.contains("\"itemType\""));
        assert!(output.contains("\"type\""));
    }

    #[test]
    fn test_duplicate_kind_is_a_compile_error() {
        let error = expand(parse_quote! {
            struct User {
                #[validate(not_empty, min_length = 3)]
                name: String,
            }
        })
        .unwrap_err();
        assert_eq!(
            error.to_string(),
            "constraint `min_length` is attached more than once to field `name`"
        );
    }

    #[test]
    fn test_duplicate_kind_across_attributes() {
        let error = expand(parse_quote! {
            struct Account {
                #[validate(positive)]
                #[validate(gt = 10)]
                balance: i64,
            }
        })
        .unwrap_err();
        assert!(error.to_string().contains("`greater_than`"));
    }

    #[test]
    fn test_negated_kind_is_distinct() {
        assert!(
            expand(parse_quote! {
                struct User {
                    #[validate(min_length = 1, not(min_length = 10))]
                    name: String,
                }
            })
            .is_ok()
        );
    }

    #[test]
    fn test_duplicate_error_name() {
        let error = expand(parse_quote! {
            struct User {
                #[validate(not_empty)]
                name: String,
                #[validate(rename = "name", not_empty)]
                nickname: String,
            }
        })
        .unwrap_err();
        assert_eq!(error.to_string(), "field `name` is declared more than once");
    }

    #[test]
    fn test_custom_constraints_are_left_to_the_schema() {
        let output = expand(parse_quote! {
            struct User {
                #[validate(constraint = "even()", constraint = "even()")]
                id: u32,
            }
        })
        .unwrap();
        assert_eq!(output.matches(". constraint (even ())").count(), 2);
    }

    #[test]
    fn test_rejects_generic_structs() {
        let error = expand(parse_quote! {
            struct Holder<T> {
                #[validate(not_null)]
                value: Option<T>,
            }
        })
        .unwrap_err();
        assert!(error.to_string().contains("generic types"));
    }

    #[test]
    fn test_struct_without_annotations() {
        let output = expand(parse_quote! {
            struct Plain { value: u8 }
        })
        .unwrap();
        assert!(!output.contains(". field"));
        assert!(output.contains(". build ()"));
    }
}
