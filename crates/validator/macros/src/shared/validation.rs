//! Input validation for derive macros

use syn::{Data, DeriveInput, Fields, FieldsNamed};

// ============================================================================
// STRUCT VALIDATION
// ============================================================================

/// Validate that input is a struct with named fields.
///
/// # Errors
///
/// Returns an error naming the problem if the input is an enum, a union, a
/// tuple struct or a unit struct.
pub(crate) fn require_named_struct(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(fields),
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                &input.ident,
                "`Validate` requires named fields.\n\
                 \n\
                 Tuple structs are not supported: errors are reported by field name.",
            )),
            Fields::Unit => Err(syn::Error::new_spanned(
                &input.ident,
                "`Validate` cannot be applied to unit structs: there are no fields to check.",
            )),
        },
        Data::Enum(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "`Validate` can only be applied to structs.\n\
             \n\
             For enums, implement `Validate` by hand with a `Schema`.",
        )),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "`Validate` cannot be applied to unions.",
        )),
    }
}

/// Validate that input has no generic parameters.
///
/// The schema lives in a `static`, and statics cannot be generic.
///
/// # Errors
///
/// Returns an error spanned at the generic parameters.
pub(crate) fn require_no_generics(input: &DeriveInput) -> syn::Result<()> {
    if input.generics.params.is_empty() {
        Ok(())
    } else {
        Err(syn::Error::new_spanned(
            &input.generics,
            "`Validate` cannot be derived for generic types.\n\
             \n\
             Implement `Validate` by hand and build one `Schema` per instantiation.",
        ))
    }
}
