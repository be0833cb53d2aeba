//! Derive macro for `sift-validator`
//!
//! - **`#[derive(Validate)]`** - builds a record type's schema from
//!   `#[validate(...)]` field attributes
//!
//! Use it through `sift_validator`, which re-exports it next to the trait of
//! the same name.
//!
//! # Architecture
//!
//! - `validate/` - attribute parsing and code generation
//! - `shared/` - input checks reusable by future derives

use proc_macro::TokenStream;

mod shared;
mod validate;

// ============================================================================
// VALIDATE DERIVE
// ============================================================================

/// Derives `sift_validator::engine::Validate` for a struct with named fields.
///
/// Every field carrying `#[validate(...)]` is checked in declaration order;
/// its items are checked in the order written.
///
/// # Attributes
///
/// ## Length
///
/// - `min_length = N`, `max_length = N`, `exact_length = N`
/// - `not_empty` - same kind as `min_length`, with `N = 1`
///
/// ## Text
///
/// - `utf8`, `alphabetic`, `uppercase`, `lowercase`, `alphanumeric`, `digits`
///
/// ## Numeric
///
/// - `gt = X`, `ge = X`, `lt = X`, `le = X`
/// - `positive`, `non_negative`, `negative`, `non_positive` - same kinds as
///   `gt`, `ge`, `lt`, `le` against zero
/// - `non_zero`, `not_nan`
///
/// ## Presence
///
/// - `not_null`
///
/// ## Composition
///
/// - `not(<item>)` - negates exactly one item. `None` and empty text
///   satisfy every character class, so `not(digits)` rejects both
/// - `constraint = "<expr>"` - any expression implementing
///   `Constraint<FieldType>`, such as a third-party kind
///
/// ## Meta
///
/// - `rename = "name"` - the field name used in errors
///
/// # Examples
///
/// ```rust,ignore
/// use sift_validator::prelude::*;
///
/// #[derive(Validate)]
/// struct Signup {
///     #[validate(min_length = 3, max_length = 20, alphanumeric)]
///     username: String,
///
///     #[validate(rename = "yearsOld", ge = 18)]
///     age: u8,
///
///     #[validate(not_empty, not(digits))]
///     display_name: String,
/// }
/// ```
///
/// # Definition errors
///
/// Attaching one kind twice to a field is a compile error naming the field
/// and the kind. Duplicates hidden behind `constraint = "..."` are caught
/// when the schema is first built, which panics before any record is
/// checked.
#[proc_macro_derive(Validate, attributes(validate))]
pub fn derive_validate(input: TokenStream) -> TokenStream {
    validate::derive_validate_impl(input)
}
