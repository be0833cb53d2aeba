//! Core constraint types and traits
//!
//! This module contains the fundamental building blocks of the catalog:
//!
//! - **Traits**: [`ConstraintKind`], [`Constraint`], [`ConstraintExt`]
//! - **Capabilities**: [`Measure`], [`CharSequence`], [`Utf8Source`], [`Zero`], [`NanCheck`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`DefinitionError`]
//!
//! # Architecture
//!
//! ## 1. Type Safety
//!
//! A kind states which values it can inspect through `Constraint<T>` impls.
//! Attaching it to a field of any other type does not compile:
//!
//! ```rust,compile_fail
//! use sift_validator::prelude::*;
//!
//! // `MinLength` measures lengths; `u32` has none.
//! let _ = min_length(3).check(&7_u32);
//! ```
//!
//! ## 2. Composition
//!
//! Kinds compose through [`not`](crate::combinators::not), which only accepts
//! tagged kinds:
//!
//! ```rust,compile_fail
//! use sift_validator::prelude::*;
//!
//! struct Untagged;
//! let _ = not(Untagged);
//! ```
//!
//! ## 3. Generic Domains
//!
//! One kind covers a family of value types through capability traits:
//!
//! ```rust
//! use sift_validator::prelude::*;
//!
//! let kind = min_length(2);
//! assert!(kind.check("ab"));
//! assert!(kind.check(&vec![1, 2, 3]));
//! assert!(!kind.check(&None::<String>));
//! ```

mod capability;
mod error;
pub(crate) mod traits;

pub use capability::{CharSequence, LengthMode, Measure, NanCheck, Utf8Source, Zero};
pub use error::{DefinitionError, ValidationError, ValidationErrors};
pub use traits::{Constraint, ConstraintExt, ConstraintKind, kind_label};

/// Checks `value` against every constraint in `constraints`, in order,
/// returning the first one it fails.
///
/// # Examples
///
/// ```rust
/// use sift_validator::foundation::{first_failure, Constraint};
/// use sift_validator::prelude::*;
///
/// let rules: [&dyn Constraint<str>; 2] = [&min_length(2), &alphabetic()];
/// let failed = first_failure("a1", rules).map(|kind| kind.error_message());
/// assert_eq!(failed.as_deref(), Some("must be alphabetic"));
/// assert!(first_failure("ab", rules).is_none());
/// ```
pub fn first_failure<'c, T, I>(value: &T, constraints: I) -> Option<&'c dyn Constraint<T>>
where
    T: ?Sized + 'c,
    I: IntoIterator<Item = &'c dyn Constraint<T>>,
{
    constraints
        .into_iter()
        .find(|constraint| !constraint.check(value))
}
