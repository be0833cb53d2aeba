//! Presence constraints
//!
//! [`NotNull`] is the only kind that distinguishes an absent value from an
//! empty one. Every other kind treats `None` like an empty value.
//!
//! # Examples
//!
//! ```rust
//! use sift_validator::prelude::*;
//!
//! assert!(not_null().check(&Some("")));
//! assert!(!not_null().check(&None::<String>));
//! ```

use std::borrow::Cow;

use crate::foundation::{Constraint, ConstraintKind};

/// Requires a value to be present: `Some(_)` or a non-null pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NotNull;

impl ConstraintKind for NotNull {
    fn error_message(&self) -> Cow<'static, str> {
        Cow::Borrowed("must not be null")
    }
}

impl<T> Constraint<Option<T>> for NotNull {
    #[inline]
    fn check(&self, value: &Option<T>) -> bool {
        value.is_some()
    }
}

impl<T: ?Sized> Constraint<*const T> for NotNull {
    #[inline]
    fn check(&self, value: &*const T) -> bool {
        !value.is_null()
    }
}

impl<T: ?Sized> Constraint<*mut T> for NotNull {
    #[inline]
    fn check(&self, value: &*mut T) -> bool {
        !value.is_null()
    }
}

/// Creates a [`NotNull`] constraint.
#[must_use]
pub const fn not_null() -> NotNull {
    NotNull
}
