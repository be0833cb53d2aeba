//! NOT combinator - logical negation of constraint kinds
//!
//! [`Not`] wraps another kind and inverts its `check`. It satisfies a value
//! exactly when the inner kind rejects it.
//!
//! # Examples
//!
//! ```rust
//! use sift_validator::prelude::*;
//!
//! // Forbid purely numeric identifiers
//! let kind = not(digits());
//! assert!(kind.check("user42"));
//! assert!(!kind.check("42"));
//! assert_eq!(kind.error_message(), "must not comply with: `must contain only digits`");
//! ```

use std::borrow::Cow;

use crate::foundation::{Constraint, ConstraintKind};

/// Inverts a constraint kind with logical NOT.
///
/// - If the inner kind accepts a value, `Not` rejects it
/// - If the inner kind rejects a value, `Not` accepts it
///
/// `Not<C>` can only be built around a [`ConstraintKind`], and it inspects
/// exactly the value types `C` inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Not<C> {
    inner: C,
}

impl<C: ConstraintKind> Not<C> {
    /// Creates a new `Not` combinator.
    #[must_use]
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C> Not<C> {
    /// Returns a reference to the inner kind.
    pub const fn inner(&self) -> &C {
        &self.inner
    }

    /// Extracts the inner kind.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: ConstraintKind> ConstraintKind for Not<C> {
    fn error_message(&self) -> Cow<'static, str> {
        Cow::Owned(format!(
            "must not comply with: `{}`",
            self.inner.error_message()
        ))
    }
}

impl<T: ?Sized, C: Constraint<T>> Constraint<T> for Not<C> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.inner.check(value)
    }
}

/// Creates a `Not` combinator from a constraint kind.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let kind = not(min_length(4));
/// assert!(kind.check("abc"));
/// assert!(!kind.check("abcd"));
/// ```
#[must_use]
pub const fn not<C: ConstraintKind>(kind: C) -> Not<C> {
    Not::new(kind)
}
