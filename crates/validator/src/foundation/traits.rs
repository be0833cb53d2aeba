//! Core traits for the constraint system
//!
//! A constraint kind is split across two traits:
//!
//! - [`ConstraintKind`] is the tag. It carries everything that does not depend
//!   on the inspected value: the error message and the kind's identity.
//! - [`Constraint<T>`] adds the value-dependent `check`. A kind implements it
//!   once per value type (or once for a whole family of types through a
//!   capability bound such as [`Measure`](crate::foundation::Measure)).
//!
//! Anything implementing both can be attached to a field, negated with
//! [`not`](crate::combinators::not) and mixed freely with the built-in kinds.

use std::borrow::Cow;

use crate::combinators::not::Not;

// ============================================================================
// CONSTRAINT KIND (TAG)
// ============================================================================

/// Marks a type as a constraint kind.
///
/// Implementors are immutable value types. The message must be non-empty
/// plain English and may be computed from the kind's parameters.
///
/// # Examples
///
/// ```rust
/// use std::borrow::Cow;
/// use sift_validator::foundation::{Constraint, ConstraintKind};
///
/// #[derive(Debug, Clone, Copy)]
/// struct Even;
///
/// impl ConstraintKind for Even {
///     fn error_message(&self) -> Cow<'static, str> {
///         Cow::Borrowed("must be even")
///     }
/// }
///
/// impl Constraint<u32> for Even {
///     fn check(&self, value: &u32) -> bool {
///         value % 2 == 0
///     }
/// }
///
/// assert!(Even.check(&4));
/// assert!(!Even.check(&3));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a constraint kind",
    label = "this value does not implement `ConstraintKind`",
    note = "implement `ConstraintKind` (error message) and `Constraint<T>` (check) to attach it to a field"
)]
pub trait ConstraintKind {
    /// Fixed, human-readable description of what the constraint requires.
    fn error_message(&self) -> Cow<'static, str>;

    /// Name of the kind, used in diagnostics and schema introspection.
    ///
    /// The default is [`std::any::type_name`], which is not guaranteed to be
    /// unique. Schemas detect repeated kinds by type, never by this name.
    fn kind_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

// ============================================================================
// CONSTRAINT
// ============================================================================

/// A constraint kind that can inspect values of type `T`.
///
/// `check` is pure and total: it returns a boolean for every value of its
/// domain and never panics. Absent values (`None`, empty sequences) are
/// part of the domain.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot constrain values of type `{T}`",
    label = "constraint attached to a field of type `{T}`",
    note = "a constraint kind must implement `Constraint<{T}>` to be attached to this field"
)]
pub trait Constraint<T: ?Sized>: ConstraintKind {
    /// Returns `true` when `value` satisfies the constraint.
    fn check(&self, value: &T) -> bool;
}

impl<C: ConstraintKind + ?Sized> ConstraintKind for &C {
    fn error_message(&self) -> Cow<'static, str> {
        (**self).error_message()
    }

    fn kind_name(&self) -> &'static str {
        (**self).kind_name()
    }
}

impl<T: ?Sized, C: Constraint<T> + ?Sized> Constraint<T> for &C {
    fn check(&self, value: &T) -> bool {
        (**self).check(value)
    }
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Combinator methods available on every constraint kind.
pub trait ConstraintExt: ConstraintKind + Sized {
    /// Inverts the constraint.
    ///
    /// ```rust
    /// use sift_validator::prelude::*;
    ///
    /// let no_digits = digits().not();
    /// assert!(no_digits.check("abc"));
    /// assert!(!no_digits.check("123"));
    /// ```
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<C: ConstraintKind> ConstraintExt for C {}

// ============================================================================
// DIAGNOSTICS
// ============================================================================

/// Strips module paths from a kind name.
///
/// `sift_validator::combinators::not::Not<sift_validator::constraints::length::MinLength>`
/// becomes `Not<MinLength>`.
pub fn kind_label(kind_name: &str) -> String {
    let mut label = String::with_capacity(kind_name.len());
    let mut chars = kind_name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            let keep = label
                .rfind(|ch: char| !(ch.is_alphanumeric() || ch == '_'))
                .map_or(0, |i| i + 1);
            label.truncate(keep);
        } else {
            label.push(c);
        }
    }
    label
}
