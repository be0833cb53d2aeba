//! Numeric constraints
//!
//! Comparisons against a threshold work over any `PartialOrd + Display` type,
//! so one kind serves every integer width and both float widths. The value
//! type is the threshold type: `greater_than(0_i64)` constrains `i64` fields.
//!
//! NaN compares false against everything, so a NaN value fails every
//! comparison kind. Pair floats with [`not_nan`] to report it explicitly.

use std::borrow::Cow;
use std::fmt::Display;

use crate::foundation::{Constraint, ConstraintKind, NanCheck, Zero};

// ============================================================================
// COMPARISONS
// ============================================================================

crate::constraint! {
    /// Requires a value strictly greater than `bound`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift_validator::prelude::*;
    ///
    /// let kind = greater_than(5);
    /// assert!(kind.check(&6));
    /// assert!(!kind.check(&5)); // Not strictly greater
    /// ```
    #[derive(PartialEq, Eq, Hash)]
    pub GreaterThan<N: PartialOrd + Display> { bound: N } for N;
    check(self, value) { *value > self.bound }
    message(self) { format!("must be > {}", self.bound) }
    fn greater_than(bound: N);
}

crate::constraint! {
    /// Requires a value greater than or equal to `bound`.
    #[derive(PartialEq, Eq, Hash)]
    pub GreaterThanOrEqual<N: PartialOrd + Display> { bound: N } for N;
    check(self, value) { *value >= self.bound }
    message(self) { format!("must be >= {}", self.bound) }
    fn greater_than_or_equal(bound: N);
}

crate::constraint! {
    /// Requires a value strictly less than `bound`.
    #[derive(PartialEq, Eq, Hash)]
    pub LessThan<N: PartialOrd + Display> { bound: N } for N;
    check(self, value) { *value < self.bound }
    message(self) { format!("must be < {}", self.bound) }
    fn less_than(bound: N);
}

crate::constraint! {
    /// Requires a value less than or equal to `bound`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift_validator::prelude::*;
    ///
    /// let kind = less_than_or_equal(1.5_f64);
    /// assert!(kind.check(&1.5));
    /// assert!(!kind.check(&f64::NAN));
    /// ```
    #[derive(PartialEq, Eq, Hash)]
    pub LessThanOrEqual<N: PartialOrd + Display> { bound: N } for N;
    check(self, value) { *value <= self.bound }
    message(self) { format!("must be <= {}", self.bound) }
    fn less_than_or_equal(bound: N);
}

// ============================================================================
// SIGN SHORTCUTS
// ============================================================================

/// `> 0`
#[must_use]
pub const fn positive<N: Zero>() -> GreaterThan<N> {
    GreaterThan::new(N::ZERO)
}

/// `>= 0`
#[must_use]
pub const fn non_negative<N: Zero>() -> GreaterThanOrEqual<N> {
    GreaterThanOrEqual::new(N::ZERO)
}

/// `< 0`
#[must_use]
pub const fn negative<N: Zero>() -> LessThan<N> {
    LessThan::new(N::ZERO)
}

/// `<= 0`
#[must_use]
pub const fn non_positive<N: Zero>() -> LessThanOrEqual<N> {
    LessThanOrEqual::new(N::ZERO)
}

// ============================================================================
// NON ZERO
// ============================================================================

/// Requires a value different from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NonZero;

impl ConstraintKind for NonZero {
    fn error_message(&self) -> Cow<'static, str> {
        Cow::Borrowed("must be != 0")
    }
}

impl<N: Zero + PartialEq> Constraint<N> for NonZero {
    #[inline]
    fn check(&self, value: &N) -> bool {
        *value != N::ZERO
    }
}

/// Creates a [`NonZero`] constraint.
#[must_use]
pub const fn non_zero() -> NonZero {
    NonZero
}

// ============================================================================
// NOT NAN
// ============================================================================

crate::constraint! {
    /// Requires a float that is not NaN. Infinities pass.
    pub NotNan for impl NanCheck;
    check(value) { !value.is_nan_value() }
    message { "must not be NaN" }
    fn not_nan();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparisons() {
        assert!(greater_than(10).check(&11));
        assert!(!greater_than(10).check(&10));
        assert!(greater_than_or_equal(10).check(&10));
        assert!(!greater_than_or_equal(10).check(&9));
        assert!(less_than(10_u8).check(&9));
        assert!(!less_than(10_u8).check(&10));
        assert!(less_than_or_equal(-3_i64).check(&-3));
        assert!(!less_than_or_equal(-3_i64).check(&-2));
    }

    #[test]
    fn test_messages_render_bound() {
        assert_eq!(greater_than(4).error_message(), "must be > 4");
        assert_eq!(greater_than_or_equal(0).error_message(), "must be >= 0");
        assert_eq!(less_than(2.5).error_message(), "must be < 2.5");
        assert_eq!(less_than_or_equal(100_u16).error_message(), "must be <= 100");
    }

    #[test]
    fn test_sign_shortcuts() {
        assert!(positive::<i32>().check(&1));
        assert!(!positive::<i32>().check(&0));
        assert!(non_negative::<i32>().check(&0));
        assert!(!non_negative::<i32>().check(&-1));
        assert!(negative::<f64>().check(&-0.5));
        assert!(non_positive::<i8>().check(&0));
        assert_eq!(non_negative::<i32>(), greater_than_or_equal(0));
        assert_eq!(non_negative::<i32>().error_message(), "must be >= 0");
    }

    #[test]
    fn test_non_zero() {
        assert!(non_zero().check(&7_u64));
        assert!(!non_zero().check(&0_u64));
        assert!(!non_zero().check(&0.0_f32));
        assert_eq!(non_zero().error_message(), "must be != 0");
    }

    #[test]
    fn test_not_nan() {
        assert!(not_nan().check(&1.0_f64));
        assert!(not_nan().check(&f32::INFINITY));
        assert!(!not_nan().check(&f64::NAN));
        assert_eq!(not_nan().error_message(), "must not be NaN");
    }

    #[test]
    fn test_nan_fails_comparisons() {
        assert!(!greater_than(0.0).check(&f64::NAN));
        assert!(!less_than(0.0).check(&f64::NAN));
    }
}
