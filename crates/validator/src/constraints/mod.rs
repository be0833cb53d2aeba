//! Built-in constraint kinds
//!
//! Every kind is a small `Copy` value with a factory function. Convenience
//! instances such as [`NOT_EMPTY`] or [`positive`] are ordinary values of the
//! primitive kinds, so a field cannot carry both `NOT_EMPTY` and
//! `min_length(3)`.

mod length;
mod nullable;
mod numeric;
mod text;

pub use length::{ExactLength, MaxLength, MinLength, NOT_EMPTY, exact_length, max_length, min_length};
pub use nullable::{NotNull, not_null};
pub use numeric::{
    GreaterThan, GreaterThanOrEqual, LessThan, LessThanOrEqual, NonZero, NotNan, greater_than,
    greater_than_or_equal, less_than, less_than_or_equal, negative, non_negative, non_positive,
    non_zero, not_nan, positive,
};
pub use text::{
    Alphabetic, Alphanumeric, Digits, Lowercase, Uppercase, ValidUtf8, alphabetic, alphanumeric,
    digits, lowercase, uppercase, utf8,
};
