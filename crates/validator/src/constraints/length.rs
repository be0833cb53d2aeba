//! Length constraints
//!
//! These kinds work over anything implementing [`Measure`]: text, slices,
//! vectors, maps, sets and `Option`s of those. Text is measured in Unicode
//! scalar values by default. Use the `.bytes()` constructors for byte-length
//! counting when the input is known to be ASCII.

use crate::foundation::{LengthMode, Measure};

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::constraint! {
    /// Requires a length of at least `min`.
    #[derive(PartialEq, Eq, Hash)]
    pub MinLength { min: usize, mode: LengthMode } for impl Measure;
    check(self, value) { value.measure(self.mode) >= self.min }
    message(self) { format!("length must be >= {}", self.min) }
    new(min: usize) { Self { min, mode: LengthMode::Chars } }
    fn min_length(min: usize);
}

impl MinLength {
    /// Creates a minimum length constraint that counts bytes.
    #[must_use]
    pub const fn bytes(min: usize) -> Self {
        Self {
            min,
            mode: LengthMode::Bytes,
        }
    }
}

/// A value that must not be empty: a [`MinLength`] of 1.
pub const NOT_EMPTY: MinLength = MinLength::new(1);

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::constraint! {
    /// Requires a length of at most `max`.
    #[derive(PartialEq, Eq, Hash)]
    pub MaxLength { max: usize, mode: LengthMode } for impl Measure;
    check(self, value) { value.measure(self.mode) <= self.max }
    message(self) { format!("length must be <= {}", self.max) }
    new(max: usize) { Self { max, mode: LengthMode::Chars } }
    fn max_length(max: usize);
}

impl MaxLength {
    /// Creates a maximum length constraint that counts bytes.
    #[must_use]
    pub const fn bytes(max: usize) -> Self {
        Self {
            max,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// EXACT LENGTH
// ============================================================================

crate::constraint! {
    /// Requires a length of exactly `length`.
    #[derive(PartialEq, Eq, Hash)]
    pub ExactLength { length: usize, mode: LengthMode } for impl Measure;
    check(self, value) { value.measure(self.mode) == self.length }
    message(self) { format!("length must be == {}", self.length) }
    new(length: usize) { Self { length, mode: LengthMode::Chars } }
    fn exact_length(length: usize);
}

impl ExactLength {
    /// Creates an exact length constraint that counts bytes.
    #[must_use]
    pub const fn bytes(length: usize) -> Self {
        Self {
            length,
            mode: LengthMode::Bytes,
        }
    }
}
