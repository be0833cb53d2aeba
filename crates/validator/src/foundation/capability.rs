//! Value capabilities that let one constraint kind span many value types.
//!
//! A length constraint does not care whether it sees a `String`, a `Vec<u8>`
//! or an `Option<&str>`; it only needs *a length*. These traits describe such
//! capabilities so each kind is written once, generically.
//!
//! Every capability is total: absent values (`None`) behave like empty ones.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

// ============================================================================
// LENGTH
// ============================================================================

/// How to count the length of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values (correct for all text).
    #[default]
    Chars,
}

/// Anything exposing a length.
///
/// Text honours [`LengthMode`]; every other sequence counts elements and
/// ignores the mode.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no length",
    label = "length constraints need text or a collection"
)]
pub trait Measure {
    /// Returns the length of the value.
    fn measure(&self, mode: LengthMode) -> usize;
}

impl Measure for str {
    #[inline]
    fn measure(&self, mode: LengthMode) -> usize {
        match mode {
            LengthMode::Bytes => self.len(),
            LengthMode::Chars => self.chars().count(),
        }
    }
}

impl Measure for String {
    #[inline]
    fn measure(&self, mode: LengthMode) -> usize {
        self.as_str().measure(mode)
    }
}

impl Measure for Cow<'_, str> {
    #[inline]
    fn measure(&self, mode: LengthMode) -> usize {
        (**self).measure(mode)
    }
}

impl<T> Measure for [T] {
    #[inline]
    fn measure(&self, _mode: LengthMode) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Measure for [T; N] {
    #[inline]
    fn measure(&self, _mode: LengthMode) -> usize {
        N
    }
}

macro_rules! measure_by_len {
    ($($ty:ident<$($gen:ident),+>),+ $(,)?) => {
        $(
            impl<$($gen),+> Measure for $ty<$($gen),+> {
                #[inline]
                fn measure(&self, _mode: LengthMode) -> usize {
                    self.len()
                }
            }
        )+
    };
}

measure_by_len!(
    Vec<T>,
    VecDeque<T>,
    HashSet<T, S>,
    BTreeSet<T>,
    HashMap<K, V, S>,
    BTreeMap<K, V>,
);

impl<M: Measure> Measure for Option<M> {
    #[inline]
    fn measure(&self, mode: LengthMode) -> usize {
        self.as_ref().map_or(0, |value| value.measure(mode))
    }
}

impl<M: Measure + ?Sized> Measure for &M {
    #[inline]
    fn measure(&self, mode: LengthMode) -> usize {
        (**self).measure(mode)
    }
}

impl<M: Measure + ?Sized> Measure for Box<M> {
    #[inline]
    fn measure(&self, mode: LengthMode) -> usize {
        (**self).measure(mode)
    }
}

// ============================================================================
// CHARACTERS
// ============================================================================

/// A single character or a sequence of characters.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a sequence of characters",
    label = "character classes need text or `char` values"
)]
pub trait CharSequence {
    /// Returns `true` when every character satisfies `predicate`.
    ///
    /// The empty sequence satisfies every predicate.
    fn all_chars<P: Fn(char) -> bool>(&self, predicate: P) -> bool;
}

impl CharSequence for char {
    #[inline]
    fn all_chars<P: Fn(char) -> bool>(&self, predicate: P) -> bool {
        predicate(*self)
    }
}

impl CharSequence for str {
    #[inline]
    fn all_chars<P: Fn(char) -> bool>(&self, predicate: P) -> bool {
        self.chars().all(predicate)
    }
}

impl CharSequence for String {
    #[inline]
    fn all_chars<P: Fn(char) -> bool>(&self, predicate: P) -> bool {
        self.as_str().all_chars(predicate)
    }
}

impl CharSequence for Cow<'_, str> {
    #[inline]
    fn all_chars<P: Fn(char) -> bool>(&self, predicate: P) -> bool {
        (**self).all_chars(predicate)
    }
}

impl CharSequence for [char] {
    #[inline]
    fn all_chars<P: Fn(char) -> bool>(&self, predicate: P) -> bool {
        self.iter().copied().all(predicate)
    }
}

impl<const N: usize> CharSequence for [char; N] {
    #[inline]
    fn all_chars<P: Fn(char) -> bool>(&self, predicate: P) -> bool {
        self.as_slice().all_chars(predicate)
    }
}

impl CharSequence for Vec<char> {
    #[inline]
    fn all_chars<P: Fn(char) -> bool>(&self, predicate: P) -> bool {
        self.as_slice().all_chars(predicate)
    }
}

impl<S: CharSequence> CharSequence for Option<S> {
    #[inline]
    fn all_chars<P: Fn(char) -> bool>(&self, predicate: P) -> bool {
        self.as_ref().is_none_or(|value| value.all_chars(predicate))
    }
}

impl<S: CharSequence + ?Sized> CharSequence for &S {
    #[inline]
    fn all_chars<P: Fn(char) -> bool>(&self, predicate: P) -> bool {
        (**self).all_chars(predicate)
    }
}

impl<S: CharSequence + ?Sized> CharSequence for Box<S> {
    #[inline]
    fn all_chars<P: Fn(char) -> bool>(&self, predicate: P) -> bool {
        (**self).all_chars(predicate)
    }
}

// ============================================================================
// UTF-8
// ============================================================================

/// Byte or text storage whose UTF-8 well-formedness can be checked.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not byte or text storage",
    label = "`utf8` needs bytes or text"
)]
pub trait Utf8Source {
    /// Returns `true` when the contents are well-formed UTF-8.
    fn is_utf8(&self) -> bool;
}

impl Utf8Source for [u8] {
    #[inline]
    fn is_utf8(&self) -> bool {
        std::str::from_utf8(self).is_ok()
    }
}

impl<const N: usize> Utf8Source for [u8; N] {
    #[inline]
    fn is_utf8(&self) -> bool {
        self.as_slice().is_utf8()
    }
}

impl Utf8Source for Vec<u8> {
    #[inline]
    fn is_utf8(&self) -> bool {
        self.as_slice().is_utf8()
    }
}

impl Utf8Source for Cow<'_, [u8]> {
    #[inline]
    fn is_utf8(&self) -> bool {
        (**self).is_utf8()
    }
}

// `str` and `String` are UTF-8 by construction.
impl Utf8Source for str {
    #[inline]
    fn is_utf8(&self) -> bool {
        true
    }
}

impl Utf8Source for String {
    #[inline]
    fn is_utf8(&self) -> bool {
        true
    }
}

impl<U: Utf8Source> Utf8Source for Option<U> {
    #[inline]
    fn is_utf8(&self) -> bool {
        self.as_ref().is_none_or(Utf8Source::is_utf8)
    }
}

impl<U: Utf8Source + ?Sized> Utf8Source for &U {
    #[inline]
    fn is_utf8(&self) -> bool {
        (**self).is_utf8()
    }
}

impl<U: Utf8Source + ?Sized> Utf8Source for Box<U> {
    #[inline]
    fn is_utf8(&self) -> bool {
        (**self).is_utf8()
    }
}

// ============================================================================
// NUMBERS
// ============================================================================

/// Numeric types with an additive identity.
pub trait Zero {
    /// The zero value of the type.
    const ZERO: Self;
}

macro_rules! impl_zero {
    ($zero:literal => $($ty:ty),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = $zero;
            }
        )+
    };
}

impl_zero!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_zero!(0.0 => f32, f64);

/// Floating-point types that can hold NaN.
pub trait NanCheck {
    /// Returns `true` when the value is NaN.
    fn is_nan_value(&self) -> bool;
}

impl NanCheck for f32 {
    #[inline]
    fn is_nan_value(&self) -> bool {
        self.is_nan()
    }
}

impl NanCheck for f64 {
    #[inline]
    fn is_nan_value(&self) -> bool {
        self.is_nan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_length_modes() {
        assert_eq!("h\u{e9}llo".measure(LengthMode::Chars), 5);
        assert_eq!("h\u{e9}llo".measure(LengthMode::Bytes), 6);
        assert_eq!(String::new().measure(LengthMode::Chars), 0);
    }

    #[test]
    fn test_sequence_length_ignores_mode() {
        let items = vec![1, 2, 3];
        assert_eq!(items.measure(LengthMode::Chars), 3);
        assert_eq!(items.measure(LengthMode::Bytes), 3);
        assert_eq!([0u8; 4].measure(LengthMode::Chars), 4);
    }

    #[test]
    fn test_absent_values_have_zero_length() {
        let missing: Option<String> = None;
        assert_eq!(missing.measure(LengthMode::Chars), 0);
        assert_eq!(Some("abc").measure(LengthMode::Chars), 3);
    }

    #[test]
    fn test_char_sequences() {
        assert!('a'.all_chars(char::is_alphabetic));
        assert!("abc".all_chars(char::is_alphabetic));
        assert!(!"ab1".all_chars(char::is_alphabetic));
        assert!(vec!['x', 'y'].all_chars(char::is_lowercase));
        assert!("".all_chars(|_| false));
        assert!(None::<String>.all_chars(|_| false));
    }

    #[test]
    fn test_utf8_sources() {
        assert!(b"plain".is_utf8());
        assert!(vec![0xe2_u8, 0x82, 0xac].is_utf8());
        assert!(!vec![0xff_u8, 0xfe].is_utf8());
        assert!("text".is_utf8());
        assert!(None::<Vec<u8>>.is_utf8());
    }

    #[test]
    fn test_zero_and_nan() {
        assert_eq!(i64::ZERO, 0);
        assert_eq!(f64::ZERO, 0.0);
        assert!(f32::NAN.is_nan_value());
        assert!(!1.5_f64.is_nan_value());
    }
}
