//! Text constraints
//!
//! UTF-8 well-formedness over byte storage, and character classes over single
//! characters and character sequences. A sequence belongs to a class when every
//! character does, so the empty sequence (and `None`) belongs to every class.

use crate::foundation::{CharSequence, Utf8Source};

// ============================================================================
// UTF-8
// ============================================================================

crate::constraint! {
    /// Requires well-formed UTF-8.
    ///
    /// `str` and `String` always pass; byte storage is decoded.
    pub ValidUtf8 for impl Utf8Source;
    check(value) { value.is_utf8() }
    message { "must be valid UTF-8" }
    fn utf8();
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

crate::constraint! {
    /// Requires alphabetic characters only (Unicode `Alphabetic`).
    pub Alphabetic for impl CharSequence;
    check(value) { value.all_chars(char::is_alphabetic) }
    message { "must be alphabetic" }
    fn alphabetic();
}

crate::constraint! {
    /// Requires uppercase characters only.
    pub Uppercase for impl CharSequence;
    check(value) { value.all_chars(char::is_uppercase) }
    message { "must be uppercase" }
    fn uppercase();
}

crate::constraint! {
    /// Requires lowercase characters only.
    pub Lowercase for impl CharSequence;
    check(value) { value.all_chars(char::is_lowercase) }
    message { "must be lowercase" }
    fn lowercase();
}

crate::constraint! {
    /// Requires alphabetic or numeric characters only.
    pub Alphanumeric for impl CharSequence;
    check(value) { value.all_chars(char::is_alphanumeric) }
    message { "must be alphanumeric" }
    fn alphanumeric();
}

crate::constraint! {
    /// Requires ASCII digits `0-9` only.
    pub Digits for impl CharSequence;
    check(value) { value.all_chars(|c| c.is_ascii_digit()) }
    message { "must contain only digits" }
    fn digits();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Constraint, ConstraintKind};

    #[test]
    fn test_utf8() {
        assert!(utf8().check(&vec![0x68_u8, 0x69]));
        assert!(!utf8().check(&vec![0xc3_u8, 0x28]));
        assert!(utf8().check("already text"));
        assert!(utf8().check(&None::<Vec<u8>>));
        assert_eq!(utf8().error_message(), "must be valid UTF-8");
    }

    #[test]
    fn test_alphabetic() {
        assert!(alphabetic().check("Hello"));
        assert!(alphabetic().check("\u{e9}t\u{e9}"));
        assert!(!alphabetic().check("hello1"));
        assert!(!alphabetic().check("hi there"));
        assert!(alphabetic().check(&'q'));
        assert!(!alphabetic().check(&'7'));
    }

    #[test]
    fn test_case_classes() {
        assert!(uppercase().check("ABC"));
        assert!(!uppercase().check("AbC"));
        assert!(lowercase().check("abc"));
        assert!(!lowercase().check("abC"));
        assert!(lowercase().check(&'x'));
    }

    #[test]
    fn test_alphanumeric() {
        assert!(alphanumeric().check("abc123"));
        assert!(!alphanumeric().check("abc-123"));
        assert_eq!(alphanumeric().error_message(), "must be alphanumeric");
    }

    #[test]
    fn test_digits_are_ascii() {
        assert!(digits().check("0123456789"));
        assert!(!digits().check("12a"));
        // Arabic-Indic digit three
        assert!(!digits().check("\u{663}"));
    }

    #[test]
    fn test_empty_sequence_is_in_every_class() {
        assert!(alphabetic().check(""));
        assert!(uppercase().check(""));
        assert!(lowercase().check(""));
        assert!(alphanumeric().check(""));
        assert!(digits().check(""));
        assert!(digits().check(&None::<String>));
    }

    #[test]
    fn test_char_vectors() {
        assert!(uppercase().check(&vec!['A', 'B']));
        assert!(!digits().check(&['1', 'x']));
    }
}
