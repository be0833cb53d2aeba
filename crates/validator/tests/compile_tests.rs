//! Compile-time tests for `#[derive(Validate)]`.
//!
//! These tests use trybuild to check that well-formed declarations expand
//! and that malformed ones are rejected with errors naming the field and
//! the kind.

#[test]
fn test_validate_derive() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/derive_pass.rs");
}

#[test]
fn test_validate_derive_fail() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/duplicate_kind.rs");
    t.compile_fail("tests/ui/negation_arity.rs");
    t.compile_fail("tests/ui/generic_struct.rs");
}

#[test]
fn test_constraint_on_wrong_field_type() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/wrong_field_type.rs");
}
