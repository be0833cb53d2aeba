//! End-to-end scenarios for the validation engine.

use pretty_assertions::assert_eq;
use rstest::rstest;
use sift_validator::prelude::*;

#[derive(Debug, Clone, PartialEq, Validate)]
struct Person {
    #[validate(not_empty)]
    name: String,
    #[validate(ge = 0)]
    age: i32,
}

#[derive(Debug, Clone, PartialEq, Validate)]
struct Registration {
    #[validate(min_length = 3, max_length = 16, alphanumeric)]
    username: String,
    #[validate(not_null, min_length = 8)]
    password: Option<String>,
    #[validate(gt = 0.0, not_nan)]
    height: f64,
    #[validate(exact_length = 2, uppercase)]
    country: String,
}

fn registration() -> Registration {
    Registration {
        username: "alice42".into(),
        password: Some("correct horse".into()),
        height: 1.72,
        country: "NZ".into(),
    }
}

fn rendered(errors: &ValidationErrors) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

// ============================================================================
// REFERENCE SCENARIOS
// ============================================================================

#[rstest]
#[case::empty_name("", 32, &["name: length must be >= 1"])]
#[case::negative_age("Tom", -1, &["age: must be >= 0"])]
#[case::both_fail("", -1, &["name: length must be >= 1", "age: must be >= 0"])]
#[case::valid("Somebody", 32, &[])]
fn person_scenarios(#[case] name: &str, #[case] age: i32, #[case] expected: &[&str]) {
    let record = Person {
        name: name.into(),
        age,
    };
    let result = validate(record);

    assert_eq!(result.is_ok(), expected.is_empty());
    assert_eq!(rendered(result.errors()), expected);
}

#[test]
fn valid_record_is_handed_back_unchanged() {
    let record = Person {
        name: "Somebody".into(),
        age: 32,
    };
    let result = record.clone().validate();

    assert!(result.is_ok());
    assert!(result.errors().is_empty());
    assert_eq!(result.data(), &record);
    assert_eq!(result.into_result(), Ok(record));
}

#[test]
fn second_constraint_reports_when_first_passes() {
    let record = Registration {
        username: "al!ce".into(),
        ..registration()
    };
    let result = record.validate();

    assert_eq!(rendered(result.errors()), ["username: must be alphanumeric"]);
}

#[derive(Debug, Validate)]
struct Alias {
    #[validate(not(digits))]
    alias: Option<String>,
    #[validate(not(alphabetic))]
    code: String,
}

#[rstest]
#[case::absent_and_empty(None, "", &[
    "alias: must not comply with: `must contain only digits`",
    "code: must not comply with: `must be alphabetic`",
])]
#[case::empty_alias(Some(""), "42", &["alias: must not comply with: `must contain only digits`"])]
#[case::digit_alias(Some("1234"), "42", &["alias: must not comply with: `must contain only digits`"])]
#[case::mixed(Some("r2d2"), "a1", &[])]
fn negated_class_rejects_absent_and_empty(
    #[case] alias: Option<&str>,
    #[case] code: &str,
    #[case] expected: &[&str],
) {
    let record = Alias {
        alias: alias.map(Into::into),
        code: code.into(),
    };
    assert_eq!(rendered(record.validate().errors()), expected);
}

// ============================================================================
// MODES
// ============================================================================

fn broken_registration() -> Registration {
    Registration {
        username: "x".into(),
        password: None,
        height: f64::NAN,
        country: "nz".into(),
    }
}

#[test]
fn collect_all_reports_first_failure_of_every_field() {
    let result = broken_registration().validate();

    assert_eq!(
        rendered(result.errors()),
        [
            "username: length must be >= 3",
            "password: must not be null",
            "height: must be > 0",
            "country: must be uppercase",
        ]
    );
}

#[test]
fn bail_out_reports_only_the_first_failure() {
    let result = broken_registration().validate_with(ValidationMode::BailOut);

    assert_eq!(rendered(result.errors()), ["username: length must be >= 3"]);
}

#[rstest]
#[case(ValidationMode::CollectAll)]
#[case(ValidationMode::BailOut)]
fn valid_records_pass_in_every_mode(#[case] mode: ValidationMode) {
    let result = validate_with(registration(), mode);
    assert!(result.is_ok());
}

#[test]
fn bail_out_on_later_field() {
    let record = Registration {
        country: "NZL".into(),
        ..registration()
    };
    let result = validate_with(record, ValidationMode::BailOut);

    assert_eq!(rendered(result.errors()), ["country: length must be == 2"]);
}

// ============================================================================
// RESULT ACCESS
// ============================================================================

#[test]
fn into_parts_returns_failed_record() {
    let (record, errors) = broken_registration().validate().into_parts();

    assert_eq!(record.username, "x");
    assert_eq!(errors.len(), 4);
    assert!(errors.get("height").is_some());
    assert!(errors.get("email").is_none());
}

#[test]
fn into_result_exposes_error_list() {
    let errors = Person {
        name: String::new(),
        age: -1,
    }
    .validate()
    .into_result()
    .unwrap_err();

    insta::assert_snapshot!(errors, @r"
    validation failed with 2 error(s)
      name: length must be >= 1
      age: must be >= 0
    ");
}

#[test]
fn schema_is_built_once_and_shared() {
    let first = <Person as Validate>::schema();
    let second = <Person as Validate>::schema();

    assert!(std::ptr::eq(first, second));
    assert_eq!(first.field_names().collect::<Vec<_>>(), ["name", "age"]);
}

#[test]
fn concurrent_validation_shares_no_state() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                Person {
                    name: if i % 2 == 0 { String::new() } else { "Ann".into() },
                    age: i,
                }
                .validate()
                .errors()
                .len()
            })
        })
        .collect();

    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, [1, 0, 1, 0, 1, 0, 1, 0]);
}
