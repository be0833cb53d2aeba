//! Serialized error lists and externally configured modes.

use pretty_assertions::assert_eq;
use serde_json::json;
use sift_validator::prelude::*;

#[derive(Debug, Validate)]
struct Order {
    #[validate(rename = "sku", exact_length = 8, alphanumeric)]
    item_code: String,
    #[validate(positive)]
    quantity: u32,
}

fn failing_order() -> Order {
    Order {
        item_code: "AB-1".into(),
        quantity: 0,
    }
}

#[test]
fn errors_serialize_as_a_plain_list() {
    let errors = failing_order().validate().into_result().unwrap_err();

    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        json!([
            { "field": "sku", "message": "length must be == 8" },
            { "field": "quantity", "message": "must be > 0" },
        ])
    );
}

#[test]
fn errors_snapshot() {
    let errors = failing_order().validate().into_result().unwrap_err();

    insta::assert_json_snapshot!(errors, @r#"
    [
      {
        "field": "sku",
        "message": "length must be == 8"
      },
      {
        "field": "quantity",
        "message": "must be > 0"
      }
    ]
    "#);
}

#[test]
fn mode_is_read_from_host_configuration() {
    let config = json!({ "mode": "bail_out" });
    let mode: ValidationMode = serde_json::from_value(config["mode"].clone()).unwrap();
    assert_eq!(mode, ValidationMode::BailOut);

    let result = failing_order().validate_with(mode);
    assert_eq!(result.errors().len(), 1);
}

#[test]
fn mode_round_trips_through_its_names() {
    assert_eq!(
        serde_json::to_string(&ValidationMode::CollectAll).unwrap(),
        "\"collect_all\""
    );
    assert!(serde_json::from_str::<ValidationMode>("\"sometimes\"").is_err());
    assert_eq!(ValidationMode::default(), ValidationMode::CollectAll);
}
