//! Basic usage example for sift-validator
//!
//! Run with `RUST_LOG=sift_validator=trace` to see every failed constraint.

use sift_validator::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Validate)]
struct Signup {
    #[validate(not_empty, max_length = 20, alphanumeric)]
    username: String,

    #[validate(rename = "yearsOld", ge = 0, lt = 150)]
    age: i32,

    // `None` reads as an empty sequence, which every character class
    // accepts, so `not(digits)` rejects an absent nickname.
    #[validate(not(digits))]
    nickname: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let good = Signup {
        username: "ferris".into(),
        age: 9,
        nickname: Some("ferris_the_crab".into()),
    };
    match good.validate().into_result() {
        Ok(signup) => println!("accepted: {signup:?}"),
        Err(errors) => println!("rejected: {errors}"),
    }

    let bad = Signup {
        username: String::new(),
        age: -1,
        nickname: Some("1234".into()),
    };
    match bad.validate().into_result() {
        Ok(signup) => println!("accepted: {signup:?}"),
        Err(errors) => println!("rejected: {errors}"),
    }

    let first_only = Signup {
        username: "no spaces allowed".into(),
        age: 200,
        nickname: None,
    }
    .validate_with(ValidationMode::BailOut);
    for error in first_only.errors() {
        println!("first failure: {error}");
    }
}
