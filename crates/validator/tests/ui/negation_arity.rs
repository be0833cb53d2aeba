use sift_validator::prelude::*;

#[derive(Validate)]
#[allow(dead_code)]
struct Empty {
    #[validate(not())]
    code: String,
}

#[derive(Validate)]
#[allow(dead_code)]
struct Crowded {
    #[validate(not(digits, alphabetic))]
    code: String,
}

fn main() {}
