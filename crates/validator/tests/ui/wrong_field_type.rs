use sift_validator::prelude::*;

#[derive(Validate)]
#[allow(dead_code)]
struct Mismatched {
    #[validate(alphabetic)]
    age: u32,
}

fn main() {}
