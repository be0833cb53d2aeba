use sift_validator::prelude::*;

#[derive(Validate)]
#[allow(dead_code)]
struct Signup {
    #[validate(not_empty, min_length = 3)]
    name: String,
}

fn main() {}
