use sift_validator::prelude::*;

#[derive(Validate)]
#[allow(dead_code)]
struct Holder<T> {
    #[validate(not_null)]
    value: Option<T>,
}

fn main() {}
