use sift_validator::prelude::*;

#[derive(Debug, Validate)]
struct Signup {
    #[validate(rename = "userName", not_empty, max_length = 20, alphanumeric)]
    username: String,
    #[validate(ge = 0, lt = 150)]
    age: i32,
    #[validate(not_null, not(digits))]
    nickname: Option<String>,
    #[validate(constraint = "not(exact_length(3))")]
    tags: Vec<String>,
}

fn main() {
    let signup = Signup {
        username: "ferris".into(),
        age: 9,
        nickname: Some("crab".into()),
        tags: Vec::new(),
    };
    assert!(signup.validate().is_ok());
}
