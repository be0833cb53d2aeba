//! # sift-validator
//!
//! Declarative field-level validation for application records.
//!
//! ## Quick Start
//!
//! ```rust
//! use sift_validator::prelude::*;
//!
//! #[derive(Debug, Validate)]
//! struct Signup {
//!     #[validate(not_empty, alphabetic)]
//!     name: String,
//!     #[validate(ge = 0)]
//!     age: i32,
//! }
//!
//! let result = Signup { name: String::new(), age: -1 }.validate();
//! assert!(!result.is_ok());
//! assert_eq!(
//!     result.errors().to_string(),
//!     "validation failed with 2 error(s)\n  name: length must be >= 1\n  age: must be >= 0"
//! );
//! ```
//!
//! ## Declaring Constraints
//!
//! Fields are annotated with `#[validate(...)]` and checked in declaration
//! order. A record type can also declare its [`Schema`](engine::Schema) by
//! hand and implement [`Validate`](engine::Validate) directly.
//!
//! ## Definition Errors
//!
//! A malformed declaration is rejected before any record is checked. The
//! same kind attached twice to one field does not compile:
//!
//! ```rust,compile_fail
//! use sift_validator::prelude::*;
//!
//! #[derive(Validate)]
//! struct Ambiguous {
//!     #[validate(not_empty, min_length = 3)]
//!     name: String,
//! }
//! ```
//!
//! Neither does a kind attached to a field it cannot inspect:
//!
//! ```rust,compile_fail
//! use sift_validator::prelude::*;
//!
//! #[derive(Validate)]
//! struct Mismatched {
//!     #[validate(alphabetic)]
//!     age: u32,
//! }
//! ```
//!
//! ## Writing Constraint Kinds
//!
//! Use the [`constraint!`] macro for zero-boilerplate kinds, or implement
//! [`ConstraintKind`](foundation::ConstraintKind) and
//! [`Constraint<T>`](foundation::Constraint) manually. No registration is
//! needed: a third-party kind attaches exactly like a built-in one.
//!
//! ## Built-in Kinds
//!
//! - **Length**: [`MinLength`](constraints::MinLength),
//!   [`MaxLength`](constraints::MaxLength), [`ExactLength`](constraints::ExactLength)
//! - **Text**: [`ValidUtf8`](constraints::ValidUtf8), [`Alphabetic`](constraints::Alphabetic),
//!   [`Uppercase`](constraints::Uppercase), [`Lowercase`](constraints::Lowercase),
//!   [`Alphanumeric`](constraints::Alphanumeric), [`Digits`](constraints::Digits)
//! - **Numeric**: [`GreaterThan`](constraints::GreaterThan),
//!   [`GreaterThanOrEqual`](constraints::GreaterThanOrEqual),
//!   [`LessThan`](constraints::LessThan), [`LessThanOrEqual`](constraints::LessThanOrEqual),
//!   [`NonZero`](constraints::NonZero), [`NotNan`](constraints::NotNan)
//! - **Presence**: [`NotNull`](constraints::NotNull)
//! - **Negation**: [`Not`](combinators::Not)

// Generated code names this crate by its external path.
extern crate self as sift_validator;

pub mod combinators;
pub mod constraints;
pub mod engine;
pub mod foundation;
mod macros;
pub mod prelude;

#[cfg(feature = "derive")]
pub use sift_validator_macros::Validate;
