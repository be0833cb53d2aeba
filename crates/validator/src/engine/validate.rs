//! The `Validate` trait: a record type with a declared schema.

use crate::engine::{Schema, ValidationMode, ValidationResult};

/// A record type that knows its own [`Schema`].
///
/// Usually derived with `#[derive(Validate)]`, which builds the schema once,
/// on first use, in a static. Manual implementations do the same:
///
/// ```rust
/// use std::sync::LazyLock;
///
/// use sift_validator::engine::{Schema, Validate};
/// use sift_validator::prelude::*;
///
/// struct Port(u16);
///
/// impl Validate for Port {
///     fn schema() -> &'static Schema<Self> {
///         static SCHEMA: LazyLock<Schema<Port>> = LazyLock::new(|| {
///             Schema::builder()
///                 .field("port", |p: &Port| &p.0)
///                 .constraint(greater_than_or_equal(1024))
///                 .build()
///                 .unwrap_or_else(|e| panic!("{e}"))
///         });
///         &SCHEMA
///     }
/// }
///
/// assert!(Port(8080).validate().is_ok());
/// assert_eq!(Port(80).validate().errors().to_string(),
///            "validation failed with 1 error(s)\n  port: must be >= 1024");
/// ```
pub trait Validate: Sized + 'static {
    /// The schema of this type.
    fn schema() -> &'static Schema<Self>;

    /// Validates in [`ValidationMode::CollectAll`] mode.
    fn validate(self) -> ValidationResult<Self> {
        Self::schema().validate(self, ValidationMode::CollectAll)
    }

    /// Validates in the given mode.
    fn validate_with(self, mode: ValidationMode) -> ValidationResult<Self> {
        Self::schema().validate(self, mode)
    }
}

/// Validates `record`, reporting every failing field.
pub fn validate<R: Validate>(record: R) -> ValidationResult<R> {
    record.validate()
}

/// Validates `record` in the given mode.
///
/// ```rust
/// # use std::sync::LazyLock;
/// # use sift_validator::engine::{Schema, Validate};
/// use sift_validator::prelude::*;
///
/// # struct Pair { a: String, b: String }
/// # impl Validate for Pair {
/// #     fn schema() -> &'static Schema<Self> {
/// #         static SCHEMA: LazyLock<Schema<Pair>> = LazyLock::new(|| {
/// #             Schema::builder()
/// #                 .field("a", |p: &Pair| &p.a).constraint(NOT_EMPTY)
/// #                 .field("b", |p: &Pair| &p.b).constraint(NOT_EMPTY)
/// #                 .build().unwrap()
/// #         });
/// #         &SCHEMA
/// #     }
/// # }
/// let empty = || Pair { a: String::new(), b: String::new() };
/// assert_eq!(validate(empty()).errors().len(), 2);
/// assert_eq!(validate_with(empty(), ValidationMode::BailOut).errors().len(), 1);
/// ```
pub fn validate_with<R: Validate>(record: R, mode: ValidationMode) -> ValidationResult<R> {
    record.validate_with(mode)
}
