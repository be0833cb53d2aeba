//! Validation engine
//!
//! Runs a record through its [`Schema`]: fields in declaration order,
//! constraints in attachment order, one error per failing field.
//!
//! - [`Schema`] / [`SchemaBuilder`] / [`FieldBuilder`]: per-type declarations
//! - [`Validate`], [`validate`], [`validate_with`]: entry points
//! - [`ValidationResult`]: the outcome
//!
//! The engine holds no mutable state. A schema is `Send + Sync` and can be
//! shared by any number of concurrent callers.

mod result;
mod schema;
mod validate;

use serde::{Deserialize, Serialize};

pub use result::ValidationResult;
pub use schema::{FieldBuilder, Schema, SchemaBuilder};
pub use validate::{Validate, validate, validate_with};

/// How far validation goes after the first failure.
///
/// Deserializes from `"collect_all"` or `"bail_out"`, so hosts can read it
/// from their own configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Check every field and report each failing one.
    #[default]
    CollectAll,
    /// Stop at the first failure; at most one error is reported.
    BailOut,
}
