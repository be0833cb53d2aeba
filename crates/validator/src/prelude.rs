//! Prelude module for convenient imports.
//!
//! Provides a single `use sift_validator::prelude::*;` import that brings
//! in the traits, the engine entry points, every built-in kind and the
//! combinators.
//!
//! # Examples
//!
//! ```rust
//! use sift_validator::prelude::*;
//!
//! let username: [&dyn Constraint<str>; 2] = [&min_length(3), &max_length(20)];
//! assert!(username.iter().all(|kind| kind.check("alice")));
//! assert!(not(digits()).check("alice"));
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    Constraint, ConstraintExt, ConstraintKind, DefinitionError, LengthMode, ValidationError,
    ValidationErrors,
};

// ============================================================================
// ENGINE: Schemas and entry points
// ============================================================================

pub use crate::engine::{Schema, Validate, ValidationMode, ValidationResult, validate, validate_with};

// ============================================================================
// DERIVE
// ============================================================================

#[cfg(feature = "derive")]
pub use sift_validator_macros::Validate;

// ============================================================================
// CONSTRAINTS: All built-in kinds
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::constraints::*;

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{Not, not};
