//! Error types
//!
//! Two strata that never mix:
//!
//! - [`ValidationError`] / [`ValidationErrors`] describe *data* that failed a
//!   constraint. They are ordinary values, returned inside a
//!   [`ValidationResult`](crate::engine::ValidationResult).
//! - [`DefinitionError`] describes a *record type* whose constraint set is
//!   malformed. It is produced while a [`Schema`](crate::engine::Schema) is
//!   built, before any value is checked.
//!
//! String fields use `Cow<'static, str>` so that static field names and fixed
//! messages never allocate.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::foundation::kind_label;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A field that failed one of its constraints.
///
/// Renders as `"<field>: <message>"`.
///
/// # Examples
///
/// ```rust
/// use sift_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("name", "length must be >= 1");
/// assert_eq!(error.to_string(), "name: length must be >= 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ValidationError {
    /// Name of the failing field.
    pub field: Cow<'static, str>,
    /// Error message of the first constraint the field failed.
    pub message: Cow<'static, str>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// The ordered field errors of a failed validation.
///
/// Holds at most one entry per field, in field declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("{}", render(.errors))]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

fn render(errors: &[ValidationError]) -> String {
    let mut out = format!("validation failed with {} error(s)", errors.len());
    for error in errors {
        out.push_str("\n  ");
        out.push_str(&error.to_string());
    }
    out
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub(crate) fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn as_slice(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns an iterator over the errors.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Looks up the error reported for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|error| error.field == field)
    }

    /// Consumes the collection and returns the errors.
    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

// ============================================================================
// DEFINITION ERROR
// ============================================================================

/// A record type whose constraint set cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DefinitionError {
    /// The same constraint kind was attached twice to one field.
    #[error("constraint `{}` is attached more than once to field `{field}`", kind_label(.kind))]
    DuplicateConstraint {
        /// Field carrying the ambiguous attachment.
        field: Cow<'static, str>,
        /// Full type name of the duplicated kind.
        kind: &'static str,
    },

    /// Two fields were registered under the same name.
    #[error("field `{field}` is declared more than once")]
    DuplicateField {
        /// The repeated field name.
        field: Cow<'static, str>,
    },

    /// A field was registered with an empty name.
    #[error("field names must not be empty")]
    EmptyFieldName,
}

impl DefinitionError {
    /// Returns the field the error refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::DuplicateConstraint { field, .. } | Self::DuplicateField { field } => {
                Some(field)
            }
            Self::EmptyFieldName => None,
        }
    }
}
