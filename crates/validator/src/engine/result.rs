//! The outcome of validating one record.

use crate::foundation::ValidationErrors;

/// A validated record together with the failures found in it.
///
/// `is_ok()` holds exactly when `errors()` is empty. The record is moved in
/// and handed back, never modified.
///
/// # Accessing the record
///
/// [`data`](Self::data) and [`into_data`](Self::into_data) are for results
/// that passed. Calling them on a failed result is a caller bug, caught by a
/// debug assertion; release builds hand the record back unchanged. Use
/// [`into_result`](Self::into_result) to branch on the outcome, or
/// [`into_parts`](Self::into_parts) to take the record regardless.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "a validation result should be checked"]
pub struct ValidationResult<R> {
    data: R,
    errors: ValidationErrors,
}

impl<R> ValidationResult<R> {
    pub(crate) fn new(data: R, errors: ValidationErrors) -> Self {
        Self { data, errors }
    }

    /// Returns true if every field passed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if at least one field failed.
    #[must_use]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// The failing fields in declaration order, one entry each.
    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Borrows the validated record.
    #[must_use]
    pub fn data(&self) -> &R {
        debug_assert!(self.is_ok(), "data() called on a failed validation result");
        &self.data
    }

    /// Takes the validated record.
    #[must_use]
    pub fn into_data(self) -> R {
        debug_assert!(self.is_ok(), "into_data() called on a failed validation result");
        self.data
    }

    /// Converts into a `Result`, keeping the record only on success.
    ///
    /// # Errors
    ///
    /// Returns the collected [`ValidationErrors`] if any field failed.
    pub fn into_result(self) -> Result<R, ValidationErrors> {
        if self.errors.is_empty() {
            Ok(self.data)
        } else {
            Err(self.errors)
        }
    }

    /// Splits into the record and the errors, whatever the outcome.
    #[must_use]
    pub fn into_parts(self) -> (R, ValidationErrors) {
        (self.data, self.errors)
    }
}

impl<R> From<ValidationResult<R>> for Result<R, ValidationErrors> {
    fn from(result: ValidationResult<R>) -> Self {
        result.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationError;

    fn failed() -> ValidationResult<u8> {
        let errors = [ValidationError::new("x", "must be > 3")].into_iter().collect();
        ValidationResult::new(1, errors)
    }

    #[test]
    fn test_passed_result() {
        let result = ValidationResult::new(7_u8, ValidationErrors::new());
        assert!(result.is_ok());
        assert!(!result.is_err());
        assert_eq!(*result.data(), 7);
        assert_eq!(result.into_result(), Ok(7));
    }

    #[test]
    fn test_failed_result() {
        let result = failed();
        assert!(result.is_err());
        assert_eq!(result.errors().len(), 1);
        let errors = result.into_result().unwrap_err();
        assert_eq!(errors.get("x").map(ValidationError::message), Some("must be > 3"));
    }

    #[test]
    fn test_into_parts_keeps_record() {
        let (data, errors) = failed().into_parts();
        assert_eq!(data, 1);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "failed validation result")]
    fn test_data_on_failure_is_a_bug() {
        let _ = failed().data();
    }
}
