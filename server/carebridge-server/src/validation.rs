//! Request validation utilities for consistent validation across handlers
//!
//! Handlers call [`RequestValidation::validate`] before any external call is
//! made, so an invalid request never reaches the platform or the model.

use crate::error::ApiError;

/// Trait for validating request payloads
pub trait RequestValidation {
    /// Validates the request and returns an error if validation fails
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] describing the first failed check.
    fn validate(&self) -> Result<(), ApiError>;
}

/// Macro for validating fields with custom predicates
///
/// # Usage
///
/// ```rust,ignore
/// validate_field!(self.message, !self.message.trim().is_empty(), "No user message provided");
/// ```
#[macro_export]
macro_rules! validate_field {
    ($field:expr, $predicate:expr, $message:expr) => {
        if !$predicate {
            return Err($crate::error::ApiError::validation($message));
        }
    };
}

/// Macro for validating optional text fields that must be present and non-blank
///
/// # Usage
///
/// ```rust,ignore
/// validate_required!(self.phone_number, "No phoneNumber provided");
/// ```
#[macro_export]
macro_rules! validate_required {
    ($field:expr, $message:expr) => {
        $crate::validate_field!($field, $crate::validation::is_present(&$field), $message);
    };
}

/// Present and not blank
pub fn is_present<S: AsRef<str>>(value: &Option<S>) -> bool {
    value.as_ref().is_some_and(|v| !v.as_ref().trim().is_empty())
}

/// Trimmed value of a required text field
///
/// # Errors
///
/// Returns a validation error with `message` when the field is missing or blank.
pub fn required<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, ApiError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::validation(message))
}
