//! Validation result types
//!
//! Defines the value returned by form validation.

use crate::error::ValidationError;

/// Outcome of validating a form: `Ok(())` when it may be submitted,
/// otherwise the first failing rule.
pub type ValidationResult = Result<(), ValidationError>;
