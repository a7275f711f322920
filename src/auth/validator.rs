//! Credential validator
//!
//! Decides whether raw form fields may be submitted to the directory service.
//! Pure functions only: no I/O and no shared state, so any number of callers
//! may use them concurrently.

use super::results::ValidationResult;
use crate::error::ValidationError;

/// Special characters accepted by the password strength rule
pub const DEFAULT_SPECIAL_CHARACTERS: &str = "$@!%*?&";

/// Minimum password length in characters
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

/// Password strength requirements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub special_characters: String,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_PASSWORD_LENGTH,
            special_characters: DEFAULT_SPECIAL_CHARACTERS.to_string(),
        }
    }
}

/// Trims leading and trailing whitespace and newlines.
pub fn clean_field(input: &str) -> &str {
    input.trim()
}

/// Checks a trimmed password against the policy.
///
/// Length is counted in characters. The password needs at least one special
/// character from the policy set, one ASCII digit and one ASCII letter.
pub fn is_password_valid(password: &str, policy: &PasswordPolicy) -> bool {
    password.chars().count() >= policy.min_length
        && password
            .chars()
            .any(|c| policy.special_characters.contains(c))
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_alphabetic())
}

/// Validates a form.
///
/// `required` holds every field that must be filled in, the password included.
/// Completeness is checked before password strength, so a form with an empty
/// field always reports `IncompleteFields`.
pub fn validate_fields(required: &[&str], password: &str, policy: &PasswordPolicy) -> ValidationResult {
    if required.iter().any(|field| clean_field(field).is_empty()) {
        return Err(ValidationError::IncompleteFields);
    }

    if !is_password_valid(clean_field(password), policy) {
        return Err(ValidationError::WeakPassword {
            min_length: policy.min_length,
        });
    }

    Ok(())
}
