//! Form credentials
//!
//! Raw values as typed into the login and sign-up forms, and their cleaned
//! counterparts handed to the directory service. Built per submission and
//! dropped afterwards.

use super::results::ValidationResult;
use super::validator::{PasswordPolicy, clean_field, validate_fields};

/// Login form input
#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

/// Sign-up form input
#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Trimmed login credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInCredentials {
    pub email: String,
    pub password: String,
}

/// Trimmed sign-up credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpCredentials {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Email and password are required; the password must meet the policy.
    pub fn validate(&self, policy: &PasswordPolicy) -> ValidationResult {
        validate_fields(&[self.email.as_str(), self.password.as_str()], &self.password, policy)
    }

    pub fn cleaned(&self) -> SignInCredentials {
        SignInCredentials {
            email: clean_field(&self.email).to_string(),
            password: clean_field(&self.password).to_string(),
        }
    }
}

impl SignUpForm {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// All four fields are required; the password must meet the policy.
    pub fn validate(&self, policy: &PasswordPolicy) -> ValidationResult {
        validate_fields(
            &[
                self.first_name.as_str(),
                self.last_name.as_str(),
                self.email.as_str(),
                self.password.as_str(),
            ],
            &self.password,
            policy,
        )
    }

    pub fn cleaned(&self) -> SignUpCredentials {
        SignUpCredentials {
            first_name: clean_field(&self.first_name).to_string(),
            last_name: clean_field(&self.last_name).to_string(),
            email: clean_field(&self.email).to_string(),
            password: clean_field(&self.password).to_string(),
        }
    }
}
