//! Credential validation
//!
//! Form types and the shared validator used by both the login and sign-up forms.

pub mod credentials;
pub mod results;
pub mod validator;

pub use credentials::{SignInCredentials, SignInForm, SignUpCredentials, SignUpForm};
pub use results::ValidationResult;
pub use validator::{PasswordPolicy, clean_field, is_password_valid, validate_fields};
