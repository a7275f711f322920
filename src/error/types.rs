//! Error types
//!
//! Defines the error types for form validation and the directory service.

use std::fmt;

/// Form validation errors
///
/// Both kinds are recoverable: the caller shows the message and re-prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    IncompleteFields,
    WeakPassword { min_length: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::IncompleteFields => write!(f, "Please fill in all fields."),
            ValidationError::WeakPassword { min_length } => write!(
                f,
                "Please make sure your password is at least {} characters, contains a special character and a number",
                min_length
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Directory service errors
///
/// The display text is what the backend reports and is shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    InvalidEmail,
    EmailAlreadyInUse,
    UserNotFound,
    WrongPassword,
    UnknownUid(String),
    Unavailable(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::InvalidEmail => write!(f, "The email address is badly formatted."),
            ServiceError::EmailAlreadyInUse => {
                write!(f, "The email address is already in use by another account.")
            }
            ServiceError::UserNotFound => write!(
                f,
                "There is no user record corresponding to this identifier. The user may have been deleted."
            ),
            ServiceError::WrongPassword => write!(
                f,
                "The password is invalid or the user does not have a password."
            ),
            ServiceError::UnknownUid(_) => write!(f, "No user exists for the given uid."),
            ServiceError::Unavailable(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

/// Top-level application error
#[derive(Debug)]
pub enum AppError {
    Validation(ValidationError),
    Service(ServiceError),
    Config(config::ConfigError),
    IoError(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(e) => write!(f, "Validation error: {}", e),
            AppError::Service(e) => write!(f, "Service error: {}", e),
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        AppError::Validation(error)
    }
}

impl From<ServiceError> for AppError {
    fn from(error: ServiceError) -> Self {
        AppError::Service(error)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::IoError(error)
    }
}
