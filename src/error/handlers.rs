//! Error handlers
//!
//! Logging and user-facing text for application errors.

use crate::error::types::AppError;
use log::{error, warn};

/// Log an application error at a level matching its severity
pub fn handle_error(err: &AppError) {
    match err {
        AppError::Validation(_) | AppError::Service(_) => warn!("{}", err),
        AppError::Config(_) | AppError::IoError(_) => error!("{}", err),
    }
}

/// Text to put in front of the user for an error.
///
/// Validation and service messages pass through unmodified.
pub fn user_message(err: &AppError) -> String {
    match err {
        AppError::Validation(e) => e.to_string(),
        AppError::Service(e) => e.to_string(),
        AppError::Config(_) | AppError::IoError(_) => "Something went wrong. Please try again.".into(),
    }
}
