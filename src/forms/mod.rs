//! Form submission
//!
//! Runs the validator, then forwards cleaned credentials to the directory
//! service and turns the result into something the front end can show.

pub mod login;
pub mod results;
pub mod signup;

pub use results::SubmitOutcome;

use crate::error::AppError;
use crate::error::handlers::{handle_error, user_message};

/// Logs a failed submission step and returns the text to show for it
fn report(err: impl Into<AppError>) -> String {
    let err = err.into();
    handle_error(&err);
    user_message(&err)
}
