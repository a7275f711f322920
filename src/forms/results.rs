//! Submission result types

use crate::directory::UserId;

/// What the front end does after a form is submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Move on to the home screen. `notice` carries a message to show on
    /// the way, e.g. when the profile could not be saved after sign-up.
    Home {
        user_id: UserId,
        notice: Option<String>,
    },
    /// Stay on the form and show the message
    Rejected(String),
}

impl SubmitOutcome {
    pub fn is_home(&self) -> bool {
        matches!(self, SubmitOutcome::Home { .. })
    }

    /// Message to show the user, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Home { notice, .. } => notice.as_deref(),
            SubmitOutcome::Rejected(msg) => Some(msg),
        }
    }
}
