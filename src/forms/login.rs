//! Login form submission

use log::info;

use super::report;
use super::results::SubmitOutcome;
use crate::auth::{PasswordPolicy, SignInForm};
use crate::directory::DirectoryService;

/// Validates the login form and signs the user in.
///
/// The service is only called when validation passes, with trimmed values.
pub async fn submit<S: DirectoryService>(
    form: &SignInForm,
    service: &S,
    policy: &PasswordPolicy,
) -> SubmitOutcome {
    if let Err(e) = form.validate(policy) {
        return SubmitOutcome::Rejected(report(e));
    }

    let credentials = form.cleaned();
    match service.sign_in(&credentials.email, &credentials.password).await {
        Ok(session) => {
            info!("Login succeeded for {}", session.user_id);
            SubmitOutcome::Home {
                user_id: session.user_id,
                notice: None,
            }
        }
        Err(e) => SubmitOutcome::Rejected(report(e)),
    }
}
