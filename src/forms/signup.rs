//! Sign-up form submission

use log::info;

use super::report;
use super::results::SubmitOutcome;
use crate::auth::{PasswordPolicy, SignUpForm};
use crate::directory::DirectoryService;

/// Validates the sign-up form, creates the account and stores the profile.
///
/// A failed profile write does not undo the account: the outcome is still
/// `Home`, with the service's message as the notice.
pub async fn submit<S: DirectoryService>(
    form: &SignUpForm,
    service: &S,
    policy: &PasswordPolicy,
) -> SubmitOutcome {
    if let Err(e) = form.validate(policy) {
        return SubmitOutcome::Rejected(report(e));
    }

    let credentials = form.cleaned();
    let user_id = match service
        .create_user(&credentials.email, &credentials.password)
        .await
    {
        Ok(user_id) => user_id,
        Err(e) => return SubmitOutcome::Rejected(report(e)),
    };

    let notice = service
        .save_profile(&user_id, &credentials.first_name, &credentials.last_name)
        .await
        .err()
        .map(report);

    info!("Sign-up completed for {}", user_id);
    SubmitOutcome::Home { user_id, notice }
}
