use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::io::BufReader;

use custom_login::auth::{SignInForm, SignUpForm};
use custom_login::directory::{DirectoryService, InMemoryDirectory, Session, UserId};
use custom_login::error::ServiceError;
use custom_login::forms::{self, SubmitOutcome};
use custom_login::{PasswordPolicy, console};

// Directory that records calls and can fail the profile write
#[derive(Default)]
struct RecordingDirectory {
    calls: AtomicUsize,
    fail_profile: bool,
}

impl DirectoryService for RecordingDirectory {
    async fn sign_in(&self, email: &str, _password: &str) -> Result<Session, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Session {
            user_id: UserId::new("uid-1"),
            email: email.to_string(),
        })
    }

    async fn create_user(&self, _email: &str, _password: &str) -> Result<UserId, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(UserId::new("uid-1"))
    }

    async fn save_profile(
        &self,
        _user_id: &UserId,
        _first_name: &str,
        _last_name: &str,
    ) -> Result<(), ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_profile {
            Err(ServiceError::Unavailable("Missing or insufficient permissions.".into()))
        } else {
            Ok(())
        }
    }
}

#[tokio::test]
async fn invalid_form_never_reaches_service() {
    let directory = RecordingDirectory::default();
    let policy = PasswordPolicy::default();

    let outcome = forms::login::submit(&SignInForm::new("", "Abcdef1!"), &directory, &policy).await;
    assert_eq!(outcome, SubmitOutcome::Rejected("Please fill in all fields.".into()));

    let form = SignUpForm::new("Ann", "Lee", "a@b.com", "weak");
    let outcome = forms::signup::submit(&form, &directory, &policy).await;
    assert!(!outcome.is_home());

    assert_eq!(directory.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn sign_up_then_log_in() {
    let directory = InMemoryDirectory::default();
    let policy = PasswordPolicy::default();

    let form = SignUpForm::new("  Ann ", "Lee", " ann@example.com ", " Abcdef1! ");
    let outcome = forms::signup::submit(&form, &directory, &policy).await;
    let (user_id, notice) = match outcome {
        SubmitOutcome::Home { user_id, notice } => (user_id, notice),
        other => panic!("sign-up should reach home: {other:?}"),
    };
    assert_eq!(notice, None);

    let profiles = directory.profiles().await;
    assert_eq!(profiles.len(), 1);
    assert_eq!(
        profiles[0].fields(),
        [("firstname", "Ann"), ("lastname", "Lee"), ("uid", user_id.as_str())]
    );

    // trimmed password was stored
    let login = SignInForm::new("ann@example.com", "Abcdef1!");
    let outcome = forms::login::submit(&login, &directory, &policy).await;
    assert_eq!(
        outcome,
        SubmitOutcome::Home {
            user_id,
            notice: None
        }
    );
}

#[tokio::test]
async fn service_errors_are_shown_verbatim() {
    let directory = InMemoryDirectory::default();
    let policy = PasswordPolicy::default();

    let outcome =
        forms::login::submit(&SignInForm::new("nobody@example.com", "Abcdef1!"), &directory, &policy).await;
    assert_eq!(outcome.message(), Some(ServiceError::UserNotFound.to_string().as_str()));

    let form = SignUpForm::new("Ann", "Lee", "ann@example.com", "Abcdef1!");
    assert!(forms::signup::submit(&form, &directory, &policy).await.is_home());

    let outcome = forms::signup::submit(&form, &directory, &policy).await;
    assert_eq!(
        outcome,
        SubmitOutcome::Rejected("The email address is already in use by another account.".into())
    );

    let outcome =
        forms::login::submit(&SignInForm::new("ann@example.com", "Wrong123!"), &directory, &policy).await;
    assert_eq!(
        outcome,
        SubmitOutcome::Rejected("The password is invalid or the user does not have a password.".into())
    );

    let outcome = forms::login::submit(&SignInForm::new("not-an-email", "Abcdef1!"), &directory, &policy).await;
    assert_eq!(
        outcome,
        SubmitOutcome::Rejected("The email address is badly formatted.".into())
    );
    assert_eq!(directory.account_count().await, 1);
}

#[tokio::test]
async fn failed_profile_write_still_reaches_home() {
    let directory = RecordingDirectory {
        fail_profile: true,
        ..RecordingDirectory::default()
    };
    let form = SignUpForm::new("Ann", "Lee", "ann@example.com", "Abcdef1!");

    let outcome = forms::signup::submit(&form, &directory, &PasswordPolicy::default()).await;
    assert!(outcome.is_home());
    assert_eq!(outcome.message(), Some("Missing or insufficient permissions."));
    assert_eq!(directory.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn console_session_signs_up() {
    let directory = InMemoryDirectory::default();
    let input = "1\nAnn\nLee\nann@example.com\nshort\n1\nAnn\nLee\nann@example.com\nAbcdef1!\n";
    let mut output = Vec::new();

    console::run(
        &directory,
        &PasswordPolicy::default(),
        BufReader::new(input.as_bytes()),
        &mut output,
    )
    .await
    .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Please make sure your password is at least 8 characters"));
    assert!(output.contains("Welcome, "));
    assert_eq!(directory.profiles().await.len(), 1);
}

#[tokio::test]
async fn console_handles_unknown_option_and_eof() {
    let directory = InMemoryDirectory::default();
    let mut output = Vec::new();

    console::run(
        &directory,
        &PasswordPolicy::default(),
        BufReader::new("x\n2\nann@example.com\n".as_bytes()),
        &mut output,
    )
    .await
    .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Unknown option: x"));
    assert!(!output.contains("Welcome"));
    assert_eq!(directory.account_count().await, 0);
}

#[tokio::test]
async fn console_quits_from_landing_menu() {
    for quit in ["q\n", "Q\n", "  q  \n"] {
        let directory = InMemoryDirectory::default();
        let mut output = Vec::new();

        // lines after the quit are never read
        let input = format!("{quit}1\nAnn\nLee\nann@example.com\nAbcdef1!\n");
        console::run(
            &directory,
            &PasswordPolicy::default(),
            BufReader::new(input.as_bytes()),
            &mut output,
        )
        .await
        .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(!output.contains("First name: "));
        assert!(!output.contains("Welcome"));
        assert_eq!(directory.account_count().await, 0);
    }
}

#[tokio::test]
async fn console_input_ending_mid_sign_up_submits_nothing() {
    let directory = InMemoryDirectory::default();
    let mut output = Vec::new();

    console::run(
        &directory,
        &PasswordPolicy::default(),
        BufReader::new("1\nAnn\nLee\n".as_bytes()),
        &mut output,
    )
    .await
    .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Email: "));
    assert!(!output.contains("Password: "));
    assert!(!output.contains("Please fill in all fields."));
    assert_eq!(directory.account_count().await, 0);
    assert!(directory.profiles().await.is_empty());
}
