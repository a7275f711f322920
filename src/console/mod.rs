//! Terminal front end
//!
//! Landing menu, login form and sign-up form as line prompts. Generic over
//! the reader and writer so sessions can be scripted.

mod prompt;

use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::auth::{PasswordPolicy, SignInForm, SignUpForm};
use crate::directory::DirectoryService;
use crate::error::AppError;
use crate::forms::{self, SubmitOutcome};
use prompt::{ask, say};

const LANDING_MENU: &str = "\n1) Sign Up\n2) Log In\nq) Quit\n> ";

/// Runs one console session until the user quits, reaches the home screen,
/// or closes the input.
pub async fn run<S, R, W>(
    service: &S,
    policy: &PasswordPolicy,
    mut reader: R,
    writer: &mut W,
) -> Result<(), AppError>
where
    S: DirectoryService,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        let Some(choice) = ask(&mut reader, writer, LANDING_MENU).await? else {
            debug!("Input closed on landing screen");
            return Ok(());
        };

        let outcome = match choice.trim() {
            "1" => match read_sign_up(&mut reader, writer).await? {
                Some(form) => forms::signup::submit(&form, service, policy).await,
                None => return Ok(()),
            },
            "2" => match read_sign_in(&mut reader, writer).await? {
                Some(form) => forms::login::submit(&form, service, policy).await,
                None => return Ok(()),
            },
            "q" | "Q" => {
                info!("Console session ended by user");
                return Ok(());
            }
            other => {
                say(writer, &format!("Unknown option: {}", other)).await?;
                continue;
            }
        };

        match outcome {
            SubmitOutcome::Home { user_id, notice } => {
                if let Some(notice) = notice {
                    say(writer, &notice).await?;
                }
                say(writer, &format!("Welcome, {}", user_id)).await?;
                return Ok(());
            }
            SubmitOutcome::Rejected(message) => say(writer, &message).await?,
        }
    }
}

async fn read_sign_in<R, W>(reader: &mut R, writer: &mut W) -> std::io::Result<Option<SignInForm>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let Some(email) = ask(reader, writer, "Email: ").await? else {
        return Ok(None);
    };
    let Some(password) = ask(reader, writer, "Password: ").await? else {
        return Ok(None);
    };
    Ok(Some(SignInForm::new(email, password)))
}

async fn read_sign_up<R, W>(reader: &mut R, writer: &mut W) -> std::io::Result<Option<SignUpForm>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let Some(first_name) = ask(reader, writer, "First name: ").await? else {
        return Ok(None);
    };
    let Some(last_name) = ask(reader, writer, "Last name: ").await? else {
        return Ok(None);
    };
    let Some(email) = ask(reader, writer, "Email: ").await? else {
        return Ok(None);
    };
    let Some(password) = ask(reader, writer, "Password: ").await? else {
        return Ok(None);
    };
    Ok(Some(SignUpForm::new(first_name, last_name, email, password)))
}
