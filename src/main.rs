//! Custom Login - Entry Point
//!
//! Landing, login and sign-up screens on the terminal, backed by an
//! in-memory authentication and directory service.

use log::info;
use tokio::io::BufReader;

use custom_login::config::AppConfig;
use custom_login::directory::InMemoryDirectory;
use custom_login::error::{AppError, handlers::handle_error};
use custom_login::{console, utils};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    utils::logging::setup_logging(&config.log_level);

    info!("Launching login demo...");

    let directory = InMemoryDirectory::new(config.users_collection.clone());
    let policy = config.password_policy();
    let mut stdout = tokio::io::stdout();

    if let Err(e) = console::run(&directory, &policy, BufReader::new(tokio::io::stdin()), &mut stdout).await {
        handle_error(&e);
        return Err(e);
    }
    Ok(())
}
