pub mod auth;
pub mod config;
pub mod console;
pub mod directory;
pub mod error;
pub mod forms;
pub mod utils;

pub use auth::{PasswordPolicy, validate_fields};
pub use directory::{DirectoryService, InMemoryDirectory};
