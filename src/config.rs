//! Configuration management for the login demo
//!
//! Built-in defaults, overridden by an optional `config.toml` and then by
//! `CUSTOM_LOGIN__*` environment variables.

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::auth::PasswordPolicy;
use crate::auth::validator::{DEFAULT_MIN_PASSWORD_LENGTH, DEFAULT_SPECIAL_CHARACTERS};

/// Files searched for configuration, later entries taking precedence
const CONFIG_PATHS: [&str; 2] = [
    "custom-login/config", // container layout: /app/custom-login/config.toml
    "config",              // local development: ./config.toml
];

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,

    /// Password strength rules shared by both forms
    pub min_password_length: usize,
    pub password_special_characters: String,

    /// Collection receiving profile documents after sign-up
    pub users_collection: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            password_special_characters: DEFAULT_SPECIAL_CHARACTERS.to_string(),
            users_collection: "users".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the standard locations with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(&CONFIG_PATHS)
    }

    /// Load configuration from the given file stems (no `.toml` suffix).
    /// Missing files are skipped.
    pub fn load_from(paths: &[&str]) -> Result<Self, config::ConfigError> {
        let defaults = AppConfig::default();
        let mut builder = Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("min_password_length", defaults.min_password_length as i64)?
            .set_default(
                "password_special_characters",
                defaults.password_special_characters,
            )?
            .set_default("users_collection", defaults.users_collection)?;

        for path in paths {
            builder = builder.add_source(File::with_name(path).required(false));
        }

        let settings = builder
            .add_source(Environment::with_prefix("CUSTOM_LOGIN").separator("__"))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Password rules as configured
    pub fn password_policy(&self) -> PasswordPolicy {
        PasswordPolicy {
            min_length: self.min_password_length,
            special_characters: self.password_special_characters.clone(),
        }
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.min_password_length == 0 {
            return Err(config::ConfigError::Message(
                "min_password_length must be greater than 0".into(),
            ));
        }

        if self.password_special_characters.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "password_special_characters cannot be empty".into(),
            ));
        }

        if self.users_collection.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "users_collection cannot be empty".into(),
            ));
        }

        Ok(())
    }
}
