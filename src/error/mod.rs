//! Error handling
//!
//! Defines error types and handling for the login demo.

pub mod handlers;
pub mod types;

pub use types::*;
