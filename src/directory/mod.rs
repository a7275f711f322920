//! Authentication and directory service
//!
//! The backend contract and an in-memory implementation of it.

mod memory;
mod password;
mod service;

pub use memory::InMemoryDirectory;
pub use service::{DirectoryService, Session, UserId, UserProfile};
