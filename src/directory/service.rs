//! Directory service contract
//!
//! The hosted backend that signs users in, creates accounts and stores the
//! profile document written after sign-up.

use std::fmt;
use std::future::Future;

use crate::error::ServiceError;

/// Backend-assigned user identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Signed-in session as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    pub email: String,
}

/// Document stored in the users collection after sign-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub uid: UserId,
}

impl UserProfile {
    /// Document fields under their stored key names
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("firstname", self.first_name.as_str()),
            ("lastname", self.last_name.as_str()),
            ("uid", self.uid.as_str()),
        ]
    }
}

/// Authentication and directory backend.
///
/// Implementations report failures as [`ServiceError`], whose text is shown
/// to the user unmodified.
pub trait DirectoryService: Send + Sync {
    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Session, ServiceError>> + Send;

    fn create_user(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<UserId, ServiceError>> + Send;

    fn save_profile(
        &self,
        user_id: &UserId,
        first_name: &str,
        last_name: &str,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send;
}
