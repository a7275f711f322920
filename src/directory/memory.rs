//! In-memory directory
//!
//! Process-local stand-in for the hosted backend, used by the demo binary
//! and the tests. Nothing survives a restart.

use std::collections::HashMap;

use log::{debug, info};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::password::{hash_password, verify_password};
use super::service::{DirectoryService, Session, UserId, UserProfile};
use crate::error::ServiceError;

struct Account {
    uid: UserId,
    email: String,
    /// scrypt PHC string
    password_hash: String,
}

/// Accounts keyed by lowercased email, plus named document collections
pub struct InMemoryDirectory {
    accounts: RwLock<HashMap<String, Account>>,
    collections: RwLock<HashMap<String, Vec<UserProfile>>>,
    users_collection: String,
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new("users")
    }
}

impl InMemoryDirectory {
    pub fn new(users_collection: impl Into<String>) -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            collections: RwLock::new(HashMap::new()),
            users_collection: users_collection.into(),
        }
    }

    /// Documents stored in the users collection, in insertion order
    pub async fn profiles(&self) -> Vec<UserProfile> {
        self.collections
            .read()
            .await
            .get(&self.users_collection)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn account_count(&self) -> usize {
        self.accounts.read().await.len()
    }
}

/// Hashing is CPU-bound, so it runs on the blocking pool.
async fn hash_off_runtime(password: &str) -> Result<String, ServiceError> {
    let plain = password.to_string();
    tokio::task::spawn_blocking(move || hash_password(&plain))
        .await
        .map_err(|e| ServiceError::Unavailable(format!("Password hashing failed: {}", e)))?
        .map_err(|e| ServiceError::Unavailable(format!("Password hashing failed: {}", e)))
}

async fn verify_off_runtime(hash: String, password: &str) -> Result<bool, ServiceError> {
    let plain = password.to_string();
    tokio::task::spawn_blocking(move || verify_password(&hash, &plain))
        .await
        .map_err(|e| ServiceError::Unavailable(format!("Password check failed: {}", e)))
}

/// Minimal shape check: `local@domain.tld` without whitespace.
fn is_well_formed_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

impl DirectoryService for InMemoryDirectory {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, ServiceError> {
        if !is_well_formed_email(email) {
            return Err(ServiceError::InvalidEmail);
        }

        let (uid, stored_email, password_hash) = {
            let accounts = self.accounts.read().await;
            match accounts.get(&email.to_lowercase()) {
                Some(account) => (
                    account.uid.clone(),
                    account.email.clone(),
                    account.password_hash.clone(),
                ),
                None => return Err(ServiceError::UserNotFound),
            }
        };

        if verify_off_runtime(password_hash, password).await? {
            info!("User {} signed in", uid);
            Ok(Session {
                user_id: uid,
                email: stored_email,
            })
        } else {
            debug!("Wrong password for user {}", uid);
            Err(ServiceError::WrongPassword)
        }
    }

    async fn create_user(&self, email: &str, password: &str) -> Result<UserId, ServiceError> {
        if !is_well_formed_email(email) {
            return Err(ServiceError::InvalidEmail);
        }

        let key = email.to_lowercase();
        if self.accounts.read().await.contains_key(&key) {
            return Err(ServiceError::EmailAlreadyInUse);
        }

        let password_hash = hash_off_runtime(password).await?;

        // re-check: another sign-up may have won while hashing
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&key) {
            return Err(ServiceError::EmailAlreadyInUse);
        }

        let uid = UserId::new(Uuid::new_v4().to_string());
        accounts.insert(
            key,
            Account {
                uid: uid.clone(),
                email: email.to_string(),
                password_hash,
            },
        );
        info!("Created user {}", uid);
        Ok(uid)
    }

    async fn save_profile(
        &self,
        user_id: &UserId,
        first_name: &str,
        last_name: &str,
    ) -> Result<(), ServiceError> {
        let known = self
            .accounts
            .read()
            .await
            .values()
            .any(|account| &account.uid == user_id);
        if !known {
            return Err(ServiceError::UnknownUid(user_id.to_string()));
        }

        let mut collections = self.collections.write().await;
        collections
            .entry(self.users_collection.clone())
            .or_default()
            .push(UserProfile {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                uid: user_id.clone(),
            });
        debug!("Saved profile for {} in '{}'", user_id, self.users_collection);
        Ok(())
    }
}
