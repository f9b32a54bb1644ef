/// User collection
///
/// Usernames are unique and compared case-sensitively. Registration checks
/// availability and appends under one write guard, so two concurrent
/// registrations for the same name cannot both succeed.

use tokio::sync::RwLock;
use tracing::debug;

use super::StoreError;
use crate::models::user::User;

/// In-memory user list
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection holding the three demo accounts
    pub fn seeded() -> Self {
        Self {
            users: RwLock::new(vec![
                User::new("user1", "pass1"),
                User::new("user2", "pass2"),
                User::new("user3", "pass3"),
            ]),
        }
    }

    /// Returns true if no user has exactly this username
    pub async fn is_username_available(&self, username: &str) -> bool {
        !self
            .users
            .read()
            .await
            .iter()
            .any(|user| user.username == username)
    }

    /// Registers a new user
    ///
    /// # Errors
    ///
    /// - [`StoreError::EmptyPassword`] if the password is blank after trimming.
    ///   This is checked first.
    /// - [`StoreError::UsernameTaken`] if the username already exists.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, StoreError> {
        if password.trim().is_empty() {
            return Err(StoreError::EmptyPassword);
        }

        let mut users = self.users.write().await;

        if users.iter().any(|user| user.username == username) {
            return Err(StoreError::UsernameTaken(username.to_string()));
        }

        let user = User::new(username, password);
        users.push(user.clone());

        debug!(username = %username, "Registered user");
        Ok(user)
    }

    /// Returns true if some user matches both fields exactly
    pub async fn validate_credentials(&self, username: &str, password: &str) -> bool {
        self.users
            .read()
            .await
            .iter()
            .any(|user| user.matches(username, password))
    }
}
