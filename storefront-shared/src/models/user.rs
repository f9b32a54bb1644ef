/// User model
///
/// Users are held in memory by [`UserStore`](crate::store::users::UserStore).
///
/// # Security
///
/// Passwords are kept in plaintext and compared verbatim. This mirrors the
/// demo behavior the rest of the application (and its tests) relies on; it
/// is not suitable for a real deployment. The password is never serialized.

use serde::Serialize;

/// A registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename = "user")]
pub struct User {
    /// Unique, case-sensitive username
    pub username: String,

    /// Plaintext password, excluded from every representation
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    /// Builds a user record
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns true if both fields match exactly
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}
