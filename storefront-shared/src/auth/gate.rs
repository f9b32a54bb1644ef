/// Access-control gate
///
/// A binary allow/deny decision over the session indicator. The indicator
/// is the presence of the session cookie; its value is never inspected,
/// validated or expired.
///
/// # Example
///
/// ```
/// use storefront_shared::auth::gate::{require_anonymous, require_authenticated, SessionStatus};
///
/// let status = SessionStatus::from_token(Some("anything"));
/// assert!(require_authenticated(status).is_ok());
/// assert!(require_anonymous(status).is_err());
/// ```

use serde::Serialize;

/// Whether a request carries the session indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// The session cookie is present
    Authenticated,

    /// The session cookie is absent
    Anonymous,
}

impl SessionStatus {
    /// Derives the status from an optional cookie value
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(_) => SessionStatus::Authenticated,
            None => SessionStatus::Anonymous,
        }
    }

    /// Returns true for [`SessionStatus::Authenticated`]
    pub fn is_logged_in(self) -> bool {
        self == SessionStatus::Authenticated
    }
}

/// Gate denial
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccessDenied {
    /// The route requires a session
    #[error("You must be logged in to access this page")]
    NotAuthenticated,

    /// The route is only for visitors without a session
    #[error("You are already logged in")]
    AlreadyAuthenticated,
}

/// Allows the request only when the session indicator is present
///
/// # Errors
///
/// Returns [`AccessDenied::NotAuthenticated`] for anonymous requests.
pub fn require_authenticated(status: SessionStatus) -> Result<(), AccessDenied> {
    match status {
        SessionStatus::Authenticated => Ok(()),
        SessionStatus::Anonymous => Err(AccessDenied::NotAuthenticated),
    }
}

/// Allows the request only when the session indicator is absent
///
/// # Errors
///
/// Returns [`AccessDenied::AlreadyAuthenticated`] for requests with a session.
pub fn require_anonymous(status: SessionStatus) -> Result<(), AccessDenied> {
    match status {
        SessionStatus::Anonymous => Ok(()),
        SessionStatus::Authenticated => Err(AccessDenied::AlreadyAuthenticated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_alone_authenticates() {
        assert_eq!(SessionStatus::from_token(Some("123")), SessionStatus::Authenticated);
        assert_eq!(SessionStatus::from_token(Some("")), SessionStatus::Authenticated);
        assert_eq!(SessionStatus::from_token(None), SessionStatus::Anonymous);
    }

    #[test]
    fn test_require_authenticated() {
        assert!(require_authenticated(SessionStatus::Authenticated).is_ok());
        assert_eq!(
            require_authenticated(SessionStatus::Anonymous),
            Err(AccessDenied::NotAuthenticated)
        );
    }

    #[test]
    fn test_require_anonymous() {
        assert!(require_anonymous(SessionStatus::Anonymous).is_ok());
        assert_eq!(
            require_anonymous(SessionStatus::Authenticated),
            Err(AccessDenied::AlreadyAuthenticated)
        );
    }
}
