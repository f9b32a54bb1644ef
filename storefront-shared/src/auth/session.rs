/// Session cookie helpers
///
/// The session indicator is a single cookie named [`SESSION_COOKIE`]. Its
/// value is an opaque random string that nothing ever reads back.

use uuid::Uuid;

/// Name of the cookie whose presence marks a logged-in visitor
pub const SESSION_COOKIE: &str = "token";

/// Generates a fresh session token
pub fn generate_session_token() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique() {
        let first = generate_session_token();
        let second = generate_session_token();

        assert_eq!(first.len(), 32);
        assert_ne!(first, second);
    }
}
