/// Middleware modules for the API server
///
/// - `security`: Security response headers
/// - `session`: Session extraction and the authenticated/anonymous route gates

pub mod security;
pub mod session;
