/// Authentication primitives
///
/// # Modules
///
/// - [`gate`]: Allow/deny decisions over the session indicator
/// - [`session`]: Session cookie name and token generation
///
/// # Security
///
/// Authentication is deliberately minimal: passwords are compared in
/// plaintext and the session cookie is trusted by presence alone. Do not
/// reuse this scheme outside the demo store.

pub mod gate;
pub mod session;
