/// HTTP route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `articles`: Article list, view and creation
/// - `products`: Product catalog
/// - `users`: Login, logout and registration
/// - `health`: Health check endpoint

pub mod articles;
pub mod health;
pub mod products;
pub mod users;
