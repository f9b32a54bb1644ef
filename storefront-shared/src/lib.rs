//! # Storefront Shared Library
//!
//! Domain types and storage used by the storefront API server.
//!
//! ## Module Organization
//!
//! - `models`: Article, user and product records
//! - `store`: In-memory article and user collections
//! - `catalog`: Product catalog port and its PostgreSQL adapter
//! - `db`: Connection pool management for the product database
//! - `auth`: Session gate and session token helpers

pub mod auth;
pub mod catalog;
pub mod db;
pub mod models;
pub mod store;

/// Current version of the storefront shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
