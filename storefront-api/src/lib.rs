//! # Storefront API Server Library
//!
//! This library provides the HTTP layer of the storefront.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `middleware`: Security headers, session extraction and route gates
//! - `negotiate`: HTML/JSON/XML content negotiation
//! - `pages`: HTML page rendering
//! - `routes`: Route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod negotiate;
pub mod pages;
pub mod routes;
