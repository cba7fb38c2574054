//! jot-server: HTTP API server for the jot note service
//!
//! This crate provides:
//! - Account endpoints (signup, signin, me) returning signed credentials
//! - Note endpoints (create, feed, read, update, delete, favorite)
//! - Bearer-token identity resolution for every request
//! - Request body limits and JSON error responses
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//! - Body depth/cost guarding
//!
//! Handlers are request-scoped and stateless between requests; the only
//! shared resources are the connection pool and configuration held in
//! [`AppState`].

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use jot_core;
pub use jot_store;
