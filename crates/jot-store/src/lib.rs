//! jot-store: PostgreSQL storage layer for the jot note service
//!
//! This crate provides:
//! - Typed rows and inputs for the `users` and `notes` tables
//! - Migration management with an embedded, idempotent schema
//! - Type-safe database operations via sqlx, including the single-statement
//!   favorite toggle
//!
//! # Usage
//!
//! ```rust,ignore
//! use jot_store::{Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! // Insert a note
//! let row = store.insert_note(&new_note).await?;
//!
//! // Toggle a favorite
//! let updated = store.toggle_favorite(note_id, user_id).await?;
//! ```

pub mod error;
pub mod models;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::*;
pub use store::{Store, StoreConfig};

// Re-export jot-core for downstream crates
pub use jot_core;
