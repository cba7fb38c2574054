//! jot-core: Core domain types for the jot note service
//!
//! This crate defines the types shared by the storage layer, the API
//! server, and the CLI:
//!
//! - [`NoteId`] and [`UserId`] typed identifiers
//! - [`Note`] and [`User`] domain records
//! - Email normalization and deterministic avatar derivation

pub mod avatar;
pub mod types;

pub use avatar::avatar_url;
pub use types::{Note, NoteId, User, UserId, normalize_email};
