//! Middleware for the HTTP API.

pub mod limits;
pub mod request_id;
