//! API error types with JSON responses.
//!
//! The taxonomy mirrors what each guarded operation can fail with:
//! missing identity, invalid credential, failed sign-in, failed
//! registration, non-owner mutation, and absent resources. Every variant
//! is terminal for its operation and surfaces as a typed JSON error.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No identity on a request that requires one (401).
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    /// A bearer credential was presented but is malformed, expired, or
    /// carries a bad signature (401).
    #[error("invalid session: {0}")]
    InvalidSession(String),

    /// Sign-in credential mismatch (401). The message never reveals
    /// whether the account exists.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Identity present but not the resource owner (403).
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Referenced resource absent (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Registration could not be persisted (400). The underlying
    /// constraint violation is not surfaced to the caller.
    #[error("account creation failed: {0}")]
    AccountCreationFailed(String),

    /// Bad request (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    Internal(String),

    /// Store error.
    #[error("storage error: {0}")]
    Store(#[from] jot_store::StoreError),
}

impl ApiError {
    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated(_) => "UNAUTHENTICATED",
            Self::InvalidSession(_) => "INVALID_SESSION",
            Self::AuthenticationFailed(_) => "AUTHENTICATION_FAILED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::AccountCreationFailed(_) => "ACCOUNT_CREATION_FAILED",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Store(_) => "STORAGE_ERROR",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::InvalidSession(_) => StatusCode::UNAUTHORIZED,
            Self::AuthenticationFailed(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AccountCreationFailed(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(e) => match e {
                // Handlers convert duplicate-account errors before they
                // reach here; this mapping is for any path that doesn't.
                jot_store::StoreError::DuplicateAccount(_) => StatusCode::CONFLICT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error details.
    pub error: ErrorDetails,
}

/// Error details within the response.
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    /// Error code (e.g., "NOT_FOUND", "FORBIDDEN").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_follow_taxonomy() {
        assert_eq!(
            ApiError::Unauthenticated("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::InvalidSession("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::AuthenticationFailed("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Forbidden("x".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::AccountCreationFailed("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            ApiError::Unauthenticated("x".into()),
            ApiError::InvalidSession("x".into()),
            ApiError::AuthenticationFailed("x".into()),
            ApiError::Forbidden("x".into()),
            ApiError::NotFound("x".into()),
            ApiError::AccountCreationFailed("x".into()),
            ApiError::BadRequest("x".into()),
            ApiError::Internal("x".into()),
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_error_response_body_shape() {
        let err = ApiError::NotFound("note abc".into());
        let body = ErrorResponse {
            error: ErrorDetails {
                code: err.code().to_string(),
                message: err.to_string(),
            },
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"code\":\"NOT_FOUND\""));
        assert!(json.contains("note abc"));
    }
}
