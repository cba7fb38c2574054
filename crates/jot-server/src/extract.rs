//! Identity resolution from the request's bearer credential.
//!
//! Every request resolves to either an authenticated [`UserId`] or an
//! anonymous context. A missing `Authorization` header is not an error;
//! registration and sign-in run anonymously. A header that is present but
//! does not verify aborts the request with `InvalidSession` before any
//! handler runs.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use jot_core::UserId;

use crate::auth;
use crate::error::ApiError;
use crate::state::AppState;

/// The request's resolved identity: a verified user id, or none.
///
/// Handlers that require identity call [`OptionalIdentity::require`],
/// which maps the anonymous case to `Unauthenticated`.
#[derive(Debug, Clone, Copy)]
pub struct OptionalIdentity(pub Option<UserId>);

impl OptionalIdentity {
    /// Return the identity, or fail with `Unauthenticated`.
    pub fn require(self) -> Result<UserId, ApiError> {
        self.0.ok_or_else(|| {
            ApiError::Unauthenticated("you must be signed in to perform this action".to_string())
        })
    }
}

impl FromRequestParts<AppState> for OptionalIdentity {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(auth_header) = parts.headers.get(header::AUTHORIZATION) else {
            return Ok(Self(None));
        };

        let auth_str = auth_header.to_str().map_err(|_| {
            ApiError::InvalidSession("Authorization header contains invalid characters".to_string())
        })?;

        let token = auth_str.strip_prefix("Bearer ").ok_or_else(|| {
            ApiError::InvalidSession("Authorization header must be Bearer <token>".to_string())
        })?;

        let claims = auth::validate_token(token.trim(), &state.config().jwt_secret)?;

        Ok(Self(Some(UserId::from_uuid(claims.sub))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_with_identity() {
        let id = UserId::new();
        let identity = OptionalIdentity(Some(id));
        assert_eq!(identity.require().unwrap(), id);
    }

    #[test]
    fn test_require_anonymous_is_unauthenticated() {
        let identity = OptionalIdentity(None);
        let err = identity.require().unwrap_err();
        assert!(matches!(err, ApiError::Unauthenticated(_)));
        // The message is populated
        assert!(err.to_string().contains("signed in"));
    }
}
