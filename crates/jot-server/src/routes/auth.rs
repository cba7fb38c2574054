//! Account routes: signup, signin, me.
//!
//! Registration and sign-in run anonymously and return a signed
//! credential. Sign-in failures are enumeration-safe: an unknown account
//! and a wrong password produce byte-identical errors.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jot_core::{User, avatar_url, normalize_email};
use jot_store::NewUser;

use crate::auth;
use crate::error::{ApiError, ApiResult};
use crate::extract::OptionalIdentity;
use crate::state::AppState;

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 8;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub password: String,
}

/// Signed credential returned by signup and signin.
#[derive(Debug, Serialize)]
pub struct CredentialResponse {
    pub token: String,
    pub user_id: Uuid,
    pub username: String,
    pub expires_in_hours: u64,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/auth/signup
///
/// Normalizes the email, hashes the password, derives the avatar, and
/// persists the user. Any persistence failure (including a taken
/// username or email) surfaces as the same generic
/// `ACCOUNT_CREATION_FAILED`; the violated constraint is only logged.
async fn sign_up(
    State(state): State<AppState>,
    Json(request): Json<SignUpRequest>,
) -> ApiResult<(StatusCode, Json<CredentialResponse>)> {
    if request.username.trim().is_empty() {
        return Err(ApiError::BadRequest("username must not be empty".to_string()));
    }
    if request.password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::BadRequest(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    let email = normalize_email(&request.email);
    if email.is_empty() {
        return Err(ApiError::BadRequest("email must not be empty".to_string()));
    }

    let password_hash = auth::hash_password(&request.password)?;
    let avatar = avatar_url(&email);

    let new_user = NewUser {
        username: request.username,
        email,
        password_hash,
        avatar,
    };

    let user = match state.store().insert_user(&new_user).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(username = %new_user.username, error = %e, "Account creation failed");
            return Err(ApiError::AccountCreationFailed(
                "could not create account".to_string(),
            ));
        }
    };

    let config = state.config();
    let token = auth::create_token(user.id, &config.jwt_secret, config.jwt_expiry_hours)?;

    tracing::info!(user_id = %user.id, username = %user.username, "Account created");

    Ok((
        StatusCode::CREATED,
        Json(CredentialResponse {
            token,
            user_id: user.id,
            username: user.username,
            expires_in_hours: config.jwt_expiry_hours,
        }),
    ))
}

/// POST /api/auth/signin
///
/// Looks the account up by username or normalized email; at least one
/// must be given. Unknown account and wrong password both fail with the
/// same `AUTHENTICATION_FAILED` error.
async fn sign_in(
    State(state): State<AppState>,
    Json(request): Json<SignInRequest>,
) -> ApiResult<Json<CredentialResponse>> {
    if request.username.is_none() && request.email.is_none() {
        return Err(ApiError::BadRequest(
            "username or email is required".to_string(),
        ));
    }

    let email = request.email.as_deref().map(normalize_email);

    let user = state
        .store()
        .find_user_by_login(request.username.as_deref(), email.as_deref())
        .await?
        .ok_or_else(|| ApiError::AuthenticationFailed("invalid credentials".to_string()))?;

    let valid = auth::verify_password(&request.password, &user.password_hash)?;
    if !valid {
        return Err(ApiError::AuthenticationFailed(
            "invalid credentials".to_string(),
        ));
    }

    let config = state.config();
    let token = auth::create_token(user.id, &config.jwt_secret, config.jwt_expiry_hours)?;

    tracing::info!(user_id = %user.id, username = %user.username, "User signed in");

    Ok(Json(CredentialResponse {
        token,
        user_id: user.id,
        username: user.username,
        expires_in_hours: config.jwt_expiry_hours,
    }))
}

/// GET /api/auth/me - current user's public profile.
async fn me(State(state): State<AppState>, identity: OptionalIdentity) -> ApiResult<Json<User>> {
    let user_id = identity.require()?;

    let user = state
        .store()
        .get_user_by_id(*user_id.as_uuid())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("user {}", user_id)))?;

    Ok(Json(user.into_user()))
}

/// Build account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/signup", post(sign_up))
        .route("/api/auth/signin", post(sign_in))
        .route("/api/auth/me", get(me))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_request_deserialize() {
        let json = r#"{"username": "ada", "email": "Ada@Example.com", "password": "hunter2222"}"#;
        let request: SignUpRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.username, "ada");
        assert_eq!(request.email, "Ada@Example.com");
    }

    #[test]
    fn test_sign_in_request_username_only() {
        let json = r#"{"username": "ada", "password": "hunter2222"}"#;
        let request: SignInRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.username.as_deref(), Some("ada"));
        assert!(request.email.is_none());
    }

    #[test]
    fn test_sign_in_request_email_only() {
        let json = r#"{"email": "ada@example.com", "password": "hunter2222"}"#;
        let request: SignInRequest = serde_json::from_str(json).unwrap();
        assert!(request.username.is_none());
        assert_eq!(request.email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn test_credential_response_serialize() {
        let response = CredentialResponse {
            token: "jwt.token.here".to_string(),
            user_id: Uuid::nil(),
            username: "ada".to_string(),
            expires_in_hours: 24,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("token"));
        assert!(json.contains("user_id"));
        assert!(json.contains("expires_in_hours"));
    }
}
