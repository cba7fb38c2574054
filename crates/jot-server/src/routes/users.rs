//! User routes: public profiles and per-user notes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::Serialize;

use jot_core::{Note, User};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Page size for a user's note listing.
const USER_NOTES_LIMIT: i64 = 100;

/// Response for GET /api/users/{username}/notes.
#[derive(Debug, Serialize)]
pub struct UserNotesResponse {
    /// The user's notes, newest first.
    pub notes: Vec<Note>,
}

/// GET /api/users/{username} - Public profile.
async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<User>> {
    let user = state
        .store()
        .get_user_by_username(&username)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("user {}", username)))?;

    Ok(Json(user.into_user()))
}

/// GET /api/users/{username}/notes - A user's notes, newest first.
async fn user_notes(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<UserNotesResponse>> {
    let user = state
        .store()
        .get_user_by_username(&username)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("user {}", username)))?;

    let rows = state
        .store()
        .list_notes_by_author(user.id, USER_NOTES_LIMIT)
        .await?;

    Ok(Json(UserNotesResponse {
        notes: rows.into_iter().map(|row| row.into_note()).collect(),
    }))
}

/// Build user routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/users/{username}", get(get_user))
        .route("/api/users/{username}/notes", get(user_notes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jot_core::{NoteId, UserId};

    #[test]
    fn test_user_notes_response_serialize() {
        let response = UserNotesResponse {
            notes: vec![Note {
                id: NoteId::new(),
                content: "mine".to_string(),
                author: UserId::new(),
                favorite_count: 1,
                favorited_by: vec![UserId::new()],
                created: Utc::now(),
                updated: Utc::now(),
            }],
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"favorite_count\":1"));
    }
}
