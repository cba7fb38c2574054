//! Note routes: create, feed, read, update, delete, favorite.
//!
//! Every mutation requires an identity and performs exactly one store
//! write. Ownership is checked before update and delete; favoriting is
//! open to any authenticated user and toggles membership atomically.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jot_core::Note;
use jot_store::NewNote;

use crate::error::{ApiError, ApiResult};
use crate::extract::OptionalIdentity;
use crate::state::AppState;

/// Default feed page size.
const DEFAULT_FEED_LIMIT: i64 = 10;

/// Largest accepted feed page size.
const MAX_FEED_LIMIT: i64 = 100;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    /// Content for the new note.
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    /// Replacement content.
    pub content: String,
}

/// Query parameters for GET /api/notes.
#[derive(Debug, Deserialize)]
pub struct FeedParams {
    /// Page size (default 10, capped at 100).
    #[serde(default)]
    pub limit: Option<i64>,
    /// Continue after this note id (exclusive).
    #[serde(default)]
    pub before: Option<Uuid>,
}

/// Response for GET /api/notes.
#[derive(Debug, Serialize)]
pub struct NoteFeedResponse {
    /// Notes, newest first.
    pub notes: Vec<Note>,
    /// Cursor to pass as `before` for the next page.
    pub cursor: Option<Uuid>,
    /// Whether another page exists.
    pub has_more: bool,
}

/// Response for DELETE /api/notes/{id}.
#[derive(Debug, Serialize)]
pub struct DeleteNoteResponse {
    /// Whether the note was deleted.
    pub deleted: bool,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/notes - Create a note owned by the caller.
async fn create_note(
    State(state): State<AppState>,
    identity: OptionalIdentity,
    Json(request): Json<CreateNoteRequest>,
) -> ApiResult<(StatusCode, Json<Note>)> {
    let author = identity.require()?;

    if request.content.trim().is_empty() {
        return Err(ApiError::BadRequest("content must not be empty".to_string()));
    }

    let row = state
        .store()
        .insert_note(&NewNote {
            content: request.content,
            author_id: *author.as_uuid(),
        })
        .await?;

    tracing::info!(note_id = %row.id, author = %author, "Note created");

    Ok((StatusCode::CREATED, Json(row.into_note())))
}

/// GET /api/notes - Note feed, newest first, cursor-paginated.
async fn note_feed(
    State(state): State<AppState>,
    Query(params): Query<FeedParams>,
) -> ApiResult<Json<NoteFeedResponse>> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_FEED_LIMIT)
        .clamp(1, MAX_FEED_LIMIT);

    // Fetch one extra row to learn whether another page exists.
    let mut rows = state.store().list_notes(limit + 1, params.before).await?;

    let has_more = rows.len() as i64 > limit;
    if has_more {
        rows.truncate(limit as usize);
    }

    let notes: Vec<Note> = rows.into_iter().map(|row| row.into_note()).collect();
    let cursor = if has_more {
        notes.last().map(|note| *note.id.as_uuid())
    } else {
        None
    };

    Ok(Json(NoteFeedResponse {
        notes,
        cursor,
        has_more,
    }))
}

/// GET /api/notes/{id} - Read a single note.
async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Note>> {
    let row = state
        .store()
        .get_note(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("note {}", id)))?;

    Ok(Json(row.into_note()))
}

/// PUT /api/notes/{id} - Replace a note's content (owner only).
async fn update_note(
    State(state): State<AppState>,
    identity: OptionalIdentity,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateNoteRequest>,
) -> ApiResult<Json<Note>> {
    let user = identity.require()?;

    if request.content.trim().is_empty() {
        return Err(ApiError::BadRequest("content must not be empty".to_string()));
    }

    let note = state
        .store()
        .get_note(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("note {}", id)))?;

    if note.author_id != *user.as_uuid() {
        return Err(ApiError::Forbidden(
            "you don't have permission to update this note".to_string(),
        ));
    }

    // A delete can win the race between the ownership check and the
    // write; that surfaces as NotFound.
    let updated = state
        .store()
        .update_note_content(id, &request.content)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("note {}", id)))?;

    tracing::info!(note_id = %id, author = %user, "Note updated");

    Ok(Json(updated.into_note()))
}

/// DELETE /api/notes/{id} - Delete a note (owner only).
///
/// Returns `{"deleted": true}` on success. A store-level delete failure
/// is reported as `{"deleted": false}` rather than an error; a missing
/// note is `NotFound`.
async fn delete_note(
    State(state): State<AppState>,
    identity: OptionalIdentity,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DeleteNoteResponse>> {
    let user = identity.require()?;

    let note = state
        .store()
        .get_note(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("note {}", id)))?;

    if note.author_id != *user.as_uuid() {
        return Err(ApiError::Forbidden(
            "you don't have permission to delete this note".to_string(),
        ));
    }

    let deleted = match state.store().delete_note(id).await {
        Ok(deleted) => deleted,
        Err(e) => {
            tracing::warn!(note_id = %id, error = %e, "Note deletion failed");
            false
        }
    };

    if deleted {
        tracing::info!(note_id = %id, author = %user, "Note deleted");
    }

    Ok(Json(DeleteNoteResponse { deleted }))
}

/// POST /api/notes/{id}/favorite - Toggle the caller in the favoriting set.
///
/// One atomic store update adds or removes the caller and moves the count
/// by exactly 1; toggling twice restores the original state.
async fn toggle_favorite(
    State(state): State<AppState>,
    identity: OptionalIdentity,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Note>> {
    let user = identity
        .0
        .ok_or_else(|| ApiError::Unauthenticated("you must be signed in to favorite a note".to_string()))?;

    let row = state
        .store()
        .toggle_favorite(id, *user.as_uuid())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("note {}", id)))?;

    tracing::info!(
        note_id = %id,
        user = %user,
        favorite_count = row.favorite_count,
        "Favorite toggled"
    );

    Ok(Json(row.into_note()))
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/notes", post(create_note).get(note_feed))
        .route("/api/notes/{id}", get(get_note).put(update_note).delete(delete_note))
        .route("/api/notes/{id}/favorite", post(toggle_favorite))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jot_core::{NoteId, UserId};

    #[test]
    fn test_create_note_request_deserialize() {
        let json = r#"{"content": "hello"}"#;
        let request: CreateNoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.content, "hello");
    }

    #[test]
    fn test_feed_params_defaults() {
        let params: FeedParams = serde_json::from_str("{}").unwrap();
        assert!(params.limit.is_none());
        assert!(params.before.is_none());
    }

    #[test]
    fn test_feed_limit_clamping() {
        assert_eq!(500i64.clamp(1, MAX_FEED_LIMIT), 100);
        assert_eq!(0i64.clamp(1, MAX_FEED_LIMIT), 1);
        assert_eq!((-3i64).clamp(1, MAX_FEED_LIMIT), 1);
    }

    #[test]
    fn test_feed_response_serialize() {
        let note = Note {
            id: NoteId::new(),
            content: "hello".to_string(),
            author: UserId::new(),
            favorite_count: 0,
            favorited_by: vec![],
            created: Utc::now(),
            updated: Utc::now(),
        };
        let cursor = *note.id.as_uuid();
        let response = NoteFeedResponse {
            notes: vec![note],
            cursor: Some(cursor),
            has_more: true,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"has_more\":true"));
        assert!(json.contains("cursor"));
    }

    #[test]
    fn test_delete_response_serialize() {
        let json = serde_json::to_string(&DeleteNoteResponse { deleted: false }).unwrap();
        assert_eq!(json, r#"{"deleted":false}"#);
    }
}
