//! Core data types for the jot note service.
//!
//! Identifiers are UUID newtypes so a note id cannot be passed where a
//! user id is expected. [`Note`] and [`User`] are the canonical domain
//! records; database rows and API payloads convert to and from them.
//!
//! All types derive `Debug`, `Clone`, `Serialize`, and `Deserialize` for
//! inspection, copying, and JSON serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a note.
///
/// Wraps a UUID v4, providing type safety to distinguish note IDs from other
/// UUID-based identifiers in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub Uuid);

impl NoteId {
    /// Creates a new random NoteId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a NoteId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Unique identifier for a user account.
///
/// Wraps a UUID v4. This is the identity value carried by signed
/// credentials and compared against a note's author on every guarded
/// mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Creates a new random UserId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a UserId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ============================================================================
// Domain Records
// ============================================================================

/// A note: free-text content owned by its author.
///
/// `favorite_count` always equals the number of entries in `favorited_by`.
/// The favorite toggle in the storage layer is the only writer of either
/// field and mutates both in one statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Note ID.
    pub id: NoteId,
    /// Free-text content. Never empty.
    pub content: String,
    /// Owning user. Immutable after creation.
    pub author: UserId,
    /// Number of users who have favorited this note.
    pub favorite_count: i32,
    /// Users who have favorited this note. No duplicates.
    pub favorited_by: Vec<UserId>,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Timestamp of the most recent mutation.
    pub updated: DateTime<Utc>,
}

/// A user's public profile.
///
/// The password hash never leaves the storage layer; this type is what
/// API responses carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: UserId,
    /// Unique username.
    pub username: String,
    /// Unique normalized email address.
    pub email: String,
    /// Avatar URL derived from the normalized email.
    pub avatar: String,
    /// Account creation timestamp.
    pub created: DateTime<Utc>,
}

/// Normalize an email address for storage and lookup: trim surrounding
/// whitespace and lowercase.
#[must_use]
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_id_display_roundtrip() {
        let id = NoteId::new();
        let parsed: NoteId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_user_id_serde_transparent() {
        let id = UserId::from_uuid(Uuid::nil());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");
        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_note_serializes_favorite_fields() {
        let note = Note {
            id: NoteId::from_uuid(Uuid::nil()),
            content: "hello".to_string(),
            author: UserId::new(),
            favorite_count: 0,
            favorited_by: vec![],
            created: Utc::now(),
            updated: Utc::now(),
        };
        let json = serde_json::to_string(&note).unwrap();
        assert!(json.contains("favorite_count"));
        assert!(json.contains("favorited_by"));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Foo@Example.COM "), "foo@example.com");
        assert_eq!(normalize_email("bar@example.com"), "bar@example.com");
    }
}
