//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for sqlx
//! queries. They are separate from the domain types in jot-core; rows
//! convert into domain records at the API boundary, which is also where
//! the password hash is dropped from user data.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use jot_core::{Note, NoteId, User, UserId};

/// Database row for the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    /// Stored normalized (trimmed, lowercased).
    pub email: String,
    /// Argon2id PHC-format hash.
    pub password_hash: String,
    pub avatar: String,
    pub created: DateTime<Utc>,
}

impl UserRow {
    /// Convert into the public profile, dropping the password hash.
    pub fn into_user(self) -> User {
        User {
            id: UserId::from_uuid(self.id),
            username: self.username,
            email: self.email,
            avatar: self.avatar,
            created: self.created,
        }
    }
}

/// Database row for the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub content: String,
    pub author_id: Uuid,
    pub favorite_count: i32,
    pub favorited_by: Vec<Uuid>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl NoteRow {
    /// Convert into the domain record.
    pub fn into_note(self) -> Note {
        Note {
            id: NoteId::from_uuid(self.id),
            content: self.content,
            author: UserId::from_uuid(self.author_id),
            favorite_count: self.favorite_count,
            favorited_by: self
                .favorited_by
                .into_iter()
                .map(UserId::from_uuid)
                .collect(),
            created: self.created,
            updated: self.updated,
        }
    }
}

/// Input for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    /// Must already be normalized.
    pub email: String,
    pub password_hash: String,
    pub avatar: String,
}

/// Input for creating a new note.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub content: String,
    pub author_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_note_row() -> NoteRow {
        NoteRow {
            id: Uuid::new_v4(),
            content: "hello".to_string(),
            author_id: Uuid::new_v4(),
            favorite_count: 2,
            favorited_by: vec![Uuid::new_v4(), Uuid::new_v4()],
            created: Utc::now(),
            updated: Utc::now(),
        }
    }

    #[test]
    fn test_note_row_into_note() {
        let row = sample_note_row();
        let id = row.id;
        let author = row.author_id;
        let note = row.into_note();
        assert_eq!(note.id, NoteId::from_uuid(id));
        assert_eq!(note.author, UserId::from_uuid(author));
        assert_eq!(note.favorite_count as usize, note.favorited_by.len());
    }

    #[test]
    fn test_user_row_into_user_drops_hash() {
        let row = UserRow {
            id: Uuid::new_v4(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$argon2id$...".to_string(),
            avatar: "https://example.com/a.png".to_string(),
            created: Utc::now(),
        };
        let user = row.into_user();
        assert_eq!(user.username, "ada");
        // User has no password field; nothing further to assert beyond
        // the conversion compiling, which is the point.
        assert_eq!(user.email, "ada@example.com");
    }
}
