//! Schema definitions and migration utilities.
//!
//! The schema is embedded at compile time and applied idempotently on
//! connect; every statement guards against existing objects.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// Embedded migration SQL for the core schema (001_schema.sql).
pub const SCHEMA_MIGRATION: &str = include_str!("../../../migrations/001_schema.sql");

/// Run all pending migrations against the database.
///
/// This function is idempotent - it can be run multiple times safely.
///
/// # Errors
///
/// Returns an error if any migration fails to execute.
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("Running database migrations...");

    sqlx::raw_sql(SCHEMA_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::Migration(format!("Schema migration failed: {}", e)))?;

    tracing::info!("Migrations completed successfully");
    Ok(())
}

/// Check if the schema has been initialized.
///
/// Returns true if the `notes` table exists.
pub async fn is_schema_initialized(pool: &PgPool) -> StoreResult<bool> {
    let result: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = 'public'
            AND table_name = 'notes'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_migration_embedded() {
        // Verify the migration SQL is properly embedded
        assert!(SCHEMA_MIGRATION.contains("CREATE TABLE IF NOT EXISTS users"));
        assert!(SCHEMA_MIGRATION.contains("CREATE TABLE IF NOT EXISTS notes"));
    }

    #[test]
    fn test_schema_migration_unique_constraints() {
        assert!(SCHEMA_MIGRATION.contains("users_username_unique"));
        assert!(SCHEMA_MIGRATION.contains("users_email_unique"));
    }

    #[test]
    fn test_schema_migration_favorite_invariant() {
        // The count-equals-cardinality check is what keeps favorite_count
        // and favorited_by from drifting under any write path.
        assert!(SCHEMA_MIGRATION.contains("notes_favorite_count_matches_set"));
        assert!(SCHEMA_MIGRATION.contains("favorite_count = cardinality(favorited_by)"));
        assert!(SCHEMA_MIGRATION.contains("notes_favorite_count_nonnegative"));
    }

    #[test]
    fn test_schema_migration_content_nonempty() {
        assert!(SCHEMA_MIGRATION.contains("notes_content_nonempty"));
    }
}
