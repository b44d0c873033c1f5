//! Error handling utilities for repositories

use leo_core::error::DomainError;
use sqlx::Error as SqlxError;
use uuid::Uuid;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for a foreign key violation and return the given error, or fall back
pub fn map_foreign_key_violation<F>(e: SqlxError, on_violation: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_violation();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "project not found" error
pub fn project_not_found(id: Uuid) -> DomainError {
    DomainError::ProjectNotFound(id)
}

/// Create an "achievement not found" error
pub fn achievement_not_found(id: Uuid) -> DomainError {
    DomainError::AchievementNotFound(id)
}

/// Create an "application not found" error
pub fn application_not_found(id: Uuid) -> DomainError {
    DomainError::ApplicationNotFound(id)
}
