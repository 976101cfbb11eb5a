//! Error handling utilities for repositories

use social_core::error::DomainError;
use social_core::value_objects::Id;
use sqlx::Error as SqlxError;

/// SQLSTATE raised when a serializable transaction loses to a concurrent one
const SERIALIZATION_FAILURE: &str = "40001";

/// SQLSTATE raised when Postgres breaks a lock cycle
const DEADLOCK_DETECTED: &str = "40P01";

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::Store(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
        if db_err.is_foreign_key_violation() {
            return DomainError::UserNotFound("referenced user does not exist".to_string());
        }
        // The only check constraints on relation tables forbid self edges
        if db_err.is_check_violation() {
            return DomainError::ValidationError(
                "A user cannot be related to themselves".to_string(),
            );
        }
    }
    DomainError::Store(e.to_string())
}

/// Whether the transaction was aborted because a concurrent one won
pub fn is_serialization_failure(e: &SqlxError) -> bool {
    e.as_database_error()
        .and_then(|db_err| db_err.code())
        .is_some_and(|code| code == SERIALIZATION_FAILURE || code == DEADLOCK_DETECTED)
}

/// Create a "friend request not found" error
pub fn request_not_found(id: Id) -> DomainError {
    DomainError::RequestNotFound(id)
}
