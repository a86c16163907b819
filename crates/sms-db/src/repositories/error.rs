//! Error handling utilities for repositories

use sms_core::entities::StatusParseError;
use sms_core::error::DomainError;
use sqlx::Error as SqlxError;
use uuid::Uuid;

/// Convert SQLx error to DomainError
///
/// Every transport or database failure is recoverable-and-reportable for
/// callers, never fatal to the process.
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::StoreUnavailable(e.to_string())
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
    }
    DomainError::StoreUnavailable(e.to_string())
}

/// Check for foreign key violation and return appropriate error or fallback
pub fn map_fk_violation<F>(e: SqlxError, on_fk: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_fk();
        }
    }
    DomainError::StoreUnavailable(e.to_string())
}

/// A persisted status column held a value the domain does not know
pub fn map_status_error(e: StatusParseError) -> DomainError {
    DomainError::StoreUnavailable(e.to_string())
}

/// Create a "group not found" error
pub fn group_not_found(id: Uuid) -> DomainError {
    DomainError::GroupNotFound(id)
}

/// Create a "member not found" error
pub fn member_not_found(id: Uuid) -> DomainError {
    DomainError::MemberNotFound(id)
}

/// Create a "partial write" error for an unconfirmed dispatch rollback
pub fn partial_write(message_id: Uuid) -> DomainError {
    DomainError::PartialWrite { message_id }
}
