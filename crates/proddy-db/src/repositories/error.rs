//! Error handling utilities for repositories

use proddy_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a unique violation to `DuplicateRecord(table)`, anything else to a database error
pub fn map_unique_violation(e: SqlxError, table: &str) -> DomainError {
    match e.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => {
            DomainError::DuplicateRecord(table.to_string())
        }
        _ => map_db_error(e),
    }
}
