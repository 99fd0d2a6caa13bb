//! Store error types

use estate_core::ServiceError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DbError {
    #[error("Unique constraint violated on {table}.{field}: {value}")]
    UniqueViolation {
        table: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type DbResult<T> = Result<T, DbError>;

impl From<DbError> for ServiceError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation { table, field, .. } => {
                ServiceError::Duplicate(format!("{}.{} already exists", table, field))
            }
            DbError::NotFound(msg) => ServiceError::NotFound(msg),
            DbError::Storage(msg) => ServiceError::Storage(msg),
        }
    }
}
