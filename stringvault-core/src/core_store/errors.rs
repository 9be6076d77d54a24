/*
    errors.rs - Error types for the store subsystem
*/

use thiserror::Error;

/// Errors that can occur in the store subsystem
#[derive(Debug, Error)]
pub enum StoreError {
    /// Snapshot could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Record collection could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Insert would silently replace an existing record
    #[error("Record already exists: {0}")]
    AlreadyExists(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
