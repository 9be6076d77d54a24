/*
    errors.rs - Unified registry error taxonomy

    Every caller-visible failure of the registry maps to one variant
    here. All of them are recoverable at the request boundary; none
    should ever take the process down.
*/

use crate::core_filter::errors::FilterError;
use crate::core_store::errors::StoreError;
use thiserror::Error;

/// Errors surfaced by registry operations
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Submitted input had the wrong shape (missing or non-string value,
    /// absent query parameter)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A record for the same exact string already exists
    #[error("String already exists with id {0}")]
    AlreadyExists(String),

    /// Neither re-hashing the target nor treating it as an id found a record
    #[error("String not found: {0}")]
    NotFound(String),

    /// A structured filter parameter failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] FilterError),

    /// No phrase template matched the natural-language query
    #[error("Could not parse query: {0:?}")]
    UnparsableQuery(String),

    /// A template matched but produced contradictory filter values
    #[error("Query produced conflicting filters: {0:?}")]
    ConflictingQuery(String),

    /// The persistence layer failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
