/*
    errors.rs - Error types for the filter subsystem
*/

use thiserror::Error;

/// Errors raised while turning raw parameters into a filter set
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// A parameter value could not be interpreted
    #[error("Invalid value for {field}: {reason}")]
    InvalidParameter {
        field: &'static str,
        reason: String,
    },

    /// Length bounds that no string can satisfy
    #[error("Empty length range: min_length {min} exceeds max_length {max}")]
    EmptyRange { min: usize, max: usize },
}

pub type FilterResult<T> = Result<T, FilterError>;
