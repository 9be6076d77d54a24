//! API error type and HTTP status mapping

use crate::types::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use stringvault_core::{FilterError, RegistryError};
use tracing::error;

/// Custom error type for API responses
pub struct ApiError(RegistryError);

impl ApiError {
    /// Invalid request shape detected at the HTTP boundary
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiError(RegistryError::InvalidInput(message.into()))
    }

    fn status_code(&self) -> StatusCode {
        match &self.0 {
            RegistryError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            RegistryError::Validation(_) => StatusCode::BAD_REQUEST,
            RegistryError::NotFound(_) => StatusCode::NOT_FOUND,
            RegistryError::AlreadyExists(_) => StatusCode::CONFLICT,
            RegistryError::UnparsableQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RegistryError::ConflictingQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RegistryError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }

        let error_response = ErrorResponse {
            error: self.0.to_string(),
            details: None,
        };
        (status, Json(error_response)).into_response()
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        ApiError(err)
    }
}

impl From<FilterError> for ApiError {
    fn from(err: FilterError) -> Self {
        ApiError(RegistryError::Validation(err))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
