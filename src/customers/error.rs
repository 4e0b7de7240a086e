//! Request-level error taxonomy for the customer API.
//!
//! Every variant maps to exactly one status code. Bodies are short plain
//! messages, or empty where clients get nothing but the status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::customers::model::CustomerId;
use crate::customers::store::StoreError;

/// Errors a customer handler can answer with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The `{id}` path segment is absent.
    #[error("Missing 'id' parameter in the URL")]
    MissingId,

    /// The `{id}` path segment does not decode to an integer.
    #[error("Invalid 'id' parameter: {0}")]
    InvalidId(String),

    /// The request body could not be read or is not valid JSON for the shape.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Customer with ID {0} not found")]
    NotFound(CustomerId),

    #[error("Customer with ID {0} already exists")]
    DuplicateId(CustomerId),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingId | ApiError::InvalidId(_) | ApiError::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::DuplicateId(_) => StatusCode::CONFLICT,
        }
    }
}

impl From<std::num::ParseIntError> for ApiError {
    fn from(err: std::num::ParseIntError) -> Self {
        ApiError::InvalidId(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(id),
            StoreError::DuplicateId(id) => ApiError::DuplicateId(id),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = %status, error = %self, "Customer request rejected");

        match self {
            // Body and conflict failures carry no message
            ApiError::MalformedBody(_) | ApiError::DuplicateId(_) => status.into_response(),
            other => (status, other.to_string()).into_response(),
        }
    }
}
