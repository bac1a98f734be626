//! HTTP-facing error type for the todo API.
//!
//! Both failure kinds carry a fixed human-readable message that is
//! rendered as a `{"message": ...}` JSON body, which is the shape
//! clients parse for the delete confirmation as well.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Errors a handler can return to the client.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The referenced todo id does not exist. Rendered as 404.
    #[error("Todo not found")]
    NotFound,

    /// Create was called with an empty title. Rejected with 400 before
    /// the store is touched.
    #[error("title must not be empty")]
    EmptyTitle,
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::EmptyTitle => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
