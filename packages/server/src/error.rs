//! Error taxonomy for the CRUD service and its HTTP mapping.
//!
//! Every failed request is answered with a `{message, error?}` JSON body. The
//! message passes through verbatim; the `error` detail is only populated for
//! unexpected (500) failures.

use api::ErrorBody;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Duplicate email on create or update.
    #[error("User already exists")]
    Conflict,

    /// Unknown id, or a field query that matched nothing.
    #[error("User not found")]
    NotFound,

    /// A required field was missing or empty.
    #[error("{0}")]
    Invalid(String),

    /// Store or connectivity failure.
    #[error("Server Error")]
    Unexpected(#[source] sqlx::Error),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => ApiError::Conflict,
            StoreError::Database(e) => ApiError::Unexpected(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::Conflict | ApiError::Invalid(_) => (StatusCode::BAD_REQUEST, None),
            ApiError::NotFound => (StatusCode::NOT_FOUND, None),
            ApiError::Unexpected(source) => {
                tracing::error!("request failed: {source}");
                (StatusCode::INTERNAL_SERVER_ERROR, Some(source.to_string()))
            }
        };

        let body = ErrorBody {
            message: self.to_string(),
            error: detail,
        };
        (status, Json(body)).into_response()
    }
}
