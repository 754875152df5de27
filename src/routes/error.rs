//! Error type returned by API handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::i18n::UnknownLanguage;

// ---

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("hive not found: {0}")]
    HiveNotFound(String),

    #[error(transparent)]
    UnknownLanguage(#[from] UnknownLanguage),
}

/// JSON body for error responses.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::HiveNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UnknownLanguage(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // ---
        tracing::debug!("Request failed: {}", self);
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
