//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use ringside_core::Error as CoreError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// No owner identity was attached to the request.
  #[error("unauthorized")]
  Unauthorized,

  #[error(transparent)]
  Core(#[from] CoreError),
}

impl ApiError {
  fn status(&self) -> StatusCode {
    match self {
      ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
      ApiError::Core(e) => match e {
        CoreError::Validation(_) | CoreError::HistoryIndexOutOfRange { .. } => {
          StatusCode::BAD_REQUEST
        }
        CoreError::NotFound { .. } | CoreError::MatchNotFound { .. } => {
          StatusCode::NOT_FOUND
        }
        CoreError::InvalidDateRange { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        CoreError::Persistence(_) | CoreError::Serialization(_) => {
          StatusCode::INTERNAL_SERVER_ERROR
        }
      },
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      tracing::error!(error = %self, "request failed");
    }
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
