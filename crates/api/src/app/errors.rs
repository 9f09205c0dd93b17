use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use shopnum_core::DomainError;
use shopnum_infra::external::UpstreamError;

/// Everything a handler can fail with. Rendered as a plain-text body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Invalid request body")]
    InvalidRequestBody(#[source] serde_json::Error),

    #[error("Failed to fetch numbers from server")]
    UpstreamFetch(#[from] UpstreamError),

    #[error("Failed to process numbers")]
    Pipeline(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(DomainError::InvalidParameter(_)) => StatusCode::BAD_REQUEST,
            ApiError::Domain(DomainError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
            ApiError::UpstreamFetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Pipeline(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Transport details stay in the logs.
    pub fn message(&self) -> String {
        match self {
            ApiError::UpstreamFetch(UpstreamError::MissingNumbers) => {
                format!("{self}: {}", UpstreamError::MissingNumbers)
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::UpstreamFetch(cause) => tracing::warn!(%status, "upstream fetch failed: {cause}"),
            ApiError::InvalidRequestBody(cause) => tracing::debug!(%status, "rejected request body: {cause}"),
            ApiError::Domain(e) => tracing::debug!(%status, "request rejected: {e}"),
            ApiError::Pipeline(cause) => tracing::error!(%status, "numbers pipeline task failed: {cause}"),
        }
        text_error(status, self.message())
    }
}

pub fn text_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, message.into()).into_response()
}
