//! Error types for the chat service.
//!
//! [`ChatError`] unifies all failure modes and implements [`IntoResponse`]
//! so handlers can return `Result<…, ChatError>` directly.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Errors that can occur while serving a chat request.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The message was empty after trimming.
    #[error("message must not be empty")]
    EmptyMessage,

    /// No session with this id exists.
    #[error("session {0} not found")]
    SessionNotFound(u64),

    /// The LLM endpoint answered with an error or an unexpected body.
    #[error("language model error: {0}")]
    Upstream(String),

    /// The HTTP call to the LLM failed at the transport level.
    #[error("failed to reach language model: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON (de)serialisation error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::EmptyMessage => StatusCode::BAD_REQUEST,
            Self::SessionNotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) | Self::HttpError(_) => StatusCode::BAD_GATEWAY,
            Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = self.to_string();

        tracing::error!(%status, error = %message, "request failed");
        (status, Json(json!({ "error": message }))).into_response()
    }
}
