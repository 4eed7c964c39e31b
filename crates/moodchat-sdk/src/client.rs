//! HTTP client for the chat endpoint.
//!
//! [`ChatClient`] issues exactly one `POST /api/chat/` per call. It performs
//! no retries, no timeout beyond reqwest's defaults and no de-duplication:
//! concurrent calls are independent requests.

use moodchat_models::{OutgoingMessage, CHAT_ENDPOINT_PATH};
use tracing::debug;

use crate::error::SdkError;
use crate::reply::ChatReply;

/// Environment variable holding the server base URL.
pub const BASE_URL_ENV: &str = "MOODCHAT_URL";

/// Base URL used when [`BASE_URL_ENV`] is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Client bound to one chat server.
#[derive(Clone, Debug)]
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ChatClient {
    /// Create a client for the server at `base_url`
    /// (e.g. `http://localhost:8000`).
    pub fn new(base_url: &str) -> Result<Self, SdkError> {
        let base = base_url.trim().trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(SdkError::Config(format!(
                "base URL must start with http:// or https://, got \"{base_url}\""
            )));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: format!("{base}{CHAT_ENDPOINT_PATH}"),
        })
    }

    /// Create a client from the `MOODCHAT_URL` environment variable,
    /// defaulting to `http://localhost:8000`.
    pub fn from_env() -> Result<Self, SdkError> {
        let base = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base)
    }

    /// Full URL of the chat endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post a message and decode the reply.
    ///
    /// The body is sent as `application/json`. A non-success status is
    /// reported as [`SdkError::Status`]; a body that is not JSON as
    /// [`SdkError::Serialization`]. Only `response` is read; a JSON body
    /// without it decodes fine and renders as the placeholder.
    pub async fn send(&self, msg: &OutgoingMessage) -> Result<ChatReply, SdkError> {
        debug!(endpoint = %self.endpoint, emotion = %msg.emotion, "posting chat message");

        let res = self.http.post(&self.endpoint).json(msg).send().await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(SdkError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = res.bytes().await?;
        let body: serde_json::Value = serde_json::from_slice(&bytes)?;
        ChatReply::from_body(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Arc, Mutex};

    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use moodchat_models::UNRESOLVED_PLACEHOLDER;

    /// Serve `app` on an ephemeral local port and return its base URL.
    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn new_rejects_non_http_url() {
        let err = ChatClient::new("ftp://example.com").unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }

    #[test]
    fn endpoint_appends_chat_path() {
        let client = ChatClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8000/api/chat/");
    }

    #[tokio::test]
    async fn send_posts_exact_json_body() {
        let seen: Arc<Mutex<Option<(String, String)>>> = Arc::new(Mutex::new(None));
        let captured = seen.clone();
        let app = Router::new().route(
            "/api/chat/",
            post(move |headers: HeaderMap, body: String| {
                let captured = captured.clone();
                async move {
                    let content_type = headers
                        .get("content-type")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    *captured.lock().unwrap() = Some((content_type, body));
                    r#"{"response":"hi there"}"#
                }
            }),
        );
        let client = ChatClient::new(&serve(app).await).unwrap();

        let reply = client.send(&OutgoingMessage::new("hello", "happy")).await.unwrap();
        assert_eq!(reply.reply_text(), "hi there");

        let (content_type, body) = seen.lock().unwrap().clone().unwrap();
        assert_eq!(content_type, "application/json");
        assert_eq!(body, r#"{"message":"hello","emotion":"happy"}"#);
    }

    #[tokio::test]
    async fn send_missing_response_field_decodes() {
        let app = Router::new().route("/api/chat/", post(|| async { r#"{"other":1}"# }));
        let client = ChatClient::new(&serve(app).await).unwrap();

        let reply = client.send(&OutgoingMessage::new("hello", "sad")).await.unwrap();
        assert_eq!(reply.reply_text(), UNRESOLVED_PLACEHOLDER);
    }

    #[tokio::test]
    async fn send_ignores_diagnostic_fields_of_any_type() {
        let app = Router::new().route(
            "/api/chat/",
            post(|| async { r#"{"response":"hi there","reason":42}"# }),
        );
        let client = ChatClient::new(&serve(app).await).unwrap();

        let reply = client.send(&OutgoingMessage::new("hello", "happy")).await.unwrap();
        assert_eq!(reply.reply_text(), "hi there");
    }

    #[tokio::test]
    async fn send_non_success_status_is_error() {
        let app = Router::new().route(
            "/api/chat/",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let client = ChatClient::new(&serve(app).await).unwrap();

        let err = client.send(&OutgoingMessage::new("hello", "sad")).await.unwrap_err();
        match err {
            SdkError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn send_malformed_json_is_error() {
        let app = Router::new().route("/api/chat/", post(|| async { "not json" }));
        let client = ChatClient::new(&serve(app).await).unwrap();

        let err = client.send(&OutgoingMessage::new("hello", "sad")).await.unwrap_err();
        assert!(matches!(err, SdkError::Serialization(_)));
    }

    #[tokio::test]
    async fn send_unreachable_server_is_http_error() {
        // Bind then drop to obtain a port nobody listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ChatClient::new(&format!("http://{addr}")).unwrap();
        let err = client.send(&OutgoingMessage::new("hello", "sad")).await.unwrap_err();
        assert!(matches!(err, SdkError::Http(_)));
    }
}
