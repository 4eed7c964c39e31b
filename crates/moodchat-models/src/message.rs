//! Request and response bodies of the chat endpoint.

use serde::{Deserialize, Serialize};

use crate::UNRESOLVED_PLACEHOLDER;

// ---------------------------------------------------------------------------
// OutgoingMessage
// ---------------------------------------------------------------------------

/// Body the widget posts to the chat endpoint.
///
/// The emotion is carried as the raw selector value so that what goes on the
/// wire is exactly what the user picked.
///
/// # Examples
///
/// ```
/// use moodchat_models::OutgoingMessage;
///
/// let msg = OutgoingMessage::new("hello", "happy");
/// assert_eq!(
///     serde_json::to_string(&msg).unwrap(),
///     r#"{"message":"hello","emotion":"happy"}"#
/// );
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    /// Trimmed user text.
    pub message: String,
    /// Selected emotion key.
    pub emotion: String,
}

impl OutgoingMessage {
    /// Build a message body.
    pub fn new(message: impl Into<String>, emotion: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            emotion: emotion.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// ChatRequest (server view)
// ---------------------------------------------------------------------------

/// Lenient server-side view of an incoming chat body.
///
/// Every field is optional on the wire; missing values take the defaults the
/// server applies (`""`, `"neutral"`, no style).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    /// User text (untrimmed as received).
    #[serde(default)]
    pub message: String,
    /// Emotion reported by the client.
    #[serde(default = "default_emotion")]
    pub emotion: String,
    /// Optional reply style key.
    #[serde(default)]
    pub style: Option<String>,
}

fn default_emotion() -> String {
    "neutral".to_string()
}

impl From<OutgoingMessage> for ChatRequest {
    fn from(msg: OutgoingMessage) -> Self {
        Self {
            message: msg.message,
            emotion: msg.emotion,
            style: None,
        }
    }
}

// ---------------------------------------------------------------------------
// ChatResponse
// ---------------------------------------------------------------------------

/// Body returned by the chat endpoint.
///
/// Only `response` is consumed by the widget; the remaining fields are
/// diagnostics filled in by the server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatResponse {
    /// Assistant reply text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    /// Normalised emotion the client reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_emotion: Option<String>,
    /// Emotion inferred from the message text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_emotion: Option<String>,
    /// Why the text emotion was chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Detected language of the message (`"zh"`, `"en"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl ChatResponse {
    /// A response carrying only reply text.
    pub fn reply(text: impl Into<String>) -> Self {
        Self {
            response: Some(text.into()),
            ..Self::default()
        }
    }

    /// Text to render for this reply, or [`UNRESOLVED_PLACEHOLDER`] when the
    /// body had no `response` field.
    pub fn reply_text(&self) -> &str {
        self.response.as_deref().unwrap_or(UNRESOLVED_PLACEHOLDER)
    }
}
