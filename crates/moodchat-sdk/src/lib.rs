//! # Moodchat SDK
//!
//! Client for the moodchat chat endpoint.
//!
//! The SDK provides:
//!
//! * [`ChatClient`]: posts an [`OutgoingMessage`] to `POST /api/chat/` and
//!   decodes the [`ChatReply`].
//! * [`ChatReply`]: the `response` field of a reply, rendered as text.
//! * [`SdkError`]: unified error type for all SDK operations.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use moodchat_models::OutgoingMessage;
//! use moodchat_sdk::ChatClient;
//!
//! # async fn run() -> Result<(), moodchat_sdk::SdkError> {
//! let client = ChatClient::new("http://localhost:8000")?;
//! let reply = client.send(&OutgoingMessage::new("hello", "happy")).await?;
//! println!("{}", reply.reply_text());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod reply;

pub use client::ChatClient;
pub use error::SdkError;
pub use reply::ChatReply;

// Re-export the wire types for ergonomic usage.
pub use moodchat_models::OutgoingMessage;
