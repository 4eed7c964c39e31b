#![deny(missing_docs)]

//! # Moodchat Models
//!
//! Core data types shared by the moodchat widget, its HTTP client and the
//! companion server.
//!
//! ## Exchange shape
//!
//! ```text
//! widget ── POST /api/chat/ ─────────────▶ server
//!           OutgoingMessage { message, emotion }
//! widget ◀──────────────────────────────── server
//!           ChatResponse { response, … }
//! ```
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`emotion`] | Selector emotions, mood labels, server-side emotion set |
//! | [`message`] | Request / response bodies of the chat endpoint |
//! | [`style`] | Reply styles understood by the server |
//! | [`transcript`] | Transcript entries rendered by the widget |
//! | [`trend`] | Emotion trend points and wellbeing summaries |

pub mod emotion;
pub mod error;
pub mod message;
pub mod style;
pub mod transcript;
pub mod trend;

// Re-export all public types at crate root for convenience.
pub use emotion::*;
pub use error::*;
pub use message::*;
pub use style::*;
pub use transcript::*;
pub use trend::*;

/// Text rendered wherever a value could not be resolved: a reply body
/// without a `response` field, or an emotion key missing from the mood table.
pub const UNRESOLVED_PLACEHOLDER: &str = "undefined";

/// Path of the chat endpoint, relative to the server base URL.
pub const CHAT_ENDPOINT_PATH: &str = "/api/chat/";
