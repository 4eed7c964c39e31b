//! Transcript entries rendered by the widget.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Who wrote a transcript entry.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Speaker {
    /// The person typing into the widget.
    User,
    /// The server's reply.
    Assistant,
}

impl Speaker {
    /// Fixed label prefixed to every entry of this speaker.
    pub fn label(self) -> &'static str {
        match self {
            Speaker::User => "你：",
            Speaker::Assistant => "助手：",
        }
    }
}

/// One line of the transcript.
///
/// Entries are only ever appended; the `Display` form is what the chat box
/// shows (`"你：hello"`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    /// Author of the entry.
    pub speaker: Speaker,
    /// Entry text, without the speaker label.
    pub text: String,
}

impl TranscriptEntry {
    /// Entry written by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    /// Entry written by the assistant.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }
}

impl fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.speaker.label(), self.text)
    }
}
