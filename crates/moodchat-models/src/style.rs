//! Reply styles.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Persona the server answers with.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChatStyle {
    /// A relaxed close friend.
    #[default]
    Friend,
    /// A patient psychological counselor.
    Psychologist,
    /// A caring parent.
    Parent,
    /// A lively cartoon character.
    Cartoon,
}

impl ChatStyle {
    /// Parse a style key, rejecting unknown values.
    pub fn from_key(key: &str) -> Result<Self, ModelError> {
        Self::from_str(key).map_err(|_| ModelError::UnknownStyle(key.to_string()))
    }

    /// Resolve an optional style key; missing or unknown keys give
    /// [`ChatStyle::Friend`].
    pub fn resolve(key: Option<&str>) -> Self {
        key.and_then(|k| Self::from_key(k).ok()).unwrap_or_default()
    }

    /// Tone instruction appended to the system prompt.
    pub fn prompt(self) -> &'static str {
        match self {
            ChatStyle::Friend => "Reply in a relaxed and friendly tone as a close friend.",
            ChatStyle::Psychologist => {
                "As a psychological counselor, offer professional, patient, and warm emotional support."
            }
            ChatStyle::Parent => "As a caring parent, reply with love, warmth, and reassurance.",
            ChatStyle::Cartoon => {
                "As a lively and humorous cartoon character, reply with fun and positive energy."
            }
        }
    }
}
