//! Error types for the `moodchat-models` crate.
//!
//! All fallible lookups and `FromStr` conversions in this crate return
//! variants of [`ModelError`].

/// Errors produced when resolving model values from raw strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// The emotion key is not part of the mood table.
    #[error("unknown emotion \"{0}\"")]
    UnknownEmotion(String),

    /// The reply style is not one the server knows.
    #[error("unknown chat style \"{0}\"")]
    UnknownStyle(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_unknown_emotion() {
        let err = ModelError::UnknownEmotion("bored".into());
        assert_eq!(err.to_string(), "unknown emotion \"bored\"");
    }

    #[test]
    fn error_display_unknown_style() {
        let err = ModelError::UnknownStyle("pirate".into());
        assert_eq!(err.to_string(), "unknown chat style \"pirate\"");
    }
}
