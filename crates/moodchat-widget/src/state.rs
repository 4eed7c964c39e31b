//! What the widget shows, and the state changes of one submission.

use moodchat_models::{mood_label, Emotion, OutgoingMessage, TranscriptEntry, UNRESOLVED_PLACEHOLDER};
use moodchat_sdk::ChatReply;
use tracing::warn;

/// Prefix of the mood indicator line.
pub const MOOD_DISPLAY_PREFIX: &str = "当前情绪：";

/// Mood indicator text for a raw selector value.
///
/// An unknown key renders [`UNRESOLVED_PLACEHOLDER`] as its label.
pub fn mood_display_text(emotion_key: &str) -> String {
    let label = match mood_label(emotion_key) {
        Ok(label) => label,
        Err(e) => {
            warn!(error = %e, "emotion missing from mood table");
            UNRESOLVED_PLACEHOLDER
        }
    };
    format!("{MOOD_DISPLAY_PREFIX}{label}")
}

/// Everything the bound elements show.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetState {
    /// `user-input`: current text field value.
    pub input: String,
    /// `emotion`: current selector value.
    pub emotion: String,
    /// `chat-box`: appended entries, oldest first.
    pub transcript: Vec<TranscriptEntry>,
    /// `mood-display`: text of the mood line (empty until the first submit).
    pub mood_display: String,
    /// Bumped each time the chat box should scroll to its bottom.
    pub scroll_generation: u64,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            input: String::new(),
            // first option of the selector
            emotion: Emotion::Happy.key().to_string(),
            transcript: Vec::new(),
            mood_display: String::new(),
            scroll_generation: 0,
        }
    }
}

impl WidgetState {
    /// Synchronous half of a submission.
    ///
    /// Returns `None` (and changes nothing) when the trimmed input is empty.
    /// Otherwise appends the user entry, clears the input, refreshes the
    /// mood line and returns the body to post.
    pub fn begin_submit(&mut self) -> Option<OutgoingMessage> {
        let text = self.input.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_string();

        self.transcript.push(TranscriptEntry::user(text.clone()));
        self.input.clear();
        self.mood_display = mood_display_text(&self.emotion);

        Some(OutgoingMessage::new(text, self.emotion.clone()))
    }

    /// Continuation of a submission: append the reply and request a scroll.
    pub fn apply_reply(&mut self, reply: &ChatReply) {
        self.transcript.push(TranscriptEntry::assistant(reply.reply_text()));
        self.scroll_generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodchat_models::Speaker;

    fn state_with(input: &str, emotion: &str) -> WidgetState {
        WidgetState {
            input: input.to_string(),
            emotion: emotion.to_string(),
            ..WidgetState::default()
        }
    }

    #[test]
    fn submit_appends_trimmed_user_entry_and_clears_input() {
        let mut state = state_with("  hello  ", "happy");
        let msg = state.begin_submit().unwrap();

        assert_eq!(msg, OutgoingMessage::new("hello", "happy"));
        assert_eq!(state.transcript, vec![TranscriptEntry::user("hello")]);
        assert_eq!(state.input, "");
    }

    #[test]
    fn whitespace_input_is_a_no_op() {
        let mut state = state_with("   \t ", "sad");
        let before = state.clone();

        assert!(state.begin_submit().is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let mut state = state_with("", "sad");
        assert!(state.begin_submit().is_none());
        assert!(state.transcript.is_empty());
        assert!(state.mood_display.is_empty());
    }

    #[test]
    fn mood_line_for_each_emotion() {
        for (key, label) in [
            ("happy", "😊 高兴"),
            ("sad", "😔 难过"),
            ("angry", "😠 生气"),
            ("neutral", "😐 中性"),
        ] {
            let mut state = state_with("hi", key);
            state.begin_submit();
            assert_eq!(state.mood_display, format!("当前情绪：{label}"));
        }
    }

    #[test]
    fn unknown_emotion_renders_placeholder_and_is_still_sent() {
        let mut state = state_with("hi", "bored");
        let msg = state.begin_submit().unwrap();
        assert_eq!(state.mood_display, "当前情绪：undefined");
        assert_eq!(msg.emotion, "bored");
    }

    #[test]
    fn reply_appends_assistant_entry_and_scrolls() {
        let mut state = state_with("hi", "happy");
        state.begin_submit();
        state.apply_reply(&ChatReply::text("hi there"));

        assert_eq!(state.transcript.len(), 2);
        assert_eq!(state.transcript[1].speaker, Speaker::Assistant);
        assert_eq!(state.transcript[1].text, "hi there");
        assert_eq!(state.scroll_generation, 1);
    }

    #[test]
    fn reply_without_text_renders_placeholder() {
        let mut state = WidgetState::default();
        state.apply_reply(&ChatReply::default());
        assert_eq!(state.transcript, vec![TranscriptEntry::assistant("undefined")]);
    }
}
