//! Emotion types.
//!
//! Two closed sets live here:
//!
//! * [`Emotion`]: the four values the widget's selector offers, each with a
//!   fixed mood label shown next to the transcript.
//! * [`DetectedEmotion`]: the seven-way classification the server records
//!   for both the client-supplied emotion and the emotion read from the text.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

// ---------------------------------------------------------------------------
// Emotion (selector)
// ---------------------------------------------------------------------------

/// Emotion tag the user picks alongside a message.
///
/// # Examples
///
/// ```
/// use moodchat_models::Emotion;
///
/// let e: Emotion = "sad".parse().unwrap();
/// assert_eq!(e, Emotion::Sad);
/// assert_eq!(e.label(), "😔 难过");
/// ```
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Emotion {
    /// 😊
    Happy,
    /// 😔
    Sad,
    /// 😠
    Angry,
    /// 😐
    Neutral,
}

impl Emotion {
    /// Fixed display label (emoji + text) for this emotion.
    pub fn label(self) -> &'static str {
        match self {
            Emotion::Happy => "😊 高兴",
            Emotion::Sad => "😔 难过",
            Emotion::Angry => "😠 生气",
            Emotion::Neutral => "😐 中性",
        }
    }

    /// Wire / selector key (`"happy"`, `"sad"`, …).
    pub fn key(self) -> &'static str {
        self.into()
    }
}

/// Resolve a raw selector value to its mood label.
///
/// Keys are matched exactly (case-sensitive); anything outside the four
/// selector values yields [`ModelError::UnknownEmotion`].
pub fn mood_label(key: &str) -> Result<&'static str, ModelError> {
    Emotion::from_str(key)
        .map(Emotion::label)
        .map_err(|_| ModelError::UnknownEmotion(key.to_string()))
}

// ---------------------------------------------------------------------------
// DetectedEmotion (server-side classification)
// ---------------------------------------------------------------------------

/// Seven-way emotion classification used by the server's logs and trends.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DetectedEmotion {
    /// Joy, excitement.
    Happy,
    /// Sadness, low mood.
    Sad,
    /// Anger, frustration.
    Angry,
    /// Surprise.
    Surprise,
    /// Fear, anxiety.
    Fear,
    /// Disgust.
    Disgust,
    /// No marked emotion.
    #[default]
    Neutral,
}

impl DetectedEmotion {
    /// Normalise a free-form emotion string.
    ///
    /// Surrounding whitespace is trimmed and the value lower-cased; anything
    /// that is still not one of the seven values becomes [`Self::Neutral`].
    pub fn normalize(raw: &str) -> Self {
        raw.trim().to_lowercase().parse().unwrap_or_default()
    }

    /// Whether this emotion should trigger a care prompt.
    pub fn is_negative(self) -> bool {
        matches!(
            self,
            DetectedEmotion::Sad
                | DetectedEmotion::Angry
                | DetectedEmotion::Fear
                | DetectedEmotion::Disgust
        )
    }

    /// Wellbeing score from 1 (best) to 5 (worst).
    pub fn wellbeing_score(self) -> u8 {
        match self {
            DetectedEmotion::Happy => 1,
            DetectedEmotion::Neutral => 2,
            DetectedEmotion::Surprise => 3,
            DetectedEmotion::Fear | DetectedEmotion::Disgust => 4,
            DetectedEmotion::Sad | DetectedEmotion::Angry => 5,
        }
    }

    /// Keywords (Chinese and English) that pin the text emotion locally.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            DetectedEmotion::Happy => &["开心", "高兴", "快乐", "幸福", "happy", "joyful", "excited"],
            DetectedEmotion::Sad => &["伤心", "难过", "悲伤", "sad", "unhappy", "depressed"],
            DetectedEmotion::Angry => &["生气", "愤怒", "angry", "mad", "furious"],
            DetectedEmotion::Surprise => &["惊讶", "惊喜", "wow", "omg", "surprised"],
            DetectedEmotion::Fear => &["害怕", "恐惧", "担心", "fear", "afraid", "anxious"],
            DetectedEmotion::Disgust => &["恶心", "讨厌", "厌恶", "disgust", "gross"],
            DetectedEmotion::Neutral => &["嗯", "好", "ok", "normal", "fine"],
        }
    }
}

impl From<Emotion> for DetectedEmotion {
    fn from(e: Emotion) -> Self {
        match e {
            Emotion::Happy => DetectedEmotion::Happy,
            Emotion::Sad => DetectedEmotion::Sad,
            Emotion::Angry => DetectedEmotion::Angry,
            Emotion::Neutral => DetectedEmotion::Neutral,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn each_selector_emotion_has_its_label() {
        assert_eq!(mood_label("happy").unwrap(), "😊 高兴");
        assert_eq!(mood_label("sad").unwrap(), "😔 难过");
        assert_eq!(mood_label("angry").unwrap(), "😠 生气");
        assert_eq!(mood_label("neutral").unwrap(), "😐 中性");
    }

    #[test]
    fn mood_label_unknown_key_is_error() {
        assert_eq!(
            mood_label("surprise"),
            Err(ModelError::UnknownEmotion("surprise".into()))
        );
        assert!(mood_label("").is_err());
    }

    #[test]
    fn mood_label_is_case_sensitive() {
        assert!(mood_label("Happy").is_err());
    }

    #[test]
    fn selector_keys_match_display() {
        for e in Emotion::iter() {
            assert_eq!(e.key(), e.to_string());
            assert_eq!(mood_label(e.key()).unwrap(), e.label());
        }
    }

    #[test]
    fn emotion_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Emotion::Angry).unwrap(), "\"angry\"");
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(DetectedEmotion::normalize("  SAD "), DetectedEmotion::Sad);
        assert_eq!(DetectedEmotion::normalize("fear"), DetectedEmotion::Fear);
    }

    #[test]
    fn normalize_unknown_falls_back_to_neutral() {
        assert_eq!(DetectedEmotion::normalize("bored"), DetectedEmotion::Neutral);
        assert_eq!(DetectedEmotion::normalize(""), DetectedEmotion::Neutral);
    }

    #[test]
    fn negative_set() {
        let negative: Vec<_> = DetectedEmotion::iter().filter(|e| e.is_negative()).collect();
        assert_eq!(
            negative,
            vec![
                DetectedEmotion::Sad,
                DetectedEmotion::Angry,
                DetectedEmotion::Fear,
                DetectedEmotion::Disgust
            ]
        );
    }

    #[test]
    fn selector_emotions_convert() {
        for e in Emotion::iter() {
            assert_eq!(DetectedEmotion::from(e).to_string(), e.to_string());
        }
    }
}
