//! Emotion trend points and the wellbeing summary derived from them.

use serde::{Deserialize, Serialize};

use crate::emotion::DetectedEmotion;

/// Timestamp format of [`TrendPoint::timestamp`].
pub const TREND_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One logged exchange, as exposed by the trend endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    /// Local time of the exchange, formatted with [`TREND_TIMESTAMP_FORMAT`].
    pub timestamp: String,
    /// Emotion reported by the client.
    pub camera_emotion: DetectedEmotion,
    /// Emotion inferred from the text.
    pub text_emotion: DetectedEmotion,
}

/// Coarse wellbeing grade, `A` being the brightest.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum WellbeingLevel {
    /// Mean score below 1.6.
    A,
    /// Mean score below 2.5.
    B,
    /// Mean score below 3.5, or no data.
    C,
    /// Mean score below 4.5.
    D,
    /// Everything else.
    E,
}

impl WellbeingLevel {
    fn from_mean(mean: f64) -> Self {
        if mean < 1.6 {
            WellbeingLevel::A
        } else if mean < 2.5 {
            WellbeingLevel::B
        } else if mean < 3.5 {
            WellbeingLevel::C
        } else if mean < 4.5 {
            WellbeingLevel::D
        } else {
            WellbeingLevel::E
        }
    }

    /// The two gentle suggestions for this level. The second one is used
    /// when the mood has been swinging.
    fn suggestions(self) -> [&'static str; 2] {
        match self {
            WellbeingLevel::A => [
                "🌟 Keep shining! Enjoy a good meal today, and don’t forget to share a smile with someone.",
                "☀️ You're glowing! Stretch a little, sip your favorite drink, and keep the cozy vibes going.",
            ],
            WellbeingLevel::B => [
                "🌼 A short walk, some fresh air, and warm food might make your day even better.",
                "🧸 Try calling a friend or listening to a cheerful tune. Little joys go a long way!",
            ],
            WellbeingLevel::C => [
                "🍵 Slow down a bit. A calm evening and some gentle stretches might feel nice.",
                "🌙 Rest well tonight. Your favorite snack and soft music can work wonders.",
            ],
            WellbeingLevel::D => [
                "🎧 Take a deep breath and play a song that brings comfort. You deserve soft things.",
                "🫖 Drink something warm, get some sunlight, and let yourself rest gently today.",
            ],
            WellbeingLevel::E => [
                "🌈 Be kind to yourself today. A nap, a small walk, or hugging a pillow might feel nice.",
                "💖 Everything doesn’t need to be perfect. Just eat something warm and take things slowly.",
            ],
        }
    }
}

/// Message returned when there is nothing to summarise.
pub const NOT_ENOUGH_DATA: &str =
    "We couldn't gather enough emotion data. Try using the system longer.";

/// Standard deviation at or above which the alternate suggestion is chosen.
const SWING_THRESHOLD: f64 = 0.8;

/// Level plus one suggestion.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WellbeingSummary {
    /// Wellbeing grade.
    pub level: WellbeingLevel,
    /// Suggestion text.
    pub suggestion: String,
}

impl WellbeingSummary {
    /// Summarise a sequence of emotions.
    ///
    /// Uses the mean of [`DetectedEmotion::wellbeing_score`] for the level and
    /// the sample standard deviation to choose between the level's two
    /// suggestions.
    pub fn from_emotions(emotions: &[DetectedEmotion]) -> Self {
        if emotions.is_empty() {
            return Self {
                level: WellbeingLevel::C,
                suggestion: NOT_ENOUGH_DATA.to_string(),
            };
        }

        let scores: Vec<f64> = emotions.iter().map(|e| f64::from(e.wellbeing_score())).collect();
        let n = scores.len() as f64;
        let mean = scores.iter().sum::<f64>() / n;
        let std_dev = if scores.len() > 1 {
            let var = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (n - 1.0);
            var.sqrt()
        } else {
            0.0
        };

        let level = WellbeingLevel::from_mean(mean);
        let pick = usize::from(std_dev >= SWING_THRESHOLD);
        Self {
            level,
            suggestion: level.suggestions()[pick].to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DetectedEmotion::*;

    #[test]
    fn empty_is_level_c_with_notice() {
        let s = WellbeingSummary::from_emotions(&[]);
        assert_eq!(s.level, WellbeingLevel::C);
        assert_eq!(s.suggestion, NOT_ENOUGH_DATA);
    }

    #[test]
    fn all_happy_is_level_a_first_suggestion() {
        let s = WellbeingSummary::from_emotions(&[Happy, Happy, Happy]);
        assert_eq!(s.level, WellbeingLevel::A);
        assert!(s.suggestion.starts_with("🌟"));
    }

    #[test]
    fn single_sad_is_level_e() {
        let s = WellbeingSummary::from_emotions(&[Sad]);
        assert_eq!(s.level, WellbeingLevel::E);
        assert!(s.suggestion.starts_with("🌈"));
    }

    #[test]
    fn swinging_mood_uses_second_suggestion() {
        // scores 1 and 5: mean 3.0 (C), sample std dev ~2.83
        let s = WellbeingSummary::from_emotions(&[Happy, Angry]);
        assert_eq!(s.level, WellbeingLevel::C);
        assert!(s.suggestion.starts_with("🌙"));
    }

    #[test]
    fn neutral_is_level_b() {
        let s = WellbeingSummary::from_emotions(&[Neutral, Neutral]);
        assert_eq!(s.level, WellbeingLevel::B);
    }

    #[test]
    fn fear_is_level_d() {
        let s = WellbeingSummary::from_emotions(&[Fear, Disgust]);
        assert_eq!(s.level, WellbeingLevel::D);
        assert!(s.suggestion.starts_with("🎧"));
    }
}
