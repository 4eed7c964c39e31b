//! Local text heuristics: language detection and keyword emotion override.

use moodchat_models::DetectedEmotion;
use strum::IntoEnumIterator;

/// Care prompt prepended for Chinese-language messages.
pub const CARE_PROMPT_ZH: &str = "你还好吗？想聊聊嘛？";

/// Care prompt prepended for any other language.
pub const CARE_PROMPT_EN: &str = "Are you okay? Want to talk?";

/// Best-effort language tag: `"zh"` when the text contains a CJK ideograph,
/// `"en"` otherwise.
pub fn detect_language(text: &str) -> &'static str {
    let is_cjk = |c: char| matches!(c, '\u{4e00}'..='\u{9fff}' | '\u{3400}'..='\u{4dbf}');
    if text.chars().any(is_cjk) { "zh" } else { "en" }
}

/// Care prompt in the message's language.
pub fn care_prompt(language: &str) -> &'static str {
    if language.starts_with("zh") {
        CARE_PROMPT_ZH
    } else {
        CARE_PROMPT_EN
    }
}

/// Override the model's emotion when the text contains a known keyword.
///
/// Emotions are checked in declaration order and the first hit wins;
/// ASCII keywords match case-insensitively.
pub fn keyword_correction(text: &str, model_emotion: DetectedEmotion) -> DetectedEmotion {
    let lower = text.to_lowercase();
    DetectedEmotion::iter()
        .find(|e| {
            e.keywords()
                .iter()
                .any(|word| text.contains(word) || lower.contains(word))
        })
        .unwrap_or(model_emotion)
}
