use dioxus::prelude::*;
use moodchat_models::Emotion;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Locale {
    Zh,
    En,
}

impl Locale {
    pub fn label(&self) -> &'static str {
        match self {
            Locale::Zh => "中",
            Locale::En => "EN",
        }
    }

    pub fn next(&self) -> Locale {
        match self {
            Locale::Zh => Locale::En,
            Locale::En => Locale::Zh,
        }
    }
}

/// Get the current locale from Dioxus context.
/// Must be called inside a component where `use_context_provider` was used.
pub fn use_locale() -> Signal<Locale> {
    use_context::<Signal<Locale>>()
}

/// Chrome strings around the widget. Transcript labels and mood labels are
/// fixed and do not follow the locale.
pub struct T {
    pub title: &'static str,
    pub input_placeholder: &'static str,
    pub send: &'static str,
    pub emotion_label: &'static str,
    pub empty_transcript: &'static str,
    pub client_error: &'static str,
}

static ZH: T = T {
    title: "情绪聊天",
    input_placeholder: "说点什么……",
    send: "发送",
    emotion_label: "情绪",
    empty_transcript: "还没有消息",
    client_error: "无法创建聊天客户端",
};

static EN: T = T {
    title: "Mood chat",
    input_placeholder: "Say something…",
    send: "Send",
    emotion_label: "Emotion",
    empty_transcript: "No messages yet",
    client_error: "Could not create chat client",
};

pub fn t(locale: Locale) -> &'static T {
    match locale {
        Locale::Zh => &ZH,
        Locale::En => &EN,
    }
}

/// Name of an emotion option in the selector.
pub fn emotion_option(locale: Locale, emotion: Emotion) -> &'static str {
    match (locale, emotion) {
        (Locale::Zh, Emotion::Happy) => "高兴",
        (Locale::Zh, Emotion::Sad) => "难过",
        (Locale::Zh, Emotion::Angry) => "生气",
        (Locale::Zh, Emotion::Neutral) => "中性",
        (Locale::En, Emotion::Happy) => "Happy",
        (Locale::En, Emotion::Sad) => "Sad",
        (Locale::En, Emotion::Angry) => "Angry",
        (Locale::En, Emotion::Neutral) => "Neutral",
    }
}
