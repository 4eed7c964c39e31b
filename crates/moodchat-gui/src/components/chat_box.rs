use dioxus::prelude::*;
use moodchat_widget::WidgetState;

use crate::i18n::{t, use_locale};

const SCROLL_TO_BOTTOM: &str = r#"
const box = document.getElementById("chat-box");
if (box) { box.scrollTop = box.scrollHeight; }
"#;

/// `chat-box`: the transcript, oldest entry first.
///
/// Scrolls to the bottom every time a reply bumps the scroll generation.
#[component]
pub fn ChatBox(widget_state: Signal<WidgetState>) -> Element {
    let locale = use_locale();
    let tr = t(*locale.read());

    // Only reply appends bump this; typing does not re-run the effect.
    let scroll_generation = use_memo(move || widget_state.read().scroll_generation);
    use_effect(move || {
        if scroll_generation() > 0 {
            let _ = dioxus::document::eval(SCROLL_TO_BOTTOM);
        }
    });

    let entries = widget_state.read().transcript.clone();

    rsx! {
        div { id: "chat-box", class: "chat-box",
            if entries.is_empty() {
                p { class: "placeholder", "{tr.empty_transcript}" }
            }
            for (idx, entry) in entries.iter().enumerate() {
                div { key: "{idx}", class: "msg {entry.speaker}", "{entry}" }
            }
        }
    }
}
