use dioxus::prelude::*;

/// `mood-display`: the "当前情绪：…" line, empty until the first submission.
#[component]
pub fn MoodDisplay(text: String) -> Element {
    rsx! {
        div { id: "mood-display", class: "mood-display", "{text}" }
    }
}
