use dioxus::prelude::*;
use moodchat_models::Emotion;
use moodchat_widget::{WidgetHandle, WidgetState};
use strum::IntoEnumIterator;

use crate::i18n::{emotion_option, t, use_locale};
use crate::state::{SharedWidget, SignalHandle};

/// `chat-form`: text input, emotion selector and send button.
///
/// Submitting runs the synchronous half of the widget right away (user
/// entry, cleared input, mood line) and spawns one independent task for the
/// request. Nothing stops a second submission while the first is pending.
#[component]
pub fn ChatForm(mut widget_state: Signal<WidgetState>, widget: SharedWidget) -> Element {
    let locale = use_locale();
    let tr = t(*locale.read());

    let (input, selected) = {
        let state = widget_state.read();
        (state.input.clone(), state.emotion.clone())
    };

    rsx! {
        form {
            id: "chat-form",
            class: "chat-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let handle = SignalHandle(widget_state);
                let Some(msg) = handle.with_state(WidgetState::begin_submit) else {
                    return;
                };
                let widget = widget.0.clone();
                spawn(async move {
                    widget.complete(msg, &handle).await;
                });
            },
            input {
                id: "user-input",
                r#type: "text",
                autocomplete: "off",
                placeholder: "{tr.input_placeholder}",
                value: "{input}",
                oninput: move |evt: Event<FormData>| {
                    widget_state.write().input = evt.value();
                },
            }
            label { class: "emotion-label", r#for: "emotion", "{tr.emotion_label}" }
            select {
                id: "emotion",
                value: "{selected}",
                onchange: move |evt: Event<FormData>| {
                    widget_state.write().emotion = evt.value();
                },
                for emotion in Emotion::iter() {
                    {
                        let key = emotion.key();
                        let name = emotion_option(*locale.read(), emotion);
                        rsx! {
                            option { value: "{key}", selected: key == selected, "{name}" }
                        }
                    }
                }
            }
            button { r#type: "submit", class: "send-btn", "{tr.send}" }
        }
    }
}
