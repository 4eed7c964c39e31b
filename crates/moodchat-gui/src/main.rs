mod components;
mod i18n;
mod state;

use std::rc::Rc;

use dioxus::prelude::*;
use moodchat_sdk::ChatClient;
use moodchat_widget::{ChatWidget, WidgetState};

use components::chat_box::ChatBox;
use components::chat_form::ChatForm;
use components::mood_display::MoodDisplay;
use state::SharedWidget;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let widget_state = use_signal(WidgetState::default);
    let mut locale_signal = use_signal(|| i18n::Locale::Zh);
    use_context_provider(|| locale_signal);

    // Built once; the endpoint comes from MOODCHAT_URL.
    let widget = use_hook(|| match ChatClient::from_env() {
        Ok(client) => {
            tracing::info!(endpoint = %client.endpoint(), "chat widget ready");
            Ok(SharedWidget(Rc::new(ChatWidget::new(client))))
        }
        Err(e) => {
            tracing::error!(error = %e, "invalid chat endpoint");
            Err(e.to_string())
        }
    });

    let locale = *locale_signal.read();
    let tr = i18n::t(locale);
    let mood_text = widget_state.read().mood_display.clone();

    rsx! {
        style { {include_str!("style.css")} }
        div { class: "app-root",
            div { class: "app-header",
                h1 { "{tr.title}" }
                button {
                    class: "locale-toggle",
                    onclick: move |_| {
                        let next = locale_signal.read().next();
                        locale_signal.set(next);
                    },
                    "{locale.next().label()}"
                }
            }
            MoodDisplay { text: mood_text }
            ChatBox { widget_state }
            match widget {
                Ok(widget) => rsx! {
                    ChatForm { widget_state, widget }
                },
                Err(e) => rsx! {
                    div { class: "error-banner", "{tr.client_error}: {e}" }
                },
            }
        }
    }
}
