//! Server configuration.
//!
//! Built from environment variables at startup, optionally overridden by
//! command-line flags, and injected into Axum handlers via
//! [`axum::extract::State`].

/// Upstream LLM endpoint parameters.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// OpenRouter-compatible chat completions URL.
    pub api_url: String,
    /// Bearer token. `None` means no upstream is reachable.
    pub api_key: Option<String>,
    /// Model identifier sent with every completion request.
    pub model: String,
}

/// Global configuration shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to listen on (default `8000`).
    pub listen_port: u16,
    /// LLM upstream.
    pub llm: LlmConfig,
    /// Minimum time between two care prompts in one session (default 300 s).
    pub care_cooldown_secs: i64,
}

impl AppConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable              | Default                                          | Description              |
    /// |-----------------------|--------------------------------------------------|--------------------------|
    /// | `CHAT_PORT`           | `8000`                                           | HTTP listen port         |
    /// | `OPENROUTER_API_KEY`  | *(unset)*                                        | Bearer token for the LLM |
    /// | `OPENROUTER_API_URL`  | `https://openrouter.ai/api/v1/chat/completions`  | Completions endpoint     |
    /// | `OPENROUTER_MODEL`    | `meta-llama/llama-3-8b-instruct`                 | Model identifier         |
    /// | `CARE_COOLDOWN_SECS`  | `300`                                            | Care prompt cooldown     |
    pub fn from_env() -> Self {
        let listen_port: u16 = std::env::var("CHAT_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8000);

        let api_key = std::env::var("OPENROUTER_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        let api_url = std::env::var("OPENROUTER_API_URL")
            .unwrap_or_else(|_| "https://openrouter.ai/api/v1/chat/completions".to_string());
        let model = std::env::var("OPENROUTER_MODEL")
            .unwrap_or_else(|_| "meta-llama/llama-3-8b-instruct".to_string());

        let care_cooldown_secs = std::env::var("CARE_COOLDOWN_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(300);

        Self {
            listen_port,
            llm: LlmConfig {
                api_url,
                api_key,
                model,
            },
            care_cooldown_secs,
        }
    }
}
