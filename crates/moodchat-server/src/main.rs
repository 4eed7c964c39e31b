//! Moodchat server: the chat endpoint behind the moodchat widget.
//!
//! For each message it:
//!
//! 1. Normalises the emotion the client reported.
//! 2. Classifies the text's emotion (language model, then keyword override).
//! 3. Writes a reply in the requested style with recent session history.
//! 4. Prepends a care prompt when the mood looks low (at most every 5 min).
//! 5. Logs the exchange for the trend endpoints.

mod analysis;
mod app;
mod config;
mod error;
mod llm;
mod sessions;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use crate::app::AppState;
use crate::config::AppConfig;
use crate::llm::LanguageModel;

/// Moodchat companion server.
#[derive(Parser, Debug)]
#[command(name = "moodchat-server", about = "Moodchat companion chat server")]
struct Args {
    /// Listen port (overrides CHAT_PORT).
    #[arg(long)]
    port: Option<u16>,

    /// Never call the language model; answer with canned replies.
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging (controlled via RUST_LOG env var).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = AppConfig::from_env();
    if let Some(port) = args.port {
        config.listen_port = port;
    }

    let model = LanguageModel::from_config(&config.llm, args.offline)
        .context("failed to build language model client")?;
    match &model {
        LanguageModel::OpenRouter(_) => {
            info!(model = %config.llm.model, url = %config.llm.api_url, "language model configured")
        }
        LanguageModel::Offline => {
            warn!("running offline (set OPENROUTER_API_KEY for real replies)")
        }
    }

    let state = Arc::new(AppState::new(&config, model));
    let app = app::router(state);

    let addr = format!("0.0.0.0:{}", config.listen_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(address = %addr, "chat server listening");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
