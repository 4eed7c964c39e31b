//! HTTP routes and the chat pipeline.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Json, Path, State};
use axum::routing::{get, post};
use chrono::Utc;
use moodchat_models::{
    CHAT_ENDPOINT_PATH, ChatRequest, ChatResponse, ChatStyle, DetectedEmotion, TrendPoint,
    WellbeingSummary,
};
use tokio::sync::Mutex;
use tracing::info;

use crate::analysis::{care_prompt, detect_language, keyword_correction};
use crate::config::AppConfig;
use crate::error::ChatError;
use crate::llm::LanguageModel;
use crate::sessions::{ChatLogEntry, DEFAULT_SESSION_ID, SessionInfo, SessionStore};

// ---------------------------------------------------------------------------
// Shared application state
// ---------------------------------------------------------------------------

/// State shared across all Axum handlers.
pub struct AppState {
    /// Model used for analysis and replies.
    pub model: LanguageModel,
    /// Chat sessions. Never held across a model call.
    pub sessions: Mutex<SessionStore>,
}

impl AppState {
    pub fn new(config: &AppConfig, model: LanguageModel) -> Self {
        Self {
            model,
            sessions: Mutex::new(SessionStore::new(config.care_cooldown_secs)),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(CHAT_ENDPOINT_PATH, post(chat_api))
        .route("/chat/{session_id}/send/", post(chat_send))
        .route("/sessions/", get(list_sessions))
        .route("/trend/{session_id}/data/", get(trend_data))
        .route("/trend/{session_id}/summary/", get(trend_summary))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `POST /api/chat/`: chat in the default session.
async fn chat_api(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ChatError> {
    handle_chat(&state, DEFAULT_SESSION_ID, req).await.map(Json)
}

/// `POST /chat/{session_id}/send/`: chat in a given session.
async fn chat_send(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<u64>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ChatError> {
    handle_chat(&state, session_id, req).await.map(Json)
}

/// `GET /sessions/`: list known sessions.
async fn list_sessions(State(state): State<Arc<AppState>>) -> Json<Vec<SessionInfo>> {
    Json(state.sessions.lock().await.list())
}

/// `GET /trend/{session_id}/data/`: logged emotions over time.
async fn trend_data(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<u64>,
) -> Result<Json<Vec<TrendPoint>>, ChatError> {
    state
        .sessions
        .lock()
        .await
        .trend(session_id)
        .map(Json)
        .ok_or(ChatError::SessionNotFound(session_id))
}

/// `GET /trend/{session_id}/summary/`: wellbeing level and suggestion.
async fn trend_summary(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<u64>,
) -> Result<Json<WellbeingSummary>, ChatError> {
    let emotions = state
        .sessions
        .lock()
        .await
        .camera_emotions(session_id)
        .ok_or(ChatError::SessionNotFound(session_id))?;
    Ok(Json(WellbeingSummary::from_emotions(&emotions)))
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Run one exchange: classify, reply, maybe prepend a care prompt, log.
async fn handle_chat(
    state: &AppState,
    session_id: u64,
    req: ChatRequest,
) -> Result<ChatResponse, ChatError> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(ChatError::EmptyMessage);
    }

    // Unknown sessions are rejected before any model call.
    let history = state
        .sessions
        .lock()
        .await
        .history(session_id)
        .ok_or(ChatError::SessionNotFound(session_id))?;

    let style = ChatStyle::resolve(req.style.as_deref());
    let camera_emotion = DetectedEmotion::normalize(&req.emotion);
    let language = detect_language(message);

    let (model_emotion, reason) = state.model.analyze_emotion(message).await;
    let text_emotion = keyword_correction(message, model_emotion);

    let mut response = state.model.generate_reply(message, style, &history).await;

    let now = Utc::now();
    let mut sessions = state.sessions.lock().await;
    let wants_care = camera_emotion.is_negative() || text_emotion.is_negative();
    if wants_care
        && sessions
            .claim_care_prompt(session_id, now)
            .ok_or(ChatError::SessionNotFound(session_id))?
    {
        response = format!("{}\n\n{response}", care_prompt(language));
    }

    sessions
        .record(
            session_id,
            ChatLogEntry {
                user_message: message.to_string(),
                camera_emotion,
                text_emotion,
                response: response.clone(),
                created_at: now,
            },
        )
        .ok_or(ChatError::SessionNotFound(session_id))?;
    drop(sessions);

    info!(
        session = session_id,
        %camera_emotion,
        %text_emotion,
        language,
        "exchange logged"
    );

    Ok(ChatResponse {
        response: Some(response),
        camera_emotion: Some(camera_emotion.to_string()),
        text_emotion: Some(text_emotion.to_string()),
        reason: Some(reason),
        language: Some(language.to_string()),
    })
}
