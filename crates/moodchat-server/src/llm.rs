//! Language model access.
//!
//! [`LanguageModel`] is either an OpenRouter-compatible HTTP backend or an
//! offline stand-in used when no API key is configured. Two tasks run
//! through it: classifying the emotion of a message and writing the reply.
//! Neither ever fails towards the caller; errors degrade to fixed fallbacks.

use std::time::Duration;

use moodchat_models::{ChatStyle, DetectedEmotion};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::LlmConfig;
use crate::error::ChatError;

/// Reply used whenever generation fails.
pub const FALLBACK_REPLY: &str = "Oops, I encountered an error, but I'm still here for you. ❤️";

/// Reason recorded when emotion analysis fails.
pub const ANALYSIS_FAILED_REASON: &str = "分析失败";

/// Reason recorded when the model gives no reason.
const NO_REASON: &str = "未提供原因";

/// Number of past turns sent with a reply request.
const HISTORY_TURNS: usize = 6;

const REPLY_TEMPERATURE: f32 = 0.85;
const REPLY_TOP_P: f32 = 0.9;
const ANALYSIS_TEMPERATURE: f32 = 0.2;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// One message of a chat-completions conversation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PromptMessage {
    pub role: String,
    pub content: String,
}

impl PromptMessage {
    fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [PromptMessage],
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: PromptMessage,
}

#[derive(Deserialize)]
struct EmotionVerdict {
    emotion: Option<String>,
    reason: Option<String>,
}

/// A previous exchange of the session, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub user: String,
    pub bot: String,
}

// ---------------------------------------------------------------------------
// Prompts
// ---------------------------------------------------------------------------

/// Few-shot examples injected before the history, as `(role, content)`.
const FEW_SHOT: &[(&str, &str)] = &[
    ("system", "You are a warm and empathetic friend who responds naturally and casually."),
    ("user", "I'm feeling really down today."),
    ("assistant", "Oh no, that sounds rough. Want to share what’s been bothering you? I’m here for you."),
    ("user", "I feel like no one understands me."),
    ("assistant", "I get that, feeling misunderstood can be really lonely. But I’m here, and I do want to understand."),
    ("system", "You are a professional psychological counselor who listens calmly and supports the user emotionally."),
    ("user", "最近总是觉得焦虑，很压抑。"),
    ("assistant", "谢谢你分享这个感受，这一定不容易。能聊聊让你焦虑的原因吗？"),
    ("system", "You are like a caring parent who comforts and encourages."),
    ("user", "我今天心情不好，什么都不想做。"),
    ("assistant", "宝贝，没关系的，偶尔有这样的日子很正常。你愿意告诉我是什么让你这么累吗？"),
    ("system", "You notice a conflict between facial and text emotion, and respond gently."),
    ("user", "I’m fine, really."),
    ("assistant", "I hear you saying you’re fine, but you seem a bit down. That’s okay—we can talk about anything if you want."),
];

/// Build the reply conversation: persona, few-shot examples, the last
/// [`HISTORY_TURNS`] turns and the new input.
pub fn reply_prompt(user_input: &str, style: ChatStyle, history: &[Turn]) -> Vec<PromptMessage> {
    let mut messages = vec![PromptMessage::new(
        "system",
        format!("You are an empathetic assistant. {}", style.prompt()),
    )];
    messages.extend(FEW_SHOT.iter().map(|(role, content)| PromptMessage::new(role, *content)));

    let skip = history.len().saturating_sub(HISTORY_TURNS);
    for turn in &history[skip..] {
        messages.push(PromptMessage::new("user", turn.user.clone()));
        messages.push(PromptMessage::new("assistant", turn.bot.clone()));
    }

    messages.push(PromptMessage::new("user", user_input));
    messages
}

fn analysis_prompt(text: &str) -> Vec<PromptMessage> {
    let prompt = format!(
        "请判断用户话语属于以下情绪之一：\n\
         [\"happy\", \"sad\", \"angry\", \"surprise\", \"fear\", \"disgust\", \"neutral\"]。\n\
         输出 JSON：{{\"emotion\":\"<emotion>\",\"reason\":\"<简要原因>\"}}。\n\
         用户输入: \"{text}\" "
    );
    vec![
        PromptMessage::new("system", "你是情绪分析助手，严格输出 JSON"),
        PromptMessage::new("user", prompt),
    ]
}

/// Parse the model's `{"emotion", "reason"}` verdict.
///
/// Emotions outside the seven-way set become `neutral`.
fn parse_verdict(content: &str) -> Result<(DetectedEmotion, String), ChatError> {
    let verdict: EmotionVerdict = serde_json::from_str(content.trim())?;
    let emotion = verdict
        .emotion
        .map(|e| DetectedEmotion::normalize(&e))
        .unwrap_or_default();
    let reason = verdict.reason.unwrap_or_else(|| NO_REASON.to_string());
    Ok((emotion, reason))
}

// ---------------------------------------------------------------------------
// Backends
// ---------------------------------------------------------------------------

/// HTTP client for an OpenRouter-compatible completions endpoint.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenRouterClient {
    pub fn new(api_url: &str, api_key: &str, model: &str) -> Result<Self, ChatError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    /// Run one completion and return the first choice's content.
    pub async fn complete(
        &self,
        messages: &[PromptMessage],
        temperature: f32,
        top_p: Option<f32>,
    ) -> Result<String, ChatError> {
        let res = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&CompletionRequest {
                model: &self.model,
                messages,
                temperature,
                top_p,
            })
            .send()
            .await?;

        let status = res.status();
        info!(%status, model = %self.model, "completion response");
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            return Err(ChatError::Upstream(format!("{status}: {text}")));
        }

        let body: CompletionResponse = res.json().await?;
        body.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ChatError::Upstream("no choices in completion".into()))
    }
}

/// The model the server talks to.
#[derive(Debug, Clone)]
pub enum LanguageModel {
    /// A real completions endpoint.
    OpenRouter(OpenRouterClient),
    /// No upstream: canned reply, neutral analysis.
    Offline,
}

impl LanguageModel {
    /// Pick a backend from configuration; without an API key (or when
    /// `offline` is forced) the offline stand-in is used.
    pub fn from_config(cfg: &LlmConfig, offline: bool) -> Result<Self, ChatError> {
        match (&cfg.api_key, offline) {
            (Some(key), false) => Ok(Self::OpenRouter(OpenRouterClient::new(
                &cfg.api_url,
                key,
                &cfg.model,
            )?)),
            _ => Ok(Self::Offline),
        }
    }

    /// Classify the emotion of `text`.
    ///
    /// Any failure gives `(neutral, "分析失败")`.
    pub async fn analyze_emotion(&self, text: &str) -> (DetectedEmotion, String) {
        let Self::OpenRouter(client) = self else {
            return (DetectedEmotion::Neutral, ANALYSIS_FAILED_REASON.to_string());
        };

        classify(client, text).await.unwrap_or_else(|e| {
            warn!(error = %e, "emotion analysis failed");
            (DetectedEmotion::Neutral, ANALYSIS_FAILED_REASON.to_string())
        })
    }

    /// Write a reply in `style`, using up to the last six turns as context.
    ///
    /// Any failure gives [`FALLBACK_REPLY`].
    pub async fn generate_reply(&self, user_input: &str, style: ChatStyle, history: &[Turn]) -> String {
        let messages = reply_prompt(user_input, style, history);
        info!(%style, context_messages = messages.len(), "generating reply");

        match self {
            Self::OpenRouter(client) => {
                match client.complete(&messages, REPLY_TEMPERATURE, Some(REPLY_TOP_P)).await {
                    Ok(reply) => reply.trim().to_string(),
                    Err(e) => {
                        warn!(error = %e, "reply generation failed");
                        FALLBACK_REPLY.to_string()
                    }
                }
            }
            Self::Offline => offline_reply(style),
        }
    }
}

async fn classify(client: &OpenRouterClient, text: &str) -> Result<(DetectedEmotion, String), ChatError> {
    let content = client
        .complete(&analysis_prompt(text), ANALYSIS_TEMPERATURE, None)
        .await?;
    parse_verdict(&content)
}

fn offline_reply(style: ChatStyle) -> String {
    match style {
        ChatStyle::Friend => "I'm here with you. Tell me more?",
        ChatStyle::Psychologist => "Thank you for sharing that. How long have you been feeling this way?",
        ChatStyle::Parent => "I'm right here, sweetheart. Take your time.",
        ChatStyle::Cartoon => "Boing! I'm all ears, tell me everything!",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::Router;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/chat/completions")
    }

    fn model_at(url: &str) -> LanguageModel {
        LanguageModel::OpenRouter(OpenRouterClient::new(url, "test-key", "test-model").unwrap())
    }

    fn completion(content: &str) -> Value {
        json!({ "choices": [ { "message": { "role": "assistant", "content": content } } ] })
    }

    fn history(n: usize) -> Vec<Turn> {
        (0..n)
            .map(|i| Turn {
                user: format!("u{i}"),
                bot: format!("b{i}"),
            })
            .collect()
    }

    #[test]
    fn reply_prompt_layout() {
        let msgs = reply_prompt("hello", ChatStyle::Parent, &history(2));
        assert_eq!(msgs[0].role, "system");
        assert!(msgs[0].content.ends_with(ChatStyle::Parent.prompt()));
        assert_eq!(msgs.len(), 1 + FEW_SHOT.len() + 4 + 1);
        assert_eq!(msgs.last().unwrap(), &PromptMessage::new("user", "hello"));
    }

    #[test]
    fn reply_prompt_keeps_last_six_turns() {
        let msgs = reply_prompt("now", ChatStyle::Friend, &history(10));
        assert_eq!(msgs.len(), 1 + FEW_SHOT.len() + 12 + 1);
        let first_history = &msgs[1 + FEW_SHOT.len()];
        assert_eq!(first_history.content, "u4");
    }

    #[test]
    fn parse_verdict_valid() {
        let (e, reason) = parse_verdict(r#"{"emotion":"Fear","reason":"worried"}"#).unwrap();
        assert_eq!(e, DetectedEmotion::Fear);
        assert_eq!(reason, "worried");
    }

    #[test]
    fn parse_verdict_unknown_emotion_is_neutral() {
        let (e, reason) = parse_verdict(r#"{"emotion":"bored"}"#).unwrap();
        assert_eq!(e, DetectedEmotion::Neutral);
        assert_eq!(reason, NO_REASON);
    }

    #[test]
    fn parse_verdict_not_json() {
        assert!(parse_verdict("I think sad").is_err());
    }

    #[test]
    fn offline_without_key() {
        let cfg = LlmConfig {
            api_url: "http://localhost/x".into(),
            api_key: None,
            model: "m".into(),
        };
        assert!(matches!(LanguageModel::from_config(&cfg, false).unwrap(), LanguageModel::Offline));
    }

    #[test]
    fn offline_forced() {
        let cfg = LlmConfig {
            api_url: "http://localhost/x".into(),
            api_key: Some("k".into()),
            model: "m".into(),
        };
        assert!(matches!(LanguageModel::from_config(&cfg, true).unwrap(), LanguageModel::Offline));
    }

    #[tokio::test]
    async fn generate_reply_sends_expected_request() {
        let seen: Arc<Mutex<Option<(String, Value)>>> = Arc::new(Mutex::new(None));
        let captured = seen.clone();
        let app = Router::new().route(
            "/chat/completions",
            post(move |headers: HeaderMap, axum::Json(body): axum::Json<Value>| {
                let captured = captured.clone();
                async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    *captured.lock().unwrap() = Some((auth, body));
                    axum::Json(completion("  hello friend  "))
                }
            }),
        );
        let model = model_at(&serve(app).await);

        let reply = model.generate_reply("hi", ChatStyle::Friend, &[]).await;
        assert_eq!(reply, "hello friend");

        let (auth, body) = seen.lock().unwrap().clone().unwrap();
        assert_eq!(auth, "Bearer test-key");
        assert_eq!(body["model"], "test-model");
        assert_eq!(body["temperature"], json!(0.85));
        assert_eq!(body["top_p"], json!(0.9));
        assert_eq!(body["messages"].as_array().unwrap().len(), 1 + FEW_SHOT.len() + 1);
    }

    #[tokio::test]
    async fn generate_reply_falls_back_on_error() {
        let app = Router::new().route(
            "/chat/completions",
            post(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
        );
        let model = model_at(&serve(app).await);

        let reply = model.generate_reply("hi", ChatStyle::Friend, &[]).await;
        assert_eq!(reply, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn analyze_emotion_reads_verdict() {
        let app = Router::new().route(
            "/chat/completions",
            post(|| async { axum::Json(completion(r#"{"emotion":"sad","reason":"lonely"}"#)) }),
        );
        let model = model_at(&serve(app).await);

        let (e, reason) = model.analyze_emotion("nobody calls me").await;
        assert_eq!(e, DetectedEmotion::Sad);
        assert_eq!(reason, "lonely");
    }

    #[tokio::test]
    async fn analyze_emotion_garbage_is_neutral() {
        let app = Router::new().route(
            "/chat/completions",
            post(|| async { axum::Json(completion("sad, probably")) }),
        );
        let model = model_at(&serve(app).await);

        let (e, reason) = model.analyze_emotion("meh").await;
        assert_eq!(e, DetectedEmotion::Neutral);
        assert_eq!(reason, ANALYSIS_FAILED_REASON);
    }

    #[tokio::test]
    async fn offline_model_is_deterministic() {
        let model = LanguageModel::Offline;
        let (e, _) = model.analyze_emotion("anything").await;
        assert_eq!(e, DetectedEmotion::Neutral);
        assert_eq!(
            model.generate_reply("hi", ChatStyle::Cartoon, &[]).await,
            offline_reply(ChatStyle::Cartoon)
        );
    }
}
