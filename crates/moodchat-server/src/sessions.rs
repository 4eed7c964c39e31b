//! In-memory chat sessions.
//!
//! Each session keeps its exchange log (which doubles as the emotion log the
//! trend endpoints read) and the time of the last care prompt. Nothing is
//! persisted; a restart starts from the three seeded companions.

use std::collections::BTreeMap;

use chrono::{DateTime, Local, Utc};
use moodchat_models::{DetectedEmotion, TREND_TIMESTAMP_FORMAT, TrendPoint};
use serde::Serialize;

use crate::llm::Turn;

/// Session used by the plain `/api/chat/` endpoint.
pub const DEFAULT_SESSION_ID: u64 = 1;

/// Number of past exchanges loaded as reply context.
const HISTORY_WINDOW: usize = 10;

/// One logged exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatLogEntry {
    pub user_message: String,
    pub camera_emotion: DetectedEmotion,
    pub text_emotion: DetectedEmotion,
    pub response: String,
    pub created_at: DateTime<Utc>,
}

/// Public description of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionInfo {
    pub id: u64,
    pub name: String,
    pub animal: Option<String>,
}

#[derive(Debug, Clone)]
struct Session {
    info: SessionInfo,
    logs: Vec<ChatLogEntry>,
    last_care_at: Option<DateTime<Utc>>,
}

impl Session {
    fn new(id: u64, name: &str, animal: Option<&str>) -> Self {
        Self {
            info: SessionInfo {
                id,
                name: name.to_string(),
                animal: animal.map(str::to_string),
            },
            logs: Vec::new(),
            last_care_at: None,
        }
    }
}

/// All sessions, keyed by id.
#[derive(Debug)]
pub struct SessionStore {
    sessions: BTreeMap<u64, Session>,
    care_cooldown_secs: i64,
}

impl SessionStore {
    /// A store seeded with the three companion sessions.
    pub fn new(care_cooldown_secs: i64) -> Self {
        let sessions = [
            Session::new(1, "Lulu Pig", Some("pig")),
            Session::new(2, "Bubble Puppy", Some("dog")),
            Session::new(3, "Fluffy Bunny", Some("rabbit")),
        ]
        .into_iter()
        .map(|s| (s.info.id, s))
        .collect();

        Self {
            sessions,
            care_cooldown_secs,
        }
    }

    pub fn list(&self) -> Vec<SessionInfo> {
        self.sessions.values().map(|s| s.info.clone()).collect()
    }

    /// The last ten exchanges of the session, oldest first. `None` for an
    /// unknown session.
    pub fn history(&self, id: u64) -> Option<Vec<Turn>> {
        let session = self.sessions.get(&id)?;
        let skip = session.logs.len().saturating_sub(HISTORY_WINDOW);
        Some(
            session.logs[skip..]
                .iter()
                .map(|log| Turn {
                    user: log.user_message.clone(),
                    bot: log.response.clone(),
                })
                .collect(),
        )
    }

    /// Whether a care prompt may be shown now. Records `now` as the last
    /// care time when it returns `Some(true)`.
    pub fn claim_care_prompt(&mut self, id: u64, now: DateTime<Utc>) -> Option<bool> {
        let cooldown = self.care_cooldown_secs;
        let session = self.sessions.get_mut(&id)?;
        let due = session
            .last_care_at
            .is_none_or(|last| (now - last).num_seconds() > cooldown);
        if due {
            session.last_care_at = Some(now);
        }
        Some(due)
    }

    /// Append an exchange to the session log. `None` for an unknown session.
    pub fn record(&mut self, id: u64, entry: ChatLogEntry) -> Option<()> {
        self.sessions.get_mut(&id)?.logs.push(entry);
        Some(())
    }

    /// Trend points of a session, in log order.
    pub fn trend(&self, id: u64) -> Option<Vec<TrendPoint>> {
        let session = self.sessions.get(&id)?;
        Some(
            session
                .logs
                .iter()
                .map(|log| TrendPoint {
                    timestamp: log
                        .created_at
                        .with_timezone(&Local)
                        .format(TREND_TIMESTAMP_FORMAT)
                        .to_string(),
                    camera_emotion: log.camera_emotion,
                    text_emotion: log.text_emotion,
                })
                .collect(),
        )
    }

    /// Client-reported emotions of a session, in log order.
    pub fn camera_emotions(&self, id: u64) -> Option<Vec<DetectedEmotion>> {
        let session = self.sessions.get(&id)?;
        Some(session.logs.iter().map(|log| log.camera_emotion).collect())
    }
}
