//! The submit flow, run against any [`WidgetHandle`].

use std::sync::{Arc, Mutex};

use moodchat_sdk::{ChatClient, OutgoingMessage};
use tracing::{info, warn};

use crate::state::WidgetState;

/// Shared access to a [`WidgetState`].
///
/// The closure must not block; it runs between suspension points of the
/// submit flow and never across the network call.
pub trait WidgetHandle {
    /// Run `f` with exclusive access to the state.
    fn with_state<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> R;
}

impl WidgetHandle for Arc<Mutex<WidgetState>> {
    fn with_state<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> R {
        let mut guard = self.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

/// What a submission ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty after trimming; nothing happened.
    Ignored,
    /// The reply was appended to the transcript.
    Replied,
    /// The request failed; only the user entry is visible.
    Failed,
}

/// The chat widget's submit handler, bound to one server.
#[derive(Clone, Debug)]
pub struct ChatWidget {
    client: ChatClient,
}

impl ChatWidget {
    /// A widget posting through `client`.
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }

    /// Handle one form submission.
    ///
    /// Each call is independent: overlapping submissions each issue their
    /// own request and append their reply whenever it resolves. Failures
    /// are logged and leave no trace in the transcript.
    pub async fn submit<H: WidgetHandle>(&self, handle: &H) -> SubmitOutcome {
        let Some(msg) = handle.with_state(WidgetState::begin_submit) else {
            return SubmitOutcome::Ignored;
        };
        self.complete(msg, handle).await
    }

    /// Asynchronous half of a submission: post `msg` and append the reply.
    ///
    /// Front-ends that run [`WidgetState::begin_submit`] inside their own
    /// event handler call this from the spawned task.
    pub async fn complete<H: WidgetHandle>(&self, msg: OutgoingMessage, handle: &H) -> SubmitOutcome {
        info!(emotion = %msg.emotion, chars = msg.message.chars().count(), "message submitted");

        match self.client.send(&msg).await {
            Ok(reply) => {
                handle.with_state(|state| state.apply_reply(&reply));
                SubmitOutcome::Replied
            }
            Err(e) => {
                warn!(error = %e, endpoint = %self.client.endpoint(), "chat request failed");
                SubmitOutcome::Failed
            }
        }
    }
}
