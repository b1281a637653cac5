//! # Assistant Service
//!
//! A chat session with a local assistant.
//!
//! ## Philosophy
//!
//! - **Explicit time**: The caller passes `now_ms`; the session never reads a clock
//! - **One reply in flight**: A second prompt is refused until the reply lands
//! - **Swappable backend**: Replies come from a [`Responder`]; the stub echoes
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - Model inference (the stub never looks at project content)
//! - Streaming (a reply appears whole once due)
//!
//! ## Example
//!
//! ```ignore
//! use services_assistant::{AssistantSession, StubResponder};
//!
//! let mut session = AssistantSession::new(StubResponder, greeting, 1500);
//! session.send("How do I center a div?", 0)?;
//! assert!(session.poll(1000).is_none());
//! assert!(session.poll(1500).is_some());
//! ```

pub mod responder;

pub use responder::{Responder, StubResponder};

use input_types::{Key, KeyEvent, Modifiers};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    #[serde(rename = "content")]
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// Errors from sending a prompt
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssistantError {
    #[error("Prompt is empty")]
    EmptyPrompt,

    #[error("A reply is still being generated")]
    ReplyPending,
}

#[derive(Debug, Clone)]
struct PendingReply {
    prompt: String,
    due_at_ms: u64,
}

/// Ordered conversation plus the one reply that may be in flight
#[derive(Debug)]
pub struct AssistantSession<R: Responder> {
    responder: R,
    history: Vec<ChatMessage>,
    pending: Option<PendingReply>,
    reply_delay_ms: u64,
}

impl<R: Responder> AssistantSession<R> {
    /// Starts a session whose history holds only the greeting
    pub fn new(responder: R, greeting: impl Into<String>, reply_delay_ms: u64) -> Self {
        Self {
            responder,
            history: vec![ChatMessage::assistant(greeting)],
            pending: None,
            reply_delay_ms,
        }
    }

    /// Messages in order, greeting first
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Returns true while a reply is scheduled but not yet appended
    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending reply is due, if any
    pub fn reply_due_at(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.due_at_ms)
    }

    /// Appends the user's prompt and schedules a reply
    ///
    /// The prompt is kept exactly as typed; only the blank check trims it.
    pub fn send(&mut self, prompt: &str, now_ms: u64) -> Result<(), AssistantError> {
        if prompt.trim().is_empty() {
            return Err(AssistantError::EmptyPrompt);
        }
        if self.pending.is_some() {
            return Err(AssistantError::ReplyPending);
        }

        self.history.push(ChatMessage::user(prompt));
        let due_at_ms = now_ms.saturating_add(self.reply_delay_ms);
        self.pending = Some(PendingReply {
            prompt: prompt.to_string(),
            due_at_ms,
        });
        debug!(due_at_ms, "assistant reply scheduled");
        Ok(())
    }

    /// Appends the reply once it is due, returning it
    pub fn poll(&mut self, now_ms: u64) -> Option<&ChatMessage> {
        let due = self.pending.as_ref()?.due_at_ms;
        if now_ms < due {
            return None;
        }
        let pending = self.pending.take()?;
        let reply = self.responder.respond(&pending.prompt, &self.history);
        self.history.push(ChatMessage::assistant(reply));
        self.history.last()
    }

    pub fn responder(&self) -> &R {
        &self.responder
    }
}

/// Returns true for the keystroke that submits the prompt box: Enter without Shift
///
/// Shift+Enter inserts a newline instead.
pub fn is_submit_key(event: &KeyEvent) -> bool {
    event.is_down() && event.key == Key::Enter && !event.modifiers.contains(Modifiers::SHIFT)
}
