//! The core models for a simulated chat session.
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

/// Where the in-flight turn is. `Thinking` and `Responding` only
/// differ in which indicator the presentation layer shows.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Thinking,
    Responding,
}

impl Phase {
    pub fn is_pending(&self) -> bool {
        !matches!(self, Phase::Idle)
    }
}

/// Append-only list of messages. The first entry is always the
/// greeting the transcript was seeded with.
#[derive(Clone, Debug)]
pub struct Transcript(Vec<Message>);

impl Transcript {
    pub fn seeded(greeting: &str) -> Self {
        Self(vec![Message::new(Role::Assistant, greeting)])
    }

    pub fn messages(&self) -> Vec<Message> {
        self.0.clone()
    }

    pub fn push(&mut self, msg: Message) {
        self.0.push(msg)
    }

    // Never empty, it always holds the greeting
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn last(&self) -> Option<&Message> {
        self.0.last()
    }
}

/// Why a submission was dropped. Neither case is an error.
#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IgnoreReason {
    Empty,
    Busy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Ignored(IgnoreReason),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

/// Notifications emitted whenever the transcript or phase changes so
/// a presentation layer knows when to re-render.
#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    UserMessage { message: Message },
    PhaseChanged { phase: Phase },
    AssistantMessage { message: Message },
    Reset { transcript: Vec<Message> },
}

/// A consistent read of a session taken under a single lock.
#[derive(Clone, Serialize, Debug)]
pub struct Snapshot {
    pub session_id: String,
    pub phase: Phase,
    pub transcript: Vec<Message>,
}
