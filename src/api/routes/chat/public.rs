//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::ai::chat::{IgnoreReason, Message, Phase, Snapshot, SubmitOutcome};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChatSession {
    pub session_id: String,
    pub phase: Phase,
    pub message_count: usize,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChatSessionsResponse {
    pub sessions: Vec<ChatSession>,
    pub total_sessions: usize,
}

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Accepted,
    Empty,
    Busy,
}

impl From<SubmitOutcome> for Outcome {
    fn from(outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Accepted => Outcome::Accepted,
            SubmitOutcome::Ignored(IgnoreReason::Empty) => Outcome::Empty,
            SubmitOutcome::Ignored(IgnoreReason::Busy) => Outcome::Busy,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChatResponse {
    pub outcome: Outcome,
    pub phase: Phase,
    pub transcript: Vec<Message>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChatTranscriptResponse {
    pub session_id: String,
    pub phase: Phase,
    pub transcript: Vec<Message>,
}

impl From<Snapshot> for ChatTranscriptResponse {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            session_id: snapshot.session_id,
            phase: snapshot.phase,
            transcript: snapshot.transcript,
        }
    }
}
