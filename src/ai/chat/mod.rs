//! Simulated advisor chat. Replies come from a fixed corpus after an
//! artificial two stage delay.
mod core;
pub mod corpus;
pub mod models;

pub use self::core::{
    Chat, ChatBuilder, DEFAULT_GREETING, DEFAULT_RESPONDING_DELAY, DEFAULT_THINKING_DELAY,
    TurnDelays,
};
pub use corpus::ReplyCorpus;
pub use models::{ChatEvent, IgnoreReason, Message, Phase, Role, Snapshot, SubmitOutcome};
