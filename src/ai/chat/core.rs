use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::corpus::ReplyCorpus;
use super::models::{
    ChatEvent, IgnoreReason, Message, Phase, Role, Snapshot, SubmitOutcome, Transcript,
};

pub const DEFAULT_GREETING: &str = "Welcome to FinanceAI! I can help with investment strategies, market analysis, retirement planning, and more. What questions do you have about your finances today?";
pub const DEFAULT_THINKING_DELAY: Duration = Duration::from_millis(1500);
pub const DEFAULT_RESPONDING_DELAY: Duration = Duration::from_millis(800);
const DEFAULT_EVENT_CAPACITY: usize = 64;

/// The two artificial latencies of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnDelays {
    pub thinking: Duration,
    pub responding: Duration,
}

impl TurnDelays {
    pub fn total(&self) -> Duration {
        self.thinking + self.responding
    }
}

impl Default for TurnDelays {
    fn default() -> Self {
        Self {
            thinking: DEFAULT_THINKING_DELAY,
            responding: DEFAULT_RESPONDING_DELAY,
        }
    }
}

struct PendingTurn {
    id: u64,
    cancel: CancellationToken,
}

struct ChatState {
    transcript: Transcript,
    phase: Phase,
    pending: Option<PendingTurn>,
    next_turn_id: u64,
}

impl ChatState {
    fn owns(&self, turn_id: u64) -> bool {
        self.pending.as_ref().is_some_and(|p| p.id == turn_id)
    }
}

/// A simulated advisor chat session.
///
/// Each accepted submission runs a fixed two stage latency
/// (thinking, then responding) before a canned reply is appended to
/// the transcript. Nothing is computed and nothing leaves the
/// process.
///
/// `Chat` is a handle: clones share the same session. Submitting
/// schedules work on the current tokio runtime so it must be called
/// from within one.
///
/// Use `ChatBuilder` to construct a `Chat`.
#[derive(Clone)]
pub struct Chat {
    session_id: String,
    greeting: String,
    corpus: Arc<ReplyCorpus>,
    delays: TurnDelays,
    state: Arc<Mutex<ChatState>>,
    events: broadcast::Sender<ChatEvent>,
}

impl Chat {
    fn lock(&self) -> MutexGuard<'_, ChatState> {
        // State is only mutated in short critical sections with no
        // panicking calls, so a poisoned lock still holds valid data.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, event: ChatEvent) {
        // Sending only fails when nobody is subscribed
        let _ = self.events.send(event);
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn corpus(&self) -> &ReplyCorpus {
        &self.corpus
    }

    pub fn delays(&self) -> TurnDelays {
        self.delays
    }

    pub fn transcript(&self) -> Vec<Message> {
        self.lock().transcript.messages()
    }

    pub fn phase(&self) -> Phase {
        self.lock().phase
    }

    pub fn snapshot(&self) -> Snapshot {
        let state = self.lock();
        Snapshot {
            session_id: self.session_id.clone(),
            phase: state.phase,
            transcript: state.transcript.messages(),
        }
    }

    /// Receive every transcript and phase change from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.events.subscribe()
    }

    /// Submit user text and start a simulated turn.
    ///
    /// Whitespace-only text and submissions made while a turn is in
    /// flight are dropped without touching any state. Otherwise the
    /// user message is appended immediately, exactly as given, and
    /// one assistant message follows once both delays elapse.
    pub fn submit(&self, text: &str) -> SubmitOutcome {
        if text.trim().is_empty() {
            tracing::debug!(session_id = %self.session_id, "Ignoring empty submission");
            return SubmitOutcome::Ignored(IgnoreReason::Empty);
        }

        let (turn_id, cancel) = {
            let mut state = self.lock();
            if state.phase.is_pending() {
                tracing::debug!(
                    session_id = %self.session_id,
                    phase = ?state.phase,
                    "Ignoring submission while a turn is pending"
                );
                return SubmitOutcome::Ignored(IgnoreReason::Busy);
            }

            let user_msg = Message::new(Role::User, text);
            state.transcript.push(user_msg.clone());
            state.phase = Phase::Thinking;
            state.next_turn_id += 1;
            let turn_id = state.next_turn_id;
            let cancel = CancellationToken::new();
            state.pending = Some(PendingTurn {
                id: turn_id,
                cancel: cancel.clone(),
            });

            self.emit(ChatEvent::UserMessage { message: user_msg });
            self.emit(ChatEvent::PhaseChanged {
                phase: Phase::Thinking,
            });
            (turn_id, cancel)
        };

        tracing::debug!(session_id = %self.session_id, turn_id, "Turn started");
        tokio::spawn(self.clone().run_turn(turn_id, cancel));

        SubmitOutcome::Accepted
    }

    /// Start over with only the greeting. Any turn in flight is
    /// cancelled and will never append to the new transcript.
    pub fn reset(&self) {
        let mut state = self.lock();
        if let Some(pending) = state.pending.take() {
            pending.cancel.cancel();
            tracing::debug!(
                session_id = %self.session_id,
                turn_id = pending.id,
                "Cancelled pending turn on reset"
            );
        }
        state.transcript = Transcript::seeded(&self.greeting);
        state.phase = Phase::Idle;

        self.emit(ChatEvent::Reset {
            transcript: state.transcript.messages(),
        });
    }

    /// Tear down the session. Cancels a turn in flight but leaves the
    /// transcript as it is.
    pub fn close(&self) {
        let mut state = self.lock();
        if let Some(pending) = state.pending.take() {
            pending.cancel.cancel();
            state.phase = Phase::Idle;
            self.emit(ChatEvent::PhaseChanged { phase: Phase::Idle });
            tracing::debug!(
                session_id = %self.session_id,
                turn_id = pending.id,
                "Cancelled pending turn on close"
            );
        }
    }

    async fn wait(cancel: &CancellationToken, delay: Duration) -> bool {
        tokio::select! {
            _ = cancel.cancelled() => false,
            _ = tokio::time::sleep(delay) => true,
        }
    }

    /// The scheduled continuation of a turn. Checks it still owns the
    /// pending slot before every mutation so a continuation that woke
    /// up just as the session was reset is a no-op.
    async fn run_turn(self, turn_id: u64, cancel: CancellationToken) {
        if !Self::wait(&cancel, self.delays.thinking).await {
            return;
        }

        {
            let mut state = self.lock();
            if !state.owns(turn_id) {
                return;
            }
            state.phase = Phase::Responding;
            self.emit(ChatEvent::PhaseChanged {
                phase: Phase::Responding,
            });
        }

        if !Self::wait(&cancel, self.delays.responding).await {
            return;
        }

        let mut state = self.lock();
        if !state.owns(turn_id) {
            return;
        }
        let reply = self.corpus.pick(&mut rand::thread_rng()).to_string();
        let assistant_msg = Message::new(Role::Assistant, &reply);
        state.transcript.push(assistant_msg.clone());
        state.phase = Phase::Idle;
        state.pending = None;

        self.emit(ChatEvent::AssistantMessage {
            message: assistant_msg,
        });
        self.emit(ChatEvent::PhaseChanged { phase: Phase::Idle });
        tracing::debug!(session_id = %self.session_id, turn_id, "Turn settled");
    }
}

pub struct ChatBuilder {
    session_id: Option<String>,
    greeting: String,
    corpus: ReplyCorpus,
    delays: TurnDelays,
    event_capacity: usize,
}

impl Default for ChatBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatBuilder {
    pub fn new() -> Self {
        Self {
            session_id: None,
            greeting: DEFAULT_GREETING.to_string(),
            corpus: ReplyCorpus::default(),
            delays: TurnDelays::default(),
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }

    pub fn build(self) -> Chat {
        let session_id = self
            .session_id
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let (events, _) = broadcast::channel(self.event_capacity);
        let state = ChatState {
            transcript: Transcript::seeded(&self.greeting),
            phase: Phase::Idle,
            pending: None,
            next_turn_id: 0,
        };

        Chat {
            session_id,
            greeting: self.greeting,
            corpus: Arc::new(self.corpus),
            delays: self.delays,
            state: Arc::new(Mutex::new(state)),
            events,
        }
    }

    /// Defaults to a random UUID when not set
    pub fn session_id(mut self, id: &str) -> Self {
        self.session_id = Some(id.to_string());
        self
    }

    pub fn greeting(mut self, greeting: &str) -> Self {
        self.greeting = greeting.to_string();
        self
    }

    pub fn corpus(mut self, corpus: ReplyCorpus) -> Self {
        self.corpus = corpus;
        self
    }

    pub fn delays(mut self, delays: TurnDelays) -> Self {
        self.delays = delays;
        self
    }

    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity.max(1);
        self
    }
}
