//! Router for the chat API

use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, sse::Event, sse::KeepAlive, sse::Sse},
    routing::{get, post},
};
use tokio_stream::StreamExt as _;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use super::public;
use crate::ai::chat::Chat;
use crate::api::public::ApiError;
use crate::api::state::{SharedState, read_state, write_state};

fn find_session(state: &SharedState, id: &str) -> Result<Chat, ApiError> {
    read_state(state)
        .session(id)
        .ok_or_else(|| ApiError::NotFound(format!("Chat session {} not found", id)))
}

/// Start a new chat session seeded with the greeting
async fn create_session(State(state): State<SharedState>) -> impl IntoResponse {
    let chat = write_state(&state).create_session();
    let resp: public::ChatTranscriptResponse = chat.snapshot().into();
    (StatusCode::CREATED, Json(resp))
}

/// Get a list of all chat sessions
async fn chat_list(State(state): State<SharedState>) -> Json<public::ChatSessionsResponse> {
    let chats: Vec<Chat> = read_state(&state).sessions.values().cloned().collect();
    let mut sessions: Vec<public::ChatSession> = chats
        .iter()
        .map(|chat| {
            let snapshot = chat.snapshot();
            public::ChatSession {
                session_id: snapshot.session_id,
                phase: snapshot.phase,
                message_count: snapshot.transcript.len(),
            }
        })
        .collect();
    sessions.sort_by(|a, b| a.session_id.cmp(&b.session_id));

    Json(public::ChatSessionsResponse {
        total_sessions: sessions.len(),
        sessions,
    })
}

/// Get a single chat session by ID
async fn chat_session(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<public::ChatTranscriptResponse>, ApiError> {
    let chat = find_session(&state, &id)?;
    Ok(Json(chat.snapshot().into()))
}

/// Submit a user message. The reply is appended later, watch the
/// session or its event stream to see it arrive.
async fn chat_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<public::ChatRequest>,
) -> Result<Json<public::ChatResponse>, ApiError> {
    let chat = find_session(&state, &id)?;
    let outcome = chat.submit(&payload.message);
    let snapshot = chat.snapshot();

    Ok(Json(public::ChatResponse {
        outcome: outcome.into(),
        phase: snapshot.phase,
        transcript: snapshot.transcript,
    }))
}

/// Clear the transcript back to the greeting
async fn chat_reset(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<public::ChatTranscriptResponse>, ApiError> {
    let chat = find_session(&state, &id)?;
    chat.reset();
    Ok(Json(chat.snapshot().into()))
}

async fn chat_delete(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    write_state(&state)
        .remove_session(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Chat session {} not found", id)))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Stream every change to a session as server sent events. The
/// first event is a `snapshot` of the session at subscription time.
async fn chat_events(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let chat = find_session(&state, &id)?;

    // Subscribe before taking the snapshot so no change slips between
    let rx = chat.subscribe();
    let initial = Event::default()
        .event("snapshot")
        .json_data(public::ChatTranscriptResponse::from(chat.snapshot()));

    let session_id = id.clone();
    let updates = BroadcastStream::new(rx).filter_map(move |event| match event {
        Ok(event) => Some(Event::default().event("chat").json_data(event)),
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            tracing::warn!(session_id = %session_id, skipped, "Event subscriber lagged");
            None
        }
    });
    let sse_stream = tokio_stream::once(initial).chain(updates);

    let resp = Sse::new(sse_stream)
        .keep_alive(
            KeepAlive::default()
                .text("keep-alive")
                .interval(Duration::from_secs(15)),
        )
        .into_response();

    Ok(resp)
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(create_session))
        .route("/sessions", get(chat_list))
        .route("/{id}", get(chat_session).delete(chat_delete))
        .route("/{id}/messages", post(chat_handler))
        .route("/{id}/reset", post(chat_reset))
        .route("/{id}/events", get(chat_events))
}
