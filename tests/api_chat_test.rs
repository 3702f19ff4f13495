//! Integration tests for the chat API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tokio::time::sleep;
    use tokio_stream::StreamExt;

    use financeai::ai::chat::corpus::DEFAULT_REPLIES;
    use financeai::ai::chat::{
        DEFAULT_GREETING, DEFAULT_RESPONDING_DELAY, DEFAULT_THINKING_DELAY, Phase, Role,
    };
    use financeai::api::public::chat::{
        ChatResponse, ChatSessionsResponse, ChatTranscriptResponse, Outcome,
    };

    use crate::test_utils::{
        body_to_json, body_to_string, create_session, get, next_sse_events, post_empty,
        post_json, send, test_app,
    };

    const MARGIN: Duration = Duration::from_millis(10);

    async fn transcript(app: &axum::Router, id: &str) -> ChatTranscriptResponse {
        let response = get(app, &format!("/api/chat/{id}")).await;
        assert_eq!(response.status(), StatusCode::OK);
        body_to_json(response.into_body()).await
    }

    /// Tests a new session is seeded with only the greeting
    #[tokio::test]
    async fn it_creates_a_seeded_session() {
        let app = test_app();

        let response = post_empty(&app, "/api/chat").await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let session: ChatTranscriptResponse = body_to_json(response.into_body()).await;
        assert!(!session.session_id.is_empty());
        assert_eq!(session.phase, Phase::Idle);
        assert_eq!(session.transcript.len(), 1);
        assert_eq!(session.transcript[0].role, Role::Assistant);
        assert_eq!(session.transcript[0].content, DEFAULT_GREETING);
    }

    /// Tests the full turn from submission to settled reply
    #[tokio::test(start_paused = true)]
    async fn it_runs_a_simulated_turn() {
        let app = test_app();
        let id = create_session(&app).await;

        let response = post_json(
            &app,
            &format!("/api/chat/{id}/messages"),
            json!({ "message": "What should I invest in?" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let submitted: ChatResponse = body_to_json(response.into_body()).await;
        assert_eq!(submitted.outcome, Outcome::Accepted);
        assert_eq!(submitted.phase, Phase::Thinking);
        assert_eq!(submitted.transcript.len(), 2);
        assert_eq!(submitted.transcript[1].role, Role::User);
        assert_eq!(submitted.transcript[1].content, "What should I invest in?");

        sleep(DEFAULT_THINKING_DELAY + MARGIN).await;
        let session = transcript(&app, &id).await;
        assert_eq!(session.phase, Phase::Responding);
        assert_eq!(session.transcript.len(), 2);

        sleep(DEFAULT_RESPONDING_DELAY).await;
        let session = transcript(&app, &id).await;
        assert_eq!(session.phase, Phase::Idle);
        assert_eq!(session.transcript.len(), 3);
        let reply = &session.transcript[2];
        assert_eq!(reply.role, Role::Assistant);
        assert!(DEFAULT_REPLIES.contains(&reply.content.as_str()));
    }

    /// Tests whitespace-only messages leave the session untouched
    #[tokio::test(start_paused = true)]
    async fn it_ignores_empty_messages() {
        let app = test_app();
        let id = create_session(&app).await;

        let response = post_json(
            &app,
            &format!("/api/chat/{id}/messages"),
            json!({ "message": "   " }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let submitted: ChatResponse = body_to_json(response.into_body()).await;
        assert_eq!(submitted.outcome, Outcome::Empty);
        assert_eq!(submitted.phase, Phase::Idle);
        assert_eq!(submitted.transcript.len(), 1);
    }

    /// Tests a second message while a turn is pending is dropped
    #[tokio::test(start_paused = true)]
    async fn it_ignores_messages_while_busy() {
        let app = test_app();
        let id = create_session(&app).await;
        let uri = format!("/api/chat/{id}/messages");

        post_json(&app, &uri, json!({ "message": "first" })).await;
        let response = post_json(&app, &uri, json!({ "message": "second" })).await;

        let submitted: ChatResponse = body_to_json(response.into_body()).await;
        assert_eq!(submitted.outcome, Outcome::Busy);
        assert_eq!(submitted.transcript.len(), 2);

        sleep(DEFAULT_THINKING_DELAY + DEFAULT_RESPONDING_DELAY + MARGIN).await;
        let session = transcript(&app, &id).await;
        assert_eq!(session.transcript.len(), 3);
        assert_eq!(session.transcript[1].content, "first");
    }

    /// Tests a reset mid-turn drops the pending reply
    #[tokio::test(start_paused = true)]
    async fn it_resets_and_cancels_pending_turn() {
        let app = test_app();
        let id = create_session(&app).await;

        post_json(
            &app,
            &format!("/api/chat/{id}/messages"),
            json!({ "message": "Hello" }),
        )
        .await;
        sleep(DEFAULT_THINKING_DELAY + MARGIN).await;

        let response = post_empty(&app, &format!("/api/chat/{id}/reset")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let session: ChatTranscriptResponse = body_to_json(response.into_body()).await;
        assert_eq!(session.phase, Phase::Idle);
        assert_eq!(session.transcript.len(), 1);

        sleep(Duration::from_secs(10)).await;
        let session = transcript(&app, &id).await;
        assert_eq!(session.phase, Phase::Idle);
        assert_eq!(session.transcript.len(), 1);
        assert_eq!(session.transcript[0].content, DEFAULT_GREETING);
    }

    /// Tests listing sessions
    #[tokio::test]
    async fn it_lists_sessions() {
        let app = test_app();

        let response = get(&app, "/api/chat/sessions").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("\"total_sessions\":0"));

        let a = create_session(&app).await;
        let b = create_session(&app).await;

        let response = get(&app, "/api/chat/sessions").await;
        let sessions: ChatSessionsResponse = body_to_json(response.into_body()).await;
        assert_eq!(sessions.total_sessions, 2);
        let ids: Vec<&str> = sessions
            .sessions
            .iter()
            .map(|s| s.session_id.as_str())
            .collect();
        assert!(ids.contains(&a.as_str()));
        assert!(ids.contains(&b.as_str()));
        assert!(sessions.sessions.iter().all(|s| s.message_count == 1));
    }

    /// Tests deleting a session removes it
    #[tokio::test(start_paused = true)]
    async fn it_deletes_a_session() {
        let app = test_app();
        let id = create_session(&app).await;
        post_json(
            &app,
            &format!("/api/chat/{id}/messages"),
            json!({ "message": "Hello" }),
        )
        .await;

        let response = send(
            &app,
            Request::builder()
                .uri(format!("/api/chat/{id}"))
                .method("DELETE")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = get(&app, &format!("/api/chat/{id}")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Tests unknown session IDs return 404 on every route
    #[tokio::test]
    async fn it_returns_404_for_nonexistent_session() {
        let app = test_app();

        let response = get(&app, "/api/chat/nonexistent-session-id").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("nonexistent-session-id"));

        let response = post_json(
            &app,
            "/api/chat/nonexistent-session-id/messages",
            json!({ "message": "Hello" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = post_empty(&app, "/api/chat/nonexistent-session-id/reset").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = get(&app, "/api/chat/nonexistent-session-id/events").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Tests chat POST returns 422 for missing message
    #[tokio::test]
    async fn it_returns_422_for_missing_message() {
        let app = test_app();
        let id = create_session(&app).await;

        let response = post_json(&app, &format!("/api/chat/{id}/messages"), json!({})).await;

        // Missing required field should return 422 (validation error)
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    /// Tests the event stream is served as SSE
    #[tokio::test]
    async fn it_streams_session_events() {
        let app = test_app();
        let id = create_session(&app).await;

        let response = get(&app, &format!("/api/chat/{id}/events")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("text/event-stream"));
    }

    /// Tests a turn is streamed as a snapshot followed by each change
    #[tokio::test(start_paused = true)]
    async fn it_streams_a_turn_in_order() {
        let app = test_app();
        let id = create_session(&app).await;

        let response = get(&app, &format!("/api/chat/{id}/events")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let mut stream = response.into_body().into_data_stream();

        post_json(
            &app,
            &format!("/api/chat/{id}/messages"),
            json!({ "message": "hi" }),
        )
        .await;
        sleep(DEFAULT_THINKING_DELAY + DEFAULT_RESPONDING_DELAY + MARGIN).await;

        let events = next_sse_events(&mut stream, 6).await;
        assert_eq!(events.len(), 6);

        let (name, snapshot) = &events[0];
        assert_eq!(name, "snapshot");
        assert_eq!(snapshot["session_id"], id.as_str());
        assert_eq!(snapshot["phase"], "idle");
        assert_eq!(snapshot["transcript"][0]["content"], DEFAULT_GREETING);

        assert!(events[1..].iter().all(|(name, _)| name == "chat"));
        assert_eq!(events[1].1["type"], "user_message");
        assert_eq!(events[1].1["message"]["role"], "user");
        assert_eq!(events[1].1["message"]["content"], "hi");
        assert_eq!(events[2].1, json!({ "type": "phase_changed", "phase": "thinking" }));
        assert_eq!(events[3].1, json!({ "type": "phase_changed", "phase": "responding" }));
        assert_eq!(events[4].1["type"], "assistant_message");
        assert_eq!(events[4].1["message"]["role"], "assistant");
        let reply = events[4].1["message"]["content"].as_str().unwrap();
        assert!(DEFAULT_REPLIES.contains(&reply));
        assert_eq!(events[5].1, json!({ "type": "phase_changed", "phase": "idle" }));
    }

    /// Tests a reset mid-turn is streamed and the dropped reply never is
    #[tokio::test(start_paused = true)]
    async fn it_streams_a_reset_without_the_cancelled_reply() {
        let app = test_app();
        let id = create_session(&app).await;

        let response = get(&app, &format!("/api/chat/{id}/events")).await;
        let mut stream = response.into_body().into_data_stream();

        post_json(
            &app,
            &format!("/api/chat/{id}/messages"),
            json!({ "message": "hi" }),
        )
        .await;
        sleep(DEFAULT_THINKING_DELAY + MARGIN).await;
        post_empty(&app, &format!("/api/chat/{id}/reset")).await;
        sleep(Duration::from_secs(10)).await;

        let events = next_sse_events(&mut stream, 5).await;
        let types: Vec<&str> = events[1..]
            .iter()
            .map(|(_, data)| data["type"].as_str().unwrap())
            .collect();
        assert_eq!(
            types,
            vec!["user_message", "phase_changed", "phase_changed", "reset"]
        );
        assert_eq!(events[3].1["phase"], "responding");

        let transcript = events[4].1["transcript"].as_array().unwrap();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0]["content"], DEFAULT_GREETING);

        // Nothing else is waiting on the stream
        let next = tokio::time::timeout(Duration::from_secs(1), stream.next()).await;
        assert!(next.is_err());
    }
}
