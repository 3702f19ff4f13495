//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::{Arc, RwLock};
use std::time::Duration;

use axum::{
    Router,
    body::{Body, BodyDataStream},
    http::{Request, Response},
};
use serde::de::DeserializeOwned;
use tokio_stream::StreamExt;
use tower::util::ServiceExt;

use financeai::ai::chat::{DEFAULT_GREETING, TurnDelays};
use financeai::api::{AppState, app};
use financeai::core::AppConfig;

pub fn test_config() -> AppConfig {
    AppConfig {
        greeting: DEFAULT_GREETING.to_string(),
        turn_delays: TurnDelays::default(),
        testimonial_interval: Duration::from_millis(5000),
        marquee_interval: Duration::from_millis(4000),
    }
}

/// Creates a test application router with no sessions and carousels
/// that are not auto advancing.
pub fn test_app() -> Router {
    let app_state = AppState::new(test_config());
    app(Arc::new(RwLock::new(app_state)))
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(
        app,
        Request::builder()
            .uri(uri)
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn post_empty(app: &Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder()
            .uri(uri)
            .method("POST")
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_to_json<T: DeserializeOwned>(body: Body) -> T {
    let body = body_to_string(body).await;
    serde_json::from_str(&body).unwrap()
}

/// Create a chat session and return its ID
pub async fn create_session(app: &Router) -> String {
    let response = post_empty(app, "/api/chat").await;
    let json: serde_json::Value = body_to_json(response.into_body()).await;
    json["session_id"].as_str().unwrap().to_string()
}

/// Read server sent events off the stream until at least `count` named
/// events have arrived. Returns each event's name and parsed `data`.
/// Comment frames such as keep-alives are skipped.
pub async fn next_sse_events(
    stream: &mut BodyDataStream,
    count: usize,
) -> Vec<(String, serde_json::Value)> {
    let mut buf = String::new();
    let mut events = Vec::new();
    while events.len() < count {
        let chunk = tokio::time::timeout(Duration::from_secs(5), stream.next())
            .await
            .expect("Timed out waiting for an event")
            .expect("Event stream ended")
            .expect("Event stream failed");
        buf.push_str(std::str::from_utf8(&chunk).unwrap());

        while let Some(end) = buf.find("\n\n") {
            let block: String = buf.drain(..end + 2).collect();
            let mut name = None;
            let mut data = None;
            for line in block.lines() {
                if let Some(val) = line.strip_prefix("event:") {
                    name = Some(val.trim().to_string());
                } else if let Some(val) = line.strip_prefix("data:") {
                    data = Some(val.trim().to_string());
                }
            }
            if let (Some(name), Some(data)) = (name, data) {
                events.push((name, serde_json::from_str(&data).unwrap()));
            }
        }
    }
    events
}
