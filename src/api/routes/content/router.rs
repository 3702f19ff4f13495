//! Router for the static content API

use axum::{Json, Router, extract::Path, routing::get};
use serde_json::Value;

use crate::api::state::SharedState;
use crate::content::Section;

async fn content_section(Path(section): Path<Section>) -> Json<Value> {
    Json(section.to_json())
}

/// Create the content router
pub fn router() -> Router<SharedState> {
    Router::new().route("/{section}", get(content_section))
}
