//! API routes module

pub mod carousel;
pub mod chat;
mod content;

use axum::Router;

use crate::api::state::SharedState;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Simulated chat sessions
        .nest("/chat", chat::router())
        // Static landing page content
        .nest("/content", content::router())
        // Testimonial and marquee carousels
        .nest("/carousel", carousel::router())
}
