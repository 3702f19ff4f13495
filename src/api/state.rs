use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::ai::chat::{Chat, ChatBuilder};
use crate::carousel::{Autoplay, Carousel};
use crate::content::{self, Testimonial};
use crate::core::AppConfig;

pub type SharedState = Arc<RwLock<AppState>>;

pub struct AppState {
    // One simulated chat per session. Nothing is shared between them.
    pub sessions: HashMap<String, Chat>,
    pub testimonials: Carousel<Testimonial>,
    pub marquee: Carousel<&'static str>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            sessions: HashMap::new(),
            testimonials: Carousel::new(content::testimonials()),
            marquee: Carousel::new(content::marquee_images()),
            config,
        }
    }

    pub fn create_session(&mut self) -> Chat {
        let chat = ChatBuilder::new()
            .greeting(&self.config.greeting)
            .delays(self.config.turn_delays)
            .build();
        self.sessions
            .insert(chat.session_id().to_string(), chat.clone());
        tracing::info!(session_id = chat.session_id(), "Created chat session");
        chat
    }

    pub fn session(&self, id: &str) -> Option<Chat> {
        self.sessions.get(id).cloned()
    }

    /// Remove a session and cancel anything it has in flight
    pub fn remove_session(&mut self, id: &str) -> Option<Chat> {
        let chat = self.sessions.remove(id)?;
        chat.close();
        tracing::info!(session_id = id, "Removed chat session");
        Some(chat)
    }

    /// Start advancing both carousels. They keep going for as long as
    /// the returned handles are alive.
    pub fn start_autoplay(&self) -> Vec<Autoplay> {
        vec![
            self.testimonials
                .autoplay(self.config.testimonial_interval),
            self.marquee.autoplay(self.config.marquee_interval),
        ]
    }
}

// Every critical section is a plain map or index operation so a
// poisoned lock still holds consistent data.

pub fn read_state(state: &SharedState) -> RwLockReadGuard<'_, AppState> {
    state.read().unwrap_or_else(PoisonError::into_inner)
}

pub fn write_state(state: &SharedState) -> RwLockWriteGuard<'_, AppState> {
    state.write().unwrap_or_else(PoisonError::into_inner)
}
