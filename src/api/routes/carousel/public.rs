//! Public types for the carousel API
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CarouselName {
    Testimonials,
    Marquee,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CarouselResponse {
    pub active: usize,
    pub total: usize,
    // `null` when the carousel has nothing to show
    pub item: Value,
}
