//! Router for the carousel API

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use serde::Serialize;

use super::public::{CarouselName, CarouselResponse};
use crate::api::public::ApiError;
use crate::api::state::{SharedState, read_state};
use crate::carousel::Carousel;

#[derive(Clone, Copy)]
enum Nav {
    Stay,
    Next,
    Prev,
    Select(usize),
}

fn view<T: Serialize>(carousel: &Carousel<T>, nav: Nav) -> Result<CarouselResponse, ApiError> {
    match nav {
        Nav::Stay => {}
        Nav::Next => {
            carousel.next();
        }
        Nav::Prev => {
            carousel.prev();
        }
        Nav::Select(index) => {
            if !carousel.select(index) {
                return Err(ApiError::BadRequest(format!(
                    "Index {} is out of range for {} items",
                    index,
                    carousel.len()
                )));
            }
        }
    }
    let item = match carousel.current() {
        Some(item) => serde_json::to_value(item)?,
        None => serde_json::Value::Null,
    };
    Ok(CarouselResponse {
        active: carousel.active(),
        total: carousel.len(),
        item,
    })
}

fn navigate(
    state: &SharedState,
    name: CarouselName,
    nav: Nav,
) -> Result<Json<CarouselResponse>, ApiError> {
    let shared_state = read_state(state);
    let resp = match name {
        CarouselName::Testimonials => view(&shared_state.testimonials, nav)?,
        CarouselName::Marquee => view(&shared_state.marquee, nav)?,
    };
    Ok(Json(resp))
}

/// Get the item a carousel is currently showing
async fn carousel_current(
    State(state): State<SharedState>,
    Path(name): Path<CarouselName>,
) -> Result<Json<CarouselResponse>, ApiError> {
    navigate(&state, name, Nav::Stay)
}

async fn carousel_next(
    State(state): State<SharedState>,
    Path(name): Path<CarouselName>,
) -> Result<Json<CarouselResponse>, ApiError> {
    navigate(&state, name, Nav::Next)
}

async fn carousel_prev(
    State(state): State<SharedState>,
    Path(name): Path<CarouselName>,
) -> Result<Json<CarouselResponse>, ApiError> {
    navigate(&state, name, Nav::Prev)
}

/// Jump straight to an item, like clicking one of the dots under
/// the testimonials
async fn carousel_select(
    State(state): State<SharedState>,
    Path((name, index)): Path<(CarouselName, usize)>,
) -> Result<Json<CarouselResponse>, ApiError> {
    navigate(&state, name, Nav::Select(index))
}

/// Create the carousel router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/{name}", get(carousel_current))
        .route("/{name}/next", post(carousel_next))
        .route("/{name}/prev", post(carousel_prev))
        .route("/{name}/select/{index}", post(carousel_select))
}
