//! Event routes

use crate::api::handlers::events;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(events::list_events))
        .route("/events/next", get(events::next_event))
        .route("/events/:id", get(events::get_event))
}
