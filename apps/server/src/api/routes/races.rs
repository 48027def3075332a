//! Race routes
//!
//! Parameters at the same position share a name, so `:key` stands for a
//! season, a race id or the year of `/:key/:round`.

use crate::api::handlers::races;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn race_routes() -> Router<AppState> {
    Router::new()
        .route("/races", get(races::list_races))
        .route("/races/next", get(races::next_race))
        .route("/races/:key", get(races::get_race))
        .route("/races/:key/events", get(races::race_events))
        .route("/races/:key/:round", get(races::race_by_round))
}
