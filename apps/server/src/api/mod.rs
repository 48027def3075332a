//! API layer - routes, handlers, and middleware

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;

use crate::{db, state::AppState, Error};
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::json;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// The application as served: the router behind trailing-slash normalization.
pub type App = NormalizePath<Router>;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let cors_origins = state.config.server.cors_origins.clone();
    let request_timeout = state.config.server.request_timeout_seconds;

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(root))
        .merge(routes::races::race_routes())
        .merge(routes::events::event_routes())
        .merge(routes::metrics::metrics_routes())
        .fallback(fallback)
        .with_state(state)
        // Applied in reverse order
        .layer(axum::middleware::from_fn(middleware::metrics_middleware))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(middleware::timeout(request_timeout))
        .layer(middleware::compression())
        .layer(middleware::cors(&cors_origins))
}

/// Wrap the router so `/races/` and `/races` reach the same route.
///
/// Path rewriting has to happen before routing, hence outside the router.
pub fn create_app(state: AppState) -> App {
    NormalizePathLayer::trim_trailing_slash().layer(create_router(state))
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let (status, database) = match db::ping(&state.pool).await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::warn!(error = %e, "Health check database ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    (
        status,
        Json(json!({
            "status": if status.is_success() { "ok" } else { "degraded" },
            "service": state.config.logging.service_name,
            "database": database,
        })),
    )
}

async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "server": "Pitwall F1 calendar API",
        "service": state.config.logging.service_name,
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

async fn fallback(uri: Uri) -> Error {
    Error::not_found(format!("no route for {}", uri.path()))
}
