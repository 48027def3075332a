pub mod assertions;
pub mod fixtures;

use anyhow::Context as _;
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, HeaderName, HeaderValue, Method, Request, StatusCode},
};
use chrono::{DateTime, TimeZone, Utc};
use pitwall::{
    api::{create_app, App},
    AppState, Config,
};
use serde_json::Value;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::sync::Arc;
use tower::ServiceExt as _;

pub use assertions::*;
pub use fixtures::*;

/// Router over a private in-memory database.
pub struct TestApp {
    pub app: App,
    pub state: AppState,
    pub pool: SqlitePool,
}

impl TestApp {
    /// Schema plus the standard season fixtures.
    pub async fn new() -> anyhow::Result<Self> {
        let app = Self::empty().await?;
        seed_season(&app.pool).await?;
        Ok(app)
    }

    /// Schema only.
    pub async fn empty() -> anyhow::Result<Self> {
        let pool = memory_pool().await?;
        create_schema(&pool).await?;

        let mut config = Config::default();
        config.database.url = "sqlite::memory:".to_string();
        config.database.read_only = false;

        let state = AppState::from_pool(config, pool.clone());
        Ok(Self {
            app: create_app(state.clone()),
            state,
            pool,
        })
    }

    /// Freeze the clock used by the `next` endpoints.
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.state = self.state.with_clock(Arc::new(move || now));
        self.app = create_app(self.state.clone());
        self
    }

    pub async fn get(&self, path_and_query: &str) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        self.get_with_headers(path_and_query, &[]).await
    }

    pub async fn get_with_headers(
        &self,
        path_and_query: &str,
        extra_headers: &[(&str, &str)],
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        let mut request = Request::builder()
            .method(Method::GET)
            .uri(path_and_query)
            .header("host", "example.org")
            .header("accept", "application/json")
            .body(Body::empty())
            .context("build request")?;

        for (name, value) in extra_headers {
            request.headers_mut().insert(
                name.parse::<HeaderName>().context("parse header name")?,
                value.parse::<HeaderValue>().context("parse header value")?,
            );
        }

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .context("dispatch request")?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .context("read response body")?;

        Ok((status, headers, body))
    }

    /// GET and parse the body as JSON.
    pub async fn get_json(&self, path_and_query: &str) -> anyhow::Result<(StatusCode, Value)> {
        let (status, _headers, body) = self.get(path_and_query).await?;
        let json = serde_json::from_slice(&body)
            .with_context(|| format!("parse JSON body of {path_and_query}: {body:?}"))?;
        Ok((status, json))
    }
}

/// One connection that never closes, so the in-memory database lives as
/// long as the pool.
pub async fn memory_pool() -> anyhow::Result<SqlitePool> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .context("open in-memory sqlite")
}

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("valid UTC timestamp")
}
