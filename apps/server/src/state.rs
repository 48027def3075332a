//! Shared application state

use crate::{
    config::Config,
    db::{self, EventRepository, EventStore, RaceRepository, RaceStore},
    services::CalendarService,
};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Source of "now" for next-event resolution.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}

/// State handed to every handler. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub calendar: CalendarService,
    /// Shared with the repositories; used directly for health and pool gauges.
    pub pool: SqlitePool,
}

impl AppState {
    /// Open the database and wire the repositories.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let pool = db::connect(&config.database).await.map_err(|e| {
            anyhow::anyhow!("Failed to open database '{}': {e}", config.database.url)
        })?;

        tracing::info!(
            url = %config.database.url,
            read_only = config.database.read_only,
            pool_max_size = config.database.pool_max_size,
            "Database pool ready"
        );

        Ok(Self::from_pool(config, pool))
    }

    pub fn from_pool(config: Config, pool: SqlitePool) -> Self {
        let races: Arc<dyn RaceStore> = Arc::new(RaceRepository::new(pool.clone()));
        let events: Arc<dyn EventStore> = Arc::new(EventRepository::new(pool.clone()));

        Self {
            config: Arc::new(config),
            calendar: CalendarService::new(races, events, system_clock()),
            pool,
        }
    }

    /// Replace the clock used by `/events/next` and `/races/next`.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.calendar = self.calendar.with_clock(clock);
        self
    }
}
