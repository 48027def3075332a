//! Event repository - SQLite queries for the `events` table

use super::{
    fetch_all, fetch_optional,
    filter::FilterMap,
    next_event::{candidate_query, resolve_next_event},
    query::SelectQuery,
    rows::{event_from_row, events_from_rows, EVENTS_TABLE, EVENT_COLUMNS},
    traits::EventStore,
};
use crate::{models::Event, Error, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// Repository for event database operations
#[derive(Clone)]
pub struct EventRepository {
    pool: SqlitePool,
}

impl EventRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn select() -> SelectQuery {
        SelectQuery::new(EVENTS_TABLE, EVENT_COLUMNS)
    }

    async fn fetch(&self, kind: &'static str, query: SelectQuery) -> Result<Vec<Event>> {
        let rows = fetch_all(&self.pool, kind, &query.order_by("date").order_by("time")).await?;
        events_from_rows(&rows)
    }
}

#[async_trait]
impl EventStore for EventRepository {
    async fn find_all(&self, filter: &FilterMap) -> Result<Vec<Event>> {
        self.fetch("events.find_all", Self::select().filter_map(filter))
            .await
    }

    async fn find_by_id(&self, id: &str) -> Result<Event> {
        let query = Self::select().filter_eq("id_", id);

        match fetch_optional(&self.pool, "events.find_by_id", &query).await? {
            Some(row) => event_from_row(&row),
            None => Err(Error::not_found(format!("event '{id}'"))),
        }
    }

    async fn find_by_race_id(&self, race_id: &str, filter: &FilterMap) -> Result<Vec<Event>> {
        let query = Self::select().filter_eq("raceId", race_id).filter_map(filter);
        self.fetch("events.find_by_race_id", query).await
    }

    async fn next_event(&self, now: DateTime<Utc>) -> Result<Option<Event>> {
        let rows = fetch_all(&self.pool, "events.next_event", &candidate_query(now)).await?;
        let candidates = events_from_rows(&rows)?;

        tracing::debug!(
            candidates = candidates.len(),
            now = %now,
            "Resolving next event"
        );

        resolve_next_event(candidates, now)
    }
}
