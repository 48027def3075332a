//! Store traits for the calendar tables
//!
//! Handlers and services only see these traits. The SQLite repositories are
//! the production implementations; tests may substitute their own.

use super::filter::FilterMap;
use crate::{
    models::{Event, EventLookup, Race},
    Result,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Read access to race weekends.
#[async_trait]
pub trait RaceStore: Send + Sync {
    /// All races matching `filter`; an empty filter scans the whole table.
    async fn find_all(&self, filter: &FilterMap) -> Result<Vec<Race>>;

    /// # Errors
    /// * `NotFound` - If no race has this id
    async fn find_by_id(&self, id: &str) -> Result<Race>;

    async fn find_by_circuit_id(&self, circuit_id: &str, filter: &FilterMap)
        -> Result<Vec<Race>>;

    async fn find_by_year(&self, year: i32, filter: &FilterMap) -> Result<Vec<Race>>;
}

/// Result of an [`EventLookup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSelection {
    /// Every session of one race weekend.
    Many(Vec<Event>),
    One(Event),
}

/// Read access to race weekend sessions.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn find_all(&self, filter: &FilterMap) -> Result<Vec<Event>>;

    /// # Errors
    /// * `NotFound` - If no session has this id
    async fn find_by_id(&self, id: &str) -> Result<Event>;

    async fn find_by_race_id(&self, race_id: &str, filter: &FilterMap) -> Result<Vec<Event>>;

    async fn find(&self, lookup: &EventLookup) -> Result<EventSelection> {
        match lookup {
            EventLookup::Race(race_id) => Ok(EventSelection::Many(
                self.find_by_race_id(race_id, &FilterMap::new()).await?,
            )),
            EventLookup::Event(id) => Ok(EventSelection::One(self.find_by_id(id).await?)),
        }
    }

    /// The session most likely to be "next" at `now`.
    ///
    /// # Returns
    /// * `Ok(Some(event))` - A session starts later or started within the grace window
    /// * `Ok(None)` - Nothing upcoming
    async fn next_event(&self, now: DateTime<Utc>) -> Result<Option<Event>>;
}
