//! Calendar service
//!
//! Operations that combine the stores or depend on the wall clock. Plain
//! single-store reads go straight to the store handles.

use crate::{
    db::{EventSelection, EventStore, FilterMap, RaceStore},
    metrics::NEXT_EVENT_RESOLUTIONS_TOTAL,
    models::{Event, EventLookup, Race, RaceLookup},
    state::Clock,
    Error, Result,
};
use std::sync::Arc;

/// Result of a [`RaceLookup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaceSelection {
    /// All races of a season.
    Many(Vec<Race>),
    One(Race),
}

#[derive(Clone)]
pub struct CalendarService {
    races: Arc<dyn RaceStore>,
    events: Arc<dyn EventStore>,
    clock: Clock,
}

impl CalendarService {
    pub fn new(races: Arc<dyn RaceStore>, events: Arc<dyn EventStore>, clock: Clock) -> Self {
        Self {
            races,
            events,
            clock,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn races(&self) -> &dyn RaceStore {
        self.races.as_ref()
    }

    pub fn events(&self) -> &dyn EventStore {
        self.events.as_ref()
    }

    /// The session considered "next" right now, if any.
    pub async fn next_event(&self) -> Result<Option<Event>> {
        let now = (self.clock)();
        let result = self.events.next_event(now).await;

        let outcome = match &result {
            Ok(Some(_)) => "found",
            Ok(None) => "none",
            Err(_) => "error",
        };
        NEXT_EVENT_RESOLUTIONS_TOTAL
            .with_label_values(&[outcome])
            .inc();

        result
    }

    /// The race owning the next session.
    ///
    /// # Errors
    /// * `NotFound` - On any failure of either step
    pub async fn next_race(&self) -> Result<Race> {
        let event = match self.next_event().await {
            Ok(Some(event)) => event,
            Ok(None) => return Err(Error::not_found("no upcoming event")),
            Err(e) => {
                tracing::warn!(error = %e, "Next event resolution failed");
                return Err(Error::not_found("no upcoming event"));
            }
        };

        self.races
            .find_by_id(&event.race_id)
            .await
            .map_err(|e| {
                tracing::warn!(
                    error = %e,
                    race_id = %event.race_id,
                    event_id = %event.id,
                    "Race of next event could not be loaded"
                );
                Error::not_found(format!("race '{}'", event.race_id))
            })
    }

    pub async fn find_races(&self, lookup: &RaceLookup, filter: &FilterMap) -> Result<RaceSelection> {
        match lookup {
            RaceLookup::Year(year) => Ok(RaceSelection::Many(
                self.races.find_by_year(*year, filter).await?,
            )),
            RaceLookup::Id(id) => Ok(RaceSelection::One(self.races.find_by_id(id).await?)),
        }
    }

    pub async fn find_events(&self, lookup: &EventLookup) -> Result<EventSelection> {
        self.events.find(lookup).await
    }
}
