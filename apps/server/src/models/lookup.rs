//! Explicit lookup requests derived from path segments.
//!
//! Identifiers carry their meaning in the number of `_`-separated segments
//! (`2024_5` is a race, `2024_5_QUALIFYING` a session). That convention is
//! resolved here, once, at the HTTP edge; stores only ever receive a tagged
//! variant.

use super::Race;
use crate::{Error, Result};

/// What `/events/{id}` asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventLookup {
    /// All sessions of a race weekend.
    Race(String),
    /// One session.
    Event(String),
}

impl EventLookup {
    pub fn parse(id: &str) -> Result<Self> {
        match id.split('_').count() {
            2 => Ok(EventLookup::Race(id.to_string())),
            n if n >= 3 => Ok(EventLookup::Event(id.to_string())),
            _ => Err(Error::bad_request(format!(
                "'{id}' is neither a race id nor an event id"
            ))),
        }
    }
}

/// What `/races/{idOrYear}` asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaceLookup {
    /// A season; four-character segments are always read as a year.
    Year(i32),
    Id(String),
}

impl RaceLookup {
    pub fn parse(id_or_year: &str) -> Result<Self> {
        if id_or_year.chars().count() == 4 {
            let year = id_or_year
                .parse::<i32>()
                .map_err(|_| Error::bad_request(format!("'{id_or_year}' is not a valid year")))?;
            return Ok(RaceLookup::Year(year));
        }

        Ok(RaceLookup::Id(id_or_year.to_string()))
    }

    /// `/races/{year}/{round}` addresses a single race by its season round.
    pub fn from_round(year: &str, round: &str) -> Result<Self> {
        let year = year
            .parse::<i32>()
            .map_err(|_| Error::bad_request(format!("'{year}' is not a valid year")))?;
        let round = round
            .parse::<i32>()
            .map_err(|_| Error::bad_request(format!("'{round}' is not a valid round")))?;

        Ok(RaceLookup::Id(Race::compose_id(year, round)))
    }
}
