//! Next-event resolution.
//!
//! The store hands over at most [`CANDIDATE_LIMIT`] sessions dated today or
//! later. Among those, the first one (by date, then start time) that started
//! less than [`GRACE_WINDOW_HOURS`] ago, or has not started yet, is the next
//! event. A session that began an hour ago is still "next".
//!
//! The cap is a heuristic: a busy day with more than three sessions can push
//! the real next session out of the candidate set.

use super::{
    query::SelectQuery,
    rows::{EVENTS_TABLE, EVENT_COLUMNS},
};
use crate::{models::Event, Error, Result};
use chrono::{DateTime, Duration, NaiveDateTime, Utc};

pub const CANDIDATE_LIMIT: u32 = 3;
pub const GRACE_WINDOW_HOURS: i64 = 2;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Sessions dated on or after the calendar day of `now`, earliest first.
pub fn candidate_query(now: DateTime<Utc>) -> SelectQuery {
    let today = now.format(DATE_FORMAT).to_string();

    SelectQuery::new(EVENTS_TABLE, EVENT_COLUMNS)
        .filter_gte("date", today)
        .order_by("date")
        .limit(CANDIDATE_LIMIT)
}

/// Naive start of a session; date and time are taken as UTC.
pub fn starts_at(event: &Event) -> Result<NaiveDateTime> {
    let raw = format!("{} {}", event.date, event.time);
    NaiveDateTime::parse_from_str(&raw, DATE_TIME_FORMAT).map_err(|e| {
        Error::Decode(format!(
            "event '{}' has unparseable start '{raw}': {e}",
            event.id
        ))
    })
}

pub fn resolve_next_event(mut candidates: Vec<Event>, now: DateTime<Utc>) -> Result<Option<Event>> {
    // Stable: equal keys keep store order.
    candidates.sort_by(|a, b| (&a.date, &a.time).cmp(&(&b.date, &b.time)));

    let threshold = (now - Duration::hours(GRACE_WINDOW_HOURS)).naive_utc();

    for event in candidates {
        if starts_at(&event)? > threshold {
            return Ok(Some(event));
        }
    }

    Ok(None)
}
