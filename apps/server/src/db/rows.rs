//! Positional row decoding.
//!
//! Both tables are read with an explicit column list whose order is fixed
//! here; decoding goes by position, not by name.

use crate::{
    models::{Event, Race},
    Error, Result,
};
use sqlx::{
    sqlite::{Sqlite, SqliteRow},
    Decode, Row, Type,
};

pub const RACES_TABLE: &str = "races";
pub const EVENTS_TABLE: &str = "events";

pub const RACE_COLUMNS: &[&str] = &[
    "year",
    "round_",
    "name",
    "location",
    "trackMap",
    "circuitId",
    "id_",
];

pub const EVENT_COLUMNS: &[&str] = &[
    "raceId",
    "title",
    "date",
    "type_",
    "time",
    "gmtOffset",
    "id_",
];

/// Guards callers that select something other than the fixed column list.
fn expect_width(row: &SqliteRow, expected: usize, table: &str) -> Result<()> {
    if row.len() != expected {
        return Err(Error::Decode(format!(
            "{table} row has {} columns, expected {expected}",
            row.len()
        )));
    }
    Ok(())
}

/// Column `index` of `columns`, failing on SQL NULL.
///
/// SQLite hands NULL to a `String` or `i32` as an empty or zero value, so
/// every column goes through `Option` first.
fn required<'r, T>(row: &'r SqliteRow, index: usize, table: &str, columns: &[&str]) -> Result<T>
where
    T: Decode<'r, Sqlite> + Type<Sqlite>,
{
    row.try_get::<Option<T>, _>(index)?.ok_or_else(|| {
        let column = columns.get(index).copied().unwrap_or("?");
        Error::Decode(format!("{table}.{column} is NULL"))
    })
}

pub fn race_from_row(row: &SqliteRow) -> Result<Race> {
    expect_width(row, RACE_COLUMNS.len(), RACES_TABLE)?;

    Ok(Race {
        year: required(row, 0, RACES_TABLE, RACE_COLUMNS)?,
        round: required(row, 1, RACES_TABLE, RACE_COLUMNS)?,
        name: required(row, 2, RACES_TABLE, RACE_COLUMNS)?,
        location: required(row, 3, RACES_TABLE, RACE_COLUMNS)?,
        track_map: required(row, 4, RACES_TABLE, RACE_COLUMNS)?,
        circuit_id: required(row, 5, RACES_TABLE, RACE_COLUMNS)?,
        id: required(row, 6, RACES_TABLE, RACE_COLUMNS)?,
    })
}

pub fn event_from_row(row: &SqliteRow) -> Result<Event> {
    expect_width(row, EVENT_COLUMNS.len(), EVENTS_TABLE)?;

    Ok(Event {
        race_id: required(row, 0, EVENTS_TABLE, EVENT_COLUMNS)?,
        title: required(row, 1, EVENTS_TABLE, EVENT_COLUMNS)?,
        date: required(row, 2, EVENTS_TABLE, EVENT_COLUMNS)?,
        event_type: required(row, 3, EVENTS_TABLE, EVENT_COLUMNS)?,
        time: required(row, 4, EVENTS_TABLE, EVENT_COLUMNS)?,
        gmt_offset: required(row, 5, EVENTS_TABLE, EVENT_COLUMNS)?,
        id: required(row, 6, EVENTS_TABLE, EVENT_COLUMNS)?,
    })
}

pub fn races_from_rows(rows: &[SqliteRow]) -> Result<Vec<Race>> {
    rows.iter().map(race_from_row).collect()
}

pub fn events_from_rows(rows: &[SqliteRow]) -> Result<Vec<Event>> {
    rows.iter().map(event_from_row).collect()
}
