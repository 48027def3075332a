//! Service layer - operations spanning more than one store

pub mod calendar;

pub use calendar::{CalendarService, RaceSelection};
