//! Domain models for the race calendar

pub mod event;
pub mod lookup;
pub mod race;

pub use event::Event;
pub use lookup::{EventLookup, RaceLookup};
pub use race::Race;
