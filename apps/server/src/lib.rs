//! Pitwall - read-only Formula 1 calendar API
//!
//! Serves races and their sessions from a SQLite database, with allow-listed
//! filters, identifier lookups and "next event" resolution.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
