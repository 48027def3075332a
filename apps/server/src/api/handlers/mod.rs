//! Request handlers for API endpoints
//!
//! Handlers turn path and query input into explicit lookups, call the
//! calendar service and wrap the result in the response envelope.

pub mod events;
pub mod metrics;
pub mod races;

pub use events::*;
pub use metrics::*;
pub use races::*;
