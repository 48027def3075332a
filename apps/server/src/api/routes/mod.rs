//! Route tables, one module per resource

pub mod events;
pub mod metrics;
pub mod races;
