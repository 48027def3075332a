//! Race weekend record

use serde::{Deserialize, Serialize};

/// A championship round, identified by `"{year}_{round}"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub id: String,
    pub year: i32,
    pub round: i32,
    pub name: String,
    pub location: String,
    /// Reference to the track map asset
    pub track_map: String,
    pub circuit_id: String,
}

impl Race {
    /// Build the race identifier for a season round.
    pub fn compose_id(year: i32, round: i32) -> String {
        format!("{year}_{round}")
    }
}
