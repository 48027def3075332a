//! Race weekend session record

use serde::{Deserialize, Serialize};

/// A single session (practice, qualifying, sprint, race) of a race weekend.
///
/// `date` is `YYYY-MM-DD`, `time` is the zero-padded `HH:MM:SS` start time and
/// `gmt_offset` the signed offset of the venue (`+02:00`, `-05:00`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub race_id: String,
    pub title: String,
    pub date: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub time: String,
    pub gmt_offset: String,
}
