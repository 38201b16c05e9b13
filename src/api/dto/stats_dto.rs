//! Statistics API DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Raw snapshot range, UTC instants as ISO-8601.
#[derive(Deserialize, Debug)]
pub struct SnapshotRangeQuery {
    pub venue_id: i64,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// Chart request for one event night; the window end is derived server-side.
#[derive(Deserialize, Debug)]
pub struct ChartQuery {
    pub venue_id: i64,
    pub start: DateTime<Utc>,
}
