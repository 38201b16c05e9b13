use serde::{Deserialize, Serialize};

use crate::domain::common::de::bool_from_int;

/// One venue's live counter state on the scraper monitor board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterRow {
    pub venue_id: i64,
    pub name: String,
    pub member_count: i64,
    pub non_member_count: i64,
    #[serde(default)]
    pub max_capacity: Option<i64>,
    #[serde(default, deserialize_with = "bool_from_int")]
    pub visible: bool,
    #[serde(default, deserialize_with = "bool_from_int")]
    pub ratio_visible: bool,
    #[serde(default)]
    pub line_length: Option<String>,
    /// UTC timestamp string of the last scraper write, if any.
    #[serde(default)]
    pub last_activity_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: i64,
    pub action: String,
    pub organization_id: i64,
    pub username: String,
    pub created_at: String,
}

/// How recently a venue's counter was written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Freshness {
    Ok,
    Stale,
    Offline,
}

/// Counter row enriched with a server-computed freshness badge.
#[derive(Debug, Clone, Serialize)]
pub struct CounterStatusRow {
    #[serde(flatten)]
    pub counter: CounterRow,
    pub freshness: Freshness,
    /// Minutes since the last write, when the timestamp parses.
    pub minutes_since_activity: Option<i64>,
}
