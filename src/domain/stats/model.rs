use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Queue length category reported by the door counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineLength {
    Short,
    Medium,
    Long,
    NoLine,
}

impl LineLength {
    /// Categories that render as a colored band on the queue timeline.
    pub fn is_band(self) -> bool {
        !matches!(self, LineLength::NoLine)
    }
}

/// One counter reading as stored by the scraper. `captured_at` is a UTC
/// instant but sometimes arrives as a bare `YYYY-MM-DD HH:MM:SS` string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub venue_id: i64,
    pub captured_at: String,
    pub member_count: i64,
    pub non_member_count: i64,
    #[serde(default)]
    pub total_count: Option<i64>,
    #[serde(default)]
    pub occupancy_pct: Option<f64>,
    #[serde(default)]
    pub line_length: Option<LineLength>,
    #[serde(default)]
    pub max_capacity: Option<i64>,
}

/// A chart-ready projection of one Snapshot. There is exactly one Point per
/// Snapshot; a timestamp that fails to parse yields `ts_ms: None` rather
/// than dropping the reading.
#[derive(Debug, Clone, Serialize)]
pub struct Point {
    pub ts_ms: Option<i64>,
    pub total: i64,
    pub members: i64,
    pub non_members: i64,
    pub line_length: LineLength,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<i64>,
}

/// Half-open run `[x1_ms, x2_ms)` of one queue category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub x1_ms: i64,
    pub x2_ms: i64,
    pub kind: LineLength,
}

/// Shared x-axis domain over the points with a valid timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeDomain {
    pub min_ms: i64,
    pub max_ms: i64,
}

/// Aggregates shown on the summary cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NightSummary {
    /// Points counted, up to and including the last non-zero total.
    pub count: usize,
    /// Distinct local hours of day covered by those points.
    pub hours_covered: usize,
    pub peak_total: i64,
    pub avg_occupancy_pct: f64,
    pub member_pct: i64,
    pub non_member_pct: i64,
}

/// The UTC instants the chart covers: event start to 03:00 the next local day.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChartWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartResponse {
    pub window: Option<ChartWindow>,
    pub domain: TimeDomain,
    pub points: Vec<Point>,
    pub segments: Vec<Segment>,
    pub summary: NightSummary,
}

impl Default for ChartResponse {
    fn default() -> Self {
        Self {
            window: None,
            domain: TimeDomain { min_ms: 0, max_ms: 1 },
            points: Vec::new(),
            segments: Vec::new(),
            summary: NightSummary::default(),
        }
    }
}
