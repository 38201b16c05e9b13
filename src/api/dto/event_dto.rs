//! Event and dinner API DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// "Load more" style pagination used by the history and audit views.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct CursorQuery {
    pub cursor: Option<u64>,
    pub limit: Option<u64>,
}

impl CursorQuery {
    /// Requested page size, clamped to at least 1. A zero limit would make
    /// the end-of-list fallback in cursor normalization hand out the same
    /// cursor forever.
    pub fn limit_or(&self, default: u64) -> u64 {
        self.limit.unwrap_or(default).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_limit_is_clamped() {
        let q = CursorQuery {
            cursor: Some(10),
            limit: Some(0),
        };
        assert_eq!(q.limit_or(10), 1);

        let q = CursorQuery::default();
        assert_eq!(q.limit_or(10), 10);

        let q = CursorQuery {
            cursor: None,
            limit: Some(25),
        };
        assert_eq!(q.limit_or(10), 25);
    }
}

#[derive(Deserialize, Serialize, Validate, Debug)]
pub struct EventCreateRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub date: DateTime<Utc>,
}

#[derive(Deserialize, Serialize, Validate, Debug)]
pub struct EventUpdateRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub date: DateTime<Utc>,
}

/// Dinners share the events table upstream, with extra sign-up fields.
#[derive(Deserialize, Serialize, Validate, Debug)]
pub struct DinnerCreateRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub signup_link: Option<String>,
    #[serde(default, rename = "eventLink")]
    pub event_link: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub allowed_guests: Option<String>,
    #[serde(default)]
    pub price_without_alcohol: Option<String>,
    #[serde(default)]
    pub price_with_alcohol: Option<String>,
}
