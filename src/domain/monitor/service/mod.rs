use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use futures::try_join;

use crate::api::dto::event_dto::CursorQuery;
use crate::api::dto::paginated_response::CursorPage;
use crate::core::client::UpstreamClient;
use crate::domain::monitor::model::{AuditEntry, CounterRow, CounterStatusRow, Freshness};
use crate::domain::stats::timeparse::parse_captured_at;
use crate::domain::user::model::Role;
use crate::errors::AppError;

/// Audit page size when the caller does not ask for one.
pub const DEFAULT_LOG_LIMIT: u64 = 50;

const FRESH_MINUTES: i64 = 60;
const STALE_MINUTES: i64 = 180;

pub struct MonitorService {
    client: Arc<UpstreamClient>,
}

impl MonitorService {
    pub fn new(client: Arc<UpstreamClient>) -> Self {
        Self { client }
    }

    /// Live counter board with freshness computed against `now`.
    pub async fn counters(
        &self,
        session: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Vec<CounterStatusRow>> {
        let (_, rows) = try_join!(
            self.require_super_admin(session),
            self.client.monitor_counters(session),
        )?;

        Ok(rows.into_iter().map(|row| classify(row, now)).collect())
    }

    pub async fn audit_logs(
        &self,
        session: Option<&str>,
        q: CursorQuery,
    ) -> Result<CursorPage<AuditEntry>> {
        self.require_super_admin(session).await?;

        let limit = q.limit_or(DEFAULT_LOG_LIMIT);
        let page = self.client.monitor_logs(session, limit, q.cursor).await?;
        Ok(page.normalize(q.cursor.unwrap_or(0), limit))
    }

    async fn require_super_admin(&self, session: Option<&str>) -> Result<()> {
        let profile = self.client.profile(session).await?;
        if profile.role != Role::SuperAdmin {
            return Err(AppError::Forbidden(
                "monitor endpoints require the SUPER_ADMIN role".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

fn classify(counter: CounterRow, now: DateTime<Utc>) -> CounterStatusRow {
    let last = counter
        .last_activity_at
        .as_deref()
        .and_then(parse_captured_at);

    let minutes_since_activity = last.map(|t| (now - t).num_minutes());

    let freshness = match minutes_since_activity {
        Some(m) if m < FRESH_MINUTES => Freshness::Ok,
        Some(m) if m < STALE_MINUTES => Freshness::Stale,
        _ => Freshness::Offline,
    };

    CounterStatusRow {
        counter,
        freshness,
        minutes_since_activity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDateTime};

    fn row(last_activity_at: Option<&str>) -> CounterRow {
        CounterRow {
            venue_id: 1,
            name: "Nymble".into(),
            member_count: 10,
            non_member_count: 5,
            max_capacity: Some(200),
            visible: true,
            ratio_visible: false,
            line_length: Some("short".into()),
            last_activity_at: last_activity_at.map(str::to_string),
        }
    }

    fn at(s: &str) -> DateTime<Utc> {
        s.parse::<NaiveDateTime>().unwrap().and_utc()
    }

    #[test]
    fn freshness_thresholds() {
        let now = at("2024-05-01T22:00:00");

        let fresh = classify(row(Some("2024-05-01T21:10:00Z")), now);
        assert_eq!(fresh.freshness, Freshness::Ok);
        assert_eq!(fresh.minutes_since_activity, Some(50));

        let stale = classify(row(Some("2024-05-01T20:00:00Z")), now);
        assert_eq!(stale.freshness, Freshness::Stale);

        let offline = classify(row(Some("2024-05-01T12:00:00Z")), now);
        assert_eq!(offline.freshness, Freshness::Offline);
    }

    #[test]
    fn exactly_sixty_minutes_is_stale() {
        let now = at("2024-05-01T22:00:00");
        let edge = classify(row(Some("2024-05-01T21:00:00Z")), now);
        assert_eq!(edge.freshness, Freshness::Stale);
        assert_eq!(edge.minutes_since_activity, Some(60));
    }

    #[test]
    fn missing_or_garbage_timestamp_is_offline() {
        let now = Utc::now() + Duration::minutes(1);

        let missing = classify(row(None), now);
        assert_eq!(missing.freshness, Freshness::Offline);
        assert_eq!(missing.minutes_since_activity, None);

        let garbage = classify(row(Some("not a date")), now);
        assert_eq!(garbage.freshness, Freshness::Offline);
    }
}
