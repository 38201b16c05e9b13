use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::core::client::stats::SnapshotSource;
use crate::core::state::chart_cache::{ChartCache, ChartKey};
use crate::domain::stats::model::{ChartResponse, Snapshot};
use crate::domain::stats::series::build_chart;
use crate::domain::stats::window::night_window;

pub struct StatsService<S: SnapshotSource> {
    source: Arc<S>,
    cache: ChartCache,
    venue_tz: Tz,
}

impl<S: SnapshotSource> StatsService<S> {
    pub fn new(source: Arc<S>, venue_tz: Tz) -> Self {
        Self {
            source,
            cache: ChartCache::new(),
            venue_tz,
        }
    }

    /// Raw snapshot rows, returned unchanged.
    pub async fn snapshots(
        &self,
        session: Option<&str>,
        venue_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Snapshot>> {
        self.source.snapshots(session, venue_id, from, to).await
    }

    /// Chart for one event night: compute the window, fetch fresh snapshots
    /// and transform them. A fetch error propagates; a stale cached chart is
    /// never served in its place.
    ///
    /// Concurrent requests for the same night race on the cache; the
    /// generation guard ensures a slow older fetch cannot replace a newer
    /// result, and the loser returns the newer chart instead.
    pub async fn chart(
        &self,
        session: Option<&str>,
        venue_id: i64,
        start: DateTime<Utc>,
    ) -> Result<Arc<ChartResponse>> {
        let window = night_window(start, self.venue_tz);
        let key = ChartKey {
            venue_id,
            from_ms: window.start.timestamp_millis(),
            to_ms: window.end.timestamp_millis(),
        };

        let generation = self.cache.begin();
        let snapshots = self
            .source
            .snapshots(session, venue_id, window.start, window.end)
            .await?;

        debug!(venue_id, count = snapshots.len(), "building chart series");
        let chart = Arc::new(build_chart(&snapshots, Some(window), self.venue_tz));

        if self.cache.store(key, generation, chart.clone()).await {
            Ok(chart)
        } else {
            // A newer fetch finished first; hand its result out instead.
            Ok(self.cache.get(&key).await.unwrap_or(chart))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use chrono_tz::Europe::Stockholm;

    use crate::domain::stats::model::LineLength;

    struct StubSource {
        snapshots: Vec<Snapshot>,
        fail: bool,
    }

    #[async_trait]
    impl SnapshotSource for StubSource {
        async fn snapshots(
            &self,
            _session: Option<&str>,
            _venue_id: i64,
            _from: DateTime<Utc>,
            _to: DateTime<Utc>,
        ) -> Result<Vec<Snapshot>> {
            if self.fail {
                return Err(anyhow!("upstream unavailable"));
            }
            Ok(self.snapshots.clone())
        }
    }

    fn snapshot(captured_at: &str, members: i64) -> Snapshot {
        Snapshot {
            venue_id: 1,
            captured_at: captured_at.to_string(),
            member_count: members,
            non_member_count: 0,
            total_count: None,
            occupancy_pct: None,
            line_length: Some(LineLength::Short),
            max_capacity: None,
        }
    }

    fn start() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-01T18:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[tokio::test]
    async fn chart_carries_the_night_window_and_series() {
        let source = Arc::new(StubSource {
            snapshots: vec![
                snapshot("2024-05-01 20:00:00", 5),
                snapshot("2024-05-01 21:00:00", 8),
            ],
            fail: false,
        });
        let svc = StatsService::new(source, Stockholm);

        let chart = svc.chart(None, 1, start()).await.unwrap();
        let window = chart.window.unwrap();
        assert_eq!(window.start, start());
        // 03:00 CEST next day = 01:00 UTC.
        assert_eq!(
            window.end,
            DateTime::parse_from_rfc3339("2024-05-02T01:00:00Z").unwrap()
        );
        assert_eq!(chart.points.len(), 2);
        assert_eq!(chart.summary.peak_total, 8);
    }

    #[tokio::test]
    async fn fetch_errors_propagate_instead_of_serving_stale_data() {
        let source = Arc::new(StubSource {
            snapshots: vec![],
            fail: true,
        });
        let svc = StatsService::new(source, Stockholm);
        assert!(svc.chart(None, 1, start()).await.is_err());
    }

    #[tokio::test]
    async fn empty_night_still_produces_a_chart() {
        let source = Arc::new(StubSource {
            snapshots: vec![],
            fail: false,
        });
        let svc = StatsService::new(source, Stockholm);

        let chart = svc.chart(None, 1, start()).await.unwrap();
        assert!(chart.points.is_empty());
        assert!(chart.segments.is_empty());
        assert_eq!(chart.domain.min_ms, 0);
        assert_eq!(chart.domain.max_ms, 1);
        assert_eq!(chart.summary.count, 0);
    }
}
