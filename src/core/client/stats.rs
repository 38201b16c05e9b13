use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::core::client::UpstreamClient;
use crate::domain::stats::model::Snapshot;

/// Source of counter snapshots for a venue over a UTC range.
///
/// The chart service is generic over this so tests can feed it canned
/// snapshot lists instead of a live upstream.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn snapshots(
        &self,
        session: Option<&str>,
        venue_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Snapshot>>;
}

#[async_trait]
impl SnapshotSource for UpstreamClient {
    async fn snapshots(
        &self,
        session: Option<&str>,
        venue_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Snapshot>> {
        let path = format!(
            "/api/stats/snapshots?venue_id={}&from={}&to={}",
            venue_id,
            urlencoding::encode(&from.to_rfc3339()),
            urlencoding::encode(&to.to_rfc3339()),
        );
        self.get_json(&path, session).await
    }
}
