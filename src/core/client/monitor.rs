use anyhow::Result;

use crate::api::dto::paginated_response::UpstreamPage;
use crate::core::client::UpstreamClient;
use crate::domain::monitor::model::{AuditEntry, CounterRow};

impl UpstreamClient {
    pub async fn monitor_counters(&self, session: Option<&str>) -> Result<Vec<CounterRow>> {
        self.get_json("/api/admin/monitor/counters", session).await
    }

    pub async fn monitor_logs(
        &self,
        session: Option<&str>,
        limit: u64,
        cursor: Option<u64>,
    ) -> Result<UpstreamPage<AuditEntry>> {
        let path = match cursor {
            Some(c) => format!("/api/admin/monitor/logs?limit={limit}&cursor={c}"),
            None => format!("/api/admin/monitor/logs?limit={limit}"),
        };
        self.get_json(&path, session).await
    }
}
