use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::stats::model::ChartResponse;

/// Cache key: one chart per (venue, night window).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartKey {
    pub venue_id: i64,
    pub from_ms: i64,
    pub to_ms: i64,
}

struct Entry {
    generation: u64,
    chart: Arc<ChartResponse>,
}

/// In-memory chart cache with a monotonic generation counter.
///
/// A fetch that started earlier can finish after a later one; its result
/// must not clobber the fresher chart. Every fetch calls `begin()` first
/// and passes the returned generation to `store()`, which drops writes
/// older than what the cache already holds.
pub struct ChartCache {
    seq: AtomicU64,
    entries: RwLock<HashMap<ChartKey, Entry>>,
}

impl ChartCache {
    pub fn new() -> Self {
        Self {
            seq: AtomicU64::new(0),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Reserve a generation for a fetch that is about to start.
    pub fn begin(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub async fn get(&self, key: &ChartKey) -> Option<Arc<ChartResponse>> {
        self.entries.read().await.get(key).map(|e| e.chart.clone())
    }

    /// Store a chart unless a newer generation already landed for this key.
    /// Returns whether the write was accepted.
    pub async fn store(&self, key: ChartKey, generation: u64, chart: Arc<ChartResponse>) -> bool {
        let mut entries = self.entries.write().await;
        if let Some(existing) = entries.get(&key) {
            if existing.generation > generation {
                return false;
            }
        }
        entries.insert(key, Entry { generation, chart });
        true
    }
}

impl Default for ChartCache {
    fn default() -> Self {
        Self::new()
    }
}
