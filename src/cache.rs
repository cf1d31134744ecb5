use crate::page::PageSnapshot;
use chrono::{DateTime, Duration, Utc};
use std::future::Future;
use tokio::sync::Mutex;
use tracing::{debug, info};

struct CachedPage {
    snapshot: PageSnapshot,
    computed_at: DateTime<Utc>,
}

impl CachedPage {
    /// Fresh = computed under an hour ago and carrying a real snapshot (a
    /// recorded team name). Anything else is stale.
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now - self.computed_at < Duration::hours(1) && !self.snapshot.team_name.is_empty()
    }
}

/// The process-wide cache slot: exactly one snapshot plus its computation
/// instant, behind one lock. Not a keyed cache — a single slot that resets
/// with the process.
#[derive(Default)]
pub struct SnapshotCache {
    slot: Mutex<Option<CachedPage>>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached snapshot while it is fresh; otherwise run
    /// `recompute` inline — still holding the lock — and store its result
    /// with the current instant. Every concurrent caller serializes here, so
    /// at most one recomputation is ever in flight and a miss's latency is
    /// paid by all callers blocked behind it.
    pub async fn get_or_refresh<F, Fut>(&self, recompute: F) -> PageSnapshot
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = PageSnapshot>,
    {
        let mut slot = self.slot.lock().await;

        if let Some(cached) = slot.as_ref()
            && cached.is_fresh(Utc::now())
        {
            debug!("serving page from cache");
            return cached.snapshot.clone();
        }

        info!("cache stale or empty, fetching from upstreams");
        let snapshot = recompute().await;
        *slot = Some(CachedPage { snapshot: snapshot.clone(), computed_at: Utc::now() });
        snapshot
    }
}
