// src/modules/portfolio/application/helpers/snapshot_cache.rs

use std::future::Future;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

struct Snapshot<T> {
    value: T,
    stored_at: Instant,
}

/// Single-value cache with a time-to-live.
///
/// Shared by reference (usually behind an `Arc`) with every component that
/// reads or writes the cached entity. Writers call [`SnapshotCache::invalidate`]
/// after a successful mutation.
pub struct SnapshotCache<T> {
    ttl: Duration,
    slot: RwLock<Option<Snapshot<T>>>,
}

impl<T: Clone> SnapshotCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The cached value, if present and not expired.
    pub async fn get(&self) -> Option<T> {
        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|s| self.is_fresh(s))
            .map(|s| s.value.clone())
    }

    pub async fn store(&self, value: T) {
        *self.slot.write().await = Some(Snapshot {
            value,
            stored_at: Instant::now(),
        });
    }

    pub async fn invalidate(&self) {
        *self.slot.write().await = None;
    }

    /// Returns the fresh cached value or loads, stores and returns a new one.
    /// A failed load leaves the cache empty and is returned as is.
    pub async fn get_or_refresh<F, Fut, E>(&self, load: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.get().await {
            return Ok(value);
        }

        let mut slot = self.slot.write().await;

        // another caller may have refreshed while we waited for the lock
        if let Some(snapshot) = slot.as_ref().filter(|s| self.is_fresh(s)) {
            return Ok(snapshot.value.clone());
        }

        *slot = None;
        let value = load().await?;
        *slot = Some(Snapshot {
            value: value.clone(),
            stored_at: Instant::now(),
        });
        Ok(value)
    }

    fn is_fresh(&self, snapshot: &Snapshot<T>) -> bool {
        snapshot.stored_at.elapsed() < self.ttl
    }
}
