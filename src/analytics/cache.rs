//! Snapshot sources and a time-bounded snapshot cache.
//!
//! Uses `arc-swap` so a refresh replaces the whole snapshot atomically.
//! Readers keep the `Arc` they loaded, so a lookup never sees half of an old
//! mapping and half of a new one.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwapOption;

use super::{MetricsSnapshot, SnapshotError};
use crate::debug;

/// Anything that can produce a fresh analytics snapshot.
///
/// Implemented by analytics clients. The crate ships [`FileSource`] for
/// exported JSON snapshots.
pub trait SnapshotSource {
    fn fetch(&self) -> Result<MetricsSnapshot, SnapshotError>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}

/// Snapshot exported to a JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSource for FileSource {
    fn fetch(&self) -> Result<MetricsSnapshot, SnapshotError> {
        MetricsSnapshot::load(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

struct Cached {
    snapshot: Arc<MetricsSnapshot>,
    fetched_at: Instant,
}

/// Latest snapshot plus the instant it was fetched.
pub struct MetricsCache {
    slot: ArcSwapOption<Cached>,
    ttl: Duration,
}

impl MetricsCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: ArcSwapOption::empty(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Current snapshot, even if stale.
    pub fn current(&self) -> Option<Arc<MetricsSnapshot>> {
        self.slot
            .load_full()
            .map(|cached| Arc::clone(&cached.snapshot))
    }

    /// True when empty or older than the TTL.
    pub fn is_stale(&self) -> bool {
        self.slot
            .load_full()
            .is_none_or(|cached| cached.fetched_at.elapsed() >= self.ttl)
    }

    /// Store a freshly fetched snapshot and return the shared handle.
    pub fn replace(&self, snapshot: MetricsSnapshot) -> Arc<MetricsSnapshot> {
        let snapshot = Arc::new(snapshot);
        self.slot.store(Some(Arc::new(Cached {
            snapshot: Arc::clone(&snapshot),
            fetched_at: Instant::now(),
        })));
        snapshot
    }

    /// Drop the cached snapshot; the next `get_or_refresh` fetches.
    pub fn invalidate(&self) {
        self.slot.store(None);
    }

    /// Cached snapshot if fresh, otherwise fetch from `source` and cache it.
    ///
    /// On fetch failure the old snapshot stays in place.
    pub fn get_or_refresh<S: SnapshotSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<Arc<MetricsSnapshot>, SnapshotError> {
        if !self.is_stale()
            && let Some(snapshot) = self.current()
        {
            return Ok(snapshot);
        }

        let snapshot = source.fetch()?;
        debug!("metrics"; "fetched {} pages from {}", snapshot.len(), source.describe());
        Ok(self.replace(snapshot))
    }
}

impl std::fmt::Debug for MetricsCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsCache")
            .field("ttl", &self.ttl)
            .field("cached", &self.current().map(|s| s.len()))
            .finish()
    }
}
