/*!
 * Concurrent Map
 * DashMap-backed counting map, sharded internally
 */

use super::traits::{CountingMap, MapVariant};
use ahash::RandomState;
use dashmap::DashMap;

/// Counting map over `DashMap`
///
/// Writes to different shards proceed in parallel. `len` walks every entry
/// so the count is taken the same way a range-only concurrent map is counted.
#[derive(Debug)]
pub struct ConcurrentMap {
    inner: DashMap<u64, u64, RandomState>,
}

impl ConcurrentMap {
    pub fn new() -> Self {
        Self {
            inner: DashMap::with_hasher(RandomState::new()),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: DashMap::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    /// Entry count reported by the shards themselves
    pub fn shard_len(&self) -> usize {
        self.inner.len()
    }
}

impl Default for ConcurrentMap {
    fn default() -> Self {
        Self::new()
    }
}

impl CountingMap for ConcurrentMap {
    #[inline]
    fn set(&self, key: u64, value: u64) {
        self.inner.insert(key, value);
    }

    fn len(&self) -> usize {
        self.inner.iter().count()
    }

    fn variant(&self) -> MapVariant {
        MapVariant::Concurrent
    }
}
