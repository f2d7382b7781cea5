/*!
 * Lock-Guarded Maps
 * A plain hash map behind a single mutex or a single read/write lock
 */

use super::traits::{CountingMap, MapVariant};
use ahash::RandomState;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;

/// Hash map behind one exclusive lock
///
/// Every access, including `len`, serializes on the same lock.
#[derive(Debug, Default)]
pub struct MutexMap {
    inner: Mutex<HashMap<u64, u64, RandomState>>,
}

impl MutexMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the map; the probe never resizes mid-run when this is exact
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(HashMap::with_capacity_and_hasher(
                capacity,
                RandomState::new(),
            )),
        }
    }
}

impl CountingMap for MutexMap {
    #[inline]
    fn set(&self, key: u64, value: u64) {
        self.inner.lock().insert(key, value);
    }

    #[inline]
    fn len(&self) -> usize {
        self.inner.lock().len()
    }

    fn variant(&self) -> MapVariant {
        MapVariant::Mutex
    }
}

/// Hash map behind one read/write lock
///
/// Readers (`len`) share the lock, writers (`set`) hold it exclusively.
/// Pays off only when reads dominate; a write-only workload degrades to
/// mutex behaviour with a slightly heavier lock word.
#[derive(Debug, Default)]
pub struct RwLockMap {
    inner: RwLock<HashMap<u64, u64, RandomState>>,
}

impl RwLockMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(HashMap::with_capacity_and_hasher(
                capacity,
                RandomState::new(),
            )),
        }
    }
}

impl CountingMap for RwLockMap {
    #[inline]
    fn set(&self, key: u64, value: u64) {
        self.inner.write().insert(key, value);
    }

    #[inline]
    fn len(&self) -> usize {
        self.inner.read().len()
    }

    fn variant(&self) -> MapVariant {
        MapVariant::RwLock
    }
}
