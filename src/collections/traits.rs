/*!
 * Counting Map Traits
 */

use serde::Serialize;
use std::fmt;

/// Integer-keyed map safe to share between any number of workers
///
/// `set` inserts or overwrites unconditionally and `len` returns the current
/// entry count. Neither can fail.
pub trait CountingMap: Send + Sync {
    /// Insert or overwrite `key`
    fn set(&self, key: u64, value: u64);

    /// Current number of entries
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Locking discipline of this map
    fn variant(&self) -> MapVariant;
}

/// Locking discipline under test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MapVariant {
    /// Exclusive lock for every access
    Mutex,
    /// Shared lock for `len`, exclusive lock for `set`
    RwLock,
    /// Internally sharded concurrent map
    Concurrent,
}

impl MapVariant {
    pub const ALL: [MapVariant; 3] = [Self::Mutex, Self::RwLock, Self::Concurrent];

    /// Heading used in the text report
    pub const fn title(self) -> &'static str {
        match self {
            Self::Mutex => "Map with Mutex",
            Self::RwLock => "Map with RwLock",
            Self::Concurrent => "Concurrent Map (DashMap)",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Mutex => "mutex",
            Self::RwLock => "rwlock",
            Self::Concurrent => "concurrent",
        }
    }
}

impl fmt::Display for MapVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
