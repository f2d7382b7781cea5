/*!
 * Shared Counter
 * One counter type, three increment disciplines
 */

use parking_lot::Mutex;
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Increment discipline of a [`SharedCounter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterVariant {
    /// Atomic fetch-add, never loses an update
    Atomic,
    /// Separate load and store, loses updates under contention
    Racy,
    /// Increment under a mutex
    Locked,
}

impl CounterVariant {
    pub const ALL: [CounterVariant; 3] = [Self::Atomic, Self::Racy, Self::Locked];

    /// Whether the final total is guaranteed to be exact
    pub const fn is_deterministic(self) -> bool {
        !matches!(self, Self::Racy)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Atomic => "atomic",
            Self::Racy => "racy",
            Self::Locked => "locked",
        }
    }
}

impl fmt::Display for CounterVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unsigned counter shared by many workers
///
/// # Performance
///
/// - **Atomic**: single `fetch_add`, no lock
/// - **Racy**: two independent atomic ops, cheapest and wrong
/// - **Locked**: uncontended lock is a CAS, contended lock parks
pub enum SharedCounter {
    Atomic(AtomicU64),
    /// Read-modify-write split into a relaxed load and a relaxed store.
    /// Increments that land between another worker's load and store are
    /// overwritten, so the total is non-deterministic and never above the
    /// number of increments performed.
    Racy(AtomicU64),
    Locked(Mutex<u64>),
}

impl SharedCounter {
    pub fn new(variant: CounterVariant) -> Self {
        match variant {
            CounterVariant::Atomic => Self::Atomic(AtomicU64::new(0)),
            CounterVariant::Racy => Self::Racy(AtomicU64::new(0)),
            CounterVariant::Locked => Self::Locked(Mutex::new(0)),
        }
    }

    pub fn variant(&self) -> CounterVariant {
        match self {
            Self::Atomic(_) => CounterVariant::Atomic,
            Self::Racy(_) => CounterVariant::Racy,
            Self::Locked(_) => CounterVariant::Locked,
        }
    }

    #[inline(always)]
    pub fn increment(&self) {
        match self {
            Self::Atomic(a) => {
                a.fetch_add(1, Ordering::Relaxed);
            }
            Self::Racy(a) => {
                let current = a.load(Ordering::Relaxed);
                a.store(current.wrapping_add(1), Ordering::Relaxed);
            }
            Self::Locked(m) => *m.lock() += 1,
        }
    }

    /// Current value; exact once all workers have been joined
    #[inline]
    pub fn value(&self) -> u64 {
        match self {
            Self::Atomic(a) | Self::Racy(a) => a.load(Ordering::Relaxed),
            Self::Locked(m) => *m.lock(),
        }
    }
}

impl fmt::Debug for SharedCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedCounter")
            .field("variant", &self.variant())
            .field("value", &self.value())
            .finish()
    }
}
