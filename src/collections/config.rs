/*!
 * Collections Probe Configuration
 */

use crate::core::errors::{ProbeError, ProbeResult};
use crate::core::limits::{DEFAULT_KEYS_PER_WORKER, DEFAULT_WORKERS};

/// Worker pool shape for a map run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionsConfig {
    /// Concurrent writers
    pub workers: usize,
    /// Distinct keys written by each worker
    pub keys_per_worker: u64,
    /// Pre-size maps to the expected entry count
    pub presize: bool,
}

impl Default for CollectionsConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            keys_per_worker: DEFAULT_KEYS_PER_WORKER,
            presize: false,
        }
    }
}

impl CollectionsConfig {
    /// Small run for tests
    pub const fn quick() -> Self {
        Self {
            workers: 8,
            keys_per_worker: 250,
            presize: false,
        }
    }

    /// Entries the map must hold once every worker is done
    pub fn expected_len(&self) -> usize {
        self.workers * self.keys_per_worker as usize
    }

    /// Key written by `worker` on its `i`-th insert; ranges never overlap
    #[inline]
    pub fn key_for(&self, worker: usize, i: u64) -> u64 {
        worker as u64 * self.keys_per_worker + i
    }

    pub fn validate(&self) -> ProbeResult<()> {
        if self.workers == 0 {
            return Err(ProbeError::Configuration("map workers must be > 0".into()));
        }
        if self.keys_per_worker == 0 {
            return Err(ProbeError::Configuration(
                "map keys per worker must be > 0".into(),
            ));
        }
        Ok(())
    }
}
