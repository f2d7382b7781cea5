/*!
 * Counter Probe Configuration
 */

use crate::core::errors::{ProbeError, ProbeResult};
use crate::core::limits::{DEFAULT_INCREMENTS_PER_WORKER, DEFAULT_WORKERS};

/// Worker pool shape for a counter run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterConfig {
    /// Concurrent workers sharing the counter
    pub workers: usize,
    /// Increments performed by each worker
    pub increments_per_worker: u64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            increments_per_worker: DEFAULT_INCREMENTS_PER_WORKER,
        }
    }
}

impl CounterConfig {
    /// Small run for tests
    pub const fn quick() -> Self {
        Self {
            workers: 8,
            increments_per_worker: 500,
        }
    }

    /// Total the counter must reach when no update is lost
    pub fn expected_total(&self) -> u64 {
        self.workers as u64 * self.increments_per_worker
    }

    pub fn validate(&self) -> ProbeResult<()> {
        if self.workers == 0 {
            return Err(ProbeError::Configuration("counter workers must be > 0".into()));
        }
        if self.increments_per_worker == 0 {
            return Err(ProbeError::Configuration(
                "counter increments per worker must be > 0".into(),
            ));
        }
        Ok(())
    }
}
