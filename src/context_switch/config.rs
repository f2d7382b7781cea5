/*!
 * Context Switch Probe Configuration
 *
 * Runtime configuration for scheduler mode selection
 */

use crate::core::errors::{ProbeError, ProbeResult};
use crate::core::limits::{DEFAULT_PAUSE_BETWEEN_MODES, DEFAULT_PING_PONG_ITERATIONS, DEFAULT_RUNS};
use serde::Serialize;
use std::num::NonZeroUsize;
use std::thread;
use std::time::Duration;
use tracing::warn;

/// Where the two ping-pong workers are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchedulerMode {
    /// Both workers are tasks on one runtime thread (cooperative hand-off)
    SingleThread,
    /// Both workers are tasks on a work-stealing runtime of `workers` threads
    MultiThread { workers: usize },
    /// Each worker is its own OS thread blocking on the channels
    DedicatedThreads,
}

impl SchedulerMode {
    /// Multi-thread mode sized to every available hardware thread
    pub fn all_hardware_threads() -> Self {
        Self::MultiThread {
            workers: hardware_threads(),
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::SingleThread => "Single-thread",
            Self::MultiThread { .. } => "Multi-thread",
            Self::DedicatedThreads => "Dedicated-thread",
        }
    }
}

/// Hardware threads available to this process, 1 if unknown
pub fn hardware_threads() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or_else(|e| {
            warn!(error = %e, "could not query available parallelism, assuming 1");
            1
        })
}

/// Context switch probe configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingPongConfig {
    /// Round trips per measurement (each is 2 handoffs)
    pub iterations: u64,
    /// Rounds averaged in the summary
    pub runs: usize,
    /// Sleep between the single-thread and multi-thread measurement
    pub pause_between: Duration,
    /// Multi-thread runtime size, `None` for all hardware threads
    pub multi_thread_workers: Option<usize>,
    /// Also measure two dedicated OS threads each round
    pub dedicated_threads: bool,
}

impl Default for PingPongConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_PING_PONG_ITERATIONS,
            runs: DEFAULT_RUNS,
            pause_between: DEFAULT_PAUSE_BETWEEN_MODES,
            multi_thread_workers: None,
            dedicated_threads: true,
        }
    }
}

impl PingPongConfig {
    /// Small run for tests
    pub const fn quick() -> Self {
        Self {
            iterations: 2_000,
            runs: 2,
            pause_between: Duration::ZERO,
            multi_thread_workers: Some(2),
            dedicated_threads: true,
        }
    }

    /// Total handoffs per measurement
    pub fn handoffs(&self) -> u64 {
        self.iterations * 2
    }

    pub fn multi_thread_mode(&self) -> SchedulerMode {
        match self.multi_thread_workers {
            Some(workers) => SchedulerMode::MultiThread { workers },
            None => SchedulerMode::all_hardware_threads(),
        }
    }

    pub fn validate(&self) -> ProbeResult<()> {
        if self.iterations == 0 {
            return Err(ProbeError::Configuration(
                "ping-pong iterations must be > 0".into(),
            ));
        }
        if self.runs == 0 {
            return Err(ProbeError::Configuration("ping-pong runs must be > 0".into()));
        }
        if self.multi_thread_workers == Some(0) {
            return Err(ProbeError::Configuration(
                "multi-thread runtime needs at least one worker".into(),
            ));
        }
        Ok(())
    }
}
