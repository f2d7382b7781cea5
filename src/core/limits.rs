/*!
 * Run Parameters and Constants
 *
 * Centralized location for the default run parameters of every probe.
 * Binaries use these as-is; library callers override them through the
 * per-probe config structs.
 */

use std::time::Duration;

// =============================================================================
// WORKER POOLS
// =============================================================================

/// Concurrent workers for the counter and map probes
pub const DEFAULT_WORKERS: usize = 50;

/// Increments performed by each counter worker
pub const DEFAULT_INCREMENTS_PER_WORKER: u64 = 1000;

/// Distinct keys inserted by each map worker
/// Worker `w` owns the key range `w * keys_per_worker ..`
pub const DEFAULT_KEYS_PER_WORKER: u64 = 1000;

// =============================================================================
// CONTEXT SWITCHING
// =============================================================================

/// Ping-pong round trips per measurement (2 handoffs each)
pub const DEFAULT_PING_PONG_ITERATIONS: u64 = 1_000_000;

/// Pause between the single-thread and multi-thread measurement of a run
pub const DEFAULT_PAUSE_BETWEEN_MODES: Duration = Duration::from_millis(100);

// =============================================================================
// FILE ACCESS
// =============================================================================

/// Lines written per file write measurement
pub const DEFAULT_FILE_LINES: u64 = 100_000;

/// Base name of the scratch files (suffixed `_unbuffered` / `_buffered`)
pub const DEFAULT_SCRATCH_BASE_NAME: &str = "test_output.txt";

/// Payload appended to every `Line {i}: ` prefix
pub const DEFAULT_DATA_LINE: &str = "This is test data line for file I/O performance testing\n";

/// In-memory buffer size for the buffered writer
/// Matches the default buffer of common buffered writers (4KB)
pub const DEFAULT_WRITE_BUFFER_CAPACITY: usize = 4096;

// =============================================================================
// REPETITION
// =============================================================================

/// Rounds per repeated probe, averaged in the summary
pub const DEFAULT_RUNS: usize = 5;
