/*!
 * Counter Probe
 *
 * Makes the difference between atomic and non-atomic increments observable:
 * - Atomic fetch-add always reaches `workers * increments`
 * - Racy load/store loses updates and varies from run to run
 * - Mutex-guarded increment is exact but pays for the lock
 */

mod config;
mod shared;
mod probe;

pub use config::CounterConfig;
pub use shared::{CounterVariant, SharedCounter};
pub use probe::{run_counter_probe, CounterReport};
