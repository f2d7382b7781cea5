/*!
 * Context Switch Probe
 *
 * Measures the cost of handing control between two workers:
 * - Single-thread: both workers are tasks on one runtime thread
 * - Multi-thread: both tasks on a runtime using every hardware thread
 * - Dedicated threads: one OS thread per worker
 *
 * # Performance
 *
 * Each round trip is two rendezvous handoffs; the per-handoff average is
 * total time divided by twice the iteration count.
 */

mod config;
mod pingpong;
mod probe;

pub use config::{hardware_threads, PingPongConfig, SchedulerMode};
pub use pingpong::{handoff_average, ping_pong};
pub use probe::{measure, run_context_switch_probe, ContextSwitchSummary, PingPongRun, Round};
