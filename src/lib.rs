/*!
 * Concurrency Probes Library
 * Independent micro-benchmarks of concurrency primitives
 */

pub mod collections;
pub mod context_switch;
pub mod core;
pub mod counter;
pub mod file_access;
pub mod monitoring;

// Re-exports
pub use crate::core::errors::{IoOp, ProbeError, ProbeResult};
pub use crate::core::task_group::TaskGroup;
pub use monitoring::init_tracing;
