/*!
 * Monitoring
 * Tracing setup and per-run spans
 */

pub mod tracer;

pub use tracer::{emit_report, generate_run_id, init_tracing, ProbeSpan};
