/*!
 * Core Module
 * Errors, run parameters and the pieces every probe shares
 */

pub mod errors;
pub mod gate;
pub mod limits;
pub mod report;
pub mod task_group;

// Re-export for convenience
pub use errors::*;
pub use gate::StartGate;
pub use report::Comparison;
pub use task_group::TaskGroup;
