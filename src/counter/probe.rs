/*!
 * Counter Probe
 * Many workers hammer one counter; compare the final total to the expected one
 */

use super::config::CounterConfig;
use super::shared::{CounterVariant, SharedCounter};
use crate::core::errors::ProbeResult;
use crate::core::task_group::TaskGroup;
use crate::monitoring::tracer::{emit_report, ProbeSpan};
use serde::Serialize;
use std::time::Duration;

/// Outcome of one counter run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterReport {
    pub variant: CounterVariant,
    pub workers: usize,
    pub increments_per_worker: u64,
    pub expected: u64,
    pub actual: u64,
    pub elapsed: Duration,
}

impl CounterReport {
    /// Whether every increment was observed
    pub fn is_exact(&self) -> bool {
        self.actual == self.expected
    }

    /// Increments overwritten by concurrent workers
    pub fn lost_updates(&self) -> u64 {
        self.expected.saturating_sub(self.actual)
    }
}

/// Run `config.workers` workers, each incrementing the counter
/// `config.increments_per_worker` times, and read the total after the join
pub fn run_counter_probe(
    variant: CounterVariant,
    config: &CounterConfig,
) -> ProbeResult<CounterReport> {
    config.validate()?;

    let span = ProbeSpan::new("counter", variant.label());
    let counter = SharedCounter::new(variant);
    let increments = config.increments_per_worker;

    let elapsed = {
        let _entered = span.enter();
        TaskGroup::new(variant.label(), config.workers).run(|_| {
            for _ in 0..increments {
                counter.increment();
            }
        })
    };

    let elapsed = match elapsed {
        Ok(elapsed) => elapsed,
        Err(e) => {
            span.fail(&e);
            return Err(e);
        }
    };
    span.finish(elapsed);

    let report = CounterReport {
        variant,
        workers: config.workers,
        increments_per_worker: config.increments_per_worker,
        expected: config.expected_total(),
        actual: counter.value(),
        elapsed,
    };
    emit_report("counter", &report);
    Ok(report)
}
