/*!
 * Context Switch Probe
 * Repeated single-thread vs. multi-thread ping-pong rounds and their summary
 */

use super::config::{PingPongConfig, SchedulerMode};
use super::pingpong::{handoff_average, ping_pong};
use crate::core::errors::{ProbeError, ProbeResult};
use crate::core::report::{mean, Comparison};
use crate::monitoring::tracer::{emit_report, ProbeSpan};
use serde::Serialize;
use std::thread;
use std::time::Duration;

/// One timed ping-pong measurement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PingPongRun {
    pub mode: SchedulerMode,
    pub iterations: u64,
    pub total: Duration,
    pub per_handoff: Duration,
}

/// Measure one ping-pong run in `mode`
pub fn measure(mode: SchedulerMode, iterations: u64) -> ProbeResult<PingPongRun> {
    let span = ProbeSpan::new("context_switch", mode.label());

    let total = match ping_pong(mode, iterations) {
        Ok(total) => total,
        Err(e) => {
            span.fail(&e);
            return Err(e);
        }
    };
    span.finish(total);

    Ok(PingPongRun {
        mode,
        iterations,
        total,
        per_handoff: handoff_average(total, iterations),
    })
}

/// Measurements of one round
#[derive(Debug, Clone, Serialize)]
pub struct Round {
    /// 1-based round number
    pub run: usize,
    pub single: PingPongRun,
    pub multi: PingPongRun,
    pub dedicated: Option<PingPongRun>,
    pub comparison: Comparison,
}

/// Averages over every round
#[derive(Debug, Clone, Serialize)]
pub struct ContextSwitchSummary {
    pub iterations: u64,
    pub rounds: Vec<Round>,
    pub single_avg: Duration,
    pub multi_avg: Duration,
    pub dedicated_avg: Option<Duration>,
    pub single_avg_handoff: Duration,
    pub multi_avg_handoff: Duration,
    pub comparison: Comparison,
}

impl ContextSwitchSummary {
    /// Build the summary; `None` when there are no rounds
    pub fn from_rounds(iterations: u64, rounds: Vec<Round>) -> Option<Self> {
        let singles: Vec<Duration> = rounds.iter().map(|r| r.single.total).collect();
        let multis: Vec<Duration> = rounds.iter().map(|r| r.multi.total).collect();
        let dedicated: Vec<Duration> = rounds
            .iter()
            .filter_map(|r| r.dedicated.as_ref().map(|d| d.total))
            .collect();

        let single_avg = mean(&singles)?;
        let multi_avg = mean(&multis)?;

        Some(Self {
            iterations,
            single_avg,
            multi_avg,
            dedicated_avg: mean(&dedicated),
            single_avg_handoff: handoff_average(single_avg, iterations),
            multi_avg_handoff: handoff_average(multi_avg, iterations),
            comparison: compare(single_avg, multi_avg),
            rounds,
        })
    }

    /// One-line reading of the averages
    pub fn conclusion(&self) -> &'static str {
        if self.single_avg < self.multi_avg {
            "Cooperative task switching on one thread is faster than cross-thread switching"
        } else {
            "Thread parallelism outweighs the cross-thread switching overhead"
        }
    }
}

fn compare(single: Duration, multi: Duration) -> Comparison {
    Comparison::between(("Single-thread", single), ("Multi-thread", multi))
}

/// Run `config.runs` rounds and summarize them
///
/// `on_round` sees each round as soon as it is measured. The first failed
/// measurement aborts the probe.
pub fn run_context_switch_probe<F>(
    config: &PingPongConfig,
    mut on_round: F,
) -> ProbeResult<ContextSwitchSummary>
where
    F: FnMut(&Round),
{
    config.validate()?;

    let multi_mode = config.multi_thread_mode();
    let mut rounds = Vec::with_capacity(config.runs);

    for run in 1..=config.runs {
        let single = measure(SchedulerMode::SingleThread, config.iterations)?;

        if !config.pause_between.is_zero() {
            thread::sleep(config.pause_between);
        }

        let multi = measure(multi_mode, config.iterations)?;
        let dedicated = if config.dedicated_threads {
            Some(measure(SchedulerMode::DedicatedThreads, config.iterations)?)
        } else {
            None
        };

        let round = Round {
            run,
            comparison: compare(single.total, multi.total),
            single,
            multi,
            dedicated,
        };
        on_round(&round);
        rounds.push(round);
    }

    let summary = ContextSwitchSummary::from_rounds(config.iterations, rounds)
        .ok_or_else(|| ProbeError::Configuration("no rounds were measured".into()))?;
    emit_report("context_switch", &summary);
    Ok(summary)
}
