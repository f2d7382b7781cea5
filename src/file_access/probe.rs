/*!
 * File Access Probe
 * Repeated unbuffered vs. buffered rounds and their summary
 */

use super::config::FileAccessConfig;
use super::writer::{write_buffered, write_unbuffered, WriteOutcome};
use crate::core::errors::ProbeResult;
use crate::core::report::{improvement_pct, mean, speedup};
use crate::monitoring::tracer::{emit_report, ProbeSpan};
use serde::Serialize;
use std::time::Duration;

/// Both measurements of one round
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileRound {
    pub unbuffered: WriteOutcome,
    pub buffered: WriteOutcome,
}

impl FileRound {
    /// `unbuffered / buffered`
    pub fn speedup(&self) -> f64 {
        speedup(self.unbuffered.elapsed, self.buffered.elapsed)
    }

    /// Percentage of unbuffered time saved by buffering
    pub fn improvement_pct(&self) -> f64 {
        improvement_pct(self.unbuffered.elapsed, self.buffered.elapsed)
    }
}

/// Unbuffered then buffered write of `config.lines` lines
///
/// Stops at the first error; both scratch files are gone either way.
pub fn run_round(config: &FileAccessConfig) -> ProbeResult<FileRound> {
    config.validate()?;

    let unbuffered = timed("unbuffered", || {
        write_unbuffered(&config.unbuffered_path(), config.lines, &config.data_line)
    })?;
    let buffered = timed("buffered", || {
        write_buffered(
            &config.buffered_path(),
            config.lines,
            &config.data_line,
            config.buffer_capacity,
        )
    })?;

    Ok(FileRound {
        unbuffered,
        buffered,
    })
}

fn timed<F>(variant: &'static str, write: F) -> ProbeResult<WriteOutcome>
where
    F: FnOnce() -> ProbeResult<WriteOutcome>,
{
    let span = ProbeSpan::new("file_access", variant);
    match write() {
        Ok(outcome) => {
            span.finish(outcome.elapsed);
            Ok(outcome)
        }
        Err(e) => {
            span.fail(&e);
            Err(e)
        }
    }
}

/// Averages over the successful rounds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileAccessSummary {
    pub lines: u64,
    pub rounds: Vec<FileRound>,
    pub failed_rounds: usize,
    pub unbuffered_avg: Duration,
    pub buffered_avg: Duration,
    pub avg_speedup: f64,
    pub improvement_pct: f64,
}

impl FileAccessSummary {
    /// Build the summary; `None` when no round succeeded
    pub fn from_rounds(lines: u64, rounds: Vec<FileRound>, failed_rounds: usize) -> Option<Self> {
        let unbuffered: Vec<Duration> = rounds.iter().map(|r| r.unbuffered.elapsed).collect();
        let buffered: Vec<Duration> = rounds.iter().map(|r| r.buffered.elapsed).collect();

        let unbuffered_avg = mean(&unbuffered)?;
        let buffered_avg = mean(&buffered)?;

        Some(Self {
            lines,
            rounds,
            failed_rounds,
            unbuffered_avg,
            buffered_avg,
            avg_speedup: speedup(unbuffered_avg, buffered_avg),
            improvement_pct: improvement_pct(unbuffered_avg, buffered_avg),
        })
    }
}

/// Run `config.runs` rounds and summarize the successful ones
///
/// `on_round` sees every round (1-based) including failed ones; a failed
/// round is skipped. Returns `Ok(None)` when every round failed.
pub fn run_file_access_probe<F>(
    config: &FileAccessConfig,
    mut on_round: F,
) -> ProbeResult<Option<FileAccessSummary>>
where
    F: FnMut(usize, &ProbeResult<FileRound>),
{
    config.validate()?;

    let mut rounds = Vec::with_capacity(config.runs);
    let mut failed = 0;

    for run in 1..=config.runs {
        let outcome = run_round(config);
        on_round(run, &outcome);
        match outcome {
            Ok(round) => rounds.push(round),
            Err(_) => failed += 1,
        }
    }

    let summary = FileAccessSummary::from_rounds(config.lines, rounds, failed);
    if let Some(ref summary) = summary {
        emit_report("file_access", summary);
    }
    Ok(summary)
}
