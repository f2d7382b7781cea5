/*!
 * Task Group
 * Fixed-size worker pool joined by a completion barrier
 */

use super::errors::{ProbeError, ProbeResult};
use super::gate::StartGate;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Fixed-size group of named scoped workers
///
/// Every worker is launched before any is joined, and `run` returns only
/// after each worker has finished exactly once. Workers wait on a
/// [`StartGate`] until the last one is spawned, so they contend from the
/// first iteration.
///
/// # Example
///
/// ```ignore
/// let counter = AtomicU64::new(0);
/// let elapsed = TaskGroup::new("incr", 4).run(|_| {
///     counter.fetch_add(1, Ordering::Relaxed);
/// })?;
/// ```
#[derive(Debug, Clone)]
pub struct TaskGroup {
    name: &'static str,
    workers: usize,
}

impl TaskGroup {
    pub fn new(name: &'static str, workers: usize) -> Self {
        Self { name, workers }
    }

    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run `work(worker_index)` on every worker and wait for all of them
    ///
    /// Returns the wall-clock time from the first spawn to the last join.
    /// A panicking worker is reported only after all workers are joined.
    pub fn run<F>(&self, work: F) -> ProbeResult<Duration>
    where
        F: Fn(usize) + Sync,
    {
        let work = &work;
        let gate = &StartGate::new();
        let start = Instant::now();

        let outcome = thread::scope(|scope| {
            let mut handles = Vec::with_capacity(self.workers);
            for index in 0..self.workers {
                let spawned = thread::Builder::new()
                    .name(format!("{}-{}", self.name, index))
                    .spawn_scoped(scope, move || {
                        if gate.wait() {
                            work(index);
                        }
                    });

                match spawned {
                    Ok(handle) => handles.push(handle),
                    Err(e) => {
                        // Workers spawned so far leave without working; scope joins them
                        gate.cancel();
                        return Err(ProbeError::Runtime(format!(
                            "failed to spawn {}-{}: {}",
                            self.name, index, e
                        )));
                    }
                }
            }
            gate.open();

            let mut panicked = Vec::new();
            for (index, handle) in handles.into_iter().enumerate() {
                if handle.join().is_err() {
                    panicked.push(index);
                }
            }

            if panicked.is_empty() {
                Ok(())
            } else {
                error!(group = self.name, workers = ?panicked, "workers panicked");
                Err(ProbeError::WorkerPanicked(format!(
                    "{} worker(s) {:?} of group '{}'",
                    panicked.len(),
                    panicked,
                    self.name
                )))
            }
        });

        let elapsed = start.elapsed();
        outcome?;

        debug!(
            group = self.name,
            workers = self.workers,
            elapsed_us = elapsed.as_micros() as u64,
            "task group completed"
        );
        Ok(elapsed)
    }
}
