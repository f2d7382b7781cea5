/*!
 * Collections Probe
 * Concurrent insertion into each counting map, timed, then counted once
 */

use super::concurrent::ConcurrentMap;
use super::config::CollectionsConfig;
use super::guarded::{MutexMap, RwLockMap};
use super::traits::{CountingMap, MapVariant};
use crate::core::errors::ProbeResult;
use crate::core::task_group::TaskGroup;
use crate::monitoring::tracer::{emit_report, ProbeSpan};
use serde::Serialize;
use std::time::Duration;

/// Outcome of one map run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapReport {
    pub variant: MapVariant,
    pub workers: usize,
    pub keys_per_worker: u64,
    pub expected_len: usize,
    pub len: usize,
    pub elapsed: Duration,
}

impl MapReport {
    /// Whether no insert was lost
    pub fn is_complete(&self) -> bool {
        self.len == self.expected_len
    }
}

/// Build an empty map for `variant`
pub fn build_map(variant: MapVariant, config: &CollectionsConfig) -> Box<dyn CountingMap> {
    let capacity = if config.presize { config.expected_len() } else { 0 };
    match variant {
        MapVariant::Mutex => Box::new(MutexMap::with_capacity(capacity)),
        MapVariant::RwLock => Box::new(RwLockMap::with_capacity(capacity)),
        MapVariant::Concurrent => Box::new(ConcurrentMap::with_capacity(capacity)),
    }
}

/// Populate `map` from `config.workers` writers and count it once they finish
///
/// Only the population phase is timed; the final `len` is outside the clock.
pub fn run_map_probe<M>(map: &M, config: &CollectionsConfig) -> ProbeResult<MapReport>
where
    M: CountingMap + ?Sized,
{
    config.validate()?;

    let variant = map.variant();
    let span = ProbeSpan::new("collections", variant.label());

    let elapsed = {
        let _entered = span.enter();
        TaskGroup::new(variant.label(), config.workers).run(|worker| {
            for i in 0..config.keys_per_worker {
                map.set(config.key_for(worker, i), i);
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

    let report = MapReport {
        variant,
        workers: config.workers,
        keys_per_worker: config.keys_per_worker,
        expected_len: config.expected_len(),
        len: map.len(),
        elapsed,
    };
    emit_report("collections", &report);
    Ok(report)
}

/// Build a fresh map of every variant and probe each in turn
pub fn run_all_maps(config: &CollectionsConfig) -> ProbeResult<Vec<MapReport>> {
    MapVariant::ALL
        .iter()
        .map(|&variant| {
            let map = build_map(variant, config);
            run_map_probe(map.as_ref(), config)
        })
        .collect()
}
