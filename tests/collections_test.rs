/*!
 * Collections Probe Tests
 * No lost inserts for any locking discipline
 */

use concurrency_probes::collections::{
    build_map, run_all_maps, run_map_probe, CollectionsConfig, ConcurrentMap, CountingMap,
    MapVariant, MutexMap, RwLockMap,
};
use concurrency_probes::TaskGroup;
use pretty_assertions::assert_eq;
use std::sync::Arc;

#[test]
fn test_mutex_map_size_equals_distinct_keys() {
    let config = CollectionsConfig::default();
    let map = MutexMap::new();

    let report = run_map_probe(&map, &config).unwrap();

    assert_eq!(report.expected_len, 50_000);
    assert_eq!(report.len, 50_000);
    assert!(report.is_complete());
}

#[test]
fn test_rwlock_map_size_equals_distinct_keys() {
    let config = CollectionsConfig::default();
    let map = RwLockMap::new();

    let report = run_map_probe(&map, &config).unwrap();

    assert_eq!(report.len, 50_000);
    assert_eq!(report.variant, MapVariant::RwLock);
}

#[test]
fn test_concurrent_map_size_equals_distinct_keys() {
    let config = CollectionsConfig::default();
    let map = ConcurrentMap::new();

    let report = run_map_probe(&map, &config).unwrap();

    assert_eq!(report.len, 50_000);
    assert_eq!(map.shard_len(), 50_000);
}

#[test]
fn test_presized_maps() {
    let config = CollectionsConfig {
        presize: true,
        ..CollectionsConfig::default()
    };

    for variant in MapVariant::ALL {
        let map = build_map(variant, &config);
        let report = run_map_probe(map.as_ref(), &config).unwrap();
        assert_eq!(report.len, config.expected_len(), "{}", variant);
    }
}

#[test]
fn test_run_all_maps_reports_every_variant() {
    let reports = run_all_maps(&CollectionsConfig::quick()).unwrap();
    assert_eq!(reports.len(), 3);
    for report in &reports {
        println!("{}: {:?}", report.variant, report.elapsed);
        assert_eq!(report.len, 2000);
    }
}

#[test]
fn test_overlapping_keys_overwrite() {
    // Every worker writes the same 100 keys
    let map: Arc<dyn CountingMap> = Arc::new(RwLockMap::new());

    TaskGroup::new("overlap", 16)
        .run(|worker| {
            for key in 0..100 {
                map.set(key, worker as u64);
            }
        })
        .unwrap();

    assert_eq!(map.len(), 100);
}

#[test]
fn test_zero_workers_rejected() {
    let config = CollectionsConfig {
        workers: 0,
        ..CollectionsConfig::quick()
    };
    assert!(run_map_probe(&MutexMap::new(), &config).is_err());
}
