/*!
 * Counter Probe Tests
 * Atomic, racy and locked counters under a fixed worker pool
 */

use concurrency_probes::counter::{run_counter_probe, CounterConfig, CounterVariant};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_atomic_counter_reaches_expected_total() {
    // 50 workers x 1000 increments
    let config = CounterConfig::default();
    let report = run_counter_probe(CounterVariant::Atomic, &config).unwrap();

    assert_eq!(report.expected, 50_000);
    assert_eq!(report.actual, 50_000);
    assert!(report.is_exact());
}

#[test]
fn test_atomic_counter_is_deterministic() {
    let config = CounterConfig::default();
    for _ in 0..5 {
        let report = run_counter_probe(CounterVariant::Atomic, &config).unwrap();
        assert_eq!(report.actual, 50_000);
    }
}

#[test]
fn test_racy_counter_never_exceeds_expected() {
    let config = CounterConfig::default();

    let first = run_counter_probe(CounterVariant::Racy, &config).unwrap();
    let second = run_counter_probe(CounterVariant::Racy, &config).unwrap();

    // Totals may differ between runs; that is the point of the demonstration
    println!(
        "Racy totals: {} then {} (expected {})",
        first.actual, second.actual, first.expected
    );
    assert!(first.actual <= 50_000);
    assert!(second.actual <= 50_000);
    assert_eq!(first.lost_updates(), 50_000 - first.actual);
}

#[test]
fn test_locked_counter_reaches_expected_total() {
    let report = run_counter_probe(CounterVariant::Locked, &CounterConfig::default()).unwrap();
    assert_eq!(report.actual, 50_000);
    assert_eq!(report.workers, 50);
    assert_eq!(report.increments_per_worker, 1000);
}

#[test]
fn test_zero_increments_rejected() {
    let config = CounterConfig {
        increments_per_worker: 0,
        ..CounterConfig::default()
    };
    assert!(run_counter_probe(CounterVariant::Atomic, &config).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_deterministic_variants_are_exact(workers in 1usize..12, increments in 1u64..400) {
        let config = CounterConfig { workers, increments_per_worker: increments };
        for variant in [CounterVariant::Atomic, CounterVariant::Locked] {
            let report = run_counter_probe(variant, &config).unwrap();
            prop_assert_eq!(report.actual, workers as u64 * increments);
        }
    }

    #[test]
    fn prop_racy_is_bounded(workers in 1usize..12, increments in 1u64..400) {
        let config = CounterConfig { workers, increments_per_worker: increments };
        let report = run_counter_probe(CounterVariant::Racy, &config).unwrap();
        prop_assert!(report.actual <= config.expected_total());
        prop_assert!(report.actual > 0);
    }
}
