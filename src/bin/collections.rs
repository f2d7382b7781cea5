/*!
 * Collections - Entry Point
 *
 * Concurrent insertion into a mutex-guarded map, a read/write-lock-guarded
 * map and a sharded concurrent map.
 */

use concurrency_probes::collections::{build_map, run_map_probe, CollectionsConfig, MapVariant};
use concurrency_probes::init_tracing;
use tracing::info;

fn main() {
    init_tracing();

    let config = CollectionsConfig::default();
    info!(
        workers = config.workers,
        keys_per_worker = config.keys_per_worker,
        "collections probe starting"
    );

    println!("Collections Concurrency Experiment");
    println!("==================================");
    println!();

    for (index, variant) in MapVariant::ALL.into_iter().enumerate() {
        println!("=== Test {}: {} ===", index + 1, variant.title());

        let map = build_map(variant, &config);
        match run_map_probe(map.as_ref(), &config) {
            Ok(report) => {
                println!(
                    "Map length: {} (expected: {})",
                    report.len, report.expected_len
                );
                println!("Time taken: {:?}", report.elapsed);
                println!();
            }
            Err(e) => {
                println!("Error in {} test: {}", variant, e);
                return;
            }
        }
    }
}
