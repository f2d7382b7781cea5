/*!
 * Atomic Counters - Entry Point
 *
 * Fifty workers increment a shared counter a thousand times each:
 * - Atomic counter always reaches the expected total
 * - Racy counter loses updates and varies between runs
 * - Mutex counter is exact but pays for the lock
 */

use concurrency_probes::counter::{run_counter_probe, CounterConfig, CounterVariant};
use concurrency_probes::init_tracing;
use tracing::info;

fn main() {
    init_tracing();

    let config = CounterConfig::default();
    info!(
        workers = config.workers,
        increments = config.increments_per_worker,
        "counter probe starting"
    );

    println!("=== Atomic Counter Test ===");
    match run_counter_probe(CounterVariant::Atomic, &config) {
        Ok(report) => {
            println!("Atomic ops: {}", report.actual);
            println!("Time taken: {:?}", report.elapsed);
        }
        Err(e) => {
            println!("Error in atomic counter test: {}", e);
            return;
        }
    }

    println!("\n=== Regular Counter Test ===");
    match run_counter_probe(CounterVariant::Racy, &config) {
        Ok(report) => {
            println!("Regular ops: {}", report.actual);
            println!("Expected: {}", report.expected);
            println!("Lost updates: {}", report.lost_updates());
            println!("Time taken: {:?}", report.elapsed);
        }
        Err(e) => {
            println!("Error in regular counter test: {}", e);
            return;
        }
    }

    println!("\n=== Mutex Counter Test ===");
    match run_counter_probe(CounterVariant::Locked, &config) {
        Ok(report) => {
            println!("Mutex ops: {}", report.actual);
            println!("Time taken: {:?}", report.elapsed);
        }
        Err(e) => println!("Error in mutex counter test: {}", e),
    }
}
