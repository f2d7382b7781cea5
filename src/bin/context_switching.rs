/*!
 * Context Switching - Entry Point
 *
 * Ping-pong over rendezvous channels with both workers on one runtime
 * thread, then on a runtime using every hardware thread.
 */

use concurrency_probes::context_switch::{
    hardware_threads, run_context_switch_probe, PingPongConfig, Round,
};
use concurrency_probes::init_tracing;
use tracing::info;

fn print_round(round: &Round) {
    println!("--- Run {} ---", round.run);
    println!("Single-thread total time: {:?}", round.single.total);
    println!("Single-thread avg switch: {:?}", round.single.per_handoff);
    println!("Multi-thread total time:  {:?}", round.multi.total);
    println!("Multi-thread avg switch:  {:?}", round.multi.per_handoff);
    if let Some(ref dedicated) = round.dedicated {
        println!("Dedicated-thread total time: {:?}", dedicated.total);
        println!("Dedicated-thread avg switch: {:?}", dedicated.per_handoff);
    }
    println!("{}", round.comparison.headline());
    println!();
}

fn main() {
    init_tracing();

    let config = PingPongConfig::default();
    info!(
        iterations = config.iterations,
        runs = config.runs,
        "context switch probe starting"
    );

    println!("Context Switching Performance Experiment");
    println!("=======================================");
    println!("CPU cores available: {}", hardware_threads());
    println!(
        "Iterations: {} (= {} total context switches)\n",
        config.iterations,
        config.handoffs()
    );

    println!("Running experiments ({} runs each)...", config.runs);
    println!("------------------------------------");

    let summary = match run_context_switch_probe(&config, print_round) {
        Ok(summary) => summary,
        Err(e) => {
            println!("Error in context switch test: {}", e);
            return;
        }
    };

    println!("=== SUMMARY STATISTICS ===");
    println!(
        "Single-thread average: {:?} (avg switch: {:?})",
        summary.single_avg, summary.single_avg_handoff
    );
    println!(
        "Multi-thread average:  {:?} (avg switch: {:?})",
        summary.multi_avg, summary.multi_avg_handoff
    );
    if let Some(dedicated_avg) = summary.dedicated_avg {
        println!("Dedicated-thread average: {:?}", dedicated_avg);
    }
    println!(
        "{} ({:.1}% improvement)",
        summary.comparison.headline(),
        summary.comparison.improvement_pct
    );
    println!("Result: {}", summary.conclusion());
}
