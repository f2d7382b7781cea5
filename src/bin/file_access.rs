/*!
 * File Access - Entry Point
 *
 * Unbuffered vs. buffered writes of the same lines to scratch files in the
 * working directory. Scratch files are removed after every measurement.
 */

use concurrency_probes::file_access::{run_file_access_probe, FileAccessConfig, FileRound};
use concurrency_probes::{init_tracing, ProbeResult};
use tracing::info;

fn print_round(run: usize, outcome: &ProbeResult<FileRound>) {
    println!("--- Run {} ---", run);
    match outcome {
        Ok(round) => {
            println!("Unbuffered: {:?}", round.unbuffered.elapsed);
            println!("Buffered:   {:?}", round.buffered.elapsed);
            println!("Speedup:    {:.2}x\n", round.speedup());
        }
        Err(e) => println!("Error in file access test: {}\n", e),
    }
}

fn main() {
    init_tracing();

    let config = FileAccessConfig::default();
    info!(
        lines = config.lines,
        runs = config.runs,
        dir = %config.dir.display(),
        "file access probe starting"
    );

    println!("File Access Experiment - Multiple Runs");
    println!("=====================================\n");
    println!("Writing {} lines per file...\n", config.lines);

    let summary = match run_file_access_probe(&config, print_round) {
        Ok(Some(summary)) => summary,
        Ok(None) => {
            println!("No run completed; no summary available");
            return;
        }
        Err(e) => {
            println!("Error in file access test: {}", e);
            return;
        }
    };

    println!("=== SUMMARY STATISTICS ===");
    println!("Average Unbuffered: {:?}", summary.unbuffered_avg);
    println!("Average Buffered:   {:?}", summary.buffered_avg);
    println!("Average Speedup:    {:.2}x", summary.avg_speedup);
    println!("Performance improvement: {:.1}%", summary.improvement_pct);
}
