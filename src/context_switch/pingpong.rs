/*!
 * Ping-Pong
 *
 * Two workers alternate over a pair of rendezvous (zero-capacity) channels.
 * A send completes only when the peer receives, so each message is one
 * handoff and every round trip is two.
 */

use super::config::SchedulerMode;
use crate::core::errors::{ProbeError, ProbeResult};
use crate::core::report::nanos_to_duration;
use std::thread;
use std::time::{Duration, Instant};
use tokio::runtime::{Builder, Runtime};

/// Time `iterations` round trips between two workers scheduled per `mode`
///
/// The clock covers spawning both workers and all handoffs, not runtime
/// construction.
pub fn ping_pong(mode: SchedulerMode, iterations: u64) -> ProbeResult<Duration> {
    match mode {
        SchedulerMode::SingleThread | SchedulerMode::MultiThread { .. } => {
            let runtime = build_runtime(mode)?;
            runtime.block_on(async_ping_pong(iterations))
        }
        SchedulerMode::DedicatedThreads => thread_ping_pong(iterations),
    }
}

/// Average one-way handoff cost: `total / (2 * iterations)` in whole nanoseconds
pub fn handoff_average(total: Duration, iterations: u64) -> Duration {
    if iterations == 0 {
        return Duration::ZERO;
    }
    nanos_to_duration(total.as_nanos() / (2 * iterations as u128))
}

fn build_runtime(mode: SchedulerMode) -> ProbeResult<Runtime> {
    let built = match mode {
        SchedulerMode::SingleThread => Builder::new_current_thread().build(),
        SchedulerMode::MultiThread { workers } => Builder::new_multi_thread()
            .worker_threads(workers.max(1))
            .thread_name("ping-pong-worker")
            .build(),
        SchedulerMode::DedicatedThreads => {
            return Err(ProbeError::Runtime(
                "dedicated threads do not use an async runtime".into(),
            ))
        }
    };
    built.map_err(|e| {
        ProbeError::Runtime(format!(
            "failed to build {} runtime: {}",
            mode.label(),
            e
        ))
    })
}

async fn async_ping_pong(iterations: u64) -> ProbeResult<Duration> {
    let (ping_tx, ping_rx) = flume::bounded::<()>(0);
    let (pong_tx, pong_rx) = flume::bounded::<()>(0);

    let start = Instant::now();

    let initiator = tokio::spawn(async move {
        for _ in 0..iterations {
            ping_tx.send_async(()).await?;
            pong_rx.recv_async().await?;
        }
        Ok::<_, ProbeError>(())
    });

    let responder = tokio::spawn(async move {
        for _ in 0..iterations {
            ping_rx.recv_async().await?;
            pong_tx.send_async(()).await?;
        }
        Ok::<_, ProbeError>(())
    });

    let (initiated, responded) = tokio::join!(initiator, responder);
    let elapsed = start.elapsed();

    initiated??;
    responded??;
    Ok(elapsed)
}

fn thread_ping_pong(iterations: u64) -> ProbeResult<Duration> {
    let (ping_tx, ping_rx) = flume::bounded::<()>(0);
    let (pong_tx, pong_rx) = flume::bounded::<()>(0);

    let start = Instant::now();

    let (initiated, responded) = thread::scope(|scope| {
        // A failed spawn drops its closure and with it one channel end,
        // which disconnects the peer instead of leaving it blocked.
        let initiator = thread::Builder::new()
            .name("ping".into())
            .spawn_scoped(scope, move || -> ProbeResult<()> {
                for _ in 0..iterations {
                    ping_tx.send(())?;
                    pong_rx.recv()?;
                }
                Ok(())
            });

        let responder = thread::Builder::new()
            .name("pong".into())
            .spawn_scoped(scope, move || -> ProbeResult<()> {
                for _ in 0..iterations {
                    ping_rx.recv()?;
                    pong_tx.send(())?;
                }
                Ok(())
            });

        (join_named("ping", initiator), join_named("pong", responder))
    });
    let elapsed = start.elapsed();

    initiated?;
    responded?;
    Ok(elapsed)
}

fn join_named(
    name: &str,
    spawned: std::io::Result<thread::ScopedJoinHandle<'_, ProbeResult<()>>>,
) -> ProbeResult<()> {
    let handle = spawned
        .map_err(|e| ProbeError::Runtime(format!("failed to spawn {} thread: {}", name, e)))?;
    handle
        .join()
        .map_err(|_| ProbeError::WorkerPanicked(format!("{} thread", name)))?
}
