/*!
 * Collections Probe
 *
 * Concurrent insertion into integer-keyed maps under three disciplines:
 * - Exclusive lock around every access
 * - Read/write lock (shared `len`, exclusive `set`)
 * - Internally sharded concurrent map
 *
 * The workload is write-only, so the read/write lock has nothing to gain
 * over the mutex while the sharded map spreads writers across shards.
 */

mod concurrent;
mod config;
mod guarded;
mod probe;
mod traits;

pub use concurrent::ConcurrentMap;
pub use config::CollectionsConfig;
pub use guarded::{MutexMap, RwLockMap};
pub use probe::{build_map, run_all_maps, run_map_probe, MapReport};
pub use traits::{CountingMap, MapVariant};
