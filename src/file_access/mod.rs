/*!
 * File Access Probe
 *
 * Writes the same formatted lines to a scratch file twice:
 * - Unbuffered: one write on the file handle per line
 * - Buffered: lines collect in memory and are flushed once
 *
 * Scratch files live only for the duration of a measurement and are
 * removed on every exit path by [`ScratchFile`].
 */

mod config;
mod guard;
mod probe;
mod writer;

pub use config::FileAccessConfig;
pub use guard::ScratchFile;
pub use probe::{run_file_access_probe, run_round, FileAccessSummary, FileRound};
pub use writer::{
    render_line, write_buffered, write_lines, write_unbuffered, WriteMode, WriteOutcome,
};
