/*!
 * Line Writers
 * Same lines, written straight to the handle or through an in-memory buffer
 */

use super::guard::ScratchFile;
use crate::core::errors::{IoOp, ProbeError, ProbeResult};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

/// How lines reach the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WriteMode {
    /// One write call on the file handle per line
    Unbuffered,
    /// Lines collect in a buffer of `capacity` bytes, flushed once at the end
    Buffered { capacity: usize },
}

impl WriteMode {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unbuffered => "Unbuffered",
            Self::Buffered { .. } => "Buffered",
        }
    }
}

/// Result of writing one scratch file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteOutcome {
    pub mode: WriteMode,
    pub lines: u64,
    pub bytes_written: u64,
    pub elapsed: Duration,
}

/// Line `i` of every scratch file
#[inline]
pub fn render_line(i: u64, data_line: &str) -> String {
    format!("Line {}: {}", i, data_line)
}

/// Write `lines` lines to a scratch file at `path`, then remove it
///
/// The clock starts after the file is created and stops after the last
/// byte reached the file (after the final flush when buffered).
pub fn write_lines(
    mode: WriteMode,
    path: &Path,
    lines: u64,
    data_line: &str,
) -> ProbeResult<WriteOutcome> {
    let (scratch, file) = ScratchFile::create(path)?;

    let start = Instant::now();
    let bytes_written = match mode {
        WriteMode::Unbuffered => write_each(file, path, lines, data_line)?,
        WriteMode::Buffered { capacity } => {
            write_through_buffer(file, capacity, path, lines, data_line)?
        }
    };
    let elapsed = start.elapsed();

    scratch.release()?;

    Ok(WriteOutcome {
        mode,
        lines,
        bytes_written,
        elapsed,
    })
}

/// Unbuffered variant of [`write_lines`]
pub fn write_unbuffered(path: &Path, lines: u64, data_line: &str) -> ProbeResult<WriteOutcome> {
    write_lines(WriteMode::Unbuffered, path, lines, data_line)
}

/// Buffered variant of [`write_lines`]
pub fn write_buffered(
    path: &Path,
    lines: u64,
    data_line: &str,
    capacity: usize,
) -> ProbeResult<WriteOutcome> {
    write_lines(WriteMode::Buffered { capacity }, path, lines, data_line)
}

fn write_each(mut file: File, path: &Path, lines: u64, data_line: &str) -> ProbeResult<u64> {
    let mut bytes = 0u64;
    for i in 0..lines {
        let line = render_line(i, data_line);
        file.write_all(line.as_bytes())
            .map_err(|e| ProbeError::io(IoOp::Write, path, e))?;
        bytes += line.len() as u64;
    }
    Ok(bytes)
}

fn write_through_buffer(
    file: File,
    capacity: usize,
    path: &Path,
    lines: u64,
    data_line: &str,
) -> ProbeResult<u64> {
    let mut writer = BufWriter::with_capacity(capacity, file);
    let mut bytes = 0u64;
    for i in 0..lines {
        let line = render_line(i, data_line);
        writer
            .write_all(line.as_bytes())
            .map_err(|e| ProbeError::io(IoOp::Write, path, e))?;
        bytes += line.len() as u64;
    }
    writer
        .flush()
        .map_err(|e| ProbeError::io(IoOp::Flush, path, e))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const DATA: &str = "payload\n";

    #[test]
    fn test_render_line() {
        assert_eq!(render_line(0, DATA), "Line 0: payload\n");
        assert_eq!(render_line(42, DATA), "Line 42: payload\n");
    }

    #[test]
    fn test_byte_counts_match() {
        let dir = tempdir().unwrap();
        let unbuffered = write_unbuffered(&dir.path().join("u"), 250, DATA).unwrap();
        let buffered = write_buffered(&dir.path().join("b"), 250, DATA, 64).unwrap();

        let expected: u64 = (0..250).map(|i| render_line(i, DATA).len() as u64).sum();
        assert_eq!(unbuffered.bytes_written, expected);
        assert_eq!(buffered.bytes_written, expected);
        assert_eq!(unbuffered.mode, WriteMode::Unbuffered);
        assert_eq!(buffered.mode, WriteMode::Buffered { capacity: 64 });
    }

    #[test]
    fn test_files_removed_after_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scratch");
        write_buffered(&path, 10, DATA, 4096).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_zero_lines() {
        let dir = tempdir().unwrap();
        let outcome = write_unbuffered(&dir.path().join("empty"), 0, DATA).unwrap();
        assert_eq!(outcome.bytes_written, 0);
    }
}
