/*!
 * Scratch File Guard
 *
 * RAII guard that removes a scratch file on every exit path
 */

use crate::core::errors::{IoOp, ProbeError, ProbeResult};
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Scratch file with automatic removal
///
/// A guard only exists for a file it created, so a path that could not be
/// created (or was never touched) is left alone. Bind the guard before the
/// `File`: bindings drop in reverse order, so the handle closes first.
///
/// # Example
///
/// ```ignore
/// let (scratch, mut file) = ScratchFile::create("test_output.txt_buffered")?;
/// file.write_all(b"...")?;
/// // File closed, then removed on drop
/// ```
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
    active: bool,
}

impl ScratchFile {
    /// Create (or truncate) the file at `path` and guard it
    pub fn create(path: impl Into<PathBuf>) -> ProbeResult<(Self, File)> {
        let path = path.into();
        let file = File::create(&path).map_err(|e| ProbeError::io(IoOp::Create, &path, e))?;
        debug!(path = %path.display(), "scratch file created");
        Ok((Self { path, active: true }, file))
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the file now and report the outcome
    ///
    /// A file already gone counts as removed.
    pub fn release(mut self) -> ProbeResult<()> {
        self.active = false;
        remove(&self.path)
    }
}

fn remove(path: &Path) -> ProbeResult<()> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "scratch file removed");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ProbeError::io(IoOp::Remove, path, e)),
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            if let Err(e) = remove(&self.path) {
                warn!(path = %self.path.display(), error = %e, "scratch file cleanup failed");
            }
        }
    }
}
