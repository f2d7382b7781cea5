/*!
 * File Access Probe Configuration
 */

use crate::core::errors::{ProbeError, ProbeResult};
use crate::core::limits::{
    DEFAULT_DATA_LINE, DEFAULT_FILE_LINES, DEFAULT_RUNS, DEFAULT_SCRATCH_BASE_NAME,
    DEFAULT_WRITE_BUFFER_CAPACITY,
};
use std::path::PathBuf;

/// File access probe configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAccessConfig {
    /// Lines written per measurement
    pub lines: u64,
    /// Rounds averaged in the summary
    pub runs: usize,
    /// Directory holding the scratch files
    pub dir: PathBuf,
    /// Scratch file base name, suffixed `_unbuffered` / `_buffered`
    pub base_name: String,
    /// Text after each `Line {i}: ` prefix
    pub data_line: String,
    /// Buffer size of the buffered writer
    pub buffer_capacity: usize,
}

impl Default for FileAccessConfig {
    fn default() -> Self {
        Self {
            lines: DEFAULT_FILE_LINES,
            runs: DEFAULT_RUNS,
            dir: PathBuf::from("."),
            base_name: DEFAULT_SCRATCH_BASE_NAME.to_string(),
            data_line: DEFAULT_DATA_LINE.to_string(),
            buffer_capacity: DEFAULT_WRITE_BUFFER_CAPACITY,
        }
    }
}

impl FileAccessConfig {
    /// Small run for tests, writing under `dir`
    pub fn quick(dir: impl Into<PathBuf>) -> Self {
        Self {
            lines: 1_000,
            runs: 2,
            dir: dir.into(),
            ..Self::default()
        }
    }

    pub fn unbuffered_path(&self) -> PathBuf {
        self.dir.join(format!("{}_unbuffered", self.base_name))
    }

    pub fn buffered_path(&self) -> PathBuf {
        self.dir.join(format!("{}_buffered", self.base_name))
    }

    pub fn validate(&self) -> ProbeResult<()> {
        if self.lines == 0 {
            return Err(ProbeError::Configuration("file lines must be > 0".into()));
        }
        if self.runs == 0 {
            return Err(ProbeError::Configuration("file runs must be > 0".into()));
        }
        if self.buffer_capacity == 0 {
            return Err(ProbeError::Configuration(
                "write buffer capacity must be > 0".into(),
            ));
        }
        if self.base_name.is_empty() {
            return Err(ProbeError::Configuration(
                "scratch file base name must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratch_paths() {
        let config = FileAccessConfig::default();
        assert_eq!(config.unbuffered_path(), PathBuf::from("./test_output.txt_unbuffered"));
        assert_eq!(config.buffered_path(), PathBuf::from("./test_output.txt_buffered"));
    }

    #[test]
    fn test_validate() {
        assert!(FileAccessConfig::default().validate().is_ok());

        let no_buffer = FileAccessConfig {
            buffer_capacity: 0,
            ..FileAccessConfig::default()
        };
        assert!(no_buffer.validate().is_err());

        let no_lines = FileAccessConfig {
            lines: 0,
            ..FileAccessConfig::default()
        };
        assert!(no_lines.validate().is_err());
    }
}
