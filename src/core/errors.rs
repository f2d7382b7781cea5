/*!
 * Error Types
 * Centralized error handling with thiserror and miette support
 */

use miette::Diagnostic;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result alias used by every probe
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Filesystem operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IoOp {
    Create,
    Write,
    Flush,
    Remove,
}

impl fmt::Display for IoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            IoOp::Create => "create",
            IoOp::Write => "write",
            IoOp::Flush => "flush",
            IoOp::Remove => "remove",
        };
        f.write_str(verb)
    }
}

/// Unified probe error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum ProbeError {
    #[error("failed to {op} {}: {source}", .path.display())]
    #[diagnostic(
        code(probe::io_error),
        help("Filesystem operation failed. Check file permissions and disk space.")
    )]
    Io {
        op: IoOp,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Worker panicked: {0}")]
    #[diagnostic(
        code(probe::worker_panicked),
        help("A worker did not complete its iterations. The measurement is discarded.")
    )]
    WorkerPanicked(String),

    #[error("Channel closed: {0}")]
    #[diagnostic(
        code(probe::channel_closed),
        help("The ping-pong peer stopped before finishing its iterations.")
    )]
    ChannelClosed(String),

    #[error("Runtime error: {0}")]
    #[diagnostic(
        code(probe::runtime_error),
        help("Could not start the async runtime or a worker thread.")
    )]
    Runtime(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(probe::configuration_error),
        help("Worker, iteration, line and run counts must all be non-zero.")
    )]
    Configuration(String),
}

impl ProbeError {
    /// Build an I/O error tagged with the operation and path
    pub fn io(op: IoOp, path: impl AsRef<Path>, source: std::io::Error) -> Self {
        ProbeError::Io {
            op,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Operation for I/O errors, `None` otherwise
    pub fn io_op(&self) -> Option<IoOp> {
        match self {
            ProbeError::Io { op, .. } => Some(*op),
            _ => None,
        }
    }
}

impl<T> From<flume::SendError<T>> for ProbeError {
    fn from(_: flume::SendError<T>) -> Self {
        ProbeError::ChannelClosed("receiver dropped before send completed".into())
    }
}

impl From<flume::RecvError> for ProbeError {
    fn from(err: flume::RecvError) -> Self {
        ProbeError::ChannelClosed(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ProbeError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_panic() {
            ProbeError::WorkerPanicked(err.to_string())
        } else {
            ProbeError::Runtime(err.to_string())
        }
    }
}
