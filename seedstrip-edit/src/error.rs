//! Error types for seedstrip-edit.
//!
//! Every variant here is recovered per file: the rewriter turns it into a
//! `Failed` outcome and moves on to the next target.

use camino::Utf8PathBuf;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StripError {
    /// The target could not be read (missing, unreadable, not UTF-8).
    #[error("read {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    /// The rewritten text could not be written back.
    #[error("write {path}: {source}")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StripError {
    pub fn path(&self) -> &Utf8PathBuf {
        match self {
            StripError::Read { path, .. } | StripError::Write { path, .. } => path,
        }
    }

    /// Short reason string reported in a `Failed` outcome.
    pub fn reason(&self) -> String {
        match self {
            StripError::Read { source, .. } => io_reason(source),
            StripError::Write { source, .. } => format!("write failed: {}", io_reason(source)),
        }
    }
}

fn io_reason(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => "file not found".to_string(),
        io::ErrorKind::PermissionDenied => "permission denied".to_string(),
        io::ErrorKind::InvalidData => "invalid UTF-8".to_string(),
        _ => err.to_string(),
    }
}

/// Result type alias using StripError.
pub type StripResult<T> = Result<T, StripError>;
