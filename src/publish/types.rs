//! Publish error definitions.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while publishing a configuration artifact.
///
/// Failures to read the current target content are not represented here:
/// an unreadable target is treated as "no existing content" and the publish
/// proceeds. Temp-file cleanup failures are logged and suppressed so they
/// never mask the primary error.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The configuration document could not be serialized.
    #[error("failed to encode configuration document: {0}")]
    Encode(#[from] serde_json::Error),

    /// The temporary file could not be created or written.
    #[error("failed to write temporary file {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },

    /// The temporary file could not be moved onto the target.
    #[error("failed to move {temp:?} into place at {path:?}: {source}")]
    Rename {
        path: PathBuf,
        temp: PathBuf,
        source: io::Error,
    },

    /// The target could not be removed (deletion requests only; a missing
    /// target counts as success).
    #[error("failed to remove {path:?}: {source}")]
    Remove { path: PathBuf, source: io::Error },
}
