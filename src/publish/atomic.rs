//! Atomic, idempotent file updates.
//!
//! # Responsibilities
//! - Skip writes when target content is already byte-identical
//! - Write through a colocated temp file and rename it into place
//! - Remove the temp file on every exit path
//! - Treat deletion of a missing target as success
//!
//! # Design Decisions
//! - The temp file lives in the target's directory so the rename stays on
//!   one filesystem and is atomic: readers see the old or the new content,
//!   never a partial write
//! - Temp names carry a random hex suffix so concurrent publishers against
//!   the same target cannot collide
//! - Read failures (including a missing target) mean "no existing content";
//!   the publish proceeds rather than failing

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::RngCore;

use super::types::PublishError;

/// Random bytes in a temp-file suffix (hex-encoded to twice this length).
const TEMP_SUFFIX_BYTES: usize = 16;

/// Publish `payload` to `target`, or remove `target` when `payload` is `None`.
///
/// Returns `Ok(true)` when the filesystem changed, `Ok(false)` when the
/// target already held exactly `payload` and nothing was written. Deletion
/// always reports `Ok(true)`; repeated deletes are cheap and safe.
pub fn publish(target: &Path, payload: Option<&[u8]>) -> Result<bool, PublishError> {
    match payload {
        Some(bytes) => write(target, bytes),
        None => remove(target).map(|_| true),
    }
}

/// Lowercase hex string of `len` random bytes.
pub fn random_hex(len: usize) -> String {
    let mut buf = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut buf);
    buf.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Check whether `path` matches the temp naming pattern for `target`
/// (`<target>.<hex suffix>`). Exposed for tests and operational tooling.
pub fn is_temp_file(target: &Path, path: &Path) -> bool {
    let (Some(target_name), Some(name)) = (
        target.file_name().and_then(|n| n.to_str()),
        path.file_name().and_then(|n| n.to_str()),
    ) else {
        return false;
    };

    name.strip_prefix(target_name)
        .and_then(|rest| rest.strip_prefix('.'))
        .is_some_and(|suffix| !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_hexdigit()))
}

fn write(target: &Path, payload: &[u8]) -> Result<bool, PublishError> {
    if read_existing(target).as_deref() == Some(payload) {
        tracing::debug!(path = %target.display(), "content unchanged, skipping write");
        return Ok(false);
    }

    let temp = TempFile::create(target, payload)?;
    temp.persist()?;

    tracing::debug!(path = %target.display(), bytes = payload.len(), "published");
    Ok(true)
}

fn remove(target: &Path) -> Result<(), PublishError> {
    match fs::remove_file(target) {
        Ok(()) => {
            tracing::debug!(path = %target.display(), "removed");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(PublishError::Remove {
            path: target.to_path_buf(),
            source,
        }),
    }
}

/// Current target content, with any read failure collapsed to `None`.
fn read_existing(target: &Path) -> Option<Vec<u8>> {
    match fs::read(target) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::debug!(path = %target.display(), error = %e, "treating unreadable target as empty");
            }
            None
        }
    }
}

/// A freshly-written temp file that removes itself on drop.
///
/// Cleanup runs whether the publish succeeds or fails partway; after a
/// successful rename the path no longer exists and the removal is a no-op.
struct TempFile {
    path: PathBuf,
    target: PathBuf,
}

impl TempFile {
    fn create(target: &Path, payload: &[u8]) -> Result<Self, PublishError> {
        let mut name = target.as_os_str().to_os_string();
        name.push(format!(".{}", random_hex(TEMP_SUFFIX_BYTES)));

        // Construct the guard before writing so a partial write is still
        // cleaned up.
        let temp = Self {
            path: PathBuf::from(name),
            target: target.to_path_buf(),
        };

        fs::write(&temp.path, payload).map_err(|source| PublishError::Write {
            path: temp.path.clone(),
            source,
        })?;

        Ok(temp)
    }

    fn persist(self) -> Result<(), PublishError> {
        fs::rename(&self.path, &self.target).map_err(|source| PublishError::Rename {
            path: self.target.clone(),
            temp: self.path.clone(),
            source,
        })
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!(temp = %self.path.display(), error = %e, "failed to remove temporary file");
            }
        }
    }
}
