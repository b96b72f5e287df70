//! Publish orchestration.
//!
//! Ties the pieces together the way a request handler would use them: build
//! the document for a project, publish it to the project's `config.json`,
//! and touch the shared sentinel when (and only when) content changed.

use crate::config::PagesSettings;
use crate::document::build_document;
use crate::project::Project;

use super::atomic::{self, random_hex};
use super::types::PublishError;

/// Random bytes in a sentinel payload. Any payload works; only the mtime
/// change matters to the daemon.
const SENTINEL_PAYLOAD_BYTES: usize = 64;

/// Publishes per-project configuration artifacts and signals the daemon.
#[derive(Debug, Clone)]
pub struct Publisher {
    settings: PagesSettings,
}

impl Publisher {
    /// Create a publisher bound to deployment settings.
    pub fn new(settings: PagesSettings) -> Self {
        Self { settings }
    }

    /// The settings this publisher was constructed with.
    pub fn settings(&self) -> &PagesSettings {
        &self.settings
    }

    /// Build and publish the configuration artifact for `project`.
    ///
    /// Returns whether the artifact changed on disk. The sentinel is touched
    /// only after a successful, content-changing write, so an unchanged
    /// document never triggers a daemon reload.
    pub fn publish_project(&self, project: &Project) -> Result<bool, PublishError> {
        let document = build_document(project, self.settings.domain_verification_enabled);
        let bytes = document.to_canonical_bytes()?;

        let changed = atomic::publish(&project.config_path(), Some(&bytes))?;
        if changed {
            self.touch_sentinel()?;
            tracing::info!(
                project = project.id,
                domains = document.domains.len(),
                "published pages configuration"
            );
        } else {
            tracing::debug!(project = project.id, "pages configuration unchanged");
        }

        Ok(changed)
    }

    /// Remove `project`'s configuration artifact and signal the daemon.
    ///
    /// A missing artifact is not an error; removal always signals, matching
    /// the write path's contract that deletion reports a change.
    pub fn remove_project(&self, project: &Project) -> Result<(), PublishError> {
        atomic::publish(&project.config_path(), None)?;
        self.touch_sentinel()?;
        tracing::info!(project = project.id, "removed pages configuration");
        Ok(())
    }

    /// Move the sentinel's mtime by atomically writing a fresh random
    /// payload, reusing the artifact write path so the touch inherits the
    /// same crash-safety.
    fn touch_sentinel(&self) -> Result<(), PublishError> {
        let payload = random_hex(SENTINEL_PAYLOAD_BYTES);
        atomic::publish(&self.settings.sentinel_path(), Some(payload.as_bytes()))?;
        Ok(())
    }
}
