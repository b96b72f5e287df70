//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Filename of the shared sentinel file under the pages root.
pub const SENTINEL_FILE_NAME: &str = ".update";

/// Root configuration for the publisher.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PublisherConfig {
    /// Pages storage and signaling settings.
    pub pages: PagesSettings,
}

/// Pages deployment settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PagesSettings {
    /// Root directory of the pages storage shared with the daemon.
    pub root: PathBuf,

    /// Override for the sentinel path; defaults to `<root>/.update`.
    pub sentinel: Option<PathBuf>,

    /// When set, only domains that passed ownership verification are
    /// published.
    pub domain_verification_enabled: bool,
}

impl Default for PagesSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            sentinel: None,
            domain_verification_enabled: true,
        }
    }
}

impl PagesSettings {
    /// The sentinel file whose mtime the daemon watches.
    pub fn sentinel_path(&self) -> PathBuf {
        match &self.sentinel {
            Some(path) => path.clone(),
            None => self.root.join(SENTINEL_FILE_NAME),
        }
    }
}
