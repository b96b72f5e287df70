//! Project (tenant) state as seen by the publisher.
//!
//! These types are the in-memory snapshot handed to the config builder. They
//! carry exactly what the document needs; ownership checks and persistence
//! belong to the embedding application.

use std::path::PathBuf;

/// Filename of the per-project configuration artifact.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A project whose pages configuration is being published.
#[derive(Debug, Clone)]
pub struct Project {
    /// Stable numeric project identifier.
    pub id: u64,

    /// The project's dedicated pages storage directory.
    pub pages_path: PathBuf,

    /// Project-wide HTTPS-only redirect flag.
    pub https_only: bool,

    /// Whether the project's pages are publicly accessible.
    pub public: bool,

    /// Custom domains configured for the project.
    pub domains: Vec<PagesDomain>,
}

impl Project {
    /// Path of this project's configuration artifact.
    pub fn config_path(&self) -> PathBuf {
        self.pages_path.join(CONFIG_FILE_NAME)
    }
}

/// A custom domain attached to a project.
#[derive(Debug, Clone)]
pub struct PagesDomain {
    /// Fully-qualified domain name.
    pub domain: String,

    /// PEM certificate chain, if the domain is TLS-enabled.
    pub certificate: Option<String>,

    /// PEM private key, if the domain is TLS-enabled.
    pub key: Option<String>,

    /// Whether the domain is capable of serving HTTPS.
    pub https: bool,

    /// Whether ownership of the domain has been verified.
    pub verified: bool,
}

impl PagesDomain {
    /// Plain HTTP domain without certificate material.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            certificate: None,
            key: None,
            https: false,
            verified: false,
        }
    }
}

