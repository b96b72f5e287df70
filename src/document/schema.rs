//! Configuration document schema.
//!
//! This is the shape the serving daemon reads back from `config.json`. The
//! daemon tolerates unknown extra fields; we emit exactly the fields below.

use serde::{Deserialize, Serialize};

/// Per-project configuration artifact content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Project identifier.
    pub id: u64,

    /// Custom domains included under the current inclusion policy.
    pub domains: Vec<DomainEntry>,

    /// Project-wide HTTPS-only redirect flag.
    pub https_only: bool,

    /// Whether the daemon must enforce access control for this project.
    pub access_control: bool,
}

/// One custom domain inside a [`ConfigDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEntry {
    /// Fully-qualified domain name.
    pub domain: String,

    /// PEM certificate chain; `null` when the domain is not TLS-enabled.
    pub certificate: Option<String>,

    /// PEM private key; `null` when the domain is not TLS-enabled.
    pub key: Option<String>,

    /// Project flag ANDed with the domain's own HTTPS capability.
    pub https_only: bool,

    /// Project identifier, duplicated so entries are self-describing.
    pub id: u64,

    /// Access-control flag, duplicated so entries are self-describing.
    pub access_control: bool,
}

impl ConfigDocument {
    /// Serialize to the canonical byte encoding written to disk.
    ///
    /// Serialization of this shape cannot fail for any constructible value;
    /// the `Result` only carries serde_json's error type through to the
    /// publish error taxonomy.
    pub fn to_canonical_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
