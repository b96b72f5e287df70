//! Build a configuration document from project state.
//!
//! # Responsibilities
//! - Apply the domain inclusion policy (verification enforcement)
//! - Propagate HTTPS and access-control flags into each entry
//! - Copy certificate material verbatim, without validation
//!
//! # Design Decisions
//! - Pure function over in-memory state; cannot fail and performs no I/O
//! - Invalid project state (e.g. a missing id) is a caller precondition,
//!   not handled here

use crate::project::Project;

use super::schema::{ConfigDocument, DomainEntry};

/// Build the configuration document for a project.
///
/// When `verification_enforced` is set, only domains that passed ownership
/// verification are included; otherwise every configured domain appears
/// regardless of verification state.
pub fn build_document(project: &Project, verification_enforced: bool) -> ConfigDocument {
    // access_control is computed once at project level and duplicated into
    // every entry so the daemon never has to look back at the outer document.
    let access_control = !project.public;

    let domains = project
        .domains
        .iter()
        .filter(|domain| !verification_enforced || domain.verified)
        .map(|domain| DomainEntry {
            domain: domain.domain.clone(),
            certificate: domain.certificate.clone(),
            key: domain.key.clone(),
            https_only: project.https_only && domain.https,
            id: project.id,
            access_control,
        })
        .collect();

    ConfigDocument {
        id: project.id,
        domains,
        https_only: project.https_only,
        access_control,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::PagesDomain;
    use serde_json::json;
    use std::path::PathBuf;

    fn project_with_domains(domains: Vec<PagesDomain>) -> Project {
        Project {
            id: 42,
            pages_path: PathBuf::from("/tmp/pages/42"),
            https_only: true,
            public: false,
            domains,
        }
    }

    #[test]
    fn test_verification_enforcement_filters_unverified_domains() {
        let verified = PagesDomain {
            verified: true,
            ..PagesDomain::new("verified.example")
        };
        let unverified = PagesDomain::new("unverified.example");
        let project = project_with_domains(vec![verified, unverified]);

        let enforced = build_document(&project, true);
        assert_eq!(enforced.domains.len(), 1);
        assert_eq!(enforced.domains[0].domain, "verified.example");

        let relaxed = build_document(&project, false);
        assert_eq!(relaxed.domains.len(), 2);
    }

    #[test]
    fn test_per_domain_https_only_is_anded_with_capability() {
        let no_https = PagesDomain {
            verified: true,
            https: false,
            ..PagesDomain::new("plain.example")
        };
        let project = project_with_domains(vec![no_https]);

        let doc = build_document(&project, true);
        assert!(doc.https_only);
        assert!(!doc.domains[0].https_only);
    }

    #[test]
    fn test_full_document_shape() {
        let domain = PagesDomain {
            certificate: Some("CERT".into()),
            key: Some("KEY".into()),
            https: true,
            verified: true,
            ..PagesDomain::new("example.com")
        };
        let project = project_with_domains(vec![domain]);

        let doc = build_document(&project, true);
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 42,
                "https_only": true,
                "access_control": true,
                "domains": [{
                    "domain": "example.com",
                    "certificate": "CERT",
                    "key": "KEY",
                    "https_only": true,
                    "id": 42,
                    "access_control": true,
                }],
            })
        );
    }

    #[test]
    fn test_public_project_disables_access_control() {
        let mut project = project_with_domains(vec![]);
        project.public = true;

        let doc = build_document(&project, true);
        assert!(!doc.access_control);
    }
}
