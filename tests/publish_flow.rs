//! End-to-end publish flow against a scratch pages root.

use std::fs;
use std::path::Path;

use pages_publisher::publish::atomic;
use pages_publisher::{PagesDomain, PagesSettings, Project, Publisher};
use serde_json::json;

fn scratch_settings(root: &Path) -> PagesSettings {
    PagesSettings {
        root: root.to_path_buf(),
        ..PagesSettings::default()
    }
}

fn sample_project(root: &Path) -> Project {
    let pages_path = root.join("42");
    fs::create_dir_all(&pages_path).unwrap();

    Project {
        id: 42,
        pages_path,
        https_only: true,
        public: false,
        domains: vec![PagesDomain {
            certificate: Some("CERT".into()),
            key: Some("KEY".into()),
            https: true,
            verified: true,
            ..PagesDomain::new("example.com")
        }],
    }
}

fn read_sentinel(settings: &PagesSettings) -> Vec<u8> {
    fs::read(settings.sentinel_path()).unwrap()
}

#[test]
fn test_artifact_matches_expected_document() {
    pages_publisher::observability::logging::init();

    let root = tempfile::tempdir().unwrap();
    let publisher = Publisher::new(scratch_settings(root.path()));
    let project = sample_project(root.path());

    assert!(publisher.publish_project(&project).unwrap());

    let written: serde_json::Value =
        serde_json::from_slice(&fs::read(project.config_path()).unwrap()).unwrap();
    assert_eq!(
        written,
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
fn test_republish_is_idempotent_and_skips_sentinel() {
    let root = tempfile::tempdir().unwrap();
    let settings = scratch_settings(root.path());
    let publisher = Publisher::new(settings.clone());
    let project = sample_project(root.path());

    assert!(publisher.publish_project(&project).unwrap());
    let sentinel_after_first = read_sentinel(&settings);

    assert!(!publisher.publish_project(&project).unwrap());
    assert_eq!(read_sentinel(&settings), sentinel_after_first);
}

#[test]
fn test_changed_content_touches_sentinel() {
    let root = tempfile::tempdir().unwrap();
    let settings = scratch_settings(root.path());
    let publisher = Publisher::new(settings.clone());
    let mut project = sample_project(root.path());

    publisher.publish_project(&project).unwrap();
    let sentinel_before = read_sentinel(&settings);

    project.domains.push(PagesDomain {
        verified: true,
        ..PagesDomain::new("second.example")
    });
    assert!(publisher.publish_project(&project).unwrap());
    assert_ne!(read_sentinel(&settings), sentinel_before);
}

#[test]
fn test_verification_enforcement_controls_published_domains() {
    let root = tempfile::tempdir().unwrap();
    let mut project = sample_project(root.path());
    project.domains.push(PagesDomain::new("unverified.example"));

    let enforced = Publisher::new(scratch_settings(root.path()));
    enforced.publish_project(&project).unwrap();
    let written: serde_json::Value =
        serde_json::from_slice(&fs::read(project.config_path()).unwrap()).unwrap();
    assert_eq!(written["domains"].as_array().unwrap().len(), 1);

    let relaxed = Publisher::new(PagesSettings {
        domain_verification_enabled: false,
        ..scratch_settings(root.path())
    });
    relaxed.publish_project(&project).unwrap();
    let written: serde_json::Value =
        serde_json::from_slice(&fs::read(project.config_path()).unwrap()).unwrap();
    assert_eq!(written["domains"].as_array().unwrap().len(), 2);
}

#[test]
fn test_remove_project_deletes_artifact_and_signals() {
    let root = tempfile::tempdir().unwrap();
    let settings = scratch_settings(root.path());
    let publisher = Publisher::new(settings.clone());
    let project = sample_project(root.path());

    publisher.publish_project(&project).unwrap();
    let sentinel_before = read_sentinel(&settings);

    publisher.remove_project(&project).unwrap();
    assert!(!project.config_path().exists());
    assert_ne!(read_sentinel(&settings), sentinel_before);

    // Removing an already-absent artifact still succeeds and still signals.
    let sentinel_before = read_sentinel(&settings);
    publisher.remove_project(&project).unwrap();
    assert_ne!(read_sentinel(&settings), sentinel_before);
}

#[test]
fn test_no_temp_files_survive_a_publish() {
    let root = tempfile::tempdir().unwrap();
    let publisher = Publisher::new(scratch_settings(root.path()));
    let mut project = sample_project(root.path());

    for i in 0..10 {
        project.id = 42 + i;
        publisher.publish_project(&project).unwrap();
    }

    let target = project.config_path();
    let leftovers: Vec<_> = fs::read_dir(&project.pages_path)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| atomic::is_temp_file(&target, path))
        .collect();
    assert!(leftovers.is_empty(), "leftover temp files: {:?}", leftovers);
}
