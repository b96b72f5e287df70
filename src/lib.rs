//! Pages configuration publisher.
//!
//! Converts a project's custom-domain and certificate settings into a JSON
//! artifact on disk and signals the serving daemon that something changed.
//!
//! # Architecture Overview
//!
//! ```text
//!  project state ──▶ document::builder ──▶ ConfigDocument
//!                                               │
//!                                               ▼ (canonical JSON bytes)
//!                    publish::service ──▶ publish::atomic ──▶ <pages dir>/config.json
//!                          │
//!                          ▼ (only when content actually changed)
//!                    sentinel touch ──▶ <pages root>/.update
//!                                               │
//!                                               ▼
//!                    serving daemon (external) watches the sentinel mtime
//!                    and reloads config.json files when it moves
//! ```
//!
//! The daemon itself is not part of this crate; only its observation contract
//! matters here. Writes are idempotent (byte-identical content is skipped) and
//! atomic (temp file + same-directory rename), so a reader of a target path
//! sees either the old or the new document, never a partial write.

// Core subsystems
pub mod config;
pub mod document;
pub mod project;
pub mod publish;

// Cross-cutting concerns
pub mod observability;

pub use config::{PagesSettings, PublisherConfig};
pub use document::{build_document, ConfigDocument, DomainEntry};
pub use project::{PagesDomain, Project};
pub use publish::{PublishError, Publisher};
