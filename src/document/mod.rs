//! Configuration document construction.
//!
//! # Data Flow
//! ```text
//! Project (in-memory state)
//!     → builder.rs (domain inclusion policy, flag propagation)
//!     → ConfigDocument (schema.rs)
//!     → canonical JSON bytes (consumed by publish::)
//! ```
//!
//! # Design Decisions
//! - Building is a pure, total function; all I/O lives in publish::
//! - Field order is fixed by struct declaration so identical logical content
//!   always yields identical bytes (the idempotence check compares bytes)
//! - Domain entries are self-describing: the daemon can iterate entries
//!   without cross-referencing the outer document

pub mod builder;
pub mod schema;

pub use builder::build_document;
pub use schema::{ConfigDocument, DomainEntry};
