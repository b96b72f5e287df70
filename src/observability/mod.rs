//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate; subsystems emit events at
//!   their call sites and this module only owns subscriber setup
//! - Log level configurable via `RUST_LOG`, with a crate-scoped default

pub mod logging;
