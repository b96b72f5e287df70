//! Durable publication of configuration artifacts.
//!
//! # Data Flow
//! ```text
//! canonical document bytes
//!     → service.rs (per-project target path, sentinel signaling)
//!     → atomic.rs (read-compare, temp write, atomic rename, cleanup)
//!     → <pages dir>/config.json and <pages root>/.update
//! ```
//!
//! # Design Decisions
//! - One synchronous code path; concurrency is resolved entirely by the
//!   atomicity of same-directory rename (last rename wins)
//! - Unchanged content is detected by byte comparison and skipped, which
//!   also suppresses the sentinel touch and spares the daemon a reload
//! - Temp files are removed on every exit path and cleanup never masks the
//!   primary error

pub mod atomic;
pub mod service;
pub mod types;

pub use service::Publisher;
pub use types::PublishError;
