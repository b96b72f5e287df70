//! Deployment configuration for the publisher.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → PublisherConfig (validated, immutable)
//!     → passed explicitly into Publisher::new
//! ```
//!
//! # Design Decisions
//! - Settings are passed into the builder/publisher at construction, never
//!   read from ambient globals
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{PagesSettings, PublisherConfig};
