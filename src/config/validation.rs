//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate that paths are usable before any publish is attempted
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: PublisherConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::PublisherConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The pages root is empty.
    MissingPagesRoot,

    /// The pages root is not an absolute path.
    RelativePagesRoot(String),

    /// The sentinel override is empty.
    EmptySentinelOverride,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingPagesRoot => write!(f, "pages.root must be set"),
            ValidationError::RelativePagesRoot(path) => {
                write!(f, "pages.root must be absolute, got {:?}", path)
            }
            ValidationError::EmptySentinelOverride => {
                write!(f, "pages.sentinel must not be empty when set")
            }
        }
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &PublisherConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let pages = &config.pages;

    if pages.root.as_os_str().is_empty() {
        errors.push(ValidationError::MissingPagesRoot);
    } else if !pages.root.is_absolute() {
        errors.push(ValidationError::RelativePagesRoot(
            pages.root.display().to_string(),
        ));
    }

    if let Some(sentinel) = &pages.sentinel {
        if sentinel.as_os_str().is_empty() {
            errors.push(ValidationError::EmptySentinelOverride);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
