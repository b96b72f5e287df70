//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the logging subsystem for embedding binaries and tests
//! - Configure log level at runtime via environment

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Level comes from `RUST_LOG` when set, defaulting to debug for this crate.
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pages_publisher=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
