//! Structured logging setup.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Honor `RUST_LOG` when set
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - Defaults to info-level output for this crate only

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prometheus_config_reloader=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
