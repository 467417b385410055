//! One-shot startup materialization.
//!
//! # Responsibilities
//! - Fetch and write the main Prometheus configuration
//! - Write an empty scrape-config placeholder
//!
//! # Design Decisions
//! - Fail-open: every failure is logged and the process continues; a
//!   scraper reading stale or empty config beats a crashing sidecar
//! - On fetch failure the main config file is left untouched rather than
//!   overwritten with a fabricated fallback
//! - The placeholder is written regardless, so the scraper always finds a
//!   valid (possibly empty) discovery file

use crate::config::ConfigPaths;
use crate::discovery::EMPTY_SCRAPE_CONFIG;
use crate::source::{ParameterSource, PROMETHEUS_CONFIG_PARAMETER};
use crate::writer::write_config;

/// Materialize the initial files. Runs once, before the scheduler starts.
pub async fn run(source: &dyn ParameterSource, paths: &ConfigPaths) {
    match source.get(PROMETHEUS_CONFIG_PARAMETER).await {
        Ok(document) => {
            if let Err(err) = write_config(&paths.prometheus_config, document.as_bytes()).await {
                tracing::error!(
                    path = %paths.prometheus_config.display(),
                    error = %err,
                    "Failed to write main Prometheus configuration"
                );
            }
        }
        Err(err) => {
            tracing::error!(
                parameter = PROMETHEUS_CONFIG_PARAMETER,
                error = %err,
                "Failed to fetch main Prometheus configuration"
            );
        }
    }

    if let Err(err) = write_config(&paths.scrape_config, EMPTY_SCRAPE_CONFIG.as_bytes()).await {
        tracing::error!(
            path = %paths.scrape_config.display(),
            error = %err,
            "Failed to write scrape configuration placeholder"
        );
    }
}
