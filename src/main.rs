//! Prometheus Configuration Reloader
//!
//! A sidecar daemon that keeps local Prometheus configuration files
//! synchronized with a remote parameter store on a fixed polling interval.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌──────────────────────────────────────────────────┐
//!                 │               CONFIG RELOADER                    │
//!                 │                                                  │
//!   Parameter     │  ┌─────────┐    ┌───────────┐    ┌───────────┐  │
//!   Store ────────┼─▶│ source  │───▶│ discovery │───▶│  writer   │──┼─▶ prometheus.yaml
//!                 │  │ (fetch) │    │  (build)  │    │ (atomic)  │  │    ecs-services.json
//!                 │  └─────────┘    └───────────┘    └───────────┘  │
//!                 │        ▲                              ▲         │
//!                 │        │         ┌───────────┐        │         │
//!                 │        └─────────│  reload   │────────┘         │
//!                 │                  │ scheduler │                  │
//!                 │                  └─────┬─────┘                  │
//!                 │                        │                        │
//!                 │  ┌─────────────────────┴───────────────────┐    │
//!                 │  │          Cross-Cutting Concerns         │    │
//!                 │  │  ┌────────┐ ┌───────────┐ ┌──────────┐  │    │
//!                 │  │  │ config │ │ lifecycle │ │observa-  │  │    │
//!                 │  │  │ (env)  │ │ (signals) │ │ bility   │  │    │
//!                 │  │  └────────┘ └───────────┘ └──────────┘  │    │
//!                 │  └─────────────────────────────────────────┘    │
//!                 └──────────────────────────────────────────────────┘
//! ```
//!
//! Bootstrap runs once before the scheduler starts, so the colocated
//! scraper always finds valid files on disk. The scheduler then rewrites
//! the scrape configuration every tick until a shutdown signal arrives.

use std::sync::Arc;

use prometheus_config_reloader::config::{ConfigPaths, Settings};
use prometheus_config_reloader::discovery::FileSdBuilder;
use prometheus_config_reloader::lifecycle::{signals, Shutdown};
use prometheus_config_reloader::observability::logging::init_logging;
use prometheus_config_reloader::reload::{bootstrap, ReloadScheduler};
use prometheus_config_reloader::source::HttpParameterSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    tracing::info!("prometheus-config-reloader v0.1.0 starting");

    let settings = Settings::from_env()?;

    tracing::info!(
        config_file_dir = %settings.config_file_dir.display(),
        reload_frequency_secs = settings.reload_frequency.as_secs(),
        parameter_endpoint = %settings.parameter_endpoint,
        "Configuration loaded"
    );

    let paths = ConfigPaths::new(&settings.config_file_dir);
    let source = Arc::new(HttpParameterSource::new(settings.parameter_endpoint.clone()));
    let builder = Arc::new(FileSdBuilder);

    // Bootstrap is fail-open: errors are logged inside and the process
    // keeps going with whatever files made it to disk.
    bootstrap::run(source.as_ref(), &paths).await;
    tracing::info!("Loaded initial configuration files");

    let scheduler = ReloadScheduler::new(
        source,
        builder,
        paths.scrape_config.clone(),
        settings.reload_frequency,
    );

    let shutdown = Shutdown::new();
    let scheduler_task = tokio::spawn(scheduler.run(shutdown.subscribe()));
    tracing::info!("Periodic reloads under progress");

    signals::wait_for_signal().await?;
    shutdown.trigger();
    scheduler_task.await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
