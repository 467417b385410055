//! Periodic scrape-config reloads.
//!
//! # Responsibilities
//! - Drive one reload per timer tick for the lifetime of the process
//! - Log each outcome and carry on; no retries, no backoff
//!
//! # Design Decisions
//! - The reload is awaited inside the loop, so reloads never overlap
//! - A tick that fires while a reload is still in flight is skipped, not
//!   queued (`MissedTickBehavior::Skip`)
//! - The shutdown signal is observed between ticks, never mid-reload

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::{self, MissedTickBehavior};

use crate::discovery::{split_namespaces, ScrapeConfigBuilder};
use crate::reload::ReloadError;
use crate::source::{ParameterSource, DISCOVERY_NAMESPACES_PARAMETER};
use crate::writer::write_config;

/// Background task that rewrites the scrape configuration on a fixed
/// interval.
pub struct ReloadScheduler {
    source: Arc<dyn ParameterSource>,
    builder: Arc<dyn ScrapeConfigBuilder>,
    scrape_config_path: PathBuf,
    interval: Duration,
}

impl ReloadScheduler {
    /// Create a scheduler. Nothing runs until [`run`](Self::run).
    pub fn new(
        source: Arc<dyn ParameterSource>,
        builder: Arc<dyn ScrapeConfigBuilder>,
        scrape_config_path: PathBuf,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            builder,
            scrape_config_path,
            interval,
        }
    }

    /// Run until the shutdown signal arrives.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            interval_secs = self.interval.as_secs(),
            path = %self.scrape_config_path.display(),
            "Reload scheduler starting"
        );

        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // The first tick completes immediately; bootstrap already wrote the
        // initial files, so the first real reload waits one full interval.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match self.reload().await {
                        Ok(namespaces) => {
                            tracing::info!(namespaces, "Scrape configuration reloaded");
                        }
                        Err(err @ ReloadError::Fetch(_)) => {
                            tracing::error!(error = %err, "Reload abandoned: namespace fetch failed");
                        }
                        Err(err @ ReloadError::Build(_)) => {
                            tracing::error!(error = %err, "Reload abandoned: scrape config build failed");
                        }
                        Err(err @ ReloadError::Write(_)) => {
                            tracing::error!(error = %err, "Reload abandoned: scrape config write failed");
                        }
                    }
                }
                _ = shutdown.recv() => {
                    tracing::info!("Reload scheduler received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    /// Perform one reload: fetch the namespace list, build the scrape
    /// document, write it out. Returns the number of namespaces seen.
    ///
    /// On error the previous on-disk document is untouched.
    pub async fn reload(&self) -> Result<usize, ReloadError> {
        let raw = self.source.get(DISCOVERY_NAMESPACES_PARAMETER).await?;
        let namespaces = split_namespaces(&raw);
        let document = self.builder.build(&namespaces)?;
        write_config(&self.scrape_config_path, document.as_bytes()).await?;
        Ok(namespaces.len())
    }
}
