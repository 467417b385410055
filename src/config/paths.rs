//! Output file paths.

use std::path::{Path, PathBuf};

/// File name of the main Prometheus configuration, written once at startup.
pub const PROMETHEUS_CONFIG_FILE: &str = "prometheus.yaml";

/// File name of the scrape configuration, rewritten every tick.
pub const SCRAPE_CONFIG_FILE: &str = "ecs-services.json";

/// The two output paths, computed once from the base directory and
/// immutable for process lifetime.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Path of the main Prometheus configuration.
    pub prometheus_config: PathBuf,

    /// Path of the periodically rewritten scrape configuration.
    pub scrape_config: PathBuf,
}

impl ConfigPaths {
    /// Compute both output paths under `base_dir`.
    pub fn new(base_dir: &Path) -> Self {
        Self {
            prometheus_config: base_dir.join(PROMETHEUS_CONFIG_FILE),
            scrape_config: base_dir.join(SCRAPE_CONFIG_FILE),
        }
    }
}
