//! Scrape configuration building.
//!
//! # Responsibilities
//! - Split the raw namespace-list parameter into an ordered sequence
//! - Turn that sequence into the scrape configuration document
//!
//! # Design Decisions
//! - Empty entries from stray commas are passed through unfiltered; the
//!   upstream parameter has always been consumed that way and filtering
//!   here would silently change what the builder sees
//! - Building is pure data formatting, so the trait is synchronous

pub mod file_sd;

pub use file_sd::FileSdBuilder;

use thiserror::Error;

/// Placeholder document written at bootstrap, before the first reload.
pub const EMPTY_SCRAPE_CONFIG: &str = "[]";

/// Errors that can occur building a scrape configuration document.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The document could not be serialized.
    #[error("failed to serialize scrape config: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The discovery backend could not produce targets.
    #[error("discovery failed: {0}")]
    Discovery(String),
}

/// Capability to turn an ordered namespace list into a scrape document.
pub trait ScrapeConfigBuilder: Send + Sync {
    /// Build the scrape configuration document for `namespaces`.
    fn build(&self, namespaces: &[String]) -> Result<String, BuildError>;
}

/// Split the raw namespace-list parameter value on commas.
///
/// Order is preserved and empty entries are kept.
pub fn split_namespaces(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}
