//! Bootstrap and the periodic reload loop.

pub mod bootstrap;
pub mod scheduler;

pub use scheduler::ReloadScheduler;

use thiserror::Error;

use crate::discovery::BuildError;
use crate::source::ParameterError;

/// Everything that can go wrong in one reload tick.
///
/// The scheduler matches on the kind only to pick a log message; every
/// variant is handled the same way: abandon the tick, keep the previous
/// on-disk document, wait for the next tick.
#[derive(Debug, Error)]
pub enum ReloadError {
    /// Fetching the namespace list failed.
    #[error("fetching namespace list: {0}")]
    Fetch(#[from] ParameterError),

    /// Building the scrape document failed.
    #[error("building scrape config: {0}")]
    Build(#[from] BuildError),

    /// Writing the scrape document failed.
    #[error("writing scrape config: {0}")]
    Write(#[from] std::io::Error),
}
