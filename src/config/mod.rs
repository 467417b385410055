//! Process configuration.
//!
//! Everything the daemon is told from outside comes in through environment
//! variables, read once at startup and immutable afterwards.

pub mod paths;
pub mod settings;

pub use paths::ConfigPaths;
pub use settings::{Settings, SettingsError};
