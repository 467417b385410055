//! Prometheus Configuration Reloader Library

pub mod config;
pub mod discovery;
pub mod lifecycle;
pub mod observability;
pub mod reload;
pub mod source;
pub mod writer;

pub use config::{ConfigPaths, Settings};
pub use lifecycle::Shutdown;
pub use reload::ReloadScheduler;
