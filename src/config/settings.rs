//! Environment-driven settings.
//!
//! # Responsibilities
//! - Read `CONFIG_FILE_DIR`, `CONFIG_RELOAD_FREQUENCY` and
//!   `PARAMETER_STORE_ENDPOINT` once at startup
//! - Apply defaults for the optional variables
//! - Fail fast on values that would misconfigure the reload timer
//!
//! # Design Decisions
//! - A non-numeric or zero reload frequency is a startup error, not a
//!   zero-length timer
//! - The parameter store endpoint has no sensible default and is required

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Base directory for both output files.
pub const CONFIG_FILE_DIR_VAR: &str = "CONFIG_FILE_DIR";

/// Reload interval in whole seconds.
pub const RELOAD_FREQUENCY_VAR: &str = "CONFIG_RELOAD_FREQUENCY";

/// Base URL of the HTTP parameter store.
pub const PARAMETER_ENDPOINT_VAR: &str = "PARAMETER_STORE_ENDPOINT";

const DEFAULT_CONFIG_FILE_DIR: &str = "/etc/config/";
const DEFAULT_RELOAD_FREQUENCY_SECS: u64 = 30;

/// Errors raised while reading settings from the environment.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The reload frequency did not parse as a whole number of seconds.
    #[error("CONFIG_RELOAD_FREQUENCY must be a whole number of seconds, got {0:?}")]
    InvalidFrequency(String),

    /// A zero-second interval would spin the reload loop.
    #[error("CONFIG_RELOAD_FREQUENCY must be greater than zero")]
    ZeroFrequency,

    /// The parameter store endpoint was not provided.
    #[error("PARAMETER_STORE_ENDPOINT is not set")]
    MissingEndpoint,

    /// The parameter store endpoint was not a valid URL.
    #[error("PARAMETER_STORE_ENDPOINT is not a valid URL: {0}")]
    InvalidEndpoint(#[source] url::ParseError),
}

/// Immutable process settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory both output files are written under.
    pub config_file_dir: PathBuf,

    /// Interval between reload ticks.
    pub reload_frequency: Duration,

    /// Base URL of the parameter store.
    pub parameter_endpoint: Url,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_file_dir = lookup(CONFIG_FILE_DIR_VAR)
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE_DIR.to_string());

        let reload_secs = match lookup(RELOAD_FREQUENCY_VAR) {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| SettingsError::InvalidFrequency(raw.clone()))?;
                if secs == 0 {
                    return Err(SettingsError::ZeroFrequency);
                }
                secs
            }
            None => DEFAULT_RELOAD_FREQUENCY_SECS,
        };

        let endpoint = lookup(PARAMETER_ENDPOINT_VAR).ok_or(SettingsError::MissingEndpoint)?;
        let parameter_endpoint = Url::parse(&endpoint).map_err(SettingsError::InvalidEndpoint)?;

        Ok(Self {
            config_file_dir: PathBuf::from(config_file_dir),
            reload_frequency: Duration::from_secs(reload_secs),
            parameter_endpoint,
        })
    }
}
