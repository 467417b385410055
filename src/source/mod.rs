//! Parameter source seam.
//!
//! The daemon never talks to a concrete cloud provider directly; it only
//! depends on the capability "fetch a string value by name". The binary
//! wires in [`HttpParameterSource`]; tests wire in fakes.

pub mod http;

pub use http::HttpParameterSource;

use async_trait::async_trait;
use thiserror::Error;

/// Well-known parameter holding the main Prometheus configuration.
pub const PROMETHEUS_CONFIG_PARAMETER: &str = "ECS-Prometheus-Configuration";

/// Well-known parameter holding the comma-separated namespace list.
pub const DISCOVERY_NAMESPACES_PARAMETER: &str = "ECS-ServiceDiscovery-Namespaces";

/// Errors that can occur fetching a parameter.
#[derive(Debug, Error)]
pub enum ParameterError {
    /// Transport-level failure reaching the parameter store.
    #[error("parameter store request failed: {0}")]
    Transport(String),

    /// The store answered, but not with the parameter.
    #[error("parameter {name} not available: status {status}")]
    NotAvailable { name: String, status: u16 },
}

/// Capability to fetch a parameter value by name.
#[async_trait]
pub trait ParameterSource: Send + Sync {
    /// Fetch the current value of the named parameter.
    async fn get(&self, name: &str) -> Result<String, ParameterError>;
}
