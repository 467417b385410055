//! HTTP-backed parameter source.
//!
//! Parameters live behind a plain HTTP endpoint: `GET <endpoint>/<name>`
//! returns the value as the response body. Any non-success status means
//! the parameter is not available.

use async_trait::async_trait;
use url::Url;

use crate::source::{ParameterError, ParameterSource};

/// Parameter source backed by an HTTP endpoint.
pub struct HttpParameterSource {
    endpoint: Url,
    client: reqwest::Client,
}

impl HttpParameterSource {
    /// Create a source reading from `endpoint`.
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    fn parameter_url(&self, name: &str) -> Result<Url, ParameterError> {
        // Url::join drops the last path segment when the base has no
        // trailing slash, so build the path by hand.
        let joined = format!("{}/{}", self.endpoint.as_str().trim_end_matches('/'), name);
        Url::parse(&joined).map_err(|e| ParameterError::Transport(e.to_string()))
    }
}

#[async_trait]
impl ParameterSource for HttpParameterSource {
    async fn get(&self, name: &str) -> Result<String, ParameterError> {
        let url = self.parameter_url(name)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ParameterError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ParameterError::NotAvailable {
                name: name.to_string(),
                status: response.status().as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| ParameterError::Transport(e.to_string()))
    }
}
