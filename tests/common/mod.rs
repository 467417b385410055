//! Shared fakes and fixtures for integration tests.

// Each test binary uses its own subset of these helpers.
#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

use prometheus_config_reloader::discovery::{BuildError, ScrapeConfigBuilder};
use prometheus_config_reloader::source::{ParameterError, ParameterSource};

/// In-memory parameter source with fixed values.
pub struct FakeParameterSource {
    values: HashMap<String, String>,
    fail: bool,
}

impl FakeParameterSource {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            fail: false,
        }
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }

    /// A source whose every fetch fails at the transport level.
    pub fn failing() -> Self {
        Self {
            values: HashMap::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl ParameterSource for FakeParameterSource {
    async fn get(&self, name: &str) -> Result<String, ParameterError> {
        if self.fail {
            return Err(ParameterError::Transport("injected failure".to_string()));
        }
        self.values
            .get(name)
            .cloned()
            .ok_or_else(|| ParameterError::NotAvailable {
                name: name.to_string(),
                status: 404,
            })
    }
}

/// Builder returning a scripted document and recording every call.
pub struct ScriptedBuilder {
    document: String,
    fail: bool,
    pub calls: Mutex<Vec<Vec<String>>>,
}

impl ScriptedBuilder {
    pub fn returning(document: &str) -> Self {
        Self {
            document: document.to_string(),
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A builder whose every call fails.
    pub fn failing() -> Self {
        Self {
            document: String::new(),
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl ScrapeConfigBuilder for ScriptedBuilder {
    fn build(&self, namespaces: &[String]) -> Result<String, BuildError> {
        self.calls.lock().unwrap().push(namespaces.to_vec());
        if self.fail {
            return Err(BuildError::Discovery("injected failure".to_string()));
        }
        Ok(self.document.clone())
    }
}

/// Start a mock parameter store that answers every request with a fixed
/// status and body. Returns the address it is listening on.
pub async fn start_mock_store(status: u16, body: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            _ => "200 OK",
                        };
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}
