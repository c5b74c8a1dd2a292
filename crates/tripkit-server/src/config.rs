//! Server configuration

use crate::error::{ServerError, ServerResult};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tripkit_core::LlmServiceConfig;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address, e.g. "127.0.0.1:8000"
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// OpenWeather API key, shared by the weather and air-quality clients
    pub openweather_api_key: String,

    /// LLM service configuration for the packing pipeline
    #[serde(default)]
    pub llm: LlmServiceConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// `OPENWEATHER_API_KEY` is required; everything else has defaults.
    /// `.env` loading is the binary's responsibility, not this function's.
    pub fn load() -> ServerResult<Self> {
        let openweather_api_key = std::env::var("OPENWEATHER_API_KEY")
            .map_err(|_| ServerError::Config("Missing OPENWEATHER_API_KEY".to_string()))?;

        Ok(Self {
            bind_addr: std::env::var("TRIPKIT_BIND_ADDR").unwrap_or_else(|_| default_bind_addr()),
            openweather_api_key,
            llm: LlmServiceConfig::default(),
        })
    }

    /// Parsed socket address to bind to
    pub fn socket_addr(&self) -> ServerResult<SocketAddr> {
        self.bind_addr
            .parse()
            .map_err(|e| ServerError::Config(format!("Invalid bind address: {e}")))
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:8000".to_string()
}
