//! Shared application state

use crate::clients::{AqiClient, WeatherClient};
use crate::config::ServerConfig;
use crate::error::ServerResult;
use std::sync::Arc;
use tripkit_core::{BuiltinCorpus, Embedder, Generator, OllamaClient, PackingService};

/// Shared application state, cloned per request via `Arc`.
pub struct AppState {
    pub config: ServerConfig,
    pub weather: WeatherClient,
    pub aqi: AqiClient,
    pub packing: Arc<PackingService>,
}

impl AppState {
    /// Wire up clients and the packing pipeline from configuration.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let weather = WeatherClient::new(&config.openweather_api_key)?;
        let aqi = AqiClient::new(&config.openweather_api_key)?;

        // One Ollama client serves both the embedder and generator seams.
        let llm = Arc::new(OllamaClient::new(config.llm.clone())?);
        let embedder: Arc<dyn Embedder> = llm.clone();
        let generator: Arc<dyn Generator> = llm;
        let packing = Arc::new(PackingService::new(embedder, generator, &BuiltinCorpus));

        Ok(Self {
            config,
            weather,
            aqi,
            packing,
        })
    }
}
