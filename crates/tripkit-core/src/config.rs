//! Configuration management

use serde::{Deserialize, Serialize};

/// LLM service configuration for external inference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmServiceConfig {
    /// Base URL of the model runner (Ollama-compatible)
    pub url: String,

    /// Model name for text generation
    #[serde(default = "default_generation_model")]
    pub model: String,

    /// Model name for embeddings
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,

    /// Embedding dimensions (model-determined)
    #[serde(default)]
    pub embedding_dimensions: Option<usize>,

    /// API key (optional, for authenticated deployments)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds. Bounds the generation call so a hung
    /// backend cannot stall the request indefinitely.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for LlmServiceConfig {
    fn default() -> Self {
        Self {
            url: std::env::var("TRIPKIT_LLM_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            model: default_generation_model(),
            embedding_model: default_embedding_model(),
            embedding_dimensions: std::env::var("TRIPKIT_EMBEDDING_DIMS")
                .ok()
                .and_then(|s| s.parse().ok()),
            api_key: std::env::var("TRIPKIT_LLM_API_KEY").ok(),
            timeout_secs: std::env::var("TRIPKIT_LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_timeout),
        }
    }
}

fn default_generation_model() -> String {
    std::env::var("TRIPKIT_LLM_MODEL").unwrap_or_else(|_| "mistral:latest".to_string())
}

fn default_embedding_model() -> String {
    std::env::var("TRIPKIT_EMBEDDING_MODEL").unwrap_or_else(|_| "all-minilm".to_string())
}

fn default_timeout() -> u64 {
    15
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let cfg: LlmServiceConfig =
            serde_json::from_str(r#"{"url": "http://llm.internal:11434"}"#).unwrap();
        assert_eq!(cfg.url, "http://llm.internal:11434");
        assert_eq!(cfg.timeout_secs, 15);
        assert!(cfg.api_key.is_none());
    }
}
