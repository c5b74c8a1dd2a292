//! HTTP client for an Ollama-compatible model runner
//!
//! One client serves both roles: embeddings (`/api/embed`) and single-turn
//! text generation (`/api/chat`). Failure modes are mapped to distinct error
//! variants so the orchestrator can tell a dead backend from a warming one.

use crate::config::LlmServiceConfig;
use crate::error::{Result, TripKitError};
use crate::llm::{Embedder, Generator};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fallback embedding width when the deployment does not configure one.
/// Matches sentence-transformer MiniLM-class models.
const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;

/// Ollama-compatible client for embeddings and chat generation
pub struct OllamaClient {
    http_client: reqwest::Client,
    config: LlmServiceConfig,
    embedding_dimensions: usize,
}

impl OllamaClient {
    /// Create new client from configuration
    pub fn new(config: LlmServiceConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(TripKitError::Http)?;

        let embedding_dimensions = config
            .embedding_dimensions
            .unwrap_or(DEFAULT_EMBEDDING_DIMENSIONS);

        Ok(Self {
            http_client,
            config,
            embedding_dimensions,
        })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(LlmServiceConfig::default())
    }

    fn authorized(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.config.api_key.as_deref() {
            Some(key) => req.header("Authorization", format!("Bearer {key}")),
            None => req,
        }
    }

    /// Map a transport-level failure on the generation path.
    fn generation_transport_error(&self, e: reqwest::Error) -> TripKitError {
        if e.is_timeout() {
            TripKitError::Timeout {
                seconds: self.config.timeout_secs,
            }
        } else if e.is_connect() {
            TripKitError::ServiceUnreachable(e.to_string())
        } else {
            TripKitError::Http(e)
        }
    }

    /// Map a non-success HTTP status from the model runner.
    fn status_error(&self, status: StatusCode, body: String, model: &str) -> TripKitError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                TripKitError::AuthenticationFailed(format!("HTTP {status}: {body}"))
            }
            // Ollama answers 404 for a model that was never pulled.
            StatusCode::NOT_FOUND => TripKitError::ModelUnavailable(format!(
                "model '{model}' not found on {} (HTTP {status}): {body}",
                self.config.url
            )),
            StatusCode::SERVICE_UNAVAILABLE => {
                TripKitError::TransientUnavailable(format!("HTTP {status}: {body}"))
            }
            _ => TripKitError::Generation(format!("LLM service error (HTTP {status}): {body}")),
        }
    }
}

#[async_trait]
impl Embedder for OllamaClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let results = self.embed_batch(&[text.to_string()]).await?;
        results
            .into_iter()
            .next()
            .ok_or_else(|| TripKitError::Embedding("No embedding returned".to_string()))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        #[derive(Serialize)]
        struct EmbedRequest<'a> {
            model: &'a str,
            input: &'a [String],
        }

        #[derive(Deserialize)]
        struct EmbedResponse {
            embeddings: Vec<Vec<f32>>,
        }

        let request = EmbedRequest {
            model: &self.config.embedding_model,
            input: texts,
        };

        let url = format!("{}/api/embed", self.config.url);
        tracing::debug!(count = texts.len(), %url, "requesting embeddings");

        let response = self
            .authorized(self.http_client.post(&url).json(&request))
            .send()
            .await
            .map_err(|e| {
                // Unreachable embedding backend: the model cannot be loaded
                // at all for this process.
                if e.is_connect() {
                    TripKitError::ModelUnavailable(e.to_string())
                } else if e.is_timeout() {
                    TripKitError::Timeout {
                        seconds: self.config.timeout_secs,
                    }
                } else {
                    TripKitError::Http(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(self.status_error(status, body, &self.config.embedding_model));
        }

        let embed_response: EmbedResponse =
            response.json().await.map_err(TripKitError::Http)?;

        if embed_response.embeddings.len() != texts.len() {
            return Err(TripKitError::Embedding(format!(
                "service returned {} embeddings for {} inputs",
                embed_response.embeddings.len(),
                texts.len()
            )));
        }

        Ok(embed_response.embeddings)
    }

    fn dimensions(&self) -> usize {
        self.embedding_dimensions
    }

    fn model_name(&self) -> &str {
        &self.config.embedding_model
    }
}

#[async_trait]
impl Generator for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        #[derive(Serialize)]
        struct ChatMessage<'a> {
            role: &'a str,
            content: &'a str,
        }

        #[derive(Serialize)]
        struct ChatRequest<'a> {
            model: &'a str,
            messages: Vec<ChatMessage<'a>>,
            stream: bool,
        }

        #[derive(Deserialize)]
        struct ChatResponse {
            message: ChatResponseMessage,
        }

        #[derive(Deserialize)]
        struct ChatResponseMessage {
            content: String,
        }

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            stream: false,
        };

        let url = format!("{}/api/chat", self.config.url);
        tracing::debug!(model = %self.config.model, prompt_len = prompt.len(), "requesting generation");

        let response = self
            .authorized(self.http_client.post(&url).json(&request))
            .send()
            .await
            .map_err(|e| self.generation_transport_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(self.status_error(status, body, &self.config.model));
        }

        let chat_response: ChatResponse = response.json().await.map_err(TripKitError::Http)?;

        Ok(chat_response.message.content)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
