//! The packing suggestion orchestrator
//!
//! Owns the retrieval pipeline end to end: lazy single-flight index build,
//! nearest-document retrieval, generation, and parsing. `suggest` never
//! returns an error; every failure is folded into the result payload so a
//! broken model backend can only degrade the packing section, not the whole
//! trip-guide response.

use crate::corpus::{CorpusSource, Document};
use crate::error::{Result, TripKitError};
use crate::llm::{Embedder, Generator};
use crate::packing::parser;
use crate::search::FlatIndex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Source label attached to successful suggestions.
pub const SUGGESTION_SOURCE: &str = "AI-generated based on travel knowledge base";

/// Per-request packing suggestion. Produced fresh on every call; nothing is
/// cached across requests.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PackingSuggestion {
    pub packing_list: Vec<String>,
    pub travel_tips: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Set when any pipeline stage failed; lists are empty in that case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PackingSuggestion {
    fn degraded(reason: String) -> Self {
        Self {
            packing_list: Vec::new(),
            travel_tips: Vec::new(),
            source: None,
            error: Some(reason),
        }
    }
}

/// Retrieval-augmented packing suggestion service.
///
/// Process-wide: construct once, share behind an `Arc`. The document index
/// is built lazily on first use and is read-only after that.
pub struct PackingService {
    embedder: Arc<dyn Embedder>,
    generator: Arc<dyn Generator>,
    documents: Vec<String>,
    index: OnceCell<FlatIndex>,
}

impl PackingService {
    /// Create the service with injected model clients and corpus.
    pub fn new(
        embedder: Arc<dyn Embedder>,
        generator: Arc<dyn Generator>,
        corpus: &dyn CorpusSource,
    ) -> Self {
        Self {
            embedder,
            generator,
            documents: corpus.documents(),
            index: OnceCell::new(),
        }
    }

    /// The fixed query template over structured trip parameters.
    pub fn build_query(city: &str, temperature: f64, aqi: u8) -> String {
        format!(
            "Provide packing suggestions for a trip to {city} \
             with a temperature of {temperature}°C \
             and an AQI of {aqi}. \
             Include both a packing list and travel tips."
        )
    }

    /// Number of corpus documents this service retrieves over.
    pub fn corpus_len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the document index has been built yet.
    pub fn index_ready(&self) -> bool {
        self.index.initialized()
    }

    /// Get the document index, building it on first call.
    ///
    /// `OnceCell` serializes concurrent initializers: one caller embeds the
    /// corpus while the rest wait, and a failed build leaves the cell empty
    /// so a later request can retry.
    async fn index(&self) -> Result<&FlatIndex> {
        self.index
            .get_or_try_init(|| async {
                if self.documents.is_empty() {
                    return Err(TripKitError::EmptyCorpus);
                }
                tracing::info!(
                    documents = self.documents.len(),
                    model = self.embedder.model_name(),
                    "building document index"
                );
                let vectors = self.embedder.embed_batch(&self.documents).await?;
                if vectors.len() != self.documents.len() {
                    return Err(TripKitError::Index(format!(
                        "embedder returned {} vectors for {} documents",
                        vectors.len(),
                        self.documents.len()
                    )));
                }
                FlatIndex::build(vectors)
            })
            .await
    }

    /// Return the corpus document nearest to the synthesized query.
    async fn retrieve(&self, query: &str) -> Result<Document> {
        let index = self.index().await?;
        let query_vector = self.embedder.embed(query).await?;
        let hits = index.search(&query_vector, 1)?;
        let hit = hits.first().ok_or(TripKitError::EmptyCorpus)?;
        tracing::debug!(doc_id = hit.doc_id, distance = hit.distance, "retrieved document");
        Ok(Document {
            id: hit.doc_id,
            text: self.documents[hit.doc_id].clone(),
        })
    }

    /// Produce a packing suggestion for the given trip parameters.
    ///
    /// Always returns a result value. Failures from index build, retrieval,
    /// or generation are captured in the `error` field with empty lists; the
    /// caller applies its own fallback policy.
    pub async fn suggest(&self, city: &str, temperature: f64, aqi: u8) -> PackingSuggestion {
        match self.try_suggest(city, temperature, aqi).await {
            Ok(suggestion) => suggestion,
            Err(e) => {
                match &e {
                    TripKitError::ModelUnavailable(_) => {
                        tracing::error!(error = %e, "packing suggestion failed: model unavailable")
                    }
                    _ => tracing::warn!(error = %e, "packing suggestion degraded"),
                }
                PackingSuggestion::degraded(e.to_string())
            }
        }
    }

    async fn try_suggest(
        &self,
        city: &str,
        temperature: f64,
        aqi: u8,
    ) -> Result<PackingSuggestion> {
        let query = Self::build_query(city, temperature, aqi);
        let document = self.retrieve(&query).await?;

        let prompt = format!("{}\n\nQuestion: {query}", document.text);
        let raw = self.generator.generate(&prompt).await?;

        let parsed = parser::parse(&raw);
        if parsed.packing_list.is_empty() && parsed.travel_tips.is_empty() {
            // Valid but empty output; the caller's fallback policy decides.
            tracing::debug!("generator output contained no numbered items");
        }

        Ok(PackingSuggestion {
            packing_list: parsed.packing_list,
            travel_tips: parsed.travel_tips,
            source: Some(SUGGESTION_SOURCE.to_string()),
            error: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_template_is_fixed() {
        let query = PackingService::build_query("Tokyo", 21.5, 2);
        assert_eq!(
            query,
            "Provide packing suggestions for a trip to Tokyo \
             with a temperature of 21.5°C \
             and an AQI of 2. \
             Include both a packing list and travel tips."
        );
    }

    #[test]
    fn test_degraded_suggestion_shape() {
        let s = PackingSuggestion::degraded("boom".into());
        assert!(s.packing_list.is_empty());
        assert!(s.travel_tips.is_empty());
        assert!(s.source.is_none());
        assert_eq!(s.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_error_field_is_omitted_on_success_payload() {
        let s = PackingSuggestion {
            packing_list: vec!["Hat".into()],
            travel_tips: vec![],
            source: Some(SUGGESTION_SOURCE.into()),
            error: None,
        };
        let json = serde_json::to_value(&s).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["source"], SUGGESTION_SOURCE);
    }
}
