//! TripKit Core Library
//!
//! Core functionality for the tripkit travel assistant backend.
//!
//! # Features
//! - Fixed in-memory corpus of travel advice documents
//! - Embedding generation via an external model runner (Ollama)
//! - Exact nearest-neighbor search over a flat L2 index
//! - Retrieval-augmented packing suggestions with graceful degradation

pub mod config;
pub mod corpus;
pub mod error;
pub mod llm;
pub mod packing;
pub mod search;

pub use config::LlmServiceConfig;
pub use corpus::{BuiltinCorpus, CorpusSource, Document};
pub use error::{Error, Result, TripKitError};
pub use llm::{Embedder, Generator, OllamaClient};
pub use packing::{PackingService, PackingSuggestion, ParsedResponse, SUGGESTION_SOURCE};
pub use search::{FlatIndex, SearchHit};
