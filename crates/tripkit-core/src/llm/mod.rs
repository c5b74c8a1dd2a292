//! LLM integration
//!
//! Provides traits and implementations for:
//! - Embedding generation via an external model runner
//! - Text generation for the packing suggestion prompt

mod client;
mod traits;

pub use client::OllamaClient;
pub use traits::{Embedder, Generator};
