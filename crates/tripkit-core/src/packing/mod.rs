//! Packing suggestion pipeline
//!
//! Retrieval-augmented generation over the travel advice corpus:
//! query synthesis -> embedding -> nearest-document retrieval -> generation
//! -> best-effort parsing into a structured suggestion.

mod parser;
mod service;

pub use parser::{parse, ParsedResponse};
pub use service::{PackingService, PackingSuggestion, SUGGESTION_SOURCE};
