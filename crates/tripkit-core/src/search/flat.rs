//! Flat exact nearest-neighbor index over L2 distance

use crate::error::{Result, TripKitError};

/// A single search match: document position and its L2 distance to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    pub doc_id: usize,
    pub distance: f32,
}

/// Exhaustive nearest-neighbor index holding one vector per corpus document.
///
/// Construction is all-or-nothing: `build` either returns a fully populated
/// index or an error, never partial state. The index is read-only afterwards.
pub struct FlatIndex {
    dimensions: usize,
    vectors: Vec<Vec<f32>>,
}

impl FlatIndex {
    /// Build an index from document embeddings, in corpus order.
    ///
    /// Fails on an empty input or on inconsistent vector widths; the distance
    /// metric only makes sense over a single embedding space.
    pub fn build(vectors: Vec<Vec<f32>>) -> Result<Self> {
        let dimensions = match vectors.first() {
            Some(v) if !v.is_empty() => v.len(),
            Some(_) => {
                return Err(TripKitError::Index(
                    "cannot build index from zero-width vectors".to_string(),
                ))
            }
            None => {
                return Err(TripKitError::Index(
                    "cannot build index from an empty vector set".to_string(),
                ))
            }
        };

        for (i, v) in vectors.iter().enumerate() {
            if v.len() != dimensions {
                return Err(TripKitError::Index(format!(
                    "vector {i} has {} dimensions, expected {dimensions}",
                    v.len()
                )));
            }
        }

        tracing::debug!(count = vectors.len(), dimensions, "built flat index");

        Ok(Self {
            dimensions,
            vectors,
        })
    }

    /// Find the `k` nearest vectors to `query`, ascending by L2 distance.
    ///
    /// Equidistant documents resolve to the lower document id, so results are
    /// deterministic across runs.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<SearchHit>> {
        if query.len() != self.dimensions {
            return Err(TripKitError::Index(format!(
                "query has {} dimensions, index has {}",
                query.len(),
                self.dimensions
            )));
        }

        let mut hits: Vec<SearchHit> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(doc_id, v)| SearchHit {
                doc_id,
                distance: l2_distance(query, v),
            })
            .collect();

        hits.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.doc_id.cmp(&b.doc_id))
        });

        hits.truncate(k);
        Ok(hits)
    }

    /// Number of indexed vectors
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Embedding width of the indexed vectors
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }
}

/// Euclidean distance between two equal-length vectors.
fn l2_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}
