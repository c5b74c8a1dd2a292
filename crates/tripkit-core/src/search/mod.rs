//! Nearest-neighbor search module
//!
//! The corpus is small (tens to low hundreds of vectors), so search is an
//! exact linear scan over a flat index. No approximation structure is built.

mod flat;

pub use flat::{FlatIndex, SearchHit};
