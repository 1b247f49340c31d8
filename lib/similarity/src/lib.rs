//! # animerec Similarity
//!
//! Dense cosine similarity over encoded catalog rows.
//!
//! - [`SimilarityMatrix::build`] - All-pairs cosine similarity, computed once
//! - [`SimilarityMatrix::top_n`] - Nearest neighbors of a row, ties broken by row index
//!
//! ## Example
//!
//! ```rust
//! use animerec_core::FeatureVector;
//! use animerec_similarity::SimilarityMatrix;
//!
//! let vectors = vec![
//!     FeatureVector::new(vec![1.0, 0.0]),
//!     FeatureVector::new(vec![0.9, 0.1]),
//!     FeatureVector::new(vec![0.0, 1.0]),
//! ];
//! let matrix = SimilarityMatrix::build(&vectors, false).unwrap();
//! let top = matrix.top_n(0, 1).unwrap();
//! assert_eq!(top[0].row, 1);
//! ```

pub mod matrix;
pub mod rank;

pub use matrix::{Score, SimilarityMatrix};
pub use rank::Neighbor;
