//! All-pairs cosine similarity
//!
//! Dense N x N storage: O(N^2 * D) to build and O(N^2) memory. This is the
//! scalability ceiling of the engine and is only acceptable because the whole
//! catalog fits in memory.

use animerec_core::{cosine_with_norms, Error, FeatureVector, Result};
use rayon::prelude::*;
use std::time::Instant;
use tracing::debug;

/// Similarity scores keep full precision so near-ties rank by their true value
pub type Score = f64;

/// Symmetric, read-only similarity matrix with a unit diagonal
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    n: usize,
    scores: Vec<Score>,
}

impl SimilarityMatrix {
    /// Compute every unordered pair `i < j` once and mirror it.
    ///
    /// The diagonal is fixed at 1.0. Pairs involving a zero vector score 0.0.
    pub fn build(vectors: &[FeatureVector], parallel: bool) -> Result<Self> {
        let n = vectors.len();
        if let Some(first) = vectors.first() {
            let dim = first.dim();
            if let Some((row, v)) = vectors.iter().enumerate().find(|(_, v)| v.dim() != dim) {
                return Err(Error::InvalidArgument(format!(
                    "feature vector {} has dimension {}, expected {}",
                    row,
                    v.dim(),
                    dim
                )));
            }
        }

        let start = Instant::now();
        let norms: Vec<f64> = vectors.iter().map(FeatureVector::norm).collect();

        let upper_row = |i: usize| -> Vec<Score> {
            ((i + 1)..n)
                .map(|j| cosine_with_norms(&vectors[i], norms[i], &vectors[j], norms[j]))
                .collect()
        };

        let upper: Vec<Vec<Score>> = if parallel {
            (0..n).into_par_iter().map(upper_row).collect()
        } else {
            (0..n).map(upper_row).collect()
        };

        let mut scores = vec![0.0; n * n];
        for (i, row) in upper.into_iter().enumerate() {
            scores[i * n + i] = 1.0;
            for (offset, score) in row.into_iter().enumerate() {
                let j = i + 1 + offset;
                scores[i * n + j] = score;
                scores[j * n + i] = score;
            }
        }

        debug!(
            "Built {}x{} similarity matrix in {:?} ({} bytes)",
            n,
            n,
            start.elapsed(),
            n * n * std::mem::size_of::<Score>()
        );

        Ok(Self { n, scores })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<Score> {
        if i < self.n && j < self.n {
            Some(self.scores[i * self.n + j])
        } else {
            None
        }
    }

    /// Scores of `row` against every row, in row order
    #[inline]
    pub fn row(&self, row: usize) -> Option<&[Score]> {
        if row < self.n {
            Some(&self.scores[row * self.n..(row + 1) * self.n])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_vectors() -> Vec<FeatureVector> {
        vec![
            FeatureVector::new(vec![1.0, 1.0, 0.0]),
            FeatureVector::new(vec![1.0, 0.9, 0.1]),
            FeatureVector::new(vec![0.0, 0.0, 1.0]),
            FeatureVector::new(vec![0.0, 0.0, 0.0]),
        ]
    }

    #[test]
    fn test_unit_diagonal_and_symmetry() {
        let matrix = SimilarityMatrix::build(&create_test_vectors(), false).unwrap();
        assert_eq!(matrix.len(), 4);
        for i in 0..4 {
            assert!((matrix.get(i, i).unwrap() - 1.0).abs() < 1e-9);
            for j in 0..4 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
                let s = matrix.get(i, j).unwrap();
                assert!((0.0..=1.0).contains(&s));
            }
        }
    }

    #[test]
    fn test_zero_vector_scores_zero() {
        let matrix = SimilarityMatrix::build(&create_test_vectors(), false).unwrap();
        for j in 0..3 {
            assert_eq!(matrix.get(3, j), Some(0.0));
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let vectors = create_test_vectors();
        let a = SimilarityMatrix::build(&vectors, true).unwrap();
        let b = SimilarityMatrix::build(&vectors, false).unwrap();
        for i in 0..vectors.len() {
            assert_eq!(a.row(i), b.row(i));
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let vectors = vec![
            FeatureVector::new(vec![1.0, 0.0]),
            FeatureVector::new(vec![1.0]),
        ];
        assert!(matches!(
            SimilarityMatrix::build(&vectors, false),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_out_of_bounds_access() {
        let matrix = SimilarityMatrix::build(&create_test_vectors(), false).unwrap();
        assert!(matrix.get(4, 0).is_none());
        assert!(matrix.row(4).is_none());
    }
}
