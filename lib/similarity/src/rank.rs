//! Top-N neighbor ranking over a similarity matrix row

use crate::matrix::{Score, SimilarityMatrix};
use animerec_core::{Error, Result};
use ordered_float::OrderedFloat;
use std::cmp::{Ordering, Reverse};

/// A ranked neighbor of a query row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub row: usize,
    pub score: Score,
}

impl Neighbor {
    #[inline]
    fn rank_key(&self) -> (Reverse<OrderedFloat<Score>>, usize) {
        (Reverse(OrderedFloat(self.score)), self.row)
    }
}

/// Score descending, then row ascending
#[inline]
fn by_rank(a: &Neighbor, b: &Neighbor) -> Ordering {
    a.rank_key().cmp(&b.rank_key())
}

impl SimilarityMatrix {
    /// The `n` rows most similar to `row`, excluding `row` itself.
    ///
    /// Returns every other row when fewer than `n` exist.
    pub fn top_n(&self, row: usize, n: usize) -> Result<Vec<Neighbor>> {
        let scores = self.row(row).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "row index {} out of bounds for {} rows",
                row,
                self.len()
            ))
        })?;

        let mut neighbors: Vec<Neighbor> = scores
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != row)
            .map(|(other, &score)| Neighbor { row: other, score })
            .collect();

        let keep = n.min(neighbors.len());
        if keep == 0 {
            return Ok(Vec::new());
        }
        if keep < neighbors.len() {
            neighbors.select_nth_unstable_by(keep - 1, by_rank);
            neighbors.truncate(keep);
        }
        neighbors.sort_unstable_by(by_rank);
        Ok(neighbors)
    }
}
