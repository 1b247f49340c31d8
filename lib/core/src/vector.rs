use serde::{Deserialize, Serialize};

/// Fixed-width numeric encoding of one catalog item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureVector {
    data: Vec<f64>,
}

impl FeatureVector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            data: vec![0.0; dim],
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    #[inline]
    pub fn dot(&self, other: &FeatureVector) -> f64 {
        dot_product(&self.data, &other.data)
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        dot_product(&self.data, &self.data).sqrt()
    }

    /// Cosine similarity; 0.0 when either side is a zero vector or dimensions differ
    #[inline]
    pub fn cosine_similarity(&self, other: &FeatureVector) -> f64 {
        if self.dim() != other.dim() {
            return 0.0;
        }
        cosine_with_norms(self, self.norm(), other, other.norm())
    }
}

/// Cosine similarity with precomputed norms, clamped to [-1, 1]
#[inline]
pub fn cosine_with_norms(a: &FeatureVector, norm_a: f64, b: &FeatureVector, norm_b: f64) -> f64 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (a.dot(b) / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

/// Dot product with two accumulators for better pipelining
#[inline]
pub fn dot_product(a: &[f64], b: &[f64]) -> f64 {
    let len = a.len().min(b.len());
    let mut sum1 = 0.0;
    let mut sum2 = 0.0;
    let mut i = 0;
    while i + 1 < len {
        sum1 += a[i] * b[i];
        sum2 += a[i + 1] * b[i + 1];
        i += 2;
    }
    if i < len {
        sum1 += a[i] * b[i];
    }
    sum1 + sum2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity() {
        let v1 = FeatureVector::new(vec![1.0, 0.0]);
        let v2 = FeatureVector::new(vec![1.0, 0.0]);
        assert!((v1.cosine_similarity(&v2) - 1.0).abs() < 1e-9);

        let v3 = FeatureVector::new(vec![1.0, 0.0]);
        let v4 = FeatureVector::new(vec![0.0, 1.0]);
        assert!(v3.cosine_similarity(&v4).abs() < 1e-9);
    }

    #[test]
    fn test_zero_vector_similarity_is_zero() {
        let zero = FeatureVector::zeros(3);
        let v = FeatureVector::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(zero.cosine_similarity(&v), 0.0);
        assert_eq!(zero.cosine_similarity(&zero), 0.0);
    }

    #[test]
    fn test_dot_product_odd_length() {
        assert_eq!(dot_product(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
        assert_eq!(dot_product(&[], &[]), 0.0);
    }
}
