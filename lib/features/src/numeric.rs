//! Numeric column statistics
//!
//! Mean imputation followed by min-max scaling, both fitted once over the
//! whole catalog.

use serde::{Deserialize, Serialize};

/// Catalog-wide statistics for one numeric column
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NumericStats {
    /// Value substituted for missing entries (mean of the present values, or 0.0)
    pub mean: f64,
    /// Minimum after imputation
    pub min: f64,
    /// Maximum after imputation
    pub max: f64,
    /// Number of entries that were missing or non-numeric
    #[serde(default)]
    pub missing: usize,
}

impl NumericStats {
    /// Fit over one column. A column with no present values imputes 0.0.
    pub fn fit<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let mut sum = 0.0;
        let mut present = 0usize;
        let mut missing = 0usize;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for value in values {
            match value {
                Some(v) => {
                    sum += v;
                    present += 1;
                    min = min.min(v);
                    max = max.max(v);
                }
                None => missing += 1,
            }
        }

        let mean = if present > 0 { sum / present as f64 } else { 0.0 };

        // The mean always lies within [min, max] of the present values, so imputed
        // entries only widen the range when nothing was present.
        if present == 0 {
            min = mean;
            max = mean;
        }

        Self {
            mean,
            min,
            max,
            missing,
        }
    }

    #[inline]
    pub fn impute(&self, value: Option<f64>) -> f64 {
        value.unwrap_or(self.mean)
    }

    /// `(x - min) / (max - min)`, or 0.0 for a constant column
    #[inline]
    pub fn scale(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range == 0.0 {
            0.0
        } else {
            (value - self.min) / range
        }
    }

    /// Impute then scale
    #[inline]
    pub fn transform(&self, value: Option<f64>) -> f64 {
        self.scale(self.impute(value))
    }

    #[inline]
    pub fn is_constant(&self) -> bool {
        self.max == self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_imputation() {
        let stats = NumericStats::fit(vec![Some(2.0), None, Some(4.0)]);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.missing, 1);
        assert_eq!(stats.impute(None), 3.0);
        assert_eq!(stats.impute(Some(7.0)), 7.0);
    }

    #[test]
    fn test_min_max_scaling() {
        let stats = NumericStats::fit(vec![Some(10.0), Some(20.0), Some(30.0)]);
        assert_eq!(stats.transform(Some(10.0)), 0.0);
        assert_eq!(stats.transform(Some(20.0)), 0.5);
        assert_eq!(stats.transform(Some(30.0)), 1.0);
        assert_eq!(stats.transform(None), 0.5);
    }

    #[test]
    fn test_constant_column_scales_to_zero() {
        let stats = NumericStats::fit(vec![Some(5.0), Some(5.0), None]);
        assert!(stats.is_constant());
        for value in [Some(5.0), None] {
            let scaled = stats.transform(value);
            assert_eq!(scaled, 0.0);
            assert!(!scaled.is_nan());
        }
    }

    #[test]
    fn test_all_missing_column() {
        let stats = NumericStats::fit(vec![None, None]);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.missing, 2);
        assert_eq!(stats.transform(None), 0.0);
    }
}
