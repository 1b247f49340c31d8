//! Feature schema
//!
//! The frozen result of the catalog-wide first pass: category vocabularies,
//! numeric statistics and the name vocabulary. Applying a schema to a record
//! is a pure function, so the same schema always yields the same column
//! layout.

use crate::numeric::NumericStats;
use crate::text::TextVocabulary;
use animerec_core::RawRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Number of scaled numeric columns (episodes, rating, members)
pub const NUMERIC_COLUMNS: usize = 3;

/// Catalog-wide feature schema
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureSchema {
    /// Schema version for future compatibility
    #[serde(default = "default_version")]
    pub version: u32,

    /// Distinct genre tags, sorted
    pub genres: Vec<String>,

    /// Distinct type categories, sorted. `""` stands for a blank type.
    pub types: Vec<String>,

    pub episodes: NumericStats,
    pub rating: NumericStats,
    pub members: NumericStats,

    /// TF-IDF vocabulary fitted on names
    pub vocabulary: TextVocabulary,

    /// Total feature width, kept for validating snapshots
    pub dimension: usize,
}

fn default_version() -> u32 {
    1
}

impl FeatureSchema {
    /// Fit the schema over the whole catalog
    pub fn fit(records: &[RawRecord]) -> Result<Self, SchemaError> {
        if records.is_empty() {
            return Err(SchemaError::EmptyCatalog);
        }

        let genres: BTreeSet<&str> = records.iter().flat_map(RawRecord::genres).collect();
        let types: BTreeSet<&str> = records.iter().map(RawRecord::type_category).collect();

        let episodes = NumericStats::fit(records.iter().map(|r| r.episodes));
        let rating = NumericStats::fit(records.iter().map(|r| r.rating));
        let members = NumericStats::fit(records.iter().map(|r| r.members));

        for (column, stats) in [("episodes", &episodes), ("rating", &rating), ("members", &members)] {
            if stats.missing == records.len() {
                warn!("Column '{}' has no numeric values, imputing 0", column);
            } else if stats.missing > 0 {
                debug!(
                    "Column '{}': imputed {} missing values with mean {:.4}",
                    column, stats.missing, stats.mean
                );
            }
        }

        let vocabulary = TextVocabulary::fit(records.iter().map(|r| r.name.as_str()));

        let mut schema = Self {
            version: 1,
            genres: genres.into_iter().map(str::to_string).collect(),
            types: types.into_iter().map(str::to_string).collect(),
            episodes,
            rating,
            members,
            vocabulary,
            dimension: 0,
        };
        schema.dimension = schema.compute_dimension();

        debug!(
            "Fitted feature schema: {} genres, {} types, {} terms over {} names, dimension {}",
            schema.genres.len(),
            schema.types.len(),
            schema.vocabulary.len(),
            schema.vocabulary.documents(),
            schema.dimension
        );

        Ok(schema)
    }

    /// genres + types + numeric + vocabulary
    pub fn compute_dimension(&self) -> usize {
        self.genres.len() + self.types.len() + NUMERIC_COLUMNS + self.vocabulary.len()
    }

    /// Check a schema that did not come from `fit` (e.g. a snapshot)
    pub fn validate(&self) -> Result<(), SchemaError> {
        if !is_strictly_sorted(&self.genres) {
            return Err(SchemaError::UnsortedVocabulary("genres"));
        }
        if !is_strictly_sorted(&self.types) {
            return Err(SchemaError::UnsortedVocabulary("types"));
        }
        if !self.vocabulary.is_consistent() {
            return Err(SchemaError::UnsortedVocabulary("vocabulary"));
        }
        let actual = self.compute_dimension();
        if actual != self.dimension {
            return Err(SchemaError::DimensionMismatch {
                expected: self.dimension,
                actual,
            });
        }
        Ok(())
    }

    pub fn genre_offset(&self) -> usize {
        0
    }

    pub fn type_offset(&self) -> usize {
        self.genres.len()
    }

    pub fn numeric_offset(&self) -> usize {
        self.genres.len() + self.types.len()
    }

    pub fn text_offset(&self) -> usize {
        self.numeric_offset() + NUMERIC_COLUMNS
    }

    pub fn genre_column(&self, genre: &str) -> Option<usize> {
        self.genres
            .binary_search_by(|g| g.as_str().cmp(genre))
            .ok()
            .map(|i| self.genre_offset() + i)
    }

    pub fn type_column(&self, anime_type: &str) -> Option<usize> {
        self.types
            .binary_search_by(|t| t.as_str().cmp(anime_type))
            .ok()
            .map(|i| self.type_offset() + i)
    }

    /// Ordered column labels, one per feature
    pub fn column_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.dimension);
        names.extend(self.genres.iter().map(|g| format!("genre={}", g)));
        names.extend(self.types.iter().map(|t| {
            if t.is_empty() {
                "type=(blank)".to_string()
            } else {
                format!("type={}", t)
            }
        }));
        names.extend(["episodes", "rating", "members"].iter().map(|n| n.to_string()));
        names.extend(self.vocabulary.terms().iter().map(|t| format!("name:{}", t)));
        names
    }
}

fn is_strictly_sorted(values: &[String]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}

/// Errors that can occur while fitting or validating a schema
#[derive(Debug, Clone, thiserror::Error)]
pub enum SchemaError {
    #[error("Cannot fit a feature schema on an empty catalog")]
    EmptyCatalog,

    #[error("Schema {0} are not sorted and unique")]
    UnsortedVocabulary(&'static str),

    #[error("Schema dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl From<SchemaError> for animerec_core::Error {
    fn from(err: SchemaError) -> Self {
        animerec_core::Error::DataLoad(err.to_string())
    }
}
