//! Feature Encoder
//!
//! Second pass of the feature pipeline: applies a frozen [`FeatureSchema`] to
//! each record, producing one [`FeatureVector`] per catalog row.
//!
//! Column layout:
//! `[genre multi-hot | type one-hot | episodes | rating | members | name TF-IDF]`

use crate::schema::FeatureSchema;
use animerec_core::{FeatureVector, RawRecord, Result};
use rayon::prelude::*;
use tracing::debug;

/// Encodes records against a frozen schema
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    schema: FeatureSchema,
}

impl FeatureEncoder {
    /// Fit a schema over the whole catalog and wrap it.
    ///
    /// Fails with `DataLoad` on an empty catalog.
    pub fn fit(records: &[RawRecord]) -> Result<Self> {
        Ok(Self {
            schema: FeatureSchema::fit(records)?,
        })
    }

    /// Reuse a previously fitted schema, e.g. one read from a snapshot
    pub fn with_schema(schema: FeatureSchema) -> Result<Self> {
        schema.validate()?;
        Ok(Self { schema })
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn into_schema(self) -> FeatureSchema {
        self.schema
    }

    pub fn vector_dim(&self) -> usize {
        self.schema.dimension
    }

    /// Encode a single record
    pub fn encode(&self, record: &RawRecord) -> FeatureVector {
        let schema = &self.schema;
        let mut vector = FeatureVector::zeros(schema.dimension);
        let data = vector.as_mut_slice();

        for genre in record.genres() {
            if let Some(col) = schema.genre_column(genre) {
                data[col] = 1.0;
            }
        }

        if let Some(col) = schema.type_column(record.type_category()) {
            data[col] = 1.0;
        }

        let numeric = schema.numeric_offset();
        data[numeric] = schema.episodes.transform(record.episodes);
        data[numeric + 1] = schema.rating.transform(record.rating);
        data[numeric + 2] = schema.members.transform(record.members);

        let text = schema.text_offset();
        schema
            .vocabulary
            .transform_into(&record.name, &mut data[text..text + schema.vocabulary.len()]);

        vector
    }

    /// Encode every record, preserving row order.
    ///
    /// Rows only read the frozen schema, so the parallel pass needs no locking.
    pub fn encode_all(&self, records: &[RawRecord], parallel: bool) -> Vec<FeatureVector> {
        let vectors: Vec<FeatureVector> = if parallel {
            records.par_iter().map(|r| self.encode(r)).collect()
        } else {
            records.iter().map(|r| self.encode(r)).collect()
        };
        debug!(
            "Encoded {} records into {}-dimensional feature vectors",
            vectors.len(),
            self.vector_dim()
        );
        vectors
    }
}

/// Fit a schema over `records` and encode all of them in one call
pub fn fit_transform(
    records: &[RawRecord],
    parallel: bool,
) -> Result<(FeatureEncoder, Vec<FeatureVector>)> {
    let encoder = FeatureEncoder::fit(records)?;
    let vectors = encoder.encode_all(records, parallel);
    Ok((encoder, vectors))
}
