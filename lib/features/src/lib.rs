//! # animerec Features
//!
//! Catalog-wide feature engineering for content-based recommendations.
//!
//! Encoding runs as an explicit two-pass build:
//!
//! 1. [`FeatureSchema::fit`] computes everything that depends on the whole
//!    catalog: genre and type vocabularies, numeric means and ranges, and the
//!    TF-IDF vocabulary of names.
//! 2. [`FeatureEncoder::encode`] applies that frozen schema to one record.
//!
//! ## Example
//!
//! ```rust
//! use animerec_core::RawRecord;
//! use animerec_features::fit_transform;
//!
//! let records = vec![
//!     RawRecord::new(1, "Naruto", "Action,Shounen", "TV").with_episodes(220.0),
//!     RawRecord::new(2, "Cooking Show", "Comedy", "TV").with_episodes(12.0),
//! ];
//! let (encoder, vectors) = fit_transform(&records, false).unwrap();
//! assert_eq!(vectors[0].dim(), encoder.vector_dim());
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ RawRecords  │────>│   Schema    │────>│   Encoder   │────> FeatureVectors
//! │  (catalog)  │     │  (pass 1)   │     │  (pass 2)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```

pub mod encoder;
pub mod numeric;
pub mod schema;
pub mod text;

pub use encoder::{fit_transform, FeatureEncoder};
pub use numeric::NumericStats;
pub use schema::{FeatureSchema, SchemaError, NUMERIC_COLUMNS};
pub use text::{tokenize, TextVocabulary};
