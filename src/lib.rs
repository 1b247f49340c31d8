//! # animerec
//!
//! Content-based anime recommendations over a fixed, in-memory catalog.
//!
//! Every title is encoded into one numeric feature vector (genre multi-hot,
//! type one-hot, min-max scaled episodes/rating/members and TF-IDF of the
//! name). All pairwise cosine similarities are computed once at startup and
//! queries are answered straight from that matrix.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! animerec --dataset ./dataset/anime.csv list --query naruto
//! animerec --dataset ./dataset/anime.csv recommend 20 --top-n 5
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use animerec::prelude::*;
//!
//! let records = vec![
//!     RawRecord::new(1, "Naruto", "Action,Shounen", "TV").with_episodes(220.0),
//!     RawRecord::new(2, "Naruto Shippuden", "Action,Shounen", "TV").with_episodes(500.0),
//!     RawRecord::new(3, "Cooking Show", "Comedy", "TV").with_episodes(12.0),
//! ];
//! let recommender = Recommender::from_records(records, RecommenderConfig::default()).unwrap();
//!
//! let response = recommender.recommend(1, 1).unwrap();
//! assert_eq!(response.recommendations[0].anime.id, 2);
//!
//! let page = recommender.list("naruto", 1, 10).unwrap();
//! assert_eq!(page.total, 2);
//! ```
//!
//! ## Crate Structure
//!
//! - `animerec-core` - Records, catalog store, feature vectors, errors
//! - `animerec-features` - Feature schema and encoder
//! - `animerec-similarity` - Similarity matrix and top-N ranking
//! - `animerec-storage` - CSV source and schema snapshots

pub mod config;
pub mod recommender;

pub use config::RecommenderConfig;
pub use recommender::{ListPage, RecommendResponse, Recommendation, Recommender, RecommenderState};

// Re-export workspace types
pub use animerec_core::{paginate, AnimeId, Catalog, Error, FeatureVector, RawRecord, Result};
pub use animerec_features::{FeatureEncoder, FeatureSchema};
pub use animerec_similarity::{Neighbor, Score, SimilarityMatrix};
pub use animerec_storage::{load_csv, load_schema, save_schema, CatalogSource, CsvSource};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AnimeId, CatalogSource, CsvSource, Error, ListPage, RawRecord, RecommendResponse,
        Recommender, RecommenderConfig, RecommenderState, Result,
    };
}
