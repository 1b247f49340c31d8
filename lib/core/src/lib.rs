//! # animerec Core
//!
//! Core types shared by every animerec crate:
//!
//! - [`RawRecord`] - One immutable row of the source catalog
//! - [`Catalog`] - Records in source order plus an id -> row index
//! - [`FeatureVector`] - Fixed-width numeric encoding of one record
//! - [`Error`] - The error taxonomy (`DataLoad`, `NotFound`, `NotReady`, `InvalidArgument`)
//!
//! ## Example
//!
//! ```rust
//! use animerec_core::{Catalog, RawRecord, paginate};
//!
//! let catalog = Catalog::new(vec![
//!     RawRecord::new(1, "Naruto", "Action,Shounen", "TV").with_episodes(220.0),
//!     RawRecord::new(2, "Cooking Show", "Comedy", "TV"),
//! ]).unwrap();
//!
//! assert_eq!(catalog.row_index_of(2).unwrap(), 1);
//! let hits = catalog.filter_by_name("naruto", true);
//! assert_eq!(paginate(&hits, 1, 10).len(), 1);
//! ```

pub mod catalog;
pub mod error;
pub mod filter;
pub mod record;
pub mod vector;

pub use catalog::{paginate, Catalog};
pub use error::{Error, Result};
pub use filter::{Filter, NameFilter};
pub use record::{parse_number, AnimeId, RawRecord};
pub use vector::{cosine_with_norms, dot_product, FeatureVector};
