use crate::RecommenderConfig;
use animerec_core::{paginate, AnimeId, Catalog, Error, RawRecord, Result};
use animerec_features::{FeatureEncoder, FeatureSchema};
use animerec_similarity::{Score, SimilarityMatrix};
use animerec_storage::CatalogSource;
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Lifecycle of a recommender. `Ready` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommenderState {
    Uninitialized,
    Loading,
    Ready,
}

/// Everything produced by the build, immutable afterwards
struct Engine {
    catalog: Catalog,
    schema: FeatureSchema,
    matrix: SimilarityMatrix,
}

enum Phase {
    Uninitialized,
    Loading,
    Ready(Arc<Engine>),
}

/// A neighbor with its similarity to the queried anime
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    #[serde(flatten)]
    pub anime: RawRecord,
    pub score: Score,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendResponse {
    pub anime: RawRecord,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListPage {
    pub page: usize,
    pub limit: usize,
    /// Matching records across all pages
    pub total: usize,
    pub items: Vec<RawRecord>,
}

/// Content-based recommender over a fixed catalog.
///
/// Built once (load -> encode -> similarity), then read-only: queries only
/// take the state lock long enough to clone an `Arc`.
pub struct Recommender {
    config: RecommenderConfig,
    phase: RwLock<Phase>,
}

impl Recommender {
    pub fn new(config: RecommenderConfig) -> Self {
        Self {
            config,
            phase: RwLock::new(Phase::Uninitialized),
        }
    }

    /// Create and build in one step
    pub fn from_source(source: &mut dyn CatalogSource, config: RecommenderConfig) -> Result<Self> {
        let recommender = Self::new(config);
        recommender.build(source)?;
        Ok(recommender)
    }

    pub fn from_records(records: Vec<RawRecord>, config: RecommenderConfig) -> Result<Self> {
        let mut source = records;
        Self::from_source(&mut source, config)
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    pub fn state(&self) -> RecommenderState {
        match &*self.phase.read() {
            Phase::Uninitialized => RecommenderState::Uninitialized,
            Phase::Loading => RecommenderState::Loading,
            Phase::Ready(_) => RecommenderState::Ready,
        }
    }

    /// Run the one-time build. Any failure leaves the recommender uninitialized
    /// and nothing is ever served from a partial catalog.
    pub fn build(&self, source: &mut dyn CatalogSource) -> Result<()> {
        {
            let mut phase = self.phase.write();
            if !matches!(*phase, Phase::Uninitialized) {
                return Err(Error::InvalidArgument(
                    "recommender has already been built".to_string(),
                ));
            }
            *phase = Phase::Loading;
        }
        info!("Recommender state: Uninitialized -> Loading");

        match self.build_engine(source) {
            Ok(engine) => {
                *self.phase.write() = Phase::Ready(Arc::new(engine));
                info!("Recommender state: Loading -> Ready");
                Ok(())
            }
            Err(e) => {
                *self.phase.write() = Phase::Uninitialized;
                warn!("Recommender build failed: {}", e);
                Err(e)
            }
        }
    }

    fn build_engine(&self, source: &mut dyn CatalogSource) -> Result<Engine> {
        let start = Instant::now();

        let catalog = Catalog::new(source.load()?)?;
        if catalog.is_empty() {
            return Err(Error::DataLoad("catalog is empty".to_string()));
        }

        let encoder = FeatureEncoder::fit(catalog.records())?;
        let vectors = encoder.encode_all(catalog.records(), self.config.parallel);
        let matrix = SimilarityMatrix::build(&vectors, self.config.parallel)?;

        info!(
            "Built recommender: {} items, {} features in {:?}",
            catalog.len(),
            encoder.vector_dim(),
            start.elapsed()
        );

        Ok(Engine {
            catalog,
            schema: encoder.into_schema(),
            matrix,
        })
    }

    fn engine(&self) -> Result<Arc<Engine>> {
        match &*self.phase.read() {
            Phase::Ready(engine) => Ok(Arc::clone(engine)),
            _ => Err(Error::NotReady),
        }
    }

    /// The `top_n` most similar titles to `id`, best first
    pub fn recommend(&self, id: AnimeId, top_n: usize) -> Result<RecommendResponse> {
        let engine = self.engine()?;
        if top_n == 0 {
            return Err(Error::InvalidArgument("top_n must be at least 1".to_string()));
        }

        let row = engine.catalog.row_index_of(id)?;
        let neighbors = engine.matrix.top_n(row, top_n)?;
        debug!("recommend({}, {}): {} neighbors", id, top_n, neighbors.len());

        let records = engine.catalog.records();
        let recommendations = neighbors
            .into_iter()
            .map(|n| Recommendation {
                anime: records[n.row].clone(),
                score: n.score,
            })
            .collect();

        Ok(RecommendResponse {
            anime: records[row].clone(),
            recommendations,
        })
    }

    pub fn recommend_default(&self, id: AnimeId) -> Result<RecommendResponse> {
        self.recommend(id, self.config.default_top_n)
    }

    /// Filter by name and return one page, in catalog order
    pub fn list(&self, query: &str, page: usize, limit: usize) -> Result<ListPage> {
        let engine = self.engine()?;
        if page == 0 {
            return Err(Error::InvalidArgument("page must be at least 1".to_string()));
        }
        if limit == 0 {
            return Err(Error::InvalidArgument("limit must be at least 1".to_string()));
        }

        let matches = engine
            .catalog
            .filter_by_name(query, self.config.case_insensitive);
        let items = paginate(&matches, page, limit)
            .iter()
            .map(|r| (*r).clone())
            .collect();

        Ok(ListPage {
            page,
            limit,
            total: matches.len(),
            items,
        })
    }

    pub fn get(&self, id: AnimeId) -> Result<RawRecord> {
        self.engine()?.catalog.get_by_id(id).cloned()
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.engine()?.catalog.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.engine()?.catalog.is_empty())
    }

    pub fn feature_dim(&self) -> Result<usize> {
        Ok(self.engine()?.schema.dimension)
    }

    /// The frozen feature schema the catalog was encoded with
    pub fn schema(&self) -> Result<FeatureSchema> {
        Ok(self.engine()?.schema.clone())
    }

    /// Raw similarity between two catalog entries
    pub fn similarity(&self, a: AnimeId, b: AnimeId) -> Result<Score> {
        let engine = self.engine()?;
        let i = engine.catalog.row_index_of(a)?;
        let j = engine.catalog.row_index_of(b)?;
        engine
            .matrix
            .get(i, j)
            .ok_or_else(|| Error::InvalidArgument(format!("no similarity for rows {} and {}", i, j)))
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(RecommenderConfig::default())
    }
}
