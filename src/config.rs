/// Configuration for a recommender
#[derive(Debug, Clone)]
pub struct RecommenderConfig {
    /// Neighbors returned when the caller does not ask for a count
    pub default_top_n: usize,
    /// Page size used when the caller does not ask for one
    pub default_page_limit: usize,
    /// Encode rows and build the similarity matrix on the rayon pool
    pub parallel: bool,
    /// Name filtering ignores case
    pub case_insensitive: bool,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            default_top_n: 5,
            default_page_limit: 10,
            parallel: true,
            case_insensitive: true,
        }
    }
}
