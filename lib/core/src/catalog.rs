use crate::{AnimeId, Error, Filter, NameFilter, RawRecord, Result};
use ahash::AHashMap;

/// Immutable catalog of raw records.
///
/// Source order is the canonical row order: row `i` of every feature vector and
/// of the similarity matrix refers to `records()[i]`.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<RawRecord>,
    rows: AHashMap<AnimeId, usize>,
}

impl Catalog {
    /// Build the catalog and its id index. Duplicate ids are a load error.
    pub fn new(records: Vec<RawRecord>) -> Result<Self> {
        let mut rows = AHashMap::with_capacity(records.len());
        for (row, record) in records.iter().enumerate() {
            if let Some(first) = rows.insert(record.id, row) {
                return Err(Error::DataLoad(format!(
                    "duplicate anime_id {} at rows {} and {}",
                    record.id, first, row
                )));
            }
        }
        Ok(Self { records, rows })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    pub fn get_by_id(&self, id: AnimeId) -> Result<&RawRecord> {
        self.row_index_of(id).map(|row| &self.records[row])
    }

    pub fn row_index_of(&self, id: AnimeId) -> Result<usize> {
        self.rows.get(&id).copied().ok_or(Error::NotFound(id))
    }

    /// Records whose name contains `substring`, in catalog order
    pub fn filter_by_name(&self, substring: &str, case_insensitive: bool) -> Vec<&RawRecord> {
        self.filter(&NameFilter::new(substring, case_insensitive))
    }

    pub fn filter(&self, filter: &dyn Filter) -> Vec<&RawRecord> {
        self.records.iter().filter(|r| filter.matches(r)).collect()
    }
}

/// 1-indexed page slice; pages past the end (or page 0) are empty, never an error.
pub fn paginate<T>(items: &[T], page: usize, limit: usize) -> &[T] {
    if page == 0 || limit == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(limit);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(limit).min(items.len());
    &items[start..end]
}
