use serde::{Deserialize, Serialize};

/// Primary key of a catalog row (the dataset's `anime_id`).
pub type AnimeId = i64;

/// One row of the source catalog.
///
/// Numeric fields are `None` when the source value was absent or not a number
/// (e.g. `"Unknown"` episodes). Imputation happens later, catalog-wide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawRecord {
    pub id: AnimeId,
    pub name: String,
    /// Comma separated genre tags, possibly empty
    pub genre: String,
    #[serde(rename = "type")]
    pub anime_type: String,
    pub episodes: Option<f64>,
    pub rating: Option<f64>,
    pub members: Option<f64>,
}

impl RawRecord {
    pub fn new(
        id: AnimeId,
        name: impl Into<String>,
        genre: impl Into<String>,
        anime_type: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            genre: genre.into(),
            anime_type: anime_type.into(),
            episodes: None,
            rating: None,
            members: None,
        }
    }

    #[must_use]
    pub fn with_episodes(mut self, episodes: f64) -> Self {
        self.episodes = Some(episodes);
        self
    }

    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    #[must_use]
    pub fn with_members(mut self, members: f64) -> Self {
        self.members = Some(members);
        self
    }

    /// Genre tags split on commas, trimmed, empties dropped
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.genre
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }

    /// Trimmed type category. A blank type is the empty string, which is a
    /// category of its own.
    pub fn type_category(&self) -> &str {
        self.anime_type.trim()
    }
}

/// Coerce a raw source cell into a finite number.
///
/// Anything that does not parse, or parses to NaN/infinity, counts as missing.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genres_are_trimmed() {
        let record = RawRecord::new(1, "Naruto", " Action, Comedy ,,Shounen", "TV");
        let genres: Vec<_> = record.genres().collect();
        assert_eq!(genres, vec!["Action", "Comedy", "Shounen"]);
    }

    #[test]
    fn test_empty_genre_and_type() {
        let record = RawRecord::new(1, "Mystery", "", "  ");
        assert_eq!(record.genres().count(), 0);
        assert_eq!(record.type_category(), "");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("220"), Some(220.0));
        assert_eq!(parse_number(" 8.25 "), Some(8.25));
        assert_eq!(parse_number("Unknown"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn test_serializes_type_field() {
        let record = RawRecord::new(5, "Movie", "Drama", "Movie").with_episodes(1.0);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "Movie");
        assert_eq!(json["episodes"], 1.0);
        assert!(json["rating"].is_null());
    }
}
