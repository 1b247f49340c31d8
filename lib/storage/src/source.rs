// Dataset sources for the catalog
use animerec_core::{parse_number, Error, RawRecord, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Columns every tabular source must provide
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "anime_id", "name", "genre", "type", "episodes", "rating", "members",
];

/// Anything that can supply the catalog rows, in source order
pub trait CatalogSource {
    fn load(&mut self) -> Result<Vec<RawRecord>>;
}

/// Already materialised records
impl CatalogSource for Vec<RawRecord> {
    fn load(&mut self) -> Result<Vec<RawRecord>> {
        Ok(std::mem::take(self))
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    anime_id: String,
    name: String,
    genre: String,
    #[serde(rename = "type")]
    anime_type: String,
    episodes: String,
    rating: String,
    members: String,
}

/// Non-numeric cells seen while loading, per column
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CoercionReport {
    pub episodes: usize,
    pub rating: usize,
    pub members: usize,
}

/// CSV source with a header row (the Kaggle `anime.csv` layout)
pub struct CsvSource<R: Read> {
    reader: csv::Reader<R>,
    origin: String,
    report: CoercionReport,
}

impl CsvSource<File> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_path(path)
            .map_err(|e| Error::DataLoad(format!("{}: {}", path.display(), e)))?;
        Ok(Self {
            reader,
            origin: path.display().to_string(),
            report: CoercionReport::default(),
        })
    }
}

impl<R: Read> CsvSource<R> {
    pub fn from_reader(reader: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);
        Self {
            reader,
            origin: "<reader>".to_string(),
            report: CoercionReport::default(),
        }
    }

    /// Non-numeric cell counts from the last `load`
    pub fn coercion_report(&self) -> CoercionReport {
        self.report
    }

    fn check_headers(&mut self) -> Result<csv::StringRecord> {
        let headers = self
            .reader
            .headers()
            .map_err(|e| Error::DataLoad(format!("{}: {}", self.origin, e)))?
            .clone();
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|col| !headers.iter().any(|h| h == *col))
            .collect();
        if missing.is_empty() {
            Ok(headers)
        } else {
            Err(Error::DataLoad(format!(
                "{}: missing required columns: {}",
                self.origin,
                missing.join(", ")
            )))
        }
    }
}

fn coerce(raw: &str, counter: &mut usize) -> Option<f64> {
    let value = parse_number(raw);
    if value.is_none() && !raw.trim().is_empty() {
        *counter += 1;
    }
    value
}

fn to_record(row: CsvRow, line: u64, origin: &str, report: &mut CoercionReport) -> Result<RawRecord> {
    let id = row.anime_id.trim().parse::<i64>().map_err(|_| {
        Error::DataLoad(format!(
            "{}: line {}: invalid anime_id '{}'",
            origin, line, row.anime_id
        ))
    })?;

    Ok(RawRecord {
        id,
        name: row.name,
        genre: row.genre,
        anime_type: row.anime_type,
        episodes: coerce(&row.episodes, &mut report.episodes),
        rating: coerce(&row.rating, &mut report.rating),
        members: coerce(&row.members, &mut report.members),
    })
}

impl<R: Read> CatalogSource for CsvSource<R> {
    fn load(&mut self) -> Result<Vec<RawRecord>> {
        let headers = self.check_headers()?;

        let mut report = CoercionReport::default();
        let mut records = Vec::new();
        let mut raw = csv::StringRecord::new();
        loop {
            let more = self
                .reader
                .read_record(&mut raw)
                .map_err(|e| Error::DataLoad(format!("{}: {}", self.origin, e)))?;
            if !more {
                break;
            }
            let line = raw.position().map(|p| p.line()).unwrap_or(0);
            let row: CsvRow = raw.deserialize(Some(&headers)).map_err(|e| {
                Error::DataLoad(format!("{}: line {}: {}", self.origin, line, e))
            })?;
            records.push(to_record(row, line, &self.origin, &mut report)?);
        }
        self.report = report;

        for (column, count) in [
            ("episodes", report.episodes),
            ("rating", report.rating),
            ("members", report.members),
        ] {
            if count > 0 {
                warn!("{}: {} non-numeric '{}' values treated as missing", self.origin, count, column);
            }
        }

        info!("Loaded {} records from {}", records.len(), self.origin);
        debug!("Coercion report: {:?}", report);
        Ok(records)
    }
}

/// Read every record from a CSV file
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<RawRecord>> {
    CsvSource::from_path(path)?.load()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
anime_id,name,genre,type,episodes,rating,members
32281,Kimi no Na wa.,\"Drama, Romance, School, Supernatural\",Movie,1,9.37,200630
20,Naruto,\"Action, Comedy, Martial Arts, Shounen\",TV,220,7.81,683297
34502,Inazuma Eleven,\"Sports\",TV,Unknown,,
";

    #[test]
    fn test_load_preserves_order() {
        let records = CsvSource::from_reader(SAMPLE.as_bytes()).load().unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![32281, 20, 34502]);
        assert_eq!(records[0].anime_type, "Movie");
        assert_eq!(records[1].episodes, Some(220.0));
        assert_eq!(records[1].genres().count(), 4);
    }

    #[test]
    fn test_non_numeric_cells_are_missing() {
        let mut source = CsvSource::from_reader(SAMPLE.as_bytes());
        let records = source.load().unwrap();
        assert_eq!(records[2].episodes, None);
        assert_eq!(records[2].rating, None);
        assert_eq!(records[2].members, None);
        assert_eq!(
            source.coercion_report(),
            CoercionReport { episodes: 1, rating: 0, members: 0 }
        );
    }

    #[test]
    fn test_missing_column_is_load_error() {
        let csv = "anime_id,name,genre,episodes,rating,members\n1,A,,1,1,1\n";
        let err = CsvSource::from_reader(csv.as_bytes()).load().unwrap_err();
        match err {
            Error::DataLoad(msg) => assert!(msg.contains("type")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_id_is_load_error() {
        let csv = "anime_id,name,genre,type,episodes,rating,members\nabc,A,,TV,1,1,1\n";
        assert!(matches!(
            CsvSource::from_reader(csv.as_bytes()).load(),
            Err(Error::DataLoad(_))
        ));
    }

    #[test]
    fn test_unreadable_path_is_load_error() {
        assert!(matches!(
            load_csv("/definitely/not/here/anime.csv"),
            Err(Error::DataLoad(_))
        ));
    }

    #[test]
    fn test_vec_source() {
        let mut source = vec![RawRecord::new(1, "A", "", "TV")];
        assert_eq!(source.load().unwrap().len(), 1);
    }
}
