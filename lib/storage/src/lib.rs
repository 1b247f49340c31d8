pub mod snapshot;
pub mod source;

pub use snapshot::{load_schema, save_schema};
pub use source::{load_csv, CatalogSource, CoercionReport, CsvSource, REQUIRED_COLUMNS};
