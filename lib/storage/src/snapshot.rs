// Feature schema snapshots: the frozen first-pass schema written as JSON
use animerec_core::{Error, Result};
use animerec_features::FeatureSchema;
use atomicwrites::{AtomicFile, OverwriteBehavior};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Write `schema` to `path`, replacing any previous snapshot atomically
pub fn save_schema<P: AsRef<Path>>(schema: &FeatureSchema, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = AtomicFile::new(path, OverwriteBehavior::AllowOverwrite);
    file.write(|f| -> std::io::Result<()> {
        let mut writer = BufWriter::new(f);
        serde_json::to_writer_pretty(&mut writer, schema)?;
        writer.flush()
    })
    .map_err(|e| match e {
        atomicwrites::Error::Internal(io) => Error::Io(io),
        atomicwrites::Error::User(io) => Error::Serialization(io.to_string()),
    })?;

    info!(
        "Saved feature schema ({} columns) to {}",
        schema.dimension,
        path.display()
    );
    Ok(())
}

/// Read and validate a schema snapshot
pub fn load_schema<P: AsRef<Path>>(path: P) -> Result<FeatureSchema> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let schema: FeatureSchema = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| Error::Serialization(format!("{}: {}", path.display(), e)))?;
    schema.validate()?;
    Ok(schema)
}
