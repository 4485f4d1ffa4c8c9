//! CSV Loader
//!
//! Reads the crop loss CSV into a [`CropTable`]. Unlike a streaming
//! importer, this loader is all-or-nothing: any malformed row aborts the
//! load, since a partial table would silently serve wrong answers.

use std::io::Read;
use std::path::Path;

use crate::dataset::error::{DatasetError, DatasetResult};
use crate::dataset::types::{CropRecord, CropTable, COLUMNS};

/// Load the dataset from a file path.
pub fn load_from_path(path: &Path) -> DatasetResult<CropTable> {
    let file = std::fs::File::open(path)?;
    let table = load_from_reader(file)?;

    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        "Dataset loaded"
    );

    Ok(table)
}

/// Load the dataset from any reader (used directly by tests).
pub fn load_from_reader<R: Read>(reader: R) -> DatasetResult<CropTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    validate_headers(csv_reader.headers()?)?;

    let mut records = Vec::new();
    for result in csv_reader.deserialize() {
        let record: CropRecord = result?;
        records.push(record);
    }

    CropTable::new(records)
}

/// Check that every required column is present in the header row.
fn validate_headers(headers: &csv::StringRecord) -> DatasetResult<()> {
    for required in COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(DatasetError::MissingColumn(required.to_string()));
        }
    }
    Ok(())
}
