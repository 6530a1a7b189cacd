// datacheck-core/src/infrastructure/adapters/csv_loader.rs

use std::path::Path;
use tracing::{debug, instrument};

use crate::domain::dataset::Dataset;
use crate::infrastructure::error::InfrastructureError;

const UTF8_BOM: char = '\u{feff}';

/// Reads a headed CSV file into a [`Dataset`].
///
/// No schema is assumed: every header becomes a column and cells are kept as
/// raw text. Ragged rows and invalid UTF-8 are load errors.
#[instrument(fields(path = %path.display()))]
pub fn load_csv(path: &Path) -> Result<Dataset, InfrastructureError> {
    let load_err = |source: csv::Error| InfrastructureError::DatasetLoad {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(load_err)?;

    let names: Vec<String> = reader
        .headers()
        .map_err(load_err)?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches(UTF8_BOM).to_string()
            } else {
                h.to_string()
            }
        })
        .collect();

    if names.is_empty() || names.iter().all(|n| n.is_empty()) {
        return Err(InfrastructureError::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(load_err)?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    debug!(columns = names.len(), rows = rows.len(), "CSV loaded");
    Ok(Dataset::from_rows(names, rows))
}
