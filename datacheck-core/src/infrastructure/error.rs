// datacheck-core/src/infrastructure/error.rs

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- DATASET (CSV) ---
    #[error("Could not load dataset '{}': {source}", path.display())]
    #[diagnostic(
        code(datacheck::infra::dataset),
        help("The input must be a readable UTF-8 CSV file with a header row.")
    )]
    DatasetLoad {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Dataset '{}' has no header row", path.display())]
    #[diagnostic(code(datacheck::infra::dataset_empty))]
    MissingHeader { path: PathBuf },

    // --- REPORT (PDF) ---
    #[error("Could not write report '{}': {reason}", path.display())]
    #[diagnostic(
        code(datacheck::infra::report),
        help("Check that the output directory exists and is writable.")
    )]
    ReportWrite { path: PathBuf, reason: String },

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(datacheck::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(datacheck::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),
}

impl InfrastructureError {
    /// True for the failures that mean the input file is unusable.
    pub fn is_dataset_load(&self) -> bool {
        matches!(
            self,
            InfrastructureError::DatasetLoad { .. } | InfrastructureError::MissingHeader { .. }
        )
    }
}
