// datacheck-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum DomainError {
    #[error("column '{column}' not found in dataset")]
    #[diagnostic(
        code(datacheck::domain::column_not_found),
        help("Check the CSV header row; column names are case-sensitive.")
    )]
    ColumnNotFound { column: String },
}
