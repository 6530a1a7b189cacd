// datacheck-core/src/error.rs

use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

/// Failures that stop a run.
///
/// Rule-level problems never end up here: a rule that cannot be evaluated is
/// recorded as a failed outcome instead.
#[derive(Error, Debug, Diagnostic)]
pub enum DatacheckError {
    // --- ERREURS D'INFRASTRUCTURE (CSV, PDF, IO) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- ERREURS GÉNÉRIQUES / APPLICATIVES ---
    #[error("Internal Error: {0}")]
    #[diagnostic(code(datacheck::internal))]
    InternalError(String),
}
