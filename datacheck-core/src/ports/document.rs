// datacheck-core/src/ports/document.rs

use std::path::Path;

use crate::domain::report::ReportDocument;
use crate::infrastructure::error::InfrastructureError;

/// Lays out a composed report and persists it at `output_path`.
///
/// Implementations must either leave a complete file behind or none at all.
pub trait DocumentWriter: Send + Sync {
    fn write(&self, document: &ReportDocument, output_path: &Path)
    -> Result<(), InfrastructureError>;
}
