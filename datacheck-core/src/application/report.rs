// datacheck-core/src/application/report.rs

use std::path::Path;
use tracing::{info, instrument};

use crate::domain::quality::RuleOutcome;
use crate::domain::report::compose_report;
use crate::error::DatacheckError;
use crate::ports::document::DocumentWriter;

/// Composes the report for `outcomes` and hands it to `writer`.
#[instrument(skip_all, fields(outcomes = outcomes.len(), path = %output_path.display()))]
pub fn render(
    outcomes: &[RuleOutcome],
    output_path: &Path,
    writer: &dyn DocumentWriter,
) -> Result<(), DatacheckError> {
    let document = compose_report(outcomes);
    writer.write(&document, output_path)?;
    info!("Report written");
    Ok(())
}
