// datacheck-core/src/application/validation.rs

use std::path::Path;
use tracing::{info, instrument, warn};

use crate::domain::dataset::Dataset;
use crate::domain::quality::{ExpectationSuite, RuleOutcome, evaluate, failed_outcome};
use crate::error::DatacheckError;
use crate::infrastructure::adapters::load_csv;

/// Runs an expectation suite against CSV files.
///
/// The suite is handed in explicitly by the caller; building a `Validator`
/// has no side effect.
#[derive(Debug, Clone)]
pub struct Validator {
    suite: ExpectationSuite,
}

impl Validator {
    pub fn new(suite: ExpectationSuite) -> Self {
        Self { suite }
    }

    pub fn suite(&self) -> &ExpectationSuite {
        &self.suite
    }

    /// Loads `path` and returns one outcome per rule, in suite order.
    #[instrument(skip_all, fields(suite = %self.suite.name, path = %path.display()))]
    pub fn validate(&self, path: &Path) -> Result<Vec<RuleOutcome>, DatacheckError> {
        let dataset = load_csv(path)?;
        info!(rows = dataset.row_count(), "Dataset loaded");
        Ok(self.evaluate(&dataset))
    }

    pub fn evaluate(&self, dataset: &Dataset) -> Vec<RuleOutcome> {
        self.suite
            .rules
            .iter()
            .map(|rule| match evaluate(rule, dataset) {
                Ok(outcome) => {
                    if outcome.success {
                        info!(column = rule.column, expectation = %outcome.expectation_type, "PASS");
                    } else {
                        warn!(
                            column = rule.column,
                            expectation = %outcome.expectation_type,
                            unexpected = outcome.unexpected_count,
                            "FAIL"
                        );
                    }
                    outcome
                }
                Err(e) => {
                    warn!(column = rule.column, error = %e, "Rule could not be evaluated");
                    failed_outcome(rule, &e)
                }
            })
            .collect()
    }
}
