// datacheck-core/src/domain/quality/outcome.rs

use serde::{Deserialize, Serialize};

/// Recorded result of one rule against the loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub column: String,
    pub expectation_type: String,
    pub success: bool,
    /// Informational only: first offending value, or the dominant type.
    pub observed_value: Option<String>,
    pub unexpected_count: usize,
    /// Set when the rule could not be evaluated at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<String>,
}

impl RuleOutcome {
    pub fn observed_display(&self) -> &str {
        self.observed_value.as_deref().unwrap_or("None")
    }
}
