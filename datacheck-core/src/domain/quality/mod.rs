// datacheck-core/src/domain/quality/mod.rs

pub mod evaluator;
pub mod outcome;
pub mod rule;

// Re-exports
pub use evaluator::{evaluate, failed_outcome};
pub use outcome::RuleOutcome;
pub use rule::{CUSTOMER_RULES, CUSTOMER_SUITE_NAME, ExpectationSuite, RuleCheck, RuleKind};
