// datacheck-core/src/domain/quality/rule.rs

use crate::domain::dataset::ValueType;

/// Name under which the customer rules are reported.
pub const CUSTOMER_SUITE_NAME: &str = "customer_suite";

/// The customer file checks, in reporting order.
///
/// Adding or removing a check is an edit to this table only.
pub const CUSTOMER_RULES: [RuleCheck; 6] = [
    RuleCheck::new("Index", RuleKind::InRowIndexSet),
    RuleCheck::new("Customer Id", RuleKind::LengthBetween { min: 1, max: 15 }),
    RuleCheck::new("First Name", RuleKind::OfType(ValueType::String)),
    RuleCheck::new("Last Name", RuleKind::OfType(ValueType::String)),
    RuleCheck::new("Index", RuleKind::OfType(ValueType::Integer)),
    RuleCheck::new("Subscription Date", RuleKind::OfType(ValueType::Timestamp)),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Values are integers in `0..row_count`.
    InRowIndexSet,
    /// Character count lies in `[min, max]`.
    LengthBetween { min: usize, max: usize },
    /// Every value has the given runtime type.
    OfType(ValueType),
}

impl RuleKind {
    pub fn expectation_type(&self) -> &'static str {
        match self {
            RuleKind::InRowIndexSet => "expect_column_values_to_be_in_set",
            RuleKind::LengthBetween { .. } => "expect_column_value_lengths_to_be_between",
            RuleKind::OfType(_) => "expect_column_values_to_be_of_type",
        }
    }
}

/// A single declarative rule bound to one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleCheck {
    pub column: &'static str,
    pub kind: RuleKind,
}

impl RuleCheck {
    pub const fn new(column: &'static str, kind: RuleKind) -> Self {
        Self { column, kind }
    }
}

/// Named, ordered collection of rules evaluated together.
#[derive(Debug, Clone)]
pub struct ExpectationSuite {
    pub name: String,
    pub rules: Vec<RuleCheck>,
}

impl ExpectationSuite {
    pub fn new(name: impl Into<String>, rules: impl IntoIterator<Item = RuleCheck>) -> Self {
        Self {
            name: name.into(),
            rules: rules.into_iter().collect(),
        }
    }

    /// The suite run against customer exports.
    pub fn customer() -> Self {
        Self::new(CUSTOMER_SUITE_NAME, CUSTOMER_RULES)
    }
}
