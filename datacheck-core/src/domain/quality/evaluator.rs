// datacheck-core/src/domain/quality/evaluator.rs

use std::collections::HashMap;

use crate::domain::dataset::{Column, Dataset, Value, ValueType, infer};
use crate::domain::error::DomainError;

use super::outcome::RuleOutcome;
use super::rule::{RuleCheck, RuleKind};

/// Evaluates one rule against the dataset.
///
/// Null cells break set and type rules; the length rule only looks at the
/// raw text. The only failure mode is a rule whose column is absent.
pub fn evaluate(rule: &RuleCheck, dataset: &Dataset) -> Result<RuleOutcome, DomainError> {
    let column = dataset
        .column(rule.column)
        .ok_or_else(|| DomainError::ColumnNotFound {
            column: rule.column.to_string(),
        })?;

    let (unexpected_count, observed_value) = match rule.kind {
        RuleKind::InRowIndexSet => {
            let upper = dataset.row_count() as i64;
            first_violation(column, |raw| {
                matches!(infer(raw), Value::Integer(i) if (0..upper).contains(&i))
            })
        }
        // Raw text length only: "NA" is two characters, the empty cell is zero
        RuleKind::LengthBetween { min, max } => first_violation(column, |raw| {
            (min..=max).contains(&raw.chars().count())
        }),
        RuleKind::OfType(expected) => {
            let profile = TypeProfile::scan(column, expected);
            (profile.unexpected, profile.dominant().map(|t| t.to_string()))
        }
    };

    Ok(RuleOutcome {
        column: rule.column.to_string(),
        expectation_type: rule.kind.expectation_type().to_string(),
        success: unexpected_count == 0,
        observed_value,
        unexpected_count,
        exception: None,
    })
}

/// Outcome recorded for a rule that could not be evaluated.
pub fn failed_outcome(rule: &RuleCheck, error: &DomainError) -> RuleOutcome {
    RuleOutcome {
        column: rule.column.to_string(),
        expectation_type: rule.kind.expectation_type().to_string(),
        success: false,
        observed_value: None,
        unexpected_count: 0,
        exception: Some(error.to_string()),
    }
}

fn first_violation<F>(column: &Column, is_valid: F) -> (usize, Option<String>)
where
    F: Fn(&str) -> bool,
{
    let mut count = 0;
    let mut first = None;
    for raw in column.cells().filter(|raw| !is_valid(*raw)) {
        count += 1;
        if first.is_none() {
            first = Some(raw.to_string());
        }
    }
    (count, first)
}

/// Per-type tallies of a column, gathered in a single pass.
struct TypeProfile {
    unexpected: usize,
    non_empty: bool,
    /// type -> (occurrences, first position)
    counts: HashMap<ValueType, (usize, usize)>,
}

impl TypeProfile {
    fn scan(column: &Column, expected: ValueType) -> Self {
        let mut profile = TypeProfile {
            unexpected: 0,
            non_empty: !column.is_empty(),
            counts: HashMap::new(),
        };
        for (pos, raw) in column.cells().enumerate() {
            let t = infer(raw).value_type();
            if t != expected {
                profile.unexpected += 1;
            }
            if t != ValueType::Null {
                profile.counts.entry(t).or_insert((0, pos)).0 += 1;
            }
        }
        profile
    }

    /// Most frequent non-null type; ties go to the type seen first.
    fn dominant(&self) -> Option<ValueType> {
        self.counts
            .iter()
            .max_by(|(_, (ca, pa)), (_, (cb, pb))| ca.cmp(cb).then(pb.cmp(pa)))
            .map(|(t, _)| *t)
            .or_else(|| self.non_empty.then_some(ValueType::Null))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::quality::rule::CUSTOMER_RULES;

    fn dataset(header: &[&str], rows: &[&[&str]]) -> Dataset {
        Dataset::from_rows(
            header.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect::<Vec<_>>()),
        )
    }

    #[test]
    fn test_index_in_row_set_passes_for_permutation() {
        let ds = dataset(&["Index"], &[&["2"], &["0"], &["1"]]);
        let outcome = evaluate(&CUSTOMER_RULES[0], &ds).unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.unexpected_count, 0);
        assert_eq!(outcome.observed_value, None);
    }

    #[test]
    fn test_index_out_of_range_is_counted() {
        let ds = dataset(&["Index"], &[&["0"], &["1"], &["3"], &["-1"]]);
        let outcome = evaluate(&CUSTOMER_RULES[0], &ds).unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.unexpected_count, 2);
        assert_eq!(outcome.observed_value.as_deref(), Some("3"));
    }

    #[test]
    fn test_customer_id_length_counts_each_violation() {
        let ds = dataset(
            &["Customer Id"],
            &[&["DD37Cf93aecA6Dc"], &[""], &["0123456789abcdef"], &["ab"]],
        );
        let outcome = evaluate(&CUSTOMER_RULES[1], &ds).unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.unexpected_count, 2);
        assert_eq!(outcome.observed_value.as_deref(), Some(""));
    }

    #[test]
    fn test_numeric_first_name_breaks_type_rule() {
        let ds = dataset(&["First Name"], &[&["Sheryl"], &["42"], &["Preston"]]);
        let outcome = evaluate(&CUSTOMER_RULES[2], &ds).unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.unexpected_count, 1);
        assert_eq!(outcome.observed_value.as_deref(), Some("string"));
    }

    #[test]
    fn test_subscription_date_type() {
        let ds = dataset(
            &["Subscription Date"],
            &[&["2020-08-24"], &["2021-04-23"], &["not a date"]],
        );
        let outcome = evaluate(&CUSTOMER_RULES[5], &ds).unwrap();
        assert_eq!(outcome.unexpected_count, 1);
        assert_eq!(outcome.observed_value.as_deref(), Some("timestamp"));
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let ds = dataset(&["Index"], &[&["0"]]);
        let err = evaluate(&CUSTOMER_RULES[3], &ds).unwrap_err();
        assert_eq!(
            err,
            DomainError::ColumnNotFound {
                column: "Last Name".into()
            }
        );
        let outcome = failed_outcome(&CUSTOMER_RULES[3], &err);
        assert!(!outcome.success);
        assert_eq!(outcome.unexpected_count, 0);
        assert_eq!(
            outcome.exception.as_deref(),
            Some("column 'Last Name' not found in dataset")
        );
    }

    #[test]
    fn test_dominant_type_tie_goes_to_first_seen() {
        let ds = dataset(&["x"], &[&["7"], &["seven"], &[""]]);
        let profile = TypeProfile::scan(ds.column("x").unwrap(), ValueType::String);
        assert_eq!(profile.unexpected, 2);
        assert_eq!(profile.dominant(), Some(ValueType::Integer));
    }

    #[test]
    fn test_all_null_column_reports_null_type() {
        let ds = dataset(&["x"], &[&["NA"], &[""]]);
        let profile = TypeProfile::scan(ds.column("x").unwrap(), ValueType::String);
        assert_eq!(profile.unexpected, 2);
        assert_eq!(profile.dominant(), Some(ValueType::Null));
    }

    #[test]
    fn test_customer_id_length_ignores_null_markers() {
        let ds = dataset(&["Customer Id"], &[&["NA"], &["None"], &[" "], &["ABC"]]);
        let outcome = evaluate(&CUSTOMER_RULES[1], &ds).unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.unexpected_count, 0);
        assert_eq!(outcome.observed_value, None);
    }
}
