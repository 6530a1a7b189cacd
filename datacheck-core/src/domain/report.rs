// datacheck-core/src/domain/report.rs
//
// Pure composition of the validation report. Page geometry and fonts are the
// writer's concern (see ports::document).

use crate::domain::quality::RuleOutcome;

pub const REPORT_TITLE: &str = "Customer Data Validation Report";

/// Labels emitted for every outcome, in order.
pub const OUTCOME_LABELS: [&str; 5] = [
    "Column Name",
    "Expectation Type",
    "Success",
    "Observed Value",
    "Unexpected Count",
];

const TITLE_GAP_MM: f32 = 10.0;
const BLOCK_GAP_MM: f32 = 5.0;
const SEPARATOR_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq)]
pub enum ReportElement {
    /// Centered heading line.
    Title(String),
    /// Left-aligned body line.
    Line(String),
    /// Vertical blank space, in millimetres.
    Gap(f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub title: String,
    pub elements: Vec<ReportElement>,
}

impl ReportDocument {
    /// Every printed line, title included, in order.
    pub fn text_lines(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|e| match e {
            ReportElement::Title(t) | ReportElement::Line(t) => Some(t.as_str()),
            ReportElement::Gap(_) => None,
        })
    }

    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for element in &self.elements {
            match element {
                ReportElement::Title(t) | ReportElement::Line(t) => {
                    out.push_str(t);
                    out.push('\n');
                }
                ReportElement::Gap(_) => out.push('\n'),
            }
        }
        out
    }
}

pub fn compose_report(outcomes: &[RuleOutcome]) -> ReportDocument {
    let mut elements = Vec::with_capacity(2 + outcomes.len() * 8);
    elements.push(ReportElement::Title(REPORT_TITLE.to_string()));
    elements.push(ReportElement::Gap(TITLE_GAP_MM));

    for outcome in outcomes {
        let values = [
            outcome.column.clone(),
            outcome.expectation_type.clone(),
            outcome.success.to_string(),
            outcome.observed_display().to_string(),
            outcome.unexpected_count.to_string(),
        ];
        for (label, value) in OUTCOME_LABELS.iter().zip(values) {
            elements.push(ReportElement::Line(format!("{label}: {value}")));
        }
        elements.push(ReportElement::Gap(BLOCK_GAP_MM));
        elements.push(ReportElement::Line("-".repeat(SEPARATOR_WIDTH)));
    }

    ReportDocument {
        title: REPORT_TITLE.to_string(),
        elements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(column: &str, success: bool, observed: Option<&str>, unexpected: usize) -> RuleOutcome {
        RuleOutcome {
            column: column.into(),
            expectation_type: "expect_column_values_to_be_of_type".into(),
            success,
            observed_value: observed.map(str::to_string),
            unexpected_count: unexpected,
            exception: None,
        }
    }

    #[test]
    fn test_each_label_once_per_outcome() {
        let outcomes: Vec<RuleOutcome> = (0..6)
            .map(|i| outcome(&format!("col{i}"), true, Some("string"), 0))
            .collect();
        let doc = compose_report(&outcomes);

        for label in OUTCOME_LABELS {
            let prefix = format!("{label}:");
            let n = doc.text_lines().filter(|l| l.starts_with(&prefix)).count();
            assert_eq!(n, 6, "label {label}");
        }
        let titles = doc
            .elements
            .iter()
            .filter(|e| matches!(e, ReportElement::Title(_)))
            .count();
        assert_eq!(titles, 1);
        let separators = doc.text_lines().filter(|l| *l == "-".repeat(40)).count();
        assert_eq!(separators, 6);
    }

    #[test]
    fn test_empty_outcomes_only_title() {
        let doc = compose_report(&[]);
        assert_eq!(doc.text_lines().collect::<Vec<_>>(), vec![REPORT_TITLE]);
    }

    #[test]
    fn test_composition_is_deterministic() {
        let outcomes = vec![outcome("Index", false, Some("7"), 3)];
        assert_eq!(compose_report(&outcomes), compose_report(&outcomes));
    }

    #[test]
    fn test_block_snapshot() {
        let doc = compose_report(&[outcome("First Name", false, None, 1)]);
        insta::assert_snapshot!(doc.to_plain_text(), @r"
        Customer Data Validation Report

        Column Name: First Name
        Expectation Type: expect_column_values_to_be_of_type
        Success: false
        Observed Value: None
        Unexpected Count: 1

        ----------------------------------------
        ");
    }
}
