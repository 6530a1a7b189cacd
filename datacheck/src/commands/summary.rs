// datacheck/src/commands/summary.rs
//
// Console table of the rule outcomes, printed after the run.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use datacheck_core::domain::quality::RuleOutcome;

pub fn outcome_table(outcomes: &[RuleOutcome]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Column",
            "Expectation",
            "Result",
            "Observed",
            "Unexpected",
        ]);

    for o in outcomes {
        let result = if o.success {
            Cell::new("PASS").fg(Color::Green)
        } else {
            Cell::new("FAIL").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(&o.column),
            Cell::new(&o.expectation_type),
            result,
            Cell::new(o.observed_display()),
            Cell::new(o.unexpected_count),
        ]);
    }
    table
}
