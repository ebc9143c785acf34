//! Plain-text summary generation.
//!
//! Renders the line-oriented summary printed after a scan: the total
//! count, one line per case in case order, and the verdict marker.

use crate::analysis::{summarize, Summary, VerdictRules};
use crate::models::TestOutcome;
use std::io::{self, Write};

/// Generate the full summary text for an aggregated run.
pub fn generate_text_summary(summary: &Summary) -> String {
    let mut output = String::new();

    output.push_str(&format!("Total result count: {}\n", summary.total));

    for outcome in &summary.outcomes {
        output.push_str(&format!("{}\n", outcome));
    }

    output.push_str(summary.verdict.marker());
    output.push('\n');

    output
}

/// Summarize outcomes and write the report to `out`.
pub fn write_summary<W: Write>(
    outcomes: Vec<TestOutcome>,
    rules: &VerdictRules,
    out: &mut W,
) -> io::Result<Summary> {
    let summary = summarize(outcomes, rules);
    out.write_all(generate_text_summary(&summary).as_bytes())?;
    out.flush()?;
    Ok(summary)
}
