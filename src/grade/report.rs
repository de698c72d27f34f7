#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::process::ExitCode;

use colored::Colorize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, Width, object::Rows},
};

use super::{
    engine::Rubric,
    results::{CheckResult, Outcome, Report},
};

/// Whether a run should be reported to CI as a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every point was awarded.
    Success,
    /// Anything less than a perfect score, or nothing to grade.
    Failure,
}

impl Verdict {
    /// The process exit status for this verdict.
    pub fn code(self) -> u8 {
        match self {
            Verdict::Success => 0,
            Verdict::Failure => 1,
        }
    }
}

impl From<Verdict> for ExitCode {
    fn from(verdict: Verdict) -> Self {
        ExitCode::from(verdict.code())
    }
}

/// Success only for a perfect score on a non-empty rubric.
pub fn verdict(report: &Report) -> Verdict {
    if report.total_possible() > 0 && report.total_awarded() == report.total_possible() {
        Verdict::Success
    } else {
        Verdict::Failure
    }
}

/// One console line for a result, without color.
pub fn result_line(result: &CheckResult) -> String {
    match result.outcome() {
        Outcome::Passed => format!("✅ {} ({} points)", result.name(), result.points()),
        Outcome::Failed => format!("❌ {} (0 points)", result.name()),
        Outcome::Errored(reason) => {
            format!("❌ {} - Error: {} (0 points)", result.name(), reason)
        }
    }
}

/// The final score line.
pub fn summary_line(report: &Report) -> String {
    let grade = report.grade();
    format!("📊 Final Score: {} ({}%)", grade, grade.percentage())
}

/// Every result line followed by the summary, as printed to the console.
pub fn render(report: &Report) -> String {
    let mut lines: Vec<String> = report.results().iter().map(result_line).collect();
    lines.push(String::new());
    lines.push(summary_line(report));
    lines.join("\n")
}

#[derive(Tabled)]
/// A row of the overview table
struct ResultRow {
    #[tabled(rename = "Requirement")]
    /// * `requirement`: name of the check
    requirement: String,
    #[tabled(rename = "Grade")]
    /// * `grade`: points awarded out of points possible
    grade:       String,
    #[tabled(rename = "Status")]
    /// * `status`: passed, failed or errored
    status:      String,
    #[tabled(rename = "Reason")]
    /// * `reason`: why the check errored, if it did
    reason:      String,
}

impl From<&CheckResult> for ResultRow {
    fn from(result: &CheckResult) -> Self {
        Self {
            requirement: result.name().to_string(),
            grade:       result.grade().to_string(),
            status:      result.outcome().to_string(),
            reason:      result.failure_reason().unwrap_or_default().to_string(),
        }
    }
}

/// Renders the results as a boxed table with a total in the footer.
pub fn overview_table(report: &Report) -> String {
    let rows: Vec<ResultRow> = report.results().iter().map(ResultRow::from).collect();

    Table::new(&rows)
        .with(Panel::header("Grading Overview"))
        .with(Panel::footer(format!("Total: {}", report.grade())))
        .with(Modify::new(Rows::new(1..)).with(Width::wrap(32).keep_words(true)))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(
            Modify::new(Rows::last())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Style::modern())
        .to_string()
}

/// Lists the checks of a rubric and what each is worth.
pub fn render_rubric(rubric: &Rubric) -> String {
    let mut lines: Vec<String> = rubric
        .checks()
        .iter()
        .enumerate()
        .map(|(i, check)| format!("{}. {} ({} points)", i + 1, check.name(), check.points()))
        .collect();
    lines.push(format!("Total: {} points", rubric.total_possible()));
    lines.join("\n")
}

/// Prints the report to stdout, optionally preceded by the overview table.
pub fn print_report(report: &Report, show_table: bool) {
    if show_table {
        println!("{}", overview_table(report));
    }

    for result in report.results() {
        let line = result_line(result);
        if result.passed() {
            println!("{}", line.green());
        } else {
            println!("{}", line.red());
        }
    }

    println!("\n{}", summary_line(report).bold());
}
