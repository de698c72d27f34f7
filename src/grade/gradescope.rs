#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::{
    report::summary_line,
    results::{CheckResult, Report},
};

/// Represents visibility settings for Gradescope submissions and test cases.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GradescopeVisibility {
    /// Hidden from students.
    Hidden,
    /// Visible after the due date of the assignment.
    AfterDueDate,
    /// Visible after the grades are published.
    AfterPublished,
    /// Always visible to students.
    Visible,
}

/// Represents the status of a test case in Gradescope submissions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GradescopeStatus {
    /// Indicates the test case passed successfully.
    Passed,
    /// Indicates the test case failed.
    Failed,
}

/// Represents the overall submission data.
#[derive(Serialize, Deserialize, Debug, TypedBuilder)]
#[builder(field_defaults(default, setter(into)))]
#[builder(doc)]
pub struct GradescopeSubmission {
    /// Optional overall score. Overrides total of test cases if specified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Optional text relevant to the entire submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Optional visibility setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<GradescopeVisibility>,

    /// Optional test cases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tests: Option<Vec<GradescopeTestCase>>,
}

/// Represents an individual test case.
#[derive(Serialize, Deserialize, Debug, TypedBuilder)]
#[builder(field_defaults(default, setter(into)))]
#[builder(doc)]
pub struct GradescopeTestCase {
    /// Optional score for the test case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Optional maximum score for the test case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,

    /// Optional status of the test case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GradescopeStatus>,

    /// Optional name of the test case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Optional number for the test case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    /// Optional detailed output for the test case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Optional visibility setting for the test case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<GradescopeVisibility>,
}

impl From<(usize, &CheckResult)> for GradescopeTestCase {
    fn from((index, result): (usize, &CheckResult)) -> Self {
        GradescopeTestCase::builder()
            .name(result.name().to_string())
            .number((index + 1).to_string())
            .score(f64::from(result.points_awarded()))
            .max_score(f64::from(result.points()))
            .status(if result.passed() {
                GradescopeStatus::Passed
            } else {
                GradescopeStatus::Failed
            })
            .output(result.failure_reason().map(str::to_string))
            .visibility(GradescopeVisibility::Visible)
            .build()
    }
}

/// Converts a report into a Gradescope `results.json` submission.
pub fn submission(report: &Report) -> GradescopeSubmission {
    let tests: Vec<GradescopeTestCase> = report
        .results()
        .iter()
        .enumerate()
        .map(GradescopeTestCase::from)
        .collect();

    GradescopeSubmission::builder()
        .score(report.total_awarded() as f64)
        .output(summary_line(report))
        .visibility(GradescopeVisibility::Visible)
        .tests(tests)
        .build()
}

/// Writes the report as Gradescope `results.json` to `path`.
pub fn write_results(report: &Report, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&submission(report))
        .context("Failed to serialize grading results")?;
    fs::write(path, json).with_context(|| format!("Could not write {}", path.display()))?;
    tracing::info!("Wrote results to {}", path.display());
    Ok(())
}
