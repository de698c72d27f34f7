//! # umm-html
//!
//! An autograder for single-file HTML assignments. The submission is parsed
//! once and graded against a fixed, weighted rubric; a perfect score is the
//! only passing outcome.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Grading configuration
pub mod config;
/// For all things related to grading
pub mod grade;
/// Locating, reading and querying the submission
pub mod html;

use anyhow::{Context, Result};
use config::GraderConfig;
use grade::{Report, Verdict, print_report, standard_rubric, verdict, write_results};

/// Locates, parses and grades the submission described by `config`.
///
/// Fails only when no submission can be found or read; problems inside
/// individual checks are part of the returned report.
pub fn grade(config: &GraderConfig) -> Result<Report> {
    let document = config
        .paths()
        .load()
        .context("Cannot grade without a submission")?;

    Ok(standard_rubric().evaluate(&document))
}

/// Grades the submission, prints the breakdown and writes any requested
/// output files.
pub fn run(config: &GraderConfig) -> Result<Verdict> {
    let report = grade(config)?;
    print_report(&report, config.show_table());

    if let Some(path) = config.results_json() {
        write_results(&report, path)?;
    }

    Ok(verdict(&report))
}
