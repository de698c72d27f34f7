#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::panic::{self, AssertUnwindSafe};

use super::{
    check::Check,
    results::{CheckResult, Outcome, Report},
};
use crate::html::Document;

/// Turns a panic payload into something a student can read.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("check panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("check panicked: {message}")
    } else {
        "check panicked".to_string()
    }
}

/// Routes panic messages to the `debug` log instead of stderr.
///
/// A panicking predicate is already reported through its
/// [`Outcome::Errored`] reason, so the default hook would only print the
/// same message again in the middle of the rubric breakdown. Installed once
/// by the binary before grading.
pub fn log_panics() {
    panic::set_hook(Box::new(|info| tracing::debug!("{info}")));
}

/// Runs one check against `document`.
///
/// Whatever the predicate does, exactly one result comes back: an error or a
/// panic inside the predicate becomes [`Outcome::Errored`].
pub fn run_check(check: &Check, document: &Document) -> CheckResult {
    let outcome = match panic::catch_unwind(AssertUnwindSafe(|| check.test(document))) {
        Ok(Ok(true)) => Outcome::Passed,
        Ok(Ok(false)) => Outcome::Failed,
        Ok(Err(e)) => {
            tracing::warn!("Check `{}` could not be evaluated: {e:#}", check.name());
            Outcome::Errored(format!("{e:#}"))
        }
        Err(payload) => {
            let reason = panic_message(payload.as_ref());
            tracing::warn!("Check `{}` could not be evaluated: {reason}", check.name());
            Outcome::Errored(reason)
        }
    };

    tracing::debug!("Check `{}`: {outcome}", check.name());
    CheckResult::builder()
        .name(check.name())
        .points(check.points())
        .outcome(outcome)
        .build()
}

/// Runs every check, in order, against `document` and totals the results.
pub fn evaluate(document: &Document, checks: &[Check]) -> Report {
    Report::from_results(checks.iter().map(|check| run_check(check, document)).collect())
}

#[derive(Debug, Clone)]
/// An ordered list of checks, fixed once built
pub struct Rubric {
    /// The checks, in the order they are run and reported
    checks:         Vec<Check>,
    /// Sum of every check's points
    total_possible: u64,
}

impl Rubric {
    /// Creates a rubric from checks in the order they should run.
    pub fn new(checks: Vec<Check>) -> Self {
        let total_possible = checks.iter().map(|c| u64::from(c.points())).sum();
        Self {
            checks,
            total_possible,
        }
    }

    /// The checks in order.
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Points available across the whole rubric.
    pub fn total_possible(&self) -> u64 {
        self.total_possible
    }

    /// Grades `document` against this rubric.
    pub fn evaluate(&self, document: &Document) -> Report {
        evaluate(document, &self.checks)
    }
}
