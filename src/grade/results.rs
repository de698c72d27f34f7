#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use bon::Builder;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A struct representing a grade
pub struct Grade {
    /// The points received
    pub awarded:  u64,
    /// The maximum points possible
    pub possible: u64,
}

impl Grade {
    /// Creates a new grade -
    /// * `awarded` - The points received
    /// * `possible` - The maximum points possible
    pub fn new(awarded: u64, possible: u64) -> Self {
        Self { awarded, possible }
    }

    /// Percentage of possible points awarded, rounded to the nearest integer
    /// with halves rounding up. A grade out of zero is `0`.
    pub fn percentage(&self) -> u64 {
        if self.possible == 0 {
            return 0;
        }
        let (awarded, possible) = (u128::from(self.awarded), u128::from(self.possible));
        ((awarded * 200 + possible) / (possible * 2)) as u64
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.awarded, self.possible)
    }
}

/// How a single check went.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum Outcome {
    /// The predicate held.
    Passed,
    /// The predicate did not hold.
    Failed,
    /// The predicate could not be evaluated.
    Errored(String),
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Passed => write!(f, "passed"),
            Outcome::Failed => write!(f, "failed"),
            Outcome::Errored(_) => write!(f, "errored"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
/// The result of running one check against one document
pub struct CheckResult {
    /// * `name`: the check that was run
    name:    String,
    /// * `points`: what the check was worth
    points:  u32,
    /// * `outcome`: what happened
    outcome: Outcome,
}

impl CheckResult {
    /// Name of the check this result is for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Points the check was worth.
    pub fn points(&self) -> u32 {
        self.points
    }

    /// What happened when the check ran.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Whether the check passed.
    pub fn passed(&self) -> bool {
        matches!(self.outcome, Outcome::Passed)
    }

    /// All of the check's points if it passed, none otherwise.
    pub fn points_awarded(&self) -> u32 {
        if self.passed() { self.points } else { 0 }
    }

    /// Why the check could not be evaluated, if it errored.
    pub fn failure_reason(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Errored(reason) => Some(reason),
            _ => None,
        }
    }

    /// Points awarded out of points possible for this check.
    pub fn grade(&self) -> Grade {
        Grade::new(u64::from(self.points_awarded()), u64::from(self.points))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// The ordered results of one grading run and their totals
pub struct Report {
    /// One result per check, in rubric order
    results:        Vec<CheckResult>,
    /// Sum of awarded points
    total_awarded:  u64,
    /// Sum of every check's points
    total_possible: u64,
}

impl Report {
    /// Builds a report from completed results, deriving both totals from
    /// them.
    pub fn from_results(results: Vec<CheckResult>) -> Self {
        let (total_awarded, total_possible) = results
            .iter()
            .fold((0u64, 0u64), |acc, r| {
                (acc.0 + u64::from(r.points_awarded()), acc.1 + u64::from(r.points()))
            });

        Self {
            results,
            total_awarded,
            total_possible,
        }
    }

    /// Results in rubric order.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Total points awarded.
    pub fn total_awarded(&self) -> u64 {
        self.total_awarded
    }

    /// Total points possible.
    pub fn total_possible(&self) -> u64 {
        self.total_possible
    }

    /// The overall grade.
    pub fn grade(&self) -> Grade {
        Grade::new(self.total_awarded, self.total_possible)
    }

    /// Whether every check passed. Vacuously true for an empty rubric.
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(CheckResult::passed)
    }
}
