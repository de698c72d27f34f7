#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Check definitions.
pub mod check;
/// Running checks and totalling their results.
pub mod engine;
/// Gradescope `results.json` output.
pub mod gradescope;
/// Console and table rendering, and the exit verdict.
pub mod report;
/// Shared grade result types.
pub mod results;
/// The fixed rubric.
pub mod rubric;

pub use check::{Check, CheckPredicate};
pub use engine::{Rubric, evaluate, log_panics, run_check};
pub use gradescope::{GradescopeStatus, GradescopeSubmission, GradescopeTestCase, write_results};
pub use report::{Verdict, print_report, render, verdict};
pub use results::{CheckResult, Grade, Outcome, Report};
pub use rubric::standard_rubric;
