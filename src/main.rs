#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # umm-html
//!
//! Grades an HTML assignment against a fixed rubric. Run it in the directory
//! containing `index.html`, `main.html` or `assignment.html`; the process
//! exits successfully only for a perfect score.

use std::{path::PathBuf, process::ExitCode};

use bpaf::*;
use dotenvy::dotenv;
use tracing::metadata::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};
use umm_html::{
    config::GraderConfig,
    grade::{Verdict, log_panics, report::render_rubric, standard_rubric},
};

/// Options for a grading run.
#[derive(Debug, Clone)]
struct GradeArgs {
    /// Directory containing the submission
    root:         Option<PathBuf>,
    /// Print the overview table
    table:        bool,
    /// Where to write Gradescope results
    results_json: Option<PathBuf>,
}

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Grade the submission
    Grade(GradeArgs),
    /// Print the rubric
    Rubric,
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses grading options
    fn g() -> impl Parser<GradeArgs> {
        let root = long("root")
            .help("Directory containing the submission")
            .argument::<PathBuf>("DIR")
            .optional();
        let table = long("table").help("Print an overview table").switch();
        let results_json = long("results-json")
            .help("Write Gradescope results.json to PATH")
            .argument::<PathBuf>("PATH")
            .optional();

        construct!(GradeArgs {
            root,
            table,
            results_json
        })
    }

    let grade = construct!(Cmd::Grade(g()))
        .to_options()
        .command("grade")
        .help("Grade the HTML submission");

    let rubric = pure(Cmd::Rubric)
        .to_options()
        .command("rubric")
        .help("Print the rubric and what each requirement is worth");

    let plain = g().map(Cmd::Grade);

    let cmd = construct!([grade, rubric, plain]);

    cmd.to_options()
        .descr("Autograder for HTML assignments")
        .run()
}

/// Applies command line overrides on top of the environment configuration.
fn configure(args: GradeArgs) -> GraderConfig {
    let mut config = GraderConfig::from_env().with_show_table(args.table);
    if let Some(root) = args.root {
        config = config.with_root_dir(root);
    }
    if let Some(path) = args.results_json {
        config = config.with_results_json(path);
    }
    config
}

fn main() -> ExitCode {
    dotenv().ok();

    let cmd = options();
    let log_level = GraderConfig::from_env().log_level();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    let filter_layer = LevelFilter::from_level(log_level);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();
    log_panics();

    match cmd {
        Cmd::Grade(args) => match umm_html::run(&configure(args)) {
            Ok(verdict) => verdict.into(),
            Err(e) => {
                eprintln!("{e:#}");
                Verdict::Failure.into()
            }
        },
        Cmd::Rubric => {
            println!("{}", render_rubric(&standard_rubric()));
            ExitCode::SUCCESS
        }
    }
}
