#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use bon::Builder;
use tracing::Level;

use crate::html::{SubmissionPaths, default_candidates};

/// Environment variable naming the directory the submission lives in.
pub const ROOT_ENV: &str = "UMM_HTML_ROOT";

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "UMM_HTML_LOG";

/// Parses the optional log-level environment value, defaulting to
/// `Level::INFO` when unset or unrecognised.
fn parse_log_level(val: Option<String>) -> Level {
    match val
        .map(|s| s.trim().to_ascii_lowercase())
        .as_deref()
        .unwrap_or("info")
    {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    }
}

/// Everything a grading run needs to know beyond the rubric itself.
#[derive(Debug, Clone, Builder)]
pub struct GraderConfig {
    /// Directory searched for the submission.
    #[builder(into, default = PathBuf::from("."))]
    root_dir:     PathBuf,
    /// Candidate file names, first existing one wins.
    #[builder(default = default_candidates())]
    candidates:   Vec<String>,
    /// Whether to print the overview table before the result lines.
    #[builder(default)]
    show_table:   bool,
    /// Where to write Gradescope `results.json`, if anywhere.
    #[builder(into)]
    results_json: Option<PathBuf>,
    /// Most verbose level that gets logged.
    #[builder(default = Level::INFO)]
    log_level:    Level,
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GraderConfig {
    /// Defaults, overridden by `UMM_HTML_ROOT` and `UMM_HTML_LOG` when set.
    pub fn from_env() -> Self {
        let root_dir = std::env::var(ROOT_ENV)
            .ok()
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self::builder()
            .maybe_root_dir(root_dir)
            .log_level(parse_log_level(std::env::var(LOG_ENV).ok()))
            .build()
    }

    /// Directory searched for the submission.
    pub fn root_dir(&self) -> &Path {
        self.root_dir.as_path()
    }

    /// Returns a copy of this configuration searching `root_dir` instead.
    pub fn with_root_dir(mut self, root_dir: impl Into<PathBuf>) -> Self {
        self.root_dir = root_dir.into();
        self
    }

    /// Candidate file names in order of preference.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Whether to print the overview table.
    pub fn show_table(&self) -> bool {
        self.show_table
    }

    /// Returns a copy of this configuration with the table toggled.
    pub fn with_show_table(mut self, show_table: bool) -> Self {
        self.show_table = show_table;
        self
    }

    /// Where to write `results.json`, if anywhere.
    pub fn results_json(&self) -> Option<&Path> {
        self.results_json.as_deref()
    }

    /// Returns a copy of this configuration writing `results.json` to `path`.
    pub fn with_results_json(mut self, path: impl Into<PathBuf>) -> Self {
        self.results_json = Some(path.into());
        self
    }

    /// Most verbose level that gets logged.
    pub fn log_level(&self) -> Level {
        self.log_level
    }

    /// Where and under which names to look for the submission.
    pub fn paths(&self) -> SubmissionPaths {
        SubmissionPaths::new(self.root_dir.clone()).with_candidates(self.candidates.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_falls_back_to_info() {
        assert_eq!(parse_log_level(None), Level::INFO);
        assert_eq!(parse_log_level(Some(" DEBUG ".into())), Level::DEBUG);
        assert_eq!(parse_log_level(Some("loud".into())), Level::INFO);
    }

    #[test]
    fn defaults_search_current_directory_for_standard_names() {
        let config = GraderConfig::default();
        assert_eq!(config.root_dir(), Path::new("."));
        assert_eq!(config.candidates(), ["index.html", "main.html", "assignment.html"]);
        assert!(!config.show_table());
        assert!(config.results_json().is_none());
    }

    #[test]
    fn overrides_replace_defaults() {
        let config = GraderConfig::builder()
            .root_dir("submission")
            .show_table(true)
            .build()
            .with_results_json("results.json");
        assert_eq!(config.paths().root_dir(), Path::new("submission"));
        assert!(config.show_table());
        assert_eq!(config.results_json(), Some(Path::new("results.json")));
    }
}
