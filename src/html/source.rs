#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Document;

/// File names a submission may use, in order of preference.
pub const DEFAULT_CANDIDATES: [&str; 3] = ["index.html", "main.html", "assignment.html"];

/// Returns [`DEFAULT_CANDIDATES`] as owned strings.
pub fn default_candidates() -> Vec<String> {
    DEFAULT_CANDIDATES.iter().map(|c| c.to_string()).collect()
}

/// Errors raised while locating or reading a submission.
#[derive(Error, Debug)]
pub enum SourceError {
    /// None of the candidate files exist.
    #[error("No HTML file found! Looked for {candidates} in `{root}`.")]
    NotFound {
        /// Directory that was searched.
        root:       String,
        /// Comma separated candidate names.
        candidates: String,
    },
    /// The submission exists but could not be read.
    #[error("Could not read `{path}`")]
    Unreadable {
        /// The file that could not be read.
        path:   String,
        /// The underlying io error.
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Where to look for a submission, and under which names.
pub struct SubmissionPaths {
    /// Directory the submission lives in.
    root_dir:   PathBuf,
    /// Candidate file names, first existing one wins.
    candidates: Vec<String>,
}

impl SubmissionPaths {
    /// Looks for the default candidates under `root_dir`.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir:   root_dir.into(),
            candidates: default_candidates(),
        }
    }

    /// Returns a copy of these paths with a different candidate list.
    pub fn with_candidates(mut self, candidates: Vec<String>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Root directory for the submission.
    pub fn root_dir(&self) -> &Path {
        self.root_dir.as_path()
    }

    /// Candidate file names in order of preference.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Returns the first candidate that exists on disk.
    pub fn resolve(&self) -> Result<PathBuf, SourceError> {
        for name in &self.candidates {
            let path = self.root_dir.join(name);
            if path.is_file() {
                tracing::debug!("Resolved submission to {}", path.display());
                return Ok(path);
            }
            tracing::debug!("Candidate {} does not exist", path.display());
        }

        Err(SourceError::NotFound {
            root:       self.root_dir.display().to_string(),
            candidates: self.candidates.iter().map(|c| format!("`{c}`")).join(", "),
        })
    }

    /// Resolves the submission, reads it and parses it.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected, since the
    /// parser is lenient about everything else too.
    pub fn load(&self) -> Result<Document, SourceError> {
        let path = self.resolve()?;
        let bytes = std::fs::read(&path).map_err(|source| SourceError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;

        tracing::info!("Grading {}", path.display());
        Ok(Document::from_source(path, String::from_utf8_lossy(&bytes).into_owned()))
    }
}

impl Default for SubmissionPaths {
    fn default() -> Self {
        Self::new(".")
    }
}
