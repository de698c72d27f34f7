#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Parsed submission wrapper.
pub mod document;
/// Locating and reading the submission file.
pub mod source;

pub use document::Document;
pub use source::{DEFAULT_CANDIDATES, SourceError, SubmissionPaths, default_candidates};
