#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt, sync::Arc};

use anyhow::Result;

use crate::html::Document;

/// Predicate deciding whether a document satisfies a check.
pub type CheckPredicate = Arc<dyn Fn(&Document) -> Result<bool> + Send + Sync + 'static>;

#[derive(Clone)]
/// A single named, weighted requirement of the rubric.
pub struct Check {
    /// Name shown to the student.
    name:      String,
    /// Points awarded when the predicate holds.
    points:    u32,
    /// The test itself. Must only read the document.
    predicate: CheckPredicate,
}

impl Check {
    /// Creates a new check.
    ///
    /// * `name`: the requirement shown to the student
    /// * `points`: what the requirement is worth, all or nothing
    /// * `predicate`: the test, which may fail with an error
    pub fn new<F>(name: impl Into<String>, points: u32, predicate: F) -> Self
    where
        F: Fn(&Document) -> Result<bool> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            points,
            predicate: Arc::new(predicate),
        }
    }

    /// Gets the name of the check.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the points the check is worth.
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Runs the predicate against `document`. Errors are returned as-is,
    /// panics are not caught here.
    pub fn test(&self, document: &Document) -> Result<bool> {
        (self.predicate)(document)
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("name", &self.name)
            .field("points", &self.points)
            .finish()
    }
}
