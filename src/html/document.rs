#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    fmt::Formatter,
    path::{Path, PathBuf},
};

use anyhow::{Result, anyhow};
use scraper::{ElementRef, Html, Selector};

/// The doctype every submission is expected to declare, compared
/// case-insensitively against the raw markup.
pub const HTML5_DOCTYPE: &str = "<!doctype html>";

/// Whether `element` sits inside a `<template>`, whose contents are inert and
/// not part of the rendered document.
fn in_template(element: &ElementRef<'_>) -> bool {
    element
        .ancestors()
        .any(|node| node.value().as_element().is_some_and(|e| e.name() == "template"))
}

/// A struct that wraps a parsed HTML tree and the markup it was parsed from
pub struct Document {
    /// the raw markup
    code:   String,
    /// the parse tree
    tree:   Html,
    /// the file the markup was read from, if any
    source: Option<PathBuf>,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("source", &self.source)
            .field("len", &self.code.len())
            .finish()
    }
}

impl Document {
    /// Parses markup that did not come from a submission file.
    ///
    /// * `source_code`: the markup to be parsed
    pub fn new(source_code: String) -> Self {
        let tree = Html::parse_document(&source_code);
        Self {
            code: source_code,
            tree,
            source: None,
        }
    }

    /// Parses markup that was read from `path`.
    pub fn from_source(path: impl Into<PathBuf>, source_code: String) -> Self {
        Self {
            source: Some(path.into()),
            ..Self::new(source_code)
        }
    }

    /// A getter for the raw markup
    pub fn code(&self) -> &str {
        self.code.as_str()
    }

    /// The file this document was read from, `None` for in-memory markup.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// A getter for the parse tree
    pub fn tree(&self) -> &Html {
        &self.tree
    }

    /// Whether the raw markup carries an HTML5 doctype declaration.
    pub fn has_doctype(&self) -> bool {
        self.code.to_lowercase().contains(HTML5_DOCTYPE)
    }

    /// Applies a CSS selector and returns every matching element in document
    /// order, skipping anything inside a `<template>`.
    ///
    /// * `selector`: the CSS selector to be applied
    pub fn select(&self, selector: &str) -> Result<Vec<ElementRef<'_>>> {
        let compiled = Selector::parse(selector)
            .map_err(|e| anyhow!("Failed to compile CSS selector `{selector}`: {e:?}"))?;

        Ok(self
            .tree
            .select(&compiled)
            .filter(|element| !in_template(element))
            .collect())
    }

    /// Number of elements matching `selector`.
    pub fn count(&self, selector: &str) -> Result<usize> {
        Ok(self.select(selector)?.len())
    }

    /// Whether at least one element matches `selector`.
    pub fn has(&self, selector: &str) -> Result<bool> {
        Ok(self.count(selector)? > 0)
    }
}
