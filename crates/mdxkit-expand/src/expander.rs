//! Whole-document directive expansion.

use std::path::PathBuf;

use crate::directive::{DIRECTIVE_RE, Directive};
use crate::snippet::SnippetStore;

/// Expands directive markers across whole documents.
///
/// One expander can process any number of documents. Markers whose snippet
/// cannot be loaded are passed through unchanged and recorded as warnings;
/// [`Expander::take_warnings`] drains them after each document.
#[derive(Debug)]
pub struct Expander {
    store: SnippetStore,
    warnings: Vec<String>,
}

impl Expander {
    /// Create an expander resolving snippets under `snippets_dir`.
    pub fn new(snippets_dir: impl Into<PathBuf>) -> Self {
        Self {
            store: SnippetStore::new(snippets_dir),
            warnings: Vec::new(),
        }
    }

    /// Replace every resolvable directive marker in `input`.
    ///
    /// Returns the transformed text and the number of substitutions made.
    /// Unresolved markers keep their original text and do not count, so a
    /// zero count means the document needs no rewrite.
    pub fn expand(&mut self, input: &str) -> (String, usize) {
        let mut count = 0;
        let store = &self.store;
        let warnings = &mut self.warnings;
        let output = DIRECTIVE_RE.replace_all(input, |caps: &regex::Captures| {
            let directive = Directive::from_captures(caps);
            match store.load(&directive.filename) {
                Ok(content) => {
                    count += 1;
                    directive.render(&content)
                }
                Err(err) => {
                    warnings.push(err.to_string());
                    caps[0].to_owned()
                }
            }
        });
        tracing::debug!(count, "expanded document");
        (output.into_owned(), count)
    }

    /// Warnings collected since the last drain.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Drain the collected warnings.
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }
}
