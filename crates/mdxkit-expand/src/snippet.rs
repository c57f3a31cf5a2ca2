//! Snippet resource lookup.
//!
//! Snippets are plain text files under a single root directory, referenced
//! from directive markers by relative path.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Failure to resolve a directive's snippet reference.
///
/// Callers report these as warnings; neither variant aborts a document
/// pass.
#[derive(Debug, thiserror::Error)]
pub enum SnippetError {
    /// The referenced file does not exist under the snippets root.
    #[error("snippet file '{name}' not found in {}", .root.display())]
    NotFound {
        /// Path as written in the directive.
        name: String,
        /// Snippets root the lookup ran against.
        root: PathBuf,
    },
    /// The file exists but could not be read as text.
    #[error("failed to read snippet file '{name}': {source}")]
    Unreadable {
        /// Path as written in the directive.
        name: String,
        /// Underlying read failure.
        #[source]
        source: io::Error,
    },
}

/// Read-only store of snippet files under a fixed root.
#[derive(Clone, Debug)]
pub struct SnippetStore {
    root: PathBuf,
}

impl SnippetStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Load a snippet by the path written in a directive, trimming
    /// surrounding whitespace from its content.
    pub fn load(&self, name: &str) -> Result<String, SnippetError> {
        let path = self.root.join(name);
        if !path.is_file() {
            return Err(SnippetError::NotFound {
                name: name.to_owned(),
                root: self.root.clone(),
            });
        }
        match fs::read_to_string(&path) {
            Ok(content) => Ok(content.trim().to_owned()),
            Err(source) => Err(SnippetError::Unreadable {
                name: name.to_owned(),
                source,
            }),
        }
    }
}
