//! Snippet directive expansion for MDX documentation.
//!
//! Scans document text for `REPLACE_WITH:` markers and rewrites each one
//! into a self-closing markup element embedding the content of an external
//! snippet file.
//!
//! # Architecture
//!
//! Expansion is a single regex pass over the whole document:
//!
//! 1. **Match** ([`Directive`]): parse the marker's kind and fields from
//!    the capture groups.
//! 2. **Resolve** ([`SnippetStore`]): load the referenced snippet from the
//!    snippets root, trimming surrounding whitespace.
//! 3. **Render** ([`Expander`]): replace the marker span with the rendered
//!    element, escaping backticks in the embedded content. Markers whose
//!    snippet cannot be loaded are left verbatim and recorded as warnings.
//!
//! # Example
//!
//! ```
//! use mdxkit_expand::Expander;
//!
//! let snippets = tempfile::tempdir().unwrap();
//! std::fs::write(snippets.path().join("demo.py"), "print(\"hi\")\n").unwrap();
//!
//! let mut expander = Expander::new(snippets.path());
//! let (output, count) = expander.expand("REPLACE_WITH:CodeBlock filename:demo.py");
//! assert_eq!(count, 1);
//! assert_eq!(output, "<CodeBlock language=\"python\" code={`print(\"hi\")`} />");
//! ```

mod directive;
mod expander;
mod language;
mod snippet;

pub use directive::{DEFAULT_PACKAGE_MANAGER, Directive, DirectiveKind};
pub use expander::Expander;
pub use language::language_for;
pub use snippet::{SnippetError, SnippetStore};
