//! Directive marker grammar and rendering.
//!
//! A marker has the form `REPLACE_WITH:<kind> filename:<path>` with
//! optional `language:<lang>` and `package:<pkg>` fields, all fields
//! whitespace-free tokens. Text not matching the grammar is ordinary
//! document content.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::language::language_for;

/// Package manager rendered by command directives without a `package:` field.
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// Matches a directive marker together with its trailing whitespace.
pub(crate) static DIRECTIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"REPLACE_WITH:(CodeBlock|TerminalCommand)\s+filename:(\S+)(?:\s+language:(\S+))?(?:\s+package:(\S+))?\s*",
    )
    .unwrap()
});

/// The two recognized directive kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectiveKind {
    /// Renders a `<CodeBlock />` element.
    CodeBlock,
    /// Renders a `<TerminalCommand />` element.
    TerminalCommand,
}

/// A directive marker parsed out of a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directive {
    /// Which element the marker renders to.
    pub kind: DirectiveKind,
    /// Snippet path relative to the snippets root.
    pub filename: String,
    /// Explicit language tag, overriding extension inference.
    pub language: Option<String>,
    /// Package manager tag for command directives.
    pub package: Option<String>,
}

impl Directive {
    /// Build a directive from the grammar's capture groups.
    pub(crate) fn from_captures(caps: &Captures<'_>) -> Self {
        let kind = if &caps[1] == "CodeBlock" {
            DirectiveKind::CodeBlock
        } else {
            DirectiveKind::TerminalCommand
        };
        Self {
            kind,
            filename: caps[2].to_owned(),
            language: caps.get(3).map(|m| m.as_str().to_owned()),
            package: caps.get(4).map(|m| m.as_str().to_owned()),
        }
    }

    /// Effective language tag: the explicit field when present, otherwise
    /// inferred from the snippet filename's extension.
    #[must_use]
    pub fn language_tag(&self) -> &str {
        self.language
            .as_deref()
            .unwrap_or_else(|| language_for(&self.filename))
    }

    /// Render the directive as a self-closing element embedding `content`.
    ///
    /// Backticks in `content` are escaped so the embedded fragment stays
    /// within its backtick delimiters.
    #[must_use]
    pub fn render(&self, content: &str) -> String {
        let code = escape_backticks(content);
        let language = self.language_tag();
        match self.kind {
            DirectiveKind::CodeBlock => {
                format!(r#"<CodeBlock language="{language}" code={{`{code}`}} />"#)
            }
            DirectiveKind::TerminalCommand => {
                let package = self.package.as_deref().unwrap_or(DEFAULT_PACKAGE_MANAGER);
                format!(
                    r#"<TerminalCommand packageManager="{package}" language="{language}" code={{`{code}`}} />"#
                )
            }
        }
    }
}

/// Prefix every backtick with a backslash.
fn escape_backticks(content: &str) -> String {
    content.replace('`', "\\`")
}
