//! Three-part frontmatter structure and field splicing.
//!
//! A document with frontmatter reads `---{block}---{body}`. Splitting and
//! reassembly preserve every byte outside the lines being updated, so a
//! stamped document differs from its input only in the spliced field.

use std::path::Path;

use serde::Deserialize;

/// Fields read from a frontmatter block.
///
/// All fields are optional; unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Frontmatter {
    /// Page title.
    #[serde(default)]
    pub title: Option<String>,

    /// Page description.
    #[serde(default)]
    pub description: Option<String>,

    /// Last revision date, `YYYY-MM-DD`.
    #[serde(default, rename = "lastUpdated")]
    pub last_updated: Option<String>,

    /// Docs version tag, e.g. `v1`.
    #[serde(default)]
    pub version: Option<String>,
}

impl Frontmatter {
    /// Parse the fields of a frontmatter block.
    ///
    /// Empty content yields a default instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the block is not valid YAML.
    pub fn from_yaml(content: &str) -> Result<Self, FrontmatterError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(trimmed)
            .map_err(|e| FrontmatterError::Parse(format!("Invalid YAML: {e}")))
    }
}

/// Error type for frontmatter parsing.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    /// YAML parsing error.
    #[error("{0}")]
    Parse(String),
}

/// Split a document into its frontmatter block and body.
///
/// Returns `None` when the document does not open with the `---` delimiter
/// or never closes it; such documents are left untouched by the stampers.
#[must_use]
pub fn split(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("---")?;
    let end = rest.find("---")?;
    Some((&rest[..end], &rest[end + 3..]))
}

/// Reassemble a document from the parts produced by [`split`].
#[must_use]
pub fn assemble(block: &str, body: &str) -> String {
    format!("---{block}---{body}")
}

/// Replace or insert a `key: "value"` field in a frontmatter block.
///
/// Every line whose trimmed form starts with `key:` is replaced; when no
/// such line exists the field is appended to the block. All other lines
/// pass through unchanged.
#[must_use]
pub fn set_field(block: &str, key: &str, value: &str) -> String {
    let field_line = format!("{key}: \"{value}\"");
    let prefix = format!("{key}:");
    let present = block
        .lines()
        .any(|line| line.trim_start().starts_with(&prefix));

    if present {
        block
            .split('\n')
            .map(|line| {
                if line.trim_start().starts_with(&prefix) {
                    field_line.clone()
                } else {
                    line.to_owned()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        format!("{block}\n{field_line}\n")
    }
}

/// First path component naming a docs version, e.g. `v1` in
/// `docs/v1/guide.mdx`.
#[must_use]
pub fn version_from_path(path: &Path) -> Option<String> {
    path.components().find_map(|component| {
        let name = component.as_os_str().to_str()?;
        let digits = name.strip_prefix('v')?;
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            Some(name.to_owned())
        } else {
            None
        }
    })
}
