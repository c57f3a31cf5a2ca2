//! Placeholder page templates and title derivation.

use std::path::Path;

/// Literal placeholder left in generated frontmatter until the metadata
/// stamper writes a real date.
pub const LAST_UPDATED_PLACEHOLDER: &str = "{LAST_UPDATED}";

/// Product names whose titles are not plain word-capitalizations.
const SPECIAL_TITLES: &[(&str, &str)] = &[
    ("aws bedrock", "AWS Bedrock"),
    ("aws sagemaker", "AWS Sagemaker"),
    ("azure openai", "Azure OpenAI"),
    ("google vertex ai", "Google Vertex AI"),
    ("hugging face", "Hugging Face"),
    ("mcp", "MCP"),
    ("ollama", "Ollama"),
    ("openai", "OpenAI"),
    ("openrouter", "OpenRouter"),
];

/// Render the placeholder page for `title`.
///
/// `site` names the documentation site in the description line when one is
/// configured.
#[must_use]
pub fn render_page(title: &str, site: Option<&str>) -> String {
    let description = match site {
        Some(site) => format!("{title} documentation for {site}"),
        None => format!("{title} documentation"),
    };
    format!(
        "---
title: {title}
description: {description}
lastUpdated: \"{LAST_UPDATED_PLACEHOLDER}\"
---

# {title}

Content coming soon...
"
    )
}

/// Derive a page title from a document filename.
///
/// Strips the extension, replaces hyphens with spaces, and maps `index` to
/// `Overview`. Known product names keep their trademark casing; everything
/// else gets each word capitalized.
#[must_use]
pub fn normalize_title(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    let name = stem.replace('-', " ");
    if name == "index" {
        return "Overview".to_owned();
    }

    let lowered = name.to_lowercase();
    if let Some((_, title)) = SPECIAL_TITLES.iter().find(|(key, _)| *key == lowered) {
        return (*title).to_owned();
    }

    name.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first letter, lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
