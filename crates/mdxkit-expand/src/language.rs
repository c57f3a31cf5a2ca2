//! Language inference from snippet file extensions.

use std::path::Path;

/// Extension to language tag map, consulted when a directive carries no
/// explicit `language:` field.
const LANGUAGES: &[(&str, &str)] = &[
    ("sh", "bash"),
    ("py", "python"),
    ("js", "javascript"),
    ("ts", "typescript"),
];

/// Infer the language tag for a snippet filename.
///
/// Unmapped or missing extensions yield an empty tag, which renders as
/// `language=""` and is a valid outcome.
#[must_use]
pub fn language_for(filename: &str) -> &'static str {
    let Some(extension) = Path::new(filename).extension().and_then(|e| e.to_str()) else {
        return "";
    };
    LANGUAGES
        .iter()
        .find(|(ext, _)| extension.eq_ignore_ascii_case(ext))
        .map_or("", |(_, language)| language)
}
