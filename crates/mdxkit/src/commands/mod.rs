//! CLI command implementations.

mod expand;
mod renumber;
mod scaffold;
mod stamp;

pub(crate) use expand::ExpandArgs;
pub(crate) use renumber::RenumberArgs;
pub(crate) use scaffold::ScaffoldArgs;
pub(crate) use stamp::StampArgs;

use std::path::PathBuf;

use mdxkit_config::DocsConfig;
use tracing::debug;

use crate::scanner::Scanner;

/// Explicit targets when given, otherwise every document under the
/// configured source directory.
pub(crate) fn resolve_targets(files: Vec<PathBuf>, docs: &DocsConfig) -> Vec<PathBuf> {
    let targets = if files.is_empty() {
        Scanner::new(docs.source_dir.clone(), docs.extension.clone()).scan()
    } else {
        files
    };
    debug!(count = targets.len(), "resolved target documents");
    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_resolve_targets_prefers_explicit_files() {
        let docs = DocsConfig {
            source_dir: PathBuf::from("/nonexistent/docs"),
            snippets_dir: PathBuf::from("/nonexistent/code-blocks"),
            extension: "mdx".to_owned(),
        };

        let files = vec![PathBuf::from("a.mdx"), PathBuf::from("b.mdx")];
        let targets = resolve_targets(files.clone(), &docs);

        assert_eq!(targets, files);
    }

    #[test]
    fn test_resolve_targets_scans_source_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("guide.mdx"), "# Guide").unwrap();
        let docs = DocsConfig {
            source_dir: dir.path().to_path_buf(),
            snippets_dir: dir.path().join("code-blocks"),
            extension: "mdx".to_owned(),
        };

        let targets = resolve_targets(Vec::new(), &docs);

        assert_eq!(targets.len(), 1);
        assert!(targets[0].ends_with("guide.mdx"));
    }
}
