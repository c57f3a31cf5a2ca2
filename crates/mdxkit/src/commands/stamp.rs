//! `mdxkit stamp` command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use mdxkit_config::{CliSettings, Config};
use mdxkit_page::{assemble, set_field, split, version_from_path};
use mdxkit_vcs::FileHistory;
use tracing::debug;

use crate::commands::resolve_targets;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the stamp command.
#[derive(Args)]
pub(crate) struct StampArgs {
    /// Documents to process (default: every document under the docs source directory).
    files: Vec<PathBuf>,

    /// Docs source directory (overrides config).
    #[arg(long)]
    docs_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover mdxkit.toml).
    #[arg(short, long, env = "MDXKIT_CONFIG")]
    config: Option<PathBuf>,
}

impl StampArgs {
    /// Execute the stamp command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.docs_dir,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let history = match FileHistory::discover(Path::new(".")) {
            Ok(history) => history,
            Err(err) => {
                output.warning(&err.to_string());
                output.info("No files were updated.");
                return Ok(());
            }
        };
        debug!(workdir = %history.workdir().display(), "discovered repository");

        let targets = resolve_targets(self.files, &config.docs_resolved);
        let mut any_updated = false;

        for path in targets {
            if stamp_document(&path, &history, &config.docs_resolved.source_dir, &output) {
                any_updated = true;
            }
        }

        if any_updated {
            output.success("One or more files were updated.");
        } else {
            output.info("No files were updated.");
        }

        Ok(())
    }
}

/// Stamp one document with its last commit date; returns whether it was
/// rewritten.
///
/// Documents without a recognizable frontmatter structure are left alone.
/// The version component is looked up in the document's path relative to
/// `source_dir`; documents outside the docs tree get no version field.
fn stamp_document(path: &Path, history: &FileHistory, source_dir: &Path, output: &Output) -> bool {
    if !path.exists() {
        output.info(&format!("File not found: {}", path.display()));
        return false;
    }

    let date = match history.last_commit_date(path) {
        Ok(Some(date)) => date,
        Ok(None) => {
            output.info(&format!(
                "Could not determine last modified time for {}",
                path.display()
            ));
            return false;
        }
        Err(err) => {
            output.warning(&format!("Skipping {}: {err}", path.display()));
            return false;
        }
    };

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            output.warning(&format!("Skipping {}: {err}", path.display()));
            return false;
        }
    };

    let Some((block, body)) = split(&content) else {
        return false;
    };

    let mut block = set_field(block, "lastUpdated", &date);
    if let Some(version) = version_below(path, source_dir) {
        block = set_field(&block, "version", &version);
    }

    if let Err(err) = fs::write(path, assemble(&block, body)) {
        output.warning(&format!("Skipping {}: {err}", path.display()));
        return false;
    }

    output.info(&format!(
        "Updated lastUpdated metadata for {}",
        path.display()
    ));
    true
}

/// Version component of `path` relative to `source_dir`, if the document
/// lies inside it. Both sides are canonicalized before comparing.
fn version_below(path: &Path, source_dir: &Path) -> Option<String> {
    let absolute = fs::canonicalize(path).ok()?;
    let root = fs::canonicalize(source_dir).ok()?;
    version_from_path(absolute.strip_prefix(&root).ok()?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn commit_file(repo: &git2::Repository, relative: &str, content: &str, epoch: i64) {
        let workdir = repo.workdir().unwrap();
        let path = workdir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();

        let mut index = repo.index().unwrap();
        index.add_path(Path::new(relative)).unwrap();
        index.write().unwrap();
        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();

        let time = git2::Time::new(epoch, 0);
        let sig = git2::Signature::new("Docs Bot", "docs@example.com", &time).unwrap();
        let parents: Vec<git2::Commit<'_>> = repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok())
            .into_iter()
            .collect();
        let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, "update docs", &tree, &parent_refs)
            .unwrap();
    }

    #[test]
    fn test_stamp_document_writes_date_and_version() {
        let dir = tempfile::tempdir().unwrap();
        let repo = git2::Repository::init(dir.path()).unwrap();
        let doc = "---\ntitle: \"Guide\"\n---\n\n# Guide\n";
        commit_file(&repo, "docs/v1/guide.mdx", doc, 1_700_000_000);

        let history = FileHistory::discover(dir.path()).unwrap();
        let path = dir.path().join("docs").join("v1").join("guide.mdx");
        let updated = stamp_document(&path, &history, &dir.path().join("docs"), &Output::new());

        assert!(updated);
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("lastUpdated: \"2023-11-14\""));
        assert!(content.contains("version: \"v1\""));
        assert!(content.ends_with("---\n\n# Guide\n"));
    }

    #[test]
    fn test_stamp_document_without_version_component() {
        let dir = tempfile::tempdir().unwrap();
        let repo = git2::Repository::init(dir.path()).unwrap();
        let doc = "---\ntitle: \"Notes\"\n---\nbody\n";
        commit_file(&repo, "docs/notes.mdx", doc, 1_700_000_000);

        let history = FileHistory::discover(dir.path()).unwrap();
        let path = dir.path().join("docs").join("notes.mdx");
        let updated = stamp_document(&path, &history, &dir.path().join("docs"), &Output::new());

        assert!(updated);
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("lastUpdated: \"2023-11-14\""));
        assert!(!content.contains("version:"));
    }

    #[test]
    fn test_stamp_document_outside_source_dir_gets_no_version() {
        let dir = tempfile::tempdir().unwrap();
        let repo = git2::Repository::init(dir.path()).unwrap();
        let doc = "---\ntitle: \"Stray\"\n---\nbody\n";
        commit_file(&repo, "v9/stray.mdx", doc, 1_700_000_000);
        let source_dir = dir.path().join("docs");
        fs::create_dir_all(&source_dir).unwrap();

        let history = FileHistory::discover(dir.path()).unwrap();
        let path = dir.path().join("v9").join("stray.mdx");
        let updated = stamp_document(&path, &history, &source_dir, &Output::new());

        // The v9 ancestor sits outside the docs tree and is not a version.
        assert!(updated);
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("lastUpdated: \"2023-11-14\""));
        assert!(!content.contains("version:"));
    }

    #[test]
    fn test_stamp_document_without_frontmatter_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let repo = git2::Repository::init(dir.path()).unwrap();
        commit_file(&repo, "docs/plain.mdx", "# Plain\n", 1_700_000_000);

        let history = FileHistory::discover(dir.path()).unwrap();
        let path = dir.path().join("docs").join("plain.mdx");
        let updated = stamp_document(&path, &history, &dir.path().join("docs"), &Output::new());

        assert!(!updated);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Plain\n");
    }

    #[test]
    fn test_stamp_document_uncommitted_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        git2::Repository::init(dir.path()).unwrap();
        let path = dir.path().join("docs").join("new.mdx");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let doc = "---\ntitle: \"New\"\n---\nbody\n";
        fs::write(&path, doc).unwrap();

        let history = FileHistory::discover(dir.path()).unwrap();
        let updated = stamp_document(&path, &history, &dir.path().join("docs"), &Output::new());

        assert!(!updated);
        assert_eq!(fs::read_to_string(&path).unwrap(), doc);
    }

    #[test]
    fn test_stamp_document_missing_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        git2::Repository::init(dir.path()).unwrap();

        let history = FileHistory::discover(dir.path()).unwrap();
        let path = dir.path().join("docs").join("absent.mdx");
        let updated = stamp_document(&path, &history, &dir.path().join("docs"), &Output::new());

        assert!(!updated);
    }
}
