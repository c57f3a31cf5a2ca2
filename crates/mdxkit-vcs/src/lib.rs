//! Git-aware file metadata.
//!
//! Answers one question for the metadata stamper: when was a work-tree
//! file last changed in committed history? The answer is the date of the
//! most recent commit (first-parent history, newest first) whose tree
//! carries a different blob for the file than its parent does, formatted
//! `YYYY-MM-DD` in the commit's recorded timezone. Files with no committed
//! history are a valid `None` outcome, not an error.

use std::path::{Path, PathBuf};

use git2::{ErrorCode, Repository, Sort};

/// Version-control query error.
///
/// Per-file "no history" is not an error; these cover repository-level
/// failures.
#[derive(Debug, thiserror::Error)]
pub enum VcsError {
    /// No repository encloses the starting directory.
    #[error("no git repository found from {}: {source}", .path.display())]
    Discover {
        /// Directory the discovery started from.
        path: PathBuf,
        /// Underlying discovery failure.
        source: git2::Error,
    },
    /// The repository is bare.
    #[error("repository has no work tree")]
    NoWorkTree,
    /// The queried file is not under the repository work tree.
    #[error("{} is outside the repository work tree", .path.display())]
    OutsideWorkTree {
        /// File the query was made for.
        path: PathBuf,
    },
    /// I/O error resolving a path.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Underlying git operation failed.
    #[error("git error: {0}")]
    Git(#[from] git2::Error),
}

/// Read-only history lookup for files under one repository work tree.
pub struct FileHistory {
    repo: Repository,
    workdir: PathBuf,
}

impl FileHistory {
    /// Discover the repository enclosing `start` and bind to its work tree.
    pub fn discover(start: &Path) -> Result<Self, VcsError> {
        let repo = Repository::discover(start).map_err(|source| VcsError::Discover {
            path: start.to_path_buf(),
            source,
        })?;
        let workdir = repo
            .workdir()
            .ok_or(VcsError::NoWorkTree)?
            .to_path_buf()
            .canonicalize()?;
        Ok(Self { repo, workdir })
    }

    /// The canonicalized work-tree root.
    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Date of the most recent commit that changed `file`.
    ///
    /// Returns `Ok(None)` for files with no committed history, including
    /// files in a repository whose `HEAD` is unborn.
    pub fn last_commit_date(&self, file: &Path) -> Result<Option<String>, VcsError> {
        let relative = self.work_tree_path(file)?;

        // Revwalk reports an unborn HEAD as a generic reference error;
        // Repository::head tells the cases apart.
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(err) if matches!(err.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };
        let Some(target) = head.target() else {
            return Ok(None);
        };

        let mut walk = self.repo.revwalk()?;
        walk.push(target)?;
        walk.set_sorting(Sort::TIME)?;
        walk.simplify_first_parent()?;

        for oid in walk {
            let commit = self.repo.find_commit(oid?)?;
            let Some(blob) = blob_id(&commit.tree()?, &relative) else {
                continue;
            };
            let parent_blob = match commit.parent(0) {
                Ok(parent) => blob_id(&parent.tree()?, &relative),
                Err(_) => None,
            };
            if parent_blob != Some(blob) {
                tracing::debug!(
                    file = %relative.display(),
                    commit = %commit.id(),
                    "found last change"
                );
                return Ok(commit_date(&commit));
            }
        }
        Ok(None)
    }

    /// Resolve `file` to its path relative to the work-tree root.
    fn work_tree_path(&self, file: &Path) -> Result<PathBuf, VcsError> {
        let absolute = file.canonicalize()?;
        absolute
            .strip_prefix(&self.workdir)
            .map(Path::to_path_buf)
            .map_err(|_| VcsError::OutsideWorkTree {
                path: file.to_path_buf(),
            })
    }
}

/// Blob id of `path` in `tree`, if the tree carries it.
fn blob_id(tree: &git2::Tree<'_>, path: &Path) -> Option<git2::Oid> {
    tree.get_path(path).ok().map(|entry| entry.id())
}

/// Commit time as `YYYY-MM-DD` in the commit's recorded offset.
fn commit_date(commit: &git2::Commit<'_>) -> Option<String> {
    let time = commit.time();
    let utc = chrono::DateTime::from_timestamp(time.seconds(), 0)?;
    let date = match chrono::FixedOffset::east_opt(time.offset_minutes() * 60) {
        Some(offset) => utc.with_timezone(&offset).format("%Y-%m-%d").to_string(),
        None => utc.format("%Y-%m-%d").to_string(),
    };
    Some(date)
}
