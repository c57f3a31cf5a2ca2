//! Document discovery by filesystem walking.
//!
//! Discovery only identifies paths; the commands read and transform the
//! files themselves.

use std::fs;
use std::path::{Path, PathBuf};

/// Discovers documentation files by walking the filesystem.
pub(crate) struct Scanner {
    source_dir: PathBuf,
    extension: String,
}

impl Scanner {
    /// Create a new scanner for files carrying `extension`.
    pub(crate) fn new(source_dir: PathBuf, extension: String) -> Self {
        Self {
            source_dir,
            extension,
        }
    }

    /// Scan the filesystem and return document paths in sorted order.
    ///
    /// Returns an empty Vec if the source directory doesn't exist.
    pub(crate) fn scan(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if self.source_dir.exists() {
            self.scan_directory(&self.source_dir, &mut paths);
        }
        paths.sort();
        paths
    }

    /// Collect matching files, recursing into subdirectories.
    fn scan_directory(&self, dir_path: &Path, paths: &mut Vec<PathBuf>) {
        let Ok(entries) = fs::read_dir(dir_path) else {
            return;
        };

        for entry in entries.filter_map(Result::ok) {
            // Skip hidden files/dirs
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }

            let path = entry.path();
            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                self.scan_directory(&path, paths);
            } else if path.extension().is_some_and(|e| e == self.extension.as_str()) {
                paths.push(path);
            }
        }
    }
}
