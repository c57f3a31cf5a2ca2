//! `mdxkit scaffold` command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use mdxkit_config::{CliSettings, Config};
use mdxkit_page::{Frontmatter, normalize_title, render_page, split};

use crate::commands::resolve_targets;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the scaffold command.
#[derive(Args)]
pub(crate) struct ScaffoldArgs {
    /// Documents to process (default: every document under the docs source directory).
    files: Vec<PathBuf>,

    /// Docs source directory (overrides config).
    #[arg(long)]
    docs_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover mdxkit.toml).
    #[arg(short, long, env = "MDXKIT_CONFIG")]
    config: Option<PathBuf>,
}

impl ScaffoldArgs {
    /// Execute the scaffold command.
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
        let site = config.site.name.as_deref();

        let targets = resolve_targets(self.files, &config.docs_resolved);
        for path in targets {
            scaffold_document(&path, site, &output);
        }

        Ok(())
    }
}

/// Fill `path` with a placeholder page when it is empty or its frontmatter
/// lacks a `lastUpdated` field. Established documents are left alone.
fn scaffold_document(path: &Path, site: Option<&str>, output: &Output) {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            output.warning(&format!("Skipping {}: {err}", path.display()));
            return;
        }
    };

    if content.is_empty() {
        if write_page(path, &title_for(path), site, output) {
            output.info(&format!("Created template for: {}", path.display()));
        }
        return;
    }

    if has_last_updated(&content) {
        return;
    }

    // Keep the page's own title when it has one.
    let title = existing_title(&content).unwrap_or_else(|| title_for(path));
    if write_page(path, &title, site, output) {
        output.info(&format!("Updated template for: {}", path.display()));
    }
}

/// Whether the document's frontmatter carries a `lastUpdated` field.
fn has_last_updated(content: &str) -> bool {
    split(content)
        .and_then(|(block, _)| Frontmatter::from_yaml(block).ok())
        .is_some_and(|frontmatter| frontmatter.last_updated.is_some())
}

/// Title from the document's own frontmatter, when it parses and has one.
fn existing_title(content: &str) -> Option<String> {
    let (block, _) = split(content)?;
    Frontmatter::from_yaml(block).ok()?.title
}

/// Title derived from the document filename.
fn title_for(path: &Path) -> String {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    normalize_title(&filename)
}

fn write_page(path: &Path, title: &str, site: Option<&str>, output: &Output) -> bool {
    match fs::write(path, render_page(title, site)) {
        Ok(()) => true,
        Err(err) => {
            output.warning(&format!("Skipping {}: {err}", path.display()));
            false
        }
    }
}
