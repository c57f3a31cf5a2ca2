//! `mdxkit renumber` command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use mdxkit_config::{Config, SectionOrder};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the renumber command.
#[derive(Args)]
pub(crate) struct RenumberArgs {
    /// Path to configuration file (default: auto-discover mdxkit.toml).
    #[arg(short, long, env = "MDXKIT_CONFIG")]
    config: Option<PathBuf>,
}

impl RenumberArgs {
    /// Execute the renumber command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading fails or the config has no
    /// `[renumber]` section.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;
        let renumber = config.require_renumber()?;
        let extension = &config.docs_resolved.extension;

        for section in &renumber.sections {
            apply_section(&renumber.base_dir, section, extension, &output);
        }

        Ok(())
    }
}

/// Apply one ordered rename table.
///
/// Files are renamed from their bare names to two-digit positional names.
/// Names missing from disk are reported and skipped without shifting the
/// numbers of the entries after them.
fn apply_section(base_dir: &Path, section: &SectionOrder, extension: &str, output: &Output) {
    let dir = base_dir.join(&section.dir);
    if !dir.is_dir() {
        output.info(&format!("Directory not found: {}", dir.display()));
        return;
    }

    output.info(&format!("Processing directory: {}", dir.display()));
    for (index, base) in section.files.iter().enumerate() {
        let old = dir.join(format!("{base}.{extension}"));
        let new = dir.join(numbered_name(index + 1, base, extension));
        if !old.exists() {
            output.info(&format!("  File not found: {}", old.display()));
            continue;
        }

        output.info(&format!(
            "  Renaming: {} -> {}",
            old.display(),
            new.display()
        ));
        if let Err(err) = fs::rename(&old, &new) {
            output.warning(&format!("  Failed to rename {}: {err}", old.display()));
        }
    }
}

/// Two-digit 1-based positional filename, e.g. `02-quickstart.mdx`.
fn numbered_name(position: usize, base: &str, extension: &str) -> String {
    format!("{position:02}-{base}.{extension}")
}
