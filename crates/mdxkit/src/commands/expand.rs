//! `mdxkit expand` command implementation.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use mdxkit_config::{CliSettings, Config};
use mdxkit_expand::Expander;

use crate::commands::resolve_targets;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the expand command.
#[derive(Args)]
pub(crate) struct ExpandArgs {
    /// Documents to process (default: every document under the docs source directory).
    files: Vec<PathBuf>,

    /// Docs source directory (overrides config).
    #[arg(long)]
    docs_dir: Option<PathBuf>,

    /// Snippets directory (overrides config).
    #[arg(long)]
    snippets_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover mdxkit.toml).
    #[arg(short, long, env = "MDXKIT_CONFIG")]
    config: Option<PathBuf>,
}

impl ExpandArgs {
    /// Execute the expand command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.docs_dir,
            snippets_dir: self.snippets_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let targets = resolve_targets(self.files, &config.docs_resolved);
        let mut expander = Expander::new(&config.docs_resolved.snippets_dir);
        let mut any_updated = false;

        for path in targets {
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(err) => {
                    output.warning(&format!("Skipping {}: {err}", path.display()));
                    continue;
                }
            };

            let (expanded, count) = expander.expand(&content);
            for warning in expander.take_warnings() {
                output.warning(&format!("Warning: {warning}"));
            }
            if count == 0 {
                continue;
            }

            if let Err(err) = fs::write(&path, expanded) {
                output.warning(&format!("Skipping {}: {err}", path.display()));
                continue;
            }
            output.info(&format!(
                "Updated {count} snippet directive(s) in {}",
                path.display()
            ));
            any_updated = true;
        }

        if any_updated {
            output.success("One or more documents were updated with snippet expansions.");
        } else {
            output.info("No documents required snippet expansion.");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn project_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::create_dir(dir.path().join("code-blocks")).unwrap();
        fs::write(dir.path().join("mdxkit.toml"), "").unwrap();
        fs::write(dir.path().join("code-blocks").join("demo.py"), "print(1)\n").unwrap();
        dir
    }

    fn args_for(dir: &TempDir, files: Vec<PathBuf>) -> ExpandArgs {
        ExpandArgs {
            files,
            docs_dir: None,
            snippets_dir: None,
            config: Some(dir.path().join("mdxkit.toml")),
        }
    }

    #[test]
    fn test_execute_rewrites_documents_with_directives() {
        let dir = project_dir();
        let doc = dir.path().join("docs").join("guide.mdx");
        fs::write(&doc, "Before\nREPLACE_WITH:CodeBlock filename:demo.py\nAfter\n").unwrap();

        args_for(&dir, Vec::new()).execute().unwrap();

        let rewritten = fs::read_to_string(&doc).unwrap();
        assert_eq!(
            rewritten,
            "Before\n<CodeBlock language=\"python\" code={`print(1)`} />After\n"
        );
    }

    #[test]
    fn test_execute_leaves_plain_documents_untouched() {
        let dir = project_dir();
        let doc = dir.path().join("docs").join("plain.mdx");
        fs::write(&doc, "# Plain\n").unwrap();

        args_for(&dir, Vec::new()).execute().unwrap();

        assert_eq!(fs::read_to_string(&doc).unwrap(), "# Plain\n");
    }

    #[test]
    fn test_execute_keeps_unresolved_directives_verbatim() {
        let dir = project_dir();
        let doc = dir.path().join("docs").join("broken.mdx");
        let content = "REPLACE_WITH:CodeBlock filename:ghost.py\n";
        fs::write(&doc, content).unwrap();

        args_for(&dir, Vec::new()).execute().unwrap();

        assert_eq!(fs::read_to_string(&doc).unwrap(), content);
    }

    #[test]
    fn test_execute_skips_missing_explicit_file() {
        let dir = project_dir();
        let missing = dir.path().join("docs").join("absent.mdx");

        // A missing explicit target is reported and skipped, not fatal.
        args_for(&dir, vec![missing]).execute().unwrap();
    }
}
