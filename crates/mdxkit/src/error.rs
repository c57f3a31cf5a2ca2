//! CLI error types.

use mdxkit_config::ConfigError;

/// CLI error type.
///
/// Per-document failures (unreadable files, missing snippets, absent
/// history) are reported through [`crate::output::Output`] and skipped, so
/// only configuration loading can abort a run.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),
}
