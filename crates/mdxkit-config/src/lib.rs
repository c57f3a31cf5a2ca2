//! Configuration management for mdxkit.
//!
//! Parses `mdxkit.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override snippets directory.
    pub snippets_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdxkit.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration.
    pub site: SiteConfig,
    /// Documentation configuration (paths are relative strings from TOML).
    #[serde(default)]
    docs: DocsConfigRaw,
    /// Ordered rename tables (optional section).
    renumber: Option<RenumberConfigRaw>,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Resolved renumber configuration (set after loading).
    #[serde(skip)]
    renumber_resolved: Option<RenumberConfig>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    #[allow(clippy::derivable_impls)]
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name used in generated page descriptions.
    pub name: Option<String>,
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    snippets_dir: Option<String>,
    extension: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory holding the documentation tree.
    pub source_dir: PathBuf,
    /// Directory of snippet files referenced by directives.
    pub snippets_dir: PathBuf,
    /// Documentation file extension, without the leading dot.
    pub extension: String,
}

/// Raw renumber configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RenumberConfigRaw {
    base_dir: Option<String>,
    #[serde(rename = "section")]
    sections: Vec<SectionOrder>,
}

/// Resolved renumber configuration.
#[derive(Debug)]
pub struct RenumberConfig {
    /// Directory the section tables are relative to.
    pub base_dir: PathBuf,
    /// Ordered rename tables.
    pub sections: Vec<SectionOrder>,
}

/// One ordered rename table: a directory and its base filenames in order.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SectionOrder {
    /// Directory relative to the renumber base.
    pub dir: String,
    /// Base filenames (no extension) in their intended order.
    pub files: Vec<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Strip a leading dot so `".mdx"` and `"mdx"` configure the same thing.
fn normalize_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_owned()
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mdxkit.toml` in current directory and parents,
    /// falling back to defaults when no file exists.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(snippets_dir) = &settings.snippets_dir {
            self.docs_resolved.snippets_dir.clone_from(snippets_dir);
        }
    }

    /// Get the renumber configuration.
    ///
    /// Use this instead of accessing the section directly when the command
    /// requires rename tables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing.
    pub fn require_renumber(&self) -> Result<&RenumberConfig, ConfigError> {
        self.renumber_resolved
            .as_ref()
            .ok_or_else(|| ConfigError::Validation("[renumber] section required in config".into()))
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            docs: DocsConfigRaw::default(),
            renumber: None,
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
                snippets_dir: base.join("code-blocks"),
                extension: "mdx".to_owned(),
            },
            renumber_resolved: None,
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.docs_resolved.extension, "docs.extension")?;

        if let Some(renumber) = &self.renumber_resolved {
            for section in &renumber.sections {
                require_non_empty(&section.dir, "renumber.section.dir")?;
                if section.files.is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "renumber section '{}' lists no files",
                        section.dir
                    )));
                }
            }
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
            snippets_dir: resolve(self.docs.snippets_dir.as_deref(), "code-blocks"),
            extension: normalize_extension(self.docs.extension.as_deref().unwrap_or("mdx")),
        };

        self.renumber_resolved = self.renumber.as_ref().map(|renumber| {
            let base_dir = match &renumber.base_dir {
                Some(dir) => config_dir.join(dir),
                None => self.docs_resolved.source_dir.clone(),
            };
            RenumberConfig {
                base_dir,
                sections: renumber.sections.clone(),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs"));
        assert_eq!(
            config.docs_resolved.snippets_dir,
            PathBuf::from("/test/code-blocks")
        );
        assert_eq!(config.docs_resolved.extension, "mdx");
        assert!(config.site.name.is_none());
        assert!(config.require_renumber().is_err());
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml = "";
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/project/docs")
        );
        assert_eq!(config.docs_resolved.extension, "mdx");
    }

    #[test]
    fn test_parse_site_and_docs_config() {
        let toml = r#"
[site]
name = "ASTRAL"

[docs]
source_dir = "documentation"
snippets_dir = "snippets"
extension = ".markdown"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.site.name.as_deref(), Some("ASTRAL"));
        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/project/documentation")
        );
        assert_eq!(
            config.docs_resolved.snippets_dir,
            PathBuf::from("/project/snippets")
        );
        assert_eq!(config.docs_resolved.extension, "markdown");
    }

    #[test]
    fn test_parse_renumber_sections() {
        let toml = r#"
[renumber]
base_dir = "docs/v1"

[[renumber.section]]
dir = "get-started"
files = ["introduction", "quickstart"]

[[renumber.section]]
dir = "providers"
files = ["openai", "ollama"]
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        let renumber = config.require_renumber().unwrap();
        assert_eq!(renumber.base_dir, PathBuf::from("/project/docs/v1"));
        assert_eq!(renumber.sections.len(), 2);
        assert_eq!(renumber.sections[0].dir, "get-started");
        assert_eq!(
            renumber.sections[0].files,
            vec!["introduction".to_owned(), "quickstart".to_owned()]
        );
    }

    #[test]
    fn test_renumber_base_dir_defaults_to_source_dir() {
        let toml = r#"
[docs]
source_dir = "documentation"

[[renumber.section]]
dir = "guides"
files = ["setup"]
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        let renumber = config.require_renumber().unwrap();
        assert_eq!(renumber.base_dir, PathBuf::from("/project/documentation"));
    }

    #[test]
    fn test_require_renumber_missing_section() {
        let config = Config::default_with_base(Path::new("/test"));
        let err = config.require_renumber().unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("[renumber]"));
    }

    #[test]
    fn test_validation_rejects_empty_files_list() {
        let toml = r#"
[[renumber.section]]
dir = "guides"
files = []
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("guides"));
    }

    #[test]
    fn test_validation_rejects_empty_extension() {
        let toml = r#"
[docs]
extension = "."
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("docs.extension"));
    }

    #[test]
    fn test_apply_cli_settings_source_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            source_dir: Some(PathBuf::from("/elsewhere/docs")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/elsewhere/docs")
        );
        // Unchanged
        assert_eq!(
            config.docs_resolved.snippets_dir,
            PathBuf::from("/test/code-blocks")
        );
    }

    #[test]
    fn test_apply_cli_settings_snippets_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            snippets_dir: Some(PathBuf::from("/elsewhere/code-blocks")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.docs_resolved.snippets_dir,
            PathBuf::from("/elsewhere/code-blocks")
        );
    }

    #[test]
    fn test_load_explicit_path_not_found() {
        let err = Config::load(Some(Path::new("/nonexistent/mdxkit.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_resolves_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mdxkit.toml");
        std::fs::write(&path, "[docs]\nsource_dir = \"pages\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.docs_resolved.source_dir, dir.path().join("pages"));
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_load_applies_cli_settings_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mdxkit.toml");
        std::fs::write(&path, "[docs]\nsource_dir = \"pages\"\n").unwrap();
        let settings = CliSettings {
            source_dir: Some(PathBuf::from("/cli/docs")),
            ..Default::default()
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/cli/docs"));
    }

    #[test]
    fn test_parse_invalid_toml() {
        let toml = "[docs\nsource_dir = \"pages\"";
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }
}
