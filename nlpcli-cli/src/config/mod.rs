//! Configuration module
//!
//! Without `--config`, `nlpcli.toml` next to the executable is used when it
//! exists. Command-line flags override values from the file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nlpcli_core::{Backend, Language};
use serde::{Deserialize, Serialize};

use crate::error::CliError;
use crate::output::ColorChoice;

/// File name looked up next to the installed executable
pub const DEFAULT_CONFIG_NAME: &str = "nlpcli.toml";

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CliConfig {
    /// Provider selection
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Defaults of the `entity` subcommand
    #[serde(default)]
    pub entity: EntityConfig,

    /// Console output
    #[serde(default)]
    pub output: OutputConfig,
}

/// Provider-related configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Backend to resolve at startup
    pub backend: Backend,

    /// Stopword and stemmer language
    pub language: Language,

    /// Sentiment lexicon replacing the bundled one, relative to the config file
    pub lexicon: Option<PathBuf>,
}

/// Entity table configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EntityConfig {
    /// Show start/end character offsets
    pub show_positions: bool,
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            show_positions: true,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// When to colorize status lines
    pub color: ColorChoice,
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config = Self::from_toml(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        if let (Some(lexicon), Some(dir)) = (&config.provider.lexicon, path.parent()) {
            config.provider.lexicon = Some(dir.join(lexicon));
        }
        Ok(config)
    }

    /// Resolve the configuration for this run
    ///
    /// An explicit path must exist; the default path is optional.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(CliError::ConfigNotFound(path.display().to_string()).into());
            }
            log::info!("Using config file {}", path.display());
            return Self::load(path);
        }

        match default_path() {
            Some(path) if path.is_file() => {
                log::info!("Using default config file {}", path.display());
                Self::load(&path)
            }
            _ => {
                log::debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// `nlpcli.toml` in the directory of the running executable
pub fn default_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join(DEFAULT_CONFIG_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.provider.backend, Backend::Auto);
        assert_eq!(config.provider.language, Language::English);
        assert!(config.entity.show_positions);
        assert_eq!(config.output.color, ColorChoice::Auto);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(CliConfig::from_toml("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = CliConfig::from_toml(
            r#"
[provider]
backend = "basic"

[entity]
show_positions = false
"#,
        )
        .unwrap();
        assert_eq!(config.provider.backend, Backend::Basic);
        assert_eq!(config.provider.language, Language::English);
        assert!(!config.entity.show_positions);
        assert_eq!(config.output.color, ColorChoice::Auto);
    }

    #[test]
    fn test_full_file() {
        let config = CliConfig::from_toml(
            r#"
[provider]
backend = "full"
language = "german"

[output]
color = "never"
"#,
        )
        .unwrap();
        assert_eq!(config.provider.backend, Backend::Full);
        assert_eq!(config.provider.language, Language::German);
        assert_eq!(config.output.color, ColorChoice::Never);
    }

    #[test]
    fn test_invalid_values() {
        let err = CliConfig::from_toml("[provider]\nbackend = \"spacy\"").unwrap_err();
        assert!(err.to_string().contains("Configuration error"));

        assert!(CliConfig::from_toml("[provider]\nlanguage = \"klingon\"").is_err());
        assert!(CliConfig::from_toml("[entity]\nshow_positions = \"yes\"").is_err());
    }

    #[test]
    fn test_resolve_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(&path, "[provider]\nbackend = \"basic\"\n").unwrap();

        let config = CliConfig::resolve(Some(&path)).unwrap();
        assert_eq!(config.provider.backend, Backend::Basic);
    }

    #[test]
    fn test_lexicon_is_relative_to_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nlpcli.toml");
        fs::write(&path, "[provider]\nlexicon = \"words.tsv\"\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(
            config.provider.lexicon,
            Some(temp_dir.path().join("words.tsv"))
        );
        assert_eq!(CliConfig::default().provider.lexicon, None);
    }

    #[test]
    fn test_resolve_missing_explicit_file() {
        let err = CliConfig::resolve(Some(Path::new("/nonexistent/nlpcli.toml"))).unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }

    #[test]
    fn test_default_path_is_next_to_executable() {
        let path = default_path().unwrap();
        assert!(path.ends_with(DEFAULT_CONFIG_NAME));
    }
}
