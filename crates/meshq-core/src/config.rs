//! Configuration types for meshq.
//!
//! [`Config::load`] reads `~/.config/meshq/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::load_from`] layers
//! an explicit file instead. [`Config::defaults`] returns the same defaults
//! without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::keywords::DEFAULT_DELIMITER;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[query]
delimiter = ";"

[expansion]
include_entry_terms = true
fallback_to_keyword = true
max_terms           = 0
"#;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] config::ConfigError),
    #[error("query.delimiter must be exactly one character, got {0:?}")]
    InvalidDelimiter(String),
}

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub expansion: ExpansionConfig,
}

/// `[query]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

fn default_delimiter() -> String { DEFAULT_DELIMITER.to_string() }

impl Default for QueryConfig {
    fn default() -> Self {
        Self { delimiter: default_delimiter() }
    }
}

impl QueryConfig {
    /// The delimiter as a `char`. Only meaningful after [`Config::validate`].
    pub fn delimiter_char(&self) -> char {
        self.delimiter.chars().next().unwrap_or(DEFAULT_DELIMITER)
    }
}

/// `[expansion]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpansionConfig {
    /// Emit MeSH entry terms as free-text alternatives of the heading.
    #[serde(default = "default_true")]
    pub include_entry_terms: bool,
    /// Search the keyword itself when it resolves to no heading.
    #[serde(default = "default_true")]
    pub fallback_to_keyword: bool,
    /// Cap on terms per keyword; 0 disables the cap.
    #[serde(default)]
    pub max_terms: usize,
    /// Extra thesaurus file (TOML or JSON) merged over the built-in headings.
    /// Relative paths are taken from the directory of the config file.
    #[serde(default)]
    pub thesaurus: Option<PathBuf>,
}

fn default_true() -> bool { true }

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            include_entry_terms: true,
            fallback_to_keyword: true,
            max_terms: 0,
            thesaurus: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/meshq/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start()).map_err(|source| {
                ConfigError::Io { path: path.clone(), source }
            })?;
            tracing::info!(path = %path.display(), "config: wrote defaults");
        }

        Self::layered(&path, false)
    }

    /// Load an explicit file layered on top of the built-in defaults. The
    /// file must exist.
    ///
    /// Neither loader calls [`Config::validate`]; callers validate once any
    /// command-line overrides have been applied.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::layered(path, true)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Reject values the deserializer accepts but the pipeline cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.query.delimiter.chars().count() != 1 {
            return Err(ConfigError::InvalidDelimiter(self.query.delimiter.clone()));
        }
        Ok(())
    }

    fn layered(path: &Path, required: bool) -> Result<Self, ConfigError> {
        let mut cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(required))
            .build()?
            .try_deserialize()?;

        // Relative thesaurus paths are resolved against the config file.
        if let (Some(thesaurus), Some(dir)) = (cfg.expansion.thesaurus.as_mut(), path.parent()) {
            if thesaurus.is_relative() {
                *thesaurus = dir.join(&*thesaurus);
            }
        }
        tracing::debug!(path = %path.display(), ?cfg, "config: loaded");
        Ok(cfg)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    config_path_from(std::env::var("XDG_CONFIG_HOME").ok(), std::env::var("HOME").ok())
}

/// An unset or empty `XDG_CONFIG_HOME` falls back to `$HOME/.config`.
fn config_path_from(xdg_config_home: Option<String>, home: Option<String>) -> PathBuf {
    xdg_config_home
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(home.unwrap_or_else(|| ".".to_string())).join(".config"))
        .join("meshq")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert_eq!(cfg.query.delimiter, ";");
        assert_eq!(cfg.query.delimiter_char(), ';');
        assert!(cfg.expansion.include_entry_terms);
        assert!(cfg.expansion.fallback_to_keyword);
        assert_eq!(cfg.expansion.max_terms, 0);
        assert!(cfg.expansion.thesaurus.is_none());
        cfg.validate().unwrap();
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meshq.toml");
        std::fs::write(
            &path,
            "[query]\ndelimiter = \",\"\n[expansion]\nmax_terms = 3\nthesaurus = \"extra.json\"\n",
        )
        .unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.query.delimiter_char(), ',');
        assert_eq!(cfg.expansion.max_terms, 3);
        assert!(cfg.expansion.include_entry_terms);
        assert_eq!(cfg.expansion.thesaurus, Some(dir.path().join("extra.json")));
    }

    #[test]
    fn multi_char_delimiter_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meshq.toml");
        std::fs::write(&path, "[query]\ndelimiter = \";;\"\n").unwrap();

        // Loading succeeds so a caller can still override the value.
        let mut cfg = Config::load_from(&path).unwrap();
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDelimiter(ref d) if d == ";;"));

        cfg.query.delimiter = ",".to_string();
        cfg.validate().unwrap();
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn empty_xdg_config_home_is_ignored() {
        let home = Some("/home/u".to_string());
        assert_eq!(
            config_path_from(Some(String::new()), home.clone()),
            PathBuf::from("/home/u/.config/meshq/config.toml")
        );
        assert_eq!(
            config_path_from(None, home.clone()),
            PathBuf::from("/home/u/.config/meshq/config.toml")
        );
        assert_eq!(
            config_path_from(Some("/xdg".to_string()), home),
            PathBuf::from("/xdg/meshq/config.toml")
        );
    }

    // The only test in this crate that touches the process environment.
    #[test]
    fn load_writes_defaults_then_reads_edits() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("XDG_CONFIG_HOME", dir.path());
        let path = dir.path().join("meshq").join("config.toml");
        assert!(!path.exists());

        let cfg = Config::load().unwrap();
        assert!(path.exists());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG.trim_start());
        assert_eq!(cfg.query.delimiter_char(), ';');

        std::fs::write(&path, "[query]\ndelimiter = \"|\"\n[expansion]\nmax_terms = 4\n").unwrap();
        let cfg = Config::load().unwrap();
        assert_eq!(cfg.query.delimiter_char(), '|');
        assert_eq!(cfg.expansion.max_terms, 4);
        assert!(cfg.expansion.include_entry_terms);

        std::env::remove_var("XDG_CONFIG_HOME");
    }
}
