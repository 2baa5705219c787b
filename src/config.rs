//! # Config Module
//!
//! Repository defaults for `check`. A project can record its boilerplate
//! file, extension, exclusions and scan roots in `.boilerplate-check.toml`
//! so that CI jobs and local runs agree without repeating flags.
//!
//! ```toml
//! boilerplate = "hack/boilerplate/boilerplate.go.txt"
//! file-extension = "go"
//! exclude = "^third_party/"
//! paths = ["cmd", "pkg"]
//! ```
//!
//! Flags given on the command line always take precedence over the file.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::verbose_log;

/// File looked up in the working directory when no other source names one.
pub const DEFAULT_CONFIG_FILENAME: &str = ".boilerplate-check.toml";

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "BOILERPLATE_CHECK_CONFIG";

/// Defaults for the `check` command. Every key is optional.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
  /// Relative paths are taken from the directory holding the config file.
  #[serde(default)]
  pub boilerplate: Option<PathBuf>,

  /// Without the leading dot.
  #[serde(default)]
  pub file_extension: Option<String>,

  #[serde(default)]
  pub exclude: Option<String>,

  /// Scan roots, relative to the working directory.
  #[serde(default)]
  pub paths: Vec<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("--config file {path:?} does not exist")]
  Missing { path: PathBuf },

  #[error("cannot read config file {path:?}: {source}")]
  Unreadable { path: PathBuf, source: std::io::Error },

  #[error("invalid config file {path:?}: {source}")]
  Invalid { path: PathBuf, source: toml::de::Error },
}

/// Where a config file path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
  /// `--config`
  Flag,
  /// [`CONFIG_ENV_VAR`]
  Environment,
  /// [`DEFAULT_CONFIG_FILENAME`] in the search directory
  SearchDir,
}

impl fmt::Display for ConfigSource {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigSource::Flag => write!(f, "--config"),
      ConfigSource::Environment => write!(f, "${CONFIG_ENV_VAR}"),
      ConfigSource::SearchDir => write!(f, "working directory"),
    }
  }
}

impl Config {
  /// Reads and parses the config file at `path`.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
      path: path.to_path_buf(),
      source,
    })?;

    let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Invalid {
      path: path.to_path_buf(),
      source,
    })?;

    Ok(config.relative_to(path.parent().unwrap_or_else(|| Path::new(""))))
  }

  fn relative_to(mut self, dir: &Path) -> Self {
    self.boilerplate = self
      .boilerplate
      .map(|p| if p.is_relative() { dir.join(p) } else { p });
    self
  }
}

/// Finds the config file to use, if any.
///
/// Sources are tried in order: `flag`, then [`CONFIG_ENV_VAR`], then
/// [`DEFAULT_CONFIG_FILENAME`] inside `search_dir`. A flag naming a missing
/// file is an error. A missing file from the other sources is skipped.
///
/// # Parameters
///
/// * `flag` - The `--config` value, if given
/// * `search_dir` - Directory searched for the default file
///
/// # Returns
///
/// The path and where it came from, or `None` when no source applies.
pub fn discover_config_path(flag: Option<&Path>, search_dir: &Path) -> Result<Option<(PathBuf, ConfigSource)>, ConfigError> {
  if let Some(path) = flag {
    if !path.is_file() {
      return Err(ConfigError::Missing {
        path: path.to_path_buf(),
      });
    }
    return Ok(Some((path.to_path_buf(), ConfigSource::Flag)));
  }

  if let Some(value) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
    let path = PathBuf::from(value);
    if path.is_file() {
      return Ok(Some((path, ConfigSource::Environment)));
    }
    verbose_log!("Ignoring ${}: {} is not a file", CONFIG_ENV_VAR, path.display());
  }

  let path = search_dir.join(DEFAULT_CONFIG_FILENAME);
  Ok(path.is_file().then_some((path, ConfigSource::SearchDir)))
}

/// Discovers and loads the config file for a `check` run.
///
/// Returns `None` when `disabled` is set or no file was found.
pub fn load_config(flag: Option<&Path>, search_dir: &Path, disabled: bool) -> Result<Option<Config>> {
  if disabled {
    verbose_log!("Not reading a config file (--no-config)");
    return Ok(None);
  }

  let Some((path, source)) = discover_config_path(flag, search_dir)? else {
    verbose_log!("No config file");
    return Ok(None);
  };

  verbose_log!("Using config file {} (from {})", path.display(), source);
  let config = Config::load(&path).with_context(|| format!("while loading {}", path.display()))?;
  Ok(Some(config))
}
