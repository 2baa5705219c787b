//! # Options Module
//!
//! Turns the raw `check` settings (flags merged with the config file) into a
//! validated [`CheckOptions`]. Every configuration problem is reported here,
//! before a single file is scanned.

use std::path::PathBuf;

use regex::Regex;

use crate::boilerplate::{Boilerplate, BoilerplateError};
use crate::config::Config;

/// Configuration errors for the `check` command, in the order they are
/// checked.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
  #[error("--boilerplate is a required flag.")]
  BoilerplateRequired,

  #[error(transparent)]
  Boilerplate(#[from] BoilerplateError),

  #[error("--file-extension is a required flag.")]
  FileExtensionRequired,

  #[error("--file-extension {0:?} may not contain '.'")]
  FileExtensionHasDot(String),

  #[error("error compiling --exclude pattern {pattern:?}: {source}")]
  InvalidExclude { pattern: String, source: regex::Error },
}

/// Unvalidated settings, as given on the command line or in a config file.
#[derive(Debug, Clone, Default)]
pub struct RawOptions {
  pub boilerplate: Option<PathBuf>,
  pub file_extension: Option<String>,
  pub exclude: Option<String>,
  pub paths: Vec<PathBuf>,
  pub fix: bool,
}

impl RawOptions {
  /// Fills every setting left unset with the value from `config`.
  pub fn or_config(self, config: Option<Config>) -> Self {
    let Some(config) = config else {
      return self;
    };
    Self {
      boilerplate: self.boilerplate.or(config.boilerplate),
      file_extension: self.file_extension.or(config.file_extension),
      exclude: self.exclude.or(config.exclude),
      paths: if self.paths.is_empty() { config.paths } else { self.paths },
      fix: self.fix,
    }
  }
}

/// Validated settings for one `check` run.
#[derive(Debug, Clone)]
pub struct CheckOptions {
  pub boilerplate: Boilerplate,
  /// Extension without the leading dot.
  pub file_extension: String,
  pub exclude: Option<Regex>,
  /// Roots to walk. Never empty.
  pub paths: Vec<PathBuf>,
  /// Rewrite offending headers instead of only reporting them.
  pub fix: bool,
}

impl CheckOptions {
  /// Validates `raw`.
  ///
  /// The boilerplate file is read here. An empty or missing path list
  /// defaults to the current directory.
  pub fn resolve(raw: RawOptions) -> Result<Self, OptionsError> {
    let boilerplate_path = raw
      .boilerplate
      .filter(|p| !p.as_os_str().is_empty())
      .ok_or(OptionsError::BoilerplateRequired)?;
    let boilerplate = Boilerplate::load(&boilerplate_path)?;

    let file_extension = raw
      .file_extension
      .filter(|e| !e.is_empty())
      .ok_or(OptionsError::FileExtensionRequired)?;
    if file_extension.contains('.') {
      return Err(OptionsError::FileExtensionHasDot(file_extension));
    }

    let exclude = match raw.exclude.filter(|p| !p.is_empty()) {
      Some(pattern) => match Regex::new(&pattern) {
        Ok(regex) => Some(regex),
        Err(source) => return Err(OptionsError::InvalidExclude { pattern, source }),
      },
      None => None,
    };

    let paths = if raw.paths.is_empty() {
      vec![PathBuf::from(".")]
    } else {
      raw.paths
    };

    Ok(Self {
      boilerplate,
      file_extension,
      exclude,
      paths,
      fix: raw.fix,
    })
  }
}
