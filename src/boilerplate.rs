//! # Boilerplate Module
//!
//! Loading of the required header text.
//!
//! A [`Boilerplate`] is read once per run, split into lines and normalized
//! (see [`crate::normalize`]). It is immutable afterwards and can be shared
//! freely between checks.

use std::path::{Path, PathBuf};

use crate::normalize::{denormalize, normalize};
use crate::verbose_log;

/// Errors raised while loading a boilerplate file.
#[derive(Debug, thiserror::Error)]
pub enum BoilerplateError {
  /// The file could not be read.
  #[error("error reading --boilerplate file {path:?}: {source}")]
  Read { path: PathBuf, source: std::io::Error },

  /// The file has no content.
  #[error("--boilerplate file {path:?} is empty")]
  Empty { path: PathBuf },
}

/// The normalized lines every candidate file has to start with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boilerplate {
  lines: Vec<String>,
}

impl Boilerplate {
  /// Reads and normalizes the boilerplate at `path`.
  pub fn load(path: &Path) -> Result<Self, BoilerplateError> {
    let text = std::fs::read_to_string(path).map_err(|source| BoilerplateError::Read {
      path: path.to_path_buf(),
      source,
    })?;

    let boilerplate = Self::from_text(&text).ok_or_else(|| BoilerplateError::Empty {
      path: path.to_path_buf(),
    })?;

    verbose_log!("Loaded {} boilerplate lines from {}", boilerplate.len(), path.display());

    Ok(boilerplate)
  }

  /// Builds a boilerplate from raw text, or `None` if `text` is empty.
  ///
  /// Lines are separated by `\n`. A single terminating newline does not add
  /// an empty trailing line; any other empty line is significant.
  pub fn from_text(text: &str) -> Option<Self> {
    if text.is_empty() {
      return None;
    }
    let body = text.strip_suffix('\n').unwrap_or(text);
    Some(Self {
      lines: body.split('\n').map(normalize).collect(),
    })
  }

  /// The normalized lines.
  pub fn lines(&self) -> &[String] {
    &self.lines
  }

  /// The line a file's header has to start with.
  pub fn anchor(&self) -> &str {
    // `from_text` never produces an empty line list
    &self.lines[0]
  }

  pub fn len(&self) -> usize {
    self.lines.len()
  }

  /// A loaded boilerplate is never empty.
  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  /// The boilerplate as it should appear in a file written today.
  pub fn render(&self) -> String {
    denormalize(&self.lines.join("\n"))
  }
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_from_text_normalizes_lines() {
    let boilerplate = Boilerplate::from_text("/*\nCopyright 2020 Matt Moore\n*/\n").expect("non-empty");
    assert_eq!(boilerplate.lines(), ["/*", "Copyright YYYY Matt Moore", "*/"]);
    assert_eq!(boilerplate.anchor(), "/*");
  }

  #[test]
  fn test_from_text_keeps_inner_blank_lines() {
    let boilerplate = Boilerplate::from_text("a\n\nb\n\n").expect("non-empty");
    assert_eq!(boilerplate.lines(), ["a", "", "b", ""]);
  }

  #[test]
  fn test_from_text_without_trailing_newline() {
    let boilerplate = Boilerplate::from_text("a\nb").expect("non-empty");
    assert_eq!(boilerplate.lines(), ["a", "b"]);
  }

  #[test]
  fn test_from_text_single_newline() {
    let boilerplate = Boilerplate::from_text("\n").expect("non-empty");
    assert_eq!(boilerplate.lines(), [""]);
    assert_eq!(boilerplate.len(), 1);
    assert!(!boilerplate.is_empty());
  }

  #[test]
  fn test_from_text_empty() {
    assert!(Boilerplate::from_text("").is_none());
  }

  #[test]
  fn test_load_missing_file() {
    let err = Boilerplate::load(Path::new("testdata/not-found.txt")).expect_err("should fail");
    assert!(matches!(err, BoilerplateError::Read { .. }));
    assert!(
      err
        .to_string()
        .starts_with("error reading --boilerplate file \"testdata/not-found.txt\": ")
    );
  }

  #[test]
  fn test_load_empty_file() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("empty.txt");
    std::fs::write(&path, "").expect("write boilerplate");

    let err = Boilerplate::load(&path).expect_err("should fail");
    assert!(matches!(err, BoilerplateError::Empty { .. }));
    assert!(err.to_string().ends_with("is empty"));
  }

  #[test]
  fn test_render_substitutes_year() {
    use chrono::Datelike;

    let boilerplate = Boilerplate::from_text("Copyright 2001 Name\nline two\n").expect("non-empty");
    let year = chrono::Local::now().year();
    assert_eq!(boilerplate.render(), format!("Copyright {year} Name\nline two"));
  }
}
