//! # File Filter Module
//!
//! This module contains components for deciding which walked files are
//! candidates for the boilerplate check: files with the configured
//! extension, minus anything matching the exclusion pattern.

use std::ffi::OsStr;
use std::path::Path;

use regex::Regex;

use crate::verbose_log;

/// Result of a file filtering operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
  /// Whether the file should be processed
  pub should_process: bool,
  /// Reason why the file should not be processed (if any)
  pub reason: Option<String>,
}

impl FilterResult {
  /// Creates a new FilterResult indicating the file should be processed.
  pub const fn process() -> Self {
    Self {
      should_process: true,
      reason: None,
    }
  }

  /// Creates a new FilterResult indicating the file should be skipped.
  pub fn skip(reason: impl Into<String>) -> Self {
    Self {
      should_process: false,
      reason: Some(reason.into()),
    }
  }
}

/// Trait for components that filter files based on certain criteria.
///
/// Paths passed in are display paths: the walked path, scan root included,
/// with any leading `./` removed.
pub trait FileFilter: Send + Sync {
  /// Determines whether a file should be processed.
  fn should_process(&self, path: &Path) -> FilterResult;
}

/// Keeps only files whose extension is exactly the configured one.
///
/// The comparison is case-sensitive: `main.GO` is not a `go` file.
pub struct ExtensionFilter {
  extension: String,
}

impl ExtensionFilter {
  /// `extension` is given without the leading dot.
  pub fn new(extension: impl Into<String>) -> Self {
    Self {
      extension: extension.into(),
    }
  }
}

impl FileFilter for ExtensionFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    if path.extension() == Some(OsStr::new(&self.extension)) {
      FilterResult::process()
    } else {
      FilterResult::skip(format!("Extension is not .{}", self.extension))
    }
  }
}

/// Drops files whose display path matches a regular expression.
pub struct ExcludeFilter {
  pattern: Regex,
}

impl ExcludeFilter {
  pub const fn new(pattern: Regex) -> Self {
    Self { pattern }
  }
}

impl FileFilter for ExcludeFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    if self.pattern.is_match(&path.to_string_lossy()) {
      verbose_log!("Skipping: {} (matches --exclude)", path.display());
      FilterResult::skip("Matches exclude pattern")
    } else {
      FilterResult::process()
    }
  }
}

/// Filter that combines multiple filters.
pub struct CompositeFilter {
  filters: Vec<Box<dyn FileFilter>>,
}

impl CompositeFilter {
  /// Creates a new CompositeFilter with the given filters.
  pub fn new(filters: Vec<Box<dyn FileFilter>>) -> Self {
    Self { filters }
  }

  /// Adds a filter to this CompositeFilter.
  pub fn add_filter(&mut self, filter: Box<dyn FileFilter>) {
    self.filters.push(filter);
  }
}

impl FileFilter for CompositeFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    for filter in &self.filters {
      let result = filter.should_process(path);
      if !result.should_process {
        return result;
      }
    }
    FilterResult::process()
  }
}

/// Constructs the candidate filter for a run.
///
/// # Parameters
///
/// * `extension` - Extension without the leading dot
/// * `exclude` - Optional compiled exclusion pattern
pub fn create_candidate_filter(extension: &str, exclude: Option<Regex>) -> CompositeFilter {
  let mut filter = CompositeFilter::new(vec![Box::new(ExtensionFilter::new(extension))]);
  if let Some(pattern) = exclude {
    filter.add_filter(Box::new(ExcludeFilter::new(pattern)));
  }
  filter
}
