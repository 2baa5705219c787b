//! # File Collector Module
//!
//! This module walks directory trees and yields the files that should be
//! checked.

use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use crate::file_filter::FileFilter;

/// A file selected for checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
  /// Path used to open the file.
  pub path: PathBuf,
  /// Path shown in reports: the walked path without a leading `./`.
  pub display: PathBuf,
}

/// File collector for directory traversal.
///
/// Traversal is depth-first in file-name order so reports come out in the
/// same order on every run. Symlinks are not followed and only regular files
/// are considered.
pub struct FileCollector<'a> {
  filter: &'a dyn FileFilter,
}

impl<'a> FileCollector<'a> {
  pub const fn new(filter: &'a dyn FileFilter) -> Self {
    Self { filter }
  }

  /// Walks `root`, yielding candidates and traversal errors in order.
  ///
  /// A directory that cannot be read produces one error item; the walk
  /// carries on with its siblings.
  pub fn walk(&self, root: &Path) -> impl Iterator<Item = Result<Candidate, walkdir::Error>> + 'a {
    let filter = self.filter;
    WalkDir::new(root)
      .sort_by_file_name()
      .into_iter()
      .filter_map(move |entry| {
        let entry = match entry {
          Ok(entry) => entry,
          Err(e) => return Some(Err(e)),
        };
        if !entry.file_type().is_file() {
          return None;
        }

        let shown = display_path(entry.path());
        let result = filter.should_process(&shown);
        if !result.should_process {
          trace!(
            "Skipping: {} ({})",
            shown.display(),
            result.reason.as_deref().unwrap_or("Unknown reason")
          );
          return None;
        }

        Some(Ok(Candidate {
          path: entry.into_path(),
          display: shown,
        }))
      })
  }
}

/// Strips a leading `./` from a walked path.
pub fn display_path(path: &Path) -> PathBuf {
  path.strip_prefix(".").unwrap_or(path).to_path_buf()
}
