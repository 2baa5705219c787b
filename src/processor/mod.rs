//! # Processor Module
//!
//! This module drives a `check` run: it walks the configured paths, checks
//! every candidate file against the boilerplate, reports findings and, in
//! fix mode, rewrites offending headers.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - File reading and writing operations
//! - [`file_collector`] - Directory traversal and candidate selection
//! - [`fixer`] - Header rewriting
//!
//! The [`Processor`] struct is the main entry point, orchestrating the
//! submodules.

mod file_collector;
mod file_io;
mod fixer;

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
pub use file_collector::{Candidate, FileCollector, display_path};
pub use file_io::{FileIO, LossyLines};
pub use fixer::fix_content;
use tracing::{debug, trace};

use crate::file_filter::{CompositeFilter, create_candidate_filter};
use crate::matcher::{self, MatchResult};
use crate::options::CheckOptions;
use crate::output::{Finding, RunSummary, print_file_error, print_fixed_file, write_finding};

/// Processor for checking boilerplate headers.
///
/// The `Processor` is responsible for:
/// - Walking the configured paths for candidate files
/// - Checking each file's header against the boilerplate
/// - Writing findings to the diagnostic sink
/// - Rewriting headers in fix mode
///
/// Files are handled one at a time; a failure on one file is reported and
/// counted without stopping the run.
pub struct Processor {
  options: CheckOptions,
  filter: CompositeFilter,
}

impl Processor {
  /// Creates a new processor for validated options.
  pub fn new(options: CheckOptions) -> Self {
    let filter = create_candidate_filter(&options.file_extension, options.exclude.clone());
    Self { options, filter }
  }

  pub const fn options(&self) -> &CheckOptions {
    &self.options
  }

  /// Checks one file against the boilerplate.
  ///
  /// The file is only read as far as needed and is closed before this
  /// returns.
  pub fn check_file(&self, path: &Path) -> Result<MatchResult> {
    let lines = FileIO::open_lines(path)?;
    matcher::check(&self.options.boilerplate, lines).with_context(|| format!("Failed to read file: {}", path.display()))
  }

  /// Rewrites the header of `path` to match the boilerplate. Bytes outside
  /// the header are written back as they were.
  ///
  /// Returns `true` if the file was written.
  pub fn fix_file(&self, path: &Path) -> Result<bool> {
    let content = FileIO::read_bytes(path)?;
    let lines = LossyLines::new(content.as_slice());
    let result = matcher::check(&self.options.boilerplate, lines)
      .with_context(|| format!("Failed to read file: {}", path.display()))?;

    match fix_content(&self.options.boilerplate, &content, &result) {
      Some(fixed) => {
        FileIO::write_file(path, &fixed)?;
        Ok(true)
      }
      None => Ok(false),
    }
  }

  /// Runs the check over every configured path.
  ///
  /// Findings are written to `out`. Errors on individual files go to stderr
  /// and are counted in the summary; only a failure to write to `out` aborts
  /// the run.
  pub fn run(&self, out: &mut dyn Write) -> Result<RunSummary> {
    let start_time = Instant::now();
    let mut summary = RunSummary::default();
    let collector = FileCollector::new(&self.filter);

    for root in &self.options.paths {
      debug!("Scanning directory: {}", root.display());

      for candidate in collector.walk(root) {
        let candidate = match candidate {
          Ok(candidate) => candidate,
          Err(e) => {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
            debug!("Failed to walk {}: {}", path.display(), e);
            print_file_error(&display_path(&path), &anyhow::Error::new(e));
            summary.errors += 1;
            continue;
          }
        };

        summary.checked += 1;
        self.process_candidate(&candidate, out, &mut summary)?;
      }
    }

    out.flush().context("Failed to flush output")?;
    summary.elapsed = start_time.elapsed();
    debug!(
      "Checked {} files in {}ms",
      summary.checked,
      summary.elapsed.as_millis()
    );

    Ok(summary)
  }

  fn process_candidate(&self, candidate: &Candidate, out: &mut dyn Write, summary: &mut RunSummary) -> Result<()> {
    trace!("Checking file: {}", candidate.display.display());

    let result = match self.check_file(&candidate.path) {
      Ok(result) => result,
      Err(e) => {
        debug!("{:#}", e);
        print_file_error(&candidate.display, &e);
        summary.errors += 1;
        return Ok(());
      }
    };

    if result.is_clean() {
      return Ok(());
    }

    summary.findings += 1;
    let finding = Finding {
      path: &candidate.display,
      result: &result,
      boilerplate: &self.options.boilerplate,
    };
    write_finding(out, &finding).context("Failed to write finding")?;

    if self.options.fix {
      match self.fix_file(&candidate.path) {
        Ok(true) => {
          summary.fixed += 1;
          print_fixed_file(&candidate.display);
        }
        Ok(false) => {}
        Err(e) => {
          debug!("{:#}", e);
          print_file_error(&candidate.display, &e);
          summary.errors += 1;
        }
      }
    }

    Ok(())
  }
}
