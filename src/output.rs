//! # Output Module
//!
//! This module centralizes all user-facing output for boilerplate-check.
//!
//! Findings are written to a caller-supplied writer (stdout for the CLI) in
//! the `path:line: message` shape that review tools such as reviewdog parse,
//! and are never colored. Everything else (per-file errors, the end-of-run
//! summary, hints) goes to stderr, so an empty stdout means every file
//! complies.

use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use owo_colors::{OwoColorize, Stream};

use crate::boilerplate::Boilerplate;
use crate::info_log;
use crate::logging::is_quiet;
use crate::matcher::MatchResult;
use crate::normalize::denormalize;

/// Symbols used in output
pub mod symbols {
  /// Every file complies
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Findings or failures
  pub const FAILURE: &str = "\u{2717}"; // ✗
  /// Header rewritten
  pub const FIXED: &str = "\u{21bb}"; // ↻
}

/// A non-clean result bound to the file it was found in, ready to print.
pub struct Finding<'a> {
  pub path: &'a Path,
  pub result: &'a MatchResult,
  pub boilerplate: &'a Boilerplate,
}

impl fmt::Display for Finding<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let path = self.path.display();
    match self.result {
      MatchResult::Clean => Ok(()),
      MatchResult::Missing => {
        writeln!(f, "{path}:1: missing boilerplate:")?;
        writeln!(f, "{}", self.boilerplate.render())
      }
      MatchResult::Incomplete { line, remainder } => {
        writeln!(f, "{path}:{line}: incomplete boilerplate, missing:")?;
        writeln!(f, "{}", denormalize(&remainder.join("\n")))
      }
      MatchResult::Mismatched { line, diff, .. } => {
        writeln!(f, "{path}:{line}: found mismatched boilerplate lines:")?;
        writeln!(f, "{}", denormalize(&diff.to_string()))
      }
    }
  }
}

/// Writes a finding to `out`. Clean results write nothing.
pub fn write_finding(out: &mut dyn Write, finding: &Finding<'_>) -> io::Result<()> {
  if finding.result.is_clean() {
    return Ok(());
  }
  write!(out, "{finding}")
}

/// Totals for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
  /// Candidate files that were checked
  pub checked: usize,
  /// Files with a finding
  pub findings: usize,
  /// Files that were rewritten in fix mode
  pub fixed: usize,
  /// Files or directories that could not be read
  pub errors: usize,
  pub elapsed: Duration,
}

impl RunSummary {
  pub const fn is_clean(&self) -> bool {
    self.findings == 0 && self.errors == 0
  }
}

/// Print an error for a single file to stderr.
///
/// These are always printed, even in quiet mode.
pub fn print_file_error(path: &Path, error: &anyhow::Error) {
  eprintln!(
    "{}: {} {:#}",
    path.display(),
    "error:".if_supports_color(Stream::Stderr, |s| s.red()),
    error
  );
}

/// Print a note that a file's header was rewritten.
pub fn print_fixed_file(path: &Path) {
  info_log!("{} {}: fixed boilerplate", symbols::FIXED, path.display());
}

/// Print the end-of-run summary to stderr.
pub fn print_summary(summary: &RunSummary, fix_mode: bool) {
  if is_quiet() {
    return;
  }

  let files_word = if summary.checked == 1 { "file" } else { "files" };
  let elapsed = format!("{:.2}s", summary.elapsed.as_secs_f64());

  if summary.is_clean() {
    eprintln!(
      "{} {} {} checked, all headers match ({})",
      symbols::SUCCESS.if_supports_color(Stream::Stderr, |s| s.green()),
      summary.checked,
      files_word,
      elapsed.if_supports_color(Stream::Stderr, |s| s.dimmed())
    );
    return;
  }

  let mut parts = vec![format!(
    "{} with {}",
    summary.findings,
    if summary.findings == 1 { "finding" } else { "findings" }
  )];
  if fix_mode {
    parts.push(format!("{} fixed", summary.fixed));
  }
  if summary.errors > 0 {
    parts.push(format!(
      "{} {}",
      summary.errors,
      if summary.errors == 1 { "error" } else { "errors" }
    ));
  }

  eprintln!(
    "{} {} {} checked: {} ({})",
    symbols::FAILURE.if_supports_color(Stream::Stderr, |s| s.red()),
    summary.checked,
    files_word,
    parts.join(", "),
    elapsed.if_supports_color(Stream::Stderr, |s| s.dimmed())
  );

  if !fix_mode && summary.findings > 0 {
    print_hint("Run with --fix to rewrite offending headers.");
  }
}

/// Print a hint message.
pub fn print_hint(message: &str) {
  if is_quiet() {
    return;
  }
  eprintln!(
    "{} {}",
    "hint:".if_supports_color(Stream::Stderr, |s| s.cyan()),
    message
  );
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;
  use crate::diff::LineDiff;
  use crate::normalize::denormalize_with_year;

  fn render(result: &MatchResult, boilerplate: &Boilerplate) -> String {
    let path = PathBuf::from("src/lib.mm");
    let mut out = Vec::new();
    write_finding(
      &mut out,
      &Finding {
        path: &path,
        result,
        boilerplate,
      },
    )
    .expect("write to vec");
    String::from_utf8(out).expect("utf-8 output")
  }

  fn year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
  }

  #[test]
  fn test_clean_writes_nothing() {
    let boilerplate = Boilerplate::from_text("A\n").expect("non-empty");
    assert_eq!(render(&MatchResult::Clean, &boilerplate), "");
  }

  #[test]
  fn test_missing_format() {
    let boilerplate = Boilerplate::from_text("/*\nCopyright 2020 Name\n*/\n").expect("non-empty");
    let expected = denormalize_with_year(
      "src/lib.mm:1: missing boilerplate:\n/*\nCopyright YYYY Name\n*/\n",
      year(),
    );
    assert_eq!(render(&MatchResult::Missing, &boilerplate), expected);
  }

  #[test]
  fn test_incomplete_format() {
    let boilerplate = Boilerplate::from_text("A\nB\nC\n").expect("non-empty");
    let result = MatchResult::Incomplete {
      line: 4,
      remainder: vec!["B".to_string(), "C".to_string()],
    };
    assert_eq!(
      render(&result, &boilerplate),
      "src/lib.mm:4: incomplete boilerplate, missing:\nB\nC\n"
    );
  }

  #[test]
  fn test_mismatched_format() {
    let boilerplate = Boilerplate::from_text("Copyright 2020 Matt Moore\n").expect("non-empty");
    let result = MatchResult::Mismatched {
      line: 2,
      anchor: 1,
      diff: LineDiff::between(
        &["Copyright YYYY Matt Moore".to_string()],
        &["Copyright YYYY Matt More".to_string()],
      ),
    };
    let expected = denormalize_with_year(
      "src/lib.mm:2: found mismatched boilerplate lines:\n[0]:\n\t-: \"Copyright YYYY Matt Moore\"\n\t+: \"Copyright YYYY Matt More\"\n",
      year(),
    );
    assert_eq!(render(&result, &boilerplate), expected);
  }

  #[test]
  fn test_summary_is_clean() {
    let mut summary = RunSummary {
      checked: 3,
      ..RunSummary::default()
    };
    assert!(summary.is_clean());
    summary.errors = 1;
    assert!(!summary.is_clean());
  }
}
