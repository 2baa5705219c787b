//! # Matcher Module
//!
//! Decides whether a file starts with the boilerplate.
//!
//! The file's first [`ANCHOR_LOOKAHEAD`] lines are searched for the
//! boilerplate's first line (the anchor), which leaves room for shebangs,
//! build tags or package declarations above the header. From the anchor on,
//! exactly as many lines as the boilerplate has are read and compared
//! position by position. Reading stops as soon as the outcome is known.

use std::io;

use crate::boilerplate::Boilerplate;
use crate::diff::LineDiff;
use crate::normalize::normalize;

/// How many lines from the top of a file are searched for the anchor.
pub const ANCHOR_LOOKAHEAD: usize = 10;

/// Outcome of checking one file against the boilerplate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
  /// The header matches.
  Clean,

  /// The anchor was not found within the lookahead window. Reported at line 1.
  Missing,

  /// The anchor was found at `line` but the file ended early.
  Incomplete {
    /// 1-based line of the anchor.
    line: usize,
    /// Normalized boilerplate lines the file never supplied.
    remainder: Vec<String>,
  },

  /// At least one header line differs from the boilerplate.
  Mismatched {
    /// 1-based line of the first difference.
    line: usize,
    /// 1-based line of the anchor.
    anchor: usize,
    /// Diff from the first differing line onward.
    diff: LineDiff,
  },
}

impl MatchResult {
  pub const fn is_clean(&self) -> bool {
    matches!(self, MatchResult::Clean)
  }

  /// The line a finding should be reported at, `None` for clean files.
  pub const fn line(&self) -> Option<usize> {
    match self {
      MatchResult::Clean => None,
      MatchResult::Missing => Some(1),
      MatchResult::Incomplete { line, .. } | MatchResult::Mismatched { line, .. } => Some(*line),
    }
  }
}

/// Checks a file's lines against `boilerplate`.
///
/// `lines` yields the file's lines without terminators. Read errors are
/// returned as-is and never turned into a finding.
pub fn check<I>(boilerplate: &Boilerplate, lines: I) -> io::Result<MatchResult>
where
  I: IntoIterator<Item = io::Result<String>>,
{
  let want = boilerplate.lines();
  let mut lines = lines.into_iter();

  let mut anchor = None;
  for (idx, line) in lines.by_ref().take(ANCHOR_LOOKAHEAD).enumerate() {
    if normalize(&line?) == boilerplate.anchor() {
      anchor = Some(idx + 1);
      break;
    }
  }
  let Some(anchor) = anchor else {
    return Ok(MatchResult::Missing);
  };

  let mut collected = Vec::with_capacity(want.len());
  collected.push(boilerplate.anchor().to_string());
  while collected.len() < want.len() {
    match lines.next() {
      Some(line) => collected.push(normalize(&line?)),
      None => {
        return Ok(MatchResult::Incomplete {
          line: anchor,
          remainder: want[collected.len()..].to_vec(),
        });
      }
    }
  }

  // Report at the first differing line rather than the top of the comment:
  // review tools drop comments on lines outside the changed hunk.
  let first_difference = want.iter().zip(&collected).position(|(w, g)| w != g);
  Ok(match first_difference {
    None => MatchResult::Clean,
    Some(i) => MatchResult::Mismatched {
      line: anchor + i,
      anchor,
      diff: LineDiff::between(&want[i..], &collected[i..]),
    },
  })
}
