//! # Fixer Module
//!
//! Rewrites a file's header so that it matches the boilerplate.
//!
//! - A missing header is inserted at the top of the file, below a shebang
//!   line if there is one.
//! - An incomplete or mismatched header is located from its anchor line and
//!   replaced. The extent of the old header is found by aligning the lines
//!   after the anchor with the boilerplate; trailing lines that do not align
//!   (usually the code after the header) are kept.
//!
//! Work is done on raw bytes. Lines outside the header are copied through
//! unchanged, terminators and invalid UTF-8 included. New header lines take
//! the line ending of the file's first line, and a file that did not end in
//! a newline still does not.

use crate::boilerplate::Boilerplate;
use crate::diff::aligned_len;
use crate::matcher::{ANCHOR_LOOKAHEAD, MatchResult};
use crate::normalize::{denormalize, normalize};

/// Returns the fixed content, or `None` if `result` is clean.
///
/// `result` must be the outcome of checking `content` against
/// `boilerplate`.
pub fn fix_content(boilerplate: &Boilerplate, content: &[u8], result: &MatchResult) -> Option<Vec<u8>> {
  // Each slice keeps its terminator; only the last may lack one.
  let lines: Vec<&[u8]> = content.split_inclusive(|&b| b == b'\n').collect();

  let (start, len) = match result {
    MatchResult::Clean => return None,
    MatchResult::Missing => (usize::from(lines.first().is_some_and(|l| l.starts_with(b"#!"))), 0),
    MatchResult::Incomplete { line: anchor, .. } | MatchResult::Mismatched { anchor, .. } => {
      let start = anchor - 1;
      let window_end = lines.len().min(start + boilerplate.len() + ANCHOR_LOOKAHEAD);
      let window: Vec<String> = lines[start..window_end]
        .iter()
        .map(|l| normalize(&String::from_utf8_lossy(strip_line_ending(l))))
        .collect();
      (start, aligned_len(boilerplate.lines(), &window))
    }
  };
  let end = start + len;
  let eol = lines.first().map_or(&b"\n"[..], |l| line_ending(l));

  let mut fixed = Vec::with_capacity(content.len() + boilerplate.render().len());
  for line in &lines[..start] {
    fixed.extend_from_slice(line);
  }
  if !fixed.is_empty() && !fixed.ends_with(b"\n") {
    fixed.extend_from_slice(eol);
  }

  // Replacing an unterminated last line leaves the header unterminated too.
  let final_newline = !(len > 0 && end == lines.len() && !content.ends_with(b"\n"));
  let header = boilerplate.lines();
  for (idx, line) in header.iter().enumerate() {
    fixed.extend_from_slice(denormalize(line).as_bytes());
    if idx + 1 < header.len() || final_newline {
      fixed.extend_from_slice(eol);
    }
  }

  for line in &lines[end..] {
    fixed.extend_from_slice(line);
  }
  Some(fixed)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
  let line = line.strip_suffix(b"\n").unwrap_or(line);
  line.strip_suffix(b"\r").unwrap_or(line)
}

/// `\r\n` or `\n`; a line without a terminator counts as `\n`.
fn line_ending(line: &[u8]) -> &'static [u8] {
  if line.ends_with(b"\r\n") { b"\r\n" } else { b"\n" }
}
