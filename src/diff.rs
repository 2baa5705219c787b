//! # Diff Module
//!
//! Line-level diffs between the expected boilerplate and what a file
//! actually contains.
//!
//! The two sides are aligned with the `similar` crate so that a single
//! inserted or deleted line shows up as one group instead of a cascade of
//! substitutions. Each group is labelled with its position:
//!
//! - `[i]` a changed line at index `i` on both sides
//! - `[i->j]` a changed line whose indices differ after an earlier shift
//! - `[i->?]` a line only present in the boilerplate
//! - `[?->j]` a line only present in the file
//!
//! ```text
//! [4->?]:
//! 	-: ""
//! 	+: <non-existent>
//! ```

use std::fmt;

use similar::{Algorithm, DiffTag, capture_diff_slices};

/// Marker rendered for the side of a group that has no line.
pub const NON_EXISTENT: &str = "<non-existent>";

/// Where a diff group sits in the two sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
  /// Line changed in place: `want[want] != got[got]`.
  Changed { want: usize, got: usize },
  /// Line present only in the expected sequence.
  Removed(usize),
  /// Line present only in the actual sequence.
  Added(usize),
}

impl fmt::Display for Position {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Position::Changed { want, got } if want == got => write!(f, "[{want}]"),
      Position::Changed { want, got } => write!(f, "[{want}->{got}]"),
      Position::Removed(want) => write!(f, "[{want}->?]"),
      Position::Added(got) => write!(f, "[?->{got}]"),
    }
  }
}

/// A single edit in a [`LineDiff`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffGroup {
  pub position: Position,
  /// The expected line, if this group has one.
  pub want: Option<String>,
  /// The actual line, if this group has one.
  pub got: Option<String>,
}

impl fmt::Display for DiffGroup {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}:", self.position)?;
    writeln!(f, "\t-: {}", quote(self.want.as_deref()))?;
    write!(f, "\t+: {}", quote(self.got.as_deref()))
  }
}

fn quote(line: Option<&str>) -> String {
  match line {
    Some(line) => format!("{line:?}"),
    None => NON_EXISTENT.to_string(),
  }
}

/// An aligned, line-oriented diff between an expected and an actual
/// sequence. Equal lines are not recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineDiff {
  groups: Vec<DiffGroup>,
}

impl LineDiff {
  /// Computes the diff from `want` to `got`.
  pub fn between(want: &[String], got: &[String]) -> Self {
    let mut groups = Vec::new();

    for op in capture_diff_slices(Algorithm::Myers, want, got) {
      let (tag, old, new) = op.as_tag_tuple();
      match tag {
        DiffTag::Equal => {}
        DiffTag::Delete => {
          groups.extend(old.map(|i| DiffGroup {
            position: Position::Removed(i),
            want: Some(want[i].clone()),
            got: None,
          }));
        }
        DiffTag::Insert => {
          groups.extend(new.map(|j| DiffGroup {
            position: Position::Added(j),
            want: None,
            got: Some(got[j].clone()),
          }));
        }
        DiffTag::Replace => {
          // Pair lines up in order; whatever is left over on either side is a
          // plain removal or addition.
          let paired = old.len().min(new.len());
          for k in 0..paired {
            let (i, j) = (old.start + k, new.start + k);
            groups.push(DiffGroup {
              position: Position::Changed { want: i, got: j },
              want: Some(want[i].clone()),
              got: Some(got[j].clone()),
            });
          }
          groups.extend((old.start + paired..old.end).map(|i| DiffGroup {
            position: Position::Removed(i),
            want: Some(want[i].clone()),
            got: None,
          }));
          groups.extend((new.start + paired..new.end).map(|j| DiffGroup {
            position: Position::Added(j),
            want: None,
            got: Some(got[j].clone()),
          }));
        }
      }
    }

    Self { groups }
  }

  pub fn groups(&self) -> &[DiffGroup] {
    &self.groups
  }

  pub fn is_empty(&self) -> bool {
    self.groups.is_empty()
  }
}

impl fmt::Display for LineDiff {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (n, group) in self.groups.iter().enumerate() {
      if n > 0 {
        writeln!(f)?;
      }
      write!(f, "{group}")?;
    }
    Ok(())
  }
}

/// Returns how many leading lines of `got` take part in the alignment with
/// `want`.
///
/// Lines of `got` that only appear after the last line aligned with (or
/// substituted for) a `want` line are not counted. This is the extent of an
/// existing header in a file, as far as the boilerplate can tell.
///
/// A replacement pairs lines in order, the same way [`LineDiff::between`]
/// renders it; `got` lines left over past the pairs count as additions.
pub fn aligned_len(want: &[String], got: &[String]) -> usize {
  capture_diff_slices(Algorithm::Myers, want, got)
    .iter()
    .filter_map(|op| match op.as_tag_tuple() {
      (DiffTag::Equal | DiffTag::Delete, _, new) => Some(new.end),
      (DiffTag::Replace, old, new) => Some(new.start + old.len().min(new.len())),
      (DiffTag::Insert, _, _) => None,
    })
    .max()
    .unwrap_or(0)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
  }

  #[test]
  fn test_identical_sequences_have_no_groups() {
    let want = lines(&["a", "b", "c"]);
    let diff = LineDiff::between(&want, &want);
    assert!(diff.is_empty());
    assert_eq!(diff.to_string(), "");
  }

  #[test]
  fn test_single_substitution() {
    let diff = LineDiff::between(&lines(&["C"]), &lines(&["X"]));
    assert_eq!(diff.to_string(), "[0]:\n\t-: \"C\"\n\t+: \"X\"");
  }

  #[test]
  fn test_tab_is_escaped() {
    let diff = LineDiff::between(&lines(&["    http://x"]), &lines(&["\thttp://x"]));
    assert_eq!(diff.to_string(), "[0]:\n\t-: \"    http://x\"\n\t+: \"\\thttp://x\"");
  }

  #[test]
  fn test_inserted_lines_are_additions() {
    let want = lines(&["L1", "L2", "L3"]);
    let got = lines(&["L1", "", "L2", "", "L3"]);
    let diff = LineDiff::between(&want, &got);

    let positions: Vec<_> = diff.groups().iter().map(|g| g.position).collect();
    assert_eq!(positions, vec![Position::Added(1), Position::Added(3)]);
    assert!(diff.to_string().contains("[?->1]:\n\t-: <non-existent>\n\t+: \"\""));
  }

  #[test]
  fn test_deleted_and_trailing_lines() {
    let want = lines(&["", "a", "b", "", "c", "", "d", "e"]);
    let got = lines(&["a", "b", "c", "d", "e", "", "x", "y"]);
    let diff = LineDiff::between(&want, &got);

    let positions: Vec<_> = diff.groups().iter().map(|g| g.position).collect();
    assert_eq!(
      positions,
      vec![
        Position::Removed(0),
        Position::Removed(3),
        Position::Removed(5),
        Position::Added(5),
        Position::Added(6),
        Position::Added(7),
      ]
    );
  }

  #[test]
  fn test_position_display() {
    assert_eq!(Position::Changed { want: 2, got: 2 }.to_string(), "[2]");
    assert_eq!(Position::Changed { want: 2, got: 4 }.to_string(), "[2->4]");
    assert_eq!(Position::Removed(3).to_string(), "[3->?]");
    assert_eq!(Position::Added(7).to_string(), "[?->7]");
  }

  #[test]
  fn test_aligned_len_excludes_trailing_additions() {
    let want = lines(&["/*", "a", "", "b", "*/"]);
    let got = lines(&["/*", "a", "b", "*/", "", "code"]);
    assert_eq!(aligned_len(&want, &got), 4);
  }

  #[test]
  fn test_aligned_len_stops_at_mistyped_last_line() {
    let want = lines(&["/*", "a", "*/"]);
    let got = lines(&["/*", "a", "**/", "", "fn a() {}", "fn b() {}"]);
    assert_eq!(aligned_len(&want, &got), 3);
  }

  #[test]
  fn test_aligned_len_counts_substitutions() {
    let want = lines(&["/*", "a", "*/"]);
    let got = lines(&["/*", "typo", "*/", "code"]);
    assert_eq!(aligned_len(&want, &got), 3);
  }
}
