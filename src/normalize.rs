//! # Normalize Module
//!
//! Year handling for boilerplate comparison.
//!
//! Every line is normalized before it is compared, replacing runs of four
//! digits with the [`YEAR_PLACEHOLDER`] token so that a header written in 2019
//! still matches a boilerplate written in 2024. When a diagnostic is rendered
//! the placeholder is swapped back for the current year, so the text a user
//! copies out of a report is ready to paste.
//!
//! The match is purely textual: any four-digit number (a port, a line width)
//! is normalized too, and years outside 1000..=9999 are not. Existing
//! boilerplate files depend on this exact behavior.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;

/// Token that stands in for a four-digit year in normalized text.
pub const YEAR_PLACEHOLDER: &str = "YYYY";

static YEAR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{4}").expect("year regex must compile"));

/// Replaces every run of four ASCII digits with [`YEAR_PLACEHOLDER`].
///
/// Runs are consumed left to right without overlap, so `12345` becomes
/// `YYYY5`. Normalizing already-normalized text is a no-op.
pub fn normalize(line: &str) -> String {
  match YEAR_REGEX.replace_all(line, YEAR_PLACEHOLDER) {
    Cow::Borrowed(unchanged) => unchanged.to_string(),
    Cow::Owned(replaced) => replaced,
  }
}

/// Replaces every [`YEAR_PLACEHOLDER`] with the current calendar year.
///
/// The year is read from the local clock on each call.
pub fn denormalize(text: &str) -> String {
  denormalize_with_year(text, chrono::Local::now().year())
}

/// Replaces every [`YEAR_PLACEHOLDER`] with `year`.
pub fn denormalize_with_year(text: &str, year: i32) -> String {
  text.replace(YEAR_PLACEHOLDER, &year.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_normalize_replaces_year() {
    assert_eq!(normalize("Copyright 2020 Matt Moore"), "Copyright YYYY Matt Moore");
    assert_eq!(normalize("Copyright 1999-2024 Acme"), "Copyright YYYY-YYYY Acme");
  }

  #[test]
  fn test_normalize_leaves_short_runs() {
    assert_eq!(normalize("version 1.2.3"), "version 1.2.3");
    assert_eq!(normalize("port 808"), "port 808");
    assert_eq!(normalize(""), "");
  }

  #[test]
  fn test_normalize_long_runs_are_consumed_left_to_right() {
    assert_eq!(normalize("12345"), "YYYY5");
    assert_eq!(normalize("20202021"), "YYYYYYYY");
    assert_eq!(normalize("listen on 8080"), "listen on YYYY");
  }

  #[test]
  fn test_normalize_is_idempotent() {
    for line in ["Copyright 2020 Matt Moore", "12345678 9", "1231234", "no digits", "YYYY"] {
      let once = normalize(line);
      assert_eq!(normalize(&once), once, "normalize not idempotent for {line:?}");
    }
  }

  #[test]
  fn test_normalize_ignores_non_ascii_digits() {
    // Arabic-Indic digits are not part of the heuristic.
    assert_eq!(normalize("\u{0662}\u{0660}\u{0662}\u{0660}"), "\u{0662}\u{0660}\u{0662}\u{0660}");
  }

  #[test]
  fn test_denormalize_with_year() {
    assert_eq!(
      denormalize_with_year("Copyright YYYY Matt Moore", 2031),
      "Copyright 2031 Matt Moore"
    );
    assert_eq!(denormalize_with_year("YYYY-YYYY", 2031), "2031-2031");
    assert_eq!(denormalize_with_year("nothing here", 2031), "nothing here");
  }

  #[test]
  fn test_denormalize_uses_current_year() {
    let year = chrono::Local::now().year();
    assert_eq!(denormalize(&normalize("Copyright 1999 Name")), format!("Copyright {year} Name"));
  }
}
