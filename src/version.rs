//! # Version Module
//!
//! Build metadata for the `version` command. The values are passed around as
//! a plain struct so callers and tests can supply their own.

use std::fmt;

/// Placeholder for metadata that was not available at build time.
pub const UNKNOWN: &str = "unknown";

/// Version and provenance of a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
  pub version: String,
  /// Commit date, `YYYY-MM-DD`.
  pub build_date: String,
  /// Short commit hash.
  pub git_revision: String,
}

impl BuildInfo {
  /// Metadata embedded into this binary by `build.rs`.
  pub fn current() -> Self {
    Self {
      version: env!("CARGO_PKG_VERSION").to_string(),
      build_date: non_empty(option_env!("GIT_DATE")),
      git_revision: non_empty(option_env!("GIT_HASH")),
    }
  }
}

fn non_empty(value: Option<&str>) -> String {
  value.filter(|v| !v.is_empty()).unwrap_or(UNKNOWN).to_string()
}

impl fmt::Display for BuildInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "version: {}", self.version)?;
    writeln!(f, "built:   {}", self.build_date)?;
    writeln!(f, "git:     {}", self.git_revision)
  }
}
