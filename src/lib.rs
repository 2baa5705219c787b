//! # boilerplate-check
//!
//! A tool that checks that source files begin with a required boilerplate
//! header, such as a license notice.
//!
//! Four-digit years are ignored when comparing, so a header written years ago
//! still passes. Findings are reported as `path:line: message` diagnostics
//! that review bots can attach to the exact line that differs, and a fix mode
//! rewrites offending headers in place.
//!
//! ## Features
//!
//! * Anchor search within the first lines of a file, so shebangs, build tags
//!   and package clauses may precede the header
//! * Minimal, aligned line diffs starting at the first differing line
//! * Extension and regular-expression based file selection
//! * Optional `.boilerplate-check.toml` with repository defaults
//! * In-place header repair with `--fix`
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//!
//! use boilerplate_check::options::{CheckOptions, RawOptions};
//! use boilerplate_check::processor::Processor;
//!
//! fn main() -> anyhow::Result<()> {
//!     let options = CheckOptions::resolve(RawOptions {
//!         boilerplate: Some(PathBuf::from("hack/boilerplate.go.txt")),
//!         file_extension: Some("go".to_string()),
//!         exclude: Some("^vendor/".to_string()),
//!         ..RawOptions::default()
//!     })?;
//!
//!     let processor = Processor::new(options);
//!     let summary = processor.run(&mut std::io::stdout())?;
//!
//!     if summary.findings > 0 {
//!         eprintln!("{} files need attention", summary.findings);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`matcher`] - Header matching against the boilerplate
//! * [`diff`] - Aligned line diffs
//! * [`normalize`] - Year normalization
//! * [`processor`] - Directory walking, reporting and fixing
//! * [`logging`] - Logging utilities for verbose output

pub mod boilerplate;
pub mod config;
pub mod diff;
pub mod file_filter;
pub mod logging;
pub mod matcher;
pub mod normalize;
pub mod options;
pub mod output;
pub mod processor;
pub mod version;
