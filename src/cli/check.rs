//! # Check Command
//!
//! This module implements the `check` command: resolve the settings, scan
//! the tree, print findings and pick the exit code.

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use boilerplate_check::config::load_config;
use boilerplate_check::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use boilerplate_check::options::{CheckOptions, RawOptions};
use boilerplate_check::output::print_summary;
use boilerplate_check::processor::Processor;
use boilerplate_check::verbose_log;
use clap::Args;
use tracing::debug;

/// Exit code for configuration errors, reported before any file is scanned.
const EXIT_CONFIG_ERROR: i32 = 2;

/// Exit code when the run found something to act on.
const EXIT_FAILURE: i32 = 1;

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
  /// Directories to scan recursively (default: current directory)
  #[arg(required = false, value_name = "PATHS")]
  pub paths: Vec<PathBuf>,

  /// File containing the boilerplate every checked file must start with
  #[arg(long, value_name = "FILE")]
  pub boilerplate: Option<PathBuf>,

  /// Extension of the files to check, without the leading dot
  #[arg(long, value_name = "EXT")]
  pub file_extension: Option<String>,

  /// Regular expression for paths to skip, matched against the reported path
  /// (scan root included, leading `./` removed)
  #[arg(long, value_name = "REGEX")]
  pub exclude: Option<String>,

  /// Rewrite offending headers in place
  #[arg(long)]
  pub fix: bool,

  /// Exit with a non-zero status when any finding is reported
  #[arg(long)]
  pub fail_on_findings: bool,

  /// Path to config file (default: .boilerplate-check.toml in the current
  /// directory)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long, conflicts_with = "config")]
  pub no_config: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except findings and errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

impl CheckArgs {
  fn raw_options(&self) -> RawOptions {
    RawOptions {
      boilerplate: self.boilerplate.clone(),
      file_extension: self.file_extension.clone(),
      exclude: self.exclude.clone(),
      paths: self.paths.clone(),
      fix: self.fix,
    }
  }
}

/// Run the check command with the given arguments
pub fn run_check(args: CheckArgs) -> Result<()> {
  // Initialize tracing subscriber for structured logging
  init_tracing(args.quiet, args.verbose);

  // Set verbose mode for output formatting and info_log! macro
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let current_dir = std::env::current_dir().context("Failed to get current directory")?;

  let config = match load_config(args.config.as_deref(), &current_dir, args.no_config) {
    Ok(config) => config,
    Err(e) => {
      eprintln!("ERROR: {e:#}");
      process::exit(EXIT_CONFIG_ERROR);
    }
  };
  if config.is_some() {
    debug!("Using configuration file defaults");
  }

  let options = match CheckOptions::resolve(args.raw_options().or_config(config)) {
    Ok(options) => options,
    Err(e) => {
      eprintln!("ERROR: {e}");
      process::exit(EXIT_CONFIG_ERROR);
    }
  };

  verbose_log!(
    "Checking *.{} files in {} path(s)",
    options.file_extension,
    options.paths.len()
  );

  let fix_mode = options.fix;
  let processor = Processor::new(options);
  let summary = processor.run(&mut io::stdout().lock())?;

  print_summary(&summary, fix_mode);

  if summary.errors > 0 || (fix_mode && summary.fixed > 0) || (args.fail_on_findings && summary.findings > 0) {
    process::exit(EXIT_FAILURE);
  }

  Ok(())
}
