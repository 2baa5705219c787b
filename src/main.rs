//! # boilerplate-check
//!
//! A tool that checks source files start with a required boilerplate header.

mod cli;

use anyhow::Result;
use boilerplate_check::version::BuildInfo;

use crate::cli::{Cli, Command, run_check};

fn main() -> Result<()> {
  let cli = Cli::parse_args();

  match cli.command {
    Command::Check(args) => run_check(args),
    Command::Version => {
      print!("{}", BuildInfo::current());
      Ok(())
    }
  }
}
