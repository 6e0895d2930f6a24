//! licstamp - prepend a copyright notice to git-tracked source files
//!
//! licstamp provides:
//! - Tracked-file enumeration via the git index
//! - Extension-based comment formatting for the notice block
//! - Idempotent insertion guarded by a marker substring
//! - A text or JSON run report

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod flows;
mod header;
mod vcs;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
