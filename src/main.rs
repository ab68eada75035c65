//! cvt-lrc - Escape a lyrics file in place for embedding in source code
//!
//! Reads `cvt_lrc.txt` from the working directory, rewrites it as a single
//! `lyrics: '...',` line and prints `Finished!`.

use anyhow::Result;
use clap::Parser;

mod cli;
mod convert;
mod core;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
