//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use crate::convert::{run_convert, DEFAULT_LYRICS_FILE};
use crate::core::diag::Diag;

/// cvt-lrc - escape a lyrics file so it can be pasted into a string literal.
#[derive(Parser, Debug)]
#[command(name = "cvt-lrc")]
#[command(
    author,
    version,
    about,
    long_about = r#"cvt-lrc rewrites ./cvt_lrc.txt in place as a single line:

    lyrics: '<escaped text>',

Newlines become \n, double quotes become \", the four-per-em space
(U+2005) and medium mathematical space (U+205F) become plain spaces, and
the Cyrillic letter "е" (U+0435) becomes the Latin "e".

The previous contents of the file are overwritten. On success the tool
prints "Finished!" to stdout.

Example:
    cvt-lrc
"#
)]
pub struct Cli {
    /// Verbose mode (diagnostics on stderr).
    #[arg(
        short,
        long,
        long_help = "Print what was read and written to stderr. stdout still carries only\n\
the completion message."
    )]
    pub verbose: bool,

    /// Disable colored diagnostics.
    #[arg(
        long,
        long_help = "Disable colored diagnostics. This is useful when stderr is redirected\n\
to a file or the terminal does not support ANSI colors."
    )]
    pub no_color: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let diag = Diag::new(cli.verbose, !cli.no_color);
    run_convert(Path::new(DEFAULT_LYRICS_FILE), &diag)
}
