//! Convert - Read, escape and overwrite the lyrics file

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::diag::Diag;
use crate::core::escape::lrc_to_literal;
use crate::core::file_reader::read_text;

/// File converted by the binary, relative to the working directory
pub const DEFAULT_LYRICS_FILE: &str = "cvt_lrc.txt";

/// Printed to stdout once the file has been rewritten
pub const FINISHED_MESSAGE: &str = "Finished!";

/// Summary of a single conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOutcome {
    pub path: PathBuf,
    pub bytes_read: usize,
    pub bytes_written: usize,
}

/// Read `path`, escape it and write the literal back to the same path.
///
/// The file is only opened for writing after a successful read, so a read
/// failure leaves it untouched. A failing write may leave it truncated.
pub fn convert_file(path: &Path) -> Result<ConvertOutcome> {
    let lyrics = read_text(path)?;
    let literal = lrc_to_literal(&lyrics);

    fs::write(path, &literal).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(ConvertOutcome {
        path: path.to_path_buf(),
        bytes_read: lyrics.len(),
        bytes_written: literal.len(),
    })
}

/// Run the conversion and print the completion message
pub fn run_convert(path: &Path, diag: &Diag) -> Result<()> {
    diag.step("read", path.display().to_string());

    let outcome = convert_file(path)?;

    diag.step(
        "write",
        format!(
            "{} ({} bytes in, {} bytes out)",
            outcome.path.display(),
            outcome.bytes_read,
            outcome.bytes_written
        ),
    );

    println!("{}", FINISHED_MESSAGE);
    Ok(())
}
