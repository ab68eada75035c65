//! Diagnostics on stderr
//!
//! stdout is reserved for the completion message, so everything else goes
//! through here and is only printed in verbose mode.

use colored::Colorize;

/// Verbose-gated stderr reporter
#[derive(Debug, Clone, Copy, Default)]
pub struct Diag {
    verbose: bool,
    color: bool,
}

impl Diag {
    pub fn new(verbose: bool, color: bool) -> Self {
        if !color {
            colored::control::set_override(false);
        }
        Self { verbose, color }
    }

    /// A reporter that prints nothing
    #[cfg(test)]
    pub fn silent() -> Self {
        Self::default()
    }

    /// Print one `[step] message` line when verbose
    pub fn step(&self, step: &str, message: impl AsRef<str>) {
        if self.verbose {
            eprintln!("{}", self.format_step(step, message.as_ref()));
        }
    }

    fn format_step(&self, step: &str, message: &str) -> String {
        if self.color {
            format!("{} {}", format!("[{}]", step).as_str().cyan().bold(), message)
        } else {
            format!("[{}] {}", step, message)
        }
    }
}
