//! Console output for generation runs.
//!
//! Progress goes to stdout, diagnostics to stderr. Colors follow `colored`'s
//! global setting, so `NO_COLOR` disables them.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a progress line such as `Writing: /out/Signal/Signal-Swift.h`.
pub fn progress(label: &str, path: &Path) {
    println!("{} {}", label.bold(), path.display());
}

/// Print a skipped path with the reason, e.g.
/// `Skipping: /out/Signal/Signal-Swift.h (no bridgeable declarations)`.
pub fn skipping(path: &Path, reason: &str) {
    println!("{} {} ({})", "Skipping:".bold(), path.display(), reason);
}

/// Print a non-fatal diagnostic to stderr.
pub fn warning(message: &str) {
    eprintln!("{} {}", "warning:".bold().yellow(), message);
}

/// Print a fatal error, including its context chain, to stderr.
pub fn error(err: &anyhow::Error) {
    eprintln!("{} {} {:#}", FAILURE_MARK.red(), "error:".bold().red(), err);
}

/// Print the end-of-run summary.
pub fn print_summary(headers_written: usize, files_processed: usize, directories: usize) {
    print_summary_to(
        headers_written,
        files_processed,
        directories,
        &mut io::stdout().lock(),
    );
}

/// Print the end-of-run summary to a custom writer.
pub fn print_summary_to<W: Write>(
    headers_written: usize,
    files_processed: usize,
    directories: usize,
    writer: &mut W,
) {
    let msg = format!(
        "Generated {} {} from {} Swift {} in {} {}",
        headers_written,
        if headers_written == 1 {
            "header"
        } else {
            "headers"
        },
        files_processed,
        if files_processed == 1 { "file" } else { "files" },
        directories,
        if directories == 1 {
            "directory"
        } else {
            "directories"
        }
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}
