use anyhow::Result;

use crate::reporter;

mod args;
mod exit_status;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<()> {
    let summary = run::run(args)?;
    reporter::print_summary(
        summary.headers.len(),
        summary.files_processed,
        summary.directories,
    );
    Ok(())
}
