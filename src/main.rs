use std::process::ExitCode;

use bridgestub::{
    cli::{Arguments, ExitStatus},
    reporter,
};
use clap::Parser;

fn main() -> ExitCode {
    let args = Arguments::parse();

    match bridgestub::cli::run_cli(args) {
        Ok(()) => ExitStatus::Success.into(),
        Err(err) => {
            reporter::error(&err);
            ExitStatus::Error.into()
        }
    }
}
