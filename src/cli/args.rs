//! CLI argument definitions using clap.
//!
//! There are no subcommands: a run always regenerates every header. Anything
//! beyond the paths and the intermediates switch is read from the
//! configuration file.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Arguments {
    /// Source root containing the dependency and project directories
    #[arg(long)]
    pub src_path: PathBuf,

    /// Output directory for generated headers (deleted and recreated on every run)
    #[arg(long)]
    pub swift_bridging_path: PathBuf,

    /// Write each file's raw structural dump next to it for debugging
    #[arg(long)]
    pub intermediates: bool,
}
