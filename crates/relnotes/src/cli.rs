//! CLI definition.

use anyhow::Result;
use clap::Parser;

use crate::commands;

/// Generate release notes from a range of GitHub commits.
#[derive(Debug, Parser)]
#[command(name = "relnotes")]
#[command(about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    #[command(flatten)]
    pub generate: commands::generate::GenerateArgs,
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        commands::generate::run(self.generate)
    }
}
