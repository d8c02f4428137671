//! CLI command dispatch and execution

use anyhow::Result;
use clap::{Parser, Subcommand};

mod check;
mod resolve;

/// fileref - resolve values that are file paths or inline contents
#[derive(Parser, Debug)]
#[command(
    name = "fileref",
    version,
    about = "Resolve values that are file paths or inline contents",
    long_about = "Decides whether a value names an existing file (after ~ expansion) and \
                  prints the file's contents, or prints the value itself when no entry \
                  exists at that location"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a value and print the resulting contents
    Resolve(resolve::ResolveArgs),

    /// Report whether a value is a file path or literal contents
    Check(check::CheckArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Resolve(args) => resolve::execute(args),
            Commands::Check(args) => check::execute(args),
        }
    }
}
