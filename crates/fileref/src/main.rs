//! fileref - resolve values that are file paths or inline contents
//!
//! A thin CLI over the `fileref-core` resolver: print a file's contents
//! when the argument names one, or the argument itself when it does not.

use clap::Parser;

mod commands;

use commands::Cli;

fn main() {
    fileref_core::logging::init();

    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
