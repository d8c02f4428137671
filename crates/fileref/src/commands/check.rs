//! Check command implementation

use anyhow::{Context, Result};
use clap::Args;
use fileref_core::path_or_contents;

/// Report whether a value is a file path or literal contents
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Value to classify
    value: String,
}

/// Execute the check command
///
/// An entry that exists but cannot be read is reported as an error rather
/// than classified; only a confirmed read counts as `path`.
pub fn execute(args: CheckArgs) -> Result<()> {
    let resolved = path_or_contents(&args.value)
        .with_context(|| format!("Failed to resolve {:?}", args.value))?;

    if resolved.was_path() {
        println!("path");
    } else {
        println!("literal");
    }

    Ok(())
}
