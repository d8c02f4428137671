//! Resolve command implementation

use anyhow::{Context, Result};
use clap::Args;
use fileref_core::path_or_contents;

/// Resolve a value and print the resulting contents
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Value to resolve (file path or literal contents)
    value: String,

    /// Output as JSON, including the path/literal classification
    #[arg(long)]
    json: bool,
}

/// Execute the resolve command
pub fn execute(args: ResolveArgs) -> Result<()> {
    let resolved = path_or_contents(&args.value)
        .with_context(|| format!("Failed to resolve {:?}", args.value))?;

    if args.json {
        let out = serde_json::json!({
            "contents": resolved.contents(),
            "was_path": resolved.was_path(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        // Contents go out verbatim; callers pipe them into files or other
        // tools, so no trailing newline is added.
        print!("{}", resolved.contents());
    }

    Ok(())
}
