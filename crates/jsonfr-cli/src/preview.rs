//! # Preview Subcommand
//!
//! Lists every string that a replacement would change, one line per field,
//! without writing anything. `--json` prints the change list as JSON.

use anyhow::Result;
use clap::Args;

use jsonfr_replace::Change;

use crate::config::CliConfig;
use crate::replace::InputArgs;

/// Arguments for the preview subcommand.
#[derive(Args, Debug)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print the change list as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the preview subcommand.
pub fn run_preview(args: &PreviewArgs, config: &CliConfig) -> Result<u8> {
    let outcome = args.input.execute(config)?;
    let changes = outcome.changes();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&changes)?);
    } else {
        print!("{}", format_changes(&changes, outcome.total_matches()));
    }
    Ok(0)
}

/// Human-readable listing: `path: before -> after (n)` per change, then a total.
pub fn format_changes(changes: &[Change], total: usize) -> String {
    let mut out = String::new();
    for change in changes {
        let path = if change.path.is_empty() { "(root)" } else { change.path.as_str() };
        out.push_str(&format!(
            "  {path}: {:?} -> {:?} ({})\n",
            change.before, change.after, change.count
        ));
    }
    out.push('\n');
    out.push_str(&format!("Total: {total} replacements in {} fields\n", changes.len()));
    out
}
