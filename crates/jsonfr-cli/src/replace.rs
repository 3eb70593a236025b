//! # Replace Subcommand
//!
//! Runs a find & replace and writes the replaced document (stdout unless
//! `--output` is set) and, optionally, the rendered HTML diff.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use jsonfr_replace::{DiffMode, FindReplace, FindReplaceOutcome};

use crate::config::CliConfig;
use crate::io::{load_schema, load_value, write_value};

/// Inputs shared by `replace` and `preview`.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Document to edit (JSON, or YAML for .yaml/.yml).
    #[arg(long)]
    pub document: PathBuf,

    /// Editor schema guiding the traversal.
    #[arg(long)]
    pub schema: PathBuf,

    /// Literal text to search for.
    #[arg(long)]
    pub search: String,

    /// Text substituted for each occurrence.
    #[arg(long)]
    pub replacement: String,

    /// Only replace values exactly equal to the search text. Bare
    /// `--match-whole` means `true`; `--match-whole=false` overrides a
    /// config file that enables it.
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub match_whole: Option<bool>,

    /// Diff rendering: sparse or dense.
    #[arg(long)]
    pub diff_mode: Option<DiffMode>,
}

impl InputArgs {
    /// Load the inputs and run the replacement.
    pub fn execute(&self, config: &CliConfig) -> Result<FindReplaceOutcome> {
        let document = load_value(&self.document)?;
        let schema = load_schema(&self.schema)?;
        let options = config.options_with(self.match_whole, self.diff_mode);

        tracing::info!(
            document = %self.document.display(),
            schema = %self.schema.display(),
            match_whole = options.match_whole,
            diff_mode = %options.diff_mode,
            "running find/replace"
        );

        let outcome = FindReplace::new(self.search.as_str(), self.replacement.as_str())
            .with_options(options)
            .run(&document, &schema)?;
        Ok(outcome)
    }
}

/// Arguments for the replace subcommand.
#[derive(Args, Debug)]
pub struct ReplaceArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write the replaced document here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Write the rendered diff here.
    #[arg(long)]
    pub diff_output: Option<PathBuf>,

    /// Emit compact JSON.
    #[arg(long)]
    pub compact: bool,
}

/// Execute the replace subcommand.
pub fn run_replace(args: &ReplaceArgs, config: &CliConfig) -> Result<u8> {
    let outcome = args.input.execute(config)?;
    let pretty = config.pretty && !args.compact;

    write_value(outcome.replaced(), args.output.as_deref(), pretty)?;
    if let Some(path) = &args.diff_output {
        write_value(&outcome.diff_html(), Some(path), pretty)?;
    }

    tracing::info!(
        matches = outcome.total_matches(),
        fields = outcome.changed_fields(),
        "replacement complete"
    );
    Ok(0)
}
