//! # jsonfr CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jsonfr_cli::config::CliConfig;
use jsonfr_cli::preview::{run_preview, PreviewArgs};
use jsonfr_cli::replace::{run_replace, ReplaceArgs};

/// Schema-guided find & replace for JSON and YAML documents.
///
/// Replaces literal text in every string the editor schema allows to be
/// edited, skipping disabled, hidden and `$ref` fields, and renders an
/// HTML diff of the changes.
#[derive(Parser, Debug)]
#[command(name = "jsonfr", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replace text in a document and write the result.
    Replace(ReplaceArgs),

    /// List the changes a replacement would make.
    Preview(PreviewArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = CliConfig::load(cli.config.as_deref()).and_then(|config| match &cli.command {
        Commands::Replace(args) => run_replace(args, &config),
        Commands::Preview(args) => run_preview(args, &config),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonfr_replace::DiffMode;

    const INPUTS: [&str; 8] = [
        "--document",
        "doc.json",
        "--schema",
        "schema.yaml",
        "--search",
        "value",
        "--replacement",
        "new",
    ];

    fn parse(prefix: &[&str], suffix: &[&str]) -> Result<Cli, clap::Error> {
        let mut argv = vec!["jsonfr"];
        argv.extend_from_slice(prefix);
        argv.extend_from_slice(&INPUTS);
        argv.extend_from_slice(suffix);
        Cli::try_parse_from(argv)
    }

    #[test]
    fn cli_parse_replace_basic() {
        let cli = parse(&["replace"], &[]).unwrap();
        let Commands::Replace(args) = cli.command else {
            panic!("expected replace");
        };
        assert_eq!(args.input.document, PathBuf::from("doc.json"));
        assert_eq!(args.input.schema, PathBuf::from("schema.yaml"));
        assert_eq!(args.input.search, "value");
        assert_eq!(args.input.replacement, "new");
        assert_eq!(args.input.match_whole, None);
        assert!(args.input.diff_mode.is_none());
        assert!(args.output.is_none());
        assert!(args.diff_output.is_none());
        assert!(!args.compact);
    }

    #[test]
    fn cli_parse_replace_all_options() {
        let cli = parse(
            &["replace"],
            &[
                "--match-whole",
                "--diff-mode",
                "dense",
                "--output",
                "out.json",
                "--diff-output",
                "diff.json",
                "--compact",
            ],
        )
        .unwrap();
        let Commands::Replace(args) = cli.command else {
            panic!("expected replace");
        };
        assert_eq!(args.input.match_whole, Some(true));
        assert_eq!(args.input.diff_mode, Some(DiffMode::Dense));
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert_eq!(args.diff_output, Some(PathBuf::from("diff.json")));
        assert!(args.compact);
    }

    #[test]
    fn cli_parse_match_whole_explicit_false() {
        let cli = parse(&["preview"], &["--match-whole=false"]).unwrap();
        let Commands::Preview(args) = cli.command else {
            panic!("expected preview");
        };
        assert_eq!(args.input.match_whole, Some(false));
    }

    #[test]
    fn cli_parse_preview_json() {
        let cli = parse(&["preview"], &["--json"]).unwrap();
        let Commands::Preview(args) = cli.command else {
            panic!("expected preview");
        };
        assert!(args.json);
    }

    #[test]
    fn cli_parse_rejects_unknown_diff_mode() {
        assert!(parse(&["replace"], &["--diff-mode", "full"]).is_err());
    }

    #[test]
    fn cli_parse_requires_search() {
        let result = Cli::try_parse_from([
            "jsonfr",
            "replace",
            "--document",
            "d.json",
            "--schema",
            "s.json",
            "--replacement",
            "x",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_empty_search_is_allowed() {
        let cli = Cli::try_parse_from([
            "jsonfr",
            "preview",
            "--document",
            "d.json",
            "--schema",
            "s.json",
            "--search",
            "",
            "--replacement",
            "x",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Preview(_)));
    }

    #[test]
    fn cli_parse_verbose_and_config() {
        let cli = parse(&["-vv", "--config", "jsonfr.yaml", "replace"], &[]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("jsonfr.yaml")));
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["jsonfr"]).is_err());
    }
}
