//! # fieldcheck CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fieldcheck_cli::load_config;
use fieldcheck_cli::types::run_types;
use fieldcheck_cli::validate::{run_validate, ValidateArgs};

/// fieldcheck: validate YAML field schemas against the supported data types.
#[derive(Parser, Debug)]
#[command(name = "fieldcheck", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML validator configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode and validate schema documents.
    Validate(ValidateArgs),

    /// List the supported data types.
    Types,
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

    let result = match cli.command {
        Commands::Validate(args) => {
            load_config(cli.config.as_deref()).and_then(|config| run_validate(&args, config))
        }
        Commands::Types => run_types(),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_validate_single_file() {
        let cli = Cli::try_parse_from(["fieldcheck", "validate", "schema.yaml"]).unwrap();
        let Commands::Validate(args) = cli.command else {
            panic!("Expected validate");
        };
        assert_eq!(args.paths, vec![PathBuf::from("schema.yaml")]);
        assert!(!args.collect_all);
        assert!(args.max_depth.is_none());
    }

    #[test]
    fn cli_parse_validate_flags() {
        let cli = Cli::try_parse_from([
            "fieldcheck",
            "validate",
            "--collect-all",
            "--max-depth",
            "15",
            "a.yaml",
            "b.yaml",
        ])
        .unwrap();
        let Commands::Validate(args) = cli.command else {
            panic!("Expected validate");
        };
        assert!(args.collect_all);
        assert_eq!(args.max_depth, Some(15));
        assert_eq!(args.paths.len(), 2);
    }

    #[test]
    fn cli_parse_validate_requires_a_path() {
        assert!(Cli::try_parse_from(["fieldcheck", "validate"]).is_err());
    }

    #[test]
    fn cli_parse_rejects_non_numeric_depth() {
        assert!(Cli::try_parse_from(["fieldcheck", "validate", "--max-depth", "deep", "a.yaml"]).is_err());
    }

    #[test]
    fn cli_parse_global_options() {
        let cli = Cli::try_parse_from([
            "fieldcheck",
            "-vv",
            "validate",
            "--config",
            "fieldcheck.yaml",
            "a.yaml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("fieldcheck.yaml")));
    }

    #[test]
    fn cli_parse_types() {
        let cli = Cli::try_parse_from(["fieldcheck", "types"]).unwrap();
        assert!(matches!(cli.command, Commands::Types));
    }
}
