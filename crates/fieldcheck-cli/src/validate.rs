//! # Validate Subcommand
//!
//! Decodes and validates one or more schema documents. Every file is
//! checked even after a failure; the exit code reports whether all passed.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use fieldcheck_schema::{SchemaError, SchemaValidator, ValidationMode, ValidatorConfig};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Schema documents to validate.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Report every violation instead of stopping at the first.
    #[arg(long)]
    pub collect_all: bool,

    /// Reject fields nested deeper than this (top level is depth 1).
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub max_depth: Option<usize>,
}

impl ValidateArgs {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply(&self, mut config: ValidatorConfig) -> ValidatorConfig {
        if self.collect_all {
            config.mode = ValidationMode::CollectAll;
        }
        if let Some(depth) = self.max_depth {
            config.max_depth = Some(depth);
        }
        config
    }
}

/// Format an error with its source chain, one cause per line.
pub fn render_error(err: &SchemaError) -> String {
    let mut out = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        out.push_str("\n  caused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, config: ValidatorConfig) -> Result<u8> {
    let config = args.apply(config);
    config.check()?;
    tracing::debug!(?config, files = args.paths.len(), "validating schema documents");

    let validator = SchemaValidator::new(config);
    let mut failed = 0usize;

    for path in &args.paths {
        match validator.validate_file(path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "schema valid");
                println!("OK    {}", path.display());
            }
            Err(e) => {
                failed += 1;
                println!("FAIL  {}", path.display());
                println!("{}", render_error(&e));
            }
        }
    }

    if failed > 0 {
        tracing::warn!(failed, total = args.paths.len(), "schema validation failed");
        Ok(1)
    } else {
        Ok(0)
    }
}
