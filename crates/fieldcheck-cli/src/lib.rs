//! # fieldcheck-cli: Command-Line Interface
//!
//! Provides the `fieldcheck` binary.
//!
//! ## Subcommands
//!
//! - `fieldcheck validate <FILE>...`: decode and validate schema documents.
//! - `fieldcheck types`: list the supported data types.
//!
//! ```bash
//! fieldcheck validate schemas/orders.yaml
//! fieldcheck validate --collect-all --max-depth 15 schemas/*.yaml
//! fieldcheck --config fieldcheck.yaml validate schemas/orders.yaml
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; validation logic lives in
//!   `fieldcheck-schema`.
//! - Handlers return the process exit code: 0 when every document is valid,
//!   1 otherwise.

pub mod types;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use fieldcheck_schema::ValidatorConfig;

/// Load the validator configuration, or the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<ValidatorConfig> {
    match path {
        Some(path) => ValidatorConfig::from_yaml_file(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(ValidatorConfig::default()),
    }
}
