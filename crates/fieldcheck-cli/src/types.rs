//! # Types Subcommand
//!
//! Prints the supported data-type vocabulary.

use anyhow::Result;
use fieldcheck_core::DataType;

/// One line per token: the token and whether it is primitive or composite.
pub fn render_types() -> String {
    DataType::all()
        .iter()
        .map(|dt| {
            let kind = if dt.is_composite() { "composite" } else { "primitive" };
            format!("  {:<10} {kind}", dt.as_str())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Execute the types subcommand.
pub fn run_types() -> Result<u8> {
    println!("Supported data types:");
    println!("{}", render_types());
    Ok(0)
}
