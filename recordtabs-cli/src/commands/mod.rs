//! Command implementations

pub mod config;
pub mod tree;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use serde::Serialize;

/// Print `value` as JSON or YAML
///
/// Table output is command specific, so callers handle
/// [`OutputFormat::Table`] themselves.
pub(crate) fn print_structured<T: Serialize>(value: &T, format: OutputFormat) -> CliResult<()> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|e| CliError::from_error("Failed to serialize output", e))?,
        OutputFormat::Yaml | OutputFormat::Table => serde_yaml_ng::to_string(value)
            .map_err(|e| CliError::from_error("Failed to serialize output", e))?,
    };
    println!("{}", text.trim_end());
    Ok(())
}
