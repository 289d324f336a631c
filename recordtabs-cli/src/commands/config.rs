//! `config` command - show the resolved hierarchy settings

use crate::cli::OutputFormat;
use crate::commands::print_structured;
use crate::error::CliResult;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use recordtabs::{TreeSearchSettings, SEARCH_CONFIG_KEY, SEARCH_LIMIT_CONFIG_KEY, UNLIMITED_SEARCH};
use recordtabs_config::{Config, ConfigScope, FileDiscovery};
use serde::Serialize;

/// Load configuration without failing the command
///
/// A broken configuration file should not stop the CLI from reporting what
/// it can, so errors fall back to the built-in defaults.
pub fn load_cli_configuration() -> Config {
    match recordtabs_config::load_configuration() {
        Ok(config) => {
            tracing::debug!("Loaded configuration with {} sections", config.len());
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load configuration: {}", e);
            eprintln!("Warning: Configuration loading failed: {}", e);
            eprintln!("Continuing with default configuration...");
            Config::new()
        }
    }
}

#[derive(Debug, Serialize)]
struct ConfigReport {
    sources: Vec<String>,
    search: TreeSearchSettings,
}

pub fn handle_command(format: OutputFormat) -> CliResult<()> {
    let config = load_cli_configuration();
    let report = ConfigReport {
        sources: FileDiscovery::new()
            .discover_all()
            .into_iter()
            .map(|file| format!("{} ({})", file.path.display(), scope_label(file.scope)))
            .collect(),
        search: TreeSearchSettings::from_config(&config),
    };

    match format {
        OutputFormat::Table => {
            print_table(&report);
            Ok(())
        }
        _ => print_structured(&report, format),
    }
}

fn print_table(report: &ConfigReport) {
    println!("{}", "Hierarchy Settings:".bold());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Setting", "Value"]);

    let limit = if report.search.limit == UNLIMITED_SEARCH {
        format!("{} (unlimited)", UNLIMITED_SEARCH)
    } else {
        report.search.limit.to_string()
    };
    table.add_row(vec![
        Cell::new(SEARCH_CONFIG_KEY),
        Cell::new(report.search.active),
    ]);
    table.add_row(vec![Cell::new(SEARCH_LIMIT_CONFIG_KEY), Cell::new(limit)]);
    println!("{table}");

    if report.sources.is_empty() {
        println!("No configuration files found, using defaults");
    } else {
        println!("{}", "Configuration files:".bold());
        for source in &report.sources {
            println!("  {}", source);
        }
    }
}

fn scope_label(scope: ConfigScope) -> &'static str {
    match scope {
        ConfigScope::Global => "global",
        ConfigScope::Project => "project",
    }
}
