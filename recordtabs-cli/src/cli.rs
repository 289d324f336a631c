use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

#[derive(Parser, Debug)]
#[command(name = "recordtabs")]
#[command(version)]
#[command(about = "Inspect record display tabs outside the web application")]
#[command(long_about = "
recordtabs resolves record display tabs the same way the record page does,
so hierarchy configuration and record fixtures can be checked from a shell.

Global arguments can be used with any command:
  --verbose     Show trace output
  --debug       Show debug output
  --quiet       Suppress all output except errors

Example usage:
  recordtabs config                                  # Resolved Hierarchy settings
  recordtabs tree --fixture record.yaml              # Tree tab decisions
  recordtabs tree --fixture record.yaml --render     # Also render the active tree
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the resolved hierarchy configuration
    Config {
        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Resolve the hierarchy tree tab for a record fixture
    #[command(long_about = "
Builds the hierarchy tree tab for the record described in a YAML fixture and
reports whether the tab is shown, which tree is active and whether the full
tree is displayed.

Fixture format:
  id: coll-1
  trees:
    coll-1: Papers of the Family
  hierarchy:
    settings:
      fullHierarchyRecordView: false
    markup:
      coll-1: '<ul><li><a href=\"%%%%VUFIND-BASE-URL%%%%/Record/coll-1\">Papers</a></li></ul>'

Without --hierarchy, --query or --post the tab runs without a request.
")]
    Tree {
        /// Path to the record fixture
        #[arg(long)]
        fixture: PathBuf,

        /// Tree to select, sent as the `hierarchy` query parameter
        #[arg(long)]
        hierarchy: Option<String>,

        /// Raw query string
        #[arg(long)]
        query: Option<String>,

        /// Raw form body
        #[arg(long)]
        post: Option<String>,

        /// Base URL substituted into rendered links
        #[arg(long, default_value = "http://localhost/vufind")]
        base_url: String,

        /// Render context passed to the hierarchy driver
        #[arg(long, default_value = recordtabs::DEFAULT_CONTEXT)]
        context: String,

        /// Render the active tree
        #[arg(long)]
        render: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}
