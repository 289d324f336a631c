//! `tree` command - resolve the hierarchy tree tab for a record fixture

use crate::cli::OutputFormat;
use crate::commands::config::load_cli_configuration;
use crate::commands::print_structured;
use crate::error::{CliError, CliResult};
use crate::fixture::FixtureRecord;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use recordtabs::{
    HierarchyTreeTab, RecordDriver, RecordTab, Request, RequestParams, TreeList,
    TreeSearchSettings, HIERARCHY_PARAM,
};
use recordtabs_config::Config;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments of the `tree` command
#[derive(Debug, Clone)]
pub struct TreeArgs {
    pub fixture: PathBuf,
    pub hierarchy: Option<String>,
    pub query: Option<String>,
    pub post: Option<String>,
    pub base_url: String,
    pub context: String,
    pub render: bool,
    pub format: OutputFormat,
}

/// What the tab decided for a record
#[derive(Debug, Serialize)]
pub struct TreeReport {
    pub record_id: String,
    pub tab: String,
    pub is_active: bool,
    pub trees: TreeList,
    pub active_tree: Option<String>,
    pub full_hierarchy: bool,
    pub search: TreeSearchSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup: Option<String>,
}

pub fn handle_command(args: TreeArgs) -> CliResult<()> {
    let record = FixtureRecord::load(&args.fixture)?;
    let report = build_report(Arc::new(record), &args, load_cli_configuration())?;

    match args.format {
        OutputFormat::Table => {
            print_table(&report);
            Ok(())
        }
        format => print_structured(&report, format),
    }
}

/// Run the tab against `record` and collect its decisions
///
/// # Errors
///
/// Fails when `--render` is given and the hierarchy driver cannot render
/// the active tree.
pub fn build_report(
    record: Arc<FixtureRecord>,
    args: &TreeArgs,
    config: Config,
) -> CliResult<TreeReport> {
    let mut tab = HierarchyTreeTab::new(record).with_config(config);
    tab.set_request(
        request_from_args(args).map(|request| Arc::new(request) as Arc<dyn Request>),
    );

    let markup = if args.render {
        let markup = tab
            .render_tree(&args.base_url, None, &args.context)
            .map_err(|e| CliError::from_severity_error("Failed to render hierarchy tree", e))?;
        Some(markup)
    } else {
        None
    };

    Ok(TreeReport {
        record_id: tab.record().unique_id().to_string(),
        tab: tab.description().to_string(),
        is_active: tab.is_active(),
        trees: tab.tree_list().clone(),
        active_tree: tab.active_tree(),
        full_hierarchy: tab.full_hierarchy_setting(),
        search: TreeSearchSettings {
            active: tab.search_active(),
            limit: tab.search_limit(),
        },
        markup,
    })
}

// No request at all unless one of the request flags was given
fn request_from_args(args: &TreeArgs) -> Option<RequestParams> {
    if args.hierarchy.is_none() && args.query.is_none() && args.post.is_none() {
        return None;
    }

    let request = RequestParams::from_encoded(
        args.query.as_deref().unwrap_or_default(),
        args.post.as_deref().unwrap_or_default(),
    );
    Some(match &args.hierarchy {
        Some(hierarchy) => request.with_query(HIERARCHY_PARAM, hierarchy.as_str()),
        None => request,
    })
}

fn print_table(report: &TreeReport) {
    println!("{}", format!("Record {}:", report.record_id).bold());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Property", "Value"]);

    let trees = if report.trees.is_empty() {
        "(none)".to_string()
    } else {
        report
            .trees
            .iter()
            .map(|(id, title)| format!("{id}: {title}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    table.add_row(vec![Cell::new("Tab"), Cell::new(&report.tab)]);
    table.add_row(vec![Cell::new("Active"), Cell::new(report.is_active)]);
    table.add_row(vec![Cell::new("Trees"), Cell::new(trees)]);
    table.add_row(vec![
        Cell::new("Active tree"),
        Cell::new(report.active_tree.as_deref().unwrap_or("(none)")),
    ]);
    table.add_row(vec![
        Cell::new("Full hierarchy"),
        Cell::new(report.full_hierarchy),
    ]);
    table.add_row(vec![
        Cell::new("Tree search"),
        Cell::new(report.search.active),
    ]);
    table.add_row(vec![
        Cell::new("Tree search limit"),
        Cell::new(report.search.limit),
    ]);
    println!("{table}");

    if let Some(markup) = &report.markup {
        println!("{}", "Rendered tree:".bold());
        println!("{}", markup);
    }
}
