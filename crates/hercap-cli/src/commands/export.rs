//! Export the filtered view to CSV.

use std::fs;

use serde::Serialize;

use hercap_core::DashboardSnapshot;

use crate::cli::ExportArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct ExportResponseData {
    output: String,
    format: &'static str,
    rows_exported: usize,
    exported: bool,
}

/// Renders the CSV in memory before the destination is opened.
pub fn run(args: &ExportArgs, snapshot: &DashboardSnapshot<'_>) -> Result<CommandResult, CliError> {
    let csv = snapshot.export_csv()?;
    fs::write(&args.output, csv)?;

    let output = args.output.display().to_string();
    let rows_exported = snapshot.view.len();
    let data = serde_json::to_value(ExportResponseData {
        output: output.clone(),
        format: "csv",
        rows_exported,
        exported: true,
    })?;

    Ok(CommandResult::ok(data, rows_exported)
        .with_text(vec![format!("Exported {rows_exported} rows to {output}")]))
}
