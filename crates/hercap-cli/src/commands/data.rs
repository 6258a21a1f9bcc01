use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use hercap_core::present::{group_digits, NO_DATA_MESSAGE, UNLISTED_LABEL};
use hercap_core::{CompanyRecord, DashboardSnapshot, EXPORT_FILE_NAME};

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct DataResponseData<'a> {
    rows: &'a [&'a CompanyRecord],
    export_file: &'static str,
}

pub fn run(snapshot: &DashboardSnapshot<'_>) -> Result<CommandResult, CliError> {
    let data = serde_json::to_value(DataResponseData {
        rows: &snapshot.table,
        export_file: EXPORT_FILE_NAME,
    })?;

    let text = if snapshot.table.is_empty() {
        vec![String::from(NO_DATA_MESSAGE)]
    } else {
        let mut text: Vec<String> = companies_table(&snapshot.table)
            .to_string()
            .lines()
            .map(String::from)
            .collect();
        text.push(format!("Export with `hercap export` to {EXPORT_FILE_NAME}"));
        text
    };

    Ok(CommandResult::ok(data, snapshot.view.len()).with_text(text))
}

fn companies_table(rows: &[&CompanyRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Company",
            "Market Cap ($B)",
            "Founded",
            "Employees",
            "Headquarters",
            "Exchange",
        ]);

    for record in rows {
        let exchange = if record.is_listed() {
            record.exchange.as_str()
        } else {
            UNLISTED_LABEL
        };
        table.add_row(vec![
            Cell::new(&record.name),
            Cell::new(record.market_cap_billions_usd).set_alignment(CellAlignment::Right),
            Cell::new(record.founded_year),
            Cell::new(group_digits(record.employee_count)).set_alignment(CellAlignment::Right),
            Cell::new(&record.headquarters),
            Cell::new(exchange),
        ]);
    }

    table
}
