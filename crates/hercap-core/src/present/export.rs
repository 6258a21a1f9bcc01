//! CSV export artifact.

use std::io::{Read, Write};

use serde::Deserialize;
use tracing::info;

use crate::{CompanyRecord, ExportError, FilteredView};

/// File name offered for download.
pub const EXPORT_FILE_NAME: &str = "filtered_companies.csv";

/// Header row, in record attribute order.
pub const EXPORT_HEADER: [&str; 6] = [
    "Company",
    "Market_Cap",
    "Founded",
    "Employees",
    "Headquarters",
    "Exchange",
];

#[derive(Debug, Deserialize)]
struct ExportRow {
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "Market_Cap")]
    market_cap: f64,
    #[serde(rename = "Founded")]
    founded: i32,
    #[serde(rename = "Employees")]
    employees: u64,
    #[serde(rename = "Headquarters")]
    headquarters: String,
    #[serde(rename = "Exchange")]
    exchange: String,
}

/// Write the view as CSV, one row per record in natural view order.
///
/// Market caps use the shortest decimal form that reads back to the same `f64`.
pub fn write_export<W: Write>(view: &FilteredView<'_>, writer: W) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(EXPORT_HEADER)?;

    for record in view.iter() {
        csv.write_record([
            record.name.clone(),
            record.market_cap_billions_usd.to_string(),
            record.founded_year.to_string(),
            record.employee_count.to_string(),
            record.headquarters.to_string(),
            record.exchange.clone(),
        ])?;
    }

    csv.flush()?;
    info!(rows = view.len(), "export written");
    Ok(())
}

/// Render the export artifact to a UTF-8 string.
pub fn render_export(view: &FilteredView<'_>) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_export(view, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Read an export artifact back into validated records.
pub fn parse_export<R: Read>(reader: R) -> Result<Vec<CompanyRecord>, ExportError> {
    let mut csv = csv::Reader::from_reader(reader);
    csv.deserialize::<ExportRow>()
        .enumerate()
        .map(|(row, result)| {
            let parsed = result?;
            CompanyRecord::new(
                parsed.company,
                parsed.market_cap,
                parsed.founded,
                parsed.employees,
                &parsed.headquarters,
                parsed.exchange,
            )
            .map_err(|source| ExportError::InvalidRow { row, source })
        })
        .collect()
}
