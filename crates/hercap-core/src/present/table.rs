use crate::{CompanyRecord, FilteredView};

/// Rows for the data table, sorted by market cap descending.
///
/// Equal caps keep their view order. The export artifact does not use this ordering.
pub fn display_rows<'a>(view: &FilteredView<'a>) -> Vec<&'a CompanyRecord> {
    let mut rows = view.records().to_vec();
    rows.sort_by(|a, b| b.market_cap_billions_usd.total_cmp(&a.market_cap_billions_usd));
    rows
}
