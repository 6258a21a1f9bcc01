use serde::Serialize;

use hercap_core::present::group_digits;
use hercap_core::{BarChart, DashboardSnapshot, ScatterChart};

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct ChartsResponseData<'a> {
    bar: &'a BarChart,
    scatter: &'a ScatterChart,
}

pub fn run(snapshot: &DashboardSnapshot<'_>) -> Result<CommandResult, CliError> {
    let bar = &snapshot.bar_chart;
    let scatter = &snapshot.scatter_chart;
    let data = serde_json::to_value(ChartsResponseData { bar, scatter })?;

    let mut text = vec![format!("{} ({} vs {})", bar.title, bar.x_field, bar.y_field)];
    text.extend(
        bar.points
            .iter()
            .map(|p| format!("  {:<30} {}", p.company, p.market_cap_billions_usd)),
    );
    text.push(String::new());
    text.push(format!(
        "{} ({} vs {}, size = {})",
        scatter.title, scatter.x_field, scatter.y_field, scatter.size_field
    ));
    text.extend(scatter.points.iter().map(|p| {
        format!(
            "  {}  {:<10} {:>8} employees  {}",
            p.founded_year,
            p.market_cap_billions_usd,
            group_digits(p.employee_count),
            p.company
        )
    }));

    Ok(CommandResult::ok(data, snapshot.view.len()).with_text(text))
}
