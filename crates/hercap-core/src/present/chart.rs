use serde::Serialize;

use crate::FilteredView;

/// Template name handed to the charting collaborator.
pub const CHART_TEMPLATE: &str = "plotly_dark";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarPoint {
    pub company: String,
    pub market_cap_billions_usd: f64,
}

/// Company vs market cap, smallest bar first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: &'static str,
    pub template: &'static str,
    pub x_field: &'static str,
    pub y_field: &'static str,
    pub points: Vec<BarPoint>,
}

impl BarChart {
    pub fn from_view(view: &FilteredView<'_>) -> Self {
        let mut points: Vec<BarPoint> = view
            .iter()
            .map(|r| BarPoint {
                company: r.name.clone(),
                market_cap_billions_usd: r.market_cap_billions_usd,
            })
            .collect();
        points.sort_by(|a, b| a.market_cap_billions_usd.total_cmp(&b.market_cap_billions_usd));

        Self {
            title: "Companies by Market Cap",
            template: CHART_TEMPLATE,
            x_field: "Company",
            y_field: "Market_Cap",
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub founded_year: i32,
    pub market_cap_billions_usd: f64,
    /// Drives marker size.
    pub employee_count: u64,
    /// Hover label.
    pub company: String,
}

/// Founded year vs market cap in view order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: &'static str,
    pub template: &'static str,
    pub x_field: &'static str,
    pub y_field: &'static str,
    pub size_field: &'static str,
    pub hover_field: &'static str,
    pub points: Vec<ScatterPoint>,
}

impl ScatterChart {
    pub fn from_view(view: &FilteredView<'_>) -> Self {
        let points = view
            .iter()
            .map(|r| ScatterPoint {
                founded_year: r.founded_year,
                market_cap_billions_usd: r.market_cap_billions_usd,
                employee_count: r.employee_count,
                company: r.name.clone(),
            })
            .collect();

        Self {
            title: "Founded Year vs Market Cap",
            template: CHART_TEMPLATE,
            x_field: "Founded",
            y_field: "Market_Cap",
            size_field: "Employees",
            hover_field: "Company",
            points,
        }
    }
}
