//! Human-readable metrics and insight strings.

use serde::Serialize;
use tracing::debug;

use crate::{summarize, FilteredView, InsightSummary};

/// Message shown in place of statistics when nothing matches the filters.
pub const NO_DATA_MESSAGE: &str = "No companies match the current filters.";

/// Label shown for the empty exchange value.
pub const UNLISTED_LABEL: &str = "(unlisted)";

/// One overview card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

/// Insight text for a view, or the neutral no-data state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InsightPanel<'a> {
    Ready {
        summary: InsightSummary<'a>,
        metrics: Vec<Metric>,
        insights: Vec<String>,
        findings: Vec<String>,
    },
    NoData {
        message: &'static str,
    },
}

impl<'a> InsightPanel<'a> {
    pub fn from_view(view: &FilteredView<'a>) -> Self {
        match summarize(view) {
            Ok(summary) => Self::Ready {
                metrics: overview_metrics(&summary),
                insights: automated_insights(&summary),
                findings: key_findings(&summary),
                summary,
            },
            Err(error) => {
                debug!(%error, "rendering no-data panel");
                Self::NoData {
                    message: NO_DATA_MESSAGE,
                }
            }
        }
    }

    pub fn summary(&self) -> Option<&InsightSummary<'a>> {
        match self {
            Self::Ready { summary, .. } => Some(summary),
            Self::NoData { .. } => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

pub fn overview_metrics(summary: &InsightSummary<'_>) -> Vec<Metric> {
    vec![
        Metric {
            label: "Total Market Cap",
            value: billions(summary.total_market_cap),
        },
        Metric {
            label: "Average Market Cap",
            value: millions(summary.average_market_cap),
        },
        Metric {
            label: "Median Founded Year",
            value: format!("{:.1}", summary.median_founded_year),
        },
        Metric {
            label: "Number of Companies",
            value: summary.record_count.to_string(),
        },
    ]
}

pub fn automated_insights(summary: &InsightSummary<'_>) -> Vec<String> {
    vec![
        format!(
            "The total market cap of the selected companies is {}.",
            billions(summary.total_market_cap)
        ),
        format!(
            "On average, companies have a market cap of {}.",
            millions(summary.average_market_cap)
        ),
        format!(
            "The median founded year is {:.1}.",
            summary.median_founded_year
        ),
        format!(
            "There are {} companies from {} countries.",
            summary.record_count, summary.distinct_country_count
        ),
    ]
}

pub fn key_findings(summary: &InsightSummary<'_>) -> Vec<String> {
    let exchange = if summary.modal_exchange.is_empty() {
        UNLISTED_LABEL
    } else {
        summary.modal_exchange
    };

    vec![
        format!(
            "Oldest Company: {} ({})",
            summary.oldest.name, summary.oldest.founded_year
        ),
        format!(
            "Newest Company: {} ({})",
            summary.newest.name, summary.newest.founded_year
        ),
        format!(
            "Largest Employer: {} ({} employees)",
            summary.largest_employer.name,
            group_digits(summary.largest_employer.employee_count)
        ),
        format!("Most Common Exchange: {exchange}"),
    ]
}

/// Market cap in billions, e.g. `$615B`.
fn billions(value_billions: f64) -> String {
    format!("${}B", format_grouped(value_billions, 0))
}

/// Market cap converted from billions to millions, e.g. `$30,734M`.
fn millions(value_billions: f64) -> String {
    format!("${}M", format_grouped(value_billions * 1_000.0, 0))
}

/// Fixed-point formatting with comma-grouped integer digits.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut out = String::with_capacity(formatted.len() + integer.len() / 3 + 1);
    let is_zero = formatted.chars().all(|ch| ch == '0' || ch == '.');
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&group_ascii_digits(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

pub fn group_digits(value: u64) -> String {
    group_ascii_digits(&value.to_string())
}

fn group_ascii_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(113_000), "113,000");
        assert_eq!(group_digits(1_234_567), "1,234,567");
    }

    #[test]
    fn formats_fixed_point_with_grouping() {
        assert_eq!(format_grouped(30_733.56, 0), "30,734");
        assert_eq!(format_grouped(1_234.5678, 2), "1,234.57");
        assert_eq!(format_grouped(-0.2, 0), "0");
        assert_eq!(format_grouped(-1_500.0, 0), "-1,500");
    }

    #[test]
    fn empty_view_renders_no_data_panel() {
        let view = FilteredView::from_records(Vec::new());
        let panel = InsightPanel::from_view(&view);
        assert_eq!(
            panel,
            InsightPanel::NoData {
                message: NO_DATA_MESSAGE
            }
        );
        assert!(panel.summary().is_none());
    }

    #[test]
    fn unlisted_modal_exchange_gets_a_label() {
        let records = [crate::CompanyRecord::new(
            "INVO Bioscience",
            2.69,
            2007,
            20,
            "Florida, USA",
            "",
        )
        .expect("record")];
        let view = FilteredView::from_records(records.iter().collect());
        let panel = InsightPanel::from_view(&view);
        let InsightPanel::Ready { findings, .. } = panel else {
            panic!("single record view must summarize");
        };
        assert_eq!(findings[3], "Most Common Exchange: (unlisted)");
    }
}
