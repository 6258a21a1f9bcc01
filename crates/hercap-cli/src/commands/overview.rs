use serde::Serialize;

use hercap_core::{DashboardSnapshot, InsightPanel, Metric, DASHBOARD_TITLE};

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct OverviewResponseData<'a> {
    title: &'static str,
    metrics: &'a [Metric],
    insights: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

pub fn run(snapshot: &DashboardSnapshot<'_>) -> Result<CommandResult, CliError> {
    let mut text = vec![String::from(DASHBOARD_TITLE), String::new()];

    let data = match &snapshot.panel {
        InsightPanel::Ready {
            metrics, insights, ..
        } => {
            let width = metrics.iter().map(|m| m.label.len()).max().unwrap_or(0);
            for metric in metrics {
                text.push(format!("{:<width$}  {}", metric.label, metric.value));
            }
            text.push(String::new());
            text.push(String::from("Automated Insights"));
            text.extend(insights.iter().map(|line| format!("  * {line}")));

            OverviewResponseData {
                title: DASHBOARD_TITLE,
                metrics,
                insights,
                message: None,
            }
        }
        InsightPanel::NoData { message } => {
            text.push((*message).to_owned());
            OverviewResponseData {
                title: DASHBOARD_TITLE,
                metrics: &[],
                insights: &[],
                message: Some(*message),
            }
        }
    };

    Ok(CommandResult::ok(serde_json::to_value(data)?, snapshot.view.len()).with_text(text))
}
