use serde::Serialize;

use hercap_core::{DashboardSnapshot, InsightPanel};

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct InsightsResponseData<'a> {
    findings: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

pub fn run(snapshot: &DashboardSnapshot<'_>) -> Result<CommandResult, CliError> {
    let (data, text) = match &snapshot.panel {
        InsightPanel::Ready { findings, .. } => {
            let mut text = vec![String::from("Key Findings")];
            text.extend(findings.iter().map(|line| format!("  * {line}")));
            (
                InsightsResponseData {
                    findings,
                    message: None,
                },
                text,
            )
        }
        InsightPanel::NoData { message } => (
            InsightsResponseData {
                findings: &[],
                message: Some(*message),
            },
            vec![(*message).to_owned()],
        ),
    };

    Ok(CommandResult::ok(serde_json::to_value(data)?, snapshot.view.len()).with_text(text))
}
