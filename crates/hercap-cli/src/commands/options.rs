use hercap_core::present::UNLISTED_LABEL;
use hercap_core::Dashboard;

use crate::error::CliError;

use super::CommandResult;

pub fn run(dashboard: &Dashboard) -> Result<CommandResult, CliError> {
    let options = dashboard.options();
    let data = serde_json::to_value(options)?;

    let exchanges: Vec<&str> = options
        .exchanges
        .iter()
        .map(|e| if e.is_empty() { UNLISTED_LABEL } else { e.as_str() })
        .collect();
    let text = vec![
        format!("countries : {}", options.countries.join(", ")),
        format!("exchanges : {}", exchanges.join(", ")),
        format!(
            "market cap: {} to {} ($B)",
            options.market_cap_bounds.min(),
            options.market_cap_bounds.max()
        ),
    ];

    Ok(CommandResult::ok(data, dashboard.store().len()).with_text(text))
}
