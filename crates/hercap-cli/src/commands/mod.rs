mod charts;
mod data;
mod export;
mod insights;
mod options;
mod overview;

use hercap_core::{
    Dashboard, DashboardSnapshot, Envelope, EnvelopeMeta, FilterCriteria, MarketCapRange,
    DATASET_NAME,
};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::cli::{Cli, Command, FilterArgs};
use crate::error::CliError;

pub const SCHEMA_VERSION: &str = "v1.0.0";

#[derive(Debug)]
pub struct CommandResult {
    pub data: Value,
    /// Human-readable lines for the `table` format.
    pub text: Vec<String>,
    pub warnings: Vec<String>,
    pub record_count: usize,
}

impl CommandResult {
    pub fn ok(data: Value, record_count: usize) -> Self {
        Self {
            data,
            text: Vec::new(),
            warnings: Vec::new(),
            record_count,
        }
    }

    pub fn with_text(mut self, text: Vec<String>) -> Self {
        self.text = text;
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }
}

/// Envelope plus the text rendering of the same payload.
pub struct Rendered {
    pub envelope: Envelope<Value>,
    pub text: Vec<String>,
}

pub fn run(cli: &Cli) -> Result<Rendered, CliError> {
    debug!(command = ?cli.command, "running command");
    let dashboard = Dashboard::builtin()?;

    let command_result = match &cli.command {
        Command::Options => options::run(&dashboard)?,
        Command::Overview => with_snapshot(&dashboard, &cli.filters, overview::run)?,
        Command::Data => with_snapshot(&dashboard, &cli.filters, data::run)?,
        Command::Charts => with_snapshot(&dashboard, &cli.filters, charts::run)?,
        Command::Insights => with_snapshot(&dashboard, &cli.filters, insights::run)?,
        Command::Export(args) => {
            with_snapshot(&dashboard, &cli.filters, |snapshot| export::run(args, snapshot))?
        }
    };

    let CommandResult {
        data,
        text,
        warnings,
        record_count,
    } = command_result;

    let mut meta = EnvelopeMeta::new(
        Uuid::new_v4().to_string(),
        SCHEMA_VERSION,
        DATASET_NAME,
        record_count,
    )?;
    for warning in warnings {
        meta.push_warning(warning);
    }

    Ok(Rendered {
        envelope: Envelope::new(meta, data)?,
        text,
    })
}

/// Recompute the dashboard for the current selection and render one tab of it.
fn with_snapshot<F>(
    dashboard: &Dashboard,
    filters: &FilterArgs,
    render: F,
) -> Result<CommandResult, CliError>
where
    F: FnOnce(&DashboardSnapshot<'_>) -> Result<CommandResult, CliError>,
{
    let criteria = build_criteria(dashboard, filters)?;
    let snapshot = dashboard.refresh(&criteria);
    let result = render(&snapshot)?;
    Ok(result.with_warnings(snapshot.warnings))
}

/// Turn the three independent selections into one criteria value.
pub fn build_criteria(
    dashboard: &Dashboard,
    filters: &FilterArgs,
) -> Result<FilterCriteria, CliError> {
    let mut criteria = dashboard.default_criteria();

    if filters.no_country {
        criteria = criteria.with_countries(Vec::<String>::new());
    } else if !filters.countries.is_empty() {
        criteria = criteria.with_countries(filters.countries.iter().cloned());
    }

    if filters.no_exchange {
        criteria = criteria.with_exchanges(Vec::<String>::new());
    } else if !filters.exchanges.is_empty() {
        criteria = criteria.with_exchanges(filters.exchanges.iter().cloned());
    }

    let bounds = dashboard.options().market_cap_bounds;
    let range = MarketCapRange::new(
        filters.min_cap.unwrap_or(bounds.min()),
        filters.max_cap.unwrap_or(bounds.max()),
    )?;

    Ok(criteria.with_market_cap_range(range))
}
