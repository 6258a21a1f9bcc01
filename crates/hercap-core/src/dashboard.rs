//! Filter → summarize → present pipeline.
//!
//! [`Dashboard::refresh`] recomputes everything from scratch for each
//! [`FilterCriteria`] value. Nothing is cached between calls, so the shell may
//! call it again on every selection change.

use serde::Serialize;
use tracing::{debug, warn};

use crate::present::{display_rows, render_export, BarChart, InsightPanel, ScatterChart};
use crate::{
    apply, CompanyRecord, ExportError, FilterCriteria, FilterOptions, FilteredView,
    MalformedRecordError, RecordStore,
};

/// Page title shown above the dashboard.
pub const DASHBOARD_TITLE: &str = "Women's Health Companies";

/// Immutable record store plus the filter options derived from it.
#[derive(Debug, Clone)]
pub struct Dashboard {
    store: RecordStore,
    options: FilterOptions,
}

impl Dashboard {
    pub fn new(store: RecordStore) -> Self {
        let options = FilterOptions::from_store(&store);
        Self { store, options }
    }

    /// Dashboard over the compiled-in dataset.
    pub fn builtin() -> Result<Self, MalformedRecordError> {
        RecordStore::builtin().map(Self::new)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Initial selection: every country and exchange over the full market-cap range.
    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria::select_all(&self.options)
    }

    pub fn refresh(&self, criteria: &FilterCriteria) -> DashboardSnapshot<'_> {
        let view = apply(self.store.all_records(), criteria);
        let panel = InsightPanel::from_view(&view);
        let snapshot = DashboardSnapshot {
            table: display_rows(&view),
            bar_chart: BarChart::from_view(&view),
            scatter_chart: ScatterChart::from_view(&view),
            warnings: self.selection_warnings(criteria, &view),
            criteria: criteria.clone(),
            view,
            panel,
        };
        debug!(
            records = snapshot.view.len(),
            ready = snapshot.panel.is_ready(),
            "dashboard refreshed"
        );
        snapshot
    }

    fn selection_warnings(
        &self,
        criteria: &FilterCriteria,
        view: &FilteredView<'_>,
    ) -> Vec<String> {
        let mut warnings = Vec::new();

        for country in &criteria.countries {
            if !self.options.countries.contains(country) {
                warn!(%country, "selected country not in dataset");
                warnings.push(format!("country '{country}' does not appear in the dataset"));
            }
        }
        for exchange in &criteria.exchanges {
            if !self.options.exchanges.contains(exchange) {
                warn!(%exchange, "selected exchange not in dataset");
                warnings.push(format!("exchange '{exchange}' does not appear in the dataset"));
            }
        }
        if view.is_empty() {
            warnings.push(String::from("no companies match the current filters"));
        }

        warnings
    }
}

/// Everything one recomputation produces.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot<'a> {
    pub criteria: FilterCriteria,
    /// Natural store order; the export uses this.
    pub view: FilteredView<'a>,
    pub panel: InsightPanel<'a>,
    /// Market cap descending; display only.
    pub table: Vec<&'a CompanyRecord>,
    pub bar_chart: BarChart,
    pub scatter_chart: ScatterChart,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl DashboardSnapshot<'_> {
    pub fn export_csv(&self) -> Result<String, ExportError> {
        render_export(&self.view)
    }
}
