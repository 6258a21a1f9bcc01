//! # Hercap Core
//!
//! Filtering, aggregation and presentation over a fixed table of women's
//! health companies.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Validated `CompanyRecord`, `Headquarters`, timestamps |
//! | [`store`] | Compiled-in dataset and its distinct countries/exchanges |
//! | [`filter`] | `FilterCriteria` and the stable filter producing a `FilteredView` |
//! | [`aggregate`] | `InsightSummary` and the individual statistics |
//! | [`present`] | Display table, CSV export, chart series, insight text |
//! | [`dashboard`] | One-shot filter → summarize → present pipeline |
//! | [`envelope`] | Response envelope with metadata |
//! | [`error`] | Error taxonomy |
//!
//! ## Pipeline
//!
//! ```text
//! FilterCriteria ──▶ filter::apply ──▶ FilteredView ──▶ aggregate::summarize
//!                                          │                    │
//!                                          ▼                    ▼
//!                              table / export / charts     InsightPanel
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use hercap_core::{Dashboard, MarketCapRange};
//!
//! let dashboard = Dashboard::builtin()?;
//! let criteria = dashboard
//!     .default_criteria()
//!     .with_countries(["USA"])
//!     .with_market_cap_range(MarketCapRange::new(1.0, 100.0)?);
//!
//! let snapshot = dashboard.refresh(&criteria);
//! if let Some(summary) = snapshot.panel.summary() {
//!     println!("{} companies, oldest {}", summary.record_count, summary.oldest.name);
//! }
//! # Ok::<(), hercap_core::CoreError>(())
//! ```
//!
//! ## Error Handling
//!
//! Statistics over an empty view return [`EmptyViewError`]; the presenter
//! turns that into [`InsightPanel::NoData`]. A record that breaks the dataset
//! invariants surfaces as [`MalformedRecordError`] when the store loads.

pub mod aggregate;
pub mod dashboard;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod filter;
pub mod present;
pub mod store;

pub use aggregate::{summarize, InsightSummary};
pub use dashboard::{Dashboard, DashboardSnapshot, DASHBOARD_TITLE};
pub use domain::{CompanyRecord, Headquarters, UtcDateTime, MIN_FOUNDED_YEAR};
pub use envelope::{Envelope, EnvelopeMeta};
pub use error::{CoreError, EmptyViewError, ExportError, MalformedRecordError, ValidationError};
pub use filter::{apply, FilterCriteria, FilterOptions, FilteredView, MarketCapRange};
pub use present::{
    BarChart, BarPoint, InsightPanel, Metric, ScatterChart, ScatterPoint, EXPORT_FILE_NAME,
    EXPORT_HEADER, NO_DATA_MESSAGE,
};
pub use store::{RecordStore, DATASET_NAME};
