//! # View Presenter
//!
//! Shapes a [`FilteredView`](crate::FilteredView) and its aggregates into
//! artifacts for an external renderer. Nothing here draws pixels.
//!
//! | Module | Output |
//! |--------|--------|
//! | [`table`] | Display rows, largest market cap first |
//! | [`export`] | `filtered_companies.csv` in natural view order |
//! | [`chart`] | Bar and scatter series |
//! | [`text`] | Metric cards, insight bullets and key findings |

pub mod chart;
pub mod export;
pub mod table;
pub mod text;

pub use chart::{BarChart, BarPoint, ScatterChart, ScatterPoint, CHART_TEMPLATE};
pub use export::{parse_export, render_export, write_export, EXPORT_FILE_NAME, EXPORT_HEADER};
pub use table::display_rows;
pub use text::{
    format_grouped, group_digits, InsightPanel, Metric, NO_DATA_MESSAGE, UNLISTED_LABEL,
};
