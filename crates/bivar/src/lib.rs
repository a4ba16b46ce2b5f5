//! bivar: summary statistics for pairs of variables in tabular datasets.
//!
//! One or more delimited files are concatenated into an immutable table.
//! Picking two columns yields their descriptive statistics and the single
//! inferential test their measurement kinds call for:
//!
//! - quantitative x quantitative: Pearson correlation
//! - categorical x categorical: chi-square test of independence
//! - quantitative x categorical: one-way ANOVA
//!
//! plus chart specifications for a scatter plot and two histograms.
//!
//! # Example
//!
//! ```no_run
//! use bivar::Dashboard;
//!
//! let dashboard = Dashboard::load(&["weather_1.csv", "weather_2.csv"]).unwrap();
//! let report = dashboard.summary("Temperature", "City").unwrap();
//!
//! println!("Samples: {}", report.sample_count);
//! println!("ANOVA: {:?}", report.anova());
//! ```

pub mod analysis;
pub mod chart;
pub mod error;
pub mod input;
pub mod report;
pub mod schema;
pub mod stats;
pub mod store;

mod dashboard;

pub use analysis::analyze;
pub use chart::{ChartValue, Histogram, HistogramBin, ScatterChart, ScatterPoint};
pub use dashboard::{Dashboard, DashboardConfig, DashboardView};
pub use error::{BivarError, Result};
pub use input::{Parser, ParserConfig, RawTable, SourceMetadata};
pub use report::{
    AnovaResult, ChiSquareResult, Inference, ReportRow, SummaryReport, TestKind, VariableSummary,
};
pub use schema::{ColumnSchema, ColumnType, TableSchema, VariableKind};
pub use store::{Column, DataStore};
