//! Main Dashboard struct and public API.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::analyze;
use crate::chart::{self, Histogram, ScatterChart, DEFAULT_HISTOGRAM_BINS};
use crate::error::{BivarError, Result};
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::report::{ReportRow, SummaryReport};
use crate::schema::TableSchema;
use crate::store::DataStore;

/// Configuration for a dashboard.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Parser configuration used for every source.
    pub parser: ParserConfig,
    /// Number of bins in quantitative histograms.
    pub histogram_bins: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.histogram_bins == 0 {
            return Err(BivarError::Config(
                "histogram_bins must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Everything the presentation layer shows for one selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub var1: String,
    pub var2: String,
    pub report: SummaryReport,
    /// The report flattened into display rows.
    pub summary_table: Vec<ReportRow>,
    pub scatter: ScatterChart,
    pub histogram_var1: Histogram,
    pub histogram_var2: Histogram,
}

/// A loaded table plus the computations a selection triggers.
///
/// Built once at startup; every method takes `&self`.
#[derive(Debug, Clone)]
pub struct Dashboard {
    config: DashboardConfig,
    store: DataStore,
}

impl Dashboard {
    /// Load and concatenate sources with the default configuration.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        Self::load_with_config(paths, DashboardConfig::default())
    }

    pub fn load_with_config<P: AsRef<Path>>(paths: &[P], config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        let parser = Parser::with_config(config.parser.clone());
        let store = DataStore::load(&parser, paths)?;
        Ok(Self { config, store })
    }

    /// Wrap an already-built store.
    pub fn from_store(store: DataStore, config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, store })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn schema(&self) -> &TableSchema {
        self.store.schema()
    }

    pub fn sources(&self) -> &[SourceMetadata] {
        self.store.sources()
    }

    /// Ordered column names for selection menus.
    pub fn columns(&self) -> Vec<&str> {
        self.store.column_names()
    }

    /// Initial selection: the first two columns, or the only column twice.
    pub fn default_selection(&self) -> Option<(String, String)> {
        let names = self.store.column_names();
        let first = names.first()?;
        let second = names.get(1).unwrap_or(first);
        Some((first.to_string(), second.to_string()))
    }

    /// Summary statistics for a selection.
    pub fn summary(&self, var1: &str, var2: &str) -> Result<SummaryReport> {
        analyze(&self.store, var1, var2)
    }

    /// Report and charts for a selection.
    pub fn view(&self, var1: &str, var2: &str) -> Result<DashboardView> {
        let report = self.summary(var1, var2)?;
        let bins = self.config.histogram_bins;

        Ok(DashboardView {
            var1: var1.to_string(),
            var2: var2.to_string(),
            summary_table: report.table_rows(),
            scatter: chart::scatter(&self.store, var1, var2)?,
            histogram_var1: chart::histogram(&self.store, var1, bins)?,
            histogram_var2: chart::histogram(&self.store, var2, bins)?,
            report,
        })
    }

    /// View for the given selection, falling back to the default for
    /// whichever side is missing.
    pub fn view_or_default(&self, var1: Option<&str>, var2: Option<&str>) -> Result<DashboardView> {
        let (default1, default2) = self
            .default_selection()
            .ok_or_else(|| BivarError::EmptyData("no columns loaded".to_string()))?;
        self.view(var1.unwrap_or(&default1), var2.unwrap_or(&default2))
    }
}
