//! Chart specifications for the presentation layer.
//!
//! These are plain data: a renderer draws them without further computation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{BivarError, Result};
use crate::schema::VariableKind;
use crate::store::{Column, ColumnData, DataStore};

/// Default number of histogram bins.
pub const DEFAULT_HISTOGRAM_BINS: usize = 30;

/// A plotted value: numeric for quantitative columns, text otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartValue {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: ChartValue,
    pub y: ChartValue,
}

/// Scatter plot of two columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_kind: VariableKind,
    pub y_kind: VariableKind,
    /// One point per row where both cells are present.
    pub points: Vec<ScatterPoint>,
}

/// One bar of a histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub label: String,
    /// Lower edge for numeric bins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower: Option<f64>,
    /// Upper edge for numeric bins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper: Option<f64>,
    pub count: usize,
}

/// Distribution of one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub title: String,
    pub column: String,
    pub kind: VariableKind,
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Number of values counted across all bins.
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

/// Scatter plot of `x` against `y`.
pub fn scatter(store: &DataStore, x: &str, y: &str) -> Result<ScatterChart> {
    let x_col = store.require(x)?;
    let y_col = store.require(y)?;

    let points = cells(x_col)
        .zip(cells(y_col))
        .filter_map(|(x, y)| Some(ScatterPoint { x: x?, y: y? }))
        .collect();

    Ok(ScatterChart {
        title: format!("Relationship between {x} and {y}"),
        x_label: x.to_string(),
        y_label: y.to_string(),
        x_kind: x_col.kind(),
        y_kind: y_col.kind(),
        points,
    })
}

/// Histogram of one column.
///
/// Quantitative columns get `bins` equal-width bins over [min, max] with
/// the last bin closed on the right; categorical columns get one bar per
/// category in order of first appearance.
pub fn histogram(store: &DataStore, name: &str, bins: usize) -> Result<Histogram> {
    if bins == 0 {
        return Err(BivarError::Config("histogram needs at least one bin".to_string()));
    }
    let column = store.require(name)?;

    let bins = match column.data() {
        ColumnData::Numeric(_) => numeric_bins(&column.numeric_values().collect::<Vec<_>>(), bins),
        ColumnData::Text(values) => category_bins(values),
    };

    Ok(Histogram {
        title: format!("Distribution of {name}"),
        column: name.to_string(),
        kind: column.kind(),
        bins,
    })
}

fn cells(column: &Column) -> Box<dyn Iterator<Item = Option<ChartValue>> + '_> {
    match column.data() {
        ColumnData::Numeric(v) => Box::new(v.iter().map(|c| c.map(ChartValue::Number))),
        ColumnData::Text(v) => Box::new(v.iter().map(|c| c.clone().map(ChartValue::Text))),
    }
}

fn numeric_bins(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let Some(min) = values.iter().copied().reduce(f64::min) else {
        return Vec::new();
    };
    let max = values.iter().copied().fold(min, f64::max);

    if min == max {
        return vec![HistogramBin {
            label: format_edge(min),
            lower: Some(min),
            upper: Some(max),
            count: values.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &value in values {
        let index = (((value - min) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let lower = min + width * i as f64;
            let upper = if i + 1 == bins { max } else { min + width * (i + 1) as f64 };
            HistogramBin {
                label: format!("{} - {}", format_edge(lower), format_edge(upper)),
                lower: Some(lower),
                upper: Some(upper),
                count,
            }
        })
        .collect()
}

fn category_bins(values: &[Option<String>]) -> Vec<HistogramBin> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for value in values.iter().flatten() {
        *counts.entry(value.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(label, count)| HistogramBin {
            label: label.to_string(),
            lower: None,
            upper: None,
            count,
        })
        .collect()
}

fn format_edge(value: f64) -> String {
    let rounded = crate::stats::round_to(value, 2);
    rounded.to_string()
}
