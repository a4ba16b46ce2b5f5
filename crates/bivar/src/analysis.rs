//! Statistics selection for a pair of variables.

use indexmap::IndexMap;
use log::debug;

use crate::error::{BivarError, Result};
use crate::report::{
    AnovaResult, ChiSquareResult, Inference, SummaryReport, TestKind, VariableSummary,
};
use crate::schema::VariableKind;
use crate::stats::{self, round_to, ContingencyTable};
use crate::store::{Column, DataStore};

/// Compute the summary report for `var1` and `var2`.
///
/// Descriptive statistics are computed for each variable on its own. The
/// inferential procedure is chosen from the pair of kinds; when it is
/// undefined for the data its result is None and `note` says why.
pub fn analyze(store: &DataStore, var1: &str, var2: &str) -> Result<SummaryReport> {
    let col1 = store.require(var1)?;
    let col2 = store.require(var2)?;

    let test = TestKind::for_kinds(col1.kind(), col2.kind());
    debug!(
        "analyzing '{}' ({}) x '{}' ({}) with {}",
        var1,
        col1.kind(),
        var2,
        col2.kind(),
        test.label()
    );

    let (inference, note) = match infer(test, col1, col2) {
        Ok(inference) => (inference, None),
        Err(BivarError::DegenerateStatistic { test: name, reason }) => {
            debug!("{} undefined for '{}' x '{}': {}", name, var1, var2, reason);
            (Inference::undefined(test), Some(format!("{name} is undefined: {reason}")))
        }
        Err(e) => return Err(e),
    };

    Ok(SummaryReport {
        sample_count: store.row_count(),
        var1: summarize(var1, col1),
        var2: summarize(var2, col2),
        inference,
        note,
    })
}

/// Descriptive block for one column.
pub fn summarize(name: &str, column: &Column) -> VariableSummary {
    let mut summary = VariableSummary::empty(name, column.kind());
    if column.kind() == VariableKind::Categorical {
        return summary;
    }

    if let Some(d) = stats::describe(column.numeric_values()) {
        summary.mean = Some(round_to(d.mean, 2));
        summary.variance = d.variance.map(|v| round_to(v, 2));
        summary.std_dev = d.std_dev.map(|v| round_to(v, 2));
        summary.min = Some(round_to(d.min, 2));
        summary.max = Some(round_to(d.max, 2));
    }
    summary
}

fn infer(test: TestKind, col1: &Column, col2: &Column) -> Result<Inference> {
    match test {
        TestKind::PearsonCorrelation => {
            let (x, y) = numeric_pairs(col1, col2);
            let r = stats::pearson(&x, &y)?;
            Ok(Inference::PearsonCorrelation(Some(round_to(r, 2))))
        }
        TestKind::ChiSquare => {
            let table = ContingencyTable::from_pairs(text_pairs(col1, col2));
            let result = stats::chi_square_independence(&table)?;
            Ok(Inference::ChiSquare(Some(ChiSquareResult {
                statistic: round_to(result.statistic, 2),
                p_value: round_to(result.p_value, 4),
                dof: result.dof,
            })))
        }
        TestKind::Anova => {
            let (values, groups) = if col1.kind().is_quantitative() {
                (col1, col2)
            } else {
                (col2, col1)
            };
            let result = stats::one_way(&group_by_category(values, groups))?;
            Ok(Inference::Anova(Some(AnovaResult {
                f_statistic: round_to(result.f_statistic, 2),
                p_value: round_to(result.p_value, 4),
                df_between: result.df_between,
                df_within: result.df_within,
            })))
        }
    }
}

/// Rows where both numeric cells are present.
fn numeric_pairs(col1: &Column, col2: &Column) -> (Vec<f64>, Vec<f64>) {
    let a = col1.as_numeric().unwrap_or_default();
    let b = col2.as_numeric().unwrap_or_default();
    a.iter()
        .zip(b)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .unzip()
}

/// Rows where both text cells are present.
fn text_pairs<'a>(col1: &'a Column, col2: &'a Column) -> impl Iterator<Item = (&'a str, &'a str)> {
    let a = col1.as_text().unwrap_or_default();
    let b = col2.as_text().unwrap_or_default();
    a.iter()
        .zip(b)
        .filter_map(|(x, y)| Some((x.as_deref()?, y.as_deref()?)))
}

/// Quantitative values grouped by category, in first-appearance order.
fn group_by_category(values: &Column, categories: &Column) -> Vec<Vec<f64>> {
    let numbers = values.as_numeric().unwrap_or_default();
    let labels = categories.as_text().unwrap_or_default();

    let mut groups: IndexMap<&str, Vec<f64>> = IndexMap::new();
    for (value, label) in numbers.iter().zip(labels) {
        if let (Some(value), Some(label)) = (value, label.as_deref()) {
            groups.entry(label).or_default().push(*value);
        }
    }
    groups.into_values().collect()
}
