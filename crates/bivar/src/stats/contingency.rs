//! Contingency tables and the chi-square test of independence.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::error::{BivarError, Result};

const TEST_NAME: &str = "Chi-square test";

/// Cross-tabulation of co-occurring category pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct ContingencyTable {
    /// Row categories in order of first appearance.
    pub row_labels: Vec<String>,
    /// Column categories in order of first appearance.
    pub col_labels: Vec<String>,
    /// `counts[r][c]` is the number of pairs `(row_labels[r], col_labels[c])`.
    pub counts: Vec<Vec<usize>>,
}

impl ContingencyTable {
    /// Build the table from observed pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut rows: IndexMap<&str, usize> = IndexMap::new();
        let mut cols: IndexMap<&str, usize> = IndexMap::new();
        let mut cells: Vec<(usize, usize)> = Vec::new();

        for (r, c) in pairs {
            let next_row = rows.len();
            let ri = *rows.entry(r).or_insert(next_row);
            let next_col = cols.len();
            let ci = *cols.entry(c).or_insert(next_col);
            cells.push((ri, ci));
        }

        let mut counts = vec![vec![0usize; cols.len()]; rows.len()];
        for (ri, ci) in cells {
            counts[ri][ci] += 1;
        }

        Self {
            row_labels: rows.keys().map(|s| s.to_string()).collect(),
            col_labels: cols.keys().map(|s| s.to_string()).collect(),
            counts,
        }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    pub fn row_totals(&self) -> Vec<usize> {
        self.counts.iter().map(|row| row.iter().sum()).collect()
    }

    pub fn col_totals(&self) -> Vec<usize> {
        (0..self.col_labels.len())
            .map(|c| self.counts.iter().map(|row| row[c]).sum())
            .collect()
    }

    /// Degrees of freedom of the independence test.
    pub fn degrees_of_freedom(&self) -> usize {
        self.row_labels.len().saturating_sub(1) * self.col_labels.len().saturating_sub(1)
    }
}

/// Result of a chi-square test of independence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChiSquareTest {
    pub statistic: f64,
    pub p_value: f64,
    pub dof: usize,
    /// Whether Yates' continuity correction was applied (1 degree of freedom).
    pub yates_corrected: bool,
}

/// Pearson's chi-square test of independence.
///
/// With one degree of freedom each observed count is moved toward its
/// expected count by at most 0.5 (Yates' correction).
pub fn chi_square_independence(table: &ContingencyTable) -> Result<ChiSquareTest> {
    let total = table.total();
    if total == 0 {
        return Err(BivarError::degenerate(TEST_NAME, "no paired observations"));
    }

    let dof = table.degrees_of_freedom();
    if dof == 0 {
        return Err(BivarError::degenerate(
            TEST_NAME,
            format!(
                "needs at least 2 categories per variable, got {} x {}",
                table.row_labels.len(),
                table.col_labels.len()
            ),
        ));
    }

    let row_totals = table.row_totals();
    let col_totals = table.col_totals();
    let yates_corrected = dof == 1;

    let mut statistic = 0.0;
    for (r, row) in table.counts.iter().enumerate() {
        for (c, &count) in row.iter().enumerate() {
            let expected = row_totals[r] as f64 * col_totals[c] as f64 / total as f64;
            let mut observed = count as f64;
            if yates_corrected {
                let diff = expected - observed;
                observed += diff.signum() * diff.abs().min(0.5);
            }
            statistic += (observed - expected).powi(2) / expected;
        }
    }

    let distribution =
        ChiSquared::new(dof as f64).map_err(|e| BivarError::Statistics(e.to_string()))?;

    Ok(ChiSquareTest {
        statistic,
        p_value: distribution.sf(statistic),
        dof,
        yates_corrected,
    })
}
