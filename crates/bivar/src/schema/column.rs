//! Column schema definition.

use serde::{Deserialize, Serialize};

use super::types::{ColumnType, VariableKind};

/// Schema for a single column of the loaded table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Column name.
    pub name: String,
    /// Zero-based position in the table.
    pub position: usize,
    /// Storage type of the column.
    pub storage_type: ColumnType,
    /// Measurement kind derived from the storage type.
    pub kind: VariableKind,
    /// Total number of cells (including missing).
    pub count: usize,
    /// Number of missing cells.
    pub missing_count: usize,
    /// Number of distinct non-missing values.
    pub distinct_count: usize,
}

impl ColumnSchema {
    /// Get the missing percentage.
    pub fn missing_percentage(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.missing_count as f64 / self.count as f64) * 100.0
        }
    }
}
