//! Table-level schema definition.

use serde::{Deserialize, Serialize};

use super::column::ColumnSchema;
use super::types::VariableKind;

/// Schema for the whole loaded table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Schemas for each column, in table order.
    pub columns: Vec<ColumnSchema>,
}

impl TableSchema {
    pub fn with_columns(columns: Vec<ColumnSchema>) -> Self {
        Self { columns }
    }

    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get all column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Find columns of a given kind.
    pub fn columns_of_kind(&self, kind: VariableKind) -> impl Iterator<Item = &ColumnSchema> {
        self.columns.iter().filter(move |c| c.kind == kind)
    }
}
