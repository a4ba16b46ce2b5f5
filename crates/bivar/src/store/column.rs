//! Typed columns with their cached measurement kind.

use indexmap::IndexSet;

use crate::input::RawTable;
use crate::schema::{ColumnType, VariableKind};

/// Cell values of one column, typed by its storage.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

/// A column of the loaded table.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    storage_type: ColumnType,
    kind: VariableKind,
    data: ColumnData,
}

impl Column {
    /// Type a column from its raw cells.
    pub fn from_cells<'a>(cells: impl IntoIterator<Item = &'a str>) -> Self {
        let cells: Vec<Option<&str>> = cells
            .into_iter()
            .map(|c| (!RawTable::is_missing(c)).then(|| c.trim()))
            .collect();

        let storage_type = ColumnType::infer(cells.iter().flatten().copied());

        let data = if storage_type.is_numeric() {
            ColumnData::Numeric(
                cells
                    .iter()
                    .map(|c| c.and_then(|v| v.parse::<f64>().ok()))
                    .collect(),
            )
        } else {
            ColumnData::Text(cells.iter().map(|c| c.map(str::to_string)).collect())
        };

        Self {
            storage_type,
            kind: VariableKind::from(storage_type),
            data,
        }
    }

    pub fn storage_type(&self) -> ColumnType {
        self.storage_type
    }

    pub fn kind(&self) -> VariableKind {
        self.kind
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    /// Number of cells, including missing ones.
    pub fn len(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn missing_count(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(v) => v.iter().filter(|c| c.is_none()).count(),
            ColumnData::Text(v) => v.iter().filter(|c| c.is_none()).count(),
        }
    }

    pub fn distinct_count(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(v) => v
                .iter()
                .flatten()
                .map(|x| x.to_bits())
                .collect::<IndexSet<_>>()
                .len(),
            ColumnData::Text(v) => v.iter().flatten().collect::<IndexSet<_>>().len(),
        }
    }

    /// Numeric cells, or None for a text column.
    pub fn as_numeric(&self) -> Option<&[Option<f64>]> {
        match &self.data {
            ColumnData::Numeric(v) => Some(v),
            ColumnData::Text(_) => None,
        }
    }

    /// Text cells, or None for a numeric column.
    pub fn as_text(&self) -> Option<&[Option<String>]> {
        match &self.data {
            ColumnData::Text(v) => Some(v),
            ColumnData::Numeric(_) => None,
        }
    }

    /// Non-missing numeric values.
    pub fn numeric_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.as_numeric().into_iter().flatten().flatten().copied()
    }
}
