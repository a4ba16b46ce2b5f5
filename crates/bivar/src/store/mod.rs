//! The immutable in-memory table the dashboard works on.

mod column;
mod concat;

pub use column::{Column, ColumnData};
pub use concat::concat_tables;

use std::path::Path;

use indexmap::IndexMap;
use log::{debug, info};

use crate::error::{BivarError, Result};
use crate::input::{Parser, RawTable, SourceMetadata};
use crate::schema::{ColumnSchema, TableSchema, VariableKind};

/// Concatenated, typed table.
///
/// Built once from its sources and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    columns: IndexMap<String, Column>,
    row_count: usize,
    schema: TableSchema,
    sources: Vec<SourceMetadata>,
}

impl DataStore {
    /// Parse and concatenate the given files.
    pub fn load<P: AsRef<Path>>(parser: &Parser, paths: &[P]) -> Result<Self> {
        let mut tables = Vec::with_capacity(paths.len());
        let mut sources = Vec::with_capacity(paths.len());

        for path in paths {
            let (table, metadata) = parser.parse_file(path)?;
            debug!(
                "loaded source {} ({} rows, {})",
                metadata.file, metadata.row_count, metadata.hash
            );
            tables.push(table);
            sources.push(metadata);
        }

        let names: Vec<String> = sources.iter().map(|s| s.path.display().to_string()).collect();
        let table = concat_tables(tables, &names)?;

        let mut store = Self::from_table(&table);
        store.sources = sources;
        Ok(store)
    }

    /// Build a store from a single raw table.
    pub fn from_table(table: &RawTable) -> Self {
        let mut columns = IndexMap::with_capacity(table.column_count());
        let mut schema_columns = Vec::with_capacity(table.column_count());

        for (position, name) in table.headers.iter().enumerate() {
            let column = Column::from_cells(table.column_values(position));
            debug!("column '{}' classified as {}", name, column.kind());

            schema_columns.push(ColumnSchema {
                name: name.clone(),
                position,
                storage_type: column.storage_type(),
                kind: column.kind(),
                count: column.len(),
                missing_count: column.missing_count(),
                distinct_count: column.distinct_count(),
            });
            columns.insert(name.clone(), column);
        }

        info!(
            "data store ready: {} rows x {} columns",
            table.row_count(),
            columns.len()
        );

        Self {
            columns,
            row_count: table.row_count(),
            schema: TableSchema::with_columns(schema_columns),
            sources: Vec::new(),
        }
    }

    /// Build a store from in-memory tables that share one header.
    pub fn from_tables(tables: Vec<RawTable>) -> Result<Self> {
        let table = concat_tables(tables, &[])?;
        Ok(Self::from_table(&table))
    }

    /// Ordered column names, for selection menus.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(|k| k.as_str()).collect()
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    pub fn sources(&self) -> &[SourceMetadata] {
        &self.sources
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    /// Look up a column, failing with `InvalidColumn` when absent.
    pub fn require(&self, name: &str) -> Result<&Column> {
        self.column(name)
            .ok_or_else(|| BivarError::InvalidColumn(name.to_string()))
    }

    /// Cached measurement kind of a column.
    pub fn kind(&self, name: &str) -> Result<VariableKind> {
        self.require(name).map(Column::kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather() -> RawTable {
        RawTable::new(
            vec!["Temperature".into(), "City".into()],
            vec![
                vec!["10.0".into(), "A".into()],
                vec!["20.0".into(), "B".into()],
                vec!["30.0".into(), "A".into()],
            ],
        )
    }

    #[test]
    fn test_kinds_are_cached_per_column() {
        let store = DataStore::from_table(&weather());
        assert_eq!(store.kind("Temperature").unwrap(), VariableKind::Quantitative);
        assert_eq!(store.kind("City").unwrap(), VariableKind::Categorical);
        assert_eq!(store.column_names(), vec!["Temperature", "City"]);
        assert_eq!(store.row_count(), 3);
    }

    #[test]
    fn test_unknown_column() {
        let store = DataStore::from_table(&weather());
        assert!(matches!(
            store.require("Humidity"),
            Err(BivarError::InvalidColumn(name)) if name == "Humidity"
        ));
    }

    #[test]
    fn test_schema_counts() {
        let table = RawTable::new(
            vec!["City".into()],
            vec![vec!["A".into()], vec!["NA".into()], vec!["B".into()]],
        );
        let store = DataStore::from_table(&table);
        let city = store.schema().get_column("City").unwrap();
        assert_eq!(city.count, 3);
        assert_eq!(city.missing_count, 1);
        assert_eq!(city.distinct_count, 2);
    }

    #[test]
    fn test_classification_uses_all_sources() {
        let first = RawTable::new(vec!["code".into()], vec![vec!["1".into()]]);
        let second = RawTable::new(vec!["code".into()], vec![vec!["X1".into()]]);
        let store = DataStore::from_tables(vec![first, second]).unwrap();
        assert_eq!(store.kind("code").unwrap(), VariableKind::Categorical);
        assert_eq!(store.row_count(), 2);
    }
}
