//! Concatenation of raw tables sharing one header.

use crate::error::{BivarError, Result};
use crate::input::RawTable;

/// Stack tables vertically.
///
/// Every table must carry the same header, in the same order, as the first.
/// `names` labels each table in error messages. Zero tables give an empty
/// table without columns.
pub fn concat_tables(tables: Vec<RawTable>, names: &[String]) -> Result<RawTable> {
    let mut tables = tables.into_iter().enumerate();

    let Some((_, mut combined)) = tables.next() else {
        return Ok(RawTable::empty(Vec::new()));
    };

    for (index, table) in tables {
        if table.headers != combined.headers {
            return Err(BivarError::SchemaMismatch {
                source_name: names
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| format!("source #{}", index + 1)),
                expected: combined.headers.clone(),
                found: table.headers,
            });
        }
        combined.rows.extend(table.rows);
    }

    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_concat_appends_rows() {
        let a = table(&["x", "y"], &[&["1", "a"]]);
        let b = table(&["x", "y"], &[&["2", "b"], &["3", "c"]]);
        let combined = concat_tables(vec![a, b], &[]).unwrap();
        assert_eq!(combined.headers, vec!["x", "y"]);
        assert_eq!(combined.row_count(), 3);
        assert_eq!(combined.get(2, 1), Some("c"));
    }

    #[test]
    fn test_concat_nothing() {
        let combined = concat_tables(Vec::new(), &[]).unwrap();
        assert_eq!(combined.column_count(), 0);
        assert_eq!(combined.row_count(), 0);
    }

    #[test]
    fn test_concat_rejects_different_header() {
        let a = table(&["x", "y"], &[]);
        let b = table(&["y", "x"], &[]);
        let names = vec!["a.csv".to_string(), "b.csv".to_string()];
        let err = concat_tables(vec![a, b], &names).unwrap_err();
        match err {
            BivarError::SchemaMismatch { source_name, .. } => assert_eq!(source_name, "b.csv"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
