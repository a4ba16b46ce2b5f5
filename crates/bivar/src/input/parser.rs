//! CSV/TSV parser with delimiter detection.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use sha2::{Digest, Sha256};

use super::source::{RawTable, SourceMetadata};
use crate::error::{BivarError, Result};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Whether the file has a header row.
    pub has_header: bool,
    /// Maximum rows to read per source (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            max_rows: None,
            quote: b'"',
        }
    }
}

impl ParserConfig {
    /// Parse a user-supplied delimiter such as `,`, `;` or `\t`.
    pub fn delimiter_from_str(value: &str) -> Result<u8> {
        match value {
            "\\t" | "tab" => Ok(b'\t'),
            s if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
            other => Err(BivarError::InvalidDelimiter(other.to_string())),
        }
    }
}

/// Parses delimited data files.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the table and its metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(RawTable, SourceMetadata)> {
        let path = path.as_ref();

        let contents = fs::read(path).map_err(|e| BivarError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&contents)?,
        };

        let table = self.parse_bytes(&contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        debug!(
            "parsed {} ({}): {} rows x {} columns",
            path.display(),
            format,
            table.row_count(),
            table.column_count()
        );

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            format,
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    /// Parse in-memory bytes with a known delimiter.
    pub fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<RawTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut records = reader.records();

        let headers: Vec<String> = if self.config.has_header {
            match records.next() {
                Some(record) => record?.iter().map(|s| s.trim().to_string()).collect(),
                None => return Err(BivarError::EmptyData("No header row found".to_string())),
            }
        } else {
            Vec::new()
        };

        let mut rows = Vec::new();
        for (row_idx, result) in records.enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }
            let record = result?;
            rows.push(record.iter().map(|s| s.to_string()).collect::<Vec<_>>());
        }

        let headers = if self.config.has_header {
            headers
        } else {
            let width = rows.first().map(|r| r.len()).unwrap_or(0);
            (0..width).map(|i| format!("column_{}", i + 1)).collect()
        };

        if headers.is_empty() {
            return Err(BivarError::EmptyData("No columns found".to_string()));
        }

        let width = headers.len();
        for row in &mut rows {
            row.resize(width, String::new());
        }

        Ok(RawTable::new(headers, rows))
    }
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let lines: Vec<String> = BufReader::new(bytes)
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(BivarError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
        let variance =
            counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / counts.len() as f64;

        // Tab gets a slight bonus as it rarely appears inside values.
        let score = if consistent {
            first_count * 1000 + if delim == b'\t' { 100 } else { 0 }
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_csv() {
        let data = b"a,b,c\n1,2,3\n4,5,6";
        assert_eq!(detect_delimiter(data).unwrap(), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        let data = b"a\tb\tc\n1\t2\t3\n4\t5\t6";
        assert_eq!(detect_delimiter(data).unwrap(), b'\t');
    }

    #[test]
    fn test_detect_delimiter_ignores_quoted_commas() {
        let data = b"city;note\n\"Hue\";\"warm, humid\"\n\"Hanoi\";\"cool, dry\"";
        assert_eq!(detect_delimiter(data).unwrap(), b';');
    }

    #[test]
    fn test_parse_csv() {
        let parser = Parser::new();
        let data = b"city,temp,humidity\nHanoi,30.5,80\nHue,28,75";
        let table = parser.parse_bytes(data, b',').unwrap();

        assert_eq!(table.headers, vec!["city", "temp", "humidity"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, 0), Some("Hanoi"));
        assert_eq!(table.get(1, 1), Some("28"));
    }

    #[test]
    fn test_parse_header_only() {
        let table = Parser::new().parse_bytes(b"a,b,c\n", b',').unwrap();
        assert_eq!(table.headers, vec!["a", "b", "c"]);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_parse_pads_and_truncates_rows() {
        let table = Parser::new()
            .parse_bytes(b"a,b\n1\n2,3,4\n", b',')
            .unwrap();
        assert_eq!(table.rows[0], vec!["1", ""]);
        assert_eq!(table.rows[1], vec!["2", "3"]);
    }

    #[test]
    fn test_parse_max_rows() {
        let parser = Parser::with_config(ParserConfig {
            max_rows: Some(1),
            ..ParserConfig::default()
        });
        let table = parser.parse_bytes(b"a\n1\n2\n3\n", b',').unwrap();
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_parse_empty_input() {
        let result = Parser::new().parse_bytes(b"", b',');
        assert!(matches!(result, Err(BivarError::EmptyData(_))));
    }

    #[test]
    fn test_delimiter_from_str() {
        assert_eq!(ParserConfig::delimiter_from_str(",").unwrap(), b',');
        assert_eq!(ParserConfig::delimiter_from_str("\\t").unwrap(), b'\t');
        assert!(ParserConfig::delimiter_from_str(";;").is_err());
    }
}
