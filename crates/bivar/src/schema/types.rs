//! Storage types and measurement kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage type of a column, decided from its non-missing cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Whole numbers (no decimal point).
    Integer,
    /// Floating-point numbers.
    Float,
    /// Anything else.
    Text,
}

impl ColumnType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }

    /// Detect the storage type of a single non-missing cell.
    pub fn of_value(value: &str) -> ColumnType {
        let trimmed = value.trim();
        if trimmed.parse::<i64>().is_ok() {
            ColumnType::Integer
        } else if trimmed.parse::<f64>().is_ok() {
            ColumnType::Float
        } else {
            ColumnType::Text
        }
    }

    /// Widen two storage types into one that holds both.
    pub fn widen(self, other: ColumnType) -> ColumnType {
        match (self, other) {
            (ColumnType::Text, _) | (_, ColumnType::Text) => ColumnType::Text,
            (ColumnType::Integer, ColumnType::Integer) => ColumnType::Integer,
            _ => ColumnType::Float,
        }
    }

    /// Storage type of a column from its non-missing cells.
    ///
    /// A column without any value is numeric (all missing).
    pub fn infer<'a>(values: impl IntoIterator<Item = &'a str>) -> ColumnType {
        let mut inferred: Option<ColumnType> = None;
        for value in values {
            let detected = ColumnType::of_value(value);
            let widened = match inferred {
                Some(current) => current.widen(detected),
                None => detected,
            };
            if widened == ColumnType::Text {
                return ColumnType::Text;
            }
            inferred = Some(widened);
        }
        inferred.unwrap_or(ColumnType::Float)
    }
}

/// Measurement kind of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableKind {
    Quantitative,
    Categorical,
}

impl VariableKind {
    pub fn is_quantitative(&self) -> bool {
        matches!(self, VariableKind::Quantitative)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VariableKind::Quantitative => "Quantitative",
            VariableKind::Categorical => "Categorical",
        }
    }
}

impl From<ColumnType> for VariableKind {
    fn from(column_type: ColumnType) -> Self {
        if column_type.is_numeric() {
            VariableKind::Quantitative
        } else {
            VariableKind::Categorical
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
