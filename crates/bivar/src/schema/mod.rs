//! Schema types describing the loaded table.

mod column;
mod table;
mod types;

pub use column::ColumnSchema;
pub use table::TableSchema;
pub use types::{ColumnType, VariableKind};
