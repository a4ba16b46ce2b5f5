//! Column listing handler.

use axum::{extract::State, Json};
use bivar::{ColumnSchema, SourceMetadata};
use serde::Serialize;

use crate::server::state::AppState;

/// Response for the columns endpoint.
#[derive(Serialize)]
pub struct ColumnsResponse {
    /// Columns in table order, with their kinds.
    pub columns: Vec<ColumnSchema>,
    /// Rows in the concatenated table.
    pub row_count: usize,
    /// Loaded source files.
    pub sources: Vec<SourceMetadata>,
    /// Initial (var1, var2) selection.
    pub default_selection: Option<(String, String)>,
}

/// List selectable columns.
pub async fn get_columns(State(state): State<AppState>) -> Json<ColumnsResponse> {
    let dashboard = &state.dashboard;

    Json(ColumnsResponse {
        columns: dashboard.schema().columns.clone(),
        row_count: dashboard.store().row_count(),
        sources: dashboard.sources().to_vec(),
        default_selection: dashboard.default_selection(),
    })
}
