//! Selection handler: report and charts for two variables.

use axum::{
    extract::{Query, State},
    Json,
};
use bivar::DashboardView;
use log::debug;
use serde::Deserialize;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Query parameters for the dashboard endpoint.
#[derive(Debug, Deserialize)]
pub struct SelectionQuery {
    pub var1: Option<String>,
    pub var2: Option<String>,
}

/// Compute the view for the selected pair.
///
/// Missing parameters fall back to the default selection.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<DashboardView>, ApiError> {
    let dashboard = &state.dashboard;

    if dashboard.default_selection().is_none() {
        return Err(ApiError::NotFound("no columns loaded".to_string()));
    }

    debug!("selection changed: {:?}", query);
    let view = dashboard.view_or_default(query.var1.as_deref(), query.var2.as_deref())?;

    Ok(Json(view))
}
