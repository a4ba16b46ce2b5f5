//! Application state for the web server.

use std::sync::Arc;

use bivar::Dashboard;

/// Shared application state.
///
/// The dashboard is immutable after load, so handlers share it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Dashboard>,
}

impl AppState {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
        }
    }
}
