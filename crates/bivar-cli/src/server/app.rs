//! Axum application setup.

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use super::handlers;
use super::state::AppState;
use crate::web::static_handler;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration for local development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/columns", get(handlers::get_columns))
        .route("/dashboard", get(handlers::get_dashboard));

    Router::new()
        .nest("/api", api_routes)
        .fallback(static_handler)
        .layer(cors)
        .with_state(state)
}

/// Start the web server.
pub async fn run_server(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));

    log::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use bivar::{Dashboard, DashboardConfig, DataStore, RawTable};
    use serde_json::Value;
    use tower::ServiceExt;

    fn state() -> AppState {
        let table = RawTable::new(
            vec!["Temperature".into(), "City".into()],
            vec![
                vec!["10.0".into(), "A".into()],
                vec!["20.0".into(), "B".into()],
                vec!["30.0".into(), "A".into()],
            ],
        );
        let dashboard =
            Dashboard::from_store(DataStore::from_table(&table), DashboardConfig::default())
                .unwrap();
        AppState::new(dashboard)
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = create_router(state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_columns_endpoint() {
        let (status, body) = get_json("/api/columns").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["row_count"], 3);
        assert_eq!(body["columns"][0]["name"], "Temperature");
        assert_eq!(body["columns"][0]["kind"], "Quantitative");
        assert_eq!(body["default_selection"][1], "City");
    }

    #[tokio::test]
    async fn test_dashboard_endpoint() {
        let (status, body) = get_json("/api/dashboard?var1=Temperature&var2=City").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["report"]["inference"]["test"], "anova");
        assert_eq!(body["histogram_var1"]["bins"].as_array().unwrap().len(), 30);
        assert_eq!(body["scatter"]["title"], "Relationship between Temperature and City");
    }

    #[tokio::test]
    async fn test_dashboard_default_selection() {
        let (status, body) = get_json("/api/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["var1"], "Temperature");
        assert_eq!(body["var2"], "City");
    }

    #[tokio::test]
    async fn test_unknown_column_is_not_found() {
        let (status, body) = get_json("/api/dashboard?var1=Wind&var2=City").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "unknown_column");
    }
}
