//! Harvestboard HTTP API
//!
//! HTTP layer for Harvestboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Pages
//! - `GET /` - Dashboard page
//! - `GET /summary` - Summary page
//!
//! ## Data
//! - `GET /api/v1/crops` - Crop names for the dropdowns
//! - `POST /api/v1/dashboard` - Charts and table for a selection
//! - `POST /api/v1/summary` - Summary sentences for a selection
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use harvestboard::api::{serve, ApiConfig, AppState};
//! use harvestboard::dataset;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = Arc::new(dataset::load_from_path(Path::new("data/crop_losses.csv"))?);
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(table, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/crops", get(routes::crops::list_crops))
        .route("/dashboard", post(routes::dashboard::build_dashboard))
        .route("/summary", post(routes::summary::build_summary_text));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::pages::dashboard_page))
        .route("/summary", get(routes::pages::summary_page))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback(routes::pages::fallback_page)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Harvestboard listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Harvestboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{CropRecord, CropTable};
    use crate::report::EMPTY_SELECTION_PLACEHOLDER;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let table = CropTable::new(vec![
            CropRecord::new("Rice", 5.0, 4.2, -0.8),
            CropRecord::new("Wheat", 4.1, 4.5, 0.4),
            CropRecord::new("Maize", 3.9, 3.9, 0.0),
        ])
        .unwrap();

        let state = AppState::new(Arc::new(table), ApiConfig::default());
        build_router(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_dashboard_page() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()["content-type"].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_summary_page() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/summary")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_path_falls_through_to_dashboard() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/does-not-exist")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()["content-type"].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        for uri in ["/health/live", "/health/ready", "/health"] {
            let app = create_test_app();
            let response = app
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "failed for {}", uri);
        }
    }

    #[tokio::test]
    async fn test_list_crops() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/crops")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["total"], 3);
        assert_eq!(json["crops"][0], "Rice");
        assert_eq!(json["crops"][2], "Maize");
    }

    #[tokio::test]
    async fn test_dashboard_selection() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/dashboard")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"crops": ["Rice", "Maize"]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["loss_comparison"]["labels"], serde_json::json!(["Rice", "Maize"]));
        assert_eq!(json["loss_share_2022"]["hole"], 0.3);
        assert_eq!(json["table"]["rows"][1][0], "Maize");
        assert_eq!(
            json["table"]["columns"],
            serde_json::json!(["Crops", "2020 Loss (%)", "2022 Loss (%)", "Change (%)"])
        );
    }

    #[tokio::test]
    async fn test_dashboard_empty_selection_is_not_an_error() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/dashboard")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"crops": []}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["loss_comparison"]["labels"], serde_json::json!([]));
        assert_eq!(json["table"]["rows"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_summary_selection() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/summary")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"crops": ["Rice"]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json["sentences"][0],
            "Rice: Loss in 2020 was 5.0%, in 2022 was 4.2%. This is a decrease of 0.8%."
        );
    }

    #[tokio::test]
    async fn test_summary_empty_selection_placeholder() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/summary")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"crops": []}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["sentences"][0], EMPTY_SELECTION_PLACEHOLDER);
        assert!(json.get("heading").is_none());
    }

    #[tokio::test]
    async fn test_invalid_json_body() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/dashboard")
                    .header("Content-Type", "application/json")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
