//! Route definitions for the Inventory Management API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes, mounted under `/api`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Dashboard
        .route("/basic_info", get(handlers::get_basic_info))
        // Paginated views
        .route("/tables/:table_name", get(handlers::get_table_page))
        // Reference data
        .route("/categories", get(handlers::list_categories))
        .route("/suppliers", get(handlers::list_suppliers))
        .route("/products", get(handlers::list_products))
        // Products
        .route("/add_product", post(handlers::add_product))
        .route("/product_history/:product_id", get(handlers::get_product_history))
        // Reorders
        .route("/place_reorder", post(handlers::place_reorder))
        .route("/pending_reorders", get(handlers::list_pending_reorders))
        .route("/receive_reorder/:reorder_id", post(handlers::receive_reorder))
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, sync::Arc, time::Duration};

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use crate::{create_app, AppState, Config};

    /// App backed by a pool that is never reachable; only routes that reject
    /// before touching the database succeed.
    fn offline_app(static_dir: Option<PathBuf>) -> Router {
        let db = PgPoolOptions::new()
            .min_connections(0)
            .acquire_timeout(Duration::from_millis(250))
            .connect_lazy("postgres://inventory@127.0.0.1:1/inventory")
            .unwrap();

        let mut config = Config::default();
        if let Some(dir) = static_dir {
            config.server.static_dir = dir.to_string_lossy().into_owned();
        }

        create_app(AppState {
            db,
            config: Arc::new(config),
        })
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_unknown_table_view_is_empty_array() {
        let (status, body) = send(offline_app(None), get("/api/tables/unknown_view")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!([]));
    }

    #[tokio::test]
    async fn test_unknown_table_view_ignores_bad_window() {
        let (status, body) =
            send(offline_app(None), get("/api/tables/nope?offset=-5&limit=-1")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!([]));
    }

    #[tokio::test]
    async fn test_negative_offset_rejected() {
        let uri = "/api/tables/Products%20Needing%20Reorder?offset=-1&limit=10";
        let (status, body) = send(offline_app(None), get(uri)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"]["field"], "offset");
    }

    #[tokio::test]
    async fn test_place_reorder_rejects_non_positive_quantity() {
        let request = post_json(
            "/api/place_reorder",
            json!({"product_id": 1, "reorder_quantity": 0}),
        );
        let (status, body) = send(offline_app(None), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["field"], "reorder_quantity");
    }

    #[tokio::test]
    async fn test_add_product_rejects_negative_price() {
        let request = post_json(
            "/api/add_product",
            json!({
                "product_name": "Green Tea 500g",
                "category": "Tea",
                "price": -4.5,
                "stock_quantity": 10,
                "reorder_level": 5,
                "supplier_id": 1
            }),
        );
        let (status, body) = send(offline_app(None), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"]["field"], "price");
    }

    #[tokio::test]
    async fn test_add_product_missing_field_is_rejected_by_extractor() {
        let request = post_json(
            "/api/add_product",
            json!({"product_name": "Green Tea 500g", "category": "Tea"}),
        );
        let (status, _) = send(offline_app(None), request).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_non_numeric_path_id_rejected() {
        let (status, _) = send(offline_app(None), get("/api/product_history/abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unreachable_database_is_server_error() {
        let (status, body) = send(offline_app(None), get("/api/categories")).await;

        assert!(status.is_server_error());
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert!(body["error"]["code"].is_string());
    }

    #[tokio::test]
    async fn test_health_reports_disconnected_database() {
        let (status, body) = send(offline_app(None), get("/health")).await;

        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "disconnected");
    }

    #[tokio::test]
    async fn test_unmatched_paths_served_from_static_dir() {
        let dir = std::env::temp_dir().join(format!("ims-static-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<h1>Inventory</h1>").unwrap();

        let (status, body) = send(offline_app(Some(dir.clone())), get("/index.html")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"<h1>Inventory</h1>");

        let (status, _) = send(offline_app(Some(dir.clone())), get("/missing.js")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        std::fs::remove_dir_all(&dir).ok();
    }
}
