use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{features::receipts, state::AppState};

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/receipts", receipts::routes::routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_receipt(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/receipts/process")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn target_receipt() -> Value {
        json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
                { "shortDescription": "Emils Cheese Pizza", "price": "12.25" },
                { "shortDescription": "Knorr Creamy Chicken", "price": "1.26" },
                { "shortDescription": "Doritos Nacho Cheese", "price": "3.35" },
                { "shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00" }
            ],
            "total": "35.35"
        })
    }

    #[tokio::test]
    async fn test_process_and_score_receipt() {
        let app = app(AppState::in_memory());

        let (status, body) = send(&app, post_receipt(target_receipt().to_string())).await;
        assert_eq!(status, StatusCode::OK);
        let id = body["id"].as_str().unwrap().to_string();

        let (status, body) = send(&app, get(&format!("/receipts/{id}/points"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "Points": 28 }));
    }

    #[tokio::test]
    async fn test_invalid_receipt_returns_validator_message() {
        let app = app(AppState::in_memory());
        let mut receipt = target_receipt();
        receipt["total"] = json!("10.5");

        let (status, body) = send(&app, post_receipt(receipt.to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "invalid format for total" }));
    }

    #[tokio::test]
    async fn test_missing_items_rejected() {
        let app = app(AppState::in_memory());
        let body = json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "total": "1.00"
        });

        let (status, body) = send(&app, post_receipt(body.to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": "items array must contain at least one item" })
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app = app(AppState::in_memory());

        let (status, body) = send(&app, post_receipt("{not json".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_unknown_receipt_is_not_found() {
        let app = app(AppState::in_memory());

        let (status, body) = send(&app, get("/receipts/unknown-id/points")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Receipt not found" }));
    }

    #[tokio::test]
    async fn test_malformed_id_is_bad_request() {
        let app = app(AppState::in_memory());

        let (status, body) = send(&app, get("/receipts/abc%20def/points")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "invalid format for ID" }));
    }

    #[tokio::test]
    async fn test_non_utf8_id_is_json_bad_request() {
        let app = app(AppState::in_memory());

        let (status, body) = send(&app, get("/receipts/%FF/points")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_null_items_returns_validator_message() {
        let app = app(AppState::in_memory());
        let mut receipt = target_receipt();
        receipt["items"] = Value::Null;

        let (status, body) = send(&app, post_receipt(receipt.to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": "items array must contain at least one item" })
        );
    }

    #[tokio::test]
    async fn test_health() {
        let app = app(AppState::in_memory());

        let (status, body) = send(&app, get("/receipts/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "OK" }));
    }
}
