use crate::common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use schoolapp::infrastructure::state::AppState;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_endpoint() {
    let pool = setup_test_db_or_skip!();
    let app = schoolapp::presentation::router::app(AppState::new(pool)).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_endpoint_without_database() {
    let (_, state) = common::mock_app_state(vec![]);
    let app = schoolapp::presentation::router::app(state).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_openapi_document() {
    let (_, state) = common::mock_app_state(vec![]);
    let app = schoolapp::presentation::router::app(state).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["paths"]["/api/v1/teachers/{id}"].is_object());
}
