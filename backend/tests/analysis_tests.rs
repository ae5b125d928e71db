//! Field analysis integration tests
//!
//! Tests for `/analyze-field` including:
//! - Missing bounds rejection
//! - NDVI range and statistics invariants
//! - Deterministic payloads under an injected random source

mod common;

use std::sync::Arc;

use agrisat_backend::random::SequenceRng;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::*;
use proptest::prelude::*;
use serde_json::{json, Value};

fn square() -> Value {
    json!({ "bounds": [[0, 0], [0, 1], [1, 1], [1, 0]] })
}

// ============================================================================
// Unit Tests
// ============================================================================

#[tokio::test]
async fn test_missing_bounds_is_client_error() {
    let (status, body) = post_json(app(), "/analyze-field", &json!({ "name": "North" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "No field bounds provided");
}

#[tokio::test]
async fn test_empty_or_malformed_body_is_client_error() {
    let (status, body) = send(
        app(),
        Request::builder()
            .method("POST")
            .uri("/analyze-field")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");

    let (status, _) = send(
        app(),
        Request::builder()
            .method("POST")
            .uri("/analyze-field")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_square_field_succeeds() {
    let (status, body) = post_json(app(), "/analyze-field", &square()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data_type"], "mock");

    let value = body["ndvi_analysis"]["value"].as_f64().unwrap();
    let min = body["statistics"]["min_ndvi"].as_f64().unwrap();
    let max = body["statistics"]["max_ndvi"].as_f64().unwrap();
    assert!((0.25..=0.85).contains(&value));
    assert!(min <= value && value <= max);
    assert!(min >= 0.1);
    assert_eq!(body["statistics"]["mean_ndvi"], body["ndvi_analysis"]["value"]);
    assert_eq!(body["statistics"]["resolution"], "10m");
    assert_eq!(body["next_steps"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_deterministic_payload() {
    let mut request = square();
    request["name"] = json!("River Plot");
    let (status, body) = post_json(constant_app(0.5), "/analyze-field", &request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["field_info"]["name"], "River Plot");
    assert_eq!(body["field_info"]["crop_type"], "Cotton");
    assert_eq!(body["field_info"]["area_acres"], 27.5);
    assert_eq!(body["ndvi_analysis"]["value"], 0.55);
    assert_eq!(body["ndvi_analysis"]["class"], "good");
    assert_eq!(body["ndvi_analysis"]["status"], "Good ✅");
    assert_eq!(body["ndvi_analysis"]["color"], "#aaff00");
    assert_eq!(
        body["ndvi_analysis"]["interpretation"],
        "Moderate to high vegetation. Typical of healthy agricultural fields."
    );
    assert_eq!(body["statistics"]["min_ndvi"], 0.35);
    assert_eq!(body["statistics"]["max_ndvi"], 0.7);
    assert_eq!(body["statistics"]["health_score"], 55.0);
    assert_eq!(body["statistics"]["cloud_coverage"], "10%");
    assert_eq!(body["weather_impact"]["condition"], "Partly Cloudy");
    assert_eq!(
        body["recommendations"][1],
        "Consider light fertilization in 10-14 days."
    );
}

#[tokio::test]
async fn test_generated_field_name() {
    let (_, body) = post_json(constant_app(0.0), "/analyze-field", &square()).await;
    assert_eq!(body["field_info"]["name"], "Field_1000");
    assert_eq!(body["ndvi_analysis"]["class"], "poor");
    assert_eq!(body["recommendations"][0], "⚠️ Immediate attention required!");
}

#[tokio::test]
async fn test_generation_failure_is_server_error() {
    let app = app_with(Arc::new(SequenceRng::constant(f64::NAN)));
    let mut request = square();
    request["name"] = json!("Broken");
    let (status, body) = post_json(app, "/analyze-field", &request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Analysis error: "));
}

#[tokio::test]
async fn test_preflight_acknowledged() {
    let (status, body) = send(
        app(),
        Request::builder()
            .method("OPTIONS")
            .uri("/analyze-field")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_browser_preflight_gets_json_ack() {
    let response = tower::util::ServiceExt::oneshot(
        app(),
        Request::builder()
            .method("OPTIONS")
            .uri("/analyze-field")
            .header("origin", "http://localhost:8080")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers().clone();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-headers"], "content-type");
    assert!(headers["access-control-allow-methods"]
        .to_str()
        .unwrap()
        .contains("POST"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_cross_origin_post_allowed() {
    let response = tower::util::ServiceExt::oneshot(
        app(),
        Request::builder()
            .method("POST")
            .uri("/analyze-field")
            .header("origin", "http://localhost:8080")
            .header("content-type", "application/json")
            .body(Body::from(square().to_string()))
            .unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn test_get_on_analysis_is_json_method_error() {
    let (status, body) = get(app(), "/analyze-field").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Method not allowed");
}

#[tokio::test]
async fn test_null_name_echoed() {
    let mut request = square();
    request["name"] = Value::Null;
    let (status, body) = post_json(app(), "/analyze-field", &request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["field_info"]["name"].is_null());
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Any draw position yields a value inside the field range with a
    /// min/max spread that brackets it
    #[test]
    fn prop_statistics_bracket_value(unit in 0.0f64..1.0) {
        let (status, body) = tokio_test::block_on(
            post_json(constant_app(unit), "/analyze-field", &square())
        );
        prop_assert_eq!(status, StatusCode::OK);

        let value = body["ndvi_analysis"]["value"].as_f64().unwrap();
        let min = body["statistics"]["min_ndvi"].as_f64().unwrap();
        let max = body["statistics"]["max_ndvi"].as_f64().unwrap();
        prop_assert!((0.25..=0.85).contains(&value));
        prop_assert!(min <= value && value <= max);
        prop_assert!(min >= 0.1 && max <= 1.0);
    }
}
