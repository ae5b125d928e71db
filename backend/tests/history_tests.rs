//! Field history integration tests
//!
//! Tests for `/field-history` including:
//! - Field id echo and default
//! - Entry count, ordering and spacing
//! - Average and trend derivation

mod common;

use std::sync::Arc;

use agrisat_backend::random::SequenceRng;
use axum::http::StatusCode;
use chrono::NaiveDate;
use common::*;

fn dates(body: &serde_json::Value) -> Vec<NaiveDate> {
    body["history"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| NaiveDate::parse_from_str(e["date"].as_str().unwrap(), "%Y-%m-%d").unwrap())
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[tokio::test]
async fn test_field_id_echoed() {
    let (status, body) = get(app(), "/field-history?field_id=42").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["field_id"], "42");
    assert_eq!(body["field_name"], "Agricultural Field #42");
    assert_eq!(body["total_entries"], 8);
}

#[tokio::test]
async fn test_repeated_field_id_takes_first() {
    let (status, body) = get(app(), "/field-history?field_id=1&field_id=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["field_id"], "1");
}

#[tokio::test]
async fn test_default_field_id() {
    let (_, body) = get(app(), "/field-history").await;
    assert_eq!(body["field_id"], "1");
}

#[tokio::test]
async fn test_entries_sorted_and_spaced() {
    let (_, body) = get(app(), "/field-history?field_id=42").await;
    let dates = dates(&body);

    assert_eq!(dates.len(), 8);
    for pair in dates.windows(2) {
        assert!(pair[0] < pair[1]);
        assert_eq!((pair[1] - pair[0]).num_days(), 12);
    }
}

#[tokio::test]
async fn test_average_is_rounded_mean() {
    let (_, body) = get(app(), "/field-history?field_id=42").await;
    let values: Vec<f64> = body["history"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["ndvi"].as_f64().unwrap())
        .collect();

    let expected = round2(values.iter().sum::<f64>() / values.len() as f64);
    assert_eq!(body["average_ndvi"].as_f64().unwrap(), expected);

    for entry in body["history"].as_array().unwrap() {
        let ndvi = entry["ndvi"].as_f64().unwrap();
        assert!((0.3..=0.8).contains(&ndvi));
        let health = entry["health"].as_str().unwrap();
        assert!(["Good", "Moderate", "Poor"].contains(&health));
    }
}

#[tokio::test]
async fn test_trend_improving() {
    let mut draws = vec![0.5; 32];
    draws[0] = 0.0;
    draws[28] = 0.9;
    let app = app_with(Arc::new(SequenceRng::new(draws)));
    let (_, body) = get(app, "/field-history?field_id=5").await;

    assert_eq!(body["history"][0]["ndvi"], 0.3);
    assert_eq!(body["history"][0]["health"], "Poor");
    assert_eq!(body["history"][7]["ndvi"], 0.75);
    assert_eq!(body["trend"], "improving");
}

#[tokio::test]
async fn test_trend_stable_when_flat() {
    let (_, body) = get(constant_app(0.5), "/field-history").await;

    assert_eq!(body["trend"], "stable");
    assert_eq!(body["average_ndvi"], 0.55);
    assert_eq!(body["history"][3]["activity"], "Weeding");
    assert_eq!(body["note"], "Simulated historical data for demonstration");
}
