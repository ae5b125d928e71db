//! Health check handlers

use axum::Json;
use chrono::Local;

use crate::services::info::{health_report, HealthReport};

/// Health check endpoint handler
pub async fn health_check() -> Json<HealthReport> {
    Json(health_report(Local::now().naive_local()))
}
