//! Discovery and connectivity handlers

use axum::Json;
use chrono::Local;

use crate::services::info::{satellite_status, service_info, SatelliteStatus, ServiceInfo};

/// Service description and endpoint list
pub async fn home() -> Json<ServiceInfo> {
    Json(service_info(Local::now().naive_local()))
}

/// Connectivity check used by the frontend before analysing a field
pub async fn test_satellite() -> Json<SatelliteStatus> {
    Json(satellite_status(Local::now().naive_local()))
}
