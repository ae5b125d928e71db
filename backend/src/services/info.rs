//! Discovery, connectivity-check and liveness payloads

use agrisat_shared::ResponseStatus;
use chrono::NaiveDateTime;
use serde::Serialize;

use crate::routes::ENDPOINTS;

/// Service name reported by the health check
pub const SERVICE_NAME: &str = "eosda-backend-mock";

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub status: ResponseStatus,
    pub message: String,
    pub time: String,
    pub mode: String,
    pub note: String,
    pub endpoints: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct SatelliteStatus {
    pub status: ResponseStatus,
    pub message: String,
    pub mode: String,
    pub note: String,
    pub timestamp: String,
    pub next_step: String,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: ResponseStatus,
    pub service: String,
    pub timestamp: String,
    pub version: String,
    pub uptime: String,
}

/// ISO-8601 local timestamp with microsecond precision
pub fn iso_timestamp(now: NaiveDateTime) -> String {
    now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

pub fn service_info(now: NaiveDateTime) -> ServiceInfo {
    let endpoints = ENDPOINTS
        .iter()
        .map(|endpoint| {
            (
                endpoint.route(),
                serde_json::Value::String(endpoint.description.to_string()),
            )
        })
        .collect();

    ServiceInfo {
        status: ResponseStatus::Success,
        message: "✅ EOSDA Backend is running in MOCK MODE".to_string(),
        time: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        mode: "mock_data".to_string(),
        note: "Using simulated data. Perfect for testing!".to_string(),
        endpoints,
    }
}

pub fn satellite_status(now: NaiveDateTime) -> SatelliteStatus {
    SatelliteStatus {
        status: ResponseStatus::Success,
        message: "✅ Backend connected successfully!".to_string(),
        mode: "mock_mode".to_string(),
        note: "Using simulated satellite data - perfect for testing".to_string(),
        timestamp: iso_timestamp(now),
        next_step: "Draw a field and click 'Analyze with Satellite'".to_string(),
    }
}

pub fn health_report(now: NaiveDateTime) -> HealthReport {
    HealthReport {
        status: ResponseStatus::Healthy,
        service: SERVICE_NAME.to_string(),
        timestamp: iso_timestamp(now),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: "Active".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap()
    }

    #[test]
    fn test_service_info_lists_every_endpoint() {
        let info = service_info(now());
        assert_eq!(info.time, "2026-10-17 14:05:09");
        assert_eq!(info.endpoints.len(), ENDPOINTS.len());
        assert!(info.endpoints.contains_key("POST /analyze-field"));
    }

    #[test]
    fn test_health_carries_version() {
        let health = health_report(now());
        let body = serde_json::to_value(&health).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["timestamp"], "2026-10-17T14:05:09.000000");
    }

    #[test]
    fn test_timestamp_truncates_to_microseconds() {
        let precise = NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_nano_opt(14, 5, 9, 123_456_789)
            .unwrap();
        assert_eq!(iso_timestamp(precise), "2026-10-17T14:05:09.123456");
        assert_eq!(satellite_status(precise).timestamp, "2026-10-17T14:05:09.123456");
    }
}
