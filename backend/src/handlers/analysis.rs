//! HTTP handlers for field analysis

use agrisat_shared::{require_bounds, FieldAnalysis, ResponseStatus};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
    Json,
};
use chrono::Local;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::services::analysis::AnalyzeFieldInput;
use crate::services::FieldAnalysisService;
use crate::AppState;

/// Bare acknowledgment for CORS preflight
#[derive(Debug, Serialize)]
pub struct PreflightAck {
    pub status: ResponseStatus,
}

/// Answer a preflight with CORS grants and a JSON acknowledgment.
///
/// Requested headers are echoed back; any origin is allowed.
pub async fn analyze_field_preflight(request_headers: HeaderMap) -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, HEAD, POST, OPTIONS, PUT, PATCH, DELETE"),
    );
    let allow_headers = request_headers
        .get(header::ACCESS_CONTROL_REQUEST_HEADERS)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("*"));
    headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, allow_headers);

    (
        headers,
        Json(PreflightAck {
            status: ResponseStatus::Ok,
        }),
    )
}

/// Analyze a field drawn by the caller.
///
/// The body is parsed leniently: anything that is not a JSON object with a
/// `bounds` key is rejected as missing bounds.
pub async fn analyze_field(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<FieldAnalysis>> {
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let bounds =
        require_bounds(&body).map_err(|msg| AppError::ValidationError(msg.to_string()))?;
    let input = AnalyzeFieldInput::from_body(&body, bounds);

    tracing::info!(
        field = %input.name_for_log(),
        bounds = %input.bounds_preview(),
        "Analyzing field"
    );

    let service = FieldAnalysisService::new(state.rng.clone());
    let analysis = service
        .analyze(&input, Local::now().naive_local())
        .map_err(|e| AppError::Internal(format!("Analysis error: {}", e)))?;

    tracing::info!(
        field = %analysis.field_info.name_for_log(),
        ndvi = analysis.ndvi_analysis.value,
        status = %analysis.ndvi_analysis.status,
        "Analysis complete"
    );

    Ok(Json(analysis))
}
