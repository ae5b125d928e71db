//! HTTP handlers for field history

use agrisat_shared::FieldHistory;
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Local;

use super::QueryParams;
use crate::services::history::DEFAULT_FIELD_ID;
use crate::services::FieldHistoryService;
use crate::AppState;

/// NDVI history over the last 90 days
pub async fn get_field_history(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Json<FieldHistory> {
    let field_id = params
        .first("field_id")
        .unwrap_or(DEFAULT_FIELD_ID)
        .to_string();

    let service = FieldHistoryService::new(state.rng.clone());
    Json(service.history(field_id, Local::now().date_naive()))
}
