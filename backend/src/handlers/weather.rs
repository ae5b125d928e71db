//! HTTP handlers for weather endpoints

use agrisat_shared::{Location, WeatherReport};
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Local;

use super::QueryParams;
use crate::services::WeatherService;
use crate::AppState;

/// Current conditions and a three-day forecast
pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Json<WeatherReport> {
    // Coordinates are echoed unparsed
    let defaults = &state.config.weather;
    let location = Location::new(
        params.first("lat").unwrap_or(&defaults.default_lat),
        params.first("lng").unwrap_or(&defaults.default_lng),
    );

    let service = WeatherService::new(state.rng.clone());
    Json(service.report(location, Local::now().date_naive()))
}
