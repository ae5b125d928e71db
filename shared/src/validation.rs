//! Request checks and numeric helpers
//!
//! Bounds are only checked for presence; their contents never feed
//! into generation.

use serde_json::Value;

/// Message returned when an analysis request has no `bounds` key
pub const MISSING_BOUNDS_MESSAGE: &str = "No field bounds provided";

/// Check that an analysis request body is an object carrying `bounds`.
///
/// A `null` value still counts as present; only the key matters.
pub fn require_bounds(body: &Value) -> Result<&Value, &'static str> {
    body.as_object()
        .and_then(|object| object.get("bounds"))
        .ok_or(MISSING_BOUNDS_MESSAGE)
}

/// Round to `places` decimal places
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Mean of a slice, `None` when empty
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
