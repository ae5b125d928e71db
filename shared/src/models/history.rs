//! Field history models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ndvi::HealthLabel;
use crate::types::{ResponseStatus, Season};
use crate::validation::{mean, round_to};

/// Number of samples in a synthetic history
pub const HISTORY_ENTRIES: usize = 8;
/// Days between consecutive samples
pub const HISTORY_SPACING_DAYS: i64 = 12;
/// How far back the first sample sits
pub const HISTORY_LOOKBACK_DAYS: i64 = 90;

pub const HISTORY_NOTE: &str = "Simulated historical data for demonstration";

/// Field work logged against a history sample
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FieldActivity {
    Irrigation,
    Fertilization,
    Weeding,
    Monitoring,
    Harvest,
}

impl FieldActivity {
    pub const ALL: [FieldActivity; 5] = [
        FieldActivity::Irrigation,
        FieldActivity::Fertilization,
        FieldActivity::Weeding,
        FieldActivity::Monitoring,
        FieldActivity::Harvest,
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub ndvi: f64,
    pub rainfall_mm: f64,
    pub temperature_avg: f64,
    pub health: HealthLabel,
    pub activity: FieldActivity,
}

/// Direction of NDVI over a history
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Trend {
    #[serde(rename = "improving")]
    Improving,
    #[serde(rename = "stable")]
    Stable,
    #[serde(rename = "insufficient data")]
    InsufficientData,
}

impl Trend {
    /// Compare the last sample against the first. Entries must be date-sorted.
    pub fn from_sorted(entries: &[HistoryEntry]) -> Self {
        match (entries.first(), entries.last()) {
            (Some(first), Some(last)) if entries.len() >= 2 => {
                if last.ndvi > first.ndvi {
                    Trend::Improving
                } else {
                    Trend::Stable
                }
            }
            _ => Trend::InsufficientData,
        }
    }
}

/// Mean NDVI rounded to two places, `0.0` for an empty history
pub fn average_ndvi(entries: &[HistoryEntry]) -> f64 {
    let values: Vec<f64> = entries.iter().map(|e| e.ndvi).collect();
    mean(&values).map(|m| round_to(m, 2)).unwrap_or(0.0)
}

/// Full `/field-history` payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldHistory {
    pub status: ResponseStatus,
    pub field_id: String,
    pub field_name: String,
    pub total_entries: usize,
    pub history: Vec<HistoryEntry>,
    pub trend: Trend,
    pub average_ndvi: f64,
    pub season: Season,
    pub note: String,
}

impl FieldHistory {
    /// Sorts `history` by date before deriving trend and average
    pub fn new(field_id: String, mut history: Vec<HistoryEntry>, season: Season) -> Self {
        history.sort_by_key(|entry| entry.date);
        Self {
            status: ResponseStatus::Success,
            field_name: format!("Agricultural Field #{}", field_id),
            field_id,
            total_entries: history.len(),
            trend: Trend::from_sorted(&history),
            average_ndvi: average_ndvi(&history),
            history,
            season,
            note: HISTORY_NOTE.to_string(),
        }
    }
}
