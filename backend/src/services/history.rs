//! Synthetic field history

use std::sync::Arc;

use agrisat_shared::{
    classify_health, round_to, FieldActivity, FieldHistory, HistoryEntry, Season,
    HISTORY_ENTRIES, HISTORY_LOOKBACK_DAYS, HISTORY_SPACING_DAYS,
};
use chrono::{Duration, NaiveDate};

use crate::random::{RandomSource, RandomSourceExt};

/// Field id used when the caller sends none
pub const DEFAULT_FIELD_ID: &str = "1";

/// Generates NDVI history for a field
#[derive(Clone)]
pub struct FieldHistoryService {
    rng: Arc<dyn RandomSource>,
}

impl FieldHistoryService {
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        Self { rng }
    }

    /// Build the history for `field_id` looking back from `today`.
    ///
    /// Each entry draws NDVI, rainfall, temperature, then activity.
    pub fn history(&self, field_id: String, today: NaiveDate) -> FieldHistory {
        let start = today - Duration::days(HISTORY_LOOKBACK_DAYS);
        let entries = (0..HISTORY_ENTRIES as i64)
            .map(|i| self.entry(start + Duration::days(i * HISTORY_SPACING_DAYS)))
            .collect();

        FieldHistory::new(field_id, entries, Season::for_date(today))
    }

    fn entry(&self, date: NaiveDate) -> HistoryEntry {
        let rng = self.rng.as_ref();
        let ndvi = 0.3 + rng.unit() * 0.5;

        HistoryEntry {
            date,
            ndvi: round_to(ndvi, 2),
            rainfall_mm: round_to(rng.unit() * 20.0, 1),
            temperature_avg: round_to(22.0 + rng.unit() * 10.0, 1),
            // Classified before rounding
            health: classify_health(ndvi),
            activity: *rng.choose(&FieldActivity::ALL),
        }
    }
}
