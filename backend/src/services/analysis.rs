//! Field analysis generation

use std::sync::Arc;

use agrisat_shared::{
    classify_ndvi, interpret_ndvi, ndvi_spread, round_to, CropType, FieldAnalysis, FieldInfo,
    FieldStatistics, NdviAnalysis, ResponseStatus, Season, SkyCondition, WeatherImpact,
    ANALYSIS_NOTE, ANALYSIS_RESOLUTION, NEXT_STEPS,
};
use anyhow::ensure;
use chrono::NaiveDateTime;
use serde_json::Value;

use crate::random::{RandomSource, RandomSourceExt};

/// Range field-level NDVI is drawn from
pub const FIELD_NDVI_RANGE: (f64, f64) = (0.25, 0.85);

/// Parsed `/analyze-field` request
#[derive(Debug, Clone)]
pub struct AnalyzeFieldInput {
    /// Caller's `name` exactly as sent, `null` included; `None` when absent
    pub name: Option<Value>,
    pub bounds: Value,
}

impl AnalyzeFieldInput {
    /// Build from a body already known to carry `bounds`
    pub fn from_body(body: &Value, bounds: &Value) -> Self {
        Self {
            name: body.get("name").cloned(),
            bounds: bounds.clone(),
        }
    }

    pub fn name_for_log(&self) -> String {
        match &self.name {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "<generated>".to_string(),
        }
    }

    /// First two points, for logging
    pub fn bounds_preview(&self) -> String {
        match &self.bounds {
            Value::Array(points) => {
                Value::Array(points.iter().take(2).cloned().collect()).to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Synthesizes NDVI analyses for a field
#[derive(Clone)]
pub struct FieldAnalysisService {
    rng: Arc<dyn RandomSource>,
}

impl FieldAnalysisService {
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        Self { rng }
    }

    /// Generate an analysis.
    ///
    /// Draw order: name (when absent), NDVI, crop, area, pixel count,
    /// cloud coverage, then the four weather-impact fields.
    pub fn analyze(
        &self,
        input: &AnalyzeFieldInput,
        now: NaiveDateTime,
    ) -> anyhow::Result<FieldAnalysis> {
        let rng = self.rng.as_ref();

        let name = match &input.name {
            Some(name) => name.clone(),
            None => Value::String(format!("Field_{}", rng.int_in(1000, 9999))),
        };

        let raw = rng.uniform(FIELD_NDVI_RANGE.0, FIELD_NDVI_RANGE.1);
        ensure!(raw.is_finite(), "NDVI draw was not a finite number ({})", raw);
        let ndvi = round_to(raw, 2);

        let classification = classify_ndvi(ndvi);
        let crop_type = *rng.choose(&CropType::ALL);
        let area_acres = round_to(rng.uniform(5.0, 50.0), 1);
        let (min_ndvi, max_ndvi) = ndvi_spread(ndvi);

        let statistics = FieldStatistics {
            mean_ndvi: ndvi,
            min_ndvi: round_to(min_ndvi, 2),
            max_ndvi: round_to(max_ndvi, 2),
            health_score: round_to(ndvi * 100.0, 1),
            pixels_analyzed: rng.int_in(100_000, 300_000),
            cloud_coverage: format!("{}%", rng.int_in(0, 20)),
            resolution: ANALYSIS_RESOLUTION.to_string(),
        };

        let weather_impact = WeatherImpact {
            last_rainfall: format!("{} days ago", rng.int_in(0, 14)),
            temperature: format!("{}°C", rng.int_in(20, 35)),
            humidity: format!("{}%", rng.int_in(40, 85)),
            condition: *rng.choose(&SkyCondition::FIELD_IMPACT),
        };

        Ok(FieldAnalysis {
            status: ResponseStatus::Success,
            data_type: "mock".to_string(),
            note: ANALYSIS_NOTE.to_string(),
            field_info: FieldInfo {
                name,
                area_acres,
                crop_type,
                analysis_date: now.format("%Y-%m-%d %H:%M:%S").to_string(),
                season: Season::for_date(now.date()),
            },
            ndvi_analysis: NdviAnalysis {
                value: ndvi,
                color: classification.color.to_string(),
                status: classification.status.to_string(),
                class: classification.class,
                interpretation: interpret_ndvi(ndvi).to_string(),
            },
            statistics,
            recommendations: classification
                .class
                .recommendations()
                .iter()
                .map(|r| r.to_string())
                .collect(),
            weather_impact,
            next_steps: NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
        })
    }
}
