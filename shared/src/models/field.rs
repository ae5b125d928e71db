//! Field analysis models

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ndvi::NdviClass;
use crate::types::{ResponseStatus, Season};

/// Crops a mock field can be planted with
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CropType {
    Wheat,
    Rice,
    Corn,
    Cotton,
    Soybean,
    Sugarcane,
}

impl FieldInfo {
    /// Name as plain text for log lines
    pub fn name_for_log(&self) -> String {
        match &self.name {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl CropType {
    pub const ALL: [CropType; 6] = [
        CropType::Wheat,
        CropType::Rice,
        CropType::Corn,
        CropType::Cotton,
        CropType::Soybean,
        CropType::Sugarcane,
    ];
}

/// Sky condition labels shared by analysis and weather payloads
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SkyCondition {
    Sunny,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    Clear,
    #[serde(rename = "Mostly Sunny")]
    MostlySunny,
}

impl SkyCondition {
    /// Conditions reported alongside a field analysis
    pub const FIELD_IMPACT: [SkyCondition; 3] = [
        SkyCondition::Sunny,
        SkyCondition::PartlyCloudy,
        SkyCondition::Clear,
    ];

    /// Conditions reported for current weather
    pub const CURRENT: [SkyCondition; 4] = [
        SkyCondition::Sunny,
        SkyCondition::PartlyCloudy,
        SkyCondition::Clear,
        SkyCondition::MostlySunny,
    ];
}

/// Field descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldInfo {
    /// Caller-supplied name echoed as sent, or a generated `Field_NNNN`
    pub name: Value,
    pub area_acres: f64,
    pub crop_type: CropType,
    /// Local time, `%Y-%m-%d %H:%M:%S`
    pub analysis_date: String,
    pub season: Season,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NdviAnalysis {
    pub value: f64,
    pub color: String,
    pub status: String,
    pub class: NdviClass,
    pub interpretation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldStatistics {
    pub mean_ndvi: f64,
    pub min_ndvi: f64,
    pub max_ndvi: f64,
    pub health_score: f64,
    pub pixels_analyzed: i64,
    pub cloud_coverage: String,
    pub resolution: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherImpact {
    pub last_rainfall: String,
    pub temperature: String,
    pub humidity: String,
    pub condition: SkyCondition,
}

/// Full `/analyze-field` success payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldAnalysis {
    pub status: ResponseStatus,
    pub data_type: String,
    pub note: String,
    pub field_info: FieldInfo,
    pub ndvi_analysis: NdviAnalysis,
    pub statistics: FieldStatistics,
    pub recommendations: Vec<String>,
    pub weather_impact: WeatherImpact,
    pub next_steps: Vec<String>,
}

pub const ANALYSIS_NOTE: &str =
    "Using simulated data. Real satellite data requires Sentinel Hub API keys.";

pub const ANALYSIS_RESOLUTION: &str = "10m";

pub const NEXT_STEPS: [&str; 3] = [
    "Re-analyze in 7 days to track progress",
    "Compare with historical data",
    "Share report with farm manager",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_catalogue() {
        assert_eq!(CropType::ALL.len(), 6);
        assert_eq!(serde_json::to_string(&CropType::Sugarcane).unwrap(), "\"Sugarcane\"");
    }

    #[test]
    fn test_sky_condition_names() {
        assert_eq!(
            serde_json::to_string(&SkyCondition::PartlyCloudy).unwrap(),
            "\"Partly Cloudy\""
        );
        assert_eq!(
            serde_json::to_string(&SkyCondition::MostlySunny).unwrap(),
            "\"Mostly Sunny\""
        );
        assert!(!SkyCondition::FIELD_IMPACT.contains(&SkyCondition::MostlySunny));
    }
}
