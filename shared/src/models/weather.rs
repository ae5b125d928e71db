//! Weather data models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::field::SkyCondition;
use crate::types::{Location, ResponseStatus};

/// Compass points for wind direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WindDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl WindDirection {
    pub const ALL: [WindDirection; 8] = [
        WindDirection::N,
        WindDirection::NE,
        WindDirection::E,
        WindDirection::SE,
        WindDirection::S,
        WindDirection::SW,
        WindDirection::W,
        WindDirection::NW,
    ];
}

/// Current conditions at a location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub humidity: f64,
    pub precipitation: f64,
    pub wind_speed: f64,
    pub wind_direction: WindDirection,
    pub condition: SkyCondition,
    pub pressure: f64,
    pub visibility: String,
}

/// Label of a forecast slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ForecastDay {
    Today,
    Tomorrow,
    #[serde(rename = "Day 3")]
    DayThree,
}

impl ForecastDay {
    pub const ALL: [ForecastDay; 3] = [ForecastDay::Today, ForecastDay::Tomorrow, ForecastDay::DayThree];

    /// Days after today
    pub fn offset_days(&self) -> i64 {
        match self {
            ForecastDay::Today => 0,
            ForecastDay::Tomorrow => 1,
            ForecastDay::DayThree => 2,
        }
    }
}

/// Daily forecast entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    pub day: ForecastDay,
    pub date: NaiveDate,
    pub high: i64,
    pub low: i64,
    pub condition: SkyCondition,
    pub rain_chance: String,
    pub wind: String,
}

/// Full `/weather` payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub status: ResponseStatus,
    pub location: Location,
    pub current: CurrentConditions,
    pub forecast: Vec<DailyForecast>,
    pub agricultural_advice: Vec<String>,
}

pub const AGRICULTURAL_ADVICE: [&str; 4] = [
    "Good conditions for field work",
    "Ideal for irrigation activities",
    "Monitor soil moisture levels",
    "Favorable for fertilizer application",
];
