//! Weather service producing mock current conditions and a short forecast

use std::sync::Arc;

use agrisat_shared::{
    round_to, CurrentConditions, DailyForecast, ForecastDay, Location, ResponseStatus,
    SkyCondition, WeatherReport, WindDirection, AGRICULTURAL_ADVICE,
};
use chrono::{Duration, NaiveDate};

use crate::random::{RandomSource, RandomSourceExt};

/// Value ranges for one forecast slot
struct ForecastProfile {
    high: (i64, i64),
    low: (i64, i64),
    /// `None` means pick between Partly Cloudy and Clear
    condition: Option<SkyCondition>,
    rain_chance: (i64, i64),
    wind: (i64, i64),
}

fn forecast_profile(day: ForecastDay) -> ForecastProfile {
    match day {
        ForecastDay::Today => ForecastProfile {
            high: (28, 34),
            low: (20, 24),
            condition: Some(SkyCondition::Sunny),
            rain_chance: (0, 20),
            wind: (5, 12),
        },
        ForecastDay::Tomorrow => ForecastProfile {
            high: (27, 33),
            low: (19, 23),
            condition: None,
            rain_chance: (10, 30),
            wind: (8, 15),
        },
        ForecastDay::DayThree => ForecastProfile {
            high: (26, 32),
            low: (18, 22),
            condition: Some(SkyCondition::Clear),
            rain_chance: (0, 10),
            wind: (5, 10),
        },
    }
}

/// Weather service for mock weather data
#[derive(Clone)]
pub struct WeatherService {
    rng: Arc<dyn RandomSource>,
}

impl WeatherService {
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        Self { rng }
    }

    /// Build a report for `location` with forecast dates starting at `today`
    pub fn report(&self, location: Location, today: NaiveDate) -> WeatherReport {
        let current = self.current_conditions();
        let forecast = ForecastDay::ALL
            .iter()
            .map(|day| self.daily_forecast(*day, today))
            .collect();

        WeatherReport {
            status: ResponseStatus::Success,
            location,
            current,
            forecast,
            agricultural_advice: AGRICULTURAL_ADVICE.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Current conditions, every field drawn independently
    pub fn current_conditions(&self) -> CurrentConditions {
        let rng = self.rng.as_ref();
        CurrentConditions {
            temperature: round_to(rng.uniform(25.0, 35.0), 1),
            humidity: round_to(rng.uniform(40.0, 80.0), 1),
            precipitation: round_to(rng.uniform(0.0, 5.0), 1),
            wind_speed: round_to(rng.uniform(5.0, 15.0), 1),
            wind_direction: *rng.choose(&WindDirection::ALL),
            condition: *rng.choose(&SkyCondition::CURRENT),
            pressure: round_to(rng.uniform(1010.0, 1020.0), 1),
            visibility: format!("{} km", rng.int_in(8, 15)),
        }
    }

    fn daily_forecast(&self, day: ForecastDay, today: NaiveDate) -> DailyForecast {
        let rng = self.rng.as_ref();
        let profile = forecast_profile(day);

        let high = rng.int_in(profile.high.0, profile.high.1);
        let low = rng.int_in(profile.low.0, profile.low.1);
        let condition = profile.condition.unwrap_or_else(|| {
            *rng.choose(&[SkyCondition::PartlyCloudy, SkyCondition::Clear])
        });

        DailyForecast {
            day,
            date: today + Duration::days(day.offset_days()),
            high,
            low,
            condition,
            rain_chance: format!("{}%", rng.int_in(profile.rain_chance.0, profile.rain_chance.1)),
            wind: format!("{} km/h", rng.int_in(profile.wind.0, profile.wind.1)),
        }
    }
}
