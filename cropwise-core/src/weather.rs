//! Dashboard weather card: mock conditions and clock labels.

use chrono::{Datelike, Duration as ChronoDuration, NaiveDate, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Condition {
    Sun,
    Cloud,
    Rain,
}

impl Condition {
    pub fn icon(&self) -> &'static str {
        match self {
            Condition::Sun => "☀️",
            Condition::Cloud => "☁️",
            Condition::Rain => "🌧️",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    /// Abbreviated weekday, e.g. `"Mon"`.
    pub day: String,
    pub temperature: i32,
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    pub location: String,
    pub temperature: i32,
    pub condition: String,
    pub humidity: u8,
    pub wind_speed: u8,
    pub wind_direction: &'static str,
    pub forecast: Vec<ForecastDay>,
}

const DEFAULT_LOCATION: &str = "Farmland, CA";

const FORECAST: [(i32, Condition); 5] = [
    (24, Condition::Sun),
    (26, Condition::Sun),
    (23, Condition::Cloud),
    (22, Condition::Rain),
    (20, Condition::Rain),
];

/// Static conditions for `location` with a five-day forecast starting `today`.
pub fn mock_weather(location: Option<&str>, today: NaiveDate) -> WeatherSnapshot {
    let location = location
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_LOCATION);
    let forecast = FORECAST
        .iter()
        .enumerate()
        .map(|(offset, (temperature, condition))| {
            let date = today + ChronoDuration::days(offset as i64);
            ForecastDay {
                day: date.weekday().to_string(),
                temperature: *temperature,
                condition: *condition,
            }
        })
        .collect();

    WeatherSnapshot {
        location: location.to_string(),
        temperature: 24,
        condition: "Partly Cloudy".to_string(),
        humidity: 65,
        wind_speed: 12,
        wind_direction: "NE",
        forecast,
    }
}

/// Time and date lines of the clock widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockLabels {
    /// `"09:05"`
    pub time: String,
    /// `"Monday, March 3"`
    pub date: String,
}

pub fn clock_labels(now: &NaiveDateTime) -> ClockLabels {
    ClockLabels {
        time: now.format("%H:%M").to_string(),
        date: now.format("%A, %B %-d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_labels_format() {
        let now = NaiveDate::from_ymd_opt(2025, 3, 3)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        let labels = clock_labels(&now);
        assert_eq!(labels.time, "09:05");
        assert_eq!(labels.date, "Monday, March 3");
    }

    #[test]
    fn forecast_starts_today() {
        // 2025-03-06 is a Thursday.
        let today = NaiveDate::from_ymd_opt(2025, 3, 6).unwrap();
        let weather = mock_weather(Some("  Fresno, CA "), today);
        assert_eq!(weather.location, "Fresno, CA");
        let days: Vec<_> = weather.forecast.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(days, vec!["Thu", "Fri", "Sat", "Sun", "Mon"]);
        assert_eq!(mock_weather(None, today).location, DEFAULT_LOCATION);
        assert_eq!(mock_weather(Some(""), today).location, DEFAULT_LOCATION);
    }
}
