use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// One row of the historical dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherObservation {
    pub timestamp: DateTime<FixedOffset>,
    pub summary: String,
    /// `None` when the row carries no precipitation.
    pub precipitation: Option<String>,
    pub temperature_c: f64,
    pub apparent_temperature_c: f64,
    /// Relative humidity as a fraction in `[0, 1]`.
    pub humidity: f64,
    pub wind_speed_kmh: f64,
    pub wind_bearing_deg: f64,
    pub visibility_km: f64,
    pub pressure_mb: f64,
}

impl WeatherObservation {
    /// Humidity as a percentage, the unit used for classification and display.
    pub fn humidity_pct(&self) -> f64 {
        self.humidity * 100.0
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::TimeZone;

    /// The clear, freezing morning used throughout the tests.
    pub fn clear_freezing() -> WeatherObservation {
        WeatherObservation {
            timestamp: FixedOffset::east_opt(2 * 3600)
                .expect("valid offset")
                .with_ymd_and_hms(2016, 12, 31, 23, 0, 0)
                .single()
                .expect("unambiguous timestamp"),
            summary: "Clear".to_string(),
            precipitation: None,
            temperature_c: -5.0,
            apparent_temperature_c: -7.0,
            humidity: 0.5,
            wind_speed_kmh: 10.0,
            wind_bearing_deg: 90.0,
            visibility_km: 10.0,
            pressure_mb: 1015.0,
        }
    }
}
