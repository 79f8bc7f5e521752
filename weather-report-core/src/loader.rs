//! Reading the historical weather dataset.
//!
//! The dataset is a CSV file with a header row. Only the columns listed in
//! [`REQUIRED_COLUMNS`] are read; anything else (e.g. `Daily Summary`) is
//! ignored. Rows are assumed to be in chronological order.

use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::Deserialize;

use crate::{error::DatasetError, model::WeatherObservation};

/// File name used when neither the command line nor the config names a dataset.
pub const DEFAULT_DATASET: &str = "weatherHistory.csv";

pub const REQUIRED_COLUMNS: [&str; 10] = [
    "Formatted Date",
    "Summary",
    "Precip Type",
    "Temperature (C)",
    "Apparent Temperature (C)",
    "Humidity",
    "Wind Speed (km/h)",
    "Wind Bearing (degrees)",
    "Visibility (km)",
    "Pressure (millibars)",
];

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Formatted Date")]
    formatted_date: String,
    #[serde(rename = "Summary")]
    summary: String,
    #[serde(rename = "Precip Type")]
    precip_type: Option<String>,
    #[serde(rename = "Temperature (C)")]
    temperature: f64,
    #[serde(rename = "Apparent Temperature (C)")]
    apparent_temperature: f64,
    #[serde(rename = "Humidity")]
    humidity: f64,
    #[serde(rename = "Wind Speed (km/h)")]
    wind_speed: f64,
    #[serde(rename = "Wind Bearing (degrees)")]
    wind_bearing: f64,
    #[serde(rename = "Visibility (km)")]
    visibility: f64,
    #[serde(rename = "Pressure (millibars)")]
    pressure: f64,
}

impl RawRow {
    fn into_observation(self) -> Result<WeatherObservation, String> {
        let timestamp = parse_timestamp(&self.formatted_date)
            .ok_or_else(|| format!("unrecognised date '{}'", self.formatted_date))?;

        let numeric = [
            ("Temperature (C)", self.temperature),
            ("Apparent Temperature (C)", self.apparent_temperature),
            ("Humidity", self.humidity),
            ("Wind Speed (km/h)", self.wind_speed),
            ("Wind Bearing (degrees)", self.wind_bearing),
            ("Visibility (km)", self.visibility),
            ("Pressure (millibars)", self.pressure),
        ];
        if let Some((column, value)) = numeric.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("column '{column}' holds non-finite value {value}"));
        }

        Ok(WeatherObservation {
            timestamp,
            summary: self.summary,
            precipitation: self.precip_type.and_then(normalize_precipitation),
            temperature_c: self.temperature,
            apparent_temperature_c: self.apparent_temperature,
            humidity: self.humidity,
            wind_speed_kmh: self.wind_speed,
            wind_bearing_deg: self.wind_bearing,
            visibility_km: self.visibility,
            pressure_mb: self.pressure,
        })
    }
}

/// Load every observation from the dataset at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<WeatherObservation>, DatasetError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => DatasetError::DatasetNotFound { path: path.to_path_buf() },
        _ => DatasetError::Io { path: path.to_path_buf(), source },
    })?;

    load_from_reader(file, path)
}

/// Parse a dataset from any reader. `origin` is only used in error messages.
pub fn load_from_reader<R: Read>(
    input: R,
    origin: &Path,
) -> Result<Vec<WeatherObservation>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);

    let headers = reader.headers().map_err(|e| csv_error(e, origin))?.clone();

    // Zero-byte file: nothing to report, same as a header without rows.
    if headers.is_empty() {
        return Ok(Vec::new());
    }

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        return Err(DatasetError::malformed(format!(
            "missing required column(s): {}",
            missing.join(", ")
        )));
    }

    let mut observations = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| csv_error(e, origin))?;
        let line = record.position().map_or(0, |p| p.line());

        let row: RawRow = record
            .deserialize(Some(&headers))
            .map_err(|e| DatasetError::malformed(format!("line {line}: {e}")))?;

        let observation = row
            .into_observation()
            .map_err(|reason| DatasetError::malformed(format!("line {line}: {reason}")))?;

        observations.push(observation);
    }

    Ok(observations)
}

/// The last observation of a chronologically ordered dataset, if any.
pub fn most_recent(observations: &[WeatherObservation]) -> Option<&WeatherObservation> {
    observations.last()
}

/// Accepts the historical dataset's `2006-04-01 00:00:00.000 +0200` form,
/// RFC 3339, and a naive `YYYY-MM-DD HH:MM:SS` taken as UTC.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();

    DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f %z")
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc().fixed_offset())
        })
}

fn normalize_precipitation(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn csv_error(err: csv::Error, origin: &Path) -> DatasetError {
    let line = err.position().map(|p| p.line());
    match err.into_kind() {
        csv::ErrorKind::Io(source) => DatasetError::Io { path: origin.to_path_buf(), source },
        kind => {
            let reason = match kind {
                csv::ErrorKind::UnequalLengths { expected_len, len, .. } => {
                    format!("expected {expected_len} fields, found {len}")
                }
                csv::ErrorKind::Utf8 { err, .. } => format!("invalid UTF-8: {err}"),
                other => format!("{other:?}"),
            };
            match line {
                Some(line) => DatasetError::malformed(format!("line {line}: {reason}")),
                None => DatasetError::malformed(reason),
            }
        }
    }
}
