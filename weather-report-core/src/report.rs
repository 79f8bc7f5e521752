//! Building and rendering the weather report.

use std::fmt;

use serde::Serialize;

use crate::{
    agent::{
        FieldAgent, HumidityAgent, Reporter, SummaryAgent, TemperatureAgent,
        VisibilityPressureAgent, WindAgent,
    },
    classify::{
        HumidityTier, PrecipitationKind, PressureTier, TemperatureTier, VisibilityTier, WindTier,
    },
    compass::CompassPoint,
    model::WeatherObservation,
};

/// Wind above this speed (km/h) triggers the report's wind caution. Lower
/// than the field tier's `strong` cutoff of 29 km/h.
pub const WIND_CAUTION_KMH: f64 = 25.0;

/// Visibility below this distance (km) triggers the report's driving caution.
pub const VISIBILITY_CAUTION_KM: f64 = 5.0;

pub const INSUFFICIENT_DATA: &str = "Insufficient data for complete report";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    DressWarmly,
    WearJacket,
    SunscreenAndHydration,
    Umbrella,
    DriveCarefullyInSnow,
    SecureLooseObjects,
    DriveWithCaution,
}

impl Recommendation {
    pub fn message(&self) -> &'static str {
        match self {
            Self::DressWarmly => "Freezing conditions - dress very warmly!",
            Self::WearJacket => "Cold weather - wear a jacket",
            Self::SunscreenAndHydration => "Hot weather - use sunscreen and stay hydrated",
            Self::Umbrella => "Don't forget your umbrella!",
            Self::DriveCarefullyInSnow => "Snow expected - drive carefully!",
            Self::SecureLooseObjects => "Strong winds - secure loose objects",
            Self::DriveWithCaution => "Reduced visibility - drive with caution",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Report-level recommendations, in display order: temperature,
/// precipitation, wind, visibility.
///
/// These thresholds are checked on the raw values, independently of the
/// field tiers.
pub fn recommendations(obs: &WeatherObservation) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if obs.temperature_c < 0.0 {
        out.push(Recommendation::DressWarmly);
    } else if obs.temperature_c < 10.0 {
        out.push(Recommendation::WearJacket);
    } else if obs.temperature_c > 30.0 {
        out.push(Recommendation::SunscreenAndHydration);
    }

    match obs.precipitation.as_deref().map(PrecipitationKind::from_type) {
        Some(PrecipitationKind::Rain) => out.push(Recommendation::Umbrella),
        Some(PrecipitationKind::Snow) => out.push(Recommendation::DriveCarefullyInSnow),
        Some(PrecipitationKind::Other) | None => {}
    }

    if obs.wind_speed_kmh > WIND_CAUTION_KMH {
        out.push(Recommendation::SecureLooseObjects);
    }

    if obs.visibility_km < VISIBILITY_CAUTION_KM {
        out.push(Recommendation::DriveWithCaution);
    }

    out
}

/// One observation together with everything derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedReport {
    pub observation: WeatherObservation,
    pub humidity_pct: f64,
    pub wind_direction: CompassPoint,
    pub temperature: TemperatureTier,
    pub humidity: HumidityTier,
    pub wind: WindTier,
    pub visibility: VisibilityTier,
    pub pressure: Option<PressureTier>,
    pub precipitation: Option<PrecipitationKind>,
    pub recommendations: Vec<Recommendation>,
}

/// Run every field agent over `observation`.
///
/// Returns `None` when there is no observation; each agent still logs that
/// its data is missing.
pub fn analyze(
    observation: Option<&WeatherObservation>,
    reporter: &Reporter,
) -> Option<ClassifiedReport> {
    let temperature = TemperatureAgent.execute_opt(observation, reporter);
    let humidity = HumidityAgent.execute_opt(observation, reporter);
    let wind = WindAgent.execute_opt(observation, reporter);
    let precipitation = SummaryAgent.execute_opt(observation, reporter);
    let visibility_pressure = VisibilityPressureAgent.execute_opt(observation, reporter);

    let observation = observation?;
    Some(ClassifiedReport {
        humidity_pct: observation.humidity_pct(),
        wind_direction: wind?.direction,
        temperature: temperature?,
        humidity: humidity?,
        wind: wind?.tier,
        visibility: visibility_pressure?.visibility,
        pressure: visibility_pressure?.pressure,
        precipitation: precipitation?,
        recommendations: recommendations(observation),
        observation: observation.clone(),
    })
}

impl fmt::Display for ClassifiedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let obs = &self.observation;

        writeln!(f, "Weather Conditions:")?;
        writeln!(f, "Summary: {}", obs.summary)?;
        writeln!(
            f,
            "Temperature: {:.1}°C (Feels like: {:.1}°C)",
            obs.temperature_c, obs.apparent_temperature_c
        )?;
        writeln!(f, "Humidity: {:.1}%", self.humidity_pct)?;
        writeln!(f, "Wind: {:.1} km/h ({})", obs.wind_speed_kmh, self.wind_direction)?;
        writeln!(f, "Visibility: {:.1} km", obs.visibility_km)?;
        writeln!(f, "Pressure: {:.1} mb", obs.pressure_mb)?;
        if let Some(precip) = &obs.precipitation {
            writeln!(f, "Precipitation: {precip}")?;
        }

        writeln!(f)?;
        writeln!(f, "Recommendations:")?;
        for rec in &self.recommendations {
            writeln!(f, "{rec}")?;
        }

        Ok(())
    }
}

/// Render the report as plain text. Every line ends with a newline.
pub fn render(report: Option<&ClassifiedReport>) -> String {
    match report {
        Some(report) => report.to_string(),
        None => format!("{INSUFFICIENT_DATA}\n"),
    }
}

/// Render the report as pretty JSON; `null` when there is no observation.
pub fn render_json(report: Option<&ClassifiedReport>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&report)
}
