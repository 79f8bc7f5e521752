//! Named pipeline steps that log what they do.
//!
//! An agent is a small unit with a name and one entry operation. All agents
//! of a run share one [`Reporter`], created at process start and passed in
//! explicitly.

use std::{fmt::Display, path::Path};

use chrono::{DateTime, Local, NaiveDate};
use tracing::Span;

use crate::{
    classify::{HumidityTier, PrecipitationKind, PressureTier, TemperatureTier, VisibilityTier, WindTier},
    compass::CompassPoint,
    error::DatasetError,
    loader,
    model::WeatherObservation,
};

/// Sink for agent log lines, scoped to one report run.
#[derive(Debug, Clone)]
pub struct Reporter {
    span: Span,
}

impl Reporter {
    pub fn new(dataset: &Path) -> Self {
        Self { span: tracing::info_span!("weather_report", dataset = %dataset.display()) }
    }

    /// A reporter that is not attached to any run span.
    pub fn detached() -> Self {
        Self { span: Span::none() }
    }

    pub fn log(&self, agent: &str, message: impl Display) {
        tracing::info!(parent: &self.span, agent, "[{agent}] {message}");
    }

    /// Log a classification step with its field, value and tier as structured fields.
    pub fn classified(&self, agent: &str, field: &str, value: f64, tier: &str, advice: &str) {
        tracing::info!(parent: &self.span, agent, field, value, tier, "[{agent}] {advice}");
    }
}

pub trait Agent {
    type Input: ?Sized;
    type Output;

    fn name(&self) -> &'static str;

    fn execute(&self, input: &Self::Input, reporter: &Reporter) -> Self::Output;
}

/// An agent that reads fields of the current observation.
pub trait FieldAgent: Agent<Input = WeatherObservation> {
    /// Logged instead of running when there is no observation.
    fn missing(&self) -> &'static str;

    fn execute_opt(
        &self,
        observation: Option<&WeatherObservation>,
        reporter: &Reporter,
    ) -> Option<Self::Output> {
        match observation {
            Some(obs) => Some(self.execute(obs, reporter)),
            None => {
                reporter.log(self.name(), self.missing());
                None
            }
        }
    }
}

/// Reports the current date. The date does not select which row is reported.
#[derive(Debug, Default)]
pub struct DateAgent;

impl Agent for DateAgent {
    type Input = DateTime<Local>;
    type Output = NaiveDate;

    fn name(&self) -> &'static str {
        "DateAgent"
    }

    fn execute(&self, now: &DateTime<Local>, reporter: &Reporter) -> NaiveDate {
        let today = now.date_naive();
        reporter.log(self.name(), format_args!("Today's date is: {}", today.format("%Y-%m-%d")));
        today
    }
}

#[derive(Debug, Default)]
pub struct DataLoaderAgent;

impl DataLoaderAgent {
    /// Pick the most recent observation. The dataset is not filtered by date.
    pub fn latest<'a>(
        &self,
        observations: &'a [WeatherObservation],
        reporter: &Reporter,
    ) -> Option<&'a WeatherObservation> {
        reporter.log(self.name(), "Fetching the most recent weather data available");
        loader::most_recent(observations)
    }
}

impl Agent for DataLoaderAgent {
    type Input = Path;
    type Output = Result<Vec<WeatherObservation>, DatasetError>;

    fn name(&self) -> &'static str {
        "DataLoaderAgent"
    }

    fn execute(&self, path: &Path, reporter: &Reporter) -> Self::Output {
        reporter.log(self.name(), format_args!("Loading data from {}", path.display()));
        let observations = loader::load(path)?;
        reporter.log(
            self.name(),
            format_args!("Data loaded successfully. Total records: {}", observations.len()),
        );
        Ok(observations)
    }
}

#[derive(Debug, Default)]
pub struct TemperatureAgent;

impl Agent for TemperatureAgent {
    type Input = WeatherObservation;
    type Output = TemperatureTier;

    fn name(&self) -> &'static str {
        "TemperatureAgent"
    }

    fn execute(&self, obs: &WeatherObservation, reporter: &Reporter) -> TemperatureTier {
        let tier = TemperatureTier::from_celsius(obs.temperature_c);
        reporter.log(self.name(), format_args!("Actual temperature: {:.2}°C", obs.temperature_c));
        reporter.log(self.name(), format_args!("Feels like: {:.2}°C", obs.apparent_temperature_c));
        reporter.classified(self.name(), "temperature", obs.temperature_c, tier.label(), tier.advice());
        tier
    }
}

impl FieldAgent for TemperatureAgent {
    fn missing(&self) -> &'static str {
        "No temperature data available"
    }
}

#[derive(Debug, Default)]
pub struct HumidityAgent;

impl Agent for HumidityAgent {
    type Input = WeatherObservation;
    type Output = HumidityTier;

    fn name(&self) -> &'static str {
        "HumidityAgent"
    }

    fn execute(&self, obs: &WeatherObservation, reporter: &Reporter) -> HumidityTier {
        let pct = obs.humidity_pct();
        let tier = HumidityTier::from_percent(pct);
        reporter.log(self.name(), format_args!("Humidity: {pct:.1}%"));
        reporter.classified(self.name(), "humidity", pct, tier.label(), tier.advice());
        tier
    }
}

impl FieldAgent for HumidityAgent {
    fn missing(&self) -> &'static str {
        "No humidity data available"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindReading {
    pub tier: WindTier,
    pub direction: CompassPoint,
}

#[derive(Debug, Default)]
pub struct WindAgent;

impl Agent for WindAgent {
    type Input = WeatherObservation;
    type Output = WindReading;

    fn name(&self) -> &'static str {
        "WindAgent"
    }

    fn execute(&self, obs: &WeatherObservation, reporter: &Reporter) -> WindReading {
        let tier = WindTier::from_kmh(obs.wind_speed_kmh);
        let direction = CompassPoint::from_bearing(obs.wind_bearing_deg);
        reporter.log(self.name(), format_args!("Wind speed: {:.2} km/h", obs.wind_speed_kmh));
        reporter.log(
            self.name(),
            format_args!("Wind direction: {direction} ({}°)", obs.wind_bearing_deg),
        );
        reporter.classified(self.name(), "wind_speed", obs.wind_speed_kmh, tier.label(), tier.advice());
        WindReading { tier, direction }
    }
}

impl FieldAgent for WindAgent {
    fn missing(&self) -> &'static str {
        "No wind data available"
    }
}

#[derive(Debug, Default)]
pub struct SummaryAgent;

impl Agent for SummaryAgent {
    type Input = WeatherObservation;
    type Output = Option<PrecipitationKind>;

    fn name(&self) -> &'static str {
        "WeatherSummaryAgent"
    }

    fn execute(&self, obs: &WeatherObservation, reporter: &Reporter) -> Option<PrecipitationKind> {
        reporter.log(self.name(), format_args!("Weather summary: {}", obs.summary));
        obs.precipitation.as_deref().map(|precip| {
            reporter.log(self.name(), format_args!("Precipitation type: {precip}"));
            PrecipitationKind::from_type(precip)
        })
    }
}

impl FieldAgent for SummaryAgent {
    fn missing(&self) -> &'static str {
        "No weather summary available"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityPressureReading {
    pub visibility: VisibilityTier,
    pub pressure: Option<PressureTier>,
}

#[derive(Debug, Default)]
pub struct VisibilityPressureAgent;

impl Agent for VisibilityPressureAgent {
    type Input = WeatherObservation;
    type Output = VisibilityPressureReading;

    fn name(&self) -> &'static str {
        "VisibilityPressureAgent"
    }

    fn execute(&self, obs: &WeatherObservation, reporter: &Reporter) -> VisibilityPressureReading {
        let visibility = VisibilityTier::from_km(obs.visibility_km);
        let pressure = PressureTier::from_millibars(obs.pressure_mb);

        reporter.log(self.name(), format_args!("Visibility: {:.1} km", obs.visibility_km));
        reporter.log(self.name(), format_args!("Pressure: {:.1} millibars", obs.pressure_mb));
        reporter.classified(
            self.name(),
            "visibility",
            obs.visibility_km,
            visibility.label(),
            visibility.advice(),
        );
        if let Some(tier) = pressure {
            reporter.classified(self.name(), "pressure", obs.pressure_mb, tier.label(), tier.advice());
        }

        VisibilityPressureReading { visibility, pressure }
    }
}

impl FieldAgent for VisibilityPressureAgent {
    fn missing(&self) -> &'static str {
        "No visibility/pressure data available"
    }
}
