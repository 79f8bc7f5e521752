//! Threshold classification of single observation fields.
//!
//! Each tier carries the advice an agent logs for it. The recommendations
//! printed in the final report are decided separately, with their own
//! thresholds, in [`crate::report`].

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureTier {
    Freezing,
    Cold,
    Pleasant,
    Hot,
}

impl TemperatureTier {
    pub fn from_celsius(t: f64) -> Self {
        if t < 0.0 {
            Self::Freezing
        } else if t < 10.0 {
            Self::Cold
        } else if t <= 30.0 {
            Self::Pleasant
        } else {
            Self::Hot
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Freezing => "freezing",
            Self::Cold => "cold",
            Self::Pleasant => "pleasant",
            Self::Hot => "hot",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            Self::Freezing => "Freezing! Wear heavy clothing.",
            Self::Cold => "It's cold! Wear warm clothes.",
            Self::Pleasant => "Pleasant temperature!",
            Self::Hot => "It's hot! Stay hydrated.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HumidityTier {
    High,
    Low,
    Comfortable,
}

impl HumidityTier {
    /// `pct` is relative humidity in percent, not the dataset's fraction.
    pub fn from_percent(pct: f64) -> Self {
        if pct > 70.0 {
            Self::High
        } else if pct < 30.0 {
            Self::Low
        } else {
            Self::Comfortable
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
            Self::Comfortable => "comfortable",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            Self::High => "High humidity - might feel muggy",
            Self::Low => "Low humidity - stay moisturized",
            Self::Comfortable => "Comfortable humidity level",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindTier {
    Calm,
    LightBreeze,
    ModerateBreeze,
    Strong,
}

impl WindTier {
    pub fn from_kmh(speed: f64) -> Self {
        if speed < 1.0 {
            Self::Calm
        } else if speed < 12.0 {
            Self::LightBreeze
        } else if speed < 29.0 {
            Self::ModerateBreeze
        } else {
            Self::Strong
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::LightBreeze => "light breeze",
            Self::ModerateBreeze => "moderate breeze",
            Self::Strong => "strong",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            Self::Calm => "Calm winds",
            Self::LightBreeze => "Light breeze",
            Self::ModerateBreeze => "Moderate breeze",
            Self::Strong => "Strong winds - be careful!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityTier {
    Poor,
    Reduced,
    Good,
}

impl VisibilityTier {
    pub fn from_km(km: f64) -> Self {
        if km < 1.0 {
            Self::Poor
        } else if km < 5.0 {
            Self::Reduced
        } else {
            Self::Good
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Reduced => "reduced",
            Self::Good => "good",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            Self::Poor => "Poor visibility - be careful while driving",
            Self::Reduced => "Reduced visibility",
            Self::Good => "Good visibility",
        }
    }
}

/// Only the extremes get a tier; pressure in `[1000, 1020]` is unremarkable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PressureTier {
    Low,
    High,
}

impl PressureTier {
    pub fn from_millibars(mb: f64) -> Option<Self> {
        if mb < 1000.0 {
            Some(Self::Low)
        } else if mb > 1020.0 {
            Some(Self::High)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            Self::Low => "Low pressure - possible stormy weather",
            Self::High => "High pressure - generally fair weather",
        }
    }
}

/// Precipitation type as recorded in the dataset (`rain`, `snow`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecipitationKind {
    Rain,
    Snow,
    Other,
}

impl PrecipitationKind {
    pub fn from_type(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("rain") {
            Self::Rain
        } else if raw.eq_ignore_ascii_case("snow") {
            Self::Snow
        } else {
            Self::Other
        }
    }
}
