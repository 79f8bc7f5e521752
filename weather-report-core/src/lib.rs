//! Core library for the `weather-report` CLI.
//!
//! This crate defines:
//! - Loading the historical weather dataset
//! - Per-field classification and compass resolution
//! - The logging agents that run over the most recent observation
//! - Report building and rendering
//! - Configuration handling
//!
//! It is used by `weather-report-cli`, but can also be reused by other binaries.

pub mod agent;
pub mod classify;
pub mod compass;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod report;

pub use agent::{Agent, DataLoaderAgent, DateAgent, FieldAgent, Reporter};
pub use compass::CompassPoint;
pub use config::Config;
pub use error::DatasetError;
pub use model::WeatherObservation;
pub use report::{ClassifiedReport, Recommendation, analyze, render, render_json};
