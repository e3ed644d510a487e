//! Core library for the `weather-advisor` CLI.
//!
//! This crate defines:
//! - Configuration handling (API key, base URL)
//! - The weather-fetch-and-advise workflow and its observable state
//! - The advisory rule table (pure, testable without I/O)
//! - The OpenWeather client behind the provider seam
//!
//! It is used by `advisor-cli`, but can also be reused by other binaries or services.

pub mod advice;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod workflow;

pub use advice::{AdvisoryCategory, advisory_text};
pub use config::Config;
pub use error::FetchError;
pub use model::{ViewState, WeatherQuery, WeatherSnapshot};
pub use provider::{OpenWeatherClient, WeatherProvider};
pub use workflow::{AdvisoryWorkflow, EMPTY_INPUT_MESSAGE};
