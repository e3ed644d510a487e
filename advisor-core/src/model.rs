use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single weather lookup. `city` is expected to be trimmed and non-empty;
/// the workflow rejects anything else before a query is ever constructed.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    pub city: String,
}

impl WeatherQuery {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }
}

/// The weather fields captured from one successful fetch. Immutable once
/// built; the workflow replaces it wholesale on every new result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city_name: String,
    pub country_code: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_ms: f64,
    pub description: String,
    pub observation_time: DateTime<Utc>,
}

/// Everything the presentation layer needs to render one screen.
///
/// At most one of `snapshot`/`error` is populated at a time, and `loading`
/// is true only between request start and its terminal outcome.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub city: String,
    pub snapshot: Option<WeatherSnapshot>,
    pub advisory: String,
    pub loading: bool,
    pub error: String,
}

impl ViewState {
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}
