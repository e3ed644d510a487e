use crate::{
    error::FetchError,
    model::{WeatherQuery, WeatherSnapshot},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// Seam between the workflow and the network. The single production
/// implementation is [`OpenWeatherClient`]; tests substitute stubs.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(
        &self,
        query: &WeatherQuery,
    ) -> Result<WeatherSnapshot, FetchError>;
}
