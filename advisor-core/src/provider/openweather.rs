use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    config::Config,
    error::FetchError,
    model::{WeatherQuery, WeatherSnapshot},
};

use super::WeatherProvider;

/// Client for the OpenWeather "current weather" endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    /// Build a client from startup config. A missing API key is deliberately
    /// not an error here: the request goes out with an empty key and the
    /// service's 401 comes back through the normal classification path.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.api_key.clone().unwrap_or_default(),
            config.base_url_or_default().to_string(),
        )
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherSnapshot, FetchError> {
        let url = format!("{}/weather", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
                ("lang", "tr"),
            ])
            .send()
            .await?;

        let status = res.status();
        debug!(%status, city, "openweather current response");

        if !status.is_success() {
            return Err(match status.as_u16() {
                404 => FetchError::NotFound,
                401 => FetchError::Unauthorized,
                code => {
                    let body = res.text().await.unwrap_or_default();
                    debug!(code, body = %truncate_body(&body), "openweather request failed");
                    FetchError::Upstream(code)
                }
            });
        }

        let body = res.text().await?;
        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;

        let observation_time = unix_to_utc(parsed.dt).unwrap_or_else(Utc::now);

        let description = parsed
            .weather
            .first()
            .map(|w| w.description.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        Ok(WeatherSnapshot {
            city_name: parsed.name,
            country_code: parsed.sys.country,
            temperature_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            wind_speed_ms: parsed.wind.speed,
            description,
            observation_time,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(
        &self,
        query: &WeatherQuery,
    ) -> Result<WeatherSnapshot, FetchError> {
        self.fetch_current(&query.city).await
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
