//! Current-weather client (OpenWeather `/data/2.5/weather`)

use super::{map_transport_error, OPENWEATHER_BASE_URL, UPSTREAM_TIMEOUT_SECS};
use crate::error::{ServerError, ServerResult};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Current conditions for a city, in metric units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temp: f64,
    pub feels_like: f64,
    pub condition: String,
    pub description: String,
    pub humidity: f64,
    pub wind_speed: f64,
}

#[derive(Clone)]
pub struct WeatherClient {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> ServerResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(UPSTREAM_TIMEOUT_SECS))
            .build()
            .map_err(|e| ServerError::Internal(format!("HTTP client build failed: {e}")))?;

        Ok(Self {
            http_client,
            api_key: api_key.into(),
            base_url: OPENWEATHER_BASE_URL.to_string(),
        })
    }

    /// Fetch current weather for a city.
    pub async fn current(&self, city: &str) -> ServerResult<WeatherReport> {
        #[derive(Deserialize)]
        struct ApiResponse {
            main: ApiMain,
            weather: Vec<ApiWeather>,
            wind: ApiWind,
        }

        #[derive(Deserialize)]
        struct ApiMain {
            temp: f64,
            feels_like: f64,
            humidity: f64,
        }

        #[derive(Deserialize)]
        struct ApiWeather {
            main: String,
            description: String,
        }

        #[derive(Deserialize)]
        struct ApiWind {
            speed: f64,
        }

        tracing::debug!(%city, "fetching current weather");

        let url = format!("{}/data/2.5/weather", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("q", city), ("appid", &self.api_key), ("units", "metric")])
            .send()
            .await
            .map_err(|e| map_transport_error("Weather API", e))?;

        match response.status() {
            StatusCode::UNAUTHORIZED => return Err(ServerError::InvalidApiKey),
            StatusCode::NOT_FOUND => return Err(ServerError::CityNotFound(city.to_string())),
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(ServerError::Upstream(format!(
                    "Weather API returned HTTP {status}: {body}"
                )));
            }
            _ => {}
        }

        let data: ApiResponse = response
            .json()
            .await
            .map_err(|e| ServerError::Upstream(format!("Malformed weather response: {e}")))?;

        let condition = data
            .weather
            .first()
            .ok_or_else(|| ServerError::Upstream("Weather response missing conditions".into()))?;

        Ok(WeatherReport {
            temp: data.main.temp,
            feels_like: data.main.feels_like,
            condition: condition.main.clone(),
            description: condition.description.clone(),
            humidity: data.main.humidity,
            wind_speed: data.wind.speed,
        })
    }
}
