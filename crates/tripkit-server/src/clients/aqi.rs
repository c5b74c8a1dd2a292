//! Air-quality client (OpenWeather geocoding + `/data/2.5/air_pollution`)

use super::{map_transport_error, OPENWEATHER_BASE_URL, UPSTREAM_TIMEOUT_SECS};
use crate::error::{ServerError, ServerResult};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Air-quality snapshot. `aqi` uses OpenWeather's 1-5 severity scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AqiReport {
    pub aqi: u8,
    pub level: String,
    pub components: AqiComponents,
}

/// Pollutant concentrations in ug/m3.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AqiComponents {
    pub co: f64,
    pub no: f64,
    pub no2: f64,
    pub o3: f64,
    pub so2: f64,
    pub pm2_5: f64,
    pub pm10: f64,
    pub nh3: f64,
}

/// Human-readable label for an OpenWeather AQI value.
pub fn level_for(aqi: u8) -> &'static str {
    match aqi {
        1 => "Good",
        2 => "Fair",
        3 => "Moderate",
        4 => "Poor",
        5 => "Very Poor",
        _ => "Unknown",
    }
}

#[derive(Clone)]
pub struct AqiClient {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl AqiClient {
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

    /// Resolve a city name to coordinates via OpenWeather geocoding.
    async fn coordinates(&self, city: &str) -> ServerResult<(f64, f64)> {
        #[derive(Deserialize)]
        struct GeoEntry {
            lat: f64,
            lon: f64,
        }

        let url = format!("{}/geo/1.0/direct", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("q", city), ("limit", "1"), ("appid", &self.api_key)])
            .send()
            .await
            .map_err(|e| map_transport_error("Geocoding", e))?;

        match response.status() {
            StatusCode::UNAUTHORIZED => return Err(ServerError::InvalidApiKey),
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(ServerError::Upstream(format!(
                    "Geocoding returned HTTP {status}: {body}"
                )));
            }
            _ => {}
        }

        let entries: Vec<GeoEntry> = response
            .json()
            .await
            .map_err(|e| ServerError::Upstream(format!("Malformed geocoding response: {e}")))?;

        // Geocoding answers 200 with an empty array for unknown cities.
        let entry = entries
            .into_iter()
            .next()
            .ok_or_else(|| ServerError::CityNotFound(city.to_string()))?;

        Ok((entry.lat, entry.lon))
    }

    /// Fetch the current air-quality index for a city.
    pub async fn current(&self, city: &str) -> ServerResult<AqiReport> {
        #[derive(Deserialize)]
        struct ApiResponse {
            list: Vec<ApiEntry>,
        }

        #[derive(Deserialize)]
        struct ApiEntry {
            main: ApiMain,
            components: AqiComponents,
        }

        #[derive(Deserialize)]
        struct ApiMain {
            aqi: u8,
        }

        let (lat, lon) = self.coordinates(city).await?;
        tracing::debug!(%city, lat, lon, "fetching air quality");

        let url = format!("{}/data/2.5/air_pollution", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| map_transport_error("Air pollution API", e))?;

        match response.status() {
            StatusCode::UNAUTHORIZED => return Err(ServerError::InvalidApiKey),
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(ServerError::Upstream(format!(
                    "Air pollution API returned HTTP {status}: {body}"
                )));
            }
            _ => {}
        }

        let data: ApiResponse = response
            .json()
            .await
            .map_err(|e| ServerError::Upstream(format!("Malformed air pollution response: {e}")))?;

        let entry = data
            .list
            .into_iter()
            .next()
            .ok_or_else(|| ServerError::Upstream("Air pollution response was empty".into()))?;

        Ok(AqiReport {
            aqi: entry.main.aqi,
            level: level_for(entry.main.aqi).to_string(),
            components: entry.components,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping_covers_the_scale() {
        assert_eq!(level_for(1), "Good");
        assert_eq!(level_for(2), "Fair");
        assert_eq!(level_for(3), "Moderate");
        assert_eq!(level_for(4), "Poor");
        assert_eq!(level_for(5), "Very Poor");
        assert_eq!(level_for(0), "Unknown");
        assert_eq!(level_for(9), "Unknown");
    }
}
