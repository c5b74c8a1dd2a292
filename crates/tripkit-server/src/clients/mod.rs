//! OpenWeather HTTP clients
//!
//! Thin request/response wrappers with status-code-to-error mapping. City
//! validation happens here: an unknown city is whatever OpenWeather refuses
//! to geocode.

mod aqi;
mod weather;

pub use aqi::{AqiClient, AqiComponents, AqiReport};
pub use weather::{WeatherClient, WeatherReport};

use crate::error::ServerError;

pub(crate) const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";

/// Outbound request timeout for both clients.
pub(crate) const UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Shared transport-error mapping for OpenWeather calls.
pub(crate) fn map_transport_error(context: &str, e: reqwest::Error) -> ServerError {
    if e.is_timeout() {
        ServerError::UpstreamTimeout(format!("{context} request timed out"))
    } else {
        ServerError::Upstream(format!("{context} connection failed: {e}"))
    }
}
