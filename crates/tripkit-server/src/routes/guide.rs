//! The trip guide endpoint
//!
//! `GET /api/{city}` merges three payloads: current weather, air quality,
//! and a packing suggestion. Weather and AQI failures are request errors;
//! a failed packing suggestion is silently replaced with the static
//! fallback so the guide stays usable when the model backend is down.

use crate::error::ServerResult;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;
use tripkit_core::PackingSuggestion;

/// Handle `GET /api/{city}`.
pub async fn city_guide(
    State(state): State<Arc<AppState>>,
    Path(city): Path<String>,
) -> ServerResult<Json<Value>> {
    // Weather and AQI are independent upstream calls.
    let (weather, aqi) = tokio::try_join!(
        state.weather.current(&city),
        state.aqi.current(&city)
    )?;

    let suggestion = state.packing.suggest(&city, weather.temp, aqi.aqi).await;
    let packing = resolve_packing(suggestion, weather.temp, aqi.aqi);

    Ok(Json(json!({
        "weather": weather,
        "aqi": aqi,
        "packing": packing,
    })))
}

/// Substitute the static fallback when the suggestion carries an error;
/// pass a clean suggestion through untouched.
fn resolve_packing(suggestion: PackingSuggestion, temp: f64, aqi: u8) -> PackingSuggestion {
    match suggestion.error.as_deref() {
        Some(reason) => {
            tracing::warn!(%reason, "using fallback packing list");
            fallback_packing(temp, aqi)
        }
        None => suggestion,
    }
}

/// Static packing payload used when the suggestion pipeline reports an
/// error. Same shape as an AI-generated suggestion, so clients cannot tell
/// the difference.
pub fn fallback_packing(temp: f64, aqi: u8) -> PackingSuggestion {
    PackingSuggestion {
        packing_list: vec![
            "Light clothing".to_string(),
            "Sunscreen".to_string(),
            "Water bottle".to_string(),
            "Umbrella".to_string(),
            "Comfortable shoes".to_string(),
        ],
        travel_tips: vec![
            format!("Stay hydrated in {temp}°C weather"),
            format!("Check air quality alerts (Current AQI: {aqi})"),
            "Plan indoor activities when AQI is high".to_string(),
        ],
        source: None,
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_mentions_current_conditions() {
        let packing = fallback_packing(31.5, 4);
        assert_eq!(packing.packing_list.len(), 5);
        assert!(packing.travel_tips[0].contains("31.5°C"));
        assert!(packing.travel_tips[1].contains("AQI: 4"));
        assert!(packing.error.is_none());
    }

    #[test]
    fn test_error_suggestion_is_replaced_with_fallback() {
        let degraded = PackingSuggestion {
            packing_list: Vec::new(),
            travel_tips: Vec::new(),
            source: None,
            error: Some("generation timed out after 15s".to_string()),
        };

        let resolved = resolve_packing(degraded, 28.0, 3);

        assert!(resolved.error.is_none());
        assert_eq!(resolved.packing_list.len(), 5);
        assert!(resolved.travel_tips[0].contains("28°C"));
        assert!(resolved.travel_tips[1].contains("AQI: 3"));
    }

    #[test]
    fn test_clean_suggestion_passes_through_unchanged() {
        let suggestion = PackingSuggestion {
            packing_list: vec!["Sunscreen".to_string(), "Hat".to_string()],
            travel_tips: vec!["Stay hydrated".to_string()],
            source: Some("AI-generated based on travel knowledge base".to_string()),
            error: None,
        };

        let resolved = resolve_packing(suggestion.clone(), 28.0, 3);

        assert_eq!(resolved.packing_list, suggestion.packing_list);
        assert_eq!(resolved.travel_tips, suggestion.travel_tips);
        assert_eq!(resolved.source, suggestion.source);
    }

    #[test]
    fn test_fallback_serializes_like_a_suggestion() {
        let json = serde_json::to_value(fallback_packing(20.0, 1)).unwrap();
        assert!(json.get("packing_list").is_some());
        assert!(json.get("travel_tips").is_some());
        // No error field: clients see a normal suggestion shape.
        assert!(json.get("error").is_none());
    }
}
