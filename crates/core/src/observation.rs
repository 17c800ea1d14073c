//! Weather observation parsing and unit conversion.
//!
//! The provider response is walked along `properties → temperature → value`.
//! An absent or null temperature is a valid reading with no data; anything
//! structurally wrong along the path is a [`AlertError::MalformedResponse`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::AlertError;

/// Latest reading reported by the observation endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationResult {
    /// `None` when the station reported no temperature.
    pub temperature_celsius: Option<f64>,
    /// Provider timestamp of the observation, if present.
    pub observed_at: Option<DateTime<Utc>>,
}

impl ObservationResult {
    /// Temperature converted to Fahrenheit, if one was reported.
    pub fn temperature_fahrenheit(&self) -> Option<f64> {
        self.temperature_celsius.map(celsius_to_fahrenheit)
    }
}

/// Source of the latest observation for the configured station.
#[async_trait]
pub trait ObservationSource: Send + Sync {
    async fn latest(&self) -> Result<ObservationResult, AlertError>;
}

/// `F = C × 9/5 + 32`.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

// ---------------------------------------------------------------------------
// Provider response shape
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ObservationResponse {
    properties: Properties,
}

#[derive(Debug, Deserialize)]
struct Properties {
    /// Only used for logging, so an unparsable value is dropped rather than
    /// failing the reading.
    #[serde(default)]
    timestamp: Option<serde_json::Value>,
    #[serde(default)]
    temperature: Option<Measurement>,
}

#[derive(Debug, Deserialize)]
struct Measurement {
    #[serde(default)]
    value: Option<f64>,
}

/// Parse a raw provider response body.
///
/// ```
/// use weather_alert_core::observation::parse_observation;
///
/// let obs = parse_observation(r#"{"properties":{"temperature":{"value":null}}}"#).unwrap();
/// assert_eq!(obs.temperature_celsius, None);
/// ```
pub fn parse_observation(body: &str) -> Result<ObservationResult, AlertError> {
    let response: ObservationResponse = serde_json::from_str(body)
        .map_err(|e| AlertError::MalformedResponse(format!("observation body: {e}")))?;

    let properties = response.properties;
    Ok(ObservationResult {
        temperature_celsius: properties.temperature.and_then(|t| t.value),
        observed_at: properties
            .timestamp
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .and_then(|raw| raw.parse::<DateTime<Utc>>().ok()),
    })
}
