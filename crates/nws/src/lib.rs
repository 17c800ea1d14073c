//! HTTP client for the National Weather Service observation API.
//!
//! [`NwsClient`] fetches the latest observation for a single station and
//! hands the body to [`weather_alert_core::observation::parse_observation`].
//! Every request carries the configured `User-Agent`, which the NWS API
//! requires to identify callers, and is bounded by [`REQUEST_TIMEOUT`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::USER_AGENT;

use weather_alert_core::observation::parse_observation;
use weather_alert_core::{AlertError, ObservationResult, ObservationSource};

/// Latest observation for station KOXR (Oxnard, serving Ventura, CA).
pub const STATION_URL: &str = "https://api.weather.gov/stations/KOXR/observations/latest";

/// Upper bound on a single observation fetch.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors from the observation API layer.
#[derive(Debug, thiserror::Error)]
pub enum NwsError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("weather API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl From<NwsError> for AlertError {
    fn from(err: NwsError) -> Self {
        AlertError::Network(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// NwsClient
// ---------------------------------------------------------------------------

/// Fetches observations from a single station endpoint.
pub struct NwsClient {
    client: reqwest::Client,
    station_url: String,
    user_agent: String,
}

impl NwsClient {
    /// Create a client for [`STATION_URL`] with the fixed request timeout.
    pub fn new(user_agent: impl Into<String>) -> Result<Self, NwsError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(client, STATION_URL, user_agent))
    }

    /// Create a client reusing an existing [`reqwest::Client`] against an
    /// arbitrary station URL.
    pub fn with_client(
        client: reqwest::Client,
        station_url: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            client,
            station_url: station_url.into(),
            user_agent: user_agent.into(),
        }
    }

    /// `GET` the station URL and return the raw response body.
    pub async fn fetch_latest_body(&self) -> Result<String, NwsError> {
        let response = self
            .client
            .get(&self.station_url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(NwsError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl ObservationSource for NwsClient {
    async fn latest(&self) -> Result<ObservationResult, AlertError> {
        tracing::debug!(url = %self.station_url, "Fetching latest observation");
        let body = self.fetch_latest_body().await?;
        parse_observation(&body)
    }
}
