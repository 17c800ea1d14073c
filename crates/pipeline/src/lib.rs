//! The fetch → evaluate → notify cycle.
//!
//! [`AlertPipeline`] runs one invocation against any [`ObservationSource`]
//! and [`NotificationChannel`]. [`run_invocation`] is the outermost boundary
//! used by the worker binary: it also loads configuration and builds the
//! real clients, so that every failure, including a missing variable, ends
//! up as [`InvocationOutcome::Error`].

use weather_alert_core::{
    AlertConfig, AlertError, Destination, InvocationContext, InvocationOutcome,
    NotificationChannel, ObservationSource, Threshold,
};
use weather_alert_nws::NwsClient;

/// One configured alert cycle.
pub struct AlertPipeline<S, C> {
    source: S,
    channel: C,
    threshold: Threshold,
    destination: Destination,
}

impl<S, C> AlertPipeline<S, C>
where
    S: ObservationSource,
    C: NotificationChannel,
{
    /// Fails when `destination` is not something `channel` can deliver to,
    /// e.g. a phone number handed to the email channel.
    pub fn new(
        source: S,
        channel: C,
        threshold: Threshold,
        destination: Destination,
    ) -> Result<Self, AlertError> {
        if destination.kind() != channel.kind() {
            return Err(AlertError::MissingConfiguration(format!(
                "{} destination cannot be served by the {} channel",
                destination.kind(),
                channel.kind()
            )));
        }
        Ok(Self {
            source,
            channel,
            threshold,
            destination,
        })
    }

    /// Execute one cycle. Never fails: errors become [`InvocationOutcome::Error`].
    pub async fn run(&self, _ctx: &InvocationContext) -> InvocationOutcome {
        match self.evaluate().await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "Alert invocation failed");
                e.into()
            }
        }
    }

    async fn evaluate(&self) -> Result<InvocationOutcome, AlertError> {
        let observation = self.source.latest().await?;

        let Some(temp_f) = observation.temperature_fahrenheit() else {
            tracing::info!("No temperature data in latest observation");
            return Ok(InvocationOutcome::NoData);
        };

        let threshold_f = self.threshold.fahrenheit();
        if !self.threshold.is_met_by(temp_f) {
            tracing::info!(temp_f, threshold_f, observed_at = ?observation.observed_at, "Below threshold, no alert");
            return Ok(InvocationOutcome::NoAlert { temp_f });
        }

        tracing::info!(temp_f, threshold_f, channel = %self.channel.kind(), "Threshold met, sending alert");
        let request = self.destination.compose(temp_f);
        let message_id = self.channel.send(&request).await?;

        Ok(InvocationOutcome::Sent {
            temp_f,
            message_id,
            channel: self.channel.kind(),
        })
    }
}

/// Run one full invocation with configuration from `lookup`.
pub async fn run_invocation<F>(ctx: &InvocationContext, lookup: F) -> InvocationOutcome
where
    F: Fn(&str) -> Option<String>,
{
    let config = match AlertConfig::from_lookup(lookup) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return e.into();
        }
    };

    let source = match NwsClient::new(config.user_agent.clone()) {
        Ok(client) => client,
        Err(e) => {
            let e = AlertError::from(e);
            tracing::error!(error = %e, "Could not build weather client");
            return e.into();
        }
    };

    let channel = weather_alert_notify::build_channel(&config).await;

    match AlertPipeline::new(
        source,
        channel,
        config.threshold,
        config.channel.destination(),
    ) {
        Ok(pipeline) => pipeline.run(ctx).await,
        Err(e) => {
            tracing::error!(error = %e, "Channel does not match destination");
            e.into()
        }
    }
}
