//! Notification channels backed by AWS.
//!
//! - [`SesEmailChannel`] sends plain-text alert emails through SES.
//! - [`SnsSmsChannel`] publishes alert text messages through SNS.
//!
//! Both implement [`weather_alert_core::NotificationChannel`];
//! [`build_channel`] picks one from an [`AlertConfig`].

pub mod channel;

use weather_alert_core::{AlertConfig, ChannelConfig, NotificationChannel};

pub use channel::email::SesEmailChannel;
pub use channel::sms::SnsSmsChannel;

/// Errors raised while talking to a notification provider.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The SDK call failed (credentials, throttling, rejected address, ...).
    #[error("{provider} {operation} failed: {detail}")]
    Provider {
        provider: &'static str,
        operation: &'static str,
        detail: String,
    },

    /// The request could not be assembled for the provider.
    #[error("{provider} request build error: {detail}")]
    Build {
        provider: &'static str,
        detail: String,
    },

    /// The provider accepted the call but returned no message identifier.
    #[error("{provider} returned no message id")]
    MissingMessageId { provider: &'static str },
}

impl From<DeliveryError> for weather_alert_core::AlertError {
    fn from(err: DeliveryError) -> Self {
        weather_alert_core::AlertError::ProviderCall(err.to_string())
    }
}

/// Load the AWS SDK configuration for `region`.
pub async fn load_sdk_config(region: &str) -> aws_config::SdkConfig {
    use aws_config::Region;

    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await
}

/// Build the channel selected by `config`, loading AWS config for its region.
pub async fn build_channel(config: &AlertConfig) -> Box<dyn NotificationChannel> {
    let sdk_config = load_sdk_config(&config.region).await;
    tracing::debug!(region = %config.region, channel = %config.channel.kind(), "Building notification channel");

    match &config.channel {
        ChannelConfig::Email { sender, .. } => {
            Box::new(SesEmailChannel::new(&sdk_config, sender.clone()))
        }
        ChannelConfig::Sms { .. } => Box::new(SnsSmsChannel::new(&sdk_config)),
    }
}
