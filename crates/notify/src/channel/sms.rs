//! SMS alert delivery via AWS SNS direct publish.

use async_trait::async_trait;

use weather_alert_core::{AlertError, ChannelKind, NotificationChannel, NotificationRequest};

use super::describe_sdk_error;
use crate::DeliveryError;

const PROVIDER: &str = "SNS";

/// Publishes alert text messages to a phone number through SNS.
pub struct SnsSmsChannel {
    client: aws_sdk_sns::Client,
}

impl SnsSmsChannel {
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self::with_client(aws_sdk_sns::Client::new(sdk_config))
    }

    pub fn with_client(client: aws_sdk_sns::Client) -> Self {
        Self { client }
    }

    /// Publish one message and return the SNS message id.
    pub async fn deliver(&self, request: &NotificationRequest) -> Result<String, DeliveryError> {
        let output = self
            .client
            .publish()
            .phone_number(&request.recipient)
            .message(&request.body)
            .send()
            .await
            .map_err(|e| DeliveryError::Provider {
                provider: PROVIDER,
                operation: "Publish",
                detail: describe_sdk_error(&e),
            })?;

        let message_id = output
            .message_id()
            .filter(|id| !id.is_empty())
            .ok_or(DeliveryError::MissingMessageId { provider: PROVIDER })?
            .to_string();

        tracing::info!(message_id = %message_id, "Alert SMS published");
        Ok(message_id)
    }
}

#[async_trait]
impl NotificationChannel for SnsSmsChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Sms
    }

    async fn send(&self, request: &NotificationRequest) -> Result<String, AlertError> {
        Ok(self.deliver(request).await?)
    }
}
