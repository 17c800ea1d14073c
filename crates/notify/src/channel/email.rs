//! Email alert delivery via AWS SES.
//!
//! [`SesEmailChannel`] calls SES `SendEmail` with a single recipient and a
//! plain-text body. The sender address must be verified in SES for the
//! configured region.

use async_trait::async_trait;
use aws_sdk_ses::types::{Body, Content, Destination, Message};

use weather_alert_core::{AlertError, ChannelKind, NotificationChannel, NotificationRequest};

use super::describe_sdk_error;
use crate::DeliveryError;

const PROVIDER: &str = "SES";

/// Sends alert emails through SES.
pub struct SesEmailChannel {
    client: aws_sdk_ses::Client,
    sender: String,
}

impl SesEmailChannel {
    pub fn new(sdk_config: &aws_config::SdkConfig, sender: String) -> Self {
        Self::with_client(aws_sdk_ses::Client::new(sdk_config), sender)
    }

    pub fn with_client(client: aws_sdk_ses::Client, sender: String) -> Self {
        Self { client, sender }
    }

    /// Assemble the SES message for a request.
    fn build_message(request: &NotificationRequest) -> Result<Message, DeliveryError> {
        let build_err = |e: aws_sdk_ses::error::BuildError| DeliveryError::Build {
            provider: PROVIDER,
            detail: e.to_string(),
        };

        let subject = Content::builder()
            .data(request.subject.clone().unwrap_or_default())
            .charset("UTF-8")
            .build()
            .map_err(build_err)?;
        let text = Content::builder()
            .data(request.body.clone())
            .charset("UTF-8")
            .build()
            .map_err(build_err)?;

        Ok(Message::builder()
            .subject(subject)
            .body(Body::builder().text(text).build())
            .build())
    }

    /// Send one email and return the SES message id.
    pub async fn deliver(&self, request: &NotificationRequest) -> Result<String, DeliveryError> {
        let message = Self::build_message(request)?;

        let output = self
            .client
            .send_email()
            .source(&self.sender)
            .destination(
                Destination::builder()
                    .to_addresses(&request.recipient)
                    .build(),
            )
            .message(message)
            .send()
            .await
            .map_err(|e| DeliveryError::Provider {
                provider: PROVIDER,
                operation: "SendEmail",
                detail: describe_sdk_error(&e),
            })?;

        let message_id = output.message_id().to_string();
        if message_id.is_empty() {
            return Err(DeliveryError::MissingMessageId { provider: PROVIDER });
        }

        tracing::info!(to = %request.recipient, message_id = %message_id, "Alert email sent");
        Ok(message_id)
    }
}

#[async_trait]
impl NotificationChannel for SesEmailChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Email
    }

    async fn send(&self, request: &NotificationRequest) -> Result<String, AlertError> {
        Ok(self.deliver(request).await?)
    }
}
