//! Notification requests and the channel seam they are sent through.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::AlertError;

/// Subject line of alert emails.
pub const EMAIL_SUBJECT: &str = "Ventura Weather Alert";

/// Which delivery mechanism a channel uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Email,
    Sms,
}

impl std::fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Email => f.write_str("email"),
            Self::Sms => f.write_str("sms"),
        }
    }
}

/// Where an alert goes. The sender side (SES source address, region)
/// belongs to the channel, not the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Email { recipient: String },
    Sms { phone_number: String },
}

impl Destination {
    pub fn kind(&self) -> ChannelKind {
        match self {
            Self::Email { .. } => ChannelKind::Email,
            Self::Sms { .. } => ChannelKind::Sms,
        }
    }

    /// Build the alert for a Fahrenheit reading using the fixed templates.
    pub fn compose(&self, temp_f: f64) -> NotificationRequest {
        match self {
            Self::Email { recipient } => NotificationRequest {
                recipient: recipient.clone(),
                subject: Some(EMAIL_SUBJECT.to_string()),
                body: format!("Temperature is {temp_f:.1}°F in Ventura, CA."),
            },
            Self::Sms { phone_number } => NotificationRequest {
                recipient: phone_number.clone(),
                subject: None,
                body: format!("Temp Alert: {temp_f:.1}°F in Ventura, CA."),
            },
        }
    }
}

/// A single alert ready to hand to a [`NotificationChannel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    /// Email address or E.164 phone number.
    pub recipient: String,
    /// Only email alerts carry a subject.
    pub subject: Option<String>,
    pub body: String,
}

/// A provider capable of delivering a [`NotificationRequest`].
///
/// `send` returns the provider-assigned message identifier.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    fn kind(&self) -> ChannelKind;

    async fn send(&self, request: &NotificationRequest) -> Result<String, AlertError>;
}

#[async_trait]
impl<T: NotificationChannel + ?Sized> NotificationChannel for Box<T> {
    fn kind(&self) -> ChannelKind {
        (**self).kind()
    }

    async fn send(&self, request: &NotificationRequest) -> Result<String, AlertError> {
        (**self).send(request).await
    }
}
