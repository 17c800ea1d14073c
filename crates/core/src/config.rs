//! Invocation configuration.
//!
//! [`AlertConfig`] is built once at the start of every invocation and passed
//! down explicitly. Values come from environment variables:
//!
//! | Variable           | Required              | Default                            |
//! |--------------------|-----------------------|------------------------------------|
//! | `USER_AGENT`       | no                    | `weather-alert-lambda@example.com` |
//! | `TEMP_THRESHOLD_F` | no                    | `50`                               |
//! | `ALERT_CHANNEL`    | no                    | `email` (`email` or `sms`)         |
//! | `AWS_REGION`       | yes                   | —                                  |
//! | `EMAIL_SENDER`     | in `email` mode       | —                                  |
//! | `EMAIL_RECIPIENT`  | in `email` mode       | —                                  |
//! | `PHONE_NUMBER`     | in `sms` mode         | —                                  |
//!
//! Empty values are treated as unset.

use crate::error::AlertError;
use crate::notification::{ChannelKind, Destination};
use crate::threshold::Threshold;

/// `User-Agent` sent to the weather provider when `USER_AGENT` is not set.
pub const DEFAULT_USER_AGENT: &str = "weather-alert-lambda@example.com";

/// Channel-specific settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelConfig {
    Email { sender: String, recipient: String },
    Sms { phone_number: String },
}

impl ChannelConfig {
    pub fn kind(&self) -> ChannelKind {
        match self {
            Self::Email { .. } => ChannelKind::Email,
            Self::Sms { .. } => ChannelKind::Sms,
        }
    }

    pub fn destination(&self) -> Destination {
        match self {
            Self::Email { recipient, .. } => Destination::Email {
                recipient: recipient.clone(),
            },
            Self::Sms { phone_number } => Destination::Sms {
                phone_number: phone_number.clone(),
            },
        }
    }
}

/// Everything one invocation needs to know.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertConfig {
    pub user_agent: String,
    pub threshold: Threshold,
    /// AWS region hosting the notification provider.
    pub region: String,
    pub channel: ChannelConfig,
}

impl AlertConfig {
    /// Load configuration through a key lookup, normally
    /// `|key| std::env::var(key).ok()`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AlertError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| {
            get(key).ok_or_else(|| AlertError::MissingConfiguration(format!("{key} is not set")))
        };

        let user_agent = get("USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let threshold = match get("TEMP_THRESHOLD_F") {
            Some(raw) => Threshold::parse(&raw)?,
            None => Threshold::default(),
        };

        let channel = match get("ALERT_CHANNEL")
            .map(|v| v.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("email") => ChannelConfig::Email {
                sender: require("EMAIL_SENDER")?,
                recipient: require("EMAIL_RECIPIENT")?,
            },
            Some("sms") => ChannelConfig::Sms {
                phone_number: require("PHONE_NUMBER")?,
            },
            Some(other) => {
                return Err(AlertError::MissingConfiguration(format!(
                    "ALERT_CHANNEL must be \"email\" or \"sms\", got {other:?}"
                )))
            }
        };

        Ok(Self {
            user_agent,
            threshold,
            region: require("AWS_REGION")?,
            channel,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<AlertConfig, AlertError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AlertConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn email_mode_with_defaults() {
        let config = load(&[
            ("AWS_REGION", "us-west-1"),
            ("EMAIL_SENDER", "alerts@example.com"),
            ("EMAIL_RECIPIENT", "me@example.com"),
        ])
        .unwrap();

        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.threshold, Threshold::default());
        assert_eq!(config.region, "us-west-1");
        assert_eq!(
            config.channel,
            ChannelConfig::Email {
                sender: "alerts@example.com".to_string(),
                recipient: "me@example.com".to_string(),
            }
        );
        assert_eq!(config.channel.kind(), ChannelKind::Email);
    }

    #[test]
    fn sms_mode_with_overrides() {
        let config = load(&[
            ("ALERT_CHANNEL", "SMS"),
            ("AWS_REGION", "us-east-1"),
            ("PHONE_NUMBER", "+18055550100"),
            ("USER_AGENT", "(myweatherapp.com, contact@myweatherapp.com)"),
            ("TEMP_THRESHOLD_F", "-100"),
        ])
        .unwrap();

        assert_eq!(config.threshold.fahrenheit(), -100.0);
        assert_eq!(
            config.user_agent,
            "(myweatherapp.com, contact@myweatherapp.com)"
        );
        assert_eq!(
            config.channel.destination(),
            Destination::Sms {
                phone_number: "+18055550100".to_string()
            }
        );
    }

    #[test]
    fn missing_region_is_reported_by_name() {
        let err = load(&[
            ("EMAIL_SENDER", "alerts@example.com"),
            ("EMAIL_RECIPIENT", "me@example.com"),
        ])
        .unwrap_err();
        assert_matches!(err, AlertError::MissingConfiguration(ref msg) if msg.contains("AWS_REGION"));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let err = load(&[
            ("AWS_REGION", "us-west-1"),
            ("EMAIL_SENDER", "  "),
            ("EMAIL_RECIPIENT", "me@example.com"),
        ])
        .unwrap_err();
        assert_matches!(err, AlertError::MissingConfiguration(ref msg) if msg.contains("EMAIL_SENDER"));

        let config = load(&[
            ("AWS_REGION", "us-west-1"),
            ("PHONE_NUMBER", "+1"),
            ("ALERT_CHANNEL", "sms"),
            ("TEMP_THRESHOLD_F", ""),
        ])
        .unwrap();
        assert_eq!(config.threshold, Threshold::default());
    }

    #[test]
    fn sms_mode_requires_phone_number() {
        let err = load(&[("ALERT_CHANNEL", "sms"), ("AWS_REGION", "us-west-1")]).unwrap_err();
        assert_matches!(err, AlertError::MissingConfiguration(ref msg) if msg.contains("PHONE_NUMBER"));
    }

    #[test]
    fn rejects_unknown_channel_and_bad_threshold() {
        let err = load(&[("ALERT_CHANNEL", "pager"), ("AWS_REGION", "us-west-1")]).unwrap_err();
        assert_matches!(err, AlertError::MissingConfiguration(_));

        let err = load(&[
            ("TEMP_THRESHOLD_F", "hot"),
            ("AWS_REGION", "us-west-1"),
            ("EMAIL_SENDER", "a@b.c"),
            ("EMAIL_RECIPIENT", "d@e.f"),
        ])
        .unwrap_err();
        assert_matches!(err, AlertError::MissingConfiguration(ref msg) if msg.contains("TEMP_THRESHOLD_F"));
    }
}
