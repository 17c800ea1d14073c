//! The structured result of one invocation.

use serde::Serialize;

use crate::error::AlertError;
use crate::notification::ChannelKind;

/// Opaque trigger payload. The pipeline never inspects it.
#[derive(Debug, Clone, Default)]
pub struct InvocationContext {
    pub payload: serde_json::Value,
}

impl InvocationContext {
    /// Wrap a raw trigger payload, keeping it as a string when it is not JSON.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let payload = match raw {
            None => serde_json::Value::Null,
            Some(raw) => serde_json::from_str(raw)
                .unwrap_or_else(|_| serde_json::Value::String(raw.to_string())),
        };
        Self { payload }
    }
}

/// Terminal state of one fetch-evaluate-notify cycle.
///
/// Serializes with a `status` tag, e.g.
/// `{"status":"sent","temp_f":50.0,"message_id":"abc","channel":"email"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InvocationOutcome {
    /// The station reported no temperature.
    NoData,
    NoAlert {
        temp_f: f64,
    },
    Sent {
        temp_f: f64,
        message_id: String,
        channel: ChannelKind,
    },
    Error {
        message: String,
    },
}

impl From<AlertError> for InvocationOutcome {
    fn from(err: AlertError) -> Self {
        Self::Error {
            message: err.to_string(),
        }
    }
}
