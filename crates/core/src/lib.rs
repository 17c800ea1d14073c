//! Domain types for the weather alert pipeline.
//!
//! Nothing in this crate performs I/O. The two external seams are the
//! [`ObservationSource`] and [`NotificationChannel`] traits, implemented by
//! the `weather-alert-nws` and `weather-alert-notify` crates.

pub mod config;
pub mod error;
pub mod notification;
pub mod observation;
pub mod outcome;
pub mod threshold;

pub use config::{AlertConfig, ChannelConfig};
pub use error::AlertError;
pub use notification::{ChannelKind, Destination, NotificationChannel, NotificationRequest};
pub use observation::{celsius_to_fahrenheit, ObservationResult, ObservationSource};
pub use outcome::{InvocationContext, InvocationOutcome};
pub use threshold::Threshold;
