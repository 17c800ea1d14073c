//! Fahrenheit alert threshold.

use crate::error::AlertError;

/// Threshold used when `TEMP_THRESHOLD_F` is not configured.
pub const DEFAULT_THRESHOLD_F: f64 = 50.0;

/// Fahrenheit value at or above which an alert is sent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(fahrenheit: f64) -> Self {
        Self(fahrenheit)
    }

    pub fn fahrenheit(self) -> f64 {
        self.0
    }

    /// Inclusive comparison: a reading equal to the threshold alerts.
    pub fn is_met_by(self, temp_f: f64) -> bool {
        temp_f >= self.0
    }

    /// Parse a configured threshold such as `"50"` or `"72.5"`.
    ///
    /// Non-finite values are rejected so the comparison stays meaningful.
    pub fn parse(raw: &str) -> Result<Self, AlertError> {
        let value: f64 = raw.trim().parse().map_err(|_| {
            AlertError::MissingConfiguration(format!(
                "TEMP_THRESHOLD_F must be a number, got {raw:?}"
            ))
        })?;
        if !value.is_finite() {
            return Err(AlertError::MissingConfiguration(format!(
                "TEMP_THRESHOLD_F must be finite, got {raw:?}"
            )));
        }
        Ok(Self(value))
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD_F)
    }
}
