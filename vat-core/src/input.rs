//! Parsing of raw amount text into a numeric base amount.
//!
//! The entry field hands over whatever the user typed; this module is the
//! single place that decides whether that text is a usable number. Invalid
//! text is rejected explicitly rather than deferred to an unguarded
//! conversion.

use thiserror::Error;

/// Error returned when amount text cannot be converted to a number.
#[derive(Debug, Error)]
pub enum AmountParseError {
    /// Input was empty or whitespace-only. Callers normally gate on
    /// [`crate::calculator::validate`] before parsing.
    #[error("empty amount")]
    Empty,

    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Text forms like "inf" or "NaN" parse as floats but are meaningless
    /// as prices.
    #[error("non-finite amount '{input}'")]
    NonFinite { input: String },
}

/// Normalizes input for parsing: trims whitespace and removes commas
/// (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses amount text into an `f64`.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`). Negative
/// amounts are accepted; rejection, if any, is a caller policy. Logs a
/// warning and returns an error when the input is non-empty but not a
/// finite number.
pub fn parse_amount(s: &str) -> Result<f64, AmountParseError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Err(AmountParseError::Empty);
    }
    let value: f64 = normalized.parse().map_err(|e| {
        tracing::warn!(input = %s, "invalid amount: {}", e);
        AmountParseError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })?;
    if !value.is_finite() {
        tracing::warn!(input = %s, "non-finite amount rejected");
        return Err(AmountParseError::NonFinite {
            input: s.to_string(),
        });
    }
    Ok(value)
}
