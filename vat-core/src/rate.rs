use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string names a percentage outside the preset set.
#[derive(Debug, Error)]
#[error("invalid VAT rate '{0}': expected one of 0, 5, 10, 20")]
pub struct ParseRateError(String);

/// One of the four preset VAT percentages offered by the rate selector.
///
/// The arithmetic in [`crate::calculator`] accepts any integer percentage;
/// this type only constrains what the selector can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VatRate {
    #[default]
    Zero,
    Five,
    Ten,
    Twenty,
}

impl VatRate {
    pub fn all() -> &'static [VatRate] {
        &[VatRate::Zero, VatRate::Five, VatRate::Ten, VatRate::Twenty]
    }

    /// The integer percentage this preset stands for.
    pub fn percentage(&self) -> i32 {
        match self {
            VatRate::Zero => 0,
            VatRate::Five => 5,
            VatRate::Ten => 10,
            VatRate::Twenty => 20,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VatRate::Zero => "0%",
            VatRate::Five => "5%",
            VatRate::Ten => "10%",
            VatRate::Twenty => "20%",
        }
    }
}

impl fmt::Display for VatRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VatRate {
    type Err = ParseRateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(VatRate::Zero),
            "5" => Ok(VatRate::Five),
            "10" => Ok(VatRate::Ten),
            "20" => Ok(VatRate::Twenty),
            other => Err(ParseRateError(other.to_string())),
        }
    }
}
