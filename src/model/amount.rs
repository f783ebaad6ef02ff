//! Amount type for handling non-negative currency values.
//!
//! This module provides the `Amount` type which wraps `Decimal` so that rules such as "the total
//! is a round dollar amount" are evaluated exactly, without binary floating-point error.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents a non-negative currency amount such as `"6.49"` or `"10"`.
///
/// Only plain decimal notation is accepted: ASCII digits with an optional single `.` that has at
/// least one digit on each side. Signs, exponents, dollar signs, thousands separators and
/// surrounding whitespace are all rejected. The whole part may have at most
/// [`Amount::MAX_WHOLE_DIGITS`] significant digits.
///
/// # Examples
///
/// ```
/// # use receipt_processor::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("35.35").unwrap();
/// assert_eq!(amount.to_string(), "35.35");
/// assert!(!amount.is_whole());
///
/// assert!(Amount::from_str("-1.00").is_err());
/// assert!(Amount::from_str("$5.00").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// The number of significant digits allowed before the point. Every amount is below one
    /// trillion.
    pub const MAX_WHOLE_DIGITS: usize = 12;

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is a whole number of currency units, e.g. `10.00`.
    pub fn is_whole(&self) -> bool {
        self.0.fract().is_zero()
    }

    /// Returns true if the amount is an exact multiple of `step`. A zero `step` is never a
    /// divisor.
    pub fn is_multiple_of(&self, step: Decimal) -> bool {
        if step.is_zero() {
            return false;
        }
        (self.0 % step).is_zero()
    }
}

/// An error that can occur when parsing strings into `Amount` values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("the amount is empty")]
    Empty,

    #[error("'{0}' is not a plain decimal number like 12.34")]
    Format(String),

    #[error(
        "'{0}' is too large, at most {max} digits are allowed before the point",
        max = Amount::MAX_WHOLE_DIGITS
    )]
    TooLarge(String),

    #[error("'{value}' could not be represented as a decimal: {message}")]
    Range { value: String, message: String },
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AmountError::Empty);
        }

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (s, None),
        };
        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !fraction.map_or(true, all_digits) {
            return Err(AmountError::Format(s.to_string()));
        }
        if whole.trim_start_matches('0').len() > Self::MAX_WHOLE_DIGITS {
            return Err(AmountError::TooLarge(s.to_string()));
        }

        // Only digits and a single '.' remain, so this can only fail on overflow.
        let value = Decimal::from_str(s).map_err(|e| AmountError::Range {
            value: s.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Amount::from_str(&s).map_err(serde::de::Error::custom)
    }
}
