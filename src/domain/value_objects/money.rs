//! Money value object - exact decimal currency amounts
//!
//! Monetary amounts use fixed-point decimal arithmetic so that aggregate
//! display never drifts from the cent. Amounts are non-negative; signed
//! results (a contract balance can go negative when payouts exceed the
//! total value) are plain `Decimal`.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors constructing a monetary amount
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// Not a parseable decimal number
    #[error("'{value}' is not a valid decimal amount")]
    Unparseable { value: String },

    /// Negative amounts are never valid for an entity field
    #[error("amount must not be negative (got {value})")]
    Negative { value: Decimal },
}

/// A non-negative decimal currency amount
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a monetary amount, rejecting negative values
    pub fn new(value: Decimal) -> Result<Self, MoneyError> {
        if value.is_sign_negative() {
            return Err(MoneyError::Negative { value });
        }
        Ok(Self(value))
    }

    /// The zero amount
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Inner decimal value
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Exact sum of two amounts (non-negative + non-negative stays non-negative)
    pub fn plus(&self, other: Money) -> Money {
        Money(self.0 + other.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim()).map_err(|_| MoneyError::Unparseable {
            value: s.to_string(),
        })?;
        Money::new(value)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R$ {:.2}", self.0)
    }
}

impl From<u64> for Money {
    fn from(value: u64) -> Self {
        Money(Decimal::from(value))
    }
}
