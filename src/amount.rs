//! Amounts

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rust_decimal::Decimal;
use thiserror::Error;

/// Number of fractional digits every wire amount must carry.
const SCALE: u32 = 2;

/// Errors raised while parsing a currency amount.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    /// The value is not a plain `digits.dd` decimal.
    #[error("expected a non-negative amount with two decimal places")]
    Format,

    /// The value does not fit in the supported range.
    #[error("amount is out of range")]
    OutOfRange,
}

/// A non-negative currency amount held as integer cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    /// Zero cents.
    pub const ZERO: Self = Self(0);

    /// Create an amount from a number of cents.
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Number of cents in this amount.
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Whether the amount has no fractional cents.
    pub const fn is_whole_dollars(self) -> bool {
        self.0 % 100 == 0
    }

    /// Whether the amount is an exact multiple of a quarter.
    pub const fn is_multiple_of_quarter(self) -> bool {
        self.0 % 25 == 0
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let Some((whole, fraction)) = value.split_once('.') else {
            return Err(AmountError::Format);
        };

        if !is_digits(whole) || !is_digits(fraction) {
            return Err(AmountError::Format);
        }

        // Shape is already known to be `digits.digits`, so a failure here is overflow.
        let decimal =
            Decimal::from_str_exact(value).map_err(|_source| AmountError::OutOfRange)?;

        if decimal.scale() != SCALE {
            return Err(AmountError::Format);
        }

        // With a fixed scale of two the mantissa is the amount in cents.
        u64::try_from(decimal.mantissa())
            .map(Self)
            .map_err(|_source| AmountError::OutOfRange)
    }
}

fn is_digits(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
