//! Euro amounts stored as integer cents

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

lazy_static! {
    static ref MONEY_PATTERN: Regex =
        Regex::new(r"^\s*(-?)(\d+)([.,](\d{1,2}))?\s*$").expect("money pattern is valid");
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    #[error("invalid format: {0:?}")]
    InvalidFormat(String),
    #[error("amount out of range: {0:?}")]
    OutOfRange(String),
}

/// Signed amount in cents
///
/// Arithmetic saturates at the `i64` bounds instead of wrapping or panicking.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Parse amounts like `3074,48`, `-3074.48` or `1,9` (= 1,90)
    pub fn parse_euro(input: &str) -> Result<Self, ParseMoneyError> {
        let caps = MONEY_PATTERN
            .captures(input)
            .ok_or_else(|| ParseMoneyError::InvalidFormat(input.to_string()))?;

        let out_of_range = || ParseMoneyError::OutOfRange(input.to_string());

        let euros: i64 = caps[2].parse().map_err(|_| out_of_range())?;
        let cents = match caps.get(4) {
            Some(m) if m.as_str().len() == 1 => m.as_str().parse::<i64>().map_err(|_| out_of_range())? * 10,
            Some(m) => m.as_str().parse::<i64>().map_err(|_| out_of_range())?,
            None => 0,
        };

        let total = euros
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(out_of_range)?;

        Ok(if &caps[1] == "-" { Money(-total) } else { Money(total) })
    }
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse_euro(s)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{},{:02} €", prefix, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(self.0.saturating_neg())
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}
