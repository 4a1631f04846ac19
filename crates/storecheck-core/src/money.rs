//! Exact two-decimal currency amounts.
//!
//! Every arithmetic operation re-rounds to cent precision so that comparisons
//! and the formatted output can never disagree. Formatting to `$D.DD` happens
//! only at the display boundary; all intermediate values stay decimal.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::CoreError;

/// A monetary amount held at exactly two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(Decimal);

impl Money {
    /// Builds a `Money` from an arbitrary decimal, rounding to two decimal
    /// places with midpoint-away-from-zero.
    #[must_use]
    pub fn from_decimal(amount: Decimal) -> Self {
        Self(amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Parses an amount from text. A leading `$` is accepted and ignored, as
    /// is a trailing bare decimal point (`"$25."` parses as `$25.00`).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidAmount`] when the remaining text is not a
    /// decimal number.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let trimmed = input.trim();
        let bare = trimmed.strip_prefix('$').unwrap_or(trimmed);
        let bare = bare.strip_suffix('.').unwrap_or(bare);
        Decimal::from_str(bare)
            .map(Self::from_decimal)
            .map_err(|_| CoreError::InvalidAmount {
                input: input.to_owned(),
            })
    }

    /// The underlying decimal amount, already rounded to two places.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiplies by an integer quantity, re-rounding to two decimal places.
    #[must_use]
    pub fn mul_quantity(&self, quantity: u32) -> Self {
        Self::from_decimal(self.0 * Decimal::from(quantity))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::from_decimal(self.0 + rhs.0)
    }
}

impl fmt::Display for Money {
    /// Renders exactly `$D.DD`, matching the storefront's own price strings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl FromStr for Money {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MoneyVisitor;

        impl Visitor<'_> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a monetary amount such as \"$9.99\" or \"9.99\"")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Money, E> {
                Money::parse(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(MoneyVisitor)
    }
}
