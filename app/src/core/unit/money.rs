use std::{fmt::Display, ops::Add};

use derive_more::derive::AsRef;
use serde::{Deserialize, Serialize};

use crate::core::format::format_currency;

/// Amount in the household's currency (R$).
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, AsRef, Serialize, Deserialize)]
pub struct Money(pub f64);

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_currency(self.0))
    }
}

impl From<Money> for f64 {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

/// Tariff. Zero and negative values are accepted as plain arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsRef, Serialize, Deserialize)]
pub struct CostPerKwh(pub f64);

impl Display for CostPerKwh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/kWh", format_currency(self.0))
    }
}

impl From<f64> for CostPerKwh {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<CostPerKwh> for f64 {
    fn from(value: CostPerKwh) -> Self {
        value.0
    }
}
