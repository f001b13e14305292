use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Mul},
};

use derive_more::derive::AsRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, AsRef, Serialize, Deserialize)]
pub struct KiloWattHours(pub f64);

impl Display for KiloWattHours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::core::format::format_kwh(self.0))
    }
}

impl From<KiloWattHours> for f64 {
    fn from(value: KiloWattHours) -> Self {
        value.0
    }
}

impl From<f64> for KiloWattHours {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for KiloWattHours {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        KiloWattHours(self.0 + rhs.0)
    }
}

impl Mul<f64> for KiloWattHours {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        KiloWattHours(self.0 * rhs)
    }
}

impl Sum for KiloWattHours {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(KiloWattHours::default(), Add::add)
    }
}
