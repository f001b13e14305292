mod kwh;
mod money;
mod watt;

pub use kwh::KiloWattHours;
pub use money::{CostPerKwh, Money};
pub use watt::Watt;

impl std::ops::Mul<f64> for Watt {
    type Output = KiloWattHours;

    /// Energy drawn when running at this power for the given number of hours.
    fn mul(self, hours: f64) -> Self::Output {
        KiloWattHours(self.0 * hours / 1000.0)
    }
}

impl std::ops::Mul<CostPerKwh> for KiloWattHours {
    type Output = Money;

    fn mul(self, rhs: CostPerKwh) -> Self::Output {
        Money(self.0 * rhs.0)
    }
}
