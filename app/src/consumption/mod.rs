mod report;

use std::ops::Add;

use serde::Serialize;

use crate::core::unit::{CostPerKwh, KiloWattHours, Money, Watt};
use crate::household::{Appliance, Room};

pub use report::{ConsumerShare, CostTotals, RoomShare, cost_totals, room_breakdown, top_consumers};

/// Average month length including leap years. Only used for consumption
/// projections, the savings estimate uses a flat 30-day month.
pub const AVG_DAYS_IN_MONTH: f64 = 30.44;
pub const DAYS_IN_YEAR: f64 = 365.25;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ConsumptionTotals {
    #[serde(rename = "dailyKWh")]
    pub daily: KiloWattHours,
    #[serde(rename = "monthlyKWh")]
    pub monthly: KiloWattHours,
    #[serde(rename = "yearlyKWh")]
    pub yearly: KiloWattHours,
}

impl Add for ConsumptionTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            daily: self.daily + rhs.daily,
            monthly: self.monthly + rhs.monthly,
            yearly: self.yearly + rhs.yearly,
        }
    }
}

impl std::iter::Sum for ConsumptionTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ConsumptionTotals::default(), Add::add)
    }
}

/// Energy use of one appliance. No validation and no rounding: any input
/// yields the plain arithmetic result.
pub fn appliance_consumption(power: Watt, daily_usage_hours: f64) -> ConsumptionTotals {
    let daily = power * daily_usage_hours;

    ConsumptionTotals {
        daily,
        monthly: daily * AVG_DAYS_IN_MONTH,
        yearly: daily * DAYS_IN_YEAR,
    }
}

pub fn room_consumption(appliances: &[Appliance]) -> ConsumptionTotals {
    appliances
        .iter()
        .map(|a| appliance_consumption(a.power, a.daily_usage_hours))
        .sum()
}

pub fn total_consumption(rooms: &[Room]) -> ConsumptionTotals {
    rooms.iter().map(|r| room_consumption(&r.appliances)).sum()
}

pub fn cost(kwh: KiloWattHours, cost_per_kwh: CostPerKwh) -> Money {
    kwh * cost_per_kwh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::household::{ApplianceId, RoomId};

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: KiloWattHours, expected: f64) {
        assert!(
            (actual.0 - expected).abs() < EPSILON,
            "expected {} but got {}",
            expected,
            actual.0
        );
    }

    fn appliance(id: &str, power: f64, hours: f64) -> Appliance {
        Appliance {
            id: ApplianceId::new(id),
            name: id.to_owned(),
            power: Watt(power),
            daily_usage_hours: hours,
        }
    }

    fn room(id: &str, appliances: Vec<Appliance>) -> Room {
        Room {
            id: RoomId::new(id),
            name: id.to_owned(),
            appliances,
        }
    }

    #[test]
    fn air_conditioner_example() {
        let totals = appliance_consumption(Watt(1500.0), 8.0);

        assert_close(totals.daily, 12.0);
        assert_close(totals.monthly, 365.28);
        assert_close(totals.yearly, 4383.0);
    }

    #[test]
    fn horizons_derive_from_daily() {
        for (power, hours) in [(60.0, 6.5), (2200.0, 0.25), (9.0, 24.0), (0.0, 12.0)] {
            let totals = appliance_consumption(Watt(power), hours);

            assert_close(totals.monthly, totals.daily.0 * 30.44);
            assert_close(totals.yearly, totals.daily.0 * 365.25);
        }
    }

    #[test]
    fn linear_in_power_and_hours() {
        let base = appliance_consumption(Watt(100.0), 3.0);
        let double_power = appliance_consumption(Watt(200.0), 3.0);
        let triple_hours = appliance_consumption(Watt(100.0), 9.0);

        assert_close(double_power.daily, base.daily.0 * 2.0);
        assert_close(triple_hours.yearly, base.yearly.0 * 3.0);
    }

    #[test]
    fn out_of_range_input_is_computed_not_rejected() {
        let totals = appliance_consumption(Watt(-100.0), 30.0);

        assert_close(totals.daily, -3.0);
    }

    #[test]
    fn empty_collections_are_zero() {
        assert_eq!(room_consumption(&[]), ConsumptionTotals::default());
        assert_eq!(total_consumption(&[]), ConsumptionTotals::default());
        assert_eq!(total_consumption(&[room("r", vec![])]), ConsumptionTotals::default());
    }

    #[test]
    fn room_is_sum_of_appliances() {
        let appliances = vec![appliance("tv", 150.0, 5.0), appliance("fridge", 100.0, 24.0)];

        let totals = room_consumption(&appliances);

        assert_close(totals.daily, 0.75 + 2.4);
        assert_close(totals.monthly, (0.75 + 2.4) * 30.44);
    }

    #[test]
    fn sum_does_not_depend_on_order() {
        let a = appliance("a", 150.0, 5.0);
        let b = appliance("b", 1500.0, 8.0);
        let c = appliance("c", 1200.0, 0.5);

        let forward = total_consumption(&[room("1", vec![a.clone(), b.clone()]), room("2", vec![c.clone()])]);
        let backward = total_consumption(&[room("2", vec![c]), room("1", vec![b, a])]);

        assert_close(forward.daily, backward.daily.0);
        assert_close(forward.monthly, backward.monthly.0);
        assert_close(forward.yearly, backward.yearly.0);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let rooms = crate::household::Household::default().rooms;

        let first = total_consumption(&rooms);
        let second = total_consumption(&rooms);

        assert_eq!(first.daily.0.to_bits(), second.daily.0.to_bits());
        assert_eq!(first.monthly.0.to_bits(), second.monthly.0.to_bits());
        assert_eq!(first.yearly.0.to_bits(), second.yearly.0.to_bits());
    }

    #[test]
    fn cost_is_plain_product() {
        assert_eq!(cost(KiloWattHours(12.0), CostPerKwh(0.75)), Money(9.0));
        assert_eq!(cost(KiloWattHours(12.0), CostPerKwh(0.0)), Money(0.0));
        assert_eq!(cost(KiloWattHours(10.0), CostPerKwh(-0.5)), Money(-5.0));
    }
}
