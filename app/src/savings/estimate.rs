use serde::Serialize;

use super::SavingsRequest;
use crate::core::unit::{KiloWattHours, Money};

/// Flat 30-day month of the savings estimate. Not the same as
/// `consumption::AVG_DAYS_IN_MONTH`.
pub const SAVINGS_DAYS_PER_MONTH: f64 = 30.0;

/// Below this monthly amount a suggestion is not worth showing.
pub const MIN_MONTHLY_SAVINGS: Money = Money(1.0);

/// With one hour a day or less there is no hour left to cut.
pub const MIN_DAILY_USAGE_HOURS: f64 = 1.0;

pub const HOURS_CUT_PER_DAY: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SavingsEstimate {
    #[serde(rename = "dailySavingsKWh")]
    pub daily_savings: KiloWattHours,
    #[serde(rename = "monthlySavingsKWh")]
    pub monthly_savings: KiloWattHours,
    #[serde(rename = "monthlySavingsCost")]
    pub monthly_savings_cost: Money,
    pub applicable: bool,
}

/// Savings from running the appliance one hour less per day. The amount saved
/// does not depend on the current usage, usage only gates applicability.
pub fn estimate_savings(request: &SavingsRequest) -> SavingsEstimate {
    let daily_savings = request.power * HOURS_CUT_PER_DAY;
    let monthly_savings = daily_savings * SAVINGS_DAYS_PER_MONTH;
    let monthly_savings_cost = monthly_savings * request.cost_per_kwh;

    //written as the positive condition so NaN input is never applicable
    let applicable =
        request.daily_usage_hours > MIN_DAILY_USAGE_HOURS && monthly_savings_cost.0 >= MIN_MONTHLY_SAVINGS.0;

    SavingsEstimate {
        daily_savings,
        monthly_savings,
        monthly_savings_cost,
        applicable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::unit::{CostPerKwh, Watt};

    fn request(power: f64, hours: f64, tariff: f64) -> SavingsRequest {
        SavingsRequest {
            appliance_name: "Aparelho".to_owned(),
            power: Watt(power),
            daily_usage_hours: hours,
            cost_per_kwh: CostPerKwh(tariff),
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {} but got {}", expected, actual);
    }

    #[test]
    fn refrigerator_is_applicable() {
        let estimate = estimate_savings(&request(100.0, 24.0, 0.75));

        assert_close(estimate.daily_savings.0, 0.1);
        assert_close(estimate.monthly_savings.0, 3.0);
        assert_close(estimate.monthly_savings_cost.0, 2.25);
        assert!(estimate.applicable);
    }

    #[test]
    fn short_usage_is_not_applicable() {
        let estimate = estimate_savings(&request(1200.0, 0.5, 0.75));

        assert!(!estimate.applicable);
    }

    #[test]
    fn exactly_one_hour_is_not_applicable() {
        assert!(!estimate_savings(&request(5000.0, 1.0, 0.75)).applicable);
    }

    #[test]
    fn small_saving_is_not_applicable() {
        let estimate = estimate_savings(&request(10.0, 5.0, 0.75));

        assert_close(estimate.monthly_savings_cost.0, 0.225);
        assert!(!estimate.applicable);
    }

    #[test]
    fn saving_of_exactly_one_real_is_applicable() {
        let estimate = estimate_savings(&request(1000.0, 3.0, 1.0 / 30.0));

        assert_eq!(estimate.monthly_savings_cost, Money(1.0));
        assert!(estimate.applicable);
    }

    #[test]
    fn saving_does_not_depend_on_usage() {
        let short = estimate_savings(&request(800.0, 2.0, 0.9));
        let long = estimate_savings(&request(800.0, 20.0, 0.9));

        assert_eq!(short.monthly_savings, long.monthly_savings);
    }

    #[test]
    fn negative_tariff_is_not_applicable() {
        assert!(!estimate_savings(&request(2000.0, 10.0, -0.75)).applicable);
    }

    #[test]
    fn nan_usage_is_not_applicable() {
        assert!(!estimate_savings(&request(2000.0, f64::NAN, 0.75)).applicable);
    }
}
