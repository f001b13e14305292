mod advisor;
mod estimate;

use derive_more::derive::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::core::unit::{CostPerKwh, Watt};
use crate::household::Appliance;

pub use advisor::SavingsAdvisor;
pub use estimate::{MIN_MONTHLY_SAVINGS, SAVINGS_DAYS_PER_MONTH, SavingsEstimate, estimate_savings};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsRequest {
    pub appliance_name: String,
    pub power: Watt,
    pub daily_usage_hours: f64,
    #[serde(rename = "costPerKWh")]
    pub cost_per_kwh: CostPerKwh,
}

impl SavingsRequest {
    pub fn for_appliance(appliance: &Appliance, cost_per_kwh: CostPerKwh) -> Self {
        Self {
            appliance_name: appliance.name.clone(),
            power: appliance.power,
            daily_usage_hours: appliance.daily_usage_hours,
            cost_per_kwh,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsSuggestion {
    pub suggestion: String,
    pub applicable: bool,
}

impl SavingsSuggestion {
    pub fn not_applicable() -> Self {
        Self {
            suggestion: String::new(),
            applicable: false,
        }
    }
}

/// Phrases a savings suggestion. Implementations may call out to a remote
/// model; any failure is reported as an error, never as a made-up suggestion.
pub trait SuggestionGenerator {
    async fn generate(&self, request: &SavingsRequest) -> anyhow::Result<SavingsSuggestion>;
}

#[derive(Debug, Display, Error)]
pub enum AdvisorError {
    #[display("Failed to generate savings suggestion")]
    GenerationFailed(anyhow::Error),
}
