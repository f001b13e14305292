use super::{AdvisorError, SavingsRequest, SavingsSuggestion, SuggestionGenerator, estimate_savings};
use crate::household::{ApplianceId, Household};

pub struct SavingsAdvisor<G> {
    generator: G,
}

#[derive(Debug)]
pub struct ApplianceAdvice {
    pub appliance_id: ApplianceId,
    pub result: Result<SavingsSuggestion, AdvisorError>,
}

impl<G: SuggestionGenerator> SavingsAdvisor<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Runs the applicability check first. The generator is only called for
    /// requests that pass it.
    #[tracing::instrument(skip_all, fields(appliance = %request.appliance_name))]
    pub async fn advise(&self, request: &SavingsRequest) -> Result<SavingsSuggestion, AdvisorError> {
        let estimate = estimate_savings(request);

        if !estimate.applicable {
            tracing::debug!(
                "No suggestion for {}: {} h/day, saving {} per month",
                request.appliance_name,
                request.daily_usage_hours,
                estimate.monthly_savings_cost
            );
            return Ok(SavingsSuggestion::not_applicable());
        }

        let generated = self.generator.generate(request).await.map_err(|e| {
            tracing::error!("Error generating savings suggestion for {}: {:?}", request.appliance_name, e);
            AdvisorError::GenerationFailed(e)
        })?;

        if !generated.applicable {
            return Ok(SavingsSuggestion::not_applicable());
        }

        if generated.suggestion.trim().is_empty() {
            tracing::error!("Generator returned an empty suggestion for {}", request.appliance_name);
            return Err(AdvisorError::GenerationFailed(anyhow::anyhow!(
                "applicable suggestion without text"
            )));
        }

        tracing::info!("Generated savings suggestion for {}", request.appliance_name);
        Ok(generated)
    }

    /// Advice for every appliance, in household order. The requests run
    /// concurrently and fail independently.
    pub async fn advise_all(&self, household: &Household) -> Vec<ApplianceAdvice> {
        let requests: Vec<(ApplianceId, SavingsRequest)> = household
            .appliances()
            .map(|a| (a.id.clone(), SavingsRequest::for_appliance(a, household.cost_per_kwh)))
            .collect();

        futures::future::join_all(requests.into_iter().map(|(appliance_id, request)| async move {
            let result = self.advise(&request).await;
            ApplianceAdvice { appliance_id, result }
        }))
        .await
    }
}
