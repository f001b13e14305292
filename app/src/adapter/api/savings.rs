use actix_web::{
    HttpResponse,
    web::{self, Json, Path},
};
use serde::Serialize;

use super::{ApiError, ApiResponse};
use crate::household::{ApplianceDraft, ApplianceId, HouseholdError, HouseholdService, HouseholdStore, ValidationError};
use crate::savings::{SavingsAdvisor, SavingsEstimate, SavingsRequest, SavingsSuggestion, SuggestionGenerator, estimate_savings};

pub fn routes<S, G>() -> actix_web::Scope
where
    S: HouseholdStore + 'static,
    G: SuggestionGenerator + 'static,
{
    web::scope("/savings")
        .route("", web::post().to(advise::<G>))
        .route("", web::get().to(advise_household::<S, G>))
        .route("/appliances/{appliance_id}", web::get().to(advise_appliance::<S, G>))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApplianceAdviceDTO {
    appliance_id: ApplianceId,
    estimate: SavingsEstimate,
    #[serde(flatten)]
    outcome: AdviceOutcome,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum AdviceOutcome {
    Ok(SavingsSuggestion),
    Failed { error: &'static str },
}

fn validate(request: &SavingsRequest) -> Result<(), ApiError> {
    ApplianceDraft {
        name: request.appliance_name.clone(),
        power: request.power.0,
        daily_usage_hours: request.daily_usage_hours,
    }
    .validate()
    .map_err(HouseholdError::from)?;

    if !request.cost_per_kwh.0.is_finite() {
        return Err(HouseholdError::from(ValidationError::NotANumber { field: "costPerKWh" }).into());
    }

    Ok(())
}

async fn advise<G: SuggestionGenerator>(
    advisor: web::Data<SavingsAdvisor<G>>,
    Json(request): Json<SavingsRequest>,
) -> ApiResponse {
    validate(&request)?;

    let suggestion = advisor.advise(&request).await?;
    Ok(HttpResponse::Ok().json(suggestion))
}

async fn advise_appliance<S: HouseholdStore, G: SuggestionGenerator>(
    service: web::Data<HouseholdService<S>>,
    advisor: web::Data<SavingsAdvisor<G>>,
    path: Path<String>,
) -> ApiResponse {
    let household = service.snapshot().await;
    let appliance_id = ApplianceId::new(path.into_inner());

    let appliance = household.appliance(&appliance_id).ok_or_else(|| ApiError::NotFound {
        what: format!("Appliance {}", appliance_id),
    })?;

    let request = SavingsRequest::for_appliance(appliance, household.cost_per_kwh);
    let suggestion = advisor.advise(&request).await?;

    Ok(HttpResponse::Ok().json(ApplianceAdviceDTO {
        appliance_id,
        estimate: estimate_savings(&request),
        outcome: AdviceOutcome::Ok(suggestion),
    }))
}

async fn advise_household<S: HouseholdStore, G: SuggestionGenerator>(
    service: web::Data<HouseholdService<S>>,
    advisor: web::Data<SavingsAdvisor<G>>,
) -> HttpResponse {
    let household = service.snapshot().await;

    let advice = advisor.advise_all(&household).await;

    let dtos: Vec<ApplianceAdviceDTO> = advice
        .into_iter()
        .filter_map(|advice| {
            let appliance = household.appliance(&advice.appliance_id)?;
            let estimate = estimate_savings(&SavingsRequest::for_appliance(appliance, household.cost_per_kwh));

            let outcome = match advice.result {
                Ok(suggestion) => AdviceOutcome::Ok(suggestion),
                Err(_) => AdviceOutcome::Failed {
                    error: "GENERATION_FAILED",
                },
            };

            Some(ApplianceAdviceDTO {
                appliance_id: advice.appliance_id,
                estimate,
                outcome,
            })
        })
        .collect();

    HttpResponse::Ok().json(dtos)
}
