mod consumption;
mod household;
mod savings;

use std::sync::Arc;

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use derive_more::derive::{Display, Error, From};

use crate::household::{HouseholdError, HouseholdService, HouseholdStore};
use crate::savings::{AdvisorError, SavingsAdvisor, SuggestionGenerator};

pub fn new_routes<S, G>(household: Arc<HouseholdService<S>>, advisor: Arc<SavingsAdvisor<G>>) -> actix_web::Scope
where
    S: HouseholdStore + 'static,
    G: SuggestionGenerator + 'static,
{
    web::scope("/api")
        .app_data(web::Data::from(household))
        .app_data(web::Data::from(advisor))
        .service(household::routes::<S>())
        .service(consumption::routes::<S>())
        .service(savings::routes::<S, G>())
}

type ApiResponse = Result<HttpResponse, ApiError>;

#[derive(Debug, Display, Error, From)]
enum ApiError {
    #[display("{_0}")]
    Household(HouseholdError),

    #[display("{_0}")]
    Advisor(AdvisorError),

    #[display("{what} not found")]
    #[from(ignore)]
    NotFound { what: String },
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::Household(HouseholdError::Invalid(_)) => "INVALID_INPUT",
            ApiError::Household(HouseholdError::RoomNotFound { .. })
            | ApiError::Household(HouseholdError::ApplianceNotFound { .. })
            | ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Household(HouseholdError::Persist(_)) => "PERSIST_FAILED",
            ApiError::Advisor(AdvisorError::GenerationFailed(_)) => "GENERATION_FAILED",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Household(HouseholdError::Invalid(_)) => StatusCode::BAD_REQUEST,
            ApiError::Household(HouseholdError::RoomNotFound { .. })
            | ApiError::Household(HouseholdError::ApplianceNotFound { .. })
            | ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Household(HouseholdError::Persist(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Advisor(AdvisorError::GenerationFailed(_)) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        tracing::warn!("ApiError: {:?}", self);

        let mut body = serde_json::json!({
            "error": self.code(),
            "message": self.to_string(),
        });

        if let ApiError::Household(HouseholdError::Invalid(e)) = self {
            body["field"] = serde_json::Value::from(e.field());
        }

        HttpResponse::build(self.status_code()).json(body)
    }
}
