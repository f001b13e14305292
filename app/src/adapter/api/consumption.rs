use actix_web::{
    HttpResponse,
    web::{self, Path},
};
use serde::Serialize;

use super::{ApiError, ApiResponse};
use crate::consumption::{
    ConsumerShare, ConsumptionTotals, CostTotals, RoomShare, cost_totals, room_breakdown, room_consumption,
    top_consumers, total_consumption,
};
use crate::core::format::{format_currency, format_kwh};
use crate::core::unit::CostPerKwh;
use crate::household::{HouseholdService, HouseholdStore, RoomId};

const TOP_CONSUMERS: usize = 5;

pub fn routes<S: HouseholdStore + 'static>() -> actix_web::Scope {
    web::scope("/consumption")
        .route("", web::get().to(household_consumption::<S>))
        .route("/rooms/{room_id}", web::get().to(room_report::<S>))
}

#[derive(Debug, Serialize)]
struct Horizon {
    kwh: String,
    cost: String,
}

#[derive(Debug, Serialize)]
struct Formatted {
    daily: Horizon,
    monthly: Horizon,
    yearly: Horizon,
}

impl Formatted {
    fn new(totals: &ConsumptionTotals, costs: &CostTotals) -> Self {
        let horizon = |kwh: f64, cost: f64| Horizon {
            kwh: format_kwh(kwh),
            cost: format_currency(cost),
        };

        Self {
            daily: horizon(totals.daily.0, costs.daily.0),
            monthly: horizon(totals.monthly.0, costs.monthly.0),
            yearly: horizon(totals.yearly.0, costs.yearly.0),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConsumptionReportDTO {
    #[serde(rename = "costPerKWh")]
    cost_per_kwh: CostPerKwh,
    totals: ConsumptionTotals,
    costs: CostTotals,
    formatted: Formatted,
    rooms: Vec<RoomShare>,
    top_consumers: Vec<ConsumerShare>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RoomReportDTO {
    room_id: RoomId,
    name: String,
    totals: ConsumptionTotals,
    costs: CostTotals,
    formatted: Formatted,
}

async fn household_consumption<S: HouseholdStore>(service: web::Data<HouseholdService<S>>) -> HttpResponse {
    let household = service.snapshot().await;

    let totals = total_consumption(&household.rooms);
    let costs = cost_totals(&totals, household.cost_per_kwh);

    HttpResponse::Ok().json(ConsumptionReportDTO {
        cost_per_kwh: household.cost_per_kwh,
        formatted: Formatted::new(&totals, &costs),
        totals,
        costs,
        rooms: room_breakdown(&household.rooms),
        top_consumers: top_consumers(&household.rooms, household.cost_per_kwh, TOP_CONSUMERS),
    })
}

async fn room_report<S: HouseholdStore>(service: web::Data<HouseholdService<S>>, path: Path<String>) -> ApiResponse {
    let household = service.snapshot().await;
    let room_id = RoomId::new(path.into_inner());

    let room = household.room(&room_id).ok_or_else(|| ApiError::NotFound {
        what: format!("Room {}", room_id),
    })?;

    let totals = room_consumption(&room.appliances);
    let costs = cost_totals(&totals, household.cost_per_kwh);

    Ok(HttpResponse::Ok().json(RoomReportDTO {
        room_id: room.id.clone(),
        name: room.name.clone(),
        formatted: Formatted::new(&totals, &costs),
        totals,
        costs,
    }))
}
