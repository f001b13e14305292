use actix_web::{
    HttpResponse,
    web::{self, Json, Path},
};
use serde::Deserialize;

use super::ApiResponse;
use crate::household::{ApplianceDraft, ApplianceId, HouseholdService, HouseholdStore, RoomDraft, RoomId};

pub fn routes<S: HouseholdStore + 'static>() -> actix_web::Scope {
    web::scope("/household")
        .route("", web::get().to(get_household::<S>))
        .route("/tariff", web::put().to(set_tariff::<S>))
        .route("/rooms", web::post().to(add_room::<S>))
        .route("/rooms/{room_id}", web::delete().to(remove_room::<S>))
        .route("/rooms/{room_id}/appliances", web::post().to(add_appliance::<S>))
        .route(
            "/rooms/{room_id}/appliances/{appliance_id}",
            web::put().to(update_appliance::<S>),
        )
        .route(
            "/rooms/{room_id}/appliances/{appliance_id}",
            web::delete().to(remove_appliance::<S>),
        )
}

#[derive(Debug, Deserialize)]
struct TariffDTO {
    #[serde(rename = "costPerKWh")]
    cost_per_kwh: f64,
}

async fn get_household<S: HouseholdStore>(service: web::Data<HouseholdService<S>>) -> HttpResponse {
    HttpResponse::Ok().json(service.snapshot().await)
}

async fn set_tariff<S: HouseholdStore>(
    service: web::Data<HouseholdService<S>>,
    Json(dto): Json<TariffDTO>,
) -> ApiResponse {
    let tariff = service.set_tariff(dto.cost_per_kwh).await?;

    tracing::info!("Tariff set to {}", tariff);
    Ok(HttpResponse::Ok().json(serde_json::json!({ "costPerKWh": tariff })))
}

async fn add_room<S: HouseholdStore>(
    service: web::Data<HouseholdService<S>>,
    Json(draft): Json<RoomDraft>,
) -> ApiResponse {
    let room = service.add_room(draft).await?;

    tracing::info!("Added room {} ({})", room.id, room.name);
    Ok(HttpResponse::Created().json(room))
}

async fn remove_room<S: HouseholdStore>(service: web::Data<HouseholdService<S>>, path: Path<String>) -> ApiResponse {
    let room_id = RoomId::new(path.into_inner());
    service.remove_room(&room_id).await?;

    tracing::info!("Removed room {}", room_id);
    Ok(HttpResponse::NoContent().finish())
}

async fn add_appliance<S: HouseholdStore>(
    service: web::Data<HouseholdService<S>>,
    path: Path<String>,
    Json(draft): Json<ApplianceDraft>,
) -> ApiResponse {
    let room_id = RoomId::new(path.into_inner());
    let appliance = service.add_appliance(&room_id, draft).await?;

    tracing::info!("Added appliance {} to room {}", appliance.id, room_id);
    Ok(HttpResponse::Created().json(appliance))
}

async fn update_appliance<S: HouseholdStore>(
    service: web::Data<HouseholdService<S>>,
    path: Path<(String, String)>,
    Json(draft): Json<ApplianceDraft>,
) -> ApiResponse {
    let (room_id, appliance_id) = path.into_inner();
    let appliance = service
        .update_appliance(&RoomId::new(room_id), &ApplianceId::new(appliance_id), draft)
        .await?;

    Ok(HttpResponse::Ok().json(appliance))
}

async fn remove_appliance<S: HouseholdStore>(
    service: web::Data<HouseholdService<S>>,
    path: Path<(String, String)>,
) -> ApiResponse {
    let (room_id, appliance_id) = path.into_inner();
    service
        .remove_appliance(&RoomId::new(room_id), &ApplianceId::new(appliance_id))
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test};
    use assert_json_diff::assert_json_include;
    use serde_json::{Value, json};

    use crate::adapter::TemplateGenerator;
    use crate::adapter::api::test_support::{call, call_default, household_service};
    use crate::household::{ApplianceId, Household, HouseholdService, testing::InMemoryStore};

    #[actix_web::test]
    async fn returns_snapshot() {
        let resp = call_default(test::TestRequest::get().uri("/api/household")).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_json_include!(actual: body, expected: json!({ "costPerKWh": 0.75, "rooms": [{ "id": "room-1" }, { "id": "room-2" }] }));
    }

    #[actix_web::test]
    async fn adds_appliance() {
        let household = household_service(Household::default()).await;

        let resp = call(
            household.clone(),
            TemplateGenerator,
            test::TestRequest::post()
                .uri("/api/household/rooms/room-2/appliances")
                .set_json(json!({ "name": "Cafeteira", "power": 800, "dailyUsageHours": 0.25 })),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_json_include!(actual: body, expected: json!({ "id": "app-6", "name": "Cafeteira", "power": 800.0 }));
        assert_eq!(household.snapshot().await.rooms[1].appliances.len(), 3);
    }

    #[actix_web::test]
    async fn rejects_invalid_appliance() {
        let resp = call_default(
            test::TestRequest::post()
                .uri("/api/household/rooms/room-1/appliances")
                .set_json(json!({ "name": "Aquecedor", "power": 2000, "dailyUsageHours": 30 })),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_json_include!(actual: body, expected: json!({ "error": "INVALID_INPUT", "field": "dailyUsageHours" }));
    }

    #[actix_web::test]
    async fn unknown_room_is_not_found() {
        let resp = call_default(test::TestRequest::delete().uri("/api/household/rooms/room-42")).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn sets_tariff() {
        let household = household_service(Household::default()).await;

        let resp = call(
            household.clone(),
            TemplateGenerator,
            test::TestRequest::put()
                .uri("/api/household/tariff")
                .set_json(json!({ "costPerKWh": 0.92 })),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(household.snapshot().await.cost_per_kwh.0, 0.92);
    }

    #[actix_web::test]
    async fn updates_appliance() {
        let household = household_service(Household::default()).await;

        let resp = call(
            household.clone(),
            TemplateGenerator,
            test::TestRequest::put()
                .uri("/api/household/rooms/room-2/appliances/app-4")
                .set_json(json!({ "name": "Geladeira Inverter", "power": 70, "dailyUsageHours": 24 })),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_json_include!(actual: body, expected: json!({ "id": "app-4", "name": "Geladeira Inverter", "power": 70.0 }));

        let snapshot = household.snapshot().await;
        assert_eq!(snapshot.appliance(&ApplianceId::new("app-4")).unwrap().power.0, 70.0);
    }

    #[actix_web::test]
    async fn removes_appliance() {
        let household = household_service(Household::default()).await;

        let resp = call(
            household.clone(),
            TemplateGenerator,
            test::TestRequest::delete().uri("/api/household/rooms/room-2/appliances/app-5"),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let snapshot = household.snapshot().await;
        assert!(snapshot.appliance(&ApplianceId::new("app-5")).is_none());
        assert_eq!(snapshot.rooms[1].appliances.len(), 1);
    }

    #[actix_web::test]
    async fn failed_save_is_internal_error() {
        let household = Arc::new(HouseholdService::load(InMemoryStore::failing()).await);

        let resp = call(
            household.clone(),
            TemplateGenerator,
            test::TestRequest::put()
                .uri("/api/household/tariff")
                .set_json(json!({ "costPerKWh": 1.1 })),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "PERSIST_FAILED");
        assert_eq!(household.snapshot().await.cost_per_kwh.0, 0.75);
    }
}
