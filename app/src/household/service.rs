use std::collections::BTreeSet;

use derive_more::derive::{Display, Error, From};
use tokio::sync::RwLock;

use super::{
    Appliance, ApplianceDraft, ApplianceId, Household, HouseholdStore, Room, RoomDraft, RoomId, StoreError,
    ValidationError,
};
use crate::core::unit::CostPerKwh;

#[derive(Debug, Display, Error, From)]
pub enum HouseholdError {
    #[display("Invalid input: {_0}")]
    Invalid(ValidationError),

    #[display("Room {id} not found")]
    #[from(ignore)]
    RoomNotFound { id: RoomId },

    #[display("Appliance {id} not found")]
    #[from(ignore)]
    ApplianceNotFound { id: ApplianceId },

    #[display("{_0}")]
    Persist(StoreError),
}

/// Holds the current household and writes a snapshot after every change.
/// A change is only applied once its snapshot was saved.
pub struct HouseholdService<S: HouseholdStore> {
    store: S,
    state: RwLock<Household>,
}

impl<S: HouseholdStore> HouseholdService<S> {
    pub async fn load(store: S) -> Self {
        let household = match store.load().await {
            Ok(Some(household)) => {
                tracing::info!("Loaded household with {} rooms", household.rooms.len());
                household
            }
            Ok(None) => {
                tracing::info!("No household snapshot found, starting with sample data");
                Household::default()
            }
            Err(e) => {
                tracing::error!("Failed to load household snapshot, starting with sample data: {:?}", e);
                Household::default()
            }
        };

        Self {
            store,
            state: RwLock::new(household),
        }
    }

    pub async fn snapshot(&self) -> Household {
        self.state.read().await.clone()
    }

    pub async fn set_tariff(&self, cost_per_kwh: f64) -> Result<CostPerKwh, HouseholdError> {
        if !cost_per_kwh.is_finite() {
            return Err(ValidationError::NotANumber { field: "costPerKWh" }.into());
        }

        let tariff = CostPerKwh(cost_per_kwh);
        self.update(|household| {
            household.cost_per_kwh = tariff;
            Ok(tariff)
        })
        .await
    }

    pub async fn add_room(&self, draft: RoomDraft) -> Result<Room, HouseholdError> {
        let name = draft.validate()?;

        self.update(|household| {
            let id = RoomId::new(next_id("room", household.rooms.iter().map(|r| r.id.as_str())));
            let room = Room {
                id,
                name,
                appliances: vec![],
            };
            household.rooms.push(room.clone());
            Ok(room)
        })
        .await
    }

    pub async fn remove_room(&self, room_id: &RoomId) -> Result<(), HouseholdError> {
        self.update(|household| {
            let before = household.rooms.len();
            household.rooms.retain(|r| &r.id != room_id);

            if household.rooms.len() == before {
                return Err(HouseholdError::RoomNotFound { id: room_id.clone() });
            }
            Ok(())
        })
        .await
    }

    pub async fn add_appliance(&self, room_id: &RoomId, draft: ApplianceDraft) -> Result<Appliance, HouseholdError> {
        let valid = draft.validate()?;

        self.update(|household| {
            let id = ApplianceId::new(next_id("app", household.appliances().map(|a| a.id.as_str())));
            let room = room_mut(household, room_id)?;

            let appliance = Appliance {
                id,
                name: valid.name,
                power: valid.power,
                daily_usage_hours: valid.daily_usage_hours,
            };
            room.appliances.push(appliance.clone());
            Ok(appliance)
        })
        .await
    }

    pub async fn update_appliance(
        &self,
        room_id: &RoomId,
        appliance_id: &ApplianceId,
        draft: ApplianceDraft,
    ) -> Result<Appliance, HouseholdError> {
        let valid = draft.validate()?;

        self.update(|household| {
            let room = room_mut(household, room_id)?;
            let appliance = room
                .appliances
                .iter_mut()
                .find(|a| &a.id == appliance_id)
                .ok_or_else(|| HouseholdError::ApplianceNotFound {
                    id: appliance_id.clone(),
                })?;

            appliance.name = valid.name;
            appliance.power = valid.power;
            appliance.daily_usage_hours = valid.daily_usage_hours;
            Ok(appliance.clone())
        })
        .await
    }

    pub async fn remove_appliance(&self, room_id: &RoomId, appliance_id: &ApplianceId) -> Result<(), HouseholdError> {
        self.update(|household| {
            let room = room_mut(household, room_id)?;
            let before = room.appliances.len();
            room.appliances.retain(|a| &a.id != appliance_id);

            if room.appliances.len() == before {
                return Err(HouseholdError::ApplianceNotFound {
                    id: appliance_id.clone(),
                });
            }
            Ok(())
        })
        .await
    }

    async fn update<T>(
        &self,
        change: impl FnOnce(&mut Household) -> Result<T, HouseholdError>,
    ) -> Result<T, HouseholdError> {
        let mut state = self.state.write().await;

        let mut updated = state.clone();
        let result = change(&mut updated)?;

        if let Err(e) = self.store.save(&updated).await {
            tracing::error!("Failed to save household snapshot: {:?}", e);
            return Err(e.into());
        }

        *state = updated;
        Ok(result)
    }
}

fn room_mut<'a>(household: &'a mut Household, room_id: &RoomId) -> Result<&'a mut Room, HouseholdError> {
    household
        .rooms
        .iter_mut()
        .find(|r| &r.id == room_id)
        .ok_or_else(|| HouseholdError::RoomNotFound { id: room_id.clone() })
}

//ids look like `room-3`, the suffix is one past the highest one in use,
//or the lowest free one once the highest is u64::MAX
fn next_id<'a>(prefix: &str, existing: impl Iterator<Item = &'a str>) -> String {
    let used: BTreeSet<u64> = existing
        .filter_map(|id| id.strip_prefix(prefix)?.strip_prefix('-')?.parse::<u64>().ok())
        .collect();

    let next = match used.last() {
        None => 1,
        Some(highest) => highest
            .checked_add(1)
            .unwrap_or_else(|| (1..u64::MAX).find(|n| !used.contains(n)).unwrap_or(0)),
    };

    format!("{}-{}", prefix, next)
}
