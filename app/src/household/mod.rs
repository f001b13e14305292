mod service;
mod store;
mod validation;

use serde::{Deserialize, Serialize};

use crate::core::unit::{CostPerKwh, Watt};

pub use service::{HouseholdError, HouseholdService};
pub use store::{HouseholdStore, StoreError};
pub use validation::{ApplianceDraft, RoomDraft, ValidationError};

#[cfg(test)]
pub use store::testing;

pub const DEFAULT_COST_PER_KWH: CostPerKwh = CostPerKwh(0.75);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From)]
#[serde(transparent)]
pub struct RoomId(String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From)]
#[serde(transparent)]
pub struct ApplianceId(String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ApplianceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appliance {
    pub id: ApplianceId,
    pub name: String,
    pub power: Watt,
    pub daily_usage_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    #[serde(default)]
    pub appliances: Vec<Appliance>,
}

/// Snapshot of everything the user entered, persisted as one JSON document
/// of the form `{"rooms": [...], "costPerKWh": 0.75}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Household {
    pub rooms: Vec<Room>,
    #[serde(rename = "costPerKWh")]
    pub cost_per_kwh: CostPerKwh,
}

impl Household {
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| &r.id == id)
    }

    pub fn appliance(&self, id: &ApplianceId) -> Option<&Appliance> {
        self.appliances().find(|a| &a.id == id)
    }

    pub fn appliances(&self) -> impl Iterator<Item = &Appliance> {
        self.rooms.iter().flat_map(|r| r.appliances.iter())
    }

    /// Reads a stored snapshot. Missing rooms fall back to the sample rooms,
    /// a missing or zero tariff falls back to the default tariff.
    pub fn from_snapshot(json: &str) -> anyhow::Result<Self> {
        #[derive(Deserialize)]
        struct Snapshot {
            rooms: Option<Vec<Room>>,
            #[serde(rename = "costPerKWh")]
            cost_per_kwh: Option<CostPerKwh>,
        }

        let snapshot: Snapshot = serde_json::from_str(json)?;

        let cost_per_kwh = match snapshot.cost_per_kwh {
            Some(cost) if cost.0 != 0.0 => cost,
            _ => DEFAULT_COST_PER_KWH,
        };

        Ok(Self {
            rooms: snapshot.rooms.unwrap_or_else(sample_rooms),
            cost_per_kwh,
        })
    }
}

impl Default for Household {
    fn default() -> Self {
        Self {
            rooms: sample_rooms(),
            cost_per_kwh: DEFAULT_COST_PER_KWH,
        }
    }
}

fn sample_rooms() -> Vec<Room> {
    let appliance = |id: &str, name: &str, power: f64, hours: f64| Appliance {
        id: ApplianceId::new(id),
        name: name.to_owned(),
        power: Watt(power),
        daily_usage_hours: hours,
    };

    vec![
        Room {
            id: RoomId::new("room-1"),
            name: "Sala de Estar".to_owned(),
            appliances: vec![
                appliance("app-1", "TV 60\"", 150.0, 5.0),
                appliance("app-2", "Videogame", 200.0, 2.0),
                appliance("app-3", "Ar Condicionado", 1500.0, 8.0),
            ],
        },
        Room {
            id: RoomId::new("room-2"),
            name: "Cozinha".to_owned(),
            appliances: vec![
                appliance("app-4", "Geladeira", 100.0, 24.0),
                appliance("app-5", "Micro-ondas", 1200.0, 0.5),
            ],
        },
    ]
}
