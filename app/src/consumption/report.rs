use serde::Serialize;

use super::{ConsumptionTotals, appliance_consumption, cost, room_consumption};
use crate::core::unit::{CostPerKwh, KiloWattHours, Money};
use crate::household::{ApplianceId, Room, RoomId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CostTotals {
    pub daily: Money,
    pub monthly: Money,
    pub yearly: Money,
}

pub fn cost_totals(totals: &ConsumptionTotals, cost_per_kwh: CostPerKwh) -> CostTotals {
    CostTotals {
        daily: cost(totals.daily, cost_per_kwh),
        monthly: cost(totals.monthly, cost_per_kwh),
        yearly: cost(totals.yearly, cost_per_kwh),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomShare {
    pub room_id: RoomId,
    pub name: String,
    #[serde(rename = "monthlyKWh")]
    pub monthly: KiloWattHours,
}

/// Monthly consumption per room, in room order.
pub fn room_breakdown(rooms: &[Room]) -> Vec<RoomShare> {
    rooms
        .iter()
        .map(|room| RoomShare {
            room_id: room.id.clone(),
            name: room.name.clone(),
            monthly: room_consumption(&room.appliances).monthly,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerShare {
    pub appliance_id: ApplianceId,
    pub room_id: RoomId,
    pub name: String,
    #[serde(rename = "monthlyKWh")]
    pub monthly: KiloWattHours,
    pub monthly_cost: Money,
}

/// The `limit` appliances with the highest monthly consumption across all
/// rooms. Equal consumption keeps household order.
pub fn top_consumers(rooms: &[Room], cost_per_kwh: CostPerKwh, limit: usize) -> Vec<ConsumerShare> {
    let mut consumers: Vec<ConsumerShare> = rooms
        .iter()
        .flat_map(|room| {
            room.appliances.iter().map(move |appliance| {
                let monthly = appliance_consumption(appliance.power, appliance.daily_usage_hours).monthly;

                ConsumerShare {
                    appliance_id: appliance.id.clone(),
                    room_id: room.id.clone(),
                    name: appliance.name.clone(),
                    monthly,
                    monthly_cost: cost(monthly, cost_per_kwh),
                }
            })
        })
        .collect();

    consumers.sort_by(|a, b| b.monthly.0.total_cmp(&a.monthly.0));
    consumers.truncate(limit);
    consumers
}
