//! Fleet and route data as exchanged with the fleet service.
//!
//! Field names match the service's JSON so these types deserialize directly
//! from its responses. SoC and SoH travel as percentages (0-100).

use serde::{Deserialize, Serialize};

/// Availability state reported by the fleet store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruckStatus {
    Ready,
    Charging,
    Maintenance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// State of charge, percent.
    pub soc: f64,
    /// State of health, percent. Scales rated capacity.
    pub soh: f64,
    pub capacity_kwh: f64,
    pub load_lbs: f64,
    pub status: TruckStatus,
    /// Minutes until a charging truck is released.
    #[serde(default)]
    pub charge_eta_mins: Option<u32>,
    #[serde(default)]
    pub range_miles: Option<f64>,
}

impl Truck {
    pub fn is_available(&self) -> bool {
        self.status == TruckStatus::Ready
    }

    /// State of charge as a fraction.
    pub fn soc_fraction(&self) -> f64 {
        self.soc / 100.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutePriority {
    Urgent,
    #[default]
    Standard,
}

/// Standalone charger along the route. No cargo effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargingStation {
    pub mile_marker: f64,
    pub charge_rate_kw: f64,
}

/// Delivery or pickup point, optionally with a co-located charger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub mile_marker: f64,
    #[serde(default)]
    pub unload_lbs: f64,
    #[serde(default)]
    pub pickup_lbs: f64,
    #[serde(default)]
    pub has_charger: bool,
    #[serde(default)]
    pub charge_rate_kw: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub distance_miles: f64,
    #[serde(default)]
    pub elevation_gain_ft: f64,
    #[serde(default)]
    pub priority: RoutePriority,
    /// Scales energy draw for grade; 1.0 is flat.
    pub terrain_multiplier: f64,
    /// Baseline kWh per mile with an empty trailer.
    pub base_consumption: f64,
    /// Mission payload. Overrides the truck's own load when set.
    #[serde(default)]
    pub load_lbs: Option<f64>,
    #[serde(default)]
    pub charging_stations: Vec<ChargingStation>,
    #[serde(default)]
    pub stops: Vec<Stop>,
}

impl Route {
    /// Cargo a truck departs the depot with on this route.
    pub fn starting_load_lbs(&self, truck: &Truck) -> f64 {
        self.load_lbs.unwrap_or(truck.load_lbs)
    }
}

/// One simulated leg between consecutive nodes.
///
/// SoC values are percentages, everything rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegTrace {
    pub leg_number: u32,
    pub from_mile: f64,
    pub to_mile: f64,
    pub distance_miles: f64,
    pub start_soc: f64,
    pub end_soc: f64,
    pub start_load_lbs: f64,
    pub end_load_lbs: f64,
    pub unload_lbs: f64,
    pub pickup_lbs: f64,
    pub charge_added_kwh: f64,
    pub charge_time_mins: u32,
    pub used_charger: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeasibilityStatus {
    Green,
    Yellow,
    Red,
}

/// Per-truck verdict for a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityResult {
    pub truck_id: String,
    pub truck_name: String,
    pub status: FeasibilityStatus,
    /// Predicted SoC at the destination, percent.
    pub arrival_soc: f64,
    pub energy_required_kwh: f64,
    /// Minutes spent charging en route.
    pub charge_time_mins: u32,
    /// En-route charging plus stop dwell.
    pub total_stop_time_mins: u32,
    pub stops_required: u32,
    pub no_charge_needed: bool,
    pub not_available: bool,
    pub feasible_after_precharge: bool,
    pub precharge_mins: Option<u32>,
    pub precharge_kwh: Option<f64>,
    /// Minimum depot SoC that makes the route feasible, percent.
    pub min_required_soc: Option<f64>,
    pub estimated_range_miles: Option<f64>,
    pub leg_details: Vec<LegTrace>,
}

impl FeasibilityResult {
    /// Verdict for a truck that was never simulated.
    pub fn unavailable(truck: &Truck) -> Self {
        Self {
            truck_id: truck.id.clone(),
            truck_name: truck.name.clone(),
            status: FeasibilityStatus::Red,
            arrival_soc: 0.0,
            energy_required_kwh: 0.0,
            charge_time_mins: 0,
            total_stop_time_mins: 0,
            stops_required: 0,
            no_charge_needed: false,
            not_available: true,
            feasible_after_precharge: false,
            precharge_mins: None,
            precharge_kwh: None,
            min_required_soc: None,
            estimated_range_miles: None,
            leg_details: Vec::new(),
        }
    }

    /// Depot charging minutes, zero when no precharge was offered.
    pub fn precharge_wait_mins(&self) -> u32 {
        self.precharge_mins.unwrap_or(0)
    }
}

/// Rounds to two decimal places for reporting.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
