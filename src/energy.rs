//! Energy draw per leg and usable battery capacity.

use crate::model::{Route, Truck};

/// Energy in kWh to carry `load_lbs` over `distance_miles`.
///
/// `weight_factor` is kWh per lb per mile on top of the empty-truck baseline.
pub fn energy_kwh(
    base_consumption: f64,
    weight_factor: f64,
    load_lbs: f64,
    distance_miles: f64,
    terrain_multiplier: f64,
) -> f64 {
    (base_consumption + weight_factor * load_lbs) * distance_miles * terrain_multiplier
}

/// Usable capacity after degradation. `soh_percent` is 0-100.
pub fn effective_capacity_kwh(capacity_kwh: f64, soh_percent: f64) -> f64 {
    capacity_kwh * (soh_percent / 100.0)
}

/// Whole minutes to deliver `energy_kwh` at `rate_kw`, rounded up.
pub fn charge_minutes(energy_kwh: f64, rate_kw: f64) -> u32 {
    (energy_kwh / rate_kw * 60.0).ceil().max(0.0) as u32
}

/// Consumption model bound to one route's terrain and baseline.
#[derive(Debug, Clone, Copy)]
pub struct EnergyModel {
    pub base_consumption: f64,
    pub terrain_multiplier: f64,
    pub weight_factor: f64,
}

impl EnergyModel {
    pub fn for_route(route: &Route, weight_factor: f64) -> Self {
        Self {
            base_consumption: route.base_consumption,
            terrain_multiplier: route.terrain_multiplier,
            weight_factor,
        }
    }

    pub fn leg_kwh(&self, load_lbs: f64, distance_miles: f64) -> f64 {
        energy_kwh(
            self.base_consumption,
            self.weight_factor,
            load_lbs,
            distance_miles,
            self.terrain_multiplier,
        )
        .max(0.0)
    }

    /// kWh per mile at the given load.
    pub fn per_mile_kwh(&self, load_lbs: f64) -> f64 {
        self.leg_kwh(load_lbs, 1.0)
    }
}

/// Miles the truck covers at its starting load before reaching the buffer SoC,
/// ignoring chargers and cargo events along the way. `None` when the route
/// draws no energy.
pub fn estimated_range_miles(truck: &Truck, route: &Route, model: &EnergyModel, buffer_soc: f64) -> Option<f64> {
    let capacity = effective_capacity_kwh(truck.capacity_kwh, truck.soh);
    let usable_kwh = (truck.soc_fraction() - buffer_soc).max(0.0) * capacity;
    let per_mile = model.per_mile_kwh(route.starting_load_lbs(truck));
    if per_mile <= 0.0 {
        return None;
    }
    Some(usable_kwh / per_mile)
}
