//! Test fixtures for freight-feasibility.
//!
//! Provides:
//! - The fleet service's historical mock trucks and routes
//! - Builders for synthetic trucks and routes

#![allow(dead_code)]

pub mod mock_fleet;

pub use mock_fleet::*;

use freight_feasibility::model::{ChargingStation, RoutePriority, Stop};
use freight_feasibility::{Route, Truck, TruckStatus};

/// Builder for test trucks with sensible defaults.
#[derive(Clone, Debug)]
pub struct TruckBuilder {
    truck: Truck,
}

impl TruckBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            truck: Truck {
                id: id.to_string(),
                name: format!("Truck {}", id),
                soc: 90.0,
                soh: 100.0,
                capacity_kwh: 500.0,
                load_lbs: 0.0,
                status: TruckStatus::Ready,
                charge_eta_mins: None,
                range_miles: None,
            },
        }
    }

    pub fn soc(mut self, percent: f64) -> Self {
        self.truck.soc = percent;
        self
    }

    pub fn soh(mut self, percent: f64) -> Self {
        self.truck.soh = percent;
        self
    }

    pub fn capacity(mut self, kwh: f64) -> Self {
        self.truck.capacity_kwh = kwh;
        self
    }

    pub fn load(mut self, lbs: f64) -> Self {
        self.truck.load_lbs = lbs;
        self
    }

    pub fn status(mut self, status: TruckStatus) -> Self {
        self.truck.status = status;
        self
    }

    pub fn build(self) -> Truck {
        self.truck
    }
}

/// Builder for test routes with sensible defaults.
#[derive(Clone, Debug)]
pub struct RouteBuilder {
    route: Route,
}

impl RouteBuilder {
    pub fn new(id: &str, distance_miles: f64) -> Self {
        Self {
            route: Route {
                id: id.to_string(),
                name: format!("Route {}", id),
                distance_miles,
                elevation_gain_ft: 0.0,
                priority: RoutePriority::Standard,
                terrain_multiplier: 1.0,
                base_consumption: 1.8,
                load_lbs: None,
                charging_stations: Vec::new(),
                stops: Vec::new(),
            },
        }
    }

    pub fn terrain(mut self, multiplier: f64) -> Self {
        self.route.terrain_multiplier = multiplier;
        self
    }

    pub fn base_consumption(mut self, kwh_per_mile: f64) -> Self {
        self.route.base_consumption = kwh_per_mile;
        self
    }

    pub fn payload(mut self, lbs: f64) -> Self {
        self.route.load_lbs = Some(lbs);
        self
    }

    pub fn station(mut self, mile_marker: f64, charge_rate_kw: f64) -> Self {
        self.route.charging_stations.push(ChargingStation {
            mile_marker,
            charge_rate_kw,
        });
        self
    }

    pub fn stop(mut self, mile_marker: f64, unload_lbs: f64, pickup_lbs: f64) -> Self {
        self.route.stops.push(Stop {
            mile_marker,
            unload_lbs,
            pickup_lbs,
            has_charger: false,
            charge_rate_kw: None,
        });
        self
    }

    pub fn charging_stop(mut self, mile_marker: f64, unload_lbs: f64, pickup_lbs: f64, charge_rate_kw: f64) -> Self {
        self.route.stops.push(Stop {
            mile_marker,
            unload_lbs,
            pickup_lbs,
            has_charger: true,
            charge_rate_kw: Some(charge_rate_kw),
        });
        self
    }

    pub fn build(self) -> Route {
        self.route
    }
}
