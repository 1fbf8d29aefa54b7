//! The fleet service's historical mock fleet.
//!
//! Trucks and routes as the dispatcher dashboard was developed against. Stops
//! and chargers on the cross-state route were added to exercise charging.

use freight_feasibility::model::{ChargingStation, RoutePriority, Stop};
use freight_feasibility::{Route, Truck, TruckStatus};

fn truck(id: &str, name: &str, soc: f64, soh: f64, capacity_kwh: f64, load_lbs: f64, status: TruckStatus) -> Truck {
    Truck {
        id: id.to_string(),
        name: name.to_string(),
        soc,
        soh,
        capacity_kwh,
        load_lbs,
        status,
        charge_eta_mins: None,
        range_miles: None,
    }
}

pub fn mock_trucks() -> Vec<Truck> {
    let mut volvo = truck("T-03", "Volvo FH Electric", 34.0, 85.0, 480.0, 0.0, TruckStatus::Charging);
    volvo.charge_eta_mins = Some(47);

    vec![
        truck("T-01", "Tesla Semi", 92.0, 98.0, 500.0, 42000.0, TruckStatus::Ready),
        truck("T-02", "Freightliner eCascadia", 61.0, 91.0, 550.0, 68000.0, TruckStatus::Ready),
        volvo,
        truck("T-04", "Kenworth T680E", 78.0, 94.0, 520.0, 55000.0, TruckStatus::Ready),
        truck("T-05", "Peterbilt 579EV", 15.0, 76.0, 460.0, 0.0, TruckStatus::Maintenance),
    ]
}

/// 48 miles, no chargers, every ready truck makes it unaided.
pub fn local_delivery() -> Route {
    Route {
        id: "R-01".to_string(),
        name: "Local Delivery".to_string(),
        distance_miles: 48.0,
        elevation_gain_ft: 120.0,
        priority: RoutePriority::Standard,
        terrain_multiplier: 1.05,
        base_consumption: 1.8,
        load_lbs: Some(35000.0),
        charging_stations: Vec::new(),
        stops: Vec::new(),
    }
}

/// 382 miles with three standalone chargers and one delivery stop.
pub fn cross_state_express() -> Route {
    Route {
        id: "R-02".to_string(),
        name: "Cross-State Express".to_string(),
        distance_miles: 382.0,
        elevation_gain_ft: 800.0,
        priority: RoutePriority::Urgent,
        terrain_multiplier: 1.12,
        base_consumption: 1.8,
        load_lbs: Some(22000.0),
        charging_stations: vec![
            ChargingStation {
                mile_marker: 285.0,
                charge_rate_kw: 350.0,
            },
            ChargingStation {
                mile_marker: 95.0,
                charge_rate_kw: 350.0,
            },
            ChargingStation {
                mile_marker: 190.0,
                charge_rate_kw: 350.0,
            },
        ],
        stops: vec![Stop {
            mile_marker: 240.0,
            unload_lbs: 10000.0,
            pickup_lbs: 0.0,
            has_charger: false,
            charge_rate_kw: None,
        }],
    }
}

/// 218 miles of steep grade under a heavy payload and no chargers.
pub fn mountain_pass() -> Route {
    Route {
        id: "R-03".to_string(),
        name: "Mountain Pass".to_string(),
        distance_miles: 218.0,
        elevation_gain_ft: 4200.0,
        priority: RoutePriority::Standard,
        terrain_multiplier: 1.45,
        base_consumption: 1.8,
        load_lbs: Some(58000.0),
        charging_stations: Vec::new(),
        stops: Vec::new(),
    }
}

pub fn mock_routes() -> Vec<Route> {
    vec![local_delivery(), cross_state_express(), mountain_pass()]
}
