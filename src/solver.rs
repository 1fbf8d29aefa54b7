//! Route feasibility solver: simulate every truck against one route and rank them.

use std::cmp::Ordering;

use rayon::prelude::*;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::energy::{effective_capacity_kwh, estimated_range_miles, EnergyModel};
use crate::error::PlannerError;
use crate::model::{round2, FeasibilityResult, FeasibilityStatus, Route, Truck};
use crate::precharge::{resolve_precharge, Precharge};
use crate::simulate::{LegSimulator, Simulation};
use crate::topology::{build_nodes, Node};
use crate::traits::FleetStore;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SolveOptions {
    /// Extra kWh per lb of cargo per mile. Calibrated per fleet.
    pub weight_factor: f64,
    /// SoC fraction that must remain on arrival at every node.
    pub min_buffer_soc: f64,
    /// Charging never targets more than this SoC fraction.
    pub charge_target_cap: f64,
    /// Absolute SoC tolerance for buffer checks and skipping tiny charges.
    pub soc_epsilon: f64,
    /// Unload/pickup dwell per stop.
    pub stop_dwell_mins: u32,
    pub depot_charge_rate_kw: f64,
    /// Bracket width at which the precharge search stops.
    pub precharge_tolerance: f64,
    pub green_base_mins: f64,
    pub green_mins_per_mile: f64,
    pub yellow_base_mins: f64,
    pub yellow_mins_per_mile: f64,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            weight_factor: 0.00004,
            min_buffer_soc: 0.15,
            charge_target_cap: 0.90,
            soc_epsilon: 0.001,
            stop_dwell_mins: 30,
            depot_charge_rate_kw: 150.0,
            precharge_tolerance: 0.001,
            green_base_mins: 60.0,
            green_mins_per_mile: 0.2,
            yellow_base_mins: 120.0,
            yellow_mins_per_mile: 0.4,
        }
    }
}

impl SolveOptions {
    /// Charge minutes under which a feasible route stays green.
    pub fn green_limit_mins(&self, distance_miles: f64) -> f64 {
        self.green_base_mins + self.green_mins_per_mile * distance_miles
    }

    pub fn yellow_limit_mins(&self, distance_miles: f64) -> f64 {
        self.yellow_base_mins + self.yellow_mins_per_mile * distance_miles
    }
}

/// Feasibility of every truck in the store against `route_id`, ranked.
pub fn feasibility<S>(store: &S, route_id: &str, options: &SolveOptions) -> Result<Vec<FeasibilityResult>, PlannerError>
where
    S: FleetStore + ?Sized,
{
    let route = store
        .route(route_id)?
        .ok_or_else(|| PlannerError::RouteNotFound(route_id.to_string()))?;
    let trucks = store.trucks()?;
    solve(&route, &trucks, options)
}

/// Evaluate all trucks against one route and return them in ranked order.
///
/// Fails only on structurally invalid input; infeasible trucks are reported
/// in their results.
pub fn solve(route: &Route, trucks: &[Truck], options: &SolveOptions) -> Result<Vec<FeasibilityResult>, PlannerError> {
    let nodes = build_nodes(route)?;
    for truck in trucks {
        validate_truck(truck)?;
    }

    info!(
        route_id = %route.id,
        trucks = trucks.len(),
        nodes = nodes.len(),
        "evaluating route feasibility"
    );

    let model = EnergyModel::for_route(route, options.weight_factor);
    let mut results: Vec<FeasibilityResult> = trucks
        .par_iter()
        .map(|truck| evaluate_truck(truck, route, &nodes, &model, options))
        .collect();

    rank(&mut results);
    Ok(results)
}

/// Verdict for one truck on a prebuilt topology.
pub fn evaluate_truck(
    truck: &Truck,
    route: &Route,
    nodes: &[Node],
    model: &EnergyModel,
    options: &SolveOptions,
) -> FeasibilityResult {
    if !truck.is_available() {
        debug!(truck_id = %truck.id, status = ?truck.status, "truck not available");
        return FeasibilityResult::unavailable(truck);
    }

    match simulate_truck(truck, route, nodes, model, options) {
        Ok(result) => {
            debug!(
                truck_id = %truck.id,
                status = ?result.status,
                arrival_soc = result.arrival_soc,
                charge_time_mins = result.charge_time_mins,
                "truck evaluated"
            );
            result
        }
        Err(err) => {
            warn!(truck_id = %truck.id, error = %err, "truck cannot be simulated");
            infeasible_result(truck)
        }
    }
}

fn simulate_truck(
    truck: &Truck,
    route: &Route,
    nodes: &[Node],
    model: &EnergyModel,
    options: &SolveOptions,
) -> Result<FeasibilityResult, PlannerError> {
    let capacity = effective_capacity_kwh(truck.capacity_kwh, truck.soh);
    if capacity <= 0.0 {
        return Err(PlannerError::DegenerateCapacity {
            truck_id: truck.id.clone(),
        });
    }

    let simulator = LegSimulator::new(nodes, model, capacity, options);
    let start_soc = truck.soc_fraction();
    let start_load = route.starting_load_lbs(truck);

    let actual = simulator.run(start_soc, start_load);
    let (simulation, precharge) = if actual.feasible {
        (actual, None)
    } else {
        match resolve_precharge(&simulator, start_soc, start_load) {
            Some((precharge, simulation)) => (simulation, Some(precharge)),
            None => {
                warn!(truck_id = %truck.id, route_id = %route.id, "route infeasible even from a full battery");
                (actual, None)
            }
        }
    };

    let status = classify(&simulation, precharge.as_ref(), route.distance_miles, options);
    Ok(FeasibilityResult {
        truck_id: truck.id.clone(),
        truck_name: truck.name.clone(),
        status,
        arrival_soc: simulation.arrival_soc_percent(),
        energy_required_kwh: round2(simulation.energy_required_kwh),
        charge_time_mins: simulation.charge_time_mins,
        total_stop_time_mins: simulation.total_stop_time_mins(),
        stops_required: simulation.stops,
        no_charge_needed: simulation.no_charge_needed && precharge.is_none(),
        not_available: false,
        feasible_after_precharge: precharge.is_some(),
        precharge_mins: precharge.map(|p| p.precharge_mins),
        precharge_kwh: precharge.map(|p| round2(p.precharge_kwh)),
        min_required_soc: precharge.map(|p| round2(p.min_required_soc * 100.0)),
        estimated_range_miles: estimated_range_miles(truck, route, model, options.min_buffer_soc).map(round2),
        leg_details: simulation.legs,
    })
}

/// Tri-state status for a simulated truck.
///
/// Depot precharge time counts toward the charge time judged against the
/// route's limits.
pub fn classify(
    simulation: &Simulation,
    precharge: Option<&Precharge>,
    distance_miles: f64,
    options: &SolveOptions,
) -> FeasibilityStatus {
    if !simulation.feasible {
        return FeasibilityStatus::Red;
    }

    let precharge_mins = precharge.map_or(0, |p| p.precharge_mins);
    if simulation.no_charge_needed && precharge_mins == 0 {
        return FeasibilityStatus::Green;
    }

    let charge_mins = f64::from(simulation.charge_time_mins + precharge_mins);
    if charge_mins < options.green_limit_mins(distance_miles) {
        FeasibilityStatus::Green
    } else if charge_mins < options.yellow_limit_mins(distance_miles) {
        FeasibilityStatus::Yellow
    } else {
        FeasibilityStatus::Red
    }
}

/// Order results for dispatch: unavailable trucks last, trucks that can leave
/// without charging first, then least time spent charging and stopping, then
/// highest arrival SoC.
pub fn rank(results: &mut [FeasibilityResult]) {
    results.sort_by(compare_results);
}

fn compare_results(a: &FeasibilityResult, b: &FeasibilityResult) -> Ordering {
    a.not_available
        .cmp(&b.not_available)
        .then_with(|| departs_as_is(b).cmp(&departs_as_is(a)))
        .then_with(|| total_wait_mins(a).cmp(&total_wait_mins(b)))
        .then_with(|| b.arrival_soc.total_cmp(&a.arrival_soc))
        .then_with(|| a.truck_id.cmp(&b.truck_id))
}

fn departs_as_is(result: &FeasibilityResult) -> bool {
    result.status == FeasibilityStatus::Green && result.no_charge_needed
}

fn total_wait_mins(result: &FeasibilityResult) -> u32 {
    result.total_stop_time_mins + result.precharge_wait_mins()
}

fn infeasible_result(truck: &Truck) -> FeasibilityResult {
    FeasibilityResult {
        not_available: false,
        ..FeasibilityResult::unavailable(truck)
    }
}

fn validate_truck(truck: &Truck) -> Result<(), PlannerError> {
    let percent = |value: f64| (0.0..=100.0).contains(&value);

    if !percent(truck.soc) {
        return Err(PlannerError::invalid_truck(
            &truck.id,
            format!("state of charge must be 0-100, got {}", truck.soc),
        ));
    }
    if !percent(truck.soh) {
        return Err(PlannerError::invalid_truck(
            &truck.id,
            format!("state of health must be 0-100, got {}", truck.soh),
        ));
    }
    if !truck.capacity_kwh.is_finite() || truck.capacity_kwh < 0.0 {
        return Err(PlannerError::invalid_truck(
            &truck.id,
            format!("capacity must be non-negative, got {}", truck.capacity_kwh),
        ));
    }
    if !truck.load_lbs.is_finite() || truck.load_lbs < 0.0 {
        return Err(PlannerError::invalid_truck(
            &truck.id,
            format!("load must be non-negative, got {}", truck.load_lbs),
        ));
    }
    Ok(())
}
