//! Leg-by-leg route simulation and the forward-scan charging policy.

use crate::energy::{charge_minutes, EnergyModel};
use crate::model::{round2, LegTrace};
use crate::solver::SolveOptions;
use crate::topology::{Node, NodeKind};

/// Energy in kWh needed from `nodes[from_index]` to the next node that offers
/// charging, or to the destination if none does.
///
/// Cargo events at intermediate stops are applied to the scan load so each leg
/// is costed at the load the truck would actually carry.
pub fn energy_to_next_opportunity(
    nodes: &[Node],
    from_index: usize,
    starting_load_lbs: f64,
    model: &EnergyModel,
) -> f64 {
    let mut load = starting_load_lbs;
    let mut kwh = 0.0;

    for pair in nodes.get(from_index..).unwrap_or_default().windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        kwh += model.leg_kwh(load, to.mile_marker - from.mile_marker);
        if to.has_charger() {
            break;
        }
        load = to.load_after_arrival(load);
    }

    kwh
}

/// SoC to charge up to: enough for the next opportunity plus the buffer, capped.
pub fn charge_target_soc(needed_soc: f64, buffer_soc: f64, cap_soc: f64) -> f64 {
    (needed_soc + buffer_soc).min(cap_soc)
}

/// Output of one pass over the node list.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    pub legs: Vec<LegTrace>,
    pub feasible: bool,
    /// SoC fraction at the destination.
    pub arrival_soc: f64,
    pub energy_required_kwh: f64,
    pub charge_time_mins: u32,
    pub unload_time_mins: u32,
    pub stops: u32,
    pub no_charge_needed: bool,
}

impl Simulation {
    pub fn arrival_soc_percent(&self) -> f64 {
        round2(self.arrival_soc * 100.0)
    }

    pub fn total_stop_time_mins(&self) -> u32 {
        self.charge_time_mins + self.unload_time_mins
    }
}

/// Walks a route's nodes for one truck.
///
/// Holds only shared, read-only inputs, so one simulator can be run at many
/// starting SoCs.
#[derive(Debug, Clone, Copy)]
pub struct LegSimulator<'a> {
    nodes: &'a [Node],
    model: &'a EnergyModel,
    capacity_kwh: f64,
    options: &'a SolveOptions,
}

impl<'a> LegSimulator<'a> {
    /// `capacity_kwh` is the effective capacity and must be positive.
    pub fn new(nodes: &'a [Node], model: &'a EnergyModel, capacity_kwh: f64, options: &'a SolveOptions) -> Self {
        debug_assert!(capacity_kwh > 0.0);
        Self {
            nodes,
            model,
            capacity_kwh,
            options,
        }
    }

    pub fn capacity_kwh(&self) -> f64 {
        self.capacity_kwh
    }

    pub fn options(&self) -> &SolveOptions {
        self.options
    }

    /// Simulate the whole route from `start_soc` (fraction) with `start_load_lbs`.
    ///
    /// Infeasibility does not stop the walk; every leg is traced.
    pub fn run(&self, start_soc: f64, start_load_lbs: f64) -> Simulation {
        let opts = self.options;
        let mut soc = start_soc.clamp(0.0, 1.0);
        let mut load = start_load_lbs.max(0.0);

        let mut legs = Vec::with_capacity(self.nodes.len().saturating_sub(1));
        let mut feasible = true;
        let mut energy_required_kwh = 0.0;
        let mut charge_time_mins = 0;
        let mut unload_time_mins = 0;
        let mut stops = 0;
        let mut no_charge_needed = true;

        for (index, pair) in self.nodes.windows(2).enumerate() {
            let (from, to) = (&pair[0], &pair[1]);

            let mut charge_added_kwh = 0.0;
            let mut leg_charge_mins = 0;
            let mut used_charger = false;

            if let Some(rate_kw) = from.charge_rate_kw() {
                let needed_kwh = energy_to_next_opportunity(self.nodes, index, load, self.model);
                let target = charge_target_soc(
                    needed_kwh / self.capacity_kwh,
                    opts.min_buffer_soc,
                    opts.charge_target_cap,
                );
                let deficit = (target - soc).max(0.0);
                if deficit > opts.soc_epsilon {
                    charge_added_kwh = deficit * self.capacity_kwh;
                    leg_charge_mins = charge_minutes(charge_added_kwh, rate_kw);
                    soc += deficit;
                    charge_time_mins += leg_charge_mins;
                    no_charge_needed = false;
                    used_charger = true;
                }
            }

            let distance = to.mile_marker - from.mile_marker;
            let leg_kwh = self.model.leg_kwh(load, distance);
            let leg_soc = leg_kwh / self.capacity_kwh;
            let start_soc = soc;

            if soc - leg_soc < opts.min_buffer_soc - opts.soc_epsilon {
                feasible = false;
            }
            soc = (soc - leg_soc).max(0.0);
            energy_required_kwh += leg_kwh;

            let start_load = load;
            let (unload_lbs, pickup_lbs) = match to.kind {
                NodeKind::Stop {
                    unload_lbs,
                    pickup_lbs,
                    ..
                } => {
                    load = to.load_after_arrival(load);
                    unload_time_mins += opts.stop_dwell_mins;
                    stops += 1;
                    (unload_lbs, pickup_lbs)
                }
                _ => (0.0, 0.0),
            };

            legs.push(LegTrace {
                leg_number: index as u32 + 1,
                from_mile: round2(from.mile_marker),
                to_mile: round2(to.mile_marker),
                distance_miles: round2(distance),
                start_soc: round2(start_soc * 100.0),
                end_soc: round2(soc * 100.0),
                start_load_lbs: round2(start_load),
                end_load_lbs: round2(load),
                unload_lbs: round2(unload_lbs),
                pickup_lbs: round2(pickup_lbs),
                charge_added_kwh: round2(charge_added_kwh),
                charge_time_mins: leg_charge_mins,
                used_charger,
            });
        }

        Simulation {
            legs,
            feasible,
            arrival_soc: soc,
            energy_required_kwh,
            charge_time_mins,
            unload_time_mins,
            stops,
            no_charge_needed,
        }
    }
}
