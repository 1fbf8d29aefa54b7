//! Minimum depot precharge for trucks that cannot complete a route as-is.

use tracing::debug;

use crate::energy::charge_minutes;
use crate::simulate::{LegSimulator, Simulation};

/// Upper bound on bisection steps; a double-precision bracket collapses well
/// before this.
pub const MAX_SEARCH_ITERATIONS: u32 = 64;

/// Depot charging needed before departure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Precharge {
    /// Lowest starting SoC fraction that makes the route feasible.
    pub min_required_soc: f64,
    pub precharge_kwh: f64,
    pub precharge_mins: u32,
}

/// Find the lowest starting SoC in `[actual_soc, 1.0]` that completes the route.
///
/// Returns `None` when even a full battery is infeasible. The search treats
/// feasibility as non-decreasing in starting SoC and stops after
/// `MAX_SEARCH_ITERATIONS` halvings even if the tolerance is never reached. The
/// returned simulation is a fresh run at the resolved SoC.
pub fn resolve_precharge(
    simulator: &LegSimulator<'_>,
    actual_soc: f64,
    start_load_lbs: f64,
) -> Option<(Precharge, Simulation)> {
    let options = simulator.options();

    if !simulator.run(1.0, start_load_lbs).feasible {
        return None;
    }

    let mut low = actual_soc.clamp(0.0, 1.0);
    let mut high = 1.0;
    let mut iterations = 0;
    while high - low > options.precharge_tolerance && iterations < MAX_SEARCH_ITERATIONS {
        let mid = (low + high) / 2.0;
        if simulator.run(mid, start_load_lbs).feasible {
            high = mid;
        } else {
            low = mid;
        }
        iterations += 1;
    }

    let simulation = simulator.run(high, start_load_lbs);

    let precharge_kwh = (high - actual_soc).max(0.0) * simulator.capacity_kwh();
    let precharge = Precharge {
        min_required_soc: high,
        precharge_kwh,
        precharge_mins: charge_minutes(precharge_kwh, options.depot_charge_rate_kw),
    };
    debug!(
        iterations,
        min_required_soc = high,
        precharge_kwh,
        "resolved depot precharge"
    );

    Some((precharge, simulation))
}
