//! Route topology: depot, stops, chargers and destination as one ordered list.

use crate::error::PlannerError;
use crate::model::Route;

/// What happens at a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeKind {
    Depot,
    Charger {
        rate_kw: f64,
    },
    Stop {
        unload_lbs: f64,
        pickup_lbs: f64,
        charger_kw: Option<f64>,
    },
    Destination,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub mile_marker: f64,
    pub kind: NodeKind,
}

impl Node {
    /// Charge rate if the node offers charging.
    pub fn charge_rate_kw(&self) -> Option<f64> {
        match self.kind {
            NodeKind::Charger { rate_kw } => Some(rate_kw),
            NodeKind::Stop { charger_kw, .. } => charger_kw,
            NodeKind::Depot | NodeKind::Destination => None,
        }
    }

    pub fn has_charger(&self) -> bool {
        self.charge_rate_kw().is_some()
    }

    pub fn is_stop(&self) -> bool {
        matches!(self.kind, NodeKind::Stop { .. })
    }

    /// Cargo after arriving here with `load_lbs` on board. Never negative.
    pub fn load_after_arrival(&self, load_lbs: f64) -> f64 {
        match self.kind {
            NodeKind::Stop {
                unload_lbs,
                pickup_lbs,
                ..
            } => (load_lbs - unload_lbs + pickup_lbs).max(0.0),
            _ => load_lbs,
        }
    }

    /// Ordering among nodes sharing a mile marker: anything with a charger,
    /// then plain stops.
    fn tie_rank(&self) -> u8 {
        match self.kind {
            NodeKind::Depot => 0,
            NodeKind::Charger { .. } | NodeKind::Stop { charger_kw: Some(_), .. } => 1,
            NodeKind::Stop { charger_kw: None, .. } => 2,
            NodeKind::Destination => 3,
        }
    }
}

/// Build the ordered node list for a route.
///
/// The list starts at a depot (mile 0) and ends at the destination (route
/// distance). Waypoints are sorted by mile marker; on equal markers charger
/// nodes (stations and stops with a charger) come before plain stops, and
/// stations precede charging stops from there on input order.
pub fn build_nodes(route: &Route) -> Result<Vec<Node>, PlannerError> {
    validate_route(route)?;

    let mut waypoints = Vec::with_capacity(route.charging_stations.len() + route.stops.len());
    for station in &route.charging_stations {
        waypoints.push(Node {
            mile_marker: station.mile_marker,
            kind: NodeKind::Charger {
                rate_kw: station.charge_rate_kw,
            },
        });
    }
    for stop in &route.stops {
        let charger_kw = if stop.has_charger { stop.charge_rate_kw } else { None };
        waypoints.push(Node {
            mile_marker: stop.mile_marker,
            kind: NodeKind::Stop {
                unload_lbs: stop.unload_lbs,
                pickup_lbs: stop.pickup_lbs,
                charger_kw,
            },
        });
    }

    // Stable sort keeps input order within a (marker, kind) tie.
    waypoints.sort_by(|a, b| {
        a.mile_marker
            .total_cmp(&b.mile_marker)
            .then(a.tie_rank().cmp(&b.tie_rank()))
    });

    let mut nodes = Vec::with_capacity(waypoints.len() + 2);
    nodes.push(Node {
        mile_marker: 0.0,
        kind: NodeKind::Depot,
    });
    nodes.extend(waypoints);
    nodes.push(Node {
        mile_marker: route.distance_miles,
        kind: NodeKind::Destination,
    });

    Ok(nodes)
}

fn validate_route(route: &Route) -> Result<(), PlannerError> {
    let id = route.id.as_str();
    let distance = route.distance_miles;

    if !distance.is_finite() || distance <= 0.0 {
        return Err(PlannerError::invalid_route(
            id,
            format!("distance must be positive, got {}", distance),
        ));
    }
    if !route.terrain_multiplier.is_finite() || route.terrain_multiplier < 1.0 {
        return Err(PlannerError::invalid_route(
            id,
            format!("terrain multiplier must be at least 1, got {}", route.terrain_multiplier),
        ));
    }
    if !route.base_consumption.is_finite() || route.base_consumption < 0.0 {
        return Err(PlannerError::invalid_route(
            id,
            format!("base consumption must be non-negative, got {}", route.base_consumption),
        ));
    }
    if let Some(payload) = route.load_lbs {
        if !payload.is_finite() || payload < 0.0 {
            return Err(PlannerError::invalid_route(
                id,
                format!("mission payload must be non-negative, got {}", payload),
            ));
        }
    }

    let within_route = |marker: f64| marker.is_finite() && marker > 0.0 && marker < distance;

    for station in &route.charging_stations {
        if !within_route(station.mile_marker) {
            return Err(PlannerError::invalid_route(
                id,
                format!("charging station at mile {} is outside (0, {})", station.mile_marker, distance),
            ));
        }
        check_charge_rate(id, station.mile_marker, Some(station.charge_rate_kw))?;
    }

    for stop in &route.stops {
        if !within_route(stop.mile_marker) {
            return Err(PlannerError::invalid_route(
                id,
                format!("stop at mile {} is outside (0, {})", stop.mile_marker, distance),
            ));
        }
        if !(stop.unload_lbs >= 0.0 && stop.pickup_lbs >= 0.0) {
            return Err(PlannerError::invalid_route(
                id,
                format!("stop at mile {} has negative cargo amounts", stop.mile_marker),
            ));
        }
        if stop.has_charger {
            check_charge_rate(id, stop.mile_marker, stop.charge_rate_kw)?;
        }
    }

    Ok(())
}

fn check_charge_rate(route_id: &str, mile_marker: f64, rate_kw: Option<f64>) -> Result<(), PlannerError> {
    match rate_kw {
        Some(rate) if rate.is_finite() && rate > 0.0 => Ok(()),
        _ => Err(PlannerError::invalid_route(
            route_id,
            format!("charger at mile {} needs a positive charge rate", mile_marker),
        )),
    }
}
