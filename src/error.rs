//! Error types for the feasibility planner.

use thiserror::Error;

/// Failures talking to the fleet store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("fleet service request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("fleet service returned status {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },
}

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("route {0} not found")]
    RouteNotFound(String),

    #[error("route {route_id} is invalid: {reason}")]
    InvalidRouteTopology { route_id: String, reason: String },

    #[error("truck {truck_id} is invalid: {reason}")]
    InvalidTruck { truck_id: String, reason: String },

    /// Effective capacity is zero or negative. Reported as a red verdict, never
    /// returned from a request.
    #[error("truck {truck_id} has no usable battery capacity")]
    DegenerateCapacity { truck_id: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl PlannerError {
    pub(crate) fn invalid_route(route_id: &str, reason: impl Into<String>) -> Self {
        PlannerError::InvalidRouteTopology {
            route_id: route_id.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_truck(truck_id: &str, reason: impl Into<String>) -> Self {
        PlannerError::InvalidTruck {
            truck_id: truck_id.to_string(),
            reason: reason.into(),
        }
    }
}
