//! Collaborator traits for the feasibility planner.
//!
//! The planner never owns fleet data. Hosts hand it a store that can list
//! trucks and look up a route by identifier.

use crate::error::StoreError;
use crate::model::{Route, Truck};

/// Read-only access to the fleet and its routes.
pub trait FleetStore {
    /// All trucks, unfiltered.
    fn trucks(&self) -> Result<Vec<Truck>, StoreError>;

    /// The route with this identifier, or `None` if the store has no such route.
    fn route(&self, route_id: &str) -> Result<Option<Route>, StoreError>;
}
