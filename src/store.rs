//! In-memory fleet store.

use crate::error::StoreError;
use crate::model::{Route, Truck};
use crate::traits::FleetStore;

/// Fixed trucks and routes held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFleet {
    trucks: Vec<Truck>,
    routes: Vec<Route>,
}

impl InMemoryFleet {
    pub fn new(trucks: Vec<Truck>, routes: Vec<Route>) -> Self {
        Self { trucks, routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl FleetStore for InMemoryFleet {
    fn trucks(&self) -> Result<Vec<Truck>, StoreError> {
        Ok(self.trucks.clone())
    }

    fn route(&self, route_id: &str) -> Result<Option<Route>, StoreError> {
        Ok(self.routes.iter().find(|route| route.id == route_id).cloned())
    }
}
