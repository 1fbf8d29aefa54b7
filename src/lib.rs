//! freight-feasibility core
//!
//! Simulates electric trucks against a route's terrain, cargo, stops and
//! chargers to decide which trucks can run it and at what charging cost.

pub mod error;
pub mod model;
pub mod traits;
pub mod energy;
pub mod topology;
pub mod simulate;
pub mod precharge;
pub mod solver;
pub mod store;
pub mod fleet_api;

pub use error::{PlannerError, StoreError};
pub use model::{FeasibilityResult, FeasibilityStatus, LegTrace, Route, Truck, TruckStatus};
pub use solver::{feasibility, solve, SolveOptions};
