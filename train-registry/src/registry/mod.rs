//! The registry component: record storage and its operations.
//!
//! `TrainRegistry` owns every schedule record and exposes the full
//! operation set: add, search, cancel, constraint application, travel
//! time, and route tracking.

mod config;
mod route;
mod schedule;

pub use config::RegistryConfig;
pub use route::{RouteLeg, RouteReport};
pub use schedule::{ConstraintOutcome, TrainRegistry};
