//! Domain types for the train registry.
//!
//! This module contains the core value types: the schedule record itself,
//! validated clock times, the closed set of operating constraints, and the
//! registry error taxonomy.

mod constraint;
mod error;
mod record;
mod time;

pub use constraint::{ConstraintKind, InvalidConstraint};
pub use error::RegistryError;
pub use record::{TrainId, TrainRecord};
pub use time::{ClockTime, InvalidClockTime};
