//! Interactive shell for the train registry.
//!
//! Presentation glue only: collects operator input, calls registry
//! operations, and renders their results as text. No schedule logic
//! lives here.

mod dto;
mod input;
mod menu;
mod render;

pub use dto::{ScheduleExport, TrainExport};
pub use input::InputError;
pub use menu::run;
