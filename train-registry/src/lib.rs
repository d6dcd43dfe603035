//! Train scheduling and tracking system.
//!
//! An in-memory registry of train schedule records: add, look up, cancel,
//! apply operating constraints, and derive travel metrics, driven by an
//! interactive menu shell.

pub mod domain;
pub mod registry;
pub mod shell;
