//! Table rendering for the interactive shell.
//!
//! Mirrors the bordered text tables the registry's results are shown in.
//! The builders return `String`s so they stay testable.

use crate::registry::{RouteReport, TrainRegistry};

/// Renders the whole schedule as a bordered table, newest train first.
pub fn schedule_table(registry: &TrainRegistry) -> String {
    let rule = format!("{}\n", "-".repeat(96));

    let mut out = String::new();
    out.push_str("Train Schedule:\n");
    out.push_str(&rule);
    out.push_str(&format!(
        "| {:<4} | {:<24} | {:<12} | {:<12} | {:>13} | {:>12} |\n",
        "ID", "Name", "Source", "Destination", "Distance (km)", "Speed (km/h)",
    ));
    out.push_str(&rule);

    for record in registry.iter() {
        out.push_str(&format!(
            "| {:<4} | {:<24} | {:<12} | {:<12} | {:>13.2} | {:>12.2} |\n",
            record.id,
            record.name,
            record.source,
            record.destination,
            record.distance_km,
            record.speed_kmh,
        ));
    }

    out.push_str(&rule);
    out
}

/// Renders a route breakdown as a bordered table with a total line.
pub fn route_table(report: &RouteReport) -> String {
    let rule = format!("{}\n", "-".repeat(49));

    let mut out = String::new();
    out.push_str("Train Route:\n");
    out.push_str(&rule);
    out.push_str(&format!(
        "| {:<12} | {:>30} |\n",
        "Station", "Time to Next Station (minutes)",
    ));
    out.push_str(&rule);

    for leg in &report.legs {
        out.push_str(&format!(
            "| {:<12} | {:>30} |\n",
            leg.station, leg.minutes_to_next,
        ));
    }

    out.push_str(&rule);
    out.push_str(&format!(
        "Total travel time from {} to {}: {} minutes\n",
        report.source, report.destination, report.total_mins,
    ));
    out
}
