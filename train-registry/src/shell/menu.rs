//! The interactive menu loop.
//!
//! Collects operator input, calls registry operations, and prints their
//! results. All registry errors are recoverable here: they become a
//! message and the menu comes back. Only terminal I/O failures abort.

use std::io;
use std::str::FromStr;

use crate::domain::{ClockTime, ConstraintKind, TrainId, TrainRecord};
use crate::registry::{ConstraintOutcome, TrainRegistry};

use super::dto::ScheduleExport;
use super::{input, render};

const MENU: &str = "
Train Scheduling and Tracking System
 1. Add train
 2. Display schedule
 3. Search train by ID
 4. Search train by destination
 5. Apply constraint to a train
 6. Calculate travel time
 7. Track train route
 8. Set direct service timings
 9. Export schedule as JSON
 0. Exit";

/// Runs the menu loop until the operator exits or input closes.
pub fn run(registry: &mut TrainRegistry) -> io::Result<()> {
    loop {
        println!("{MENU}");
        let choice = match input::prompt_line("Enter your choice: ") {
            Ok(choice) => choice,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                println!("Exiting.");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        match choice.as_str() {
            "1" => add_train(registry)?,
            "2" => print!("{}", render::schedule_table(registry)),
            "3" => search_by_id(registry)?,
            "4" => search_by_destination(registry)?,
            "5" => apply_constraint(registry)?,
            "6" => travel_time(registry)?,
            "7" => track_route(registry)?,
            "8" => set_direct_service(registry)?,
            "9" => export_json(registry),
            "0" => {
                println!("Exiting.");
                return Ok(());
            }
            other => println!("Invalid choice: {other:?}. Please try again."),
        }
    }
}

/// Prompts until the line parses as the requested number type.
fn read_number<T: FromStr>(label: &str) -> io::Result<T> {
    loop {
        let line = input::prompt_line(label)?;
        match line.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Not a number: {line:?}. Try again."),
        }
    }
}

fn read_train_id(label: &str) -> io::Result<TrainId> {
    Ok(TrainId(read_number(label)?))
}

/// Prompts until the line parses as a minute list of the required length.
fn read_minutes(label: &str, required_len: usize) -> io::Result<Vec<u32>> {
    loop {
        let line = input::prompt_line(label)?;
        match input::parse_minute_list(&line) {
            Ok(values) if values.len() == required_len => return Ok(values),
            Ok(values) => {
                println!("Expected {required_len} values, got {}.", values.len());
            }
            Err(e) => println!("{e}"),
        }
    }
}

/// Prompts until the line parses as a clock-time list; blank means none.
fn read_clock_times(label: &str) -> io::Result<Vec<ClockTime>> {
    loop {
        let line = input::prompt_line(label)?;
        match input::parse_clock_list(&line) {
            Ok(values) => return Ok(values),
            Err(e) => println!("{e}"),
        }
    }
}

fn add_train(registry: &mut TrainRegistry) -> io::Result<()> {
    let id = read_train_id("Train ID: ")?;
    let name = input::prompt_line("Train name: ")?;
    let source = input::prompt_line("Source: ")?;
    let destination = input::prompt_line("Destination: ")?;
    let distance_km: f64 = read_number("Distance (km): ")?;
    let speed_kmh: f64 = read_number("Speed (km/h): ")?;

    let stations =
        input::parse_station_list(&input::prompt_line("Station names (space-separated): ")?);
    let station_times_mins = read_minutes(
        "Minutes to next station, one per station (space-separated): ",
        stations.len(),
    )?;
    let departure_times =
        read_clock_times("Departure times (HHMM, space-separated, blank for none): ")?;
    let arrival_times =
        read_clock_times("Arrival times (HHMM, space-separated, blank for none): ")?;

    let mut record = TrainRecord::new(id, name, source, destination, distance_km, speed_kmh);
    record.stations = stations;
    record.station_times_mins = station_times_mins;
    record.departure_times = departure_times;
    record.arrival_times = arrival_times;

    registry.add(record);
    println!("Train {id} added.");
    Ok(())
}

fn search_by_id(registry: &TrainRegistry) -> io::Result<()> {
    let id = read_train_id("Train ID to search: ")?;
    match registry.find_by_id(id) {
        Some(record) => println!("Train found: {}", record.name),
        None => println!("Train not found."),
    }
    Ok(())
}

fn search_by_destination(registry: &TrainRegistry) -> io::Result<()> {
    let destination = input::prompt_line("Destination to search: ")?;
    match registry.find_by_destination(&destination) {
        Some(record) => println!("Train found: {}", record.name),
        None => println!("Train not found."),
    }
    Ok(())
}

fn apply_constraint(registry: &mut TrainRegistry) -> io::Result<()> {
    let id = read_train_id("Train ID to handle constraints: ")?;

    println!("Select the constraint type:");
    println!(" 1. Climate Change");
    println!(" 2. Track Error");
    let choice = input::prompt_line("Enter your choice: ")?;

    // Numbered choice, or the constraint's name in any case
    let kind = match choice.as_str() {
        "1" => ConstraintKind::ClimateChange,
        "2" => ConstraintKind::TrackError,
        other => match ConstraintKind::parse(other) {
            Ok(kind) => kind,
            Err(e) => {
                println!("{e}");
                return Ok(());
            }
        },
    };

    match registry.apply_constraint(id, kind) {
        Ok(ConstraintOutcome::SpeedReduced { original, updated }) => {
            println!("Climate Change constraint applied.");
            println!("Original speed: {original} km/h");
            println!("Updated speed: {updated} km/h");
        }
        Ok(ConstraintOutcome::Cancelled(record)) => {
            println!(
                "Train {} has been cancelled due to a track error.",
                record.name
            );
        }
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn travel_time(registry: &TrainRegistry) -> io::Result<()> {
    let id = read_train_id("Train ID to calculate travel time: ")?;
    match registry.travel_time_hours(id) {
        Ok(hours) => println!("Estimated travel time: {hours} hours"),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn track_route(registry: &TrainRegistry) -> io::Result<()> {
    let id = read_train_id("Train ID to track route: ")?;
    match registry.track_route(id) {
        Ok(report) => print!("{}", render::route_table(&report)),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn set_direct_service(registry: &mut TrainRegistry) -> io::Result<()> {
    let id = read_train_id("Train ID to mark as direct service: ")?;
    match registry.set_no_middle_stations(id) {
        Ok(()) => println!("Time to next station and time to destination set to 2 hours."),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn export_json(registry: &TrainRegistry) {
    match serde_json::to_string_pretty(&ScheduleExport::from_registry(registry)) {
        Ok(json) => println!("{json}"),
        Err(e) => println!("JSON export failed: {e}"),
    }
}
