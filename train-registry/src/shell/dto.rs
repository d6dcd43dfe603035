//! Serializable views of schedule data.
//!
//! Built on demand for the JSON schedule export. Domain types stay
//! serde-free; these views render clock times as display strings.

use serde::Serialize;

use crate::domain::TrainRecord;
use crate::registry::TrainRegistry;

/// A train in the JSON schedule export.
#[derive(Debug, Serialize)]
pub struct TrainExport {
    /// Train identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// Origin station name
    pub source: String,

    /// Destination station name
    pub destination: String,

    /// Route length in kilometres
    pub distance_km: f64,

    /// Operating speed in km/h
    pub speed_kmh: f64,

    /// Whether the train is cancelled (zero speed)
    pub cancelled: bool,

    /// Station names in route order
    pub stations: Vec<String>,

    /// Minutes to the next station, per station
    pub station_times_mins: Vec<u32>,

    /// Departure times as "HH:MM" strings
    pub departure_times: Vec<String>,

    /// Arrival times as "HH:MM" strings
    pub arrival_times: Vec<String>,
}

impl From<&TrainRecord> for TrainExport {
    fn from(record: &TrainRecord) -> Self {
        Self {
            id: record.id.0,
            name: record.name.clone(),
            source: record.source.clone(),
            destination: record.destination.clone(),
            distance_km: record.distance_km,
            speed_kmh: record.speed_kmh,
            cancelled: record.is_cancelled(),
            stations: record.stations.clone(),
            station_times_mins: record.station_times_mins.clone(),
            departure_times: record.departure_times.iter().map(|t| t.to_string()).collect(),
            arrival_times: record.arrival_times.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// The whole schedule, newest first.
#[derive(Debug, Serialize)]
pub struct ScheduleExport {
    /// All registered trains
    pub trains: Vec<TrainExport>,
}

impl ScheduleExport {
    /// Snapshots the registry in traversal order.
    pub fn from_registry(registry: &TrainRegistry) -> Self {
        Self {
            trains: registry.iter().map(TrainExport::from).collect(),
        }
    }
}
