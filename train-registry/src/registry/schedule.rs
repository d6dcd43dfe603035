//! The in-memory train registry.
//!
//! Records live in a single ordered collection, stored oldest-first with
//! O(1) insertion at the back; every traversal iterates in reverse, so the
//! newest insertion is always visited first. Ids are not unique, and the
//! newest-first order is what makes "the most recently added record wins"
//! hold for every id-keyed lookup.

use tracing::debug;

use super::{RegistryConfig, RouteLeg, RouteReport};
use crate::domain::{ConstraintKind, RegistryError, TrainId, TrainRecord};

/// Outcome of applying a constraint to a train.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintOutcome {
    /// Speed was reduced in place; both values in km/h.
    SpeedReduced { original: f64, updated: f64 },
    /// The train was cancelled and removed; final record state.
    Cancelled(TrainRecord),
}

/// In-memory collection of train schedule records.
///
/// Owns every record; all mutation goes through the operations below.
/// Lookups scan linearly, newest first, which is plenty for the tens to
/// low thousands of records a single operator works with.
#[derive(Debug, Default)]
pub struct TrainRegistry {
    /// Oldest-first; traversal is always `.iter().rev()`
    records: Vec<TrainRecord>,
    config: RegistryConfig,
}

impl TrainRegistry {
    /// Creates an empty registry with default policy values.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates an empty registry with the given policy values.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            records: Vec::new(),
            config,
        }
    }

    /// Returns the number of registered trains.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no trains are registered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over all records, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &TrainRecord> {
        self.records.iter().rev()
    }

    /// Registers a train as the newest record.
    ///
    /// No uniqueness check: a record whose id is already present shadows
    /// the older ones in search order.
    pub fn add(&mut self, record: TrainRecord) {
        debug!(id = %record.id, name = %record.name, "registering train");
        self.records.push(record);
    }

    /// Finds the newest record with the given id.
    pub fn find_by_id(&self, id: TrainId) -> Option<&TrainRecord> {
        self.iter().find(|r| r.id == id)
    }

    /// Finds the newest record with the given destination (exact match).
    pub fn find_by_destination(&self, destination: &str) -> Option<&TrainRecord> {
        self.iter().find(|r| r.destination == destination)
    }

    /// Cancels the newest record with the given id: zeroes its speed,
    /// removes it from the registry, and returns its final state.
    ///
    /// Not idempotent: once removed, a second call with the same id
    /// reports `NotFound` (unless another record shadowed by the first
    /// shares the id).
    pub fn cancel(&mut self, id: TrainId) -> Result<TrainRecord, RegistryError> {
        let idx = self
            .records
            .iter()
            .rposition(|r| r.id == id)
            .ok_or(RegistryError::NotFound(id))?;

        let mut record = self.records.remove(idx);
        record.cancel();
        debug!(id = %id, name = %record.name, "cancelled train");
        Ok(record)
    }

    /// Applies an operating constraint to the newest record with the
    /// given id.
    ///
    /// A climate-change warning multiplies the speed by the configured
    /// factor. Ids are not unique, so the id-keyed update then writes the
    /// new speed onto every record sharing the id, not just the newest.
    /// A track error cancels the train outright.
    pub fn apply_constraint(
        &mut self,
        id: TrainId,
        kind: ConstraintKind,
    ) -> Result<ConstraintOutcome, RegistryError> {
        match kind {
            ConstraintKind::ClimateChange => {
                let record = self.find_by_id(id).ok_or(RegistryError::NotFound(id))?;
                let original = record.speed_kmh;
                let updated = original * self.config.climate_speed_factor;

                for shadowed in self.records.iter_mut().filter(|r| r.id == id) {
                    shadowed.speed_kmh = updated;
                }

                debug!(id = %id, original, updated, "applied climate-change speed reduction");
                Ok(ConstraintOutcome::SpeedReduced { original, updated })
            }
            ConstraintKind::TrackError => self.cancel(id).map(ConstraintOutcome::Cancelled),
        }
    }

    /// Estimated travel time in hours for the newest record with the
    /// given id: distance divided by speed.
    ///
    /// A cancelled train has zero speed, so its travel time is undefined
    /// and reported as `DivisionByZero` rather than an infinite value.
    pub fn travel_time_hours(&self, id: TrainId) -> Result<f64, RegistryError> {
        let record = self.find_by_id(id).ok_or(RegistryError::NotFound(id))?;
        if record.speed_kmh == 0.0 {
            return Err(RegistryError::DivisionByZero(id));
        }
        Ok(record.distance_km / record.speed_kmh)
    }

    /// Derives the per-station route breakdown for the newest record with
    /// the given id.
    ///
    /// The stored timing value for the last station is ignored; the final
    /// leg into the destination is always charged at the configured
    /// default. The report's total is the sum of the yielded values.
    pub fn track_route(&self, id: TrainId) -> Result<RouteReport, RegistryError> {
        let record = self.find_by_id(id).ok_or(RegistryError::NotFound(id))?;

        if record.stations.len() != record.station_times_mins.len() {
            return Err(RegistryError::InvalidRecordState(
                "station and timing sequences differ in length",
            ));
        }

        let last = record.stations.len().checked_sub(1);
        let mut legs = Vec::with_capacity(record.stations.len());
        let mut total_mins = 0;

        for (i, station) in record.stations.iter().enumerate() {
            let minutes_to_next = if Some(i) == last {
                self.config.final_leg_mins
            } else {
                record.station_times_mins[i]
            };
            total_mins += minutes_to_next;
            legs.push(RouteLeg {
                station: station.clone(),
                minutes_to_next,
            });
        }

        Ok(RouteReport {
            source: record.source.clone(),
            destination: record.destination.clone(),
            legs,
            total_mins,
        })
    }

    /// Marks the newest record with the given id as a direct service:
    /// the first and last timing entries are set to the configured final
    /// leg default, interior entries untouched.
    pub fn set_no_middle_stations(&mut self, id: TrainId) -> Result<(), RegistryError> {
        let final_leg_mins = self.config.final_leg_mins;
        let idx = self
            .records
            .iter()
            .rposition(|r| r.id == id)
            .ok_or(RegistryError::NotFound(id))?;

        let record = &mut self.records[idx];
        let Some(last) = record.station_times_mins.len().checked_sub(1) else {
            return Err(RegistryError::InvalidRecordState(
                "train has no station timing entries",
            ));
        };

        record.station_times_mins[0] = final_leg_mins;
        record.station_times_mins[last] = final_leg_mins;
        debug!(id = %id, "set direct-service timings");
        Ok(())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn record(id: u32, speed_kmh: f64) -> TrainRecord {
        TrainRecord::new(
            TrainId(id),
            format!("Service {id}"),
            "Origin",
            "Destination",
            100.0,
            speed_kmh,
        )
    }

    proptest! {
        /// For any sequence of adds, lookup on an id returns the most
        /// recently added record with that id
        #[test]
        fn find_returns_most_recent(additions in prop::collection::vec((0u32..5, 1.0f64..200.0), 1..20)) {
            let mut registry = TrainRegistry::new();
            for &(id, speed) in &additions {
                registry.add(record(id, speed));
            }

            for id in 0u32..5 {
                let expected = additions.iter().rev().find(|(i, _)| *i == id);
                let found = registry.find_by_id(TrainId(id));
                match expected {
                    Some(&(_, speed)) => prop_assert_eq!(found.unwrap().speed_kmh, speed),
                    None => prop_assert!(found.is_none()),
                }
            }
        }

        /// Cancelling removes exactly one record, the newest with that id
        #[test]
        fn cancel_removes_exactly_one(additions in prop::collection::vec(0u32..5, 1..20), target in 0u32..5) {
            let mut registry = TrainRegistry::new();
            for (pos, &id) in additions.iter().enumerate() {
                registry.add(record(id, 1.0 + pos as f64));
            }

            let before = registry.len();
            // Speeds are unique per insertion position, so the newest
            // record with the target id is identified by its speed
            let newest_speed = additions
                .iter()
                .rposition(|&id| id == target)
                .map(|pos| 1.0 + pos as f64);

            match registry.cancel(TrainId(target)) {
                Ok(cancelled) => {
                    prop_assert_eq!(registry.len(), before - 1);
                    prop_assert!(cancelled.is_cancelled());
                    let removed = newest_speed.expect("cancel succeeded for an absent id");
                    prop_assert!(registry.iter().all(|r| r.speed_kmh != removed));
                }
                Err(RegistryError::NotFound(_)) => {
                    prop_assert!(newest_speed.is_none());
                    prop_assert_eq!(registry.len(), before);
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }

        /// A route's total always equals the sum of its legs, and the
        /// final leg is always charged at the default
        #[test]
        fn route_total_equals_sum(times in prop::collection::vec(0u32..300, 1..10)) {
            let mut registry = TrainRegistry::new();
            let mut r = record(1, 60.0);
            r.stations = (0..times.len()).map(|i| format!("Station {i}")).collect();
            r.station_times_mins = times;
            registry.add(r);

            let report = registry.track_route(TrainId(1)).unwrap();
            let sum: u32 = report.legs.iter().map(|l| l.minutes_to_next).sum();
            prop_assert_eq!(report.total_mins, sum);
            prop_assert_eq!(report.legs.last().unwrap().minutes_to_next, 120);
        }

        /// Climate change scales the newest record's speed and writes the
        /// result onto every record sharing the id
        #[test]
        fn climate_change_propagation(ids in prop::collection::vec(0u32..4, 1..15), target in 0u32..4) {
            let mut registry = TrainRegistry::new();
            for (pos, &id) in ids.iter().enumerate() {
                registry.add(record(id, 10.0 + pos as f64));
            }

            let newest = ids.iter().rposition(|&id| id == target);
            let result = registry.apply_constraint(TrainId(target), ConstraintKind::ClimateChange);

            match newest {
                Some(pos) => {
                    let expected = (10.0 + pos as f64) * 0.8;
                    prop_assert_eq!(
                        result.unwrap(),
                        ConstraintOutcome::SpeedReduced {
                            original: 10.0 + pos as f64,
                            updated: expected,
                        }
                    );
                    for r in registry.iter().filter(|r| r.id == TrainId(target)) {
                        prop_assert_eq!(r.speed_kmh, expected);
                    }
                }
                None => {
                    prop_assert_eq!(result, Err(RegistryError::NotFound(TrainId(target))));
                }
            }
        }
    }
}
