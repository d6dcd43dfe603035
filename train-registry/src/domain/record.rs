//! Train schedule record types.
//!
//! A `TrainRecord` holds one scheduled train's data: identity, endpoints,
//! distance and speed, and the per-station timing sequences. Records are
//! plain data; the registry owns them and applies all mutations.

use super::ClockTime;

/// Numeric train identifier.
///
/// Identifiers are NOT guaranteed unique within a registry. When several
/// records share an id, the most recently added one shadows the others in
/// search order.
///
/// # Examples
///
/// ```
/// use train_registry::domain::TrainId;
///
/// let id = TrainId(12);
/// assert_eq!(id.0, 12);
/// assert_eq!(id.to_string(), "12");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrainId(pub u32);

impl std::fmt::Display for TrainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TrainId {
    fn from(value: u32) -> Self {
        TrainId(value)
    }
}

impl From<TrainId> for u32 {
    fn from(value: TrainId) -> Self {
        value.0
    }
}

/// A single scheduled train.
///
/// The four sequence fields describe the route: `stations` and
/// `station_times_mins` must have equal length for route tracking
/// (a collaborator precondition, not enforced on construction).
/// The departure and arrival sequences are informational only.
///
/// A speed of exactly `0.0` marks the record as cancelled.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainRecord {
    /// Train identifier (not necessarily unique)
    pub id: TrainId,
    /// Display name (e.g. "Pune to Panvel Express")
    pub name: String,
    /// Origin station name
    pub source: String,
    /// Destination station name
    pub destination: String,
    /// Route length in kilometres
    pub distance_km: f64,
    /// Operating speed in km/h; `0.0` means cancelled
    pub speed_kmh: f64,
    /// Station names in route order
    pub stations: Vec<String>,
    /// Minutes to the next station, one entry per station
    pub station_times_mins: Vec<u32>,
    /// Scheduled departure time per station
    pub departure_times: Vec<ClockTime>,
    /// Scheduled arrival time per station
    pub arrival_times: Vec<ClockTime>,
}

impl TrainRecord {
    /// Creates a record with the given core fields and empty route
    /// sequences. The caller fills the sequences before registering it.
    pub fn new(
        id: TrainId,
        name: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
        distance_km: f64,
        speed_kmh: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            source: source.into(),
            destination: destination.into(),
            distance_km,
            speed_kmh,
            stations: Vec::new(),
            station_times_mins: Vec::new(),
            departure_times: Vec::new(),
            arrival_times: Vec::new(),
        }
    }

    /// Returns true if the train is cancelled (zero speed).
    pub fn is_cancelled(&self) -> bool {
        self.speed_kmh == 0.0
    }

    /// Marks the train as cancelled by zeroing its speed.
    pub fn cancel(&mut self) {
        self.speed_kmh = 0.0;
    }

    /// Returns the number of stations on the route.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }
}
