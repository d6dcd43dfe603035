use tracing_subscriber::EnvFilter;

use train_registry::domain::{ClockTime, TrainId, TrainRecord};
use train_registry::registry::TrainRegistry;
use train_registry::shell;

fn main() {
    // Logs go to stderr so tables on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut registry = TrainRegistry::new();
    registry.add(demo_train());

    println!("Train Scheduling and Tracking System");
    println!("One train is pre-loaded: id 1, Pune to Panvel Express.");

    if let Err(e) = shell::run(&mut registry) {
        eprintln!("Terminal error: {e}");
        std::process::exit(1);
    }
}

/// The pre-loaded demo record: Pune to Panvel with three middle stations.
fn demo_train() -> TrainRecord {
    let mut record = TrainRecord::new(
        TrainId(1),
        "Pune to Panvel Express",
        "Pune",
        "Panvel",
        150.0,
        60.0,
    );
    record.stations = vec![
        "Pune".into(),
        "Station1".into(),
        "Station2".into(),
        "Station3".into(),
        "Panvel".into(),
    ];
    record.station_times_mins = vec![0, 10, 15, 20, 30];
    record.departure_times = clock_times(&[800, 810, 825, 845, 915]);
    record.arrival_times = clock_times(&[750, 805, 820, 840, 910]);
    record
}

fn clock_times(values: &[u32]) -> Vec<ClockTime> {
    values
        .iter()
        .map(|&v| ClockTime::from_hhmm(v).expect("demo timetable literal is valid"))
        .collect()
}
