//! Clock time handling for timetable fields.
//!
//! The interactive surface supplies departure and arrival times as bare
//! HHMM integers (800 for 08:00, 1435 for 14:35). This module wraps them
//! in a validated type so the rest of the code never handles raw encoded
//! integers.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Error returned when a value is not a valid HHMM clock time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time: {reason}")]
pub struct InvalidClockTime {
    reason: &'static str,
}

impl InvalidClockTime {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day in the HHMM numeric encoding used by timetable input.
///
/// # Examples
///
/// ```
/// use train_registry::domain::ClockTime;
///
/// let dep = ClockTime::from_hhmm(845).unwrap();
/// assert_eq!(dep.to_string(), "08:45");
/// assert_eq!(dep.hhmm(), 845);
///
/// // Minutes past 59 are rejected
/// assert!(ClockTime::from_hhmm(875).is_err());
///
/// // So are hours past 23
/// assert!(ClockTime::from_hhmm(2400).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Parse a time from its HHMM integer encoding.
    ///
    /// Accepts values from `0` (midnight) to `2359`; the two low decimal
    /// digits are minutes and must be below 60.
    pub fn from_hhmm(value: u32) -> Result<Self, InvalidClockTime> {
        let hour = value / 100;
        let minute = value % 100;

        if hour > 23 {
            return Err(InvalidClockTime::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(InvalidClockTime::new("minute must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| InvalidClockTime::new("invalid time"))?;

        Ok(Self(time))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the HHMM integer encoding.
    pub fn hhmm(&self) -> u32 {
        self.hour() * 100 + self.minute()
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({self})")
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        assert!(ClockTime::from_hhmm(0).is_ok());
        assert!(ClockTime::from_hhmm(800).is_ok());
        assert!(ClockTime::from_hhmm(1435).is_ok());
        assert!(ClockTime::from_hhmm(2359).is_ok());
    }

    #[test]
    fn reject_invalid_minutes() {
        assert!(ClockTime::from_hhmm(60).is_err());
        assert!(ClockTime::from_hhmm(875).is_err());
        assert!(ClockTime::from_hhmm(1299).is_err());
    }

    #[test]
    fn reject_invalid_hours() {
        assert!(ClockTime::from_hhmm(2400).is_err());
        assert!(ClockTime::from_hhmm(9905).is_err());
    }

    #[test]
    fn components() {
        let t = ClockTime::from_hhmm(915).unwrap();
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 15);
    }

    #[test]
    fn hhmm_roundtrip() {
        let t = ClockTime::from_hhmm(750).unwrap();
        assert_eq!(t.hhmm(), 750);
    }

    #[test]
    fn display_pads_with_zeros() {
        assert_eq!(ClockTime::from_hhmm(5).unwrap().to_string(), "00:05");
        assert_eq!(ClockTime::from_hhmm(800).unwrap().to_string(), "08:00");
        assert_eq!(ClockTime::from_hhmm(2359).unwrap().to_string(), "23:59");
    }

    #[test]
    fn debug() {
        let t = ClockTime::from_hhmm(810).unwrap();
        assert_eq!(format!("{:?}", t), "ClockTime(08:10)");
    }

    #[test]
    fn ordering_follows_time_of_day() {
        let early = ClockTime::from_hhmm(750).unwrap();
        let late = ClockTime::from_hhmm(910).unwrap();
        assert!(early < late);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any in-range hour/minute pair parses and round-trips
        #[test]
        fn valid_roundtrip(hour in 0u32..24, minute in 0u32..60) {
            let encoded = hour * 100 + minute;
            let t = ClockTime::from_hhmm(encoded).unwrap();
            prop_assert_eq!(t.hhmm(), encoded);
            prop_assert_eq!(t.hour(), hour);
            prop_assert_eq!(t.minute(), minute);
        }

        /// Out-of-range minute digits are always rejected
        #[test]
        fn bad_minutes_rejected(hour in 0u32..24, minute in 60u32..100) {
            prop_assert!(ClockTime::from_hhmm(hour * 100 + minute).is_err());
        }

        /// Out-of-range hours are always rejected
        #[test]
        fn bad_hours_rejected(hour in 24u32..100, minute in 0u32..100) {
            prop_assert!(ClockTime::from_hhmm(hour * 100 + minute).is_err());
        }

        /// Display is always five characters, HH:MM
        #[test]
        fn display_shape(hour in 0u32..24, minute in 0u32..60) {
            let t = ClockTime::from_hhmm(hour * 100 + minute).unwrap();
            let s = t.to_string();
            prop_assert_eq!(s.len(), 5);
            prop_assert_eq!(s.as_bytes()[2], b':');
        }
    }
}
