//! Operating constraint kinds.
//!
//! A constraint names a mutation policy applied to a scheduled train:
//! a climate-change warning slows the train down, a track error cancels
//! it outright. The set is closed; free-text input from the interactive
//! surface is parsed case-insensitively.

use std::fmt;

/// Error returned when a string names no known constraint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid constraint type: {input:?}")]
pub struct InvalidConstraint {
    input: String,
}

/// A named mutation policy applied to a scheduled train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// Speed reduction under a climate-change warning
    ClimateChange,
    /// Track fault: the affected train is cancelled
    TrackError,
}

impl ConstraintKind {
    /// Parse a constraint name, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use train_registry::domain::ConstraintKind;
    ///
    /// assert_eq!(
    ///     ConstraintKind::parse("Climate Change").unwrap(),
    ///     ConstraintKind::ClimateChange,
    /// );
    /// assert_eq!(
    ///     ConstraintKind::parse("TRACK ERROR").unwrap(),
    ///     ConstraintKind::TrackError,
    /// );
    /// assert!(ConstraintKind::parse("monsoon").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, InvalidConstraint> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("climate change") {
            Ok(ConstraintKind::ClimateChange)
        } else if trimmed.eq_ignore_ascii_case("track error") {
            Ok(ConstraintKind::TrackError)
        } else {
            Err(InvalidConstraint {
                input: s.to_string(),
            })
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintKind::ClimateChange => f.write_str("Climate Change"),
            ConstraintKind::TrackError => f.write_str("Track Error"),
        }
    }
}
