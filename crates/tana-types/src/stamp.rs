//! Timestamps.
//!
//! Commands in timed mode carry an ISO-8601 date-time string
//! (`2023-01-01T00:00:00`, optionally with fractional seconds). [`Stamp`]
//! wraps `chrono::NaiveDateTime`: chronological total order, `FromStr` from
//! the wire form, and a `Display` that round-trips it.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing a [`Stamp`] from its wire form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StampError {
    /// Not an ISO-8601 date-time.
    #[error("invalid ISO-8601 date-time: {0:?}")]
    Malformed(String),
}

/// An instant on the command timeline.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Stamp(NaiveDateTime);

impl Stamp {
    /// This instant shifted forward by `secs` seconds.
    ///
    /// Returns `None` when the result would leave the representable date
    /// range; callers treat that as "never".
    pub fn checked_plus_seconds(self, secs: i64) -> Option<Stamp> {
        let delta = TimeDelta::try_seconds(secs)?;
        self.0.checked_add_signed(delta).map(Stamp)
    }
}

impl FromStr for Stamp {
    type Err = StampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::from_str(s)
            .map(Stamp)
            .map_err(|_| StampError::Malformed(s.to_string()))
    }
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // %.f prints nothing for whole seconds, so common wire forms
        // round-trip exactly.
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.f"))
    }
}

impl From<NaiveDateTime> for Stamp {
    fn from(dt: NaiveDateTime) -> Self {
        Stamp(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_round_trip() {
        for text in ["2023-01-01T00:00:00", "2023-06-15T12:34:56.500"] {
            let stamp: Stamp = text.parse().unwrap();
            assert_eq!(stamp.to_string(), text);
        }
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(matches!(
            "yesterday".parse::<Stamp>(),
            Err(StampError::Malformed(_))
        ));
        assert!("2023-01-01".parse::<Stamp>().is_err());
    }

    #[test]
    fn test_chronological_order() {
        let early: Stamp = "2023-01-01T00:00:00".parse().unwrap();
        let late: Stamp = "2023-01-01T00:00:01".parse().unwrap();
        assert!(early < late);
    }

    #[test]
    fn test_checked_plus_seconds() {
        let stamp: Stamp = "2023-01-01T00:00:00".parse().unwrap();
        let shifted = stamp.checked_plus_seconds(90).unwrap();
        assert_eq!(shifted.to_string(), "2023-01-01T00:01:30");
    }

    #[test]
    fn test_checked_plus_seconds_overflow() {
        let stamp: Stamp = "2023-01-01T00:00:00".parse().unwrap();
        assert!(stamp.checked_plus_seconds(i64::MAX).is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let stamp: Stamp = "2023-01-01T00:00:00".parse().unwrap();
        let json = serde_json::to_string(&stamp).unwrap();
        let back: Stamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stamp);
    }
}
