//! Wire-format file sizes.
//!
//! A size travels as a string whose last two characters are a unit suffix
//! and whose remaining prefix is a signed decimal integer: `"10gb"`,
//! `"200kb"`. The suffix is opaque; only the magnitude participates in
//! ordering. This is a field-encoding contract, so the shape is validated
//! once at the boundary and never re-parsed downstream.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing a [`SizeSpec`] from its wire form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SizeSpecError {
    /// Input too short to hold a magnitude and a two-character suffix.
    #[error("size too short for a two-character unit suffix: {0:?}")]
    TooShort(String),

    /// The portion before the suffix is not a decimal integer.
    #[error("size magnitude is not an integer: {0:?}")]
    BadMagnitude(String),
}

/// A file size in wire form: integer magnitude plus two-character unit
/// suffix.
///
/// Kept as the original string for display; the magnitude is parsed once
/// at construction so ordering never re-parses.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SizeSpec {
    raw: String,
    magnitude: i64,
}

impl SizeSpec {
    /// The integer portion, used for descending-size ordering.
    pub fn magnitude(&self) -> i64 {
        self.magnitude
    }

    /// The two-character unit suffix (e.g. `"gb"`).
    pub fn unit(&self) -> &str {
        &self.raw[self.raw.len() - 2..]
    }

    /// The original wire string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for SizeSpec {
    type Err = SizeSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Suffix is defined as the last two characters; anything shorter
        // has no room for a magnitude.
        if s.len() < 3 || !s.is_char_boundary(s.len() - 2) {
            return Err(SizeSpecError::TooShort(s.to_string()));
        }
        let magnitude = s[..s.len() - 2]
            .parse::<i64>()
            .map_err(|_| SizeSpecError::BadMagnitude(s.to_string()))?;
        Ok(Self {
            raw: s.to_string(),
            magnitude,
        })
    }
}

impl TryFrom<String> for SizeSpec {
    type Error = SizeSpecError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SizeSpec> for String {
    fn from(size: SizeSpec) -> String {
        size.raw
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_magnitude() {
        let size: SizeSpec = "10gb".parse().unwrap();
        assert_eq!(size.magnitude(), 10);
        assert_eq!(size.unit(), "gb");
        assert_eq!(size.as_str(), "10gb");
    }

    #[test]
    fn test_negative_magnitude() {
        let size: SizeSpec = "-5mb".parse().unwrap();
        assert_eq!(size.magnitude(), -5);
    }

    #[test]
    fn test_rejects_missing_magnitude() {
        assert!(matches!(
            "gb".parse::<SizeSpec>(),
            Err(SizeSpecError::TooShort(_))
        ));
    }

    #[test]
    fn test_rejects_non_integer_magnitude() {
        assert!(matches!(
            "biggb".parse::<SizeSpec>(),
            Err(SizeSpecError::BadMagnitude(_))
        ));
        assert!(matches!(
            "1.5gb".parse::<SizeSpec>(),
            Err(SizeSpecError::BadMagnitude(_))
        ));
    }

    #[test]
    fn test_display_round_trip() {
        let size: SizeSpec = "200kb".parse().unwrap();
        assert_eq!(size.to_string(), "200kb");
    }

    #[test]
    fn test_serde_round_trip() {
        let size: SizeSpec = "10gb".parse().unwrap();
        let json = serde_json::to_string(&size).unwrap();
        assert_eq!(json, "\"10gb\"");
        let back: SizeSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, size);
    }

    #[test]
    fn test_serde_rejects_malformed() {
        assert!(serde_json::from_str::<SizeSpec>("\"oops\"").is_err());
    }
}
