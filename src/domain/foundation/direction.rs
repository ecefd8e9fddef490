//! Optimization direction of a criterion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Whether smaller or larger raw values are preferred on a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Smaller raw values are better (cost, weight, latency).
    Min,
    /// Larger raw values are better (quality, capacity, speed).
    Max,
}

impl Direction {
    /// Returns the wire token for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Min => "min",
            Direction::Max => "max",
        }
    }

    /// Returns true if smaller raw values are preferred.
    pub fn is_min(&self) -> bool {
        matches!(self, Direction::Min)
    }

    /// Returns true if larger raw values are preferred.
    pub fn is_max(&self) -> bool {
        matches!(self, Direction::Max)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ValidationError;

    /// Parses `min` / `max`, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("min") {
            Ok(Direction::Min)
        } else if token.eq_ignore_ascii_case("max") {
            Ok(Direction::Max)
        } else {
            Err(ValidationError::invalid_format(
                "direction",
                format!("expected 'min' or 'max', got '{}'", s),
            ))
        }
    }
}
