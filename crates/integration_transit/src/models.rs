//! Transit data models
//!
//! Typed representations of MBTA stops as returned by the `/stops` endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Wheelchair boarding support as reported by the MBTA (`wheelchair_boarding`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum WheelchairBoarding {
    /// `0` - no information available
    #[default]
    NoInformation,
    /// `1` - accessible
    Accessible,
    /// `2` - inaccessible
    Inaccessible,
    /// Any code outside the documented range
    Unrecognized(i64),
}

impl WheelchairBoarding {
    /// Only an explicit "accessible" code counts as accessible
    #[must_use]
    pub const fn is_accessible(self) -> bool {
        matches!(self, Self::Accessible)
    }
}

impl From<i64> for WheelchairBoarding {
    fn from(code: i64) -> Self {
        match code {
            0 => Self::NoInformation,
            1 => Self::Accessible,
            2 => Self::Inaccessible,
            other => Self::Unrecognized(other),
        }
    }
}

impl From<WheelchairBoarding> for i64 {
    fn from(value: WheelchairBoarding) -> Self {
        match value {
            WheelchairBoarding::NoInformation => 0,
            WheelchairBoarding::Accessible => 1,
            WheelchairBoarding::Inaccessible => 2,
            WheelchairBoarding::Unrecognized(code) => code,
        }
    }
}

impl fmt::Display for WheelchairBoarding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoInformation => write!(f, "no information"),
            Self::Accessible => write!(f, "accessible"),
            Self::Inaccessible => write!(f, "inaccessible"),
            Self::Unrecognized(code) => write!(f, "unrecognized code {code}"),
        }
    }
}

/// A transit stop (station, platform, bus stop)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stop {
    /// Unique stop identifier (e.g., "place-pktrm")
    pub id: String,
    /// Human-readable stop name
    pub name: String,
    /// Latitude coordinate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude coordinate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Wheelchair boarding support
    #[serde(default)]
    pub wheelchair_boarding: WheelchairBoarding,
}

impl Stop {
    /// Whether the stop is known to be wheelchair accessible
    #[must_use]
    pub const fn is_wheelchair_accessible(&self) -> bool {
        self.wheelchair_boarding.is_accessible()
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.wheelchair_boarding)
    }
}
