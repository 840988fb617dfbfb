use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geographic regions covered by the dataset, in canonical reporting order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    UnitedStates,
    China,
    Europe,
    AsiaPacific,
    MiddleEast,
    Other,
}

impl Region {
    /// All regions in canonical reporting order.
    pub const ALL: [Region; 6] = [
        Region::UnitedStates,
        Region::China,
        Region::Europe,
        Region::AsiaPacific,
        Region::MiddleEast,
        Region::Other,
    ];

    /// Wire name used in URLs and serialized payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::UnitedStates => "united-states",
            Region::China => "china",
            Region::Europe => "europe",
            Region::AsiaPacific => "asia-pacific",
            Region::MiddleEast => "middle-east",
            Region::Other => "other",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "united-states" => Ok(Region::UnitedStates),
            "china" => Ok(Region::China),
            "europe" => Ok(Region::Europe),
            "asia-pacific" => Ok(Region::AsiaPacific),
            "middle-east" => Ok(Region::MiddleEast),
            "other" => Ok(Region::Other),
            other => Err(ParseError::UnknownRegion(other.to_string())),
        }
    }
}
