use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Forecast scenarios. `Normal` is the published base case; the other two
/// shift every growth assumption down or up.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Conservative,
    #[default]
    Normal,
    Optimistic,
}

impl Scenario {
    /// All scenarios, from most cautious to most aggressive.
    pub const ALL: [Scenario; 3] = [
        Scenario::Conservative,
        Scenario::Normal,
        Scenario::Optimistic,
    ];

    /// Wire name used in query parameters and serialized payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Conservative => "conservative",
            Scenario::Normal => "normal",
            Scenario::Optimistic => "optimistic",
        }
    }

    /// One-line description served by the assumptions endpoint.
    pub fn description(&self) -> &'static str {
        match self {
            Scenario::Conservative => {
                "Slower adoption: reduced regional growth and delayed emerging launches"
            }
            Scenario::Normal => "Published base case assumptions",
            Scenario::Optimistic => {
                "Accelerated adoption: higher regional growth and earlier emerging launches"
            }
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "conservative" => Ok(Scenario::Conservative),
            "normal" => Ok(Scenario::Normal),
            "optimistic" => Ok(Scenario::Optimistic),
            other => Err(ParseError::UnknownScenario(other.to_string())),
        }
    }
}
