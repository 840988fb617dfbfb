use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Business segments, in canonical reporting order. Established segments
/// carry positive history and project by compound growth; emerging segments
/// have no history and launch inside the forecast horizon.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Segment {
    Automotive,
    Energy,
    Services,
    HumanoidRobotics,
    AutonomousRideHailing,
}

/// How a segment's forecast values are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Compounds at a scenario-specific annual rate.
    Established,
    /// Follows a scenario-specific launch schedule of absolute values.
    Emerging,
}

impl Segment {
    /// All segments in canonical reporting order.
    pub const ALL: [Segment; 5] = [
        Segment::Automotive,
        Segment::Energy,
        Segment::Services,
        Segment::HumanoidRobotics,
        Segment::AutonomousRideHailing,
    ];

    /// The three established segments.
    pub const ESTABLISHED: [Segment; 3] =
        [Segment::Automotive, Segment::Energy, Segment::Services];

    /// The two emerging segments.
    pub const EMERGING: [Segment; 2] =
        [Segment::HumanoidRobotics, Segment::AutonomousRideHailing];

    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Automotive | Segment::Energy | Segment::Services => {
                SegmentKind::Established
            }
            Segment::HumanoidRobotics | Segment::AutonomousRideHailing => {
                SegmentKind::Emerging
            }
        }
    }

    /// Wire name used in URLs and serialized payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Automotive => "automotive",
            Segment::Energy => "energy",
            Segment::Services => "services",
            Segment::HumanoidRobotics => "humanoid-robotics",
            Segment::AutonomousRideHailing => "autonomous-ride-hailing",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Segment {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "automotive" => Ok(Segment::Automotive),
            "energy" => Ok(Segment::Energy),
            "services" => Ok(Segment::Services),
            "humanoid-robotics" => Ok(Segment::HumanoidRobotics),
            "autonomous-ride-hailing" => Ok(Segment::AutonomousRideHailing),
            other => Err(ParseError::UnknownSegment(other.to_string())),
        }
    }
}
