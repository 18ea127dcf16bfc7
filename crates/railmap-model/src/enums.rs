//! Type-safe enumerations for rail map attributes.
//!
//! These enums mirror the string values used in the persisted map format,
//! so serde renames match the wire form exactly (`"small"`, `"HIGH_SPEED"`,
//! `"north"`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Station size class, affecting rendering and gameplay complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationType {
    Small,
    Medium,
    Large,
}

impl StationType {
    /// Returns the wire value as it appears in map files.
    pub fn as_str(&self) -> &'static str {
        match self {
            StationType::Small => "small",
            StationType::Medium => "medium",
            StationType::Large => "large",
        }
    }
}

impl fmt::Display for StationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small" => Ok(StationType::Small),
            "medium" => Ok(StationType::Medium),
            "large" => Ok(StationType::Large),
            _ => Err(format!("Unknown station type: {s}")),
        }
    }
}

/// Service speed class carried by a track and offered by a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainSpeedType {
    HighSpeed,
    Express,
    Local,
}

impl TrainSpeedType {
    /// Returns the wire value as it appears in map files.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainSpeedType::HighSpeed => "HIGH_SPEED",
            TrainSpeedType::Express => "EXPRESS",
            TrainSpeedType::Local => "LOCAL",
        }
    }
}

impl fmt::Display for TrainSpeedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainSpeedType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "HIGH_SPEED" => Ok(TrainSpeedType::HighSpeed),
            "EXPRESS" => Ok(TrainSpeedType::Express),
            "LOCAL" => Ok(TrainSpeedType::Local),
            _ => Err(format!("Unknown speed type: {s}")),
        }
    }
}

/// Nominal running direction of a track. Cosmetic only: connectivity treats
/// every track as undirected regardless of this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackDirection {
    North,
    South,
    East,
    West,
    Both,
}

impl TrackDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackDirection::North => "north",
            TrackDirection::South => "south",
            TrackDirection::East => "east",
            TrackDirection::West => "west",
            TrackDirection::Both => "both",
        }
    }
}

impl fmt::Display for TrackDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical condition of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackCondition {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl TrackCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackCondition::Excellent => "excellent",
            TrackCondition::Good => "good",
            TrackCondition::Fair => "fair",
            TrackCondition::Poor => "poor",
        }
    }
}

impl fmt::Display for TrackCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Traction power available on a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerType {
    Electric,
    Diesel,
    Hybrid,
}

impl PowerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerType::Electric => "electric",
            PowerType::Diesel => "diesel",
            PowerType::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for PowerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
