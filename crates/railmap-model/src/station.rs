use serde::{Deserialize, Serialize};

use crate::enums::{StationType, TrainSpeedType};

/// A 2D point in map space.
///
/// Comparisons are exact: the editor snaps coordinates to the grid, so two
/// points either coincide or they do not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true if both members are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A node in the rail graph. Identity is the `id` field; everything else is
/// mutable attribute data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub station_type: StationType,
    pub coordinates: Coordinates,
    /// Relative importance on a 0-100 scale.
    pub importance: u32,
    /// Number of platforms, at least 1.
    pub platforms: u32,
    /// Service classes stopping here. Non-empty, in display order.
    pub services: Vec<TrainSpeedType>,
}

/// A partial update for a station. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct StationPatch {
    pub name: Option<String>,
    pub station_type: Option<StationType>,
    pub coordinates: Option<Coordinates>,
    pub importance: Option<u32>,
    pub platforms: Option<u32>,
    pub services: Option<Vec<TrainSpeedType>>,
}

impl Station {
    /// Merge a partial update into this station. The id is never patched.
    pub fn apply(&mut self, patch: StationPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(station_type) = patch.station_type {
            self.station_type = station_type;
        }
        if let Some(coordinates) = patch.coordinates {
            self.coordinates = coordinates;
        }
        if let Some(importance) = patch.importance {
            self.importance = importance;
        }
        if let Some(platforms) = patch.platforms {
            self.platforms = platforms;
        }
        if let Some(services) = patch.services {
            self.services = services;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station() -> Station {
        Station {
            id: "st-central".to_string(),
            name: "Central".to_string(),
            station_type: StationType::Large,
            coordinates: Coordinates::new(100.0, 250.0),
            importance: 90,
            platforms: 8,
            services: vec![TrainSpeedType::HighSpeed, TrainSpeedType::Local],
        }
    }

    #[test]
    fn patch_leaves_unset_fields_alone() {
        let mut s = station();
        s.apply(StationPatch {
            name: Some("Central Terminus".to_string()),
            ..StationPatch::default()
        });
        assert_eq!(s.name, "Central Terminus");
        assert_eq!(s.platforms, 8);
        assert_eq!(s.id, "st-central");
    }

    #[test]
    fn station_uses_wire_field_names() {
        let json = serde_json::to_value(station()).unwrap();
        assert_eq!(json["type"], "large");
        assert_eq!(json["coordinates"]["x"], 100.0);
        assert_eq!(json["services"][0], "HIGH_SPEED");
    }
}
