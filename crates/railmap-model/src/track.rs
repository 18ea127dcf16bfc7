use serde::{Deserialize, Serialize};

use crate::enums::{PowerType, TrackCondition, TrackDirection, TrainSpeedType};
use crate::station::Coordinates;

/// Per-track rendering overrides. All fields optional; absent means the
/// renderer's defaults apply.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_pattern: Option<Vec<f64>>,
}

/// Free-form administrative notes attached to a track by an editor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminTrackMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
}

/// An edge connecting two stations.
///
/// `source` and `target` reference stations by id, never by object identity,
/// so a map serializes without cycles. The optional `points` sequence is the
/// rendered path; when present its first and last entries are expected to
/// coincide with the endpoint station coordinates (checked by validation at
/// warning level, kept in sync by the store on station moves).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: String,
    pub source: String,
    pub target: String,
    pub distance_km: f64,
    pub speed_type: TrainSpeedType,
    pub bidirectional: bool,
    pub direction: TrackDirection,
    pub condition: TrackCondition,
    pub power_type: PowerType,
    /// Scenic rating on a 0-100 scale.
    pub scenic_value: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<Coordinates>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electrified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_style: Option<VisualStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_metadata: Option<AdminTrackMetadata>,
}

impl Track {
    /// Returns true if this track touches the given station id on either end.
    pub fn touches(&self, station_id: &str) -> bool {
        self.source == station_id || self.target == station_id
    }
}

/// A partial update for a track. `None` fields are left untouched; `points`
/// uses a nested option so `Some(None)` clears an explicit path.
#[derive(Debug, Clone, Default)]
pub struct TrackPatch {
    pub source: Option<String>,
    pub target: Option<String>,
    pub distance_km: Option<f64>,
    pub speed_type: Option<TrainSpeedType>,
    pub bidirectional: Option<bool>,
    pub direction: Option<TrackDirection>,
    pub condition: Option<TrackCondition>,
    pub power_type: Option<PowerType>,
    pub scenic_value: Option<u32>,
    pub points: Option<Option<Vec<Coordinates>>>,
    pub electrified: Option<Option<bool>>,
    pub visual_style: Option<Option<VisualStyle>>,
    pub admin_metadata: Option<Option<AdminTrackMetadata>>,
}

impl Track {
    /// Merge a partial update into this track. The id is never patched.
    pub fn apply(&mut self, patch: TrackPatch) {
        if let Some(source) = patch.source {
            self.source = source;
        }
        if let Some(target) = patch.target {
            self.target = target;
        }
        if let Some(distance_km) = patch.distance_km {
            self.distance_km = distance_km;
        }
        if let Some(speed_type) = patch.speed_type {
            self.speed_type = speed_type;
        }
        if let Some(bidirectional) = patch.bidirectional {
            self.bidirectional = bidirectional;
        }
        if let Some(direction) = patch.direction {
            self.direction = direction;
        }
        if let Some(condition) = patch.condition {
            self.condition = condition;
        }
        if let Some(power_type) = patch.power_type {
            self.power_type = power_type;
        }
        if let Some(scenic_value) = patch.scenic_value {
            self.scenic_value = scenic_value;
        }
        if let Some(points) = patch.points {
            self.points = points;
        }
        if let Some(electrified) = patch.electrified {
            self.electrified = electrified;
        }
        if let Some(visual_style) = patch.visual_style {
            self.visual_style = visual_style;
        }
        if let Some(admin_metadata) = patch.admin_metadata {
            self.admin_metadata = admin_metadata;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> Track {
        Track {
            id: "t-1".to_string(),
            source: "a".to_string(),
            target: "b".to_string(),
            distance_km: 12.5,
            speed_type: TrainSpeedType::Express,
            bidirectional: true,
            direction: TrackDirection::Both,
            condition: TrackCondition::Good,
            power_type: PowerType::Electric,
            scenic_value: 40,
            points: None,
            electrified: Some(true),
            visual_style: None,
            admin_metadata: None,
        }
    }

    #[test]
    fn touches_either_end() {
        let t = track();
        assert!(t.touches("a"));
        assert!(t.touches("b"));
        assert!(!t.touches("c"));
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = serde_json::to_value(track()).unwrap();
        assert_eq!(json["distanceKm"], 12.5);
        assert_eq!(json["speedType"], "EXPRESS");
        assert_eq!(json["powerType"], "electric");
        assert!(json.get("points").is_none());
    }

    #[test]
    fn patch_can_clear_points() {
        let mut t = track();
        t.points = Some(vec![Coordinates::new(0.0, 0.0), Coordinates::new(1.0, 1.0)]);
        t.apply(TrackPatch {
            points: Some(None),
            ..TrackPatch::default()
        });
        assert!(t.points.is_none());
    }
}
