use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::station::{Coordinates, Station};
use crate::track::Track;

/// Descriptive map metadata, editable as a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMetadata {
    pub name: String,
    pub region: String,
    pub description: String,
    /// Creation timestamp, RFC 3339.
    pub created: String,
    pub version: String,
    pub seed: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// A partial update for map metadata. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct MetadataPatch {
    pub name: Option<String>,
    pub region: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub seed: Option<u64>,
    pub author: Option<Option<String>>,
    pub tags: Option<Option<Vec<String>>>,
}

impl MapMetadata {
    pub fn apply(&mut self, patch: MetadataPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(region) = patch.region {
            self.region = region;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(version) = patch.version {
            self.version = version;
        }
        if let Some(seed) = patch.seed {
            self.seed = seed;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }
}

/// Upload bookkeeping for a background image.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded: Option<String>,
}

/// A reference image rendered underneath the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapBackground {
    pub image_url: String,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BackgroundMetadata>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_zoom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<CameraBounds>,
}

/// Theme overrides. Style tables are open-ended JSON objects keyed by
/// entity kind, consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_styles: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_styles: Option<BTreeMap<String, serde_json::Value>>,
}

/// Presentation defaults for a map when opened in the game client.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_zoom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_position: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_constraints: Option<CameraConstraints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeSettings>,
}

/// A partial update for game settings.
#[derive(Debug, Clone, Default)]
pub struct GameSettingsPatch {
    pub initial_zoom: Option<Option<f64>>,
    pub center_position: Option<Option<Coordinates>>,
    pub camera_constraints: Option<Option<CameraConstraints>>,
    pub theme: Option<Option<ThemeSettings>>,
}

impl GameSettings {
    pub fn apply(&mut self, patch: GameSettingsPatch) {
        if let Some(initial_zoom) = patch.initial_zoom {
            self.initial_zoom = initial_zoom;
        }
        if let Some(center_position) = patch.center_position {
            self.center_position = center_position;
        }
        if let Some(camera_constraints) = patch.camera_constraints {
            self.camera_constraints = camera_constraints;
        }
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSnap {
    pub enabled: bool,
    pub size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerVisibility {
    pub background: bool,
    pub stations: bool,
    pub tracks: bool,
    pub grid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditOperation {
    Create,
    Update,
    Delete,
    Move,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditObjectType {
    Station,
    Track,
    Background,
    Map,
}

/// One recorded edit. Modeled for round-trip fidelity with maps that carry
/// a history; the store never appends to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditHistoryEntry {
    pub id: String,
    pub timestamp: String,
    pub operation: EditOperation,
    pub object_type: EditObjectType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_state: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_state: Option<serde_json::Value>,
}

/// Editor-side settings stored with the map.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_snap: Option<GridSnap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layers: Option<LayerVisibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_history: Option<Vec<EditHistoryEntry>>,
}

/// A partial update for admin settings.
#[derive(Debug, Clone, Default)]
pub struct AdminSettingsPatch {
    pub grid_snap: Option<Option<GridSnap>>,
    pub layers: Option<Option<LayerVisibility>>,
    pub edit_history: Option<Option<Vec<EditHistoryEntry>>>,
}

impl AdminSettings {
    pub fn apply(&mut self, patch: AdminSettingsPatch) {
        if let Some(grid_snap) = patch.grid_snap {
            self.grid_snap = grid_snap;
        }
        if let Some(layers) = patch.layers {
            self.layers = layers;
        }
        if let Some(edit_history) = patch.edit_history {
            self.edit_history = edit_history;
        }
    }
}

/// The station/track graph itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RailNetwork {
    pub stations: Vec<Station>,
    pub tracks: Vec<Track>,
}

/// Aggregate root owning every station and track by composition.
///
/// A map is created by the default factory or wholesale on load, and mutated
/// only through the store. Entities reference each other by string id, so
/// the whole structure is plainly serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMap {
    pub id: String,
    pub metadata: MapMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<MapBackground>,
    pub rail_network: RailNetwork,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_settings: Option<GameSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_settings: Option<AdminSettings>,
}

impl GameMap {
    /// Create a fresh, empty map with a timestamp-derived id and the
    /// editor's default settings: grid snap on at 50, all layers visible.
    pub fn new_untitled() -> Self {
        let now = Utc::now();
        let millis = now.timestamp_millis();
        Self {
            id: format!("new-map-{millis}"),
            metadata: MapMetadata {
                name: "Untitled Map".to_string(),
                region: "Unknown".to_string(),
                description: "A new rail map created with the editor.".to_string(),
                created: now.to_rfc3339_opts(SecondsFormat::Millis, true),
                version: "1.0".to_string(),
                seed: (millis % 100_000) as u64,
                author: None,
                tags: None,
            },
            background: None,
            rail_network: RailNetwork::default(),
            game_settings: Some(GameSettings {
                initial_zoom: Some(1.0),
                center_position: Some(Coordinates::new(0.0, 0.0)),
                camera_constraints: None,
                theme: None,
            }),
            admin_settings: Some(AdminSettings {
                grid_snap: Some(GridSnap {
                    enabled: true,
                    size: 50.0,
                }),
                layers: Some(LayerVisibility {
                    background: true,
                    stations: true,
                    tracks: true,
                    grid: true,
                }),
                edit_history: None,
            }),
        }
    }

    /// Look up a station by id.
    pub fn station(&self, id: &str) -> Option<&Station> {
        self.rail_network.stations.iter().find(|s| s.id == id)
    }

    /// Look up a track by id.
    pub fn track(&self, id: &str) -> Option<&Track> {
        self.rail_network.tracks.iter().find(|t| t.id == id)
    }
}
