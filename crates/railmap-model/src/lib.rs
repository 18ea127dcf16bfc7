pub mod enums;
pub mod map;
pub mod report;
pub mod station;
pub mod track;

pub use enums::{PowerType, StationType, TrackCondition, TrackDirection, TrainSpeedType};
pub use map::{
    AdminSettings, AdminSettingsPatch, BackgroundMetadata, CameraBounds, CameraConstraints,
    EditHistoryEntry, EditObjectType, EditOperation, GameMap, GameSettings, GameSettingsPatch,
    GridSnap, LayerVisibility, MapBackground, MapMetadata, MetadataPatch, RailNetwork,
    ThemeSettings,
};
pub use report::{IssueCategory, Severity, ValidationIssue, ValidationReport};
pub use station::{Coordinates, Station, StationPatch};
pub use track::{AdminTrackMetadata, Track, TrackPatch, VisualStyle};
