//! Integration tests for map validation.

use railmap_model::{
    Coordinates, GameMap, IssueCategory, PowerType, Severity, Station, StationType, Track,
    TrackCondition, TrackDirection, TrainSpeedType,
};
use railmap_validate::validate_map;

fn station(id: &str, x: f64, y: f64) -> Station {
    Station {
        id: id.to_string(),
        name: id.to_uppercase(),
        station_type: StationType::Small,
        coordinates: Coordinates::new(x, y),
        importance: 10,
        platforms: 1,
        services: vec![TrainSpeedType::Local],
    }
}

fn track(id: &str, source: &str, target: &str) -> Track {
    Track {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        distance_km: 1.0,
        speed_type: TrainSpeedType::Local,
        bidirectional: false,
        direction: TrackDirection::North,
        condition: TrackCondition::Good,
        power_type: PowerType::Diesel,
        scenic_value: 0,
        points: None,
        electrified: None,
        visual_style: None,
        admin_metadata: None,
    }
}

fn map_with(stations: Vec<Station>, tracks: Vec<Track>) -> GameMap {
    let mut map = GameMap::new_untitled();
    map.rail_network.stations = stations;
    map.rail_network.tracks = tracks;
    map
}

#[test]
fn empty_map_is_valid() {
    let report = validate_map(&GameMap::new_untitled());
    assert!(report.is_empty());
}

#[test]
fn disjointed_network_emits_one_network_warning() {
    // stations {a,b,c}, tracks [(a-b)]: components {a,b} and {c}
    let map = map_with(
        vec![
            station("a", 0.0, 0.0),
            station("b", 10.0, 0.0),
            station("c", 50.0, 50.0),
        ],
        vec![track("a-b", "a", "b")],
    );
    let report = validate_map(&map);
    assert_eq!(report.issues.len(), 1);
    let issue = &report.issues[0];
    assert_eq!(issue.severity, Severity::Warning);
    assert_eq!(issue.category, IssueCategory::Network);
    assert!(issue.message.contains("2 separate sub-networks"));
}

#[test]
fn self_loop_is_a_track_error() {
    let map = map_with(vec![station("x", 0.0, 0.0)], vec![track("t-loop", "x", "x")]);
    let report = validate_map(&map);
    assert_eq!(report.error_count(), 1);
    let issue = &report.issues[0];
    assert_eq!(issue.category, IssueCategory::Track);
    assert_eq!(issue.related_id.as_deref(), Some("t-loop"));
}

#[test]
fn duplicate_track_id_is_reported() {
    let map = map_with(
        vec![station("a", 0.0, 0.0), station("b", 10.0, 0.0)],
        vec![track("t1", "a", "b"), track("t1", "b", "a")],
    );
    let report = validate_map(&map);
    assert_eq!(report.error_count(), 1);
    let issue = &report.issues[0];
    assert_eq!(issue.severity, Severity::Error);
    assert!(issue.message.contains("Duplicate track ID: \"t1\""));
    assert_eq!(issue.related_id.as_deref(), Some("t1"));
}

#[test]
fn validation_is_deterministic() {
    let map = map_with(
        vec![
            station("a", 0.0, 0.0),
            station("a", 0.0, 0.0),
            station("c", 5.0, 5.0),
        ],
        vec![
            track("t1", "a", "ghost"),
            track("t1", "c", "c"),
        ],
    );
    let first = validate_map(&map);
    let second = validate_map(&map);
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn findings_keep_check_order() {
    // station findings first, then track findings, then the network check
    let mut broken = station("b", 10.0, 0.0);
    broken.name = String::new();
    let map = map_with(
        vec![station("a", 0.0, 0.0), broken, station("c", 99.0, 99.0)],
        vec![track("t-loop", "a", "a"), track("t2", "a", "ghost")],
    );
    let report = validate_map(&map);

    let rendered: Vec<String> = report
        .issues
        .iter()
        .map(|issue| {
            format!(
                "{} {} {}",
                match issue.severity {
                    Severity::Error => "error",
                    Severity::Warning => "warning",
                    Severity::Info => "info",
                },
                match issue.category {
                    IssueCategory::Station => "station",
                    IssueCategory::Track => "track",
                    IssueCategory::Network => "network",
                    IssueCategory::Metadata => "metadata",
                },
                issue.message
            )
        })
        .collect();
    insta::assert_snapshot!(rendered.join("\n"), @r#"
    warning station Station is missing a name.
    error track Track "t-loop" connects a station to itself.
    error track Track "t2" references non-existent target station "ghost"
    warning network The rail network is disjointed, consisting of 3 separate sub-networks.
    "#);
}
