//! Derived station attributes.
//!
//! A station's services, platform count, and size class can all be computed
//! from the tracks that touch it. The editor may offer to sync these values
//! onto the station after a track change; these functions only compute, the
//! write-back decision stays with the caller and must remain overridable by
//! manual edits.

use railmap_graph::incident_tracks;
use railmap_model::{StationType, Track, TrainSpeedType};

/// The distinct speed types across all tracks incident to the station, in
/// first-seen track order.
pub fn auto_detected_services(station_id: &str, tracks: &[Track]) -> Vec<TrainSpeedType> {
    let mut services = Vec::new();
    for track in incident_tracks(station_id, tracks) {
        if !services.contains(&track.speed_type) {
            services.push(track.speed_type);
        }
    }
    services
}

/// Platforms needed to serve the incident tracks: two per bidirectional
/// track, one otherwise, and never less than one even for an isolated
/// station.
pub fn required_platform_count(station_id: &str, tracks: &[Track]) -> u32 {
    let count: u32 = incident_tracks(station_id, tracks)
        .iter()
        .map(|track| if track.bidirectional { 2 } else { 1 })
        .sum();
    count.max(1)
}

/// Station size class for a platform count: up to 2 platforms is small,
/// 3 through 7 medium, 8 and above large.
pub fn required_station_type(platform_count: u32) -> StationType {
    match platform_count {
        0..=2 => StationType::Small,
        3..=7 => StationType::Medium,
        _ => StationType::Large,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railmap_model::{PowerType, TrackCondition, TrackDirection};

    fn track(id: &str, source: &str, target: &str, speed: TrainSpeedType, bidi: bool) -> Track {
        Track {
            id: id.to_string(),
            source: source.to_string(),
            target: target.to_string(),
            distance_km: 1.0,
            speed_type: speed,
            bidirectional: bidi,
            direction: TrackDirection::Both,
            condition: TrackCondition::Good,
            power_type: PowerType::Electric,
            scenic_value: 0,
            points: None,
            electrified: None,
            visual_style: None,
            admin_metadata: None,
        }
    }

    #[test]
    fn services_are_distinct_speed_types_of_incident_tracks() {
        let tracks = vec![
            track("t1", "a", "b", TrainSpeedType::Local, false),
            track("t2", "b", "a", TrainSpeedType::Local, false),
            track("t3", "a", "c", TrainSpeedType::HighSpeed, true),
            track("t4", "c", "d", TrainSpeedType::Express, false),
        ];
        assert_eq!(
            auto_detected_services("a", &tracks),
            vec![TrainSpeedType::Local, TrainSpeedType::HighSpeed]
        );
    }

    #[test]
    fn isolated_station_has_no_services_and_one_platform() {
        let tracks = vec![track("t1", "b", "c", TrainSpeedType::Local, false)];
        assert!(auto_detected_services("a", &tracks).is_empty());
        assert_eq!(required_platform_count("a", &tracks), 1);
    }

    #[test]
    fn bidirectional_tracks_need_two_platforms() {
        // one bidirectional + one directed incident track
        let tracks = vec![
            track("t1", "a", "b", TrainSpeedType::Local, true),
            track("t2", "c", "a", TrainSpeedType::Express, false),
        ];
        assert_eq!(required_platform_count("a", &tracks), 3);
        assert_eq!(required_station_type(3), StationType::Medium);
    }

    #[test]
    fn station_type_thresholds() {
        assert_eq!(required_station_type(1), StationType::Small);
        assert_eq!(required_station_type(2), StationType::Small);
        assert_eq!(required_station_type(3), StationType::Medium);
        assert_eq!(required_station_type(7), StationType::Medium);
        assert_eq!(required_station_type(8), StationType::Large);
        assert_eq!(required_station_type(20), StationType::Large);
    }
}
