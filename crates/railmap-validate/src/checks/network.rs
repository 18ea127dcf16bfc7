use railmap_graph::connected_components;
use railmap_model::{IssueCategory, Severity, Station, Track, ValidationIssue, ValidationReport};

/// Aggregate connectivity check: one warning naming the component count when
/// the network splits into more than one sub-network.
///
/// A map with zero stations is not "disjointed"; the check is skipped
/// entirely in that case.
pub(crate) fn check_connectivity(
    stations: &[Station],
    tracks: &[Track],
    report: &mut ValidationReport,
) {
    if stations.is_empty() {
        return;
    }
    let components = connected_components(stations, tracks);
    if components.len() > 1 {
        report.push(ValidationIssue {
            severity: Severity::Warning,
            message: format!(
                "The rail network is disjointed, consisting of {} separate sub-networks.",
                components.len()
            ),
            category: IssueCategory::Network,
            related_id: None,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railmap_model::{
        Coordinates, PowerType, StationType, TrackCondition, TrackDirection, TrainSpeedType,
    };

    fn station(id: &str) -> Station {
        Station {
            id: id.to_string(),
            name: id.to_uppercase(),
            station_type: StationType::Small,
            coordinates: Coordinates::new(0.0, 0.0),
            importance: 0,
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

    #[test]
    fn connected_network_is_clean() {
        let stations = vec![station("a"), station("b")];
        let tracks = vec![track("a-b", "a", "b")];
        let mut report = ValidationReport::default();
        check_connectivity(&stations, &tracks, &mut report);
        assert!(report.is_empty());
    }

    #[test]
    fn split_network_warns_with_component_count() {
        let stations = vec![station("a"), station("b"), station("c")];
        let tracks = vec![track("a-b", "a", "b")];
        let mut report = ValidationReport::default();
        check_connectivity(&stations, &tracks, &mut report);
        assert_eq!(report.warning_count(), 1);
        assert!(report.issues[0].message.contains("2 separate sub-networks"));
    }

    #[test]
    fn empty_map_is_not_disjointed() {
        let mut report = ValidationReport::default();
        check_connectivity(&[], &[], &mut report);
        assert!(report.is_empty());
    }
}
