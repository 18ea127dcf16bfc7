use std::collections::{HashMap, HashSet};

use railmap_model::{
    Coordinates, IssueCategory, Severity, Station, Track, ValidationIssue, ValidationReport,
};

/// Per-track checks, in track order: duplicate id, dangling endpoint
/// references, self-loop, and geometry checks on the optional `points`
/// sequence.
pub(crate) fn check_tracks(stations: &[Station], tracks: &[Track], report: &mut ValidationReport) {
    let station_ids: HashSet<&str> = stations.iter().map(|s| s.id.as_str()).collect();
    let station_by_id: HashMap<&str, &Station> =
        stations.iter().map(|s| (s.id.as_str(), s)).collect();
    let mut seen: HashSet<&str> = HashSet::with_capacity(tracks.len());

    for track in tracks {
        if !seen.insert(track.id.as_str()) {
            report.push(track_error(
                track,
                format!("Duplicate track ID: \"{}\"", track.id),
            ));
        }

        if !station_ids.contains(track.source.as_str()) {
            report.push(track_error(
                track,
                format!(
                    "Track \"{}\" references non-existent source station \"{}\"",
                    track.id, track.source
                ),
            ));
        }
        if !station_ids.contains(track.target.as_str()) {
            report.push(track_error(
                track,
                format!(
                    "Track \"{}\" references non-existent target station \"{}\"",
                    track.id, track.target
                ),
            ));
        }

        if track.source == track.target {
            report.push(track_error(
                track,
                format!("Track \"{}\" connects a station to itself.", track.id),
            ));
        }

        if let Some(points) = track.points.as_deref()
            && !points.is_empty()
        {
            check_points(track, points, &station_by_id, report);
        }
    }
}

/// Geometry checks for a non-empty `points` sequence: minimum length,
/// endpoint agreement with the referenced stations (warning per end, only
/// when both endpoints resolve), and per-point finiteness.
fn check_points(
    track: &Track,
    points: &[Coordinates],
    station_by_id: &HashMap<&str, &Station>,
    report: &mut ValidationReport,
) {
    if points.len() < 2 {
        report.push(track_error(
            track,
            format!(
                "Track \"{}\" has points array with fewer than 2 points.",
                track.id
            ),
        ));
    }

    let source = station_by_id.get(track.source.as_str());
    let target = station_by_id.get(track.target.as_str());
    if let (Some(source), Some(target)) = (source, target) {
        let first = points[0];
        let last = points[points.len() - 1];
        if first.x != source.coordinates.x || first.y != source.coordinates.y {
            report.push(ValidationIssue {
                severity: Severity::Warning,
                message: format!(
                    "Track \"{}\" first point does not match source station coordinates.",
                    track.id
                ),
                category: IssueCategory::Track,
                related_id: Some(track.id.clone()),
            });
        }
        if last.x != target.coordinates.x || last.y != target.coordinates.y {
            report.push(ValidationIssue {
                severity: Severity::Warning,
                message: format!(
                    "Track \"{}\" last point does not match target station coordinates.",
                    track.id
                ),
                category: IssueCategory::Track,
                related_id: Some(track.id.clone()),
            });
        }
    }

    for (index, point) in points.iter().enumerate() {
        if !point.is_finite() {
            report.push(track_error(
                track,
                format!(
                    "Track \"{}\" has invalid point at index {index} (not a finite number).",
                    track.id
                ),
            ));
        }
    }
}

fn track_error(track: &Track, message: String) -> ValidationIssue {
    ValidationIssue {
        severity: Severity::Error,
        message,
        category: IssueCategory::Track,
        related_id: Some(track.id.clone()),
    }
}
