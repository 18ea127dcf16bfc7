use std::collections::HashSet;

use railmap_model::{IssueCategory, Severity, Station, ValidationIssue, ValidationReport};

/// Per-station checks, in station order: duplicate id (error) against a
/// running seen-set, then missing display name (warning).
pub(crate) fn check_stations(stations: &[Station], report: &mut ValidationReport) {
    let mut seen: HashSet<&str> = HashSet::with_capacity(stations.len());

    for station in stations {
        if !seen.insert(station.id.as_str()) {
            report.push(ValidationIssue {
                severity: Severity::Error,
                message: format!("Duplicate station ID: \"{}\"", station.id),
                category: IssueCategory::Station,
                related_id: Some(station.id.clone()),
            });
        }

        if station.name.is_empty() {
            report.push(ValidationIssue {
                severity: Severity::Warning,
                message: "Station is missing a name.".to_string(),
                category: IssueCategory::Station,
                related_id: Some(station.id.clone()),
            });
        }
    }
}
