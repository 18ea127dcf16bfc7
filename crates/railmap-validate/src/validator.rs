use railmap_model::{GameMap, ValidationReport};
use tracing::debug;

use crate::checks;

/// Validate a map, producing the full ordered list of findings.
///
/// Order is stable and reproducible for identical input: station checks in
/// station order, then track checks in track order, then a single aggregate
/// network check. Checks accumulate; a map with many simultaneous problems
/// reports all of them.
pub fn validate_map(map: &GameMap) -> ValidationReport {
    let mut report = ValidationReport::default();
    let network = &map.rail_network;

    checks::station::check_stations(&network.stations, &mut report);
    checks::track::check_tracks(&network.stations, &network.tracks, &mut report);
    checks::network::check_connectivity(&network.stations, &network.tracks, &mut report);

    debug!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validated map {}",
        map.id
    );
    report
}
