use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use railmap_derive::{auto_detected_services, required_platform_count};
use railmap_model::{GameMap, IssueCategory, Severity, TrainSpeedType, ValidationReport};

use crate::commands::MapInfo;

/// Print the validation report as a severity-colored table, or a clean bill
/// of health when there is nothing to report.
pub fn print_report(map: &GameMap, report: &ValidationReport) {
    println!("Map: {} ({})", map.metadata.name, map.id);
    if report.is_empty() {
        println!("No issues found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Category"),
        header_cell("Related"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 1, CellAlignment::Center);

    for issue in &report.issues {
        table.add_row(vec![
            severity_cell(issue.severity),
            Cell::new(category_label(issue.category)),
            Cell::new(issue.related_id.as_deref().unwrap_or("-")),
            Cell::new(&issue.message),
        ]);
    }
    println!("{table}");
    println!(
        "{} error(s), {} warning(s)",
        report.error_count(),
        report.warning_count()
    );
}

/// Print the info summary: entity counts, connectivity, and a per-station
/// table comparing authored attributes with derived ones.
pub fn print_info(info: &MapInfo) {
    let map = &info.map;
    let network = &map.rail_network;
    println!("Map: {} ({})", map.metadata.name, map.id);
    println!("Region: {}", map.metadata.region);
    println!(
        "Stations: {}  Tracks: {}  Sub-networks: {}  Issues: {}",
        network.stations.len(),
        network.tracks.len(),
        info.component_count,
        info.report.issues.len()
    );

    if network.stations.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Station"),
        header_cell("Type"),
        header_cell("Platforms"),
        header_cell("Needed"),
        header_cell("Services"),
        header_cell("Detected"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    for station in &network.stations {
        let needed = required_platform_count(&station.id, &network.tracks);
        let detected = auto_detected_services(&station.id, &network.tracks);
        let needed_cell = if needed > station.platforms {
            Cell::new(needed).fg(Color::Yellow)
        } else {
            Cell::new(needed)
        };
        table.add_row(vec![
            Cell::new(&station.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(station.station_type.as_str()),
            Cell::new(station.platforms),
            needed_cell,
            Cell::new(join_services(&station.services)),
            Cell::new(join_services(&detected)),
        ]);
    }
    println!("{table}");
}

fn join_services(services: &[TrainSpeedType]) -> String {
    if services.is_empty() {
        return "-".to_string();
    }
    services
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
        Severity::Info => Cell::new("INFO").fg(Color::DarkGrey),
    }
}

fn category_label(category: IssueCategory) -> &'static str {
    match category {
        IssueCategory::Station => "station",
        IssueCategory::Track => "track",
        IssueCategory::Network => "network",
        IssueCategory::Metadata => "metadata",
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
