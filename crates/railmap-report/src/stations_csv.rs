use anyhow::{Context, Result};
use railmap_model::GameMap;

/// Flatten the stations into CSV, one row per station.
///
/// Lossy on purpose: tracks and map-level settings are dropped. Services
/// are joined with `|` so the list survives a spreadsheet column.
pub fn stations_to_csv(map: &GameMap) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record([
            "id",
            "name",
            "type",
            "x",
            "y",
            "importance",
            "platforms",
            "services",
        ])
        .context("Failed to write CSV header")?;

    for station in &map.rail_network.stations {
        let services = station
            .services
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join("|");
        writer
            .write_record([
                station.id.as_str(),
                station.name.as_str(),
                station.station_type.as_str(),
                &station.coordinates.x.to_string(),
                &station.coordinates.y.to_string(),
                &station.importance.to_string(),
                &station.platforms.to_string(),
                &services,
            ])
            .with_context(|| format!("Failed to write CSV row for station {}", station.id))?;
    }

    let bytes = writer.into_inner().context("Failed to flush CSV writer")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use railmap_model::{Coordinates, Station, StationType, TrainSpeedType};

    #[test]
    fn stations_project_to_rows() {
        let mut map = GameMap::new_untitled();
        map.rail_network.stations.push(Station {
            id: "yongsan".to_string(),
            name: "YONGSAN".to_string(),
            station_type: StationType::Large,
            coordinates: Coordinates::new(-100.0, -50.0),
            importance: 100,
            platforms: 8,
            services: vec![
                TrainSpeedType::HighSpeed,
                TrainSpeedType::Express,
                TrainSpeedType::Local,
            ],
        });

        let csv = stations_to_csv(&map).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("id,name,type,x,y,importance,platforms,services")
        );
        assert_eq!(
            lines.next(),
            Some("yongsan,YONGSAN,large,-100,-50,100,8,HIGH_SPEED|EXPRESS|LOCAL")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_map_is_header_only() {
        let csv = stations_to_csv(&GameMap::new_untitled()).unwrap();
        assert_eq!(csv.trim_end(), "id,name,type,x,y,importance,platforms,services");
    }
}
