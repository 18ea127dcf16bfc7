use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use railmap_graph::connected_components;
use railmap_ingest::{import_map, parse_map};
use railmap_model::{GameMap, ValidationReport};
use railmap_report::{stations_to_csv, to_json, to_source_module, write_json};
use railmap_validate::validate_map;

use crate::cli::{ExportArgs, ExportFormatArg, InfoArgs, NewArgs, ValidateArgs};

/// A parsed map together with its validation report.
pub struct ValidationOutcome {
    pub map: GameMap,
    pub report: ValidationReport,
}

/// Write a fresh default map to the given path.
pub fn run_new(args: &NewArgs) -> Result<()> {
    let map = GameMap::new_untitled();
    write_json(&map, &args.file)?;
    info!("created {} at {}", map.id, args.file.display());
    Ok(())
}

/// Parse a map file and validate it. Parse and shape failures are hard
/// errors; validation findings are data in the returned outcome.
pub fn run_validate(args: &ValidateArgs) -> Result<ValidationOutcome> {
    let map = read_map_lenient(&args.file)?;
    let report = validate_map(&map);
    Ok(ValidationOutcome { map, report })
}

/// Summary input for the info command.
pub struct MapInfo {
    pub map: GameMap,
    pub report: ValidationReport,
    pub component_count: usize,
}

pub fn run_info(args: &InfoArgs) -> Result<MapInfo> {
    let map = read_map_lenient(&args.file)?;
    let report = validate_map(&map);
    let network = &map.rail_network;
    let component_count = connected_components(&network.stations, &network.tracks).len();
    Ok(MapInfo {
        map,
        report,
        component_count,
    })
}

/// Export a map. Goes through the gated import boundary: a map with
/// validation errors cannot be exported.
pub fn run_export(args: &ExportArgs) -> Result<Option<PathBuf>> {
    let contents = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read map file: {}", args.file.display()))?;
    let imported = import_map(&contents)?;

    let output = match args.format {
        ExportFormatArg::Json => to_json(&imported.map)?,
        ExportFormatArg::Csv => stations_to_csv(&imported.map)?,
        ExportFormatArg::Ts => to_source_module(&imported.map)?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, output)
                .with_context(|| format!("Failed to write export to {}", path.display()))?;
            info!("exported {} to {}", imported.map.id, path.display());
            Ok(Some(path.clone()))
        }
        None => {
            io::stdout()
                .write_all(output.as_bytes())
                .context("Failed to write export to stdout")?;
            Ok(None)
        }
    }
}

/// Read and parse a map without the validation gate, so broken maps can
/// still be reported on.
fn read_map_lenient(file: &Path) -> Result<GameMap> {
    let contents = fs::read_to_string(file)
        .with_context(|| format!("Failed to read map file: {}", file.display()))?;
    let map = parse_map(&contents)?;
    Ok(map)
}
