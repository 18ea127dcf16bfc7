//! The export boundary.
//!
//! A map leaves the editor in one of three shapes: the JSON wire form
//! (lossless, round-trips through the import boundary), a generated
//! TypeScript map module for shipping with the game client, or a flat CSV
//! projection of the stations. The CSV path intentionally drops track data;
//! it feeds spreadsheet review, not re-import.

mod source;
mod stations_csv;

pub use source::to_source_module;
pub use stations_csv::stations_to_csv;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use railmap_model::GameMap;

/// Serialize the map in its JSON wire form, pretty-printed.
pub fn to_json(map: &GameMap) -> Result<String> {
    serde_json::to_string_pretty(map).context("Failed to serialize map")
}

/// Write the JSON wire form to a file.
pub fn write_json(map: &GameMap, path: &Path) -> Result<()> {
    let json = to_json(map)?;
    fs::write(path, json).with_context(|| format!("Failed to write map to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_export_round_trips() {
        let map = GameMap::new_untitled();
        let json = to_json(&map).unwrap();
        let round: GameMap = serde_json::from_str(&json).unwrap();
        assert_eq!(round, map);
    }
}
