use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use railmap_model::GameMap;
use tracing::warn;

/// The key the editor shell uses for its autosaved working map.
pub const CURRENT_MAP_KEY: &str = "current-map";

/// Directory-backed map storage, one JSON file per key.
#[derive(Debug, Clone)]
pub struct MapStorage {
    base_dir: PathBuf,
}

impl MapStorage {
    /// Open storage at the given directory, creating it if needed.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)
            .with_context(|| format!("Failed to create map storage: {}", base_dir.display()))?;
        Ok(Self { base_dir })
    }

    /// The directory backing this storage.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Persist a map under the given key, replacing any previous entry.
    pub fn save(&self, key: &str, map: &GameMap) -> Result<PathBuf> {
        let path = self.entry_path(key);
        let json = serde_json::to_string_pretty(map)
            .with_context(|| format!("Failed to serialize map for key \"{key}\""))?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write map to {}", path.display()))?;
        Ok(path)
    }

    /// Load the map stored under the given key.
    ///
    /// Any failure reads as "no saved state": a missing entry returns `None`
    /// silently; an unreadable or corrupt entry warns, removes the bad file,
    /// and returns `None` so the caller can fall back to a fresh map.
    pub fn load(&self, key: &str) -> Option<GameMap> {
        let path = self.entry_path(key);
        if !path.exists() {
            return None;
        }
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(error) => {
                warn!("failed to read saved map {}: {error}", path.display());
                return None;
            }
        };
        match serde_json::from_str::<GameMap>(&contents) {
            Ok(map) => Some(map),
            Err(error) => {
                warn!(
                    "discarding corrupt saved map {}: {error}",
                    path.display()
                );
                let _ = fs::remove_file(&path);
                None
            }
        }
    }

    /// Load the map under the key, or fall back to a fresh default map.
    pub fn load_or_default(&self, key: &str) -> GameMap {
        self.load(key).unwrap_or_else(GameMap::new_untitled)
    }

    /// Remove the entry for the given key. Returns whether one existed.
    pub fn clear(&self, key: &str) -> Result<bool> {
        let path = self.entry_path(key);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to clear saved map: {}", path.display()))?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Check whether a map is stored under the given key.
    pub fn exists(&self, key: &str) -> bool {
        self.entry_path(key).exists()
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", normalize_key(key)))
    }
}

/// Normalize a key for use as a filename.
fn normalize_key(key: &str) -> String {
    key.trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_normalize_to_safe_filenames() {
        assert_eq!(normalize_key("current-map"), "current_map");
        assert_eq!(normalize_key(" maps/editor "), "maps_editor");
    }
}
