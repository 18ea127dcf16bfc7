use std::fs;
use std::path::PathBuf;

use railmap_model::GameMap;
use railmap_persistence::{CURRENT_MAP_KEY, MapStorage};

fn temp_storage_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("railmap_storage_{stamp}"));
    dir
}

fn cleanup_dir(dir: &PathBuf) {
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn save_and_load_round_trip() {
    let dir = temp_storage_dir();
    let storage = MapStorage::new(&dir).expect("create storage");

    let map = GameMap::new_untitled();
    let path = storage.save(CURRENT_MAP_KEY, &map).expect("save map");
    assert!(path.exists());

    let loaded = storage.load(CURRENT_MAP_KEY).expect("map should exist");
    assert_eq!(loaded, map);

    cleanup_dir(&dir);
}

#[test]
fn missing_key_loads_nothing() {
    let dir = temp_storage_dir();
    let storage = MapStorage::new(&dir).expect("create storage");

    assert!(storage.load("never-saved").is_none());
    assert!(!storage.exists("never-saved"));

    cleanup_dir(&dir);
}

#[test]
fn corrupt_entry_is_discarded_and_reads_as_absent() {
    let dir = temp_storage_dir();
    let storage = MapStorage::new(&dir).expect("create storage");

    let map = GameMap::new_untitled();
    let path = storage.save(CURRENT_MAP_KEY, &map).expect("save map");
    fs::write(&path, "{ definitely not a map").expect("corrupt the entry");

    assert!(storage.load(CURRENT_MAP_KEY).is_none());
    // the bad file is gone, not retried forever
    assert!(!path.exists());

    cleanup_dir(&dir);
}

#[test]
fn load_or_default_falls_back_to_a_fresh_map() {
    let dir = temp_storage_dir();
    let storage = MapStorage::new(&dir).expect("create storage");

    let map = storage.load_or_default(CURRENT_MAP_KEY);
    assert!(map.id.starts_with("new-map-"));
    assert!(map.rail_network.stations.is_empty());

    cleanup_dir(&dir);
}

#[test]
fn clear_removes_the_entry() {
    let dir = temp_storage_dir();
    let storage = MapStorage::new(&dir).expect("create storage");

    storage
        .save(CURRENT_MAP_KEY, &GameMap::new_untitled())
        .expect("save map");
    assert!(storage.clear(CURRENT_MAP_KEY).expect("clear"));
    assert!(!storage.clear(CURRENT_MAP_KEY).expect("clear again"));
    assert!(storage.load(CURRENT_MAP_KEY).is_none());

    cleanup_dir(&dir);
}
