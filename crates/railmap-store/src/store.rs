use railmap_model::{
    AdminSettingsPatch, GameMap, GameSettingsPatch, MapBackground, MetadataPatch, Station,
    StationPatch, Track, TrackPatch,
};
use tracing::{debug, warn};

/// Owns the single current [`GameMap`] as authoritative state.
///
/// A store always holds a map: construction starts on the default empty map
/// (or adopts one via [`MapStore::with_map`]), so there is no uninitialized
/// state to guard against. Selection is UI-owned; mutation methods return
/// what changed (added or not, removed track ids) so callers can reset any
/// transient state referring to removed entities. Replacing the map
/// wholesale ([`MapStore::load_map`], [`MapStore::create_new_map`])
/// invalidates every entity id a caller may hold.
#[derive(Debug, Clone)]
pub struct MapStore {
    map: GameMap,
}

impl Default for MapStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MapStore {
    /// Create a store holding a fresh default map.
    pub fn new() -> Self {
        Self {
            map: GameMap::new_untitled(),
        }
    }

    /// Create a store adopting an existing map (typically an import).
    pub fn with_map(map: GameMap) -> Self {
        Self { map }
    }

    /// The current map.
    pub fn map(&self) -> &GameMap {
        &self.map
    }

    /// Look up a station by id.
    pub fn station(&self, id: &str) -> Option<&Station> {
        self.map.station(id)
    }

    /// Look up a track by id.
    pub fn track(&self, id: &str) -> Option<&Track> {
        self.map.track(id)
    }

    /// Replace the current map wholesale. Every previously held entity id
    /// must be considered stale after this call.
    pub fn load_map(&mut self, map: GameMap) {
        debug!("loading map {}", map.id);
        self.map = map;
    }

    /// Replace the current map with a fresh default map.
    pub fn create_new_map(&mut self) {
        self.map = GameMap::new_untitled();
        debug!("created map {}", self.map.id);
    }

    /// Append a station. Returns false (and leaves the map untouched) when a
    /// station with the same id already exists; other invariants are not
    /// checked here, validation is on demand.
    pub fn add_station(&mut self, station: Station) -> bool {
        if self.map.station(&station.id).is_some() {
            warn!("station with ID \"{}\" already exists", station.id);
            return false;
        }
        self.map.rail_network.stations.push(station);
        true
    }

    /// Merge a partial update into the station with the given id. Returns
    /// false when no such station exists. Moving a station rewrites the
    /// endpoint of every incident track path so rendered geometry stays
    /// attached.
    pub fn update_station(&mut self, id: &str, patch: StationPatch) -> bool {
        let moved_to = patch.coordinates;
        let Some(station) = self
            .map
            .rail_network
            .stations
            .iter_mut()
            .find(|s| s.id == id)
        else {
            return false;
        };
        station.apply(patch);
        if moved_to.is_some() {
            self.sync_track_endpoints(id);
        }
        true
    }

    /// Remove a station and every track touching it. Returns the ids of the
    /// cascade-removed tracks, or `None` when the station was not present.
    /// Callers must drop any selection of the station and returned tracks.
    pub fn delete_station(&mut self, id: &str) -> Option<Vec<String>> {
        let stations = &mut self.map.rail_network.stations;
        let before = stations.len();
        stations.retain(|s| s.id != id);
        if stations.len() == before {
            return None;
        }

        let tracks = &mut self.map.rail_network.tracks;
        let removed: Vec<String> = tracks
            .iter()
            .filter(|t| t.touches(id))
            .map(|t| t.id.clone())
            .collect();
        tracks.retain(|t| !t.touches(id));
        if !removed.is_empty() {
            debug!(
                "deleting station \"{id}\" cascaded to {} track(s)",
                removed.len()
            );
        }
        Some(removed)
    }

    /// Append a track. Returns false on id collision. When the track has no
    /// path and both endpoint stations resolve, `points` is populated with
    /// the 2-point straight line between them, the default rendering
    /// geometry.
    pub fn add_track(&mut self, mut track: Track) -> bool {
        if self.map.track(&track.id).is_some() {
            warn!("track with ID \"{}\" already exists", track.id);
            return false;
        }
        if track.points.as_ref().is_none_or(|p| p.is_empty()) {
            let source = self.map.station(&track.source).map(|s| s.coordinates);
            let target = self.map.station(&track.target).map(|s| s.coordinates);
            if let (Some(source), Some(target)) = (source, target) {
                track.points = Some(vec![source, target]);
            }
        }
        self.map.rail_network.tracks.push(track);
        true
    }

    /// Merge a partial update into the track with the given id. Returns
    /// false when no such track exists.
    pub fn update_track(&mut self, id: &str, patch: TrackPatch) -> bool {
        let Some(track) = self.map.rail_network.tracks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        track.apply(patch);
        true
    }

    /// Remove a track by id. Returns false when it was not present. Callers
    /// must drop any selection of the removed id.
    pub fn delete_track(&mut self, id: &str) -> bool {
        let tracks = &mut self.map.rail_network.tracks;
        let before = tracks.len();
        tracks.retain(|t| t.id != id);
        tracks.len() != before
    }

    /// Shallow-merge into the map metadata.
    pub fn update_metadata(&mut self, patch: MetadataPatch) {
        self.map.metadata.apply(patch);
    }

    /// Shallow-merge into the game settings, creating the section if absent.
    pub fn update_game_settings(&mut self, patch: GameSettingsPatch) {
        self.map
            .game_settings
            .get_or_insert_with(Default::default)
            .apply(patch);
    }

    /// Shallow-merge into the admin settings, creating the section if absent.
    pub fn update_admin_settings(&mut self, patch: AdminSettingsPatch) {
        self.map
            .admin_settings
            .get_or_insert_with(Default::default)
            .apply(patch);
    }

    /// Replace or clear the background. Unlike the settings patches this
    /// takes the full replacement value; `None` removes the background.
    pub fn update_background(&mut self, background: Option<MapBackground>) {
        self.map.background = background;
    }

    /// Rewrite the path endpoints of every track incident to `station_id`
    /// to match the station's current coordinates.
    fn sync_track_endpoints(&mut self, station_id: &str) {
        let Some(coordinates) = self.map.station(station_id).map(|s| s.coordinates) else {
            return;
        };
        for track in &mut self.map.rail_network.tracks {
            let Some(points) = track.points.as_mut().filter(|p| !p.is_empty()) else {
                continue;
            };
            if track.source == station_id
                && let Some(first) = points.first_mut()
            {
                *first = coordinates;
            }
            if track.target == station_id
                && let Some(last) = points.last_mut()
            {
                *last = coordinates;
            }
        }
    }
}
