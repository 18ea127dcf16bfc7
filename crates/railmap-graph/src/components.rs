use std::collections::{HashMap, HashSet};

use railmap_model::{Station, Track};

/// Build an undirected adjacency table keyed by station id.
///
/// Tracks referencing a station id that is not in `stations` contribute no
/// edge; dangling references are a validation concern, not a traversal one.
pub fn adjacency<'a>(
    stations: &'a [Station],
    tracks: &'a [Track],
) -> HashMap<&'a str, Vec<&'a str>> {
    let mut adj: HashMap<&str, Vec<&str>> = HashMap::with_capacity(stations.len());
    for station in stations {
        adj.entry(station.id.as_str()).or_default();
    }
    for track in tracks {
        if !adj.contains_key(track.source.as_str()) || !adj.contains_key(track.target.as_str()) {
            continue;
        }
        if let Some(neighbours) = adj.get_mut(track.source.as_str()) {
            neighbours.push(track.target.as_str());
        }
        if let Some(neighbours) = adj.get_mut(track.target.as_str()) {
            neighbours.push(track.source.as_str());
        }
    }
    adj
}

/// Find every maximal connected set of stations, isolated stations included.
///
/// Iterative depth-first traversal from each unvisited station, in input
/// order, so the result is deterministic for a given input ordering. The
/// input is not mutated. Runs in O(V+E).
///
/// An empty station list yields an empty component list.
pub fn connected_components(stations: &[Station], tracks: &[Track]) -> Vec<Vec<Station>> {
    let adj = adjacency(stations, tracks);
    let by_id: HashMap<&str, &Station> = stations.iter().map(|s| (s.id.as_str(), s)).collect();

    let mut visited: HashSet<&str> = HashSet::with_capacity(stations.len());
    let mut components = Vec::new();

    for station in stations {
        if visited.contains(station.id.as_str()) {
            continue;
        }
        let mut component = Vec::new();
        let mut stack = vec![station.id.as_str()];
        visited.insert(station.id.as_str());
        while let Some(id) = stack.pop() {
            if let Some(found) = by_id.get(id) {
                component.push((*found).clone());
            }
            if let Some(neighbours) = adj.get(id) {
                for &neighbour in neighbours {
                    if visited.insert(neighbour) {
                        stack.push(neighbour);
                    }
                }
            }
        }
        components.push(component);
    }

    components
}

/// All tracks touching the given station on either end, in input order.
pub fn incident_tracks<'a>(station_id: &str, tracks: &'a [Track]) -> Vec<&'a Track> {
    tracks.iter().filter(|t| t.touches(station_id)).collect()
}
