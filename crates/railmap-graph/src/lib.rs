//! Pure graph analysis over stations and tracks.
//!
//! Connectivity treats the network as an undirected graph: every track
//! contributes an edge in both directions no matter what its
//! `bidirectional` or `direction` attributes say. Those are gameplay
//! attributes, not structure.

mod components;

pub use components::{adjacency, connected_components, incident_tracks};
