//! The mutation engine owning the current map.
//!
//! Editing is permissive: mutations are synchronous, total, and safe to call
//! with already-applied data (deleting a missing id is a no-op, not an
//! error). Validation is on demand and never gates an edit; the one
//! structural guarantee enforced here is that deleting a station also
//! deletes its incident tracks, so dangling references cannot be created by
//! the store itself.

mod store;

pub use store::MapStore;
