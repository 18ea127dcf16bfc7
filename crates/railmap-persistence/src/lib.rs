//! Local map persistence.
//!
//! A [`MapStorage`] keeps one JSON file per string key under a base
//! directory, standing in for the browser's string-keyed local store. The
//! current map is the unit of persistence and is written verbatim in its
//! wire form. Reading back is deliberately forgiving: a missing, unreadable,
//! or corrupt entry means "no saved state", never a fatal error, and corrupt
//! entries are removed so they cannot wedge the editor on every start.

mod storage;

pub use storage::{CURRENT_MAP_KEY, MapStorage};
