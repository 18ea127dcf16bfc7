//! Map validation: structural errors and soft inconsistencies as data.
//!
//! Validation never mutates the map, never short-circuits, and never fails;
//! every finding is accumulated into an ordered [`ValidationReport`]. The
//! editor allows invalid intermediate states, so validation is the single
//! source of truth for "is this map correct", decoupled from whether any
//! individual edit was allowed to happen.

mod checks;
mod validator;

pub use validator::validate_map;
