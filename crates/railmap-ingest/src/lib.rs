//! The import boundary.
//!
//! Arbitrary JSON enters here and either comes out as a validated
//! [`GameMap`] or as a distinct failure value with a human-readable reason.
//! Admission is staged: parse, a minimal shape check (string `id`, object
//! `metadata`, object `railNetwork`), full deserialization, then validation.
//! Structural validation errors reject the import; warnings ride along with
//! the admitted map for the caller to surface.

mod import;

pub use import::{ImportError, ImportedMap, import_map, import_value, parse_map};
