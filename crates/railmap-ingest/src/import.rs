use railmap_model::{GameMap, ValidationReport};
use railmap_validate::validate_map;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Why an import was refused.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The input was not parseable as the map format.
    #[error("failed to parse map data: {0}")]
    Parse(String),
    /// Parsed JSON, but not shaped like a map.
    #[error("not a map file: {0}")]
    Shape(String),
    /// A well-formed map with structural validation errors.
    #[error("map failed validation with {} error(s)", .report.error_count())]
    Invalid { report: ValidationReport },
}

/// A successfully admitted map together with its validation findings
/// (warnings and info only; errors reject the import).
#[derive(Debug, Clone)]
pub struct ImportedMap {
    pub map: GameMap,
    pub report: ValidationReport,
}

/// Import a map from raw JSON text.
pub fn import_map(input: &str) -> Result<ImportedMap, ImportError> {
    let value: Value =
        serde_json::from_str(input).map_err(|error| ImportError::Parse(error.to_string()))?;
    import_value(value)
}

/// Import a map from an already-parsed JSON value.
pub fn import_value(value: Value) -> Result<ImportedMap, ImportError> {
    let map = map_from_value(value)?;
    let report = validate_map(&map);
    if report.has_errors() {
        return Err(ImportError::Invalid { report });
    }
    debug!(
        warnings = report.warning_count(),
        "imported map {}", map.id
    );
    Ok(ImportedMap { map, report })
}

/// Parse and shape-admit a map without the validation gate.
///
/// For surfaces that want to show the full report of a broken map rather
/// than refuse it outright (the validation panel, as opposed to import).
pub fn parse_map(input: &str) -> Result<GameMap, ImportError> {
    let value: Value =
        serde_json::from_str(input).map_err(|error| ImportError::Parse(error.to_string()))?;
    map_from_value(value)
}

fn map_from_value(value: Value) -> Result<GameMap, ImportError> {
    check_shape(&value)?;
    serde_json::from_value(value).map_err(|error| ImportError::Parse(error.to_string()))
}

/// The minimal admission test: an object with a string `id`, an object
/// `metadata`, and an object `railNetwork`. Anything failing this is
/// rejected before deserialization is attempted.
fn check_shape(value: &Value) -> Result<(), ImportError> {
    let Some(object) = value.as_object() else {
        return Err(ImportError::Shape("top level is not an object".to_string()));
    };
    if !object.get("id").is_some_and(Value::is_string) {
        return Err(ImportError::Shape("missing string \"id\"".to_string()));
    }
    if !object.get("metadata").is_some_and(Value::is_object) {
        return Err(ImportError::Shape(
            "missing \"metadata\" object".to_string(),
        ));
    }
    if !object.get("railNetwork").is_some_and(Value::is_object) {
        return Err(ImportError::Shape(
            "missing \"railNetwork\" object".to_string(),
        ));
    }
    Ok(())
}
