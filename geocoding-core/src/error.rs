use thiserror::Error;

/// Errors raised by the explicit decoding paths of [`crate::Location`].
///
/// Plain accessors never return these; they degrade to `None` instead.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Failed to parse geocoding response JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON object for a geocoding result, found {found}")]
    NotAnObject { found: &'static str },

    #[error("Bounding box needs 4 entries [min_lat, max_lat, min_lon, max_lon], found {len}")]
    BoundingBoxTooShort { len: usize },

    #[error("Bounding box entry {index} is not a number")]
    BoundingBoxEntry { index: usize },
}

/// Human-readable JSON type name, used in error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
