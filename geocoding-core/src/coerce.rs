//! Optional-field getters over loosely typed JSON values.
//!
//! Every getter treats a missing key, a JSON `null` and a value of the wrong
//! shape the same way: `None`.

use log::debug;
use serde_json::{Map, Value};

/// Look up `key`, treating `null` as absent.
pub(crate) fn field<'a>(data: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    data.get(key).filter(|v| !v.is_null())
}

/// Coerce a value to a finite float. Accepts JSON numbers and numeric strings.
pub(crate) fn to_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.filter(|f| f.is_finite())
}

/// Coerce a value to an integer. Numbers and numeric strings are treated alike:
/// plain integers pass through, fractional values are truncated towards zero.
pub(crate) fn to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| s.parse::<f64>().ok().and_then(truncate))
        }
        _ => None,
    }
}

fn truncate(f: f64) -> Option<i64> {
    (f.is_finite() && f.abs() < i64::MAX as f64).then(|| f.trunc() as i64)
}

pub(crate) fn float_field(data: &Map<String, Value>, key: &str) -> Option<f64> {
    let value = field(data, key)?;
    let coerced = to_f64(value);
    if coerced.is_none() {
        debug!("field `{key}` is present but not a float: {value}");
    }
    coerced
}

pub(crate) fn int_field(data: &Map<String, Value>, key: &str) -> Option<i64> {
    let value = field(data, key)?;
    let coerced = to_i64(value);
    if coerced.is_none() {
        debug!("field `{key}` is present but not an integer: {value}");
    }
    coerced
}

pub(crate) fn str_field<'a>(data: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    field(data, key)?.as_str()
}

pub(crate) fn map_field<'a>(
    data: &'a Map<String, Value>,
    key: &str,
) -> Option<&'a Map<String, Value>> {
    field(data, key)?.as_object()
}

pub(crate) fn seq_field<'a>(data: &'a Map<String, Value>, key: &str) -> Option<&'a Vec<Value>> {
    field(data, key)?.as_array()
}
