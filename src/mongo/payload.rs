//! Picking the statistics document out of shell output and pulling
//! typed values from it.
//!
//! Even under `--quiet` the shells interleave connection banners,
//! deprecation warnings and driver chatter with the one serialized
//! document we asked for, so the document is located by scanning stdout
//! line by line with a per-check marker.

use crate::CheckError;
use serde_json::Value;

/// Classifies one line of shell output: payload or chatter.
pub trait Marker {
    fn is_payload(&self, line: &str) -> bool;
}

/// Matches a serialized document by its first field, e.g. `{"db":` for
/// `db.stats()` or `{"host":` for `db.serverStatus()`.
pub struct FirstField {
    field: &'static str,
}

impl FirstField {
    #[must_use]
    pub const fn new(field: &'static str) -> Self {
        Self { field }
    }
}

impl Marker for FirstField {
    fn is_payload(&self, line: &str) -> bool {
        line.strip_prefix("{\"")
            .and_then(|rest| rest.strip_prefix(self.field))
            .is_some_and(|rest| rest.starts_with("\":"))
    }
}

/// Select and decode the statistics document: the first line the marker
/// accepts wins.
///
/// # Errors
///
/// Returns a decode error when no line matches, or when the selected
/// line is not valid JSON.
pub fn extract(stdout: &str, marker: &dyn Marker) -> Result<Value, CheckError> {
    let line = stdout
        .lines()
        .find(|line| marker.is_payload(line))
        .ok_or(CheckError::PayloadMissing)?;

    serde_json::from_str(line).map_err(|source| CheckError::PayloadSyntax { source })
}

/// Pull a string field out of the document by dotted path.
///
/// # Errors
///
/// Returns an extraction error naming the path when the field is missing
/// or not a string.
pub fn string(payload: &Value, field: &'static str) -> Result<String, CheckError> {
    resolve(payload, field)?
        .as_str()
        .map(str::to_owned)
        .ok_or(CheckError::FieldType {
            field,
            expected: "a string",
        })
}

/// Pull a 64-bit counter out of the document by dotted path.
///
/// Accepts both encodings the shells produce for numbers: a plain JSON
/// number (floats truncate toward zero) and the extended-JSON wrapper
/// `{"$numberLong": "123"}`.
///
/// # Errors
///
/// Returns an extraction error naming the path when the field is missing
/// or neither encoding applies.
pub fn long(payload: &Value, field: &'static str) -> Result<i64, CheckError> {
    let value = resolve(payload, field)?;

    coerce_long(value).ok_or(CheckError::FieldType {
        field,
        expected: "a 64-bit integer",
    })
}

fn resolve<'a>(payload: &'a Value, field: &'static str) -> Result<&'a Value, CheckError> {
    field
        .split('.')
        .try_fold(payload, |value, key| value.get(key))
        .ok_or(CheckError::FieldMissing { field })
}

#[allow(clippy::cast_possible_truncation)]
fn coerce_long(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float as i64)),
        Value::Object(wrapper) => wrapper
            .get("$numberLong")?
            .as_str()?
            .parse()
            .ok(),
        _ => None,
    }
}
