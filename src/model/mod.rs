pub mod account_data;
pub mod crypto;
pub mod event;
pub mod message;
pub mod room_event;
pub mod stickers;
pub mod unsigned;

use serde_json::Value as JsonValue;

use crate::error::Error;

pub(crate) fn string_field(
    obj: &JsonValue,
    field: &'static str,
    shape: &'static str,
) -> Result<String, Error> {
    match obj.get(field) {
        Some(JsonValue::String(s)) => Ok(s.clone()),
        Some(_) => Err(Error::mismatch(field, "a string")),
        None => Err(Error::missing(field, shape)),
    }
}

pub(crate) fn u64_field(
    obj: &JsonValue,
    field: &'static str,
    shape: &'static str,
) -> Result<u64, Error> {
    match obj.get(field) {
        Some(v) => v
            .as_u64()
            .ok_or_else(|| Error::mismatch(field, "an unsigned integer")),
        None => Err(Error::missing(field, shape)),
    }
}

/// Reads a string field that some endpoints omit; absence decodes to `""`.
pub(crate) fn optional_string_field(
    obj: &JsonValue,
    field: &'static str,
) -> Result<String, Error> {
    match obj.get(field) {
        Some(JsonValue::String(s)) => Ok(s.clone()),
        Some(_) => Err(Error::mismatch(field, "a string")),
        None => Ok(String::new()),
    }
}
