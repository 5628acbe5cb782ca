//! Envelope decoding.
//!
//! [`decode`] walks an envelope recursively and produces the matching
//! [`Value`]. It is total over the fixed tag set; anything else fails with
//! [`VegabchError::Decode`]. A failed decode has no side effects.

use chrono::DateTime;
use serde_json::Value as JsonValue;

use crate::error::{RemoteException, RemoteProtocolError, Result, VegabchError};
use crate::value::{Object, Value};

use super::envelope::*;

/// Decode a wire envelope into a [`Value`].
///
/// Nested envelopes inside `object` and `array` payloads are decoded
/// recursively; object key order is preserved. The `exception` payload's
/// `payload` field is deliberately *not* recursive: it is carried as raw
/// JSON, mirroring how the daemon emits it.
///
/// # Errors
///
/// Returns [`VegabchError::Decode`] for an unknown tag or a payload whose
/// shape does not match its tag (malformed hex, malformed decimal string,
/// wrong JSON type).
///
/// # Example
///
/// ```
/// use vegabch_protocol::wire::{decode, Envelope};
/// use vegabch_protocol::value::Value;
/// use serde_json::json;
///
/// let envelope = Envelope::new("bigint", json!("42"));
/// assert_eq!(decode(&envelope).unwrap(), Value::Int(42));
/// ```
pub fn decode(envelope: &Envelope) -> Result<Value> {
    decode_tagged(&envelope.kind, &envelope.payload)
}

fn decode_tagged(kind: &str, payload: &JsonValue) -> Result<Value> {
    match kind {
        TAG_NUMBER => decode_number(payload),
        TAG_STRING => match payload.as_str() {
            Some(s) => Ok(Value::String(s.to_owned())),
            None => Err(malformed(kind, "expected a string payload")),
        },
        TAG_BOOLEAN => match payload.as_bool() {
            Some(b) => Ok(Value::Bool(b)),
            None => Err(malformed(kind, "expected a boolean payload")),
        },
        TAG_OBJECT => {
            let map = payload
                .as_object()
                .ok_or_else(|| malformed(kind, "expected an object payload"))?;
            let mut object = Object::new();
            for (key, nested) in map {
                object.set(key.clone(), decode_nested(nested)?);
            }
            Ok(Value::Object(object))
        }
        TAG_ARRAY => {
            let items = payload
                .as_array()
                .ok_or_else(|| malformed(kind, "expected an array payload"))?;
            let decoded = items
                .iter()
                .map(decode_nested)
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Array(decoded))
        }
        TAG_DATE => decode_date(payload),
        TAG_BIGINT => {
            let digits = payload
                .as_str()
                .ok_or_else(|| malformed(kind, "expected a decimal string payload"))?;
            digits
                .parse::<i128>()
                .map(Value::Int)
                .map_err(|_| malformed(kind, &format!("'{}' is not a decimal integer", digits)))
        }
        TAG_UINT8ARRAY => {
            let hex_str = payload
                .as_str()
                .ok_or_else(|| malformed(kind, "expected a hex string payload"))?;
            hex::decode(hex_str)
                .map(Value::Bytes)
                .map_err(|e| malformed(kind, &format!("'{}' is not valid hex: {}", hex_str, e)))
        }
        TAG_NULL | TAG_UNDEFINED => Ok(Value::Null),
        TAG_EXCEPTION => {
            let map = payload
                .as_object()
                .ok_or_else(|| malformed(kind, "expected an object payload"))?;
            let name = required_string(map, "name", kind)?;
            let message = required_string(map, "message", kind)?;
            let payload = map.get("payload").cloned().unwrap_or(JsonValue::Null);
            Ok(Value::Exception(RemoteException::new(name, message, payload)))
        }
        TAG_ERROR => {
            let map = payload
                .as_object()
                .ok_or_else(|| malformed(kind, "expected an object payload"))?;
            let message = required_string(map, "message", kind)?;
            Ok(Value::Fault(RemoteProtocolError::new(message)))
        }
        other => Err(VegabchError::Decode(format!("unknown tag '{}'", other))),
    }
}

/// Decode a nested envelope inside an `object` or `array` payload.
fn decode_nested(json: &JsonValue) -> Result<Value> {
    let map = json
        .as_object()
        .ok_or_else(|| VegabchError::Decode("nested envelope must be a JSON object".into()))?;
    let kind = map
        .get("type")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| VegabchError::Decode("nested envelope is missing a 'type' tag".into()))?;
    match map.get("payload") {
        Some(payload) => decode_tagged(kind, payload),
        None => decode_tagged(kind, &JsonValue::Null),
    }
}

// Number payloads arrive both as JSON numbers and in stringified form;
// both shapes must decode.
fn decode_number(payload: &JsonValue) -> Result<Value> {
    match payload {
        JsonValue::Number(n) => n
            .as_f64()
            .map(Value::Float)
            .ok_or_else(|| malformed(TAG_NUMBER, "payload is out of range")),
        JsonValue::String(s) => s
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| malformed(TAG_NUMBER, &format!("'{}' is not a number", s))),
        _ => Err(malformed(TAG_NUMBER, "expected a number or numeric string")),
    }
}

fn decode_date(payload: &JsonValue) -> Result<Value> {
    let millis = match payload {
        JsonValue::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    }
    .ok_or_else(|| malformed(TAG_DATE, "expected epoch milliseconds as a number"))?;
    DateTime::from_timestamp_millis(millis)
        .map(Value::Date)
        .ok_or_else(|| malformed(TAG_DATE, &format!("{} ms is out of range", millis)))
}

fn required_string(
    map: &serde_json::Map<String, JsonValue>,
    field: &str,
    kind: &str,
) -> Result<String> {
    map.get(field)
        .and_then(JsonValue::as_str)
        .map(str::to_owned)
        .ok_or_else(|| malformed(kind, &format!("missing string field '{}'", field)))
}

fn malformed(kind: &str, detail: &str) -> VegabchError {
    VegabchError::Decode(format!("malformed '{}' envelope: {}", kind, detail))
}
