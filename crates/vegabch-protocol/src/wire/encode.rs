//! Envelope encoding.
//!
//! [`encode`] dispatches on the value's kind and produces the tagged
//! envelope for it. The match arms are laid out in the daemon's dispatch
//! order: sequences before mappings, then byte strings, the two error
//! kinds, and finally the scalar tags. Booleans have their own arm, so an
//! integer can never claim them as `bigint`.

use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::error::{Result, VegabchError};
use crate::value::Value;

use super::envelope::*;

/// Encode a [`Value`] into its wire envelope.
///
/// Array elements and object members are encoded recursively; object members
/// keep the container's key order. An exception's `payload` field is passed
/// through as raw JSON without re-encoding, symmetric with decoding.
///
/// # Errors
///
/// Returns [`VegabchError::Encode`] for a value with no wire representation:
/// the only such values are non-finite floats, which JSON cannot carry.
///
/// # Example
///
/// ```
/// use vegabch_protocol::wire::encode;
/// use vegabch_protocol::value::Value;
/// use serde_json::json;
///
/// let envelope = encode(&Value::Int(42)).unwrap();
/// assert_eq!(serde_json::to_value(&envelope).unwrap(),
///            json!({"type": "bigint", "payload": "42"}));
/// ```
pub fn encode(value: &Value) -> Result<Envelope> {
    match value {
        Value::Array(items) => {
            let encoded = items
                .iter()
                .map(encode_nested)
                .collect::<Result<Vec<_>>>()?;
            Ok(Envelope::new(TAG_ARRAY, JsonValue::Array(encoded)))
        }
        Value::Date(date) => Ok(Envelope::new(
            TAG_DATE,
            JsonValue::from(date.timestamp_millis()),
        )),
        Value::Object(object) => {
            let mut members = JsonMap::new();
            for (key, nested) in object.items() {
                members.insert(key.to_owned(), encode_nested(nested)?);
            }
            Ok(Envelope::new(TAG_OBJECT, JsonValue::Object(members)))
        }
        Value::Bytes(bytes) => Ok(Envelope::new(
            TAG_UINT8ARRAY,
            JsonValue::String(hex::encode(bytes)),
        )),
        Value::Exception(exception) => {
            let mut payload = JsonMap::new();
            payload.insert("name".to_owned(), JsonValue::String(exception.name.clone()));
            payload.insert(
                "message".to_owned(),
                JsonValue::String(exception.message.clone()),
            );
            payload.insert("payload".to_owned(), exception.payload.clone());
            Ok(Envelope::new(TAG_EXCEPTION, JsonValue::Object(payload)))
        }
        Value::Fault(fault) => {
            let mut payload = JsonMap::new();
            payload.insert(
                "message".to_owned(),
                JsonValue::String(fault.message.clone()),
            );
            Ok(Envelope::new(TAG_ERROR, JsonValue::Object(payload)))
        }
        Value::Null => Ok(Envelope::new(TAG_NULL, JsonValue::Null)),
        Value::Int(i) => Ok(Envelope::new(TAG_BIGINT, JsonValue::String(i.to_string()))),
        Value::Float(x) => serde_json::Number::from_f64(*x)
            .map(|n| Envelope::new(TAG_NUMBER, JsonValue::Number(n)))
            .ok_or_else(|| {
                VegabchError::Encode(format!("number {} has no JSON representation", x))
            }),
        Value::String(s) => Ok(Envelope::new(TAG_STRING, JsonValue::String(s.clone()))),
        Value::Bool(b) => Ok(Envelope::new(TAG_BOOLEAN, JsonValue::Bool(*b))),
    }
}

/// Encode a value into the JSON form a nested envelope takes on the wire.
fn encode_nested(value: &Value) -> Result<JsonValue> {
    let envelope = encode(value)?;
    Ok(serde_json::to_value(envelope)?)
}
