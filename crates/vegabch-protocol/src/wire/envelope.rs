use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// Wire tag strings. Case-sensitive; nothing else is recognized.
/// 64-bit floating-point number
pub const TAG_NUMBER: &str = "number";
/// UTF-8 string
pub const TAG_STRING: &str = "string";
/// Boolean
pub const TAG_BOOLEAN: &str = "boolean";
/// String-keyed mapping of nested envelopes, key order significant
pub const TAG_OBJECT: &str = "object";
/// Ordered sequence of nested envelopes
pub const TAG_ARRAY: &str = "array";
/// Milliseconds since the Unix epoch
pub const TAG_DATE: &str = "date";
/// Wide integer as a decimal string
pub const TAG_BIGINT: &str = "bigint";
/// Byte string as lowercase hex
pub const TAG_UINT8ARRAY: &str = "uint8array";
/// Explicit absence
pub const TAG_NULL: &str = "null";
/// The remote runtime's other absence; decodes the same as `null`
pub const TAG_UNDEFINED: &str = "undefined";
/// Remote application exception with `{name, message, payload}`
pub const TAG_EXCEPTION: &str = "exception";
/// Remote protocol error with `{message}`
pub const TAG_ERROR: &str = "error";

/// The `{type, payload}` wire unit carrying one typed value.
///
/// The tag stays a plain string so that an unrecognized tag surfaces as a
/// codec error naming the tag, not as a parse failure of the whole body.
/// The payload's shape is fully determined by the tag; [`crate::wire::decode`]
/// enforces it per tag.
///
/// # Example
///
/// ```
/// use vegabch_protocol::wire::Envelope;
/// use serde_json::json;
///
/// let envelope: Envelope =
///     serde_json::from_value(json!({"type": "bigint", "payload": "42"})).unwrap();
/// assert_eq!(envelope.kind, "bigint");
/// assert_eq!(envelope.payload, json!("42"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope {
    /// Tag selecting how `payload` is interpreted
    #[serde(rename = "type")]
    pub kind: String,
    /// Tag-specific payload; absent payloads read as JSON null
    #[serde(default)]
    pub payload: JsonValue,
}

impl Envelope {
    pub fn new(kind: impl Into<String>, payload: JsonValue) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }
}
