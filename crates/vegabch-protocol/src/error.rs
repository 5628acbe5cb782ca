use serde_json::Value as JsonValue;
use thiserror::Error;

/// A structured exception raised by a remote method.
///
/// Carries the exception's name, human-readable message, and an arbitrary
/// JSON payload for programmatic handling. Exceptions travel the wire in
/// both directions, so this type doubles as a decodable value.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{name}: {message}")]
pub struct RemoteException {
    /// Exception name as reported by the remote side
    pub name: String,
    /// Human-readable message
    pub message: String,
    /// Structured payload, passed through the codec as raw JSON
    pub payload: JsonValue,
}

impl RemoteException {
    pub fn new(name: impl Into<String>, message: impl Into<String>, payload: JsonValue) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            payload,
        }
    }
}

/// A protocol-level failure reported by the remote side.
///
/// Unlike [`RemoteException`] it carries no structured payload, only a message.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct RemoteProtocolError {
    /// Human-readable message
    pub message: String,
}

impl RemoteProtocolError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum VegabchError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Remote exception: {0}")]
    Exception(#[from] RemoteException),

    #[error("Remote error: {0}")]
    Remote(#[from] RemoteProtocolError),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, VegabchError>;
