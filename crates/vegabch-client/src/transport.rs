//! Transport Layer
//!
//! The invocation layer only needs one capability from its transport: send
//! one JSON body to the authenticated endpoint, hand back the JSON body of
//! the response. [`Transport`] is that seam; [`HttpTransport`] is the
//! production implementation over blocking HTTP POST.
//!
//! Transport failures (connection errors, non-2xx statuses, bodies that are
//! not JSON) surface as [`VegabchError::Transport`] and are never
//! reinterpreted by the layers above. Retries, timeouts, and TLS policy all
//! belong here or below, not in the invocation layer.

use serde_json::Value as JsonValue;
use vegabch_protocol::{Result, VegabchError};

use crate::auth::Credentials;

/// A blocking request/response exchange with the daemon.
///
/// Implementations must be safe to share across threads if callers invoke
/// concurrently; the codec above this seam is pure and imposes nothing.
pub trait Transport {
    /// Send one request body and return the parsed response body.
    fn roundtrip(&self, body: &JsonValue) -> Result<JsonValue>;
}

/// HTTP transport: one authenticated POST per call.
///
/// Sends `Content-Type: application/json` and HTTP Basic credentials on
/// every request.
pub struct HttpTransport {
    endpoint: String,
    credentials: Credentials,
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Build a transport for the given endpoint.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vegabch_client::{Credentials, HttpTransport};
    ///
    /// let transport = HttpTransport::new(
    ///     "http://127.0.0.1:8765/rpc",
    ///     Credentials::new("alice", "hunter2"),
    /// ).unwrap();
    /// ```
    pub fn new(endpoint: impl Into<String>, credentials: Credentials) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| VegabchError::Transport(e.to_string()))?;
        Ok(Self {
            endpoint: endpoint.into(),
            credentials,
            client,
        })
    }

    /// The endpoint this transport posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    fn roundtrip(&self, body: &JsonValue) -> Result<JsonValue> {
        let response = self
            .client
            .post(&self.endpoint)
            .basic_auth(self.credentials.username(), Some(self.credentials.password()))
            .json(body)
            .send()
            .map_err(|e| VegabchError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| VegabchError::Transport(e.to_string()))?;
        response
            .json()
            .map_err(|e| VegabchError::Transport(e.to_string()))
    }
}
