use tracing::{debug, trace};

use vegabch_protocol::{decode, encode, Envelope, Result, Value, VegabchError};

use crate::auth::Credentials;
use crate::transport::{HttpTransport, Transport};

/// RPC client for the VegaBCH wallet daemon.
///
/// Each [`invoke`](VegabchClient::invoke) is one blocking round-trip: the
/// call tuple is encoded as an `array` envelope, posted to the endpoint, and
/// the `[error, result]` response is resolved to a return value or an error.
/// The client holds no per-call state, so a shared reference can be used
/// from multiple threads as long as the transport allows it.
pub struct VegabchClient<T = HttpTransport> {
    transport: T,
}

impl VegabchClient<HttpTransport> {
    /// Create a client posting to the given endpoint with Basic credentials.
    pub fn new(endpoint: impl Into<String>, credentials: Credentials) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(endpoint, credentials)?,
        })
    }
}

impl<T: Transport> VegabchClient<T> {
    /// Create a client over any transport implementation.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// The transport behind this client.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Call a remote method.
    ///
    /// The request is the tuple `(method, args...)` encoded as a single
    /// `array` envelope. The response must decode to a two-element
    /// `[error, result]` sequence: a null error slot yields the result, an
    /// error slot carrying one of the two remote error kinds is returned as
    /// the matching [`VegabchError`] variant. A response that decodes but
    /// does not fit that shape is [`VegabchError::InvalidResponse`].
    ///
    /// There are no retries and no timeout handling here; transport
    /// failures pass through unchanged.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vegabch_client::{Credentials, VegabchClient};
    ///
    /// let client = VegabchClient::new(
    ///     "http://127.0.0.1:8765/rpc",
    ///     Credentials::new("alice", "hunter2"),
    /// ).unwrap();
    ///
    /// let wallets = client.invoke("wallet.list", vec![]).unwrap();
    /// println!("wallets: {}", wallets);
    /// ```
    pub fn invoke(&self, method: impl Into<String>, args: Vec<Value>) -> Result<Value> {
        let method = method.into();

        let mut call = Vec::with_capacity(args.len() + 1);
        call.push(Value::String(method.clone()));
        call.extend(args);
        let request = serde_json::to_value(encode(&Value::Array(call))?)?;

        debug!("Invoking remote method: {}", method);
        trace!("Request body: {}", request);
        let response = self.transport.roundtrip(&request)?;
        trace!("Response body: {}", response);

        let envelope: Envelope = serde_json::from_value(response)?;
        let mut pair = match decode(&envelope)? {
            Value::Array(items) => items,
            other => {
                return Err(VegabchError::InvalidResponse(format!(
                    "expected an [error, result] pair, got {}",
                    other
                )))
            }
        };
        if pair.len() != 2 {
            return Err(VegabchError::InvalidResponse(format!(
                "expected 2 response elements, got {}",
                pair.len()
            )));
        }
        let result = pair.pop().unwrap_or(Value::Null);
        let error = pair.pop().unwrap_or(Value::Null);

        match error {
            Value::Null => Ok(result),
            Value::Exception(exception) => {
                debug!("Method '{}' raised {}: {}", method, exception.name, exception.message);
                Err(VegabchError::Exception(exception))
            }
            Value::Fault(fault) => {
                debug!("Protocol error from '{}': {}", method, fault.message);
                Err(VegabchError::Remote(fault))
            }
            other => Err(VegabchError::InvalidResponse(format!(
                "error slot does not carry an error value: {}",
                other
            ))),
        }
    }
}
