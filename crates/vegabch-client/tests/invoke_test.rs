//! End-to-end invocation tests over a mock transport.
//!
//! These drive the full path a real call takes (encode the call tuple,
//! round-trip a JSON body, decode the `[error, result]` response) with the
//! transport seam swapped for a canned daemon.

use serde_json::{json, Value as JsonValue};
use std::cell::RefCell;

use vegabch_client::{Transport, VegabchClient};
use vegabch_protocol::{Result, Value, VegabchError};

struct CannedDaemon {
    response: JsonValue,
    requests: RefCell<Vec<JsonValue>>,
}

impl CannedDaemon {
    fn replying(response: JsonValue) -> Self {
        Self {
            response,
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for CannedDaemon {
    fn roundtrip(&self, body: &JsonValue) -> Result<JsonValue> {
        self.requests.borrow_mut().push(body.clone());
        Ok(self.response.clone())
    }
}

#[test]
fn test_wallet_list_round_trip() {
    // Two wallets, each an object whose key order must survive decoding.
    let daemon = CannedDaemon::replying(json!({
        "type": "array",
        "payload": [
            {"type": "null", "payload": null},
            {"type": "array", "payload": [
                {"type": "object", "payload": {
                    "name": {"type": "string", "payload": "a"},
                    "type": {"type": "string", "payload": "hd"},
                }},
                {"type": "object", "payload": {
                    "name": {"type": "string", "payload": "b"},
                    "type": {"type": "string", "payload": "watch"},
                }},
            ]},
        ],
    }));
    let client = VegabchClient::with_transport(daemon);

    let wallets = client.invoke("wallet.list", vec![]).unwrap();

    // The request is the encoded one-element call tuple.
    assert_eq!(
        *client_requests(&client),
        [json!({
            "type": "array",
            "payload": [{"type": "string", "payload": "wallet.list"}],
        })]
    );

    let wallets = wallets.as_array().unwrap();
    assert_eq!(wallets.len(), 2);

    let first = wallets[0].as_object().unwrap();
    assert_eq!(first.keys().collect::<Vec<_>>(), ["name", "type"]);
    assert_eq!(first.get("name"), Some(&Value::String("a".into())));
    assert_eq!(first.get("type"), Some(&Value::String("hd".into())));

    let second = wallets[1].as_object().unwrap();
    assert_eq!(second.get("name"), Some(&Value::String("b".into())));
}

#[test]
fn test_arguments_of_every_kind_reach_the_wire() {
    let daemon = CannedDaemon::replying(json!({
        "type": "array",
        "payload": [{"type": "null", "payload": null}, {"type": "boolean", "payload": true}],
    }));
    let client = VegabchClient::with_transport(daemon);

    client
        .invoke(
            "wallet.send",
            vec![
                Value::from("savings"),
                Value::from(100_000u64),
                Value::Bytes(vec![0xca, 0xfe]),
            ],
        )
        .unwrap();

    assert_eq!(
        *client_requests(&client),
        [json!({
            "type": "array",
            "payload": [
                {"type": "string", "payload": "wallet.send"},
                {"type": "string", "payload": "savings"},
                {"type": "bigint", "payload": "100000"},
                {"type": "uint8array", "payload": "cafe"},
            ],
        })]
    );
}

#[test]
fn test_remote_exception_keeps_its_structured_payload() {
    let daemon = CannedDaemon::replying(json!({
        "type": "array",
        "payload": [
            {"type": "exception", "payload": {
                "name": "WalletNotFound",
                "message": "no wallet named 'x'",
                "payload": {"requested": "x", "known": ["a", "b"]},
            }},
            {"type": "null", "payload": null},
        ],
    }));
    let client = VegabchClient::with_transport(daemon);

    match client.invoke("wallet.balance", vec![Value::from("x")]) {
        Err(VegabchError::Exception(exception)) => {
            assert_eq!(exception.name, "WalletNotFound");
            assert_eq!(exception.message, "no wallet named 'x'");
            assert_eq!(
                exception.payload,
                json!({"requested": "x", "known": ["a", "b"]})
            );
        }
        other => panic!("expected a remote exception, got {:?}", other),
    }
}

#[test]
fn test_protocol_error_carries_only_a_message() {
    let daemon = CannedDaemon::replying(json!({
        "type": "array",
        "payload": [
            {"type": "error", "payload": {"message": "daemon restarting"}},
            {"type": "null", "payload": null},
        ],
    }));
    let client = VegabchClient::with_transport(daemon);

    match client.invoke("wallet.list", vec![]) {
        Err(VegabchError::Remote(fault)) => assert_eq!(fault.message, "daemon restarting"),
        other => panic!("expected a protocol error, got {:?}", other),
    }
}

#[test]
fn test_decode_failure_in_the_response_is_a_decode_error() {
    let daemon = CannedDaemon::replying(json!({
        "type": "array",
        "payload": [
            {"type": "null", "payload": null},
            {"type": "mystery", "payload": 1},
        ],
    }));
    let client = VegabchClient::with_transport(daemon);

    assert!(matches!(
        client.invoke("wallet.list", vec![]).unwrap_err(),
        VegabchError::Decode(_)
    ));
}

fn client_requests(client: &VegabchClient<CannedDaemon>) -> std::cell::Ref<'_, Vec<JsonValue>> {
    client.transport().requests.borrow()
}
