//! VegaBCH Wire Protocol
//!
//! This crate provides the tagged value exchange protocol spoken by the
//! VegaBCH wallet daemon: a self-describing JSON envelope format that lets
//! two runtimes with different native type systems exchange structured
//! values without losing type identity.
//!
//! # Overview
//!
//! Every value crosses the wire as `{"type": <tag>, "payload": ...}`. The
//! daemon's runtime distinguishes wide integers, byte buffers, dates, and
//! two absence values; this crate maps each tag onto a native [`Value`]
//! kind and back, recursively, with object key order preserved end to end.
//!
//! # Components
//!
//! - [`value`] - the decoded value model and the insertion-ordered object
//!   container
//! - [`wire`] - the envelope format and the recursive encode/decode codec
//! - [`error`] - the shared error taxonomy, including the two remote error
//!   kinds a response may carry
//!
//! # Example
//!
//! ```
//! use vegabch_protocol::{decode, encode, Value};
//!
//! let envelope = encode(&Value::Int(42)).unwrap();
//! assert_eq!(envelope.kind, "bigint");
//! assert_eq!(decode(&envelope).unwrap(), Value::Int(42));
//! ```

pub mod error;
pub mod value;
pub mod wire;

pub use error::{RemoteException, RemoteProtocolError, Result, VegabchError};
pub use value::{Object, Value};
pub use wire::{decode, encode, Envelope};
