//! VegaBCH RPC Client
//!
//! Blocking client for the VegaBCH wallet daemon's RPC interface. A call is
//! one authenticated HTTP POST: the method name and arguments travel as a
//! single tagged `array` envelope, and the response resolves to either the
//! decoded result or one of the two remote error kinds.
//!
//! # Components
//!
//! - [`VegabchClient`] - the invocation layer (`invoke(method, args)`)
//! - [`Transport`] / [`HttpTransport`] - the request/response seam and its
//!   blocking HTTP implementation
//! - [`Credentials`] - the Basic-auth carrier attached to every request
//!
//! The wire format itself lives in [`vegabch_protocol`].
//!
//! # Example
//!
//! ```no_run
//! use vegabch_client::{Credentials, VegabchClient};
//!
//! let client = VegabchClient::new(
//!     "http://127.0.0.1:8765/rpc",
//!     Credentials::new("alice", "hunter2"),
//! ).unwrap();
//!
//! for wallet in client.invoke("wallet.list", vec![]).unwrap().as_array().unwrap() {
//!     println!("- {}", wallet);
//! }
//! ```

pub mod auth;
pub mod client;
pub mod transport;

pub use auth::Credentials;
pub use client::VegabchClient;
pub use transport::{HttpTransport, Transport};
