//! Tagged Envelope Wire Format
//!
//! Every value crossing the wire travels as a self-describing JSON envelope
//! `{"type": <tag>, "payload": <tag-specific shape>}`. The tag set is fixed
//! and flat; there is no user-defined type registration.
//!
//! # Components
//!
//! - [`Envelope`] - the serde-backed wire unit and the tag constants
//! - [`decode`] - recursive envelope -> [`crate::value::Value`] conversion
//! - [`encode`] - recursive [`crate::value::Value`] -> envelope conversion
//!
//! Both directions are pure functions; nothing is shared between calls, so
//! concurrent use needs no coordination.

pub mod decode;
pub mod encode;
pub mod envelope;

pub use decode::decode;
pub use encode::encode;
pub use envelope::Envelope;
