//! ASN.1 PER primitive codec for the T.125 MCS layer
//!
//! This crate encodes and decodes the PER primitives used by the MCS
//! connect PDUs of a remote-desktop handshake: lengths, constrained
//! integers, numeric strings, octet strings, object identifiers and the
//! single-byte choice / selection / enumerated / padding / set-count fields.
//!
//! The codec does not own a connection. Callers hand it a byte sink or
//! source and drive the PDU structure themselves.

pub mod constants;
pub mod per;

pub use t125_core::{DiagnosticSink, McsError, McsResult, ObjectIdentifier};
pub use per::{IntegerWidth, PerDecoder, PerEncoder, PerLength};
