//! T.125 MCS PER codec
//!
//! This library encodes and decodes the ASN.1 PER primitives used in the
//! MCS connect sequence of a remote-desktop handshake.
//!
//! # Architecture
//!
//! - `t125-core`: error type, diagnostic sink, object identifier
//! - `t125-per`: PER primitive encoder and decoder, protocol constants
//!
//! # Usage
//!
//! ```
//! use t125::per::{PerDecoder, PerEncoder};
//! use t125::constants::T124_02_98_OID;
//!
//! let mut encoder = PerEncoder::new();
//! encoder.encode_choice(0)?;
//! encoder.encode_object_identifier(&T124_02_98_OID)?;
//! let encoded = encoder.into_bytes();
//!
//! let mut decoder = PerDecoder::new(&encoded[..]);
//! assert_eq!(decoder.decode_choice(), 0);
//! decoder.expect_object_identifier(&T124_02_98_OID)?;
//! # Ok::<(), t125::McsError>(())
//! ```

// Re-export core types
pub use t125_core::{
    DiagnosticSink, Level, LogSink, McsError, McsResult, NoopSink, ObjectIdentifier,
};

// Re-export codec API
pub mod per {
    pub use t125_per::per::*;
}

pub mod constants {
    pub use t125_per::constants::*;
}
