//! PER (Packed Encoding Rules) encoder and decoder for T.125 MCS
//!
//! T.125 connect PDUs use a small, aligned subset of ASN.1 PER. Every value
//! this module handles is byte-aligned; no bit-level packing crosses a byte
//! boundary.
//!
//! # Wire Formats
//!
//! All multi-byte integers are big-endian.
//!
//! | Value              | Encoding                                          |
//! |--------------------|---------------------------------------------------|
//! | Length             | 1 byte (≤ 0x7F) or 2 bytes (bit 15 set, 15 bits)  |
//! | Constrained integer| Length(1, 2 or 4) + that many bytes               |
//! | NumericString      | Length(m) + digits packed two per byte            |
//! | OCTET STRING       | Length(m) + `min + m` raw bytes                   |
//! | OBJECT IDENTIFIER  | Length(5) + 5 bytes, first byte holds two nibbles |
//! | Choice, selection, enumerated, padding, set count | 1 raw byte         |
//!
//! For size-constrained strings the length field carries only the excess
//! over the agreed minimum.
//!
//! # Streams
//!
//! [`PerEncoder`] writes to any [`std::io::Write`] and [`PerDecoder`] reads
//! from any [`std::io::Read`]. Both are stateless apart from the stream they
//! own, so separate streams can be processed on separate threads.

pub mod encoder;
pub mod decoder;
pub mod types;

pub use encoder::PerEncoder;
pub use decoder::PerDecoder;
pub use types::{IntegerWidth, PerLength, MAX_LENGTH};
